/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Building, Elevator, FloorIndex};

/**
 * Chooses the floor the elevator should stop at next.
 *
 * An empty elevator heads for the nearest floor with someone waiting. An
 * occupied elevator heads for the destination shared by the most
 * passengers, but stops early at the first floor on the way where
 * someone gets off or, if there is room, someone is waiting.
 *
 * Ties on distance are always resolved upwards. The floor the elevator is
 * on is never a candidate unless there is nowhere else to go, in which case
 * the current floor is returned and the elevator stays put.
 *
 * The returned value is always a valid index into `building.floors`.
 */
pub fn next_stop(building: &Building) -> FloorIndex {
    let current = building.elevator.current_floor;
    let table = DestinationTable::from_elevator(&building.elevator, building.height());

    if building.elevator.is_empty() {
        return nearest_waiting_floor(building).unwrap_or(current);
    }

    match most_requested_floor(&table.frequencies, current) {
        Some(target) => first_opportunity(building, &table, target).unwrap_or(target),
        // Everyone on board is headed for this very floor.
        None => current,
    }
}

/// Onboard passengers counted per destination floor.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationTable {
    pub frequencies: Vec<u8>,
    pub occupants: usize,
}

impl DestinationTable {
    pub fn from_elevator(elevator: &Elevator, height: usize) -> DestinationTable {
        let mut frequencies = vec![0u8; height];
        let mut occupants = 0;

        for destination in elevator.passengers.iter().flatten() {
            frequencies[*destination as usize] += 1;
            occupants += 1;
        }

        DestinationTable {
            frequencies,
            occupants,
        }
    }
}

/// Every other floor ordered by distance from `current`, checking the floor
/// above before the floor below at each distance.
pub fn floors_by_distance(
    current: FloorIndex,
    height: usize,
) -> impl Iterator<Item = FloorIndex> {
    let current = current as usize;
    (1..height)
        .flat_map(move |distance| {
            let up = Some(current + distance).filter(|floor| *floor < height);
            let down = current.checked_sub(distance);
            up.into_iter().chain(down)
        })
        .map(|floor| floor as FloorIndex)
}

/// Floor with the highest passenger count, the nearest one winning a tie.
/// `None` when no floor other than `current` is requested.
pub fn most_requested_floor(frequencies: &[u8], current: FloorIndex) -> Option<FloorIndex> {
    let mut best: Option<(u8, FloorIndex)> = None;

    for floor in floors_by_distance(current, frequencies.len()) {
        let count = frequencies[floor as usize];
        let beats_best = match best {
            Some((max, _)) => count > max,
            None => count > 0,
        };
        if beats_best {
            best = Some((count, floor));
        }
    }

    best.map(|(_, floor)| floor)
}

pub fn nearest_waiting_floor(building: &Building) -> Option<FloorIndex> {
    floors_by_distance(building.elevator.current_floor, building.height())
        .find(|floor| building.floors[*floor as usize].has_waiting())
}

/// Walks from the elevator towards `target` and returns the first floor
/// strictly in between where a passenger alights or one can board.
pub fn first_opportunity(
    building: &Building,
    table: &DestinationTable,
    target: FloorIndex,
) -> Option<FloorIndex> {
    let current = building.elevator.current_floor;
    let has_room = !building.elevator.is_full();

    let path: Vec<FloorIndex> = if target > current {
        (current + 1..target).collect()
    } else {
        (target + 1..current).rev().collect()
    };

    path.into_iter().find(|floor| {
        table.frequencies[*floor as usize] > 0
            || (has_room && building.floors[*floor as usize].has_waiting())
    })
}
