/***************************************/
/*        3rd party libraries          */
/***************************************/
use rand::Rng;
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::BuildingConfig;
use crate::shared::error::{Result, SimError};

/***************************************/
/*             Constants               */
/***************************************/
pub type FloorIndex = u8;

/// Number of passengers that can wait on a single floor.
pub const DEPARTURE_SLOTS: usize = 2;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum DoorStatus {
    Open,
    Closed,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct Floor {
    pub departures: [Option<FloorIndex>; DEPARTURE_SLOTS],
    pub arrivals: u32,
}

impl Floor {
    pub fn has_waiting(&self) -> bool {
        self.departures.iter().any(Option::is_some)
    }

    pub fn waiting_count(&self) -> usize {
        self.departures.iter().flatten().count()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Elevator {
    pub current_floor: FloorIndex,
    pub next_stop: FloorIndex,
    pub passengers: Vec<Option<FloorIndex>>,
}

impl Elevator {
    pub fn new(floor: FloorIndex, capacity: usize) -> Elevator {
        Elevator {
            current_floor: floor,
            next_stop: floor,
            passengers: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.passengers.len()
    }

    pub fn occupants(&self) -> usize {
        self.passengers.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants() == 0
    }

    pub fn is_full(&self) -> bool {
        self.occupants() >= self.capacity()
    }
}

/**
 * Snapshot of the whole building: every floor's waiting passengers and
 * arrival counter plus the single elevator.
 *
 * The simulation driver owns the one instance of this struct and hands
 * the dispatcher a shared reference each step.
 */
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Building {
    pub floors: Vec<Floor>,
    pub elevator: Elevator,
}

impl Building {
    pub fn empty(config: &BuildingConfig) -> Building {
        Building {
            floors: vec![Floor::default(); config.n_floors as usize],
            elevator: Elevator::new(0, config.elevator_capacity as usize),
        }
    }

    /// Elevator on a random floor and every departure slot filled with a
    /// random destination other than the passenger's own floor.
    pub fn random<R: Rng>(config: &BuildingConfig, rng: &mut R) -> Building {
        let mut building = Building::empty(config);
        let n_floors = config.n_floors;

        let start = rng.gen_range(0..n_floors);
        building.elevator.current_floor = start;
        building.elevator.next_stop = start;

        for (floor, state) in building.floors.iter_mut().enumerate() {
            for slot in state.departures.iter_mut() {
                let mut destination = rng.gen_range(0..n_floors);
                while destination as usize == floor {
                    destination = rng.gen_range(0..n_floors);
                }
                *slot = Some(destination);
            }
        }

        building
    }

    pub fn height(&self) -> usize {
        self.floors.len()
    }

    pub fn capacity(&self) -> usize {
        self.elevator.capacity()
    }

    pub fn waiting_count(&self) -> usize {
        self.floors.iter().map(Floor::waiting_count).sum()
    }

    pub fn onboard_count(&self) -> usize {
        self.elevator.occupants()
    }

    pub fn arrived_count(&self) -> usize {
        self.floors.iter().map(|f| f.arrivals as usize).sum()
    }

    pub fn total_passengers(&self) -> usize {
        self.waiting_count() + self.onboard_count() + self.arrived_count()
    }

    pub fn all_arrived(&self) -> bool {
        self.waiting_count() == 0 && self.onboard_count() == 0
    }

    /// Checks the data model invariants. Meant for states that enter the
    /// program from outside, such as scenario files.
    pub fn validate(&self) -> Result<()> {
        let height = self.height();
        if height < 2 {
            return Err(SimError::InvalidBuilding(format!(
                "building needs at least 2 floors, got {}",
                height
            )));
        }
        if height > FloorIndex::MAX as usize {
            return Err(SimError::InvalidBuilding(format!(
                "building has {} floors, at most {} are supported",
                height,
                FloorIndex::MAX
            )));
        }
        if self.capacity() == 0 {
            return Err(SimError::InvalidBuilding(
                "elevator capacity must be positive".to_string(),
            ));
        }

        let in_range = |floor: FloorIndex| (floor as usize) < height;
        if !in_range(self.elevator.current_floor) {
            return Err(SimError::InvalidBuilding(format!(
                "elevator is on floor {} of a {}-floor building",
                self.elevator.current_floor, height
            )));
        }
        if !in_range(self.elevator.next_stop) {
            return Err(SimError::InvalidBuilding(format!(
                "next stop {} is outside the building",
                self.elevator.next_stop
            )));
        }

        for destination in self.elevator.passengers.iter().flatten() {
            if !in_range(*destination) {
                return Err(SimError::InvalidBuilding(format!(
                    "passenger destination {} is outside the building",
                    destination
                )));
            }
        }

        for (floor, state) in self.floors.iter().enumerate() {
            for destination in state.departures.iter().flatten() {
                if !in_range(*destination) {
                    return Err(SimError::InvalidBuilding(format!(
                        "floor {}: destination {} is outside the building",
                        floor, destination
                    )));
                }
                if *destination as usize == floor {
                    return Err(SimError::InvalidBuilding(format!(
                        "floor {}: passenger is already at their destination",
                        floor
                    )));
                }
            }
        }

        Ok(())
    }
}
