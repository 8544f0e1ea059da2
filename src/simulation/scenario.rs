/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::BuildingConfig;
use crate::shared::structs::DEPARTURE_SLOTS;
use crate::shared::{Building, FloorIndex, Result, SimError};

/***************************************/
/*       Public data structures        */
/***************************************/
/**
 * Explicit initial state of a building, read from a TOML file.
 *
 * ```toml
 * [elevator]
 * current_floor = 2
 * passengers = [0]
 *
 * [[floors]]
 * departures = [4]
 * ```
 *
 * One `[[floors]]` entry per floor, lowest floor first.
 */
#[derive(Deserialize, Debug, Clone)]
pub struct Scenario {
    pub elevator: ElevatorScenario,
    #[serde(default)]
    pub floors: Vec<FloorScenario>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ElevatorScenario {
    pub current_floor: FloorIndex,
    #[serde(default)]
    pub passengers: Vec<FloorIndex>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct FloorScenario {
    #[serde(default)]
    pub departures: Vec<FloorIndex>,
    #[serde(default)]
    pub arrivals: u32,
}

impl Scenario {
    pub fn into_building(self, config: &BuildingConfig) -> Result<Building> {
        if self.floors.len() != config.n_floors as usize {
            return Err(SimError::InvalidBuilding(format!(
                "scenario describes {} floors, configuration has {}",
                self.floors.len(),
                config.n_floors
            )));
        }
        if self.elevator.passengers.len() > config.elevator_capacity as usize {
            return Err(SimError::InvalidBuilding(format!(
                "{} passengers do not fit in an elevator for {}",
                self.elevator.passengers.len(),
                config.elevator_capacity
            )));
        }

        let mut building = Building::empty(config);
        building.elevator.current_floor = self.elevator.current_floor;
        building.elevator.next_stop = self.elevator.current_floor;
        for (slot, destination) in self.elevator.passengers.into_iter().enumerate() {
            building.elevator.passengers[slot] = Some(destination);
        }

        for (index, floor) in self.floors.into_iter().enumerate() {
            if floor.departures.len() > DEPARTURE_SLOTS {
                return Err(SimError::InvalidBuilding(format!(
                    "floor {} has {} waiting passengers, at most {} fit",
                    index,
                    floor.departures.len(),
                    DEPARTURE_SLOTS
                )));
            }
            let state = &mut building.floors[index];
            for (slot, destination) in floor.departures.into_iter().enumerate() {
                state.departures[slot] = Some(destination);
            }
            state.arrivals = floor.arrivals;
        }

        building.validate()?;
        Ok(building)
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_scenario(scenario_str: &str) -> Result<Scenario> {
    toml::from_str(scenario_str).map_err(SimError::ScenarioParse)
}

pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let scenario_str = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_scenario(&scenario_str)
}

/***************************************/
/*             Unit tests              */
/***************************************/
