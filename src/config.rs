/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::warn;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Result, SimError};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub building: BuildingConfig,
    pub simulation: SimulationConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BuildingConfig {
    pub n_floors: u8,
    pub elevator_capacity: u8,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        BuildingConfig {
            n_floors: 5,
            elevator_capacity: 4,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Simulated seconds before the run is declared a failure.
    pub step_budget: u32,
    pub frame_delay_ms: u64,
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            step_budget: 60,
            frame_delay_ms: 1000,
            seed: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.building.n_floors < 2 {
            return Err(SimError::InvalidConfig(format!(
                "n_floors must be at least 2, got {}",
                self.building.n_floors
            )));
        }
        if self.building.elevator_capacity == 0 {
            return Err(SimError::InvalidConfig(
                "elevator_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str).map_err(SimError::ConfigParse)?;
    config.validate()?;
    Ok(config)
}

/// Reads the configuration at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<Config> {
    match fs::read_to_string(path) {
        Ok(config_str) => parse_config(&config_str),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("{} not found, using default configuration", path.display());
            Ok(Config::default())
        }
        Err(source) => Err(SimError::Io {
            path: path.display().to_string(),
            source,
        }),
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        // Purpose: Verify that every field of the configuration file is picked up

        // Arrange
        let config_str = r#"
            [building]
            n_floors = 8
            elevator_capacity = 2

            [simulation]
            step_budget = 120
            frame_delay_ms = 0
            seed = 7
        "#;

        // Act
        let config = parse_config(config_str).unwrap();

        // Assert
        assert_eq!(config.building.n_floors, 8);
        assert_eq!(config.building.elevator_capacity, 2);
        assert_eq!(config.simulation.step_budget, 120);
        assert_eq!(config.simulation.frame_delay_ms, 0);
        assert_eq!(config.simulation.seed, Some(7));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        // Purpose: Verify that omitted tables and keys fall back to the defaults

        // Act
        let config = parse_config("[simulation]\nseed = 3\n").unwrap();

        // Assert
        assert_eq!(config.building, BuildingConfig::default());
        assert_eq!(config.simulation.step_budget, 60);
        assert_eq!(config.simulation.seed, Some(3));
    }

    #[test]
    fn test_reject_single_floor() {
        // Purpose: Verify that a building where nobody can travel is rejected

        // Act
        let result = parse_config("[building]\nn_floors = 1\n");

        // Assert
        assert!(matches!(result, Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_reject_zero_capacity() {
        // Purpose: Verify that an elevator without room is rejected

        // Act
        let result = parse_config("[building]\nelevator_capacity = 0\n");

        // Assert
        assert!(matches!(result, Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_reject_malformed_toml() {
        // Purpose: Verify that syntax errors are reported as parse errors

        // Act
        let result = parse_config("[building\nn_floors = 5");

        // Assert
        assert!(matches!(result, Err(SimError::ConfigParse(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        // Purpose: Verify that running without a configuration file works

        // Act
        let config = load_config(Path::new("does/not/exist/config.toml")).unwrap();

        // Assert
        assert_eq!(config, Config::default());
    }
}
