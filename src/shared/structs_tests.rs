/*
 * Unit tests for the building state model
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_empty_building
 * - test_random_building_is_valid
 * - test_random_building_is_reproducible
 * - test_passenger_counts
 * - test_validate_rejects_bad_destinations
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod structs_tests {
    use crate::config::BuildingConfig;
    use crate::shared::{Building, SimError};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn five_floors() -> BuildingConfig {
        BuildingConfig {
            n_floors: 5,
            elevator_capacity: 4,
        }
    }

    #[test]
    fn test_empty_building() {
        // Purpose: Verify the shape of a freshly created building

        // Act
        let building = Building::empty(&five_floors());

        // Assert
        assert_eq!(building.height(), 5);
        assert_eq!(building.capacity(), 4);
        assert_eq!(building.total_passengers(), 0);
        assert!(building.elevator.is_empty());
        assert!(building.all_arrived());
        assert!(building.validate().is_ok());
    }

    #[test]
    fn test_random_building_is_valid() {
        // Purpose: Verify that random initial states hold two waiters per floor and no riders

        for seed in 0..100 {
            // Arrange
            let mut rng = SmallRng::seed_from_u64(seed);

            // Act
            let building = Building::random(&five_floors(), &mut rng);

            // Assert
            assert!(building.validate().is_ok(), "seed {}", seed);
            assert_eq!(building.waiting_count(), 10);
            assert_eq!(building.onboard_count(), 0);
            assert_eq!(building.arrived_count(), 0);
            assert_eq!(building.elevator.next_stop, building.elevator.current_floor);
        }
    }

    #[test]
    fn test_random_building_is_reproducible() {
        // Purpose: Verify that the same seed always produces the same building

        // Act
        let first = Building::random(&five_floors(), &mut SmallRng::seed_from_u64(99));
        let second = Building::random(&five_floors(), &mut SmallRng::seed_from_u64(99));

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    fn test_passenger_counts() {
        // Purpose: Verify waiting, onboard and arrived counts add up

        // Arrange
        let mut building = Building::empty(&five_floors());
        building.floors[0].departures = [Some(1), Some(2)];
        building.floors[3].departures[1] = Some(0);
        building.elevator.passengers[1] = Some(4);
        building.floors[4].arrivals = 2;

        // Assert
        assert_eq!(building.waiting_count(), 3);
        assert_eq!(building.onboard_count(), 1);
        assert_eq!(building.arrived_count(), 2);
        assert_eq!(building.total_passengers(), 6);
        assert!(!building.all_arrived());
        assert!(!building.elevator.is_full());
    }

    #[test]
    fn test_validate_rejects_bad_destinations() {
        // Purpose: Verify that out of range and self-referencing destinations are caught

        // Arrange
        let mut out_of_range = Building::empty(&five_floors());
        out_of_range.elevator.passengers[0] = Some(5);

        let mut own_floor = Building::empty(&five_floors());
        own_floor.floors[2].departures[0] = Some(2);

        let mut lost_elevator = Building::empty(&five_floors());
        lost_elevator.elevator.current_floor = 9;

        // Assert
        assert!(matches!(out_of_range.validate(), Err(SimError::InvalidBuilding(_))));
        assert!(matches!(own_floor.validate(), Err(SimError::InvalidBuilding(_))));
        assert!(matches!(lost_elevator.validate(), Err(SimError::InvalidBuilding(_))));
    }
}
