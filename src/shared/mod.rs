pub mod error;
pub mod macros;
pub mod structs;
pub mod structs_tests;

pub use error::{Result, SimError};
pub use structs::Building;
pub use structs::DoorStatus;
pub use structs::Elevator;
pub use structs::Floor;
pub use structs::FloorIndex;
