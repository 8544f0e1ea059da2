pub mod clock;
pub mod driver;
pub mod scenario;

pub use clock::{Clock, NoDelay, RealClock};
pub use driver::{Outcome, Simulation};
pub use scenario::load_scenario;
