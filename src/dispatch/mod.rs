pub mod heuristic;

pub use heuristic::next_stop;
pub use heuristic::DestinationTable;
