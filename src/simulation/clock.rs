/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use std::time::Duration;

/***************************************/
/*             Public API              */
/***************************************/
/// Paces the frames of a simulation run.
pub trait Clock {
    fn delay(&mut self, duration: Duration);
}

/// Sleeps on a timer channel between frames.
pub struct RealClock;

impl Clock for RealClock {
    fn delay(&mut self, duration: Duration) {
        let _ = cbc::after(duration).recv();
    }
}

/// Returns immediately. Used for headless runs and tests.
pub struct NoDelay;

impl Clock for NoDelay {
    fn delay(&mut self, _duration: Duration) {}
}

/***************************************/
/*             Unit tests              */
/***************************************/
