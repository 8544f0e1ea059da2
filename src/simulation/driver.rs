/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info, warn};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::SimulationConfig;
use crate::dispatch;
use crate::render::Renderer;
use crate::shared::{Building, DoorStatus, Elevator, FloorIndex, Result};
use crate::simulation::clock::Clock;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum Outcome {
    Success {
        seconds: u32,
        delivered: usize,
        total: usize,
    },
    Timeout {
        seconds: u32,
        delivered: usize,
        total: usize,
    },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success { seconds, total, .. } => write!(
                f,
                "SUCCESS: all {} passengers reached their floor in {} seconds",
                total, seconds
            ),
            Outcome::Timeout {
                seconds,
                delivered,
                total,
            } => write!(
                f,
                "FAIL: ran out of time, {}/{} passengers delivered in {} seconds",
                delivered, total, seconds
            ),
        }
    }
}

/// Passengers moved by one stop.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Boarding {
    pub alighted: usize,
    pub boarded: usize,
}

/// What happened during one call to [`Simulation::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    pub next_stop: FloorIndex,
    pub floor: FloorIndex,
    pub stop: Option<Boarding>,
}

/**
 * Runs one elevator through a building until everyone has arrived or the
 * time budget is spent.
 *
 * Every step asks the dispatcher for the next stop, moves the elevator one
 * floor towards it and, once there, opens the doors to let passengers off
 * and on. Each rendered frame costs one simulated second: a move is one
 * frame, a stop three. The first frame is free, and the reported time
 * counts every frame after it, so a run is scored one second higher than
 * a counter that is read before its own increment.
 *
 * # Fields
 * - `building`:            The state being simulated, owned for the whole run.
 * - `renderer`:            Draws a frame after every change.
 * - `clock`:               Paces the frames.
 * - `step_budget`:         Simulated seconds available.
 * - `frame_delay`:         Wall time each frame stays on screen.
 * - `elapsed`:             Simulated seconds spent so far.
 * - `total_passengers`:    Passenger count at the start, conserved during the run.
 */
pub struct Simulation<R: Renderer, C: Clock> {
    building: Building,
    renderer: R,
    clock: C,
    step_budget: u32,
    frame_delay: Duration,
    elapsed: u32,
    total_passengers: usize,
}

impl<R: Renderer, C: Clock> Simulation<R, C> {
    pub fn new(
        building: Building,
        config: &SimulationConfig,
        renderer: R,
        clock: C,
    ) -> Simulation<R, C> {
        let total_passengers = building.total_passengers();
        Simulation {
            building,
            renderer,
            clock,
            step_budget: config.step_budget,
            frame_delay: Duration::from_millis(config.frame_delay_ms),
            elapsed: 0,
            total_passengers,
        }
    }

    pub fn building(&self) -> &Building {
        &self.building
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn run(&mut self) -> Result<Outcome> {
        info!(
            "Starting simulation: {} floors, {} passengers, elevator on floor {}",
            self.building.height(),
            self.total_passengers,
            self.building.elevator.current_floor
        );

        self.renderer.draw(&self.building, DoorStatus::Closed)?;
        self.clock.delay(self.frame_delay);

        while !self.building.all_arrived() && self.elapsed < self.step_budget {
            self.step()?;
        }

        let outcome = self.outcome();
        if outcome.is_success() {
            info!("{}", outcome);
        } else {
            warn!("{}", outcome);
        }
        Ok(outcome)
    }

    pub fn step(&mut self) -> Result<StepReport> {
        let next_stop = dispatch::next_stop(&self.building);
        self.building.elevator.next_stop = next_stop;

        let from = self.building.elevator.current_floor;
        move_elevator(&mut self.building.elevator);
        debug!(
            "t={}s next stop {}, moved {} -> {}",
            self.elapsed, next_stop, from, self.building.elevator.current_floor
        );
        self.frame(DoorStatus::Closed)?;

        let mut stop = None;
        if self.building.elevator.current_floor == self.building.elevator.next_stop {
            self.frame(DoorStatus::Open)?;
            let boarding = stop_elevator(&mut self.building);
            debug!(
                "t={}s stopped at {}: {} off, {} on",
                self.elapsed,
                self.building.elevator.current_floor,
                boarding.alighted,
                boarding.boarded
            );
            self.frame(DoorStatus::Open)?;
            self.frame(DoorStatus::Closed)?;
            stop = Some(boarding);
        }

        debug_assert_eq!(
            self.building.total_passengers(),
            self.total_passengers,
            "passenger count changed during a step"
        );

        Ok(StepReport {
            next_stop,
            floor: self.building.elevator.current_floor,
            stop,
        })
    }

    pub fn outcome(&self) -> Outcome {
        let delivered = self.building.arrived_count();
        let total = self.total_passengers;
        if self.building.all_arrived() {
            Outcome::Success {
                seconds: self.elapsed,
                delivered,
                total,
            }
        } else {
            Outcome::Timeout {
                seconds: self.elapsed,
                delivered,
                total,
            }
        }
    }

    fn frame(&mut self, doors: DoorStatus) -> Result<()> {
        self.renderer.draw(&self.building, doors)?;
        self.clock.delay(self.frame_delay);
        self.elapsed += 1;
        Ok(())
    }
}

/// Moves the elevator one floor towards its next stop.
pub fn move_elevator(elevator: &mut Elevator) {
    if elevator.next_stop < elevator.current_floor {
        elevator.current_floor -= 1;
    } else if elevator.next_stop > elevator.current_floor {
        elevator.current_floor += 1;
    }
}

/**
 * Opens the doors on the current floor.
 *
 * Riders for this floor get off first and are counted as arrivals. Free
 * seats are then filled, in seat order, from the floor's departure slots.
 */
pub fn stop_elevator(building: &mut Building) -> Boarding {
    let floor = building.elevator.current_floor;
    let mut boarding = Boarding::default();

    for seat in building.elevator.passengers.iter_mut() {
        if *seat == Some(floor) {
            *seat = None;
            building.floors[floor as usize].arrivals += 1;
            boarding.alighted += 1;
        }
    }

    let departures = &mut building.floors[floor as usize].departures;
    for seat in building.elevator.passengers.iter_mut().filter(|seat| seat.is_none()) {
        match departures.iter_mut().find(|slot| slot.is_some()) {
            Some(slot) => {
                *seat = slot.take();
                boarding.boarded += 1;
            }
            None => break,
        }
    }

    boarding
}
