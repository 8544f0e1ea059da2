/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use crossterm::ExecutableCommand;
use std::fmt::Write as _;
use std::io::Write;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Building, DoorStatus, Elevator, Floor, Result};

/***************************************/
/*             Public API              */
/***************************************/
pub trait Renderer {
    fn draw(&mut self, building: &Building, doors: DoorStatus) -> Result<()>;
}

/// Clears the terminal and redraws the whole building for every frame.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> TerminalRenderer<W> {
        TerminalRenderer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, building: &Building, doors: DoorStatus) -> Result<()> {
        self.out.execute(Clear(ClearType::All))?;
        self.out.execute(MoveTo(0, 0))?;
        self.out.write_all(format_building(building, doors).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Draws nothing.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _building: &Building, _doors: DoorStatus) -> Result<()> {
        Ok(())
    }
}

/**
 * Text picture of the building, lowest floor first.
 *
 * ```text
 *           DEPARTURES|     |ARRIVALS
 * FLOOR 0:          4 |     |x
 * FLOOR 1:          03| 4___ |
 * ```
 *
 * Waiting passengers and riders are shown by their destination floor,
 * arrivals as one `x` each. Open doors drop the walls of the car.
 */
pub fn format_building(building: &Building, doors: DoorStatus) -> String {
    let mut frame = String::from("          DEPARTURES|     |ARRIVALS\n");

    for (number, floor) in building.floors.iter().enumerate() {
        frame.push_str(&format_floor(floor, number, &building.elevator, doors));
        frame.push('\n');
    }

    frame
}

fn format_floor(floor: &Floor, number: usize, elevator: &Elevator, doors: DoorStatus) -> String {
    let mut line = format!("FLOOR {}:          ", number);

    for slot in floor.departures.iter() {
        match slot {
            Some(destination) => {
                let _ = write!(line, "{}", destination);
            }
            None => line.push(' '),
        }
    }

    if elevator.current_floor as usize == number {
        line.push_str(&format_elevator(elevator, doors));
    } else {
        line.push_str("|     |");
    }

    line.push_str(&"x".repeat(floor.arrivals as usize));
    line
}

fn format_elevator(elevator: &Elevator, doors: DoorStatus) -> String {
    let (left, right) = match doors {
        DoorStatus::Closed => ("| ", " |"),
        DoorStatus::Open => ("  ", "  "),
    };

    let mut car = String::from(left);
    for slot in elevator.passengers.iter() {
        match slot {
            Some(destination) => {
                let _ = write!(car, "{}", destination);
            }
            None => car.push('_'),
        }
    }
    car.push_str(right);
    car
}
