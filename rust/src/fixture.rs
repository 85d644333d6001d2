use crate::point::{initialize, move_by, Point};
use serde::Serialize;

/// Arguments for one run of the driver.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub direct: (i32, i32),
    pub init: (i32, i32),
    pub delta: (i32, i32),
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            direct: (128, 65536),
            init: (16, 32),
            delta: (32, 16),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Action {
    Declare,
    AssignFields { x: i32, y: i32 },
    Initialize { x: i32, y: i32 },
    Move { dx: i32, dy: i32 },
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub action: Action,
    pub point: Point,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub steps: Vec<Step>,
    pub result: i32,
    pub exit_code: u8,
}

/// Truncate a result to the 0..=255 range a POSIX exit status can carry.
pub fn exit_code(value: i32) -> u8 {
    (value & 0xff) as u8
}

/// Run the fixture exactly: direct writes, init(16, 32), move(32, 16).
pub fn run() -> Trace {
    run_with(Scenario::default())
}

pub fn run_with(scenario: Scenario) -> Trace {
    let mut steps = Vec::with_capacity(4);

    let mut point = Point::default();
    steps.push(Step {
        action: Action::Declare,
        point,
    });

    // Raw field writes, later overwritten by initialize
    let (x, y) = scenario.direct;
    point.x = x;
    point.y = y;
    steps.push(Step {
        action: Action::AssignFields { x, y },
        point,
    });

    let (x, y) = scenario.init;
    initialize(&mut point, x, y);
    steps.push(Step {
        action: Action::Initialize { x, y },
        point,
    });

    let (dx, dy) = scenario.delta;
    move_by(&mut point, dx, dy);
    steps.push(Step {
        action: Action::Move { dx, dy },
        point,
    });

    Trace {
        steps,
        result: point.x,
        exit_code: exit_code(point.x),
    }
}
