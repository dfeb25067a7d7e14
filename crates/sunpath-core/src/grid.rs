// File: crates/sunpath-core/src/grid.rs
// Summary: Tick layout for the hour and altitude axes.

/// Hour between two X ticks.
pub const HOUR_TICK_STEP: i32 = 3;
/// Degrees between two Y ticks.
pub const ALTITUDE_TICK_STEP: i32 = 30;

/// One axis tick: the domain value and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Inclusive integer steps from `start` to `end`.
pub fn stepped(start: i32, end: i32, step: i32) -> Vec<i32> {
    if step <= 0 { return vec![start]; }
    (start..=end).step_by(step as usize).collect()
}

/// X ticks at 0, 3, ..., 24 labelled `H:00`.
pub fn hour_ticks() -> Vec<Tick> {
    stepped(0, 24, HOUR_TICK_STEP)
        .into_iter()
        .map(|h| Tick { value: h as f64, label: format!("{h}:00") })
        .collect()
}

/// Y ticks at -90, -60, ..., 90 labelled `D°`.
pub fn altitude_ticks() -> Vec<Tick> {
    stepped(-90, 90, ALTITUDE_TICK_STEP)
        .into_iter()
        .map(|d| Tick { value: d as f64, label: format!("{d}°") })
        .collect()
}
