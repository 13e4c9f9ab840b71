//! Pitch and goal-frame constants.
//!
//! Shot origins live in FIFA 105x68 metre space, restricted to the attacking
//! half (`x >= 52.5`). Goal-mouth points use goal-frame units where the posts
//! span `x in [0, 2]` and the crossbar sits at `y = 0.67`.

pub mod field {
    /// Field length in meters
    pub const LENGTH_M: f64 = 105.0;
    /// Field width in meters
    pub const WIDTH_M: f64 = 68.0;
    /// Halfway line X coordinate (meters)
    pub const HALFWAY_X: f64 = LENGTH_M * 0.5;
    /// Attacking-half length (halfway line to goal line)
    pub const ATTACKING_HALF_M: f64 = LENGTH_M - HALFWAY_X;
}

pub mod goal_frame {
    /// Goal-mouth horizontal extent in frame units
    pub const WIDTH: f64 = 2.0;
    /// Goal-mouth vertical extent in frame units
    pub const HEIGHT: f64 = 0.67;
}

pub mod grid {
    use super::field;

    /// Heat grid columns across the attacking half
    pub const COLS: usize = 10;
    /// Heat grid rows across the pitch width
    pub const ROWS: usize = 10;
    /// Cell width in meters (52.5 / 10 = 5.25)
    pub const CELL_W: f64 = field::ATTACKING_HALF_M / COLS as f64;
    /// Cell height in meters (68 / 10 = 6.8)
    pub const CELL_H: f64 = field::WIDTH_M / ROWS as f64;
}
