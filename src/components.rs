use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position(pub DVec2);

/// The player bike. `size` is the sprite extent in low-res pixels and fixes
/// the collision box; the position is the sprite's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    /// Horizontal speed, pixels per frame.
    pub speed: f64,
    pub size: DVec2,
}

/// A barrel falling down the road. The position is the barrel's center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    /// Vertical speed, pixels per frame.
    pub fall_speed: f64,
    /// Lateral position across the road in `[-0.5, 0.5]`, as a fraction of
    /// the road's half-width at the barrel's current row. Sampled once at
    /// spawn.
    pub road_offset: f64,
    /// Current rendered extent. 1 at spawn; recomputed from the row once the
    /// barrel passes the horizon.
    pub size: f64,
}

impl Obstacle {
    /// Native extent of the barrel sprite.
    pub const FULL_SIZE: f64 = 16.0;
}

/// Held direction keys, sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    GameOver,
}
