//! Startup configuration. Built once in `main` and passed into the engine;
//! the systems read it back out of the legion resource map.

/// Logical screen layout and the perspective geometry derived from it.
///
/// All simulation coordinates are in low-res pixels; the engine upscales the
/// composed frame by `scale` when presenting it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
    /// Integer upscale factor from the low-res frame to the window.
    pub scale: u32,
    /// Target frame rate; per-frame speeds are in pixels per frame at this rate.
    pub fps: u32,
    /// Road half-width at the horizon row.
    pub road_width_top: f64,
    /// Road half-width at the bottom edge of the screen.
    pub road_width_bottom: f64,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 360,
            scale: 3,
            fps: 60,
            road_width_top: 20.0,
            road_width_bottom: 160.0,
        }
    }
}

impl ScreenConfig {
    /// Screen row dividing sky from road.
    pub fn horizon(&self) -> f64 {
        self.height as f64 / 2.0
    }

    pub fn center_x(&self) -> f64 {
        self.width as f64 / 2.0
    }

    /// Half-width of the road at row `y`, linearly interpolated between the
    /// horizon width and the bottom-edge width. Not clamped outside
    /// `[horizon, height]`.
    pub fn road_half_width(&self, y: f64) -> f64 {
        let ratio = (y - self.horizon()) / (self.height as f64 - self.horizon());
        self.road_width_top + ratio * (self.road_width_bottom - self.road_width_top)
    }

    /// Leftmost x the player sprite may occupy.
    pub fn player_min_x(&self) -> f64 {
        self.width as f64 / 4.0
    }

    /// Rightmost x the player sprite may occupy, given the sprite width.
    pub fn player_max_x(&self, sprite_width: f64) -> f64 {
        3.0 * self.width as f64 / 4.0 - sprite_width
    }
}

/// Obstacle spawning parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnConfig {
    /// Percent chance of spawning one obstacle on any given frame.
    pub chance: u32,
    /// Vertical speed of spawned obstacles, pixels per frame.
    pub fall_speed: f64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            chance: 3,
            fall_speed: 3.0,
        }
    }
}
