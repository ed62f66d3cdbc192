//! Pseudo-3D road: a strip of trapezoids widening from the horizon to the
//! bottom edge of the screen.

use sfml::graphics::*;
use sfml::system::Vector2f;

use crate::config::ScreenConfig;

/// Row step between segments.
const STEP: u32 = 10;

/// Corner points of the segment whose top edge sits at row `y`, clockwise
/// from the top-left corner.
pub fn segment(screen: &ScreenConfig, y: f64) -> [Vector2f; 4] {
    let half = screen.road_half_width(y) as f32;
    let center = screen.center_x() as f32;
    let y = y as f32;
    let step = STEP as f32;

    [
        Vector2f::new(center - half, y),
        Vector2f::new(center + half, y),
        Vector2f::new(center + half + step, y + step),
        Vector2f::new(center - half - step, y + step),
    ]
}

pub fn draw(target: &mut RenderTexture, screen: &ScreenConfig) {
    let mut quad = ConvexShape::new(4);
    quad.set_fill_color(Color::rgb(50, 50, 50));

    let mut y = screen.horizon() as u32;
    while y < screen.height {
        for (i, point) in segment(screen, y as f64).into_iter().enumerate() {
            quad.set_point(i, point);
        }

        target.draw(&quad);
        y += STEP;
    }
}
