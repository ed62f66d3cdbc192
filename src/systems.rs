use glam::DVec2;
use legion::world::SubWorld;
use legion::*;

use crate::collision::Aabb;
use crate::components::*;
use crate::config::ScreenConfig;

/// Applies the held direction keys. Both directions may apply on the same
/// frame; x never leaves the playable band of the road.
#[system(for_each)]
pub fn steer_player(
    player: &Player,
    pos: &mut Position,
    #[resource] input: &InputState,
    #[resource] screen: &ScreenConfig,
) {
    if input.left {
        pos.0.x = (pos.0.x - player.speed).max(screen.player_min_x());
    }

    if input.right {
        pos.0.x = (pos.0.x + player.speed).min(screen.player_max_x(player.size.x));
    }
}

/// Moves each barrel down one step and, once it has passed the horizon,
/// recomputes its size and x from the road perspective at its new row.
///
/// `depth` is not clamped: a barrel that falls past the bottom edge grows a
/// few pixels past full size on its final frames before it is pruned.
#[system(for_each)]
pub fn update_obstacles(
    obstacle: &mut Obstacle,
    pos: &mut Position,
    #[resource] screen: &ScreenConfig,
) {
    pos.0.y += obstacle.fall_speed;

    let horizon = screen.horizon();
    if pos.0.y > horizon {
        let depth = (pos.0.y - horizon) / (screen.height as f64 - horizon);
        obstacle.size = (1.0 + depth * (Obstacle::FULL_SIZE - 1.0)).round();
        pos.0.x = screen.center_x() + obstacle.road_offset * screen.road_half_width(pos.0.y);
    }
}

/// Bounding-box test of every barrel against the player, run after all
/// positions have settled for the frame. Any non-empty overlap ends the game.
#[system]
pub fn detect_collisions(
    world: &mut SubWorld,
    players: &mut Query<(&Player, &Position)>,
    obstacles: &mut Query<(&Obstacle, &Position)>,
    #[resource] phase: &mut GamePhase,
) {
    if *phase == GamePhase::GameOver {
        return;
    }

    let player_boxes = players
        .iter(&*world)
        .map(|(player, pos)| Aabb::new(pos.0, player.size))
        .collect::<Vec<_>>();

    for (obstacle, pos) in obstacles.iter(&*world) {
        let barrel = Aabb::centered(pos.0, DVec2::splat(obstacle.size));

        if player_boxes.iter().any(|player| player.intersects(&barrel)) {
            *phase = GamePhase::GameOver;
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player {
            speed: 4.0,
            size: DVec2::new(16.0, 16.0),
        }
    }

    #[test]
    fn steering_left_stops_at_the_road_edge() {
        let screen = ScreenConfig::default();
        let bike = player();
        let mut pos = Position(DVec2::new(screen.center_x(), 320.0));
        let input = InputState {
            left: true,
            right: false,
        };

        for _ in 0..100 {
            steer_player(&bike, &mut pos, &input, &screen);
            assert!(pos.0.x >= screen.player_min_x());
        }

        assert_eq!(pos.0.x, 80.0);
    }

    #[test]
    fn steering_right_stops_at_the_road_edge() {
        let screen = ScreenConfig::default();
        let bike = player();
        let mut pos = Position(DVec2::new(screen.center_x(), 320.0));
        let input = InputState {
            left: false,
            right: true,
        };

        for _ in 0..100 {
            steer_player(&bike, &mut pos, &input, &screen);
            assert!(pos.0.x <= screen.player_max_x(bike.size.x));
        }

        assert_eq!(pos.0.x, 224.0);
    }

    #[test]
    fn both_directions_held_cancel_out() {
        let screen = ScreenConfig::default();
        let bike = player();
        let mut pos = Position(DVec2::new(screen.center_x(), 320.0));
        let input = InputState {
            left: true,
            right: true,
        };

        for _ in 0..10 {
            steer_player(&bike, &mut pos, &input, &screen);
        }

        assert_eq!(pos.0.x, screen.center_x());
    }

    #[test]
    fn barrel_keeps_spawn_size_above_the_horizon() {
        let screen = ScreenConfig::default();
        let mut barrel = Obstacle {
            fall_speed: 3.0,
            road_offset: 0.4,
            size: 1.0,
        };
        let mut pos = Position(DVec2::new(screen.center_x(), 100.0));

        update_obstacles(&mut barrel, &mut pos, &screen);

        assert_eq!(pos.0.y, 103.0);
        assert_eq!(barrel.size, 1.0);
        assert_eq!(pos.0.x, screen.center_x());
    }

    #[test]
    fn barrel_grows_with_road_perspective() {
        let screen = ScreenConfig::default();
        let mut barrel = Obstacle {
            fall_speed: 3.0,
            road_offset: 0.25,
            size: 1.0,
        };
        // lands on y = 270, halfway between horizon and bottom
        let mut pos = Position(DVec2::new(screen.center_x(), 267.0));

        update_obstacles(&mut barrel, &mut pos, &screen);

        assert_eq!(pos.0.y, 270.0);
        assert_eq!(barrel.size, 9.0);
        // road half-width at y = 270 is 20 + 0.5 * 140 = 90
        assert_eq!(pos.0.x, 160.0 + 0.25 * 90.0);
    }

    #[test]
    fn barrel_reaches_full_size_near_the_bottom() {
        let screen = ScreenConfig::default();
        let mut barrel = Obstacle {
            fall_speed: 3.0,
            road_offset: -0.5,
            size: 1.0,
        };
        let mut pos = Position(DVec2::new(screen.center_x(), 354.0));

        update_obstacles(&mut barrel, &mut pos, &screen);

        assert_eq!(pos.0.y, 357.0);
        assert_eq!(barrel.size, 16.0);
        // x approaches center - 0.5 * road_width_bottom
        assert!(pos.0.x < 160.0 - 0.5 * 150.0);
    }

    #[test]
    fn growth_overshoots_past_the_bottom_edge() {
        let screen = ScreenConfig::default();
        let mut barrel = Obstacle {
            fall_speed: 3.0,
            road_offset: 0.0,
            size: 1.0,
        };
        let mut pos = Position(DVec2::new(screen.center_x(), 375.0));

        update_obstacles(&mut barrel, &mut pos, &screen);

        assert!(barrel.size > Obstacle::FULL_SIZE);
    }
}
