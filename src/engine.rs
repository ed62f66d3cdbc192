use egui_sfml::SfEgui;
use egui_sfml::egui;

use legion::*;
use log::info;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sfml::audio::{Music, SoundSource};
use sfml::{graphics::*, system::*, window::*};

use glam::DVec2;

use crate::components::*;
use crate::config::{ScreenConfig, SpawnConfig};
use crate::renderer;
use crate::road;
use crate::systems as sys;

/// Horizontal speed of the bike, pixels per frame.
const PLAYER_SPEED: f64 = 4.0;

/// Distance of the bike's top edge from the bottom of the screen.
const PLAYER_Y_OFFSET: f64 = 40.0;

pub fn run(screen: ScreenConfig, spawn: SpawnConfig) {
    // assets; missing files are fatal here, before the window opens
    let bike_texture = Texture::from_file("bike.png").unwrap();
    let barrel_image = renderer::solid_square(Obstacle::FULL_SIZE as u32, Color::RED);
    let barrel_texture = Texture::from_image(
        &barrel_image,
        Rect::new(0, 0, Obstacle::FULL_SIZE as i32, Obstacle::FULL_SIZE as i32),
    )
    .unwrap();

    let mut music = Music::from_file("chiptune.ogg").unwrap();
    music.set_looping(true);
    music.set_volume(50.0);
    music.play();

    let mut window = RenderWindow::new(
        (screen.width * screen.scale, screen.height * screen.scale),
        "Retro Racer",
        Style::CLOSE,
        &ContextSettings::default(),
    )
    .unwrap();

    window.set_framerate_limit(screen.fps);

    // the frame is composed at the low logical resolution and upscaled on
    // present, which keeps the chunky pixel look
    let mut frame = RenderTexture::new(screen.width, screen.height).unwrap();

    let mut sfegui = SfEgui::new(&window);

    let mut world = World::default();
    let mut resources = Resources::default();

    let bike_size = bike_texture.size();
    world.push((
        Player {
            speed: PLAYER_SPEED,
            size: DVec2::new(bike_size.x as f64, bike_size.y as f64),
        },
        Position(DVec2::new(
            screen.center_x(),
            screen.height as f64 - PLAYER_Y_OFFSET,
        )),
    ));

    resources.insert(screen);
    resources.insert(spawn);
    resources.insert(InputState::default());
    resources.insert(GamePhase::Running);
    resources.insert(StdRng::from_entropy());

    let mut schedule = build_schedule();

    let mut bike = Sprite::with_texture(&bike_texture);
    let mut barrel = Sprite::with_texture(&barrel_texture);

    let sky = Color::rgb(135, 206, 235);

    let mut clock = Clock::start().unwrap();

    while window.is_open() {
        let dt = clock.restart();

        while let Some(event) = window.poll_event() {
            sfegui.add_event(&event);
            match event {
                // quit tears the process down right away, without a
                // game-over frame
                Event::Closed
                | Event::KeyPressed {
                    code: Key::Escape, ..
                } => {
                    window.close();
                    return;
                }

                _ => {}
            }
        }

        {
            let mut input = resources.get_mut::<InputState>().unwrap();
            input.left = Key::Left.is_pressed();
            input.right = Key::Right.is_pressed();
        }

        advance_frame(&mut world, &mut resources, &mut schedule);

        frame.clear(sky);
        road::draw(&mut frame, &screen);

        <(&Player, &Position)>::query().iter(&world).for_each(
            |(_, Position(DVec2 { x, y }))| {
                bike.set_position((*x as f32, *y as f32));
                frame.draw(&bike);
            },
        );

        <(&Obstacle, &Position)>::query().iter(&world).for_each(
            |(obstacle, Position(DVec2 { x, y }))| {
                let scale = (obstacle.size / Obstacle::FULL_SIZE) as f32;
                barrel.set_scale((scale, scale));
                barrel.set_position((
                    (*x - obstacle.size / 2.0) as f32,
                    (*y - obstacle.size / 2.0) as f32,
                ));

                frame.draw(&barrel);
            },
        );

        frame.display();

        {
            let mut upscaled = Sprite::with_texture(frame.texture());
            upscaled.set_scale((screen.scale as f32, screen.scale as f32));
            window.draw(&upscaled);
        }

        let fps = 1.0 / dt.as_seconds();
        let num_obstacles = <&Obstacle>::query().iter(&world).count();

        let di = sfegui
            .run(&mut window, |_rw, ctx| {
                egui::Window::new("Info")
                    .default_pos((10.0, 10.0))
                    .collapsible(true)
                    .resizable(false)
                    .show(ctx, |ui| {
                        ui.label(format!("FPS: {fps:.0}"));
                        ui.label(format!("Obstacles: {num_obstacles}"));
                    });
            })
            .unwrap();

        sfegui.draw(di, &mut window, None);

        window.display();

        // the collision frame is still presented before the loop stops
        if *resources.get::<GamePhase>().unwrap() == GamePhase::GameOver {
            info!("game over");
            window.close();
        }
    }
}

pub fn build_schedule() -> Schedule {
    Schedule::builder()
        .add_system(sys::steer_player_system())
        .add_system(sys::update_obstacles_system())
        .flush()
        .add_system(sys::detect_collisions_system())
        .build()
}

/// One simulation step: spawn trial, movement and perspective update,
/// collision check, then off-screen pruning. Rendering is not involved, so
/// tests can drive this headless.
pub fn advance_frame(world: &mut World, resources: &mut Resources, schedule: &mut Schedule) {
    let screen = *resources.get::<ScreenConfig>().unwrap();
    let spawn = *resources.get::<SpawnConfig>().unwrap();

    let spawned = {
        let mut rng = resources.get_mut::<StdRng>().unwrap();

        if rng.gen_range(0..100u32) < spawn.chance {
            Some(rng.gen_range(-0.5..=0.5))
        } else {
            None
        }
    };

    if let Some(road_offset) = spawned {
        world.push((
            Obstacle {
                fall_speed: spawn.fall_speed,
                road_offset,
                size: 1.0,
            },
            Position(DVec2::new(screen.center_x(), screen.horizon())),
        ));
    }

    schedule.execute(world, resources);

    // two passes: a read-only scan over the current set, then the removals,
    // so pruning never iterates a collection it is mutating
    let mut doomed = Vec::new();
    let mut query = <(Entity, &Obstacle, &Position)>::query();

    for (entity, obstacle, pos) in query.iter(world) {
        if pos.0.y > screen.height as f64 + obstacle.size {
            doomed.push(*entity);
        }
    }

    for entity in doomed {
        world.remove(entity);
    }
}
