//! Headless прогон локомоции
//!
//! Запускает Bevy App без рендера: пол + персонаж, скриптованный input,
//! 1000 тиков с ручным временем (каждый update = ровно один fixed tick)

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::*;

use slipstream_simulation::{create_headless_app, spawn_character, MoveInput, SimulationPlugin};

fn main() {
    println!("Starting SLIPSTREAM headless locomotion run");

    let mut app = create_headless_app();
    app.add_plugins(SimulationPlugin);
    // Ручное время: детерминированный прогон независимо от wall-clock
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / 60.0,
    )));

    // Пол 50x50m, верхняя грань на y=0
    app.world_mut().spawn((
        Transform::from_xyz(0.0, -0.1, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(25.0, 0.1, 25.0),
    ));

    let player = spawn_character(&mut app.world_mut().commands(), Vec3::new(0.0, 2.0, 0.0));
    app.world_mut().flush();

    // Держим "вперёд" + прыжок весь прогон
    if let Some(mut input) = app.world_mut().get_mut::<MoveInput>(player) {
        input.direction = Vec3::NEG_Z;
        input.jump = true;
    }

    // Прогоняем 1000 тиков симуляции (~16.7 sec при 60Hz)
    for tick in 0..1000 {
        app.update();

        if tick % 100 == 0 {
            if let Some(transform) = app.world().get::<Transform>(player) {
                println!("Tick {}: player at {:?}", tick, transform.translation);
            }
        }
    }

    println!("Simulation complete!");
}
