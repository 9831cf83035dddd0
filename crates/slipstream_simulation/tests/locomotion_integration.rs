//! Locomotion integration tests
//!
//! Headless App + rapier, ручное время (каждый app.update() = ровно один
//! fixed tick). Проверяем:
//! - Классификацию опоры на реальной геометрии (пол / склон / крутая стена)
//! - Искусственную гравитацию в воздухе
//! - Прыжок + cooldown
//! - Debug-reset
//! - Детерминизм (одинаковый input → идентичные snapshots)

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::*;

use slipstream_simulation::{
    create_headless_app, spawn_character, world_snapshot, JumpState, LocomotionConfig, MoveInput,
    ResetIntent, SimulationPlugin, Support,
};

const TICK: f64 = 1.0 / 60.0;

/// Helper: headless App с симуляцией и ручным временем
fn create_locomotion_app() -> App {
    let mut app = create_headless_app();
    app.add_plugins(SimulationPlugin);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        TICK,
    )));
    app
}

/// Helper: пол 50x50m, верхняя грань на y=0
fn spawn_floor(app: &mut App) {
    app.world_mut().spawn((
        Transform::from_xyz(0.0, -0.1, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(25.0, 0.1, 25.0),
    ));
}

/// Helper: наклонная плита (angle_deg вокруг Z), центр в origin
fn spawn_ramp(app: &mut App, angle_deg: f32) {
    app.world_mut().spawn((
        Transform::from_rotation(Quat::from_rotation_z(angle_deg.to_radians())),
        RigidBody::Fixed,
        Collider::cuboid(10.0, 0.5, 10.0),
    ));
}

/// Helper: персонаж + flush команд
fn spawn_player(app: &mut App, position: Vec3) -> Entity {
    let entity = spawn_character(&mut app.world_mut().commands(), position);
    app.world_mut().flush();
    entity
}

fn run_ticks(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.update();
    }
}

#[test]
fn test_grounded_on_flat_floor() {
    let mut app = create_locomotion_app();
    spawn_floor(&mut app);
    let player = spawn_player(&mut app, Vec3::new(0.0, 0.95, 0.0));

    run_ticks(&mut app, 30);

    let support = app.world().get::<Support>(player).unwrap();
    assert_eq!(*support, Support::Grounded);

    // Drag плоской земли
    let config = *app.world().get::<LocomotionConfig>(player).unwrap();
    let damping = app.world().get::<Damping>(player).unwrap();
    assert_eq!(damping.linear_damping, config.ground_drag);
}

#[test]
fn test_airborne_without_floor_falls() {
    let mut app = create_locomotion_app();
    let player = spawn_player(&mut app, Vec3::new(0.0, 5.0, 0.0));

    run_ticks(&mut app, 60); // ~1 секунда

    let support = app.world().get::<Support>(player).unwrap();
    assert_eq!(*support, Support::Airborne);

    // Искусственная гравитация тянет вниз несмотря на GravityScale(0)
    let transform = app.world().get::<Transform>(player).unwrap();
    assert!(
        transform.translation.y < 4.0,
        "y = {} (должен упасть)",
        transform.translation.y
    );

    let config = *app.world().get::<LocomotionConfig>(player).unwrap();
    let damping = app.world().get::<Damping>(player).unwrap();
    assert_eq!(damping.linear_damping, config.air_drag);
}

#[test]
fn test_walkable_ramp_classified_as_slope() {
    let mut app = create_locomotion_app();
    spawn_ramp(&mut app, 30.0); // 30° < max_slope 45°

    // Над наклонной гранью: точка на нормали в 1.4m от центра плиты
    // (капсула не пересекает плиту, raycast до поверхности ~1.04 < 1.3)
    let normal = Vec3::new(
        -(30.0_f32.to_radians().sin()),
        30.0_f32.to_radians().cos(),
        0.0,
    );
    let player = spawn_player(&mut app, normal * 1.4);

    run_ticks(&mut app, 5);

    let support = app.world().get::<Support>(player).unwrap();
    assert!(
        matches!(support, Support::OnSlope { .. }),
        "30° склон -> {:?}",
        support
    );

    let config = *app.world().get::<LocomotionConfig>(player).unwrap();
    let damping = app.world().get::<Damping>(player).unwrap();
    assert_eq!(damping.linear_damping, config.slope_drag);
}

#[test]
fn test_steep_ramp_is_airborne_despite_hit() {
    let mut app = create_locomotion_app();
    spawn_ramp(&mut app, 60.0); // 60° > max_slope 45°

    let normal = Vec3::new(
        -(60.0_f32.to_radians().sin()),
        60.0_f32.to_radians().cos(),
        0.0,
    );
    let player = spawn_player(&mut app, normal * 1.0);

    run_ticks(&mut app, 3);

    // Raycast попадает в поверхность, но опоры для ходьбы нет
    let support = app.world().get::<Support>(player).unwrap();
    assert_eq!(*support, Support::Airborne);
}

#[test]
fn test_jump_fires_only_when_grounded_and_raises_body() {
    let mut app = create_locomotion_app();
    spawn_floor(&mut app);
    let player = spawn_player(&mut app, Vec3::new(0.0, 0.95, 0.0));

    // Дать опуститься и классифицироваться
    run_ticks(&mut app, 20);
    assert_eq!(
        *app.world().get::<Support>(player).unwrap(),
        Support::Grounded
    );
    let start_y = app.world().get::<Transform>(player).unwrap().translation.y;

    // Зажимаем прыжок
    app.world_mut().get_mut::<MoveInput>(player).unwrap().jump = true;

    let mut max_y = start_y;
    let mut saw_upward_velocity = false;
    for _ in 0..40 {
        app.update();
        let transform = app.world().get::<Transform>(player).unwrap();
        max_y = max_y.max(transform.translation.y);
        if app.world().get::<Velocity>(player).unwrap().linvel.y > 1.0 {
            saw_upward_velocity = true;
        }
    }

    assert!(saw_upward_velocity, "импульс прыжка не применился");
    assert!(
        max_y > start_y + 0.5,
        "прыжок не поднял тело: start {} max {}",
        start_y,
        max_y
    );

    // Cooldown взведён после срабатывания (в полёте только убывает)
    let jump = app.world().get::<JumpState>(player).unwrap();
    assert!(jump.cooldown >= 0.0);
}

#[test]
fn test_jump_does_not_fire_airborne() {
    let mut app = create_locomotion_app();
    let player = spawn_player(&mut app, Vec3::new(0.0, 10.0, 0.0));

    app.world_mut().get_mut::<MoveInput>(player).unwrap().jump = true;

    run_ticks(&mut app, 30);

    // В воздухе с зажатым прыжком velocity.y только вниз
    let velocity = app.world().get::<Velocity>(player).unwrap();
    assert!(velocity.linvel.y < 0.0);
}

#[test]
fn test_reset_teleports_and_zeroes_velocity() {
    let mut app = create_locomotion_app();
    let spawn = Vec3::new(0.0, 2.0, 0.0);
    let player = spawn_player(&mut app, spawn);

    // Падаем в сторону от точки спавна
    app.world_mut()
        .get_mut::<MoveInput>(player)
        .unwrap()
        .direction = Vec3::NEG_Z;
    run_ticks(&mut app, 60);

    let before = app.world().get::<Transform>(player).unwrap().translation;
    assert!(before != spawn, "тело должно было сдвинуться");

    // Запрос reset (как клиент по Tab)
    app.world_mut().send_event(ResetIntent { entity: player });
    app.update();

    let transform = app.world().get::<Transform>(player).unwrap();
    let velocity = app.world().get::<Velocity>(player).unwrap();
    assert_eq!(transform.translation, spawn);
    assert_eq!(velocity.linvel, Vec3::ZERO);
    assert_eq!(velocity.angvel, Vec3::ZERO);
}

#[test]
fn test_determinism_same_input_same_trajectory() {
    let run_simulation = || -> Vec<u8> {
        let mut app = create_locomotion_app();
        spawn_floor(&mut app);
        let player = spawn_player(&mut app, Vec3::new(0.0, 2.0, 0.0));

        if let Some(mut input) = app.world_mut().get_mut::<MoveInput>(player) {
            input.direction = Vec3::new(0.0, 0.0, -1.0);
            input.jump = true;
        }

        run_ticks(&mut app, 300);

        world_snapshot::<Transform>(app.world_mut())
    };

    let snapshot1 = run_simulation();
    let snapshot2 = run_simulation();

    assert_eq!(
        snapshot1, snapshot2,
        "Симуляция с одинаковым input дала разные результаты!"
    );
}
