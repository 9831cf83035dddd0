//! SLIPSTREAM Simulation Core
//!
//! ECS-симуляция first-person локомоции на Bevy 0.16
//!
//! Архитектура:
//! - ECS = state layer (input snapshot, support classification, jump cooldown)
//! - Rapier = physics host (rigid body, raycast, drag, интеграция сил)
//! - Fixed timestep 60Hz, rapier в fixed schedule → детерминизм
//!
//! Клиент (окно, мышь, клавиатура) живёт в slipstream_client и общается
//! с симуляцией только через компоненты (MoveInput) и events (ResetIntent).

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

// Публичные модули
pub mod components;
pub mod locomotion;
pub mod logger;

// Re-export базовых типов для удобства
pub use components::*;
pub use locomotion::{
    blend_velocity, classify_support, slope_move_direction, spawn_character, LocomotionPlugin,
    ResetIntent,
};

/// Главный plugin симуляции (физика + локомоция)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick (легче считать интервалы)
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
            .add_plugins(LocomotionPlugin)
            // После rapier plugin: шагаем с тем же фиксированным dt (не wall-clock)
            .insert_resource(TimestepMode::Fixed {
                dt: 1.0 / 60.0,
                substeps: 1,
            });
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// TransformPlugin нужен rapier'у (GlobalTransform propagation),
/// остальное — MinimalPlugins.
pub fn create_headless_app() -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins((MinimalPlugins, TransformPlugin))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Snapshot мира для сравнения детерминизма
/// (упрощённая версия: Debug-байты компонентов, отсортированные по Entity)
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
