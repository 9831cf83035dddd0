//! Locomotion системы (FixedUpdate цепочка)
//!
//! Архитектура:
//! - Rapier для динамики (RigidBody::Dynamic, силы/импульсы/damping)
//! - Хост-гравитация выключена (GravityScale 0); искусственная гравитация
//!   применяется только в Airborne ветке
//! - Порядок внутри step: probe_support → apply_locomotion → resolve_jumps
//!   → resolve_resets, всё до rapier physics step
//!
//! Детерминизм: fixed timestep (60Hz), TimestepMode::Fixed, enhanced-determinism

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{JumpState, LocomotionConfig, MoveInput, SpawnPoint, Support};
use crate::logger;

use super::events::ResetIntent;
use super::support::{blend_velocity, classify_support, slope_move_direction};

/// Ускорение искусственной гравитации (m/s², масса тела = 1)
pub const GRAVITY_ACCEL: f32 = 9.81;

/// Горизонтальный forward тела (yaw-базис; pitch живёт на камере клиента)
fn horizontal_forward(transform: &Transform) -> Vec3 {
    let forward = *transform.forward();
    Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero()
}

/// Система опорной классификации: raycast вниз → Support
///
/// Raycast из центра тела, длина support_ray_length, собственный rigid body
/// исключён из запроса. Промах — не ошибка, а Airborne.
pub fn probe_support(
    rapier: ReadRapierContext,
    mut query: Query<(Entity, &Transform, &LocomotionConfig, &mut Support)>,
) {
    let Ok(context) = rapier.single() else {
        return;
    };

    for (entity, transform, config, mut support) in query.iter_mut() {
        let filter = QueryFilter::default().exclude_rigid_body(entity);
        let hit = context.cast_ray_and_get_normal(
            transform.translation,
            Vec3::NEG_Y,
            config.support_ray_length,
            true,
            filter,
        );

        *support = classify_support(hit.map(|(_, intersection)| intersection.normal), config);
    }
}

/// Система разрешения движения: по Support выбирает drag, непрерывную силу
/// и velocity blend
///
/// ExternalForce перезаписывается целиком каждый step (не накапливается).
pub fn apply_locomotion(
    mut query: Query<(
        &Transform,
        &MoveInput,
        &Support,
        &LocomotionConfig,
        &mut Velocity,
        &mut Damping,
        &mut ExternalForce,
    )>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (transform, input, support, config, mut velocity, mut damping, mut force) in
        query.iter_mut()
    {
        let forward = horizontal_forward(transform);

        match *support {
            Support::OnSlope { normal } => {
                // Движение относительно плоскости склона («surf»)
                let slope_dir = slope_move_direction(forward, normal);

                // Плавное перенаправление скорости вдоль склона
                velocity.linvel =
                    blend_velocity(velocity.linvel, slope_dir, config.slope_control, delta);

                damping.linear_damping = config.slope_drag;
                force.force = slope_dir * config.move_speed * config.slope_control;
            }
            Support::Grounded => {
                // Полный контроль, без перенаправления скорости
                damping.linear_damping = config.ground_drag;
                force.force = input.direction * config.move_speed;
            }
            Support::Airborne => {
                // Ослабленный контроль + искусственная гравитация
                velocity.linvel =
                    blend_velocity(velocity.linvel, forward, config.air_control, delta);

                damping.linear_damping = config.air_drag;
                force.force = input.direction * config.move_speed * config.air_control
                    + Vec3::NEG_Y * GRAVITY_ACCEL * config.gravity_scale;
            }
        }
    }
}

/// Система прыжка: cooldown убывает каждый step; импульс только при
/// (jump held И Grounded И cooldown истёк)
pub fn resolve_jumps(
    mut query: Query<(
        Entity,
        &MoveInput,
        &Support,
        &LocomotionConfig,
        &mut JumpState,
        &mut ExternalImpulse,
    )>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, input, support, config, mut jump, mut impulse) in query.iter_mut() {
        // Таймер только убывает; сброс — исключительно при сработавшем прыжке
        jump.tick(delta);

        if input.jump && support.is_grounded() && jump.ready() {
            impulse.impulse += Vec3::Y * config.jump_impulse;
            jump.arm(config.jump_cooldown);

            logger::log(&format!("Jump! entity={:?}", entity));
        }
    }
}

/// Система debug-reset: телепорт на SpawnPoint + обнуление velocity и
/// накопленных сил. Out-of-band операция без других side effects.
pub fn resolve_resets(
    mut reset_events: EventReader<ResetIntent>,
    mut query: Query<(
        &SpawnPoint,
        &mut Transform,
        &mut Velocity,
        &mut ExternalForce,
        &mut ExternalImpulse,
    )>,
) {
    for event in reset_events.read() {
        let Ok((spawn, mut transform, mut velocity, mut force, mut impulse)) =
            query.get_mut(event.entity)
        else {
            continue;
        };

        transform.translation = spawn.0;
        velocity.linvel = Vec3::ZERO;
        velocity.angvel = Vec3::ZERO;
        force.force = Vec3::ZERO;
        impulse.impulse = Vec3::ZERO;

        logger::log_info(&format!(
            "Reset entity={:?} to spawn {:?}",
            event.entity, spawn.0
        ));
    }
}

/// Plugin локомоции
///
/// Регистрирует цепочку в FixedUpdate до rapier physics step.
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        use bevy_rapier3d::plugin::PhysicsSet;

        app.add_event::<ResetIntent>().add_systems(
            FixedUpdate,
            (probe_support, apply_locomotion, resolve_jumps, resolve_resets)
                .chain() // Последовательное выполнение
                .before(PhysicsSet::SyncBackend), // До rapier physics step
        );
    }
}

/// Spawn helper для создания locomotion персонажа
///
/// Создает entity с полным набором компонентов:
/// - Transform (spawn point запоминается для debug-reset)
/// - MoveInput + Support + JumpState + LocomotionConfig
/// - Rapier: dynamic capsule, вращение заморожено, хост-гравитация выключена,
///   масса 1 (силы численно равны ускорениям)
pub fn spawn_character(commands: &mut Commands, position: Vec3) -> Entity {
    let config = LocomotionConfig::default();

    commands
        .spawn((
            (
                Transform::from_translation(position),
                MoveInput::default(),
                Support::default(),
                JumpState::default(),
                SpawnPoint(position),
                config,
            ),
            (
                RigidBody::Dynamic,
                Collider::capsule_y(0.5, 0.4), // Высота 1.8m, радиус 0.4m
                Velocity::default(),
                Damping {
                    linear_damping: config.ground_drag,
                    angular_damping: 0.0,
                },
                ExternalForce::default(),
                ExternalImpulse::default(),
                GravityScale(0.0), // Гравитация — наша, в Airborne ветке
                LockedAxes::ROTATION_LOCKED, // Персонаж не опрокидывается
                ColliderMassProperties::Mass(1.0), // Масса ровно 1: силы численно равны ускорениям
            ),
        ))
        .id()
}
