//! Input snapshot для локомоции
//!
//! Граница между variable-rate (Update) и fixed-rate (FixedUpdate):
//! клиент пишет MoveInput каждый render frame, physics step только читает.

use bevy::prelude::*;

/// Снимок ввода (заполняется раз в кадр клиентом или тестами)
///
/// Для headless тестов — mock input через этот компонент.
/// Для игры — заполняется из ButtonInput<KeyCode>.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct MoveInput {
    /// World-space направление движения, |direction| <= 1
    pub direction: Vec3,
    /// Jump held (level-triggered, не edge-triggered)
    pub jump: bool,
}

impl MoveInput {
    /// Собирает world-space направление из сырых осей и yaw-базиса тела.
    ///
    /// raw.x — strafe (D-A), raw.y — forward (W-S). Комбинированная
    /// магнитуда клампится к 1 (диагональ не быстрее), затем вектор
    /// раскладывается по forward/right и прижимается к горизонтали.
    pub fn compose(raw: Vec2, forward: Vec3, right: Vec3) -> Vec3 {
        let clamped = if raw.length_squared() > 1.0 {
            raw.normalize()
        } else {
            raw
        };

        let direction = forward * clamped.y + right * clamped.x;
        Vec3::new(direction.x, 0.0, direction.z)
    }
}
