//! Чистая логика локомоции: классификация опоры, проекция на склон,
//! экспоненциальный velocity blend
//!
//! Системы в systems.rs — тонкие обёртки над этими функциями; вся
//! геометрия тестируется здесь без физического мира.

use bevy::prelude::*;

use crate::components::{LocomotionConfig, Support};

/// Классифицирует опорную поверхность по нормали raycast hit.
///
/// - None (raycast мимо) → Airborne; это валидный переход состояния,
///   не ошибка
/// - angle < flat_threshold → Grounded
/// - flat_threshold <= angle < min(max_slope, steep_cutoff) → OnSlope
/// - angle >= max_slope или >= steep_cutoff → Airborne (поверхность есть,
///   опоры для ходьбы нет)
pub fn classify_support(hit_normal: Option<Vec3>, config: &LocomotionConfig) -> Support {
    let Some(normal) = hit_normal else {
        return Support::Airborne;
    };

    let angle = normal.angle_between(Vec3::Y).to_degrees();

    if angle < config.flat_threshold_deg {
        Support::Grounded
    } else if angle < config.max_slope_deg && angle < config.steep_cutoff_deg {
        Support::OnSlope { normal }
    } else {
        Support::Airborne
    }
}

/// Направление движения вдоль склона: проекция forward на плоскость
/// с нормалью склона, нормализованная.
///
/// Возвращает Vec3::ZERO если forward параллелен нормали (вырожденный случай).
pub fn slope_move_direction(forward: Vec3, normal: Vec3) -> Vec3 {
    (forward - normal * forward.dot(normal)).normalize_or_zero()
}

/// Экспоненциальный blend скорости к `|velocity| * direction`.
///
/// Скорость перенаправляется, сохраняя магнитуду (цель — тот же модуль
/// вдоль нового направления); rate * dt клампится к 1, чтобы большой dt
/// не перелетал цель.
pub fn blend_velocity(velocity: Vec3, direction: Vec3, rate: f32, delta: f32) -> Vec3 {
    velocity.lerp(velocity.length() * direction, (rate * delta).min(1.0))
}
