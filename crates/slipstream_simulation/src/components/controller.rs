//! Locomotion компоненты: конфигурация, опорное состояние, jump cooldown

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Конфигурация локомоции (per-entity tunables)
///
/// Все константы внешние и настраиваемые: клиент может перекрыть их
/// блоком `[locomotion]` в settings.toml (serde default → частичный override).
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Сила движения по земле (N, масса тела = 1)
    pub move_speed: f32,
    /// Импульс прыжка (мгновенная Δv вверх, m/s)
    pub jump_impulse: f32,
    /// Коэффициент контроля в воздухе (<0.5: и сила, и blend rate)
    pub air_control: f32,
    /// Коэффициент контроля на склоне (<1: и сила, и blend rate)
    pub slope_control: f32,
    /// Linear damping на плоской земле
    pub ground_drag: f32,
    /// Linear damping в воздухе
    pub air_drag: f32,
    /// Linear damping на склоне
    pub slope_drag: f32,
    /// Максимальный проходимый угол склона (градусы)
    pub max_slope_deg: f32,
    /// Порог «плоской» земли: angle < flat → Grounded (градусы)
    pub flat_threshold_deg: f32,
    /// Верхняя отсечка склона: angle >= cutoff → Airborne (градусы)
    pub steep_cutoff_deg: f32,
    /// Минимальный интервал между прыжками (сек)
    pub jump_cooldown: f32,
    /// Длина опорного raycast вниз от центра тела
    pub support_ray_length: f32,
    /// Множитель искусственной гравитации (1.0 = 9.81 m/s²)
    pub gravity_scale: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 40.0,        // терминальная скорость ~8 m/s при ground_drag 5
            jump_impulse: 5.0,       // ~1.3m высота прыжка
            air_control: 0.4,
            slope_control: 0.8,
            ground_drag: 5.0,
            air_drag: 0.5,
            slope_drag: 2.0,
            max_slope_deg: 45.0,
            flat_threshold_deg: 5.0,
            steep_cutoff_deg: 85.0,
            jump_cooldown: 0.1,
            support_ray_length: 1.3,
            gravity_scale: 1.0,
        }
    }
}

/// Опорное состояние (пересчитывается каждый physics step из raycast)
///
/// Ровно один вариант активен за step:
/// - Grounded: angle < flat_threshold, полный контроль движения
/// - OnSlope: flat_threshold <= angle < min(max_slope, steep_cutoff),
///   движение перенаправляется вдоль плоскости склона
/// - Airborne: нет попадания raycast, ЛИБО слишком крутая поверхность
///   (angle >= max_slope или >= steep_cutoff) — контакт есть, опоры нет
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub enum Support {
    Grounded,
    OnSlope {
        /// Нормаль поверхности из raycast hit (валидна только в этом step)
        normal: Vec3,
    },
    Airborne,
}

impl Default for Support {
    fn default() -> Self {
        Self::Airborne
    }
}

impl Support {
    /// Плоская земля (только она даёт право на прыжок)
    pub fn is_grounded(&self) -> bool {
        matches!(self, Support::Grounded)
    }

    pub fn is_airborne(&self) -> bool {
        matches!(self, Support::Airborne)
    }
}

/// Cooldown прыжка
///
/// Таймер только убывает (каждый physics step); сбрасывается на interval
/// исключительно при сработавшем прыжке.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct JumpState {
    pub cooldown: f32,
}

impl JumpState {
    pub fn ready(&self) -> bool {
        self.cooldown <= 0.0
    }

    pub fn tick(&mut self, delta: f32) {
        self.cooldown = (self.cooldown - delta).max(0.0);
    }

    pub fn arm(&mut self, interval: f32) {
        self.cooldown = interval;
    }
}

/// Точка возрождения для debug-reset
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct SpawnPoint(pub Vec3);

impl Default for SpawnPoint {
    fn default() -> Self {
        Self(Vec3::new(0.0, 2.0, 0.0))
    }
}
