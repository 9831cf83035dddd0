//! Locomotion events

use bevy::prelude::*;

/// Event: запрос debug-reset (телепорт на SpawnPoint)
///
/// Генерируется:
/// - Client input system (Tab key)
/// - Интеграционные тесты
///
/// Обрабатывается:
/// - resolve_resets: телепорт на SpawnPoint + обнуление velocity/сил,
///   никаких других side effects
#[derive(Event, Debug, Clone)]
pub struct ResetIntent {
    pub entity: Entity,
}
