//! Player control marker component
//!
//! Отмечает entity которым управляет игрок через input.

use bevy::prelude::Component;

/// Marker component для player-controlled entity
///
/// Client input/camera systems используют `With<Player>` filter.
/// Симуляция marker'ом не интересуется: локомоция работает для любого
/// entity с полным набором компонентов (MoveInput, Support, config).
///
/// # Single-player
/// В single-player режиме обычно только один entity имеет этот компонент.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
