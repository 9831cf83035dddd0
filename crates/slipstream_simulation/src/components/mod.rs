//! ECS Components для locomotion entity
//!
//! Организация по доменам:
//! - controller: конфигурация и состояние локомоции (LocomotionConfig, Support, JumpState, SpawnPoint)
//! - input: input snapshot (MoveInput)
//! - player: player control marker (Player)

pub mod controller;
pub mod input;
pub mod player;

// Re-exports для удобного импорта
pub use controller::*;
pub use input::*;
pub use player::*;
