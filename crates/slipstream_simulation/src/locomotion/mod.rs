//! Locomotion domain — опорная классификация, движение, прыжок, reset
//!
//! Содержит:
//! - support: чистые функции (классификация, проекция на склон, velocity blend)
//! - systems: FixedUpdate цепочка + LocomotionPlugin + spawn helper
//! - events: ResetIntent (debug-reset запрос от клиента)

pub mod events;
pub mod support;
pub mod systems;


// Re-export all systems and events
pub use events::*;
pub use support::*;
pub use systems::*;
