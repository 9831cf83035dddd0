//! Player input capture (per render frame)
//!
//! Runs in Update at frame rate, independent of the physics tick: writes the
//! MoveInput snapshot the FixedUpdate chain consumes. WASD axes are combined
//! raw (-1/0/1 each), clamped to magnitude <= 1 and rotated into the body's
//! yaw basis — all inside MoveInput::compose.

use bevy::prelude::*;

use slipstream_simulation::{MoveInput, Player, ResetIntent};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (capture_move_input, request_debug_reset));
    }
}

/// Read WASD + Space into the player's MoveInput snapshot
fn capture_move_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&Transform, &mut MoveInput), With<Player>>,
) {
    let Ok((transform, mut input)) = query.single_mut() else {
        return;
    };

    // Raw axes, GetAxisRaw style: each key contributes a full unit
    let mut raw = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyW) {
        raw.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        raw.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        raw.x += 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        raw.x -= 1.0;
    }

    input.direction = MoveInput::compose(raw, *transform.forward(), *transform.right());

    // Level-triggered: held, not just_pressed (cooldown gates re-fire)
    input.jump = keys.pressed(KeyCode::Space);
}

/// Tab teleports the player back to its spawn point (debug helper)
fn request_debug_reset(
    keys: Res<ButtonInput<KeyCode>>,
    mut reset_events: EventWriter<ResetIntent>,
    players: Query<Entity, With<Player>>,
) {
    if !keys.just_pressed(KeyCode::Tab) {
        return;
    }

    for entity in &players {
        reset_events.write(ResetIntent { entity });
    }
}
