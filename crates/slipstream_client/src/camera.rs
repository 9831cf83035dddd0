//! First-person camera: yaw on the player body, pitch on the head camera

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};

use slipstream_simulation::Player;

use crate::settings::ClientSettings;

/// Pitch limit: +-89 degrees (avoid gimbal flip at straight up/down)
const PITCH_LIMIT: f32 = 89.0 * std::f32::consts::PI / 180.0;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, mouse_look);
    }
}

/// Head camera component, child of the player body
///
/// Pitch is tracked here (not derived from the transform) so clamping is
/// exact and accumulation errors can't creep in.
#[derive(Component, Default)]
pub struct HeadCamera {
    pub pitch: f32,
}

/// Mouse motion -> body yaw + head pitch
///
/// Only while the cursor is grabbed; otherwise motion events are drained
/// and discarded so a re-grab doesn't apply a stale jump.
fn mouse_look(
    settings: Res<ClientSettings>,
    mut mouse_motion: EventReader<MouseMotion>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut bodies: Query<&mut Transform, (With<Player>, Without<HeadCamera>)>,
    mut heads: Query<(&mut HeadCamera, &mut Transform), Without<Player>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    if window.cursor_options.grab_mode != CursorGrabMode::Locked {
        mouse_motion.clear();
        return;
    }

    let mut delta = Vec2::ZERO;
    for motion in mouse_motion.read() {
        delta += motion.delta;
    }
    if delta == Vec2::ZERO {
        return;
    }

    // Yaw: rotate the body (movement basis follows automatically)
    if let Ok(mut body) = bodies.single_mut() {
        body.rotate_y(-delta.x * settings.mouse_sensitivity);
    }

    // Pitch: rotate the head camera only, clamped
    if let Ok((mut head, mut transform)) = heads.single_mut() {
        let y_sign = if settings.invert_y { 1.0 } else { -1.0 };
        head.pitch = (head.pitch + delta.y * settings.mouse_sensitivity * y_sign)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        transform.rotation = Quat::from_rotation_x(head.pitch);
    }
}
