use std::path::Path;

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use slipstream_simulation::{logger, spawn_character, Player, SimulationPlugin};

mod camera;
mod cursor;
mod input;
mod settings;

use camera::{CameraPlugin, HeadCamera};
use cursor::CursorPlugin;
use input::InputPlugin;
use settings::ClientSettings;

fn main() {
    logger::init_logger();

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "SLIPSTREAM".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Simulation (headless ECS logic + rapier)
        .add_plugins(SimulationPlugin)
        // Client glue: input snapshot, mouse look, cursor lock
        .add_plugins((InputPlugin, CameraPlugin, CursorPlugin))
        .insert_resource(ClientSettings::load(Path::new("settings.toml")))
        .add_systems(Startup, setup_scene)
        .run();
}

/// Spawn ground, ramps, lights, and the player with its head camera
fn setup_scene(
    mut commands: Commands,
    settings: Res<ClientSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Ground plane (50x50m), collider top at y=0
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(25.0)))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.3))),
        Transform::from_xyz(0.0, 0.0, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(25.0, 0.1, 25.0),
    ));

    // Walkable ramp: 30° < max_slope — movement redirects along the surface
    spawn_ramp(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(-8.0, 0.0, -10.0),
        30.0,
        Color::srgb(0.5, 0.4, 0.3),
    );

    // Steep ramp: 60° > max_slope — raycast hits, but no walking support
    spawn_ramp(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(8.0, 0.0, -10.0),
        60.0,
        Color::srgb(0.5, 0.3, 0.3),
    );

    // Directional light (sun)
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4)),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.3,
        affects_lightmapped_meshes: false,
    });

    // Player: dynamic capsule + head camera child at eye level
    let player = spawn_character(&mut commands, Vec3::new(0.0, 2.0, 0.0));
    commands
        .entity(player)
        .insert((
            Player,
            settings.locomotion, // overrides from settings.toml
            Mesh3d(meshes.add(Capsule3d::new(0.4, 1.0))),
            MeshMaterial3d(materials.add(Color::srgb(0.8, 0.7, 0.6))),
        ))
        .with_children(|parent| {
            parent.spawn((
                Camera3d::default(),
                HeadCamera::default(),
                Transform::from_xyz(0.0, 0.6, 0.0),
            ));
        });
}

/// Ramp helper: tilted slab (rotation around Z) with matching collider
fn spawn_ramp(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
    angle_deg: f32,
    color: Color,
) {
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(12.0, 1.0, 8.0))),
        MeshMaterial3d(materials.add(color)),
        Transform::from_translation(position)
            .with_rotation(Quat::from_rotation_z(angle_deg.to_radians())),
        RigidBody::Fixed,
        Collider::cuboid(6.0, 0.5, 4.0),
    ));
}
