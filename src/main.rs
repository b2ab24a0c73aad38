// Support configuring Bevy lints within code.
#![cfg_attr(bevy_lint, feature(register_tool), register_tool(bevy))]
// Disable console on Windows for non-dev builds.
#![cfg_attr(not(feature = "dev"), windows_subsystem = "windows")]

mod assets;
mod audio;
#[cfg(feature = "dev")]
mod dev_tools;
mod gameplay;
mod screens;
mod settings;
mod theme;

use bevy::render::camera::ScalingMode;
use bevy::window::PresentMode;
use bevy::{asset::AssetMetaCheck, prelude::*};

/// Logical viewport size in world units. The game renders into a fixed
/// 320x180 virtual resolution regardless of the actual window size, which is
/// also the size the checkerboard overlay is generated at.
pub const VIEWPORT_WIDTH: f32 = 320.0;
pub const VIEWPORT_HEIGHT: f32 = 180.0;

fn main() -> AppExit {
    App::new().add_plugins(AppPlugin).run()
}

pub struct AppPlugin;

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        // Order new `AppSystems` variants by adding them here:
        app.configure_sets(
            Update,
            (
                AppSystems::TickTimers,
                AppSystems::RecordInput,
                AppSystems::Update,
            )
                .chain(),
        );

        // All simulation state advances on the fixed tick, decoupled from the
        // render rate. There is deliberately no frame-delta interpolation.
        app.insert_resource(Time::<Fixed>::from_hz(60.0));

        // The loading screen expects a black backdrop before anything else draws.
        app.insert_resource(ClearColor(Color::BLACK));

        app.add_systems(Startup, spawn_camera);

        // Add Bevy plugins.
        app.add_plugins(
            DefaultPlugins
                .set(AssetPlugin {
                    // Wasm builds will check for meta files (that don't exist) if this isn't set.
                    // This causes errors and even panics on web build on itch.
                    // See https://github.com/bevyengine/bevy_github_ci_template/issues/48.
                    meta_check: AssetMetaCheck::Never,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Window {
                        title: "HIT ME".to_string(),
                        resolution: (1280.0, 720.0).into(),
                        present_mode: PresentMode::AutoNoVsync,
                        fit_canvas_to_parent: true,
                        ..default()
                    }
                    .into(),
                    ..default()
                }),
        );

        // Add other plugins.
        app.add_plugins((
            #[cfg(feature = "dev")]
            dev_tools::plugin,
            gameplay::plugin,
            screens::plugin,
            settings::plugin,
        ));
    }
}

/// High-level groupings of systems for the app in the `Update` schedule.
/// When adding a new variant, make sure to order it in the `configure_sets`
/// call above.
#[derive(SystemSet, Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum AppSystems {
    /// Tick timers.
    TickTimers,
    /// Record player input.
    RecordInput,
    /// Do everything else (consider splitting this into further variants).
    Update,
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("Camera"),
        Camera2d,
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::Fixed {
                width: VIEWPORT_WIDTH,
                height: VIEWPORT_HEIGHT,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));
}
