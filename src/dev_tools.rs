//! Development tools for the game. This plugin is only enabled in dev builds.

use bevy::audio::Volume;
use bevy::dev_tools::states::log_transitions;
use bevy::prelude::*;
use bevy_inspector_egui::bevy_egui::EguiPlugin;
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use iyes_perf_ui::PerfUiPlugin;
use iyes_perf_ui::entries::{PerfUiFramerateEntries, PerfUiWindowEntries};
use iyes_perf_ui::prelude::{PerfUiPosition, PerfUiRoot};

use crate::screens::Screen;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        PerfUiPlugin,
        bevy::diagnostic::FrameTimeDiagnosticsPlugin::default(),
        bevy::diagnostic::EntityCountDiagnosticsPlugin,
        bevy::render::diagnostic::RenderDiagnosticsPlugin,
        // inspector
        EguiPlugin {
            enable_multipass_for_primary_context: true,
        },
        WorldInspectorPlugin::new(),
    ));

    // Log `Screen` state transitions.
    app.add_systems(Update, log_transitions::<Screen>);

    app.add_systems(Startup, (setup_perf_ui, lower_starting_audio_volume));
}

// The click sample is loud; spare the developer's ears.
fn lower_starting_audio_volume(mut global_volume: ResMut<GlobalVolume>) {
    global_volume.volume = Volume::Linear(0.5);
}

fn setup_perf_ui(mut commands: Commands) {
    commands.spawn((
        Name::from("PerfUi"),
        PerfUiRoot {
            position: PerfUiPosition::TopRight,
            ..default()
        },
        // Contains everything related to FPS and frame time
        PerfUiFramerateEntries::default(),
        // Contains everything related to the window and cursor
        PerfUiWindowEntries::default(),
    ));
}
