//! The loading screen: a progress bar over black while assets load.

use bevy::prelude::*;
use bevy_asset_loader::prelude::*;
use iyes_progress::prelude::*;

use crate::assets::{FontAssets, SoundAssets};
use crate::screens::Screen;
use crate::theme::prelude::*;

/// The bar occupies the bottom 2% of the viewport.
const PROGRESS_BAR_HEIGHT_PERCENT: f32 = 2.0;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(
        ProgressPlugin::<Screen>::new().with_state_transition(Screen::Loading, Screen::Gameplay),
    );
    app.add_loading_state(
        LoadingState::new(Screen::Loading)
            .load_collection::<FontAssets>()
            .load_collection::<SoundAssets>(),
    );

    app.add_systems(OnEnter(Screen::Loading), spawn_loading_screen);
    app.add_systems(Update, update_progress_bar.run_if(in_state(Screen::Loading)));
}

/// Marks the bar segment that grows with loading progress.
#[derive(Component)]
struct ProgressBarFill;

fn spawn_loading_screen(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Loading Screen"),
        StateScoped(Screen::Loading),
        BackgroundColor(ui_palette::LOADING_BACKGROUND),
        children![(
            Name::new("Progress Bar Track"),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                bottom: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Percent(PROGRESS_BAR_HEIGHT_PERCENT),
                ..default()
            },
            BackgroundColor(ui_palette::PROGRESS_BAR_TRACK),
            children![(
                Name::new("Progress Bar Fill"),
                ProgressBarFill,
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(0.0),
                    width: Val::Percent(0.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(ui_palette::PROGRESS_BAR_FILL),
            )],
        )],
    ));
}

/// Completed fraction of the tracked loading work. Zero before any asset
/// registers with the tracker.
fn loading_fraction(progress: Progress) -> f32 {
    if progress.total == 0 {
        0.0
    } else {
        progress.done as f32 / progress.total as f32
    }
}

fn update_progress_bar(
    tracker: Res<ProgressTracker<Screen>>,
    mut fill: Single<&mut Node, With<ProgressBarFill>>,
) {
    let progress = tracker.get_global_combined_progress();
    fill.width = Val::Percent(loading_fraction(progress) * 100.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_reads_as_zero() {
        let progress = Progress { done: 0, total: 0 };
        assert_eq!(loading_fraction(progress), 0.0);
    }

    #[test]
    fn zero_done_gives_a_zero_width_bar() {
        let progress = Progress { done: 0, total: 3 };
        assert_eq!(loading_fraction(progress) * 100.0, 0.0);
    }

    #[test]
    fn all_done_spans_the_full_width() {
        let progress = Progress { done: 3, total: 3 };
        assert_eq!(loading_fraction(progress) * 100.0, 100.0);
    }

    #[test]
    fn fraction_tracks_partial_progress() {
        let progress = Progress { done: 1, total: 4 };
        assert_eq!(loading_fraction(progress), 0.25);
    }
}
