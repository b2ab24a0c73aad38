//! The hit minigame screen.

use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use crate::gameplay::input::HitmeActions;
use crate::gameplay::{HitScore, HitVisuals};
use crate::screens::Screen;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        OnEnter(Screen::Gameplay),
        (reset_session, spawn_input_actions),
    );
}

/// Every activation starts from a clean slate: counters, best score, and
/// visual state all back to zero. Loaded assets are untouched.
fn reset_session(mut score: ResMut<HitScore>, mut visuals: ResMut<HitVisuals>) {
    *score = HitScore::default();
    *visuals = HitVisuals::default();
}

fn spawn_input_actions(mut commands: Commands) {
    commands.spawn((
        Name::new("Gameplay Actions"),
        StateScoped(Screen::Gameplay),
        Actions::<HitmeActions>::default(),
    ));
}
