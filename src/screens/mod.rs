//! The game's main screen states and transitions between them.

mod gameplay;
mod loading;

use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.init_state::<Screen>();

    app.add_plugins((gameplay::plugin, loading::plugin));
}

/// The game's main screen states.
#[derive(States, Debug, Hash, PartialEq, Eq, Clone, Default)]
#[states(scoped_entities)]
pub enum Screen {
    /// Progress bar over black while the game's assets load.
    #[default]
    Loading,
    /// The hit minigame itself.
    Gameplay,
}
