//! The hit minigame: mash anything, chase the points-per-second record.

use bevy::prelude::*;

pub mod feedback;
mod hud;
pub mod input;
mod overlay;
pub mod score;

pub use feedback::HitVisuals;
pub use score::HitScore;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        score::plugin,
        feedback::plugin,
        input::plugin,
        hud::plugin,
        overlay::plugin,
    ));
}
