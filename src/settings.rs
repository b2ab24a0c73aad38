//! Frame pacing.

use bevy::prelude::*;
use bevy_framepace::{FramepaceSettings, Limiter};

use crate::gameplay::score::TICKS_PER_SECOND;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(bevy_framepace::FramepacePlugin);
    app.add_systems(Startup, limit_fps);
}

/// Cap the render rate at the simulation tick rate; anything faster only
/// redraws identical frames.
fn limit_fps(mut fps_settings: ResMut<FramepaceSettings>) {
    let max_fps = TICKS_PER_SECOND as f64;
    fps_settings.limiter = Limiter::from_framerate(max_fps);
    info!("FPS limit set to {}", max_fps);
}
