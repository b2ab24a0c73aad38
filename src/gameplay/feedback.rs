//! Per-hit visual feedback: background color cycling and text jitter.

use bevy::prelude::*;
use rand::Rng;

use crate::AppSystems;
use crate::screens::Screen;

/// Hue accumulator advance per hit.
const PHASE_KICK: i32 = 50;

pub(super) fn plugin(app: &mut App) {
    app.register_type::<HitVisuals>();
    app.init_resource::<HitVisuals>();

    app.add_systems(
        Update,
        update_background
            .in_set(AppSystems::Update)
            .run_if(in_state(Screen::Gameplay)),
    );
}

/// Visual state kicked by every hit.
#[derive(Resource, Reflect, Debug, Clone, Default)]
#[reflect(Resource)]
pub struct HitVisuals {
    /// Grows by 50 per hit and never wraps; the sine in
    /// [`background_color`] folds it back into range.
    pub color_phase: i32,
    /// Text offset, re-rolled on every hit.
    pub jitter: IVec2,
}

impl HitVisuals {
    /// One hit: advance the hue and re-roll the jitter.
    pub fn kick(&mut self, rng: &mut impl Rng) {
        self.color_phase += PHASE_KICK;
        self.jitter.x = rng.gen_range(-4..=4);
        self.jitter.y = rng.gen_range(-8..=10);
    }
}

/// Background color for a given phase: hue swings with `|sin|` across the
/// whole wheel, saturation stays fixed, brightness pulses a few percent
/// around mid-gray.
pub fn background_color(phase: i32) -> Color {
    let phase = f64::from(phase);
    let hue = (phase / 360.0).sin().abs() * 360.0;
    let value = 0.5 + (phase / 20.0).sin() / 20.0;
    Color::hsv(hue as f32, 0.75, value as f32)
}

fn update_background(visuals: Res<HitVisuals>, mut clear_color: ResMut<ClearColor>) {
    clear_color.0 = background_color(visuals.color_phase);
}
