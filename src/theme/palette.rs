use bevy::prelude::*;

/// #ffffff
pub const HUD_TEXT: Color = Color::WHITE;

/// #000000
pub const LOADING_BACKGROUND: Color = Color::BLACK;

/// rgba(32, 32, 32, 32)
pub const PROGRESS_BAR_TRACK: Color = Color::srgba(0.125, 0.125, 0.125, 0.125);
/// rgba(128, 128, 128, 128)
pub const PROGRESS_BAR_FILL: Color = Color::srgba(0.502, 0.502, 0.502, 0.502);
