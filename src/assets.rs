//! Asset collections, loaded up-front while the loading screen is shown.
//!
//! A missing file fails the loading state with the asset server's own error
//! instead of limping along with a dangling handle.

use bevy::prelude::*;
use bevy_asset_loader::prelude::*;

#[derive(AssetCollection, Resource)]
pub struct FontAssets {
    /// Display font for the blinking banner. The stats lines use Bevy's
    /// built-in default font instead.
    #[asset(path = "fonts/comicsans.ttf")]
    pub title: Handle<Font>,
}

#[derive(AssetCollection, Resource)]
pub struct SoundAssets {
    #[asset(path = "audio/sound_effects/click.ogg")]
    pub click: Handle<AudioSource>,
}
