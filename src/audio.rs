use bevy::audio::{AudioPlayer, AudioSource, PlaybackSettings};
use bevy::prelude::{Bundle, Component, Handle};

/// An organizational marker component that should be added to a spawned [`AudioPlayer`] if it's in the
/// general "sound effect" category (e.g. the click sample).
///
/// This can then be used to query for and operate on sounds in that category.
#[derive(Component, Default)]
pub struct SoundEffect;

/// A one-shot sound effect instance that cleans itself up after playback.
pub fn sound_effect(handle: Handle<AudioSource>) -> impl Bundle {
    (AudioPlayer(handle), PlaybackSettings::DESPAWN, SoundEffect)
}
