//! Input handling. Every key, mouse button, touch, and gamepad button press
//! counts as a hit; Escape and Ctrl+R additionally carry their own actions.

use bevy::input::gamepad::GamepadButtonStateChangedEvent;
use bevy::input::keyboard::KeyboardInput;
use bevy::input::mouse::MouseButtonInput;
use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use crate::AppSystems;
use crate::assets::SoundAssets;
use crate::audio::sound_effect;
use crate::gameplay::{HitScore, HitVisuals};
use crate::screens::Screen;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(EnhancedInputPlugin);
    app.add_input_context::<HitmeActions>();
    app.add_observer(bind_actions);
    app.add_observer(quit);
    app.add_observer(reset_totals);

    app.add_event::<Hit>();
    app.add_systems(
        Update,
        (detect_hits, apply_hits)
            .chain()
            .in_set(AppSystems::RecordInput)
            .run_if(in_state(Screen::Gameplay)),
    );
}

#[derive(InputContext)]
pub struct HitmeActions;

/// Escape: leave the game. The keypress still counts as a hit on the way out.
#[derive(Debug, InputAction)]
#[input_action(output = bool)]
struct QuitAction;

/// Ctrl+R: zero the score counters without touching the visuals.
#[derive(Debug, InputAction)]
#[input_action(output = bool)]
struct ResetScoreAction;

/// One qualifying input event, whatever the device.
#[derive(Event, Debug)]
struct Hit;

/// Marks the currently playing click sample.
#[derive(Component)]
struct ClickSound;

fn bind_actions(
    trigger: Trigger<Binding<HitmeActions>>,
    mut actions: Query<&mut Actions<HitmeActions>>,
) {
    // We have to bind the input mapping to the actions entity at runtime
    let mut actions = actions.get_mut(trigger.target()).unwrap();
    actions.bind::<QuitAction>().to(KeyCode::Escape);
    actions
        .bind::<ResetScoreAction>()
        .to(KeyCode::KeyR.with_mod_keys(ModKeys::CONTROL));
}

fn quit(_: Trigger<Started<QuitAction>>, mut app_exit: EventWriter<AppExit>) {
    app_exit.write(AppExit::Success);
}

fn reset_totals(_: Trigger<Started<ResetScoreAction>>, mut score: ResMut<HitScore>) {
    score.reset_totals();
}

/// Funnels all four input classes into [`Hit`] events, one per raw press.
/// Key repeats don't count; neither do releases.
fn detect_hits(
    mut keys: EventReader<KeyboardInput>,
    mut mouse_buttons: EventReader<MouseButtonInput>,
    mut touches: EventReader<TouchInput>,
    mut gamepad_buttons: EventReader<GamepadButtonStateChangedEvent>,
    mut hits: EventWriter<Hit>,
) {
    for event in keys.read() {
        if event.state.is_pressed() && !event.repeat {
            hits.write(Hit);
        }
    }
    for event in mouse_buttons.read() {
        if event.state.is_pressed() {
            hits.write(Hit);
        }
    }
    for event in touches.read() {
        if event.phase == TouchPhase::Started {
            hits.write(Hit);
        }
    }
    for event in gamepad_buttons.read() {
        if event.state.is_pressed() {
            hits.write(Hit);
        }
    }
}

fn apply_hits(
    mut hits: EventReader<Hit>,
    mut score: ResMut<HitScore>,
    mut visuals: ResMut<HitVisuals>,
    sounds: Res<SoundAssets>,
    playing: Query<Entity, With<ClickSound>>,
    mut commands: Commands,
) {
    if hits.is_empty() {
        return;
    }

    let mut rng = rand::thread_rng();
    for _ in hits.read() {
        visuals.kick(&mut rng);
        score.register_hit();
    }

    // Restart the click from the top of the sample: despawn whatever is
    // still playing before spawning the fresh instance, so rapid hits never
    // overlap and never go silent.
    for entity in &playing {
        commands.entity(entity).despawn();
    }
    commands.spawn((
        Name::new("Click"),
        ClickSound,
        StateScoped(Screen::Gameplay),
        sound_effect(sounds.click.clone()),
    ));
}
