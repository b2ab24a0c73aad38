//! HUD text: the blinking banner and the score readouts.

use bevy::prelude::*;

use crate::AppSystems;
use crate::assets::FontAssets;
use crate::gameplay::{HitScore, HitVisuals};
use crate::screens::Screen;
use crate::theme::prelude::*;

/// Display size of the banner font, in world units.
const BANNER_FONT_SIZE: f32 = 80.0;
/// The stats lines use the built-in font at its native size.
const STATS_FONT_SIZE: f32 = 8.0;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Gameplay), spawn_hud);
    app.add_systems(
        Update,
        (blink_banner, position_texts, update_sps_text, update_best_text)
            .in_set(AppSystems::Update)
            .run_if(in_state(Screen::Gameplay)),
    );
}

#[derive(Component)]
struct BannerText;

#[derive(Component)]
struct SpsText;

#[derive(Component)]
struct BestText;

fn spawn_hud(fonts: Res<FontAssets>, mut commands: Commands) {
    commands.spawn((
        Name::new("Hit Me Banner"),
        BannerText,
        StateScoped(Screen::Gameplay),
        Text2d::new("HIT ME"),
        TextFont {
            font: fonts.title.clone(),
            font_size: BANNER_FONT_SIZE,
            ..default()
        },
        TextColor(ui_palette::HUD_TEXT),
        Transform::from_translation(banner_position(IVec2::ZERO)),
    ));
    commands.spawn((
        Name::new("Points Per Second"),
        SpsText,
        StateScoped(Screen::Gameplay),
        Text2d::new("0 POINTS/SEC"),
        TextFont::from_font_size(STATS_FONT_SIZE),
        TextColor(ui_palette::HUD_TEXT),
        Transform::from_translation(sps_position(IVec2::ZERO)),
    ));
    commands.spawn((
        Name::new("Best"),
        BestText,
        StateScoped(Screen::Gameplay),
        Text2d::new("0 BEST"),
        TextFont::from_font_size(STATS_FONT_SIZE),
        TextColor(ui_palette::HUD_TEXT),
        Transform::from_translation(best_position(IVec2::ZERO)),
    ));
}

// The three texts each scale the jitter differently, so a single hit nudges
// them in different directions and by different amounts. Offsets are in
// world coordinates (Y up) on the fixed 320x180 viewport.

fn banner_position(jitter: IVec2) -> Vec3 {
    Vec3::new(jitter.x as f32, 72.0 - jitter.y as f32, 1.0)
}

fn sps_position(jitter: IVec2) -> Vec3 {
    Vec3::new(
        -(jitter.x as f32) * 0.8 - 20.0,
        (jitter.y / 2) as f32 - 52.0,
        1.0,
    )
}

fn best_position(jitter: IVec2) -> Vec3 {
    Vec3::new(
        -(jitter.x / 3) as f32 + 35.0,
        -((jitter.y / 3) as f32) - 66.0,
        1.0,
    )
}

fn blink_banner(score: Res<HitScore>, mut banner: Single<&mut Visibility, With<BannerText>>) {
    **banner = if score.hit_me_visible() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
}

fn position_texts(
    visuals: Res<HitVisuals>,
    mut banner: Single<&mut Transform, (With<BannerText>, Without<SpsText>, Without<BestText>)>,
    mut sps: Single<&mut Transform, (With<SpsText>, Without<BannerText>, Without<BestText>)>,
    mut best: Single<&mut Transform, (With<BestText>, Without<BannerText>, Without<SpsText>)>,
) {
    banner.translation = banner_position(visuals.jitter);
    sps.translation = sps_position(visuals.jitter);
    best.translation = best_position(visuals.jitter);
}

fn update_sps_text(score: Res<HitScore>, mut text: Single<&mut Text2d, With<SpsText>>) {
    if !score.is_changed() {
        return;
    }
    text.0 = format!("{} POINTS/SEC", score.points_per_second);
}

fn update_best_text(score: Res<HitScore>, mut text: Single<&mut Text2d, With<BestText>>) {
    if !score.is_changed() {
        return;
    }
    text.0 = format!("{} BEST", score.best_points_per_second);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_positions_match_the_layout() {
        assert_eq!(banner_position(IVec2::ZERO), Vec3::new(0.0, 72.0, 1.0));
        assert_eq!(sps_position(IVec2::ZERO), Vec3::new(-20.0, -52.0, 1.0));
        assert_eq!(best_position(IVec2::ZERO), Vec3::new(35.0, -66.0, 1.0));
    }

    #[test]
    fn banner_moves_with_the_jitter() {
        assert_eq!(
            banner_position(IVec2::new(4, 10)),
            Vec3::new(4.0, 62.0, 1.0)
        );
        assert_eq!(
            banner_position(IVec2::new(-4, -8)),
            Vec3::new(-4.0, 80.0, 1.0)
        );
    }

    #[test]
    fn stats_move_against_the_jitter() {
        let jitter = IVec2::new(4, 10);
        assert_eq!(sps_position(jitter), Vec3::new(-23.2, -47.0, 1.0));
        assert_eq!(best_position(jitter), Vec3::new(34.0, -69.0, 1.0));
    }

    #[test]
    fn jitter_scaling_truncates_like_integer_division() {
        // y = 9 halves to 4, not 4.5; x = -4 thirds to -1.
        let jitter = IVec2::new(-4, 9);
        assert_eq!(sps_position(jitter).y, 4.0 - 52.0);
        assert_eq!(best_position(jitter).x, 1.0 + 35.0);
        assert_eq!(best_position(jitter).y, -3.0 - 66.0);
    }
}
