//! The procedural checkerboard overlay.

use bevy::asset::RenderAssetUsages;
use bevy::image::ImageSampler;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::screens::Screen;

/// The overlay is generated at the fixed virtual resolution and drawn
/// unscaled, whatever the window size.
const OVERLAY_WIDTH: u32 = 320;
const OVERLAY_HEIGHT: u32 = 180;

/// Alpha of the dark dots, out of 255.
const DOT_ALPHA: u8 = 32;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<OverlayAssets>();
    app.add_systems(OnEnter(Screen::Gameplay), spawn_overlay);
}

/// Generated once and reused for every activation of the gameplay screen.
#[derive(Resource)]
pub struct OverlayAssets {
    pub checkerboard: Handle<Image>,
}

impl FromWorld for OverlayAssets {
    fn from_world(world: &mut World) -> Self {
        let mut images = world.resource_mut::<Assets<Image>>();
        OverlayAssets {
            checkerboard: images.add(checkerboard_image()),
        }
    }
}

/// RGBA8 pixel buffer with a faint black dot on every pixel whose
/// coordinates are both even; the remaining three pixels of each 2x2 tile
/// stay fully transparent.
fn checkerboard_pixels(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = vec![0; (width * height * 4) as usize];
    for y in (0..height).step_by(2) {
        for x in (0..width).step_by(2) {
            let offset = ((y * width + x) * 4) as usize;
            pixels[offset + 3] = DOT_ALPHA;
        }
    }
    pixels
}

fn checkerboard_image() -> Image {
    let mut image = Image::new(
        Extent3d {
            width: OVERLAY_WIDTH,
            height: OVERLAY_HEIGHT,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        checkerboard_pixels(OVERLAY_WIDTH, OVERLAY_HEIGHT),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    );
    // No magnification filtering, the dot grid has to stay crisp.
    image.sampler = ImageSampler::nearest();
    image
}

fn spawn_overlay(overlay: Res<OverlayAssets>, mut commands: Commands) {
    commands.spawn((
        Name::new("Checkerboard Overlay"),
        StateScoped(Screen::Gameplay),
        Sprite::from_image(overlay.checkerboard.clone()),
        // Composited over everything else, centered on the viewport.
        Transform::from_xyz(0.0, 0.0, 10.0),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(pixels: &[u8], width: u32, x: u32, y: u32) -> &[u8] {
        let offset = ((y * width + x) * 4) as usize;
        &pixels[offset..offset + 4]
    }

    #[test]
    fn buffer_covers_the_whole_overlay() {
        let pixels = checkerboard_pixels(OVERLAY_WIDTH, OVERLAY_HEIGHT);
        assert_eq!(pixels.len(), (OVERLAY_WIDTH * OVERLAY_HEIGHT * 4) as usize);
    }

    #[test]
    fn only_even_even_pixels_carry_a_dot() {
        let pixels = checkerboard_pixels(8, 6);
        for y in 0..6 {
            for x in 0..8 {
                let expected_alpha = if x % 2 == 0 && y % 2 == 0 { DOT_ALPHA } else { 0 };
                assert_eq!(
                    pixel(&pixels, 8, x, y),
                    [0, 0, 0, expected_alpha],
                    "wrong pixel at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn one_dot_per_tile_at_full_size() {
        let pixels = checkerboard_pixels(OVERLAY_WIDTH, OVERLAY_HEIGHT);
        let dots = pixels.chunks_exact(4).filter(|p| p[3] == DOT_ALPHA).count();
        assert_eq!(dots, (OVERLAY_WIDTH / 2 * OVERLAY_HEIGHT / 2) as usize);
    }
}
