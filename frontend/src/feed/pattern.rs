//! Synthetic video frames.
//!
//! Each simulated stream is drawn as a flat colour with a sweeping bar, so
//! motion is visible, and a bottom band whose height follows the stream's
//! audio level.

use egui::{Color32, ColorImage, Vec2};

pub(super) const FRAME_WIDTH: usize = 320;
pub(super) const FRAME_HEIGHT: usize = 180;

const BAR_WIDTH: usize = 12;
const BAR_SPEED: u64 = 4;
const METER_MAX_HEIGHT: usize = FRAME_HEIGHT / 4;

/// Simulated speaking level in `0.0..=1.0` at `frame` for a stream with `phase`.
pub(super) fn audio_level(frame: u64, phase: f32, speaking: bool) -> f32 {
    if !speaking {
        return 0.0;
    }
    let t = frame as f32 * 0.21 + phase;
    ((t.sin() * 0.5 + 0.5) * (t * 0.37).cos().abs()).clamp(0.0, 1.0)
}

/// Renders one frame of the test pattern.
pub(super) fn render(base: [u8; 3], frame: u64, level: f32) -> ColorImage {
    let bar_x = ((frame * BAR_SPEED) as usize) % FRAME_WIDTH;
    let meter_top = FRAME_HEIGHT - (level * METER_MAX_HEIGHT as f32) as usize;

    let background = Color32::from_rgb(base[0] / 3, base[1] / 3, base[2] / 3);
    let bar = Color32::from_rgb(base[0], base[1], base[2]);
    let meter = Color32::from_rgb(34, 197, 94);

    let mut pixels = Vec::with_capacity(FRAME_WIDTH * FRAME_HEIGHT);
    for y in 0..FRAME_HEIGHT {
        for x in 0..FRAME_WIDTH {
            let in_bar = x >= bar_x && x < bar_x + BAR_WIDTH;
            let pixel = if y >= meter_top {
                meter
            } else if in_bar {
                bar
            } else {
                background
            };
            pixels.push(pixel);
        }
    }

    ColorImage {
        size: [FRAME_WIDTH, FRAME_HEIGHT],
        pixels,
        source_size: Vec2::new(FRAME_WIDTH as f32, FRAME_HEIGHT as f32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_dimensions() {
        let image = render([200, 100, 50], 0, 0.0);
        assert_eq!(image.size, [FRAME_WIDTH, FRAME_HEIGHT]);
        assert_eq!(image.pixels.len(), FRAME_WIDTH * FRAME_HEIGHT);
    }

    #[test]
    fn test_meter_follows_level() {
        let silent = render([200, 100, 50], 0, 0.0);
        let loud = render([200, 100, 50], 0, 1.0);
        let meter = Color32::from_rgb(34, 197, 94);

        let bottom_left = (FRAME_HEIGHT - 1) * FRAME_WIDTH + FRAME_WIDTH / 2;
        assert_ne!(silent.pixels[bottom_left], meter);
        assert_eq!(loud.pixels[bottom_left], meter);
    }

    #[test]
    fn test_silent_when_not_speaking() {
        for frame in 0..50 {
            assert_eq!(audio_level(frame, 1.3, false), 0.0);
            let level = audio_level(frame, 1.3, true);
            assert!((0.0..=1.0).contains(&level));
        }
    }
}
