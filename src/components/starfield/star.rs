//! A single star and its randomised attributes.

use rand::Rng;

use super::config::{
	ALPHA_BASE_RANGE, LAYER_SPEEDS, LAYER_THRESHOLDS, PALETTE, SIZE_MIN, SIZE_SPAN, SPEED_JITTER,
	TWINKLE_PHASE_RANGE, TWINKLE_SPEED_RANGE,
};

/// Lower bound on the rendered opacity of a star.
pub const MIN_ALPHA: f64 = 0.08;
/// Upper bound on the glow opacity around a star.
pub const MAX_GLOW_ALPHA: f64 = 0.8;

/// RGB star tint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// CSS `rgba()` string at the given opacity.
	pub fn to_css_rgba(self, a: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, a)
	}
}

/// Uniform draw from `[min, max)`. Degenerate ranges return `min`.
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
	rng.r#gen::<f64>() * (max - min) + min
}

/// Parallax band for a star radius: 0 (far, slow) to 2 (near, fast).
pub fn layer_for_size(size: f64) -> usize {
	if size < LAYER_THRESHOLDS[0] {
		0
	} else if size < LAYER_THRESHOLDS[1] {
		1
	} else {
		2
	}
}

/// One point of light in the field.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
	pub x: f64,
	pub y: f64,
	/// Radius in CSS pixels.
	pub size: f64,
	pub layer: usize,
	/// Leftward drift in px/ms.
	pub speed: f64,
	pub alpha_base: f64,
	pub twinkle_phase: f64,
	pub twinkle_speed: f64,
	pub color: Color,
}

impl Star {
	/// Create a star at a random position inside a `width` x `height` viewport.
	pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
		// Squaring biases the distribution towards small, distant stars.
		let r: f64 = rng.r#gen();
		let size = r * r * SIZE_SPAN + SIZE_MIN;
		let layer = layer_for_size(size);
		let speed = LAYER_SPEEDS[layer] + uniform(rng, -SPEED_JITTER, SPEED_JITTER);
		let color = PALETTE[rng.gen_range(0..PALETTE.len())];

		Self {
			x: uniform(rng, 0.0, width),
			y: uniform(rng, 0.0, height),
			size,
			layer,
			speed,
			alpha_base: uniform(rng, ALPHA_BASE_RANGE.0, ALPHA_BASE_RANGE.1),
			twinkle_phase: uniform(rng, TWINKLE_PHASE_RANGE.0, TWINKLE_PHASE_RANGE.1),
			twinkle_speed: uniform(rng, TWINKLE_SPEED_RANGE.0, TWINKLE_SPEED_RANGE.1),
			color,
		}
	}

	/// Instantaneous opacity, always within `[MIN_ALPHA, 1.0]`.
	pub fn alpha(&self) -> f64 {
		let twinkle = 0.35 + 0.65 * (0.5 + 0.5 * self.twinkle_phase.sin());
		(self.alpha_base * twinkle).clamp(MIN_ALPHA, 1.0)
	}

	/// Opacity of the white glow drawn around the star.
	pub fn glow_alpha(&self) -> f64 {
		(self.alpha() + 0.2).min(MAX_GLOW_ALPHA)
	}
}
