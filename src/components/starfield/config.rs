//! Tunable constants for the starfield.
//!
//! Population density, pixel-ratio ceiling and frame-time limits can be
//! overridden from the page (see [`crate::load_config`]); everything that
//! shapes an individual star is fixed.

use std::f64::consts::TAU;

use serde::Deserialize;

use super::star::Color;

/// Stars per square CSS pixel.
pub const STAR_DENSITY: f64 = 0.00045;
/// Floor on the population regardless of viewport area.
pub const MIN_STARS: usize = 50;
/// Ceiling on the device pixel ratio used for the backing buffer.
pub const MAX_DPR: f64 = 2.0;
/// Largest frame delta (ms) the simulation will advance by.
pub const FRAME_CAP_MS: f64 = 32.0;
/// Frame delta (ms) used when no usable previous timestamp exists.
pub const DEFAULT_FRAME_MS: f64 = 16.7;

/// Base horizontal speed (px/ms) for each parallax layer, far to near.
pub const LAYER_SPEEDS: [f64; 3] = [0.015, 0.03, 0.06];
/// Size thresholds separating layer 0 from 1 and 1 from 2.
pub const LAYER_THRESHOLDS: [f64; 2] = [0.6, 1.2];
/// Random speed offset applied on top of the layer speed.
pub const SPEED_JITTER: f64 = 0.008;

/// Smallest star radius.
pub const SIZE_MIN: f64 = 0.2;
/// Span added to `SIZE_MIN` by the squared random draw.
pub const SIZE_SPAN: f64 = 2.2;

/// Range of the per-star base opacity.
pub const ALPHA_BASE_RANGE: (f64, f64) = (0.35, 0.95);
/// Range of the initial twinkle phase.
pub const TWINKLE_PHASE_RANGE: (f64, f64) = (0.0, TAU);
/// Range of the twinkle angular rate.
pub const TWINKLE_SPEED_RANGE: (f64, f64) = (0.2, 0.6);

/// Near-white star tints.
pub const PALETTE: [Color; 4] = [
	Color::rgb(255, 255, 255), // white
	Color::rgb(250, 240, 255), // lavender blush
	Color::rgb(235, 215, 255), // soft violet
	Color::rgb(220, 200, 255), // pale violet
];

/// Page-overridable starfield settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
	/// Stars per square CSS pixel.
	pub density: f64,
	/// Minimum population.
	pub min_stars: usize,
	/// Device pixel ratio ceiling.
	pub max_dpr: f64,
	/// Largest frame delta in milliseconds.
	pub frame_cap_ms: f64,
	/// Frame delta used on the first tick or after a bogus timestamp.
	pub default_frame_ms: f64,
}

impl Default for StarfieldConfig {
	fn default() -> Self {
		Self {
			density: STAR_DENSITY,
			min_stars: MIN_STARS,
			max_dpr: MAX_DPR,
			frame_cap_ms: FRAME_CAP_MS,
			default_frame_ms: DEFAULT_FRAME_MS,
		}
	}
}

impl StarfieldConfig {
	/// Replace nonsensical values with the built-in defaults.
	pub fn sanitized(self) -> Self {
		let defaults = Self::default();
		Self {
			density: if self.density.is_finite() && self.density >= 0.0 {
				self.density
			} else {
				defaults.density
			},
			min_stars: self.min_stars,
			max_dpr: if self.max_dpr.is_finite() && self.max_dpr >= 1.0 {
				self.max_dpr
			} else {
				defaults.max_dpr
			},
			frame_cap_ms: if self.frame_cap_ms.is_finite() && self.frame_cap_ms > 0.0 {
				self.frame_cap_ms
			} else {
				defaults.frame_cap_ms
			},
			default_frame_ms: if self.default_frame_ms.is_finite() && self.default_frame_ms > 0.0 {
				self.default_frame_ms
			} else {
				defaults.default_frame_ms
			},
		}
	}

	/// Number of stars for a viewport of the given logical size.
	pub fn target_count(&self, width: f64, height: f64) -> usize {
		let wanted = (width * height * self.density).round();
		// Negative or NaN areas collapse to the minimum.
		let wanted = if wanted.is_finite() && wanted > 0.0 {
			wanted as usize
		} else {
			0
		};
		wanted.max(self.min_stars)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn full_hd_viewport_targets_933_stars() {
		let config = StarfieldConfig::default();
		assert_eq!(config.target_count(1920.0, 1080.0), 933);
	}

	#[test]
	fn small_viewport_is_floored_at_minimum() {
		let config = StarfieldConfig::default();
		assert_eq!(config.target_count(100.0, 100.0), MIN_STARS);
		assert_eq!(config.target_count(0.0, 0.0), MIN_STARS);
	}

	#[test]
	fn target_count_rounds_to_nearest() {
		let config = StarfieldConfig::default();
		// 400 * 400 * 0.00045 = 72.0
		assert_eq!(config.target_count(400.0, 400.0), 72);
		// 1000 * 1001 * 0.00045 = 450.45
		assert_eq!(config.target_count(1000.0, 1001.0), 450);
		// 1000 * 1002 * 0.00045 = 450.9
		assert_eq!(config.target_count(1000.0, 1002.0), 451);
	}

	#[test]
	fn partial_json_keeps_remaining_defaults() {
		let config: StarfieldConfig = serde_json::from_str(r#"{ "density": 0.001 }"#).unwrap();
		assert_eq!(config.density, 0.001);
		assert_eq!(config.min_stars, MIN_STARS);
		assert_eq!(config.max_dpr, MAX_DPR);
	}

	#[test]
	fn sanitized_rejects_bad_values() {
		let config = StarfieldConfig {
			density: -1.0,
			min_stars: 10,
			max_dpr: 0.5,
			frame_cap_ms: 0.0,
			default_frame_ms: f64::NAN,
		}
		.sanitized();
		assert_eq!(config.density, STAR_DENSITY);
		assert_eq!(config.min_stars, 10);
		assert_eq!(config.max_dpr, MAX_DPR);
		assert_eq!(config.frame_cap_ms, FRAME_CAP_MS);
		assert_eq!(config.default_frame_ms, DEFAULT_FRAME_MS);
	}
}
