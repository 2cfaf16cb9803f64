//! Starfield simulation state.
//!
//! Owns the star population, the viewport it lives in and the frame clock.
//! Created once when the component mounts; the resize listener and the
//! animation loop are the only callers that mutate it.

use rand::Rng;

use super::config::StarfieldConfig;
use super::star::{Star, uniform};
use super::viewport::Viewport;

/// Amplitude of the per-star vertical shimmer (px/ms).
const SHIMMER_AMPLITUDE: f64 = 0.01;
/// Frequency factor applied to `phase + index` for the shimmer.
const SHIMMER_FREQUENCY: f64 = 0.35;
/// Constant downward drift (px/ms).
const DRIFT_Y: f64 = 0.0035;
/// Converts twinkle speed into radians per millisecond.
const TWINKLE_RATE: f64 = 0.0025;

/// Turns animation-frame timestamps into bounded frame deltas.
#[derive(Clone, Debug)]
pub struct FrameClock {
	last: Option<f64>,
	cap_ms: f64,
	default_ms: f64,
}

impl FrameClock {
	pub fn new(cap_ms: f64, default_ms: f64) -> Self {
		Self {
			last: None,
			cap_ms,
			default_ms,
		}
	}

	/// Milliseconds to advance for a frame stamped `timestamp`.
	///
	/// The first frame, and any frame whose delta is zero, negative or NaN,
	/// uses the default delta. Every delta is capped so a stalled or
	/// backgrounded tab does not fling stars across the screen.
	pub fn delta(&mut self, timestamp: f64) -> f64 {
		let raw = self.last.map(|prev| timestamp - prev);
		self.last = Some(timestamp);
		match raw {
			Some(d) if d > 0.0 => d.min(self.cap_ms),
			_ => self.default_ms.min(self.cap_ms),
		}
	}
}

/// Everything the frame loop and resize handler share.
pub struct StarfieldState<R: Rng> {
	pub config: StarfieldConfig,
	pub viewport: Viewport,
	pub stars: Vec<Star>,
	pub clock: FrameClock,
	rng: R,
}

impl<R: Rng> StarfieldState<R> {
	/// Build a fresh population sized for `viewport`.
	pub fn new(config: StarfieldConfig, viewport: Viewport, rng: R) -> Self {
		let clock = FrameClock::new(config.frame_cap_ms, config.default_frame_ms);
		let mut state = Self {
			config,
			viewport,
			stars: Vec::new(),
			clock,
			rng,
		};
		state.rebuild();
		state
	}

	/// Population size the current viewport calls for.
	pub fn target_count(&self) -> usize {
		self.config
			.target_count(self.viewport.width, self.viewport.height)
	}

	/// Discard every star and regenerate to the target count.
	pub fn rebuild(&mut self) {
		self.stars.clear();
		self.sync_population();
	}

	/// Adopt a new viewport and pad or trim the population to match.
	///
	/// Surviving stars keep all their attributes, including positions that
	/// now lie outside the viewport; they wrap back in on their own.
	pub fn resize(&mut self, viewport: Viewport) {
		self.viewport = viewport;
		self.sync_population();
	}

	fn sync_population(&mut self) {
		let target = self.target_count();
		if self.stars.len() > target {
			self.stars.truncate(target);
			return;
		}
		let (w, h) = (self.viewport.width, self.viewport.height);
		let missing = target - self.stars.len();
		self.stars.reserve(missing);
		for _ in 0..missing {
			let star = Star::spawn(&mut self.rng, w, h);
			self.stars.push(star);
		}
	}

	/// Advance every star by `dt` milliseconds.
	pub fn update(&mut self, dt: f64) {
		let (width, height) = (self.viewport.width, self.viewport.height);
		let drift_y = DRIFT_Y * dt;

		for (i, s) in self.stars.iter_mut().enumerate() {
			s.x -= s.speed * dt;
			s.y += ((s.twinkle_phase + i as f64) * SHIMMER_FREQUENCY).sin() * SHIMMER_AMPLITUDE * dt
				+ drift_y;
			s.twinkle_phase += s.twinkle_speed * TWINKLE_RATE * dt;

			if s.x < -s.size {
				s.x = width + s.size;
				s.y = uniform(&mut self.rng, 0.0, height);
			}
			if s.y > height + s.size {
				s.y = -s.size;
			}
		}
	}

	/// Frame delta for an animation-frame timestamp.
	pub fn frame_delta(&mut self, timestamp: f64) -> f64 {
		self.clock.delta(timestamp)
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	fn viewport(width: f64, height: f64) -> Viewport {
		Viewport {
			width,
			height,
			dpr: 1.0,
		}
	}

	fn state(width: f64, height: f64) -> StarfieldState<SmallRng> {
		StarfieldState::new(
			StarfieldConfig::default(),
			viewport(width, height),
			SmallRng::seed_from_u64(9),
		)
	}

	#[test]
	fn initial_population_matches_area() {
		for (w, h) in [(1920.0, 1080.0), (320.0, 480.0), (10.0, 10.0), (2560.0, 1440.0)] {
			let s = state(w, h);
			let expected = ((w * h * 0.00045_f64).round() as usize).max(50);
			assert_eq!(s.stars.len(), expected, "{w}x{h}");
		}
		assert_eq!(state(1920.0, 1080.0).stars.len(), 933);
	}

	#[test]
	fn shrinking_truncates_tail_and_keeps_survivors() {
		let mut s = state(1920.0, 1080.0);
		let before = s.stars.clone();
		s.resize(viewport(800.0, 600.0));
		assert_eq!(s.stars.len(), 216);
		assert_eq!(s.stars[..], before[..216]);
	}

	#[test]
	fn growing_appends_without_touching_survivors() {
		let mut s = state(800.0, 600.0);
		let before = s.stars.clone();
		s.resize(viewport(1920.0, 1080.0));
		assert_eq!(s.stars.len(), 933);
		assert_eq!(s.stars[..before.len()], before[..]);
		for star in &s.stars[before.len()..] {
			assert!(star.x >= 0.0 && star.x < 1920.0);
			assert!(star.y >= 0.0 && star.y < 1080.0);
		}
	}

	#[test]
	fn resize_to_same_target_is_a_no_op() {
		let mut s = state(1000.0, 1000.0);
		let before = s.stars.clone();
		s.resize(viewport(1000.0, 1000.0));
		assert_eq!(s.stars, before);
	}

	#[test]
	fn rebuild_regenerates_population() {
		let mut s = state(1000.0, 1000.0);
		let before = s.stars.clone();
		s.rebuild();
		assert_eq!(s.stars.len(), before.len());
		assert_ne!(s.stars, before);
	}

	#[test]
	fn stars_drift_left_and_down() {
		let mut s = state(1000.0, 1000.0);
		for star in &mut s.stars {
			star.x = 500.0;
			star.y = 500.0;
		}
		let before = s.stars.clone();
		s.update(16.0);
		for (i, (a, b)) in before.iter().zip(&s.stars).enumerate() {
			assert!((b.x - (a.x - a.speed * 16.0)).abs() < 1e-9);
			let shimmer = ((a.twinkle_phase + i as f64) * 0.35).sin() * 0.01 * 16.0;
			assert!((b.y - (a.y + shimmer + 0.0035 * 16.0)).abs() < 1e-9);
			assert!((b.twinkle_phase - (a.twinkle_phase + a.twinkle_speed * 0.0025 * 16.0)).abs() < 1e-12);
		}
	}

	#[test]
	fn star_leaving_left_edge_reappears_at_right() {
		let mut s = state(800.0, 600.0);
		s.stars.truncate(1);
		let star = &mut s.stars[0];
		star.x = -star.size + 0.01;
		star.y = 300.0;
		let size = star.size;
		s.update(32.0);
		let star = &s.stars[0];
		assert_eq!(star.x, 800.0 + size);
		assert!(star.x >= 800.0);
		assert!(star.y >= 0.0 && star.y < 600.0);
	}

	#[test]
	fn star_leaving_bottom_reappears_at_top() {
		let mut s = state(800.0, 600.0);
		s.stars.truncate(1);
		let star = &mut s.stars[0];
		star.x = 400.0;
		let (size, x_before, speed) = (star.size, star.x, star.speed);
		// Upward shimmer is bounded by 0.01 * dt, so start clear of it.
		star.y = 600.0 + size + 1.0;
		s.update(16.0);
		let star = &s.stars[0];
		assert_eq!(star.y, -size);
		assert!((star.x - (x_before - speed * 16.0)).abs() < 1e-9);
	}

	#[test]
	fn wrapped_stars_stay_near_viewport_over_many_frames() {
		let mut s = state(640.0, 480.0);
		for _ in 0..5000 {
			s.update(32.0);
		}
		for star in &s.stars {
			assert!(star.x >= -star.size && star.x <= 640.0 + star.size);
			assert!(star.y <= 480.0 + star.size);
		}
	}

	#[test]
	fn first_frame_uses_default_delta() {
		let mut clock = FrameClock::new(32.0, 16.7);
		assert_eq!(clock.delta(12_345.0), 16.7);
	}

	#[test]
	fn stall_is_capped() {
		let mut clock = FrameClock::new(32.0, 16.7);
		clock.delta(1_000.0);
		assert_eq!(clock.delta(1_016.0), 16.0);
		assert_eq!(clock.delta(6_016.0), 32.0);
	}

	#[test]
	fn repeated_or_backwards_timestamp_uses_default() {
		let mut clock = FrameClock::new(32.0, 16.7);
		clock.delta(100.0);
		assert_eq!(clock.delta(100.0), 16.7);
		assert_eq!(clock.delta(50.0), 16.7);
		assert_eq!(clock.delta(f64::NAN), 16.7);
	}

	#[test]
	fn state_frame_delta_caps_at_config_limit() {
		let mut s = state(100.0, 100.0);
		s.frame_delta(0.0);
		assert_eq!(s.frame_delta(5_000.0), 32.0);
	}
}
