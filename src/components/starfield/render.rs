//! Canvas rendering for the starfield.
//!
//! Each frame clears the canvas to transparent so the page background shows
//! through, then draws every star as a filled circle with a white shadow
//! glow. Drawing goes through [`Surface`] so the pass can be exercised
//! without a browser.

use std::f64::consts::PI;
use std::ops::Deref;

use web_sys::CanvasRenderingContext2d;

use super::star::Star;
use super::viewport::Viewport;

/// Shadow blur radius used for the glow.
const GLOW_BLUR: f64 = 8.0;

/// The drawing operations the starfield needs from a 2D context.
pub trait Surface {
	fn clear(&self, width: f64, height: f64);
	fn save(&self);
	fn restore(&self);
	fn set_fill(&self, css: &str);
	fn set_shadow(&self, css: &str, blur: f64);
	fn fill_circle(&self, x: f64, y: f64, radius: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn save(&self) {
		CanvasRenderingContext2d::save(self);
	}

	fn restore(&self) {
		CanvasRenderingContext2d::restore(self);
	}

	fn set_fill(&self, css: &str) {
		self.set_fill_style_str(css);
	}

	fn set_shadow(&self, css: &str, blur: f64) {
		self.set_shadow_color(css);
		self.set_shadow_blur(blur);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}
}

/// Drawing state saved on construction and restored when dropped.
pub struct SavedState<'a, S: Surface + ?Sized> {
	surface: &'a S,
}

impl<'a, S: Surface + ?Sized> SavedState<'a, S> {
	pub fn new(surface: &'a S) -> Self {
		surface.save();
		Self { surface }
	}
}

impl<S: Surface + ?Sized> Deref for SavedState<'_, S> {
	type Target = S;

	fn deref(&self) -> &S {
		self.surface
	}
}

impl<S: Surface + ?Sized> Drop for SavedState<'_, S> {
	fn drop(&mut self) {
		self.surface.restore();
	}
}

/// Renders the whole field for the current frame.
pub fn render<S: Surface + ?Sized>(surface: &S, viewport: &Viewport, stars: &[Star]) {
	surface.clear(viewport.width, viewport.height);
	for star in stars {
		draw_star(surface, star);
	}
}

fn draw_star<S: Surface + ?Sized>(surface: &S, star: &Star) {
	let alpha = star.alpha();
	surface.set_fill(&star.color.to_css_rgba(alpha));

	let scoped = SavedState::new(surface);
	scoped.set_shadow(&format!("rgba(255, 255, 255, {})", star.glow_alpha()), GLOW_BLUR);
	scoped.fill_circle(star.x, star.y, star.size);
}
