//! Logical viewport size and device pixel ratio.
//!
//! Drawing happens in CSS pixels. The canvas backing buffer is sized in
//! physical pixels and a uniform `dpr` transform maps one onto the other.

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Viewport dimensions in CSS pixels plus the clamped pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
	pub dpr: f64,
}

impl Default for Viewport {
	fn default() -> Self {
		Self {
			width: 0.0,
			height: 0.0,
			dpr: 1.0,
		}
	}
}

impl Viewport {
	/// Build from raw window metrics.
	///
	/// A missing or non-positive `device_pixel_ratio` falls back to
	/// `previous_dpr`; the result is clamped into `[1, max_dpr]`.
	pub fn measure(
		inner_width: f64,
		inner_height: f64,
		device_pixel_ratio: f64,
		previous_dpr: f64,
		max_dpr: f64,
	) -> Self {
		let raw = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
			device_pixel_ratio
		} else {
			previous_dpr
		};
		Self {
			width: floor_or_zero(inner_width),
			height: floor_or_zero(inner_height),
			dpr: raw.min(max_dpr).max(1.0),
		}
	}

	/// Read the live window metrics.
	pub fn from_window(window: &web_sys::Window, previous_dpr: f64, max_dpr: f64) -> Self {
		let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
			v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
		};
		Self::measure(
			dim(window.inner_width()),
			dim(window.inner_height()),
			window.device_pixel_ratio(),
			previous_dpr,
			max_dpr,
		)
	}

	/// Physical size of the backing pixel buffer.
	pub fn backing_size(&self) -> (u32, u32) {
		(
			(self.width * self.dpr).floor() as u32,
			(self.height * self.dpr).floor() as u32,
		)
	}

	/// Logical area in square CSS pixels.
	pub fn area(&self) -> f64 {
		self.width * self.height
	}

	/// Size the canvas buffer and CSS box, then install the `dpr` scale.
	pub fn apply(&self, canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d) {
		let (bw, bh) = self.backing_size();
		canvas.set_width(bw);
		canvas.set_height(bh);
		let style = canvas.style();
		let _ = style.set_property("width", &format!("{}px", self.width));
		let _ = style.set_property("height", &format!("{}px", self.height));
		// Resizing the buffer resets the context, so the transform goes last.
		let _ = ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
	}
}

fn floor_or_zero(v: f64) -> f64 {
	if v.is_finite() && v > 0.0 { v.floor() } else { 0.0 }
}
