//! Leptos component wrapping the starfield canvas.
//!
//! The component creates a full-viewport canvas, sizes it for the current
//! window and device pixel ratio, and starts a `requestAnimationFrame` loop
//! that draws the field and then advances it. A passive `resize` listener
//! keeps the backing buffer and the star population in step with the window.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::StarfieldConfig;
use super::render;
use super::state::StarfieldState;
use super::viewport::Viewport;
use super::CANVAS_ID;
use crate::error::StarfieldError;

/// Simulation state bundled with the canvas it draws to.
struct StarfieldContext {
	state: StarfieldState<SmallRng>,
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

type Slot<T> = Rc<RefCell<Option<T>>>;

/// Renders the animated starfield behind the page content.
///
/// The canvas is fixed to the viewport, ignores pointer events and is
/// cleared to transparent every frame, so whatever background the page
/// paints stays visible between the stars.
#[component]
pub fn StarfieldCanvas(#[prop(default = StarfieldConfig::default())] config: StarfieldConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Slot<StarfieldContext> = Rc::new(RefCell::new(None));
	let animate: Slot<Closure<dyn FnMut(f64)>> = Rc::new(RefCell::new(None));
	let resize_cb: Slot<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		if let Err(e) = start(canvas, config.clone(), &context, &animate, &resize_cb) {
			error!("starfield: failed to start: {e}");
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id=CANVAS_ID
			class="starfield-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; display: block; pointer-events: none; z-index: 0;"
		/>
	}
}

fn start(
	canvas: HtmlCanvasElement,
	config: StarfieldConfig,
	context: &Slot<StarfieldContext>,
	animate: &Slot<Closure<dyn FnMut(f64)>>,
	resize_cb: &Slot<Closure<dyn FnMut()>>,
) -> Result<(), StarfieldError> {
	let window: Window = web_sys::window().ok_or(StarfieldError::NoWindow)?;
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or(StarfieldError::NoContext)?
		.dyn_into()
		.map_err(|_| StarfieldError::WrongElement("2d context"))?;

	let config = config.sanitized();
	let viewport = Viewport::from_window(&window, 1.0, config.max_dpr);
	viewport.apply(&canvas, &ctx);

	let state = StarfieldState::new(config, viewport, SmallRng::seed_from_u64(entropy_seed()));
	info!(
		"starfield: {} stars for {}x{} @ {}x",
		state.stars.len(),
		viewport.width,
		viewport.height,
		viewport.dpr
	);
	*context.borrow_mut() = Some(StarfieldContext { state, canvas, ctx });

	let context_resize = context.clone();
	*resize_cb.borrow_mut() = Some(Closure::new(move || {
		let Some(win) = web_sys::window() else {
			return;
		};
		if let Some(ref mut c) = *context_resize.borrow_mut() {
			let vp = Viewport::from_window(&win, c.state.viewport.dpr, c.state.config.max_dpr);
			vp.apply(&c.canvas, &c.ctx);
			c.state.resize(vp);
			debug!(
				"starfield: resized to {}x{} @ {}x, {} stars",
				vp.width,
				vp.height,
				vp.dpr,
				c.state.stars.len()
			);
		}
	}));
	if let Some(ref cb) = *resize_cb.borrow() {
		let options = AddEventListenerOptions::new();
		options.set_passive(true);
		window.add_event_listener_with_callback_and_add_event_listener_options(
			"resize",
			cb.as_ref().unchecked_ref(),
			&options,
		)?;
	}

	let (context_anim, animate_inner) = (context.clone(), animate.clone());
	*animate.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
		if let Some(ref mut c) = *context_anim.borrow_mut() {
			let dt = c.state.frame_delta(timestamp);
			// Draw first, then advance: each frame shows the positions the
			// previous update produced.
			render::render(&c.ctx, &c.state.viewport, &c.state.stars);
			c.state.update(dt);
		}
		if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
			let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		window.request_animation_frame(cb.as_ref().unchecked_ref())?;
	}

	Ok(())
}

/// Seed for the star RNG drawn from the browser's `Math.random`.
fn entropy_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}
