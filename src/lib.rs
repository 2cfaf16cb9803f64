//! starfield: animated parallax starfield backdrop with an ambient audio toggle.
//!
//! This crate renders a twinkling, slowly drifting field of stars onto a
//! full-viewport canvas and mounts a play/pause button for a background
//! audio track. Both pieces start on page load and run independently.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod error;

pub use components::audio_toggle::AudioToggle;
pub use components::starfield::{StarfieldCanvas, StarfieldConfig};
pub use error::{PlaybackError, StarfieldError};

/// Id of the optional `<script type="application/json">` carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "starfield-config";

/// Audio track used when the page does not name one.
pub const DEFAULT_AUDIO_SRC: &str = "audio/ambient.mp3";

/// Page-level settings. Every field may be omitted.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
	pub starfield: StarfieldConfig,
	pub audio_src: String,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			starfield: StarfieldConfig::default(),
			audio_src: DEFAULT_AUDIO_SRC.to_string(),
		}
	}
}

impl AppConfig {
	/// Parse overrides, keeping defaults for anything missing.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		let config: Self = serde_json::from_str(json)?;
		Ok(Self {
			starfield: config.starfield.sanitized(),
			..config
		})
	}
}

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("starfield: logging initialized");
}

/// Load overrides from a script element with id="starfield-config".
/// Expected format: JSON with { starfield: {...}, audio_src: "..." }
pub fn load_config() -> AppConfig {
	let Some(json_text) = config_text() else {
		return AppConfig::default();
	};

	match AppConfig::from_json(&json_text) {
		Ok(config) => {
			info!("starfield: loaded page config: {:?}", config);
			config
		}
		Err(e) => {
			warn!("starfield: failed to parse page config: {}", e);
			AppConfig::default()
		}
	}
}

fn config_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component.
/// Mounts the starfield canvas and the ambient audio toggle.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config();

	view! {
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<StarfieldCanvas config=config.starfield />
		<AudioToggle src=config.audio_src />
	}
}
