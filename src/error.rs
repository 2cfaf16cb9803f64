//! Error types.

use wasm_bindgen::JsValue;

/// Failures while wiring a component to the page.
#[derive(Debug, thiserror::Error)]
pub enum StarfieldError {
	#[error("no global window")]
	NoWindow,
	#[error("canvas has no 2d context")]
	NoContext,
	#[error("element `{0}` has an unexpected type")]
	WrongElement(&'static str),
	#[error("browser call failed: {0}")]
	Js(String),
}

impl From<JsValue> for StarfieldError {
	fn from(value: JsValue) -> Self {
		Self::Js(describe_js(&value))
	}
}

/// Rejected `HTMLMediaElement.play()`, usually an autoplay policy block.
#[derive(Debug, thiserror::Error)]
#[error("audio playback rejected: {0}")]
pub struct PlaybackError(pub String);

impl From<JsValue> for PlaybackError {
	fn from(value: JsValue) -> Self {
		Self(describe_js(&value))
	}
}

/// Best-effort readable text for a thrown JS value.
pub(crate) fn describe_js(value: &JsValue) -> String {
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
