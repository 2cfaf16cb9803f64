//! Ambient audio play/pause button.

mod component;
mod playback;

pub use component::AudioToggle;
pub use playback::{PlaybackState, ToggleAction, ToggleState};

/// DOM id of the ambient `<audio>` element.
pub const AUDIO_ID: &str = "ambient-audio";
/// DOM id of the toggle button.
pub const BUTTON_ID: &str = "audio-btn";
