//! Page components.

pub mod audio_toggle;
pub mod starfield;
