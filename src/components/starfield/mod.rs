//! Animated parallax starfield.
//!
//! Draws a field of softly glowing stars on a full-viewport canvas:
//! - Population proportional to viewport area, padded or trimmed on resize
//! - Three parallax layers chosen by star size, all drifting left
//! - Sinusoidal twinkle and a slow vertical shimmer
//! - Edge wrap-around so stars recycle instead of respawning
//!
//! # Example
//!
//! ```ignore
//! use starfield::components::starfield::{StarfieldCanvas, StarfieldConfig};
//!
//! view! { <StarfieldCanvas config=StarfieldConfig::default() /> }
//! ```

mod component;
pub mod config;
mod render;
mod state;
mod star;
mod viewport;

pub use component::StarfieldCanvas;
pub use config::StarfieldConfig;
pub use render::{SavedState, Surface};
pub use star::{Color, Star};
pub use state::{FrameClock, StarfieldState};
pub use viewport::Viewport;

/// DOM id of the starfield canvas.
pub const CANVAS_ID: &str = "space";
