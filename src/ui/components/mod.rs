//! Reusable UI components

mod button;

pub use button::{render_centered_button, BUTTON_HEIGHT};
