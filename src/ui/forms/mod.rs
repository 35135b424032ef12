//! Form rendering module
//!
//! - `field_renderer`: single input field with label and error
//! - `registration_form`: the registration form and its REGISTER button

mod field_renderer;
mod registration_form;

pub use registration_form::draw as draw_registration;

#[cfg(test)]
pub use registration_form::REGISTER_LABEL;
