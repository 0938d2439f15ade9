//! Form rendering module
//!
//! This module contains UI components for rendering the contact form:
//! - `field_renderer`: Per-field rendering for text and choice variants
//! - `contact_form`: The scrolling form view with its submit button

mod contact_form;
mod field_renderer;

pub use contact_form::draw_contact_form;
