//! Folio UI Components
//!
//! Dioxus primitives shared by the portfolio page: buttons, form fields
//! and the skill meter.
//!
//! ## Design Notes
//!
//! Components only carry class names and ARIA attributes; colours and
//! transitions live in the page stylesheet so the light and dark themes
//! can restyle them through CSS custom properties.

pub mod components;

pub use components::*;
