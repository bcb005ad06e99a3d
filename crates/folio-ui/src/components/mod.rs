//! Reusable UI components
//!
//! All components are stateless; the page owns state and passes handlers.

mod button;
mod input;
mod skill_meter;

pub use button::*;
pub use input::*;
pub use skill_meter::*;
