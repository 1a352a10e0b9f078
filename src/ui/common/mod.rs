//! Common reusable UI components

pub mod button;
pub mod message;
pub mod spinner;

pub use button::Button;
pub use message::{ErrorMessage, SuccessMessage};
pub use spinner::InlineSpinner;
