//! Headless harness for the contact form: render it, look things up the way a
//! user reads the screen, and drive it with synthesized input.

pub mod screen;
pub mod text_match;
pub mod user_event;

pub use screen::{QueryError, Screen, render};
pub use text_match::TextMatch;
