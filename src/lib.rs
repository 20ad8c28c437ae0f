pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod script;
pub mod terminal;
pub mod testing;
pub mod ui;

pub use app::App;
pub use config::FormConfig;
pub use crate::core::field::Field;
pub use crate::core::form::ContactForm;
pub use crate::core::state::{FormState, FormValues, Phase, SubmitOutcome, Submission};
pub use crate::core::validation::ErrorMap;
pub use error::{Error, Result};
