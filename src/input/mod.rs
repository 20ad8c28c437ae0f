pub mod button;
pub mod input;
pub mod text_input;
pub mod validators;

pub use button::Button;
pub use input::{Input, InputBase, KeyResult};
pub use text_input::TextInput;
