use crate::core::NodeId;
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::view::ViewNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Handled,
    NotHandled,
    /// Enter inside a field: move on to the next one.
    Advance,
    Submit,
}

pub trait Input: Send {
    fn id(&self) -> &NodeId;
    fn label(&self) -> &str;
    fn value(&self) -> String;
    fn set_value(&mut self, value: String);

    fn is_focused(&self) -> bool;
    fn set_focused(&mut self, focused: bool);

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult;

    /// Activation by pointer; only buttons react.
    fn click(&mut self) -> KeyResult {
        KeyResult::NotHandled
    }

    fn view(&self) -> ViewNode;

    fn delete_word(&mut self) {}
    fn delete_word_forward(&mut self) {}
}

pub struct InputBase {
    pub id: NodeId,
    pub label: String,
    pub focused: bool,
}

impl InputBase {
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            focused: false,
        }
    }
}
