use crate::core::NodeId;
use crate::input::{Input, InputBase, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::view::ViewNode;

pub struct Button {
    base: InputBase,
    clicks: u64,
}

impl Button {
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id, label),
            clicks: 0,
        }
    }

    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    fn press(&mut self) -> KeyResult {
        self.clicks += 1;
        KeyResult::Submit
    }
}

impl Input for Button {
    fn id(&self) -> &NodeId {
        &self.base.id
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> String {
        String::new()
    }

    fn set_value(&mut self, _value: String) {}

    fn is_focused(&self) -> bool {
        self.base.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.focused = focused;
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Enter => self.press(),
            KeyCode::Char(' ') if modifiers == KeyModifiers::NONE => self.press(),
            _ => KeyResult::NotHandled,
        }
    }

    fn click(&mut self) -> KeyResult {
        self.press()
    }

    fn view(&self) -> ViewNode {
        ViewNode::button(self.base.id.clone(), self.base.label.clone()).with_focus(self.base.focused, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_space_and_click_submit() {
        let mut button = Button::new("submit", "Submit");
        assert_eq!(button.handle_key(KeyCode::Enter, KeyModifiers::NONE), KeyResult::Submit);
        assert_eq!(button.handle_key(KeyCode::Char(' '), KeyModifiers::NONE), KeyResult::Submit);
        assert_eq!(button.click(), KeyResult::Submit);
        assert_eq!(button.handle_key(KeyCode::Char('x'), KeyModifiers::NONE), KeyResult::NotHandled);
        assert_eq!(button.clicks(), 3);
    }
}
