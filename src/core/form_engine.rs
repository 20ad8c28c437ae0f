use crate::core::NodeId;
use crate::input::{Input, KeyResult};
use crate::terminal::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    InputChanged { id: NodeId, value: String },
    FocusChanged { from: Option<NodeId>, to: Option<NodeId> },
    SubmitRequested,
}

/// Focus ring and key routing over the focusable inputs of one form.
pub struct FormEngine {
    inputs: Vec<Box<dyn Input>>,
    focus_index: Option<usize>,
}

impl FormEngine {
    pub fn new(inputs: Vec<Box<dyn Input>>) -> Self {
        let mut engine = Self {
            inputs,
            focus_index: None,
        };
        engine.focus_first();
        engine
    }

    pub fn inputs(&self) -> &[Box<dyn Input>] {
        &self.inputs
    }

    pub fn input(&self, id: &str) -> Option<&dyn Input> {
        self.inputs.iter().find(|i| i.id() == id).map(|i| &**i)
    }

    pub fn focus_index(&self) -> Option<usize> {
        self.focus_index
    }

    pub fn focused_id(&self) -> Option<&NodeId> {
        self.focus_index
            .and_then(|i| self.inputs.get(i))
            .map(|input| input.id())
    }

    pub fn find_index_by_id(&self, id: &str) -> Option<usize> {
        self.inputs.iter().position(|i| i.id() == id)
    }

    pub fn move_focus(&mut self, direction: isize) -> Vec<FormEvent> {
        if self.inputs.is_empty() {
            return vec![];
        }
        let current = self.focus_index.unwrap_or(0) as isize;
        let len = self.inputs.len() as isize;
        let next = (current + direction).rem_euclid(len) as usize;

        let mut events = Vec::new();
        self.set_focus(Some(next), &mut events);
        events
    }

    pub fn focus_id(&mut self, id: &str) -> Vec<FormEvent> {
        let mut events = Vec::new();
        if let Some(index) = self.find_index_by_id(id) {
            self.set_focus(Some(index), &mut events);
        }
        events
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<FormEvent> {
        let mut events = Vec::new();
        let result = self.update_focused(&mut events, |input| {
            input.handle_key(key.code, key.modifiers)
        });
        self.follow_up(result, &mut events);
        events
    }

    pub fn handle_delete_word(&mut self, forward: bool) -> Vec<FormEvent> {
        let mut events = Vec::new();
        self.update_focused(&mut events, |input| {
            if forward {
                input.delete_word_forward();
            } else {
                input.delete_word();
            }
            KeyResult::Handled
        });
        events
    }

    /// Pointer activation: focus moves to the target first, then it is clicked.
    pub fn click(&mut self, id: &str) -> Vec<FormEvent> {
        let mut events = self.focus_id(id);
        let Some(index) = self.find_index_by_id(id) else {
            return events;
        };
        let result = self.inputs[index].click();
        self.follow_up(result, &mut events);
        events
    }

    pub fn set_value(&mut self, id: &str, value: String) -> Vec<FormEvent> {
        let Some(input) = self.inputs.iter_mut().find(|i| i.id() == id) else {
            return vec![];
        };
        if input.value() == value {
            return vec![];
        }
        input.set_value(value.clone());
        vec![FormEvent::InputChanged {
            id: input.id().clone(),
            value,
        }]
    }

    pub fn reset(&mut self) {
        for input in &mut self.inputs {
            input.set_value(String::new());
            input.set_focused(false);
        }
        self.focus_index = None;
        self.focus_first();
    }

    fn focus_first(&mut self) {
        if !self.inputs.is_empty() {
            let mut ignored = Vec::new();
            self.set_focus(Some(0), &mut ignored);
        }
    }

    fn set_focus(&mut self, new_index: Option<usize>, events: &mut Vec<FormEvent>) {
        if new_index == self.focus_index {
            return;
        }
        let from = self.focused_id().cloned();

        if let Some(input) = self.focus_index.and_then(|i| self.inputs.get_mut(i)) {
            input.set_focused(false);
        }
        if let Some(input) = new_index.and_then(|i| self.inputs.get_mut(i)) {
            input.set_focused(true);
        }
        self.focus_index = new_index;

        let to = self.focused_id().cloned();
        events.push(FormEvent::FocusChanged { from, to });
    }

    fn follow_up(&mut self, result: KeyResult, events: &mut Vec<FormEvent>) {
        match result {
            KeyResult::Advance => events.extend(self.move_focus(1)),
            KeyResult::Submit => events.push(FormEvent::SubmitRequested),
            KeyResult::Handled | KeyResult::NotHandled => {}
        }
    }

    fn update_focused<F>(&mut self, events: &mut Vec<FormEvent>, update: F) -> KeyResult
    where
        F: FnOnce(&mut dyn Input) -> KeyResult,
    {
        let Some(input) = self.focus_index.and_then(|i| self.inputs.get_mut(i)) else {
            return KeyResult::NotHandled;
        };

        let before = input.value();
        let result = update(&mut **input);
        let after = input.value();

        if before != after {
            events.push(FormEvent::InputChanged {
                id: input.id().clone(),
                value: after,
            });
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Button, TextInput};
    use crate::terminal::KeyCode;

    fn engine() -> FormEngine {
        FormEngine::new(vec![
            Box::new(TextInput::new("firstName", "First Name")),
            Box::new(TextInput::new("lastName", "Last Name")),
            Box::new(Button::new("submit", "Submit")),
        ])
    }

    #[test]
    fn first_input_is_focused_on_creation() {
        let engine = engine();
        assert_eq!(engine.focus_index(), Some(0));
        assert!(engine.input("firstName").is_some_and(|i| i.is_focused()));
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut engine = engine();
        engine.move_focus(-1);
        assert_eq!(engine.focused_id().map(NodeId::as_str), Some("submit"));
        engine.move_focus(1);
        assert_eq!(engine.focused_id().map(NodeId::as_str), Some("firstName"));
    }

    #[test]
    fn typing_reports_changes_only() {
        let mut engine = engine();
        let events = engine.handle_key(KeyEvent::char('k'));
        assert_eq!(
            events,
            vec![FormEvent::InputChanged {
                id: NodeId::from("firstName"),
                value: "k".to_string()
            }]
        );
        assert!(engine.handle_key(KeyEvent::plain(KeyCode::Left)).is_empty());
    }

    #[test]
    fn enter_in_text_input_advances() {
        let mut engine = engine();
        let events = engine.handle_key(KeyEvent::plain(KeyCode::Enter));
        assert!(matches!(events.as_slice(), [FormEvent::FocusChanged { .. }]));
        assert_eq!(engine.focused_id().map(NodeId::as_str), Some("lastName"));
    }

    #[test]
    fn click_on_button_focuses_and_requests_submit() {
        let mut engine = engine();
        let events = engine.click("submit");
        assert_eq!(events.last(), Some(&FormEvent::SubmitRequested));
        assert_eq!(engine.focused_id().map(NodeId::as_str), Some("submit"));
    }

    #[test]
    fn click_on_text_input_only_focuses() {
        let mut engine = engine();
        let events = engine.click("lastName");
        assert_eq!(events.len(), 1);
        assert!(!events.contains(&FormEvent::SubmitRequested));
    }

    #[test]
    fn reset_clears_values_and_refocuses_first() {
        let mut engine = engine();
        engine.set_value("lastName", "lovingfoss".to_string());
        engine.focus_id("submit");
        engine.reset();
        assert_eq!(engine.input("lastName").map(|i| i.value()), Some(String::new()));
        assert_eq!(engine.focus_index(), Some(0));
    }

    #[test]
    fn set_value_with_same_value_is_silent() {
        let mut engine = engine();
        assert!(engine.set_value("firstName", String::new()).is_empty());
        assert!(engine.set_value("nope", "x".to_string()).is_empty());
    }
}
