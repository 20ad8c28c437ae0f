use crate::core::event::Action;
use crate::core::field::Field;
use crate::core::state::Submission;
use crate::core::NodeId;
use crate::terminal::KeyEvent;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Action(Action),
    InputChanged {
        field: Field,
        value: String,
    },
    FocusChanged {
        from: Option<NodeId>,
        to: Option<NodeId>,
    },
    Submitted(Submission),
    SubmitRejected {
        fields: Vec<Field>,
    },
}

/// FIFO: events are handled strictly in the order they were emitted.
#[derive(Debug, Default)]
pub struct EventQueue {
    queue: VecDeque<AppEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: AppEvent) {
        self.queue.push_back(event);
    }

    pub fn next(&mut self) -> Option<AppEvent> {
        self.queue.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_come_out_in_emission_order() {
        let mut queue = EventQueue::new();
        queue.emit(AppEvent::Action(Action::NextInput));
        queue.emit(AppEvent::Action(Action::Submit));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.next(), Some(AppEvent::Action(Action::NextInput)));
        assert_eq!(queue.next(), Some(AppEvent::Action(Action::Submit)));
        assert!(queue.is_empty());
        assert_eq!(queue.next(), None);
    }
}
