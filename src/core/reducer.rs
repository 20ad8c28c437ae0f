use crate::core::event::Action;
use crate::core::event_queue::AppEvent;
use crate::core::field::Field;
use crate::core::form::ContactForm;
use crate::core::form_engine::FormEvent;
use crate::core::state::SubmitOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Emit(AppEvent),
    Exit,
}

/// The single place where actions mutate a [`ContactForm`].
pub struct Reducer;

impl Reducer {
    pub fn reduce(form: &mut ContactForm, action: Action) -> Vec<Effect> {
        match action {
            Action::Exit => vec![Effect::Exit],
            Action::Submit => Self::handle_submit(form),
            Action::Reset => {
                form.remount();
                vec![]
            }
            Action::NextInput => {
                let events = form.engine_mut().move_focus(1);
                Self::apply_form_events(form, events)
            }
            Action::PrevInput => {
                let events = form.engine_mut().move_focus(-1);
                Self::apply_form_events(form, events)
            }
            Action::DeleteWord => {
                let events = form.engine_mut().handle_delete_word(false);
                Self::apply_form_events(form, events)
            }
            Action::DeleteWordForward => {
                let events = form.engine_mut().handle_delete_word(true);
                Self::apply_form_events(form, events)
            }
            Action::InputKey(key) => {
                let events = form.engine_mut().handle_key(key);
                Self::apply_form_events(form, events)
            }
            Action::Focus(id) => {
                let events = form.engine_mut().focus_id(id.as_str());
                Self::apply_form_events(form, events)
            }
            Action::Click(id) => {
                let events = form.engine_mut().click(id.as_str());
                Self::apply_form_events(form, events)
            }
        }
    }

    /// Folds engine events into form state, in order. Each value change is
    /// revalidated before the next event is looked at.
    pub fn apply_form_events(form: &mut ContactForm, events: Vec<FormEvent>) -> Vec<Effect> {
        let mut effects = Vec::new();

        for event in events {
            match event {
                FormEvent::InputChanged { id, value } => {
                    let Some(field) = Field::from_key(id.as_str()) else {
                        continue;
                    };
                    form.apply_input(field, value.clone());
                    effects.push(Effect::Emit(AppEvent::InputChanged { field, value }));
                }
                FormEvent::FocusChanged { from, to } => {
                    effects.push(Effect::Emit(AppEvent::FocusChanged { from, to }));
                }
                FormEvent::SubmitRequested => {
                    effects.extend(Self::handle_submit(form));
                }
            }
        }

        effects
    }

    fn handle_submit(form: &mut ContactForm) -> Vec<Effect> {
        match form.submit() {
            SubmitOutcome::Accepted(submission) => {
                vec![Effect::Emit(AppEvent::Submitted(submission))]
            }
            SubmitOutcome::Rejected(errors) => {
                vec![Effect::Emit(AppEvent::SubmitRejected {
                    fields: errors.keys().copied().collect(),
                })]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crate::core::NodeId;
    use crate::core::state::Phase;
    use crate::terminal::{KeyCode, KeyEvent};

    fn form() -> ContactForm {
        ContactForm::new(FormConfig::default()).expect("form")
    }

    fn type_str(form: &mut ContactForm, text: &str) -> Vec<Effect> {
        text.chars()
            .flat_map(|ch| Reducer::reduce(form, Action::InputKey(KeyEvent::char(ch))))
            .collect()
    }

    #[test]
    fn each_keystroke_emits_input_changed_and_revalidates() {
        let mut form = form();
        let effects = type_str(&mut form, "kai");
        assert_eq!(effects.len(), 3);
        assert_eq!(
            effects.last(),
            Some(&Effect::Emit(AppEvent::InputChanged {
                field: Field::FirstName,
                value: "kai".to_string()
            }))
        );
        assert!(form.state().error(Field::FirstName).is_some());
    }

    #[test]
    fn submit_action_on_empty_form_is_rejected() {
        let mut form = form();
        let effects = Reducer::reduce(&mut form, Action::Submit);
        assert_eq!(
            effects,
            vec![Effect::Emit(AppEvent::SubmitRejected {
                fields: vec![Field::FirstName, Field::LastName, Field::Email]
            })]
        );
    }

    #[test]
    fn enter_walks_fields_then_button_submits() {
        let mut form = form();
        let enter = || Action::InputKey(KeyEvent::plain(KeyCode::Enter));
        type_str(&mut form, "Jonason");
        Reducer::reduce(&mut form, enter());
        type_str(&mut form, "lovingfoss");
        Reducer::reduce(&mut form, enter());
        type_str(&mut form, "sayo0804@gmail.com");
        Reducer::reduce(&mut form, enter());
        Reducer::reduce(&mut form, enter());
        assert_eq!(form.focused_id().map(NodeId::as_str), Some("submit"));

        let effects = Reducer::reduce(&mut form, enter());
        assert!(matches!(effects.as_slice(), [Effect::Emit(AppEvent::Submitted(_))]));
        assert_eq!(form.state().phase(), Phase::Submitted);
    }

    #[test]
    fn click_on_button_submits() {
        let mut form = form();
        let effects = Reducer::reduce(&mut form, Action::Click(NodeId::from("submit")));
        assert!(matches!(
            effects.last(),
            Some(Effect::Emit(AppEvent::SubmitRejected { .. }))
        ));
    }

    #[test]
    fn reset_remounts_empty_state() {
        let mut form = form();
        type_str(&mut form, "kai");
        Reducer::reduce(&mut form, Action::Submit);
        Reducer::reduce(&mut form, Action::Reset);
        assert!(form.state().errors().is_empty());
        assert_eq!(form.state().value(Field::FirstName), "");
        assert!(!form.state().submit_attempted());
    }

    #[test]
    fn exit_is_an_effect() {
        assert_eq!(Reducer::reduce(&mut form(), Action::Exit), vec![Effect::Exit]);
    }
}
