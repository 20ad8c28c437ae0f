use crate::config::FormConfig;
use crate::core::NodeId;
use crate::core::event::Action;
use crate::core::field::Field;
use crate::core::form_engine::FormEngine;
use crate::core::reducer::{Effect, Reducer};
use crate::core::state::{FormState, SubmitOutcome, Submission};
use crate::core::validation::ValidationRules;
use crate::error::Result;
use crate::input::{Button, Input, TextInput};
use crate::ui::view::{Role, ViewNode};
use tracing::{debug, info};

pub const SUBMIT_ID: &str = "submit";
pub const SUBMIT_LABEL: &str = "Submit";
pub const MESSAGE_DISPLAY_TEST_ID: &str = "messageDisplay";
pub const SUMMARY_TEST_ID: &str = "summary";

/// The contact form component: four text fields, a submit button and, after a
/// valid submit, a summary of what was sent.
pub struct ContactForm {
    config: FormConfig,
    rules: ValidationRules,
    state: FormState,
    engine: FormEngine,
}

impl ContactForm {
    pub fn new(config: FormConfig) -> Result<Self> {
        let rules = ValidationRules::from_config(&config)?;
        Ok(Self {
            config,
            rules,
            state: FormState::new(),
            engine: FormEngine::new(build_inputs()),
        })
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn focused_id(&self) -> Option<&NodeId> {
        self.engine.focused_id()
    }

    pub(crate) fn engine_mut(&mut self) -> &mut FormEngine {
        &mut self.engine
    }

    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        Reducer::reduce(self, action)
    }

    /// Replaces a field's value as if the user had retyped it.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) -> Vec<Effect> {
        let events = self.engine.set_value(field.key(), value.into());
        Reducer::apply_form_events(self, events)
    }

    pub(crate) fn apply_input(&mut self, field: Field, value: String) {
        self.state.apply_input(field, value, &self.rules);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.state.submit(&self.rules);
        match &outcome {
            SubmitOutcome::Accepted(submission) => {
                info!(
                    message_len = submission.message.chars().count(),
                    "contact form submitted"
                );
            }
            SubmitOutcome::Rejected(errors) => {
                debug!(failed = errors.len(), "submit rejected");
            }
        }
        outcome
    }

    /// Drops all local state, as if the component were unmounted and mounted again.
    pub fn remount(&mut self) {
        self.state = FormState::new();
        self.engine.reset();
        debug!("contact form remounted");
    }

    pub fn view(&self) -> ViewNode {
        let mut root = ViewNode::new(Role::Form).with_child(ViewNode::heading(self.config.header.clone()));

        for field in Field::ALL {
            let Some(input) = self.engine.input(field.key()) else {
                continue;
            };
            root.push(
                ViewNode::new(Role::Group)
                    .with_child(ViewNode::label(field.label(), field.node_id()))
                    .with_child(input.view()),
            );
            if let Some(error) = self.state.error(field) {
                root.push(ViewNode::alert(error).with_id(format!("{}-error", field.key())));
            }
        }

        if let Some(button) = self.engine.input(SUBMIT_ID) {
            root.push(button.view());
        }

        if let Some(hint) = &self.config.hint {
            root.push(ViewNode::text(hint.clone()).with_id("hint"));
        }

        if let Some(submission) = self.state.submission() {
            root.push(summary_view(submission));
        }

        root
    }
}

fn build_inputs() -> Vec<Box<dyn Input>> {
    let mut inputs: Vec<Box<dyn Input>> = Field::ALL
        .into_iter()
        .map(|field| Box::new(TextInput::new(field.key(), field.label())) as Box<dyn Input>)
        .collect();
    inputs.push(Box::new(Button::new(SUBMIT_ID, SUBMIT_LABEL)));
    inputs
}

fn summary_view(submission: &Submission) -> ViewNode {
    let mut region = ViewNode::new(Role::Region)
        .with_test_id(SUMMARY_TEST_ID)
        .with_child(ViewNode::text("You Submitted:"))
        .with_child(ViewNode::text(format!("First Name: {}", submission.first_name)))
        .with_child(ViewNode::text(format!("Last Name: {}", submission.last_name)))
        .with_child(ViewNode::text(format!("Email: {}", submission.email)));

    if !submission.message.is_empty() {
        region.push(
            ViewNode::new(Role::Group)
                .with_child(ViewNode::text("Message:"))
                .with_child(ViewNode::text(submission.message.clone()).with_test_id(MESSAGE_DISPLAY_TEST_ID)),
        );
    }
    region
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Phase;

    fn form() -> ContactForm {
        ContactForm::new(FormConfig::default()).expect("form")
    }

    fn texts(view: &ViewNode, role: Role) -> Vec<String> {
        view.walk()
            .into_iter()
            .filter(|n| n.role == role)
            .map(|n| n.text.clone())
            .collect()
    }

    #[test]
    fn mounted_view_has_header_labels_and_button() {
        let view = form().view();
        assert_eq!(texts(&view, Role::Heading), vec!["Contact Form"]);
        assert_eq!(
            texts(&view, Role::Label),
            vec!["First Name", "Last Name", "Email", "Message"]
        );
        assert_eq!(texts(&view, Role::Button), vec!["Submit"]);
        assert!(texts(&view, Role::Alert).is_empty());
    }

    #[test]
    fn errors_render_after_their_field() {
        let mut form = form();
        form.set_value(Field::LastName, "x");
        form.set_value(Field::LastName, "");
        let view = form.view();
        let alert_pos = view
            .children
            .iter()
            .position(|n| n.role == Role::Alert)
            .expect("alert");
        let group = &view.children[alert_pos - 1];
        assert_eq!(group.children[0].text, "Last Name");
        assert_eq!(view.children[alert_pos].text, "lastName is a required field.");
    }

    #[test]
    fn summary_omits_message_display_when_message_empty() {
        let mut form = form();
        form.set_value(Field::FirstName, "Jonason");
        form.set_value(Field::LastName, "lovingfoss");
        form.set_value(Field::Email, "sayo0804@gmail.com");
        assert!(matches!(form.submit(), SubmitOutcome::Accepted(_)));

        let view = form.view();
        let summary = texts(&view, Role::Text);
        assert!(summary.contains(&"First Name: Jonason".to_string()));
        assert!(summary.contains(&"Email: sayo0804@gmail.com".to_string()));
        assert!(
            view.walk()
                .iter()
                .all(|n| n.test_id.as_deref() != Some(MESSAGE_DISPLAY_TEST_ID))
        );
    }

    #[test]
    fn editing_after_submit_returns_to_editing_but_keeps_summary() {
        let mut form = form();
        form.set_value(Field::FirstName, "Jonason");
        form.set_value(Field::LastName, "lovingfoss");
        form.set_value(Field::Email, "sayo0804@gmail.com");
        form.submit();
        form.set_value(Field::FirstName, "Jo");

        assert_eq!(form.state().phase(), Phase::Editing);
        let view = form.view();
        assert!(texts(&view, Role::Text).contains(&"First Name: Jonason".to_string()));
        assert!(texts(&view, Role::Alert).contains(&"firstName must have at least 5 characters.".to_string()));
    }

    #[test]
    fn header_comes_from_config() {
        let config = FormConfig {
            header: "Say hello".to_string(),
            hint: None,
            ..FormConfig::default()
        };
        let view = ContactForm::new(config).expect("form").view();
        assert_eq!(texts(&view, Role::Heading), vec!["Say hello"]);
        assert!(view.find_by_id("hint").is_none());
    }
}
