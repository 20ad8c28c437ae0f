//! Replays a YAML list of user actions against a headless form.
//!
//! ```yaml
//! - action: type
//!   label: First Name
//!   text: Jonason
//! - action: click
//!   name: Submit
//! ```

use crate::error::{Error, Result};
use crate::testing::screen::QueryError;
use crate::testing::{Screen, TextMatch, user_event};
use crate::ui::view::Role;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    Type { label: String, text: String },
    Clear { label: String },
    Click { name: String },
    Submit,
}

pub fn parse(source: &str) -> Result<Vec<ScriptStep>> {
    Ok(serde_yaml::from_str(source)?)
}

pub fn load(path: impl AsRef<Path>) -> Result<Vec<ScriptStep>> {
    let source = fs::read_to_string(path)?;
    parse(&source)
}

pub fn run(screen: &mut Screen, steps: &[ScriptStep]) -> Result<()> {
    for (idx, step) in steps.iter().enumerate() {
        debug!(step = idx + 1, ?step, "script step");
        apply(screen, step).map_err(|err| Error::Script {
            step: idx + 1,
            reason: err.to_string(),
        })?;
    }
    Ok(())
}

fn apply(screen: &mut Screen, step: &ScriptStep) -> std::result::Result<(), QueryError> {
    match step {
        ScriptStep::Type { label, text } => {
            let input = screen.get_by_label_text(label.as_str())?;
            user_event::type_text(screen, &input, text)
        }
        ScriptStep::Clear { label } => {
            let input = screen.get_by_label_text(label.as_str())?;
            user_event::clear(screen, &input)
        }
        ScriptStep::Click { name } => {
            let button = screen.get_by_role(Role::Button, TextMatch::exact(name.as_str()))?;
            user_event::click(screen, &button)
        }
        ScriptStep::Submit => {
            let button = screen.get_by_role(Role::Button, TextMatch::exact("Submit"))?;
            user_event::click(screen, &button)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crate::core::form::ContactForm;
    use crate::core::state::Phase;
    use crate::testing::render;

    const SCRIPT: &str = r#"
- action: type
  label: First Name
  text: Jonason
- action: type
  label: Last Name
  text: lovingfoss
- action: type
  label: Email
  text: sayo0804@gmail.com
- action: click
  name: Submit
"#;

    #[test]
    fn parses_all_step_kinds() {
        let steps = parse("- action: clear\n  label: Email\n- action: submit\n").expect("parse");
        assert_eq!(
            steps,
            vec![
                ScriptStep::Clear {
                    label: "Email".to_string()
                },
                ScriptStep::Submit
            ]
        );
    }

    #[test]
    fn replays_a_successful_submission() {
        let mut screen = render(ContactForm::new(FormConfig::default()).expect("form"));
        run(&mut screen, &parse(SCRIPT).expect("parse")).expect("run");
        assert_eq!(screen.app().form().state().phase(), Phase::Submitted);
        screen.get_by_text("Last Name: lovingfoss").expect("summary");
    }

    #[test]
    fn unknown_label_names_the_failing_step() {
        let mut screen = render(ContactForm::new(FormConfig::default()).expect("form"));
        let steps = parse("- action: submit\n- action: type\n  label: Phone\n  text: '1'\n").expect("parse");
        let err = run(&mut screen, &steps).unwrap_err();
        assert!(matches!(err, Error::Script { step: 2, .. }), "{err}");
    }
}
