//! Synthesized user input. Every character is a separate key event, so the
//! form revalidates after each one just as it does for a real typist.

use crate::core::NodeId;
use crate::core::event::Action;
use crate::terminal::{KeyCode, KeyEvent};
use crate::testing::screen::{QueryError, QueryResult, Screen};
use crate::ui::view::{Role, ViewNode};

pub fn click(screen: &mut Screen, node: &ViewNode) -> QueryResult<()> {
    let id = target_id(node)?;
    screen.dispatch(Action::Click(id));
    Ok(())
}

/// Clicks into `node`, then types `text` at the caret. Empty text only focuses.
pub fn type_text(screen: &mut Screen, node: &ViewNode, text: &str) -> QueryResult<()> {
    let id = editable_id(node)?;
    screen.dispatch(Action::Click(id));
    for ch in text.chars() {
        let key = match ch {
            '\n' => KeyEvent::plain(KeyCode::Enter),
            '\t' => KeyEvent::plain(KeyCode::Tab),
            ch => KeyEvent::char(ch),
        };
        screen.press(key);
    }
    Ok(())
}

/// Empties a text box with one backspace per character.
pub fn clear(screen: &mut Screen, node: &ViewNode) -> QueryResult<()> {
    let id = editable_id(node)?;
    screen.dispatch(Action::Click(id.clone()));
    screen.press(KeyEvent::plain(KeyCode::End));

    let len = screen
        .view()
        .find_by_id(id.as_str())
        .and_then(|n| n.value.as_ref())
        .map(|v| v.chars().count())
        .unwrap_or(0);
    for _ in 0..len {
        screen.press(KeyEvent::plain(KeyCode::Backspace));
    }
    Ok(())
}

fn target_id(node: &ViewNode) -> QueryResult<NodeId> {
    node.id
        .clone()
        .ok_or_else(|| QueryError::NotInteractive(format!("{:?} {:?}", node.role, node.text)))
}

fn editable_id(node: &ViewNode) -> QueryResult<NodeId> {
    if node.role != Role::TextBox {
        return Err(QueryError::NotInteractive(format!(
            "{:?} {:?}",
            node.role, node.text
        )));
    }
    target_id(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crate::core::form::ContactForm;
    use crate::testing::{TextMatch, render};

    fn screen() -> Screen {
        render(ContactForm::new(FormConfig::default()).expect("form"))
    }

    #[test]
    fn typing_fills_the_labelled_input() {
        let mut screen = screen();
        let email = screen.get_by_label_text("Email").expect("email");
        type_text(&mut screen, &email, "a@b.co").expect("type");
        let email = screen.get_by_label_text("Email").expect("email");
        assert_eq!(email.value.as_deref(), Some("a@b.co"));
        assert!(email.focused);
    }

    #[test]
    fn clear_empties_the_input() {
        let mut screen = screen();
        let name = screen.get_by_label_text("First Name").expect("name");
        type_text(&mut screen, &name, "Jonason").expect("type");
        clear(&mut screen, &name).expect("clear");
        let name = screen.get_by_label_text("First Name").expect("name");
        assert_eq!(name.value.as_deref(), Some(""));
        screen
            .get_by_text("firstName must have at least 5 characters.")
            .expect("error after clearing");
    }

    #[test]
    fn typing_into_a_heading_is_refused() {
        let mut screen = screen();
        let heading = screen.get_by_text(TextMatch::contains("contact form")).expect("heading");
        assert!(matches!(
            type_text(&mut screen, &heading, "x"),
            Err(QueryError::NotInteractive(_))
        ));
    }
}
