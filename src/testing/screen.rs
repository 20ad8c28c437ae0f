use crate::app::App;
use crate::core::event::Action;
use crate::core::form::ContactForm;
use crate::terminal::KeyEvent;
use crate::testing::text_match::TextMatch;
use crate::ui::view::{Role, ViewNode};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("unable to find an element {query}")]
    NotFound { query: String },

    #[error("found {count} elements {query}, expected one")]
    Multiple { query: String, count: usize },

    #[error("element {0} cannot receive input")]
    NotInteractive(String),
}

pub type QueryResult<T> = Result<T, QueryError>;

/// Mounts `form` and returns the screen it renders to.
pub fn render(form: ContactForm) -> Screen {
    Screen { app: App::new(form) }
}

/// A mounted form seen from the outside. Every query looks at a fresh view, so
/// results reflect all events dispatched so far.
pub struct Screen {
    app: App,
}

impl Screen {
    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn view(&self) -> ViewNode {
        self.app.view()
    }

    /// Plain-text rendering of the current frame, one entry per terminal line.
    pub fn debug(&self) -> Vec<String> {
        self.app.frame().plain_lines()
    }

    pub(crate) fn dispatch(&mut self, action: Action) {
        self.app.dispatch(action);
        self.app.tick();
    }

    pub(crate) fn press(&mut self, key: KeyEvent) {
        self.app.handle_key(key);
        self.app.tick();
    }

    pub fn get_all_by_text(&self, matcher: impl Into<TextMatch>) -> QueryResult<Vec<ViewNode>> {
        let matcher = matcher.into();
        let found = self.find_all(|node, _| node.role.carries_text() && matcher.matches(&node.text));
        if found.is_empty() {
            return Err(QueryError::NotFound {
                query: format!("with text {matcher}"),
            });
        }
        Ok(found)
    }

    pub fn get_by_text(&self, matcher: impl Into<TextMatch>) -> QueryResult<ViewNode> {
        let matcher = matcher.into();
        let found = self.find_all(|node, _| node.role.carries_text() && matcher.matches(&node.text));
        expect_one(found, format!("with text {matcher}"))
    }

    pub fn query_by_text(&self, matcher: impl Into<TextMatch>) -> QueryResult<Option<ViewNode>> {
        let matcher = matcher.into();
        let found = self.find_all(|node, _| node.role.carries_text() && matcher.matches(&node.text));
        at_most_one(found, format!("with text {matcher}"))
    }

    /// Finds the input a matching label points at.
    pub fn get_by_label_text(&self, matcher: impl Into<TextMatch>) -> QueryResult<ViewNode> {
        let matcher = matcher.into();
        let query = format!("with label {matcher}");
        let root = self.view();
        let labels: Vec<&ViewNode> = root
            .walk()
            .into_iter()
            .filter(|node| node.role == Role::Label && matcher.matches(&node.text))
            .collect();

        let targets: Vec<ViewNode> = labels
            .iter()
            .filter_map(|label| label.label_for.as_ref())
            .filter_map(|target| root.find_by_id(target.as_str()))
            .cloned()
            .collect();
        expect_one(targets, query)
    }

    pub fn get_by_role(&self, role: Role, name: impl Into<TextMatch>) -> QueryResult<ViewNode> {
        let name = name.into();
        let found = self.find_all(|node, root| {
            node.role == role && node.accessible_name(root).is_some_and(|n| name.matches(n))
        });
        expect_one(found, format!("with role {role:?} and name {name}"))
    }

    pub fn get_by_test_id(&self, test_id: &str) -> QueryResult<ViewNode> {
        let found = self.find_all(|node, _| node.test_id.as_deref() == Some(test_id));
        expect_one(found, format!("with test id {test_id:?}"))
    }

    pub fn query_by_test_id(&self, test_id: &str) -> QueryResult<Option<ViewNode>> {
        let found = self.find_all(|node, _| node.test_id.as_deref() == Some(test_id));
        at_most_one(found, format!("with test id {test_id:?}"))
    }

    fn find_all<F>(&self, predicate: F) -> Vec<ViewNode>
    where
        F: Fn(&ViewNode, &ViewNode) -> bool,
    {
        let root = self.view();
        root.walk()
            .into_iter()
            .filter(|node| predicate(node, &root))
            .cloned()
            .collect()
    }
}

fn expect_one(mut found: Vec<ViewNode>, query: String) -> QueryResult<ViewNode> {
    match found.len() {
        0 => Err(QueryError::NotFound { query }),
        1 => Ok(found.remove(0)),
        count => Err(QueryError::Multiple { query, count }),
    }
}

fn at_most_one(mut found: Vec<ViewNode>, query: String) -> QueryResult<Option<ViewNode>> {
    match found.len() {
        0 => Ok(None),
        1 => Ok(Some(found.remove(0))),
        count => Err(QueryError::Multiple { query, count }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;

    fn screen() -> Screen {
        render(ContactForm::new(FormConfig::default()).expect("form"))
    }

    #[test]
    fn label_query_resolves_to_input() {
        let screen = screen();
        let input = screen.get_by_label_text(TextMatch::contains("last name")).expect("input");
        assert_eq!(input.role, Role::TextBox);
        assert_eq!(input.id_str(), Some("lastName"));
    }

    #[test]
    fn ambiguous_query_reports_count() {
        let screen = screen();
        let err = screen.get_by_label_text(TextMatch::contains("name")).unwrap_err();
        assert_eq!(
            err,
            QueryError::Multiple {
                query: "with label *\"name\"*".to_string(),
                count: 2
            }
        );
    }

    #[test]
    fn missing_text_is_not_found_for_get_and_none_for_query() {
        let screen = screen();
        assert!(matches!(
            screen.get_by_text("First Name: Jonason"),
            Err(QueryError::NotFound { .. })
        ));
        assert_eq!(screen.query_by_text("First Name: Jonason"), Ok(None));
        assert_eq!(screen.query_by_test_id("messageDisplay"), Ok(None));
    }

    #[test]
    fn button_is_found_by_role_and_name() {
        let screen = screen();
        let button = screen
            .get_by_role(Role::Button, TextMatch::contains("submit"))
            .expect("button");
        assert_eq!(button.id_str(), Some("submit"));
    }

    #[test]
    fn debug_prints_frame_lines() {
        let lines = screen().debug();
        assert_eq!(lines.first().map(String::as_str), Some("Contact Form"));
        assert!(lines.contains(&"[ Submit ]".to_string()));
    }
}
