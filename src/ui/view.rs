//! Declarative description of what the form shows on a given frame.
//!
//! A [`ViewNode`] tree is the one rendering surface: the terminal renderer
//! lays it out into lines, and the testing harness queries it the way a user
//! would look at the screen (by text, label, role or test id).

use crate::core::NodeId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Form,
    Heading,
    Group,
    Label,
    TextBox,
    Button,
    Alert,
    Region,
    Text,
}

impl Role {
    /// Roles whose `text` is visible prose (what `get_by_text` looks at).
    pub fn carries_text(self) -> bool {
        matches!(
            self,
            Role::Heading | Role::Label | Role::Button | Role::Alert | Role::Text
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewNode {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<NodeId>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_for: Option<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub focused: bool,
    /// Display column of the caret inside `value`, present on the focused text box.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            id: None,
            text: String::new(),
            value: None,
            label_for: None,
            test_id: None,
            focused: false,
            cursor: None,
            children: Vec::new(),
        }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(Role::Heading).with_text(text)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Role::Text).with_text(text)
    }

    pub fn alert(text: impl Into<String>) -> Self {
        Self::new(Role::Alert).with_text(text)
    }

    pub fn label(text: impl Into<String>, target: impl Into<NodeId>) -> Self {
        let mut node = Self::new(Role::Label).with_text(text);
        node.label_for = Some(target.into());
        node
    }

    pub fn text_box(id: impl Into<NodeId>, value: impl Into<String>) -> Self {
        let mut node = Self::new(Role::TextBox).with_id(id);
        node.value = Some(value.into());
        node
    }

    pub fn button(id: impl Into<NodeId>, text: impl Into<String>) -> Self {
        Self::new(Role::Button).with_id(id).with_text(text)
    }

    pub fn with_id(mut self, id: impl Into<NodeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    pub fn with_focus(mut self, focused: bool, cursor: Option<usize>) -> Self {
        self.focused = focused;
        self.cursor = if focused { cursor } else { None };
        self
    }

    pub fn with_child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: ViewNode) {
        self.children.push(child);
    }

    pub fn id_str(&self) -> Option<&str> {
        self.id.as_ref().map(NodeId::as_str)
    }

    /// Depth-first, parent before children.
    pub fn walk(&self) -> Vec<&ViewNode> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&ViewNode> {
        self.walk().into_iter().find(|node| node.id_str() == Some(id))
    }

    /// Own text followed by every descendant's text, like DOM `textContent`.
    pub fn text_content(&self) -> String {
        self.walk()
            .into_iter()
            .map(|node| node.text.as_str())
            .collect()
    }

    /// Name assistive tech would announce: button text, or the text of the
    /// label pointing at this node.
    pub fn accessible_name<'a>(&'a self, root: &'a ViewNode) -> Option<&'a str> {
        if self.role == Role::Button {
            return Some(self.text.as_str());
        }
        let id = self.id_str()?;
        root.walk()
            .into_iter()
            .find(|node| {
                node.role == Role::Label && node.label_for.as_ref().is_some_and(|t| t.as_str() == id)
            })
            .map(|label| label.text.as_str())
    }
}
