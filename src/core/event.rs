use crate::core::NodeId;
use crate::terminal::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Exit,
    Submit,
    Reset,
    NextInput,
    PrevInput,
    DeleteWord,
    DeleteWordForward,
    InputKey(KeyEvent),
    Focus(NodeId),
    Click(NodeId),
}
