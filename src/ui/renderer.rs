use crate::terminal::Terminal;
use crate::ui::frame::{CursorPos, Frame, Line};
use crate::ui::span::Span;
use crate::ui::style::Style;
use crate::ui::theme::Theme;
use crate::ui::view::{Role, ViewNode};
use std::io;

#[derive(Debug, Clone, Copy, Default)]
struct LayoutCtx {
    in_region: bool,
}

/// Turns a view tree into terminal lines and keeps the painted region in place
/// between frames.
pub struct Renderer {
    origin: Option<u16>,
    last_height: u16,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            origin: None,
            last_height: 0,
        }
    }

    pub fn layout(root: &ViewNode, theme: &Theme) -> Frame {
        let mut frame = Frame::new();
        layout_node(root, theme, LayoutCtx::default(), &mut frame);
        frame.trim_trailing_empty();
        frame
    }

    pub fn render(&mut self, root: &ViewNode, theme: &Theme, terminal: &mut Terminal) -> io::Result<()> {
        let frame = Self::layout(root, theme);
        self.paint(&frame, terminal)
    }

    pub fn paint(&mut self, frame: &Frame, terminal: &mut Terminal) -> io::Result<()> {
        let origin = match self.origin {
            Some(origin) => origin,
            None => terminal.cursor_position()?.y,
        };
        let height = frame.next_row().max(self.last_height);
        let origin = terminal.reserve_rows(origin, height)?;

        terminal.queue_hide_cursor()?;
        terminal.render_frame(frame, origin)?;
        terminal.queue_move_cursor(0, origin.saturating_add(frame.next_row()))?;
        terminal.queue_clear_from_cursor_down()?;

        if let Some(cursor) = frame.cursor() {
            terminal.queue_move_cursor(cursor.col, origin.saturating_add(cursor.row))?;
            terminal.queue_show_cursor()?;
        }
        terminal.flush()?;

        self.origin = Some(origin);
        self.last_height = frame.next_row();
        Ok(())
    }

    pub fn move_to_end(&self, terminal: &mut Terminal) -> io::Result<()> {
        if let Some(origin) = self.origin {
            terminal.queue_move_cursor(0, origin.saturating_add(self.last_height))?;
            terminal.flush()?;
        }
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn layout_node(node: &ViewNode, theme: &Theme, ctx: LayoutCtx, frame: &mut Frame) {
    match node.role {
        Role::Form => {
            for child in &node.children {
                layout_node(child, theme, ctx, frame);
            }
        }
        Role::Heading => {
            let mut line = Line::new();
            line.push(Span::styled(&node.text, theme.heading));
            frame.push_line(line);
            frame.blank_line();
        }
        Role::Region => {
            frame.blank_line();
            let inner = LayoutCtx { in_region: true };
            for child in &node.children {
                layout_node(child, theme, inner, frame);
            }
        }
        Role::Group => layout_group(node, theme, ctx, frame),
        Role::Alert => {
            let mut line = Line::new();
            line.push(Span::styled(format!("  ! {}", node.text), theme.error));
            frame.push_line(line);
        }
        Role::Button => {
            frame.blank_line();
            let style = if node.focused {
                theme.button_focused
            } else {
                theme.button
            };
            let mut line = Line::new();
            line.push(Span::styled(format!("[ {} ]", node.text), style));
            frame.push_line(line);
        }
        Role::Text | Role::Label | Role::TextBox => {
            let mut line = Line::new();
            push_inline(node, theme, ctx, false, &mut line, frame);
            frame.push_line(line);
        }
    }
}

fn layout_group(node: &ViewNode, theme: &Theme, ctx: LayoutCtx, frame: &mut Frame) {
    let group_focused = node.children.iter().any(|child| child.focused);
    let mut line = Line::new();
    for (idx, child) in node.children.iter().enumerate() {
        if idx > 0 && child.role == Role::Text {
            line.push(Span::new(" "));
        }
        push_inline(child, theme, ctx, group_focused, &mut line, frame);
    }
    frame.push_line(line);
}

fn push_inline(
    node: &ViewNode,
    theme: &Theme,
    ctx: LayoutCtx,
    group_focused: bool,
    line: &mut Line,
    frame: &mut Frame,
) {
    match node.role {
        Role::Label => {
            let style = if group_focused {
                theme.label_focused
            } else {
                theme.label
            };
            line.push(Span::styled(format!("{}: ", node.text), style));
        }
        Role::TextBox => {
            let value = node.value.as_deref().unwrap_or_default();
            let style = if node.focused {
                Style { bold: true, ..theme.value }
            } else {
                theme.value
            };
            if let Some(cursor) = node.cursor {
                frame.set_cursor(CursorPos {
                    row: frame.next_row(),
                    col: (line.width() + cursor) as u16,
                });
            }
            line.push(Span::styled(value, style));
            // keeps an empty field visible as an underlined slot
            line.push(Span::styled(" ", style));
        }
        _ => {
            let style = if ctx.in_region {
                theme.summary
            } else {
                theme.hint
            };
            line.push(Span::styled(&node.text, style));
        }
    }
}
