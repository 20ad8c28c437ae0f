use crate::error::Result;
use crate::ui::frame::Frame;
use crate::ui::style::Color;
use crate::ui::view::ViewNode;

pub fn frame_to_json(frame: &Frame) -> serde_json::Value {
    let cursor = frame.cursor().map(|c| {
        serde_json::json!({
            "row": c.row,
            "col": c.col,
        })
    });

    let lines = frame
        .lines()
        .iter()
        .map(|line| {
            serde_json::Value::Array(
                line.spans()
                    .iter()
                    .map(|span| {
                        serde_json::json!({
                            "text": span.text,
                            "style": {
                                "color": span.style.color.map(color_to_json),
                                "background": span.style.background.map(color_to_json),
                                "bold": span.style.bold,
                                "underline": span.style.underline,
                            }
                        })
                    })
                    .collect(),
            )
        })
        .collect::<Vec<_>>();

    serde_json::json!({
        "cursor": cursor,
        "lines": lines,
    })
}

pub fn view_to_json(view: &ViewNode) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(view)?)
}

fn color_to_json(color: Color) -> serde_json::Value {
    let name = match color {
        Color::Black => "black",
        Color::DarkGrey => "dark_grey",
        Color::Red => "red",
        Color::Green => "green",
        Color::Yellow => "yellow",
        Color::Blue => "blue",
        Color::Magenta => "magenta",
        Color::Cyan => "cyan",
        Color::White => "white",
    };
    serde_json::json!(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::renderer::Renderer;
    use crate::ui::theme::Theme;
    use crate::ui::view::Role;

    #[test]
    fn frame_json_keeps_span_text_and_color() {
        let view = ViewNode::new(Role::Form).with_child(ViewNode::alert("lastName is a required field."));
        let frame = Renderer::layout(&view, &Theme::default_theme());
        let json = frame_to_json(&frame);
        assert_eq!(json["lines"][0][0]["text"], "  ! lastName is a required field.");
        assert_eq!(json["lines"][0][0]["style"]["color"], "red");
        assert!(json["cursor"].is_null());
    }

    #[test]
    fn view_json_omits_empty_fields() {
        let view = ViewNode::text("Email: a@b.co").with_test_id("summaryEmail");
        let json = view_to_json(&view).expect("json");
        assert_eq!(json["role"], "text");
        assert_eq!(json["test_id"], "summaryEmail");
        assert!(json.get("children").is_none());
        assert!(json.get("focused").is_none());
    }
}
