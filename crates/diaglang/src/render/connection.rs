//! Single-connection layout
//!
//! Lays out two shape blocks with one connector between them. Vertical
//! layout aligns both shapes on the larger of the two center columns
//! and punches an attachment point into the upper shape's bottom
//! border. Horizontal layout places the shapes side by side on the
//! source's middle row, padding every off-row to the connector's width
//! so the target's columns stay aligned.

use tracing::trace;

use super::{connector, shape};
use crate::core::{display_width, Connection, ConnectionStyle, TextBlock};

/// Render a single connection; empty when either endpoint renders empty
pub fn render(connection: &Connection) -> TextBlock {
    let from = shape::render(&connection.from);
    let to = shape::render(&connection.to);
    if from.is_empty() || to.is_empty() {
        trace!("connection endpoint rendered empty, dropping");
        return TextBlock::empty();
    }
    if connection.style.orientation.is_horizontal() {
        horizontal(&from, &to, &connection.style)
    } else {
        vertical(from, to, &connection.style)
    }
}

pub(super) fn vertical(mut from: TextBlock, mut to: TextBlock, style: &ConnectionStyle) -> TextBlock {
    let from_center = from.center_column();
    let to_center = to.center_column();
    let center = usize::max(from_center, to_center);

    // Punch before padding so the junction stays on the shape's own
    // center column
    connector::punch_bottom_center(&mut from);
    from.pad_left(center - from_center);

    let mut lines = from.into_lines();
    lines.extend(connector::vertical_connector(center, style));

    to.pad_left(center - to_center);
    lines.extend(to.into_lines());

    TextBlock::from_lines(lines)
}

pub(super) fn horizontal(from: &TextBlock, to: &TextBlock, style: &ConnectionStyle) -> TextBlock {
    let connector_line = connector::horizontal_connector(style);
    let connector_width = display_width(&connector_line);

    let from_height = from.height();
    let to_height = to.height();
    let max_height = usize::max(from_height, to_height);
    let from_middle = from_height / 2;
    let from_width = from.width();

    let mut lines = Vec::with_capacity(max_height);
    for row in 0..max_height {
        let mut line = String::new();
        if row < from_height {
            let from_line = &from.lines()[row];
            line.push_str(from_line);
            // Ragged shapes (triangles) need their short rows padded so
            // the connector column is stable
            let deficit = from_width.saturating_sub(display_width(from_line));
            line.push_str(&" ".repeat(deficit));
        } else {
            line.push_str(&" ".repeat(from_width));
        }

        if row == from_middle {
            line.push_str(&connector_line);
        } else {
            line.push_str(&" ".repeat(connector_width));
        }

        if row < to_height {
            line.push_str(&to.lines()[row]);
        }
        lines.push(line);
    }

    TextBlock::from_lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArrowType, Orientation, ShapeKind, ShapeTerm};

    fn term(kind: ShapeKind, label: &str) -> ShapeTerm {
        ShapeTerm::Shaped {
            kind,
            label: Some(label.to_string()),
        }
    }

    fn connection(
        from: ShapeTerm,
        to: ShapeTerm,
        orientation: Orientation,
        label: Option<&str>,
        arrow: Option<ArrowType>,
    ) -> Connection {
        Connection {
            from,
            to,
            style: ConnectionStyle {
                orientation,
                label: label.map(str::to_string),
                arrow,
            },
        }
    }

    #[test]
    fn test_horizontal_squares() {
        let rendered = render(&connection(
            term(ShapeKind::Square, "A"),
            term(ShapeKind::Square, "B"),
            Orientation::Horizontal,
            None,
            None,
        ));
        assert_eq!(
            rendered.to_string(),
            "┌───┐      ┌───┐\n│ A │──────│ B │\n└───┘      └───┘"
        );
    }

    #[test]
    fn test_vertical_rectangle_to_triangle() {
        let rendered = render(&connection(
            term(ShapeKind::Rectangle, "A"),
            term(ShapeKind::Triangle, "B"),
            Orientation::Vertical,
            None,
            None,
        ));
        assert_eq!(
            rendered.to_string(),
            " ┌───┐\n │ A │\n └─┬─┘\n   │\n   │\n  /\\\n /B \\\n/____\\"
        );
    }

    #[test]
    fn test_vertical_connection_punches_attachment_point() {
        let rendered = render(&connection(
            term(ShapeKind::Square, "A"),
            term(ShapeKind::Square, "B"),
            Orientation::Vertical,
            None,
            None,
        ));
        let text = rendered.to_string();
        assert!(text.contains("└─┬─┘"));
        // Exactly one attachment point: only the from shape is punched
        assert_eq!(text.matches('┬').count(), 1);
    }

    #[test]
    fn test_vertical_label_sits_between_connector_rows() {
        let rendered = render(&connection(
            term(ShapeKind::Square, "A"),
            term(ShapeKind::Square, "B"),
            Orientation::Vertical,
            Some("go"),
            None,
        ));
        let lines = rendered.into_lines();
        assert_eq!(lines[3], "  │");
        assert_eq!(lines[4], " go");
        assert_eq!(lines[5], "  │");
    }

    #[test]
    fn test_horizontal_labeled_connector() {
        let rendered = render(&connection(
            term(ShapeKind::Square, "A"),
            term(ShapeKind::Square, "B"),
            Orientation::Horizontal,
            Some("go"),
            None,
        ));
        assert!(rendered.to_string().contains("│ A │───go───│ B │"));
    }

    #[test]
    fn test_horizontal_arrow_and_label_off_rows_stay_aligned() {
        let rendered = render(&connection(
            term(ShapeKind::Square, "A"),
            term(ShapeKind::Square, "B"),
            Orientation::Horizontal,
            Some("go"),
            Some(ArrowType::PointTo),
        ));
        let text = rendered.to_string();
        assert!(text.contains("│ A │───go───>│ B │"));
        // Every row is the same width: the off-row spacer matches the
        // connector's columns
        let widths: Vec<usize> = text.lines().map(display_width).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn test_horizontal_connection_from_triangle_pads_ragged_rows() {
        let rendered = render(&connection(
            term(ShapeKind::Triangle, "tri"),
            term(ShapeKind::Square, "B"),
            Orientation::Horizontal,
            None,
            None,
        ));
        let text = rendered.to_string();
        assert!(text.contains(" /tri\\ ──────│ B │"));
    }

    #[test]
    fn test_unknown_endpoint_renders_empty() {
        let rendered = render(&connection(
            term(ShapeKind::Square, "A"),
            ShapeTerm::Unknown {
                name: "Blob".to_string(),
                label: None,
            },
            Orientation::Horizontal,
            None,
            None,
        ));
        assert!(rendered.is_empty());
    }
}
