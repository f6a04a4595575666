//! Connector glyph construction shared by the layout renderers
//!
//! Horizontal connectors are single strings spliced into a shape's
//! middle row; vertical connectors are short stacks of rows aligned on
//! a shared center column. Attachment points are punched into a shape's
//! bottom border as a `┬` junction.

use crate::core::{display_width, ArrowType, ConnectionStyle, TextBlock};

const PLAIN_DASHES: usize = 6;
const LABEL_DASHES: usize = 3;

/// Build the horizontal connector string for a style
pub fn horizontal_connector(style: &ConnectionStyle) -> String {
    let label = style.label.as_deref();
    match (style.arrow, label) {
        (Some(arrow), Some(label)) => {
            let run = "─".repeat(LABEL_DASHES);
            match arrow {
                ArrowType::PointTo => format!("{run}{label}{run}>"),
                ArrowType::PointBack => format!("<{run}{label}{run}"),
                ArrowType::DoublePoint => format!("<{run}{label}{run}>"),
            }
        }
        (Some(arrow), None) => match arrow {
            ArrowType::PointTo => "────────>".to_string(),
            ArrowType::PointBack => "<────────".to_string(),
            ArrowType::DoublePoint => "<──────>".to_string(),
        },
        (None, Some(label)) => {
            let run = "─".repeat(LABEL_DASHES);
            format!("{run}{label}{run}")
        }
        (None, None) => "─".repeat(PLAIN_DASHES),
    }
}

/// Columns a horizontal connector occupies; off-row padding must match
/// this exactly or the far shape drifts
pub fn horizontal_connector_width(style: &ConnectionStyle) -> usize {
    display_width(&horizontal_connector(style))
}

/// Build the vertical connector rows aligned on `center`
///
/// Two rows plain, three rows when a label or arrowheads are present.
/// The label row is centered against the span `center * 2 + 1`.
pub fn vertical_connector(center: usize, style: &ConnectionStyle) -> Vec<String> {
    let indent = " ".repeat(center);
    let label = style.label.as_deref();
    match (style.arrow, label) {
        (Some(arrow), Some(label)) => {
            let (top, bottom) = arrow_rows(arrow);
            vec![
                format!("{indent}{top}"),
                centered_label_row(center, label),
                format!("{indent}{bottom}"),
            ]
        }
        (Some(arrow), None) => {
            let (top, bottom) = arrow_rows(arrow);
            vec![
                format!("{indent}{top}"),
                format!("{indent}|"),
                format!("{indent}{bottom}"),
            ]
        }
        (None, Some(label)) => vec![
            format!("{indent}│"),
            centered_label_row(center, label),
            format!("{indent}│"),
        ],
        (None, None) => vec![format!("{indent}│"), format!("{indent}│")],
    }
}

fn arrow_rows(arrow: ArrowType) -> (char, char) {
    match arrow {
        ArrowType::PointTo => ('|', 'v'),
        ArrowType::PointBack => ('^', '|'),
        ArrowType::DoublePoint => ('^', 'v'),
    }
}

fn centered_label_row(center: usize, label: &str) -> String {
    let span = center * 2 + 1;
    let width = display_width(label);
    let padding = span.saturating_sub(width) / 2;
    format!("{}{}", " ".repeat(padding), label)
}

/// Punch a `┬` attachment point into the middle of a block's bottom
/// border. Only box borders (lines carrying `┘`) are punched; other
/// shapes have no flat bottom border to attach to.
pub fn punch_bottom_center(block: &mut TextBlock) {
    let Some(bottom) = block.lines_mut().last_mut() else {
        return;
    };
    if !bottom.contains('┘') {
        return;
    }
    let chars: Vec<char> = bottom.chars().collect();
    let mid = chars.len() / 2;
    *bottom = replace_char(&chars, mid, '┬');
}

/// Punch a `┬` attachment point at a specific column of a block's
/// bottom line, when that column holds a border glyph
pub fn punch_bottom_at(block: &mut TextBlock, column: usize) {
    let Some(bottom) = block.lines_mut().last_mut() else {
        return;
    };
    let chars: Vec<char> = bottom.chars().collect();
    match chars.get(column) {
        Some('─') | Some('┘') | Some('└') => {
            *bottom = replace_char(&chars, column, '┬');
        }
        _ => {}
    }
}

fn replace_char(chars: &[char], index: usize, replacement: char) -> String {
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| if i == index { replacement } else { c })
        .collect()
}
