//! Shape rendering
//!
//! Turns one shape term into its text block. Pure glyph arithmetic:
//! label length decides border width (and for triangles, row count).
//! Unknown kinds and unresolved bare references render empty and are
//! dropped downstream.
//!
//! Every kind distinguishes an absent label (`square`) from an empty
//! one (`Square()`); the two produce different blocks.

use crate::core::{ShapeTerm, TextBlock};

/// Render a shape term into a text block
pub fn render(term: &ShapeTerm) -> TextBlock {
    match term {
        ShapeTerm::Shaped { kind, label } => {
            use crate::core::ShapeKind::*;
            match kind {
                Square => square(label.as_deref()),
                Rectangle => rectangle(label.as_deref()),
                Circle => circle(label.as_deref()),
                Triangle => triangle(label.as_deref()),
                Diamond => diamond(label.as_deref()),
            }
        }
        ShapeTerm::Unknown { .. } | ShapeTerm::Bare(_) => TextBlock::empty(),
    }
}

fn boxed(label: &str) -> TextBlock {
    let border = "─".repeat(label.chars().count() + 2);
    TextBlock::from_text(&format!("┌{border}┐\n│ {label} │\n└{border}┘"))
}

fn square(label: Option<&str>) -> TextBlock {
    match label {
        None => TextBlock::from_text("┌───┐\n│   │\n└───┘"),
        Some("") => TextBlock::from_text("┌──┐\n│  │\n└──┘"),
        Some(label) => boxed(label),
    }
}

fn rectangle(label: Option<&str>) -> TextBlock {
    match label {
        None => TextBlock::from_text("┌─────┐\n│     │\n└─────┘"),
        Some("") => TextBlock::from_text("┌──┐\n│  │\n└──┘"),
        Some(label) => boxed(label),
    }
}

fn circle(label: Option<&str>) -> TextBlock {
    let Some(label) = label else {
        return TextBlock::from_text("  ____  \n /    \\ \n|      |\n \\____/ ");
    };
    let label_len = label.chars().count();
    let width = usize::max(6, label_len + 2);
    let padding_total = width - label_len;
    let pad_left = padding_total / 2 + 1;
    let mut pad_right = padding_total / 2 + 1;
    // Odd remainder goes right
    if padding_total % 2 == 1 {
        pad_right += 1;
    }
    let underline = "_".repeat(width);
    let spaces = " ".repeat(width);
    TextBlock::from_text(&format!(
        "  {underline}  \n /{spaces}\\ \n|{}{label}{}|\n \\{underline}/ ",
        " ".repeat(pad_left),
        " ".repeat(pad_right),
    ))
}

fn triangle(label: Option<&str>) -> TextBlock {
    let default = "   /\\   \n  /  \\  \n /    \\ \n/______\\";
    let Some(label) = label else {
        return TextBlock::from_text(default);
    };
    if label.is_empty() {
        return TextBlock::from_text(default);
    }
    let label_len = label.chars().count();
    // Tiny labels use fixed minimal forms
    match label_len {
        1 => return TextBlock::from_text(&format!("  /\\\n /{label} \\\n/____\\")),
        2 => return TextBlock::from_text(&format!("  /\\\n /{label}\\\n/____\\")),
        3 => return TextBlock::from_text(&format!("  /\\\n /{label}\\\n/_____\\")),
        _ => {}
    }
    let total_rows = 4 + (label_len - 4) / 2;
    let mut lines = Vec::with_capacity(total_rows);
    for i in 0..total_rows {
        let indent = " ".repeat(total_rows - i - 1);
        if i == 0 {
            lines.push(format!("{indent}/\\"));
        } else if i == total_rows - 2 {
            lines.push(format!("{indent}/{label}\\"));
        } else if i == total_rows - 1 {
            let base = "_".repeat(label_len + 2);
            lines.push(format!("{indent}/{base}\\"));
        } else {
            let inner = " ".repeat(2 * i);
            lines.push(format!("{indent}/{inner}\\"));
        }
    }
    TextBlock::from_lines(lines)
}

fn diamond(label: Option<&str>) -> TextBlock {
    let Some(label) = label else {
        return TextBlock::from_text(" /\\\n<  >\n \\/");
    };
    let waist = format!("< {label} >");
    let center = waist.chars().count() / 2;
    TextBlock::from_lines(vec![
        format!("{}/\\", " ".repeat(center - 1)),
        format!("{}/  \\", " ".repeat(center - 2)),
        waist,
        format!("{}\\  /", " ".repeat(center - 2)),
        format!("{}\\/", " ".repeat(center - 1)),
    ])
}
