//! Fan layout (divergent and convergent)
//!
//! Divergent: one source fans out to several targets. Targets stack
//! vertically with one blank row between them, the source is centered
//! against the stack, and each target's center row is extended with a
//! connector back to the source column. Convergent mirrors this with
//! the sources stacked on the left and a single centered target on the
//! right. The fan node renders exactly once however many edges touch
//! it; all edges share one connector style.

use tracing::trace;

use super::{connector, shape};
use crate::core::{display_width, ConnectionStyle, ShapeTerm, TextBlock};

/// Render one source fanning out to two or more targets
pub fn render_divergent(
    source: &ShapeTerm,
    targets: &[ShapeTerm],
    style: &ConnectionStyle,
) -> TextBlock {
    if targets.len() < 2 {
        return TextBlock::empty();
    }
    let source_block = shape::render(source);
    let target_blocks: Vec<TextBlock> = targets.iter().map(shape::render).collect();
    if source_block.is_empty() || target_blocks.iter().any(TextBlock::is_empty) {
        trace!("fan participant rendered empty, dropping fan");
        return TextBlock::empty();
    }

    let connector_line = connector::horizontal_connector(style);
    let connector_width = display_width(&connector_line);
    let source_width = source_block.width();
    let source_height = source_block.height();

    let stacked_height: usize =
        target_blocks.iter().map(TextBlock::height).sum::<usize>() + target_blocks.len() - 1;
    let source_start = stacked_height.saturating_sub(source_height) / 2;
    let total_height = usize::max(stacked_height, source_start + source_height);

    let mut lines = vec![String::new(); total_height];
    for (i, line) in source_block.lines().iter().enumerate() {
        lines[source_start + i] = line.clone();
    }

    let mut target_row = 0;
    for target in &target_blocks {
        let target_height = target.height();
        let center_offset = target_height / 2;
        for (j, target_line) in target.lines().iter().enumerate() {
            let row = target_row + j;
            if row >= lines.len() {
                continue;
            }
            pad_to(&mut lines[row], source_width);
            if j == center_offset {
                lines[row].push_str(&connector_line);
            } else {
                lines[row].push_str(&" ".repeat(connector_width));
            }
            lines[row].push_str(target_line);
        }
        target_row += target_height + 1;
    }

    TextBlock::from_lines(lines)
}

/// Render two or more sources fanning into one target
pub fn render_convergent(
    sources: &[ShapeTerm],
    target: &ShapeTerm,
    style: &ConnectionStyle,
) -> TextBlock {
    if sources.len() < 2 {
        return TextBlock::empty();
    }
    let target_block = shape::render(target);
    let source_blocks: Vec<TextBlock> = sources.iter().map(shape::render).collect();
    if target_block.is_empty() || source_blocks.iter().any(TextBlock::is_empty) {
        trace!("fan participant rendered empty, dropping fan");
        return TextBlock::empty();
    }

    let connector_line = connector::horizontal_connector(style);
    let connector_width = display_width(&connector_line);
    let max_source_width = source_blocks.iter().map(TextBlock::width).max().unwrap_or(0);
    let target_height = target_block.height();

    let stacked_height: usize =
        source_blocks.iter().map(TextBlock::height).sum::<usize>() + source_blocks.len() - 1;
    let target_start = stacked_height.saturating_sub(target_height) / 2;
    let total_height = usize::max(stacked_height, target_start + target_height);

    let mut lines = vec![String::new(); total_height];
    let mut source_row = 0;
    for source in &source_blocks {
        let source_height = source.height();
        for (j, source_line) in source.lines().iter().enumerate() {
            lines[source_row + j] = source_line.clone();
        }
        let center = source_row + source_height / 2;
        pad_to(&mut lines[center], max_source_width);
        lines[center].push_str(&connector_line);
        source_row += source_height + 1;
    }

    for (j, target_line) in target_block.lines().iter().enumerate() {
        let row = target_start + j;
        pad_to(&mut lines[row], max_source_width + connector_width);
        lines[row].push_str(target_line);
    }

    TextBlock::from_lines(lines)
}

fn pad_to(line: &mut String, width: usize) {
    let current = display_width(line);
    if current < width {
        line.push_str(&" ".repeat(width - current));
    }
}
