//! Chain layout
//!
//! Composes a path of connections (A→B→C…) into one block. Uniform
//! chains get global alignment: vertical chains share the widest
//! node's center column, horizontal chains share the row where most
//! node centers land (first seen wins on a tie). Mixed chains are
//! built incrementally, appending each connector+shape to the right or
//! below the accumulated block and tracking the span of the most
//! recently appended shape so vertical attachment never has to rescan
//! glyphs.

use tracing::trace;

use super::{connector, shape};
use crate::core::{display_width, Connection, ConnectionStyle, TextBlock};

/// Render a chain of two or more connections; empty when any node
/// renders empty
pub fn render(connections: &[Connection]) -> TextBlock {
    if connections.is_empty() {
        return TextBlock::empty();
    }

    let mut nodes = Vec::with_capacity(connections.len() + 1);
    nodes.push(shape::render(&connections[0].from));
    for connection in connections {
        nodes.push(shape::render(&connection.to));
    }
    if nodes.iter().any(TextBlock::is_empty) {
        trace!("chain node rendered empty, dropping chain");
        return TextBlock::empty();
    }

    let all_horizontal = connections
        .iter()
        .all(|c| c.style.orientation.is_horizontal());
    let all_vertical = connections
        .iter()
        .all(|c| !c.style.orientation.is_horizontal());

    if all_vertical {
        vertical_chain(connections, nodes)
    } else if all_horizontal {
        horizontal_chain(connections, nodes)
    } else {
        mixed_chain(connections, nodes)
    }
}

fn vertical_chain(connections: &[Connection], nodes: Vec<TextBlock>) -> TextBlock {
    let centers: Vec<usize> = nodes.iter().map(TextBlock::center_column).collect();
    let max_center = centers.iter().copied().max().unwrap_or(0);

    let mut lines = Vec::new();
    let last = nodes.len() - 1;
    for (i, mut node) in nodes.into_iter().enumerate() {
        // Every node except the last feeds the next connector, so each
        // gets an attachment point punched before padding
        if i < last {
            connector::punch_bottom_center(&mut node);
        }
        node.pad_left(max_center - centers[i]);
        lines.extend(node.into_lines());
        if i < last {
            lines.extend(connector::vertical_connector(
                max_center,
                &connections[i].style,
            ));
        }
    }
    TextBlock::from_lines(lines)
}

fn horizontal_chain(connections: &[Connection], nodes: Vec<TextBlock>) -> TextBlock {
    let max_height = nodes.iter().map(TextBlock::height).max().unwrap_or(0);
    let widths: Vec<usize> = nodes.iter().map(TextBlock::width).collect();
    let offsets: Vec<usize> = nodes
        .iter()
        .map(|n| (max_height - n.height()) / 2)
        .collect();
    let centers: Vec<usize> = nodes
        .iter()
        .zip(&offsets)
        .map(|(n, offset)| offset + n.height() / 2)
        .collect();
    let global_middle = most_common_row(&centers).unwrap_or(max_height / 2);

    let connector_lines: Vec<String> = connections
        .iter()
        .map(|c| connector::horizontal_connector(&c.style))
        .collect();

    let last = nodes.len() - 1;
    let mut lines = Vec::with_capacity(max_height);
    for row in 0..max_height {
        let mut line = String::new();
        for (i, node) in nodes.iter().enumerate() {
            if row >= offsets[i] && row - offsets[i] < node.height() {
                let node_line = &node.lines()[row - offsets[i]];
                line.push_str(node_line);
                if i < last {
                    let deficit = widths[i].saturating_sub(display_width(node_line));
                    line.push_str(&" ".repeat(deficit));
                }
            } else {
                line.push_str(&" ".repeat(widths[i]));
            }

            if i < last {
                if row == global_middle {
                    line.push_str(&connector_lines[i]);
                } else {
                    line.push_str(&" ".repeat(display_width(&connector_lines[i])));
                }
            }
        }
        lines.push(line);
    }
    TextBlock::from_lines(lines)
}

/// Most frequent value, ties broken by first appearance
fn most_common_row(centers: &[usize]) -> Option<usize> {
    let mut counts: Vec<(usize, usize)> = Vec::new();
    for &center in centers {
        match counts.iter_mut().find(|(value, _)| *value == center) {
            Some((_, count)) => *count += 1,
            None => counts.push((center, 1)),
        }
    }
    let mut best: Option<(usize, usize)> = None;
    for &(value, count) in &counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}

/// Accumulated mixed-chain state: the block built so far plus the
/// column span of the most recently appended shape
struct Accumulated {
    block: TextBlock,
    last_start: usize,
    last_width: usize,
}

fn mixed_chain(connections: &[Connection], nodes: Vec<TextBlock>) -> TextBlock {
    let mut iter = nodes.into_iter();
    let from = iter.next().expect("chain has at least one node");
    let to = iter.next().expect("chain has at least two nodes");

    // The first connection lays out like a standalone one; the rest
    // are appended relative to the shape it placed last
    let first = &connections[0];
    let mut acc = if first.style.orientation.is_horizontal() {
        let last_start = from.width() + connector::horizontal_connector_width(&first.style);
        let last_width = to.width();
        Accumulated {
            block: super::connection::horizontal(&from, &to, &first.style),
            last_start,
            last_width,
        }
    } else {
        let center = usize::max(from.center_column(), to.center_column());
        let last_start = center - to.center_column();
        let last_width = to.width();
        Accumulated {
            block: super::connection::vertical(from, to, &first.style),
            last_start,
            last_width,
        }
    };

    for (connection, node) in connections[1..].iter().zip(iter) {
        if connection.style.orientation.is_horizontal() {
            append_horizontal(&mut acc, node, &connection.style);
        } else {
            append_vertical(&mut acc, node, &connection.style);
        }
    }
    acc.block
}

fn append_horizontal(acc: &mut Accumulated, node: TextBlock, style: &ConnectionStyle) {
    let connector_line = connector::horizontal_connector(style);
    let connector_width = display_width(&connector_line);

    let acc_height = acc.block.height();
    let acc_width = acc.block.width();
    let node_height = node.height();
    let max_height = usize::max(acc_height, node_height);
    let middle_row = (max_height - 1) / 2;

    let mut lines = Vec::with_capacity(max_height);
    for row in 0..max_height {
        let mut line = String::new();
        if row < acc_height {
            let acc_line = &acc.block.lines()[row];
            line.push_str(acc_line);
            let deficit = acc_width.saturating_sub(display_width(acc_line));
            line.push_str(&" ".repeat(deficit));
        } else {
            line.push_str(&" ".repeat(acc_width));
        }

        if row == middle_row {
            line.push_str(&connector_line);
        } else {
            line.push_str(&" ".repeat(connector_width));
        }

        if row < node_height {
            line.push_str(&node.lines()[row]);
        }
        lines.push(line);
    }

    acc.last_start = acc_width + connector_width;
    acc.last_width = node.width();
    acc.block = TextBlock::from_lines(lines);
}

fn append_vertical(acc: &mut Accumulated, mut node: TextBlock, style: &ConnectionStyle) {
    // Attach under the center of the last appended shape, not the
    // center of the whole accumulated block
    let center = acc.last_start + acc.last_width / 2;
    connector::punch_bottom_at(&mut acc.block, center);

    let mut lines = std::mem::take(&mut acc.block).into_lines();
    lines.extend(connector::vertical_connector(center, style));

    let padding = center.saturating_sub(node.center_column());
    node.pad_left(padding);
    acc.last_start = padding;
    acc.last_width = node.width();
    lines.extend(node.into_lines());
    acc.block = TextBlock::from_lines(lines);
}
