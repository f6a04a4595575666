//! Network resolution and hub-and-spoke layout
//!
//! When a diagram's statements form a graph with a hub (a node with
//! both incoming and outgoing edges), the per-statement rendering is
//! replaced by a hub-and-spoke layout: each source→hub and hub→sink
//! pair is rendered as a plain horizontal connection, the first pair
//! keeps the hub glyph, and every later pair has the hub's column span
//! blanked so the hub appears exactly once.
//!
//! Nodes are keyed by label (falling back to the kind name) and kept
//! in first-seen order, so hub selection is deterministic. Supports a
//! single hub; the first hub found anchors the layout.

use tracing::{debug, trace};

use super::{connection, shape};
use crate::core::{Connection, ConnectionStyle, Orientation, ShapeKind, ShapeTerm, TextBlock};
use crate::grammar::Statement;

/// A node accumulated from the diagram's connection statements
#[derive(Debug, Clone)]
struct Node {
    name: String,
    term: ShapeTerm,
    incoming: usize,
    outgoing: usize,
}

/// The merged graph of all single-connection statements
#[derive(Debug, Default)]
pub struct Network {
    nodes: Vec<Node>,
    edges: Vec<(usize, usize)>,
}

impl Network {
    /// Merge classified statements into a graph. Connection statements
    /// contribute edges; bare shape statements contribute standalone
    /// nodes.
    pub fn build(statements: &[Statement]) -> Self {
        let mut network = Network::default();
        for statement in statements {
            match statement {
                Statement::Connection(conn) => {
                    let from = network.intern(&conn.from);
                    let to = network.intern(&conn.to);
                    network.nodes[from].outgoing += 1;
                    network.nodes[to].incoming += 1;
                    network.edges.push((from, to));
                }
                Statement::Shape(term) => {
                    network.intern(term);
                }
                _ => {}
            }
        }
        network
    }

    fn intern(&mut self, term: &ShapeTerm) -> usize {
        let name = term.name().to_string();
        if let Some(index) = self.nodes.iter().position(|n| n.name == name) {
            return index;
        }
        self.nodes.push(Node {
            name,
            term: normalize(term),
            incoming: 0,
            outgoing: 0,
        });
        self.nodes.len() - 1
    }

    /// First node with both incoming and outgoing edges
    fn hub(&self) -> Option<usize> {
        self.nodes
            .iter()
            .position(|n| n.incoming > 0 && n.outgoing > 0)
    }

    fn sources_into(&self, hub: usize) -> Vec<usize> {
        self.edges
            .iter()
            .filter(|(_, to)| *to == hub)
            .map(|(from, _)| *from)
            .collect()
    }

    fn sinks_from(&self, hub: usize) -> Vec<usize> {
        self.edges
            .iter()
            .filter(|(from, _)| *from == hub)
            .map(|(_, to)| *to)
            .collect()
    }
}

/// A bare reference inside a network defaults to a labeled rectangle
fn normalize(term: &ShapeTerm) -> ShapeTerm {
    match term {
        ShapeTerm::Bare(name) => ShapeTerm::Shaped {
            kind: ShapeKind::Rectangle,
            label: Some(name.clone()),
        },
        other => other.clone(),
    }
}

/// Probe statements for hub structure and render the hub-and-spoke
/// layout; `None` when the statements are not a single-hub network
pub fn try_render(statements: &[Statement]) -> Option<TextBlock> {
    // Only graphs written as single connections qualify; chains, fans,
    // titles, and errors keep their per-statement layout
    let eligible = statements
        .iter()
        .all(|s| matches!(s, Statement::Connection(_) | Statement::Shape(_)));
    if !eligible {
        return None;
    }
    let connection_count = statements
        .iter()
        .filter(|s| matches!(s, Statement::Connection(_)))
        .count();
    if connection_count < 2 {
        return None;
    }

    let network = Network::build(statements);
    let hub = network.hub()?;
    debug!(hub = %network.nodes[hub].name, "network hub found");
    Some(render_hub(&network, hub))
}

fn render_hub(network: &Network, hub: usize) -> TextBlock {
    let hub_term = &network.nodes[hub].term;
    let hub_width = shape::render(hub_term).width();
    let spoke = ConnectionStyle::plain(Orientation::Horizontal);
    let spoke_width = super::connector::horizontal_connector_width(&spoke);

    // (rendered pair, column where the hub starts in that pair)
    let mut sections: Vec<(TextBlock, usize)> = Vec::new();

    for source in network.sources_into(hub) {
        let source_term = &network.nodes[source].term;
        let block = connection::render(&Connection {
            from: source_term.clone(),
            to: hub_term.clone(),
            style: spoke.clone(),
        });
        if !block.is_empty() {
            let hub_start = shape::render(source_term).width() + spoke_width;
            sections.push((block, hub_start));
        }
    }
    for sink in network.sinks_from(hub) {
        let sink_term = &network.nodes[sink].term;
        let block = connection::render(&Connection {
            from: hub_term.clone(),
            to: sink_term.clone(),
            style: spoke.clone(),
        });
        if !block.is_empty() {
            sections.push((block, 0));
        }
    }

    // The hub glyph survives only in the first pair; later pairs get
    // its column span blanked
    let mut parts = Vec::with_capacity(sections.len());
    for (i, (mut block, hub_start)) in sections.into_iter().enumerate() {
        if i > 0 {
            trace!(hub_start, "blanking repeated hub columns");
            blank_columns(&mut block, hub_start, hub_start + hub_width);
        }
        parts.push(block.to_string());
    }
    TextBlock::from_text(&parts.join("\n\n"))
}

/// Replace the glyphs in `[start, end)` of every line with spaces
fn blank_columns(block: &mut TextBlock, start: usize, end: usize) {
    for line in block.lines_mut() {
        let blanked: String = line
            .chars()
            .enumerate()
            .map(|(i, c)| if i >= start && i < end { ' ' } else { c })
            .collect();
        *line = blanked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RenderConfig;
    use crate::grammar::classify;

    fn classify_all(lines: &[&str]) -> Vec<Statement> {
        let config = RenderConfig::default();
        lines.iter().map(|l| classify(l, &config)).collect()
    }

    #[test]
    fn test_hub_detection() {
        let statements = classify_all(&[
            "Square(in) connects to horizontal Square(mid)",
            "Square(mid) connects to horizontal Square(out)",
        ]);
        let network = Network::build(&statements);
        let hub = network.hub().expect("mid should be a hub");
        assert_eq!(network.nodes[hub].name, "mid");
    }

    #[test]
    fn test_no_hub_yields_none() {
        let statements = classify_all(&[
            "Square(a) connects to horizontal Square(b)",
            "Square(c) connects to horizontal Square(d)",
        ]);
        assert!(try_render(&statements).is_none());
    }

    #[test]
    fn test_single_connection_is_not_a_network() {
        let statements = classify_all(&["Square(a) connects to horizontal Square(b)"]);
        assert!(try_render(&statements).is_none());
    }

    #[test]
    fn test_hub_renders_once() {
        let statements = classify_all(&[
            "Square(in1) connects to horizontal Square(mid)",
            "Square(in2) connects to horizontal Square(mid)",
            "Square(mid) connects to horizontal Square(out)",
        ]);
        let rendered = try_render(&statements).expect("hub network");
        let text = rendered.to_string();
        assert_eq!(text.matches("mid").count(), 1);
        assert!(text.contains("in1"));
        assert!(text.contains("in2"));
        assert!(text.contains("out"));
    }

    #[test]
    fn test_hub_blanking_preserves_other_columns() {
        let statements = classify_all(&[
            "Square(in1) connects to horizontal Square(mid)",
            "Square(in2) connects to horizontal Square(mid)",
            "Square(mid) connects to horizontal Square(out)",
        ]);
        let text = try_render(&statements).expect("hub network").to_string();
        // Second input pair keeps its own shape and connector
        assert!(text.contains("│ in2 │──────"));
        // Sink pair keeps the connector into the sink even though the
        // hub columns are blanked
        assert!(text.contains("──────│ out │"));
    }

    #[test]
    fn test_chain_statement_suppresses_network_layout() {
        let statements = classify_all(&[
            "Square(a) connects to horizontal Square(b)",
            "Square(b) connects to horizontal Square(c)",
            "Square(c) connects to horizontal Square(d) connects to horizontal Square(e)",
        ]);
        assert!(try_render(&statements).is_none());
    }

    #[test]
    fn test_bare_nodes_default_to_rectangles() {
        let config = RenderConfig::default();
        let statements = vec![
            classify("start connects to horizontal mid", &config),
            classify("mid connects to horizontal finish", &config),
        ];
        let rendered = try_render(&statements).expect("hub network");
        let text = rendered.to_string();
        assert!(text.contains("│ start │"));
        assert!(text.contains("│ mid │"));
    }
}
