//! Statement orchestrator
//!
//! Drives a whole diagram source through the pipeline: split into
//! statements, strip a leading title, classify each statement, probe
//! for network hub structure, render, and join the per-statement
//! blocks with blank-line separators.

use tracing::{debug, span, trace, Level};

use super::{chain, connection, fan, network, shape};
use crate::core::{RenderConfig, TextBlock};
use crate::grammar::{classify, Statement};

/// Orchestrates classification and rendering for a whole source
#[derive(Debug, Default, Clone)]
pub struct Orchestrator {
    config: RenderConfig,
}

impl Orchestrator {
    /// Create an orchestrator with no default shape configured
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an orchestrator with a rendering configuration
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a whole diagram source to its joined text output
    pub fn render(&self, source: &str) -> String {
        let render_span = span!(Level::INFO, "render_diagram", source_len = source.len());
        let _enter = render_span.enter();

        let statements: Vec<&str> = source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if statements.is_empty() {
            trace!("empty source, empty output");
            return String::new();
        }

        // Only a leading Title is honored as the diagram heading
        let mut title = None;
        let mut remaining = &statements[..];
        if let Statement::Title(text) = classify(statements[0], &self.config) {
            debug!(title = %text, "extracted leading title");
            title = Some(text);
            remaining = &statements[1..];
        }

        let classified: Vec<Statement> = remaining
            .iter()
            .map(|statement| {
                let parsed = classify(statement, &self.config);
                trace!(statement = %statement, ?parsed, "classified statement");
                parsed
            })
            .collect();

        let body = match network::try_render(&classified) {
            Some(block) => {
                debug!("hub network layout replaces per-statement rendering");
                block.to_string()
            }
            None => self.render_statements(&classified),
        };

        match (title, body.is_empty()) {
            (Some(title), true) => title,
            (Some(title), false) => format!("{title}\n\n{body}"),
            (None, _) => body,
        }
    }

    fn render_statements(&self, statements: &[Statement]) -> String {
        let mut parts = Vec::with_capacity(statements.len());
        for statement in statements {
            match statement {
                Statement::Invalid(error) => parts.push(error.to_string()),
                Statement::Title(_) => {
                    // Non-leading titles are dropped
                    trace!("skipping non-leading title statement");
                }
                other => {
                    let block = self.render_statement(other);
                    if !block.is_empty() {
                        parts.push(block.to_string());
                    }
                }
            }
        }
        parts.join("\n\n")
    }

    fn render_statement(&self, statement: &Statement) -> TextBlock {
        let statement_span = span!(Level::DEBUG, "render_statement");
        let _enter = statement_span.enter();

        match statement {
            Statement::Shape(term) => shape::render(term),
            Statement::Connection(conn) => connection::render(conn),
            Statement::Chain(connections) => chain::render(connections),
            Statement::Divergent {
                source,
                targets,
                style,
            } => fan::render_divergent(source, targets, style),
            Statement::Convergent {
                sources,
                target,
                style,
            } => fan::render_convergent(sources, target, style),
            Statement::Title(_) | Statement::Invalid(_) => TextBlock::empty(),
        }
    }
}
