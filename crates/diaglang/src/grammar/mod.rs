//! Statement grammar and classification
//!
//! A diagram source is a sequence of line statements. Each statement is
//! classified exactly once into a tagged [`Statement`] variant, which
//! the renderers then dispatch on. Classification order of precedence:
//! syntax validation, then the grammar pass, then shape-count analysis
//! of the parsed clauses (convergent, divergent, chain, single
//! connection, bare shape).
//!
//! Malformed connection statements become [`Statement::Invalid`] and
//! render as in-band `SYNTAX ERROR` text; anything else that matches no
//! statement form degrades to a shape term that renders empty.

mod chumsky_parser;

pub use chumsky_parser::{RawSegment, RawStatement, StatementParser};

use std::fmt;

use crate::core::{
    ArrowType, Connection, ConnectionStyle, RenderConfig, ShapeTerm,
};

/// A classified statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `Title(text)`; only honored as the leading statement
    Title(String),
    /// A standalone shape (or unrecognized text rendering empty)
    Shape(ShapeTerm),
    /// A single directed connection
    Connection(Connection),
    /// Two or more connections sharing endpoints, in statement order
    Chain(Vec<Connection>),
    /// One source fanning out to two or more targets
    Divergent {
        source: ShapeTerm,
        targets: Vec<ShapeTerm>,
        style: ConnectionStyle,
    },
    /// Two or more sources fanning into one target
    Convergent {
        sources: Vec<ShapeTerm>,
        target: ShapeTerm,
        style: ConnectionStyle,
    },
    /// A malformed connection statement; renders its error text in-band
    Invalid(SyntaxError),
}

/// A syntax error detected before any layout work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub statement: String,
    pub kind: SyntaxErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A `connects to` statement with no `horizontal`/`vertical` keyword
    MissingDirection,
    /// A connection annotation naming an unrecognized arrow phrase
    InvalidArrow(String),
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SyntaxErrorKind::MissingDirection => write!(
                f,
                "SYNTAX ERROR in '{}'\nMissing direction keyword. Use 'horizontal' or 'vertical'.\nExample: Rectangle(A) connects to horizontal Triangle(B)",
                self.statement
            ),
            SyntaxErrorKind::InvalidArrow(token) => write!(
                f,
                "SYNTAX ERROR in '{}'\nInvalid arrow type: '{}'\nValid arrow types: 'point to', 'point back', 'double point'",
                self.statement, token
            ),
        }
    }
}

/// Classify one trimmed statement
///
/// Never fails: statements that match no recognized form become a
/// [`Statement::Shape`] over an unknown term, which renders empty and
/// is dropped by the orchestrator.
pub fn classify(statement: &str, config: &RenderConfig) -> Statement {
    if let Some(error) = validate(statement) {
        return Statement::Invalid(error);
    }

    let parsed = match StatementParser::parse_statement(statement) {
        Some(parsed) => parsed,
        None => return unrecognized(statement),
    };

    match parsed {
        RawStatement::Title(text) => Statement::Title(text),
        RawStatement::Clauses { head, segments } => {
            let default = config.default_shape;
            let head: Vec<ShapeTerm> = head
                .into_iter()
                .map(|term| term.with_default(default))
                .collect();
            let segments: Vec<RawSegment> = segments
                .into_iter()
                .map(|seg| RawSegment {
                    label: seg.label,
                    arrow: seg.arrow,
                    orientation: seg.orientation,
                    group: seg
                        .group
                        .into_iter()
                        .map(|term| term.with_default(default))
                        .collect(),
                })
                .collect();
            classify_clauses(statement, head, segments)
        }
    }
}

fn classify_clauses(
    statement: &str,
    mut head: Vec<ShapeTerm>,
    mut segments: Vec<RawSegment>,
) -> Statement {
    match segments.len() {
        0 => {
            if head.len() == 1 {
                Statement::Shape(head.remove(0))
            } else {
                // A bare `A and B` group connects nothing
                unrecognized(statement)
            }
        }
        1 => {
            let seg = segments.remove(0);
            let style = segment_style(&seg);
            let mut group = seg.group;
            match (head.len(), group.len()) {
                (1, 1) => Statement::Connection(Connection {
                    from: head.remove(0),
                    to: group.remove(0),
                    style,
                }),
                (2.., 1) => Statement::Convergent {
                    sources: head,
                    target: group.remove(0),
                    style,
                },
                (1, 2..) => Statement::Divergent {
                    source: head.remove(0),
                    targets: group,
                    style,
                },
                // Many-to-many fans have no layout
                _ => unrecognized(statement),
            }
        }
        _ => {
            let singleton_path = head.len() == 1 && segments.iter().all(|s| s.group.len() == 1);
            if !singleton_path {
                return unrecognized(statement);
            }
            let mut connections = Vec::with_capacity(segments.len());
            let mut from = head.remove(0);
            for seg in segments {
                let style = segment_style(&seg);
                let mut group = seg.group;
                let to = group.remove(0);
                connections.push(Connection {
                    from,
                    to: to.clone(),
                    style,
                });
                from = to;
            }
            Statement::Chain(connections)
        }
    }
}

fn segment_style(seg: &RawSegment) -> ConnectionStyle {
    ConnectionStyle {
        orientation: seg.orientation,
        label: seg.label.clone(),
        arrow: seg.arrow,
    }
}

fn unrecognized(statement: &str) -> Statement {
    Statement::Shape(ShapeTerm::Unknown {
        name: statement.to_string(),
        label: None,
    })
}

/// Detect the two in-band syntax errors: a connection with no direction
/// keyword, and an annotation with an unrecognized arrow phrase.
fn validate(statement: &str) -> Option<SyntaxError> {
    if !statement.contains(" connects to") {
        return None;
    }

    if !contains_word(statement, "horizontal") && !contains_word(statement, "vertical") {
        return Some(SyntaxError {
            statement: statement.to_string(),
            kind: SyntaxErrorKind::MissingDirection,
        });
    }

    if let Some(content) = annotation_content(statement) {
        if let Some((_, second)) = content.split_once(',') {
            let second = second.trim();
            if ArrowType::from_phrase(second).is_none() {
                return Some(SyntaxError {
                    statement: statement.to_string(),
                    kind: SyntaxErrorKind::InvalidArrow(second.to_string()),
                });
            }
        } else {
            let sole = content.trim();
            let looks_like_arrow = sole.contains("point") || sole.contains(" arrow");
            if !sole.is_empty() && looks_like_arrow && ArrowType::from_phrase(sole).is_none() {
                return Some(SyntaxError {
                    statement: statement.to_string(),
                    kind: SyntaxErrorKind::InvalidArrow(sole.to_string()),
                });
            }
        }
    }

    None
}

/// Content of the first `connects to(...)` annotation, if any
fn annotation_content(statement: &str) -> Option<&str> {
    let start = statement.find(" connects to(")?;
    let rest = &statement[start + " connects to(".len()..];
    let end = rest.find(')')?;
    Some(&rest[..end])
}

/// Whole-word containment: the match must not touch an adjacent
/// alphanumeric or underscore character
fn contains_word(haystack: &str, word: &str) -> bool {
    let mut search_from = 0;
    while let Some(pos) = haystack[search_from..].find(word) {
        let start = search_from + pos;
        let end = start + word.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric() && c != '_');
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric() && c != '_');
        if before_ok && after_ok {
            return true;
        }
        search_from = end;
    }
    false
}
