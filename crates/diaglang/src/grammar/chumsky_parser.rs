//! Statement parser using chumsky
//!
//! Parses one raw diaglang statement into a flat clause structure:
//! a head group of shape terms followed by zero or more
//! `connects to ... <direction> <group>` segments. The classifier in
//! the parent module turns that structure into a tagged [`Statement`]
//! (connection, chain, fan, bare shape) in a single pass.
//!
//! [`Statement`]: super::Statement

use chumsky::prelude::*;
use chumsky::text::ident;

use crate::core::{ArrowType, Orientation, ShapeKind, ShapeTerm};

/// A statement as written, before classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawStatement {
    /// `Title(text)`
    Title(String),
    /// `<group>` optionally followed by connection segments
    Clauses {
        head: Vec<ShapeTerm>,
        segments: Vec<RawSegment>,
    },
}

/// One `connects to[(annotation)] <direction> <group>` clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSegment {
    pub label: Option<String>,
    pub arrow: Option<ArrowType>,
    pub orientation: Orientation,
    pub group: Vec<ShapeTerm>,
}

/// Chumsky-based statement parser
pub struct StatementParser;

impl StatementParser {
    /// Parse a single trimmed statement; `None` when the text matches
    /// no recognized statement form
    pub fn parse_statement(input: &str) -> Option<RawStatement> {
        let parser = Self::statement_parser().then_ignore(end());
        parser.parse(input).into_result().ok()
    }

    fn statement_parser<'src>() -> impl Parser<'src, &'src str, RawStatement> + Clone {
        Self::title_parser().or(Self::clauses_parser())
    }

    /// Parse `Title(text)`
    fn title_parser<'src>() -> impl Parser<'src, &'src str, RawStatement> + Clone {
        just("Title(")
            .ignore_then(none_of(')').repeated().collect::<String>())
            .then_ignore(just(')'))
            .then_ignore(Self::ws0())
            .map(RawStatement::Title)
    }

    fn clauses_parser<'src>() -> impl Parser<'src, &'src str, RawStatement> + Clone {
        Self::group_parser()
            .then(
                Self::ws1()
                    .ignore_then(Self::segment_parser())
                    .repeated()
                    .collect::<Vec<_>>(),
            )
            .then_ignore(Self::ws0())
            .map(|(head, segments)| RawStatement::Clauses { head, segments })
    }

    /// Parse `connects to[(annotation)] <direction> <group>`
    fn segment_parser<'src>() -> impl Parser<'src, &'src str, RawSegment> + Clone {
        just("connects")
            .ignore_then(Self::ws1())
            .ignore_then(just("to"))
            .ignore_then(Self::ws0().ignore_then(Self::annotation_parser()).or_not())
            .then_ignore(Self::ws1())
            .then(Self::direction_parser())
            .then_ignore(Self::ws1())
            .then(Self::group_parser())
            .map(|((annotation, orientation), group)| {
                let (label, arrow) = annotation.unwrap_or((None, None));
                RawSegment {
                    label,
                    arrow,
                    orientation,
                    group,
                }
            })
    }

    /// Parse the parenthesized connection annotation: a label, an arrow
    /// phrase, or `label, arrow phrase`
    fn annotation_parser<'src>(
    ) -> impl Parser<'src, &'src str, (Option<String>, Option<ArrowType>)> + Clone {
        just('(')
            .ignore_then(none_of(')').repeated().collect::<String>())
            .then_ignore(just(')'))
            .map(|content| Self::split_annotation(&content))
    }

    /// An annotation with a comma is `label, arrow`; a sole arrow
    /// phrase is an arrow; anything else is a label. Empty labels are
    /// dropped rather than kept as `Some("")`.
    fn split_annotation(content: &str) -> (Option<String>, Option<ArrowType>) {
        if let Some((first, second)) = content.split_once(',') {
            let label = first.trim();
            let arrow = ArrowType::from_phrase(second.trim());
            let label = (!label.is_empty()).then(|| label.to_string());
            (label, arrow)
        } else if let Some(arrow) = ArrowType::from_phrase(content) {
            (None, Some(arrow))
        } else if content.is_empty() {
            (None, None)
        } else {
            (Some(content.to_string()), None)
        }
    }

    fn direction_parser<'src>() -> impl Parser<'src, &'src str, Orientation> + Clone {
        just("horizontal")
            .to(Orientation::Horizontal)
            .or(just("vertical").to(Orientation::Vertical))
    }

    /// Parse `<shape_term> (and <shape_term>)*`
    fn group_parser<'src>() -> impl Parser<'src, &'src str, Vec<ShapeTerm>> + Clone {
        Self::shape_term_parser()
            .separated_by(Self::ws1().then(just("and")).then(Self::ws1()))
            .at_least(1)
            .collect()
    }

    /// Parse `Type(Label)`, `Type()`, or a bare identifier
    fn shape_term_parser<'src>() -> impl Parser<'src, &'src str, ShapeTerm> + Clone {
        ident()
            .map(|s: &str| s.to_string())
            .then(
                just('(')
                    .ignore_then(none_of(')').repeated().collect::<String>())
                    .then_ignore(just(')'))
                    .or_not(),
            )
            .map(|(name, label)| match ShapeKind::from_name(&name) {
                Some(kind) => ShapeTerm::Shaped { kind, label },
                None => match label {
                    Some(label) => ShapeTerm::Unknown {
                        name,
                        label: Some(label),
                    },
                    None => ShapeTerm::Bare(name),
                },
            })
    }

    fn ws1<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
        one_of(" \t").repeated().at_least(1).ignored()
    }

    fn ws0<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
        one_of(" \t").repeated().ignored()
    }
}
