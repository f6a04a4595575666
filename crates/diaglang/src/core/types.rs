//! Core type definitions for diagram processing
//!
//! This module contains the fundamental types used throughout diaglang:
//! shape kinds, connection orientation and arrows, and the descriptors
//! the classifier produces for the renderers.

use std::fmt;

/// The five shape kinds the language understands
///
/// Kind names are matched case-insensitively at parse time; anything
/// else is an unknown kind and renders as an empty block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// `Square` / `square`
    Square,
    /// `Rectangle` / `rectangle`
    Rectangle,
    /// `Circle` / `circle` - 4-line oval
    Circle,
    /// `Triangle` / `triangle` - scales with label length
    Triangle,
    /// `Diamond` / `diamond` - tall diamond with a `< label >` waist
    Diamond,
}

impl ShapeKind {
    /// All kinds, in declaration order
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Diamond,
    ];

    /// Case-insensitive lookup of a kind by its name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "square" => Some(ShapeKind::Square),
            "rectangle" => Some(ShapeKind::Rectangle),
            "circle" => Some(ShapeKind::Circle),
            "triangle" => Some(ShapeKind::Triangle),
            "diamond" => Some(ShapeKind::Diamond),
            _ => None,
        }
    }

    /// Lowercase name of the kind
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Diamond => "diamond",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Layout axis of a connection
///
/// Every connection must name its orientation explicitly; a statement
/// without one is a syntax error, never a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Orientation::Horizontal)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// Arrowhead variants for a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowType {
    /// `point to` - arrowhead at the target end
    PointTo,
    /// `point back` - arrowhead at the source end
    PointBack,
    /// `double point` - arrowheads at both ends
    DoublePoint,
}

impl ArrowType {
    /// The three recognized arrow phrases
    pub const PHRASES: [&'static str; 3] = ["point to", "point back", "double point"];

    /// Look up an arrow type by its exact phrase
    pub fn from_phrase(phrase: &str) -> Option<Self> {
        match phrase {
            "point to" => Some(ArrowType::PointTo),
            "point back" => Some(ArrowType::PointBack),
            "double point" => Some(ArrowType::DoublePoint),
            _ => None,
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            ArrowType::PointTo => "point to",
            ArrowType::PointBack => "point back",
            ArrowType::DoublePoint => "double point",
        }
    }
}

impl fmt::Display for ArrowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.phrase())
    }
}

/// Styling shared by one connection (or one whole fan set)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionStyle {
    pub orientation: Orientation,
    pub label: Option<String>,
    pub arrow: Option<ArrowType>,
}

impl ConnectionStyle {
    /// Plain connector with no label or arrowhead
    pub fn plain(orientation: Orientation) -> Self {
        Self {
            orientation,
            label: None,
            arrow: None,
        }
    }
}

/// One endpoint of a connection as written in the source
///
/// `label: None` means "use the default unlabeled glyph" while
/// `label: Some("")` means "labeled but empty"; the two are distinct
/// render states for every kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeTerm {
    /// `Type(Label)` or bare `Type` naming a known kind
    Shaped {
        kind: ShapeKind,
        label: Option<String>,
    },
    /// `Name(Label)` with an unrecognized type name; renders empty
    Unknown {
        name: String,
        label: Option<String>,
    },
    /// A bare identifier that names no kind; resolved by the
    /// default-shape configuration, otherwise renders empty
    Bare(String),
}

impl ShapeTerm {
    /// Textual identity of the endpoint, used to merge chain links and
    /// to key network nodes: the label when present and non-empty,
    /// otherwise the kind (or bare) name.
    pub fn name(&self) -> &str {
        match self {
            ShapeTerm::Shaped { kind, label } => match label.as_deref() {
                Some(l) if !l.is_empty() => l,
                _ => kind.name(),
            },
            ShapeTerm::Unknown { name, label } => match label.as_deref() {
                Some(l) if !l.is_empty() => l,
                _ => name,
            },
            ShapeTerm::Bare(name) => name,
        }
    }

    /// Fill in the kind of a bare reference from the default-shape
    /// configuration. Shaped and unknown references are untouched; the
    /// source text is never rewritten.
    pub fn with_default(self, default: Option<ShapeKind>) -> Self {
        match (self, default) {
            (ShapeTerm::Bare(name), Some(kind)) => ShapeTerm::Shaped {
                kind,
                label: Some(name),
            },
            (term, _) => term,
        }
    }
}

/// A single directed link between two shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub from: ShapeTerm,
    pub to: ShapeTerm,
    pub style: ConnectionStyle,
}

/// Rendering configuration
///
/// `default_shape` enables bare-label substitution: an unqualified
/// identifier in any shape position is read as `Default(identifier)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    pub default_shape: Option<ShapeKind>,
}

impl RenderConfig {
    pub fn new(default_shape: Option<ShapeKind>) -> Self {
        Self { default_shape }
    }
}
