//! Byte-exact rendering scenarios
//!
//! These pin the exact glyph output of every layout path so the grid
//! arithmetic cannot drift.

use diaglang::render;

#[test]
fn test_bare_square() {
    assert_eq!(render("square").unwrap(), "┌───┐\n│   │\n└───┘");
}

#[test]
fn test_rectangle_to_triangle_vertical() {
    let ascii = render("Rectangle(A) connects to vertical Triangle(B)").unwrap();
    assert_eq!(
        ascii,
        " ┌───┐\n │ A │\n └─┬─┘\n   │\n   │\n  /\\\n /B \\\n/____\\"
    );
}

#[test]
fn test_squares_horizontal() {
    let ascii = render("Square(A) connects to horizontal Square(B)").unwrap();
    assert_eq!(
        ascii,
        "┌───┐      ┌───┐\n│ A │──────│ B │\n└───┘      └───┘"
    );
}

#[test]
fn test_labeled_horizontal_connector() {
    let ascii = render("Square(A) connects to(go) horizontal Square(B)").unwrap();
    assert_eq!(
        ascii,
        "┌───┐        ┌───┐\n│ A │───go───│ B │\n└───┘        └───┘"
    );
}

#[test]
fn test_arrow_connector() {
    let ascii = render("Square(A) connects to(point to) horizontal Square(B)").unwrap();
    assert_eq!(
        ascii,
        "┌───┐         ┌───┐\n│ A │────────>│ B │\n└───┘         └───┘"
    );
}

#[test]
fn test_vertical_chain_of_squares() {
    let ascii = render(
        "Square(A) connects to vertical Square(B) connects to vertical Square(C)",
    )
    .unwrap();
    assert_eq!(
        ascii,
        "┌───┐\n│ A │\n└─┬─┘\n  │\n  │\n┌───┐\n│ B │\n└─┬─┘\n  │\n  │\n┌───┐\n│ C │\n└───┘"
    );
}

#[test]
fn test_horizontal_chain_of_squares() {
    let ascii = render(
        "Square(A) connects to horizontal Square(B) connects to horizontal Square(C)",
    )
    .unwrap();
    assert_eq!(
        ascii,
        "┌───┐      ┌───┐      ┌───┐\n│ A │──────│ B │──────│ C │\n└───┘      └───┘      └───┘"
    );
}

#[test]
fn test_title_heading() {
    let ascii = render("Title(My Diagram)\nRectangle(Node)").unwrap();
    assert_eq!(ascii, "My Diagram\n\n┌──────┐\n│ Node │\n└──────┘");
}

#[test]
fn test_statements_joined_by_blank_line() {
    let ascii = render("square\nsquare").unwrap();
    assert_eq!(ascii, "┌───┐\n│   │\n└───┘\n\n┌───┐\n│   │\n└───┘");
}

#[test]
fn test_divergent_fan() {
    let ascii =
        render("Square(S) connects to horizontal Square(a) and Square(b)").unwrap();
    assert_eq!(
        ascii,
        "           ┌───┐\n     ──────│ a │\n┌───┐      └───┘\n│ S │\n└───┘      ┌───┐\n     ──────│ b │\n           └───┘"
    );
}

#[test]
fn test_convergent_fan() {
    let ascii =
        render("Square(a) and Square(b) connects to horizontal Square(T)").unwrap();
    assert_eq!(
        ascii,
        "┌───┐\n│ a │──────\n└───┘      ┌───┐\n           │ T │\n┌───┐      └───┘\n│ b │──────\n└───┘"
    );
}

#[test]
fn test_divergent_source_appears_once() {
    let ascii = render(
        "Square(cause) connects to(leads, point to) horizontal Square(effect) and Square(effect2)",
    )
    .unwrap();
    assert_eq!(ascii.matches("cause").count(), 1);
    assert_eq!(ascii.matches("───leads───>").count(), 2);
}

#[test]
fn test_convergent_target_appears_once() {
    let ascii = render(
        "Rectangle(cause1) and Rectangle(cause2) connects to horizontal Triangle(effect)",
    )
    .unwrap();
    assert!(ascii.contains("cause1"));
    assert!(ascii.contains("cause2"));
    assert_eq!(ascii.matches("effect").count(), 1);
}

#[test]
fn test_network_hub_renders_once() {
    let ascii = render(
        "Square(in1) connects to horizontal Square(mid)\n\
         Square(in2) connects to horizontal Square(mid)\n\
         Square(mid) connects to horizontal Square(out)",
    )
    .unwrap();
    assert_eq!(ascii.matches("mid").count(), 1);
    assert!(ascii.contains("in1"));
    assert!(ascii.contains("in2"));
    assert!(ascii.contains("out"));
}

#[test]
fn test_mixed_chain() {
    let ascii = render(
        "Square(A) connects to horizontal Square(B) connects to vertical Square(C)",
    )
    .unwrap();
    assert_eq!(
        ascii,
        "┌───┐      ┌───┐\n│ A │──────│ B │\n└───┘      └─┬─┘\n             │\n             │\n           ┌───┐\n           │ C │\n           └───┘"
    );
}

#[test]
fn test_circle_glyphs_keep_trailing_spaces() {
    let ascii = render("circle").unwrap();
    assert_eq!(ascii, "  ____  \n /    \\ \n|      |\n \\____/ ");
}
