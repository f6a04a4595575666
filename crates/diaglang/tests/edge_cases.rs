//! Edge cases: empty-vs-absent labels, minimal shapes, unknown kinds,
//! and degenerate inputs

use diaglang::render;

#[test]
fn test_empty_vs_absent_labels_are_distinct() {
    let bare = render("rectangle").unwrap();
    let empty = render("Rectangle()").unwrap();
    let labeled = render("Rectangle(X)").unwrap();
    assert_ne!(bare, empty);
    assert_ne!(bare, labeled);
    assert_ne!(empty, labeled);
}

#[test]
fn test_empty_rectangle_is_minimal() {
    assert_eq!(render("Rectangle()").unwrap(), "┌──┐\n│  │\n└──┘");
}

#[test]
fn test_empty_square_is_minimal() {
    assert_eq!(render("Square()").unwrap(), "┌──┐\n│  │\n└──┘");
}

#[test]
fn test_empty_triangle_still_renders_four_lines() {
    let ascii = render("Triangle()").unwrap();
    assert_eq!(ascii.lines().count(), 4);
    assert_eq!(ascii, "   /\\   \n  /  \\  \n /    \\ \n/______\\");
}

#[test]
fn test_empty_circle_renders_four_lines() {
    let ascii = render("Circle()").unwrap();
    assert_eq!(ascii.lines().count(), 4);
    assert!(ascii.contains("______"));
}

#[test]
fn test_shape_type_is_case_insensitive() {
    assert_eq!(render("SQUARE").unwrap(), render("square").unwrap());
    assert_eq!(render("TrIaNgLe(go)").unwrap(), render("Triangle(go)").unwrap());
}

#[test]
fn test_unknown_shape_type_is_silently_dropped() {
    assert_eq!(render("Hexagon(X)").unwrap(), "");
    assert_eq!(render("blob").unwrap(), "");
}

#[test]
fn test_unknown_shape_between_valid_ones_leaves_no_blank_section() {
    let ascii = render("square\nHexagon(X)\nsquare").unwrap();
    assert!(!ascii.contains("\n\n\n"));
    assert_eq!(ascii.split("\n\n").count(), 2);
}

#[test]
fn test_blank_input_renders_empty() {
    assert_eq!(render("").unwrap(), "");
    assert_eq!(render("   \n\t\n").unwrap(), "");
}

#[test]
fn test_long_label_grows_output_linearly() {
    let ascii = render("Triangle(abcdefghijklmnop)").unwrap();
    // 16-char label: 4 + (16 - 4) / 2 = 10 rows
    assert_eq!(ascii.lines().count(), 10);
    assert!(ascii.contains("/abcdefghijklmnop\\"));
}

#[test]
fn test_label_with_spaces() {
    let ascii = render("Rectangle(hello world)").unwrap();
    assert!(ascii.contains("│ hello world │"));
}

#[test]
fn test_connection_with_unknown_endpoint_is_dropped() {
    let ascii = render("Square(A) connects to horizontal Blob(B)").unwrap();
    assert_eq!(ascii, "");
}

#[test]
fn test_single_tiny_triangle_labels() {
    assert_eq!(render("Triangle(X)").unwrap(), "  /\\\n /X \\\n/____\\");
    assert_eq!(render("Triangle(XY)").unwrap(), "  /\\\n /XY\\\n/____\\");
    assert_eq!(render("Triangle(XYZ)").unwrap(), "  /\\\n /XYZ\\\n/_____\\");
}

#[test]
fn test_connection_label_containing_direction_word() {
    // The label is free text; the direction keyword outside the
    // parentheses is what satisfies validation
    let ascii =
        render("Square(A) connects to(vertical flow) horizontal Square(B)").unwrap();
    assert!(ascii.contains("───vertical flow───"));
}

#[test]
fn test_bare_identifier_without_default_shape_is_dropped() {
    assert_eq!(render("start").unwrap(), "");
}
