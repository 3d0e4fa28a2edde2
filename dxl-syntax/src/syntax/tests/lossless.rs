//! The parser produces a lossless tree.

use proptest::{prop_assert_eq, proptest};

use crate::syntax::parse::parse_text;

proptest! {
    #[test]
    fn renders_the_same(s in r"(.|\n)*") {
        let parse = parse_text(&s);
        prop_assert_eq!(s, parse.tree.write());
    }

    #[test]
    fn parses_deterministically(s in r".*") {
        prop_assert_eq!(parse_text(&s).tree.dump(), parse_text(&s).tree.dump());
    }
}

#[test]
fn render_unclosed_call() {
    let s = "print(a,\n";
    assert_eq!(s, parse_text(s).tree.write());
}

#[test]
fn render_smiley_box() {
    let s = "(:𐺰";
    assert_eq!(s, parse_text(s).tree.write());
}

#[test]
fn trailing_whitespace() {
    let s = "a \t\r\n";
    assert_eq!(s, parse_text(s).tree.write());
}

#[test]
fn comments_everywhere() {
    let s = "/* a */ int /* b */ x /* c */ = // d\n 1 // e";
    assert_eq!(s, parse_text(s).tree.write());
}
