//! Lexer, parser, and AST for `.mkml` widget declarations.
//!
//! This crate is intentionally dependency-free so it can be consumed by
//! tooling without pulling in any engine code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Document`, `Node`, `Prop`, `Value` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use dial_mkml::parse_str;
//!
//! let src = r#"
//!     AnalogClock "lap" {
//!         size: 120
//!         mode: stopwatch
//!         ticks: false
//!     }
//! "#;
//!
//! let doc = parse_str(src).unwrap();
//! assert_eq!(doc.nodes[0].widget, "AnalogClock");
//! assert_eq!(doc.nodes[0].prop_str("mode"), Some("stopwatch"));
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Document, Node, Prop, Value};
pub use error::ParseError;
pub use parser::parse_str;

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> Document { parse_str(src).unwrap() }
    fn err(src: &str) -> ParseError { parse_str(src).unwrap_err() }

    #[test] fn empty_widget() { ok("AnalogClock { }"); }
    #[test] fn bare_widget_without_block() { ok("AnalogClock"); }
    #[test] fn widget_with_props() {
        let doc = ok("AnalogClock { size: 120  mode: stopwatch  marks: 12  ticks: false }");
        let node = &doc.nodes[0];
        assert_eq!(node.prop_f64("size"), Some(120.0));
        assert_eq!(node.prop_str("mode"), Some("stopwatch"));
        assert_eq!(node.prop_bool("ticks"), Some(false));
    }
    #[test] fn several_instances() {
        let doc = ok(r#"AnalogClock "wall" { }  AnalogClock "lap" { mode: "stopwatch" }"#);
        assert_eq!(doc.nodes.len(), 2);
        assert_eq!(doc.nodes[1].content.as_deref(), Some("lap"));
    }
    #[test] fn block_comment() { ok("/* header */ AnalogClock { /* body */ size: 8 /* tail */ }"); }
    #[test] fn line_comment() { ok("// top\nAnalogClock {\n    // inside\n    size: 80\n}"); }
    #[test] fn color_6digit() { ok("AnalogClock { sec_color: #aabbcc }"); }
    #[test] fn color_8digit() { ok("AnalogClock { sec_color: #aabbccdd }"); }
    #[test] fn float_number() { ok("AnalogClock { size: 64.5 }"); }
    #[test] fn string_escape() { ok(r#"AnalogClock "say \"hi\"" { }"#); }

    #[test] fn err_empty_document() { err("   // nothing here\n"); }
    #[test] fn err_bad_color() { err("AnalogClock { sec_color: #xyz }"); }
    #[test] fn err_unclosed_string() { err(r#"AnalogClock "oops { }"#); }
    #[test] fn err_double_colon() { err("AnalogClock { size: : 8 }"); }
    #[test] fn err_unclosed_block() { err("AnalogClock { size: 8"); }
    #[test] fn err_nested_widget() { err("AnalogClock { AnalogClock { } }"); }
    #[test] fn err_reports_position() {
        let e = err("AnalogClock {\n  size: ?\n}");
        assert_eq!((e.line, e.col), (2, 9));
    }
}
