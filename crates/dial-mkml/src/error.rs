use std::error::Error;
use std::fmt;

/// Where and why `.mkml` source failed to parse.
///
/// `line` and `col` are 1-based and point at the first character of the
/// offending token (or the end of input).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub col: usize,
}

impl ParseError {
    pub(crate) fn new(msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self { message: msg.into(), line, col }
    }

    /// The error followed by the offending source line and a caret under
    /// the column, for terminal output.
    ///
    /// ```text
    /// mkml parse error at 2:9: expected `:` after `size`
    ///   2 |     size 120
    ///     |         ^
    /// ```
    pub fn render(&self, src: &str) -> String {
        let Some(text) = src.lines().nth(self.line.saturating_sub(1)) else {
            return self.to_string();
        };
        let gutter = self.line.to_string();
        let pad = " ".repeat(gutter.len());
        // Columns count chars, so a caret under a tab still lands on the right glyph.
        let lead: String = text
            .chars()
            .take(self.col.saturating_sub(1))
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        format!("{self}\n  {gutter} | {text}\n  {pad} | {lead}^")
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mkml parse error at {}:{}: {}", self.line, self.col, self.message)
    }
}

impl Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_points_at_column() {
        let src = "AnalogClock {\n    size 120\n}";
        let err = ParseError::new("expected `:`", 2, 10);
        assert_eq!(
            err.render(src),
            "mkml parse error at 2:10: expected `:`\n  2 |     size 120\n    |          ^"
        );
    }

    #[test]
    fn render_past_end_falls_back_to_message() {
        let err = ParseError::new("unexpected end of input", 9, 1);
        assert_eq!(err.render("AnalogClock {"), err.to_string());
    }
}
