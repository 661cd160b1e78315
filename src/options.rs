/// Default bound on the height of a parsed expression tree.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Settings that control how source text is parsed.
///
/// ## Example
/// ```
/// use runic::{ParseOptions, parse_with};
///
/// let options = ParseOptions::default().with_max_depth(2);
///
/// assert!(parse_with("a = b", &options).is_ok());
/// assert!(parse_with("a = b = c", &options).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// How tall the expression tree may grow before parsing fails with
    /// [`ParseError::NestingTooDeep`](crate::error::ParseError).
    ///
    /// A lone identifier or literal has height 1. Every operator, assignment
    /// and index node adds one level above the taller of its children, so
    /// nested brackets, right-nested assignments and long operator chains all
    /// count.
    pub max_depth: usize,
}

impl ParseOptions {
    /// Returns the default options.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }

    /// Replaces the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}
