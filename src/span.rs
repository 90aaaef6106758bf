//! Source positions for tree nodes.
//!
//! Mirrors the unist position shape (1-based line/column plus byte offset) so
//! positions from any markdown parser can be carried through unchanged and
//! reported in diagnostics.

use std::fmt;

/// A single point in the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// 1-based line
    pub line: usize,
    /// 1-based column
    pub column: usize,
    /// 0-based byte offset
    pub offset: usize,
}

impl Point {
    /// Create a point.
    pub const fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

/// Source span of a node: `start` inclusive, `end` exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub start: Point,
    pub end: Point,
}

impl Position {
    /// Create a span from two points.
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Span on a single line, from `start_column` to `end_column`.
    pub const fn line(line: usize, start_column: usize, end_column: usize) -> Self {
        Self {
            start: Point::new(line, start_column, 0),
            end: Point::new(line, end_column, 0),
        }
    }

    /// Line the span starts on.
    pub fn start_line(&self) -> usize {
        self.start.line
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start.line, self.start.column, self.end.line, self.end.column
        )
    }
}
