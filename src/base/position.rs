/// Position tracking for schema declarations and document nodes
///
/// Stores the source location (line/column plus source identity) where a
/// declaration or element start tag was observed, for diagnostics.
use std::fmt;
use std::sync::Arc;

/// A position in source text (1-based line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Both coordinates are at least 1.
    pub fn is_valid(&self) -> bool {
        self.line >= 1 && self.column >= 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Provenance triple: where in which source something originated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub position: Position,
    pub system_id: Arc<str>,
}

impl Location {
    pub fn new(line: u32, column: u32, system_id: impl Into<Arc<str>>) -> Self {
        Self {
            position: Position::new(line, column),
            system_id: system_id.into(),
        }
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn system_id(&self) -> &str {
        &self.system_id
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.system_id, self.position)
    }
}
