//! Character classification for track cells

use std::fmt;

/// What a single track character means to the walker.
///
/// The kind is always derived from the character via [`classify`]; grids
/// store raw characters only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// `@`
    Start,
    /// `x`
    End,
    /// `-` or `|`, cannot change heading
    Straight,
    /// `+`, must change heading
    Turn,
    /// `A`–`Z` station
    Letter(char),
    /// Space or padding
    Blank,
    /// Any other character: passable, never collected
    Other(char),
}

impl CellKind {
    pub fn is_blank(self) -> bool {
        self == CellKind::Blank
    }

    pub fn is_passable(self) -> bool {
        !self.is_blank()
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellKind::Start => write!(f, "start"),
            CellKind::End => write!(f, "end"),
            CellKind::Straight => write!(f, "straight"),
            CellKind::Turn => write!(f, "turn"),
            CellKind::Letter(c) => write!(f, "letter '{}'", c),
            CellKind::Blank => write!(f, "blank"),
            CellKind::Other(c) => write!(f, "tile '{}'", c),
        }
    }
}

/// Classify a track character
pub fn classify(c: char) -> CellKind {
    match c {
        '@' => CellKind::Start,
        'x' => CellKind::End,
        '-' | '|' => CellKind::Straight,
        '+' => CellKind::Turn,
        'A'..='Z' => CellKind::Letter(c),
        ' ' => CellKind::Blank,
        other => CellKind::Other(other),
    }
}
