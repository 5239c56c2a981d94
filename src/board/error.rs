use std::fmt::{Display, Formatter};

/// Errors produced while constructing a [`super::Board`] from user input.
///
/// Mirrors the teacher's `BoardCreationError` shape: a flat enum, manual
/// `Display`, and a `std::error::Error` impl with no source chaining since
/// every variant is already a leaf diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// `width < 2`, `height < 2`, or `width * height < 4`.
    InvalidDimensions { width: u32, height: u32 },
    /// Bracket imbalance, nesting violation, non-integer token,
    /// out-of-range/duplicate/missing tile, or uneven row widths.
    Malformed { detail: String, position: usize },
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimensions { .. } => write!(f, "minimal board dimension is 2x2"),
            Self::Malformed { detail, position } => {
                write!(f, "{detail} (at position {position})")
            }
        }
    }
}

impl std::error::Error for BoardError {}
