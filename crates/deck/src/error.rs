use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse deck file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("deck contains no slides")]
    Empty,
    #[error("deck has no cover slide")]
    MissingCover,
    #[error("cover slide must be first, found at index {index}")]
    CoverNotFirst { index: usize },
    #[error("deck has more than one cover slide (second at index {index})")]
    MultipleCovers { index: usize },
    #[error("content slide {index} is missing `{field}`")]
    MissingField { index: usize, field: &'static str },
    #[error("invalid colour `{value}`: expected #RRGGBB")]
    InvalidColor { value: String },
}

impl DeckError {
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    /// Index of the offending slide, for errors tied to one slide.
    pub fn slide_index(&self) -> Option<usize> {
        match self {
            Self::CoverNotFirst { index }
            | Self::MultipleCovers { index }
            | Self::MissingField { index, .. } => Some(*index),
            _ => None,
        }
    }
}
