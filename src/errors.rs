use thiserror::Error;

/// Failures while reading path data. None of these produce a partial shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Unknown path command '{0}'")]
    UnknownCommand(char),

    #[error("Can't parse a number at offset {0}")]
    InvalidNumber(usize),

    #[error("Multiple path definitions found, only one is supported")]
    MultiplePaths,

    #[error("No path definition found")]
    MissingPath,

    #[error("Command '{0}' is missing arguments")]
    MissingArgument(char),

    #[error("Command '{0}' has no current point (path must start with M)")]
    NoCurrentPoint(char),

    #[error("Malformed SVG document: {0}")]
    MalformedDocument(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("Shape has no segments")]
    EmptyShape,

    #[error("Shape bounds have zero width and height")]
    DegenerateBounds,
}

/// Raised by [`crate::packing::CirclePacker::new`], before any sampling happens.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("Contained mode needs at least one non-empty boundary shape")]
    EmptyBoundary,

    #[error("Target count and max radius must be positive (got {count}, {max_radius})")]
    InvalidTarget { count: usize, max_radius: f64 },

    #[error("Attempts per circle must be at least 1")]
    InvalidAttemptBudget,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse page config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Failed to write page config: {0}")]
    Serialize(#[from] ron::Error),

    #[error("Invalid page config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum GlyphError {
    #[error("Font error: {0}")]
    FontError(String),

    #[error("No glyph for '{0}'")]
    GlyphNotFound(char),

    #[error("Glyph outline for '{0}' is empty")]
    EmptyOutline(char),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
