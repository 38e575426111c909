//! Error types for pattern parsing, table construction, and resolution.

use thiserror::Error;

/// Errors produced while parsing a route pattern string.
///
/// Patterns are validated eagerly when a [`crate::RouteDef`] is created, so
/// a table that constructs successfully can never fail to *parse* at
/// resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Pattern does not begin with `/`.
    #[error("pattern must begin with `/`")]
    MissingLeadingSlash,

    /// Pattern contains an empty segment (`//` or a trailing `/`).
    #[error("pattern contains an empty segment")]
    EmptySegment,

    /// A capture segment (`:`) has no name.
    #[error("capture segment is missing a name")]
    EmptyCaptureName,

    /// A capture name contains a character that is not allowed.
    #[error("invalid capture name `{0}`")]
    InvalidCaptureName(String),

    /// A literal segment contains `?`, which is only meaningful as the
    /// optional marker on a capture.
    #[error("literal segment `{0}` may not contain `?`")]
    QuestionMarkInLiteral(String),

    /// The same capture name appears twice in one pattern.
    #[error("duplicate capture name `{0}`")]
    DuplicateCapture(String),

    /// An optional capture appears before the final segment. Optional
    /// captures match zero or one *trailing* segment, so anywhere else the
    /// pattern would be ambiguous.
    #[error("optional capture `{0}` must be the final segment")]
    OptionalNotTrailing(String),
}

/// Errors produced while building a [`crate::RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// One of the declared patterns failed to parse.
    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: PatternError,
    },

    /// Route names are the reverse-lookup key and must be unique.
    #[error("duplicate route name `{0}`")]
    DuplicateName(String),

    /// A route was declared with an empty name.
    #[error("route name must not be empty")]
    EmptyName,
}

/// No route in the table matched the requested path.
///
/// This is the resolver's only runtime error and it is recoverable: the
/// caller decides the fallback policy (render a default view, surface an
/// error page, ignore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no route matches `{path}`")]
pub struct NotFound {
    /// The path that failed to resolve, as handed to the resolver.
    pub path: String,
}
