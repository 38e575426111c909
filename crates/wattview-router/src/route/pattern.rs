//! Pattern parsing for route segments.
//!
//! Pure functional parsing of route pattern strings into typed segments.
//! All functions are **pure**: same input → same output, no side effects.

use crate::error::PatternError;

/// A single segment of a route pattern.
///
/// # Examples
///
/// ```
/// use wattview_router::route::pattern::{classify_segment, PatternSegment};
///
/// // Literal segment
/// let seg = classify_segment("realtime").unwrap();
/// assert!(matches!(seg, PatternSegment::Literal(_)));
///
/// // Required capture
/// let seg = classify_segment(":macaddress").unwrap();
/// assert!(matches!(seg, PatternSegment::Capture(_)));
///
/// // Optional capture
/// let seg = classify_segment(":macaddress?").unwrap();
/// assert!(matches!(seg, PatternSegment::OptionalCapture(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// Static text, matched exactly and case-sensitively.
    Literal(String),
    /// Named capture: `:name`. Matches exactly one non-empty segment.
    Capture(String),
    /// Named optional capture: `:name?`. Matches zero or one trailing segment.
    OptionalCapture(String),
}

impl PatternSegment {
    /// Returns the capture name, if this segment binds one.
    pub fn capture_name(&self) -> Option<&str> {
        match self {
            PatternSegment::Literal(_) => None,
            PatternSegment::Capture(name) | PatternSegment::OptionalCapture(name) => Some(name),
        }
    }

    /// Whether this segment may be omitted from a matching path.
    pub fn is_optional(&self) -> bool {
        matches!(self, PatternSegment::OptionalCapture(_))
    }
}

/// Classifies a single pattern segment (pure function).
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Optional capture**: `:name?`
/// 2. **Required capture**: `:name`
/// 3. **Literal**: any other text
///
/// Capture names must be non-empty and must not contain `:`, `?`, or `/`.
/// A literal containing `?` is rejected, since `?` is only meaningful as
/// the optional marker on a capture.
///
/// # Examples
///
/// ```
/// use wattview_router::route::pattern::{classify_segment, PatternSegment};
///
/// let seg = classify_segment(":id").unwrap();
/// assert_eq!(seg, PatternSegment::Capture("id".to_string()));
///
/// let seg = classify_segment(":id?").unwrap();
/// assert_eq!(seg, PatternSegment::OptionalCapture("id".to_string()));
///
/// assert!(classify_segment(":").is_err());
/// assert!(classify_segment("about?").is_err());
/// ```
pub fn classify_segment(segment: &str) -> Result<PatternSegment, PatternError> {
    match segment.strip_prefix(':') {
        Some(rest) => {
            let (name, optional) = match rest.strip_suffix('?') {
                Some(name) => (name, true),
                None => (rest, false),
            };

            if name.is_empty() {
                return Err(PatternError::EmptyCaptureName);
            }
            if name.contains(&[':', '?', '/'][..]) {
                return Err(PatternError::InvalidCaptureName(name.to_string()));
            }

            if optional {
                Ok(PatternSegment::OptionalCapture(name.to_string()))
            } else {
                Ok(PatternSegment::Capture(name.to_string()))
            }
        }
        None => {
            if segment.contains('?') {
                return Err(PatternError::QuestionMarkInLiteral(segment.to_string()));
            }
            Ok(PatternSegment::Literal(segment.to_string()))
        }
    }
}

/// Parses a full route pattern into its segments (pure function).
///
/// The root pattern `/` parses to an empty segment list. Validation is
/// eager: every error a pattern can produce is produced here, never at
/// match time.
///
/// # Rules
///
/// - The pattern must begin with `/`
/// - No empty segments (`//`, or a trailing `/` on a non-root pattern)
/// - Capture names are unique within one pattern
/// - An optional capture is only legal as the final segment
///
/// # Examples
///
/// ```
/// use wattview_router::route::pattern::{parse_pattern, PatternSegment};
///
/// let segments = parse_pattern("/realtime/:macaddress?").unwrap();
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0], PatternSegment::Literal("realtime".to_string()));
/// assert_eq!(
///     segments[1],
///     PatternSegment::OptionalCapture("macaddress".to_string())
/// );
///
/// assert!(parse_pattern("/").unwrap().is_empty());
/// assert!(parse_pattern("realtime").is_err());
/// assert!(parse_pattern("/:id?/tail").is_err());
/// ```
pub fn parse_pattern(pattern: &str) -> Result<Vec<PatternSegment>, PatternError> {
    let rest = pattern
        .strip_prefix('/')
        .ok_or(PatternError::MissingLeadingSlash)?;

    if rest.is_empty() {
        return Ok(Vec::new());
    }

    let mut segments = Vec::new();
    let mut seen_names: Vec<String> = Vec::new();

    for raw in rest.split('/') {
        if raw.is_empty() {
            return Err(PatternError::EmptySegment);
        }

        // An optional capture parsed on a previous iteration is, by this
        // point, not the final segment.
        if let Some(PatternSegment::OptionalCapture(name)) = segments.last() {
            return Err(PatternError::OptionalNotTrailing(name.clone()));
        }

        let segment = classify_segment(raw)?;

        if let Some(name) = segment.capture_name() {
            if seen_names.iter().any(|seen| seen == name) {
                return Err(PatternError::DuplicateCapture(name.to_string()));
            }
            seen_names.push(name.to_string());
        }

        segments.push(segment);
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_literal() {
        let seg = classify_segment("cost-analysis").unwrap();
        assert_eq!(seg, PatternSegment::Literal("cost-analysis".to_string()));
    }

    #[test]
    fn test_classify_capture() {
        let seg = classify_segment(":macaddress").unwrap();
        assert_eq!(seg, PatternSegment::Capture("macaddress".to_string()));
    }

    #[test]
    fn test_classify_optional_capture() {
        let seg = classify_segment(":macaddress?").unwrap();
        assert_eq!(
            seg,
            PatternSegment::OptionalCapture("macaddress".to_string())
        );
    }

    #[test]
    fn test_classify_empty_capture_name() {
        assert_eq!(classify_segment(":"), Err(PatternError::EmptyCaptureName));
        assert_eq!(classify_segment(":?"), Err(PatternError::EmptyCaptureName));
    }

    #[test]
    fn test_classify_invalid_capture_name() {
        assert_eq!(
            classify_segment(":a?b"),
            Err(PatternError::InvalidCaptureName("a?b".to_string()))
        );
    }

    #[test]
    fn test_classify_question_mark_in_literal() {
        assert_eq!(
            classify_segment("about?"),
            Err(PatternError::QuestionMarkInLiteral("about?".to_string()))
        );
    }

    #[test]
    fn test_parse_root() {
        assert!(parse_pattern("/").unwrap().is_empty());
    }

    #[test]
    fn test_parse_mixed_pattern() {
        let segments = parse_pattern("/cost-analysis/:macaddress?").unwrap();
        assert_eq!(
            segments,
            vec![
                PatternSegment::Literal("cost-analysis".to_string()),
                PatternSegment::OptionalCapture("macaddress".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_missing_leading_slash() {
        assert_eq!(
            parse_pattern("realtime"),
            Err(PatternError::MissingLeadingSlash)
        );
    }

    #[test]
    fn test_parse_empty_segment() {
        assert_eq!(parse_pattern("/a//b"), Err(PatternError::EmptySegment));
        assert_eq!(parse_pattern("/a/"), Err(PatternError::EmptySegment));
    }

    #[test]
    fn test_parse_duplicate_capture() {
        assert_eq!(
            parse_pattern("/:id/:id"),
            Err(PatternError::DuplicateCapture("id".to_string()))
        );
    }

    #[test]
    fn test_parse_optional_must_be_trailing() {
        assert_eq!(
            parse_pattern("/:id?/detail"),
            Err(PatternError::OptionalNotTrailing("id".to_string()))
        );
    }

    #[test]
    fn test_parse_optional_trailing_is_accepted() {
        assert!(parse_pattern("/realtime/:macaddress?").is_ok());
    }
}
