//! # Configuration Validation
//!
//! Turns loosely typed input (a raw side count and a flat list of numbers,
//! or a JSON document) into a [`StackConfig`]. Nothing here fails: bad
//! values are replaced by defaults or dropped, and every substitution is
//! logged and recorded in a [`ValidationReport`].
//!
//! ## Rules
//!
//! - Side count: non-finite or outside `3..=36` becomes 8, otherwise it is
//!   truncated toward zero.
//! - Numbers are grouped into `(height, r1, r2)` triples. A group with any
//!   non-finite member is dropped. A trailing partial group is dropped.
//! - No surviving group means one default segment `{6, 1.0, 0.8}`.

use crate::error::MeshResult;
use crate::segment::{Segment, StackConfig};
use config::constants::{sides_in_range, DEFAULT_SIDES, SEGMENT_ARITY};
use serde::Deserialize;

/// What validation had to change to produce a usable configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// The requested side count was replaced by the default
    pub sides_defaulted: bool,
    /// Zero-based indices of the value groups that were dropped
    pub dropped_groups: Vec<usize>,
    /// No valid segment remained and the default segment was used
    pub segment_defaulted: bool,
}

impl ValidationReport {
    /// Returns true when the input was used exactly as given.
    pub fn is_clean(&self) -> bool {
        !self.sides_defaulted && self.dropped_groups.is_empty() && !self.segment_defaulted
    }
}

/// Coerces a raw side count into the accepted range.
///
/// Returns the side count and whether the default was substituted.
///
/// # Example
///
/// ```rust
/// use frustum_mesh::validate::sanitize_sides;
///
/// assert_eq!(sanitize_sides(Some(12.0)), (12, false));
/// assert_eq!(sanitize_sides(Some(5.9)), (5, false));
/// assert_eq!(sanitize_sides(Some(100.0)), (8, true));
/// assert_eq!(sanitize_sides(None), (8, true));
/// ```
pub fn sanitize_sides(raw: Option<f64>) -> (u32, bool) {
    match raw {
        Some(value) if sides_in_range(value) => (value.trunc() as u32, false),
        _ => {
            log::warn!(
                "side count {:?} is missing or outside the accepted range, using {}",
                raw,
                DEFAULT_SIDES
            );
            (DEFAULT_SIDES, true)
        }
    }
}

/// Groups a flat list of numbers into segments, dropping bad groups.
///
/// Returns the surviving segments and the indices of dropped groups. The
/// default segment is not substituted here; see [`finish_segments`].
///
/// # Example
///
/// ```rust
/// use frustum_mesh::validate::segments_from_values;
///
/// let (segments, dropped) = segments_from_values(&[1.0, 1.0, 1.0, f64::NAN, 2.0, 2.0, 3.0]);
/// assert_eq!(segments.len(), 1);
/// assert_eq!(dropped, vec![1, 2]);
/// ```
pub fn segments_from_values(values: &[f64]) -> (Vec<Segment>, Vec<usize>) {
    let mut segments = Vec::with_capacity(values.len() / SEGMENT_ARITY);
    let mut dropped = Vec::new();

    for (index, group) in values.chunks(SEGMENT_ARITY).enumerate() {
        let triple = match <[f64; 3]>::try_from(group) {
            Ok(triple) => triple,
            Err(_) => {
                log::warn!(
                    "dropping incomplete segment group {} ({} of {} values)",
                    index,
                    group.len(),
                    SEGMENT_ARITY
                );
                dropped.push(index);
                continue;
            }
        };

        let segment = Segment::from_triple(triple);
        if segment.is_finite() {
            segments.push(segment);
        } else {
            log::warn!("dropping segment group {} with non-finite values {:?}", index, triple);
            dropped.push(index);
        }
    }

    (segments, dropped)
}

/// Substitutes the default segment when `segments` is empty.
///
/// Returns the segments and whether the default was used.
pub fn finish_segments(mut segments: Vec<Segment>) -> (Vec<Segment>, bool) {
    if segments.is_empty() {
        let fallback = Segment::default();
        log::warn!("no valid segments given, using default {:?}", fallback);
        segments.push(fallback);
        (segments, true)
    } else {
        (segments, false)
    }
}

/// Validates a raw side count and flat value list into a [`StackConfig`].
///
/// # Example
///
/// ```rust
/// use frustum_mesh::validate::validate;
///
/// let (config, report) = validate(Some(4.0), &[2.0, 1.0, 1.0]);
/// assert_eq!(config.sides(), 4);
/// assert_eq!(config.segments().len(), 1);
/// assert!(report.is_clean());
/// ```
pub fn validate(raw_sides: Option<f64>, values: &[f64]) -> (StackConfig, ValidationReport) {
    let (segments, dropped_groups) = segments_from_values(values);
    validate_segments(raw_sides, segments, dropped_groups)
}

/// Validates already-typed segments, dropping non-finite ones.
pub fn validate_typed(
    raw_sides: Option<f64>,
    segments: Vec<Segment>,
) -> (StackConfig, ValidationReport) {
    let mut dropped_groups = Vec::new();
    let segments = segments
        .into_iter()
        .enumerate()
        .filter_map(|(index, segment)| {
            if segment.is_finite() {
                Some(segment)
            } else {
                log::warn!("dropping segment {} with non-finite values {:?}", index, segment);
                dropped_groups.push(index);
                None
            }
        })
        .collect();
    validate_segments(raw_sides, segments, dropped_groups)
}

fn validate_segments(
    raw_sides: Option<f64>,
    segments: Vec<Segment>,
    dropped_groups: Vec<usize>,
) -> (StackConfig, ValidationReport) {
    let (sides, sides_defaulted) = sanitize_sides(raw_sides);
    let (segments, segment_defaulted) = finish_segments(segments);

    let report = ValidationReport {
        sides_defaulted,
        dropped_groups,
        segment_defaulted,
    };
    log::debug!(
        "validated stack: {} sides, {} segments, report {:?}",
        sides,
        segments.len(),
        report
    );

    (StackConfig::from_validated(sides, segments), report)
}

/// Parses one textual number.
///
/// Surrounding whitespace is ignored. Anything that is not a number,
/// including the empty string, becomes NaN so that validation drops it.
///
/// # Example
///
/// ```rust
/// use frustum_mesh::validate::parse_number;
///
/// assert_eq!(parse_number(" 2.5 "), 2.5);
/// assert!(parse_number("abc").is_nan());
/// assert!(parse_number("").is_nan());
/// ```
pub fn parse_number(token: &str) -> f64 {
    token.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Validates textual arguments: the first token is the side count, the rest
/// are segment values.
///
/// # Example
///
/// ```rust
/// use frustum_mesh::validate::validate_args;
///
/// let (config, _) = validate_args(&["6", "1", "1", "0.5", "2", "0.5", "0.5"]);
/// assert_eq!(config.sides(), 6);
/// assert_eq!(config.segments().len(), 2);
/// ```
pub fn validate_args<S: AsRef<str>>(args: &[S]) -> (StackConfig, ValidationReport) {
    let raw_sides = args.first().map(|token| parse_number(token.as_ref()));
    let values: Vec<f64> = args
        .iter()
        .skip(1)
        .map(|token| parse_number(token.as_ref()))
        .collect();
    validate(raw_sides, &values)
}

/// Stack description as read from a JSON document.
///
/// ```json
/// { "sides": 8, "segments": [{ "height": 6, "r1": 1.0, "r2": 0.8 }] }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStackConfig {
    /// Requested side count, validated like the command-line value
    #[serde(default)]
    pub sides: Option<f64>,
    /// Segments in stacking order
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl RawStackConfig {
    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MeshError::ConfigParse`] when the JSON is malformed.
    pub fn from_json_str(source: &str) -> MeshResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Applies the validation rules.
    pub fn validate(self) -> (StackConfig, ValidationReport) {
        validate_typed(self.sides, self.segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides_non_finite_defaults() {
        assert_eq!(sanitize_sides(Some(f64::NAN)), (8, true));
        assert_eq!(sanitize_sides(Some(f64::INFINITY)), (8, true));
    }

    #[test]
    fn test_sides_out_of_range_defaults() {
        assert_eq!(sanitize_sides(Some(2.0)), (8, true));
        assert_eq!(sanitize_sides(Some(37.0)), (8, true));
        assert_eq!(sanitize_sides(Some(-5.0)), (8, true));
        assert_eq!(sanitize_sides(Some(0.0)), (8, true));
    }

    #[test]
    fn test_sides_bounds_accepted() {
        assert_eq!(sanitize_sides(Some(3.0)), (3, false));
        assert_eq!(sanitize_sides(Some(36.0)), (36, false));
    }

    #[test]
    fn test_sides_truncated() {
        assert_eq!(sanitize_sides(Some(3.99)), (3, false));
        assert_eq!(sanitize_sides(Some(35.5)), (35, false));
    }

    #[test]
    fn test_no_values_uses_default_segment() {
        let (config, report) = validate(Some(8.0), &[]);
        assert_eq!(config.segments(), &[Segment::new(6.0, 1.0, 0.8)]);
        assert!(report.segment_defaulted);
        assert!(report.dropped_groups.is_empty());
    }

    #[test]
    fn test_all_groups_dropped_uses_default_segment() {
        let (config, report) = validate(Some(5.0), &[f64::NAN, 1.0, 1.0]);
        assert_eq!(config.segments(), &[Segment::default()]);
        assert_eq!(report.dropped_groups, vec![0]);
        assert!(report.segment_defaulted);
    }

    #[test]
    fn test_bad_group_dropped_not_substituted() {
        let values = [1.0, 1.0, 1.0, 2.0, f64::INFINITY, 1.0, 3.0, 0.5, 0.25];
        let (config, report) = validate(Some(6.0), &values);
        assert_eq!(
            config.segments(),
            &[Segment::new(1.0, 1.0, 1.0), Segment::new(3.0, 0.5, 0.25)]
        );
        assert_eq!(report.dropped_groups, vec![1]);
        assert!(!report.segment_defaulted);
    }

    #[test]
    fn test_trailing_partial_group_dropped() {
        let (config, report) = validate(Some(6.0), &[1.0, 1.0, 1.0, 2.0, 2.0]);
        assert_eq!(config.segments().len(), 1);
        assert_eq!(report.dropped_groups, vec![1]);
    }

    #[test]
    fn test_non_positive_height_passes_through() {
        let (config, report) = validate(Some(4.0), &[0.0, 1.0, 1.0, -1.0, 2.0, 0.0]);
        assert_eq!(config.segments()[0].height, 0.0);
        assert_eq!(config.segments()[1].height, -1.0);
        assert!(report.is_clean());
    }

    #[test]
    fn test_args_unparsable_tokens() {
        let (config, report) = validate_args(&["many", "1", "x", "1", "2", "1", "1"]);
        assert_eq!(config.sides(), 8);
        assert!(report.sides_defaulted);
        assert_eq!(config.segments(), &[Segment::new(2.0, 1.0, 1.0)]);
        assert_eq!(report.dropped_groups, vec![0]);
    }

    #[test]
    fn test_lenient_result_passes_strict_checks() {
        let (config, _) = validate(Some(7.9), &[1.0, 2.0, 0.5, f64::NAN, 1.0, 1.0, 4.0, 0.5]);
        let strict = StackConfig::new(config.sides(), config.segments().to_vec()).unwrap();
        assert_eq!(config, strict);
        assert_eq!(config.sides(), 7);
        assert_eq!(config.segments(), &[Segment::new(1.0, 2.0, 0.5)]);
    }

    #[test]
    fn test_args_empty() {
        let args: [&str; 0] = [];
        let (config, report) = validate_args(&args);
        assert_eq!(config, StackConfig::default());
        assert!(report.sides_defaulted);
        assert!(report.segment_defaulted);
    }

    #[test]
    fn test_raw_config_from_json() {
        let raw = RawStackConfig::from_json_str(
            r#"{"sides": 12, "segments": [{"height": 2, "r1": 1, "r2": 1}]}"#,
        )
        .unwrap();
        let (config, report) = raw.validate();
        assert_eq!(config.sides(), 12);
        assert_eq!(config.segments(), &[Segment::new(2.0, 1.0, 1.0)]);
        assert!(report.is_clean());
    }

    #[test]
    fn test_raw_config_missing_fields() {
        let (config, report) = RawStackConfig::from_json_str("{}").unwrap().validate();
        assert_eq!(config, StackConfig::default());
        assert!(report.sides_defaulted);
        assert!(report.segment_defaulted);
    }

    #[test]
    fn test_raw_config_malformed() {
        assert!(RawStackConfig::from_json_str("{\"sides\": ").is_err());
    }
}
