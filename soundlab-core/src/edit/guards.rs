// ============================================================================
// soundlab-core/src/edit/guards.rs
// ============================================================================
//
// VALIDATION GUARDS: Predicate Checks on Raw Request Fields
//
// Stateless checks that run before any planning or engine work. Each check
// names the rule it enforces through a `ValidationError` variant so callers
// can report a precise reason.
//
// ORDER OF CHECKS:
// 1. Source presence (non-empty bytes)
// 2. Region monotonicity (`end > start`)
// 3. Whole-track guard (a cut may not remove the entire source)
// 4. Region-scoped export requires a region
//
// Checks 1 and 2 need no duration and run before the source is probed.

use super::region::Region;
use super::request::ExportScope;

use thiserror::Error;

/// Tolerance used by the whole-track guard, in seconds.
pub const WHOLE_TRACK_EPSILON: f64 = 0.01;

/// A caller-input fault. Reported directly, never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("no audio data was provided")]
    EmptySource,

    #[error("invalid region: end ({end}) must be greater than start ({start}) and start must be non-negative")]
    InvalidRegion { start: f64, end: f64 },

    #[error("cannot cut the entire track ({start}s..{end}s of a {duration}s source)")]
    WholeTrackCut { start: f64, end: f64, duration: f64 },

    #[error("region export requested without a region")]
    MissingRegion,

    #[error("invalid speed value: {0:?}")]
    InvalidSpeed(String),

    #[error("{field} must be a finite number")]
    NonFiniteValue { field: &'static str },
}

/// Rejects a missing or empty source.
pub fn check_source(bytes: &[u8]) -> Result<(), ValidationError> {
    if bytes.is_empty() {
        return Err(ValidationError::EmptySource);
    }
    Ok(())
}

/// Rejects non-finite, negative-start, or non-monotonic regions.
pub fn check_region(region: &Region) -> Result<(), ValidationError> {
    let valid = region.start.is_finite()
        && region.end.is_finite()
        && region.start >= 0.0
        && region.end > region.start;

    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidRegion {
            start: region.start,
            end: region.end,
        })
    }
}

/// Rejects a cut that would remove the whole source.
///
/// The region counts as whole-track when it starts inside the first epsilon
/// band and ends strictly inside the last one. The last band's lower edge is
/// exclusive: on a 10 s source `[0.0, 9.99]` is still a legal cut.
pub fn check_not_whole_track(region: &Region, duration: f64) -> Result<(), ValidationError> {
    let starts_at_head = region.start <= WHOLE_TRACK_EPSILON;
    let reaches_tail = region.end > duration - WHOLE_TRACK_EPSILON;

    if starts_at_head && reaches_tail {
        return Err(ValidationError::WholeTrackCut {
            start: region.start,
            end: region.end,
            duration,
        });
    }
    Ok(())
}

/// Checks that need only the request itself (source presence, region shape).
pub fn validate_cut_request(bytes: &[u8], region: &Region) -> Result<(), ValidationError> {
    check_source(bytes)?;
    check_region(region)
}

/// Full cut validation once the source duration is known.
pub fn validate_cut(bytes: &[u8], region: &Region, duration: f64) -> Result<(), ValidationError> {
    validate_cut_request(bytes, region)?;
    check_not_whole_track(region, duration)
}

/// Resolves the trim region for an export.
///
/// Returns `Some(region)` for a region-scoped export and `None` for a
/// whole-track export, in which case any supplied region is ignored.
pub fn check_export_region(
    scope: ExportScope,
    region: Option<Region>,
) -> Result<Option<Region>, ValidationError> {
    match scope {
        ExportScope::AllTrack => Ok(None),
        ExportScope::Region => {
            let region = region.ok_or(ValidationError::MissingRegion)?;
            check_region(&region)?;
            Ok(Some(region))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_rejected_first() {
        let region = Region::new(5.0, 3.0);
        assert_eq!(
            validate_cut(&[], &region, 10.0),
            Err(ValidationError::EmptySource)
        );
    }

    #[test]
    fn test_non_monotonic_region_rejected() {
        let bytes = [1u8; 4];
        assert!(matches!(
            validate_cut_request(&bytes, &Region::new(5.0, 3.0)),
            Err(ValidationError::InvalidRegion { .. })
        ));
        assert!(matches!(
            validate_cut_request(&bytes, &Region::new(3.0, 3.0)),
            Err(ValidationError::InvalidRegion { .. })
        ));
        assert!(matches!(
            validate_cut_request(&bytes, &Region::new(-1.0, 3.0)),
            Err(ValidationError::InvalidRegion { .. })
        ));
        assert!(matches!(
            validate_cut_request(&bytes, &Region::new(0.0, f64::NAN)),
            Err(ValidationError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn test_whole_track_guard() {
        let bytes = [1u8; 4];

        assert!(matches!(
            validate_cut(&bytes, &Region::new(0.0, 10.0), 10.0),
            Err(ValidationError::WholeTrackCut { .. })
        ));
        assert!(validate_cut(&bytes, &Region::new(0.0, 9.99), 10.0).is_ok());
        assert!(matches!(
            validate_cut(&bytes, &Region::new(0.005, 10.0), 10.0),
            Err(ValidationError::WholeTrackCut { .. })
        ));

        // Starting past the head band is always allowed, even to the end.
        assert!(validate_cut(&bytes, &Region::new(0.02, 10.0), 10.0).is_ok());
        // A region overshooting the source still counts as whole-track.
        assert!(check_not_whole_track(&Region::new(0.0, 12.0), 10.0).is_err());
    }

    #[test]
    fn test_export_region_scope() {
        assert_eq!(check_export_region(ExportScope::AllTrack, None), Ok(None));
        assert_eq!(
            check_export_region(ExportScope::AllTrack, Some(Region::new(5.0, 1.0))),
            Ok(None)
        );
        assert_eq!(
            check_export_region(ExportScope::Region, None),
            Err(ValidationError::MissingRegion)
        );
        assert!(matches!(
            check_export_region(ExportScope::Region, Some(Region::new(4.0, 4.0))),
            Err(ValidationError::InvalidRegion { .. })
        ));
        assert_eq!(
            check_export_region(ExportScope::Region, Some(Region::new(1.0, 4.0))),
            Ok(Some(Region::new(1.0, 4.0)))
        );
    }
}
