// ============================================================================
// soundlab-core/src/edit/request.rs
// ============================================================================
//
// EXPORT REQUEST: Raw Parameters and Their Compiled Form
//
// `ExportRequest` mirrors the loosely-typed parameter set a caller sends
// (every field optional, speed as text). `ExportRequest::compile` turns it
// into `ExportSettings`, which holds clamped values and an explicit list of
// requested transforms instead of a bag of optional fields.
//
// CLAMPING:
// - speed: [0.25, 4.0]
// - volume: [0.0, 2.0]
//
// Clamping happens in `ExportSettings::with_transform`, so settings built in
// code and settings compiled from a request obey the same bounds.

use super::format::{
    AudioFormat, DEFAULT_BIT_DEPTH, DEFAULT_MP3_BITRATE, DEFAULT_SAMPLE_RATE, QualityRequest,
};
use super::guards::{ValidationError, check_export_region};
use super::region::Region;

use serde::{Deserialize, Serialize};

/// Lowest accepted playback speed ratio.
pub const MIN_SPEED: f64 = 0.25;

/// Highest accepted playback speed ratio.
pub const MAX_SPEED: f64 = 4.0;

/// Lowest accepted linear gain.
pub const MIN_VOLUME: f64 = 0.0;

/// Highest accepted linear gain.
pub const MAX_VOLUME: f64 = 2.0;

/// Which part of the source an export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportScope {
    #[default]
    AllTrack,
    Region,
}

impl ExportScope {
    /// `region` in any case selects [`ExportScope::Region`]; anything else is
    /// the whole track.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("region") {
            ExportScope::Region
        } else {
            ExportScope::AllTrack
        }
    }
}

/// A fade window in seconds. The window is not checked for `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeWindow {
    pub start: f64,
    pub end: f64,
}

impl FadeWindow {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// `end - start`, possibly negative.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// A single requested transformation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Volume(f64),
    FadeIn(FadeWindow),
    FadeOut(FadeWindow),
    Speed(f64),
}

/// Fallback values for fields an [`ExportRequest`] leaves out.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDefaults {
    pub sample_rate_hz: u32,
    pub bit_depth: u32,
    pub mp3_bitrate_kbps: u32,
    pub format: AudioFormat,
    pub file_name: String,
}

impl Default for ExportDefaults {
    fn default() -> Self {
        Self {
            sample_rate_hz: DEFAULT_SAMPLE_RATE,
            bit_depth: DEFAULT_BIT_DEPTH,
            mp3_bitrate_kbps: DEFAULT_MP3_BITRATE,
            format: AudioFormat::Wav,
            file_name: "export.wav".to_string(),
        }
    }
}

/// Raw export parameters as received from a caller or a JSON settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportRequest {
    pub export_scope: Option<String>,
    pub region_start: Option<f64>,
    pub region_end: Option<f64>,
    /// Speed ratio as text, `.` as the decimal separator.
    pub speed: Option<String>,
    pub fade_in_start: Option<f64>,
    pub fade_in_end: Option<f64>,
    pub fade_out_start: Option<f64>,
    pub fade_out_end: Option<f64>,
    pub volume: Option<f64>,
    pub sample_rate: Option<u32>,
    pub bit_depth: Option<u32>,
    pub mp3_bitrate: Option<u32>,
    pub format: Option<String>,
    pub file_name: Option<String>,
}

impl ExportRequest {
    /// Parses, clamps and scope-checks the request.
    ///
    /// Fails on an unparsable or non-finite speed, a non-finite volume, or a
    /// region-scoped export without a valid region.
    pub fn compile(&self, defaults: &ExportDefaults) -> Result<ExportSettings, ValidationError> {
        let speed = parse_speed(self.speed.as_deref())?;

        let volume = self.volume.unwrap_or(1.0);
        if !volume.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "volume" });
        }

        let scope = self
            .export_scope
            .as_deref()
            .map(ExportScope::from_name)
            .unwrap_or_default();

        let requested_region = match (self.region_start, self.region_end) {
            (Some(start), Some(end)) => Some(Region::new(start, end)),
            _ => None,
        };
        let region = check_export_region(scope, requested_region)?;

        let format = self
            .format
            .as_deref()
            .map(AudioFormat::from_name)
            .unwrap_or(defaults.format);

        let mut settings = ExportSettings::new(format);
        settings.scope = scope;
        settings.region = region;
        settings.quality = QualityRequest {
            format,
            sample_rate_hz: self.sample_rate.unwrap_or(defaults.sample_rate_hz),
            bit_depth: self.bit_depth.unwrap_or(defaults.bit_depth),
            mp3_bitrate_kbps: Some(self.mp3_bitrate.unwrap_or(defaults.mp3_bitrate_kbps)),
        };
        settings.file_name = self
            .file_name
            .clone()
            .unwrap_or_else(|| defaults.file_name.clone());

        settings = settings.with_transform(Transform::Volume(volume));
        if let (Some(start), Some(end)) = (self.fade_in_start, self.fade_in_end) {
            settings = settings.with_transform(Transform::FadeIn(FadeWindow::new(start, end)));
        }
        if let (Some(start), Some(end)) = (self.fade_out_start, self.fade_out_end) {
            settings = settings.with_transform(Transform::FadeOut(FadeWindow::new(start, end)));
        }
        settings = settings.with_transform(Transform::Speed(speed));

        Ok(settings)
    }
}

fn parse_speed(raw: Option<&str>) -> Result<f64, ValidationError> {
    let Some(raw) = raw else {
        return Ok(1.0);
    };

    let speed: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidSpeed(raw.to_string()))?;

    if speed.is_finite() {
        Ok(speed)
    } else {
        Err(ValidationError::InvalidSpeed(raw.to_string()))
    }
}

/// Compiled export settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    pub scope: ExportScope,
    pub region: Option<Region>,
    /// Requested transformations in request order. The order never affects
    /// the compiled stage order.
    pub transforms: Vec<Transform>,
    pub quality: QualityRequest,
    pub file_name: String,
}

impl ExportSettings {
    /// Whole-track settings with no transforms and default quality.
    pub fn new(format: AudioFormat) -> Self {
        Self {
            scope: ExportScope::AllTrack,
            region: None,
            transforms: Vec::new(),
            quality: QualityRequest {
                format,
                ..QualityRequest::default()
            },
            file_name: format!("export.{}", format.extension()),
        }
    }

    /// Restricts the export to `region`.
    pub fn with_region(mut self, region: Region) -> Self {
        self.scope = ExportScope::Region;
        self.region = Some(region);
        self
    }

    /// Appends a transform, clamping speed and volume to their public range.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        let transform = match transform {
            Transform::Volume(gain) => Transform::Volume(gain.clamp(MIN_VOLUME, MAX_VOLUME)),
            Transform::Speed(ratio) => Transform::Speed(ratio.clamp(MIN_SPEED, MAX_SPEED)),
            other => other,
        };
        self.transforms.push(transform);
        self
    }

    pub fn format(&self) -> AudioFormat {
        self.quality.format
    }

    /// Effective gain; the last volume transform wins, unity when absent.
    pub fn volume(&self) -> f64 {
        self.transforms
            .iter()
            .rev()
            .find_map(|t| match t {
                Transform::Volume(gain) => Some(*gain),
                _ => None,
            })
            .unwrap_or(1.0)
    }

    /// Effective speed ratio; the last speed transform wins, unity when absent.
    pub fn speed(&self) -> f64 {
        self.transforms
            .iter()
            .rev()
            .find_map(|t| match t {
                Transform::Speed(ratio) => Some(*ratio),
                _ => None,
            })
            .unwrap_or(1.0)
    }

    pub fn fade_in(&self) -> Option<FadeWindow> {
        self.transforms.iter().rev().find_map(|t| match t {
            Transform::FadeIn(window) => Some(*window),
            _ => None,
        })
    }

    pub fn fade_out(&self) -> Option<FadeWindow> {
        self.transforms.iter().rev().find_map(|t| match t {
            Transform::FadeOut(window) => Some(*window),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_uses_defaults() {
        let settings = ExportRequest::default()
            .compile(&ExportDefaults::default())
            .unwrap();

        assert_eq!(settings.scope, ExportScope::AllTrack);
        assert_eq!(settings.region, None);
        assert_eq!(settings.format(), AudioFormat::Wav);
        assert_eq!(settings.quality.sample_rate_hz, 44_100);
        assert_eq!(settings.quality.bit_depth, 16);
        assert_eq!(settings.quality.mp3_bitrate_kbps, Some(192));
        assert_eq!(settings.file_name, "export.wav");
        assert_eq!(settings.speed(), 1.0);
        assert_eq!(settings.volume(), 1.0);
        assert_eq!(settings.fade_in(), None);
    }

    #[test]
    fn test_speed_parsing() {
        let compile = |speed: &str| {
            ExportRequest {
                speed: Some(speed.to_string()),
                ..ExportRequest::default()
            }
            .compile(&ExportDefaults::default())
        };

        assert_eq!(compile(" 1.5 ").unwrap().speed(), 1.5);
        assert_eq!(compile("10").unwrap().speed(), MAX_SPEED);
        assert_eq!(compile("0.1").unwrap().speed(), MIN_SPEED);
        assert!(matches!(compile("fast"), Err(ValidationError::InvalidSpeed(_))));
        assert!(matches!(compile("1,5"), Err(ValidationError::InvalidSpeed(_))));
        assert!(matches!(compile("NaN"), Err(ValidationError::InvalidSpeed(_))));
        assert!(matches!(compile("inf"), Err(ValidationError::InvalidSpeed(_))));
    }

    #[test]
    fn test_volume_clamped_and_checked() {
        let compile = |volume: f64| {
            ExportRequest {
                volume: Some(volume),
                ..ExportRequest::default()
            }
            .compile(&ExportDefaults::default())
        };

        assert_eq!(compile(3.5).unwrap().volume(), MAX_VOLUME);
        assert_eq!(compile(-1.0).unwrap().volume(), MIN_VOLUME);
        assert_eq!(
            compile(f64::NAN),
            Err(ValidationError::NonFiniteValue { field: "volume" })
        );
    }

    #[test]
    fn test_region_scope() {
        let request = ExportRequest {
            export_scope: Some("Region".to_string()),
            region_start: Some(1.0),
            region_end: Some(4.0),
            ..ExportRequest::default()
        };
        let settings = request.compile(&ExportDefaults::default()).unwrap();
        assert_eq!(settings.scope, ExportScope::Region);
        assert_eq!(settings.region, Some(Region::new(1.0, 4.0)));

        let missing = ExportRequest {
            export_scope: Some("region".to_string()),
            region_start: Some(1.0),
            ..ExportRequest::default()
        };
        assert_eq!(
            missing.compile(&ExportDefaults::default()),
            Err(ValidationError::MissingRegion)
        );
    }

    #[test]
    fn test_fade_requires_both_ends() {
        let request = ExportRequest {
            fade_in_start: Some(0.0),
            fade_in_end: Some(2.0),
            fade_out_start: Some(8.0),
            ..ExportRequest::default()
        };
        let settings = request.compile(&ExportDefaults::default()).unwrap();
        assert_eq!(settings.fade_in(), Some(FadeWindow::new(0.0, 2.0)));
        assert_eq!(settings.fade_out(), None);
    }

    #[test]
    fn test_inverted_fade_window_passes_through() {
        let window = FadeWindow::new(5.0, 3.0);
        assert_eq!(window.duration(), -2.0);

        let settings = ExportSettings::new(AudioFormat::Wav).with_transform(Transform::FadeOut(window));
        assert_eq!(settings.fade_out(), Some(window));
    }

    #[test]
    fn test_deserialize_camel_case_json() {
        let json = r#"{
            "exportScope": "region",
            "regionStart": 2.5,
            "regionEnd": 6.0,
            "speed": "2.0",
            "format": "MP3",
            "mp3Bitrate": 256,
            "fileName": "take1"
        }"#;
        let request: ExportRequest = serde_json::from_str(json).unwrap();
        let settings = request.compile(&ExportDefaults::default()).unwrap();

        assert_eq!(settings.format(), AudioFormat::Mp3);
        assert_eq!(settings.quality.mp3_bitrate_kbps, Some(256));
        assert_eq!(settings.region, Some(Region::new(2.5, 6.0)));
        assert_eq!(settings.speed(), 2.0);
        assert_eq!(settings.file_name, "take1");
    }

    #[test]
    fn test_scope_names() {
        assert_eq!(ExportScope::from_name("region"), ExportScope::Region);
        assert_eq!(ExportScope::from_name("all"), ExportScope::AllTrack);
        assert_eq!(ExportScope::from_name("anything"), ExportScope::AllTrack);
    }

    #[test]
    fn test_scope_read_from_json_text() {
        let json = r#"{"exportScope": " Region ", "regionStart": 1.0, "regionEnd": 2.0}"#;
        let request: ExportRequest = serde_json::from_str(json).unwrap();
        let settings = request.compile(&ExportDefaults::default()).unwrap();
        assert_eq!(settings.scope, ExportScope::Region);

        let json = r#"{"exportScope": "all", "regionStart": 1.0, "regionEnd": 2.0}"#;
        let request: ExportRequest = serde_json::from_str(json).unwrap();
        let settings = request.compile(&ExportDefaults::default()).unwrap();
        assert_eq!(settings.scope, ExportScope::AllTrack);
        assert_eq!(settings.region, None);
    }
}
