// ============================================================================
// soundlab-core/src/edit/filter_graph.rs
// ============================================================================
//
// EXPORT FILTER GRAPH: Ordered Audio Filter Stages for an Export
//
// Turns compiled `ExportSettings` into the ordered list of audio filter
// stages ffmpeg applies during an export, paired with the resolved encoding
// target.
//
// STAGE PRECEDENCE (fixed, independent of request order):
// 1. Trim      - region-scoped exports only
// 2. Volume    - gain differs from unity by more than the dead zone
// 3. Limiter   - only behind a boosting volume stage
// 4. Fade in
// 5. Fade out
// 6. Tempo     - one stage per folded factor
//
// An empty stage list means a plain re-encode with no `-af` argument.

use super::format::EncodingTarget;
use super::request::{ExportScope, ExportSettings};
use super::tempo::fold_tempo_chain;

use log::{debug, warn};
use std::fmt;

/// Gains within this distance of unity emit no volume stage.
pub const VOLUME_DEAD_ZONE: f64 = 0.001;

/// Speeds within this distance of unity emit no tempo stage.
pub const SPEED_DEAD_ZONE: f64 = 0.001;

/// Hard gain cap applied before the limiter.
pub const MAX_SAFE_GAIN: f64 = 5.0;

/// Limiter ceiling, linear.
pub const LIMITER_CEILING: f64 = 0.8;

/// Stage categories, used for ordering assertions and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StageKind {
    Trim,
    Volume,
    Limiter,
    FadeIn,
    FadeOut,
    Tempo,
}

/// One audio filter with its numeric parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterStage {
    Trim { start: f64, end: f64 },
    Volume { gain: f64 },
    Limiter { level_in: f64, level_out: f64, limit: f64 },
    FadeIn { start: f64, duration: f64 },
    FadeOut { start: f64, duration: f64 },
    Tempo { factor: f64 },
}

impl FilterStage {
    /// ffmpeg filter name.
    pub fn name(&self) -> &'static str {
        match self {
            FilterStage::Trim { .. } => "atrim",
            FilterStage::Volume { .. } => "volume",
            FilterStage::Limiter { .. } => "alimiter",
            FilterStage::FadeIn { .. } | FilterStage::FadeOut { .. } => "afade",
            FilterStage::Tempo { .. } => "atempo",
        }
    }

    pub fn kind(&self) -> StageKind {
        match self {
            FilterStage::Trim { .. } => StageKind::Trim,
            FilterStage::Volume { .. } => StageKind::Volume,
            FilterStage::Limiter { .. } => StageKind::Limiter,
            FilterStage::FadeIn { .. } => StageKind::FadeIn,
            FilterStage::FadeOut { .. } => StageKind::FadeOut,
            FilterStage::Tempo { .. } => StageKind::Tempo,
        }
    }
}

impl fmt::Display for FilterStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterStage::Trim { start, end } => write!(f, "atrim=start={start}:end={end}"),
            FilterStage::Volume { gain } => write!(f, "volume={gain}"),
            FilterStage::Limiter {
                level_in,
                level_out,
                limit,
            } => write!(
                f,
                "alimiter=level_in={level_in}:level_out={level_out}:limit={limit}"
            ),
            FilterStage::FadeIn { start, duration } => {
                write!(f, "afade=t=in:st={start}:d={duration}")
            }
            FilterStage::FadeOut { start, duration } => {
                write!(f, "afade=t=out:st={start}:d={duration}")
            }
            FilterStage::Tempo { factor } => write!(f, "atempo={factor}"),
        }
    }
}

/// Everything needed to run one export through the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPlan {
    pub stages: Vec<FilterStage>,
    pub target: EncodingTarget,
    pub source_duration: f64,
}

impl ExportPlan {
    /// The `-af` argument, or `None` for a pass-through re-encode.
    pub fn filter_chain(&self) -> Option<String> {
        if self.stages.is_empty() {
            return None;
        }
        Some(
            self.stages
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
        )
    }

    pub fn kinds(&self) -> Vec<StageKind> {
        self.stages.iter().map(FilterStage::kind).collect()
    }
}

/// Builds the export plan in fixed stage precedence.
pub fn build_export_plan(
    settings: &ExportSettings,
    target: EncodingTarget,
    source_duration: f64,
) -> ExportPlan {
    let mut stages = Vec::new();

    if settings.scope == ExportScope::Region {
        if let Some(region) = settings.region {
            if region.end > source_duration {
                warn!(
                    "Export region {} extends past the source duration ({:.3}s)",
                    region, source_duration
                );
            }
            stages.push(FilterStage::Trim {
                start: region.start,
                end: region.end,
            });
        }
    }

    let volume = settings.volume();
    if (volume - 1.0).abs() > VOLUME_DEAD_ZONE {
        stages.push(FilterStage::Volume {
            gain: volume.min(MAX_SAFE_GAIN),
        });
        if volume > 1.0 {
            stages.push(FilterStage::Limiter {
                level_in: 1.0,
                level_out: 1.0,
                limit: LIMITER_CEILING,
            });
        }
    }

    if let Some(window) = settings.fade_in() {
        stages.push(FilterStage::FadeIn {
            start: window.start,
            duration: window.duration(),
        });
    }

    if let Some(window) = settings.fade_out() {
        stages.push(FilterStage::FadeOut {
            start: window.start,
            duration: window.duration(),
        });
    }

    let speed = settings.speed();
    if (speed - 1.0).abs() > SPEED_DEAD_ZONE {
        stages.extend(
            fold_tempo_chain(speed)
                .into_iter()
                .map(|factor| FilterStage::Tempo { factor }),
        );
    }

    let plan = ExportPlan {
        stages,
        target,
        source_duration,
    };

    match plan.filter_chain() {
        Some(chain) => debug!("Export filter chain: {chain}"),
        None => debug!("Export filter chain: none (re-encode only)"),
    }

    plan
}
