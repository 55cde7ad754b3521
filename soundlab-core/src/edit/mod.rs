//! The edit request compiler.
//!
//! Everything in this module is pure: it turns raw cut/export parameters into
//! validated settings, an ordered list of filter stages, a resolved encoding
//! target, or a cut plan. Nothing here touches the filesystem or spawns a
//! process; the `external` and `processing` modules consume its output.
//!
//! Compilation order for an export:
//! 1. [`ExportRequest::compile`] parses and clamps the raw fields and runs the
//!    region-scope guard.
//! 2. [`resolve_quality`] legalizes sample rate, codec and bitrate for the
//!    target container.
//! 3. [`build_export_plan`] emits the filter stages in fixed precedence,
//!    folding the speed ratio through [`fold_tempo_chain`].
//!
//! A cut goes through [`guards::validate_cut`] and then [`plan_cut`].

pub mod cut;
pub mod filter_graph;
pub mod format;
pub mod guards;
pub mod region;
pub mod request;
pub mod tempo;

pub use cut::{CutPlan, CutSegment, SegmentPosition, plan_cut};
pub use filter_graph::{ExportPlan, FilterStage, StageKind, build_export_plan};
pub use format::{AudioCodec, AudioFormat, EncodingTarget, QualityRequest, resolve_quality};
pub use guards::ValidationError;
pub use region::{Region, TimeRange};
pub use request::{ExportDefaults, ExportRequest, ExportScope, ExportSettings, FadeWindow, Transform};
pub use tempo::fold_tempo_chain;
