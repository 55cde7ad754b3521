//! Planning for removing a region from the source.
//!
//! A cut keeps `[0, start)` and `[end, duration)`. Each non-empty range is
//! extracted on its own and the results are concatenated in source order.

use super::region::{Region, TimeRange};

use log::debug;

/// Where a kept segment sits relative to the removed region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPosition {
    Before,
    After,
}

/// A kept, non-empty span of the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutSegment {
    pub range: TimeRange,
    pub position: SegmentPosition,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutPlan {
    pub before_region: TimeRange,
    pub after_region: TimeRange,
}

impl CutPlan {
    /// Non-empty segments in source order.
    pub fn segments(&self) -> Vec<CutSegment> {
        [
            (self.before_region, SegmentPosition::Before),
            (self.after_region, SegmentPosition::After),
        ]
        .into_iter()
        .filter(|(range, _)| !range.is_empty())
        .map(|(range, position)| CutSegment { range, position })
        .collect()
    }

    /// True when only one segment survives and no join is needed.
    pub fn is_single_segment(&self) -> bool {
        self.segments().len() == 1
    }
}

/// Plans the kept ranges for cutting `region` out of a source of `duration`
/// seconds. The region is assumed to have passed validation.
pub fn plan_cut(region: &Region, duration: f64) -> CutPlan {
    let plan = CutPlan {
        before_region: TimeRange::new(0.0, region.start),
        after_region: TimeRange::new(region.end, duration),
    };
    debug!(
        "Cut plan for {}: keep {} and {}",
        region, plan.before_region, plan.after_region
    );
    plan
}
