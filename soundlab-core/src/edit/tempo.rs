//! Decomposition of a speed ratio into elementary tempo factors.
//!
//! ffmpeg's `atempo` filter is only reliable inside `[0.5, 2.0]`, so larger
//! changes are expressed as a geometric chain of factors whose product is the
//! requested ratio.

/// Smallest factor a single tempo stage may carry.
pub const MIN_TEMPO_FACTOR: f64 = 0.5;

/// Largest factor a single tempo stage may carry.
pub const MAX_TEMPO_FACTOR: f64 = 2.0;

/// Folds `speed` into an ordered chain of factors within
/// `[MIN_TEMPO_FACTOR, MAX_TEMPO_FACTOR]`.
///
/// The chain always ends with the remaining factor, so it is never empty:
/// `4.0` yields `[2.0, 2.0, 1.0]` and `1.0` yields `[1.0]`. Non-positive or
/// non-finite input yields the unit chain.
pub fn fold_tempo_chain(speed: f64) -> Vec<f64> {
    if !speed.is_finite() || speed <= 0.0 {
        return vec![1.0];
    }

    let mut remaining = speed;
    let mut chain = Vec::new();

    while remaining >= MAX_TEMPO_FACTOR {
        chain.push(MAX_TEMPO_FACTOR);
        remaining /= MAX_TEMPO_FACTOR;
    }

    while remaining <= MIN_TEMPO_FACTOR {
        chain.push(MIN_TEMPO_FACTOR);
        remaining /= MIN_TEMPO_FACTOR;
    }

    chain.push(remaining);
    chain
}
