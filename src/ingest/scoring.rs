//! Raw maintainability score for the complexity-report format.
//!
//! Uses the published maintainability-index inputs without the Visual
//! Studio normalization: higher volume, complexity, and size all raise the
//! score, so larger values mean harder-to-maintain files.
//!
//! Formula: `5.2 * ln(V) + 0.23 * G + 16.2 * ln(SLOC)`
//! where V = Halstead volume and G = cyclomatic complexity.
//!
//! Defined as 0 when `sloc == 0` (nothing to measure) or `volume <= 0`
//! (the logarithm would not be finite). Zero is a regular score downstream,
//! not a sentinel the core treats specially.

/// Compute the raw maintainability score from report inputs.
pub fn raw_score(volume: f64, cyclomatic: u64, sloc: u64) -> f64 {
    if sloc == 0 || volume <= 0.0 {
        return 0.0;
    }
    5.2 * volume.ln() + 0.23 * cyclomatic as f64 + 16.2 * (sloc as f64).ln()
}

#[cfg(test)]
#[path = "scoring_test.rs"]
mod tests;
