//! Bidirectional mapping between the score domain `[0, max_score]` and the
//! pixel range `[0, width]`.
//!
//! The factor is recomputed whenever either bound changes. A degenerate
//! domain (`max_score <= 0` or `width <= 0`) falls back to a factor of 1 so
//! both directions stay finite instead of propagating NaN or infinity.

/// Score-to-pixel coordinate mapping with a guarded scale factor.
#[derive(Debug, Clone)]
pub struct Scale {
    max_score: f64,
    width: f64,
    factor: f64,
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            max_score: 1.0,
            width: 1.0,
            factor: 1.0,
        }
    }
}

impl Scale {
    pub fn new(max_score: f64, width: f64) -> Self {
        let mut scale = Self {
            max_score,
            width,
            factor: 1.0,
        };
        scale.recompute();
        scale
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Set the domain ceiling and recompute the factor.
    pub fn set_max_score(&mut self, max_score: f64) {
        self.max_score = max_score;
        self.recompute();
    }

    /// Set the pixel-range ceiling and recompute the factor.
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.factor = if self.max_score > 0.0 && self.width > 0.0 {
            self.width / self.max_score
        } else {
            1.0
        };
    }

    /// Map a score to its pixel position.
    pub fn to_pixel(&self, score: f64) -> f64 {
        score * self.factor
    }

    /// Map a pixel position back to a score. Exact inverse of `to_pixel`
    /// up to floating-point rounding.
    pub fn to_score(&self, pixel: f64) -> f64 {
        pixel / self.factor
    }
}

#[cfg(test)]
#[path = "scale_test.rs"]
mod tests;
