//! Price estimate and the discounted payoff accumulator.

/// Monte Carlo price with its standard error.
///
/// # Examples
///
/// ```rust
/// use pricer_lookback::mc::PriceEstimate;
///
/// let estimate = PriceEstimate { price: 16.6, std_error: 0.05 };
/// println!("Price: {:.4} +/- {:.4}", estimate.price, estimate.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceEstimate {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of the price; zero for a single path.
    pub std_error: f64,
}

impl PriceEstimate {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Running sum and sum of squares of discounted payoffs.
///
/// Shared by the Monte Carlo pricer and the pathwise estimator so both
/// aggregate identically.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PayoffAccumulator {
    discount: f64,
    sum: f64,
    sum_sq: f64,
    count: usize,
}

impl PayoffAccumulator {
    pub(crate) fn new(discount: f64) -> Self {
        Self {
            discount,
            sum: 0.0,
            sum_sq: 0.0,
            count: 0,
        }
    }

    /// Adds one undiscounted payoff.
    #[inline]
    pub(crate) fn add(&mut self, payoff: f64) {
        let discounted = self.discount * payoff;
        self.sum += discounted;
        self.sum_sq += discounted * discounted;
        self.count += 1;
    }

    /// Mean and standard error of the discounted payoffs.
    ///
    /// `std_error = sqrt((E[X²] - E[X]²) / (n - 1))`, clamping a numerically
    /// negative variance to zero. A single sample has zero standard error.
    pub(crate) fn estimate(&self) -> PriceEstimate {
        if self.count <= 1 {
            return PriceEstimate {
                price: self.sum,
                std_error: 0.0,
            };
        }

        let n = self.count as f64;
        let mean = self.sum / n;
        let variance = (self.sum_sq / n - mean * mean).max(0.0);

        PriceEstimate {
            price: mean,
            std_error: (variance / (n - 1.0)).sqrt(),
        }
    }
}
