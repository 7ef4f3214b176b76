//! Running path extrema for lookback payoffs.
//!
//! Statistics are accumulated incrementally as the spot is advanced, so the
//! pricers never store a full path.

/// Running minimum and maximum of a simulated path.
///
/// Seeded with the initial spot, so `minimum() <= S0 <= maximum()` holds
/// for every prefix of the path.
///
/// # Example
///
/// ```
/// use pricer_lookback::path_dependent::RunningExtremes;
///
/// let mut extremes = RunningExtremes::new(100.0);
/// extremes.observe(105.0);
/// extremes.observe(95.0);
///
/// assert_eq!(extremes.minimum(), 95.0);
/// assert_eq!(extremes.maximum(), 105.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunningExtremes {
    running_min: f64,
    running_max: f64,
}

/// Which side of the running range an observation moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtremeUpdate {
    /// Neither extremum changed.
    Unchanged,
    /// A new strict minimum was recorded.
    NewMinimum,
    /// A new strict maximum was recorded.
    NewMaximum,
}

impl RunningExtremes {
    /// Starts tracking from the initial spot.
    #[inline]
    pub fn new(initial: f64) -> Self {
        Self {
            running_min: initial,
            running_max: initial,
        }
    }

    /// Observes a new price and updates the extrema.
    ///
    /// Only strict improvements move an extremum, so on ties the earliest
    /// step keeps ownership. Returns which extremum (if any) moved; the
    /// pathwise estimator uses this to capture tangents at the extremum.
    #[inline]
    pub fn observe(&mut self, price: f64) -> ExtremeUpdate {
        if price < self.running_min {
            self.running_min = price;
            ExtremeUpdate::NewMinimum
        } else if price > self.running_max {
            self.running_max = price;
            ExtremeUpdate::NewMaximum
        } else {
            ExtremeUpdate::Unchanged
        }
    }

    /// Returns the running minimum.
    #[inline]
    pub fn minimum(&self) -> f64 {
        self.running_min
    }

    /// Returns the running maximum.
    #[inline]
    pub fn maximum(&self) -> f64 {
        self.running_max
    }
}
