use serde::Serialize;

/// Highest average delay (minutes) still rated [`PerformanceVerdict::Good`].
pub const GOOD_MAX_AVG_DELAY: f64 = 10.0;
/// Highest average delay (minutes) still rated [`PerformanceVerdict::Moderate`].
pub const MODERATE_MAX_AVG_DELAY: f64 = 30.0;

/// Qualitative rating of an average delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceVerdict {
    Good,
    Moderate,
    Poor,
}

impl PerformanceVerdict {
    /// Both bounds are inclusive.
    pub fn from_average(avg_delay: f64) -> Self {
        if avg_delay <= GOOD_MAX_AVG_DELAY {
            Self::Good
        } else if avg_delay <= MODERATE_MAX_AVG_DELAY {
            Self::Moderate
        } else {
            Self::Poor
        }
    }

    /// One-line summary used in the text report.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Good => "✅ Good (average delay at or below 10 minutes)",
            Self::Moderate => "⚠️ Moderate (delays could be improved)",
            Self::Poor => "🔴 Poor (significant delays detected)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PerformanceVerdict;

    #[test]
    fn tiers_include_their_upper_bound() {
        assert_eq!(PerformanceVerdict::from_average(-5.0), PerformanceVerdict::Good);
        assert_eq!(PerformanceVerdict::from_average(10.0), PerformanceVerdict::Good);
        assert_eq!(PerformanceVerdict::from_average(10.01), PerformanceVerdict::Moderate);
        assert_eq!(PerformanceVerdict::from_average(30.0), PerformanceVerdict::Moderate);
        assert_eq!(PerformanceVerdict::from_average(30.5), PerformanceVerdict::Poor);
    }
}
