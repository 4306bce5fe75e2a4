//! Configuration options for table cleaning.

/// How missing measurement values are resolved.
///
/// Rows without a date or weather label are dropped under every policy,
/// since there is no statistic that can stand in for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Fill each missing measurement with its column mean.
    #[default]
    FillMean,
    /// Drop every row that has any missing field.
    Drop,
}

impl MissingPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            MissingPolicy::FillMean => "fill-mean",
            MissingPolicy::Drop => "drop",
        }
    }
}

/// Options controlling the cleaning pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanOptions {
    /// Missing value policy for measurement columns.
    pub missing: MissingPolicy,

    /// Append z-score standardized copies of the measurement columns.
    ///
    /// Uses the population standard deviation. A constant column is
    /// standardized to all zeros.
    pub standardize: bool,
}

impl CleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_missing_policy(mut self, policy: MissingPolicy) -> Self {
        self.missing = policy;
        self
    }

    #[must_use]
    pub fn with_standardize(mut self, enable: bool) -> Self {
        self.standardize = enable;
        self
    }
}
