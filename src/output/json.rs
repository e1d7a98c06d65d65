use serde::Serialize;

use crate::distribution::Distribution;
use crate::error::Result;

use super::DistributionFormatter;

pub struct JsonFormatter;

/// Serializable overview of a distribution without the items themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSummary {
    pub min: f64,
    pub max: f64,
    pub total: usize,
    pub max_count: usize,
    pub buckets: Vec<BucketSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketSummary {
    pub min: f64,
    pub max: f64,
    /// Whether `max` itself belongs to the bucket.
    pub closed: bool,
    pub count: usize,
    /// Share of all binned items, 0.0 to 1.0.
    pub fraction: f64,
}

impl DistributionSummary {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn of<T>(distribution: &Distribution<T>) -> Self {
        let total = distribution.total_count();
        let buckets = distribution
            .iter()
            .map(|group| BucketSummary {
                min: group.min_range(),
                max: group.max_range(),
                closed: group.is_upper_closed(),
                count: group.len(),
                fraction: if total == 0 {
                    0.0
                } else {
                    group.len() as f64 / total as f64
                },
            })
            .collect();

        Self {
            min: distribution.min_range(),
            max: distribution.max_range(),
            total,
            max_count: distribution.max_count(),
            buckets,
        }
    }
}

impl DistributionFormatter for JsonFormatter {
    fn format<T>(&self, distribution: &Distribution<T>) -> Result<String> {
        let summary = DistributionSummary::of(distribution);
        Ok(serde_json::to_string_pretty(&summary)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
