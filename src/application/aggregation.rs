// Bucket aggregation - Reduce raw sample buckets to per-day records
use chrono::{DateTime, Local, NaiveDate};

use crate::domain::samples::{Bucket, DailyRecord, DataSet};

const EXPECTED_DAYS: usize = 7;
const KG_TO_LB: f64 = 2.20462;

/// Reduces time-bucketed samples (one bucket per day) to daily step totals
/// and weight averages.
#[derive(Debug, Clone)]
pub struct BucketAggregator {
    imperial: bool,
}

impl BucketAggregator {
    pub fn new(imperial: bool) -> Self {
        Self { imperial }
    }

    pub fn reduce(&self, buckets: &[Bucket]) -> Vec<DailyRecord> {
        if buckets.len() != EXPECTED_DAYS {
            tracing::warn!(
                count = buckets.len(),
                "bucket count does not match {} days, laying out actual count",
                EXPECTED_DAYS
            );
        }

        let records: Vec<DailyRecord> = buckets.iter().map(|b| self.reduce_bucket(b)).collect();

        tracing::debug!(?records, "aggregated daily records");

        records
    }

    fn reduce_bucket(&self, bucket: &Bucket) -> DailyRecord {
        let mut step_total = 0.0;
        let mut weight_average = None;

        for data_set in &bucket.data_sets {
            // Substring classification mirrors the upstream source ids.
            if data_set.source_id.contains("weight") {
                weight_average = self.weight_mean(data_set);
            } else if data_set.source_id.contains("step_count") {
                step_total += step_sum(data_set);
            }
        }

        DailyRecord {
            date: local_date(bucket.start_time_millis),
            step_total: step_total.round() as u64,
            weight_average,
        }
    }

    /// Mean weight over the day, rounded to a whole display unit, or `None`
    /// when the day has no points.
    ///
    /// Each point's entries are averaged first (a point may carry duplicate
    /// multi-sensor sub-readings of the same quantity), then the per-point
    /// means are averaged across the day.
    fn weight_mean(&self, data_set: &DataSet) -> Option<f64> {
        if data_set.points.is_empty() {
            return None;
        }

        let mut total = 0.0;
        for point in &data_set.points {
            let mut reading: f64 = point.values.iter().map(|v| v.amount()).sum();
            if !point.values.is_empty() {
                reading /= point.values.len() as f64;
            }
            total += reading;
        }
        let mut mean = total / data_set.points.len() as f64;

        if self.imperial {
            mean *= KG_TO_LB;
        }

        Some(mean.round())
    }
}

// Step counts are additive, so entries are summed with no averaging.
fn step_sum(data_set: &DataSet) -> f64 {
    data_set
        .points
        .iter()
        .flat_map(|p| p.values.iter())
        .map(|v| v.amount())
        .sum()
}

fn local_date(start_time_millis: i64) -> NaiveDate {
    DateTime::from_timestamp_millis(start_time_millis)
        .map(|utc| utc.with_timezone(&Local).date_naive())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::samples::{SamplePoint, SampleValue};

    fn int_value(amount: i64) -> SampleValue {
        SampleValue {
            int_val: Some(amount),
            fp_val: None,
        }
    }

    fn fp_value(amount: f64) -> SampleValue {
        SampleValue {
            int_val: None,
            fp_val: Some(amount),
        }
    }

    fn point(values: Vec<SampleValue>) -> SamplePoint {
        SamplePoint { values }
    }

    fn bucket(data_sets: Vec<DataSet>) -> Bucket {
        Bucket {
            start_time_millis: 1_700_000_000_000,
            data_sets,
        }
    }

    fn step_set(points: Vec<SamplePoint>) -> DataSet {
        DataSet {
            source_id: "derived:com.google.step_count.delta".to_string(),
            points,
        }
    }

    fn weight_set(points: Vec<SamplePoint>) -> DataSet {
        DataSet {
            source_id: "derived:com.google.weight.summary".to_string(),
            points,
        }
    }

    #[test]
    fn steps_sum_across_points_and_entries() {
        let aggregator = BucketAggregator::new(false);
        let records = aggregator.reduce(&[bucket(vec![step_set(vec![
            point(vec![int_value(1200), int_value(300)]),
            point(vec![int_value(2500)]),
        ])])]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].step_total, 4000);
        assert_eq!(records[0].weight_average, None);
    }

    #[test]
    fn weight_averages_entries_then_points() {
        let aggregator = BucketAggregator::new(false);
        // Point one: two sensor sub-readings averaging 80.0.
        // Point two: a single 70.0 reading. Daily mean = 75.0.
        let records = aggregator.reduce(&[bucket(vec![weight_set(vec![
            point(vec![fp_value(79.0), fp_value(81.0)]),
            point(vec![fp_value(70.0)]),
        ])])]);

        assert_eq!(records[0].weight_average, Some(75.0));
    }

    #[test]
    fn weight_is_absent_when_no_points_exist() {
        let aggregator = BucketAggregator::new(false);
        let records = aggregator.reduce(&[bucket(vec![weight_set(Vec::new())])]);

        assert_eq!(records[0].weight_average, None);
    }

    #[test]
    fn metric_weight_is_rounded_to_whole_units() {
        let aggregator = BucketAggregator::new(false);
        let records =
            aggregator.reduce(&[bucket(vec![weight_set(vec![point(vec![fp_value(70.5)])])])]);

        // Rounding applies in both unit systems, not just imperial.
        assert_eq!(records[0].weight_average, Some(71.0));
    }

    #[test]
    fn imperial_converts_and_rounds() {
        let aggregator = BucketAggregator::new(true);
        let records =
            aggregator.reduce(&[bucket(vec![weight_set(vec![point(vec![fp_value(70.0)])])])]);

        // 70 kg * 2.20462 = 154.3234, rounded for display.
        assert_eq!(records[0].weight_average, Some(154.0));
    }

    #[test]
    fn zero_fp_entry_is_dropped_but_still_counted_in_the_mean() {
        let aggregator = BucketAggregator::new(false);
        let records = aggregator.reduce(&[bucket(vec![weight_set(vec![point(vec![
            fp_value(0.0),
            fp_value(70.0),
        ])])])]);

        // The zero reading contributes nothing to the sum but the entry count
        // still divides it: (0 + 70) / 2.
        assert_eq!(records[0].weight_average, Some(35.0));
    }

    #[test]
    fn unrecognized_source_ids_are_ignored() {
        let aggregator = BucketAggregator::new(false);
        let records = aggregator.reduce(&[bucket(vec![DataSet {
            source_id: "derived:com.google.heart_rate.bpm".to_string(),
            points: vec![point(vec![int_value(99)])],
        }])]);

        assert_eq!(records[0].step_total, 0);
        assert_eq!(records[0].weight_average, None);
    }

    #[test]
    fn short_bucket_list_reduces_to_actual_count() {
        let aggregator = BucketAggregator::new(false);
        let buckets: Vec<Bucket> = (0..5).map(|_| bucket(Vec::new())).collect();
        let records = aggregator.reduce(&buckets);

        assert_eq!(records.len(), 5);
    }
}
