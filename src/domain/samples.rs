// Fitness sample domain models
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, de};

/// One time window of raw samples, nominally one calendar day.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    #[serde(deserialize_with = "millis_from_number_or_string")]
    pub start_time_millis: i64,
    #[serde(default)]
    pub data_sets: Vec<DataSet>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSet {
    pub source_id: String,
    #[serde(default)]
    pub points: Vec<SamplePoint>,
}

/// A sample instant; may carry multiple sub-readings (e.g. multiple sensors).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplePoint {
    #[serde(default)]
    pub values: Vec<SampleValue>,
}

/// Exactly one of the two amounts is meaningfully populated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleValue {
    #[serde(default)]
    pub int_val: Option<i64>,
    #[serde(default)]
    pub fp_val: Option<f64>,
}

impl SampleValue {
    /// The amount this entry contributes to a sum.
    ///
    /// A zero integer falls through to the floating-point entry, and a zero
    /// floating-point entry contributes nothing. Known quirk inherited from
    /// the upstream panel; kept so historical output does not change.
    pub fn amount(&self) -> f64 {
        match self.int_val {
            Some(i) if i != 0 => i as f64,
            _ => match self.fp_val {
                Some(f) if f != 0.0 => f,
                _ => 0.0,
            },
        }
    }
}

/// Per-day reduction of a bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub step_total: u64,
    /// Absent (not zero) when the day had no weight points.
    pub weight_average: Option<f64>,
}

// The upstream API quotes 64-bit millisecond timestamps as decimal strings.
fn millis_from_number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match &value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {n}"))),
        serde_json::Value::String(s) => s
            .parse::<f64>()
            .map(|ms| ms as i64)
            .map_err(|_| de::Error::custom(format!("invalid timestamp string: {s:?}"))),
        other => Err(de::Error::custom(format!(
            "expected number or string timestamp, got {other}"
        ))),
    }
}
