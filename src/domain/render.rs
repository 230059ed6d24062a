// Render instructions consumed by the external rendering engine
use chrono::NaiveDate;
use serde::Serialize;

use super::ring::{CellGeometry, RingSegment};

/// Positional day initials, matching the panel's original label row.
pub const DAY_LABELS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// What the panel should currently display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view")]
pub enum PanelRender {
    Unauthenticated,
    #[serde(rename_all = "camelCase")]
    CodeIssued {
        verification_url: String,
        user_code: String,
    },
    Authenticated,
    Error {
        message: String,
    },
    DataReady {
        chart: ChartRender,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRender {
    pub width: u32,
    pub height: f64,
    pub font_size: u32,
    pub show_step_icon: bool,
    /// Only shown when at least one day actually has a weight.
    pub show_weight_icon: bool,
    pub days: Vec<DayRender>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRender {
    pub date: NaiveDate,
    pub label: String,
    pub step_total: u64,
    pub weight: Option<f64>,
    pub segments: Vec<RingSegment>,
    pub cell: CellGeometry,
}
