// Goal ring encoding - Map a step total onto a cyclic color palette
use crate::domain::ring::{RingLayout, RingSegment};

/// Encodes a day's step total as ring segments against a cyclic palette.
///
/// Each completed goal is one "lap" and shifts the ring one color further into
/// the palette. Once enough laps are completed that every color has cycled,
/// the ring freezes solid on the last palette color.
#[derive(Debug, Clone)]
pub struct GoalRingEncoder {
    step_goal: u32,
    palette: Vec<String>,
}

impl GoalRingEncoder {
    pub fn new(step_goal: u32, palette: Vec<String>) -> Self {
        Self { step_goal, palette }
    }

    pub fn encode(&self, step_total: u64) -> Vec<RingSegment> {
        let n = self.palette.len();
        if n == 0 {
            return Vec::new();
        }

        let frozen = vec![RingSegment {
            color: self.palette[n - 1].clone(),
            fraction: 1.0,
        }];

        // A zero goal is every goal met at once, not a division error.
        if self.step_goal == 0 {
            return frozen;
        }

        let percent = step_total as f64 / self.step_goal as f64;
        if percent > (n - 1) as f64 {
            return frozen;
        }

        let lap = percent.floor();
        let color_offset = lap as usize % n;
        let fraction = percent - lap;

        vec![
            RingSegment {
                color: self.palette[(color_offset + 1) % n].clone(),
                fraction,
            },
            RingSegment {
                color: self.palette[color_offset].clone(),
                fraction: 1.0 - fraction,
            },
        ]
    }
}

/// Row geometry: each day gets a square cell, with the ring centered inside
/// at 0.6 of the cell width.
pub fn chart_layout(chart_width: u32, num_days: usize) -> RingLayout {
    let cell_size = if num_days == 0 {
        0.0
    } else {
        f64::from(chart_width) / num_days as f64
    };
    let diameter = 0.6 * cell_size;

    RingLayout {
        cell_size,
        diameter,
        inset: (cell_size - diameter) / 2.0,
    }
}
