//! Schedule summary metrics.
//!
//! Aggregates a projection into the figures a dashboard header needs.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | late / due_today / on_track | Row count per status |
//! | mileage_based | Rows whose date came from the odometer projection |
//! | next_due | First row (by ordinal) not yet late |
//! | most_overdue | Late row with the most negative days remaining |

use serde::{Deserialize, Serialize};

use super::engine::Projection;
use crate::models::{Basis, Status};

/// Schedule summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Rows past their projected date.
    pub late: usize,
    /// Rows due today.
    pub due_today: usize,
    /// Rows in the future.
    pub on_track: usize,
    /// Rows governed by mileage.
    pub mileage_based: usize,
    /// Ordinal of the next service that is not late.
    pub next_due: Option<u8>,
    /// Ordinal and days overdue of the most overdue service.
    pub most_overdue: Option<(u8, i64)>,
}

impl ScheduleSummary {
    /// Computes the summary of a projection.
    pub fn calculate(projection: &Projection) -> Self {
        let mut summary = Self::default();

        for row in &projection.rows {
            match row.status {
                Status::Late => summary.late += 1,
                Status::DueToday => summary.due_today += 1,
                Status::OnTrack => summary.on_track += 1,
            }
            if row.basis == Basis::Mileage {
                summary.mileage_based += 1;
            }
            if summary.next_due.is_none() && row.days_remaining >= 0 {
                summary.next_due = Some(row.ordinal);
            }
            if row.is_late() {
                let overdue = -row.days_remaining;
                match summary.most_overdue {
                    Some((_, worst)) if worst >= overdue => {}
                    _ => summary.most_overdue = Some((row.ordinal, overdue)),
                }
            }
        }

        summary
    }

    /// Whether every service is on track or due today.
    pub fn is_up_to_date(&self) -> bool {
        self.late == 0
    }
}
