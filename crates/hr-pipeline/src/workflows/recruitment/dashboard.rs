use serde::Serialize;

use super::domain::{Employee, EmployeeStatus};
use super::pipeline::PipelineView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCountEntry {
    pub status: EmployeeStatus,
    pub status_label: &'static str,
    pub count: usize,
}

/// Headline counts for the dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub screening_queue: usize,
    pub in_screening: usize,
    pub management: usize,
    pub started_work: usize,
    pub resigned: usize,
    pub status_breakdown: Vec<StatusCountEntry>,
    /// Share of all records that started work, in `0.0..=1.0`.
    pub success_rate: f32,
    pub success_rate_pct: u8,
}

impl DashboardSummary {
    pub fn from_records(records: &[Employee]) -> Self {
        let count = |status: EmployeeStatus| {
            records
                .iter()
                .filter(|record| record.status == status)
                .count()
        };
        let count_view = |view: PipelineView| {
            records
                .iter()
                .filter(|record| view.contains(record.status))
                .count()
        };

        let total = records.len();
        let started_work = count(EmployeeStatus::StartedWork);
        let success_rate = if total == 0 {
            0.0
        } else {
            started_work as f32 / total as f32
        };

        let status_breakdown = EmployeeStatus::ALL
            .into_iter()
            .map(|status| StatusCountEntry {
                status,
                status_label: status.label(),
                count: count(status),
            })
            .collect();

        Self {
            total,
            screening_queue: count_view(PipelineView::Screening),
            in_screening: count(EmployeeStatus::Screening),
            management: count_view(PipelineView::Management),
            started_work,
            resigned: count_view(PipelineView::Resigned),
            status_breakdown,
            success_rate,
            success_rate_pct: success_percentage(started_work, total),
        }
    }
}

/// Whole-number percentage, rounding halves up.
fn success_percentage(started_work: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (started_work as f64 / total as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}
