//! Status transitions for the applicant pipeline.
//!
//! Each page of the tracker surfaces a fixed set of statuses and only offers the commands
//! that are legal from that page. [`plan`] turns a command into the partial update the store
//! should apply, or explains why the command is refused. Planning never touches the store, so
//! a rejected command leaves state exactly as it was.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::{Employee, EmployeeId, EmployeeStatus, EmployeeUpdate};

/// Page of the tracker and the statuses it lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PipelineView {
    Screening,
    Management,
    StartedWork,
    Resigned,
}

impl PipelineView {
    pub const ALL: [PipelineView; 4] = [
        PipelineView::Screening,
        PipelineView::Management,
        PipelineView::StartedWork,
        PipelineView::Resigned,
    ];

    pub const fn statuses(self) -> &'static [EmployeeStatus] {
        match self {
            PipelineView::Screening => &[EmployeeStatus::Pending],
            PipelineView::Management => &[
                EmployeeStatus::Screening,
                EmployeeStatus::SentToInterview,
                EmployeeStatus::DailyJobAssigned,
                EmployeeStatus::UnderEvaluation,
                EmployeeStatus::InterviewFailed,
            ],
            PipelineView::StartedWork => &[EmployeeStatus::StartedWork],
            PipelineView::Resigned => &[EmployeeStatus::Resigned],
        }
    }

    /// The page a record in `status` shows up on.
    pub fn of(status: EmployeeStatus) -> Self {
        Self::ALL
            .into_iter()
            .find(|view| view.statuses().contains(&status))
            .unwrap_or(PipelineView::Screening)
    }

    pub fn contains(self, status: EmployeeStatus) -> bool {
        self.statuses().contains(&status)
    }

    pub const fn slug(self) -> &'static str {
        match self {
            PipelineView::Screening => "screening",
            PipelineView::Management => "management",
            PipelineView::StartedWork => "started-work",
            PipelineView::Resigned => "resigned",
        }
    }
}

impl fmt::Display for PipelineView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pipeline view '{0}'")]
pub struct UnknownView(pub String);

impl FromStr for PipelineView {
    type Err = UnknownView;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Self::ALL
            .into_iter()
            .find(|view| view.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownView(value.to_string()))
    }
}

/// Choices offered by the management page status dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusSelection {
    SentToInterview,
    DailyJobAssigned,
    StartedWork,
    UnderEvaluation,
    InterviewFailed,
    Resigned,
    /// Hand the record to a different owner: it goes back to the screening queue.
    ReassignRequest,
}

impl StatusSelection {
    pub const ALL: [StatusSelection; 7] = [
        StatusSelection::SentToInterview,
        StatusSelection::DailyJobAssigned,
        StatusSelection::StartedWork,
        StatusSelection::UnderEvaluation,
        StatusSelection::InterviewFailed,
        StatusSelection::Resigned,
        StatusSelection::ReassignRequest,
    ];

    pub const fn target_status(self) -> EmployeeStatus {
        match self {
            StatusSelection::SentToInterview => EmployeeStatus::SentToInterview,
            StatusSelection::DailyJobAssigned => EmployeeStatus::DailyJobAssigned,
            StatusSelection::StartedWork => EmployeeStatus::StartedWork,
            StatusSelection::UnderEvaluation => EmployeeStatus::UnderEvaluation,
            StatusSelection::InterviewFailed => EmployeeStatus::InterviewFailed,
            StatusSelection::Resigned => EmployeeStatus::Resigned,
            StatusSelection::ReassignRequest => EmployeeStatus::Pending,
        }
    }
}

/// A user action against a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineCommand {
    AssignResponsible { assignee: Option<String> },
    UpdateStatus { selection: Option<StatusSelection> },
    SendBackToScreening,
}

impl PipelineCommand {
    pub const fn name(&self) -> &'static str {
        match self {
            PipelineCommand::AssignResponsible { .. } => "assign_responsible",
            PipelineCommand::UpdateStatus { .. } => "update_status",
            PipelineCommand::SendBackToScreening => "send_back_to_screening",
        }
    }
}

/// Reasons a command is refused. The record is never modified when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("a responsible person must be selected")]
    MissingAssignee,
    #[error("a new status must be selected")]
    MissingStatus,
    #[error("cannot {command} employee {employee_id} while status is {from}")]
    IllegalTransition {
        employee_id: EmployeeId,
        command: &'static str,
        from: EmployeeStatus,
    },
}

impl PipelineError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PipelineError::MissingAssignee | PipelineError::MissingStatus
        )
    }
}

/// Computes the update `command` applies to `employee`.
pub fn plan(
    employee: &Employee,
    command: &PipelineCommand,
) -> Result<EmployeeUpdate, PipelineError> {
    match command {
        PipelineCommand::AssignResponsible { assignee } => {
            let assignee = assignee
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .ok_or(PipelineError::MissingAssignee)?;
            ensure_from(employee, command, PipelineView::Screening.statuses())?;

            Ok(EmployeeUpdate {
                status: Some(EmployeeStatus::Screening),
                assigned_to: Some(Some(assignee.to_string())),
                ..EmployeeUpdate::default()
            })
        }
        PipelineCommand::UpdateStatus { selection } => {
            let selection = selection.ok_or(PipelineError::MissingStatus)?;
            ensure_from(employee, command, PipelineView::Management.statuses())?;

            Ok(EmployeeUpdate::status(selection.target_status()))
        }
        PipelineCommand::SendBackToScreening => {
            // Pending is accepted so a repeated send-back settles on the same state.
            ensure_from(
                employee,
                command,
                &[
                    EmployeeStatus::StartedWork,
                    EmployeeStatus::Resigned,
                    EmployeeStatus::Pending,
                ],
            )?;

            Ok(EmployeeUpdate {
                status: Some(EmployeeStatus::Pending),
                assigned_to: Some(None),
                ..EmployeeUpdate::default()
            })
        }
    }
}

fn ensure_from(
    employee: &Employee,
    command: &PipelineCommand,
    allowed: &[EmployeeStatus],
) -> Result<(), PipelineError> {
    if allowed.contains(&employee.status) {
        Ok(())
    } else {
        Err(PipelineError::IllegalTransition {
            employee_id: employee.id.clone(),
            command: command.name(),
            from: employee.status,
        })
    }
}
