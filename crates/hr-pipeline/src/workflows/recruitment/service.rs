use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::dashboard::DashboardSummary;
use super::domain::{Comment, Employee, EmployeeId, EmployeeUpdate, NewComment};
use super::filters::{EmployeeFilter, FilterOptions};
use super::pipeline::{self, PipelineCommand, PipelineError, PipelineView, StatusSelection};
use super::repository::{EmployeeRepository, RepositoryError};
use crate::config::PipelineSettings;

/// Service composing the record store with the pipeline rules and roster settings.
pub struct RecruitmentService<R> {
    repository: Arc<R>,
    settings: PipelineSettings,
}

impl<R> RecruitmentService<R>
where
    R: EmployeeRepository + 'static,
{
    pub fn new(repository: Arc<R>, settings: PipelineSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    pub fn list(&self) -> Result<Vec<Employee>, RecruitmentServiceError> {
        Ok(self.repository.list()?)
    }

    pub fn get(&self, id: &EmployeeId) -> Result<Employee, RecruitmentServiceError> {
        self.fetch(id)
    }

    /// All records matching `filter`, regardless of page.
    pub fn search(
        &self,
        filter: &EmployeeFilter,
    ) -> Result<Vec<Employee>, RecruitmentServiceError> {
        Ok(filter.apply(self.repository.list()?))
    }

    /// Records listed on `view`, narrowed by `filter`.
    pub fn list_view(
        &self,
        view: PipelineView,
        filter: &EmployeeFilter,
    ) -> Result<Vec<Employee>, RecruitmentServiceError> {
        let records = self.repository.by_status(view.statuses())?;
        Ok(filter.apply(records))
    }

    pub fn update_employee(
        &self,
        id: &EmployeeId,
        update: EmployeeUpdate,
    ) -> Result<Employee, RecruitmentServiceError> {
        if update.is_empty() {
            return Err(RecruitmentServiceError::EmptyUpdate);
        }
        // Status and assignee only move through the pipeline commands.
        if let Some(field) = update.pipeline_field() {
            warn!(employee_id = %id, field, "rejected direct edit of pipeline field");
            return Err(RecruitmentServiceError::PipelineField(field));
        }
        let updated = self.repository.update(id, update)?;
        info!(employee_id = %id, status = %updated.status, "employee record updated");
        Ok(updated)
    }

    pub fn add_comment(
        &self,
        id: &EmployeeId,
        comment: NewComment,
    ) -> Result<Comment, RecruitmentServiceError> {
        if comment.text.trim().is_empty() {
            warn!(employee_id = %id, "rejected blank comment");
            return Err(RecruitmentServiceError::EmptyComment);
        }

        let author = comment
            .author
            .as_deref()
            .map(str::trim)
            .filter(|author| !author.is_empty())
            .unwrap_or(self.settings.default_comment_author.as_str())
            .to_string();

        let stored = self
            .repository
            .append_comment(id, author, comment.text, Utc::now())?;
        info!(
            employee_id = %id,
            comment_id = %stored.id.0,
            author = %stored.author,
            "comment added"
        );
        Ok(stored)
    }

    /// Hands a record in the screening queue to a responsible person.
    pub fn assign_responsible(
        &self,
        id: &EmployeeId,
        assignee: Option<String>,
    ) -> Result<Employee, RecruitmentServiceError> {
        if let Some(name) = assignee.as_deref().map(str::trim) {
            if !name.is_empty() && !self.settings.allows_assignee(name) {
                warn!(employee_id = %id, assignee = %name, "assignee not on roster");
                return Err(RecruitmentServiceError::UnknownAssignee(name.to_string()));
            }
        }
        self.execute(id, PipelineCommand::AssignResponsible { assignee })
    }

    pub fn update_status(
        &self,
        id: &EmployeeId,
        selection: Option<StatusSelection>,
    ) -> Result<Employee, RecruitmentServiceError> {
        self.execute(id, PipelineCommand::UpdateStatus { selection })
    }

    pub fn send_back_to_screening(
        &self,
        id: &EmployeeId,
    ) -> Result<Employee, RecruitmentServiceError> {
        self.execute(id, PipelineCommand::SendBackToScreening)
    }

    pub fn dashboard(&self) -> Result<DashboardSummary, RecruitmentServiceError> {
        let records = self.repository.list()?;
        Ok(DashboardSummary::from_records(&records))
    }

    pub fn filter_options(&self) -> Result<FilterOptions, RecruitmentServiceError> {
        let records = self.repository.list()?;
        Ok(FilterOptions::from_records(&records))
    }

    fn execute(
        &self,
        id: &EmployeeId,
        command: PipelineCommand,
    ) -> Result<Employee, RecruitmentServiceError> {
        let current = self.fetch(id)?;
        let update = match pipeline::plan(&current, &command) {
            Ok(update) => update,
            Err(error) => {
                warn!(
                    employee_id = %id,
                    command = command.name(),
                    %error,
                    "pipeline command rejected"
                );
                return Err(error.into());
            }
        };

        // Planned against `current.status`; refuse if another writer moved the record since.
        let updated = self
            .repository
            .update_if_status(id, current.status, update)?;
        info!(
            employee_id = %id,
            command = command.name(),
            from = %current.status,
            to = %updated.status,
            assigned_to = updated.assigned_to.as_deref().unwrap_or("-"),
            "pipeline transition applied"
        );
        Ok(updated)
    }

    fn fetch(&self, id: &EmployeeId) -> Result<Employee, RecruitmentServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))?;
        Ok(record)
    }
}

/// Error raised by the recruitment service.
#[derive(Debug, thiserror::Error)]
pub enum RecruitmentServiceError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("comment text must not be blank")]
    EmptyComment,
    #[error("update payload does not change any field")]
    EmptyUpdate,
    #[error("'{0}' is not on the responsible person roster")]
    UnknownAssignee(String),
    #[error("{0} can only be changed through the pipeline commands")]
    PipelineField(&'static str),
}

impl RecruitmentServiceError {
    /// True when the caller supplied incomplete input and nothing was attempted.
    pub fn is_validation(&self) -> bool {
        match self {
            RecruitmentServiceError::Pipeline(error) => error.is_validation(),
            RecruitmentServiceError::EmptyComment
            | RecruitmentServiceError::EmptyUpdate
            | RecruitmentServiceError::UnknownAssignee(_)
            | RecruitmentServiceError::PipelineField(_) => true,
            RecruitmentServiceError::Repository(_) => false,
        }
    }
}
