//! Applicant pipeline: the record store, the status state machine that moves applicants
//! between pages, and the stateless filters those pages apply.

pub mod dashboard;
pub mod domain;
pub mod filters;
pub mod pipeline;
pub mod repository;
pub mod router;
mod seed;
pub mod service;

#[cfg(test)]
mod tests;

pub use dashboard::{DashboardSummary, StatusCountEntry};
pub use domain::{
    Comment, CommentId, Employee, EmployeeId, EmployeeStatus, EmployeeUpdate, JobType,
    NewComment, UnknownStatus,
};
pub use filters::{EmployeeFilter, FilterOptions};
pub use pipeline::{
    plan, PipelineCommand, PipelineError, PipelineView, StatusSelection, UnknownView,
};
pub use repository::{
    EmployeeRepository, EmployeeStore, InMemoryEmployeeRepository, RepositoryError,
};
pub use router::recruitment_router;
pub use seed::seed_employees;
pub use service::{RecruitmentService, RecruitmentServiceError};
