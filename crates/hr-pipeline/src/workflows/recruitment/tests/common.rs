use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::config::PipelineSettings;
use crate::workflows::recruitment::domain::{
    Comment, Employee, EmployeeId, EmployeeStatus, EmployeeUpdate, JobType,
};
use crate::workflows::recruitment::repository::{
    EmployeeRepository, EmployeeStore, InMemoryEmployeeRepository, RepositoryError,
};
use crate::workflows::recruitment::{recruitment_router, RecruitmentService};

pub(super) fn employee(id: &str, first_name: &str, job_type: JobType) -> Employee {
    Employee {
        id: EmployeeId::new(id),
        application_date: NaiveDate::from_ymd_opt(2025, 2, 1).expect("valid date"),
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        phone: format!("080-000-{id:0>4}"),
        address: "1 Silom Rd, Bangkok".to_string(),
        recruiter: "Wichai".to_string(),
        department: "Transport".to_string(),
        job_type,
        status: EmployeeStatus::Pending,
        assigned_to: None,
        resume_url: None,
        comments: Vec::new(),
    }
}

/// Ten records laid out as general ×3, domestic-executive ×3, foreign-executive ×4,
/// interleaved so relative order is observable.
pub(super) fn mixed_job_types() -> Vec<Employee> {
    let layout = [
        JobType::ForeignExecutive,
        JobType::General,
        JobType::DomesticExecutive,
        JobType::ForeignExecutive,
        JobType::General,
        JobType::DomesticExecutive,
        JobType::ForeignExecutive,
        JobType::DomesticExecutive,
        JobType::General,
        JobType::ForeignExecutive,
    ];
    layout
        .into_iter()
        .enumerate()
        .map(|(index, job_type)| {
            let id = (index + 1).to_string();
            employee(&id, &format!("Applicant{id}"), job_type)
        })
        .collect()
}

pub(super) fn timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-02-03T09:30:00Z")
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

pub(super) fn settings() -> PipelineSettings {
    PipelineSettings::default()
}

pub(super) fn build_service() -> (
    RecruitmentService<InMemoryEmployeeRepository>,
    Arc<InMemoryEmployeeRepository>,
) {
    let repository = Arc::new(InMemoryEmployeeRepository::seeded());
    let service = RecruitmentService::new(repository.clone(), settings());
    (service, repository)
}

pub(super) fn id(value: &str) -> EmployeeId {
    EmployeeId::new(value)
}

/// Repository that records every write and can be told to change a record between the
/// read and the write of a pipeline command.
#[derive(Default)]
pub(super) struct RacingRepository {
    pub(super) inner: InMemoryEmployeeRepository,
    pub(super) interleave: Mutex<Option<(EmployeeId, EmployeeStatus)>>,
}

impl RacingRepository {
    pub(super) fn seeded() -> Self {
        Self {
            inner: InMemoryEmployeeRepository::new(EmployeeStore::seeded()),
            interleave: Mutex::new(None),
        }
    }
}

impl EmployeeRepository for RacingRepository {
    fn list(&self) -> Result<Vec<Employee>, RepositoryError> {
        self.inner.list()
    }

    fn fetch(&self, id: &EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        let fetched = self.inner.fetch(id)?;
        let pending = self.interleave.lock().expect("interleave mutex").take();
        if let Some((target, status)) = pending {
            self.inner.update(&target, EmployeeUpdate::status(status))?;
        }
        Ok(fetched)
    }

    fn by_status(&self, statuses: &[EmployeeStatus]) -> Result<Vec<Employee>, RepositoryError> {
        self.inner.by_status(statuses)
    }

    fn update(
        &self,
        id: &EmployeeId,
        update: EmployeeUpdate,
    ) -> Result<Employee, RepositoryError> {
        self.inner.update(id, update)
    }

    fn update_if_status(
        &self,
        id: &EmployeeId,
        expected: EmployeeStatus,
        update: EmployeeUpdate,
    ) -> Result<Employee, RepositoryError> {
        self.inner.update_if_status(id, expected, update)
    }

    fn append_comment(
        &self,
        id: &EmployeeId,
        author: String,
        text: String,
        created_at: DateTime<Utc>,
    ) -> Result<Comment, RepositoryError> {
        self.inner.append_comment(id, author, text, created_at)
    }
}

pub(super) struct UnavailableRepository;

impl EmployeeRepository for UnavailableRepository {
    fn list(&self) -> Result<Vec<Employee>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn by_status(&self, _statuses: &[EmployeeStatus]) -> Result<Vec<Employee>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn update(
        &self,
        _id: &EmployeeId,
        _update: EmployeeUpdate,
    ) -> Result<Employee, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn update_if_status(
        &self,
        _id: &EmployeeId,
        _expected: EmployeeStatus,
        _update: EmployeeUpdate,
    ) -> Result<Employee, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn append_comment(
        &self,
        _id: &EmployeeId,
        _author: String,
        _text: String,
        _created_at: DateTime<Utc>,
    ) -> Result<Comment, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn seeded_router() -> (axum::Router, Arc<InMemoryEmployeeRepository>) {
    let (service, repository) = build_service();
    (recruitment_router(Arc::new(service)), repository)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
