use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier wrapper for tracked applicants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub String);

impl EmployeeId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Comment identifier. Generated ids are zero padded so lexical order is generation order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub String);

/// Hiring track the applicant applied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    General,
    DomesticExecutive,
    ForeignExecutive,
}

impl JobType {
    pub const ALL: [JobType; 3] = [
        JobType::General,
        JobType::DomesticExecutive,
        JobType::ForeignExecutive,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            JobType::General => "General",
            JobType::DomesticExecutive => "Domestic Executive",
            JobType::ForeignExecutive => "Foreign Executive",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            JobType::General => "general",
            JobType::DomesticExecutive => "domestic-executive",
            JobType::ForeignExecutive => "foreign-executive",
        }
    }
}

/// Pipeline stage persisted on a record. UI-only actions such as a reassignment request are
/// modelled as [`StatusSelection`](super::pipeline::StatusSelection) and never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmployeeStatus {
    Pending,
    Screening,
    SentToInterview,
    DailyJobAssigned,
    StartedWork,
    UnderEvaluation,
    InterviewFailed,
    Resigned,
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 8] = [
        EmployeeStatus::Pending,
        EmployeeStatus::Screening,
        EmployeeStatus::SentToInterview,
        EmployeeStatus::DailyJobAssigned,
        EmployeeStatus::StartedWork,
        EmployeeStatus::UnderEvaluation,
        EmployeeStatus::InterviewFailed,
        EmployeeStatus::Resigned,
    ];

    pub const fn slug(self) -> &'static str {
        match self {
            EmployeeStatus::Pending => "pending",
            EmployeeStatus::Screening => "screening",
            EmployeeStatus::SentToInterview => "sent-to-interview",
            EmployeeStatus::DailyJobAssigned => "daily-job-assigned",
            EmployeeStatus::StartedWork => "started-work",
            EmployeeStatus::UnderEvaluation => "under-evaluation",
            EmployeeStatus::InterviewFailed => "interview-failed",
            EmployeeStatus::Resigned => "resigned",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EmployeeStatus::Pending => "Awaiting Screening",
            EmployeeStatus::Screening => "In Screening",
            EmployeeStatus::SentToInterview => "Sent to Interview",
            EmployeeStatus::DailyJobAssigned => "Daily Job Assigned",
            EmployeeStatus::StartedWork => "Started Work",
            EmployeeStatus::UnderEvaluation => "Under Evaluation",
            EmployeeStatus::InterviewFailed => "Interview Failed",
            EmployeeStatus::Resigned => "Resigned",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown employee status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for EmployeeStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        EmployeeStatus::ALL
            .into_iter()
            .find(|status| status.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownStatus(value.to_string()))
    }
}

/// Free-text note attached to a record. Never edited once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// One applicant tracked by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub application_date: NaiveDate,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub recruiter: String,
    pub department: String,
    pub job_type: JobType,
    pub status: EmployeeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Merges every supplied field of `update` into the record, leaving the rest untouched.
    pub fn apply(&mut self, update: EmployeeUpdate) {
        let EmployeeUpdate {
            application_date,
            first_name,
            last_name,
            phone,
            address,
            recruiter,
            department,
            job_type,
            status,
            assigned_to,
            resume_url,
        } = update;

        if let Some(value) = application_date {
            self.application_date = value;
        }
        if let Some(value) = first_name {
            self.first_name = value;
        }
        if let Some(value) = last_name {
            self.last_name = value;
        }
        if let Some(value) = phone {
            self.phone = value;
        }
        if let Some(value) = address {
            self.address = value;
        }
        if let Some(value) = recruiter {
            self.recruiter = value;
        }
        if let Some(value) = department {
            self.department = value;
        }
        if let Some(value) = job_type {
            self.job_type = value;
        }
        if let Some(value) = status {
            self.status = value;
        }
        if let Some(value) = assigned_to {
            self.assigned_to = value;
        }
        if let Some(value) = resume_url {
            self.resume_url = value;
        }
    }
}

/// Partial record edit. `None` leaves a field unchanged; for the optional fields
/// `Some(None)` clears the value, which in JSON is an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmployeeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruiter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub assigned_to: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub resume_url: Option<Option<String>>,
}

impl EmployeeUpdate {
    pub fn status(status: EmployeeStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// First supplied field that only the pipeline commands may change.
    pub fn pipeline_field(&self) -> Option<&'static str> {
        if self.status.is_some() {
            Some("status")
        } else if self.assigned_to.is_some() {
            Some("assigned_to")
        } else {
            None
        }
    }
}

/// Distinguishes a key sent as `null` from a key that was omitted.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Comment submission from the presentation layer. A blank author falls back to the
/// configured default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub text: String,
    #[serde(default)]
    pub author: Option<String>,
}

impl NewComment {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: Some(author.into()),
        }
    }
}
