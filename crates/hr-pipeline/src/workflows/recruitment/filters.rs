use std::borrow::Borrow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{Employee, EmployeeStatus, JobType};

/// Criteria the list pages narrow records by. Unset criteria match everything; set criteria
/// are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeFilter {
    pub search: Option<String>,
    pub job_type: Option<JobType>,
    pub department: Option<String>,
    pub recruiter: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl EmployeeFilter {
    pub fn matches(&self, employee: &Employee) -> bool {
        self.matches_search(employee)
            && self.job_type.map_or(true, |job_type| employee.job_type == job_type)
            && self
                .department
                .as_deref()
                .map_or(true, |department| employee.department == department)
            && self
                .recruiter
                .as_deref()
                .map_or(true, |recruiter| employee.recruiter == recruiter)
            && self
                .assigned_to
                .as_deref()
                .map_or(true, |assignee| employee.assigned_to.as_deref() == Some(assignee))
            && self.status.map_or(true, |status| employee.status == status)
            && self
                .date_from
                .map_or(true, |from| employee.application_date >= from)
            && self
                .date_to
                .map_or(true, |to| employee.application_date <= to)
    }

    /// Keeps the matching records in their original relative order.
    pub fn apply<I, T>(&self, records: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
        T: Borrow<Employee>,
    {
        records
            .into_iter()
            .filter(|record| self.matches(<T as Borrow<Employee>>::borrow(record)))
            .collect()
    }

    fn matches_search(&self, employee: &Employee) -> bool {
        let Some(term) = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
        else {
            return true;
        };

        let needle = term.to_lowercase();
        [&employee.first_name, &employee.last_name, &employee.phone]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Values that populate the select widgets on the list pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub job_types: Vec<JobType>,
    pub departments: Vec<String>,
    pub recruiters: Vec<String>,
    pub assignees: Vec<String>,
}

impl FilterOptions {
    pub fn from_records(records: &[Employee]) -> Self {
        Self {
            job_types: JobType::ALL.to_vec(),
            departments: distinct(records.iter().map(|e| e.department.as_str())),
            recruiters: distinct(records.iter().map(|e| e.recruiter.as_str())),
            assignees: distinct(records.iter().filter_map(|e| e.assigned_to.as_deref())),
        }
    }
}

/// Distinct non-empty values in first-seen order.
pub fn distinct<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !value.is_empty() && !seen.iter().any(|existing| existing == value) {
            seen.push(value.to_string());
        }
    }
    seen
}
