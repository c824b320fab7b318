use chrono::NaiveDate;

use super::common::*;
use crate::workflows::recruitment::domain::{Employee, EmployeeStatus, JobType};
use crate::workflows::recruitment::filters::{distinct, EmployeeFilter, FilterOptions};
use crate::workflows::recruitment::seed::seed_employees;

fn ids(records: &[&Employee]) -> Vec<String> {
    records.iter().map(|employee| employee.id.0.clone()).collect()
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, day).expect("valid date")
}

#[test]
fn job_type_filter_keeps_relative_order() {
    let records = mixed_job_types();
    let filter = EmployeeFilter {
        job_type: Some(JobType::General),
        ..EmployeeFilter::default()
    };

    let general = filter.apply(&records);
    assert_eq!(ids(&general), ["2", "5", "9"]);
    assert!(general.iter().all(|e| e.job_type == JobType::General));
}

#[test]
fn default_filter_matches_everything() {
    let records = seed_employees();
    assert_eq!(EmployeeFilter::default().apply(&records).len(), records.len());
}

#[test]
fn search_is_case_insensitive_over_names_and_phone() {
    let records = seed_employees();
    let search = |term: &str| {
        EmployeeFilter {
            search: Some(term.to_string()),
            ..EmployeeFilter::default()
        }
        .apply(&records)
        .into_iter()
        .map(|employee| employee.id.0.clone())
        .collect::<Vec<_>>()
    };

    assert_eq!(search("somchai"), ["1"]);
    assert_eq!(search("SOMBOON"), ["3"]);
    assert_eq!(search("090-123"), ["10"]);
    assert_eq!(search("  "), search(""));
    assert_eq!(search("").len(), 10);
    assert!(search("nobody").is_empty());
}

#[test]
fn search_does_not_look_at_recruiter_or_address() {
    let records = seed_employees();
    // "Wichai" is both a recruiter and the first name of record 3.
    let filter = EmployeeFilter {
        search: Some("wichai".to_string()),
        ..EmployeeFilter::default()
    };
    assert_eq!(ids(&filter.apply(&records)), ["3"]);

    let filter = EmployeeFilter {
        search: Some("Sukhumvit".to_string()),
        ..EmployeeFilter::default()
    };
    assert!(filter.apply(&records).is_empty());
}

#[test]
fn date_range_is_inclusive_and_open_ended() {
    let records = seed_employees();

    let bounded = EmployeeFilter {
        date_from: Some(date(17)),
        date_to: Some(date(19)),
        ..EmployeeFilter::default()
    };
    assert_eq!(ids(&bounded.apply(&records)), ["3", "4", "5"]);

    let from_only = EmployeeFilter {
        date_from: Some(date(23)),
        ..EmployeeFilter::default()
    };
    assert_eq!(ids(&from_only.apply(&records)), ["9", "10"]);

    let to_only = EmployeeFilter {
        date_to: Some(date(15)),
        ..EmployeeFilter::default()
    };
    assert_eq!(ids(&to_only.apply(&records)), ["1"]);

    let inverted = EmployeeFilter {
        date_from: Some(date(20)),
        date_to: Some(date(18)),
        ..EmployeeFilter::default()
    };
    assert!(inverted.apply(&records).is_empty());
}

#[test]
fn criteria_combine_with_and() {
    let mut records = seed_employees();
    records[0].status = EmployeeStatus::Screening;
    records[0].assigned_to = Some("May".to_string());
    records[3].status = EmployeeStatus::Screening;
    records[3].assigned_to = Some("View".to_string());

    let filter = EmployeeFilter {
        department: Some("Transport".to_string()),
        recruiter: Some("Wichai".to_string()),
        ..EmployeeFilter::default()
    };
    assert_eq!(ids(&filter.apply(&records)), ["1", "7"]);

    let filter = EmployeeFilter {
        assigned_to: Some("May".to_string()),
        status: Some(EmployeeStatus::Screening),
        ..EmployeeFilter::default()
    };
    assert_eq!(ids(&filter.apply(&records)), ["1"]);

    let filter = EmployeeFilter {
        assigned_to: Some("May".to_string()),
        department: Some("Administration".to_string()),
        ..EmployeeFilter::default()
    };
    assert!(filter.apply(&records).is_empty());
}

#[test]
fn filter_deserializes_from_wire_values() {
    let filter: EmployeeFilter = serde_json::from_value(serde_json::json!({
        "job_type": "foreign-executive",
        "date_from": "2025-01-16",
        "status": "pending"
    }))
    .expect("valid filter");

    assert_eq!(filter.job_type, Some(JobType::ForeignExecutive));
    assert_eq!(filter.date_from, Some(date(16)));
    assert_eq!(filter.status, Some(EmployeeStatus::Pending));
    assert_eq!(filter.search, None);
}

#[test]
fn options_list_distinct_values_in_first_seen_order() {
    let mut records = seed_employees();
    records[4].assigned_to = Some("Cream".to_string());
    records[1].assigned_to = Some("May".to_string());
    records[8].assigned_to = Some("Cream".to_string());
    records[2].department = String::new();

    let options = FilterOptions::from_records(&records);
    assert_eq!(options.job_types, JobType::ALL.to_vec());
    assert_eq!(options.departments, ["Transport", "Logistics", "Administration"]);
    assert_eq!(options.recruiters, ["Wichai", "Suchart", "Prasit"]);
    assert_eq!(options.assignees, ["May", "Cream"]);
}

#[test]
fn distinct_skips_empty_values() {
    assert_eq!(distinct(["", "a", "b", "a", ""]), ["a", "b"]);
    assert!(distinct(std::iter::empty()).is_empty());
}
