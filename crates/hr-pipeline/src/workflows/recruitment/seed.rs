use chrono::NaiveDate;

use super::domain::{Employee, EmployeeId, EmployeeStatus, JobType};

struct SeedRow {
    day: u32,
    first_name: &'static str,
    last_name: &'static str,
    phone: &'static str,
    address: &'static str,
    recruiter: &'static str,
    department: &'static str,
    job_type: JobType,
}

const SEED_ROWS: [SeedRow; 10] = [
    SeedRow {
        day: 15,
        first_name: "Somchai",
        last_name: "Jaidee",
        phone: "081-234-5678",
        address: "123 Sukhumvit Rd, Bangkok",
        recruiter: "Wichai",
        department: "Transport",
        job_type: JobType::General,
    },
    SeedRow {
        day: 16,
        first_name: "Somying",
        last_name: "Rakdee",
        phone: "082-345-6789",
        address: "456 Rama IV Rd, Bangkok",
        recruiter: "Suchart",
        department: "Logistics",
        job_type: JobType::DomesticExecutive,
    },
    SeedRow {
        day: 17,
        first_name: "Wichai",
        last_name: "Somboon",
        phone: "083-456-7890",
        address: "789 Ratchada Rd, Bangkok",
        recruiter: "Prasit",
        department: "Transport",
        job_type: JobType::ForeignExecutive,
    },
    SeedRow {
        day: 18,
        first_name: "Prasert",
        last_name: "Charoensuk",
        phone: "084-567-8901",
        address: "321 Phetchaburi Rd, Bangkok",
        recruiter: "Wichai",
        department: "Administration",
        job_type: JobType::General,
    },
    SeedRow {
        day: 19,
        first_name: "Suda",
        last_name: "Mankong",
        phone: "085-678-9012",
        address: "654 Lat Phrao Rd, Bangkok",
        recruiter: "Suchart",
        department: "Transport",
        job_type: JobType::DomesticExecutive,
    },
    SeedRow {
        day: 20,
        first_name: "Thanakorn",
        last_name: "Wongyai",
        phone: "086-789-0123",
        address: "987 Phahonyothin Rd, Bangkok",
        recruiter: "Prasit",
        department: "Logistics",
        job_type: JobType::General,
    },
    SeedRow {
        day: 21,
        first_name: "Napa",
        last_name: "Sawangjai",
        phone: "087-890-1234",
        address: "147 Bang Na Rd, Bangkok",
        recruiter: "Wichai",
        department: "Transport",
        job_type: JobType::ForeignExecutive,
    },
    SeedRow {
        day: 22,
        first_name: "Anucha",
        last_name: "Pattana",
        phone: "088-901-2345",
        address: "258 Vibhavadi Rd, Bangkok",
        recruiter: "Suchart",
        department: "Administration",
        job_type: JobType::General,
    },
    SeedRow {
        day: 23,
        first_name: "Manee",
        last_name: "Rungrueang",
        phone: "089-012-3456",
        address: "369 Ramkhamhaeng Rd, Bangkok",
        recruiter: "Prasit",
        department: "Transport",
        job_type: JobType::DomesticExecutive,
    },
    SeedRow {
        day: 24,
        first_name: "Wanna",
        last_name: "Phetdee",
        phone: "090-123-4567",
        address: "741 Srinakarin Rd, Bangkok",
        recruiter: "Wichai",
        department: "Logistics",
        job_type: JobType::General,
    },
];

/// The fixed applicant set every store starts from: ids "1".."10", all awaiting screening.
pub fn seed_employees() -> Vec<Employee> {
    SEED_ROWS
        .iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let application_date = NaiveDate::from_ymd_opt(2025, 1, row.day)?;
            Some(Employee {
                id: EmployeeId((index + 1).to_string()),
                application_date,
                first_name: row.first_name.to_string(),
                last_name: row.last_name.to_string(),
                phone: row.phone.to_string(),
                address: row.address.to_string(),
                recruiter: row.recruiter.to_string(),
                department: row.department.to_string(),
                job_type: row.job_type,
                status: EmployeeStatus::Pending,
                assigned_to: None,
                resume_url: None,
                comments: Vec::new(),
            })
        })
        .collect()
}
