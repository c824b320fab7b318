use crate::infra::seeded_service;
use chrono::Local;
use clap::Args;
use hr_pipeline::config::AppConfig;
use hr_pipeline::error::AppError;
use hr_pipeline::workflows::recruitment::{
    DashboardSummary, FilterOptions, InMemoryEmployeeRepository, RecruitmentService,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardArgs {
    /// Emit the summary as JSON instead of a text table
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = dashboard_service(&config);
    let summary = service.dashboard()?;
    let options = service.filter_options()?;

    if args.json {
        let payload = serde_json::json!({
            "generated_at": Local::now().to_rfc3339(),
            "summary": summary,
            "filters": options,
        });
        let rendered = serde_json::to_string_pretty(&payload)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{rendered}");
    } else {
        print!("{}", render_dashboard(&summary, &options));
    }

    Ok(())
}

/// Seeded service carrying the same pipeline settings `serve` would use.
fn dashboard_service(config: &AppConfig) -> RecruitmentService<InMemoryEmployeeRepository> {
    seeded_service(config.pipeline.clone())
}

fn render_dashboard(summary: &DashboardSummary, options: &FilterOptions) -> String {
    let mut out = String::new();
    out.push_str("Applicant pipeline dashboard\n");
    out.push_str(&format!("  Total applicants: {}\n", summary.total));
    out.push_str(&format!("  Awaiting screening: {}\n", summary.screening_queue));
    out.push_str(&format!("  In screening: {}\n", summary.in_screening));
    out.push_str(&format!("  In management: {}\n", summary.management));
    out.push_str(&format!("  Started work: {}\n", summary.started_work));
    out.push_str(&format!("  Resigned: {}\n", summary.resigned));
    out.push_str(&format!("  Success rate: {}%\n", summary.success_rate_pct));

    out.push_str("\nBy status\n");
    for entry in &summary.status_breakdown {
        out.push_str(&format!("  {:<20} {}\n", entry.status_label, entry.count));
    }

    let job_types: Vec<&str> = options.job_types.iter().map(|job| job.label()).collect();
    out.push_str("\nFilters\n");
    out.push_str(&format!("  Job types: {}\n", job_types.join(", ")));
    out.push_str(&format!("  Departments: {}\n", options.departments.join(", ")));
    out.push_str(&format!("  Recruiters: {}\n", options.recruiters.join(", ")));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hr_pipeline::config::{
        AppEnvironment, PipelineSettings, ServerConfig, TelemetryConfig,
    };
    use hr_pipeline::workflows::recruitment::{EmployeeId, NewComment};

    #[test]
    fn dashboard_uses_configured_pipeline_settings() {
        let config = AppConfig {
            environment: AppEnvironment::Test,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
            pipeline: PipelineSettings {
                responsible_persons: vec!["Nok".to_string()],
                default_comment_author: "Front Desk".to_string(),
            },
        };

        let service = dashboard_service(&config);
        assert_eq!(service.settings(), &config.pipeline);

        let comment = service
            .add_comment(
                &EmployeeId::new("1"),
                NewComment {
                    text: "Walk-in applicant".to_string(),
                    author: None,
                },
            )
            .expect("comment stored");
        assert_eq!(comment.author, "Front Desk");
    }

    #[test]
    fn renders_seed_dashboard() {
        let service = seeded_service(PipelineSettings::default());
        let summary = service.dashboard().expect("dashboard");
        let options = service.filter_options().expect("options");

        let rendered = render_dashboard(&summary, &options);
        assert!(rendered.contains("Total applicants: 10"));
        assert!(rendered.contains("Success rate: 0%"));
        assert!(rendered.contains("Departments: Transport, Logistics, Administration"));
    }
}
