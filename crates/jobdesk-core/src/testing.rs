//! Shared fixtures for controller tests.

use chrono::NaiveDate;
use serde_json::{Value, json};
use wiremock::MockServer;

use jobdesk_api::{Job, JobType, JobsClient};

pub fn job(id: i64, title: &str) -> Job {
    Job {
        id,
        title: title.to_string(),
        company: "Aon".to_string(),
        location: "Remote".to_string(),
        job_type: JobType::FullTime,
        tags: vec!["Life".to_string(), "Python".to_string()],
        posting_date: NaiveDate::from_ymd_opt(2024, 1, 15).and_then(|d| d.and_hms_opt(0, 0, 0)),
    }
}

pub fn job_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "company": "Aon",
        "location": "Remote",
        "job_type": "Full-time",
        "tags": ["Life", "Python"],
        "posting_date": "2024-01-15T00:00:00"
    })
}

pub fn client(server: &MockServer) -> JobsClient {
    JobsClient::new(server.uri())
}
