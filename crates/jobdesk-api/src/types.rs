//! Job records and request payloads.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Employment type of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JobType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    /// All job types, in display order.
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
    ];

    /// Wire representation, e.g. `Full-time`.
    pub fn as_str(self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown job type: {s}"))
    }
}

/// A job posting as returned by the backend.
///
/// Only `id`, `title`, `company` and `location` are strict. A null or
/// unknown `job_type` reads as the default, null `tags` as empty, and an
/// unreadable `posting_date` as none, so one odd row never fails a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default, deserialize_with = "lenient_job_type")]
    pub job_type: JobType,
    #[serde(default, deserialize_with = "nullable_tags")]
    pub tags: Vec<String>,
    #[serde(default, with = "posting_date")]
    pub posting_date: Option<NaiveDateTime>,
}

impl Job {
    /// Calendar day the job was posted.
    pub fn posting_day(&self) -> Option<NaiveDate> {
        self.posting_date.map(|dt| dt.date())
    }

    /// Posting date as shown on a job card, e.g. `Jan 5, 2024`, or `N/A`.
    pub fn posted_label(&self) -> String {
        self.posting_date
            .map(|dt| dt.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// Body of a create or update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobPayload {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub tags: Vec<String>,
    /// Passed through as typed; omitted so the backend picks the current date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posting_date: Option<String>,
}

/// Parse a posting date in any of the shapes the backend has been seen to emit.
///
/// Accepts naive ISO-8601 date-times (with or without fractional seconds),
/// RFC 3339 timestamps (converted to UTC), and bare `YYYY-MM-DD` dates.
pub fn parse_posting_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = s.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

fn lenient_job_type<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<JobType, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(match raw.as_deref() {
        None => JobType::default(),
        Some(s) => s.parse().unwrap_or_else(|e| {
            warn!(error = %e, "unreadable job type, using default");
            JobType::default()
        }),
    })
}

fn nullable_tags<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let raw: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}

mod posting_date {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};
    use tracing::warn;

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_some(&dt.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => {
                let parsed = super::parse_posting_date(s);
                if parsed.is_none() {
                    warn!(posting_date = s, "unreadable posting date");
                }
                Ok(parsed)
            }
        }
    }
}
