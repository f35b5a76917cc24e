//! Error types for the jobs API client.

use thiserror::Error;

/// The gateway operation a request was issued for.
///
/// Each operation has a fixed fallback message used whenever the backend
/// does not supply one of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListJobs,
    GetJob,
    CreateJob,
    UpdateJob,
    DeleteJob,
    ListJobTypes,
    ListLocations,
    ListTags,
    HealthCheck,
}

impl Operation {
    /// Generic message shown when the server gave no `error` field.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::ListJobs => "Failed to fetch jobs",
            Operation::GetJob => "Failed to fetch job",
            Operation::CreateJob => "Failed to create job",
            Operation::UpdateJob => "Failed to update job",
            Operation::DeleteJob => "Failed to delete job",
            Operation::ListJobTypes => "Failed to fetch job types",
            Operation::ListLocations => "Failed to fetch locations",
            Operation::ListTags => "Failed to fetch tags",
            Operation::HealthCheck => "API health check failed",
        }
    }
}

/// Errors returned by [`crate::JobsClient`].
///
/// Every variant displays as its `message`, which is what callers put in
/// front of the user.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Server {
        operation: Operation,
        status: u16,
        message: String,
    },

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("{message}")]
    Network {
        operation: Operation,
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// A 2xx response whose body did not have the expected shape.
    #[error("{message}")]
    Decode {
        operation: Operation,
        message: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    pub(crate) fn server(operation: Operation, status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| operation.fallback_message().to_string());
        ApiError::Server {
            operation,
            status,
            message,
        }
    }

    pub(crate) fn network(operation: Operation, source: reqwest::Error) -> Self {
        ApiError::Network {
            operation,
            message: operation.fallback_message().to_string(),
            source,
        }
    }

    pub(crate) fn decode(operation: Operation, source: reqwest::Error) -> Self {
        ApiError::Decode {
            operation,
            message: operation.fallback_message().to_string(),
            source,
        }
    }

    /// The operation that failed.
    pub fn operation(&self) -> Operation {
        match self {
            ApiError::Server { operation, .. }
            | ApiError::Network { operation, .. }
            | ApiError::Decode { operation, .. } => *operation,
        }
    }

    /// Human-readable message for display.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Server { message, .. }
            | ApiError::Network { message, .. }
            | ApiError::Decode { message, .. } => message,
        }
    }

    /// HTTP status, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
