use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Pipeline states an application can be in. Order is canonical and is the
/// order echoed in validation error messages.
pub const VALID_STATUSES: [&str; 8] = [
    "Applied",
    "Interview",
    "Phone Screen",
    "On-site",
    "Rejected",
    "Offer",
    "Accepted",
    "Withdrawn",
];

pub const DEFAULT_STATUS: &str = "Applied";

pub fn is_valid_status(status: &str) -> bool {
    VALID_STATUSES.contains(&status)
}

pub fn valid_statuses_joined() -> String {
    VALID_STATUSES.join(", ")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: i64,
    pub company_name: String,
    pub position: String,
    pub status: String,
    /// Stored as the caller-supplied ISO-8601 string, validated on the way in.
    pub application_date: Option<String>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A fully validated and defaulted record ready for insertion; the store
/// assigns the id.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub company_name: String,
    pub position: String,
    pub status: String,
    pub application_date: Option<String>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
