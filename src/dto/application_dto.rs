use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::application::Application;
use crate::services::application_service::ApplicationList;

/// Double-`Option` fields distinguish "key absent" (outer `None`) from an
/// explicit JSON `null` (inner `None`): a null `status` is a violation, a
/// null `application_date` is stored as null instead of the default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateApplicationPayload {
    pub company_name: Option<String>,
    pub position: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub status: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub application_date: Option<Option<String>>,
    pub notes: Option<String>,
}

/// Partial update: fields absent from the JSON body are left untouched.
/// A present-but-null `company_name`, `position`, or `status` is a
/// violation; a null `application_date` clears the date.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateApplicationPayload {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub company_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub position: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub status: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub application_date: Option<Option<String>>,
    pub notes: Option<String>,
}

fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationResponse {
    pub id: i64,
    pub company_name: String,
    pub position: String,
    pub status: String,
    pub application_date: Option<String>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationListResponse {
    pub applications: Vec<ApplicationResponse>,
    pub total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtered_by: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusOptionsResponse {
    pub statuses: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApplicationListQuery {
    pub status: Option<String>,
}

impl From<Application> for ApplicationResponse {
    fn from(value: Application) -> Self {
        Self {
            id: value.id,
            company_name: value.company_name,
            position: value.position,
            status: value.status,
            application_date: value.application_date,
            notes: value.notes,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<ApplicationList> for ApplicationListResponse {
    fn from(value: ApplicationList) -> Self {
        Self {
            applications: value.items.into_iter().map(Into::into).collect(),
            total: value.total,
            filtered_by: value.filtered_by,
        }
    }
}
