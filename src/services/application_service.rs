use tracing::info;

use crate::dto::application_dto::{CreateApplicationPayload, UpdateApplicationPayload};
use crate::error::{Error, Result};
use crate::models::application::{
    is_valid_status, valid_statuses_joined, Application, NewApplication, DEFAULT_STATUS,
};
use crate::storage::SharedStore;
use crate::utils::time::{is_iso_datetime, now};

const NOT_FOUND_MESSAGE: &str = "Job application not found";
const DATE_FORMAT_MESSAGE: &str =
    "Application date must be in ISO format (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)";

/// The application registry: business-rule validation and record lifecycle,
/// storage-agnostic behind the injected store.
#[derive(Clone)]
pub struct ApplicationService {
    store: SharedStore,
}

#[derive(Debug)]
pub struct ApplicationList {
    pub items: Vec<Application>,
    pub total: i64,
    pub filtered_by: Option<String>,
}

impl ApplicationService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list(&self, status_filter: Option<String>) -> Result<ApplicationList> {
        if let Some(filter) = &status_filter {
            if !is_valid_status(filter) {
                return Err(Error::InvalidFilter(format!(
                    "Invalid status filter. Valid statuses: {}",
                    valid_statuses_joined()
                )));
            }
        }

        let items = self.store.list(status_filter.as_deref()).await?;
        Ok(ApplicationList {
            total: items.len() as i64,
            items,
            filtered_by: status_filter,
        })
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Application> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| Error::NotFound(NOT_FOUND_MESSAGE.to_string()))
    }

    pub async fn create(&self, payload: CreateApplicationPayload) -> Result<Application> {
        let errors = validate_create(&payload);
        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }

        // Validation passed, so the required fields are present and non-empty
        // and any provided status is a member of the valid set.
        let timestamp = now();
        let new = NewApplication {
            company_name: payload.company_name.unwrap_or_default().trim().to_string(),
            position: payload.position.unwrap_or_default().trim().to_string(),
            status: payload
                .status
                .flatten()
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            // Only defaults when the key is absent: an explicit null is
            // stored as null.
            application_date: match payload.application_date {
                Some(value) => value,
                None => Some(timestamp.to_rfc3339()),
            },
            notes: payload.notes.unwrap_or_default(),
            created_at: timestamp,
            updated_at: timestamp,
        };

        let record = self.store.insert(new).await?;
        info!(id = record.id, "Created job application");
        Ok(record)
    }

    pub async fn update(&self, id: i64, payload: UpdateApplicationPayload) -> Result<Application> {
        let mut record = self.get_by_id(id).await?;

        let errors = validate_update(&payload);
        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }

        // Validation rejects present-but-null values for these three fields,
        // so the inner Option is always Some here.
        if let Some(Some(company_name)) = payload.company_name {
            record.company_name = company_name.trim().to_string();
        }
        if let Some(Some(position)) = payload.position {
            record.position = position.trim().to_string();
        }
        if let Some(Some(status)) = payload.status {
            record.status = status;
        }
        if let Some(application_date) = payload.application_date {
            record.application_date = application_date;
        }
        if let Some(notes) = payload.notes {
            record.notes = notes;
        }
        record.updated_at = now();

        if !self.store.replace(&record).await? {
            return Err(Error::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }
        info!(id, "Updated job application");
        Ok(record)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.store.delete(id).await? {
            return Err(Error::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }
        info!(id, "Deleted job application");
        Ok(())
    }
}

/// Collects every violation rather than stopping at the first.
fn validate_create(payload: &CreateApplicationPayload) -> Vec<String> {
    let mut errors = Vec::new();

    if is_blank(payload.company_name.as_deref()) {
        errors.push("Company name is required".to_string());
    }
    if is_blank(payload.position.as_deref()) {
        errors.push("Position is required".to_string());
    }
    if let Some(status) = &payload.status {
        push_status_error(status.as_deref(), &mut errors);
    }
    if let Some(Some(date)) = &payload.application_date {
        push_date_error(date, &mut errors);
    }

    errors
}

/// Same rules as create, scoped to the keys present in the payload. A key
/// present with a null value counts as present, matching create.
fn validate_update(payload: &UpdateApplicationPayload) -> Vec<String> {
    let mut errors = Vec::new();

    if let Some(company_name) = &payload.company_name {
        if is_blank(company_name.as_deref()) {
            errors.push("Company name is required".to_string());
        }
    }
    if let Some(position) = &payload.position {
        if is_blank(position.as_deref()) {
            errors.push("Position is required".to_string());
        }
    }
    if let Some(status) = &payload.status {
        push_status_error(status.as_deref(), &mut errors);
    }
    if let Some(Some(date)) = &payload.application_date {
        push_date_error(date, &mut errors);
    }

    errors
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// A null status is outside the valid set, same as any other non-member.
fn push_status_error(status: Option<&str>, errors: &mut Vec<String>) {
    if !status.map_or(false, is_valid_status) {
        errors.push(format!(
            "Status must be one of: {}",
            valid_statuses_joined()
        ));
    }
}

fn push_date_error(date: &str, errors: &mut Vec<String>) {
    if !date.is_empty() && !is_iso_datetime(date) {
        errors.push(DATE_FORMAT_MESSAGE.to_string());
    }
}
