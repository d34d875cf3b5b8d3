use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::models::application::{Application, NewApplication};
use crate::storage::ApplicationStore;

/// In-process store backed by an ordered map. State is lost on restart.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

struct Inner {
    records: BTreeMap<i64, Application>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApplicationStore for MemoryStore {
    async fn list(&self, status: Option<&str>) -> Result<Vec<Application>> {
        let inner = self.inner.lock().await;
        let items = inner
            .records
            .values()
            .filter(|record| status.map_or(true, |wanted| record.status == wanted))
            .cloned()
            .collect();
        Ok(items)
    }

    async fn get(&self, id: i64) -> Result<Option<Application>> {
        let inner = self.inner.lock().await;
        Ok(inner.records.get(&id).cloned())
    }

    async fn insert(&self, new: NewApplication) -> Result<Application> {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let record = Application {
            id,
            company_name: new.company_name,
            position: new.position,
            status: new.status,
            application_date: new.application_date,
            notes: new.notes,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        inner.records.insert(id, record.clone());
        Ok(record)
    }

    async fn replace(&self, record: &Application) -> Result<bool> {
        let mut inner = self.inner.lock().await;
        match inner.records.get_mut(&record.id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.lock().await;
        Ok(inner.records.remove(&id).is_some())
    }
}
