pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod storage;
pub mod utils;

use crate::services::application_service::ApplicationService;
use crate::storage::SharedStore;

#[derive(Clone)]
pub struct AppState {
    pub application_service: ApplicationService,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        let application_service = ApplicationService::new(store);

        Self {
            application_service,
        }
    }
}
