//! Session root aggregate.

use crate::model::profile::Profile;
use crate::model::service::{default_services, ExternalService};
use serde::{Deserialize, Serialize};

/// Single source of truth for one wizard session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub profile: Profile,
    pub services: Vec<ExternalService>,
}

impl AppState {
    /// Fresh session value: empty profile, every service disconnected.
    pub fn initial() -> Self {
        Self {
            profile: Profile::default(),
            services: default_services(),
        }
    }

    pub fn service(&self, service_id: &str) -> Option<&ExternalService> {
        self.services.iter().find(|service| service.id == service_id)
    }

    pub fn connected_services(&self) -> impl Iterator<Item = &ExternalService> {
        self.services.iter().filter(|service| service.connected)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::initial()
    }
}
