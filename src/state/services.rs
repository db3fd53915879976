//! Service catalog state for the admin screen and marketing page.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use crate::net::types::Service;

/// Shared service catalog state backed by REST fetches.
#[derive(Clone, Debug, Default)]
pub struct ServicesState {
    pub items: Vec<Service>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ServicesState {
    pub fn upsert(&mut self, service: Service) {
        if let Some(existing) = self.items.iter_mut().find(|s| s.id == service.id) {
            *existing = service;
        } else {
            self.items.push(service);
        }
    }

    pub fn remove(&mut self, service_id: &str) {
        self.items.retain(|s| s.id != service_id);
    }
}
