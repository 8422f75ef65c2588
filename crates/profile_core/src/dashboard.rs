//! Derived dashboard metrics.
//!
//! Everything here is computed on demand from an `AppState` snapshot and
//! never stored.

use crate::model::profile::Profile;
use crate::model::service::ExternalService;
use crate::model::state::AppState;
use serde::Serialize;

/// Percentage of {name, birthDate, address, phone, email} that are filled.
pub fn completion_percentage(profile: &Profile) -> u32 {
    let tracked = [
        &profile.name,
        &profile.birth_date,
        &profile.address,
        &profile.phone,
        &profile.email,
    ];
    let filled = tracked.iter().filter(|value| !value.is_empty()).count();
    rounded_percentage(filled, tracked.len())
}

/// Educations + work histories + qualifications.
pub fn total_history_count(profile: &Profile) -> usize {
    profile.educations.len() + profile.work_histories.len() + profile.qualifications.len()
}

/// Percentage of services connected; 0 for an empty list.
pub fn connection_rate(services: &[ExternalService]) -> u32 {
    let connected = services.iter().filter(|service| service.connected).count();
    rounded_percentage(connected, services.len())
}

fn rounded_percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 * 100.0 / total as f64).round() as u32
}

/// Entry count against its cap, rendered as `n/max` on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionUsage {
    pub count: usize,
    pub max_entries: usize,
}

/// Connected service shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectedService {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Everything the dashboard page renders besides the raw profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// False until a name is entered; the page then prompts for the profile.
    pub has_basic_info: bool,
    pub completion_percentage: u32,
    pub total_history_count: usize,
    pub connection_rate: u32,
    pub educations: CollectionUsage,
    pub work_histories: CollectionUsage,
    pub qualifications: CollectionUsage,
    pub connected_services: Vec<ConnectedService>,
    pub total_services: usize,
}

impl DashboardSummary {
    pub fn from_state(state: &AppState, max_entries: usize) -> Self {
        let profile = &state.profile;
        let usage = |count: usize| CollectionUsage { count, max_entries };
        let connected_services = state
            .connected_services()
            .map(|service| ConnectedService {
                id: service.id.clone(),
                name: service.name.clone(),
                description: service.description.clone(),
            })
            .collect();

        Self {
            has_basic_info: !profile.name.is_empty(),
            completion_percentage: completion_percentage(profile),
            total_history_count: total_history_count(profile),
            connection_rate: connection_rate(&state.services),
            educations: usage(profile.educations.len()),
            work_histories: usage(profile.work_histories.len()),
            qualifications: usage(profile.qualifications.len()),
            connected_services,
            total_services: state.services.len(),
        }
    }
}
