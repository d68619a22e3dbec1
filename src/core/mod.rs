pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod render;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::AdminApiClient;
pub use config::{ConfigOverrides, DashboardConfig, MembersPolicy};
pub use dashboard::AdminDashboardView;
pub use error::{DashboardError, DashboardResult};
pub use models::{DashboardSnapshot, RegistrationRecord, TeamMember};
