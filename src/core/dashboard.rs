/// Admin dashboard view: fetch the snapshot, decode members, render
///
/// Every call performs a fresh fetch. Nothing is kept between renders.

use chrono::Local;
use serde::Serialize;

use super::client::AdminApiClient;
use super::config::{DashboardConfig, MembersPolicy};
use super::error::{DashboardError, DashboardResult};
use super::models::{DashboardSnapshot, RegistrationRecord, TeamMember};
use super::render;
use crate::utils::format_timestamp;

/// Result of decoding one record's members string
#[derive(Debug, Clone)]
pub enum MembersOutcome {
    Decoded(Vec<TeamMember>),
    /// Decode failed and the policy allowed the card through
    Unreadable(String),
}

impl MembersOutcome {
    pub fn member_count(&self) -> Option<usize> {
        match self {
            MembersOutcome::Decoded(members) => Some(members.len()),
            MembersOutcome::Unreadable(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardCard {
    pub record: RegistrationRecord,
    pub members: MembersOutcome,
}

/// Compact per-registration row used by the JSON summary and `list`
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationSummary {
    pub id: i64,
    pub registration_id: Option<String>,
    pub team_name: String,
    pub team_size: u32,
    pub institution_name: String,
    pub member_count: Option<usize>,
    pub submitted_at: Option<String>,
}

impl From<&DashboardCard> for RegistrationSummary {
    fn from(card: &DashboardCard) -> Self {
        Self {
            id: card.record.id,
            registration_id: card.record.registration_id.clone(),
            team_name: card.record.team_name.clone(),
            team_size: card.record.team_size,
            institution_name: card.record.institution_name.clone(),
            member_count: card.members.member_count(),
            submitted_at: card.record.submitted_at.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_users: i64,
    pub registration_count: usize,
    pub registrations: Vec<RegistrationSummary>,
}

/// Decode members for each record, in snapshot order
pub fn build_cards(snapshot: DashboardSnapshot, policy: MembersPolicy) -> DashboardResult<Vec<DashboardCard>> {
    let mut cards = Vec::with_capacity(snapshot.hackathon_registration.len());

    for record in snapshot.hackathon_registration {
        let members = match record.decode_members() {
            Ok(members) => MembersOutcome::Decoded(members),
            Err(source) => match policy {
                MembersPolicy::Strict => {
                    return Err(DashboardError::MalformedMembers {
                        record_id: record.id,
                        source,
                    });
                }
                MembersPolicy::Flag => {
                    tracing::warn!(record_id = record.id, error = %source, "unreadable members data");
                    MembersOutcome::Unreadable(source.to_string())
                }
            },
        };

        cards.push(DashboardCard { record, members });
    }

    Ok(cards)
}

#[derive(Clone)]
pub struct AdminDashboardView {
    client: AdminApiClient,
    policy: MembersPolicy,
}

impl AdminDashboardView {
    pub fn new(config: &DashboardConfig) -> DashboardResult<Self> {
        Ok(Self {
            client: AdminApiClient::new(config)?,
            policy: config.members_policy,
        })
    }

    pub fn client(&self) -> &AdminApiClient {
        &self.client
    }

    pub async fn load_snapshot(&self) -> DashboardResult<DashboardSnapshot> {
        self.client.fetch_snapshot().await
    }

    /// Fetch and decode; returns the user count alongside the cards
    pub async fn load_cards(&self) -> DashboardResult<(i64, Vec<DashboardCard>)> {
        let snapshot = self.load_snapshot().await?;
        let total_users = snapshot.total_users;
        let cards = build_cards(snapshot, self.policy)?;
        Ok((total_users, cards))
    }

    /// One full fetch-and-render pass
    pub async fn render_page(&self) -> DashboardResult<String> {
        let (total_users, cards) = self.load_cards().await?;
        let rendered_at = format_timestamp(Local::now());
        Ok(render::render_dashboard(total_users, &cards, &rendered_at)?)
    }

    pub async fn summary(&self) -> DashboardResult<DashboardSummary> {
        let (total_users, cards) = self.load_cards().await?;
        Ok(DashboardSummary {
            total_users,
            registration_count: cards.len(),
            registrations: cards.iter().map(RegistrationSummary::from).collect(),
        })
    }
}
