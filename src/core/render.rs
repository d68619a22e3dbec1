/// HTML rendering for the admin dashboard
///
/// Pages are askama templates under `templates/`; values are escaped by the
/// template engine. Cards are flattened into view structs first so the
/// templates stay free of logic.

use askama::Template;
use url::Url;

use super::dashboard::{DashboardCard, MembersOutcome};
use crate::utils::ArtifactLink;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub total_users: i64,
    pub rendered_at: &'a str,
    pub cards: Vec<CardView>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub message: &'a str,
}

pub struct CardView {
    pub id: i64,
    pub title: String,
    pub code: String,
    pub domain: String,
    pub summary: Vec<SummaryRow>,
    pub members_readable: bool,
    pub member_lines: Vec<String>,
    pub members_error: String,
    pub links: Vec<LinkView>,
    pub rules_accepted: bool,
    pub owner: String,
}

pub struct SummaryRow {
    pub key: &'static str,
    pub value: String,
}

pub struct LinkView {
    pub label: &'static str,
    pub field: &'static str,
    pub value: String,
    pub missing: bool,
    /// Only http(s) and relative references become anchors
    pub linked: bool,
}

impl LinkView {
    fn new(link: ArtifactLink, target: Option<&str>) -> Self {
        let value = target.unwrap_or_default().to_string();
        let missing = value.trim().is_empty();
        let linked = !missing && is_linkable(&value);

        Self {
            label: link.label(),
            field: link.field(),
            value,
            missing,
            linked,
        }
    }
}

/// Absolute URLs must be http or https; scheme-less paths are kept as links
fn is_linkable(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(url::ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}

impl From<&DashboardCard> for CardView {
    fn from(card: &DashboardCard) -> Self {
        let record = &card.record;

        let summary = vec![
            SummaryRow { key: "Team", value: record.team_name.clone() },
            SummaryRow { key: "Team Size", value: record.team_size.to_string() },
            SummaryRow { key: "Institution", value: record.institution_name.clone() },
            SummaryRow {
                key: "Submitted",
                value: record.submitted_at.clone().unwrap_or_default(),
            },
        ];

        let (members_readable, member_lines, members_error) = match &card.members {
            MembersOutcome::Decoded(members) => {
                (true, members.iter().map(|m| m.summary_line()).collect(), String::new())
            }
            MembersOutcome::Unreadable(reason) => (false, Vec::new(), reason.clone()),
        };

        let links = ArtifactLink::ALL
            .iter()
            .map(|&link| {
                let target = match link {
                    ArtifactLink::Ppt => record.ppt_file.as_deref(),
                    ArtifactLink::Bonafide => record.bonafide_file.as_deref(),
                    ArtifactLink::GitHub => record.github_repo_link.as_deref(),
                    ArtifactLink::Demo => record.demo_video_url.as_deref(),
                };
                LinkView::new(link, target)
            })
            .collect();

        Self {
            id: record.id,
            title: record.project_title.clone(),
            code: record.code().to_string(),
            domain: record.problem_domain.clone(),
            summary,
            members_readable,
            member_lines,
            members_error,
            links,
            rules_accepted: record.rules_accepted(),
            owner: match record.user_id {
                Some(id) => format!("user {}", id),
                None => "guest".to_string(),
            },
        }
    }
}

/// Full dashboard page
pub fn render_dashboard(
    total_users: i64,
    cards: &[DashboardCard],
    rendered_at: &str,
) -> askama::Result<String> {
    DashboardTemplate {
        total_users,
        rendered_at,
        cards: cards.iter().map(CardView::from).collect(),
    }
    .render()
}

/// Generic failure page; details stay in the logs
pub fn render_error_page(message: &str) -> askama::Result<String> {
    ErrorTemplate { message }.render()
}
