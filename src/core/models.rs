/// Typed view of the `/api/admin/all-data` payload
///
/// The backend serializes its table rows column-by-column, so field names
/// follow the database columns. `members` arrives as a JSON *string* holding
/// a JSON array; it is decoded separately per record.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Top-level admin payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub hackathon_registration: Vec<RegistrationRecord>,
    #[serde(rename = "totalUsers")]
    pub total_users: i64,
}

impl DashboardSnapshot {
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    pub fn registration_count(&self) -> usize {
        self.hackathon_registration.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Public code such as `HACK00001`; null until the backend assigns it
    #[serde(default)]
    pub registration_id: Option<String>,
    pub team_name: String,
    pub institution_name: String,
    pub team_size: u32,
    /// Serialized JSON array of [`TeamMember`]
    pub members: String,
    pub problem_domain: String,
    pub project_title: String,
    #[serde(default)]
    pub github_repo_link: Option<String>,
    #[serde(default)]
    pub demo_video_url: Option<String>,
    #[serde(default)]
    pub ppt_file: Option<String>,
    #[serde(default)]
    pub bonafide_file: Option<String>,
    #[serde(default)]
    pub agree_to_rules: Option<bool>,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

impl RegistrationRecord {
    /// Decode the double-encoded members field
    pub fn decode_members(&self) -> serde_json::Result<Vec<TeamMember>> {
        TeamMember::decode_list(&self.members)
    }

    pub fn code(&self) -> &str {
        self.registration_id.as_deref().unwrap_or("unassigned")
    }

    pub fn rules_accepted(&self) -> bool {
        self.agree_to_rules.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub designation: String,
    #[serde(deserialize_with = "lenient_string")]
    pub department: String,
    #[serde(deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(deserialize_with = "lenient_string")]
    pub state: String,
    #[serde(deserialize_with = "lenient_string")]
    pub mobile: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
}

/// Member fields come from free-form client input: null reads as empty,
/// numbers and booleans keep their JSON text
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        other => Err(D::Error::custom(format!("expected a string, got {}", other))),
    }
}

impl TeamMember {
    pub fn decode_list(raw: &str) -> serde_json::Result<Vec<TeamMember>> {
        serde_json::from_str(raw)
    }

    /// `"{name} ({designation}) – {email}"`, unescaped
    pub fn summary_line(&self) -> String {
        format!("{} ({}) \u{2013} {}", self.name, self.designation, self.email)
    }
}
