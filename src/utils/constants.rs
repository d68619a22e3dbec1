/// Endpoint paths, environment variable names and defaults

/// Admin snapshot endpoint, relative to the API base URL
pub const ADMIN_DATA_PATH: &str = "/api/admin/all-data";

pub const ENV_API_BASE_URL: &str = "API_BASE_URL";
pub const ENV_API_TIMEOUT_SECS: &str = "API_TIMEOUT_SECS";
pub const ENV_MEMBERS_POLICY: &str = "MEMBERS_POLICY";

/// Request timeout when `API_TIMEOUT_SECS` is unset
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Message shown to the administrator for every load failure
pub const GENERIC_LOAD_ERROR: &str = "Failed to load dashboard data";

/// Artifact link kinds, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactLink {
    Ppt,
    Bonafide,
    GitHub,
    Demo,
}

impl ArtifactLink {
    pub const ALL: [ArtifactLink; 4] = [
        ArtifactLink::Ppt,
        ArtifactLink::Bonafide,
        ArtifactLink::GitHub,
        ArtifactLink::Demo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ArtifactLink::Ppt => "PPT",
            ArtifactLink::Bonafide => "Bonafide",
            ArtifactLink::GitHub => "GitHub",
            ArtifactLink::Demo => "Demo",
        }
    }

    /// Payload field backing this link
    pub fn field(&self) -> &'static str {
        match self {
            ArtifactLink::Ppt => "ppt_file",
            ArtifactLink::Bonafide => "bonafide_file",
            ArtifactLink::GitHub => "github_repo_link",
            ArtifactLink::Demo => "demo_video_url",
        }
    }
}
