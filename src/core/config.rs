/// Dashboard configuration
///
/// Resolved once at startup from the process environment (optionally primed
/// from a `.env` file). Command-line flags take precedence over variables.

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

use crate::utils::{
    ADMIN_DATA_PATH, DEFAULT_TIMEOUT_SECS, ENV_API_BASE_URL, ENV_API_TIMEOUT_SECS,
    ENV_MEMBERS_POLICY,
};

/// What to do when one record's members string cannot be decoded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MembersPolicy {
    /// Abort the whole render
    #[default]
    Strict,
    /// Render the card with a visible notice instead of the member list
    Flag,
}

impl FromStr for MembersPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(MembersPolicy::Strict),
            "flag" => Ok(MembersPolicy::Flag),
            _ => anyhow::bail!("Invalid {}: {}. Must be 'strict' or 'flag'", ENV_MEMBERS_POLICY, s),
        }
    }
}

impl fmt::Display for MembersPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MembersPolicy::Strict => write!(f, "strict"),
            MembersPolicy::Flag => write!(f, "flag"),
        }
    }
}

/// Values supplied on the command line; `None` falls through to the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub members_policy: Option<MembersPolicy>,
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Base URL without trailing slash
    pub api_base_url: String,
    pub timeout: Duration,
    pub members_policy: MembersPolicy,
}

impl DashboardConfig {
    /// Resolve from the live process environment
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self> {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve from a `.env` file only, ignoring the process environment
    pub fn from_env_file<P: AsRef<Path>>(path: P, overrides: ConfigOverrides) -> Result<Self> {
        let path = path.as_ref();
        let mut vars = HashMap::new();

        let iter = dotenvy::from_path_iter(path)
            .with_context(|| format!("Failed to read env file {}", path.display()))?;
        for item in iter {
            let (key, value) = item.context("Failed to parse env file")?;
            vars.insert(key, value);
        }

        Self::resolve(overrides, |key| vars.get(key).cloned())
    }

    fn resolve<F>(overrides: ConfigOverrides, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = overrides
            .api_base_url
            .or_else(|| lookup(ENV_API_BASE_URL))
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow!("{} is not set", ENV_API_BASE_URL))?;
        let api_base_url = normalize_base_url(&raw_url)?;

        let timeout_secs = match overrides.timeout_secs {
            Some(secs) => secs,
            None => match lookup(ENV_API_TIMEOUT_SECS) {
                Some(v) => v
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("Invalid {}: {}", ENV_API_TIMEOUT_SECS, v))?,
                None => DEFAULT_TIMEOUT_SECS,
            },
        };
        if timeout_secs == 0 {
            return Err(anyhow!("{} must be greater than zero", ENV_API_TIMEOUT_SECS));
        }

        let members_policy = match overrides.members_policy {
            Some(policy) => policy,
            None => lookup(ENV_MEMBERS_POLICY)
                .map(|v| v.parse::<MembersPolicy>())
                .transpose()?
                .unwrap_or_default(),
        };

        Ok(Self {
            api_base_url,
            timeout: Duration::from_secs(timeout_secs),
            members_policy,
        })
    }

    /// Full URL of the admin snapshot endpoint
    pub fn admin_data_url(&self) -> String {
        format!("{}{}", self.api_base_url, ADMIN_DATA_PATH)
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed)
        .with_context(|| format!("Invalid {}: {}", ENV_API_BASE_URL, raw))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(anyhow!("{} must use http or https, got '{}'", ENV_API_BASE_URL, other)),
    }
    if parsed.host_str().is_none() {
        return Err(anyhow!("{} has no host: {}", ENV_API_BASE_URL, raw));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_missing_base_url_fails() {
        let err = DashboardConfig::resolve(ConfigOverrides::default(), lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("API_BASE_URL is not set"));
    }

    #[test]
    fn test_blank_base_url_fails() {
        let result = DashboardConfig::resolve(
            ConfigOverrides::default(),
            lookup_from(&[("API_BASE_URL", "   ")]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = DashboardConfig::resolve(
            ConfigOverrides::default(),
            lookup_from(&[("API_BASE_URL", "https://api.example.com/")]),
        )
        .unwrap();

        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.admin_data_url(), "https://api.example.com/api/admin/all-data");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.members_policy, MembersPolicy::Strict);
    }

    #[test]
    fn test_invalid_scheme_rejected() {
        let result = DashboardConfig::resolve(
            ConfigOverrides::default(),
            lookup_from(&[("API_BASE_URL", "ftp://files.example.com")]),
        );
        assert!(result.is_err());

        let result = DashboardConfig::resolve(
            ConfigOverrides::default(),
            lookup_from(&[("API_BASE_URL", "not a url")]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = ConfigOverrides {
            api_base_url: Some("http://localhost:5000".to_string()),
            timeout_secs: Some(5),
            members_policy: Some(MembersPolicy::Flag),
        };
        let config = DashboardConfig::resolve(
            overrides,
            lookup_from(&[
                ("API_BASE_URL", "https://api.example.com"),
                ("API_TIMEOUT_SECS", "60"),
                ("MEMBERS_POLICY", "strict"),
            ]),
        )
        .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.members_policy, MembersPolicy::Flag);
    }

    #[test]
    fn test_invalid_timeout_and_policy() {
        let result = DashboardConfig::resolve(
            ConfigOverrides::default(),
            lookup_from(&[("API_BASE_URL", "http://localhost"), ("API_TIMEOUT_SECS", "soon")]),
        );
        assert!(result.is_err());

        let result = DashboardConfig::resolve(
            ConfigOverrides::default(),
            lookup_from(&[("API_BASE_URL", "http://localhost"), ("API_TIMEOUT_SECS", "0")]),
        );
        assert!(result.is_err());

        let result = DashboardConfig::resolve(
            ConfigOverrides::default(),
            lookup_from(&[("API_BASE_URL", "http://localhost"), ("MEMBERS_POLICY", "skip")]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_members_policy_parsing() {
        assert_eq!("STRICT".parse::<MembersPolicy>().unwrap(), MembersPolicy::Strict);
        assert_eq!(" flag ".parse::<MembersPolicy>().unwrap(), MembersPolicy::Flag);
        assert_eq!(MembersPolicy::Flag.to_string(), "flag");
    }

    #[test]
    fn test_from_env_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# Admin dashboard").unwrap();
        writeln!(file, "API_BASE_URL=http://127.0.0.1:5000").unwrap();
        writeln!(file, "API_TIMEOUT_SECS=12").unwrap();
        writeln!(file, "MEMBERS_POLICY=flag").unwrap();

        let config = DashboardConfig::from_env_file(file.path(), ConfigOverrides::default()).unwrap();

        assert_eq!(config.api_base_url, "http://127.0.0.1:5000");
        assert_eq!(config.timeout, Duration::from_secs(12));
        assert_eq!(config.members_policy, MembersPolicy::Flag);
    }
}
