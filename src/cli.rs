/// CLI argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use hackathon_admin::core::{ConfigOverrides, MembersPolicy};
use hackathon_admin::utils::{DEFAULT_HOST, DEFAULT_PORT};

// Build timestamp injected at compile time
pub const VERSION_WITH_BUILD: &str = concat!(env!("CARGO_PKG_VERSION"), " (built: ", env!("BUILD_TIMESTAMP"), ")");

#[derive(Parser)]
#[command(name = "hackathon-admin")]
#[command(author, version = VERSION_WITH_BUILD, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub api: ApiArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args)]
pub struct ApiArgs {
    /// Backend base URL (overrides API_BASE_URL)
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    /// Request timeout in seconds (overrides API_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// What to do with unreadable members data: strict or flag
    #[arg(long, global = true)]
    pub members_policy: Option<MembersPolicy>,

    /// Read configuration from this file instead of the process environment
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,
}

impl ApiArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_base_url: self.api_base_url.clone(),
            timeout_secs: self.timeout,
            members_policy: self.members_policy,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the dashboard HTTP server (default)
    #[cfg(feature = "server")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Enable CORS for cross-origin requests
        #[arg(long)]
        cors: bool,
    },

    /// Fetch once and write the dashboard HTML
    Render {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fetch once and print a registration table
    List,

    /// Probe the admin endpoint
    Check,

    /// Show the resolved configuration
    Config,
}
