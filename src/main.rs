mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{prelude::*, EnvFilter};

use cli::{ApiArgs, Cli, Commands};
use hackathon_admin::core::{AdminDashboardView, DashboardConfig};
use hackathon_admin::utils::{format_elapsed_ms, truncate_string, DEFAULT_HOST, DEFAULT_PORT};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `render` output on stdout stays clean
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let config = load_config(&cli.api)?;

    match cli.command {
        #[cfg(feature = "server")]
        None => {
            hackathon_admin::server::run(config, DEFAULT_HOST.to_string(), DEFAULT_PORT, false).await?;
        }
        #[cfg(not(feature = "server"))]
        None => {
            println!("Built without the server feature. Use 'render' or 'list'.");
        }
        #[cfg(feature = "server")]
        Some(Commands::Serve { port, host, cors }) => {
            hackathon_admin::server::run(config, host, port, cors).await?;
        }
        Some(Commands::Render { output }) => {
            handle_render(config, output).await?;
        }
        Some(Commands::List) => {
            handle_list(config).await?;
        }
        Some(Commands::Check) => {
            handle_check(config).await?;
        }
        Some(Commands::Config) => {
            handle_config(&config)?;
        }
    }

    Ok(())
}

/// Resolve configuration once; a missing base URL stops the process here
fn load_config(args: &ApiArgs) -> Result<DashboardConfig> {
    let config = match &args.env_file {
        Some(path) => DashboardConfig::from_env_file(path, args.overrides())?,
        None => {
            dotenvy::dotenv().ok();
            DashboardConfig::from_env(args.overrides())?
        }
    };

    tracing::debug!(
        api_base_url = %config.api_base_url,
        timeout_secs = config.timeout.as_secs(),
        members_policy = %config.members_policy,
        "configuration loaded"
    );

    Ok(config)
}

async fn handle_render(config: DashboardConfig, output: Option<std::path::PathBuf>) -> Result<()> {
    let view = AdminDashboardView::new(&config)?;
    let html = view.render_page().await.context("Failed to render dashboard")?;

    match output {
        Some(path) => {
            std::fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} Dashboard written to {}", "✓".green(), path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}

async fn handle_list(config: DashboardConfig) -> Result<()> {
    let view = AdminDashboardView::new(&config)?;
    let summary = view.summary().await.context("Failed to load registrations")?;

    println!(
        "Hackathon Registrations ({} registrations, {} users)\n",
        summary.registration_count, summary.total_users
    );
    println!(
        "{}",
        format!(
            "{:<12} {:<25} {:<5} {:<30} {:<8} {:<30}",
            "Code", "Team", "Size", "Institution", "Members", "Submitted"
        )
        .bold()
    );
    println!("{}", "-".repeat(115));

    for row in summary.registrations {
        let members = match row.member_count {
            Some(n) => n.to_string(),
            None => "?".yellow().to_string(),
        };
        println!(
            "{:<12} {:<25} {:<5} {:<30} {:<8} {:<30}",
            row.registration_id.as_deref().unwrap_or("-"),
            truncate_string(&row.team_name, 25),
            row.team_size,
            truncate_string(&row.institution_name, 30),
            members,
            row.submitted_at.as_deref().unwrap_or("-"),
        );
    }

    Ok(())
}

async fn handle_check(config: DashboardConfig) -> Result<()> {
    let view = AdminDashboardView::new(&config)?;
    let client = view.client();

    println!("Checking {}...\n", client.url());
    let probe = client.probe().await;

    if probe.success {
        println!("  {} Success ({})", "✓".green(), format_elapsed_ms(probe.response_time_ms));
        println!("  Registrations: {}", probe.registration_count.unwrap_or_default());
        println!("  Total users:   {}", probe.total_users.unwrap_or_default());
        Ok(())
    } else {
        println!(
            "  {} Failed after {}: {}",
            "✗".red(),
            format_elapsed_ms(probe.response_time_ms),
            probe.error.as_deref().unwrap_or_default()
        );
        anyhow::bail!("admin endpoint check failed")
    }
}

fn handle_config(config: &DashboardConfig) -> Result<()> {
    println!("Configuration:\n");
    println!("API_BASE_URL:     {}", config.api_base_url);
    println!("Admin endpoint:   {}", config.admin_data_url());
    println!("API_TIMEOUT_SECS: {}", config.timeout.as_secs());
    println!("MEMBERS_POLICY:   {}", config.members_policy);
    Ok(())
}
