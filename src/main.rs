//! CLI entry point for portfolio-viewer
//!
//! Provides command-line interface for printing portfolio sections,
//! checking backend health, and launching the GUI.

use clap::{Parser, Subcommand};
use colored::*;
use portfolio_viewer::api::{self, PortfolioSource};
use portfolio_viewer::config::AppConfig;
use portfolio_viewer::core::{render::SectionView, LoadStatus, Section};
use portfolio_viewer::logging;
use portfolio_viewer::ui::{App, Controller};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Parser)]
#[command(name = "portfolio-viewer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: ~/.config/portfolio-viewer/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config file and PORTFOLIO_BACKEND_URL)
    #[arg(long, global = true)]
    backend_url: Option<String>,

    /// Use the built-in sample data instead of the backend
    #[arg(long, global = true)]
    mock: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the portfolio and print it
    Show {
        /// Only print this section (about, projects, skills, achievements, contact)
        #[arg(short, long)]
        section: Option<Section>,
    },

    /// Check backend health
    Health,

    /// Launch the GUI
    Gui,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = load_config(&cli)?;
    let source = api::source_from_config(&config, cli.mock)?;
    let runtime = Runtime::new()?;

    match cli.command {
        Commands::Show { section } => {
            if !cli.mock {
                eprintln!("{} Loading portfolio from {}", "→".cyan(), config.api_base());
            }
            show_portfolio(&runtime, &config, source, section)?
        }
        Commands::Health => check_health(&runtime, source.as_ref())?,
        Commands::Gui => {
            let app = App::new(config, source, runtime.handle().clone());
            let exit_code = app.run();
            if exit_code != gtk4::glib::ExitCode::SUCCESS {
                anyhow::bail!("GUI exited with an error");
            }
        }
    }

    Ok(())
}

/// Merges config file, environment and command-line flags
fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let config = AppConfig::load(cli.config.as_deref())?;

    let config = match &cli.backend_url {
        Some(url) => config.with_backend_url(url.clone()).validate()?,
        None => config,
    };

    Ok(config)
}

/// Load all resources and print one or every section
fn show_portfolio(
    runtime: &Runtime,
    config: &AppConfig,
    source: Arc<dyn PortfolioSource>,
    section: Option<Section>,
) -> anyhow::Result<()> {
    let controller = Controller::new(source).with_retry_policy(config.retry.clone());
    let status = runtime.block_on(controller.load())?;

    if status != LoadStatus::Loaded {
        let message = controller.user_message().unwrap_or("Unexpected state");
        eprintln!("{} {}", "✗".red().bold(), message.bold());
        if let Some(error) = controller.error() {
            eprintln!("  {}", error.to_string().dimmed());
        }
        eprintln!("\nRun the command again to retry.");
        std::process::exit(1);
    }

    let sections: Vec<Section> = match section {
        Some(section) => vec![section],
        None => Section::ALL.to_vec(),
    };

    for section in sections {
        if let Some(view) = controller.section_view(section) {
            print_section(&view);
        }
    }

    Ok(())
}

/// Print one rendered section
fn print_section(view: &SectionView) {
    println!("{}", format!("══ {} ══", view.title).bold());

    for block in &view.blocks {
        if let Some(title) = &block.title {
            println!("\n{}", title.yellow().bold());
        }

        for entry in &block.entries {
            match &entry.subheading {
                Some(sub) => println!(
                    "\n{} {}",
                    entry.heading.cyan().bold(),
                    format!("({})", sub).dimmed()
                ),
                None => println!("\n{}", entry.heading.cyan().bold()),
            }

            if let Some(body) = &entry.body {
                println!("  {}", body);
            }

            for bullet in &entry.bullets {
                println!("  {} {}", "•".green(), bullet);
            }

            if !entry.tags.is_empty() {
                println!("  {}", entry.tags.join(" · ").magenta());
            }
        }
    }

    if view.entry_count() == 0 {
        println!("  {}", "(nothing to show)".dimmed());
    }

    println!();
}

/// Query the backend liveness endpoint
fn check_health(runtime: &Runtime, source: &dyn PortfolioSource) -> anyhow::Result<()> {
    match runtime.block_on(source.health_check()) {
        Ok(health) if health.is_healthy() => {
            println!(
                "{} Backend is {}{}",
                "✓".green().bold(),
                health.status.bold(),
                health
                    .message
                    .map(|m| format!(" - {}", m))
                    .unwrap_or_default()
            );
        }
        Ok(health) => {
            println!("{} Backend reports status '{}'", "⚠".yellow(), health.status);
            std::process::exit(1);
        }
        Err(e) => {
            println!("{} Backend unreachable: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }

    Ok(())
}
