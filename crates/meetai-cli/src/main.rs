use anyhow::Result;
use clap::{Parser, Subcommand};
use meetai_infrastructure::ConfigService;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "meetai")]
#[command(about = "Meet.AI CLI - inspect list filters and meeting render states", long_about = None)]
struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode, edit and re-encode a list filter query string
    Filter {
        #[command(subcommand)]
        list: FilterList,
    },
    /// Resolve the render state of a meeting status (all statuses if omitted)
    Status {
        status: Option<String>,
        #[arg(long, default_value = "meeting")]
        id: String,
    },
    /// Print the effective configuration
    Config,
}

#[derive(Subcommand)]
enum FilterList {
    /// Agents list filter (search, page)
    Agents {
        /// Current query string, e.g. "?search=tutor&page=2"
        #[arg(default_value = "")]
        query: String,
        #[arg(long)]
        clear: bool,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        page: Option<u32>,
    },
    /// Meetings list filter (search, page, status, agentId)
    Meetings {
        #[arg(default_value = "")]
        query: String,
        #[arg(long)]
        clear: bool,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long, conflicts_with = "any_status")]
        status: Option<String>,
        /// Unset the status filter
        #[arg(long)]
        any_status: bool,
        #[arg(long)]
        agent_id: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    let config = service.get_config()?;
    let page_size = config.pagination.page_size();

    match cli.command {
        Commands::Filter { list } => match list {
            FilterList::Agents {
                query,
                clear,
                search,
                page,
            } => commands::filter::agents(
                &query,
                page_size,
                commands::filter::AgentsEdit { clear, search, page },
            )?,
            FilterList::Meetings {
                query,
                clear,
                search,
                page,
                status,
                any_status,
                agent_id,
            } => commands::filter::meetings(
                &query,
                page_size,
                commands::filter::MeetingsEdit {
                    clear,
                    search,
                    page,
                    status,
                    any_status,
                    agent_id,
                },
            )?,
        },
        Commands::Status { status, id } => commands::status::resolve(status.as_deref(), &id)?,
        Commands::Config => commands::config::show(&service, &config)?,
    }

    Ok(())
}
