//! Jobdesk: job listing management
//!
//! Main binary with subcommands:
//! - `serve`: Browser UI for listing, filtering, adding, editing and deleting jobs
//! - `jobs`: Print the (optionally filtered) job list
//! - `delete`: Delete one job after a yes/no prompt
//! - `health`: Check the backend

use clap::{Parser, Subcommand};
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jobdesk_api::{DEFAULT_BASE_URL, FilterState, JobType, JobsClient, SortOrder};
use jobdesk_core::{DeleteOutcome, DeleteStrategy, PreAnswered, PromptDelete};

mod terminal;

use terminal::TerminalConfirmation;

#[derive(Parser)]
#[command(name = "jobdesk")]
#[command(about = "Job listing management", long_about = None)]
struct Cli {
    /// Backend API base URL
    #[arg(long, global = true, env = "JOBDESK_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web UI server
    Serve {
        /// HTTP server port
        #[arg(long, env = "JOBDESK_PORT", default_value = "8080")]
        port: u16,

        /// Directory served under /static
        #[arg(long)]
        static_dir: Option<String>,
    },

    /// List jobs
    Jobs {
        /// Match against title or company
        #[arg(long)]
        search: Option<String>,

        /// Only this job type
        #[arg(long)]
        job_type: Option<JobType>,

        /// Only this location
        #[arg(long)]
        location: Option<String>,

        /// Only jobs carrying this tag
        #[arg(long)]
        tag: Option<String>,

        /// Sort order (posting_date_desc, posting_date_asc, title_asc, company_asc)
        #[arg(long, default_value = "posting_date_desc")]
        sort: SortOrder,
    },

    /// Delete a job
    Delete {
        /// Job id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Check whether the backend is reachable
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                "jobdesk=info,jobdesk_api=info,jobdesk_core=info,jobdesk_web=info".to_string()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let client = JobsClient::new(&cli.api_url);

    match cli.command {
        Commands::Serve { port, static_dir } => {
            run_web_server(client, port, static_dir.as_deref()).await
        }

        Commands::Jobs {
            search,
            job_type,
            location,
            tag,
            sort,
        } => {
            let filters = FilterState {
                search: search.unwrap_or_default(),
                job_type: job_type.map(|t| t.to_string()).unwrap_or_default(),
                location: location.unwrap_or_default(),
                tag: tag.unwrap_or_default(),
                sort: sort.to_string(),
            };
            list_jobs(&client, &filters).await
        }

        Commands::Delete { id, yes } => delete_job(&client, id, yes).await,

        Commands::Health => match client.health_check().await {
            Ok(()) => {
                println!("API: connected ({})", client.base_url());
                Ok(())
            }
            Err(e) => {
                println!("API: disconnected ({})", client.base_url());
                Err(miette::miette!("{}", e))
            }
        },
    }
}

async fn run_web_server(client: JobsClient, port: u16, static_dir: Option<&str>) -> Result<()> {
    tracing::info!(api = %client.base_url(), "using job API");

    let router = jobdesk_web::create_router(client, static_dir);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .map_err(|e| miette::miette!("{}", e))?;

    tracing::info!("web server listening on http://0.0.0.0:{}", port);

    axum::serve(listener, router)
        .await
        .map_err(|e| miette::miette!("{}", e))?;

    Ok(())
}

async fn list_jobs(client: &JobsClient, filters: &FilterState) -> Result<()> {
    let jobs = client
        .list_jobs(filters)
        .await
        .map_err(|e| miette::miette!("{}", e))?;

    if jobs.is_empty() {
        println!("No jobs found.");
        return Ok(());
    }

    println!("Job Listings ({})", jobs.len());
    for job in &jobs {
        println!(
            "{:>6}  {}  |  {}  |  {}  |  {}  |  Posted: {}",
            job.id,
            job.title,
            job.company,
            job.location,
            job.job_type,
            job.posted_label()
        );
        if !job.tags.is_empty() {
            println!("        tags: {}", job.tags.join(", "));
        }
    }
    Ok(())
}

async fn delete_job(client: &JobsClient, id: i64, yes: bool) -> Result<()> {
    let job = client
        .get_job(id)
        .await
        .map_err(|e| miette::miette!("{}", e))?;

    let outcome = if yes {
        PromptDelete::new(job, PreAnswered::new(true))
            .activate(client)
            .await
    } else {
        PromptDelete::new(job, TerminalConfirmation)
            .activate(client)
            .await
    };

    match outcome {
        DeleteOutcome::Deleted(id) => {
            println!("Deleted job {id}");
            Ok(())
        }
        DeleteOutcome::Cancelled => {
            println!("Cancelled");
            Ok(())
        }
        DeleteOutcome::Failed(message) => Err(miette::miette!("{}", message)),
        other => Err(miette::miette!("unexpected delete outcome: {:?}", other)),
    }
}
