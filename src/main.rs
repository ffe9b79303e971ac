//! AlgoBench - Application Entry Point
//!
//! Runs benchmarks from the command line or serves the web front end.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use algobench::{
    AppError, AppResult, AppState, Config,
    benchmark::{ProblemRegistry, TrackingAllocator},
    handlers, report,
};

#[global_allocator]
static ALLOC: TrackingAllocator = TrackingAllocator;

/// AlgoBench CLI
#[derive(Parser, Debug)]
#[command(name = "algobench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Subcommand to run (defaults to `serve`)
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve,

    /// Run benchmarks and print styled reports
    Run {
        /// Problem ids to run, in order
        #[arg(required_unless_present = "all")]
        ids: Vec<String>,

        /// Run every registered problem
        #[arg(long, conflicts_with = "ids")]
        all: bool,

        /// Also write `<id>.html` result pages into this directory
        #[arg(long, value_name = "DIR")]
        html: Option<PathBuf>,
    },

    /// List registered problems
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env().map_err(AppError::from)?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await.map(|_| ExitCode::SUCCESS),
        Commands::Run { ids, all, html } => run(config, ids, all, html).await,
        Commands::List => {
            list(config);
            Ok(ExitCode::SUCCESS)
        }
    };

    Ok(code?)
}

async fn serve(config: Config) -> AppResult<()> {
    tracing::info!("Starting AlgoBench server...");

    let host: IpAddr = config.server.host.parse().map_err(|_| {
        AppError::Configuration(format!("invalid SERVER_HOST: {}", config.server.host))
    })?;
    let addr = SocketAddr::new(host, config.server.port);

    let state = AppState::new(config);

    // Build the router
    let app = handlers::app(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start the server
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn run(
    config: Config,
    ids: Vec<String>,
    all: bool,
    html: Option<PathBuf>,
) -> AppResult<ExitCode> {
    let registry = ProblemRegistry::new(config.benchmark);

    let ids: Vec<String> = if all {
        registry.ids().into_iter().map(str::to_string).collect()
    } else {
        ids
    };

    // Reject unknown ids before running anything
    for id in &ids {
        if let Err(e) = registry.resolve(id) {
            eprintln!("error: {e}");
            eprintln!("available problems: {}", registry.ids().join(", "));
            return Ok(ExitCode::from(2));
        }
    }

    for id in ids {
        let registry = registry.clone();
        let summary = tokio::task::spawn_blocking(move || registry.run(&id)).await??;

        println!("{}", report::render_terminal(&summary));

        if let Some(dir) = &html {
            report::write_results_page(dir, &summary)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn list(config: Config) {
    let registry = ProblemRegistry::new(config.benchmark);
    for problem in registry.problems() {
        println!("{:<12} {}", problem.id, problem.display_name());
    }

    let config = registry.config();
    println!(
        "\nbatches: reverse {}, substring {}, fairPairs {} random + {} large",
        config.reverse_test_count,
        config.substring_test_count,
        config.fair_pairs_random_count,
        config.fair_pairs_large_count
    );
}
