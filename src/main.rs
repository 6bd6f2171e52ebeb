//! Distribution Sequence CLI
//!
//! Generates sample sequences from the command line, lists the supported
//! distributions, and (with the `server` feature) runs the HTTP transport.

use clap::{Parser, Subcommand};
use distribution_sequence::{sampler::Distribution, FileConfig, SampleRequest, SequenceService};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "distribution-sequence", version, about)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one sequence and print it as JSON.
    Generate {
        /// Number of samples.
        #[arg(long, allow_hyphen_values = true)]
        count: i64,
        /// Random source type: general or secure.
        #[arg(long = "type", default_value = "general")]
        source_type: String,
        /// Distribution name.
        #[arg(long)]
        distribution: String,
        /// First distribution parameter.
        #[arg(long, allow_hyphen_values = true)]
        param1: Option<f64>,
        /// Second distribution parameter.
        #[arg(long, allow_hyphen_values = true)]
        param2: Option<f64>,
    },
    /// List supported distributions and their defaults.
    Distributions,
    /// Serve sequences over HTTP.
    #[cfg(feature = "server")]
    Serve {
        /// Port to listen on (overrides the config file).
        #[arg(long)]
        port: Option<u16>,
    },
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("Distribution Sequence v{}", distribution_sequence::VERSION);

    let config = match &cli.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };

    match cli.command {
        Command::Generate {
            count,
            source_type,
            distribution,
            param1,
            param2,
        } => {
            let service = SequenceService::new(&config.service);
            let request = SampleRequest::new(count, source_type, distribution, param1, param2);

            match service.generate(&request) {
                Ok(response) => match serde_json::to_string(&response) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to encode response: {}", e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    eprintln!("Error ({:?}): {}", e.class(), e.public_message());
                    std::process::exit(if e.is_client_error() { 2 } else { 1 });
                }
            }
        }
        Command::Distributions => {
            let service = SequenceService::new(&config.service);
            for distribution in service.registry().supported() {
                print_distribution(*distribution);
            }
        }
        #[cfg(feature = "server")]
        Command::Serve { port } => serve(config, port),
    }
}

fn print_distribution(distribution: Distribution) {
    let (first, second) = distribution.parameters();
    let second = second
        .map(|p| format!(", {}={}", p.name, p.default))
        .unwrap_or_default();
    println!(
        "{:<12} {}={}{}",
        distribution.name(),
        first.name,
        first.default,
        second
    );
}

#[cfg(feature = "server")]
fn serve(config: FileConfig, port: Option<u16>) {
    use distribution_sequence::metrics::MetricsRegistry;
    use distribution_sequence::server::{AppState, SequenceServer};
    use distribution_sequence::ServerConfig;

    let server_config = port.map(ServerConfig::with_port).unwrap_or(config.server);
    let metrics = match MetricsRegistry::new() {
        Ok(metrics) => metrics,
        Err(e) => {
            eprintln!("Failed to create metrics registry: {}", e);
            std::process::exit(1);
        }
    };
    let state = AppState::new(SequenceService::new(&config.service), metrics);

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(SequenceServer::new(server_config, state).run()) {
        eprintln!("Server failed: {}", e);
        std::process::exit(1);
    }
}
