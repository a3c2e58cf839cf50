//! Facility Sim - Highway Smart-Toilet Fleet Simulator Binary
//!
//! Serves the simulated facility API, or prints a generated fleet and exits.

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use facility_sim::{
    start_web_server, Facility, FacilityGenerator, WebConfig, DEFAULT_ANALYSIS_DELAY_MS,
    DEFAULT_FACILITY_COUNT, DEFAULT_WEB_PORT,
};
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "facility_sim")]
#[command(about = "🚻 Facility Sim - Highway Smart-Toilet Fleet Simulator")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = "A mock HTTP API serving simulated smart-toilet sensor data")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Web server bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Web server port
    #[arg(short, long, default_value_t = DEFAULT_WEB_PORT)]
    port: u16,

    /// Number of facilities to generate
    #[arg(short, long, default_value_t = DEFAULT_FACILITY_COUNT)]
    facilities: usize,

    /// Seed for reproducible sensor data
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server (default)
    Serve(ServeArgs),

    /// Generate a fleet, print it and exit
    Snapshot(SnapshotArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// Disable CORS headers
    #[arg(long)]
    no_cors: bool,

    /// Simulated image analysis latency in milliseconds
    #[arg(long, default_value_t = DEFAULT_ANALYSIS_DELAY_MS)]
    analysis_delay_ms: u64,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            no_cors: false,
            analysis_delay_ms: DEFAULT_ANALYSIS_DELAY_MS,
        }
    }
}

#[derive(Args)]
struct SnapshotArgs {
    /// Output format: json or pretty
    #[arg(short = 'o', long, default_value = "pretty")]
    format: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    init_logging(&cli)?;

    match &cli.command {
        Some(Commands::Serve(args)) => serve_command(&cli, args).await?,
        Some(Commands::Snapshot(args)) => snapshot_command(&cli, args)?,
        // Default to serve command
        None => serve_command(&cli, &ServeArgs::default()).await?,
    }

    Ok(())
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    Ok(())
}

fn build_config(cli: &Cli, args: &ServeArgs) -> WebConfig {
    WebConfig::new(&cli.host, cli.port)
        .with_cors(!args.no_cors)
        .with_facility_count(cli.facilities)
        .with_seed(cli.seed)
        .with_analysis_delay_ms(args.analysis_delay_ms)
}

fn print_banner(config: &WebConfig) {
    let base = format!("http://localhost:{}", config.port);
    println!("🚀 NHAI API Server running on {}", base);
    println!("📊 Analytics: {}/api/analytics", base);
    println!("🏢 Facilities: {}/api/facilities", base);
    println!();
}

async fn serve_command(cli: &Cli, args: &ServeArgs) -> anyhow::Result<()> {
    let config = build_config(cli, args);

    info!("Web server configuration:");
    info!("  - Bind address: {}", config.bind_address());
    info!("  - CORS enabled: {}", config.enable_cors);
    info!("  - Facilities: {}", config.facility_count);
    info!("  - Analysis delay: {}ms", config.analysis_delay_ms);

    print_banner(&config);
    start_web_server(config).await?;

    Ok(())
}

fn snapshot_command(cli: &Cli, args: &SnapshotArgs) -> anyhow::Result<()> {
    let mut generator = match cli.seed {
        Some(seed) => FacilityGenerator::with_seed(seed),
        None => FacilityGenerator::new(),
    };
    let fleet = generator.generate_fleet(cli.facilities);

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&fleet)?),
        "pretty" => print_pretty_fleet(&fleet),
        other => bail!("Unsupported format: {}. Use 'json' or 'pretty'", other),
    }

    Ok(())
}

fn print_pretty_fleet(fleet: &[Facility]) {
    println!("🚻 Facility Snapshot ({} facilities)", fleet.len());
    println!("==========================================");
    println!();

    for facility in fleet {
        println!("{} - {} [{}]", facility.id, facility.location, facility.status);
        println!(
            "  Cleanliness: {}/10  Usage: {}  Water: {}%  Air: {}  Temp: {}°C",
            facility.sensors.cleanliness_score,
            facility.sensors.usage,
            facility.sensors.water_level,
            facility.sensors.air_quality,
            facility.sensors.temperature
        );
        println!(
            "  Rating: {}  Daily users: {}",
            facility.user_rating, facility.daily_users
        );
        if !facility.alerts.is_empty() {
            println!("  ⚠️  {}", facility.alerts.join(", "));
        }
    }
}
