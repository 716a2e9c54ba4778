use friender_match::config::Settings;
use friender_match::core::Matcher;
use friender_match::services::load_roster;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Rank the configured roster for the configured viewer and print the result as JSON
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // An explicit config path may be passed as the only argument
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            init_logging("info", "compact");
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);
    info!("Configuration loaded successfully");

    let weights = settings.scoring_weights();
    let matcher = Matcher::new(weights).map_err(|e| {
        error!("Invalid scoring weights: {}", e);
        e
    })?;

    info!("Matcher initialized with weights: {:?}", matcher.weights());

    let roster = load_roster(&settings.roster.path).map_err(|e| {
        error!("Failed to load roster: {}", e);
        e
    })?;

    info!("Loaded {} profiles from {}", roster.users.len(), settings.roster.path);

    let request = settings.ranking.to_request();
    let response = matcher.find_matches(&request, &roster.users).map_err(|e| {
        error!("Ranking failed for viewer {}: {}", request.viewer_id, e);
        e
    })?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

/// Initialize logging; `RUST_LOG` takes precedence over the configured level
fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}
