use std::net::SocketAddr;
use std::process::ExitCode;

use tracing::{error, info};

use roadtrip_server::network::sample::us_network;
use roadtrip_server::planner::PlannerConfig;
use roadtrip_server::web::{AppState, create_router};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Problem with the server's environment configuration.
#[derive(Debug, thiserror::Error)]
enum ConfigError {
    #[error("ROADTRIP_ADDR is not a socket address: {0}")]
    Addr(String),

    #[error("ROADTRIP_MAX_WAYPOINTS is not a number: {0}")]
    MaxWaypoints(String),
}

/// Settings read from the environment.
#[derive(Debug)]
struct ServerConfig {
    addr: SocketAddr,
    planner: PlannerConfig,
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let addr = std::env::var("ROADTRIP_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let addr = addr.parse().map_err(|_| ConfigError::Addr(addr))?;

        let mut planner = PlannerConfig::default();
        if let Ok(max) = std::env::var("ROADTRIP_MAX_WAYPOINTS") {
            planner.max_waypoints = max.parse().map_err(|_| ConfigError::MaxWaypoints(max))?;
        }

        Ok(Self { addr, planner })
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let network = us_network();
    info!(
        cities = network.len(),
        roads = network.road_count(),
        attractions = network.attraction_count(),
        "Loaded road network"
    );

    let state = AppState::new(network, config.planner);
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, "Failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Road trip planner listening on http://{}", config.addr);
    info!("  GET  /health                   - Health check");
    info!("  GET  /api/cities               - All cities");
    info!("  GET  /api/attractions          - All attractions");
    info!("  GET  /api/cities/search        - Search cities");
    info!("  GET  /api/attractions/search   - Search attractions");
    info!("  GET  /api/resolve/city         - Resolve a city name");
    info!("  GET  /api/resolve/attraction   - Resolve an attraction name");
    info!("  POST /route/plan               - Plan a route");

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
