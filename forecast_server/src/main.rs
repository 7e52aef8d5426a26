//! # Gridcast API Server
//!
//! Serves `POST /predict` on `0.0.0.0:8000`, or on the socket handed over by
//! `systemfd` when running with auto-reload:
//!
//! `systemfd --no-pid -s http::8000 -- cargo watch -x "run -p forecast_server"`

use forecast_server::config::ServerConfig;
use forecast_server::{serve, telemetry};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();
    serve(ServerConfig::default()).await
}
