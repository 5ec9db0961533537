//! An HTTP service that registers users by name and logs them in by
//! position.

mod error;
mod handlers;
mod state;
mod users;

use crate::state::State;
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use roster_core::api::{login, register, version};
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{compression, limit, timeout, trace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
struct Config {
    #[clap(long, env, default_value = "127.0.0.1:3000")]
    address: String,

    /// Request body size limit, in bytes
    #[clap(long, env, default_value = "5242880")]
    body_limit: usize,

    /// Request timeout, in seconds
    #[clap(long, env, default_value = "5", value_parser = duration_parser)]
    request_timeout: Duration,
}

fn duration_parser(s: &str) -> Result<Duration, std::num::ParseIntError> {
    s.parse().map(Duration::from_secs)
}

/// All the service's routes, with their shared state attached.
fn app(state: State) -> Router {
    Router::new()
        .route(version::PATH, get(handlers::version::handler))
        .route(register::PATH, post(handlers::register::handler))
        .route(login::PATH, post(handlers::login::handler))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let options = Config::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = app(State::default())
        .layer(trace::TraceLayer::new_for_http())
        .layer(compression::CompressionLayer::new())
        .layer(limit::RequestBodyLimitLayer::new(options.body_limit))
        .layer(timeout::TimeoutLayer::new(options.request_timeout));

    let listener = TcpListener::bind(options.address).await.unwrap();
    tracing::info!(address = ?listener.local_addr(), "listening");

    axum::serve(listener, app).await.unwrap();
}
