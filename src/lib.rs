pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;

use axum::{routing::get, Router};
use lambda_http::{run, Error};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::{Config, ServeMode};
use crate::error::AppError;
use crate::routes::samples;

pub fn create_app() -> Router {
    Router::new().route("/samples", get(samples::list))
}

pub async fn run_app(config: Config) -> Result<(), Error> {
    let app = create_app();

    match config.serve_mode {
        ServeMode::Lambda => {
            info!(environment = %config.environment, "Starting Lambda runtime");
            run(app).await
        }
        ServeMode::Local => {
            let listener = TcpListener::bind((config.host.as_str(), config.port))
                .await
                .map_err(AppError::from)?;
            info!(
                environment = %config.environment,
                "Listening on http://{}:{}",
                config.host,
                config.port
            );
            axum::serve(listener, app).await.map_err(AppError::from)?;
            Ok(())
        }
    }
}
