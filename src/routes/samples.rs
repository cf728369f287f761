use axum::{http::StatusCode, Json};
use tracing::debug;

use crate::models::sample::{self, Sample};

pub async fn list() -> (StatusCode, Json<&'static [Sample]>) {
    let samples = sample::all();
    debug!(count = samples.len(), "Listing samples");
    (StatusCode::OK, Json(samples))
}
