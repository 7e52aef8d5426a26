//! Request handlers.
//!
//! Body validation is left to the `Json` extractor: a `budget` or `tax`
//! that is not a JSON number is rejected with 422 before the estimator
//! runs. Categorical fields are accepted as any string.

use axum::Json;
use forecast_core::{PredictionResponse, ProjectRequest};
use tracing::info;

/// `POST /predict`
pub async fn predict(Json(request): Json<ProjectRequest>) -> Json<PredictionResponse> {
    info!(?request, "received input");
    let result = request.estimate();
    info!(?result, "prediction result");
    Json(result.into())
}
