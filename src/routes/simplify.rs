use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::llm::GenerateRequest;
use crate::telemetry::metrics::SCROLLS_SIMPLIFIED;

const EMPTY_SCROLL_MESSAGE: &str = "Please provide a Scroll of Findings.";

#[derive(Debug, Deserialize)]
pub struct SimplifyBody {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SimplifyResponse {
    pub simplified_text: String,
}

/// POST /simplify — turns a medical report into plain language. The upstream
/// answer comes back verbatim with the disclaimer block prepended.
pub async fn simplify_report(
    State(state): State<AppState>,
    Json(body): Json<SimplifyBody>,
) -> AppResult<Json<SimplifyResponse>> {
    let text = body.text.unwrap_or_default();
    if text.is_empty() {
        return Err(AppError::Validation(EMPTY_SCROLL_MESSAGE.to_string()));
    }

    let request = GenerateRequest {
        model: state.config.llm_model.clone(),
        system: state.config.wizard_prompt.clone(),
        prompt: text,
        temperature: state.config.default_temperature as f32,
        max_tokens: state.config.default_max_tokens,
    };

    let response = state
        .llm_client
        .generate(&request)
        .await
        .map_err(|err| AppError::Upstream(err.to_string()))?;

    SCROLLS_SIMPLIFIED.add(1, &[]);

    tracing::info!(
        provider = %response.provider,
        model = %response.model,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        finish_reason = %response.finish_reason,
        "Scroll simplified"
    );

    Ok(Json(SimplifyResponse {
        simplified_text: format!("{}{}", state.config.disclaimer_html, response.content),
    }))
}
