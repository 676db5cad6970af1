//! Axum route handlers for the opening-sentence API.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::{extract_json, LlmError, ModelId};
use crate::opening::prompts::{
    build_generate_prompt, build_grade_prompt, PromptStrategy, SYSTEM_PROMPT,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GradeRequest {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub sentence: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

fn require_trimmed(field: Option<&str>, message: &str) -> Result<String, AppError> {
    field
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation(message.to_string()))
}

/// POST /api/generate
///
/// Builds the few-shot generate prompt for the topic, runs one completion,
/// and forwards the extracted JSON as-is.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<Value>, AppError> {
    let topic = require_trimmed(request.topic.as_deref(), "Please provide a story topic.")?;
    let model = ModelId::resolve(request.model.as_deref());

    let prompt = build_generate_prompt(&topic, PromptStrategy::default());
    let text = state.llm.complete(model, SYSTEM_PROMPT, &prompt).await?;
    let parsed = extract_json(&text).map_err(LlmError::Parse)?;

    Ok(Json(parsed))
}

/// POST /api/grade
///
/// Grades the user's opening sentence against the rubric. Topic is checked
/// before the sentence; both must be non-blank.
pub async fn handle_grade(
    State(state): State<AppState>,
    Json(request): Json<GradeRequest>,
) -> Result<Json<Value>, AppError> {
    let topic = require_trimmed(request.topic.as_deref(), "Please provide a story topic.")?;
    let sentence = require_trimmed(
        request.sentence.as_deref(),
        "Please provide your opening sentence.",
    )?;
    let model = ModelId::resolve(request.model.as_deref());

    let prompt = build_grade_prompt(&topic, &sentence);
    let text = state.llm.complete(model, SYSTEM_PROMPT, &prompt).await?;
    let parsed = extract_json(&text).map_err(LlmError::Parse)?;

    Ok(Json(parsed))
}
