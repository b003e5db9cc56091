//! # Full Chatbot Handlers
//!
//! File: cli/src/server/handlers/full.rs
//!
//! Handlers for the programming-help API. Every success body carries
//! `status: "success"` and, except for the history and suggestion listings,
//! a `timestamp`.
//!
use crate::responder::chatbot::{Chatbot, Responder};
use crate::responder::lexicon::SUGGESTIONS;
use crate::server::envelope::{ApiResult, Body};
use crate::server::state::{timestamp, SharedState};
use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

type FullState = State<SharedState<Chatbot>>;

pub async fn health() -> ApiResult {
    Ok(Json(json!({
        "status": "success",
        "message": "Chatbot API is running",
        "timestamp": timestamp(),
    })))
}

pub async fn chat(State(state): FullState, body: Bytes) -> ApiResult {
    let message = Body::parse(&body).required_non_empty("message")?;
    let reply = state.bot.reply(&message);
    state.log.append(message.as_str(), reply.as_str());

    Ok(Json(json!({
        "status": "success",
        "user_message": message,
        "bot_response": reply,
        "timestamp": timestamp(),
    })))
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    limit: Option<String>,
}

pub async fn history(
    State(state): FullState,
    query: Result<Query<HistoryParams>, QueryRejection>,
) -> ApiResult {
    let Query(params) = query?;
    // Unparsable limits fall back to the configured default.
    let limit = params
        .limit
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .unwrap_or(state.history_limit);
    let (entries, total) = state.log.recent(limit);

    Ok(Json(json!({
        "status": "success",
        "history": entries,
        "total": total,
    })))
}

pub async fn clear(State(state): FullState) -> ApiResult {
    state.log.clear();
    info!("Conversation history cleared");
    Ok(Json(json!({
        "status": "success",
        "message": "Conversation history cleared",
    })))
}

pub async fn suggestions() -> ApiResult {
    Ok(Json(json!({
        "status": "success",
        "suggestions": SUGGESTIONS,
    })))
}

pub async fn chatbot_info(State(state): FullState) -> ApiResult {
    Ok(Json(json!({
        "status": "success",
        "info": state.bot.info(),
        "timestamp": timestamp(),
    })))
}

pub async fn solve_problem(State(state): FullState, body: Bytes) -> ApiResult {
    let body = Body::parse(&body);
    let problem = body.required_non_empty("problem")?;
    let solution = state.bot.solver().solve(&problem, body.text("domain"));

    Ok(Json(json!({
        "status": "success",
        "problem": problem,
        "solution": solution,
        "timestamp": timestamp(),
    })))
}

pub async fn analyze_code(State(state): FullState, body: Bytes) -> ApiResult {
    let code = Body::parse(&body).required_non_empty("code")?;
    let analyzer = state.bot.analyzer();
    let issues = analyzer.analyze(&code);

    Ok(Json(json!({
        "status": "success",
        "report": analyzer.format_report(&issues),
        "suggestions": analyzer.suggestions(&code),
        "issues": issues,
        "timestamp": timestamp(),
    })))
}

pub async fn learning_resources(State(state): FullState) -> ApiResult {
    Ok(Json(json!({
        "status": "success",
        "resources": state.bot.learning().list_all(),
        "timestamp": timestamp(),
    })))
}

/// An empty goal is accepted and selects the first learning path.
pub async fn learning_path(State(state): FullState, body: Bytes) -> ApiResult {
    let goal = Body::parse(&body).required("goal")?;
    let path = state.bot.learning().path(&goal);

    Ok(Json(json!({
        "status": "success",
        "goal": goal,
        "learning_path": path,
        "timestamp": timestamp(),
    })))
}

pub async fn code_example(State(state): FullState, body: Bytes) -> ApiResult {
    let topic = Body::parse(&body).required("topic")?;
    let example = state.bot.solver().code_example(&topic);

    Ok(Json(json!({
        "status": "success",
        "topic": topic,
        "example": example,
        "timestamp": timestamp(),
    })))
}

pub async fn stats(State(state): FullState) -> ApiResult {
    Ok(Json(json!({
        "status": "success",
        "stats": state.bot.stats(),
        "timestamp": timestamp(),
    })))
}
