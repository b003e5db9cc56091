//! # Simple Chatbot Handlers
//!
//! File: cli/src/server/handlers/simple.rs
//!
//! The small API: chat, help, jokes, math, and dictionary lookups. Bodies are
//! terse (`{status, user, bot}`) and carry no timestamps.
//!
use crate::core::error::CodepalError;
use crate::responder::chatbot::{Responder, SimpleChatbot};
use crate::server::envelope::{ApiError, ApiResult, Body};
use crate::server::state::SharedState;
use axum::{body::Bytes, extract::State, Json};
use serde_json::json;

type SimpleState = State<SharedState<SimpleChatbot>>;

pub async fn chat(State(state): SimpleState, body: Bytes) -> ApiResult {
    let body = Body::parse(&body);
    let message = body
        .text("message")
        .map(str::trim)
        .ok_or_else(|| ApiError::BadRequest("Message required".to_string()))?;
    if message.is_empty() {
        return Err(CodepalError::EmptyField { field: "message" }.into());
    }

    let reply = state.bot.reply(message);
    state.log.append(message, reply.as_str());

    Ok(Json(json!({
        "status": "success",
        "user": message,
        "bot": reply,
    })))
}

pub async fn help(State(state): SimpleState) -> ApiResult {
    Ok(Json(json!({
        "status": "success",
        "help": state.bot.help(),
    })))
}

pub async fn joke(State(state): SimpleState) -> ApiResult {
    Ok(Json(json!({
        "status": "success",
        "joke": state.bot.joke(),
    })))
}

/// A missing `problem` is solved as empty text, which yields the usage hint.
pub async fn math(State(state): SimpleState, body: Bytes) -> ApiResult {
    let body = Body::parse(&body);
    let problem = body.text("problem").unwrap_or_default();
    Ok(Json(json!({
        "status": "success",
        "result": state.bot.math(problem),
    })))
}

pub async fn dictionary(State(state): SimpleState, body: Bytes) -> ApiResult {
    let body = Body::parse(&body);
    let word = body.text("word").unwrap_or_default();
    Ok(Json(json!({
        "status": "success",
        "result": state.bot.define(&format!("definition of {}", word)),
    })))
}

pub async fn history(State(state): SimpleState) -> ApiResult {
    let (entries, _) = state.log.recent(state.history_limit);
    Ok(Json(json!({
        "status": "success",
        "history": entries,
    })))
}

pub async fn clear(State(state): SimpleState) -> ApiResult {
    state.log.clear();
    Ok(Json(json!({
        "status": "success",
        "message": "History cleared",
    })))
}
