//! HacknPlan Event Relay
//!
//! Receives HacknPlan webhook events, maps them to human-readable Discord
//! messages and forwards them to a configured incoming webhook.

pub mod discord;
pub mod error;
pub mod event;
pub mod handlers;
pub mod message;
