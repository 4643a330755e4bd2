//! HacknPlan → Discord Bridge
//!
//! Receives HacknPlan webhook events and relays a reformatted notification
//! into a Discord channel through an incoming webhook.

pub mod api;
pub mod config;
pub mod relay;
