//! Natural-language trip planning server.
//!
//! Accepts a free-text query ("trains from Delhi to Mumbai tomorrow
//! morning"), extracts structured intent with a language model, resolves
//! cities to station codes, searches a rail data provider, filters by
//! preference, and asks the model for a human-readable recommendation.

pub mod ai;
pub mod cache;
pub mod config;
pub mod domain;
pub mod orchestrator;
pub mod rail;
pub mod stations;
pub mod web;
pub mod workflow;
