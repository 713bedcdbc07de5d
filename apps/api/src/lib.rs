//! Resume intake normalization service.
//!
//! The core is a pure, synchronous pipeline ([`normalize::normalize_resume`])
//! that reduces messy resume input to one canonical form: E.164 phones,
//! first-of-month dates, deduplicated skill and URL lists, title-cased names.
//! A thin axum layer exposes it over HTTP; `intake-collect` gathers the same
//! payload shape from terminal prompts.

pub mod config;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod routes;
pub mod state;
