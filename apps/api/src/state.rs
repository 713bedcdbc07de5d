use std::sync::Arc;

use crate::config::Config;
use crate::normalize::address::AddressParser;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable address-grammar backend used by the location normalizer.
    /// Default: `UsAddressParser`. Swap at startup without touching handlers.
    pub address_parser: Arc<dyn AddressParser>,
}
