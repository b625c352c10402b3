//! City resolution and station name search.
//!
//! [`CityResolver`] is the in-process lookup the workflow depends on;
//! [`StationSearchClient`] backs the direct station-search endpoint.

mod client;
mod error;
mod resolver;

pub use client::{StationClientConfig, StationMatch, StationSearchClient, StationSearchEnvelope};
pub use error::StationError;
pub use resolver::CityResolver;
