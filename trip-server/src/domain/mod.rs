//! Domain types for the trip planning server.
//!
//! This module contains the core domain model types that represent
//! validated travel data. Parsed types enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod intent;
mod itinerary;
mod preference;
mod station;

pub use intent::TravelIntent;
pub use itinerary::{ClassAvailability, EndpointSummary, Itinerary, QuotaAvailability};
pub use preference::{BudgetPreference, TimePreference};
pub use station::{InvalidStationCode, StationCode};
