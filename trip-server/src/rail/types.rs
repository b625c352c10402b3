//! Rail provider response DTOs.
//!
//! These types map to the search provider's JSON responses. Two response
//! revisions are in circulation: a nested envelope carrying
//! `data.trainList` with per-class availability maps, and an older flat
//! `trains` list with `from_std`/`to_std` time fields. Both deserialize
//! into [`SearchEnvelope`]. Fields use `Option` liberally because the
//! provider omits fields rather than sending nulls.

use std::collections::HashMap;

use serde::Deserialize;

/// Top-level search response, accepting both provider revisions.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchEnvelope {
    /// Nested revision: `data.trainList`.
    pub data: Option<SearchData>,

    /// Flat revision: a bare train list.
    pub trains: Option<Vec<FlatTrain>>,
}

/// Payload of the nested response revision.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchData {
    #[serde(default)]
    pub train_list: Vec<TrainDto>,
}

/// One train in the nested response revision.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainDto {
    pub train_number: Option<String>,
    pub train_name: Option<String>,

    pub from_stn_code: Option<String>,
    pub from_stn_name: Option<String>,
    pub from_city_name: Option<String>,

    pub to_stn_code: Option<String>,
    pub to_stn_name: Option<String>,
    pub to_city_name: Option<String>,

    pub departure_time: Option<String>,
    pub departure_date: Option<String>,
    pub arrival_time: Option<String>,

    /// Journey duration in minutes.
    pub duration: Option<u32>,

    /// Route distance in kilometres.
    pub distance: Option<u32>,

    /// Service classes offered on this train.
    #[serde(default)]
    pub avl_classes: Vec<String>,

    /// General-quota availability, keyed by class code.
    #[serde(default)]
    pub availability_cache: HashMap<String, QuotaDto>,

    /// Tatkal-quota availability, keyed by class code.
    #[serde(default)]
    pub availability_cache_tatkal: HashMap<String, QuotaDto>,

    pub running_days: Option<String>,

    #[serde(default)]
    pub has_pantry: bool,

    pub train_rating: Option<f64>,
}

/// Cached availability for one class quota.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaDto {
    pub availability: Option<String>,
    pub fare: Option<String>,
    pub prediction: Option<String>,
    pub prediction_percentage: Option<f64>,
}

/// One train in the flat response revision.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlatTrain {
    pub train_number: Option<String>,
    pub train_name: Option<String>,

    /// Scheduled departure time ("HH:MM").
    pub from_std: Option<String>,

    /// Scheduled arrival time ("HH:MM").
    pub to_std: Option<String>,

    pub from_station_code: Option<String>,
    pub to_station_code: Option<String>,

    /// Journey duration in minutes.
    pub duration: Option<u32>,
}
