//! Nationality-prediction upstream integration.
//!
//! # Responsibilities
//! - Build the upstream query URL from a client-supplied name
//! - Issue the GET with an explicit deadline
//! - Decode the response into typed predictions
//! - Surface transport, status, and decode failures as typed errors

pub mod client;
pub mod types;

pub use client::NationalityClient;
pub use types::{CountryPrediction, NameLookupResult, NameRequest, NationalityError};
