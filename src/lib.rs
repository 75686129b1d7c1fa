//! Regional grid consumption dashboard backed by synthetic data.
//!
//! The [`generator`] module produces consumption series, the energy mix,
//! procurement scenarios and district data; [`service`] serves them through
//! an asynchronous, latency-simulating data service.

#[cfg(feature = "api")]
pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod forecast;
pub mod generator;
pub mod io;
pub mod service;
