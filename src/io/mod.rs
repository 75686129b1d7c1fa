//! File output for consumption series.

pub mod export;
