//! License resolution core
//!
//! - `domain`: the license value object, the SPDX catalog, the resolution
//!   outcome and the repository-host cache
//! - `recognizers`: per-host URL rules, applied in a fixed order
//! - `services`: redirect following and license text retrieval
pub mod domain;
pub mod recognizers;
pub mod services;
