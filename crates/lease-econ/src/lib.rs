#![deny(warnings)]

//! Financial projection engine for leasehold business deals.
//!
//! This crate turns validated deal terms into a year-by-year cash-flow
//! trajectory and summary investment metrics:
//! - Rent escalation by contract year
//! - Yearly income/expense projection with seeded, uniform-band noise
//! - Break-even detection, ROI and payback summaries
//! - Repeated resampling to compare outcomes across random draws

pub mod engine;
pub mod error;
pub mod metrics;
pub mod rent;
pub mod report;
pub mod resample;
pub mod sampling;
pub mod step;

pub use engine::{project, RawProjection};
pub use error::ProjectionError;
pub use metrics::summarize;
pub use rent::{escalated_rent, rent_multiplier};
pub use report::{PaybackPeriod, ProjectionResult};
pub use resample::{resample, ResampleSummary};
pub use sampling::{entropy_rng, seeded_rng, variation_factor, RandomSource};
pub use step::project_year;
