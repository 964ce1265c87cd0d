//! Recruiting back-office core: the job qualification model and the candidate
//! intake pipeline, plus the service plumbing (configuration, telemetry, and
//! top-level error handling) shared by the deployable surfaces.

pub mod config;
pub mod error;
pub mod recruiting;
pub mod telemetry;
