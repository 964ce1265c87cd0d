//! Candidate intake pipeline: the externally reachable gateway that accepts a
//! completed interview from the automation system and writes a durable,
//! auditable candidate record.

pub mod domain;
pub mod payload;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Candidate, CandidateId, IntakeReceipt};
pub use payload::InterviewAnswers;
pub use repository::CandidateRepository;
pub use router::intake_router;
pub use service::{IntakeError, IntakeService};
