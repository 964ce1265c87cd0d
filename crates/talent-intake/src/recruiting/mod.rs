//! Recruiting back-office domain: job posting management with qualification
//! authoring, and the intake pipeline that turns automation submissions into
//! durable candidate records.

pub mod intake;
pub mod postings;
