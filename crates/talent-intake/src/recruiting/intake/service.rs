use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde_json::value::RawValue;
use serde_json::Value;
use tracing::{info, warn};

use super::domain::{Candidate, CandidateId, IntakeReceipt};
use super::payload::InterviewAnswers;
use super::repository::{CandidateRepository, RepositoryError};
use crate::recruiting::postings::repository::PostingRepository;

/// Gateway turning a loosely-structured automation submission into a durable
/// candidate record. Posting resolution is read-only and tolerant: an
/// unmatched title never blocks ingestion.
pub struct IntakeService<C, P> {
    candidates: Arc<C>,
    postings: Arc<P>,
}

static CANDIDATE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_candidate_id() -> CandidateId {
    let id = CANDIDATE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    CandidateId(format!("cand-{id:06}"))
}

/// Verdict recorded when the automation does not hand one over; older
/// pipeline versions only ever submitted qualified candidates.
const DEFAULT_STATUS: &str = "qualificado";

impl<C, P> IntakeService<C, P>
where
    C: CandidateRepository + 'static,
    P: PostingRepository + 'static,
{
    pub fn new(candidates: Arc<C>, postings: Arc<P>) -> Self {
        Self {
            candidates,
            postings,
        }
    }

    /// Ingest one submission. Exactly one candidate row is written on
    /// success; nothing is written on any failure. Not idempotent: identical
    /// payloads produce distinct records.
    pub fn ingest(&self, raw_body: &str) -> Result<IntakeReceipt, IntakeError> {
        let body: Value = serde_json::from_str(raw_body).map_err(IntakeError::InvalidJson)?;

        let answers_value = body
            .get("respostas")
            .cloned()
            .ok_or(IntakeError::MissingAnswers)?;
        let answers: InterviewAnswers =
            serde_json::from_value(answers_value).map_err(IntakeError::InvalidAnswers)?;

        if !answers.has_required_fields() {
            return Err(IntakeError::MissingRequiredFields);
        }

        let posting = self
            .postings
            .find_by_title(&answers.job_title)
            .map_err(IntakeError::PostingLookup)?;
        if posting.is_none() {
            warn!(
                title = %answers.job_title,
                "no posting matched the submitted title; ingesting without a reference"
            );
        }

        let raw_payload =
            RawValue::from_string(raw_body.to_string()).map_err(IntakeError::InvalidJson)?;

        let candidate = Candidate {
            id: next_candidate_id(),
            name: answers.name.clone(),
            job_posting_id: posting.map(|matched| matched.id),
            job_title_snapshot: answers.job_title,
            experience_summary: answers.experience_summary,
            remote_interest: answers.remote_interest,
            final_feedback: answers.final_feedback,
            cultural_fit: answers.cultural_fit,
            custom_answers: answers.custom_answers,
            raw_payload,
            status: answers
                .status
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            created_at: Utc::now(),
        };

        let stored = self
            .candidates
            .insert(candidate)
            .map_err(IntakeError::InsertFailed)?;
        info!(candidate = %stored.id.0, posting = ?stored.job_posting_id, "candidate ingested");

        Ok(IntakeReceipt {
            success: true,
            message: format!("Candidato {} cadastrado com sucesso!", stored.name),
            candidate: stored,
        })
    }

    /// Read-only listing for the back-office dashboard, newest first.
    pub fn list(&self) -> Result<Vec<Candidate>, RepositoryError> {
        self.candidates.list()
    }
}

/// Error raised by the intake gateway. Messages keep the legacy endpoint's
/// wording; `reason` carries the stable machine code.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("Corpo da requisição não é JSON válido")]
    InvalidJson(#[source] serde_json::Error),
    #[error("Campo \"respostas\" é obrigatório")]
    MissingAnswers,
    #[error("Objeto \"respostas\" é inválido")]
    InvalidAnswers(#[source] serde_json::Error),
    #[error("Campos \"vaga\" e \"nome\" são obrigatórios")]
    MissingRequiredFields,
    #[error("Erro ao buscar vaga")]
    PostingLookup(#[source] RepositoryError),
    #[error("Erro ao inserir candidato")]
    InsertFailed(#[source] RepositoryError),
}

impl IntakeError {
    /// Stable machine-readable reason code.
    pub const fn reason(&self) -> &'static str {
        match self {
            IntakeError::InvalidJson(_) => "invalid-json",
            IntakeError::MissingAnswers => "missing-respostas",
            IntakeError::InvalidAnswers(_) => "invalid-respostas",
            IntakeError::MissingRequiredFields => "missing-required-fields",
            IntakeError::PostingLookup(_) => "lookup-failed",
            IntakeError::InsertFailed(_) => "insert-failed",
        }
    }

    /// Client-correctable faults map to 400; the rest are server-side.
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            IntakeError::InvalidJson(_)
                | IntakeError::MissingAnswers
                | IntakeError::InvalidAnswers(_)
                | IntakeError::MissingRequiredFields
        )
    }

    pub fn details(&self) -> Option<String> {
        match self {
            IntakeError::PostingLookup(source) | IntakeError::InsertFailed(source) => {
                Some(source.to_string())
            }
            _ => None,
        }
    }
}
