use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::recruiting::postings::JobPostingId;

/// Identifier wrapper for ingested candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

/// Durable record produced by a successful ingestion. Wire names match the
/// legacy store columns, so existing dashboards keep reading the same shape.
///
/// Candidates are written exactly once; no update or delete path exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    #[serde(rename = "nome")]
    pub name: String,
    /// Weak reference: `None` when no posting title matched at ingestion
    /// time, and left dangling if the posting is deleted later.
    #[serde(rename = "vaga_id")]
    pub job_posting_id: Option<JobPostingId>,
    /// Title as submitted, kept even if the posting is renamed or deleted.
    #[serde(rename = "vaga_titulo")]
    pub job_title_snapshot: String,
    #[serde(rename = "resumo_experiencia")]
    pub experience_summary: Option<String>,
    #[serde(rename = "interesse_remoto")]
    pub remote_interest: Option<String>,
    #[serde(rename = "feedback_final")]
    pub final_feedback: Option<String>,
    #[serde(rename = "fit_cultural")]
    pub cultural_fit: Option<BTreeMap<String, String>>,
    #[serde(rename = "respostas_personalizadas")]
    pub custom_answers: Option<BTreeMap<String, String>>,
    /// Entire original submission, retained verbatim for audit. Never
    /// interpreted by the core and never reused as the typed working copy.
    #[serde(rename = "dados_completos")]
    pub raw_payload: Box<RawValue>,
    /// Verdict handed over by the external scorer, stored as received.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Successful intake response payload, mirroring the legacy endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct IntakeReceipt {
    pub success: bool,
    #[serde(rename = "candidato")]
    pub candidate: Candidate,
    pub message: String,
}
