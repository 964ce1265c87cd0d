use std::collections::BTreeMap;

use serde::Deserialize;

/// Typed view of the automation's `respostas` object.
///
/// Required fields are validated separately so the error can carry the
/// legacy message; unknown keys are tolerated because the pipeline attaches
/// free-form context. The verbatim body is preserved elsewhere for audit —
/// this struct is never the audit copy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterviewAnswers {
    #[serde(rename = "vaga", default)]
    pub job_title: String,
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(rename = "resumo_experiencia", default)]
    pub experience_summary: Option<String>,
    #[serde(rename = "interesse_remoto", default)]
    pub remote_interest: Option<String>,
    #[serde(rename = "feedback_final", default)]
    pub final_feedback: Option<String>,
    #[serde(rename = "fit_cultural", default)]
    pub cultural_fit: Option<BTreeMap<String, String>>,
    #[serde(rename = "respostas_personalizadas", default)]
    pub custom_answers: Option<BTreeMap<String, String>>,
    /// Verdict from the external scorer; absent in older pipeline versions.
    #[serde(default)]
    pub status: Option<String>,
}

impl InterviewAnswers {
    /// Both lookup keys present and non-blank.
    pub fn has_required_fields(&self) -> bool {
        !self.job_title.trim().is_empty() && !self.name.trim().is_empty()
    }
}
