use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for job postings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobPostingId(pub String);

/// Lifecycle state of a posting. Wire values match the legacy store columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostingStatus {
    #[serde(rename = "ativa")]
    Active,
    #[serde(rename = "inativa")]
    Inactive,
}

impl PostingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            PostingStatus::Active => "ativa",
            PostingStatus::Inactive => "inativa",
        }
    }
}

/// A qualification question paired with the acceptance criterion the external
/// scorer applies to the candidate's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPair {
    #[serde(rename = "pergunta")]
    pub question: String,
    #[serde(rename = "criterio")]
    pub criterion: String,
}

impl QuestionPair {
    pub fn new(question: impl Into<String>, criterion: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            criterion: criterion.into(),
        }
    }
}

/// Question list as found in the backing store. Older postings persisted bare
/// question strings without criteria; newer ones persist structured pairs.
/// Normalization is read-path only — the stored value is never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredQuestionList {
    Structured(Vec<QuestionPair>),
    Legacy(Vec<String>),
}

impl StoredQuestionList {
    /// Canonical in-memory shape: legacy entries become pairs with an empty
    /// criterion.
    pub fn normalized(&self) -> Vec<QuestionPair> {
        match self {
            StoredQuestionList::Structured(pairs) => pairs.clone(),
            StoredQuestionList::Legacy(questions) => questions
                .iter()
                .map(|question| QuestionPair::new(question.clone(), ""))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            StoredQuestionList::Structured(pairs) => pairs.is_empty(),
            StoredQuestionList::Legacy(questions) => questions.is_empty(),
        }
    }
}

impl Default for StoredQuestionList {
    fn default() -> Self {
        StoredQuestionList::Structured(Vec::new())
    }
}

/// An open role with an optional qualification questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobPostingId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "perguntas_qualificacao", default)]
    pub questions: StoredQuestionList,
    /// Present iff the posting has complete qualification pairs.
    #[serde(rename = "minimo_acertos", skip_serializing_if = "Option::is_none")]
    pub minimum_correct_answers: Option<u32>,
    pub status: PostingStatus,
    pub created_at: DateTime<Utc>,
}

impl JobPosting {
    pub fn question_pairs(&self) -> Vec<QuestionPair> {
        self.questions.normalized()
    }

    pub fn is_active(&self) -> bool {
        self.status == PostingStatus::Active
    }
}

/// Input for creating a posting. New postings always start inactive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewJobPosting {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "perguntas_qualificacao", default)]
    pub questions: Vec<QuestionPair>,
    #[serde(rename = "minimo_acertos", default)]
    pub minimum_correct_answers: Option<u32>,
}

/// Partial update; absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostingUpdate {
    #[serde(rename = "titulo", default)]
    pub title: Option<String>,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "perguntas_qualificacao", default)]
    pub questions: Option<Vec<QuestionPair>>,
    #[serde(rename = "minimo_acertos", default)]
    pub minimum_correct_answers: Option<u32>,
}
