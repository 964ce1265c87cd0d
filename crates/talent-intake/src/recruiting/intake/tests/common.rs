use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::recruiting::intake::domain::Candidate;
use crate::recruiting::intake::repository::CandidateRepository;
use crate::recruiting::intake::service::IntakeService;
use crate::recruiting::postings::domain::{
    JobPosting, JobPostingId, PostingStatus, QuestionPair, StoredQuestionList,
};
use crate::recruiting::postings::repository::{PostingRepository, RepositoryError};

pub(super) fn sample_body() -> String {
    r#"{
  "workflow": "entrevista-n8n",
  "execucao": 4821,
  "respostas": {
    "vaga": "Vendedor Externo",
    "nome": "Maria Silva",
    "resumo_experiencia": "7 anos em vendas B2B",
    "interesse_remoto": "sim",
    "feedback_final": "Entrevista fluida",
    "fit_cultural": {
      "adaptabilidade": "alta",
      "etica": "sem ressalvas"
    },
    "respostas_personalizadas": {
      "Tem 5 anos de experiência em vendas?": "Sim, sete anos"
    }
  }
}"#
    .to_string()
}

pub(super) fn body_without_name() -> String {
    r#"{ "respostas": { "vaga": "Vendedor Externo", "nome": "" } }"#.to_string()
}

pub(super) fn body_without_answers() -> String {
    r#"{ "origem": "n8n" }"#.to_string()
}

pub(super) fn seeded_posting(title: &str) -> JobPosting {
    JobPosting {
        id: JobPostingId(format!("job-{}", title.len())),
        title: title.to_string(),
        description: None,
        questions: StoredQuestionList::Structured(vec![QuestionPair::new(
            "Tem 5 anos de experiência em vendas?",
            ">= 5 anos",
        )]),
        minimum_correct_answers: Some(1),
        status: PostingStatus::Active,
        created_at: Utc::now(),
    }
}

pub(super) fn build_service() -> (
    Arc<IntakeService<MemoryCandidates, MemoryPostings>>,
    Arc<MemoryCandidates>,
    Arc<MemoryPostings>,
) {
    let candidates = Arc::new(MemoryCandidates::default());
    let postings = Arc::new(MemoryPostings::default());
    let service = Arc::new(IntakeService::new(candidates.clone(), postings.clone()));
    (service, candidates, postings)
}

#[derive(Default, Clone)]
pub(super) struct MemoryCandidates {
    records: Arc<Mutex<Vec<Candidate>>>,
}

impl MemoryCandidates {
    pub(super) fn count(&self) -> usize {
        self.records.lock().expect("candidate mutex poisoned").len()
    }
}

impl CandidateRepository for MemoryCandidates {
    fn insert(&self, candidate: Candidate) -> Result<Candidate, RepositoryError> {
        let mut guard = self.records.lock().expect("candidate mutex poisoned");
        guard.push(candidate.clone());
        Ok(candidate)
    }

    fn list(&self) -> Result<Vec<Candidate>, RepositoryError> {
        let guard = self.records.lock().expect("candidate mutex poisoned");
        Ok(guard.iter().rev().cloned().collect())
    }
}

pub(super) struct FailingCandidates;

impl CandidateRepository for FailingCandidates {
    fn insert(&self, _candidate: Candidate) -> Result<Candidate, RepositoryError> {
        Err(RepositoryError::Unavailable("insert rejected".to_string()))
    }

    fn list(&self) -> Result<Vec<Candidate>, RepositoryError> {
        Err(RepositoryError::Unavailable("insert rejected".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryPostings {
    postings: Arc<Mutex<Vec<JobPosting>>>,
}

impl MemoryPostings {
    pub(super) fn seed(&self, posting: JobPosting) {
        self.postings
            .lock()
            .expect("posting mutex poisoned")
            .push(posting);
    }
}

impl PostingRepository for MemoryPostings {
    fn insert(&self, posting: JobPosting) -> Result<JobPosting, RepositoryError> {
        self.seed(posting.clone());
        Ok(posting)
    }

    fn update(&self, posting: JobPosting) -> Result<(), RepositoryError> {
        let mut guard = self.postings.lock().expect("posting mutex poisoned");
        match guard.iter_mut().find(|stored| stored.id == posting.id) {
            Some(stored) => {
                *stored = posting;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &JobPostingId) -> Result<Option<JobPosting>, RepositoryError> {
        let guard = self.postings.lock().expect("posting mutex poisoned");
        Ok(guard.iter().find(|stored| &stored.id == id).cloned())
    }

    fn delete(&self, id: &JobPostingId) -> Result<(), RepositoryError> {
        let mut guard = self.postings.lock().expect("posting mutex poisoned");
        let before = guard.len();
        guard.retain(|stored| &stored.id != id);
        if guard.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<JobPosting>, RepositoryError> {
        let guard = self.postings.lock().expect("posting mutex poisoned");
        Ok(guard.iter().rev().cloned().collect())
    }

    fn find_by_title(&self, title: &str) -> Result<Option<JobPosting>, RepositoryError> {
        let guard = self.postings.lock().expect("posting mutex poisoned");
        Ok(guard.iter().rev().find(|stored| stored.title == title).cloned())
    }

    fn activate(&self, id: &JobPostingId) -> Result<(), RepositoryError> {
        let mut guard = self.postings.lock().expect("posting mutex poisoned");
        if guard
            .iter()
            .any(|stored| stored.is_active() && &stored.id != id)
        {
            return Err(RepositoryError::Conflict);
        }
        match guard.iter_mut().find(|stored| &stored.id == id) {
            Some(stored) => {
                stored.status = PostingStatus::Active;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn deactivate(&self, id: &JobPostingId) -> Result<(), RepositoryError> {
        let mut guard = self.postings.lock().expect("posting mutex poisoned");
        match guard.iter_mut().find(|stored| &stored.id == id) {
            Some(stored) => {
                stored.status = PostingStatus::Inactive;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }
}

pub(super) struct UnreachablePostings;

impl PostingRepository for UnreachablePostings {
    fn insert(&self, _posting: JobPosting) -> Result<JobPosting, RepositoryError> {
        Err(RepositoryError::Unavailable("postings offline".to_string()))
    }

    fn update(&self, _posting: JobPosting) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("postings offline".to_string()))
    }

    fn fetch(&self, _id: &JobPostingId) -> Result<Option<JobPosting>, RepositoryError> {
        Err(RepositoryError::Unavailable("postings offline".to_string()))
    }

    fn delete(&self, _id: &JobPostingId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("postings offline".to_string()))
    }

    fn list(&self) -> Result<Vec<JobPosting>, RepositoryError> {
        Err(RepositoryError::Unavailable("postings offline".to_string()))
    }

    fn find_by_title(&self, _title: &str) -> Result<Option<JobPosting>, RepositoryError> {
        Err(RepositoryError::Unavailable("postings offline".to_string()))
    }

    fn activate(&self, _id: &JobPostingId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("postings offline".to_string()))
    }

    fn deactivate(&self, _id: &JobPostingId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("postings offline".to_string()))
    }
}
