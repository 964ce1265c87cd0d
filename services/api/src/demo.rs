use crate::infra::{InMemoryCandidateRepository, InMemoryPostingRepository};
use crate::routes::recruiting_service_pair;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use talent_intake::error::AppError;
use talent_intake::recruiting::postings::{NewJobPosting, PostingServiceError, QuestionPair};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional JSON file with an automation submission to ingest instead of
    /// the built-in sample
    #[arg(long)]
    pub(crate) payload: Option<PathBuf>,
}

/// Walk the full loop on the in-memory adapters: author a posting, activate
/// it, ingest a submission, and show what the dashboard would read back.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let postings = Arc::new(InMemoryPostingRepository::default());
    let candidates = Arc::new(InMemoryCandidateRepository::default());
    let (intake, posting_service) = recruiting_service_pair(postings, candidates);

    println!("Recruiting back-office demo");

    let posting = posting_service
        .create(NewJobPosting {
            title: "Vendedor Externo".to_string(),
            description: Some("Atuação em campo, região Sudeste".to_string()),
            questions: vec![
                QuestionPair::new("Tem 5 anos de experiência em vendas?", ">= 5 anos"),
                QuestionPair::new("Aceita trabalho remoto?", "qualquer resposta"),
                QuestionPair::new("Pergunta rascunho sem critério", ""),
            ],
            minimum_correct_answers: Some(2),
        })
        .map_err(demo_failure)?;

    println!("\nPosting authored");
    println!("- id: {}", posting.id.0);
    println!("- title: {}", posting.title);
    println!(
        "- complete question pairs kept: {} (draft pair was discarded)",
        posting.question_pairs().len()
    );
    println!(
        "- minimum correct answers: {}",
        posting
            .minimum_correct_answers
            .map(|n| n.to_string())
            .unwrap_or_else(|| "none".to_string())
    );

    let posting = posting_service
        .toggle_status(&posting.id)
        .map_err(demo_failure)?;
    println!("- status after activation: {}", posting.status.label());

    let rival = posting_service
        .create(NewJobPosting {
            title: "Vendedor Interno".to_string(),
            ..NewJobPosting::default()
        })
        .map_err(demo_failure)?;
    match posting_service.toggle_status(&rival.id) {
        Err(PostingServiceError::ActiveConflict) => {
            println!("- second activation refused: one active posting at a time");
        }
        other => println!("- unexpected second activation outcome: {other:?}"),
    }

    let body = match args.payload {
        Some(path) => std::fs::read_to_string(path)?,
        None => sample_submission(),
    };

    let receipt = intake.ingest(&body).map_err(demo_failure)?;
    println!("\nSubmission ingested");
    println!("- candidate id: {}", receipt.candidate.id.0);
    println!(
        "- linked posting: {}",
        receipt
            .candidate
            .job_posting_id
            .as_ref()
            .map(|id| id.0.as_str())
            .unwrap_or("none (title did not match)")
    );
    println!("- status: {}", receipt.candidate.status);
    println!("- message: {}", receipt.message);
    println!(
        "- audit payload bytes: {}",
        receipt.candidate.raw_payload.get().len()
    );

    let listed = intake.list().map_err(demo_failure)?;
    println!("\nDashboard would list {} candidate(s)", listed.len());

    Ok(())
}

fn sample_submission() -> String {
    r#"{
  "workflow": "entrevista-n8n",
  "respostas": {
    "vaga": "Vendedor Externo",
    "nome": "Maria Silva",
    "resumo_experiencia": "7 anos em vendas B2B",
    "interesse_remoto": "sim",
    "fit_cultural": { "adaptabilidade": "alta" },
    "respostas_personalizadas": {
      "Tem 5 anos de experiência em vendas?": "Sim, sete anos"
    }
  }
}"#
    .to_string()
}

fn demo_failure(error: impl std::fmt::Display) -> AppError {
    AppError::Io(std::io::Error::new(
        std::io::ErrorKind::Other,
        error.to_string(),
    ))
}
