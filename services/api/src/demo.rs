use clap::{Args, ValueEnum};
use mindcheck::error::AppError;
use mindcheck::screening::dataset::tier_counts;
use mindcheck::screening::presentation::chart_rng;
use mindcheck::screening::{
    score_dataset_path, Answer, AnswerSet, Assessment, Questionnaire, QuestionnaireSession,
    ResultsView, ScoringEngine, SessionStep,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Answer as QUESTION=VALUE; repeat for each question
    #[arg(long = "answer", value_parser = crate::infra::parse_answer)]
    pub(crate) answers: Vec<Answer>,
    /// JSON file holding a list of {"question_id", "value"} answers
    #[arg(long)]
    pub(crate) answers_json: Option<PathBuf>,
    /// Fail on missing or out-of-range answers instead of scoring them as zero
    #[arg(long)]
    pub(crate) strict: bool,
    /// Seed for the chart jitter so repeated runs render the same figures
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV whose header names the question identifiers
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Print only the per-tier totals
    #[arg(long)]
    pub(crate) summary_only: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum DemoProfile {
    Low,
    #[default]
    Moderate,
    High,
}

impl DemoProfile {
    fn answer_value(self) -> i64 {
        match self {
            Self::Low => 0,
            Self::Moderate => 1,
            Self::High => 3,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Canned respondent to walk through the questionnaire
    #[arg(long, value_enum, default_value_t = DemoProfile::Moderate)]
    pub(crate) profile: DemoProfile,
    /// Seed for the chart jitter
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) fn run_questions() {
    let questionnaire = Questionnaire::standard();
    println!("Depression risk questionnaire");
    for (index, section) in questionnaire.categories().iter().enumerate() {
        println!(
            "\n[{}/{}] {} ({})",
            index + 1,
            questionnaire.len(),
            section.category.chart_label(),
            section.key
        );
        for question in &section.questions {
            println!("  {}: {}", question.id, question.prompt);
            for (value, option) in question.options.iter().enumerate() {
                println!("    {} = {}", value, option);
            }
        }
    }
}

pub(crate) fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        answers,
        answers_json,
        strict,
        seed,
    } = args;

    let answers = collect_answers(answers, answers_json)?;
    let engine = ScoringEngine::standard();
    let assessment = if strict {
        Assessment::strict(&engine, &answers)?
    } else {
        Assessment::from_answers(&engine, &answers)
    };

    let results = ResultsView::build(&assessment, &mut chart_rng(seed));
    render_assessment(&assessment, &results);
    Ok(())
}

/// File answers load first so repeated `--answer` flags can override them.
fn collect_answers(
    flags: Vec<Answer>,
    answers_json: Option<PathBuf>,
) -> Result<AnswerSet, AppError> {
    let mut answers = match answers_json {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str::<AnswerSet>(&raw).map_err(std::io::Error::from)?
        }
        None => AnswerSet::new(),
    };

    for answer in flags {
        answers.record_answer(answer);
    }
    Ok(answers)
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs { csv, summary_only } = args;

    let scores = score_dataset_path(&ScoringEngine::standard(), &csv)?;
    println!("Dataset scoring: {}", csv.display());

    if !summary_only {
        for entry in &scores {
            println!(
                "  row {:>4}: {:>5.1}% ({})",
                entry.row,
                entry.score.percent(),
                entry.tier.label()
            );
        }
    }

    println!("Rows scored: {}", scores.len());
    for (tier, count) in tier_counts(&scores) {
        println!("  {}: {}", tier.label(), count);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { profile, seed } = args;
    let value = profile.answer_value();

    println!("Questionnaire walkthrough ({:?} respondent)", profile);
    let mut session = QuestionnaireSession::default();
    loop {
        let Some(section) = session.current_section().cloned() else {
            break;
        };
        println!(
            "- {} section ({:.0}% complete)",
            section.category.chart_label(),
            session.progress_pct()
        );
        for question in &section.questions {
            session.answer(question.id.as_str(), value)?;
            println!(
                "    {} -> {}",
                question.id,
                question.options[value as usize]
            );
        }

        if session.advance() == SessionStep::ReadyToSubmit {
            break;
        }
    }

    let assessment = session.submit()?;
    let results = ResultsView::build(&assessment, &mut chart_rng(seed));
    println!();
    render_assessment(&assessment, &results);
    Ok(())
}

fn render_assessment(assessment: &Assessment, results: &ResultsView) {
    println!("{}", results.banner.headline);
    println!("  {}", results.banner.detail);
    println!("  Risk score: {:.1}%", results.score_pct);

    if let Some(rejection) = &assessment.rejection {
        println!("  Answers rejected, scored as zero: {}", rejection);
    }

    if !assessment.contributions.is_empty() {
        println!("  Contributions:");
        for contribution in &assessment.contributions {
            println!(
                "    - {} = {}: {:+.2}",
                contribution.question, contribution.choice, contribution.weight
            );
        }
    }

    println!("  Recommendations:");
    for recommendation in &results.recommendations {
        println!("    - {}", recommendation);
    }

    println!("  Risk by category:");
    for entry in &results.category_breakdown {
        println!("    - {}: {:.1}%", entry.label, entry.risk);
    }

    println!("  Projection (with / without treatment):");
    for point in &results.projection {
        println!(
            "    - {}: {:.1}% / {:.1}%",
            point.month, point.with_treatment, point.without_treatment
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindcheck::screening::QuestionId;
    use std::io::Write;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mindcheck-{}-{}", std::process::id(), name))
    }

    #[test]
    fn flags_override_answers_loaded_from_json() {
        let path = temp_path("answers.json");
        let mut file = std::fs::File::create(&path).expect("create");
        write!(
            file,
            r#"[{{"question_id": "mood", "value": 0}}, {{"question_id": "sleep", "value": 2}}]"#
        )
        .expect("write");

        let answers =
            collect_answers(vec![Answer::new("mood", 3)], Some(path.clone())).expect("loads");
        std::fs::remove_file(&path).ok();

        assert_eq!(answers.get(QuestionId::Mood), Some(3));
        assert_eq!(answers.get(QuestionId::Sleep), Some(2));
    }

    #[test]
    fn malformed_answers_json_is_an_io_error() {
        let path = temp_path("broken.json");
        std::fs::write(&path, "{ not json").expect("write");

        let result = collect_answers(Vec::new(), Some(path.clone()));
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn strict_assessment_surfaces_missing_answers() {
        let result = run_assessment(AssessArgs {
            answers: vec![Answer::new("mood", 2)],
            strict: true,
            seed: Some(1),
            ..AssessArgs::default()
        });
        assert!(matches!(result, Err(AppError::Scoring(_))));
    }

    #[test]
    fn demo_profiles_walk_every_section() {
        for profile in [DemoProfile::Low, DemoProfile::Moderate, DemoProfile::High] {
            run_demo(DemoArgs {
                profile,
                seed: Some(3),
            })
            .expect("demo completes");
        }
    }

    #[test]
    fn batch_reports_missing_files() {
        let result = run_batch(BatchArgs {
            csv: temp_path("absent.csv"),
            summary_only: true,
        });
        assert!(matches!(result, Err(AppError::Dataset(_))));
    }
}
