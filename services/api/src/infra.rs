use metrics_exporter_prometheus::PrometheusHandle;
use mindcheck::config::PresentationConfig;
use mindcheck::screening::Answer;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) presentation: PresentationConfig,
}

/// Parse a `question=value` pair. The value may be any integer so the scoring
/// policy, not the parser, decides what is out of range.
pub(crate) fn parse_answer(raw: &str) -> Result<Answer, String> {
    let (question_id, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=VALUE, got '{raw}'"))?;

    let question_id = question_id.trim();
    if question_id.is_empty() {
        return Err(format!("missing question identifier in '{raw}'"));
    }

    let value = value
        .trim()
        .parse::<i64>()
        .map_err(|err| format!("failed to parse answer value in '{raw}' ({err})"))?;

    Ok(Answer::new(question_id, value))
}

#[cfg(test)]
pub(crate) fn test_state(chart_seed: Option<u64>) -> AppState {
    use metrics_exporter_prometheus::PrometheusBuilder;

    AppState {
        readiness: Arc::new(AtomicBool::new(true)),
        metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        presentation: PresentationConfig { chart_seed },
    }
}
