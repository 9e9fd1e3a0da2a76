use anyhow::Result;
use luhn_summarizer::{ScoredSentence, Summary, SummarizerConfig};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct JsonReport<'a> {
    pub(crate) summary: String,
    pub(crate) summary_length: usize,
    pub(crate) threshold: f64,
    pub(crate) total_sentences: usize,
    pub(crate) significant_words: &'a [String],
    pub(crate) sentences: &'a [ScoredSentence],
}

/// Console rendering: a blank line, the `Summary:` header, then the summary
pub(crate) fn render_console(summary: &Summary) -> String {
    format!("\nSummary:\n{}\n", summary.text())
}

/// Bare summary text for file output
pub(crate) fn render_plain(summary: &Summary) -> String {
    let mut out = summary.text();
    out.push('\n');
    out
}

pub(crate) fn render_json(summary: &Summary, config: &SummarizerConfig) -> Result<String> {
    let report = JsonReport {
        summary: summary.text(),
        summary_length: config.summary_length,
        threshold: config.threshold,
        total_sentences: summary.total_sentences,
        significant_words: &summary.significant_words,
        sentences: &summary.sentences,
    };
    let mut out = serde_json::to_string_pretty(&report)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use luhn_summarizer::Summarizer;
    use pretty_assertions::assert_eq;

    fn pets_summary() -> (Summary, SummarizerConfig) {
        let config = SummarizerConfig::default()
            .with_summary_length(1)
            .with_threshold(0.75);
        let summary = Summarizer::new(config.clone())
            .summarize_detailed(
                "Cats are great pets. Dogs are loyal companions. Cats and dogs are both popular.",
            )
            .unwrap();
        (summary, config)
    }

    #[test]
    fn console_has_summary_header() {
        let (summary, _) = pets_summary();
        assert_eq!(
            render_console(&summary),
            "\nSummary:\nCats and dogs are both popular.\n"
        );
    }

    #[test]
    fn plain_is_bare_text() {
        let (summary, _) = pets_summary();
        assert_eq!(render_plain(&summary), "Cats and dogs are both popular.\n");
    }

    #[test]
    fn json_carries_scores_and_settings() {
        let (summary, config) = pets_summary();
        let raw = render_json(&summary, &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["summary"], "Cats and dogs are both popular.");
        assert_eq!(value["summary_length"], 1);
        assert_eq!(value["threshold"], 0.75);
        assert_eq!(value["total_sentences"], 3);
        assert_eq!(value["sentences"][0]["significant_count"], 2);
        assert_eq!(value["significant_words"].as_array().unwrap().len(), 2);
    }
}
