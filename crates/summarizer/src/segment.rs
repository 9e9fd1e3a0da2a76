//! Sentence segmentation.
//!
//! Boundaries come from Unicode UAX #29 and are then corrected with two joins:
//! - after a known abbreviation or a single capital initial (`Dr.`, `e.g.`, `J.`),
//!   unless the next segment opens with a capitalized stopword (`U.S. It was big.`)
//! - across a single line break inside a sentence (hard-wrapped text)
//!
//! Every sentence is a trimmed, contiguous slice of the input.

use crate::language::LanguageResources;
use crate::types::Sentence;
use unicode_segmentation::UnicodeSegmentation;

const TERMINALS: &[char] = &['.', '!', '?', '…', '。', '！', '？'];

/// Splits a document into sentences using the abbreviations of a language
#[derive(Debug, Clone, Copy)]
pub struct SentenceSegmenter<'a> {
    resources: &'a LanguageResources,
}

impl<'a> SentenceSegmenter<'a> {
    #[must_use]
    pub const fn new(resources: &'a LanguageResources) -> Self {
        Self { resources }
    }

    /// Split `text` into ordered sentences; blank input yields none
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<Sentence> {
        let bounds: Vec<(usize, &str)> = text.split_sentence_bound_indices().collect();
        let mut sentences = Vec::new();
        let mut pending_start: Option<usize> = None;

        for (i, (offset, segment)) in bounds.iter().enumerate() {
            let start = pending_start.take().unwrap_or(*offset);
            let end = offset + segment.len();
            let slice = &text[start..end];

            if let Some((_, next)) = bounds.get(i + 1) {
                let continues = is_soft_line_break(slice)
                    || (self.ends_with_abbreviation(slice) && !self.opens_sentence(next));
                if continues {
                    pending_start = Some(start);
                    continue;
                }
            }

            push_trimmed(&mut sentences, text, start, end);
        }

        sentences
    }

    fn ends_with_abbreviation(&self, slice: &str) -> bool {
        let trimmed = slice.trim_end();
        let Some(body) = trimmed.strip_suffix('.') else {
            return false;
        };

        let word = body
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or_default()
            .trim_start_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() {
            return false;
        }

        if self.resources.is_abbreviation(&word.to_lowercase()) {
            return true;
        }

        let mut chars = word.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
    }

    /// True when `segment` starts with a capitalized function word (`It`, `Then`, `The`)
    ///
    /// A period before such a word ends the sentence even after an abbreviation or initial.
    /// A lone capital followed by a period (`A. Lincoln`) is an initial, not an opener.
    fn opens_sentence(&self, segment: &str) -> bool {
        let rest = segment.trim_start();
        let word_len = rest
            .find(|c: char| !c.is_alphanumeric())
            .unwrap_or(rest.len());
        let word = &rest[..word_len];

        let capitalized = word.chars().next().is_some_and(char::is_uppercase);
        let is_initial = word.chars().count() == 1 && rest[word_len..].starts_with('.');
        capitalized && !is_initial && self.resources.is_stopword(&word.to_lowercase())
    }
}

/// True when the segment was cut at a lone newline rather than at terminal punctuation
fn is_soft_line_break(slice: &str) -> bool {
    let body = slice.trim_end();
    if body.is_empty() || body.ends_with(TERMINALS) {
        return false;
    }
    let trailing = &slice[body.len()..];
    trailing.matches('\n').count() == 1
}

fn push_trimmed(sentences: &mut Vec<Sentence>, text: &str, start: usize, end: usize) {
    let slice = &text[start..end];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return;
    }
    let lead = slice.len() - slice.trim_start().len();
    let begin = start + lead;
    sentences.push(Sentence::new(
        sentences.len(),
        begin,
        begin + trimmed.len(),
        trimmed,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn split(text: &str) -> Vec<String> {
        let resources = LanguageResources::english();
        SentenceSegmenter::new(&resources)
            .split(text)
            .into_iter()
            .map(|s| s.text)
            .collect()
    }

    #[test]
    fn splits_basic_sentences() {
        assert_eq!(
            split("Cats are great pets. Dogs are loyal companions. Cats and dogs are both popular."),
            vec![
                "Cats are great pets.",
                "Dogs are loyal companions.",
                "Cats and dogs are both popular."
            ]
        );
    }

    #[test]
    fn handles_empty_and_blank() {
        assert!(split("").is_empty());
        assert!(split("   \n\n  ").is_empty());
    }

    #[test]
    fn handles_question_and_exclamation() {
        assert_eq!(
            split("Is this working? Yes it is! Great."),
            vec!["Is this working?", "Yes it is!", "Great."]
        );
    }

    #[test]
    fn keeps_abbreviations_inside_sentence() {
        assert_eq!(
            split("Dr. Smith arrived at noon. Mrs. Jones left early."),
            vec!["Dr. Smith arrived at noon.", "Mrs. Jones left early."]
        );
    }

    #[test]
    fn keeps_initials_inside_sentence() {
        assert_eq!(
            split("The book by J. R. Tolkien sold well. Readers loved it."),
            vec!["The book by J. R. Tolkien sold well.", "Readers loved it."]
        );
    }

    #[test]
    fn abbreviation_before_capitalized_opener_ends_sentence() {
        assert_eq!(
            split("I moved to the U.S. It was big."),
            vec!["I moved to the U.S.", "It was big."]
        );
        assert_eq!(
            split("Bring apples, pears, etc. Then leave."),
            vec!["Bring apples, pears, etc.", "Then leave."]
        );
    }

    #[test]
    fn initial_before_capitalized_opener_ends_sentence() {
        assert_eq!(
            split("We chose Plan B. Then we left."),
            vec!["We chose Plan B.", "Then we left."]
        );
        assert_eq!(
            split("We picked option C. I agreed."),
            vec!["We picked option C.", "I agreed."]
        );
    }

    #[test]
    fn initials_that_look_like_stopwords_still_join() {
        assert_eq!(
            split("A speech by A. Lincoln moved them. It was short."),
            vec!["A speech by A. Lincoln moved them.", "It was short."]
        );
        assert_eq!(
            split("Music by J. S. Bach fills the hall."),
            vec!["Music by J. S. Bach fills the hall."]
        );
    }

    #[test]
    fn initial_before_capitalized_content_word_still_joins() {
        // Without a function word to anchor it, the boundary is ambiguous and the join wins.
        assert_eq!(
            split("We chose Plan B. Rain came later."),
            vec!["We chose Plan B. Rain came later."]
        );
    }

    #[test]
    fn trailing_abbreviation_ends_document() {
        assert_eq!(
            split("Bring apples, pears, etc."),
            vec!["Bring apples, pears, etc."]
        );
    }

    #[test]
    fn joins_hard_wrapped_lines() {
        assert_eq!(
            split("This sentence is wrapped\nacross two lines. Short one."),
            vec!["This sentence is wrapped\nacross two lines.", "Short one."]
        );
    }

    #[test]
    fn blank_line_separates_headings() {
        assert_eq!(
            split("Introduction\n\nThe body starts here."),
            vec!["Introduction", "The body starts here."]
        );
    }

    #[test]
    fn sentences_are_verbatim_slices() {
        let text = "  First one.   Second one!\nThird?  ";
        let resources = LanguageResources::english();
        let sentences = SentenceSegmenter::new(&resources).split(text);
        assert_eq!(sentences.len(), 3);
        for (i, sentence) in sentences.iter().enumerate() {
            assert_eq!(sentence.index, i);
            assert_eq!(&text[sentence.start..sentence.end], sentence.text);
        }
    }

    #[test]
    fn text_without_terminal_punctuation() {
        assert_eq!(
            split("This has no ending punctuation"),
            vec!["This has no ending punctuation"]
        );
    }
}
