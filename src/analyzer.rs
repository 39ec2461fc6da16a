use crate::digits::{is_intl_digit, is_thai_digit, unicode_label};
use crate::error::{ThaiKeyError, TkResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use strum_macros::Display;
use tracing::debug;

/// Characters of surrounding text captured on each side of a digit run.
pub const CONTEXT_RADIUS: usize = 80;

/// How many contexts `get_statistics` keeps for preview.
pub const PREVIEW_CONTEXTS: usize = 10;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[๐-๙0-9]+").expect("digit run pattern is valid"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitCounts {
    pub thai_digits: usize,
    pub international_digits: usize,
    pub total_digits: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitUsage {
    pub thai_digit_breakdown: BTreeMap<char, usize>,
    pub intl_digit_breakdown: BTreeMap<char, usize>,
    pub thai_digit_unicode: BTreeMap<char, String>,
    pub intl_digit_unicode: BTreeMap<char, String>,
}

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SequenceKind {
    Thai,
    International,
    /// Neither class present. The run pattern cannot produce this today.
    Mixed,
}

impl SequenceKind {
    pub fn classify(run: &str) -> Self {
        if run.chars().any(is_thai_digit) {
            SequenceKind::Thai
        } else if run.chars().any(is_intl_digit) {
            SequenceKind::International
        } else {
            SequenceKind::Mixed
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberContext {
    pub number: String,
    /// Character offsets `(start, end)`, end exclusive.
    pub position: (usize, usize),
    /// Byte offsets into the document, end exclusive.
    pub byte_span: (usize, usize),
    pub context: String,
    #[serde(rename = "type")]
    pub kind: SequenceKind,
    /// Run length in characters.
    pub length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub total_characters: usize,
    pub total_lines: usize,
    pub total_digits: usize,
    pub digit_percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SequenceStats {
    pub total_sequences: usize,
    pub thai_sequences: usize,
    pub intl_sequences: usize,
    pub avg_thai_length: f64,
    pub avg_intl_length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStatistics {
    pub document_stats: DocumentStats,
    pub digit_counts: DigitCounts,
    pub digit_analysis: DigitUsage,
    pub number_sequences: SequenceStats,
    pub contexts: Vec<NumberContext>,
}

/// A document held in memory for repeated digit queries.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    source: Option<PathBuf>,
    text: String,
}

impl TextAnalyzer {
    /// Loads the whole file as UTF-8. A missing file is reported as
    /// [`ThaiKeyError::DocumentNotFound`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> TkResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ThaiKeyError::DocumentNotFound(path.to_path_buf()),
            _ => ThaiKeyError::Io(e),
        })?;
        debug!(
            "Loaded document {} ({} bytes)",
            path.display(),
            text.len()
        );
        Ok(Self {
            source: Some(path.to_path_buf()),
            text,
        })
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            source: None,
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn count_numeric_characters(&self) -> DigitCounts {
        let mut counts = DigitCounts::default();
        for c in self.text.chars() {
            if is_thai_digit(c) {
                counts.thai_digits += 1;
            } else if is_intl_digit(c) {
                counts.international_digits += 1;
            }
        }
        counts.total_digits = counts.thai_digits + counts.international_digits;
        counts
    }

    pub fn analyze_digit_usage(&self) -> DigitUsage {
        let mut usage = DigitUsage::default();
        for c in self.text.chars() {
            if is_thai_digit(c) {
                *usage.thai_digit_breakdown.entry(c).or_default() += 1;
            } else if is_intl_digit(c) {
                *usage.intl_digit_breakdown.entry(c).or_default() += 1;
            }
        }
        usage.thai_digit_unicode = usage
            .thai_digit_breakdown
            .keys()
            .map(|&c| (c, unicode_label(c)))
            .collect();
        usage.intl_digit_unicode = usage
            .intl_digit_breakdown
            .keys()
            .map(|&c| (c, unicode_label(c)))
            .collect();
        usage
    }

    /// Every maximal run of Thai/international digits, with trimmed
    /// surrounding text of up to [`CONTEXT_RADIUS`] characters per side.
    pub fn find_number_contexts(&self) -> Vec<NumberContext> {
        let text = self.text.as_str();

        // Byte offset of every char boundary, including the end of text,
        // so char index <-> byte offset is a lookup both ways.
        let boundaries: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let char_len = boundaries.len() - 1;
        let char_index = |byte: usize| boundaries.partition_point(|&b| b < byte);

        DIGIT_RUN
            .find_iter(text)
            .map(|m| {
                let start = char_index(m.start());
                let end = char_index(m.end());

                let ctx_start = start.saturating_sub(CONTEXT_RADIUS);
                let ctx_end = (end + CONTEXT_RADIUS).min(char_len);
                let context = text[boundaries[ctx_start]..boundaries[ctx_end]].trim();

                NumberContext {
                    number: m.as_str().to_string(),
                    position: (start, end),
                    byte_span: (m.start(), m.end()),
                    context: context.to_string(),
                    kind: SequenceKind::classify(m.as_str()),
                    length: end - start,
                }
            })
            .collect()
    }

    pub fn get_statistics(&self) -> TextStatistics {
        let digit_counts = self.count_numeric_characters();
        let digit_analysis = self.analyze_digit_usage();
        let mut contexts = self.find_number_contexts();

        let total_characters = self.text.chars().count();
        let total_lines = self.text.matches('\n').count() + 1;

        let digit_percentage = if total_characters > 0 {
            digit_counts.total_digits as f64 / total_characters as f64 * 100.0
        } else {
            0.0
        };

        let (thai_count, thai_len) = sequence_totals(&contexts, SequenceKind::Thai);
        let (intl_count, intl_len) = sequence_totals(&contexts, SequenceKind::International);

        let number_sequences = SequenceStats {
            total_sequences: contexts.len(),
            thai_sequences: thai_count,
            intl_sequences: intl_count,
            avg_thai_length: mean(thai_len, thai_count),
            avg_intl_length: mean(intl_len, intl_count),
        };

        contexts.truncate(PREVIEW_CONTEXTS);

        TextStatistics {
            document_stats: DocumentStats {
                total_characters,
                total_lines,
                total_digits: digit_counts.total_digits,
                digit_percentage,
            },
            digit_counts,
            digit_analysis,
            number_sequences,
            contexts,
        }
    }
}

fn sequence_totals(contexts: &[NumberContext], kind: SequenceKind) -> (usize, usize) {
    contexts
        .iter()
        .filter(|c| c.kind == kind)
        .fold((0, 0), |(n, len), c| (n + 1, len + c.length))
}

fn mean(total: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_prefers_thai() {
        assert_eq!(SequenceKind::classify("๒๕๖๐"), SequenceKind::Thai);
        assert_eq!(SequenceKind::classify("12๓"), SequenceKind::Thai);
        assert_eq!(SequenceKind::classify("2017"), SequenceKind::International);
        assert_eq!(SequenceKind::classify(""), SequenceKind::Mixed);
    }

    #[test]
    fn offsets_are_in_characters() {
        let analyzer = TextAnalyzer::from_text("มาตรา ๑๒ and 34");
        let ctx = analyzer.find_number_contexts();
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx[0].position, (6, 8));
        assert_eq!(ctx[0].byte_span, (16, 22));
        assert_eq!(ctx[1].number, "34");
        assert_eq!(ctx[1].position, (13, 15));
    }

    #[test]
    fn context_is_clamped_and_trimmed() {
        let prefix = "ก".repeat(100);
        let text = format!("{} 42 ", prefix);
        let analyzer = TextAnalyzer::from_text(text);
        let ctx = &analyzer.find_number_contexts()[0];
        // 80 chars before the run (79 ก + space), the run, and the trailing space trimmed.
        assert_eq!(ctx.context, format!("{} 42", "ก".repeat(79)));
    }
}
