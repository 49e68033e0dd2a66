//! Accuracy metric — clarity score against a reference sentence.
//!
//! The comparison is positional, not an edit distance: reference word `i` is
//! matched against transcribed word `i` (case-insensitive) over the common
//! prefix of the two token lists.  The error count is
//!
//! ```text
//! errors = (reference_len − correct) + |reference_len − transcribed_len|
//! ```
//!
//! which penalises a length mismatch twice — once through the unmatched
//! positions and once through the absolute-difference term.  That is the
//! documented behaviour of this approximation and is preserved as is; it is
//! not a true word-error-rate.

// ---------------------------------------------------------------------------
// ReadingAccuracy
// ---------------------------------------------------------------------------

/// Result of comparing a transcript against a reference sentence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingAccuracy {
    /// `max(0, 1 − errors / reference_len)`, in `[0, 1]`.
    pub clarity: f64,
    /// Number of positions where reference and transcript agree
    /// (case-insensitive).
    pub correct_words: usize,
    /// Number of words in the reference sentence.
    pub reference_words: usize,
}

// ---------------------------------------------------------------------------
// reading_accuracy
// ---------------------------------------------------------------------------

/// Compare `transcript` against `reference`, word by word.
///
/// Both texts are tokenized on whitespace.  An empty reference yields
/// `{ clarity: 0.0, correct_words: 0, reference_words: 0 }` immediately:
/// there is no meaningful comparison to make.
///
/// Case folding uses Unicode lowercasing, so "The" matches "the" and
/// "STRASSE" matches "strasse".
pub fn reading_accuracy(reference: &str, transcript: &str) -> ReadingAccuracy {
    let reference_words: Vec<&str> = reference.split_whitespace().collect();
    let transcribed_words: Vec<&str> = transcript.split_whitespace().collect();

    if reference_words.is_empty() {
        return ReadingAccuracy {
            clarity: 0.0,
            correct_words: 0,
            reference_words: 0,
        };
    }

    let correct_words = reference_words
        .iter()
        .zip(transcribed_words.iter())
        .filter(|(r, t)| r.to_lowercase() == t.to_lowercase())
        .count();

    let errors = (reference_words.len() - correct_words)
        + reference_words.len().abs_diff(transcribed_words.len());

    let wer = errors as f64 / reference_words.len() as f64;
    let clarity = (1.0 - wer).max(0.0);

    ReadingAccuracy {
        clarity,
        correct_words,
        reference_words: reference_words.len(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reference_short_circuits() {
        let acc = reading_accuracy("", "anything at all");
        assert_eq!(acc.clarity, 0.0);
        assert_eq!(acc.correct_words, 0);
        assert_eq!(acc.reference_words, 0);
    }

    #[test]
    fn whitespace_only_reference_short_circuits() {
        let acc = reading_accuracy("   \t ", "words");
        assert_eq!(acc.clarity, 0.0);
        assert_eq!(acc.correct_words, 0);
    }

    #[test]
    fn identical_texts_are_perfectly_clear() {
        let acc = reading_accuracy("the cat sat", "the cat sat");
        assert_eq!(acc.correct_words, 3);
        assert_eq!(acc.reference_words, 3);
        assert!((acc.clarity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn comparison_is_case_insensitive() {
        let acc = reading_accuracy("The Cat SAT", "the cat sat");
        assert_eq!(acc.correct_words, 3);
        assert!((acc.clarity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn one_substitution_worked_example() {
        // errors = (3 − 2) + |3 − 3| = 1 → clarity = 1 − 1/3 ≈ 0.667
        let acc = reading_accuracy("the cat sat", "the dog sat");
        assert_eq!(acc.correct_words, 2);
        assert!((acc.clarity - (1.0 - 1.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn missing_tail_word_is_double_penalised() {
        // correct = 2, errors = (3 − 2) + |3 − 2| = 2 → clarity = 1/3
        let acc = reading_accuracy("the cat sat", "the cat");
        assert_eq!(acc.correct_words, 2);
        assert!((acc.clarity - (1.0 - 2.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn extra_tail_words_also_count_against_clarity() {
        // correct = 3, errors = (3 − 3) + |3 − 5| = 2 → clarity = 1/3
        let acc = reading_accuracy("the cat sat", "the cat sat on mats");
        assert_eq!(acc.correct_words, 3);
        assert!((acc.clarity - (1.0 - 2.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn clarity_is_clamped_at_zero() {
        // correct = 0, errors = 2 + |2 − 8| = 8 → 1 − 8/2 = −3 → clamped
        let acc = reading_accuracy("two words", "a b c d e f g h");
        assert_eq!(acc.correct_words, 0);
        assert_eq!(acc.clarity, 0.0);
    }

    #[test]
    fn empty_transcript_against_nonempty_reference() {
        // correct = 0, errors = 3 + 3 = 6 → clamped to 0
        let acc = reading_accuracy("the cat sat", "");
        assert_eq!(acc.correct_words, 0);
        assert_eq!(acc.clarity, 0.0);
        assert_eq!(acc.reference_words, 3);
    }

    #[test]
    fn unicode_case_folding() {
        let acc = reading_accuracy("STRASSE über", "strasse ÜBER");
        assert_eq!(acc.correct_words, 2);
        assert!((acc.clarity - 1.0).abs() < 1e-9);
    }
}
