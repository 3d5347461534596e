//! Lexicon-based polarity/subjectivity scorer for short English texts.
//!
//! Each known adjective or verb carries a polarity in `[-1.0, 1.0]` and a
//! subjectivity in `[0.0, 1.0]`. A text scores the mean of its known words,
//! after intensifiers ("very good") and negations ("not good") have adjusted
//! the word that follows them.

use tweetpulse_core::Sentiment;

/// `(word, polarity, subjectivity)`.
pub(crate) const LEXICON: &[(&str, f64, f64)] = &[
    // Positive
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("brilliant", 0.9, 1.0),
    ("calm", 0.3, 0.75),
    ("clean", 0.37, 0.69),
    ("confident", 0.5, 0.83),
    ("cool", 0.35, 0.65),
    ("easy", 0.43, 0.83),
    ("effective", 0.6, 0.8),
    ("efficient", 0.5, 0.7),
    ("enjoy", 0.4, 0.5),
    ("excellent", 1.0, 1.0),
    ("excited", 0.38, 0.75),
    ("exciting", 0.3, 0.8),
    ("fantastic", 0.4, 0.9),
    ("fine", 0.42, 0.5),
    ("fortunate", 0.4, 0.8),
    ("free", 0.4, 0.8),
    ("fun", 0.3, 0.2),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("grateful", 0.5, 0.75),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("healthy", 0.5, 0.5),
    ("helpful", 0.5, 0.5),
    ("hope", 0.2, 0.5),
    ("hopeful", 0.4, 0.7),
    ("important", 0.4, 1.0),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("interesting", 0.5, 0.5),
    ("kind", 0.6, 0.9),
    ("like", 0.1, 0.2),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("lovely", 0.5, 0.75),
    ("loving", 0.6, 0.95),
    ("lucky", 0.33, 1.0),
    ("new", 0.14, 0.45),
    ("nice", 0.6, 1.0),
    ("perfect", 1.0, 1.0),
    ("pleased", 0.5, 0.8),
    ("positive", 0.23, 0.55),
    ("proud", 0.8, 1.0),
    ("relieved", 0.4, 0.7),
    ("right", 0.29, 0.54),
    ("safe", 0.5, 0.5),
    ("smart", 0.21, 0.64),
    ("strong", 0.43, 0.73),
    ("successful", 0.75, 0.95),
    ("super", 0.33, 0.67),
    ("thankful", 0.5, 0.8),
    ("thanks", 0.2, 0.2),
    ("true", 0.35, 0.65),
    ("useful", 0.3, 0.1),
    ("welcome", 0.8, 0.9),
    ("well", 0.2, 0.3),
    ("win", 0.8, 0.4),
    ("wonderful", 1.0, 1.0),
    ("worth", 0.3, 0.1),
    // Negative
    ("afraid", -0.6, 0.9),
    ("angry", -0.5, 1.0),
    ("annoying", -0.8, 0.9),
    ("anxious", -0.25, 0.8),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("boring", -1.0, 1.0),
    ("broken", -0.4, 0.4),
    ("crazy", -0.6, 0.9),
    ("dangerous", -0.6, 0.9),
    ("dead", -0.2, 0.4),
    ("difficult", -0.5, 1.0),
    ("dirty", -0.6, 0.8),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("disgusting", -1.0, 1.0),
    ("dumb", -0.38, 0.5),
    ("evil", -1.0, 1.0),
    ("fake", -0.5, 1.0),
    ("false", -0.4, 0.6),
    ("hard", -0.29, 0.54),
    ("harmful", -0.6, 0.8),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("horrible", -1.0, 1.0),
    ("ill", -0.5, 0.8),
    ("lazy", -0.25, 1.0),
    ("mad", -0.63, 1.0),
    ("negative", -0.3, 0.4),
    ("nervous", -0.2, 0.7),
    ("pathetic", -1.0, 1.0),
    ("painful", -0.7, 0.9),
    ("poor", -0.4, 0.6),
    ("rubbish", -0.5, 0.8),
    ("sad", -0.5, 1.0),
    ("scared", -0.5, 0.9),
    ("scary", -0.5, 1.0),
    ("serious", -0.33, 0.67),
    ("sick", -0.71, 0.86),
    ("sore", -0.3, 0.6),
    ("stupid", -0.8, 1.0),
    ("terrible", -1.0, 1.0),
    ("tired", -0.4, 0.7),
    ("ugly", -0.7, 1.0),
    ("unfair", -0.5, 0.8),
    ("unsafe", -0.5, 0.7),
    ("upset", -0.2, 0.6),
    ("useless", -0.5, 0.2),
    ("weird", -0.5, 1.0),
    ("worried", -0.3, 0.8),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
];

/// `(word, multiplier)` applied to the next scored word.
pub(crate) const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("most", 1.3),
    ("quite", 1.1),
    ("really", 1.3),
    ("so", 1.3),
    ("super", 1.3),
    ("too", 1.2),
    ("totally", 1.4),
    ("very", 1.3),
];

/// Words that flip (and halve) the polarity of the next scored word.
pub(crate) const NEGATIONS: &[&str] = &[
    "aren't", "can't", "cannot", "couldn't", "didn't", "doesn't", "don't", "isn't", "never",
    "no", "not", "shouldn't", "wasn't", "weren't", "won't", "wouldn't",
];

const NEGATION_FACTOR: f64 = -0.5;

fn lookup(word: &str) -> Option<(f64, f64)> {
    LEXICON
        .iter()
        .find(|&&(lex_word, _, _)| lex_word == word)
        .map(|&(_, polarity, subjectivity)| (polarity, subjectivity))
}

fn intensity(word: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|&&(w, _)| w == word)
        .map(|&(_, m)| m)
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}

fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !(c.is_alphanumeric() || c == '\''))
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

/// Score a text string against the lexicon.
///
/// Returns `(0.0, 0.0)` for empty text or text with no known words.
#[must_use]
pub fn lexicon_score(text: &str) -> Sentiment {
    let tokens = tokenize(text);
    let mut assessments: Vec<(f64, f64)> = Vec::new();

    for (idx, word) in tokens.iter().enumerate() {
        // "super" is both a word and an intensifier; prefer the intensifier
        // role when it modifies a scored word.
        if intensity(word).is_some()
            && tokens.get(idx + 1).is_some_and(|next| lookup(next).is_some())
        {
            continue;
        }

        let Some((mut polarity, mut subjectivity)) = lookup(word) else {
            continue;
        };

        let mut head = idx;
        if let Some(multiplier) = idx
            .checked_sub(1)
            .and_then(|prev| intensity(&tokens[prev]))
        {
            polarity *= multiplier;
            subjectivity *= multiplier;
            head = idx - 1;
        }

        if head
            .checked_sub(1)
            .is_some_and(|prev| is_negation(&tokens[prev]))
        {
            polarity *= NEGATION_FACTOR;
        }

        assessments.push((polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0)));
    }

    if assessments.is_empty() {
        return Sentiment::default();
    }

    #[allow(clippy::cast_precision_loss)]
    let n = assessments.len() as f64;
    let polarity: f64 = assessments.iter().map(|(p, _)| p).sum::<f64>() / n;
    let subjectivity: f64 = assessments.iter().map(|(_, s)| s).sum::<f64>() / n;

    Sentiment {
        polarity: polarity.clamp(-1.0, 1.0),
        subjectivity: subjectivity.clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(lexicon_score(""), Sentiment::default());
    }

    #[test]
    fn whitespace_only_returns_zero() {
        assert_eq!(lexicon_score("   "), Sentiment::default());
    }

    #[test]
    fn unknown_text_returns_exact_zero() {
        let s = lexicon_score("It is a vaccine");
        assert_eq!(s.polarity, 0.0);
        assert_eq!(s.subjectivity, 0.0);
    }

    #[test]
    fn love_is_positive() {
        let s = lexicon_score("I love vaccines");
        assert!(approx(s.polarity, 0.5), "got {s:?}");
        assert!(approx(s.subjectivity, 0.6), "got {s:?}");
    }

    #[test]
    fn hate_is_negative() {
        let s = lexicon_score("I hate this");
        assert!(approx(s.polarity, -0.8), "got {s:?}");
        assert!(approx(s.subjectivity, 0.9), "got {s:?}");
    }

    #[test]
    fn scores_are_averaged() {
        // good (0.7) + bad (-0.7)
        let s = lexicon_score("good news bad news");
        assert!(approx(s.polarity, 0.0), "got {s:?}");
    }

    #[test]
    fn intensifier_scales_next_word() {
        let s = lexicon_score("very good");
        assert!(approx(s.polarity, 0.91), "got {s:?}");
        assert!(approx(s.subjectivity, 0.78), "got {s:?}");
    }

    #[test]
    fn intensified_score_is_clamped() {
        let s = lexicon_score("absolutely perfect");
        assert!(approx(s.polarity, 1.0), "got {s:?}");
        assert!(approx(s.subjectivity, 1.0), "got {s:?}");
    }

    #[test]
    fn negation_flips_and_halves() {
        let s = lexicon_score("not good");
        assert!(approx(s.polarity, -0.35), "got {s:?}");
    }

    #[test]
    fn negation_reaches_past_intensifier() {
        let s = lexicon_score("not very good");
        assert!(approx(s.polarity, -0.455), "got {s:?}");
    }

    #[test]
    fn contraction_negates() {
        let s = lexicon_score("I don't feel safe");
        // "feel" sits between the negation and "safe", so no flip.
        assert!(s.polarity > 0.0, "got {s:?}");
        let s = lexicon_score("it isn't safe");
        assert!(s.polarity < 0.0, "got {s:?}");
    }

    #[test]
    fn super_alone_is_scored() {
        let s = lexicon_score("that was super");
        assert!(approx(s.polarity, 0.33), "got {s:?}");
    }

    #[test]
    fn super_before_scored_word_intensifies() {
        let s = lexicon_score("super happy");
        assert!(approx(s.polarity, 1.0), "got {s:?}");
    }

    #[test]
    fn case_and_punctuation_are_ignored() {
        let s = lexicon_score("GREAT!!!");
        assert!(approx(s.polarity, 0.8), "got {s:?}");
    }

    #[test]
    fn scores_stay_in_range() {
        let texts = [
            "absolutely awful terrible horrible",
            "extremely perfect excellent wonderful",
            "not not not bad",
            "so so so so good",
        ];
        for text in texts {
            let s = lexicon_score(text);
            assert!((-1.0..=1.0).contains(&s.polarity), "{text}: {s:?}");
            assert!((0.0..=1.0).contains(&s.subjectivity), "{text}: {s:?}");
        }
    }

    #[test]
    fn lexicon_has_no_duplicates_and_valid_ranges() {
        let mut words: Vec<&str> = LEXICON.iter().map(|(w, _, _)| *w).collect();
        let total = words.len();
        words.sort_unstable();
        words.dedup();
        assert_eq!(words.len(), total, "duplicate lexicon entry");
        for &(word, p, s) in LEXICON {
            assert!((-1.0..=1.0).contains(&p), "{word} polarity {p}");
            assert!((0.0..=1.0).contains(&s), "{word} subjectivity {s}");
            assert_eq!(word, word.to_lowercase(), "{word} must be lowercase");
        }
    }
}
