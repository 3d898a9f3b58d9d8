//! Stylometric profiling and heuristic AI-vs-human authorship scoring for
//! short prose. Both entry points are pure functions of their text input.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PosCategory {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Other,
}

impl PosCategory {
    pub fn name(&self) -> &'static str {
        match self {
            PosCategory::Noun => "Noun",
            PosCategory::Verb => "Verb",
            PosCategory::Adjective => "Adjective",
            PosCategory::Adverb => "Adverb",
            PosCategory::Pronoun => "Pronoun",
            PosCategory::Preposition => "Preposition",
            PosCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PosBucket {
    pub category: PosCategory,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StylometricProfile {
    pub word_count: usize,
    pub sentence_count: usize,
    pub type_token_ratio: f64,
    pub flesch_kincaid_grade: f64,
    pub automated_readability_index: f64,
    pub sentiment_label: SentimentLabel,
    pub sentiment_compound: f64,
    pub pos_distribution: Vec<PosBucket>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorshipFeatures {
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub punctuation_ratio: f64,
    pub repetition_score: f64,
    pub complexity_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthorshipLabel {
    #[serde(rename = "AI")]
    Ai,
    Human,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorshipPrediction {
    pub label: AuthorshipLabel,
    pub confidence: f64,
    pub features: AuthorshipFeatures,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoryAnalysis {
    pub profile: StylometricProfile,
    pub authorship: AuthorshipPrediction,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("input is not text: {reason}")]
    InvalidInput { reason: String },
}

/// Sentence segmentation strategy. `RuleBased` is canonical; `Naive` is a
/// degraded fallback that splits on terminal punctuation runs only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SentenceStrategy {
    #[default]
    RuleBased,
    Naive,
}

// ---------------------------------------------------------------------------
// Tuning
// ---------------------------------------------------------------------------

struct Tuning {
    repetition_threshold: f64,
    repetition_weight: f64,
    sentence_length_threshold: f64,
    sentence_length_weight: f64,
    complexity_threshold: f64,
    complexity_weight: f64,
    punctuation_threshold: f64,
    punctuation_weight: f64,
    ai_cutoff: f64,
    confidence_offset: f64,
    confidence_min: f64,
    confidence_max: f64,
    sentiment_positive_min: f64,
    sentiment_negative_max: f64,
    negation_window: usize,
    negation_factor: f64,
    booster_decay: [f64; 3],
    compound_alpha: f64,
    fk_sentence_weight: f64,
    fk_syllable_weight: f64,
    fk_base: f64,
    ari_char_weight: f64,
    ari_sentence_weight: f64,
    ari_base: f64,
}

static TUNING: Tuning = Tuning {
    repetition_threshold: 0.3,
    repetition_weight: 0.3,
    sentence_length_threshold: 15.0,
    sentence_length_weight: 0.2,
    complexity_threshold: 0.7,
    complexity_weight: 0.2,
    punctuation_threshold: 0.05,
    punctuation_weight: 0.3,
    ai_cutoff: 0.5,
    confidence_offset: 0.1,
    confidence_min: 0.6,
    confidence_max: 0.95,
    sentiment_positive_min: 0.05,
    sentiment_negative_max: -0.05,
    negation_window: 3,
    negation_factor: -0.74,
    booster_decay: [1.0, 0.95, 0.9],
    compound_alpha: 15.0,
    fk_sentence_weight: 0.39,
    fk_syllable_weight: 11.8,
    fk_base: -15.59,
    ari_char_weight: 4.71,
    ari_sentence_weight: 0.5,
    ari_base: -21.43,
};

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+").unwrap());

static PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.,;:!?]").unwrap());

static NAIVE_SENTENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

// ---------------------------------------------------------------------------
// Tokenization
// ---------------------------------------------------------------------------

/// Lowercase word tokens: maximal alphanumeric/underscore runs.
pub fn words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Sentence segmentation
// ---------------------------------------------------------------------------

static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "rev", "gen", "sen", "rep", "st", "sr", "jr", "vs",
        "etc", "e.g", "i.e", "cf", "al", "inc", "ltd", "co", "corp", "dept", "est", "fig",
        "no", "vol", "approx", "u.s", "u.k",
    ]
    .into_iter()
    .collect()
});

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201D}' | '\u{2019}')
}

fn starts_sentence(c: char) -> bool {
    c.is_uppercase()
        || c.is_ascii_digit()
        || matches!(c, '"' | '\'' | '(' | '[' | '\u{201C}' | '\u{2018}')
}

fn is_suppressed_period(text: &str, chars: &[(usize, char)], i: usize, start: usize) -> bool {
    // Decimal point between digits
    if i > 0
        && i + 1 < chars.len()
        && chars[i - 1].1.is_ascii_digit()
        && chars[i + 1].1.is_ascii_digit()
    {
        return true;
    }

    // Token immediately before the period: letters with interior periods
    let mut t = i;
    while t > start {
        let p = chars[t - 1].1;
        if p.is_alphanumeric() || p == '.' {
            t -= 1;
        } else {
            break;
        }
    }
    if t == i {
        return false;
    }
    let token = text[chars[t].0..chars[i].0].to_lowercase();

    // Single-letter initials ("J. K. Rowling")
    if !token.contains('.') && token.chars().count() == 1 {
        if let Some(c) = token.chars().next() {
            if c.is_alphabetic() {
                return true;
            }
        }
    }

    ABBREVIATIONS.contains(token.as_str())
}

/// Rule-based sentence segmentation: a terminal mark closes a sentence when,
/// after trailing quotes/brackets, the next non-space character could start a
/// new sentence. Periods after abbreviations, initials, and decimal digits do
/// not close. Trailing unterminated text counts as a final sentence.
pub fn sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let n = chars.len();
    let mut out = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < n {
        let c = chars[i].1;
        if matches!(c, '.' | '!' | '?') {
            if c == '.' && is_suppressed_period(text, &chars, i, start) {
                i += 1;
                continue;
            }
            let mut j = i + 1;
            while j < n && is_closing(chars[j].1) {
                j += 1;
            }
            let mut k = j;
            while k < n && chars[k].1.is_whitespace() {
                k += 1;
            }
            if k >= n || starts_sentence(chars[k].1) {
                let end_byte = if j < n { chars[j].0 } else { text.len() };
                let sent = text[chars[start].0..end_byte].trim();
                if !sent.is_empty() {
                    out.push(sent.to_string());
                }
                start = k;
                i = k;
                continue;
            }
        }
        i += 1;
    }

    if start < n {
        let sent = text[chars[start].0..].trim();
        if !sent.is_empty() {
            out.push(sent.to_string());
        }
    }
    out
}

/// Degraded fallback: split on runs of terminal punctuation. Loses
/// abbreviation awareness; use `sentences` unless the caller opts in.
pub fn sentences_naive(text: &str) -> Vec<String> {
    NAIVE_SENTENCE_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_sentences(text: &str, strategy: SentenceStrategy) -> Vec<String> {
    match strategy {
        SentenceStrategy::RuleBased => sentences(text),
        SentenceStrategy::Naive => sentences_naive(text),
    }
}

// ---------------------------------------------------------------------------
// Readability
// ---------------------------------------------------------------------------

fn count_syllables(word: &str) -> usize {
    let w = word.to_lowercase();
    let mut count = 0usize;
    let mut prev_vowel = false;
    for c in w.chars() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }
    if w.ends_with('e') && !w.ends_with("le") && count > 1 {
        count -= 1;
    }
    count.max(1)
}

fn readability(word_tokens: &[String], sentence_count: usize) -> (f64, f64) {
    if word_tokens.is_empty() {
        return (0.0, 0.0);
    }
    let word_count = word_tokens.len() as f64;
    let sentence_count = sentence_count.max(1) as f64;
    let syllables: usize = word_tokens.iter().map(|w| count_syllables(w)).sum();
    let chars: usize = word_tokens.iter().map(|w| w.chars().count()).sum();

    let words_per_sentence = word_count / sentence_count;
    let fk = TUNING.fk_sentence_weight * words_per_sentence
        + TUNING.fk_syllable_weight * (syllables as f64 / word_count)
        + TUNING.fk_base;
    let ari = TUNING.ari_char_weight * (chars as f64 / word_count)
        + TUNING.ari_sentence_weight * words_per_sentence
        + TUNING.ari_base;
    (fk, ari)
}

// ---------------------------------------------------------------------------
// Sentiment
// ---------------------------------------------------------------------------

static SENTIMENT_LEXICON: Lazy<HashMap<String, f64>> = Lazy::new(|| {
    let lexicon: HashMap<String, f64> =
        serde_json::from_str(include_str!("sentiment_lexicon.json"))
            .expect("valid sentiment lexicon");
    debug!(entries = lexicon.len(), "sentiment lexicon loaded");
    lexicon
});

static NEGATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "not", "no", "never", "none", "neither", "nor", "nothing", "nowhere", "cannot",
        "can't", "won't", "don't", "doesn't", "didn't", "isn't", "wasn't", "aren't",
        "weren't", "hasn't", "haven't", "hadn't", "couldn't", "shouldn't", "wouldn't",
        "ain't", "rarely", "seldom", "without",
    ]
    .into_iter()
    .collect()
});

static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let incr = 0.293;
    let decr = -0.293;
    [
        ("absolutely", incr),
        ("amazingly", incr),
        ("completely", incr),
        ("considerably", incr),
        ("decidedly", incr),
        ("deeply", incr),
        ("enormously", incr),
        ("entirely", incr),
        ("especially", incr),
        ("exceptionally", incr),
        ("extremely", incr),
        ("highly", incr),
        ("hugely", incr),
        ("incredibly", incr),
        ("intensely", incr),
        ("particularly", incr),
        ("purely", incr),
        ("really", incr),
        ("remarkably", incr),
        ("so", incr),
        ("substantially", incr),
        ("thoroughly", incr),
        ("totally", incr),
        ("tremendously", incr),
        ("unusually", incr),
        ("utterly", incr),
        ("very", incr),
        ("almost", decr),
        ("barely", decr),
        ("hardly", decr),
        ("kinda", decr),
        ("less", decr),
        ("marginally", decr),
        ("occasionally", decr),
        ("partly", decr),
        ("scarcely", decr),
        ("slightly", decr),
        ("somewhat", decr),
    ]
    .into_iter()
    .collect()
});

fn sentiment_tokens(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Valence sum over lexicon hits, with lookback negation and intensifier
/// adjustment, normalized into [-1, 1].
fn sentiment_compound(text: &str) -> f64 {
    let tokens = sentiment_tokens(text);
    let mut total = 0.0f64;

    for i in 0..tokens.len() {
        let Some(&valence) = SENTIMENT_LEXICON.get(tokens[i].as_str()) else {
            continue;
        };
        let mut v = valence;

        for k in 1..=TUNING.negation_window {
            if i < k {
                break;
            }
            if let Some(&boost) = BOOSTERS.get(tokens[i - k].as_str()) {
                let scaled = boost * TUNING.booster_decay[k - 1];
                v += if valence >= 0.0 { scaled } else { -scaled };
            }
        }

        let negated = (1..=TUNING.negation_window)
            .any(|k| i >= k && NEGATORS.contains(tokens[i - k].as_str()));
        if negated {
            v *= TUNING.negation_factor;
        }

        total += v;
    }

    if total == 0.0 {
        return 0.0;
    }
    (total / (total * total + TUNING.compound_alpha).sqrt()).clamp(-1.0, 1.0)
}

fn sentiment_label(compound: f64) -> SentimentLabel {
    if compound >= TUNING.sentiment_positive_min {
        SentimentLabel::Positive
    } else if compound <= TUNING.sentiment_negative_max {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

// ---------------------------------------------------------------------------
// POS tagging
// ---------------------------------------------------------------------------

static TAG_LEXICON: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        // Personal pronouns
        ("i", "PRP"),
        ("you", "PRP"),
        ("he", "PRP"),
        ("she", "PRP"),
        ("it", "PRP"),
        ("we", "PRP"),
        ("they", "PRP"),
        ("me", "PRP"),
        ("him", "PRP"),
        ("her", "PRP"),
        ("us", "PRP"),
        ("them", "PRP"),
        ("myself", "PRP"),
        ("yourself", "PRP"),
        ("himself", "PRP"),
        ("herself", "PRP"),
        ("itself", "PRP"),
        ("ourselves", "PRP"),
        ("yourselves", "PRP"),
        ("themselves", "PRP"),
        // Possessive pronouns
        ("my", "PRP$"),
        ("your", "PRP$"),
        ("his", "PRP$"),
        ("its", "PRP$"),
        ("our", "PRP$"),
        ("their", "PRP$"),
        ("mine", "PRP$"),
        ("yours", "PRP$"),
        ("hers", "PRP$"),
        ("ours", "PRP$"),
        ("theirs", "PRP$"),
        // Determiners
        ("the", "DT"),
        ("a", "DT"),
        ("an", "DT"),
        ("this", "DT"),
        ("that", "DT"),
        ("these", "DT"),
        ("those", "DT"),
        ("each", "DT"),
        ("every", "DT"),
        ("either", "DT"),
        ("neither", "DT"),
        ("some", "DT"),
        ("any", "DT"),
        ("no", "DT"),
        ("all", "DT"),
        ("both", "DT"),
        ("another", "DT"),
        // Prepositions and subordinating conjunctions
        ("about", "IN"),
        ("above", "IN"),
        ("across", "IN"),
        ("after", "IN"),
        ("against", "IN"),
        ("along", "IN"),
        ("although", "IN"),
        ("among", "IN"),
        ("around", "IN"),
        ("as", "IN"),
        ("at", "IN"),
        ("because", "IN"),
        ("before", "IN"),
        ("behind", "IN"),
        ("below", "IN"),
        ("beneath", "IN"),
        ("beside", "IN"),
        ("besides", "IN"),
        ("between", "IN"),
        ("beyond", "IN"),
        ("by", "IN"),
        ("despite", "IN"),
        ("during", "IN"),
        ("except", "IN"),
        ("for", "IN"),
        ("from", "IN"),
        ("if", "IN"),
        ("in", "IN"),
        ("inside", "IN"),
        ("into", "IN"),
        ("like", "IN"),
        ("near", "IN"),
        ("of", "IN"),
        ("off", "IN"),
        ("on", "IN"),
        ("onto", "IN"),
        ("outside", "IN"),
        ("over", "IN"),
        ("past", "IN"),
        ("per", "IN"),
        ("since", "IN"),
        ("than", "IN"),
        ("though", "IN"),
        ("through", "IN"),
        ("throughout", "IN"),
        ("till", "IN"),
        ("toward", "IN"),
        ("towards", "IN"),
        ("under", "IN"),
        ("underneath", "IN"),
        ("unless", "IN"),
        ("until", "IN"),
        ("upon", "IN"),
        ("whereas", "IN"),
        ("whether", "IN"),
        ("while", "IN"),
        ("with", "IN"),
        ("within", "IN"),
        ("without", "IN"),
        ("to", "TO"),
        // Coordinating conjunctions
        ("and", "CC"),
        ("but", "CC"),
        ("or", "CC"),
        ("nor", "CC"),
        ("plus", "CC"),
        ("yet", "CC"),
        // Modals
        ("can", "MD"),
        ("could", "MD"),
        ("may", "MD"),
        ("might", "MD"),
        ("must", "MD"),
        ("ought", "MD"),
        ("shall", "MD"),
        ("should", "MD"),
        ("will", "MD"),
        ("would", "MD"),
        // Irregular and high-frequency verbs
        ("be", "VB"),
        ("am", "VBP"),
        ("is", "VBZ"),
        ("are", "VBP"),
        ("was", "VBD"),
        ("were", "VBD"),
        ("been", "VBN"),
        ("being", "VBG"),
        ("have", "VBP"),
        ("has", "VBZ"),
        ("had", "VBD"),
        ("having", "VBG"),
        ("do", "VBP"),
        ("does", "VBZ"),
        ("did", "VBD"),
        ("done", "VBN"),
        ("doing", "VBG"),
        ("go", "VB"),
        ("goes", "VBZ"),
        ("went", "VBD"),
        ("gone", "VBN"),
        ("going", "VBG"),
        ("say", "VBP"),
        ("says", "VBZ"),
        ("said", "VBD"),
        ("saying", "VBG"),
        ("get", "VB"),
        ("gets", "VBZ"),
        ("got", "VBD"),
        ("gotten", "VBN"),
        ("make", "VB"),
        ("makes", "VBZ"),
        ("made", "VBD"),
        ("know", "VBP"),
        ("knows", "VBZ"),
        ("knew", "VBD"),
        ("known", "VBN"),
        ("think", "VBP"),
        ("thinks", "VBZ"),
        ("thought", "VBD"),
        ("take", "VB"),
        ("takes", "VBZ"),
        ("took", "VBD"),
        ("taken", "VBN"),
        ("see", "VBP"),
        ("sees", "VBZ"),
        ("saw", "VBD"),
        ("seen", "VBN"),
        ("come", "VB"),
        ("comes", "VBZ"),
        ("came", "VBD"),
        ("find", "VB"),
        ("finds", "VBZ"),
        ("found", "VBD"),
        ("give", "VB"),
        ("gives", "VBZ"),
        ("gave", "VBD"),
        ("given", "VBN"),
        ("tell", "VB"),
        ("tells", "VBZ"),
        ("told", "VBD"),
        ("become", "VB"),
        ("became", "VBD"),
        ("leave", "VB"),
        ("leaves", "VBZ"),
        ("left", "VBD"),
        ("feel", "VBP"),
        ("feels", "VBZ"),
        ("felt", "VBD"),
        ("put", "VB"),
        ("puts", "VBZ"),
        ("bring", "VB"),
        ("brings", "VBZ"),
        ("brought", "VBD"),
        ("begin", "VB"),
        ("begins", "VBZ"),
        ("began", "VBD"),
        ("begun", "VBN"),
        ("keep", "VB"),
        ("keeps", "VBZ"),
        ("kept", "VBD"),
        ("hold", "VB"),
        ("holds", "VBZ"),
        ("held", "VBD"),
        ("write", "VB"),
        ("writes", "VBZ"),
        ("wrote", "VBD"),
        ("written", "VBN"),
        ("stand", "VB"),
        ("stands", "VBZ"),
        ("stood", "VBD"),
        ("hear", "VB"),
        ("hears", "VBZ"),
        ("heard", "VBD"),
        ("let", "VB"),
        ("lets", "VBZ"),
        ("mean", "VB"),
        ("means", "VBZ"),
        ("meant", "VBD"),
        ("set", "VB"),
        ("sets", "VBZ"),
        ("meet", "VB"),
        ("meets", "VBZ"),
        ("met", "VBD"),
        ("run", "VB"),
        ("runs", "VBZ"),
        ("ran", "VBD"),
        ("sit", "VB"),
        ("sits", "VBZ"),
        ("sat", "VBD"),
        ("speak", "VB"),
        ("speaks", "VBZ"),
        ("spoke", "VBD"),
        ("spoken", "VBN"),
        ("read", "VB"),
        ("reads", "VBZ"),
        ("grow", "VB"),
        ("grows", "VBZ"),
        ("grew", "VBD"),
        ("grown", "VBN"),
        ("fall", "VB"),
        ("falls", "VBZ"),
        ("fell", "VBD"),
        ("fallen", "VBN"),
        ("buy", "VB"),
        ("buys", "VBZ"),
        ("bought", "VBD"),
        ("send", "VB"),
        ("sends", "VBZ"),
        ("sent", "VBD"),
        ("build", "VB"),
        ("builds", "VBZ"),
        ("built", "VBD"),
        ("break", "VB"),
        ("breaks", "VBZ"),
        ("broke", "VBD"),
        ("broken", "VBN"),
        ("catch", "VB"),
        ("catches", "VBZ"),
        ("caught", "VBD"),
        ("teach", "VB"),
        ("teaches", "VBZ"),
        ("taught", "VBD"),
        ("choose", "VB"),
        ("chose", "VBD"),
        ("chosen", "VBN"),
        ("win", "VB"),
        ("wins", "VBZ"),
        ("won", "VBD"),
        ("lose", "VB"),
        ("loses", "VBZ"),
        ("lost", "VBD"),
        ("pay", "VB"),
        ("pays", "VBZ"),
        ("paid", "VBD"),
        ("sleep", "VB"),
        ("sleeps", "VBZ"),
        ("slept", "VBD"),
        ("wake", "VB"),
        ("woke", "VBD"),
        ("eat", "VB"),
        ("eats", "VBZ"),
        ("ate", "VBD"),
        ("eaten", "VBN"),
        ("drink", "VB"),
        ("drank", "VBD"),
        ("drive", "VB"),
        ("drove", "VBD"),
        ("driven", "VBN"),
        ("ride", "VB"),
        ("rode", "VBD"),
        ("rise", "VB"),
        ("rose", "VBD"),
        ("risen", "VBN"),
        ("sing", "VB"),
        ("sang", "VBD"),
        ("sung", "VBN"),
        ("swim", "VB"),
        ("swam", "VBD"),
        ("throw", "VB"),
        ("threw", "VBD"),
        ("thrown", "VBN"),
        ("wear", "VB"),
        ("wore", "VBD"),
        ("worn", "VBN"),
        ("fly", "VB"),
        ("flew", "VBD"),
        ("flown", "VBN"),
        ("draw", "VB"),
        ("drew", "VBD"),
        ("drawn", "VBN"),
        ("shake", "VB"),
        ("shook", "VBD"),
        ("hide", "VB"),
        ("hid", "VBD"),
        ("hidden", "VBN"),
        ("forget", "VB"),
        ("forgot", "VBD"),
        ("forgotten", "VBN"),
        ("understand", "VB"),
        ("understood", "VBD"),
        ("spend", "VB"),
        ("spent", "VBD"),
        ("cut", "VB"),
        ("hit", "VB"),
        ("hurt", "VB"),
        ("cost", "VB"),
        ("shut", "VB"),
        ("need", "VBP"),
        // Adverbs
        ("very", "RB"),
        ("not", "RB"),
        ("n't", "RB"),
        ("never", "RB"),
        ("always", "RB"),
        ("often", "RB"),
        ("sometimes", "RB"),
        ("usually", "RB"),
        ("rarely", "RB"),
        ("seldom", "RB"),
        ("here", "RB"),
        ("there", "RB"),
        ("now", "RB"),
        ("then", "RB"),
        ("again", "RB"),
        ("soon", "RB"),
        ("already", "RB"),
        ("still", "RB"),
        ("just", "RB"),
        ("too", "RB"),
        ("also", "RB"),
        ("quite", "RB"),
        ("rather", "RB"),
        ("almost", "RB"),
        ("nearly", "RB"),
        ("perhaps", "RB"),
        ("maybe", "RB"),
        ("away", "RB"),
        ("back", "RB"),
        ("once", "RB"),
        ("twice", "RB"),
        ("together", "RB"),
        ("instead", "RB"),
        ("later", "RB"),
        ("ever", "RB"),
        ("even", "RB"),
        ("only", "RB"),
        ("really", "RB"),
        ("well", "RB"),
        ("far", "RB"),
        ("so", "RB"),
        ("else", "RB"),
        ("down", "RB"),
        ("up", "RB"),
        ("out", "RB"),
        ("indeed", "RB"),
        // Wh-words
        ("who", "WP"),
        ("whom", "WP"),
        ("what", "WP"),
        ("whose", "WP$"),
        ("which", "WDT"),
        ("when", "WRB"),
        ("where", "WRB"),
        ("why", "WRB"),
        ("how", "WRB"),
        // Interjections
        ("oh", "UH"),
        ("ah", "UH"),
        ("hey", "UH"),
        ("wow", "UH"),
        ("yes", "UH"),
        ("yeah", "UH"),
        ("hello", "UH"),
        ("hi", "UH"),
        ("okay", "UH"),
        ("ok", "UH"),
        // Number words
        ("zero", "CD"),
        ("one", "CD"),
        ("two", "CD"),
        ("three", "CD"),
        ("four", "CD"),
        ("five", "CD"),
        ("six", "CD"),
        ("seven", "CD"),
        ("eight", "CD"),
        ("nine", "CD"),
        ("ten", "CD"),
        ("eleven", "CD"),
        ("twelve", "CD"),
        ("twenty", "CD"),
        ("thirty", "CD"),
        ("forty", "CD"),
        ("fifty", "CD"),
        ("hundred", "CD"),
        ("thousand", "CD"),
        ("million", "CD"),
        ("billion", "CD"),
        // Common adjectives
        ("good", "JJ"),
        ("bad", "JJ"),
        ("big", "JJ"),
        ("small", "JJ"),
        ("little", "JJ"),
        ("large", "JJ"),
        ("old", "JJ"),
        ("new", "JJ"),
        ("young", "JJ"),
        ("great", "JJ"),
        ("long", "JJ"),
        ("short", "JJ"),
        ("high", "JJ"),
        ("low", "JJ"),
        ("hot", "JJ"),
        ("cold", "JJ"),
        ("dark", "JJ"),
        ("bright", "JJ"),
        ("happy", "JJ"),
        ("sad", "JJ"),
        ("angry", "JJ"),
        ("afraid", "JJ"),
        ("full", "JJ"),
        ("empty", "JJ"),
        ("hard", "JJ"),
        ("soft", "JJ"),
        ("easy", "JJ"),
        ("strong", "JJ"),
        ("weak", "JJ"),
        ("rich", "JJ"),
        ("poor", "JJ"),
        ("clean", "JJ"),
        ("dirty", "JJ"),
        ("warm", "JJ"),
        ("cool", "JJ"),
        ("deep", "JJ"),
        ("wide", "JJ"),
        ("narrow", "JJ"),
        ("tall", "JJ"),
        ("quiet", "JJ"),
        ("loud", "JJ"),
        ("quick", "JJ"),
        ("slow", "JJ"),
        ("nice", "JJ"),
        ("fine", "JJ"),
        ("real", "JJ"),
        ("true", "JJ"),
        ("false", "JJ"),
        ("wrong", "JJ"),
        ("right", "JJ"),
        ("own", "JJ"),
        ("same", "JJ"),
        ("different", "JJ"),
        ("important", "JJ"),
        ("whole", "JJ"),
        ("free", "JJ"),
        ("sure", "JJ"),
        ("ready", "JJ"),
        ("busy", "JJ"),
        ("early", "JJ"),
        ("late", "JJ"),
        ("next", "JJ"),
        ("last", "JJ"),
        ("first", "JJ"),
        ("second", "JJ"),
        ("third", "JJ"),
        ("many", "JJ"),
        ("few", "JJ"),
        ("several", "JJ"),
        ("much", "JJ"),
        ("more", "JJR"),
        ("most", "JJS"),
        ("better", "JJR"),
        ("best", "JJS"),
        ("worse", "JJR"),
        ("worst", "JJS"),
        ("less", "JJR"),
        ("least", "JJS"),
        ("certain", "JJ"),
        ("clear", "JJ"),
        ("open", "JJ"),
        ("red", "JJ"),
        ("blue", "JJ"),
        ("green", "JJ"),
        ("black", "JJ"),
        ("white", "JJ"),
        ("brown", "JJ"),
        ("yellow", "JJ"),
        ("gray", "JJ"),
        ("lazy", "JJ"),
        ("pretty", "JJ"),
        ("tiny", "JJ"),
        ("huge", "JJ"),
        ("likely", "JJ"),
        ("lovely", "JJ"),
        ("silly", "JJ"),
        ("ugly", "JJ"),
        ("honest", "JJ"),
        ("modest", "JJ"),
        ("general", "JJ"),
        // Suffix-rule exceptions
        ("family", "NN"),
        ("thing", "NN"),
        ("king", "NN"),
        ("ring", "NN"),
        ("wing", "NN"),
        ("spring", "NN"),
        ("string", "NN"),
        ("morning", "NN"),
        ("evening", "NN"),
        ("building", "NN"),
        ("ceiling", "NN"),
        ("nothing", "NN"),
        ("something", "NN"),
        ("anything", "NN"),
        ("everything", "NN"),
        ("forest", "NN"),
        ("interest", "NN"),
        ("animal", "NN"),
        ("hospital", "NN"),
        ("capital", "NN"),
        ("people", "NNS"),
        ("children", "NNS"),
        ("men", "NNS"),
        ("women", "NNS"),
        ("feet", "NNS"),
        ("teeth", "NNS"),
        ("mice", "NNS"),
        // Clitics split off by the tokenizer
        ("'s", "POS"),
        ("'", "POS"),
        ("'re", "VBP"),
        ("'ve", "VBP"),
        ("'m", "VBP"),
        ("'ll", "MD"),
        ("'d", "MD"),
    ]
    .into_iter()
    .collect()
});

/// Treebank-style tokens: case-preserving words with clitics split off, each
/// punctuation character standing alone.
fn pos_tokens(text: &str) -> Vec<String> {
    fn flush(tokens: &mut Vec<String>, word: &mut String) {
        if word.is_empty() {
            return;
        }
        let mut w = std::mem::take(word);
        let mut trailing = 0usize;
        while w.ends_with('\'') {
            w.pop();
            trailing += 1;
        }
        if !w.is_empty() {
            let lower = w.to_lowercase();
            let mut cut = None;
            for suffix in ["n't", "'re", "'ve", "'ll", "'m", "'d", "'s"] {
                if lower.ends_with(suffix) && lower.len() > suffix.len() {
                    let at = w.len() - suffix.len();
                    if w.is_char_boundary(at) {
                        cut = Some(at);
                        break;
                    }
                }
            }
            match cut {
                Some(at) => {
                    tokens.push(w[..at].to_string());
                    tokens.push(w[at..].to_string());
                }
                None => tokens.push(w),
            }
        }
        for _ in 0..trailing {
            tokens.push("'".to_string());
        }
    }

    let mut tokens = Vec::new();
    let mut word = String::new();
    for c in text.chars() {
        if c.is_alphanumeric() || (c == '\'' && !word.is_empty()) {
            word.push(c);
        } else {
            flush(&mut tokens, &mut word);
            if !c.is_whitespace() {
                tokens.push(c.to_string());
            }
        }
    }
    flush(&mut tokens, &mut word);
    tokens
}

fn tag_token(token: &str) -> &'static str {
    let first = match token.chars().next() {
        Some(c) => c,
        None => return "SYM",
    };
    if !first.is_alphanumeric() && first != '\'' {
        return match first {
            '.' | '!' | '?' => ".",
            ',' => ",",
            ':' | ';' => ":",
            _ => "SYM",
        };
    }

    let lower = token.to_lowercase();
    if let Some(tag) = TAG_LEXICON.get(lower.as_str()) {
        return tag;
    }
    if lower.chars().all(|c| c.is_ascii_digit()) {
        return "CD";
    }
    for ordinal in ["st", "nd", "rd", "th"] {
        if let Some(stem) = lower.strip_suffix(ordinal) {
            if !stem.is_empty() && stem.chars().all(|c| c.is_ascii_digit()) {
                return "JJ";
            }
        }
    }

    let len = lower.chars().count();
    if lower.ends_with("ly") && len > 3 {
        return "RB";
    }
    if lower.ends_with("ing") && len > 4 {
        return "VBG";
    }
    if lower.ends_with("ed") && len > 3 {
        return "VBD";
    }
    for suffix in [
        "ness", "ment", "tion", "sion", "ship", "hood", "ism", "ity", "ance", "ence",
    ] {
        if lower.ends_with(suffix) {
            return "NN";
        }
    }
    for suffix in ["ous", "ful", "able", "ible", "ive", "ish", "less", "al", "ic"] {
        if lower.ends_with(suffix) {
            return "JJ";
        }
    }
    if lower.ends_with("est") && len > 4 {
        return "JJS";
    }
    if first.is_uppercase() {
        return "NNP";
    }
    if lower.ends_with('s')
        && len > 3
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        return "NNS";
    }
    "NN"
}

fn category_for(tag: &str) -> PosCategory {
    if tag.starts_with('N') {
        PosCategory::Noun
    } else if tag.starts_with('V') {
        PosCategory::Verb
    } else if tag.starts_with('J') {
        PosCategory::Adjective
    } else if tag.starts_with('R') {
        PosCategory::Adverb
    } else if tag == "PRP" || tag == "PRP$" {
        PosCategory::Pronoun
    } else if tag == "IN" || tag == "TO" {
        PosCategory::Preposition
    } else {
        PosCategory::Other
    }
}

fn pos_distribution(text: &str) -> Vec<PosBucket> {
    let tokens = pos_tokens(text);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut counts: HashMap<PosCategory, usize> = HashMap::new();
    for token in &tokens {
        *counts.entry(category_for(tag_token(token))).or_insert(0) += 1;
    }
    let total = tokens.len() as f64;

    let mut ranked: Vec<(PosCategory, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.name().cmp(b.0.name())));

    ranked
        .into_iter()
        .map(|(category, count)| PosBucket {
            category,
            percentage: (count as f64 / total * 1000.0).round() / 10.0,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Stylometric profiler
// ---------------------------------------------------------------------------

pub fn profile(text: &str) -> StylometricProfile {
    profile_with(text, SentenceStrategy::RuleBased)
}

pub fn profile_with(text: &str, strategy: SentenceStrategy) -> StylometricProfile {
    let word_tokens = words(text);
    let sentence_tokens = split_sentences(text, strategy);

    let word_count = word_tokens.len();
    let sentence_count = sentence_tokens.len();

    let distinct: HashSet<&str> = word_tokens.iter().map(String::as_str).collect();
    let type_token_ratio = if word_count > 0 {
        distinct.len() as f64 / word_count as f64
    } else {
        0.0
    };

    let (flesch_kincaid_grade, automated_readability_index) =
        readability(&word_tokens, sentence_count);

    let sentiment_compound = sentiment_compound(text);

    StylometricProfile {
        word_count,
        sentence_count,
        type_token_ratio,
        flesch_kincaid_grade,
        automated_readability_index,
        sentiment_label: sentiment_label(sentiment_compound),
        sentiment_compound,
        pos_distribution: pos_distribution(text),
    }
}

// ---------------------------------------------------------------------------
// Authorship features
// ---------------------------------------------------------------------------

pub fn extract_features(text: &str) -> AuthorshipFeatures {
    extract_features_with(text, SentenceStrategy::RuleBased)
}

fn extract_features_with(text: &str, strategy: SentenceStrategy) -> AuthorshipFeatures {
    let word_tokens = words(text);
    let sentence_tokens = split_sentences(text, strategy);

    let avg_word_length = if word_tokens.is_empty() {
        0.0
    } else {
        word_tokens.iter().map(|w| w.chars().count()).sum::<usize>() as f64
            / word_tokens.len() as f64
    };

    let avg_sentence_length = if sentence_tokens.is_empty() {
        0.0
    } else {
        word_tokens.len() as f64 / sentence_tokens.len() as f64
    };

    let char_count = text.chars().count();
    let punctuation_ratio = if char_count == 0 {
        0.0
    } else {
        PUNCT_RE.find_iter(text).count() as f64 / char_count as f64
    };

    let mut frequency: HashMap<&str, usize> = HashMap::new();
    for word in &word_tokens {
        *frequency.entry(word.as_str()).or_insert(0) += 1;
    }
    let distinct = frequency.len();
    let repeated = frequency.values().filter(|&&count| count > 1).count();
    let repetition_score = if distinct > 0 {
        repeated as f64 / distinct as f64
    } else {
        0.0
    };
    let complexity_score = if word_tokens.is_empty() {
        0.0
    } else {
        distinct as f64 / word_tokens.len() as f64
    };

    AuthorshipFeatures {
        avg_word_length,
        avg_sentence_length,
        punctuation_ratio,
        repetition_score,
        complexity_score,
    }
}

// ---------------------------------------------------------------------------
// Authorship scoring
// ---------------------------------------------------------------------------

/// Decision seam for authorship scoring. The shipped implementation is a
/// fixed-weight rule table; a learned estimator can slot in behind the same
/// interface without touching callers.
pub trait Classifier {
    fn classify(&self, features: &AuthorshipFeatures) -> (AuthorshipLabel, f64);
}

pub struct RuleBasedClassifier;

impl Classifier for RuleBasedClassifier {
    fn classify(&self, features: &AuthorshipFeatures) -> (AuthorshipLabel, f64) {
        let mut score = 0.0f64;
        if features.repetition_score > TUNING.repetition_threshold {
            score += TUNING.repetition_weight;
        }
        if features.avg_sentence_length > TUNING.sentence_length_threshold {
            score += TUNING.sentence_length_weight;
        }
        if features.complexity_score < TUNING.complexity_threshold {
            score += TUNING.complexity_weight;
        }
        if features.punctuation_ratio < TUNING.punctuation_threshold {
            score += TUNING.punctuation_weight;
        }

        let label = if score > TUNING.ai_cutoff {
            AuthorshipLabel::Ai
        } else {
            AuthorshipLabel::Human
        };
        let confidence = (score + TUNING.confidence_offset)
            .clamp(TUNING.confidence_min, TUNING.confidence_max);
        (label, confidence)
    }
}

pub fn predict_authorship(text: &str) -> AuthorshipPrediction {
    predict_authorship_with(text, SentenceStrategy::RuleBased)
}

pub fn predict_authorship_with(text: &str, strategy: SentenceStrategy) -> AuthorshipPrediction {
    let features = extract_features_with(text, strategy);
    let (label, confidence) = RuleBasedClassifier.classify(&features);
    AuthorshipPrediction {
        label,
        confidence,
        features,
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

pub fn analyze(text: &str) -> StoryAnalysis {
    analyze_with(text, SentenceStrategy::RuleBased)
}

pub fn analyze_with(text: &str, strategy: SentenceStrategy) -> StoryAnalysis {
    let profile = profile_with(text, strategy);
    let authorship = predict_authorship_with(text, strategy);
    debug!(
        words = profile.word_count,
        sentences = profile.sentence_count,
        "analyzed text"
    );
    StoryAnalysis {
        profile,
        authorship,
    }
}

/// Check that raw bytes are analyzable text: valid UTF-8 with no interior NUL.
pub fn validate_text(bytes: &[u8]) -> Result<&str, AnalysisError> {
    let text = std::str::from_utf8(bytes).map_err(|e| AnalysisError::InvalidInput {
        reason: format!("invalid utf-8 at byte {}", e.valid_up_to()),
    })?;
    if text.contains('\0') {
        return Err(AnalysisError::InvalidInput {
            reason: "text contains NUL bytes".to_string(),
        });
    }
    Ok(text)
}

pub fn analyze_bytes(bytes: &[u8]) -> Result<StoryAnalysis, AnalysisError> {
    Ok(analyze(validate_text(bytes)?))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_extraction_lowercases_and_skips_punctuation() {
        assert_eq!(words("Hello, World!"), vec!["hello", "world"]);
        assert!(words("!!! ... ???").is_empty());
        assert!(words("").is_empty());
    }

    #[test]
    fn rule_segmenter_keeps_abbreviations_together() {
        let sents = sentences("Dr. Smith arrived. He sat down.");
        assert_eq!(sents, vec!["Dr. Smith arrived.", "He sat down."]);
    }

    #[test]
    fn rule_segmenter_keeps_initials_and_decimals() {
        assert_eq!(sentences("J. K. Rowling wrote it.").len(), 1);
        assert_eq!(sentences("It costs 3.14 dollars. That is cheap.").len(), 2);
    }

    #[test]
    fn rule_segmenter_handles_ellipsis_and_mixed_terminals() {
        let sents = sentences("Wait... what? Yes!");
        assert_eq!(sents, vec!["Wait... what?", "Yes!"]);
    }

    #[test]
    fn rule_segmenter_keeps_trailing_fragment() {
        assert_eq!(sentences("hello world"), vec!["hello world"]);
        assert!(sentences("").is_empty());
        assert!(sentences("   \n\t ").is_empty());
    }

    #[test]
    fn naive_segmenter_is_a_distinct_strategy() {
        let text = "Dr. Smith arrived. He sat down.";
        assert_eq!(sentences(text).len(), 2);
        assert_eq!(sentences_naive(text).len(), 3);
    }

    #[test]
    fn syllable_counts() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("hello"), 2);
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables("idea"), 2);
        // Silent final e
        assert_eq!(count_syllables("home"), 1);
        assert_eq!(count_syllables("table"), 2);
        // Every word has at least one
        assert_eq!(count_syllables("tsk"), 1);
    }

    #[test]
    fn sentiment_label_thresholds_are_inclusive() {
        assert_eq!(sentiment_label(0.05), SentimentLabel::Positive);
        assert_eq!(sentiment_label(-0.05), SentimentLabel::Negative);
        assert_eq!(sentiment_label(0.0), SentimentLabel::Neutral);
        assert_eq!(sentiment_label(0.0499), SentimentLabel::Neutral);
        assert_eq!(sentiment_label(-0.0499), SentimentLabel::Neutral);
    }

    #[test]
    fn negation_flips_polarity() {
        let plain = sentiment_compound("The day was good.");
        let negated = sentiment_compound("The day was not good.");
        assert!(plain > 0.05, "got {plain}");
        assert!(negated < -0.05, "got {negated}");
    }

    #[test]
    fn boosters_amplify() {
        let plain = sentiment_compound("The day was good.");
        let boosted = sentiment_compound("The day was very good.");
        assert!(boosted > plain, "boosted {boosted} <= plain {plain}");
    }

    #[test]
    fn compound_stays_in_range() {
        let texts = [
            "",
            "love love love love love love love love",
            "hate hate hate hate hate hate hate hate",
            "a plain sentence with no charged words at all",
        ];
        for text in texts {
            let c = sentiment_compound(text);
            assert!((-1.0..=1.0).contains(&c), "{text:?} gave {c}");
        }
    }

    #[test]
    fn pos_tokens_split_clitics_and_punctuation() {
        assert_eq!(pos_tokens("don't"), vec!["do", "n't"]);
        assert_eq!(pos_tokens("it's fine."), vec!["it", "'s", "fine", "."]);
        assert_eq!(
            pos_tokens("the dogs' bone"),
            vec!["the", "dogs", "'", "bone"]
        );
    }

    #[test]
    fn tagger_covers_closed_classes_and_suffixes() {
        assert_eq!(tag_token("the"), "DT");
        assert_eq!(tag_token("The"), "DT");
        assert_eq!(tag_token("they"), "PRP");
        assert_eq!(tag_token("ran"), "VBD");
        assert_eq!(tag_token("quickly"), "RB");
        assert_eq!(tag_token("jumping"), "VBG");
        assert_eq!(tag_token("walked"), "VBD");
        assert_eq!(tag_token("happiness"), "NN");
        assert_eq!(tag_token("famous"), "JJ");
        assert_eq!(tag_token("42"), "CD");
        assert_eq!(tag_token("3rd"), "JJ");
        assert_eq!(tag_token("Kennedy"), "NNP");
        assert_eq!(tag_token("dogs"), "NNS");
        assert_eq!(tag_token("stone"), "NN");
        assert_eq!(tag_token("."), ".");
    }

    #[test]
    fn category_mapping_follows_tag_prefixes() {
        assert_eq!(category_for("NN"), PosCategory::Noun);
        assert_eq!(category_for("NNS"), PosCategory::Noun);
        assert_eq!(category_for("NNP"), PosCategory::Noun);
        assert_eq!(category_for("VBD"), PosCategory::Verb);
        assert_eq!(category_for("JJ"), PosCategory::Adjective);
        assert_eq!(category_for("RB"), PosCategory::Adverb);
        assert_eq!(category_for("PRP"), PosCategory::Pronoun);
        assert_eq!(category_for("PRP$"), PosCategory::Pronoun);
        assert_eq!(category_for("IN"), PosCategory::Preposition);
        assert_eq!(category_for("TO"), PosCategory::Preposition);
        assert_eq!(category_for("DT"), PosCategory::Other);
        assert_eq!(category_for("."), PosCategory::Other);
    }

    #[test]
    fn distribution_sorts_by_count_then_name() {
        let buckets = pos_distribution("The cat sat. The cat ran.");
        let shaped: Vec<(&str, f64)> = buckets
            .iter()
            .map(|b| (b.category.name(), b.percentage))
            .collect();
        assert_eq!(shaped, vec![("Other", 50.0), ("Noun", 25.0), ("Verb", 25.0)]);
    }
}
