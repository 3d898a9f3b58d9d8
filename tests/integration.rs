use stylometer::{
    analyze, analyze_bytes, predict_authorship, profile, sentences, sentences_naive, words,
    AnalysisError, AuthorshipLabel, SentimentLabel,
};

#[test]
fn counts_match_the_tokenizer() {
    let texts = [
        "The cat sat. The cat ran.",
        "One sentence only",
        "Dr. Smith arrived. He sat down.",
        "Punctuation... everywhere?! Yes.",
    ];
    for text in texts {
        let p = profile(text);
        assert_eq!(p.word_count, words(text).len(), "word count for {text:?}");
        assert_eq!(
            p.sentence_count,
            sentences(text).len(),
            "sentence count for {text:?}"
        );
    }
}

#[test]
fn empty_text_degrades_to_zero_values() {
    let p = profile("");
    assert_eq!(p.word_count, 0);
    assert_eq!(p.sentence_count, 0);
    assert_eq!(p.type_token_ratio, 0.0);
    assert_eq!(p.flesch_kincaid_grade, 0.0);
    assert_eq!(p.automated_readability_index, 0.0);
    assert_eq!(p.sentiment_label, SentimentLabel::Neutral);
    assert_eq!(p.sentiment_compound, 0.0);
    assert!(p.pos_distribution.is_empty());

    let a = predict_authorship("");
    assert_eq!(a.features.avg_word_length, 0.0);
    assert_eq!(a.features.avg_sentence_length, 0.0);
    assert_eq!(a.features.punctuation_ratio, 0.0);
    assert_eq!(a.features.repetition_score, 0.0);
    assert_eq!(a.features.complexity_score, 0.0);
}

#[test]
fn type_token_ratio_stays_in_unit_interval() {
    let texts = [
        "",
        "word",
        "word word word word",
        "every token here is fully distinct",
        "The cat sat. The cat ran.",
    ];
    for text in texts {
        let p = profile(text);
        assert!(
            (0.0..=1.0).contains(&p.type_token_ratio),
            "ttr out of range for {text:?}"
        );
        assert_eq!(p.type_token_ratio == 0.0, p.word_count == 0);
    }
}

#[test]
fn repeated_cat_text_profile() {
    let text = "The cat sat. The cat ran.";
    let p = profile(text);
    assert_eq!(p.word_count, 6);
    assert_eq!(p.sentence_count, 2);
    assert!((p.type_token_ratio - 4.0 / 6.0).abs() < 1e-12);
    // 0.39 * (6/2) + 11.8 * (6/6) - 15.59
    assert!((p.flesch_kincaid_grade - (-2.62)).abs() < 1e-6);
    // 4.71 * (18/6) + 0.5 * (6/2) - 21.43
    assert!((p.automated_readability_index - (-5.8)).abs() < 1e-6);
}

#[test]
fn repeated_cat_text_authorship() {
    let a = predict_authorship("The cat sat. The cat ran.");
    assert!((a.features.avg_sentence_length - 3.0).abs() < 1e-12);
    assert!((a.features.avg_word_length - 3.0).abs() < 1e-12);
    // {the, cat} repeat out of 4 distinct words
    assert!((a.features.repetition_score - 0.5).abs() < 1e-12);
    assert!((a.features.punctuation_ratio - 2.0 / 25.0).abs() < 1e-12);
    // Repetition and complexity rules fire, score 0.5 stays Human
    assert_eq!(a.label, AuthorshipLabel::Human);
    assert!((a.confidence - 0.6).abs() < 1e-12);
}

#[test]
fn all_four_rules_fire_as_ai() {
    // One long unpunctuated sentence, heavy repetition, low diversity
    let text = "the cat and the dog ran over the hill and the cat and the dog \
                ran down the road and the cat and the dog ran back home";
    let a = predict_authorship(text);
    assert!(a.features.repetition_score > 0.3);
    assert!(a.features.avg_sentence_length > 15.0);
    assert!(a.features.complexity_score < 0.7);
    assert!(a.features.punctuation_ratio < 0.05);
    assert_eq!(a.label, AuthorshipLabel::Ai);
    assert!((a.confidence - 0.95).abs() < 1e-12);
}

#[test]
fn confidence_is_always_clamped() {
    let texts = [
        "",
        "Short.",
        "The cat sat. The cat ran.",
        "the cat and the dog ran over the hill and the cat and the dog \
         ran down the road and the cat and the dog ran back home",
        "Completely distinct tokens everywhere; punctuation abounds, truly: yes!",
    ];
    for text in texts {
        let a = predict_authorship(text);
        assert!(
            (0.6..=0.95).contains(&a.confidence),
            "confidence {} out of range for {text:?}",
            a.confidence
        );
    }
}

#[test]
fn analysis_is_idempotent() {
    let text = "Dr. Smith arrived at 3.15 in the afternoon. He was not happy about it.";
    let first = serde_json::to_value(analyze(text)).unwrap();
    let second = serde_json::to_value(analyze(text)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn pos_percentages_sum_to_one_hundred() {
    let texts = [
        "The quick brown fox jumps over the lazy dog.",
        "She walked slowly through the quiet forest and smiled.",
        "The cat sat. The cat ran.",
    ];
    for text in texts {
        let p = profile(text);
        assert!(p.word_count > 0);
        let sum: f64 = p.pos_distribution.iter().map(|b| b.percentage).sum();
        assert!(
            (sum - 100.0).abs() <= 0.1,
            "percentages sum to {sum} for {text:?}"
        );
    }
}

#[test]
fn sentiment_labels_for_charged_text() {
    let p = profile("The wonderful story filled everyone with joy and delight.");
    assert_eq!(p.sentiment_label, SentimentLabel::Positive);
    assert!(p.sentiment_compound > 0.05);

    let n = profile("The terrible disaster brought misery and grief.");
    assert_eq!(n.sentiment_label, SentimentLabel::Negative);
    assert!(n.sentiment_compound < -0.05);

    let z = profile("The committee reviewed the document on Tuesday.");
    assert_eq!(z.sentiment_label, SentimentLabel::Neutral);
}

#[test]
fn segmenters_disagree_on_abbreviations() {
    let text = "Mr. Jones spoke first. Mrs. Park answered.";
    assert_eq!(sentences(text).len(), 2);
    assert_eq!(sentences_naive(text).len(), 4);
}

#[test]
fn rejects_bytes_that_are_not_text() {
    let err = analyze_bytes(&[0xff, 0xfe, 0x41]).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidInput { .. }));

    let err = analyze_bytes(b"hello\0world").unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidInput { .. }));

    assert!(analyze_bytes(b"A plain sentence.").is_ok());
}

#[test]
fn json_output_is_valid() {
    let result = analyze("The cat sat on the mat. It was not a happy cat.");
    let json = serde_json::to_string_pretty(&result).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    let profile = parsed.get("profile").unwrap();
    assert!(profile.get("word_count").is_some());
    assert!(profile.get("sentence_count").is_some());
    assert!(profile.get("type_token_ratio").is_some());
    assert!(profile.get("flesch_kincaid_grade").is_some());
    assert!(profile.get("automated_readability_index").is_some());
    assert!(profile.get("sentiment_label").is_some());
    assert!(profile.get("sentiment_compound").is_some());
    assert!(profile.get("pos_distribution").is_some());

    let authorship = parsed.get("authorship").unwrap();
    assert!(authorship.get("label").is_some());
    assert!(authorship.get("confidence").is_some());
    let features = authorship.get("features").unwrap();
    assert!(features.get("avg_word_length").is_some());
    assert!(features.get("avg_sentence_length").is_some());
    assert!(features.get("punctuation_ratio").is_some());
    assert!(features.get("repetition_score").is_some());
    assert!(features.get("complexity_score").is_some());
}

#[test]
fn punctuation_only_text_has_no_words() {
    let p = profile("?!... --- ;;;");
    assert_eq!(p.word_count, 0);
    assert_eq!(p.type_token_ratio, 0.0);
    assert_eq!(p.flesch_kincaid_grade, 0.0);
    assert_eq!(p.sentiment_label, SentimentLabel::Neutral);
}
