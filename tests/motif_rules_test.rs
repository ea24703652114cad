/// Integration tests for the advisory form validators
///
/// Both checks return a warning message or nothing; neither throws.
/// The alphabet check is intentionally looser than the tokenizer and
/// the two must not be unified.
use motifia_core::models::PartOfSpeech;
use motifia_core::parse::parse_motif;
use motifia_core::validate::{alphabet_violation, first_note_violation, ALPHABET_WARNING};

#[test]
fn test_alphabet_accepts_the_full_grammar() {
    assert_eq!(alphabet_violation("A#B*C\" D"), None);
    assert_eq!(alphabet_violation("abcdefg ABCDEFG #*\" "), None);
    assert_eq!(alphabet_violation(""), None);
}

#[test]
fn test_alphabet_rejects_anything_else() {
    for bad in ["A-B", "H", "C4", "C major", "c\nd", "Ω"] {
        assert_eq!(
            alphabet_violation(bad).as_deref(),
            Some(ALPHABET_WARNING),
            "expected a warning for {:?}",
            bad
        );
    }
}

#[test]
fn test_alphabet_check_is_looser_than_the_token_scan() {
    // A bare leading modifier is well-formed for the alphabet check
    // but produces no token. Both behaviors are kept as-is.
    assert_eq!(alphabet_violation("#"), None);
    assert!(parse_motif("#").is_empty());

    assert_eq!(alphabet_violation("*C"), None);
    assert_eq!(parse_motif("*C").len(), 1);
}

#[test]
fn test_first_note_rule_accepts_matching_starts() {
    assert_eq!(first_note_violation("Cmaj", PartOfSpeech::Noun), None);
    assert_eq!(first_note_violation("c*e", PartOfSpeech::Pronoun), None);
    assert_eq!(first_note_violation("DFA", PartOfSpeech::Verb), None);
    assert_eq!(first_note_violation("ACE", PartOfSpeech::Adjective), None);
    assert_eq!(first_note_violation("a", PartOfSpeech::Adverb), None);
    assert_eq!(first_note_violation("EGB", PartOfSpeech::Preposition), None);
    assert_eq!(first_note_violation("G", PartOfSpeech::Conjunction), None);
}

#[test]
fn test_first_note_rule_names_part_of_speech_and_letter() {
    assert_eq!(
        first_note_violation("Dmaj", PartOfSpeech::Noun).as_deref(),
        Some("Nouns must start with C")
    );
    assert_eq!(
        first_note_violation("C", PartOfSpeech::Verb).as_deref(),
        Some("Verbs must start with D")
    );
    assert_eq!(
        first_note_violation("C", PartOfSpeech::Adjective).as_deref(),
        Some("Adjectives must start with A")
    );
    assert_eq!(
        first_note_violation("C", PartOfSpeech::Adverb).as_deref(),
        Some("Adverbs must start with A")
    );
    assert_eq!(
        first_note_violation("D", PartOfSpeech::Pronoun).as_deref(),
        Some("Pronouns must start with C")
    );
    assert_eq!(
        first_note_violation("A", PartOfSpeech::Preposition).as_deref(),
        Some("Prepositions must start with E")
    );
    assert_eq!(
        first_note_violation("A", PartOfSpeech::Conjunction).as_deref(),
        Some("Conjunctions must start with G")
    );
}

#[test]
fn test_first_note_rule_ignores_leading_spaces_and_case() {
    assert_eq!(first_note_violation("  cDE", PartOfSpeech::Noun), None);
    assert!(first_note_violation(" dC", PartOfSpeech::Noun).is_some());
}

#[test]
fn test_first_note_rule_skips_empty_motifs() {
    assert_eq!(first_note_violation("", PartOfSpeech::Noun), None);
    assert_eq!(first_note_violation("   ", PartOfSpeech::Conjunction), None);
}

#[test]
fn test_first_note_rule_looks_at_raw_first_character() {
    // The check reads the first character, not the first parsed
    // token: a leading sharp fails even though the first token's
    // letter would match.
    assert!(first_note_violation("#C", PartOfSpeech::Noun).is_some());
}
