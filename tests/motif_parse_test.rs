/// Integration tests for the motif tokenizer
///
/// The tokenizer is total and letter-anchored: tokens open at A-G
/// (either case), absorb the modifiers that follow, and everything
/// else is dropped silently.
use motifia_core::models::NoteLetter;
use motifia_core::parse::parse_motif;

#[test]
fn test_plain_sequence() {
    let tokens = parse_motif("CDE");
    assert_eq!(tokens.len(), 3);

    let letters: Vec<NoteLetter> = tokens.iter().map(|t| t.letter).collect();
    assert_eq!(letters, vec![NoteLetter::C, NoteLetter::D, NoteLetter::E]);

    for token in &tokens {
        assert!(!token.sharp, "plain letters carry no accidental");
        assert_eq!(token.octave_shift, 0, "plain letters carry no octave shift");
    }
}

#[test]
fn test_sharp_modifier() {
    let tokens = parse_motif("C#D");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].letter, NoteLetter::C);
    assert!(tokens[0].sharp);
    assert_eq!(tokens[0].octave_shift, 0);
    assert_eq!(tokens[1].letter, NoteLetter::D);
    assert!(!tokens[1].sharp);
    assert_eq!(tokens[1].octave_shift, 0);
}

#[test]
fn test_octave_markers() {
    let tokens = parse_motif("C*D\"");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].octave_shift, 1, "* raises by one octave");
    assert_eq!(tokens[1].octave_shift, -1, "\" lowers by one octave");
}

#[test]
fn test_stacked_octave_markers_all_count() {
    let tokens = parse_motif("G***A\"\"");
    assert_eq!(tokens[0].octave_shift, 3);
    assert_eq!(tokens[1].octave_shift, -2);

    // Opposing markers on one note cancel.
    let tokens = parse_motif("C*\"*");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].octave_shift, 1);
}

#[test]
fn test_noise_is_dropped_not_rejected() {
    let tokens = parse_motif("xyzC123D");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].letter, NoteLetter::C);
    assert_eq!(tokens[1].letter, NoteLetter::D);
    assert!(tokens.iter().all(|t| !t.sharp && t.octave_shift == 0));
}

#[test]
fn test_no_grammar_characters_yield_empty_sequence() {
    for input in ["", "hello world!", "xyz123-=+", "..;;!?", "HIJK"] {
        assert!(
            parse_motif(input).is_empty(),
            "expected no tokens for {:?}",
            input
        );
    }
}

#[test]
fn test_modifier_before_any_letter_is_discarded() {
    assert!(parse_motif("#*\"").is_empty());

    let tokens = parse_motif("#C");
    assert_eq!(tokens.len(), 1);
    assert!(!tokens[0].sharp, "a sharp with no open token attaches to nothing");
}

#[test]
fn test_trailing_modifier_attaches_to_last_token() {
    let tokens = parse_motif("CD#");
    assert_eq!(tokens.len(), 2);
    assert!(tokens[1].sharp);

    let tokens = parse_motif("E*");
    assert_eq!(tokens[0].octave_shift, 1);
}

#[test]
fn test_spaces_separate_nothing_and_attach_nothing() {
    let tokens = parse_motif("C D E");
    assert_eq!(tokens.len(), 3);

    // A modifier after a space still belongs to the last open token.
    let tokens = parse_motif("C #");
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].sharp);
}

#[test]
fn test_token_notation_reconstructs_normalized_text() {
    let tokens = parse_motif("c#* d\"\"E");
    let texts: Vec<String> = tokens.iter().map(|t| t.notation()).collect();
    assert_eq!(texts, vec!["C#*", "D\"\"", "E"]);

    // Reconstructed text re-parses to the same tokens.
    assert_eq!(parse_motif(&texts.join("")), tokens);
}

#[test]
fn test_parse_is_idempotent() {
    let inputs = ["C#DEF*G", "a\"b\"c", "  #C* x D\"\" "];
    for input in inputs {
        assert_eq!(parse_motif(input), parse_motif(input));
    }
}
