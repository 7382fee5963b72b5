use assert_matches::assert_matches;
use std::io::Cursor;
use wordle_onestep_solver::*;

#[test]
fn word_bank_from_reader_skips_blank_lines_and_lowercases() {
    let mut cursor = Cursor::new(String::from("Worda\n\nwordb\nOTHER\n\nsmore\n"));

    let word_bank = WordBank::from_reader(&mut cursor).unwrap();

    assert_eq!(word_bank.len(), 4);
    assert_eq!(word_bank.word_length(), 5);
    assert!(word_bank.contains("worda"));
    assert!(word_bank.contains("other"));
    assert!(!word_bank.contains("OTHER"));
}

#[test]
fn word_bank_from_reader_rejects_mixed_lengths() {
    let mut cursor = Cursor::new(String::from("worda\nlong-word\n"));

    assert!(WordBank::from_reader(&mut cursor).is_err());
}

#[test]
fn word_bank_from_iterator_rejects_empty_list() {
    let no_words: Vec<&str> = vec![];

    assert_matches!(
        WordBank::from_iterator(no_words),
        Err(SolverError::InvalidWordList)
    );
}

#[test]
fn word_bank_preserves_order() {
    let word_bank = WordBank::from_iterator(["worda", "wordb", "smore"]).unwrap();

    let words: Vec<&str> = word_bank.iter().map(|word| word.as_ref()).collect();
    assert_eq!(words, vec!["worda", "wordb", "smore"]);
}
