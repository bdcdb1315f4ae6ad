// tests/core/alphabet.rs
use classical_cipher::consts::{ALPHABET, ALPHABET_LEN};
use classical_cipher::core::{contains, position_of, symbol_at, true_mod};

#[test]
fn test_alphabet_has_27_unique_symbols() {
    assert_eq!(ALPHABET_LEN, 27);
    let mut sorted = ALPHABET.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), 27);
}

#[test]
fn test_lookup_roundtrip_over_every_symbol() {
    for &symbol in &ALPHABET {
        let pos = position_of(symbol).unwrap();
        assert!(pos < 27);
        assert_eq!(symbol_at(pos as i64), symbol);
    }
}

#[test]
fn test_symbol_at_wraps_negative_indices() {
    assert_eq!(symbol_at(-1), 'Z');
    assert_eq!(symbol_at(-13), 'Ñ');
    assert_eq!(symbol_at(27), 'A');
    assert_eq!(symbol_at(-54), 'A');
}

#[test]
fn test_true_mod_range() {
    for n in -100i64..100 {
        let m = true_mod(n);
        assert!(m < 27, "true_mod({n}) = {m}");
        assert_eq!((m as i64 - n).rem_euclid(27), 0);
    }
}

#[test]
fn test_non_members() {
    for c in [' ', '1', '!', 'a', 'ñ', 'Ç', 'É', 'Ω'] {
        assert!(!contains(c), "{c:?} should not be a symbol");
        assert_eq!(position_of(c), None);
    }
}
