// tests/core/variants.rs
use classical_cipher::core::{atbash, caesar, rot13, vigenere, Cipher, Keyword, Shift};
use classical_cipher::{Algorithm, Direction};

#[test]
fn test_atbash_hello() {
    let once = atbash("HELLO");
    assert_eq!(once, "SVOOL");
    assert_eq!(atbash(&once), "HELLO");
}

#[test]
fn test_atbash_reflects_around_n() {
    assert_eq!(atbash("AZ"), "ZA");
    assert_eq!(atbash("N"), "N");
    assert_eq!(atbash("ÑM"), "MÑ");
    assert_eq!(atbash("ñ"), "M");
}

#[test]
fn test_atbash_ignores_direction() {
    let cipher = Cipher::Atbash;
    assert_eq!(
        cipher.apply("Hola mundo", Direction::Encode),
        cipher.apply("Hola mundo", Direction::Decode)
    );
}

#[test]
fn test_atbash_keeps_digits_in_place() {
    assert_eq!(atbash("AB12CD"), "ZY12XW");
}

#[test]
fn test_caesar_scenarios() {
    assert_eq!(caesar("ABC", Some(3), Direction::Encode), "DEF");
    assert_eq!(caesar("DEF", Some(3), Direction::Decode), "ABC");
    assert_eq!(caesar("", Some(3), Direction::Encode), "");
}

#[test]
fn test_caesar_includes_enye() {
    assert_eq!(caesar("XYZ", Some(3), Direction::Encode), "ABC");
    assert_eq!(
        caesar("Hola, Mundo!", Some(3), Direction::Encode),
        "KRÑD, OXPGR!"
    );
    assert_eq!(caesar("M", Some(2), Direction::Encode), "Ñ");
}

#[test]
fn test_caesar_bad_shift_uses_three() {
    crate::common::setup(); // fallback debug! events show with --features logging

    let expected = caesar("abc", Some(3), Direction::Encode);
    assert_eq!(caesar("abc", None, Direction::Encode), expected);
    assert_eq!(caesar("abc", Some(0), Direction::Encode), expected);
    assert_eq!(caesar("abc", Some(40), Direction::Encode), expected);
}

#[test]
fn test_rot13_latin_pairs() {
    assert_eq!(rot13("HELLO", Direction::Encode), "URYYB");
    assert_eq!(rot13("AN MZ", Direction::Encode), "NA ZM");
    assert_eq!(rot13("Ñ", Direction::Encode), "Ñ");
}

#[test]
fn test_rot13_is_its_own_inverse() {
    let msg = "EL NIÑO JUEGA";
    let once = rot13(msg, Direction::Encode);
    assert_ne!(once, msg);
    assert_eq!(rot13(&once, Direction::Encode), msg);
    assert_eq!(rot13(msg, Direction::Decode), once);
}

#[test]
fn test_vigenere_sol() {
    assert_eq!(vigenere("ATAQUE", Some("sol"), Direction::Encode), "SILJJO");
    assert_eq!(vigenere("SILJJO", Some("SOL"), Direction::Decode), "ATAQUE");
}

#[test]
fn test_vigenere_keyword_skips_spaces() {
    assert_eq!(vigenere("ata que", Some("sol"), Direction::Encode), "SIL JJO");
    assert_eq!(
        vigenere("a-t-a-q-u-e", Some("sol"), Direction::Encode),
        "S-I-L-J-J-O"
    );
}

#[test]
fn test_vigenere_empty_keyword_is_identity() {
    assert_eq!(vigenere("A B", Some(""), Direction::Encode), "A B");
    assert_eq!(vigenere("a b", None, Direction::Decode), "A B");
    assert_eq!(vigenere("hola", Some("42"), Direction::Encode), "HOLA");
}

#[test]
fn test_single_letter_keyword_matches_caesar() {
    assert_eq!(
        vigenere("Cifrado clásico", Some("d"), Direction::Encode),
        caesar("Cifrado clásico", Some(3), Direction::Encode)
    );
}

#[test]
fn test_cipher_new_ignores_unused_params() {
    assert_eq!(Cipher::new(Algorithm::Atbash, Some(9), Some("x")), Cipher::Atbash);
    assert_eq!(Cipher::new(Algorithm::Rot13, Some(9), Some("x")), Cipher::Rot13);
    assert_eq!(
        Cipher::new(Algorithm::Caesar, Some(9), Some("x")),
        Cipher::Caesar(Shift::resolve(Some(9)))
    );
    assert_eq!(
        Cipher::new(Algorithm::Vigenere, Some(9), Some("x")),
        Cipher::Vigenere(Keyword::clean(Some("x")))
    );
    for algorithm in Algorithm::ALL {
        assert_eq!(Cipher::new(algorithm, None, None).algorithm(), algorithm);
    }
}
