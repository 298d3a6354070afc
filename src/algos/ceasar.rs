use crate::constants::{ALPHABET_LEN, DIGIT_LEN};
use crate::utils::wrap_offset;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

pub fn classify(c: char) -> CharacterClass {
    match c {
        'a'..='z' => CharacterClass::Lowercase,
        'A'..='Z' => CharacterClass::Uppercase,
        '0'..='9' => CharacterClass::Digit,
        _ => CharacterClass::Other,
    }
}

/// Shifts a single character within its own class.
///
/// Returns `None` for anything outside `[a-zA-Z0-9]`; callers drop those
/// characters rather than passing them through.
pub fn shift_char(c: char, shift: i64, direction: Direction) -> Option<char> {
    let (base, modulus) = match classify(c) {
        CharacterClass::Lowercase => (b'a', ALPHABET_LEN),
        CharacterClass::Uppercase => (b'A', ALPHABET_LEN),
        CharacterClass::Digit => (b'0', DIGIT_LEN),
        CharacterClass::Other => return None,
    };

    let shift = match direction {
        Direction::Encrypt => shift,
        Direction::Decrypt => -(shift % i64::from(modulus)),
    };

    Some((wrap_offset(c as u8 - base, shift, modulus) + base) as char)
}

pub fn caesar_cipher(text: &str, shift: i64, direction: Direction) -> String {
    text.chars()
        .filter_map(|c| shift_char(c, shift, direction))
        .collect()
}

pub fn encrypt(text: &str, shift: i64) -> String {
    caesar_cipher(text, shift, Direction::Encrypt)
}

pub fn decrypt(text: &str, shift: i64) -> String {
    caesar_cipher(text, shift, Direction::Decrypt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn shifts_lowercase_words() {
        assert_eq!(encrypt("hello", 3), "khoor");
        assert_eq!(decrypt("khoor", 3), "hello");
    }

    #[test]
    fn strips_everything_but_letters_and_digits() {
        assert_eq!(encrypt("Attack At Dawn", 5), "FyyfhpFyIfbs");
        assert_eq!(encrypt("hi, there!\n", 0), "hithere");
    }

    #[test]
    fn digits_wrap_in_tens() {
        assert_eq!(encrypt("789", 5), "234");
        assert_eq!(decrypt("234", 5), "789");
    }

    #[test]
    fn standalone_digits_survive_encryption() {
        assert_eq!(encrypt("a1", 1), "b2");
        assert_eq!(decrypt(&encrypt("agent 007", 4), 4), "agent007");
    }

    #[test]
    fn empty_input_stays_empty() {
        for shift in 0..26 {
            assert_eq!(encrypt("", shift), "");
            assert_eq!(decrypt("", shift), "");
        }
    }

    #[test]
    fn negative_and_large_shifts_are_modular() {
        assert_eq!(encrypt("abc", -1), "zab");
        assert_eq!(encrypt("abc", 27), encrypt("abc", 1));
        assert_eq!(decrypt("zab", -1), "abc");
        assert_eq!(decrypt("abc", i64::MIN), encrypt("abc", -(i64::MIN % 26)));
    }

    #[test]
    fn non_ascii_is_dropped() {
        assert_eq!(encrypt("café", 1), "dbg");
        assert_eq!(classify('é'), CharacterClass::Other);
    }

    proptest! {
        #[test]
        fn lowercase_round_trips(text in "[a-z]{0,40}", shift in 0i64..26) {
            prop_assert_eq!(decrypt(&encrypt(&text, shift), shift), text);
        }

        #[test]
        fn uppercase_round_trips(text in "[A-Z]{0,40}", shift in 0i64..26) {
            prop_assert_eq!(decrypt(&encrypt(&text, shift), shift), text);
        }

        #[test]
        fn digits_round_trip(text in "[0-9]{0,40}", shift in 0i64..26) {
            prop_assert_eq!(decrypt(&encrypt(&text, shift), shift), text);
        }

        #[test]
        fn mixed_alphanumerics_round_trip(text in "[a-zA-Z0-9]{0,40}", shift in any::<i64>()) {
            prop_assert_eq!(decrypt(&encrypt(&text, shift), shift), text);
        }

        #[test]
        fn output_never_longer_than_input(text in "\\PC{0,40}", shift in any::<i64>()) {
            prop_assert!(encrypt(&text, shift).chars().count() <= text.chars().count());
        }
    }
}
