use crate::domain::model::LetterValue;

/// Letter groups and the digit each group maps to.
pub const LETTER_TABLE: [(&str, u8); 8] = [
    ("AIJQY", 1),
    ("BKR", 2),
    ("CGLS", 3),
    ("DMT", 4),
    ("EHNX", 5),
    ("UVW", 6),
    ("OZ", 7),
    ("FP", 8),
];

/// Digit for an uppercase Latin letter, 0 for anything else.
///
/// Unmapped characters (lowercase input, digits, punctuation, non-Latin
/// letters) are not rejected; they simply contribute nothing to a total.
pub fn letter_value(letter: char) -> u8 {
    match letter {
        'A' | 'I' | 'J' | 'Q' | 'Y' => 1,
        'B' | 'K' | 'R' => 2,
        'C' | 'G' | 'L' | 'S' => 3,
        'D' | 'M' | 'T' => 4,
        'E' | 'H' | 'N' | 'X' => 5,
        'U' | 'V' | 'W' => 6,
        'O' | 'Z' => 7,
        'F' | 'P' => 8,
        _ => 0,
    }
}

/// Uppercases the name, drops all whitespace and maps every remaining character.
pub fn map_letters(name: &str) -> Vec<LetterValue> {
    name.to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|letter| LetterValue {
            letter,
            value: letter_value(letter),
        })
        .collect()
}

pub fn letters_total(values: &[LetterValue]) -> u64 {
    values.iter().map(|v| u64::from(v.value)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_table_matches_letter_value() {
        for (letters, digit) in LETTER_TABLE {
            for letter in letters.chars() {
                assert_eq!(letter_value(letter), digit, "letter {}", letter);
            }
        }
    }

    #[test]
    fn test_table_covers_all_letters_except_none() {
        let mapped: usize = LETTER_TABLE.iter().map(|(l, _)| l.len()).sum();
        assert_eq!(mapped, 26);
        assert!(('A'..='Z').all(|c| letter_value(c) > 0));
    }

    #[test]
    fn test_unmapped_characters_are_zero() {
        assert_eq!(letter_value('Z'), 7);
        assert_eq!(letter_value('1'), 0);
        assert_eq!(letter_value('-'), 0);
        assert_eq!(letter_value('z'), 0);
        assert_eq!(letter_value('あ'), 0);
    }

    #[test]
    fn test_map_letters_strips_whitespace_and_uppercases() {
        let values = map_letters(" jo\thn ");
        let letters: String = values.iter().map(|v| v.letter).collect();
        assert_eq!(letters, "JOHN");
        assert_eq!(letters_total(&values), 1 + 7 + 5 + 5);
    }

    #[test]
    fn test_map_letters_keeps_unmapped_characters() {
        let values = map_letters("O'Neil");
        assert_eq!(values[1], LetterValue { letter: '\'', value: 0 });
        assert_eq!(letters_total(&values), 7 + 5 + 5 + 1 + 3);
    }
}
