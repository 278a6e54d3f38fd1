//! Static character-to-Morse translation table.
//!
//! Covers the basic Latin letters and digits. Lookup expects uppercase
//! input; the encoder folds case before consulting the table.

/// Returns the Morse pattern for a supported character.
///
/// Patterns are non-empty strings over `.` and `-`. Characters outside
/// `A`-`Z` and `0`-`9` have no translation and return `None`.
pub fn pattern_for(c: char) -> Option<&'static str> {
    let pattern = match c {
        'A' => ".-",
        'B' => "-...",
        'C' => "-.-.",
        'D' => "-..",
        'E' => ".",
        'F' => "..-.",
        'G' => "--.",
        'H' => "....",
        'I' => "..",
        'J' => ".---",
        'K' => "-.-",
        'L' => ".-..",
        'M' => "--",
        'N' => "-.",
        'O' => "---",
        'P' => ".--.",
        'Q' => "--.-",
        'R' => ".-.",
        'S' => "...",
        'T' => "-",
        'U' => "..-",
        'V' => "...-",
        'W' => ".--",
        'X' => "-..-",
        'Y' => "-.--",
        'Z' => "--..",
        '0' => "-----",
        '1' => ".----",
        '2' => "..---",
        '3' => "...--",
        '4' => "....-",
        '5' => ".....",
        '6' => "-....",
        '7' => "--...",
        '8' => "---..",
        '9' => "----.",
        _ => return None,
    };
    Some(pattern)
}

/// Returns true if the character has a Morse translation.
pub fn is_supported(c: char) -> bool {
    pattern_for(c).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supported_chars() -> impl Iterator<Item = char> {
        ('A'..='Z').chain('0'..='9')
    }

    #[test]
    fn test_every_pattern_is_nonempty_dots_and_dashes() {
        for c in supported_chars() {
            let pattern = pattern_for(c).unwrap();
            assert!(!pattern.is_empty(), "pattern for {} is empty", c);
            assert!(
                pattern.chars().all(|f| f == '.' || f == '-'),
                "pattern for {} contains a foreign character: {}",
                c,
                pattern
            );
        }
    }

    #[test]
    fn test_known_patterns() {
        assert_eq!(pattern_for('S'), Some("..."));
        assert_eq!(pattern_for('O'), Some("---"));
        assert_eq!(pattern_for('E'), Some("."));
        assert_eq!(pattern_for('T'), Some("-"));
        assert_eq!(pattern_for('0'), Some("-----"));
        assert_eq!(pattern_for('5'), Some("....."));
    }

    #[test]
    fn test_digit_patterns_are_five_fragments() {
        for c in '0'..='9' {
            assert_eq!(pattern_for(c).unwrap().len(), 5);
        }
    }

    #[test]
    fn test_unsupported_characters() {
        assert_eq!(pattern_for('a'), None); // lowercase is the encoder's job
        assert_eq!(pattern_for('?'), None);
        assert_eq!(pattern_for(' '), None);
        assert_eq!(pattern_for('/'), None);
        assert_eq!(pattern_for('#'), None);
        assert_eq!(pattern_for('Ä'), None);
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported('A'));
        assert!(is_supported('9'));
        assert!(!is_supported('!'));
    }

    #[test]
    fn test_patterns_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for c in supported_chars() {
            assert!(
                seen.insert(pattern_for(c).unwrap()),
                "duplicate pattern for {}",
                c
            );
        }
    }
}
