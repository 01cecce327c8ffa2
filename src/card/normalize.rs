/// Free-text to BIN normalization
use super::{Bin, BIN_MAX_LEN, BIN_MIN_LEN};

const COMMAND: &str = "/bin";

/// Strip a leading `/bin` or `/bin@botname` command token
fn strip_command(text: &str) -> &str {
    let Some(head) = text.get(..COMMAND.len()) else {
        return text;
    };
    if !head.eq_ignore_ascii_case(COMMAND) {
        return text;
    }

    let mut rest = &text[COMMAND.len()..];
    if let Some(mention) = rest.strip_prefix('@') {
        let name_len = mention
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(mention.len());
        // A bare '@' is not a mention
        if name_len > 0 {
            rest = &mention[name_len..];
        }
    }

    rest.trim_start()
}

/// Extract the canonical BIN from arbitrary user text
///
/// Every non-digit is dropped, fewer than 6 digits is a failure and anything
/// past the 8th digit is discarded.
pub fn extract_bin(text: &str) -> Option<Bin> {
    let digits: String = strip_command(text)
        .chars()
        .filter(char::is_ascii_digit)
        .take(BIN_MAX_LEN)
        .collect();

    if digits.len() < BIN_MIN_LEN {
        return None;
    }

    Bin::parse(&digits)
}

/// True when the text holds a run of 6+ digits separated only by spaces or dashes
pub fn contains_bin_candidate(text: &str) -> bool {
    let mut run = 0;
    for c in text.chars() {
        match c {
            '0'..='9' => {
                run += 1;
                if run >= BIN_MIN_LEN {
                    return true;
                }
            }
            ' ' | '-' => {}
            _ => run = 0,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bin(text: &str) -> Option<String> {
        extract_bin(text).map(|b| b.as_str().to_string())
    }

    #[test]
    fn test_plain_digits() {
        assert_eq!(bin("457173"), Some("457173".to_string()));
        assert_eq!(bin("45717360"), Some("45717360".to_string()));
    }

    #[test]
    fn test_command_with_spaces() {
        assert_eq!(bin("/bin 457173 60"), Some("45717360".to_string()));
        assert_eq!(bin("/BIN 5375-4112"), Some("53754112".to_string()));
    }

    #[test]
    fn test_mention_digits_are_not_part_of_bin() {
        assert_eq!(bin("/bin@card2024_bot 457173"), Some("457173".to_string()));
        assert_eq!(bin("/bin@bot 537541"), Some("537541".to_string()));
    }

    #[test]
    fn test_too_few_digits() {
        assert_eq!(bin("hello"), None);
        assert_eq!(bin("12345"), None);
        assert_eq!(bin("/bin 12 34 5"), None);
        assert_eq!(bin(""), None);
    }

    #[test]
    fn test_truncates_full_pan() {
        assert_eq!(bin("4571 7360 1234 5678"), Some("45717360".to_string()));

        let long = "98765432123456789";
        assert_eq!(bin(long).unwrap().len(), 8);
        assert_eq!(bin(long), Some("98765432".to_string()));
    }

    #[test]
    fn test_idempotent_on_canonical_bins() {
        for input in ["card 457173", "5375 41 12 99 00", "/bin 400000"] {
            let once = extract_bin(input).unwrap();
            let twice = extract_bin(once.as_str()).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_non_ascii_text_does_not_panic() {
        assert_eq!(bin("/бін 457173"), Some("457173".to_string()));
        assert_eq!(bin("💳"), None);
    }

    #[test]
    fn test_contains_bin_candidate() {
        assert!(contains_bin_candidate("my card is 4571 7360"));
        assert!(contains_bin_candidate("4-5-7-1-7-3"));
        assert!(!contains_bin_candidate("call me at 12345"));
        assert!(!contains_bin_candidate("12a3456"));
        assert!(!contains_bin_candidate("no digits here"));
    }
}
