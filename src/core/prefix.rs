use crate::domain::model::Prefix;

/// Keeps the first three alphanumeric characters of `input`, in order and
/// with their original case. Shorter inputs give shorter prefixes.
pub fn extract_prefix(input: &str) -> Prefix {
    let prefix: String = input
        .chars()
        .filter(|c| c.is_alphanumeric())
        .take(Prefix::MAX_LEN)
        .collect();
    Prefix::new_unchecked(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_prefix_examples() {
        assert_eq!(extract_prefix("k2xyz").as_str(), "k2x");
        assert_eq!(extract_prefix("EV1").as_str(), "EV1");
        assert_eq!(extract_prefix("").as_str(), "");
        assert_eq!(extract_prefix("--W1AW--").as_str(), "W1A");
    }

    #[test]
    fn test_short_inputs_are_not_padded() {
        assert_eq!(extract_prefix("W").as_str(), "W");
        assert_eq!(extract_prefix("/-9/").as_str(), "9");
        assert!(extract_prefix("---///").is_empty());
    }

    #[test]
    fn test_portable_suffixes_and_separators_are_dropped() {
        assert_eq!(extract_prefix("VE3/K1ABC/P").as_str(), "VE3");
        assert_eq!(extract_prefix(" d l 1 abc").as_str(), "dl1");
    }

    #[test]
    fn test_output_is_bounded_alphanumeric_subsequence() {
        let inputs = [
            "JA1XYZ",
            "--",
            "a-b-c-d",
            "ÅÄÖ123",
            "9A/OK1",
            "  ",
            "x",
            "2E0ABC/M",
        ];
        for input in inputs {
            let prefix = extract_prefix(input);
            assert!(prefix.as_str().chars().count() <= Prefix::MAX_LEN);
            assert!(prefix.as_str().chars().all(char::is_alphanumeric));

            let expected: String = input
                .chars()
                .filter(|c| c.is_alphanumeric())
                .take(Prefix::MAX_LEN)
                .collect();
            assert_eq!(prefix.as_str(), expected, "input: {:?}", input);
        }
    }
}
