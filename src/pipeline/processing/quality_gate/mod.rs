use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{InvalidRow, NormalizedRow};

/// Minimal address shape: local part, `@`, and a domain containing a dot.
/// Deliberately loose; `a@b..c` is accepted. The ASCII separators `\x1c`..`\x1f`
/// count as whitespace, matching the normalizer.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s\x1C-\x1F]+@[^@\s\x1C-\x1F]+\.[^@\s\x1C-\x1F]+$")
        .expect("email pattern is a valid regex")
});

/// Result of running a batch through the gate
#[derive(Debug, Default)]
pub struct QualityGateOutcome {
    pub valid: Vec<NormalizedRow>,
    pub invalid: Vec<InvalidRow>,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// A row is valid when both name parts are present and the email has an address shape
pub fn is_valid(row: &NormalizedRow) -> bool {
    !row.first_name.is_empty() && !row.last_name.is_empty() && is_valid_email(&row.email)
}

/// Split rows into valid and invalid, in input order.
///
/// Invalid rows keep only their 1-based position and email.
pub fn partition(rows: Vec<NormalizedRow>) -> QualityGateOutcome {
    let mut outcome = QualityGateOutcome::default();

    for (index, row) in rows.into_iter().enumerate() {
        if is_valid(&row) {
            outcome.valid.push(row);
        } else {
            outcome.invalid.push(InvalidRow {
                row: index + 1,
                email: row.email,
            });
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(first: &str, last: &str, email: &str) -> NormalizedRow {
        NormalizedRow {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_email_boundaries() {
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a @b.c"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("a@b.c "));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_embedded_separator_is_rejected() {
        assert!(!is_valid_email("a\x1c@b.c"));
        assert!(!is_valid_email("a@b.\x1fc"));
    }

    #[test]
    fn test_loose_domains_are_accepted() {
        assert!(is_valid_email("a@b..c"));
        assert!(is_valid_email("first.last@mail.example.co.uk"));
    }

    #[test]
    fn test_names_are_required() {
        assert!(is_valid(&lead("Ada", "Lovelace", "ada@example.com")));
        assert!(!is_valid(&lead("", "Lovelace", "ada@example.com")));
        assert!(!is_valid(&lead("Ada", "", "ada@example.com")));
    }

    #[test]
    fn test_partition_records_positions() {
        let outcome = partition(vec![
            lead("Ada", "Lovelace", "ada@example.com"),
            lead("Bad", "", "bad@example.com"),
            lead("Grace", "Hopper", "grace@navy.mil"),
            lead("No", "Email", ""),
        ]);

        assert_eq!(outcome.valid.len(), 2);
        assert_eq!(
            outcome.invalid,
            vec![
                InvalidRow { row: 2, email: "bad@example.com".to_string() },
                InvalidRow { row: 4, email: String::new() },
            ]
        );
    }
}
