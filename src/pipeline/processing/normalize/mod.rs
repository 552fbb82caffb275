use crate::domain::{LeadField, NormalizedRow, RawRow};

/// Canonicalize a raw CSV row.
///
/// Every field is trimmed; `email` is lowercased and `company` has internal
/// whitespace runs collapsed to a single space. Missing columns become `""`.
pub fn normalize(raw: &RawRow) -> NormalizedRow {
    let field = move |f: LeadField| raw.get(f.as_str()).trim_matches(is_separator_space);

    NormalizedRow {
        first_name: field(LeadField::FirstName).to_string(),
        last_name: field(LeadField::LastName).to_string(),
        email: field(LeadField::Email).to_lowercase(),
        company: collapse_whitespace(field(LeadField::Company)),
        notes: field(LeadField::Notes).to_string(),
    }
}

/// Normalize every row, preserving input order
pub fn normalize_batch(rows: &[RawRow]) -> Vec<NormalizedRow> {
    rows.iter().map(normalize).collect()
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators (`\x1c`..=`\x1f`),
/// which lead exports treat as blank space
pub fn is_separator_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn collapse_whitespace(value: &str) -> String {
    value
        .split(is_separator_space)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
