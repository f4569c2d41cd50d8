use crate::models::{AgeLabel, Gender};

const FEMALE_TOKENS: &[&str] = &["fem", "mujer", "woman", "chica", "niña"];
const MALE_TOKENS: &[&str] = &["masc", "hombre", "man", "chico", "niño"];

/// Ordered age keyword groups. The first group with a hit wins.
const AGE_GROUPS: &[(&[&str], &[AgeLabel])] = &[
    (&["niñ", "child", "kid", "5-10"], &[AgeLabel::Child]),
    (&["adol", "teen", "oven", "12-18", "15"], &[AgeLabel::Teen]),
    (&["20", "veinte", "twenty"], &[AgeLabel::Twenties]),
    (&["30", "treinta", "thirty"], &[AgeLabel::Thirties]),
    (&["40", "cuarenta", "forty"], &[AgeLabel::Forties]),
    (&["50", "cincuenta", "fifty"], &[AgeLabel::Fifties]),
    (
        &["60", "sesenta", "sixty", "senior", "anciano", "abuel"],
        &[AgeLabel::Senior],
    ),
];

/// "adult" with nothing more specific widens to the four middle ranges
const ADULT_TOKENS: &[&str] = &["adult"];
pub const ADULT_FANOUT: &[AgeLabel] = &[
    AgeLabel::Twenties,
    AgeLabel::Thirties,
    AgeLabel::Forties,
    AgeLabel::Fifties,
];

#[inline]
fn contains_any(haystack: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|token| haystack.contains(token))
}

/// Map free-text gender to a canonical category
///
/// Female tokens are checked before male tokens, so a string hitting both
/// (e.g. "woman", which contains "man") resolves to `Female`. Empty or
/// unrecognized input is `Any`.
pub fn normalize_gender(raw: &str) -> Gender {
    if raw.is_empty() {
        return Gender::Any;
    }

    let lower = raw.to_lowercase();

    if contains_any(&lower, FEMALE_TOKENS) {
        Gender::Female
    } else if contains_any(&lower, MALE_TOKENS) {
        Gender::Male
    } else {
        Gender::Any
    }
}

/// Map free-text age to the set of compatible canonical labels
///
/// An empty slice means the text carried no age constraint.
pub fn normalize_age_label(raw: &str) -> &'static [AgeLabel] {
    let lower = raw.to_lowercase();

    for &(tokens, labels) in AGE_GROUPS {
        if contains_any(&lower, tokens) {
            return labels;
        }
    }

    if contains_any(&lower, ADULT_TOKENS) {
        return ADULT_FANOUT;
    }

    &[]
}
