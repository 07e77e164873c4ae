//! Strength heuristic.
//!
//! Not an entropy measurement: half the score rewards length (saturating at
//! 16 characters), the other half rewards each enabled character class that
//! actually shows up in the password.

use std::fmt;

use super::charset::{Category, CategorySet};

/// Length at which the length component saturates.
const SATURATION: usize = 16;
/// Denominator shared by both components (length / 32, classes / 8).
const SCALE: usize = 32;

/// Score `password` in `0..=100` against the categories it was generated with.
pub fn score(password: &str, categories: CategorySet) -> u8 {
    let len = password.chars().count().min(SATURATION);

    let classes = categories
        .iter()
        .filter(|&category| password.chars().any(|c| category.matches(c)))
        .count();

    // floor((len / 32 + classes / 8) * 100) without floating point.
    let total = (len + 4 * classes) * 100 / SCALE;
    total.min(100) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..30 => Strength::Weak,
            30..60 => Strength::Moderate,
            60..80 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Entropy in bits of a password drawn uniformly from a pool of `pool_len`.
pub fn entropy_bits(pool_len: usize, length: usize) -> f64 {
    if pool_len == 0 {
        return 0.0;
    }
    length as f64 * (pool_len as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(category: Category) -> CategorySet {
        CategorySet::empty().with(category)
    }

    #[test]
    fn four_char_all_classes() {
        let s = score("Ab3!", CategorySet::all());
        assert_eq!(s, 62);
        assert_eq!(Strength::from_score(s), Strength::Strong);
    }

    #[test]
    fn lowercase_only() {
        let s = score("abcdefgh", only(Category::Lowercase));
        assert_eq!(s, 37);
        assert_eq!(Strength::from_score(s), Strength::Moderate);
    }

    #[test]
    fn classes_must_be_enabled_to_count() {
        // Uppercase and digit present but not enabled.
        assert_eq!(score("Ab3!", only(Category::Lowercase)), 25);
    }

    #[test]
    fn classes_must_be_present_to_count() {
        assert_eq!(score("abcd", CategorySet::all()), 25);
    }

    #[test]
    fn length_saturates_at_half() {
        let long = "a".repeat(32);
        assert_eq!(score(&long, only(Category::Lowercase)), 62);
        let longer = "a".repeat(200);
        assert_eq!(score(&longer, only(Category::Lowercase)), 62);
    }

    #[test]
    fn maximum_is_one_hundred() {
        let pass = "Aa1!".repeat(8);
        assert_eq!(score(&pass, CategorySet::all()), 100);
    }

    #[test]
    fn empty_inputs_score_zero() {
        assert_eq!(score("", CategorySet::all()), 0);
        assert_eq!(score("", CategorySet::empty()), 0);
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        assert_eq!(score("ééééé", only(Category::Symbols)), 28);
    }

    #[test]
    fn label_boundaries() {
        let cases = [
            (0, Strength::Weak),
            (29, Strength::Weak),
            (30, Strength::Moderate),
            (59, Strength::Moderate),
            (60, Strength::Strong),
            (79, Strength::Strong),
            (80, Strength::VeryStrong),
            (100, Strength::VeryStrong),
        ];
        for (score, expected) in cases {
            assert_eq!(Strength::from_score(score), expected, "score {score}");
        }
        assert_eq!(Strength::VeryStrong.to_string(), "Very Strong");
    }

    #[test]
    fn entropy_of_empty_pool_is_zero() {
        assert_eq!(entropy_bits(0, 16), 0.0);
        assert_eq!(entropy_bits(16, 4), 16.0);
        assert!((entropy_bits(10, 3) - 9.965_784).abs() < 1e-5);
    }
}
