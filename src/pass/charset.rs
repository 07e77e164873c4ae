//! Character categories and pool building.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters that are easy to misread for one another.
pub const AMBIGUOUS: &[char] = &['l', '1', 'I', 'o', 'O', '0'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl Category {
    /// Stable pool order.
    pub const ALL: [Category; 4] = [
        Category::Uppercase,
        Category::Lowercase,
        Category::Numbers,
        Category::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            Category::Uppercase => UPPERCASE,
            Category::Lowercase => LOWERCASE,
            Category::Numbers => NUMBERS,
            Category::Symbols => SYMBOLS,
        }
    }

    /// Whether `c` belongs to this class when scoring a password.
    pub fn matches(self, c: char) -> bool {
        match self {
            Category::Uppercase => c.is_ascii_uppercase(),
            Category::Lowercase => c.is_ascii_lowercase(),
            Category::Numbers => c.is_ascii_digit(),
            Category::Symbols => !c.is_ascii_alphanumeric(),
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Uppercase => "upper",
            Category::Lowercase => "lower",
            Category::Numbers => "numbers",
            Category::Symbols => "symbols",
        };
        f.write_str(name)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upper" | "uppercase" | "u" => Ok(Category::Uppercase),
            "lower" | "lowercase" | "l" => Ok(Category::Lowercase),
            "numbers" | "digits" | "n" | "d" => Ok(Category::Numbers),
            "symbols" | "special" | "s" => Ok(Category::Symbols),
            other => Err(format!("unknown character set: {other}")),
        }
    }
}

/// Bitmask over [`Category`]. Iterates in [`Category::ALL`] order no matter
/// how it was assembled.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Category>", into = "Vec<Category>")]
pub struct CategorySet(u8);

impl CategorySet {
    pub const fn empty() -> Self {
        CategorySet(0)
    }

    pub const fn all() -> Self {
        CategorySet(0b1111)
    }

    pub fn insert(&mut self, category: Category) {
        self.0 |= category.bit();
    }

    pub fn remove(&mut self, category: Category) {
        self.0 &= !category.bit();
    }

    pub fn with(mut self, category: Category) -> Self {
        self.insert(category);
        self
    }

    pub fn without(mut self, category: Category) -> Self {
        self.remove(category);
        self
    }

    pub fn contains(self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = CategorySet::empty();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl From<Vec<Category>> for CategorySet {
    fn from(categories: Vec<Category>) -> Self {
        categories.into_iter().collect()
    }
}

impl From<CategorySet> for Vec<Category> {
    fn from(set: CategorySet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Debug for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|c| c.to_string()).collect();
        f.write_str(&names.join(","))
    }
}

/// Build the character pool for the enabled categories.
///
/// Alphabets are concatenated in [`Category::ALL`] order without
/// deduplication, so a category's share of the sampling mass is proportional
/// to how many of its characters survive. Ambiguous characters are stripped
/// from the concatenation as a whole. The result may be empty.
pub fn build(categories: CategorySet, exclude_ambiguous: bool) -> Vec<char> {
    let mut chars: Vec<char> = Vec::new();

    for category in categories.iter() {
        chars.extend(category.alphabet().chars());
    }

    if exclude_ambiguous {
        chars.retain(|c| !AMBIGUOUS.contains(c));
    }

    chars
}
