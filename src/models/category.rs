//! Career categories and per-category scores

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::utils::errors::StepupError;

/// Career track a profession, course or quiz answer belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Creative,
    Tech,
    Social,
    Business,
    Green,
}

impl Category {
    /// Fixed display order, also used to break score ties
    pub const ALL: [Category; 5] = [
        Category::Creative,
        Category::Tech,
        Category::Social,
        Category::Business,
        Category::Green,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Creative => "creative",
            Category::Tech => "tech",
            Category::Social => "social",
            Category::Business => "business",
            Category::Green => "green",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Creative => "🎨",
            Category::Tech => "💻",
            Category::Social => "🤝",
            Category::Business => "📈",
            Category::Green => "🌿",
        }
    }

    /// Translation key holding the localized title
    pub fn title_key(&self) -> String {
        format!("categories.{}", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = StepupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "creative" => Ok(Category::Creative),
            "tech" => Ok(Category::Tech),
            "social" => Ok(Category::Social),
            "business" => Ok(Category::Business),
            "green" => Ok(Category::Green),
            other => Err(StepupError::InvalidInput(format!("Unknown category: {}", other))),
        }
    }
}

/// Running totals for each category.
///
/// Serialized as `{"creative": n, "tech": n, ...}`, the format stored in
/// `users.test_scores`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    #[serde(default)]
    pub creative: i64,
    #[serde(default)]
    pub tech: i64,
    #[serde(default)]
    pub social: i64,
    #[serde(default)]
    pub business: i64,
    #[serde(default)]
    pub green: i64,
}

impl CategoryScores {
    pub fn new(creative: i64, tech: i64, social: i64, business: i64, green: i64) -> Self {
        Self { creative, tech, social, business, green }
    }

    pub fn get(&self, category: Category) -> i64 {
        match category {
            Category::Creative => self.creative,
            Category::Tech => self.tech,
            Category::Social => self.social,
            Category::Business => self.business,
            Category::Green => self.green,
        }
    }

    /// Add another set of weights to these totals
    pub fn add(&mut self, weights: &CategoryScores) {
        self.creative += weights.creative;
        self.tech += weights.tech;
        self.social += weights.social;
        self.business += weights.business;
        self.green += weights.green;
    }

    pub fn total(&self) -> i64 {
        Category::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Categories ordered by score, highest first. Ties keep `Category::ALL` order.
    pub fn ranked(&self) -> Vec<(Category, i64)> {
        let mut ranked: Vec<(Category, i64)> =
            Category::ALL.iter().map(|c| (*c, self.get(*c))).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn top(&self) -> Category {
        self.ranked()[0].0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("tech".parse::<Category>().unwrap(), Category::Tech);
        assert!("sports".parse::<Category>().is_err());
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_ranked_is_stable_on_ties() {
        let scores = CategoryScores::new(3, 5, 3, 0, 5);
        let order: Vec<Category> = scores.ranked().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            vec![Category::Tech, Category::Green, Category::Creative, Category::Social, Category::Business]
        );
        assert_eq!(scores.top(), Category::Tech);
    }

    #[test]
    fn test_scores_json_format() {
        let scores = CategoryScores::new(1, 2, 3, 4, 5);
        let json = serde_json::to_value(scores).unwrap();
        assert_eq!(json["business"], 4);

        let parsed: CategoryScores = serde_json::from_str(r#"{"tech": 7}"#).unwrap();
        assert_eq!(parsed, CategoryScores::new(0, 7, 0, 0, 0));
    }

    fn weights() -> impl Strategy<Value = CategoryScores> {
        (0i64..3, 0i64..3, 0i64..3, 0i64..3, 0i64..3)
            .prop_map(|(c, t, s, b, g)| CategoryScores::new(c, t, s, b, g))
    }

    proptest! {
        #[test]
        fn aggregation_ignores_answer_order(answers in proptest::collection::vec(weights(), 0..12)) {
            let mut forward = CategoryScores::default();
            for w in &answers {
                forward.add(w);
            }

            let mut backward = CategoryScores::default();
            for w in answers.iter().rev() {
                backward.add(w);
            }

            prop_assert_eq!(forward, backward);
            prop_assert_eq!(forward.total(), answers.iter().map(|w| w.total()).sum::<i64>());
        }
    }
}
