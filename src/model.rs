use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::error::FinderError;

/// A validated search term: trimmed, guaranteed non-empty.
///
/// Constructing one is the only way to start a search, so an empty query can
/// never reach the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Trim the raw input and reject it if nothing is left.
    pub fn parse(raw: &str) -> Result<Self, FinderError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FinderError::EmptyQuery);
        }
        Ok(SearchTerm(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compact representation of one search hit, as listed in the result grid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: String,
    #[serde(rename = "strCategory", default, deserialize_with = "de_nonblank")]
    pub category: Option<String>,
}

/// Full record for a single meal, shown after selection.
#[derive(Debug, Clone, PartialEq)]
pub struct MealDetail {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    /// Rendered as the literal "Uncategorized" when absent.
    pub category: Option<String>,
    pub instructions: String,
    /// In ascending slot order; only slots with a non-blank ingredient.
    pub ingredients: Vec<Ingredient>,
    pub youtube: Option<String>,
}

/// One ingredient/measure pair. Both strings are carried verbatim from the
/// API record; `measure` may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

/// Classification of a search response. The API signals "no matches" with a
/// JSON `null` meal list rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Matches(Vec<MealSummary>),
    NoMatches,
}

/// The API pads optional fields with `null` or `""` interchangeably; fold
/// both (and whitespace-only strings) into `None`.
pub(crate) fn de_nonblank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_term_trims_whitespace() {
        let term = SearchTerm::parse("  chicken soup \n").unwrap();
        assert_eq!(term.as_str(), "chicken soup");
        assert_eq!(term.to_string(), "chicken soup");
    }

    #[test]
    fn test_search_term_rejects_empty_input() {
        assert!(matches!(
            SearchTerm::parse(""),
            Err(FinderError::EmptyQuery)
        ));
        assert!(matches!(
            SearchTerm::parse("   \t "),
            Err(FinderError::EmptyQuery)
        ));
    }

    #[test]
    fn test_summary_category_normalization() {
        let with: MealSummary = serde_json::from_str(
            r#"{"idMeal": "52772", "strMeal": "Teriyaki Chicken", "strMealThumb": "https://example.com/t.jpg", "strCategory": "Chicken"}"#,
        )
        .unwrap();
        assert_eq!(with.category.as_deref(), Some("Chicken"));

        let null: MealSummary = serde_json::from_str(
            r#"{"idMeal": "1", "strMeal": "A", "strMealThumb": "a.jpg", "strCategory": null}"#,
        )
        .unwrap();
        assert!(null.category.is_none());

        let blank: MealSummary = serde_json::from_str(
            r#"{"idMeal": "2", "strMeal": "B", "strMealThumb": "b.jpg", "strCategory": "  "}"#,
        )
        .unwrap();
        assert!(blank.category.is_none());

        let missing: MealSummary =
            serde_json::from_str(r#"{"idMeal": "3", "strMeal": "C", "strMealThumb": "c.jpg"}"#)
                .unwrap();
        assert!(missing.category.is_none());
    }
}
