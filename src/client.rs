use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::model::{de_nonblank, Ingredient, MealDetail, MealSummary, SearchOutcome, SearchTerm};

/// Unified access to the two meal endpoints
#[async_trait]
pub trait MealApi: Send + Sync {
    /// Find meals whose name matches the term
    async fn search(&self, term: &SearchTerm) -> Result<SearchOutcome, FinderError>;

    /// Fetch the full record behind a search hit; `None` when the id has no record
    async fn lookup(&self, id: &str) -> Result<Option<MealDetail>, FinderError>;
}

/// HTTP client for a TheMealDB-compatible JSON API.
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a client from configuration.
    pub fn new(config: &FinderConfig) -> Result<Self, FinderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(MealDbClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        MealDbClient {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl MealApi for MealDbClient {
    async fn search(&self, term: &SearchTerm) -> Result<SearchOutcome, FinderError> {
        let response = self
            .client
            .get(format!("{}/search.php", self.base_url))
            .query(&[("s", term.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        debug!("search response for {:?}: {}", term.as_str(), body);

        let envelope: MealListResponse<MealSummary> = serde_json::from_str(&body)?;
        Ok(match envelope.meals {
            Some(meals) => SearchOutcome::Matches(meals),
            None => SearchOutcome::NoMatches,
        })
    }

    async fn lookup(&self, id: &str) -> Result<Option<MealDetail>, FinderError> {
        let response = self
            .client
            .get(format!("{}/lookup.php", self.base_url))
            .query(&[("i", id)])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        debug!("lookup response for {}: {}", id, body);

        let envelope: MealListResponse<MealRecord> = serde_json::from_str(&body)?;
        Ok(envelope
            .meals
            .and_then(|records| records.into_iter().next())
            .map(MealDetail::from))
    }
}

/// Both endpoints wrap their payload in `{"meals": null | [...]}`.
#[derive(Debug, Deserialize)]
struct MealListResponse<T> {
    meals: Option<Vec<T>>,
}

/// Wire shape of a full meal record. The numbered ingredient/measure columns
/// land in `columns` so they can be scanned by slot.
#[derive(Debug, Deserialize)]
struct MealRecord {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb")]
    thumbnail: String,
    #[serde(rename = "strCategory", default, deserialize_with = "de_nonblank")]
    category: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strYoutube", default, deserialize_with = "de_nonblank")]
    youtube: Option<String>,
    #[serde(flatten)]
    columns: HashMap<String, Value>,
}

/// The API reserves exactly this many ingredient/measure column pairs.
const INGREDIENT_COLUMNS: usize = 20;

impl From<MealRecord> for MealDetail {
    fn from(record: MealRecord) -> Self {
        let ingredients = extract_ingredients(&record.columns);
        MealDetail {
            id: record.id,
            name: record.name,
            thumbnail: record.thumbnail,
            category: record.category,
            instructions: record.instructions.unwrap_or_default(),
            ingredients,
            youtube: record.youtube,
        }
    }
}

/// Collect the numbered column pairs in ascending slot order. A slot counts
/// only when its ingredient is non-blank after trimming; the stored name and
/// measure keep their original spelling, with a missing measure becoming "".
fn extract_ingredients(columns: &HashMap<String, Value>) -> Vec<Ingredient> {
    let mut ingredients = Vec::new();
    for slot in 1..=INGREDIENT_COLUMNS {
        let name = columns
            .get(&format!("strIngredient{}", slot))
            .and_then(Value::as_str)
            .unwrap_or("");
        if name.trim().is_empty() {
            continue;
        }
        let measure = columns
            .get(&format!("strMeasure{}", slot))
            .and_then(Value::as_str)
            .unwrap_or("");
        ingredients.push(Ingredient {
            name: name.to_string(),
            measure: measure.to_string(),
        });
    }
    ingredients
}
