pub mod builder;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod render;
pub mod state;

pub use builder::RecipeFinderBuilder;
pub use client::{MealApi, MealDbClient};
pub use config::FinderConfig;
pub use controller::RecipeFinder;
pub use error::FinderError;
pub use model::{Ingredient, MealDetail, MealSummary, SearchOutcome, SearchTerm};
pub use state::{LookupTicket, SearchTicket, UiState, ViewState};

/// Search TheMealDB for meals whose name matches `term`, using the default
/// configuration (config file and `RECIPE_FINDER__*` environment overrides).
pub async fn search_meals(term: &str) -> Result<SearchOutcome, FinderError> {
    let term = SearchTerm::parse(term)?;
    let config = FinderConfig::load()?;
    let client = MealDbClient::new(&config)?;
    client.search(&term).await
}

/// Fetch the full record for a meal id, using the default configuration.
/// Returns `Ok(None)` when the API knows no meal with that id.
pub async fn lookup_meal(id: &str) -> Result<Option<MealDetail>, FinderError> {
    let config = FinderConfig::load()?;
    let client = MealDbClient::new(&config)?;
    client.lookup(id).await
}
