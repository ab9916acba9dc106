use std::time::Duration;

use crate::config::FinderConfig;
use crate::controller::RecipeFinder;
use crate::error::FinderError;

/// Builder for configuring a [`RecipeFinder`]
///
/// Settings left unset fall back to [`FinderConfig::default`], which points
/// at the public TheMealDB developer API. Use [`FinderConfig::load`] with
/// [`RecipeFinderBuilder::config`] to honor config files and environment
/// variables instead.
#[derive(Debug, Default)]
pub struct RecipeFinderBuilder {
    config: Option<FinderConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl RecipeFinderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an explicit configuration instead of the defaults
    ///
    /// Individual setters still apply on top of it.
    pub fn config(mut self, config: FinderConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the API base URL
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .base_url("https://www.themealdb.com/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Override the User-Agent header sent with every request
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .user_agent("my-recipe-app/1.0");
    /// ```
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the configured finder
    ///
    /// # Errors
    /// Returns `FinderError::FetchError` if the HTTP client cannot be
    /// constructed from the settings.
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    /// use std::time::Duration;
    ///
    /// # fn main() -> Result<(), recipe_finder::FinderError> {
    /// let finder = RecipeFinder::builder()
    ///     .base_url("https://www.themealdb.com/api/json/v1/1")
    ///     .timeout(Duration::from_secs(10))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<RecipeFinder, FinderError> {
        let mut config = self.config.unwrap_or_default();

        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout.as_secs();
        }
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }

        RecipeFinder::from_config(&config)
    }
}
