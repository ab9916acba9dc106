//! The interactive driver: one object owning the API client and the view
//! state, exposing the user-level actions (type and submit, pick a result,
//! go back).

use crate::client::{MealApi, MealDbClient};
use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::render;
use crate::state::ViewState;

/// Drives a [`ViewState`] against a [`MealApi`].
///
/// Each action runs its network call to completion and folds the outcome
/// back into the view, so after `await` the view always reflects the action.
/// Hosts that overlap requests can use [`ViewState`] directly; its tickets
/// make sure only the newest request ever lands.
pub struct RecipeFinder {
    api: Box<dyn MealApi>,
    view: ViewState,
}

impl RecipeFinder {
    /// Create a finder on top of any [`MealApi`] implementation.
    pub fn new(api: Box<dyn MealApi>) -> Self {
        Self {
            api,
            view: ViewState::new(),
        }
    }

    /// Create a finder talking to the real API described by `config`.
    pub fn from_config(config: &FinderConfig) -> Result<Self, FinderError> {
        Ok(Self::new(Box::new(MealDbClient::new(config)?)))
    }

    /// Start building a finder with custom settings.
    pub fn builder() -> crate::builder::RecipeFinderBuilder {
        crate::builder::RecipeFinderBuilder::new()
    }

    /// Read access to everything currently on the page.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Render the current page region as markup.
    pub fn render(&self) -> String {
        render::page(&self.view)
    }

    /// Mirror typing into the search box without submitting.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.view.set_input(text);
    }

    /// Type `raw` into the search box and submit it.
    pub async fn search(&mut self, raw: impl Into<String>) {
        self.view.set_input(raw);
        self.submit().await;
    }

    /// Submit whatever is already in the search box. Empty input surfaces
    /// its message locally and never reaches the API.
    pub async fn submit(&mut self) {
        let ticket = match self.view.begin_search() {
            Some(ticket) => ticket,
            None => return,
        };
        let outcome = self.api.search(ticket.term()).await;
        self.view.apply_search(ticket, outcome);
    }

    /// Pick the `index`-th entry of the result grid and fetch its detail.
    /// Indices outside the grid are ignored.
    pub async fn select(&mut self, index: usize) {
        let ticket = match self.view.select(index) {
            Some(ticket) => ticket,
            None => return,
        };
        let outcome = self.api.lookup(ticket.id()).await;
        self.view.apply_lookup(ticket, outcome);
    }

    /// Close the detail panel and return to the result grid.
    pub fn back(&mut self) {
        self.view.close_detail();
    }

    /// One-shot scroll hint for hosts that can scroll the detail into view.
    pub fn take_scroll_request(&mut self) -> bool {
        self.view.take_scroll_request()
    }
}
