use log::{debug, error};

use crate::error::FinderError;
use crate::model::{MealDetail, MealSummary, SearchOutcome, SearchTerm};

/// Message shown when the user submits an empty search box.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a search term";
/// Message shown when the search endpoint fails.
pub const SEARCH_FAILED_MESSAGE: &str = "Something went wrong. Please try again later.";
/// Message shown when the lookup endpoint fails.
pub const DETAIL_FAILED_MESSAGE: &str = "Could not load recipe details. Please try again later.";

/// What the page is currently doing. Exactly one of these holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Searching,
    ResultsShown,
    NoResults,
    Error,
    DetailShown,
}

/// Proof that a search was started. Pairs the parsed term with the request
/// generation so a response arriving after a newer request is recognized as
/// stale and dropped instead of overwriting the display.
#[derive(Debug)]
pub struct SearchTicket {
    generation: u64,
    term: SearchTerm,
}

impl SearchTicket {
    pub fn term(&self) -> &SearchTerm {
        &self.term
    }
}

/// Proof that a detail lookup was started, carrying the selected meal id.
#[derive(Debug)]
pub struct LookupTicket {
    generation: u64,
    id: String,
}

impl LookupTicket {
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Everything the page shows, plus the request generation that guards it.
///
/// All transitions are synchronous: callers obtain a ticket, perform the
/// network call however they like, and feed the outcome back through the
/// matching `apply_*` method. Only the outcome of the newest ticket is ever
/// applied, which turns the source's last-response-wins race into
/// last-request-wins.
#[derive(Debug, Default)]
pub struct ViewState {
    ui: UiState,
    input: String,
    heading: String,
    banner: Option<String>,
    results: Vec<MealSummary>,
    detail: Option<MealDetail>,
    detail_visible: bool,
    scroll_pending: bool,
    generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ui(&self) -> UiState {
        self.ui
    }

    /// Current text in the search box.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Result-heading line; empty when the heading is hidden.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Error/status banner; `None` when the banner is hidden.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn results(&self) -> &[MealSummary] {
        &self.results
    }

    pub fn detail(&self) -> Option<&MealDetail> {
        self.detail.as_ref()
    }

    pub fn detail_visible(&self) -> bool {
        self.detail_visible
    }

    /// Mirror typing into the search box.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Start a search from whatever is in the search box.
    ///
    /// Empty (or whitespace-only) input surfaces a local message and issues
    /// no ticket, so nothing ever reaches the network. Otherwise the view
    /// switches to `Searching`: the previous list, banner and any open detail
    /// are cleared, and the returned ticket supersedes every request still in
    /// flight.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        let term = match SearchTerm::parse(&self.input) {
            Ok(term) => term,
            Err(_) => {
                self.banner = Some(EMPTY_INPUT_MESSAGE.to_string());
                return None;
            }
        };

        self.generation += 1;
        self.ui = UiState::Searching;
        self.heading = format!("Searching for \"{}\" ...", term);
        self.banner = None;
        self.results.clear();
        self.detail = None;
        self.detail_visible = false;

        Some(SearchTicket {
            generation: self.generation,
            term,
        })
    }

    /// Fold a search outcome back into the view. Outcomes for superseded
    /// tickets are dropped.
    pub fn apply_search(&mut self, ticket: SearchTicket, outcome: Result<SearchOutcome, FinderError>) {
        if ticket.generation != self.generation {
            debug!(
                "dropping stale search response for {:?}",
                ticket.term.as_str()
            );
            return;
        }

        match outcome {
            Ok(SearchOutcome::Matches(meals)) => {
                self.ui = UiState::ResultsShown;
                self.heading = format!("Search results for \"{}\":", ticket.term);
                self.results = meals;
                self.input.clear();
            }
            Ok(SearchOutcome::NoMatches) => {
                self.ui = UiState::NoResults;
                self.heading.clear();
                self.results.clear();
                self.banner = Some(format!(
                    "No recipes found for \"{}\". Try another search term!",
                    ticket.term
                ));
            }
            Err(err) => {
                error!("search for {:?} failed: {}", ticket.term.as_str(), err);
                self.ui = UiState::Error;
                self.banner = Some(SEARCH_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Map a click in the result grid to a lookup. Selections that land on no
    /// entry are silent no-ops; the list itself is never modified here.
    pub fn select(&mut self, index: usize) -> Option<LookupTicket> {
        let id = self.results.get(index)?.id.clone();
        self.generation += 1;
        Some(LookupTicket {
            generation: self.generation,
            id,
        })
    }

    /// Fold a lookup outcome back into the view. Stale tickets (a newer
    /// lookup or a newer search) are dropped; a lookup that found no record
    /// leaves the view exactly as it was.
    pub fn apply_lookup(
        &mut self,
        ticket: LookupTicket,
        outcome: Result<Option<MealDetail>, FinderError>,
    ) {
        if ticket.generation != self.generation {
            debug!("dropping stale lookup response for meal {}", ticket.id);
            return;
        }

        match outcome {
            Ok(Some(detail)) => {
                self.ui = UiState::DetailShown;
                self.detail = Some(detail);
                self.detail_visible = true;
                self.scroll_pending = true;
            }
            // The record vanished upstream; keep the list as-is.
            Ok(None) => {}
            Err(err) => {
                error!("lookup for meal {} failed: {}", ticket.id, err);
                self.ui = UiState::Error;
                self.banner = Some(DETAIL_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Back control: hide and discard the detail, keep the fetched list.
    pub fn close_detail(&mut self) {
        self.detail = None;
        self.detail_visible = false;
        if self.ui == UiState::DetailShown {
            self.ui = UiState::ResultsShown;
        }
    }

    /// One-shot flag: `true` the first time it is read after a detail was
    /// revealed, so the host can scroll the panel into view.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }
}
