use serde::Serialize;

use super::views::{board_columns, find_ticket_detail, BoardColumn, TicketCard, ViewMode};
use crate::client::{SearchRequest, TicketSource};
use crate::config::{Settings, SettingsStore};
use crate::error::{DashboardError, DashboardResult};
use crate::filtering::{filter_tickets, generate_query_from_assignees, Facet, FacetIndex, FilterSelection};
use crate::formatting::theme::{ThemeMode, WorkflowCategory};
use crate::graph::{build_graph, Depth, FocusState, TicketGraph};
use crate::models::{normalize, LinkedTicket, RawIssue, Ticket};

pub const EMPTY_COLLECTION_MESSAGE: &str = "No tasks currently assigned to this user.";
pub const NO_MATCH_MESSAGE: &str = "No tickets match your filter criteria.";

/// Where the most recent fetch stands.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed {
        message: String,
        /// Raw tracker body, present only when the tracker rejected the query.
        debug: Option<String>,
    },
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchStatus::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn debug(&self) -> Option<&str> {
        match self {
            FetchStatus::Failed { debug, .. } => debug.as_deref(),
            _ => None,
        }
    }
}

/// Identifies one fetch. Only the token from the latest `begin_fetch` may
/// apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken {
    generation: u64,
}

impl FetchToken {
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Everything the views read.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardState {
    pub settings: Settings,
    pub tickets: Vec<Ticket>,
    pub filters: FilterSelection,
    pub view: ViewMode,
    pub status: FetchStatus,
    pub settings_open: bool,
    pub focus: Option<FocusState>,
}

/// Root controller: owns the state, the ticket source and the optional
/// settings store. Views get the state by reference.
pub struct Dashboard<S> {
    state: DashboardState,
    source: S,
    store: Option<SettingsStore>,
    generation: u64,
}

impl<S: TicketSource> Dashboard<S> {
    pub fn new(source: S, settings: Settings) -> Self {
        Self {
            state: DashboardState {
                settings,
                ..DashboardState::default()
            },
            source,
            store: None,
            generation: 0,
        }
    }

    /// Loads settings from the store and writes every later change back to it.
    pub fn with_store(source: S, store: SettingsStore) -> Self {
        let settings = store.load();
        let mut dashboard = Self::new(source, settings);
        dashboard.store = Some(store);
        dashboard
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn search_request(&self) -> SearchRequest {
        SearchRequest::from_settings(&self.state.settings)
    }

    // Fetch lifecycle

    /// Enters `Loading` and hands out the token for the new fetch. With
    /// incomplete credentials it fails immediately, opens the settings
    /// editor and returns `None`; no request should be made.
    ///
    /// Every attempt, including a refused one, invalidates earlier tokens.
    pub fn begin_fetch(&mut self) -> Option<FetchToken> {
        self.generation += 1;

        if !self.state.settings.has_credentials() {
            tracing::info!("Fetch skipped: credentials incomplete");
            self.state.status = FetchStatus::Failed {
                message: DashboardError::MissingCredentials.to_string(),
                debug: None,
            };
            self.state.settings_open = true;
            return None;
        }

        self.state.status = FetchStatus::Loading;
        tracing::debug!("Fetch {} started", self.generation);
        Some(FetchToken {
            generation: self.generation,
        })
    }

    /// Applies a fetch result. Returns `false` when the token is stale and the
    /// result was dropped.
    pub fn complete_fetch(&mut self, token: FetchToken, result: DashboardResult<Vec<RawIssue>>) -> bool {
        if token.generation != self.generation {
            tracing::debug!(
                "Discarding stale fetch {} (latest is {})",
                token.generation,
                self.generation
            );
            return false;
        }

        match result {
            Ok(issues) => {
                self.state.tickets = normalize(issues);
                self.state.filters.reset();
                self.state.focus = None;
                self.state.status = FetchStatus::Ready;
                tracing::info!("Loaded {} tickets", self.state.tickets.len());
            }
            Err(e) => {
                tracing::warn!("Fetch failed: {}", e);
                if e.is_validation() {
                    self.state.settings_open = true;
                }
                self.state.status = FetchStatus::Failed {
                    message: e.to_string(),
                    debug: e.debug_payload().map(str::to_string),
                };
            }
        }
        true
    }

    /// Runs one full fetch with the current settings.
    pub async fn refresh(&mut self) -> bool {
        let Some(token) = self.begin_fetch() else {
            return false;
        };
        let request = self.search_request();
        let result = self.source.search(&request).await;
        self.complete_fetch(token, result)
    }

    // Settings

    fn persist(&self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save(&self.state.settings) {
                tracing::warn!("Failed to persist settings: {}", e);
            }
        }
    }

    /// Updates the three credential fields and refetches when they changed.
    pub async fn set_credentials(&mut self, domain: &str, email: &str, token: &str) -> bool {
        let previous = self.state.settings.clone();
        self.state.settings.domain = domain.to_string();
        self.state.settings.email = email.to_string();
        self.state.settings.token = token.to_string();
        self.persist();

        if self.state.settings.credentials_differ(&previous) {
            self.refresh().await
        } else {
            false
        }
    }

    /// Replaces all settings, closes the editor and refetches.
    pub async fn save_settings(&mut self, settings: Settings) -> bool {
        self.state.settings = settings;
        self.state.settings_open = false;
        self.persist();
        self.refresh().await
    }

    /// Stores the assignee shorthand and overwrites the query with its translation.
    pub fn set_assignees(&mut self, assignees: &str) {
        self.state.settings.assignees = assignees.to_string();
        self.state.settings.jql = generate_query_from_assignees(assignees);
        self.persist();
    }

    /// Hand-edited query text. The assignee field is left as is.
    pub fn set_query(&mut self, jql: &str) {
        self.state.settings.jql = jql.to_string();
        self.persist();
    }

    pub fn reset_query_to_assignees(&mut self) {
        self.state.settings.jql = generate_query_from_assignees(&self.state.settings.assignees);
        self.persist();
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.state.settings.theme = theme;
        self.persist();
    }

    pub fn set_background(&mut self, url: &str) {
        self.state.settings.bg_image = url.to_string();
        self.persist();
    }

    pub fn open_settings(&mut self) {
        self.state.settings_open = true;
    }

    pub fn close_settings(&mut self) {
        self.state.settings_open = false;
    }

    // Filters and views

    pub fn set_view(&mut self, view: ViewMode) {
        self.state.view = view;
    }

    pub fn set_filter_text(&mut self, text: &str) {
        self.state.filters.set_text(text);
    }

    pub fn toggle_filter(&mut self, facet: Facet, value: &str) {
        self.state.filters.toggle(facet, value);
    }

    pub fn toggle_category(&mut self, category: WorkflowCategory) {
        self.state.filters.toggle_category(category);
    }

    pub fn reset_filters(&mut self) {
        self.state.filters.reset();
    }

    pub fn focus_on(&mut self, node_id: &str, depth: Depth) {
        self.state.focus = Some(FocusState::new(node_id, depth));
    }

    pub fn clear_focus(&mut self) {
        self.state.focus = None;
    }

    // Derived data, recomputed on every call

    pub fn facets(&self) -> FacetIndex {
        FacetIndex::build(&self.state.tickets)
    }

    pub fn visible_tickets(&self) -> Vec<Ticket> {
        filter_tickets(&self.state.tickets, &self.state.filters)
    }

    /// True while an error banner replaces the ticket views.
    pub fn shows_error(&self) -> bool {
        self.state.status.error().is_some()
    }

    /// The filtered set as the views render it: empty while an error is shown.
    /// The collection itself is kept for when the next fetch succeeds.
    fn rendered_tickets(&self) -> Vec<Ticket> {
        if self.shows_error() {
            Vec::new()
        } else {
            self.visible_tickets()
        }
    }

    pub fn cards(&self) -> Vec<TicketCard> {
        let theme = self.state.settings.theme;
        self.rendered_tickets()
            .iter()
            .map(|t| TicketCard::new(t, theme))
            .collect()
    }

    pub fn board(&self) -> Vec<BoardColumn> {
        board_columns(&self.rendered_tickets())
    }

    pub fn graph(&self) -> TicketGraph {
        build_graph(&self.rendered_tickets(), self.state.settings.theme)
    }

    /// The graph restricted to the focus neighborhood, or the whole graph
    /// when nothing is focused.
    pub fn focused_graph(&self) -> TicketGraph {
        let graph = self.graph();
        match &self.state.focus {
            Some(focus) => graph.neighborhood(focus),
            None => graph,
        }
    }

    pub fn ticket_detail(&self, key: &str) -> Option<LinkedTicket<'_>> {
        find_ticket_detail(&self.state.tickets, key)
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        if self.state.tickets.is_empty() {
            Some(EMPTY_COLLECTION_MESSAGE)
        } else if self.visible_tickets().is_empty() {
            Some(NO_MATCH_MESSAGE)
        } else {
            None
        }
    }
}
