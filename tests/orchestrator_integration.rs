mod common;

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use ticketscope::client::{JiraClient, ProxyClient, SearchRequest, TicketSource};
use ticketscope::config::{Settings, SettingsStore};
use ticketscope::dashboard::{Dashboard, FetchStatus};
use ticketscope::error::{DashboardError, DashboardResult};
use ticketscope::filtering::Facet;
use ticketscope::formatting::theme::{ThemeMode, WorkflowCategory};
use ticketscope::graph::Depth;
use ticketscope::models::{RawIssue, SearchResponse};
use ticketscope::server::{api_router, AppState};

use common::{fake_tracker, search_payload, spawn, EMAIL, TOKEN};

/// Answers from a fixed script and counts calls.
struct ScriptedSource {
    calls: AtomicUsize,
    reply: fn() -> DashboardResult<Vec<RawIssue>>,
}

impl ScriptedSource {
    fn new(reply: fn() -> DashboardResult<Vec<RawIssue>>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            reply,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TicketSource for ScriptedSource {
    async fn search(&self, _request: &SearchRequest) -> DashboardResult<Vec<RawIssue>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.reply)()
    }
}

fn two_issues() -> DashboardResult<Vec<RawIssue>> {
    let response: SearchResponse = serde_json::from_value(search_payload()).unwrap();
    Ok(response.issues)
}

fn forbidden() -> DashboardResult<Vec<RawIssue>> {
    Err(DashboardError::Upstream {
        status: 403,
        details: "Forbidden".into(),
    })
}

fn credentials() -> Settings {
    Settings {
        domain: "acme.atlassian.net".into(),
        email: EMAIL.into(),
        token: TOKEN.into(),
        ..Settings::default()
    }
}

#[tokio::test]
async fn test_incomplete_credentials_never_fetch() {
    let mut dashboard = Dashboard::new(
        ScriptedSource::new(two_issues),
        Settings {
            token: String::new(),
            ..credentials()
        },
    );

    assert!(dashboard.begin_fetch().is_none());
    assert!(!dashboard.refresh().await);

    assert_eq!(dashboard.source().calls(), 0);
    assert!(dashboard.state().settings_open);
    assert!(matches!(dashboard.state().status, FetchStatus::Failed { debug: None, .. }));
}

#[tokio::test]
async fn test_upstream_403_keeps_debug_payload() {
    let mut dashboard = Dashboard::new(ScriptedSource::new(forbidden), credentials());
    dashboard.refresh().await;

    assert_eq!(dashboard.state().status.error(), Some("Jira API error: 403"));
    assert!(dashboard.state().status.debug().unwrap().contains("Forbidden"));
}

#[tokio::test]
async fn test_success_resets_every_filter() {
    let mut dashboard = Dashboard::new(ScriptedSource::new(two_issues), credentials());
    dashboard.set_filter_text("crash");
    dashboard.toggle_filter(Facet::Status, "Done");
    dashboard.toggle_filter(Facet::Type, "Bug");
    dashboard.toggle_filter(Facet::Priority, "High");
    dashboard.toggle_filter(Facet::Label, "backend");
    dashboard.toggle_category(WorkflowCategory::Done);
    dashboard.focus_on("A", Depth::Limited(1));

    assert!(dashboard.refresh().await);

    assert_eq!(dashboard.state().status, FetchStatus::Ready);
    assert!(dashboard.state().filters.is_empty());
    assert!(dashboard.state().focus.is_none());
    assert_eq!(dashboard.visible_tickets().len(), 2);
}

#[tokio::test]
async fn test_stale_fetch_is_discarded() {
    let mut dashboard = Dashboard::new(ScriptedSource::new(two_issues), credentials());

    let first = dashboard.begin_fetch().unwrap();
    let second = dashboard.begin_fetch().unwrap();
    assert!(second.generation() > first.generation());

    assert!(dashboard.complete_fetch(second, two_issues()));
    assert!(!dashboard.complete_fetch(first, forbidden()));

    assert_eq!(dashboard.state().status, FetchStatus::Ready);
    assert_eq!(dashboard.state().tickets.len(), 2);
}

#[tokio::test]
async fn test_derived_views_follow_filters() {
    let mut dashboard = Dashboard::new(ScriptedSource::new(two_issues), credentials());
    dashboard.refresh().await;

    assert_eq!(dashboard.facets().statuses, vec!["Done", "To Do"]);
    assert_eq!(dashboard.graph().edges.len(), 1);
    assert_eq!(dashboard.board().len(), 2);
    assert_eq!(dashboard.cards()[0].assignee, "Ada");

    dashboard.toggle_category(WorkflowCategory::Done);
    let visible: Vec<String> = dashboard.visible_tickets().into_iter().map(|t| t.key).collect();
    assert_eq!(visible, vec!["A"]);
    // B only appears through A's link now.
    assert!(dashboard.graph().contains("B"));

    dashboard.reset_filters();
    dashboard.focus_on("A", Depth::Limited(0));
    assert_eq!(dashboard.focused_graph().nodes.len(), 1);
    dashboard.clear_focus();
    assert_eq!(dashboard.focused_graph().nodes.len(), 2);

    assert!(dashboard.ticket_detail("B").unwrap().is_full());
}

#[tokio::test]
async fn test_save_settings_persists_and_refetches() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path().join("settings.json"));
    let mut dashboard = Dashboard::with_store(ScriptedSource::new(two_issues), store.clone());
    dashboard.open_settings();

    let mut settings = credentials();
    settings.theme = ThemeMode::Light;
    assert!(dashboard.save_settings(settings).await);

    assert!(!dashboard.state().settings_open);
    assert_eq!(dashboard.source().calls(), 1);
    let stored = store.load();
    assert_eq!(stored.domain, "acme.atlassian.net");
    assert_eq!(stored.theme, ThemeMode::Light);

    dashboard.set_assignees("alice, bob");
    assert_eq!(store.load().jql, "assignee in (\"alice\",\"bob\") order by updated DESC");
}

#[tokio::test]
async fn test_through_the_proxy_end_to_end() {
    let tracker = spawn(fake_tracker()).await;
    let proxy = spawn(api_router(AppState {
        client: JiraClient::new().unwrap(),
    }))
    .await;

    let settings = Settings {
        domain: format!("http://{}", tracker),
        ..credentials()
    };
    let mut dashboard = Dashboard::new(ProxyClient::new(&format!("http://{}", proxy)), settings);

    assert!(dashboard.refresh().await);
    assert_eq!(dashboard.state().tickets.len(), 2);

    dashboard.set_query("forbidden");
    dashboard.refresh().await;
    assert_eq!(dashboard.state().status.error(), Some("Jira API error: 403"));
    assert_eq!(dashboard.state().status.debug(), Some("Forbidden"));
    // Failure keeps the previous collection.
    assert_eq!(dashboard.state().tickets.len(), 2);
}
