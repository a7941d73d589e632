use crate::formatting::theme::helpers::{edge_line, highlight_border, stub_font, ticket_font};
use crate::formatting::theme::{IssueKind, StatusKind, ThemeMode, WorkflowCategory};

#[test]
fn test_workflow_category_precedence() {
    assert_eq!(WorkflowCategory::from_status("Done"), WorkflowCategory::Done);
    assert_eq!(WorkflowCategory::from_status("Closed"), WorkflowCategory::Done);
    assert_eq!(WorkflowCategory::from_status("Resolved"), WorkflowCategory::Done);
    assert_eq!(WorkflowCategory::from_status("Ready for QA"), WorkflowCategory::Test);
    assert_eq!(WorkflowCategory::from_status("In Testing"), WorkflowCategory::Test);
    assert_eq!(WorkflowCategory::from_status("Code Review"), WorkflowCategory::Review);
    assert_eq!(WorkflowCategory::from_status("In Progress"), WorkflowCategory::InProgress);
    assert_eq!(WorkflowCategory::from_status("Doing"), WorkflowCategory::InProgress);
    assert_eq!(WorkflowCategory::from_status("Backlog"), WorkflowCategory::ToDo);
    // Done-words win over everything else.
    assert_eq!(WorkflowCategory::from_status("Review done"), WorkflowCategory::Done);
}

#[test]
fn test_workflow_category_names() {
    for category in WorkflowCategory::ALL {
        assert_eq!(WorkflowCategory::from_name(category.name()), Some(category));
    }
    assert_eq!(WorkflowCategory::InProgress.to_string(), "In Progress");
    assert_eq!(
        serde_json::to_string(&WorkflowCategory::ToDo).unwrap(),
        "\"To Do\""
    );
}

#[test]
fn test_issue_kind_classification() {
    assert_eq!(IssueKind::classify("Bug"), IssueKind::Bug);
    assert_eq!(IssueKind::classify("Production Defect"), IssueKind::Bug);
    assert_eq!(IssueKind::classify("User Story"), IssueKind::Story);
    assert_eq!(IssueKind::classify("Sub-task"), IssueKind::Subtask);
    assert_eq!(IssueKind::classify("Subtask"), IssueKind::Subtask);
    assert_eq!(IssueKind::classify("Task"), IssueKind::Task);
    assert_eq!(IssueKind::classify("Epic"), IssueKind::Epic);
    assert_eq!(IssueKind::classify("Enhancement"), IssueKind::Enhancement);
    assert_eq!(IssueKind::classify("Support Request"), IssueKind::Support);
    assert_eq!(IssueKind::classify("Spike"), IssueKind::Unknown);
}

#[test]
fn test_status_kind_classification() {
    assert_eq!(StatusKind::classify("Closed"), StatusKind::Complete);
    assert_eq!(StatusKind::classify("In Review"), StatusKind::Active);
    assert_eq!(StatusKind::classify("Open"), StatusKind::Pending);
    assert_eq!(StatusKind::Complete.style().icon, "CheckCircle2");
    assert_eq!(StatusKind::Pending.style().icon, "Circle");
}

#[test]
fn test_type_styles_differ_by_mode() {
    let dark = IssueKind::Bug.style(ThemeMode::Dark);
    let light = IssueKind::Bug.style(ThemeMode::Light);
    assert_ne!(dark.hex_bg, light.hex_bg);
    assert!(dark.hex_border.starts_with('#'));
}

#[test]
fn test_graph_helpers() {
    assert_eq!(highlight_border(ThemeMode::Dark), "#ffffff");
    assert_eq!(highlight_border(ThemeMode::Light), "#000000");
    assert_ne!(ticket_font(ThemeMode::Dark), stub_font(ThemeMode::Dark));
    assert_eq!(edge_line(ThemeMode::Light), "#94a3b8");
}
