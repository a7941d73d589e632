//! Classification of free-form tracker strings into fixed buckets, and the
//! colour tables attached to each bucket.
//!
//! Every classifier is a case-insensitive substring match evaluated in a fixed
//! order; the first match wins and anything unmatched falls into a documented
//! default bucket.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

/// Coarse workflow bucket derived from a status name.
///
/// Declaration order is board order, which is also the `Ord` used for counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum WorkflowCategory {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    Review,
    Test,
    Done,
}

impl WorkflowCategory {
    pub const ALL: [WorkflowCategory; 5] = [
        WorkflowCategory::ToDo,
        WorkflowCategory::InProgress,
        WorkflowCategory::Review,
        WorkflowCategory::Test,
        WorkflowCategory::Done,
    ];

    /// done/closed/resolved, then test/qa, then review, then progress/doing; else To Do.
    pub fn from_status(status: &str) -> Self {
        let s = status.to_lowercase();
        if s.contains("done") || s.contains("closed") || s.contains("resolved") {
            WorkflowCategory::Done
        } else if s.contains("test") || s.contains("qa") {
            WorkflowCategory::Test
        } else if s.contains("review") {
            WorkflowCategory::Review
        } else if s.contains("progress") || s.contains("doing") {
            WorkflowCategory::InProgress
        } else {
            WorkflowCategory::ToDo
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WorkflowCategory::ToDo => "To Do",
            WorkflowCategory::InProgress => "In Progress",
            WorkflowCategory::Review => "Review",
            WorkflowCategory::Test => "Test",
            WorkflowCategory::Done => "Done",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for WorkflowCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Issue type bucket. `Unknown` is the fallback for any unrecognized type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Bug,
    Story,
    Subtask,
    Task,
    Epic,
    Enhancement,
    Support,
    Unknown,
}

impl IssueKind {
    pub fn classify(type_name: &str) -> Self {
        let t = type_name.to_lowercase();
        // "sub-task" contains "task", so it must be tested first.
        if t.contains("bug") || t.contains("defect") {
            IssueKind::Bug
        } else if t.contains("story") {
            IssueKind::Story
        } else if t.contains("sub-task") || t.contains("subtask") {
            IssueKind::Subtask
        } else if t.contains("task") {
            IssueKind::Task
        } else if t.contains("epic") {
            IssueKind::Epic
        } else if t.contains("enhancement") {
            IssueKind::Enhancement
        } else if t.contains("support") {
            IssueKind::Support
        } else {
            IssueKind::Unknown
        }
    }

    pub fn style(self, mode: ThemeMode) -> TypeStyle {
        type_style(self, mode)
    }
}

/// Colour set for an issue type badge or graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeStyle {
    pub bg: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub hex_bg: &'static str,
    pub hex_text: &'static str,
    pub hex_border: &'static str,
}

const fn palette(
    bg: &'static str,
    text: &'static str,
    border: &'static str,
    hex_bg: &'static str,
    hex_text: &'static str,
    hex_border: &'static str,
) -> TypeStyle {
    TypeStyle {
        bg,
        text,
        border,
        hex_bg,
        hex_text,
        hex_border,
    }
}

fn type_style(kind: IssueKind, mode: ThemeMode) -> TypeStyle {
    use IssueKind::*;
    use ThemeMode::*;

    match (kind, mode) {
        (Bug, Dark) => palette("bg-red-900/30", "text-red-400", "border-red-800", "#7f1d1d", "#fca5a5", "#ef4444"),
        (Bug, Light) => palette("bg-red-100", "text-red-700", "border-red-200", "#fee2e2", "#b91c1c", "#ef4444"),
        (Story, Dark) => palette("bg-emerald-900/30", "text-emerald-400", "border-emerald-800", "#064e3b", "#34d399", "#10b981"),
        (Story, Light) => palette("bg-emerald-100", "text-emerald-700", "border-emerald-200", "#d1fae5", "#047857", "#10b981"),
        (Subtask, Dark) => palette("bg-sky-900/30", "text-sky-400", "border-sky-800", "#0c4a6e", "#38bdf8", "#0ea5e9"),
        (Subtask, Light) => palette("bg-sky-100", "text-sky-700", "border-sky-200", "#e0f2fe", "#0369a1", "#0ea5e9"),
        (Task, Dark) => palette("bg-blue-900/30", "text-blue-400", "border-blue-800", "#1e3a8a", "#60a5fa", "#3b82f6"),
        (Task, Light) => palette("bg-blue-100", "text-blue-700", "border-blue-200", "#dbeafe", "#1d4ed8", "#3b82f6"),
        (Epic, Dark) => palette("bg-violet-900/30", "text-violet-400", "border-violet-800", "#4c1d95", "#a78bfa", "#8b5cf6"),
        (Epic, Light) => palette("bg-violet-100", "text-violet-700", "border-violet-200", "#ede9fe", "#6d28d9", "#8b5cf6"),
        (Enhancement, Dark) => palette("bg-lime-900/30", "text-lime-400", "border-lime-800", "#3f6212", "#a3e635", "#84cc16"),
        (Enhancement, Light) => palette("bg-lime-100", "text-lime-700", "border-lime-200", "#ecfccb", "#4d7c0f", "#84cc16"),
        (Support, Dark) => palette("bg-orange-900/30", "text-orange-400", "border-orange-800", "#7c2d12", "#fb923c", "#f97316"),
        (Support, Light) => palette("bg-orange-100", "text-orange-700", "border-orange-200", "#ffedd5", "#c2410c", "#f97316"),
        (Unknown, Dark) => palette("bg-slate-800", "text-slate-300", "border-slate-700", "#1e293b", "#cbd5e1", "#64748b"),
        (Unknown, Light) => palette("bg-slate-100", "text-slate-600", "border-slate-200", "#f1f5f9", "#475569", "#94a3b8"),
    }
}

/// Status badge bucket. Note this is coarser than [`WorkflowCategory`]:
/// review counts as active here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Complete,
    Active,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusStyle {
    pub icon: &'static str,
    pub color_class: &'static str,
    pub bg: &'static str,
}

impl StatusKind {
    pub fn classify(status: &str) -> Self {
        let s = status.to_lowercase();
        if s.contains("done") || s.contains("closed") || s.contains("resolved") {
            StatusKind::Complete
        } else if s.contains("progress") || s.contains("doing") || s.contains("review") {
            StatusKind::Active
        } else {
            StatusKind::Pending
        }
    }

    pub fn style(self) -> StatusStyle {
        match self {
            StatusKind::Complete => StatusStyle {
                icon: "CheckCircle2",
                color_class: "text-emerald-500 dark:text-emerald-400",
                bg: "bg-emerald-50 text-emerald-700 border-emerald-100 dark:bg-emerald-900/20 dark:text-emerald-400 dark:border-emerald-800",
            },
            StatusKind::Active => StatusStyle {
                icon: "Clock",
                color_class: "text-blue-500 dark:text-blue-400",
                bg: "bg-blue-50 text-blue-700 border-blue-100 dark:bg-blue-900/20 dark:text-blue-400 dark:border-blue-800",
            },
            StatusKind::Pending => StatusStyle {
                icon: "Circle",
                color_class: "text-slate-400 dark:text-zinc-500",
                bg: "bg-slate-50 text-slate-600 border-slate-200 dark:bg-zinc-800/50 dark:text-zinc-400 dark:border-zinc-700",
            },
        }
    }
}

/// Helper functions for graph colours that depend only on the theme mode.
pub mod helpers {
    use super::ThemeMode;

    pub fn highlight_border(mode: ThemeMode) -> &'static str {
        if mode.is_dark() { "#ffffff" } else { "#000000" }
    }

    pub fn ticket_font(mode: ThemeMode) -> &'static str {
        if mode.is_dark() { "#e2e8f0" } else { "#475569" }
    }

    pub fn stub_font(mode: ThemeMode) -> &'static str {
        if mode.is_dark() { "#71717a" } else { "#94a3b8" }
    }

    pub fn edge_line(mode: ThemeMode) -> &'static str {
        if mode.is_dark() { "#71717a" } else { "#94a3b8" }
    }

    pub fn edge_highlight(mode: ThemeMode) -> &'static str {
        if mode.is_dark() { "#f8fafc" } else { "#334155" }
    }

    pub fn edge_label(mode: ThemeMode) -> &'static str {
        if mode.is_dark() { "#a1a1aa" } else { "#64748b" }
    }
}
