use crate::constants::DEFAULT_ORDER_CLAUSE;

/// Assignee restriction parsed from the comma-separated shorthand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssigneeClause {
    Any,
    Equals(String),
    In(Vec<String>),
}

impl AssigneeClause {
    pub fn parse(assignees: &str) -> Self {
        let mut names: Vec<String> = assignees
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        match names.len() {
            0 => AssigneeClause::Any,
            1 => AssigneeClause::Equals(names.remove(0)),
            _ => AssigneeClause::In(names),
        }
    }

    fn to_jql(&self) -> Option<String> {
        match self {
            AssigneeClause::Any => None,
            AssigneeClause::Equals(name) => Some(format!("assignee = \"{}\"", name)),
            AssigneeClause::In(names) => {
                let quoted: Vec<String> = names.iter().map(|n| format!("\"{}\"", n)).collect();
                Some(format!("assignee in ({})", quoted.join(",")))
            }
        }
    }
}

/// Builds the search query for an assignee shorthand such as `"alice, bob"`.
///
/// Every variant ends with the same ordering clause. The translation is
/// one-way: nothing parses a hand-edited query back into assignees.
pub fn generate_query_from_assignees(assignees: &str) -> String {
    match AssigneeClause::parse(assignees).to_jql() {
        Some(clause) => format!("{} {}", clause, DEFAULT_ORDER_CLAUSE),
        None => DEFAULT_ORDER_CLAUSE.to_string(),
    }
}
