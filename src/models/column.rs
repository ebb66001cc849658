use enum_map::Enum;
use serde::Serialize;
use std::fmt;

/// One of the four fixed kanban stages, declared in left-to-right display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    Backlog,
    Todo,
    InProgress,
    Done,
}

impl Column {
    pub const ALL: [Column; 4] = [
        Column::Backlog,
        Column::Todo,
        Column::InProgress,
        Column::Done,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Column::Backlog => "Backlog",
            Column::Todo => "To Do",
            Column::InProgress => "In Progress",
            Column::Done => "Done",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Column::Backlog => "Add to backlog...",
            Column::Todo => "Add a new todo...",
            Column::InProgress => "Add to in progress...",
            Column::Done => "Add to done...",
        }
    }

    /// Stable key used for DOM ids and serialized snapshots.
    pub fn key(&self) -> &'static str {
        match self {
            Column::Backlog => "backlog",
            Column::Todo => "todo",
            Column::InProgress => "inProgress",
            Column::Done => "done",
        }
    }

    /// Zero-based display position, the ordinal from the `Enum` derive.
    pub fn position(&self) -> usize {
        self.into_usize()
    }

    /// Column to the left, `None` for the leftmost.
    pub fn left(&self) -> Option<Column> {
        self.position()
            .checked_sub(1)
            .and_then(|i| Column::ALL.get(i).copied())
    }

    /// Column to the right, `None` for the rightmost.
    pub fn right(&self) -> Option<Column> {
        Column::ALL.get(self.position() + 1).copied()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
