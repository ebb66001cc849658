use enum_map::EnumMap;
use serde::Serialize;
use std::fmt;

use super::Column;

/// Reason an operation left the board untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejected {
    EmptyDraft {
        column: Column,
    },
    IndexOutOfRange {
        column: Column,
        index: usize,
        len: usize,
    },
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejected::EmptyDraft { column } => write!(f, "draft for {} is empty", column),
            Rejected::IndexOutOfRange { column, index, len } => {
                write!(f, "index {} out of range for {} (len {})", index, column, len)
            }
        }
    }
}

impl std::error::Error for Rejected {}

/// Items of every column, in display order within each column.
///
/// Items carry no identity of their own: they are addressed by their position in
/// the column, so two equal labels are indistinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Board {
    columns: EnumMap<Column, Vec<String>>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self, column: Column) -> &[String] {
        &self.columns[column]
    }

    pub fn len(&self, column: Column) -> usize {
        self.columns[column].len()
    }

    /// Item count across all columns.
    pub fn total(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    /// Appends `text` trimmed to the end of `column`.
    pub fn add(&mut self, column: Column, text: &str) -> Result<(), Rejected> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Rejected::EmptyDraft { column });
        }
        self.columns[column].push(text.to_string());
        Ok(())
    }

    /// Removes and returns the item at `index`, shifting later items down.
    pub fn delete(&mut self, column: Column, index: usize) -> Result<String, Rejected> {
        self.check_index(column, index)?;
        Ok(self.columns[column].remove(index))
    }

    /// Relocates the item at `index` in `from` to the end of `to`.
    ///
    /// Any pair of columns is accepted, including `from == to`. Adjacency is a
    /// concern of the controls that call this, not of the board.
    pub fn move_item(&mut self, from: Column, to: Column, index: usize) -> Result<(), Rejected> {
        self.check_index(from, index)?;
        let item = self.columns[from].remove(index);
        self.columns[to].push(item);
        Ok(())
    }

    fn check_index(&self, column: Column, index: usize) -> Result<(), Rejected> {
        let len = self.len(column);
        if index >= len {
            return Err(Rejected::IndexOutOfRange { column, index, len });
        }
        Ok(())
    }
}

/// Pending input text, one draft per column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drafts {
    drafts: EnumMap<Column, String>,
}

impl Drafts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: Column) -> &str {
        &self.drafts[column]
    }

    pub fn set(&mut self, column: Column, text: String) {
        self.drafts[column] = text;
    }

    pub fn clear(&mut self, column: Column) {
        self.drafts[column].clear();
    }
}

/// Commits the draft of `column` as a new item and clears the draft.
///
/// A blank draft is rejected and left in place.
pub fn submit_draft(board: &mut Board, drafts: &mut Drafts, column: Column) -> Result<(), Rejected> {
    board.add(column, drafts.get(column))?;
    drafts.clear(column);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(column: Column, items: &[&str]) -> Board {
        let mut board = Board::new();
        for item in items {
            board.add(column, item).unwrap();
        }
        board
    }

    fn all_items_sorted(board: &Board) -> Vec<String> {
        let mut items: Vec<String> = Column::ALL
            .iter()
            .flat_map(|c| board.items(*c).iter().cloned())
            .collect();
        items.sort();
        items
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        let drafts = Drafts::new();
        for column in Column::ALL {
            assert!(board.items(column).is_empty());
            assert_eq!(drafts.get(column), "");
        }
        assert_eq!(board.total(), 0);
    }

    #[test]
    fn test_submit_appends_trimmed_and_clears_draft() {
        let mut board = board_with(Column::Todo, &["first"]);
        let mut drafts = Drafts::new();
        drafts.set(Column::Todo, "  X  ".to_string());
        drafts.set(Column::Done, "untouched".to_string());

        submit_draft(&mut board, &mut drafts, Column::Todo).unwrap();

        assert_eq!(board.items(Column::Todo), ["first", "X"]);
        assert_eq!(drafts.get(Column::Todo), "");
        assert_eq!(drafts.get(Column::Done), "untouched");
        assert!(board.items(Column::Done).is_empty());
        assert_eq!(board.total(), 2);
    }

    #[test]
    fn test_submit_blank_draft_is_noop() {
        for draft in ["", "   ", "\t\n"] {
            let mut board = board_with(Column::Backlog, &["keep"]);
            let mut drafts = Drafts::new();
            drafts.set(Column::Backlog, draft.to_string());
            let (board_before, drafts_before) = (board.clone(), drafts.clone());

            let result = submit_draft(&mut board, &mut drafts, Column::Backlog);

            assert_eq!(result, Err(Rejected::EmptyDraft { column: Column::Backlog }));
            assert_eq!(board, board_before);
            assert_eq!(drafts, drafts_before);
        }
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut board = board_with(Column::InProgress, &["a", "b", "c", "d"]);
        let removed = board.delete(Column::InProgress, 1).unwrap();
        assert_eq!(removed, "b");
        assert_eq!(board.items(Column::InProgress), ["a", "c", "d"]);
    }

    #[test]
    fn test_delete_duplicates_by_position() {
        let mut board = board_with(Column::Todo, &["same", "other", "same"]);
        board.delete(Column::Todo, 2).unwrap();
        assert_eq!(board.items(Column::Todo), ["same", "other"]);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let mut board = board_with(Column::Done, &["a"]);
        let before = board.clone();

        let result = board.delete(Column::Done, 1);
        assert_eq!(
            result,
            Err(Rejected::IndexOutOfRange { column: Column::Done, index: 1, len: 1 })
        );
        assert!(board.delete(Column::Backlog, 0).is_err());
        assert!(board.delete(Column::Done, usize::MAX).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_appends_to_destination() {
        let mut board = board_with(Column::Backlog, &["a", "b"]);
        board.add(Column::Todo, "t").unwrap();

        board.move_item(Column::Backlog, Column::Todo, 0).unwrap();

        assert_eq!(board.items(Column::Backlog), ["b"]);
        assert_eq!(board.items(Column::Todo), ["t", "a"]);
        assert_eq!(board.total(), 3);
    }

    #[test]
    fn test_move_between_non_adjacent_columns() {
        let mut board = board_with(Column::Backlog, &["far"]);
        board.move_item(Column::Backlog, Column::Done, 0).unwrap();
        assert!(board.items(Column::Backlog).is_empty());
        assert_eq!(board.items(Column::Done), ["far"]);
    }

    #[test]
    fn test_move_within_same_column_goes_to_end() {
        let mut board = board_with(Column::Todo, &["a", "b", "c"]);
        board.move_item(Column::Todo, Column::Todo, 0).unwrap();
        assert_eq!(board.items(Column::Todo), ["b", "c", "a"]);
    }

    #[test]
    fn test_move_out_of_range_is_noop() {
        let mut board = board_with(Column::Todo, &["a"]);
        let before = board.clone();
        assert_eq!(
            board.move_item(Column::Todo, Column::InProgress, 3),
            Err(Rejected::IndexOutOfRange { column: Column::Todo, index: 3, len: 1 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_todo_to_in_progress() {
        let mut board = Board::new();
        let mut drafts = Drafts::new();
        drafts.set(Column::Todo, "Write spec".to_string());
        submit_draft(&mut board, &mut drafts, Column::Todo).unwrap();

        board.move_item(Column::Todo, Column::InProgress, 0).unwrap();

        assert!(board.items(Column::Todo).is_empty());
        assert_eq!(board.items(Column::InProgress), ["Write spec"]);
    }

    #[test]
    fn test_delete_first_backlog_scenario() {
        let mut board = Board::new();
        let mut drafts = Drafts::new();
        for text in ["A", "B"] {
            drafts.set(Column::Backlog, text.to_string());
            submit_draft(&mut board, &mut drafts, Column::Backlog).unwrap();
        }

        board.delete(Column::Backlog, 0).unwrap();

        assert_eq!(board.items(Column::Backlog), ["B"]);
    }

    #[test]
    fn test_items_conserved_over_mixed_operations() {
        let mut board = Board::new();
        let mut added = Vec::new();
        let mut deleted = Vec::new();

        for (i, column) in Column::ALL.iter().cycle().take(12).enumerate() {
            let text = format!("item {}", i % 5);
            board.add(*column, &text).unwrap();
            added.push(text);
        }

        // Sweep every column with moves and deletes, including invalid indices.
        for step in 0..40usize {
            let from = Column::ALL[step % 4];
            let to = Column::ALL[(step * 3 + 1) % 4];
            let index = step % 5;
            if step % 3 == 0 {
                if let Ok(item) = board.delete(from, index) {
                    deleted.push(item);
                }
            } else {
                let _ = board.move_item(from, to, index);
            }

            let mut expected = added.clone();
            for item in &deleted {
                let pos = expected.iter().position(|e| e == item).unwrap();
                expected.remove(pos);
            }
            expected.sort();
            assert_eq!(all_items_sorted(&board), expected);
            assert_eq!(board.total(), added.len() - deleted.len());
        }
    }

    #[test]
    fn test_snapshot_serializes_by_column_key() {
        let mut board = board_with(Column::InProgress, &["wip"]);
        board.add(Column::Done, "shipped").unwrap();

        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "backlog": [],
                "todo": [],
                "inProgress": ["wip"],
                "done": ["shipped"],
            })
        );
    }

    #[test]
    fn test_rejected_messages() {
        assert_eq!(
            Rejected::EmptyDraft { column: Column::InProgress }.to_string(),
            "draft for In Progress is empty"
        );
        assert_eq!(
            Rejected::IndexOutOfRange { column: Column::Todo, index: 4, len: 2 }.to_string(),
            "index 4 out of range for To Do (len 2)"
        );
    }
}
