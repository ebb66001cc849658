pub mod board;
pub mod column;
pub mod draft_input;
pub mod item_card;

pub use board::KanbanBoard;
pub use column::KanbanColumn;
pub use draft_input::DraftInput;
pub use item_card::ItemCard;
