pub mod board;
pub mod column;

// Board state, drafts and the column enum used throughout the app
pub use board::{submit_draft, Board, Drafts, Rejected};
pub use column::Column;
