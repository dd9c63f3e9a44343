//! Data models for Bookshelf

pub mod book;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use book::{Book, BookDraft, BookId, BookStatus};
pub use session::{Capability, Role, Session, SessionInfo};
pub use view::{BookAction, BookForm, BookRow, CatalogView, FormMode};
