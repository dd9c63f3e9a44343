//! Presentation-neutral projection of the catalog for the current role

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::book::{Book, BookDraft, BookId, BookStatus};
use super::session::{Role, Session, SessionInfo};

pub const EMPTY_CATALOG_NOTICE: &str = "No books available.";

/// Action a role may take on a catalog row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookAction {
    Edit,
    Delete,
    Borrow,
    Return,
}

/// Whether the admin form adds a new book or updates the pending one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Add,
    Update,
}

/// Admin add/update form state
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookForm {
    pub mode: FormMode,
    /// Book being edited in update mode
    pub editing: Option<BookId>,
    /// Prefilled values (empty in add mode)
    pub draft: BookDraft,
}

/// One catalog row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookRow {
    pub id: BookId,
    /// Display position, not a stable identity
    pub position: usize,
    pub title: String,
    pub author: String,
    pub status: BookStatus,
    pub actions: Vec<BookAction>,
}

/// Everything a client needs to render the catalog page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogView {
    pub session: SessionInfo,
    /// Present only for admins
    pub form: Option<BookForm>,
    pub books: Vec<BookRow>,
    pub notice: Option<String>,
}

impl CatalogView {
    pub(crate) fn project(session: Session, books: &[Book], editing: Option<&Book>) -> Self {
        let role = session.role();

        let form = match role {
            Some(Role::Admin) => Some(match editing {
                Some(book) => BookForm {
                    mode: FormMode::Update,
                    editing: Some(book.id),
                    draft: BookDraft::from(book),
                },
                None => BookForm {
                    mode: FormMode::Add,
                    editing: None,
                    draft: BookDraft::default(),
                },
            }),
            _ => None,
        };

        let rows: Vec<BookRow> = books
            .iter()
            .enumerate()
            .map(|(position, book)| BookRow {
                id: book.id,
                position,
                title: book.title.clone(),
                author: book.author.clone(),
                status: book.status(),
                actions: actions_for(role, book),
            })
            .collect();

        let notice = rows.is_empty().then(|| EMPTY_CATALOG_NOTICE.to_string());

        Self {
            session: session.into(),
            form,
            books: rows,
            notice,
        }
    }
}

fn actions_for(role: Option<Role>, book: &Book) -> Vec<BookAction> {
    match role {
        Some(Role::Admin) => vec![BookAction::Edit, BookAction::Delete],
        Some(Role::User) if book.available => vec![BookAction::Borrow],
        Some(Role::User) => vec![BookAction::Return],
        None => Vec::new(),
    }
}
