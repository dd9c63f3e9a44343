//! Session-scoped in-memory catalog.
//!
//! Every mutating operation validates fully before touching state, so a
//! rejected call leaves the catalog exactly as it was.

use chrono::Utc;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookDraft, BookId, Capability, CatalogView, Role, Session},
};

#[derive(Debug, Default)]
pub struct CatalogStore {
    session: Session,
    books: Vec<Book>,
    editing: Option<BookId>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Session
    // =========================================================================

    pub fn session(&self) -> Session {
        self.session
    }

    /// Start (or switch) the session. The catalog is left untouched.
    pub fn login(&mut self, role: Role) {
        self.session.login(role);
        self.editing = None;
    }

    /// End the session and discard the catalog
    pub fn logout(&mut self) {
        self.reset();
    }

    /// Return to the initial state: no session, empty catalog, no pending edit
    pub fn reset(&mut self) {
        self.session.logout();
        self.books.clear();
        self.editing = None;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, id: BookId) -> AppResult<&Book> {
        self.books
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| not_found(id))
    }

    pub fn position_of(&self, id: BookId) -> AppResult<usize> {
        self.books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| not_found(id))
    }

    /// Resolve a display position to the book's stable id
    pub fn id_at(&self, position: usize) -> AppResult<BookId> {
        self.books
            .get(position)
            .map(|b| b.id)
            .ok_or_else(|| AppError::NotFound(format!("No book at position {}", position)))
    }

    /// True if a book other than `ignore` already has this title and author
    pub fn is_duplicate(&self, title: &str, author: &str, ignore: Option<BookId>) -> bool {
        self.books
            .iter()
            .any(|b| Some(b.id) != ignore && b.matches(title, author))
    }

    /// Book currently loaded in the update form
    pub fn editing(&self) -> Option<&Book> {
        self.editing
            .and_then(|id| self.books.iter().find(|b| b.id == id))
    }

    pub fn view(&self) -> CatalogView {
        CatalogView::project(self.session, &self.books, self.editing())
    }

    // =========================================================================
    // Catalog management (admin)
    // =========================================================================

    pub fn add_book(&mut self, draft: BookDraft) -> AppResult<&[Book]> {
        self.session.require(Capability::ManageCatalog)?;
        draft.validate()?;

        if self.is_duplicate(&draft.title, &draft.author, None) {
            tracing::debug!("Rejected duplicate book {:?} by {:?}", draft.title, draft.author);
            return Err(AppError::Duplicate("This book already exists".to_string()));
        }

        self.books.push(Book::new(draft));
        Ok(self.books.as_slice())
    }

    pub fn update_book(&mut self, id: BookId, draft: BookDraft) -> AppResult<&[Book]> {
        self.session.require(Capability::ManageCatalog)?;
        let position = self.position_of(id)?;
        draft.validate()?;

        if self.is_duplicate(&draft.title, &draft.author, Some(id)) {
            tracing::debug!("Rejected update of {} colliding with an existing book", id);
            return Err(AppError::Duplicate(
                "Duplicate book entry after update".to_string(),
            ));
        }

        let (title, author) = draft.into_trimmed();
        let book = &mut self.books[position];
        book.title = title;
        book.author = author;
        book.updated_at = Utc::now();
        self.editing = None;

        Ok(self.books.as_slice())
    }

    /// Remove a book; books after it move up one position
    pub fn delete_book(&mut self, id: BookId) -> AppResult<Book> {
        self.session.require(Capability::ManageCatalog)?;
        let position = self.position_of(id)?;

        if self.editing == Some(id) {
            self.editing = None;
        }
        Ok(self.books.remove(position))
    }

    /// Load a book into the update form
    pub fn begin_edit(&mut self, id: BookId) -> AppResult<BookDraft> {
        self.session.require(Capability::ManageCatalog)?;
        let draft = BookDraft::from(self.get(id)?);
        self.editing = Some(id);
        Ok(draft)
    }

    pub fn cancel_edit(&mut self) -> AppResult<()> {
        self.session.require(Capability::ManageCatalog)?;
        self.editing = None;
        Ok(())
    }

    // =========================================================================
    // Circulation (user)
    // =========================================================================

    pub fn borrow_book(&mut self, id: BookId) -> AppResult<&Book> {
        self.session.require(Capability::Circulate)?;
        let position = self.position_of(id)?;

        let book = &mut self.books[position];
        if !book.available {
            return Err(AppError::AlreadyBorrowed(
                "This book is already borrowed".to_string(),
            ));
        }
        book.available = false;
        book.updated_at = Utc::now();
        Ok(&*book)
    }

    /// Mark a book available. Returning an available book is a no-op.
    pub fn return_book(&mut self, id: BookId) -> AppResult<&Book> {
        self.session.require(Capability::Circulate)?;
        let position = self.position_of(id)?;

        let book = &mut self.books[position];
        if !book.available {
            book.available = true;
            book.updated_at = Utc::now();
        }
        Ok(&*book)
    }
}

fn not_found(id: BookId) -> AppError {
    AppError::NotFound(format!("Book {} not found", id))
}
