//! Catalog service: async access to the session-scoped store

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    error::AppResult,
    models::{BookDraft, BookId, CatalogView, Role, SessionInfo},
    store::CatalogStore,
};

#[derive(Clone, Default)]
pub struct CatalogService {
    store: Arc<Mutex<CatalogStore>>,
}

impl CatalogService {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Current session
    pub async fn session(&self) -> SessionInfo {
        self.store.lock().await.session().into()
    }

    /// Current catalog projection
    pub async fn view(&self) -> CatalogView {
        self.store.lock().await.view()
    }

    pub async fn login(&self, role: Role) -> CatalogView {
        let mut store = self.store.lock().await;
        store.login(role);
        tracing::info!("Logged in as {} ({} books in catalog)", role, store.len());
        store.view()
    }

    pub async fn logout(&self) -> CatalogView {
        let mut store = self.store.lock().await;
        let discarded = store.len();
        store.logout();
        tracing::info!("Logged out, {} books discarded", discarded);
        store.view()
    }

    pub async fn add_book(&self, draft: BookDraft) -> AppResult<CatalogView> {
        let mut store = self.store.lock().await;
        let total = store.add_book(draft)?.len();
        if let Some(book) = store.books().last() {
            tracing::info!("Added book {} \"{}\" by {} ({} total)", book.id, book.title, book.author, total);
        }
        Ok(store.view())
    }

    pub async fn update_book(&self, id: BookId, draft: BookDraft) -> AppResult<CatalogView> {
        let mut store = self.store.lock().await;
        store.update_book(id, draft)?;
        tracing::info!("Updated book {}", id);
        Ok(store.view())
    }

    pub async fn delete_book(&self, id: BookId) -> AppResult<CatalogView> {
        let mut store = self.store.lock().await;
        let removed = store.delete_book(id)?;
        tracing::info!("Deleted book {} \"{}\"", removed.id, removed.title);
        Ok(store.view())
    }

    pub async fn begin_edit(&self, id: BookId) -> AppResult<CatalogView> {
        let mut store = self.store.lock().await;
        store.begin_edit(id)?;
        tracing::debug!("Editing book {}", id);
        Ok(store.view())
    }

    pub async fn cancel_edit(&self) -> AppResult<CatalogView> {
        let mut store = self.store.lock().await;
        store.cancel_edit()?;
        Ok(store.view())
    }

    pub async fn borrow_book(&self, id: BookId) -> AppResult<CatalogView> {
        let mut store = self.store.lock().await;
        store.borrow_book(id)?;
        tracing::info!("Borrowed book {}", id);
        Ok(store.view())
    }

    pub async fn return_book(&self, id: BookId) -> AppResult<CatalogView> {
        let mut store = self.store.lock().await;
        store.return_book(id)?;
        tracing::info!("Returned book {}", id);
        Ok(store.view())
    }
}
