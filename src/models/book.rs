//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Stable book identifier, assigned once when the book is added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct BookId(pub Uuid);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Book record held in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// False while the book is borrowed
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    pub(crate) fn new(draft: BookDraft) -> Self {
        let now = Utc::now();
        let (title, author) = draft.into_trimmed();
        Self {
            id: BookId::new(),
            title,
            author,
            available: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn status(&self) -> BookStatus {
        if self.available {
            BookStatus::Available
        } else {
            BookStatus::Borrowed
        }
    }

    /// Whether this book has the same duplicate key as the given title and author
    pub fn matches(&self, title: &str, author: &str) -> bool {
        duplicate_key(&self.title) == duplicate_key(title)
            && duplicate_key(&self.author) == duplicate_key(author)
    }
}

/// Availability state of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BookStatus {
    Available,
    Borrowed,
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BookStatus::Available => "Available",
            BookStatus::Borrowed => "Borrowed",
        };
        write!(f, "{}", label)
    }
}

/// Title and author as entered in the add/update form. Missing fields
/// deserialize as empty and are caught by validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(default)]
pub struct BookDraft {
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Title must be at most 255 characters")
    )]
    pub title: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Author must be at most 255 characters")
    )]
    pub author: String,
}

impl BookDraft {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    pub(crate) fn into_trimmed(self) -> (String, String) {
        (self.title.trim().to_string(), self.author.trim().to_string())
    }
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self::new(book.title.clone(), book.author.clone())
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some("Both title and author are required".into());
        return Err(error);
    }
    Ok(())
}

/// Case-insensitive comparison key: trimmed, NFC-normalized, lowercased
pub fn duplicate_key(s: &str) -> String {
    s.trim().nfc().collect::<String>().to_lowercase()
}
