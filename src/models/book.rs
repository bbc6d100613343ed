//! Book (catalog entry) model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Accepted format for publication dates submitted through the catalog form
pub const PUBLICATION_DATE_FORMAT: &str = "%Y-%m-%d";

/// Book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publication_date: NaiveDate,
    /// Time the book entered the catalog; listings are ordered by it
    pub registered_at: DateTime<Utc>,
}

/// Add book form, field names match the catalog page
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBook {
    #[serde(rename = "titulo")]
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,
    #[serde(rename = "autor")]
    #[validate(length(min = 1, max = 200, message = "Author is required"))]
    pub author: String,
    #[serde(rename = "data_publicacao")]
    pub publication_date: String,
}

impl CreateBook {
    pub fn new(title: &str, author: &str, publication_date: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            publication_date: publication_date.to_string(),
        }
    }

    /// Strip surrounding whitespace so blank fields fail validation
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            publication_date: self.publication_date.trim().to_string(),
        }
    }

    pub fn parse_publication_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.publication_date, PUBLICATION_DATE_FORMAT).ok()
    }
}
