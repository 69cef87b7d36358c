//! Book model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Library book. `available` is the only field that changes after
/// creation, toggled by the borrowing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: i32,
    pub available: bool,
}

/// Payload to register a book; new books start available
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: i32,
}
