//! Data models for the API resources

pub mod book;
pub mod product;
