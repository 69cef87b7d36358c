//! API handlers for Mercado REST endpoints

pub mod health;
pub mod library;
pub mod market;
pub mod openapi;
pub mod products;
