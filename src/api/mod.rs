//! API handlers for the Book Store REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
