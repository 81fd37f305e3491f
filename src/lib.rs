//! bookshelf - a document-backed CRUD service for authors, sections, and books

pub mod cli;
pub mod rest;
pub mod schema;
pub mod store;
