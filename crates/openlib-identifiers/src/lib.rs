//! Identifier handling for the Open Library API
//!
//! This crate provides the pure, I/O-free pieces of identifier handling:
//! - Classification of raw identifiers (ISBN, OLID, LCCN, OCLC)
//! - Bibkey normalization (`"ISBN:0451526538"`, `"OLID:OL1M"`, ...)
//! - ISBN normalization and checksum validation

pub mod bibkey;
pub mod error;
pub mod isbn;
pub mod kind;

pub use bibkey::*;
pub use error::*;
pub use isbn::*;
pub use kind::*;
