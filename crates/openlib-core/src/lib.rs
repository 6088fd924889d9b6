//! Typed client core for the Open Library API
//!
//! This crate provides:
//! - Request URI construction per API family ([`uri`])
//! - Normalization of fields the API emits in several JSON shapes ([`shape`])
//! - Envelope-aware payload parsing ([`parse`])
//! - Typed entity records ([`domain`])
//! - A transport seam and blocking client ([`http`], [`client`])
//!
//! Identifier classification and bibkeys live in `openlib-identifiers`
//! and are re-exported here.

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod parse;
pub mod shape;
pub mod uri;

pub use client::{OpenLibClient, Paging};
pub use config::{ClientConfig, Endpoints};
pub use domain::*;
pub use error::{OpenLibError, Result};
pub use http::{Transport, TransportError};
pub use parse::{parse_payload, parse_payload_bytes};
pub use shape::{FieldShape, NormalizedField, ShapeError};
pub use uri::{build_uri, build_uri_with, ApiFamily, CoverKey, Host, ImageSize, RequestSpec};

pub use openlib_identifiers::{
    classify, is_olid, normalize, resolve_bibkey, Bibkey, Classification, IdentifierError,
    IdentifierKind,
};

#[cfg(feature = "native")]
pub use http::ReqwestTransport;
