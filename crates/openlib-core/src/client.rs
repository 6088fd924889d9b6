//! Open Library client
//!
//! Every loader is the same three steps: build a [`RequestSpec`], GET it
//! through the [`Transport`], decode the body (optionally drilling into
//! one envelope property). Loaders fail with the first error; callers that
//! want an optional result use `.ok()`.

use std::collections::BTreeMap;

use openlib_identifiers::{normalize_isbn, Bibkey, IdentifierKind};
use serde::de::DeserializeOwned;

use crate::config::Endpoints;
use crate::domain::{
    Author, AuthorSearchDoc, BookData, BookshelfCounts, Edition, ListSeed, ListSummary,
    PartnerResponse, ReadingLogEntry, RecentChange, SearchPage, Shelf, Subject, Work,
    WorkRatings, WorkSearchDoc,
};
use crate::error::Result;
use crate::http::Transport;
use crate::parse::parse_payload_bytes;
use crate::uri::{CoverKey, RequestSpec};

/// `limit`/`offset` query parameters for paged endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paging {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl Paging {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    pub fn limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: None,
        }
    }

    fn apply(&self, spec: RequestSpec) -> RequestSpec {
        spec.with_optional_param("limit", self.limit)
            .with_optional_param("offset", self.offset)
    }
}

pub struct OpenLibClient<T: Transport> {
    transport: T,
    endpoints: Endpoints,
}

impl<T: Transport> OpenLibClient<T> {
    /// Client against the public Open Library hosts
    pub fn new(transport: T) -> Self {
        Self::with_endpoints(transport, Endpoints::default())
    }

    pub fn with_endpoints(transport: T, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // === Works ===

    pub fn work(&self, id: &str) -> Result<Work> {
        self.load(&RequestSpec::work(id), None)
    }

    /// `works/{olid}/editions.json`, `entries` of the page
    pub fn work_editions(&self, id: &str, paging: Paging) -> Result<Vec<Edition>> {
        let spec = paging.apply(RequestSpec::work(id).with_subpath("editions"));
        self.load(&spec, Some("entries"))
    }

    pub fn work_ratings(&self, id: &str) -> Result<WorkRatings> {
        let body = self.fetch(&RequestSpec::work(id).with_subpath("ratings"))?;
        Ok(WorkRatings {
            summary: parse_payload_bytes(&body, Some("summary"))?,
            counts: parse_payload_bytes(&body, Some("counts"))?,
        })
    }

    pub fn work_bookshelves(&self, id: &str) -> Result<BookshelfCounts> {
        self.load(&RequestSpec::work(id).with_subpath("bookshelves"), Some("counts"))
    }

    // === Editions ===

    pub fn edition(&self, id: &str) -> Result<Edition> {
        self.load(&RequestSpec::edition(id), None)
    }

    /// Accepts hyphenated or prefixed ISBNs (`ISBN:0-14-032872-1`)
    pub fn edition_by_isbn(&self, isbn: &str) -> Result<Edition> {
        self.load(&RequestSpec::isbn(&normalize_isbn(isbn)), None)
    }

    /// Batch lookup; unknown bibkeys are absent from the returned map
    pub fn books(&self, bibkeys: &[Bibkey]) -> Result<BTreeMap<String, BookData>> {
        if bibkeys.is_empty() {
            return Ok(BTreeMap::new());
        }
        self.load(&RequestSpec::books(bibkeys), None)
    }

    // === Authors ===

    pub fn author(&self, id: &str) -> Result<Author> {
        self.load(&RequestSpec::author(id), None)
    }

    pub fn author_works(&self, id: &str, paging: Paging) -> Result<Vec<Work>> {
        let spec = paging.apply(RequestSpec::author(id).with_subpath("works"));
        self.load(&spec, Some("entries"))
    }

    /// Total number of works credited to an author
    pub fn author_work_count(&self, id: &str) -> Result<i64> {
        let spec = RequestSpec::author(id)
            .with_subpath("works")
            .with_param("limit", 1);
        self.load(&spec, Some("size"))
    }

    // === Subjects and search ===

    pub fn subject(&self, name: &str, paging: Paging) -> Result<Subject> {
        self.load(&paging.apply(RequestSpec::subject(name)), None)
    }

    pub fn search_works(&self, query: &str, paging: Paging) -> Result<SearchPage<WorkSearchDoc>> {
        self.load(&paging.apply(RequestSpec::search(query)), None)
    }

    pub fn search_authors(
        &self,
        query: &str,
        paging: Paging,
    ) -> Result<SearchPage<AuthorSearchDoc>> {
        self.load(&paging.apply(RequestSpec::search_authors(query)), None)
    }

    // === People ===

    pub fn user_lists(&self, user: &str) -> Result<Vec<ListSummary>> {
        self.load(&RequestSpec::user_lists(user), Some("entries"))
    }

    pub fn list_seeds(&self, user: &str, list_id: &str) -> Result<Vec<ListSeed>> {
        self.load(&RequestSpec::list_seeds(user, list_id), Some("entries"))
    }

    /// One page (1-based) of a public reading-log shelf
    pub fn reading_log(
        &self,
        user: &str,
        shelf: Shelf,
        page: Option<u32>,
    ) -> Result<Vec<ReadingLogEntry>> {
        let spec = RequestSpec::reading_log(user, shelf.path_segment())
            .with_optional_param("page", page);
        self.load(&spec, Some("reading_log_entries"))
    }

    // === Feeds ===

    pub fn recent_changes(
        &self,
        date: Option<&str>,
        kind: Option<&str>,
        paging: Paging,
    ) -> Result<Vec<RecentChange>> {
        self.load(&paging.apply(RequestSpec::recent_changes(date, kind)), None)
    }

    pub fn partner(&self, kind: IdentifierKind, value: &str) -> Result<PartnerResponse> {
        self.load(&RequestSpec::partner(kind, value), None)
    }

    // === Images ===

    pub fn cover_uri(&self, key: &CoverKey) -> String {
        RequestSpec::cover(key).to_uri_with(&self.endpoints)
    }

    /// Raw image bytes
    pub fn cover(&self, key: &CoverKey) -> Result<Vec<u8>> {
        self.fetch(&RequestSpec::cover(key))
    }

    pub fn author_photo_uri(&self, key: &CoverKey) -> String {
        RequestSpec::author_photo(key).to_uri_with(&self.endpoints)
    }

    pub fn author_photo(&self, key: &CoverKey) -> Result<Vec<u8>> {
        self.fetch(&RequestSpec::author_photo(key))
    }

    fn fetch(&self, spec: &RequestSpec) -> Result<Vec<u8>> {
        let uri = spec.to_uri_with(&self.endpoints);
        tracing::debug!("GET {}", uri);
        self.transport.get(&uri).map_err(|e| {
            tracing::warn!("Request to {} failed: {}", uri, e);
            e.into()
        })
    }

    fn load<R: DeserializeOwned>(&self, spec: &RequestSpec, drill_path: Option<&str>) -> Result<R> {
        let body = self.fetch(spec)?;
        parse_payload_bytes(&body, drill_path)
    }
}

#[cfg(feature = "native")]
impl OpenLibClient<crate::http::ReqwestTransport> {
    /// Client backed by reqwest, using the configured hosts, user agent and timeout
    pub fn from_config(config: &crate::config::ClientConfig) -> Result<Self> {
        let transport = crate::http::ReqwestTransport::new(config)?;
        Ok(Self::with_endpoints(transport, config.endpoints.clone()))
    }
}
