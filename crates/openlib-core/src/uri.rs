//! Request URI construction
//!
//! Each [`ApiFamily`] owns a fixed path prefix, a file extension and a
//! host. [`build_uri`] composes `prefix/id/subpath.ext?query`, tolerating
//! ids that already carry the prefix (`/works/OL45883W`) or the extension
//! (`OL45883W.json`), so feeding a built path back in is a no-op.
//!
//! API docs: https://openlibrary.org/developers/api

use std::borrow::Cow;

use openlib_identifiers::{classify, join_bibkeys, normalize, Bibkey, IdentifierKind};

use crate::config::Endpoints;

/// Extensions stripped from ids before the canonical one is appended
const KNOWN_EXTENSIONS: &[&str] = &[".json", ".jpg"];

/// Logical endpoint groups of the Open Library API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiFamily {
    Works,
    Editions,
    Isbn,
    /// Batch bibkey lookup (`api/books`)
    Books,
    Authors,
    Subjects,
    Search,
    Covers,
    AuthorPhotos,
    /// Read/partner API (`api/volumes/brief`)
    Partner,
    RecentChanges,
    /// User pages: lists and reading logs (`people`)
    Lists,
}

/// Which configured host a family is served from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    Primary,
    Image,
}

impl ApiFamily {
    pub fn path_prefix(self) -> &'static str {
        match self {
            ApiFamily::Works => "works",
            ApiFamily::Editions => "books",
            ApiFamily::Isbn => "isbn",
            ApiFamily::Books => "api/books",
            ApiFamily::Authors => "authors",
            ApiFamily::Subjects => "subjects",
            ApiFamily::Search => "search",
            ApiFamily::Covers => "b",
            ApiFamily::AuthorPhotos => "a",
            ApiFamily::Partner => "api/volumes/brief",
            ApiFamily::RecentChanges => "recentchanges",
            ApiFamily::Lists => "people",
        }
    }

    /// File extension appended to the path; `api/books` takes none
    pub fn extension(self) -> Option<&'static str> {
        match self {
            ApiFamily::Covers | ApiFamily::AuthorPhotos => Some(".jpg"),
            ApiFamily::Books => None,
            _ => Some(".json"),
        }
    }

    pub fn host(self) -> Host {
        match self {
            ApiFamily::Covers | ApiFamily::AuthorPhotos => Host::Image,
            _ => Host::Primary,
        }
    }
}

/// Cover and author photo sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ImageSize {
    pub fn suffix(self) -> &'static str {
        match self {
            ImageSize::Small => "S",
            ImageSize::Medium => "M",
            ImageSize::Large => "L",
        }
    }
}

/// Identifies one cover or author photo image
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoverKey {
    pub kind: IdentifierKind,
    pub value: String,
    pub size: ImageSize,
}

impl CoverKey {
    /// Any declared prefix on `raw` is dropped (`ISBN:0385472579` → `0385472579`)
    pub fn new(kind: IdentifierKind, raw: &str, size: ImageSize) -> Self {
        Self {
            kind,
            value: normalize(kind, raw).value().to_string(),
            size,
        }
    }

    /// Cover image by numeric cover id
    pub fn cover_id(id: i64, size: ImageSize) -> Self {
        Self::new(IdentifierKind::Generic, &id.to_string(), size)
    }

    /// Path segment below the family prefix, e.g. `isbn/0385472579-S`
    pub fn segment(&self) -> String {
        format!(
            "{}/{}-{}",
            self.kind.path_segment(),
            self.value,
            self.size.suffix()
        )
    }
}

/// Description of one request, consumed by [`RequestSpec::to_uri`].
///
/// Setters return a new value and leave the receiver untouched, so a base
/// spec can be shared and specialized freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    family: ApiFamily,
    id: String,
    subpath: String,
    params: Vec<(String, String)>,
}

impl RequestSpec {
    pub fn new(family: ApiFamily) -> Self {
        Self {
            family,
            id: String::new(),
            subpath: String::new(),
            params: Vec::new(),
        }
    }

    pub fn with_id(&self, id: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.id = id.into();
        next
    }

    pub fn with_subpath(&self, subpath: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.subpath = subpath.into();
        next
    }

    /// Append a query parameter; order of insertion is kept
    pub fn with_param(&self, key: impl Into<String>, value: impl ToString) -> Self {
        let mut next = self.clone();
        next.params.push((key.into(), value.to_string()));
        next
    }

    pub fn with_optional_param(&self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.with_param(key, v),
            None => self.clone(),
        }
    }

    pub fn family(&self) -> ApiFamily {
        self.family
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn subpath(&self) -> &str {
        &self.subpath
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn path(&self) -> String {
        build_path(self.family, &self.id, &self.subpath)
    }

    /// Absolute URI against the public Open Library hosts
    pub fn to_uri(&self) -> String {
        self.to_uri_with(&Endpoints::default())
    }

    pub fn to_uri_with(&self, endpoints: &Endpoints) -> String {
        build_uri_with(endpoints, self.family, &self.id, &self.subpath, &self.params)
    }

    // === Per-family constructors ===

    /// `works/{olid}.json`
    pub fn work(id: &str) -> Self {
        Self::new(ApiFamily::Works).with_id(bare_id(id))
    }

    /// `books/{olid}.json`
    pub fn edition(id: &str) -> Self {
        Self::new(ApiFamily::Editions).with_id(bare_id(id))
    }

    /// `isbn/{isbn}.json`
    pub fn isbn(isbn: &str) -> Self {
        Self::new(ApiFamily::Isbn).with_id(normalize(IdentifierKind::Isbn, isbn).value())
    }

    /// `api/books?bibkeys=...&format=json&jscmd=data`
    pub fn books(bibkeys: &[Bibkey]) -> Self {
        Self::new(ApiFamily::Books)
            .with_param("bibkeys", join_bibkeys(bibkeys))
            .with_param("format", "json")
            .with_param("jscmd", "data")
    }

    /// `authors/{olid}.json`
    pub fn author(id: &str) -> Self {
        Self::new(ApiFamily::Authors).with_id(bare_id(id))
    }

    /// `subjects/{name}.json`
    pub fn subject(name: &str) -> Self {
        Self::new(ApiFamily::Subjects).with_id(name)
    }

    /// `search.json?q=...`
    pub fn search(query: &str) -> Self {
        Self::new(ApiFamily::Search).with_param("q", query)
    }

    /// `search/authors.json?q=...`
    pub fn search_authors(query: &str) -> Self {
        Self::new(ApiFamily::Search)
            .with_id("authors")
            .with_param("q", query)
    }

    /// `b/{kind}/{value}-{size}.jpg` on the image host
    pub fn cover(key: &CoverKey) -> Self {
        Self::new(ApiFamily::Covers).with_id(key.segment())
    }

    /// `a/{kind}/{value}-{size}.jpg` on the image host
    pub fn author_photo(key: &CoverKey) -> Self {
        Self::new(ApiFamily::AuthorPhotos).with_id(key.segment())
    }

    /// `api/volumes/brief/{kind}/{value}.json`
    pub fn partner(kind: IdentifierKind, value: &str) -> Self {
        let value = normalize(kind, value);
        Self::new(ApiFamily::Partner).with_id(format!("{}/{}", kind.path_segment(), value.value()))
    }

    /// `recentchanges[/{date}][/{kind}].json`; date as `YYYY`, `YYYY/MM` or `YYYY/MM/DD`
    pub fn recent_changes(date: Option<&str>, kind: Option<&str>) -> Self {
        let id = [date, kind]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        Self::new(ApiFamily::RecentChanges).with_id(id)
    }

    /// `people/{user}/lists.json`
    pub fn user_lists(user: &str) -> Self {
        Self::new(ApiFamily::Lists).with_id(format!("{}/lists", user))
    }

    /// `people/{user}/lists/{list}/seeds.json`
    pub fn list_seeds(user: &str, list_id: &str) -> Self {
        Self::new(ApiFamily::Lists)
            .with_id(format!("{}/lists/{}", user, list_id))
            .with_subpath("seeds")
    }

    /// `people/{user}/books/{shelf}.json`
    pub fn reading_log(user: &str, shelf: &str) -> Self {
        Self::new(ApiFamily::Lists)
            .with_id(format!("{}/books", user))
            .with_subpath(shelf)
    }
}

/// Strip a bibkey-style prefix (`OLID:OL1W` → `OL1W`); path-style keys pass through
fn bare_id(id: &str) -> String {
    classify(id).value
}

/// Build an absolute URI against the public Open Library hosts
pub fn build_uri(
    family: ApiFamily,
    id: &str,
    subpath: &str,
    params: &[(String, String)],
) -> String {
    build_uri_with(&Endpoints::default(), family, id, subpath, params)
}

pub fn build_uri_with(
    endpoints: &Endpoints,
    family: ApiFamily,
    id: &str,
    subpath: &str,
    params: &[(String, String)],
) -> String {
    let host = match family.host() {
        Host::Primary => &endpoints.primary_host,
        Host::Image => &endpoints.image_host,
    };
    let mut uri = format!(
        "{}://{}/{}",
        endpoints.scheme,
        host,
        build_path(family, id, subpath)
    );
    let query = encode_query(params);
    if !query.is_empty() {
        uri.push('?');
        uri.push_str(&query);
    }
    uri
}

/// Relative path (no leading `/`) for a family, id and subpath
pub fn build_path(family: ApiFamily, id: &str, subpath: &str) -> String {
    let prefix = family.path_prefix();

    let id = strip_known_extension(id.trim_matches('/'));
    let id = strip_path_prefix(id, prefix);
    let subpath = strip_known_extension(subpath.trim_matches('/'));

    let mut path = prefix.to_string();
    for segment in [id, subpath] {
        if !segment.is_empty() {
            path.push('/');
            path.push_str(&encode_path(segment));
        }
    }
    if let Some(ext) = family.extension() {
        path.push_str(ext);
    }
    path
}

/// Percent-encode and join parameters as `k=v&k=v`, keeping their order
pub fn encode_query(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn strip_path_prefix<'a>(segment: &'a str, prefix: &str) -> &'a str {
    // a built path with an empty id is the bare prefix
    if segment == prefix {
        return "";
    }
    segment
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(segment)
}

fn strip_known_extension(segment: &str) -> &str {
    KNOWN_EXTENSIONS
        .iter()
        .find_map(|ext| segment.strip_suffix(ext))
        .unwrap_or(segment)
}

/// Encode each `/`-separated piece; slashes themselves are kept.
///
/// Pieces are decoded first so an already-encoded path is not encoded twice.
fn encode_path(segment: &str) -> String {
    segment
        .split('/')
        .map(|piece| {
            let decoded = urlencoding::decode(piece).unwrap_or(Cow::Borrowed(piece));
            urlencoding::encode(&decoded).into_owned()
        })
        .collect::<Vec<_>>()
        .join("/")
}
