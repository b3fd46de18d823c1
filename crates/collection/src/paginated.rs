//! Paginated collection
//!
//! One page of an [`EntityCollection`] together with its page counters. The
//! counters are fixed when the page is built and do not follow later changes
//! to the wrapped collection.

use std::fmt;

use datakind_entity::{Identifiable, JsonSerializable};
use datakind_error::{DataError, Result};
use datakind_scalar::PositiveInteger;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use crate::EntityCollection;

/// Upper bound accepted for [`PageRequest::per_page`]
pub const MAX_PER_PAGE: i64 = 1000;

// ============================================================================
// SORTING
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// Field and direction the page was sorted by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDescriptor {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortDescriptor {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

// ============================================================================
// PAGE REQUEST
// ============================================================================

/// Page a caller asks for.
///
/// Deserializes from `{"page": 2, "per_page": 25}`; missing keys fall back
/// to page 1 and 15 per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPageRequest")]
pub struct PageRequest {
    page: PositiveInteger,
    per_page: PositiveInteger,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawPageRequest {
    page: i64,
    per_page: i64,
}

impl Default for RawPageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: PageRequest::DEFAULT_PER_PAGE,
        }
    }
}

impl TryFrom<RawPageRequest> for PageRequest {
    type Error = DataError;

    fn try_from(raw: RawPageRequest) -> Result<Self> {
        Self::new(raw.page, raw.per_page)
    }
}

impl PageRequest {
    pub const DEFAULT_PER_PAGE: i64 = 15;

    /// Fails with `NonPositiveInteger` for a counter below 1 and
    /// `ParameterOutOfRange` when `per_page` exceeds [`MAX_PER_PAGE`]
    pub fn new(page: i64, per_page: i64) -> Result<Self> {
        let page = PositiveInteger::named("page", page)?;
        let per_page = PositiveInteger::named("per_page", per_page)?;
        if per_page.get() > MAX_PER_PAGE {
            return Err(DataError::parameter_out_of_range(
                "per_page",
                per_page.get(),
                MAX_PER_PAGE,
            ));
        }
        Ok(Self { page, per_page })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn page(&self) -> PositiveInteger {
        self.page
    }

    pub fn per_page(&self) -> PositiveInteger {
        self.per_page
    }

    /// Records skipped before this page
    pub fn offset(&self) -> usize {
        (self.page.as_usize() - 1).saturating_mul(self.per_page.as_usize())
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: PositiveInteger::ONE,
            per_page: PositiveInteger::new(Self::DEFAULT_PER_PAGE).unwrap_or(PositiveInteger::ONE),
        }
    }
}

// ============================================================================
// PAGE META
// ============================================================================

/// Counters describing one page of a larger result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub sort: Option<SortDescriptor>,
    /// Records across all pages
    pub total: usize,
    /// Id of the first record shown on this page
    pub first_id: Option<i64>,
    /// Id of the last record shown on this page
    pub last_id: Option<i64>,
    pub current_page: PositiveInteger,
    pub last_page: PositiveInteger,
    pub per_page: PositiveInteger,
}

impl PageMeta {
    /// Counters for `request` over a result set of `total` records; there is
    /// always at least one page
    pub fn for_request(request: PageRequest, total: usize) -> Result<Self> {
        let per_page = request.per_page();
        let pages = total.div_ceil(per_page.as_usize()).max(1);
        let last_page = PositiveInteger::named("last_page", i64::try_from(pages).unwrap_or(i64::MAX))?;
        Ok(Self {
            sort: None,
            total,
            first_id: None,
            last_id: None,
            current_page: request.page(),
            last_page,
            per_page,
        })
    }

    pub fn with_sort(mut self, sort: SortDescriptor) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Fails with `ParameterOutOfRange` when the current page lies past the
    /// last one
    pub fn validate(&self) -> Result<()> {
        if self.current_page > self.last_page {
            return Err(DataError::parameter_out_of_range(
                "current_page",
                self.current_page.get(),
                self.last_page.get(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// PAGINATED COLLECTION
// ============================================================================

/// A page of entities plus its counters.
#[derive(Debug, Clone)]
pub struct PaginatedCollection<V> {
    items: EntityCollection<V>,
    meta: PageMeta,
}

impl<V: Identifiable> PaginatedCollection<V> {
    /// Wraps a page; `first_id`/`last_id` default to the ends of `items`
    /// when the meta leaves them unset
    pub fn new(items: EntityCollection<V>, mut meta: PageMeta) -> Result<Self> {
        meta.validate()?;
        if meta.first_id.is_none() {
            meta.first_id = items.first().map(Identifiable::id);
        }
        if meta.last_id.is_none() {
            meta.last_id = items.last().map(Identifiable::id);
        }
        debug!(
            page = meta.current_page.get(),
            last_page = meta.last_page.get(),
            count = items.count(),
            "page built"
        );
        Ok(Self { items, meta })
    }
}

impl<V> PaginatedCollection<V> {
    pub fn items(&self) -> &EntityCollection<V> {
        &self.items
    }

    pub fn into_items(self) -> EntityCollection<V> {
        self.items
    }

    pub fn meta(&self) -> &PageMeta {
        &self.meta
    }

    fn offset(&self) -> usize {
        (self.meta.current_page.as_usize() - 1).saturating_mul(self.meta.per_page.as_usize())
    }

    /// 1-based display position of the first record on this page, or 0 for
    /// an empty page
    pub fn from_record(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.offset() + 1
        }
    }

    /// 1-based display position of the last record on this page, capped at
    /// the page's own size
    pub fn to_record(&self) -> usize {
        self.offset() + self.items.count().min(self.meta.per_page.as_usize())
    }

    pub fn has_more_pages(&self) -> bool {
        self.meta.current_page < self.meta.last_page
    }

    pub fn is_first_page(&self) -> bool {
        self.meta.current_page == PositiveInteger::ONE
    }

    pub fn is_last_page(&self) -> bool {
        self.meta.current_page == self.meta.last_page
    }

    pub fn next_page(&self) -> Option<PositiveInteger> {
        if !self.has_more_pages() {
            return None;
        }
        PositiveInteger::new(self.meta.current_page.get() + 1).ok()
    }

    pub fn previous_page(&self) -> Option<PositiveInteger> {
        PositiveInteger::new(self.meta.current_page.get() - 1).ok()
    }
}

impl<V: JsonSerializable> PaginatedCollection<V> {
    /// `{"data": [...], "meta": {...}}`
    pub fn to_json(&self) -> Result<Value> {
        let mut meta = serde_json::to_value(&self.meta)?;
        if let Value::Object(fields) = &mut meta {
            fields.insert("from".into(), json!(self.from_record()));
            fields.insert("to".into(), json!(self.to_record()));
        }
        Ok(json!({
            "data": self.items.to_json()?,
            "meta": meta,
        }))
    }
}
