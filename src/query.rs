//! Sparse query-parameter assembly.
//!
//! Filter records keep every field optional; only fields the caller set are
//! serialized. Presence is decided by `Option` alone — a defined-but-falsy
//! value such as `0` or `""` is still sent, an unset field never is.

/// Insertion-ordered set of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    pairs: Vec<(&'static str, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.pairs.push((name, value.into()));
    }

    /// Append the pair only when a value is present.
    pub fn push_opt<T>(&mut self, name: &'static str, value: Option<&T>)
    where
        T: ToString + ?Sized,
    {
        if let Some(value) = value {
            self.pairs.push((name, value.to_string()));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

/// Filters accepted by the `/companies` listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyFilters {
    pub industry: Option<String>,
    pub size: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl CompanyFilters {
    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("industry", self.industry.as_deref());
        pairs.push_opt("size", self.size.as_deref());
        pairs.push_opt("search", self.search.as_deref());
        pairs.push_opt("page", self.page.as_ref());
        pairs.push_opt("limit", self.limit.as_ref());
        pairs
    }
}

/// Filters accepted by the `/jobs` listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilters {
    pub company: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub limit: Option<u32>,
}

impl JobFilters {
    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("company", self.company.as_deref());
        pairs.push_opt("category", self.category.as_deref());
        pairs.push_opt("location", self.location.as_deref());
        pairs.push_opt("limit", self.limit.as_ref());
        pairs
    }
}
