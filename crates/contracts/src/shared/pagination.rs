//! Pagination primitives shared by the order list endpoint and its clients.
//!
//! Pages are 1-indexed. `Pagination` is always the server's answer and is
//! replaced wholesale after each fetch; `PageRequest` is what the client asks for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Allowed page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    Ten,
    TwentyFive,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::TwentyFive,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    pub fn value(self) -> u32 {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    /// Smallest allowed size that fits `limit`, capped at the largest one.
    pub fn snap(limit: u32) -> Self {
        Self::ALL
            .into_iter()
            .find(|size| size.value() >= limit)
            .unwrap_or(PageSize::Hundred)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Ten
    }
}

impl TryFrom<u32> for PageSize {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.value() == value)
            .ok_or_else(|| format!("unsupported page size {}, expected 10, 25, 50 or 100", value))
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.value()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Параметры запроса страницы (`?limit={n}&page={p}`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub limit: PageSize,
}

impl PageRequest {
    pub fn first(limit: PageSize) -> Self {
        Self { page: 1, limit }
    }

    pub fn query_string(&self) -> String {
        format!("limit={}&page={}", self.limit.value(), self.page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(PageSize::default())
    }
}

/// Состояние пагинации, как его вернул сервер
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PageSize::default().value(),
            total: 0,
            total_pages: 0,
        }
    }
}

impl Pagination {
    /// Pagination for a response that carried no metadata: one page holding everything.
    pub fn single_page(len: usize) -> Self {
        Self {
            page: 1,
            limit: len as u32,
            total: len as u64,
            total_pages: 1,
        }
    }

    /// `ceil(total / limit)`, for responses that omit `totalPages`.
    pub fn pages_for(total: u64, limit: u32) -> u32 {
        if limit == 0 {
            return 0;
        }
        total.div_ceil(u64::from(limit)) as u32
    }

    /// Clamps a requested page into `[1, total_pages]`. With no pages, page 1.
    pub fn clamp_page(&self, requested: u32) -> u32 {
        requested.clamp(1, self.total_pages.max(1))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based positions of the first and last record on this page
    /// ("Showing 11 to 20 of 42 results").
    pub fn visible_range(&self) -> (u64, u64) {
        if self.total == 0 || self.limit == 0 {
            return (0, 0);
        }
        let limit = u64::from(self.limit);
        let first = u64::from(self.page.saturating_sub(1)) * limit + 1;
        let last = (u64::from(self.page) * limit).min(self.total);
        (first.min(self.total), last)
    }

    /// Page buttons to render: up to five consecutive pages starting two before
    /// the current one, with the first/last page and gaps added around them.
    pub fn page_links(&self) -> Vec<PageLink> {
        const MAX_VISIBLE: u32 = 5;

        let total = self.total_pages;
        if total <= MAX_VISIBLE {
            return (1..=total).map(PageLink::Page).collect();
        }

        // Сервер может прислать page за пределами total_pages
        let current = self.page.clamp(1, total);
        let start = current.saturating_sub(2).max(1);
        let end = start.saturating_add(MAX_VISIBLE - 1).min(total);
        let mut links = Vec::with_capacity(MAX_VISIBLE as usize + 4);

        if start > 1 {
            links.push(PageLink::Page(1));
            if start > 2 {
                links.push(PageLink::Gap);
            }
        }
        links.extend((start..=end).map(PageLink::Page));
        if end < total {
            if end < total - 1 {
                links.push(PageLink::Gap);
            }
            links.push(PageLink::Page(total));
        }
        links
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(u32),
    Gap,
}
