//! Paging

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Upper bound on the page size a caller can request.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// A resolved, always-valid page request.
///
/// Page numbers are 1-based at the boundary and converted to row offsets here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u32,
    page_size: u32,
}

impl PageRequest {
    /// Build a page request from optional caller input.
    ///
    /// Missing or non-positive page numbers select the first page. A missing or
    /// non-positive size uses [`DEFAULT_PAGE_SIZE`]; anything above
    /// [`MAX_PAGE_SIZE`] is clamped.
    #[must_use]
    pub fn new(page_number: Option<i64>, page_size: Option<i64>) -> Self {
        let page_number = page_number
            .filter(|number| *number > 0)
            .map_or(1, |number| u32::try_from(number).unwrap_or(u32::MAX));

        let page_size = match page_size {
            Some(size) if size > i64::from(MAX_PAGE_SIZE) => MAX_PAGE_SIZE,
            Some(size) if size > 0 => u32::try_from(size).unwrap_or(MAX_PAGE_SIZE),
            Some(_) | None => DEFAULT_PAGE_SIZE,
        };

        Self {
            page_number,
            page_size,
        }
    }

    #[must_use]
    pub const fn first() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page_number(&self) -> u32 {
        self.page_number
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of rows to skip.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (i64::from(self.page_number) - 1) * i64::from(self.page_size)
    }

    /// Number of rows to fetch.
    #[must_use]
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One page of an ordered result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_elements: u64,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page_number: request.page_number(),
            page_size: request.page_size(),
            total_elements,
        }
    }

    /// Cut the requested page out of an already ordered, fully materialised list.
    #[must_use]
    pub fn from_ordered(items: Vec<T>, request: PageRequest) -> Self {
        let total_elements = items.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(request.limit()).unwrap_or(usize::MAX);

        let content = items.into_iter().skip(offset).take(limit).collect();

        Self::new(content, request, total_elements)
    }

    #[must_use]
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }

        self.total_elements.div_ceil(u64::from(self.page_size))
    }

    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
        }
    }
}
