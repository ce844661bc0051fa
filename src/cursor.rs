//! Paginated iteration over resource names

use tracing::debug;

use crate::client::RequestContext;
use crate::error::Error;
use crate::model::ResourceKind;
use crate::resolver::Resolver;

/// Where a cursor is in its listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// `page` is the next page [`NameCursor::advance`] will fetch
    Active { page: u32 },
    /// The server reported no results past `last_page`; terminal
    Exhausted { last_page: u32 },
}

/// Stateful cursor over a name listing.
///
/// The page size is fixed at construction and the offset of a page is always
/// `(page - 1) * page_size`. Once the server reports no more results the
/// cursor is exhausted for good and [`advance`](Self::advance) fails with
/// [`Error::EndOfPages`] without touching the network.
///
/// Advancing needs `&mut self`; share a cursor between tasks only behind a lock.
#[derive(Debug, Clone)]
pub struct NameCursor {
    resolver: Resolver,
    kind: ResourceKind,
    page_size: u32,
    state: CursorState,
}

impl NameCursor {
    /// Pages and page sizes below 1 are raised to 1.
    pub(crate) fn new(resolver: Resolver, kind: ResourceKind, page: u32, page_size: u32) -> Self {
        Self {
            resolver,
            kind,
            page_size: page_size.max(1),
            state: CursorState::Active { page: page.max(1) },
        }
    }

    /// The resource kind whose names this cursor lists
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Number of names requested per page; fixed at construction
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Current position in the listing
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// The current page: the next one to fetch, or the last one once exhausted
    pub fn page(&self) -> u32 {
        match self.state {
            CursorState::Active { page } => page,
            CursorState::Exhausted { last_page } => last_page,
        }
    }

    /// Returns true once the server has reported no results past the current page.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, CursorState::Exhausted { .. })
    }

    fn offset(&self) -> u64 {
        u64::from(self.page() - 1) * u64::from(self.page_size)
    }

    /// Fetches the current page with a context that never cancels.
    pub async fn get(&self) -> Result<Vec<String>, Error> {
        self.get_with_context(&RequestContext::background()).await
    }

    /// Fetches the current page without moving the cursor.
    ///
    /// Repeatable; works on an exhausted cursor too, returning its last page.
    pub async fn get_with_context(&self, ctx: &RequestContext) -> Result<Vec<String>, Error> {
        let page = self
            .resolver
            .get_names_page(self.kind, self.page_size, self.offset(), ctx)
            .await?;
        Ok(page.names)
    }

    /// Fetches the current page and moves to the next one.
    ///
    /// The page that reveals the end of the listing is still returned; only
    /// the call after it fails with [`Error::EndOfPages`]. A failed fetch
    /// leaves the cursor where it was.
    pub async fn advance(&mut self, ctx: &RequestContext) -> Result<Vec<String>, Error> {
        let page = match self.state {
            CursorState::Active { page } => page,
            CursorState::Exhausted { .. } => return Err(Error::EndOfPages),
        };

        let result = self
            .resolver
            .get_names_page(self.kind, self.page_size, self.offset(), ctx)
            .await?;

        // A page number past u32::MAX cannot be requested, so the listing ends there.
        self.state = match page.checked_add(1) {
            Some(next) if result.has_more => CursorState::Active { page: next },
            _ => CursorState::Exhausted { last_page: page },
        };
        debug!(kind = %self.kind, page, state = ?self.state, "cursor advanced");

        Ok(result.names)
    }

    /// Advances until the cursor is exhausted, concatenating every page.
    pub async fn collect_remaining(&mut self, ctx: &RequestContext) -> Result<Vec<String>, Error> {
        let mut names = Vec::new();
        while !self.is_exhausted() {
            names.extend(self.advance(ctx).await?);
        }
        Ok(names)
    }
}
