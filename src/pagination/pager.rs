//! Sequential page cursor
//!
//! A [`Pager`] walks one logical collection request page by page, driving a
//! [`PageStrategy`] over a [`Transport`]. It issues exactly one request at a
//! time, never fetches ahead, and holds at most one page: the previous page
//! is dropped before the next fetch begins. Cancellation and deadlines are
//! the transport's concern; the pager itself has no timeout logic.

use super::page::Page;
use super::strategy::PageStrategy;
use crate::error::{Error, Result};
use crate::session::Transport;
use std::sync::Arc;
use tracing::debug;

/// Iteration state of a pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PagerState {
    /// No fetch has happened yet
    NotStarted,
    /// Positioned on a fetched page
    Positioned,
    /// The last page has been consumed
    Exhausted,
    /// A fetch or strategy error ended iteration
    Failed,
}

/// The sequential cursor that walks pages via a chosen strategy
pub struct Pager {
    transport: Arc<dyn Transport>,
    initial_url: String,
    strategy: PageStrategy,
    state: PagerState,
    current: Option<Page>,
}

impl Pager {
    /// Create a pager over `initial_url` using `strategy`
    pub fn new(
        transport: Arc<dyn Transport>,
        initial_url: impl Into<String>,
        strategy: PageStrategy,
    ) -> Self {
        Self {
            transport,
            initial_url: initial_url.into(),
            strategy,
            state: PagerState::NotStarted,
            current: None,
        }
    }

    /// Pager for an unpaged collection
    pub fn single(transport: Arc<dyn Transport>, initial_url: impl Into<String>) -> Self {
        Self::new(transport, initial_url, PageStrategy::single())
    }

    /// Pager following `links.next` in each body
    pub fn linked(transport: Arc<dyn Transport>, initial_url: impl Into<String>) -> Self {
        Self::new(transport, initial_url, PageStrategy::linked())
    }

    /// Pager driven by a marker derived from the last element of each page
    pub fn marker(
        transport: Arc<dyn Transport>,
        initial_url: impl Into<String>,
        last_marker: super::strategy::MarkerFn,
    ) -> Self {
        Self::new(transport, initial_url, PageStrategy::marker(last_marker))
    }

    /// The page the cursor is positioned on, if any
    pub fn current(&self) -> Option<&Page> {
        self.current.as_ref()
    }

    /// Advance to the next page, or `Ok(None)` at natural exhaustion.
    ///
    /// The first call fetches the initial URL. Transport and decode errors
    /// mark the pager failed and propagate. Once exhausted or failed,
    /// further calls return [`Error::PageNotAvailable`].
    pub async fn try_advance(&mut self) -> Result<Option<&Page>> {
        let target = match self.state {
            PagerState::NotStarted => self.initial_url.clone(),
            PagerState::Positioned => {
                let page = self
                    .current
                    .as_ref()
                    .ok_or_else(|| Error::page_not_available("pager lost its current page"))?;
                match self.strategy.next_page_url(page) {
                    Ok(Some(url)) => url,
                    Ok(None) => {
                        self.state = PagerState::Exhausted;
                        self.current = None;
                        return Ok(None);
                    }
                    Err(e) => {
                        self.state = PagerState::Failed;
                        self.current = None;
                        return Err(e);
                    }
                }
            }
            PagerState::Exhausted | PagerState::Failed => {
                return Err(Error::page_not_available(
                    "pager is exhausted or failed; no further pages can be fetched",
                ))
            }
        };

        // One page at a time: release the previous page before fetching.
        self.current = None;

        debug!(url = %target, "fetching collection page");
        match self.transport.fetch(&target).await {
            Ok(fetched) => {
                self.state = PagerState::Positioned;
                self.current = Some(Page::new(fetched.body, fetched.headers, fetched.url));
                Ok(self.current.as_ref())
            }
            Err(e) => {
                self.state = PagerState::Failed;
                Err(e)
            }
        }
    }

    /// Advance to the next page, treating exhaustion as an error.
    ///
    /// Returns [`Error::PageNotAvailable`] when asked to advance past the
    /// last page.
    pub async fn advance(&mut self) -> Result<&Page> {
        if self.try_advance().await?.is_none() {
            return Err(Error::page_not_available(
                "advanced past the last page of the collection",
            ));
        }
        self.current
            .as_ref()
            .ok_or_else(|| Error::page_not_available("pager lost its current page"))
    }

    /// Invoke `handler` once per page, in page order.
    ///
    /// `Ok(false)` from the handler stops cleanly with no further fetch;
    /// an error from the handler or the transport propagates immediately.
    /// Pages already passed to the handler remain the caller's state even
    /// when the call as a whole reports failure.
    pub async fn each_page<F>(&mut self, mut handler: F) -> Result<()>
    where
        F: FnMut(&Page) -> Result<bool>,
    {
        while let Some(page) = self.try_advance().await? {
            if !handler(page)? {
                debug!("handler requested early stop");
                return Ok(());
            }
        }
        debug!("collection exhausted");
        Ok(())
    }

    /// Materialize the whole collection through `extract`, in page order.
    ///
    /// `extract` is the resource's extractor; per-page results are
    /// concatenated with no reordering and no deduplication.
    pub async fn all_pages<T, F>(&mut self, extract: F) -> Result<Vec<T>>
    where
        F: Fn(&Page) -> Result<Vec<T>>,
    {
        let mut all = Vec::new();
        self.each_page(|page| {
            all.extend(extract(page)?);
            Ok(true)
        })
        .await?;
        Ok(all)
    }
}

impl std::fmt::Debug for Pager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("initial_url", &self.initial_url)
            .field("strategy", &self.strategy)
            .field("state", &self.state)
            .field("has_current", &self.current.is_some())
            .finish_non_exhaustive()
    }
}
