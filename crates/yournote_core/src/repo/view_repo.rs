//! View repository contract and in-memory implementation.

use crate::model::view::ViewCollection;
use crate::repo::RepoResult;

/// View store consumed by the application layer.
pub trait ViewRepository {
    fn fetch_all(&self) -> RepoResult<ViewCollection>;
    /// Stores the named views; the reserved view is never part of the payload.
    fn persist(&mut self, views: &ViewCollection) -> RepoResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryViewRepository {
    views: ViewCollection,
    persist_count: usize,
}

impl MemoryViewRepository {
    pub fn new(views: ViewCollection) -> Self {
        Self {
            views,
            persist_count: 0,
        }
    }

    /// Number of `persist` calls served so far.
    pub fn persist_count(&self) -> usize {
        self.persist_count
    }
}

impl ViewRepository for MemoryViewRepository {
    fn fetch_all(&self) -> RepoResult<ViewCollection> {
        Ok(self.views.clone())
    }

    fn persist(&mut self, views: &ViewCollection) -> RepoResult<()> {
        self.views = views.clone();
        self.persist_count += 1;
        Ok(())
    }
}
