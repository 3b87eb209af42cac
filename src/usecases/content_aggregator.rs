//! Assemble the blog catalog from category generators plus a literal tail.
//!
//! - Generators run once, in registration order
//! - No dedup and no sort; order is the default listing order
//! - `build` validates ids so downstream lookups are unambiguous

use crate::domain::{DomainError, PostCatalog, PostRecord};
use crate::ports::PostGenerator;
use std::sync::Arc;
use tracing::{debug, info};

/// Group name recorded for the literal tail posts.
pub const TAIL_SOURCE: &str = "featured";

pub struct ContentAggregator {
    generators: Vec<Arc<dyn PostGenerator>>,
    tail: Vec<PostRecord>,
}

impl ContentAggregator {
    pub fn new(generators: Vec<Arc<dyn PostGenerator>>, tail: Vec<PostRecord>) -> Self {
        Self { generators, tail }
    }

    /// Concatenate every generator's output, then the tail.
    pub fn aggregate(&self) -> PostCatalog {
        let mut catalog = PostCatalog::new();
        for g in &self.generators {
            let posts = g.generate();
            debug!(category = g.category(), count = posts.len(), "generated posts");
            catalog.extend_from(g.category(), posts);
        }
        catalog.extend_from(TAIL_SOURCE, self.tail.clone());
        catalog
    }

    /// Aggregate and reject duplicate or dangling ids.
    pub fn build(&self) -> Result<PostCatalog, DomainError> {
        let catalog = self.aggregate();
        catalog.validate()?;
        info!(
            posts = catalog.len(),
            groups = self.generators.len() + 1,
            "post catalog built"
        );
        Ok(catalog)
    }
}
