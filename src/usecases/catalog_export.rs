//! Export the built catalog for static hosting.
//!
//! Writes `posts.json`, `index.csv` and `posts/{id}.md` under the output dir.

use crate::adapters::persistence::write_atomic;
use crate::adapters::render::{post_to_markdown, posts_to_csv};
use crate::domain::{DomainError, PostCatalog};
use std::path::PathBuf;
use tracing::info;

/// Paths produced by one export run.
#[derive(Debug, Default)]
pub struct ExportSummary {
    pub json: PathBuf,
    pub index: PathBuf,
    pub pages: Vec<PathBuf>,
}

pub struct CatalogExporter {
    out_dir: PathBuf,
}

impl CatalogExporter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub async fn export(&self, catalog: &PostCatalog) -> Result<ExportSummary, DomainError> {
        let json = serde_json::to_vec_pretty(catalog.posts())
            .map_err(|e| DomainError::Export(format!("serialize posts: {}", e)))?;
        let json_path = self.out_dir.join("posts.json");
        write_atomic(&json_path, &json).await?;

        let csv = posts_to_csv(catalog.posts())
            .map_err(|e| DomainError::Export(format!("build index: {}", e)))?;
        let index_path = self.out_dir.join("index.csv");
        write_atomic(&index_path, csv.as_bytes()).await?;

        let pages_dir = self.out_dir.join("posts");
        let mut pages = Vec::with_capacity(catalog.len());
        for post in catalog.posts() {
            let path = pages_dir.join(format!("{}.md", post.id));
            write_atomic(&path, post_to_markdown(post, catalog).as_bytes()).await?;
            pages.push(path);
        }

        info!(
            dir = %self.out_dir.display(),
            posts = catalog.len(),
            "catalog exported"
        );

        Ok(ExportSummary {
            json: json_path,
            index: index_path,
            pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::content::{default_generators, featured_posts};
    use crate::domain::PostRecord;
    use crate::usecases::ContentAggregator;

    #[tokio::test]
    async fn test_export_writes_all_files() {
        let catalog = ContentAggregator::new(default_generators(), featured_posts())
            .build()
            .unwrap();
        let dir = std::env::temp_dir().join(format!("hvut-export-{}", std::process::id()));
        let summary = CatalogExporter::new(&dir).export(&catalog).await.unwrap();

        assert_eq!(summary.pages.len(), catalog.len());
        let raw = tokio::fs::read_to_string(&summary.json).await.unwrap();
        let back: Vec<PostRecord> = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.as_slice(), catalog.posts());

        let index = tokio::fs::read_to_string(&summary.index).await.unwrap();
        assert_eq!(index.lines().count(), catalog.len() + 1);

        let first = tokio::fs::read_to_string(&summary.pages[0]).await.unwrap();
        assert!(first.starts_with(&format!("# {}", catalog.posts()[0].title)));
        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
