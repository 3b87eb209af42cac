//! Static blog content. Each submodule is one category generator.
//!
//! Content is plain structured text; presentation lives in `adapters::render`.

pub mod city_posts;
pub mod featured;
pub mod ifta_posts;
pub mod state_posts;
pub mod topic_posts;
pub mod vehicle_posts;

use crate::domain::{ContentSection, PostBody, PostRecord, TocEntry};
use crate::ports::PostGenerator;
use chrono::NaiveDate;
use std::sync::Arc;

pub use city_posts::CityPosts;
pub use featured::featured_posts;
pub use ifta_posts::IftaPosts;
pub use state_posts::StatePosts;
pub use topic_posts::TopicPosts;
pub use vehicle_posts::VehiclePosts;

const WORDS_PER_MINUTE: usize = 200;

/// Generators in catalog order: state, vehicle, city, topic, IFTA.
pub fn default_generators() -> Vec<Arc<dyn PostGenerator>> {
    let generators: [Arc<dyn PostGenerator>; 5] = [
        Arc::new(StatePosts),
        Arc::new(VehiclePosts),
        Arc::new(CityPosts),
        Arc::new(TopicPosts),
        Arc::new(IftaPosts),
    ];
    generators.into()
}

/// Calendar date for static content. Out-of-range input maps to `NaiveDate::MIN`,
/// which the content tests reject.
pub(crate) fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dom).unwrap_or(NaiveDate::MIN)
}

/// Fluent constructor for [`PostRecord`]. Table of contents, display date and
/// read time are derived in [`PostBuilder::build`].
pub struct PostBuilder {
    id: String,
    title: String,
    category: String,
    date_iso: NaiveDate,
    excerpt: String,
    keywords: Vec<String>,
    sections: Vec<ContentSection>,
    related: Vec<String>,
}

impl PostBuilder {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        date_iso: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            date_iso,
            excerpt: String::new(),
            keywords: Vec::new(),
            sections: Vec::new(),
            related: Vec::new(),
        }
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    pub fn section<I, S>(mut self, id: &str, heading: impl Into<String>, paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections.push(ContentSection {
            id: id.to_string(),
            heading: heading.into(),
            paragraphs: paragraphs.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn related<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> PostRecord {
        let words: usize = self
            .sections
            .iter()
            .flat_map(|s| s.paragraphs.iter())
            .map(|p| p.split_whitespace().count())
            .sum();
        let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);

        PostRecord {
            table_of_contents: self
                .sections
                .iter()
                .map(|s| TocEntry {
                    id: s.id.clone(),
                    title: s.heading.clone(),
                })
                .collect(),
            id: self.id,
            title: self.title,
            excerpt: self.excerpt,
            category: self.category,
            read_time: format!("{} min read", minutes),
            date: self.date_iso.format("%B %-d, %Y").to_string(),
            date_iso: self.date_iso,
            keywords: self.keywords,
            related_posts: self.related,
            content: PostBody {
                sections: self.sections,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::ContentAggregator;

    #[test]
    fn test_builder_derives_toc_date_and_read_time() {
        let long = "word ".repeat(450);
        let post = PostBuilder::new("p", "P", "Guides", day(2026, 1, 5))
            .section("intro", "Intro", [long.as_str()])
            .section("next", "Next Steps", ["short"])
            .build();
        assert_eq!(post.date, "January 5, 2026");
        assert_eq!(post.read_time, "3 min read");
        let toc: Vec<_> = post.table_of_contents.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(toc, vec!["intro", "next"]);
    }

    #[test]
    fn test_bad_date_maps_to_min() {
        assert_eq!(day(2026, 2, 30), NaiveDate::MIN);
    }

    #[test]
    fn test_shipped_catalog_is_valid() {
        let catalog = ContentAggregator::new(default_generators(), featured_posts())
            .build()
            .expect("static catalog must validate");
        let floor = day(2024, 1, 1);
        for post in catalog.posts() {
            assert!(post.date_iso >= floor, "{} has bad date", post.id);
            assert!(!post.excerpt.is_empty(), "{} has no excerpt", post.id);
            assert!(!post.keywords.is_empty(), "{} has no keywords", post.id);
            assert_eq!(
                post.table_of_contents.len(),
                post.content.sections.len(),
                "{} toc mismatch",
                post.id
            );
        }
    }

    #[test]
    fn test_shipped_catalog_group_order() {
        let gens = default_generators();
        let names: Vec<_> = gens.iter().map(|g| g.category()).collect();
        assert_eq!(names, vec!["state", "vehicle", "city", "topic", "ifta"]);

        let expected: usize =
            gens.iter().map(|g| g.generate().len()).sum::<usize>() + featured_posts().len();
        let catalog = ContentAggregator::new(gens, featured_posts()).aggregate();
        assert_eq!(catalog.len(), expected);
        assert_eq!(catalog.source_of(0), Some("state"));
        assert_eq!(catalog.source_of(catalog.len() - 1), Some("featured"));
    }
}
