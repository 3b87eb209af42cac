//! Ordered, validated collection of blog posts.

use super::entities::PostRecord;
use super::errors::DomainError;
use std::collections::HashMap;

/// Posts in default listing order, tagged with the group that produced them.
#[derive(Debug, Clone, Default)]
pub struct PostCatalog {
    posts: Vec<PostRecord>,
    sources: Vec<&'static str>,
}

impl PostCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group's output, keeping its order.
    pub fn extend_from(&mut self, source: &'static str, posts: Vec<PostRecord>) {
        self.sources.extend(std::iter::repeat_n(source, posts.len()));
        self.posts.extend(posts);
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn posts(&self) -> &[PostRecord] {
        &self.posts
    }

    /// Which group produced the post at `index`.
    pub fn source_of(&self, index: usize) -> Option<&'static str> {
        self.sources.get(index).copied()
    }

    /// Reject duplicate ids and related ids that point nowhere.
    ///
    /// Lookups assume a validated catalog; call this once at startup.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(self.posts.len());
        for (i, post) in self.posts.iter().enumerate() {
            if let Some(&first) = seen.get(post.id.as_str()) {
                return Err(DomainError::DuplicatePostId {
                    id: post.id.clone(),
                    first_category: self.source_of(first).unwrap_or_default().to_string(),
                    second_category: self.source_of(i).unwrap_or_default().to_string(),
                });
            }
            seen.insert(post.id.as_str(), i);
        }

        for post in &self.posts {
            if let Some(missing) = post
                .related_posts
                .iter()
                .find(|r| !seen.contains_key(r.as_str()))
            {
                return Err(DomainError::DanglingRelatedPost {
                    post: post.id.clone(),
                    related: missing.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn find(&self, id: &str) -> Option<&PostRecord> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Related posts of `id`, resolved in declared order. Unknown ids are skipped.
    pub fn related_to(&self, id: &str) -> Vec<&PostRecord> {
        self.find(id)
            .map(|post| {
                post.related_posts
                    .iter()
                    .filter_map(|r| self.find(r))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn in_category(&self, category: &str) -> Vec<&PostRecord> {
        self.posts
            .iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Posts carrying `keyword` (case-insensitive, whole keyword).
    pub fn with_keyword(&self, keyword: &str) -> Vec<&PostRecord> {
        let needle = keyword.trim().to_lowercase();
        self.posts
            .iter()
            .filter(|p| p.keywords.iter().any(|k| k.to_lowercase() == needle))
            .collect()
    }

    /// Newest `n` posts by `date_iso`; ties keep listing order.
    pub fn latest(&self, n: usize) -> Vec<&PostRecord> {
        let mut sorted: Vec<&PostRecord> = self.posts.iter().collect();
        sorted.sort_by(|a, b| b.date_iso.cmp(&a.date_iso));
        sorted.truncate(n);
        sorted
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for p in &self.posts {
            if !out.contains(&p.category.as_str()) {
                out.push(p.category.as_str());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostBody;
    use chrono::NaiveDate;

    fn post(id: &str, category: &str, day: u32, related: &[&str]) -> PostRecord {
        PostRecord {
            id: id.to_string(),
            title: id.to_uppercase(),
            excerpt: String::new(),
            category: category.to_string(),
            read_time: "4 min read".into(),
            date: String::new(),
            date_iso: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            keywords: vec!["Form 2290".into(), category.to_string()],
            table_of_contents: vec![],
            related_posts: related.iter().map(|s| s.to_string()).collect(),
            content: PostBody::default(),
        }
    }

    fn catalog() -> PostCatalog {
        let mut c = PostCatalog::new();
        c.extend_from("state", vec![post("a", "State Guides", 3, &["b"])]);
        c.extend_from("topic", vec![post("b", "Deadlines", 9, &[]), post("c", "Deadlines", 5, &["a", "b"])]);
        c
    }

    #[test]
    fn test_validate_ok() {
        assert!(catalog().validate().is_ok());
    }

    #[test]
    fn test_duplicate_id_names_both_groups() {
        let mut c = catalog();
        c.extend_from("tail", vec![post("b", "Deadlines", 1, &[])]);
        match c.validate() {
            Err(DomainError::DuplicatePostId {
                id,
                first_category,
                second_category,
            }) => {
                assert_eq!(id, "b");
                assert_eq!(first_category, "topic");
                assert_eq!(second_category, "tail");
            }
            other => panic!("expected duplicate id, got {other:?}"),
        }
    }

    #[test]
    fn test_dangling_related_rejected() {
        let mut c = catalog();
        c.extend_from("tail", vec![post("d", "News", 1, &["nope"])]);
        assert!(matches!(
            c.validate(),
            Err(DomainError::DanglingRelatedPost { post: ref p, related: ref r }) if p == "d" && r == "nope"
        ));
    }

    #[test]
    fn test_queries() {
        let c = catalog();
        let related: Vec<_> = c.related_to("c").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(related, vec!["a", "b"]);
        assert!(c.related_to("missing").is_empty());
        assert_eq!(c.in_category("deadlines").len(), 2);
        assert_eq!(c.with_keyword("form 2290").len(), 3);
        let latest: Vec<_> = c.latest(2).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(latest, vec!["b", "c"]);
        assert_eq!(c.categories(), vec!["State Guides", "Deadlines"]);
        assert_eq!(c.source_of(2), Some("topic"));
    }
}
