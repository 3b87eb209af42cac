//! Markdown template for a single post.

use crate::domain::{PostCatalog, PostRecord};

/// Render `post` as Markdown. Related posts are resolved through `catalog`
/// and linked under `/blog/{id}`.
pub fn post_to_markdown(post: &PostRecord, catalog: &PostCatalog) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", post.title));
    md.push_str(&format!(
        "*{} | {} | {}*\n\n",
        post.category, post.date, post.read_time
    ));
    if !post.excerpt.is_empty() {
        md.push_str(&format!("> {}\n\n", post.excerpt));
    }

    if !post.table_of_contents.is_empty() {
        md.push_str("## Contents\n\n");
        for entry in &post.table_of_contents {
            md.push_str(&format!("- [{}](#{})\n", entry.title, entry.id));
        }
        md.push('\n');
    }

    for section in &post.content.sections {
        md.push_str(&format!("<a id=\"{}\"></a>\n", section.id));
        md.push_str(&format!("## {}\n\n", section.heading));
        for para in &section.paragraphs {
            md.push_str(para);
            md.push_str("\n\n");
        }
    }

    let related = catalog.related_to(&post.id);
    if !related.is_empty() {
        md.push_str("## Related Articles\n\n");
        for r in related {
            md.push_str(&format!("- [{}](/blog/{})\n", r.title, r.id));
        }
        md.push('\n');
    }

    if !post.keywords.is_empty() {
        md.push_str("---\n");
        md.push_str(&format!("*Keywords: {}*\n", post.keywords.join(", ")));
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::content::{PostBuilder, day};

    #[test]
    fn test_markdown_layout() {
        let target = PostBuilder::new("b", "Bee Post", "Guides", day(2026, 1, 2))
            .excerpt("bee")
            .keywords(["b"])
            .section("one", "One", ["x"])
            .build();
        let post = PostBuilder::new("a", "Ay Post", "Guides", day(2026, 1, 1))
            .excerpt("Short summary.")
            .keywords(["HVUT", "Form 2290"])
            .section("intro", "Introduction", ["First paragraph.", "Second."])
            .related(["b"])
            .build();
        let mut catalog = PostCatalog::new();
        catalog.extend_from("test", vec![post.clone(), target]);

        let md = post_to_markdown(&post, &catalog);
        assert!(md.starts_with("# Ay Post\n\n*Guides | January 1, 2026 | 1 min read*"));
        assert!(md.contains("- [Introduction](#intro)"));
        assert!(md.contains("## Introduction\n\nFirst paragraph.\n\nSecond.\n\n"));
        assert!(md.contains("- [Bee Post](/blog/b)"));
        assert!(md.ends_with("*Keywords: HVUT, Form 2290*\n"));
    }
}
