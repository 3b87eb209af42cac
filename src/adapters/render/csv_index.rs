//! CSV index of the catalog. Uses the `csv` crate for quoting.

use crate::domain::PostRecord;

/// `id;title;category;dateISO;readTime`, one row per post, listing order.
pub fn posts_to_csv(posts: &[PostRecord]) -> Result<String, csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_writer(Vec::new());

    wtr.write_record(["id", "title", "category", "dateISO", "readTime"])?;
    for p in posts {
        let date = p.date_iso.format("%Y-%m-%d").to_string();
        wtr.write_record([
            p.id.as_str(),
            p.title.as_str(),
            p.category.as_str(),
            date.as_str(),
            p.read_time.as_str(),
        ])?;
    }

    wtr.flush()?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(std::io::Error::other(e.to_string())))?;
    String::from_utf8(bytes).map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::content::{PostBuilder, day};

    #[test]
    fn test_csv_quotes_delimiters() {
        let posts = vec![
            PostBuilder::new("a", "IFTA; explained", "IFTA", day(2026, 2, 16)).build(),
            PostBuilder::new("b", "Plain", "Guides", day(2026, 3, 1)).build(),
        ];
        let csv = posts_to_csv(&posts).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "id;title;category;dateISO;readTime");
        assert_eq!(lines[1], "a;\"IFTA; explained\";IFTA;2026-02-16;1 min read");
        assert_eq!(lines[2], "b;Plain;Guides;2026-03-01;1 min read");
    }

    #[test]
    fn test_empty_catalog_has_header_only() {
        let csv = posts_to_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
