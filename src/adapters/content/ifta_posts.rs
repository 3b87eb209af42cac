//! IFTA articles. Fixed regulatory topic, often confused with HVUT.

use super::{PostBuilder, day};
use crate::domain::PostRecord;
use crate::ports::PostGenerator;

/// Quarterly IFTA deadlines: (quarter, months, due date text).
const QUARTERS: &[(&str, &str, &str)] = &[
    ("Q1", "January to March", "April 30"),
    ("Q2", "April to June", "July 31"),
    ("Q3", "July to September", "October 31"),
    ("Q4", "October to December", "January 31"),
];

pub struct IftaPosts;

impl PostGenerator for IftaPosts {
    fn category(&self) -> &'static str {
        "ifta"
    }

    fn generate(&self) -> Vec<PostRecord> {
        let schedule: Vec<String> = QUARTERS
            .iter()
            .map(|(q, months, due)| format!("{} ({}): due {}.", q, months, due))
            .collect();

        vec![
            PostBuilder::new("ifta-vs-hvut", "IFTA vs HVUT: Two Different Truck Taxes", "IFTA", day(2026, 2, 16))
                .excerpt("IFTA is a quarterly fuel tax shared between states; HVUT is an annual federal use tax. You may owe both.")
                .keywords(["IFTA", "IFTA vs HVUT", "fuel tax"])
                .section(
                    "what-ifta-covers",
                    "What IFTA Covers",
                    ["IFTA redistributes fuel taxes among member jurisdictions based on the miles you drive in each one. It is filed quarterly with your base state."],
                )
                .section(
                    "what-hvut-covers",
                    "What HVUT Covers",
                    ["HVUT is a flat annual federal tax based on taxable gross weight, filed on Form 2290 with the IRS."],
                )
                .related(["ifta-quarterly-deadlines", "form-2290-due-date"])
                .build(),
            PostBuilder::new(
                "ifta-quarterly-deadlines",
                "IFTA Quarterly Filing Deadlines",
                "IFTA",
                day(2026, 3, 2),
            )
            .excerpt("Four returns a year, each due the last day of the month after the quarter closes.")
            .keywords(["IFTA deadlines", "IFTA quarterly return"])
            .section("schedule", "Filing Schedule", schedule)
            .section(
                "late-returns",
                "Late Returns",
                ["Jurisdictions charge a penalty and interest on late IFTA returns, and repeated late filing can lead to license revocation."],
            )
            .related(["ifta-vs-hvut"])
            .build(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_lists_every_quarter() {
        let posts = IftaPosts.generate();
        let schedule = &posts[1].content.sections[0];
        assert_eq!(schedule.paragraphs.len(), 4);
        assert!(schedule.paragraphs[3].contains("January 31"));
    }
}
