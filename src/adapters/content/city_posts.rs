//! Local landing posts for freight hubs.

use super::state_posts::state_post_id;
use super::{PostBuilder, day};
use crate::domain::PostRecord;
use crate::ports::PostGenerator;

/// (city, slug, state slug, freight note)
const CITIES: &[(&str, &str, &str, &str)] = &[
    ("Houston", "houston", "texas", "port drayage and petrochemical freight"),
    ("Dallas", "dallas", "texas", "one of the busiest inland distribution hubs in the country"),
    ("Los Angeles", "los-angeles", "california", "container traffic out of the San Pedro Bay ports"),
    ("Chicago", "chicago", "illinois", "the largest rail-to-truck interchange in North America"),
    ("Atlanta", "atlanta", "georgia", "Southeast distribution along the I-75 and I-85 corridors"),
];

/// City-level Form 2290 posts.
pub struct CityPosts;

impl PostGenerator for CityPosts {
    fn category(&self) -> &'static str {
        "city"
    }

    fn generate(&self) -> Vec<PostRecord> {
        CITIES
            .iter()
            .enumerate()
            .map(|(i, &(city, slug, state, note))| {
                PostBuilder::new(
                    format!("form-2290-filing-{}", slug),
                    format!("Form 2290 E-Filing for {} Truckers", city),
                    "City Guides",
                    day(2026, 2, 2 + i as u32),
                )
                .excerpt(format!(
                    "Running heavy trucks out of {}? File your HVUT online and get Schedule 1 back the same day.",
                    city
                ))
                .keywords([
                    format!("Form 2290 {}", city),
                    format!("{} trucking tax", city),
                ])
                .section(
                    "local-freight",
                    format!("Trucking in {}", city),
                    [format!(
                        "{} carriers handle {}. Nearly every tractor in that work is over 55,000 pounds and owes HVUT.",
                        city, note
                    )],
                )
                .section(
                    "file-online",
                    "File Online Instead of Waiting in Line",
                    [
                        "E-filing skips the IRS office visit entirely. Once the IRS accepts the return, the stamped Schedule 1 is ready to download.",
                    ],
                )
                .related([state_post_id(state), "form-2290-due-date".to_string()])
                .build()
            })
            .collect()
    }
}
