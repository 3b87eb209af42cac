//! One filing guide per high-volume trucking state.

use super::{PostBuilder, day};
use crate::domain::PostRecord;
use crate::ports::PostGenerator;

struct StateInfo {
    name: &'static str,
    slug: &'static str,
    agency: &'static str,
    corridor: &'static str,
}

const STATES: &[StateInfo] = &[
    StateInfo {
        name: "Texas",
        slug: "texas",
        agency: "Texas Department of Motor Vehicles",
        corridor: "I-35 and I-10",
    },
    StateInfo {
        name: "California",
        slug: "california",
        agency: "California DMV",
        corridor: "I-5 and SR-99",
    },
    StateInfo {
        name: "Florida",
        slug: "florida",
        agency: "Florida Department of Highway Safety and Motor Vehicles",
        corridor: "I-95 and I-75",
    },
    StateInfo {
        name: "Illinois",
        slug: "illinois",
        agency: "Illinois Secretary of State",
        corridor: "I-80 and I-55",
    },
    StateInfo {
        name: "Georgia",
        slug: "georgia",
        agency: "Georgia Department of Revenue",
        corridor: "I-75 and I-85",
    },
    StateInfo {
        name: "Ohio",
        slug: "ohio",
        agency: "Ohio Bureau of Motor Vehicles",
        corridor: "I-70 and I-71",
    },
];

pub fn state_post_id(slug: &str) -> String {
    format!("form-2290-{}", slug)
}

/// State-by-state HVUT filing guides.
pub struct StatePosts;

impl PostGenerator for StatePosts {
    fn category(&self) -> &'static str {
        "state"
    }

    fn generate(&self) -> Vec<PostRecord> {
        STATES
            .iter()
            .enumerate()
            .map(|(i, s)| {
                PostBuilder::new(
                    state_post_id(s.slug),
                    format!("How to File Form 2290 in {}: HVUT Guide for {} Truckers", s.name, s.name),
                    "State Guides",
                    day(2026, 1, 6 + i as u32),
                )
                .excerpt(format!(
                    "Registering a heavy truck in {}? Here is what the {} expects to see from your Form 2290 filing.",
                    s.name, s.agency
                ))
                .keywords([
                    format!("Form 2290 {}", s.name),
                    format!("HVUT {}", s.name),
                    format!("{} truck registration", s.name),
                ])
                .section(
                    "who-must-file",
                    "Who Must File",
                    [
                        format!(
                            "Any highway motor vehicle registered in {} with a taxable gross weight of 55,000 pounds or more owes the federal Heavy Vehicle Use Tax.",
                            s.name
                        ),
                        format!(
                            "That covers most tractors running the {} corridors, whether you are an owner-operator or a fleet.",
                            s.corridor
                        ),
                    ],
                )
                .section(
                    "registration",
                    "Proof of Payment for Registration",
                    [format!(
                        "The {} asks for a stamped Schedule 1 when you register or renew a heavy vehicle. E-filing returns the stamped copy within minutes of IRS acceptance.",
                        s.agency
                    )],
                )
                .section(
                    "deadlines",
                    "Deadlines",
                    [
                        "The HVUT tax period runs from July 1 to June 30. For vehicles in use in July, the return is due August 31.",
                        "A vehicle first used later in the year is due by the last day of the month after its first-use month.",
                    ],
                )
                .related(["form-2290-due-date", "what-is-stamped-schedule-1"])
                .build()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_slugged() {
        let posts = StatePosts.generate();
        assert_eq!(posts.len(), STATES.len());
        assert_eq!(posts[0].id, "form-2290-texas");
        assert!(posts.iter().all(|p| p.category == "State Guides"));
    }
}
