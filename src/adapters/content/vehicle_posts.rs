//! Guides for vehicle types with their own HVUT rules.

use super::{PostBuilder, day};
use crate::domain::PostRecord;
use crate::ports::PostGenerator;

struct VehicleInfo {
    kind: &'static str,
    slug: &'static str,
    rule: &'static str,
    tip: &'static str,
}

const VEHICLES: &[VehicleInfo] = &[
    VehicleInfo {
        kind: "Logging Trucks",
        slug: "logging-trucks",
        rule: "Vehicles used exclusively to haul forest products qualify for the reduced logging rate, roughly 75% of the regular tax.",
        tip: "Check the logging box for each qualifying vehicle; the reduced rate is not applied automatically.",
    },
    VehicleInfo {
        kind: "Agricultural Vehicles",
        slug: "agricultural-vehicles",
        rule: "Farm vehicles driven 7,500 miles or less on public highways during the period are suspended and owe no tax.",
        tip: "You still file Form 2290 to claim the suspension, and you must track mileage in case the limit is exceeded.",
    },
    VehicleInfo {
        kind: "Dump Trucks",
        slug: "dump-trucks",
        rule: "Most tandem and tri-axle dump trucks cross the 55,000 pound threshold once loaded and owe the full HVUT.",
        tip: "Use the loaded gross weight, not the empty weight, when you pick the weight category.",
    },
    VehicleInfo {
        kind: "Tow Trucks",
        slug: "tow-trucks",
        rule: "Heavy wreckers are taxed on their own loaded weight; the weight of vehicles being towed is not included.",
        tip: "Light-duty tow trucks under 55,000 pounds are not required to file.",
    },
];

/// Vehicle-type HVUT guides.
pub struct VehiclePosts;

impl PostGenerator for VehiclePosts {
    fn category(&self) -> &'static str {
        "vehicle"
    }

    fn generate(&self) -> Vec<PostRecord> {
        VEHICLES
            .iter()
            .enumerate()
            .map(|(i, v)| {
                PostBuilder::new(
                    format!("form-2290-{}", v.slug),
                    format!("Form 2290 for {}: What Owners Need to Know", v.kind),
                    "Vehicle Guides",
                    day(2026, 1, 14 + i as u32),
                )
                .excerpt(format!(
                    "HVUT rules for {} differ from a standard tractor-trailer. Here is how to file correctly.",
                    v.kind.to_lowercase()
                ))
                .keywords([
                    format!("{} HVUT", v.kind),
                    format!("Form 2290 {}", v.kind.to_lowercase()),
                ])
                .section("how-the-tax-applies", "How the Tax Applies", [v.rule])
                .section("filing-tip", "Filing Tip", [v.tip])
                .related(["hvut-tax-rates-by-weight", "suspended-vehicles-form-2290"])
                .build()
            })
            .collect()
    }
}
