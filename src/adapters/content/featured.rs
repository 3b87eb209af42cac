//! Hand-written posts appended after the generated groups.

use super::{PostBuilder, day};
use crate::domain::PostRecord;

pub fn featured_posts() -> Vec<PostRecord> {
    vec![
        PostBuilder::new(
            "best-form-2290-e-file-providers",
            "Comparing Form 2290 E-File Providers",
            "Comparisons",
            day(2026, 5, 19),
        )
        .excerpt("Price, speed to Schedule 1, free VIN corrections and support hours: what to compare before you file.")
        .keywords(["Form 2290 e-file providers", "IRS authorized e-file provider", "HVUT filing service"])
        .section(
            "what-to-compare",
            "What to Compare",
            [
                "Only IRS-authorized e-file providers can transmit Form 2290. Confirm the provider is on the IRS list first.",
                "Compare the per-return fee, whether VIN corrections and amendments are free, and how quickly Schedule 1 is returned.",
            ],
        )
        .section(
            "fleet-features",
            "Features for Fleets",
            ["Fleets filing for 25 or more vehicles must e-file. Bulk upload and saved vehicle lists matter more than headline price."],
        )
        .related(["what-is-stamped-schedule-1", "form-2290-vin-correction"])
        .build(),
        PostBuilder::new(
            "form-2290-late-filing-penalties",
            "Form 2290 Late Filing Penalties and How to Avoid Them",
            "Compliance",
            day(2026, 6, 15),
        )
        .excerpt("Miss the deadline and the IRS adds 4.5% of the tax per month. Here is how penalties stack up.")
        .keywords(["Form 2290 penalty", "late HVUT filing", "IRS penalty abatement"])
        .section(
            "penalties",
            "Penalties",
            [
                "Filing late costs 4.5% of the total tax due per month, for up to five months.",
                "Paying late adds 0.5% per month, plus interest on the unpaid balance.",
            ],
        )
        .section(
            "reasonable-cause",
            "Reasonable Cause",
            ["Penalties can be waived if you show reasonable cause. Attach an explanation when you file the late return."],
        )
        .related(["form-2290-due-date"])
        .build(),
    ]
}
