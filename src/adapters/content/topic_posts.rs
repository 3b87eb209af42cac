//! Evergreen Form 2290 how-to articles.

use super::{PostBuilder, day};
use crate::domain::PostRecord;
use crate::ports::PostGenerator;

/// Subject-topic guides (deadlines, Schedule 1, amendments, corrections).
pub struct TopicPosts;

impl PostGenerator for TopicPosts {
    fn category(&self) -> &'static str {
        "topic"
    }

    fn generate(&self) -> Vec<PostRecord> {
        vec![
            PostBuilder::new(
                "form-2290-due-date",
                "Form 2290 Due Dates for the 2026-2027 Tax Period",
                "Filing Guides",
                day(2026, 6, 1),
            )
            .excerpt("The annual HVUT deadline is August 31, but first-use month changes everything. Here is the full calendar.")
            .keywords(["Form 2290 due date", "HVUT deadline", "August 31"])
            .section(
                "annual-deadline",
                "The Annual Deadline",
                ["For vehicles on the road in July, Form 2290 is due August 31. If that falls on a weekend or holiday, the deadline moves to the next business day."],
            )
            .section(
                "first-use-month",
                "First-Use Month Rule",
                [
                    "A vehicle placed in service after July is due by the last day of the month following the month of first use.",
                    "The tax for such a vehicle is prorated by the number of months remaining in the period.",
                ],
            )
            .related(["form-2290-late-filing-penalties", "what-is-stamped-schedule-1"])
            .build(),
            PostBuilder::new(
                "what-is-stamped-schedule-1",
                "What Is a Stamped Schedule 1 and Why You Need It",
                "Filing Guides",
                day(2026, 3, 10),
            )
            .excerpt("Schedule 1 is the IRS receipt for your heavy vehicle tax. DMVs and border crossings ask for it.")
            .keywords(["Schedule 1", "stamped Schedule 1", "proof of HVUT payment"])
            .section(
                "what-it-is",
                "What It Is",
                ["Schedule 1 lists each vehicle by VIN. Once the IRS accepts your return, it carries an e-file watermark that serves as proof of payment."],
            )
            .section(
                "where-you-need-it",
                "Where You Need It",
                ["State registration offices require it to register or renew a heavy vehicle, and it may be requested at ports of entry."],
            )
            .related(["form-2290-due-date", "form-2290-vin-correction"])
            .build(),
            PostBuilder::new(
                "how-to-amend-form-2290",
                "How to Amend Form 2290: Weight Increases and Mileage Overruns",
                "Filing Guides",
                day(2026, 3, 24),
            )
            .excerpt("Crossed the suspended mileage limit or moved into a heavier weight category? File an amendment.")
            .keywords(["amend Form 2290", "Form 2290 amendment", "taxable gross weight increase"])
            .section(
                "when-to-amend",
                "When to Amend",
                [
                    "Amend when a vehicle's taxable gross weight increases into a higher category during the period.",
                    "Amend when a suspended vehicle exceeds 5,000 miles, or 7,500 miles for agricultural vehicles.",
                ],
            )
            .section(
                "deadline",
                "Amendment Deadline",
                ["The amended return is due by the last day of the month following the month the change occurred."],
            )
            .related(["suspended-vehicles-form-2290", "hvut-tax-rates-by-weight"])
            .build(),
            PostBuilder::new(
                "form-2290-vin-correction",
                "Fixing a Wrong VIN on Form 2290",
                "Filing Guides",
                day(2026, 4, 7),
            )
            .excerpt("A single mistyped character can get your registration rejected. VIN corrections are free to file.")
            .keywords(["VIN correction", "Form 2290 VIN error"])
            .section(
                "how-to-correct",
                "How to Correct It",
                ["File a VIN correction return that references the original filing. There is no additional tax, and a corrected Schedule 1 is issued."],
            )
            .related(["what-is-stamped-schedule-1"])
            .build(),
            PostBuilder::new(
                "suspended-vehicles-form-2290",
                "Suspended Vehicles: Filing Form 2290 When You Owe No Tax",
                "Filing Guides",
                day(2026, 4, 21),
            )
            .excerpt("Low-mileage vehicles still need a Form 2290 on file. Here is how the suspension works.")
            .keywords(["suspended vehicle", "Category W", "5,000 miles"])
            .section(
                "mileage-limits",
                "Mileage Limits",
                ["A vehicle expected to travel 5,000 miles or less on public highways (7,500 for agricultural vehicles) is suspended from the tax."],
            )
            .section(
                "still-file",
                "You Still File",
                ["Report suspended vehicles on Form 2290 so you receive a Schedule 1 for registration."],
            )
            .related(["how-to-amend-form-2290"])
            .build(),
            PostBuilder::new(
                "hvut-tax-rates-by-weight",
                "HVUT Tax Rates by Weight Category",
                "Filing Guides",
                day(2026, 5, 5),
            )
            .excerpt("From $100 at 55,000 pounds to the $550 cap above 75,000 pounds: how the HVUT is calculated.")
            .keywords(["HVUT rates", "Form 2290 tax table", "taxable gross weight"])
            .section(
                "rate-table",
                "Rate Table",
                [
                    "Vehicles at 55,000 pounds owe $100, plus $22 for each additional 1,000 pounds.",
                    "Vehicles over 75,000 pounds owe the maximum of $550 for a full period.",
                ],
            )
            .related(["form-2290-logging-trucks", "how-to-amend-form-2290"])
            .build(),
        ]
    }
}
