//! County detail modal.

use crate::state::SelectedCounty;
use chr_core::{CountyYearRecord, Metric};

pub const NO_YEAR_DATA: &str = "No data available for this year";

/// Modal rows in display order with their icons and labels.
pub const MODAL_ROWS: [(Metric, &str, &str); 13] = [
    (Metric::LifeExpectancy, "\u{1f49a}", "Life Expectancy"),
    (Metric::PrematureDeath, "\u{1f494}", "Premature Death Rate"),
    (Metric::AdultObesity, "\u{1f354}", "Adult Obesity"),
    (Metric::AdultSmoking, "\u{1f6ac}", "Adult Smoking"),
    (Metric::PhysicalInactivity, "\u{1f6cb}\u{fe0f}", "Physical Inactivity"),
    (Metric::Diabetes, "\u{1fa7a}", "Diabetes"),
    (Metric::ExcessiveDrinking, "\u{1f37a}", "Excessive Drinking"),
    (Metric::PoorHealth, "\u{1f912}", "Poor Health"),
    (Metric::MedianIncome, "\u{1f4b0}", "Median Household Income"),
    (Metric::HsGraduation, "\u{1f393}", "High School Graduation"),
    (Metric::Unemployment, "\u{1f4bc}", "Unemployment"),
    (Metric::PrimaryCareRate, "\u{1f468}\u{200d}\u{2695}\u{fe0f}", "Primary Care Physicians"),
    (Metric::Uninsured, "\u{1f3e5}", "Uninsured"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct ModalRow {
    pub metric: Metric,
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
    /// Drawn in the muted "N/A" style.
    pub missing: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub county: String,
    pub state: String,
    pub year: i32,
    /// False when the county has no record for `year`; every row is then N/A.
    pub has_record: bool,
    pub rows: Vec<ModalRow>,
}

impl ModalView {
    /// `record` is the selected county's record for its modal year, if any.
    pub fn build(selected: &SelectedCounty, record: Option<&CountyYearRecord>) -> Self {
        let rows = MODAL_ROWS
            .iter()
            .map(|&(metric, icon, label)| {
                let value = record.and_then(|r| r.value(metric));
                ModalRow {
                    metric,
                    icon,
                    label,
                    value: metric.format(value),
                    missing: value.is_none(),
                }
            })
            .collect();
        ModalView {
            county: selected.county.clone(),
            state: selected.state.clone(),
            year: selected.modal_year,
            has_record: record.is_some(),
            rows,
        }
    }
}
