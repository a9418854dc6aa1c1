//! Hover info panel and insights panel.

use chr_core::metric::group_thousands;
use chr_core::{CountyYearRecord, Metric};
use chr_data::stats::summarize;

pub const NO_COUNTY_DATA: &str = "No data available";
pub const NO_INSIGHTS_DATA: &str = "No data available for the selected filters.";
pub const INFO_PROMPT: &str = "Hover over a county to see details";

/// Metrics always shown as secondary lines, unless already the active one.
const SECONDARY: [Metric; 2] = [Metric::LifeExpectancy, Metric::MedianIncome];

#[derive(Debug, Clone, PartialEq)]
pub struct InfoLine {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InfoPanel {
    /// Nothing hovered yet.
    Prompt,
    NoData,
    County {
        title: String,
        primary: InfoLine,
        year: i32,
        secondary: Vec<InfoLine>,
    },
}

impl InfoPanel {
    pub fn build(inspected: Option<&str>, record: Option<&CountyYearRecord>, metric: Metric, year: i32) -> Self {
        if inspected.is_none() {
            return InfoPanel::Prompt;
        }
        let Some(record) = record else {
            return InfoPanel::NoData;
        };
        let secondary = SECONDARY
            .iter()
            .filter(|&&m| m != metric)
            .filter_map(|&m| {
                record.value(m).map(|v| InfoLine {
                    label: m.name(),
                    value: m.format(Some(v)),
                })
            })
            .collect();
        InfoPanel::County {
            title: format!("{}, {}", record.county, record.state),
            primary: InfoLine {
                label: metric.name(),
                value: metric.format(record.value(metric)),
            },
            year,
            secondary,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Insights {
    NoData,
    Stats {
        metric_name: &'static str,
        year: i32,
        mean: String,
        median: String,
        min: String,
        max: String,
        count: String,
    },
}

impl Insights {
    /// Statistics of `metric` over `year_records`, nulls and NaN excluded.
    pub fn build(year_records: &[CountyYearRecord], metric: Metric, year: i32) -> Self {
        let Some(summary) = summarize(year_records.iter().filter_map(|r| r.value(metric))) else {
            return Insights::NoData;
        };
        Insights::Stats {
            metric_name: metric.name(),
            year,
            mean: metric.format(Some(summary.mean)),
            median: metric.format(Some(summary.median)),
            min: metric.format(Some(summary.min)),
            max: metric.format(Some(summary.max)),
            count: group_thousands(summary.count as i64),
        }
    }

    /// Plain-text rendering, as printed by the CLI.
    pub fn to_text(&self) -> String {
        match self {
            Insights::NoData => NO_INSIGHTS_DATA.to_string(),
            Insights::Stats {
                metric_name,
                year,
                mean,
                median,
                min,
                max,
                count,
            } => format!(
                "{metric_name} statistics for {year}:\n  Mean: {mean}\n  Median: {median}\n  Range: {min} to {max}\n  Counties with data: {count}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_row() -> CountyYearRecord {
        CountyYearRecord::new("00001", "Test", "Texas", 2024).with(Metric::LifeExpectancy, 78.4)
    }

    #[test]
    fn single_row_scenario_info_text() {
        let record = test_row();
        let panel = InfoPanel::build(Some("00001"), Some(&record), Metric::LifeExpectancy, 2024);
        match panel {
            InfoPanel::County {
                title,
                primary,
                year,
                secondary,
            } => {
                assert_eq!(title, "Test, Texas");
                assert_eq!(primary.label, "Life Expectancy");
                assert_eq!(primary.value, "78.4 years");
                assert_eq!(year, 2024);
                assert!(secondary.is_empty(), "absent secondary metrics are skipped");
            }
            other => panic!("unexpected panel {:?}", other),
        }
    }

    #[test]
    fn secondary_lines_skip_active_metric() {
        let record = test_row().with(Metric::MedianIncome, 52000.0);
        let InfoPanel::County { secondary, .. } =
            InfoPanel::build(Some("00001"), Some(&record), Metric::MedianIncome, 2024)
        else {
            panic!("expected county panel");
        };
        let labels: Vec<&str> = secondary.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Life Expectancy"]);

        let InfoPanel::County { secondary, .. } =
            InfoPanel::build(Some("00001"), Some(&record), Metric::Diabetes, 2024)
        else {
            panic!("expected county panel");
        };
        let values: Vec<&str> = secondary.iter().map(|l| l.value.as_str()).collect();
        assert_eq!(values, vec!["78.4 years", "$52,000"]);
    }

    #[test]
    fn active_metric_missing_shows_na() {
        let record = test_row();
        let InfoPanel::County { primary, .. } = InfoPanel::build(Some("00001"), Some(&record), Metric::Diabetes, 2024)
        else {
            panic!("expected county panel");
        };
        assert_eq!(primary.value, "N/A");
    }

    #[test]
    fn info_panel_prompt_and_no_data() {
        assert_eq!(InfoPanel::build(None, None, Metric::Diabetes, 2024), InfoPanel::Prompt);
        assert_eq!(InfoPanel::build(Some("01001"), None, Metric::Diabetes, 2024), InfoPanel::NoData);
    }

    #[test]
    fn insights_over_empty_set_show_no_data() {
        assert_eq!(Insights::build(&[], Metric::LifeExpectancy, 2024), Insights::NoData);
        let rows = vec![CountyYearRecord::new("01001", "A", "Alabama", 2024)];
        let insights = Insights::build(&rows, Metric::LifeExpectancy, 2024);
        assert_eq!(insights, Insights::NoData);
        assert_eq!(insights.to_text(), "No data available for the selected filters.");
    }

    #[test]
    fn insights_statistics() {
        let rows = vec![
            CountyYearRecord::new("01001", "A", "Alabama", 2024).with(Metric::AdultObesity, 30.0),
            CountyYearRecord::new("01003", "B", "Alabama", 2024).with(Metric::AdultObesity, 34.0),
            CountyYearRecord::new("01005", "C", "Alabama", 2024).with(Metric::AdultObesity, 41.0),
            CountyYearRecord::new("01007", "D", "Alabama", 2024),
        ];
        let Insights::Stats {
            mean,
            median,
            min,
            max,
            count,
            ..
        } = Insights::build(&rows, Metric::AdultObesity, 2024)
        else {
            panic!("expected statistics");
        };
        assert_eq!(mean, "35.0%");
        assert_eq!(median, "34.0%");
        assert_eq!(min, "30.0%");
        assert_eq!(max, "41.0%");
        assert_eq!(count, "3");
    }
}
