use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text shown wherever a metric value is missing.
pub const MISSING_VALUE: &str = "N/A";

/// One of the thirteen county health metrics.
///
/// The order of [`Metric::ALL`] is the registry order; it is also the order
/// of the metric selector and of the metric columns in the CSV written by
/// the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    LifeExpectancy,
    PrematureDeath,
    AdultObesity,
    AdultSmoking,
    PhysicalInactivity,
    Diabetes,
    Unemployment,
    PoorHealth,
    ExcessiveDrinking,
    HsGraduation,
    MedianIncome,
    Uninsured,
    PrimaryCareRate,
}

/// Sequential color scheme used to shade a metric, light to dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorScheme {
    Greens,
    Reds,
    Oranges,
    Purples,
    OrRd,
    Blues,
}

/// How a metric's values are rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueFormat {
    /// One decimal, suffixed with " years"
    Years,
    /// Rounded to an integer, no suffix
    Rate,
    /// One decimal, suffixed with "%"
    Percent,
    /// Whole dollars with thousands grouping, prefixed with "$"
    Currency,
    /// One decimal, suffixed with " per 100k residents"
    PerCapita,
}

/// Static display configuration for one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricConfig {
    pub metric: Metric,
    pub name: &'static str,
    pub unit: &'static str,
    pub format: ValueFormat,
    /// Hand-tuned `[min, max]` mapped onto the color scheme.
    pub domain: (f64, f64),
    pub scheme: ColorScheme,
}

static REGISTRY: [MetricConfig; 13] = [
    MetricConfig {
        metric: Metric::LifeExpectancy,
        name: "Life Expectancy",
        unit: "years",
        format: ValueFormat::Years,
        domain: (70.0, 85.0),
        scheme: ColorScheme::Greens,
    },
    MetricConfig {
        metric: Metric::PrematureDeath,
        name: "Premature Death Rate",
        unit: "per 100,000",
        format: ValueFormat::Rate,
        domain: (5000.0, 15000.0),
        scheme: ColorScheme::Reds,
    },
    MetricConfig {
        metric: Metric::AdultObesity,
        name: "Adult Obesity",
        unit: "%",
        format: ValueFormat::Percent,
        domain: (25.0, 40.0),
        scheme: ColorScheme::Oranges,
    },
    MetricConfig {
        metric: Metric::AdultSmoking,
        name: "Adult Smoking",
        unit: "%",
        format: ValueFormat::Percent,
        domain: (10.0, 30.0),
        scheme: ColorScheme::Reds,
    },
    MetricConfig {
        metric: Metric::PhysicalInactivity,
        name: "Physical Inactivity",
        unit: "%",
        format: ValueFormat::Percent,
        domain: (15.0, 35.0),
        scheme: ColorScheme::Purples,
    },
    MetricConfig {
        metric: Metric::Diabetes,
        name: "Diabetes Prevalence",
        unit: "%",
        format: ValueFormat::Percent,
        domain: (8.0, 16.0),
        scheme: ColorScheme::OrRd,
    },
    MetricConfig {
        metric: Metric::Unemployment,
        name: "Unemployment Rate",
        unit: "%",
        format: ValueFormat::Percent,
        domain: (2.0, 12.0),
        scheme: ColorScheme::Reds,
    },
    MetricConfig {
        metric: Metric::PoorHealth,
        name: "Poor or Fair Health",
        unit: "%",
        format: ValueFormat::Percent,
        domain: (10.0, 30.0),
        scheme: ColorScheme::Oranges,
    },
    MetricConfig {
        metric: Metric::ExcessiveDrinking,
        name: "Excessive Drinking",
        unit: "%",
        format: ValueFormat::Percent,
        domain: (10.0, 25.0),
        scheme: ColorScheme::Purples,
    },
    MetricConfig {
        metric: Metric::HsGraduation,
        name: "High School Graduation",
        unit: "%",
        format: ValueFormat::Percent,
        domain: (70.0, 95.0),
        scheme: ColorScheme::Greens,
    },
    MetricConfig {
        metric: Metric::MedianIncome,
        name: "Median Household Income",
        unit: "$",
        format: ValueFormat::Currency,
        domain: (30000.0, 90000.0),
        scheme: ColorScheme::Blues,
    },
    MetricConfig {
        metric: Metric::Uninsured,
        name: "Uninsured Rate",
        unit: "%",
        format: ValueFormat::Percent,
        domain: (5.0, 25.0),
        scheme: ColorScheme::Reds,
    },
    MetricConfig {
        metric: Metric::PrimaryCareRate,
        name: "Primary Care Physicians",
        unit: "per 100,000 population",
        format: ValueFormat::PerCapita,
        domain: (20.0, 100.0),
        scheme: ColorScheme::Greens,
    },
];

impl Metric {
    pub const ALL: [Metric; 13] = [
        Metric::LifeExpectancy,
        Metric::PrematureDeath,
        Metric::AdultObesity,
        Metric::AdultSmoking,
        Metric::PhysicalInactivity,
        Metric::Diabetes,
        Metric::Unemployment,
        Metric::PoorHealth,
        Metric::ExcessiveDrinking,
        Metric::HsGraduation,
        Metric::MedianIncome,
        Metric::Uninsured,
        Metric::PrimaryCareRate,
    ];

    /// Position in [`Metric::ALL`]; also the registry slot.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column name in the health CSV and selector value in the page.
    pub fn key(self) -> &'static str {
        match self {
            Metric::LifeExpectancy => "life_expectancy",
            Metric::PrematureDeath => "premature_death",
            Metric::AdultObesity => "adult_obesity",
            Metric::AdultSmoking => "adult_smoking",
            Metric::PhysicalInactivity => "physical_inactivity",
            Metric::Diabetes => "diabetes",
            Metric::Unemployment => "unemployment",
            Metric::PoorHealth => "poor_health",
            Metric::ExcessiveDrinking => "excessive_drinking",
            Metric::HsGraduation => "hs_graduation",
            Metric::MedianIncome => "median_income",
            Metric::Uninsured => "uninsured",
            Metric::PrimaryCareRate => "primary_care_rate",
        }
    }

    pub fn from_key(key: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.key() == key)
    }

    pub fn config(self) -> &'static MetricConfig {
        &REGISTRY[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.config().name
    }

    pub fn domain(self) -> (f64, f64) {
        self.config().domain
    }

    pub fn scheme(self) -> ColorScheme {
        self.config().scheme
    }

    /// Render a value with this metric's formatter; `None` becomes "N/A".
    pub fn format(self, value: Option<f64>) -> String {
        match value {
            Some(v) => self.config().format.apply(v),
            None => MISSING_VALUE.to_string(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::from_key(s.trim()).ok_or_else(|| {
            let known: Vec<&str> = Metric::ALL.iter().map(|m| m.key()).collect();
            anyhow::anyhow!("unknown metric '{}' (expected one of: {})", s, known.join(", "))
        })
    }
}

/// Round to one decimal with ties away from zero. `{:.1}` alone breaks
/// exact ties such as 78.25 toward even.
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl ValueFormat {
    pub fn apply(self, value: f64) -> String {
        match self {
            ValueFormat::Years => format!("{:.1} years", round_tenths(value)),
            ValueFormat::Rate => format!("{}", value.round() as i64),
            ValueFormat::Percent => format!("{:.1}%", round_tenths(value)),
            ValueFormat::Currency => format!("${}", group_thousands(value.round() as i64)),
            ValueFormat::PerCapita => format!("{:.1} per 100k residents", round_tenths(value)),
        }
    }
}

/// Format an integer with `,` between groups of three digits.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
