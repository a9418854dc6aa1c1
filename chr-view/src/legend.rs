//! Gradient legend for the active metric.

use chr_core::Metric;
use chr_data::color::SequentialScale;
use chr_data::ticks::ticks;

pub const GRADIENT_STOPS: usize = 11;
pub const AXIS_TICKS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// 0..=100
    pub offset_percent: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendTick {
    pub value: f64,
    /// Position along the bar, 0 at the domain start and 1 at its end.
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendModel {
    pub title: &'static str,
    pub stops: Vec<GradientStop>,
    pub ticks: Vec<LegendTick>,
}

impl LegendModel {
    pub fn build(metric: Metric) -> Self {
        let scale = SequentialScale::for_metric(metric);
        let (d0, d1) = metric.domain();
        let intervals = (GRADIENT_STOPS - 1) as f64;

        let stops = (0..GRADIENT_STOPS)
            .map(|i| {
                let t = i as f64 / intervals;
                GradientStop {
                    offset_percent: t * 100.0,
                    color: scale.fill(Some(d0 + t * (d1 - d0))),
                }
            })
            .collect();

        let ticks = ticks(d0, d1, AXIS_TICKS)
            .into_iter()
            .map(|value| LegendTick {
                value,
                position: (value - d0) / (d1 - d0),
                label: metric.format(Some(value)),
            })
            .collect();

        LegendModel {
            title: metric.name(),
            stops,
            ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chr_data::color::{ramp, Rgb};

    #[test]
    fn stops_span_the_scheme() {
        let legend = LegendModel::build(Metric::LifeExpectancy);
        assert_eq!(legend.stops.len(), 11);
        assert_eq!(legend.stops[0].offset_percent, 0.0);
        assert_eq!(legend.stops[10].offset_percent, 100.0);
        let scheme: &[Rgb; 9] = ramp(Metric::LifeExpectancy.scheme());
        assert_eq!(legend.stops[0].color, scheme[0].to_string());
        assert_eq!(legend.stops[10].color, scheme[8].to_string());
    }

    #[test]
    fn ticks_use_metric_formatter() {
        let legend = LegendModel::build(Metric::MedianIncome);
        assert_eq!(legend.title, "Median Household Income");
        let labels: Vec<&str> = legend.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["$30,000", "$40,000", "$50,000", "$60,000", "$70,000", "$80,000", "$90,000"]
        );
        assert_eq!(legend.ticks[0].position, 0.0);
        assert_eq!(legend.ticks[6].position, 1.0);
    }

    #[test]
    fn tick_positions_stay_on_the_bar() {
        for metric in Metric::ALL {
            let legend = LegendModel::build(metric);
            assert!(!legend.ticks.is_empty(), "{} has no ticks", metric);
            for tick in &legend.ticks {
                assert!((0.0..=1.0).contains(&tick.position), "{} tick {}", metric, tick.value);
            }
        }
    }
}
