//! "Nice" axis ticks for a linear domain.
//!
//! Steps are powers of ten times 1, 2 or 5, chosen so that roughly `count`
//! ticks fall inside `[start, stop]`. Every returned tick lies inside the
//! domain.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Round half toward positive infinity.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Integer tick range `[i1, i2]` and increment. A negative increment means
/// "divide by `-inc`" to keep sub-unit steps exact.
fn tick_increment(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let scale = 10f64.powf(-power) / factor;
        i1 = round_half_up(start * scale);
        i2 = round_half_up(stop * scale);
        if i1 / scale < start {
            i1 += 1.0;
        }
        if i2 / scale > stop {
            i2 -= 1.0;
        }
        inc = -scale;
    } else {
        let scale = 10f64.powf(power) * factor;
        i1 = round_half_up(start / scale);
        i2 = round_half_up(stop / scale);
        if i1 * scale < start {
            i1 += 1.0;
        }
        if i2 * scale > stop {
            i2 -= 1.0;
        }
        inc = scale;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_increment(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Approximately `count` evenly spaced, round-valued ticks in `[start, stop]`.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let count = count as f64;
    if count <= 0.0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_increment(lo, hi, count);
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1 + 1.0) as usize;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 {
                k / -inc
            } else {
                k * inc
            }
        })
        .collect();
    if reverse {
        out.reverse();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn life_expectancy_domain() {
        assert_eq!(
            ticks(70.0, 85.0, 5),
            vec![70.0, 72.0, 74.0, 76.0, 78.0, 80.0, 82.0, 84.0]
        );
    }

    #[test]
    fn income_domain() {
        assert_eq!(
            ticks(30000.0, 90000.0, 5),
            vec![30000.0, 40000.0, 50000.0, 60000.0, 70000.0, 80000.0, 90000.0]
        );
    }

    #[test]
    fn unit_interval_uses_exact_decimals() {
        assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn reversed_domain() {
        assert_eq!(ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
    }

    #[test]
    fn degenerate_inputs() {
        assert!(ticks(0.0, 10.0, 0).is_empty());
        assert_eq!(ticks(3.0, 3.0, 5), vec![3.0]);
        assert!(ticks(f64::NAN, 1.0, 5).is_empty());
    }

    #[test]
    fn ticks_stay_inside_every_metric_domain() {
        for metric in chr_core::Metric::ALL {
            let (lo, hi) = metric.domain();
            let t = ticks(lo, hi, 5);
            assert!(!t.is_empty());
            assert!(t.iter().all(|&v| v >= lo && v <= hi), "metric {}", metric);
        }
    }
}
