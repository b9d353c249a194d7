//! Y-axis domain resolution and tick generation.

/// One end of the Y domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainBound {
    Fixed(f64),
    Auto,
}

/// Configured Y domain, resolved against data bounds at render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YAxisDomain {
    pub min: DomainBound,
    pub max: DomainBound,
}

/// Default number of Y ticks.
pub const TICK_COUNT: usize = 5;

impl YAxisDomain {
    /// `auto_min_value` follows the data minimum; otherwise the floor is `min_value` or 0.
    pub fn new(auto_min_value: bool, min_value: Option<f64>, max_value: Option<f64>) -> Self {
        let min = if auto_min_value {
            DomainBound::Auto
        } else {
            DomainBound::Fixed(min_value.unwrap_or(0.0))
        };
        let max = max_value.map(DomainBound::Fixed).unwrap_or(DomainBound::Auto);
        Self { min, max }
    }

    /// Domain for percent layouts: always the unit interval.
    pub fn unit() -> Self {
        Self { min: DomainBound::Fixed(0.0), max: DomainBound::Fixed(1.0) }
    }

    /// Resolve against data bounds and compute ticks. Auto ends snap outward to tick boundaries.
    pub fn resolve(&self, data_min: Option<f64>, data_max: Option<f64>) -> AxisScale {
        let data_min = data_min.unwrap_or(0.0);
        let data_max = data_max.unwrap_or(data_min);

        let mut lo = match self.min {
            DomainBound::Fixed(v) => v,
            DomainBound::Auto => data_min,
        };
        let mut hi = match self.max {
            DomainBound::Fixed(v) => v,
            DomainBound::Auto => data_max.max(lo),
        };

        if hi < lo {
            std::mem::swap(&mut lo, &mut hi);
        }

        if hi == lo {
            // A flat series still needs a visible band.
            let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.1 };
            if matches!(self.max, DomainBound::Auto) {
                hi = lo + pad;
            } else if matches!(self.min, DomainBound::Auto) {
                lo = hi - pad;
            } else {
                return AxisScale { min: lo, max: hi, ticks: vec![lo] };
            }
        }

        let step = nice_step((hi - lo) / (TICK_COUNT - 1) as f64);
        if matches!(self.min, DomainBound::Auto) {
            lo = (lo / step).floor() * step;
        }
        if matches!(self.max, DomainBound::Auto) {
            hi = (hi / step).ceil() * step;
        }

        AxisScale { min: lo, max: hi, ticks: ticks_between(lo, hi, step) }
    }
}

/// Resolved Y scale.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisScale {
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
}

/// Round a raw step up to 1, 2, 2.5, 5 or 10 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let exponent = raw.log10().floor() as i32;
    // Divide by exact powers of ten for small steps so 0.25 stays 0.25.
    let power = 10f64.powi(exponent.abs());
    let fraction = if exponent >= 0 { raw / power } else { raw * power };
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    if exponent >= 0 { nice * power } else { nice / power }
}

fn ticks_between(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    let first = (lo / step).ceil() * step;
    let mut ticks = Vec::new();
    let mut i = 0usize;
    loop {
        let tick = first + i as f64 * step;
        if tick > hi + step * 1e-9 {
            break;
        }
        // Avoid -0 and accumulated float noise in labels.
        let rounded = (tick / step).round() * step;
        ticks.push(if rounded == 0.0 { 0.0 } else { rounded });
        i += 1;
        if i > 1_000 {
            break;
        }
    }
    ticks
}

/// Percent tick label: `0.5` → `"50%"`.
pub fn value_to_percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

/// Indices of X labels to draw.
///
/// `start_end_only` keeps the first and last; otherwise labels are spaced so
/// estimated text widths plus `tick_gap` fit, always keeping the first.
pub fn x_tick_indices(labels: &[String], plot_width: f64, tick_gap: f64, start_end_only: bool) -> Vec<usize> {
    const CHAR_WIDTH: f64 = 7.0;
    match labels.len() {
        0 => Vec::new(),
        1 => vec![0],
        n if start_end_only => vec![0, n - 1],
        n => {
            let widest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0) as f64 * CHAR_WIDTH;
            let slot = plot_width / (n - 1) as f64;
            let stride = if slot <= 0.0 { n } else { ((widest + tick_gap) / slot).ceil().max(1.0) as usize };
            (0..n).step_by(stride.max(1)).collect()
        }
    }
}
