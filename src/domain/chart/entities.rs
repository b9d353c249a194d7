use super::axis::YAxisDomain;
use super::value_objects::{ChartColor, FillType, LegendPosition, StackType};
use std::fmt;
use std::rc::Rc;

/// Formats values for Y ticks and tooltip rows.
#[derive(Clone)]
pub struct ValueFormatter(Rc<dyn Fn(f64) -> String>);

impl ValueFormatter {
    pub fn new(format: impl Fn(f64) -> String + 'static) -> Self {
        Self(Rc::new(format))
    }

    pub fn format(&self, value: f64) -> String {
        (self.0)(value)
    }
}

impl Default for ValueFormatter {
    /// Plain number: `110`, `110.5`.
    fn default() -> Self {
        Self::new(|value| value.to_string())
    }
}

impl fmt::Debug for ValueFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueFormatter(..)")
    }
}

/// Static configuration of an area chart. Data and callbacks are supplied separately.
#[derive(Debug, Clone)]
pub struct AreaChartConfig {
    pub index: String,
    pub categories: Vec<String>,
    pub colors: Vec<ChartColor>,
    pub value_formatter: ValueFormatter,
    pub stack_type: StackType,
    pub fill: FillType,
    pub show_legend: bool,
    pub show_tooltip: bool,
    pub show_x_axis: bool,
    pub show_y_axis: bool,
    pub show_grid_lines: bool,
    pub start_end_only: bool,
    pub y_axis_width: f64,
    pub tick_gap: f64,
    pub auto_min_value: bool,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub connect_nulls: bool,
    pub legend_position: LegendPosition,
    pub enable_legend_slider: bool,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
}

impl AreaChartConfig {
    pub fn new(index: impl Into<String>, categories: Vec<String>) -> Self {
        Self {
            index: index.into(),
            categories,
            colors: ChartColor::PALETTE.to_vec(),
            value_formatter: ValueFormatter::default(),
            stack_type: StackType::Default,
            fill: FillType::Gradient,
            show_legend: false,
            show_tooltip: true,
            show_x_axis: false,
            show_y_axis: false,
            show_grid_lines: true,
            start_end_only: false,
            y_axis_width: 80.0,
            tick_gap: 5.0,
            auto_min_value: false,
            min_value: None,
            max_value: None,
            connect_nulls: false,
            legend_position: LegendPosition::Right,
            enable_legend_slider: false,
            x_axis_label: None,
            y_axis_label: None,
        }
    }

    pub fn with_stack_type(mut self, stack_type: StackType) -> Self {
        self.stack_type = stack_type;
        self
    }

    pub fn with_axes(mut self, show_x_axis: bool, show_y_axis: bool) -> Self {
        self.show_x_axis = show_x_axis;
        self.show_y_axis = show_y_axis;
        self
    }

    pub fn with_domain(mut self, auto_min_value: bool, min_value: Option<f64>, max_value: Option<f64>) -> Self {
        self.auto_min_value = auto_min_value;
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    pub fn with_colors(mut self, colors: Vec<ChartColor>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_value_formatter(mut self, formatter: ValueFormatter) -> Self {
        self.value_formatter = formatter;
        self
    }

    pub fn with_connect_nulls(mut self, connect_nulls: bool) -> Self {
        self.connect_nulls = connect_nulls;
        self
    }

    /// Configured Y domain; percent layouts always span 0..1.
    pub fn y_axis_domain(&self) -> YAxisDomain {
        match self.stack_type {
            StackType::Percent => YAxisDomain::unit(),
            _ => YAxisDomain::new(self.auto_min_value, self.min_value, self.max_value),
        }
    }

    /// Y tick formatter: percentages for percent layouts, the value formatter otherwise.
    pub fn format_tick(&self, value: f64) -> String {
        match self.stack_type {
            StackType::Percent => super::axis::value_to_percent(value),
            _ => self.value_formatter.format(value),
        }
    }

    /// Horizontal inset of the first/last point.
    pub fn x_padding(&self) -> f64 {
        if (!self.show_x_axis && !self.show_y_axis) || (self.start_end_only && !self.show_y_axis) {
            0.0
        } else {
            20.0
        }
    }
}
