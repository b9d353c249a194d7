use crate::domain::{
    chart::{
        ActiveSelection, AreaChartConfig, CategoryColors, ChartColor, FillType, PlotArea, SeriesLayout,
        axis::x_tick_indices, layout::value_bounds, layout_series,
    },
    logging::LogComponent,
    market_data::{DataRow, has_only_one_value_for_key},
};

pub const STROKE_WIDTH: f64 = 2.0;
/// Width of the invisible per-category click target.
pub const HIT_STROKE_WIDTH: f64 = 12.0;
pub const DOT_RADIUS: f64 = 5.0;

const STROKE_OPACITY: f64 = 1.0;
const DIMMED_STROKE_OPACITY: f64 = 0.3;
const FILL_OPACITY: f64 = 0.3;
const DIMMED_FILL_OPACITY: f64 = 0.1;

const TOP_MARGIN: f64 = 5.0;
const X_AXIS_HEIGHT: f64 = 30.0;
const AXIS_LABEL_SPACE: f64 = 20.0;

/// Pixel size of the chart surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneSize {
    pub width: f64,
    pub height: f64,
}

impl SceneSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// One `<stop>` of a series fill; `offset: None` leaves the offset unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: Option<&'static str>,
    pub opacity: f64,
}

/// A laid-out point in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePoint {
    pub x: f64,
    pub y: f64,
    /// Plotted value: raw, or the row share for percent layouts.
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesScene {
    pub category: String,
    pub color: ChartColor,
    pub gradient_id: String,
    pub line_path: String,
    pub area_path: String,
    pub stroke_opacity: f64,
    pub stops: Vec<GradientStop>,
    pub points: Vec<Option<ScenePoint>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DotMarker {
    pub category: String,
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub color: ChartColor,
    pub opacity: f64,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// Everything the SVG surface draws for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub size: SceneSize,
    pub plot: PlotArea,
    pub series: Vec<SeriesScene>,
    pub dots: Vec<DotMarker>,
    pub y_ticks: Vec<AxisTick>,
    pub x_ticks: Vec<AxisTick>,
    /// X positions of vertical grid lines.
    pub grid_lines: Vec<f64>,
    pub show_x_axis: bool,
    pub show_y_axis: bool,
}

impl ChartScene {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn series_for(&self, category: &str) -> Option<&SeriesScene> {
        self.series.iter().find(|series| series.category == category)
    }

    /// Row under a surface X coordinate.
    pub fn index_at(&self, x: f64) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.plot.x_to_index(x)
    }

    /// Hover markers: one per series with a value at `index`.
    pub fn hover_markers(&self, index: usize) -> Vec<DotMarker> {
        self.series
            .iter()
            .filter_map(|series| {
                let point = series.points.get(index).copied().flatten()?;
                Some(DotMarker {
                    category: series.category.clone(),
                    index,
                    x: point.x,
                    y: point.y,
                    color: series.color,
                    opacity: 1.0,
                    active: false,
                })
            })
            .collect()
    }
}

/// Use Case: lay out an area chart for the current data and selection.
pub struct RenderChartUseCase<'a> {
    config: &'a AreaChartConfig,
    colors: CategoryColors,
    id_prefix: String,
}

impl<'a> RenderChartUseCase<'a> {
    pub fn new(config: &'a AreaChartConfig) -> Self {
        Self::with_colors(config, CategoryColors::construct(&config.categories, &config.colors))
    }

    /// Reuse an already computed colour map.
    pub fn with_colors(config: &'a AreaChartConfig, colors: CategoryColors) -> Self {
        Self { config, colors, id_prefix: "area".to_string() }
    }

    /// Prefix for gradient ids; must be unique per chart on the page.
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    pub fn colors(&self) -> &CategoryColors {
        &self.colors
    }

    pub fn execute(&self, rows: &[DataRow], selection: &ActiveSelection, size: SceneSize) -> ChartScene {
        let config = self.config;
        let plot_frame = self.plot_frame(size, rows.len());

        if rows.is_empty() || config.categories.is_empty() {
            crate::log_trace!(LogComponent::Application("RenderChart"), "nothing to draw");
            let scale = config.y_axis_domain().resolve(None, None);
            return ChartScene {
                size,
                plot: PlotArea { domain_min: scale.min, domain_max: scale.max, ..plot_frame },
                series: Vec::new(),
                dots: Vec::new(),
                y_ticks: Vec::new(),
                x_ticks: Vec::new(),
                grid_lines: Vec::new(),
                show_x_axis: config.show_x_axis,
                show_y_axis: config.show_y_axis,
            };
        }

        let layouts = layout_series(rows, &config.categories, config.stack_type);
        let bounds = value_bounds(&layouts);
        let scale = config.y_axis_domain().resolve(bounds.map(|b| b.0), bounds.map(|b| b.1));
        let plot = PlotArea { domain_min: scale.min, domain_max: scale.max, ..plot_frame };

        let series: Vec<SeriesScene> =
            layouts.iter().map(|layout| self.series_scene(layout, &plot, selection)).collect();
        let dots = self.dots(rows, &series, selection);

        let y_ticks = scale
            .ticks
            .iter()
            .map(|&value| AxisTick { position: plot.value_to_y(value), label: config.format_tick(value) })
            .collect();

        let labels: Vec<String> = rows.iter().map(|row| row.label(&config.index)).collect();
        let x_ticks: Vec<AxisTick> =
            x_tick_indices(&labels, plot.width - 2.0 * plot.x_padding, config.tick_gap, config.start_end_only)
                .into_iter()
                .map(|i| AxisTick { position: plot.index_to_x(i), label: labels[i].clone() })
                .collect();
        let grid_lines = if config.show_grid_lines { x_ticks.iter().map(|t| t.position).collect() } else { Vec::new() };

        ChartScene {
            size,
            plot,
            series,
            dots,
            y_ticks,
            x_ticks,
            grid_lines,
            show_x_axis: config.show_x_axis,
            show_y_axis: config.show_y_axis,
        }
    }

    fn plot_frame(&self, size: SceneSize, point_count: usize) -> PlotArea {
        let config = self.config;
        let y_label = if config.y_axis_label.is_some() { AXIS_LABEL_SPACE } else { 0.0 };
        let axis = if config.show_y_axis { config.y_axis_width } else { 0.0 };
        let left = axis + y_label;
        let right = if config.y_axis_label.is_some() { 5.0 } else { 0.0 };
        let x_axis = if config.show_x_axis { X_AXIS_HEIGHT } else { 0.0 };
        let x_label = if config.x_axis_label.is_some() { AXIS_LABEL_SPACE } else { 0.0 };
        let bottom = x_axis + x_label;

        PlotArea {
            left,
            top: TOP_MARGIN,
            width: (size.width - left - right).max(0.0),
            height: (size.height - TOP_MARGIN - bottom).max(0.0),
            x_padding: config.x_padding(),
            domain_min: 0.0,
            domain_max: 1.0,
            point_count,
        }
    }

    fn series_scene(&self, layout: &SeriesLayout, plot: &PlotArea, selection: &ActiveSelection) -> SeriesScene {
        let dimmed = selection.dims(&layout.category);
        let edges: Vec<Option<(f64, f64, f64)>> = layout
            .points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                point.map(|p| {
                    let x = plot.index_to_x(i);
                    let lower = p.lower.unwrap_or(plot.domain_min);
                    (x, plot.value_to_y(p.upper), plot.value_to_y(lower))
                })
            })
            .collect();

        let segments = segments(&edges, self.config.connect_nulls);
        let points = layout
            .points
            .iter()
            .zip(&edges)
            .map(|(point, edge)| match (point, edge) {
                (Some(p), Some((x, y, _))) => Some(ScenePoint { x: *x, y: *y, value: p.value }),
                _ => None,
            })
            .collect();

        SeriesScene {
            category: layout.category.clone(),
            color: self.colors.color_for(&layout.category),
            gradient_id: gradient_id(&self.id_prefix, &layout.category),
            line_path: segments.iter().map(|s| line_path(s)).collect::<Vec<_>>().join(" "),
            area_path: segments.iter().map(|s| area_path(s)).collect::<Vec<_>>().join(" "),
            stroke_opacity: if dimmed { DIMMED_STROKE_OPACITY } else { STROKE_OPACITY },
            stops: gradient_stops(self.config.fill, if dimmed { DIMMED_FILL_OPACITY } else { FILL_OPACITY }),
            points,
        }
    }

    /// Active dot plus a marker for every single-value series.
    fn dots(&self, rows: &[DataRow], series: &[SeriesScene], selection: &ActiveSelection) -> Vec<DotMarker> {
        let mut dots = Vec::new();
        for scene in series {
            let single = has_only_one_value_for_key(rows, &scene.category);
            for (index, point) in scene.points.iter().enumerate() {
                let Some(point) = point else { continue };
                let active = selection.is_active_dot(index, &scene.category);
                if !active && !single {
                    continue;
                }
                let opacity = if active || !selection.dims(&scene.category) { 1.0 } else { DIMMED_STROKE_OPACITY };
                dots.push(DotMarker {
                    category: scene.category.clone(),
                    index,
                    x: point.x,
                    y: point.y,
                    color: scene.color,
                    opacity,
                    active,
                });
            }
        }
        dots
    }
}

/// Fill stops for a series at `opacity`.
pub fn gradient_stops(fill: FillType, opacity: f64) -> Vec<GradientStop> {
    match fill {
        FillType::Gradient => vec![
            GradientStop { offset: Some("0%"), opacity },
            GradientStop { offset: Some("50%"), opacity: 0.0 },
        ],
        FillType::Solid => vec![GradientStop { offset: None, opacity }],
        FillType::None => vec![GradientStop { offset: None, opacity: 0.0 }],
    }
}

fn gradient_id(prefix: &str, category: &str) -> String {
    let cleaned: String = category.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    format!("{}-{}", prefix, cleaned)
}

type Edge = (f64, f64, f64);

/// Split at nulls, or bridge them when `connect_nulls` is set.
fn segments(edges: &[Option<Edge>], connect_nulls: bool) -> Vec<Vec<Edge>> {
    if connect_nulls {
        let joined: Vec<Edge> = edges.iter().flatten().copied().collect();
        return if joined.is_empty() { Vec::new() } else { vec![joined] };
    }
    let mut result = Vec::new();
    let mut current = Vec::new();
    for edge in edges {
        match edge {
            Some(edge) => current.push(*edge),
            None if !current.is_empty() => result.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        result.push(current);
    }
    result
}

fn line_path(segment: &[Edge]) -> String {
    segment
        .iter()
        .enumerate()
        .map(|(i, (x, y, _))| format!("{}{:.2},{:.2}", if i == 0 { "M" } else { "L" }, x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn area_path(segment: &[Edge]) -> String {
    let lower = segment.iter().rev().map(|(x, _, low)| format!("L{:.2},{:.2}", x, low));
    let mut parts: Vec<String> = vec![line_path(segment)];
    parts.extend(lower);
    parts.push("Z".to_string());
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::StackType;
    use serde_json::json;

    fn rows(value: serde_json::Value) -> Vec<DataRow> {
        serde_json::from_value(value).expect("rows")
    }

    #[test]
    fn null_breaks_the_line_unless_connected() {
        let data = rows(json!([
            {"d": "a", "v": 1}, {"d": "b", "v": null}, {"d": "c", "v": 3}
        ]));
        let config = AreaChartConfig::new("d", vec!["v".into()]);
        let scene = RenderChartUseCase::new(&config).execute(&data, &ActiveSelection::None, SceneSize::new(300.0, 200.0));
        assert_eq!(scene.series[0].line_path.matches('M').count(), 2);

        let connected = config.clone().with_connect_nulls(true);
        let scene = RenderChartUseCase::new(&connected).execute(&data, &ActiveSelection::None, SceneSize::new(300.0, 200.0));
        assert_eq!(scene.series[0].line_path.matches('M').count(), 1);
    }

    #[test]
    fn dimmed_series_under_category_selection() {
        let data = rows(json!([{"d": "a", "x": 1, "y": 2}, {"d": "b", "x": 2, "y": 3}]));
        let config = AreaChartConfig::new("d", vec!["x".into(), "y".into()]);
        let selection = ActiveSelection::Category("x".into());
        let scene = RenderChartUseCase::new(&config).execute(&data, &selection, SceneSize::new(300.0, 200.0));
        let x = scene.series_for("x").expect("x");
        let y = scene.series_for("y").expect("y");
        assert_eq!((x.stroke_opacity, x.stops[0].opacity), (1.0, 0.3));
        assert_eq!((y.stroke_opacity, y.stops[0].opacity), (0.3, 0.1));
        assert_eq!(y.stops[1], GradientStop { offset: Some("50%"), opacity: 0.0 });
    }

    #[test]
    fn empty_inputs_draw_nothing() {
        let config = AreaChartConfig::new("d", vec!["v".into()]);
        let scene = RenderChartUseCase::new(&config).execute(&[], &ActiveSelection::None, SceneSize::new(300.0, 200.0));
        assert!(scene.is_empty());
        assert_eq!(scene.index_at(10.0), None);

        let no_categories = AreaChartConfig::new("d", Vec::new());
        let data = rows(json!([{"d": "a", "v": 1}]));
        assert!(RenderChartUseCase::new(&no_categories).execute(&data, &ActiveSelection::None, SceneSize::new(300.0, 200.0)).is_empty());
    }

    #[test]
    fn stacked_area_lower_edge_follows_previous_series() {
        let data = rows(json!([{"d": "a", "x": 1, "y": 2}, {"d": "b", "x": 1, "y": 2}]));
        let config = AreaChartConfig::new("d", vec!["x".into(), "y".into()]).with_stack_type(StackType::Stacked);
        let scene = RenderChartUseCase::new(&config).execute(&data, &ActiveSelection::None, SceneSize::new(300.0, 200.0));
        let x_top = scene.series[0].points[0].expect("x").y;
        assert!(scene.series[1].area_path.contains(&format!(",{:.2}", x_top)));
    }

    #[test]
    fn gradient_ids_are_sanitized() {
        assert_eq!(gradient_id("area", "BTC / USD"), "area-BTCUSD");
    }
}
