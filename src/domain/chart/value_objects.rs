use derive_more::Display;
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - series layout of the area chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString, AsRefStr)]
pub enum StackType {
    #[default]
    #[display(fmt = "Default")]
    #[strum(serialize = "default")]
    Default,
    #[display(fmt = "Stacked")]
    #[strum(serialize = "stacked")]
    Stacked,
    #[display(fmt = "Percent")]
    #[strum(serialize = "percent")]
    Percent,
}

impl StackType {
    pub fn is_stacked(&self) -> bool {
        matches!(self, StackType::Stacked | StackType::Percent)
    }
}

/// Value Object - area fill style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, AsRefStr)]
pub enum FillType {
    #[default]
    #[strum(serialize = "gradient")]
    Gradient,
    #[strum(serialize = "solid")]
    Solid,
    #[strum(serialize = "none")]
    None,
}

/// Value Object - horizontal alignment of the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, AsRefStr)]
pub enum LegendPosition {
    #[strum(serialize = "left")]
    Left,
    #[strum(serialize = "center")]
    Center,
    #[default]
    #[strum(serialize = "right")]
    Right,
}

/// Value Object - palette entry assigned to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ChartColor {
    #[display(fmt = "blue")]
    Blue,
    #[display(fmt = "emerald")]
    Emerald,
    #[display(fmt = "violet")]
    Violet,
    #[display(fmt = "amber")]
    Amber,
    #[display(fmt = "gray")]
    Gray,
    #[display(fmt = "cyan")]
    Cyan,
    #[display(fmt = "pink")]
    Pink,
    #[display(fmt = "lime")]
    Lime,
    #[display(fmt = "fuchsia")]
    Fuchsia,
}

impl ChartColor {
    /// Default palette order.
    pub const PALETTE: [ChartColor; 9] = [
        ChartColor::Blue,
        ChartColor::Emerald,
        ChartColor::Violet,
        ChartColor::Amber,
        ChartColor::Gray,
        ChartColor::Cyan,
        ChartColor::Pink,
        ChartColor::Lime,
        ChartColor::Fuchsia,
    ];

    /// Colour used for categories the map does not know.
    pub const FALLBACK: ChartColor = ChartColor::Gray;

    pub fn color(&self) -> Color {
        Color::from_hex(match self {
            ChartColor::Blue => 0x3b82f6,
            ChartColor::Emerald => 0x10b981,
            ChartColor::Violet => 0x8b5cf6,
            ChartColor::Amber => 0xf59e0b,
            ChartColor::Gray => 0x6b7280,
            ChartColor::Cyan => 0x06b6d4,
            ChartColor::Pink => 0xec4899,
            ChartColor::Lime => 0x84cc16,
            ChartColor::Fuchsia => 0xd946ef,
        })
    }

    pub fn css(&self) -> String {
        self.color().to_css()
    }
}

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn to_hex(&self) -> u32 {
        let r = (self.r * 255.0).round() as u32;
        let g = (self.g * 255.0).round() as u32;
        let b = (self.b * 255.0).round() as u32;
        (r << 16) | (g << 8) | b
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self { a: alpha, ..*self }
    }

    /// `#rrggbb` when opaque, `rgba(..)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:06x}", self.to_hex())
        } else {
            let hex = self.to_hex();
            format!("rgba({}, {}, {}, {})", hex >> 16, (hex >> 8) & 0xFF, hex & 0xFF, self.a)
        }
    }

    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const ACCENT: Color = Color { r: 75.0 / 255.0, g: 64.0 / 255.0, b: 238.0 / 255.0, a: 1.0 };
    pub const GRID: Color = Color { r: 226.0 / 255.0, g: 228.0 / 255.0, b: 231.0 / 255.0, a: 1.0 };
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

/// Value Object - pixel rectangle the series are drawn into plus the value domain it maps.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal inset of the first and last point.
    pub x_padding: f64,
    pub domain_min: f64,
    pub domain_max: f64,
    pub point_count: usize,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn step(&self) -> f64 {
        if self.point_count > 1 {
            (self.width - 2.0 * self.x_padding).max(0.0) / (self.point_count - 1) as f64
        } else {
            0.0
        }
    }

    /// Screen X of a row index. A lone point sits in the middle.
    pub fn index_to_x(&self, index: usize) -> f64 {
        if self.point_count <= 1 {
            return self.left + self.width / 2.0;
        }
        self.left + self.x_padding + index as f64 * self.step()
    }

    /// Screen Y of a value, inverted so larger values sit higher.
    pub fn value_to_y(&self, value: f64) -> f64 {
        let range = self.domain_max - self.domain_min;
        if range == 0.0 {
            return self.top + self.height / 2.0;
        }
        let normalized = (value - self.domain_min) / range;
        self.top + self.height * (1.0 - normalized)
    }

    /// Nearest row index to a screen X, `None` without points.
    pub fn x_to_index(&self, x: f64) -> Option<usize> {
        match self.point_count {
            0 => None,
            1 => Some(0),
            n => {
                let step = self.step();
                if step == 0.0 {
                    return Some(0);
                }
                let raw = ((x - self.left - self.x_padding) / step).round();
                Some(raw.clamp(0.0, (n - 1) as f64) as usize)
            }
        }
    }
}
