//! Style configuration consumed by the layout engine.
//!
//! All types are plain immutable values with `Default` plus fluent `with_*`
//! builders; a style is committed to a render pass as-is and never mutated
//! by the engine.

use serde::{Deserialize, Serialize};

use crate::layout::rotation::RotationStyle;

/// Approximate font metrics used to size label space without a text backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    /// Font size in canvas units.
    pub size: f64,
    /// Average glyph width as a fraction of the font size.
    pub width_ratio: f64,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            size: 12.0,
            width_ratio: 0.6,
        }
    }
}

impl FontMetrics {
    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.size * 1.2
    }

    /// Deterministic, backend-independent width estimate for `text`.
    #[must_use]
    pub fn text_width(&self, text: &str) -> f64 {
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                'e' | 'E' => 0.56,
                _ => self.width_ratio,
            }
        });
        (units * self.size).max(self.size * 0.5)
    }
}

/// Where major tick-value labels are rendered relative to their axis, or
/// whether they are rendered at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ValueLabelSide {
    /// Left of a vertical axis, below a horizontal axis.
    #[default]
    LowEdge,
    /// Right of a vertical axis, above a horizontal axis.
    HighEdge,
    Hidden,
}

/// Whether ticks and their value labels attach to the plot-window border or
/// to the data axis line itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TickAnchor {
    /// Always on the window border, even when the axis line crosses
    /// mid-window.
    #[default]
    Window,
    /// On the axis line, wherever it is drawn.
    Axis,
}

/// Per-axis layout options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    /// Axis title text. No band is reserved when empty or disabled.
    pub label: String,
    pub show_label: bool,
    pub value_labels: ValueLabelSide,
    pub label_rotation: RotationStyle,
    pub tick_anchor: TickAnchor,
    /// Tick mark length in canvas units.
    pub tick_length: f64,
    /// Minor ticks between consecutive majors; 0 disables minors.
    pub minor_per_major: usize,
    /// Emit a grid segment across the plot window at every major tick.
    pub grid: bool,
    /// Font for tick-value labels.
    pub font: FontMetrics,
    /// Font for the axis title.
    pub label_font: FontMetrics,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            label: String::new(),
            show_label: true,
            value_labels: ValueLabelSide::LowEdge,
            label_rotation: RotationStyle::Horizontal,
            tick_anchor: TickAnchor::Window,
            tick_length: 5.0,
            minor_per_major: 0,
            grid: false,
            font: FontMetrics::default(),
            label_font: FontMetrics::default(),
        }
    }
}

impl AxisStyle {
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_value_labels(mut self, side: ValueLabelSide) -> Self {
        self.value_labels = side;
        self
    }

    #[must_use]
    pub fn with_label_rotation(mut self, rotation: RotationStyle) -> Self {
        self.label_rotation = rotation;
        self
    }

    #[must_use]
    pub fn with_tick_anchor(mut self, anchor: TickAnchor) -> Self {
        self.tick_anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_tick_length(mut self, length: f64) -> Self {
        self.tick_length = length;
        self
    }

    #[must_use]
    pub fn with_minor_per_major(mut self, count: usize) -> Self {
        self.minor_per_major = count;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: FontMetrics) -> Self {
        self.font = font;
        self
    }

    pub(crate) fn has_label(&self) -> bool {
        self.show_label && !self.label.is_empty()
    }

    pub(crate) fn shows_value_labels(&self) -> bool {
        self.value_labels != ValueLabelSide::Hidden
    }
}

/// Legend layout options. Geometry only; rendering belongs to the drawing
/// layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendStyle {
    pub entries: Vec<String>,
    pub font: FontMetrics,
    /// Length of the sample line drawn before each entry.
    pub sample_length: f64,
    pub padding: f64,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            font: FontMetrics::default(),
            sample_length: 18.0,
            padding: 6.0,
        }
    }
}

impl LegendStyle {
    #[must_use]
    pub fn with_entries(mut self, entries: Vec<String>) -> Self {
        self.entries = entries;
        self
    }

    pub(crate) fn band_width(&self) -> f64 {
        let longest = self
            .entries
            .iter()
            .map(|entry| self.font.text_width(entry))
            .fold(0.0f64, f64::max);
        if self.entries.is_empty() {
            0.0
        } else {
            longest + self.sample_length + 3.0 * self.padding
        }
    }
}

/// Full chart style: title, border margin, both axes, optional legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub title: String,
    pub show_title: bool,
    pub title_font: FontMetrics,
    /// Fixed margin between the canvas edge and any reserved band.
    pub border_margin: f64,
    pub x_axis: AxisStyle,
    pub y_axis: AxisStyle,
    pub legend: Option<LegendStyle>,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: String::new(),
            show_title: true,
            title_font: FontMetrics::default().with_size(16.0),
            border_margin: 8.0,
            x_axis: AxisStyle::default(),
            y_axis: AxisStyle::default(),
            legend: None,
        }
    }
}

impl ChartStyle {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_border_margin(mut self, margin: f64) -> Self {
        self.border_margin = margin;
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, axis: AxisStyle) -> Self {
        self.x_axis = axis;
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: AxisStyle) -> Self {
        self.y_axis = axis;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendStyle) -> Self {
        self.legend = Some(legend);
        self
    }

    pub(crate) fn has_title(&self) -> bool {
        self.show_title && !self.title.is_empty()
    }
}
