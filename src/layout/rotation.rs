//! Tick-value label directions and their placement tables.
//!
//! Every rotation style carries a fixed angle plus a small lookup entry of
//! (dx, dy, anchor) adjustments per axis side, expressed in font-size units
//! relative to the tick mark. The drawing layer rotates the glyph run around
//! the anchor point it receives.

use serde::{Deserialize, Serialize};

/// Horizontal alignment of a glyph run relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TextAnchor {
    Left,
    #[default]
    Center,
    Right,
}

/// Which side of its axis a tick-value label sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelSide {
    /// Below a horizontal axis.
    Below,
    /// Above a horizontal axis.
    Above,
    /// Left of a vertical axis.
    LeftOf,
    /// Right of a vertical axis.
    RightOf,
}

/// Offset and alignment of a label relative to its tick, in font-size units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub dx: f64,
    pub dy: f64,
    pub anchor: TextAnchor,
}

const fn place(dx: f64, dy: f64, anchor: TextAnchor) -> LabelPlacement {
    LabelPlacement { dx, dy, anchor }
}

/// Direction of a tick-value label.
///
/// Thirteen discrete directions: horizontal, four upward slants, four
/// downward slants, the upside-down horizontal, and three backward-leaning
/// (past-vertical) slants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RotationStyle {
    #[default]
    Horizontal,
    Up30,
    Up45,
    Up60,
    Up90,
    Down30,
    Down45,
    Down60,
    Down90,
    /// Upside-down horizontal.
    Flipped,
    /// Backward-leaning, 30 degrees past vertical.
    Back30,
    Back45,
    Back60,
}

const SIN_45: f64 = std::f64::consts::FRAC_1_SQRT_2;

impl RotationStyle {
    pub const ALL: [RotationStyle; 13] = [
        Self::Horizontal,
        Self::Up30,
        Self::Up45,
        Self::Up60,
        Self::Up90,
        Self::Down30,
        Self::Down45,
        Self::Down60,
        Self::Down90,
        Self::Flipped,
        Self::Back30,
        Self::Back45,
        Self::Back60,
    ];

    /// Counter-clockwise label angle in degrees.
    #[must_use]
    pub fn angle_degrees(self) -> f64 {
        match self {
            Self::Horizontal => 0.0,
            Self::Up30 => 30.0,
            Self::Up45 => 45.0,
            Self::Up60 => 60.0,
            Self::Up90 => 90.0,
            Self::Down30 => -30.0,
            Self::Down45 => -45.0,
            Self::Down60 => -60.0,
            Self::Down90 => -90.0,
            Self::Flipped => 180.0,
            Self::Back30 => 150.0,
            Self::Back45 => 135.0,
            Self::Back60 => 120.0,
        }
    }

    /// Horizontal or upside-down horizontal.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::Flipped)
    }

    /// Straight up or straight down.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up90 | Self::Down90)
    }

    /// Space a label column needs beside a vertical axis, perpendicular to
    /// the axis line.
    ///
    /// Horizontal labels consume the full width of the longest formatted
    /// string; vertical labels consume roughly one font height; slanted
    /// labels consume the longest width scaled by sin 45 as an
    /// approximation.
    #[must_use]
    pub fn extent_beside_vertical_axis(self, longest_label: f64, font_height: f64) -> f64 {
        if self.is_horizontal() {
            longest_label + 0.5 * font_height
        } else if self.is_vertical() {
            1.1 * font_height
        } else {
            longest_label * SIN_45 + 0.5 * font_height
        }
    }

    /// Space a label row needs beside a horizontal axis, perpendicular to
    /// the axis line. Transpose of [`Self::extent_beside_vertical_axis`].
    #[must_use]
    pub fn extent_beside_horizontal_axis(self, longest_label: f64, font_height: f64) -> f64 {
        if self.is_horizontal() {
            1.5 * font_height
        } else if self.is_vertical() {
            longest_label + 0.5 * font_height
        } else {
            longest_label * SIN_45 + 0.5 * font_height
        }
    }

    /// Placement entry for a label on `side` of its axis.
    ///
    /// Offsets are tuned so the glyph run lines up visually with the tick on
    /// either side of the axis: horizontal labels sit centered half a font
    /// height off the tick, vertical labels sit 0.5 to 1.5 font widths off
    /// and centered, slanted labels lead into the tick with their near end.
    #[must_use]
    pub fn placement(self, side: LabelSide) -> LabelPlacement {
        use TextAnchor::{Center, Left, Right};
        match side {
            LabelSide::Below => match self {
                Self::Horizontal => place(0.0, 1.3, Center),
                Self::Flipped => place(0.0, 0.7, Center),
                Self::Up30 => place(0.0, 1.1, Right),
                Self::Up45 => place(0.1, 1.0, Right),
                Self::Up60 => place(0.2, 1.0, Right),
                Self::Up90 => place(0.35, 0.5, Right),
                Self::Down30 => place(0.0, 1.1, Left),
                Self::Down45 => place(0.1, 1.2, Left),
                Self::Down60 => place(0.2, 1.2, Left),
                Self::Down90 => place(0.35, 0.5, Left),
                Self::Back30 => place(0.0, 1.1, Left),
                Self::Back45 => place(-0.1, 1.0, Left),
                Self::Back60 => place(-0.2, 1.0, Left),
            },
            LabelSide::Above => match self {
                Self::Horizontal => place(0.0, -0.5, Center),
                Self::Flipped => place(0.0, -1.1, Center),
                Self::Up30 => place(0.0, -0.5, Left),
                Self::Up45 => place(0.1, -0.5, Left),
                Self::Up60 => place(0.2, -0.6, Left),
                Self::Up90 => place(0.35, -0.5, Left),
                Self::Down30 => place(0.0, -0.5, Right),
                Self::Down45 => place(-0.1, -0.5, Right),
                Self::Down60 => place(-0.2, -0.6, Right),
                Self::Down90 => place(0.35, -0.5, Right),
                Self::Back30 => place(0.0, -0.5, Right),
                Self::Back45 => place(0.1, -0.6, Right),
                Self::Back60 => place(0.2, -0.6, Right),
            },
            LabelSide::LeftOf => match self {
                Self::Horizontal => place(-0.5, 0.4, Right),
                Self::Flipped => place(-0.5, -0.1, Left),
                Self::Up30 => place(-0.4, 0.3, Right),
                Self::Up45 => place(-0.4, 0.25, Right),
                Self::Up60 => place(-0.4, 0.2, Right),
                Self::Up90 => place(-0.5, 0.0, Center),
                Self::Down30 => place(-0.4, 0.45, Right),
                Self::Down45 => place(-0.4, 0.5, Right),
                Self::Down60 => place(-0.4, 0.55, Right),
                Self::Down90 => place(-1.4, 0.0, Center),
                Self::Back30 => place(-0.4, 0.3, Left),
                Self::Back45 => place(-0.4, 0.35, Left),
                Self::Back60 => place(-0.4, 0.4, Left),
            },
            LabelSide::RightOf => match self {
                Self::Horizontal => place(0.5, 0.4, Left),
                Self::Flipped => place(0.5, -0.1, Right),
                Self::Up30 => place(0.4, 0.3, Left),
                Self::Up45 => place(0.4, 0.25, Left),
                Self::Up60 => place(0.4, 0.2, Left),
                Self::Up90 => place(1.4, 0.0, Center),
                Self::Down30 => place(0.4, 0.45, Left),
                Self::Down45 => place(0.4, 0.5, Left),
                Self::Down60 => place(0.4, 0.55, Left),
                Self::Down90 => place(0.5, 0.0, Center),
                Self::Back30 => place(0.4, 0.3, Right),
                Self::Back45 => place(0.4, 0.35, Right),
                Self::Back60 => place(0.4, 0.4, Right),
            },
        }
    }
}
