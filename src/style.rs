use crate::color::Color;
#[cfg(feature = "gradient")]
use crate::gradient::GradientStops;

/// How a [`Length`] value is interpreted.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeUnit {
    /// Logical points.
    #[default]
    Pixel,
    /// A fraction of the axis radius.
    Factor,
}

/// A length given either in logical points or as a fraction of the axis radius.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Length {
    pub value: f64,
    pub unit: SizeUnit,
}

impl Length {
    pub const ZERO: Self = Self::px(0.0);

    /// A length in logical points.
    pub const fn px(value: f64) -> Self {
        Self {
            value,
            unit: SizeUnit::Pixel,
        }
    }

    /// A length relative to the axis radius.
    pub const fn factor(value: f64) -> Self {
        Self {
            value,
            unit: SizeUnit::Factor,
        }
    }

    /// Resolves this length into logical points for an axis of `radius`.
    ///
    /// Negative and non-finite lengths resolve to `0`.
    pub fn resolve(&self, radius: f64) -> f64 {
        let points = match self.unit {
            SizeUnit::Pixel => self.value,
            SizeUnit::Factor => self.value * radius,
        };

        if points.is_finite() {
            points.max(0.0)
        } else {
            0.0
        }
    }
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Self::px(value)
    }
}

/// Where ticks are drawn relative to the axis line.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickPosition {
    /// Towards the center, starting at the inner edge of the axis line.
    #[default]
    Inside,
    /// Away from the center, starting at the outer edge of the axis line.
    Outside,
    /// Centered across the axis line.
    Cross,
}

/// Where labels are drawn relative to the axis line.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelPosition {
    #[default]
    Inside,
    Outside,
}

bitflags::bitflags! {
    /// Which ends of the axis line are rounded.
    ///
    /// The empty set draws flat ends.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CornerStyle: u8 {
        const START_CURVE = 1;
        const END_CURVE = 1 << 1;
        const BOTH_CURVE = Self::START_CURVE.bits() | Self::END_CURVE.bits();
    }
}

/// Alternating drawn and skipped lengths along the middle of the axis line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashArray {
    /// Length of a drawn span in logical points.
    pub dash: f64,
    /// Length of a skipped span in logical points.
    pub gap: f64,
}

impl DashArray {
    pub const fn new(dash: f64, gap: f64) -> Self {
        Self { dash, gap }
    }

    /// Returns `false` for patterns that cannot produce alternating spans.
    pub fn is_valid(&self) -> bool {
        self.dash.is_finite() && self.gap.is_finite() && self.dash > 0.0 && self.gap > 0.0
    }
}

/// The appearance of the axis line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisLineStyle {
    pub thickness: Length,
    pub color: Color,
    pub corner_style: CornerStyle,
    pub dash_array: Option<DashArray>,
    /// Colors along the value range. Overrides `color` when not empty.
    #[cfg(feature = "gradient")]
    pub gradient: GradientStops,
}

impl Default for AxisLineStyle {
    fn default() -> Self {
        Self {
            thickness: Length::px(10.0),
            color: Color::from_srgb8(0xe0, 0xe0, 0xe0),
            corner_style: CornerStyle::empty(),
            dash_array: None,
            #[cfg(feature = "gradient")]
            gradient: GradientStops::new(),
        }
    }
}

impl AxisLineStyle {
    pub fn with_thickness(mut self, thickness: impl Into<Length>) -> Self {
        self.thickness = thickness.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_corner_style(mut self, corner_style: CornerStyle) -> Self {
        self.corner_style = corner_style;
        self
    }

    pub fn with_dash_array(mut self, dash_array: DashArray) -> Self {
        self.dash_array = Some(dash_array);
        self
    }

    #[cfg(feature = "gradient")]
    pub fn with_gradient(mut self, gradient: GradientStops) -> Self {
        self.gradient = gradient;
        self
    }
}

/// The appearance of major or minor ticks.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickStyle {
    pub length: Length,
    pub thickness: f32,
    pub color: Color,
    /// Alternating dash and gap lengths. Empty draws solid ticks.
    pub dash: Vec<f32>,
}

impl TickStyle {
    pub fn major() -> Self {
        Self {
            length: Length::px(7.0),
            thickness: 1.5,
            color: Color::from_srgb8(0x61, 0x61, 0x61),
            dash: Vec::new(),
        }
    }

    pub fn minor() -> Self {
        Self {
            length: Length::px(4.0),
            thickness: 1.0,
            ..Self::major()
        }
    }

    pub fn with_length(mut self, length: impl Into<Length>) -> Self {
        self.length = length.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }
}

/// The appearance of axis labels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelStyle {
    /// `None` uses the painter's default family.
    pub font_family: Option<String>,
    pub font_size: f32,
    pub bold: bool,
    pub color: Color,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: 12.0,
            bold: false,
            color: Color::from_srgb8(0x42, 0x42, 0x42),
        }
    }
}

impl LabelStyle {
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }
}
