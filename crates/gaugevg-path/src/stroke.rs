use gaugevg_core::color::Color;

/// The shape used at the end of open stroked lines.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineCap {
    /// The stroke ends exactly at the end point.
    #[default]
    Butt,
    /// The stroke is extended by half its width with a square end.
    Square,
    /// The stroke is extended by a half circle.
    Round,
}

/// The style of a stroked line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stroke {
    /// The color of the stroke.
    pub color: Color,
    /// The width of the stroke in logical points.
    pub width: f32,
    /// The shape at the ends of the stroke.
    pub line_cap: LineCap,
    /// Alternating dash and gap lengths in logical points.
    ///
    /// An empty list draws a solid line.
    pub dash: Vec<f32>,
}

impl Stroke {
    pub fn new(color: impl Into<Color>, width: f32) -> Self {
        Self {
            color: color.into(),
            width,
            ..Default::default()
        }
    }

    pub fn with_line_cap(mut self, line_cap: LineCap) -> Self {
        self.line_cap = line_cap;
        self
    }

    pub fn with_dash(mut self, dash: impl Into<Vec<f32>>) -> Self {
        self.dash = dash.into();
        self
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            line_cap: LineCap::default(),
            dash: Vec::new(),
        }
    }
}
