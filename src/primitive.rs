use gaugevg_path::{Fill, Path, Stroke};

use crate::math::PointF64;
use crate::painter::Painter;
use crate::style::LabelStyle;

/// A filled closed path.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPrimitive {
    pub path: Path,
    pub fill: Fill,
}

/// A stroked line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePrimitive {
    pub from: PointF64,
    pub to: PointF64,
    pub stroke: Stroke,
}

/// A single line of text centered on `position`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub position: PointF64,
    pub rotation: f64,
    pub style: LabelStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Fill(FillPrimitive),
    Line(LinePrimitive),
    Text(TextPrimitive),
}

impl From<FillPrimitive> for Primitive {
    fn from(p: FillPrimitive) -> Self {
        Primitive::Fill(p)
    }
}

impl From<LinePrimitive> for Primitive {
    fn from(p: LinePrimitive) -> Self {
        Primitive::Line(p)
    }
}

impl From<TextPrimitive> for Primitive {
    fn from(p: TextPrimitive) -> Self {
        Primitive::Text(p)
    }
}

/// A [`Painter`] that records what it is asked to draw.
///
/// Useful to hand the output of an axis to a renderer that batches its own
/// draw calls, or to inspect it in tests.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PrimitiveRecorder {
    primitives: Vec<Primitive>,
}

impl PrimitiveRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn into_primitives(self) -> Vec<Primitive> {
        self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    pub fn fills(&self) -> impl Iterator<Item = &FillPrimitive> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Fill(fill) => Some(fill),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text(text) => Some(text),
            _ => None,
        })
    }
}

impl Painter for PrimitiveRecorder {
    fn fill_path(&mut self, path: &Path, fill: &Fill) {
        self.add(FillPrimitive {
            path: path.clone(),
            fill: fill.clone(),
        });
    }

    fn stroke_line(&mut self, from: PointF64, to: PointF64, stroke: &Stroke) {
        self.add(LinePrimitive {
            from,
            to,
            stroke: stroke.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, position: PointF64, rotation: f64, style: &LabelStyle) {
        self.add(TextPrimitive {
            text: text.to_string(),
            position,
            rotation,
            style: style.clone(),
        });
    }
}
