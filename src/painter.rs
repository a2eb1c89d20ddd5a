//! The drawing and text measuring services an axis is rendered with.

use rustc_hash::FxHashMap;

use gaugevg_path::{Fill, Path, Stroke};

use crate::math::{PointF64, SizeF64};
use crate::style::LabelStyle;

/// Measures the size of a label before it is placed.
pub trait TextMeasurer {
    fn measure(&mut self, text: &str, style: &LabelStyle) -> SizeF64;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &mut T {
    fn measure(&mut self, text: &str, style: &LabelStyle) -> SizeF64 {
        (**self).measure(text, style)
    }
}

/// Rasterizes the geometry produced by an axis.
pub trait Painter {
    fn fill_path(&mut self, path: &Path, fill: &Fill);

    fn stroke_line(&mut self, from: PointF64, to: PointF64, stroke: &Stroke);

    /// Draws `text` centered on `position`, rotated clockwise by `rotation`
    /// degrees.
    fn draw_text(&mut self, text: &str, position: PointF64, rotation: f64, style: &LabelStyle);
}

/// A measurer for fixed-width fonts, sized relative to the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    /// Width of one character in ems.
    pub advance: f64,
    /// Height of a line in ems.
    pub line_height: f64,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
        }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&mut self, text: &str, style: &LabelStyle) -> SizeF64 {
        let font_size = f64::from(style.font_size.max(0.0));
        let chars = text.chars().count() as f64;
        SizeF64::new(
            chars * self.advance * font_size,
            if text.is_empty() {
                0.0
            } else {
                self.line_height * font_size
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MeasureKey {
    text: String,
    font_family: Option<String>,
    font_size: u32,
    bold: bool,
}

impl MeasureKey {
    fn new(text: &str, style: &LabelStyle) -> Self {
        Self {
            text: text.to_string(),
            font_family: style.font_family.clone(),
            font_size: style.font_size.to_bits(),
            bold: style.bold,
        }
    }
}

/// Serves repeated measurements of the same text and font from memory.
///
/// Label texts rarely change between layout passes, so the cache is kept
/// across passes and only cleared explicitly.
#[derive(Debug, Default)]
pub struct MeasureCache<M> {
    measurer: M,
    entries: FxHashMap<MeasureKey, SizeF64>,
}

impl<M: TextMeasurer> MeasureCache<M> {
    pub fn new(measurer: M) -> Self {
        Self {
            measurer,
            entries: FxHashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn inner(&self) -> &M {
        &self.measurer
    }
}

impl<M: TextMeasurer> TextMeasurer for MeasureCache<M> {
    fn measure(&mut self, text: &str, style: &LabelStyle) -> SizeF64 {
        let key = MeasureKey::new(text, style);
        if let Some(size) = self.entries.get(&key) {
            return *size;
        }

        let size = self.measurer.measure(text, style);
        self.entries.insert(key, size);
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counting(usize);

    impl TextMeasurer for Counting {
        fn measure(&mut self, text: &str, _style: &LabelStyle) -> SizeF64 {
            self.0 += 1;
            SizeF64::new(text.len() as f64, 1.0)
        }
    }

    #[test]
    fn monospace_scales_with_font_size() {
        let mut measurer = MonospaceMeasurer::default();
        let size = measurer.measure("100", &LabelStyle::default().with_font_size(10.0));
        assert!((size.width - 18.0).abs() < 1e-9);
        assert!((size.height - 12.0).abs() < 1e-9);
        assert_eq!(measurer.measure("", &LabelStyle::default()), SizeF64::zero());
    }

    #[test]
    fn cache_measures_once_per_text_and_font() {
        let mut cache = MeasureCache::new(Counting(0));
        let style = LabelStyle::default();

        cache.measure("20", &style);
        cache.measure("20", &style);
        cache.measure("40", &style);
        assert_eq!(cache.inner().0, 2);

        cache.measure("20", &style.clone().with_font_size(20.0));
        assert_eq!(cache.inner().0, 3);
        assert_eq!(cache.len(), 3);

        cache.clear();
        assert!(cache.is_empty());
    }
}
