use gaugevg_core::color::{Color, RGB8, RGBA8};

#[cfg(feature = "gradient")]
use gaugevg_core::gradient::LinearGradient;

/// The style used to fill geometry.
///
/// Paths are filled with the non-zero rule. Every arc outline is a single
/// closed sub-path that does not cross itself.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fill {
    /// The color or gradient of the fill.
    ///
    /// By default, it is set to [`FillStyle::Solid`] with [`Color::BLACK`].
    pub style: FillStyle,
}

impl Fill {
    /// Adjust the opacity of the fill by a multiplier.
    pub fn mul_alpha(mut self, alpha_multiplier: f32) -> Self {
        self.style = match self.style {
            FillStyle::Solid(color) => FillStyle::Solid(color.mul_alpha(alpha_multiplier)),
            #[cfg(feature = "gradient")]
            FillStyle::Gradient(gradient) => {
                FillStyle::Gradient(gradient.mul_alpha(alpha_multiplier))
            }
        };
        self
    }
}

impl Default for Fill {
    fn default() -> Self {
        Self {
            style: FillStyle::Solid(Color::BLACK),
        }
    }
}

impl From<Color> for Fill {
    fn from(color: Color) -> Fill {
        Fill {
            style: FillStyle::Solid(color),
        }
    }
}

impl From<RGB8> for Fill {
    fn from(color: RGB8) -> Fill {
        Fill {
            style: FillStyle::Solid(color.into()),
        }
    }
}

impl From<RGBA8> for Fill {
    fn from(color: RGBA8) -> Fill {
        Fill {
            style: FillStyle::Solid(color.into()),
        }
    }
}

#[cfg(feature = "gradient")]
impl From<LinearGradient> for Fill {
    fn from(gradient: LinearGradient) -> Self {
        Fill {
            style: FillStyle::Gradient(gradient),
        }
    }
}

/// The coloring style of some drawing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillStyle {
    /// A solid [`Color`].
    Solid(Color),

    #[cfg(feature = "gradient")]
    /// A two-stop [`LinearGradient`].
    Gradient(LinearGradient),
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

#[cfg(feature = "gradient")]
impl From<LinearGradient> for FillStyle {
    fn from(gradient: LinearGradient) -> Self {
        Self::Gradient(gradient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_become_solid_fills() {
        let fill = Fill::from(Color::WHITE).mul_alpha(0.5);
        assert_eq!(fill.style, FillStyle::Solid(Color::WHITE.mul_alpha(0.5)));
        assert_eq!(Fill::default().style, FillStyle::Solid(Color::BLACK));
    }
}
