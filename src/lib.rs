mod axis;
mod primitive;

pub mod animation;
pub mod axis_line;
pub mod center_fit;
pub mod config;
pub mod error;
pub mod hit;
pub mod interval;
pub mod layout;
pub mod painter;
pub mod placement;
pub mod range;
pub mod range_arc;
pub mod scale;
pub mod style;

pub use animation::{AnimationPlan, RevealAnimator, RevealPhase, RevealProgress};
pub use axis::RadialAxis;
pub use axis_line::{ArcSegment, ArcShape};
pub use config::{AxisConfig, PointerSpec, RadiusFactor, RangeSpec};
pub use error::ConfigIssue;
pub use layout::{recompute, AxisLayout, Geometry, LabelCreated, LabelHooks};
pub use painter::{MeasureCache, MonospaceMeasurer, Painter, TextMeasurer};
pub use placement::{LabelSpec, TickSpec};
pub use primitive::{FillPrimitive, LinePrimitive, Primitive, PrimitiveRecorder, TextPrimitive};
pub use scale::Scale;
pub use style::{
    AxisLineStyle, CornerStyle, DashArray, LabelPosition, LabelStyle, Length, SizeUnit,
    TickPosition, TickStyle,
};

pub use gaugevg_core::*;

pub use gaugevg_path as path;
