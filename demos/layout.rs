use gaugevg::color::Color;
use gaugevg::math::size;
use gaugevg::{
    AxisConfig, AxisLineStyle, CornerStyle, LabelHooks, Primitive, PrimitiveRecorder, RadialAxis,
    RangeSpec,
};

fn main() {
    env_logger::init();

    let config = AxisConfig::new()
        .with_range(0.0, 160.0)
        .with_angles(150.0, 390.0)
        .with_scale_to_fit(true)
        .with_axis_line_style(
            AxisLineStyle::default()
                .with_thickness(8.0)
                .with_corner_style(CornerStyle::BOTH_CURVE),
        )
        .with_ranges([
            RangeSpec::new(0.0, 100.0, Color::from_srgb8(80, 200, 120)).with_width(6.0),
            RangeSpec::new(100.0, 160.0, Color::from_srgb8(230, 80, 60))
                .with_widths(6.0, 14.0),
        ]);

    let mut axis = RadialAxis::new(config);
    axis.set_label_hooks(LabelHooks::new().with_formatter(|value, _| format!("{value} km/h")));

    let layout = axis.layout(size(320.0, 240.0));
    println!(
        "center = ({:.2}, {:.2}), radius = {:.2}, interval = {}",
        layout.geometry.center.x, layout.geometry.center.y, layout.geometry.radius, layout.interval
    );
    for issue in &layout.issues {
        println!("issue: {issue}");
    }

    let mut recorder = PrimitiveRecorder::new();
    axis.draw(&mut recorder);

    for primitive in recorder.primitives() {
        match primitive {
            Primitive::Fill(fill) => println!("fill  {:?}", fill.fill),
            Primitive::Line(line) => println!(
                "line  ({:.1}, {:.1}) -> ({:.1}, {:.1})",
                line.from.x, line.from.y, line.to.x, line.to.y
            ),
            Primitive::Text(text) => println!(
                "text  {:>10} at ({:.1}, {:.1}) rotated {:.1}",
                text.text, text.position.x, text.position.y, text.rotation
            ),
        }
    }

    axis.play(1.0);
    let mut frames = 0;
    while axis.tick(1.0 / 60.0) {
        frames += 1;
    }
    println!("reveal animation finished after {frames} frames");
}
