extern crate plotters;
use plotters::prelude::*;

extern crate bezier_spline;
use bezier_spline::display::{control_polygon, curve_polyline, direction_ticks};
use bezier_spline::{Affine3, BezierSpline, DisplayOptions, PointN};

type P3 = PointN<f64, 3>;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // two segments, bent in the xy-plane
    let mut spline: BezierSpline<P3> = BezierSpline::new();
    spline.add_segment();
    spline.set_control_point(1, PointN::new([1.5, 2.0, 0.0]));
    spline.set_control_point(2, PointN::new([3.0, -1.5, 0.0]));
    spline.set_control_point(4, PointN::new([5.0, 1.5, 0.0]));
    spline.set_control_point(5, PointN::new([6.5, 2.5, 0.0]));

    // place the spline in the world: shifted down and turned by 15 degrees
    let placement = Affine3::translate([0.0, -1.0, 0.0]) * Affine3::rotate_z(15f64.to_radians());
    let spline = spline.with_transform(placement);

    let options = DisplayOptions {
        show_velocity: true,
        show_primitive: true,
        line_steps: 20.0,
        direction_size_scale: 0.4,
        direction_noise_scale: 0.5,
        ..DisplayOptions::default()
    };

    // project everything onto the xy-plane
    let xy = |p: P3| (p[0], p[1]);
    let steps = options.curve_steps(spline.segment_count());
    let curve: Vec<(f64, f64)> = curve_polyline(&spline, steps)
        .into_iter()
        .map(xy)
        .collect();
    let handles: Vec<(f64, f64)> = (0..spline.point_count())
        .map(|i| xy(spline.world_control_point(i)))
        .collect();

    let root = BitMapBackend::new("bezier_spline.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Bezier Spline", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-1.0f64..9.0f64, -3.0f64..5.0f64)?;

    chart.configure_mesh().draw()?;

    // draw the control points
    chart
        .draw_series(PointSeries::of_element(handles, 5, &BLUE, &|coord, size, style| {
            EmptyElement::at(coord) + Circle::new((0, 0), size, style)
        }))?
        .label("Control Points")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    // draw the control polygon
    chart
        .draw_series(
            control_polygon(&spline, &options)
                .into_iter()
                .map(|(a, b)| PathElement::new(vec![xy(a), xy(b)], BLUE.mix(0.4))),
        )?
        .label("Control Polygon")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.mix(0.4)));

    // draw the curve itself
    chart
        .draw_series(LineSeries::new(curve, &RED))?
        .label("S(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    // draw the unit tangent ticks
    chart
        .draw_series(
            direction_ticks(&spline, &options)
                .into_iter()
                .map(|(origin, tip)| PathElement::new(vec![xy(origin), xy(tip)], GREEN)),
        )?
        .label("Direction")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
