use super::{GraphSaver, GraphicsError, Overlays, TraceWindow};
use plotters::{
    chart::ChartBuilder,
    prelude::{BitMapBackend, Circle, IntoDrawingArea},
    series::{LineSeries, PointSeries},
    style::{BLUE, CYAN, GREEN, RED, ShapeStyle, WHITE},
};
use std::path::Path;

#[derive(Default)]
pub(crate) struct PngSaver {}

impl GraphSaver for PngSaver {
    fn save_window(
        window: &TraceWindow,
        overlays: &Overlays,
        path: &Path,
        size: (u32, u32),
    ) -> Result<(), GraphicsError> {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE).map_err(GraphicsError::drawing)?;

        let bounds = window.bounds();
        let in_window = window.time_bound();

        let mut chart = ChartBuilder::on(&root)
            .margin(5)
            .build_cartesian_2d(
                bounds.time.min..bounds.time.max,
                bounds.force.min..bounds.force.max,
            )
            .map_err(GraphicsError::drawing)?;

        chart
            .configure_mesh()
            .draw()
            .map_err(GraphicsError::drawing)?;

        chart
            .draw_series(LineSeries::new(window.points(), &BLUE))
            .map_err(GraphicsError::drawing)?;

        chart
            .draw_series(LineSeries::new(
                [
                    (bounds.time.min, overlays.baseline),
                    (bounds.time.max, overlays.baseline),
                ],
                &RED,
            ))
            .map_err(GraphicsError::drawing)?;

        for boundary in overlays
            .boundaries
            .iter()
            .copied()
            .filter(|&boundary| in_window.contains(boundary))
        {
            chart
                .draw_series(LineSeries::new(
                    [
                        (boundary, bounds.force.min),
                        (boundary, bounds.force.max),
                    ],
                    &GREEN,
                ))
                .map_err(GraphicsError::drawing)?;
        }

        let extrema = overlays
            .minimums
            .iter()
            .chain(overlays.maximums.iter())
            .filter(|sample| in_window.contains(sample.time))
            .map(|sample| (sample.time, sample.force));
        let markers: PointSeries<_, _, Circle<_, _>, _> =
            PointSeries::new(extrema, 4, ShapeStyle::from(&RED).filled());
        chart
            .draw_series(markers)
            .map_err(GraphicsError::drawing)?;

        let tail = overlays
            .tail_points
            .iter()
            .filter(|point| in_window.contains(point.time))
            .map(|point| (point.time, point.value));
        let markers: PointSeries<_, _, Circle<_, _>, _> =
            PointSeries::new(tail, 3, ShapeStyle::from(&CYAN).filled());
        chart
            .draw_series(markers)
            .map_err(GraphicsError::drawing)?;

        root.present().map_err(GraphicsError::drawing)?;
        Ok(())
    }
}
