use std::cell::RefCell;

use image::RgbImage;

use super::*;
use crate::distribution::bin;
use crate::error::NumdistError;
use crate::render::style::Color;

/// Records every label instead of drawing it.
#[derive(Default)]
struct RecordingPainter {
    labels: RefCell<Vec<(String, Rect, Align)>>,
}

impl TextPainter for RecordingPainter {
    fn measure(&self, text: &str, _size: u32) -> (u32, u32) {
        (u32::try_from(text.len()).unwrap_or(u32::MAX), 1)
    }

    fn draw_text<S: Surface + ?Sized>(&self, _surface: &mut S, text: &str, rect: Rect, style: TextStyle) {
        self.labels
            .borrow_mut()
            .push((text.to_string(), rect, style.align));
    }
}

impl RecordingPainter {
    fn texts(&self, align: Align) -> Vec<String> {
        self.labels
            .borrow()
            .iter()
            .filter(|(_, _, a)| *a == align)
            .map(|(t, _, _)| t.clone())
            .collect()
    }
}

fn one_to_ten() -> Distribution<f64> {
    let items: Vec<f64> = (1..=10).map(f64::from).collect();
    bin(items, |x| *x, 1.0, 10.0, 3).unwrap()
}

fn pixel(surface: &RgbImage, x: u32, y: u32) -> Color {
    Color::from(*surface.get_pixel(x, y))
}

fn recording_renderer(options: RenderOptions) -> DistributionRenderer<LabConverter, RecordingPainter> {
    DistributionRenderer::with_components(options, LabConverter, RecordingPainter::default())
}

// ============================================================================
// Helpers
// ============================================================================

#[test]
fn bar_fraction_is_zero_without_items() {
    assert_eq!(bar_fraction(0, 0), 0.0);
    assert_eq!(bar_fraction(3, 4), 0.75);
    assert_eq!(bar_fraction(4, 4), 1.0);
}

#[test]
fn axis_value_modes() {
    assert_eq!(axis_value(1.0, 4, 10, false), 0.4);
    assert_eq!(axis_value(1.0, 4, 10, true), 4.0);
    assert_eq!(axis_value(0.5, 0, 0, false), 0.0);
}

#[test]
fn column_bucket_is_nearest_neighbour() {
    assert_eq!(column_bucket(0, 797, 3), 0);
    assert_eq!(column_bucket(265, 797, 3), 0);
    assert_eq!(column_bucket(266, 797, 3), 1);
    assert_eq!(column_bucket(796, 797, 3), 2);
    assert_eq!(column_bucket(5, 10, 1), 0);
}

// ============================================================================
// Canvas
// ============================================================================

#[test]
fn renders_configured_size() {
    let surface: RgbImage = DistributionRenderer::default().render(&one_to_ten()).unwrap();
    assert_eq!(surface.dimensions(), (900, 400));
}

#[test]
fn too_small_canvas_is_rejected() {
    let renderer = DistributionRenderer::new(RenderOptions::default().with_size(300, 400));
    let result: Result<RgbImage> = renderer.render(&one_to_ten());
    assert!(matches!(result, Err(NumdistError::InvalidResolution { .. })));
}

#[test]
fn borders_show_frame_and_padding_shows_background() {
    let surface: RgbImage = DistributionRenderer::default().render(&one_to_ten()).unwrap();
    assert_eq!(pixel(&surface, 0, 0), Color::BLACK);
    assert_eq!(pixel(&surface, 61, 100), Color::BLACK);
    assert_eq!(pixel(&surface, 899, 200), Color::BLACK);
    assert_eq!(pixel(&surface, 400, 348), Color::BLACK);
    assert_eq!(pixel(&surface, 5, 5), Color::WHITE);
    assert_eq!(pixel(&surface, 400, 8), Color::WHITE);
    assert_eq!(pixel(&surface, 880, 100), Color::WHITE);
}

#[test]
fn render_into_uses_surface_size() {
    let mut surface = RgbImage::new(500, 300);
    DistributionRenderer::default()
        .render_into(&one_to_ten(), &mut surface)
        .unwrap();
    assert_eq!(pixel(&surface, 499, 299), Color::BLACK);
    assert_eq!(pixel(&surface, 480, 100), Color::WHITE);
}

// ============================================================================
// Bars
// ============================================================================

#[test]
fn tallest_bucket_fills_bar_box_height() {
    let dist = one_to_ten();
    let surface: RgbImage = DistributionRenderer::default().render(&dist).unwrap();
    let colors = Gradient::default().colors(3, &LabConverter).unwrap();

    // Last bucket (4 items) is the tallest.
    let x = 850;
    assert_eq!(pixel(&surface, x, 16), colors[2]);
    assert_eq!(pixel(&surface, x, 347), colors[2]);
}

#[test]
fn shorter_bucket_is_proportional() {
    let dist = one_to_ten();
    let surface: RgbImage = DistributionRenderer::default().render(&dist).unwrap();
    let colors = Gradient::default().colors(3, &LabConverter).unwrap();

    // First bucket has 3 of 4: rows with j/332 <= 0.75 are painted (j <= 249).
    let x = 70;
    let bottom = 347;
    assert_eq!(pixel(&surface, x, bottom), colors[0]);
    assert_eq!(pixel(&surface, x, bottom - 249), colors[0]);
    assert_eq!(pixel(&surface, x, bottom - 250), Color::WHITE);
    assert_eq!(pixel(&surface, x, 16), Color::WHITE);
}

#[test]
fn buckets_use_gradient_in_order() {
    let dist = one_to_ten();
    let surface: RgbImage = DistributionRenderer::default().render(&dist).unwrap();
    let colors = Gradient::default().colors(3, &LabConverter).unwrap();

    let bottom = 347;
    assert_eq!(pixel(&surface, 62, bottom), colors[0]);
    assert_eq!(pixel(&surface, 62 + 266, bottom), colors[1]);
    assert_eq!(pixel(&surface, 858, bottom), colors[2]);
}

#[test]
fn empty_single_bucket_does_not_divide_by_zero() {
    let dist = bin(Vec::<f64>::new(), |x| *x, 0.0, 1.0, 1).unwrap();
    assert_eq!(dist.max_count(), 0);

    let surface: RgbImage = DistributionRenderer::default().render(&dist).unwrap();
    let colors = Gradient::default().colors(1, &LabConverter).unwrap();
    assert_eq!(pixel(&surface, 400, 347), colors[0]);
    assert_eq!(pixel(&surface, 400, 346), Color::WHITE);
}

// ============================================================================
// Axes
// ============================================================================

#[test]
fn value_axis_defaults_to_fraction_of_total() {
    let renderer = recording_renderer(RenderOptions::default());
    let _: RgbImage = renderer.render(&one_to_ten()).unwrap();
    assert_eq!(
        renderer.painter.texts(Align::Left),
        vec!["0.4", "0.32", "0.24", "0.16", "0.08"]
    );
}

#[test]
fn value_axis_absolute_counts() {
    let renderer = recording_renderer(RenderOptions::default().with_absolute_axis(true));
    let _: RgbImage = renderer.render(&one_to_ten()).unwrap();
    assert_eq!(
        renderer.painter.texts(Align::Left),
        vec!["4", "3.2", "2.4", "1.6", "0.8"]
    );
}

#[test]
fn value_axis_with_no_items_labels_zero() {
    let dist = bin(Vec::<f64>::new(), |x| *x, 0.0, 1.0, 2).unwrap();
    let renderer = recording_renderer(RenderOptions::default());
    let _: RgbImage = renderer.render(&dist).unwrap();
    assert!(renderer.painter.texts(Align::Left).iter().all(|t| t == "0"));
}

#[test]
fn gridlines_are_two_pixels_thick() {
    let surface: RgbImage = DistributionRenderer::default().render(&one_to_ten()).unwrap();
    // First gridline sits at the top of the left box (y = 16), indented 5px.
    assert_eq!(pixel(&surface, 30, 16), Color::BLACK);
    assert_eq!(pixel(&surface, 30, 17), Color::BLACK);
    assert_eq!(pixel(&surface, 30, 18), Color::WHITE);
    assert_eq!(pixel(&surface, 3, 16), Color::WHITE);
    // Second gridline: 16 + floor(0.2 * 332) = 82.
    assert_eq!(pixel(&surface, 30, 82), Color::BLACK);
}

#[test]
fn range_axis_labels_every_boundary() {
    let renderer = recording_renderer(RenderOptions::default());
    let _: RgbImage = renderer.render(&one_to_ten()).unwrap();
    assert_eq!(
        renderer.painter.texts(Align::Center),
        vec!["1", "4", "7", "10"]
    );
}

#[test]
fn range_axis_labels_alternate_rows() {
    let renderer = recording_renderer(RenderOptions::default());
    let _: RgbImage = renderer.render(&one_to_ten()).unwrap();
    let labels = renderer.painter.labels.borrow();
    let rects: Vec<Rect> = labels
        .iter()
        .filter(|(_, _, a)| *a == Align::Center)
        .map(|(_, r, _)| *r)
        .collect();

    assert_eq!(rects[0].y, 352);
    assert_eq!(rects[1].y, 368);
    assert_eq!(rects[2].y, 352);
    assert_eq!(rects[3].y, 368);

    // Centered on x = 62 + k/3 * 797.
    assert_eq!(rects[0].x, 62 - 36);
    assert_eq!(rects[1].x, 327 - 36);
    assert_eq!(rects[3].x, 859 - 36);
}

#[test]
fn custom_segment_count() {
    let mut options = RenderOptions::default().with_absolute_axis(true);
    options.axis_segments = 2;
    let renderer = recording_renderer(options);
    let _: RgbImage = renderer.render(&one_to_ten()).unwrap();
    assert_eq!(renderer.painter.texts(Align::Left), vec!["4", "2"]);
}
