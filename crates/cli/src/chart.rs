use calisthenics_domain::{MuscleCount, VolumePoint};
use chrono::{Days, NaiveDate};
use plotters::{
    chart::ChartBuilder,
    prelude::{
        DrawingAreaErrorKind, IntoDrawingArea, IntoSegmentedCoord, SVGBackend, SegmentValue,
    },
    series::{AreaSeries, Histogram, LineSeries},
    style::{Color, IntoFont, Palette, Palette99, RGBColor, TextStyle, WHITE},
};

use crate::settings::Theme;

pub const COLOR_VOLUME: usize = 3;

pub const OPACITY_LINE: f64 = 0.9;
pub const OPACITY_AREA: f64 = 0.3;
pub const OPACITY_BAR: f64 = 0.8;

pub const WIDTH_LINE: u32 = 2;

pub const FONT: (&str, u32) = ("Roboto", 11);

pub const SIZE: (u32, u32) = (640, 240);

pub type ChartResult = Result<Option<String>, DrawingAreaErrorKind<std::io::Error>>;

#[derive(Clone, Copy, Default)]
struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    fn max_with_margin(self) -> f64 {
        if (self.max - self.min).abs() > f64::EPSILON {
            return self.max + (self.max - self.min) * 0.1;
        }
        self.max + 0.1
    }
}

/// Plot the training volume of every day as an area with a border line.
///
/// Returns `None` if there is nothing to show.
pub fn plot_volume(points: &[VolumePoint], theme: Theme) -> ChartResult {
    if points.iter().all(|p| p.volume == 0.0) {
        return Ok(None);
    }

    let first = points.iter().map(|p| p.date).min().unwrap_or(NaiveDate::MIN);
    let mut last = points.iter().map(|p| p.date).max().unwrap_or(NaiveDate::MIN);
    if first == last {
        last = last.checked_add_days(Days::new(1)).unwrap_or(last);
    }
    let bounds = Bounds {
        min: 0.0,
        max: points.iter().map(|p| p.volume).fold(0.0, f64::max),
    };

    let mut values = points.iter().map(|p| (p.date, p.volume)).collect::<Vec<_>>();
    values.sort_by_key(|e| e.0);

    let mut result = String::new();

    {
        let root = SVGBackend::with_string(&mut result, SIZE).into_drawing_area();
        let (color, background_color) = colors(theme);

        root.fill(&background_color)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(10f32)
            .x_label_area_size(30f32)
            .y_label_area_size(40f32)
            .build_cartesian_2d(first..last, bounds.min..bounds.max_with_margin())?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .set_all_tick_mark_size(3u32)
            .axis_style(color.mix(0.3))
            .bold_line_style(color.mix(0.05))
            .light_line_style(color.mix(0.0))
            .label_style(TextStyle::from(FONT.into_font()).color(&color))
            .x_labels(4)
            .y_labels(6)
            .draw()?;

        chart.draw_series(AreaSeries::new(
            values.iter().copied(),
            0.0,
            Palette99::pick(COLOR_VOLUME).mix(OPACITY_AREA),
        ))?;
        chart.draw_series(LineSeries::new(
            values.iter().copied(),
            Palette99::pick(COLOR_VOLUME)
                .mix(OPACITY_LINE)
                .stroke_width(WIDTH_LINE),
        ))?;

        root.present()?;
    }

    Ok(Some(result))
}

/// Plot the number of exercises per muscle as bars in the color of each muscle.
///
/// Returns `None` if there is nothing to show.
pub fn plot_muscle_distribution(counts: &[MuscleCount], theme: Theme) -> ChartResult {
    if counts.is_empty() {
        return Ok(None);
    }

    let n = u32::try_from(counts.len()).unwrap_or(u32::MAX);
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);

    let mut result = String::new();

    {
        let root = SVGBackend::with_string(&mut result, SIZE).into_drawing_area();
        let (color, background_color) = colors(theme);

        root.fill(&background_color)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(10f32)
            .x_label_area_size(40f32)
            .y_label_area_size(40f32)
            .build_cartesian_2d((0u32..n).into_segmented(), 0u32..max + 1)?;

        let label = |v: &SegmentValue<u32>| match v {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => counts
                .get(*i as usize)
                .map(|c| c.muscle.clone())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .set_all_tick_mark_size(3u32)
            .axis_style(color.mix(0.3))
            .bold_line_style(color.mix(0.05))
            .light_line_style(color.mix(0.0))
            .label_style(TextStyle::from(FONT.into_font()).color(&color))
            .x_labels(counts.len())
            .x_label_formatter(&label)
            .y_labels(6)
            .draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style_func(|v, _| {
                    let hex = match v {
                        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                            counts.get(*i as usize).map_or("", |c| c.color)
                        }
                        SegmentValue::Last => "",
                    };
                    hex_color(hex).mix(OPACITY_BAR).filled()
                })
                .margin(4)
                .data((0u32..).zip(counts.iter().map(|c| c.count))),
        )?;

        root.present()?;
    }

    Ok(Some(result))
}

fn colors(theme: Theme) -> (RGBColor, RGBColor) {
    let dark = RGBColor(20, 22, 26);
    match theme {
        Theme::Light => (dark, WHITE),
        Theme::Dark => (WHITE, dark),
    }
}

/// Parse a `#rrggbb` color, falling back to grey.
fn hex_color(hex: &str) -> RGBColor {
    let channel = |range: std::ops::Range<usize>| {
        hex.strip_prefix('#')
            .filter(|h| h.len() == 6)
            .and_then(|h| h.get(range))
            .and_then(|c| u8::from_str_radix(c, 16).ok())
    };
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => RGBColor(r, g, b),
        _ => RGBColor(156, 163, 175),
    }
}
