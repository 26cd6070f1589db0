//! Line chart of a cumulative citation series.
//!
//! `.svg` paths use the SVG backend. Every other path is rendered into an
//! RGB buffer and encoded as PNG, whatever its extension.
//!
//! Text is rendered with a TrueType font loaded at runtime. Without one the
//! chart is still written, minus caption and axis labels.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::{Datelike, NaiveDate};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;
use tracing::{debug, info, warn};

use crate::error::{ReportError, ReportResult};
use crate::models::Granularity;
use crate::series::TimeSeries;

/// Font family the loaded font is registered under.
const FONT_FAMILY: &str = "sans-serif";

/// Fonts tried when no font path is given.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Words of the paper title kept in the caption.
const TITLE_WORDS: usize = 4;

const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Last font request and whether it produced a usable font.
static FONT_STATE: Mutex<Option<FontState>> = Mutex::new(None);

#[derive(Debug)]
struct FontState {
    requested: Option<PathBuf>,
    ready: bool,
}

/// Chart rendering options.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// Caption drawn above the plot.
    pub caption: String,

    /// TrueType font for text (falls back to common system fonts).
    pub font: Option<PathBuf>,

    /// Image size in pixels.
    pub size: (u32, u32),
}

impl ChartOptions {
    /// Options with the given caption and default size.
    #[must_use]
    pub fn new(caption: impl Into<String>) -> Self {
        Self { caption: caption.into(), font: None, size: (1200, 750) }
    }

    /// Use `font` for chart text.
    #[must_use]
    pub fn with_font(mut self, font: Option<PathBuf>) -> Self {
        self.font = font;
        self
    }
}

/// First four words of `title` followed by an ellipsis.
#[must_use]
pub fn short_title(title: &str) -> String {
    let words: Vec<&str> = title.split_whitespace().take(TITLE_WORDS).collect();
    format!("{} …", words.join(" "))
}

/// Caption for a paper's chart.
#[must_use]
pub fn chart_caption(title: &str, granularity: Granularity) -> String {
    format!("Cumulative citations over time: {}  ({})", short_title(title), granularity.letter())
}

/// Title shown in the caption: the fetched title, or `arXiv:{id}` when it
/// is missing or blank.
#[must_use]
pub fn caption_title(title: Option<&str>, identifier: &str) -> String {
    title
        .filter(|t| !t.trim().is_empty())
        .map_or_else(|| format!("arXiv:{identifier}"), str::to_string)
}

/// Default chart path for a paper identifier, e.g. `1706.03762_citations.png`.
#[must_use]
pub fn default_chart_path(identifier: &str) -> PathBuf {
    PathBuf::from(format!("{}_citations.png", identifier.replace(&['/', ':'][..], "_")))
}

/// Render `series` to `path`.
pub fn render_chart(series: &TimeSeries, path: &Path, options: &ChartOptions) -> ReportResult<()> {
    let with_text = ensure_font(options.font.as_deref());
    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

    info!("Saving plot to {}", path.display());

    if is_svg {
        let root = SVGBackend::new(path, options.size).into_drawing_area();
        draw(&root, series, options, with_text)?;
        root.present().map_err(ReportError::chart)?;
    } else {
        let (width, height) = options.size;
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, options.size).into_drawing_area();
            draw(&root, series, options, with_text)?;
            root.present().map_err(ReportError::chart)?;
        }
        image::save_buffer_with_format(
            path,
            &buffer,
            width,
            height,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
        .map_err(ReportError::chart)?;
    }

    Ok(())
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &TimeSeries,
    options: &ChartOptions,
    with_text: bool,
) -> ReportResult<()> {
    root.fill(&WHITE).map_err(ReportError::chart)?;

    let points: Vec<(i32, u32)> = series
        .iter()
        .map(|p| (p.bucket_start.num_days_from_ce(), u32::try_from(p.cumulative).unwrap_or(u32::MAX)))
        .collect();

    let x_min = points.first().map_or(0, |p| p.0);
    let x_max = points.last().map_or(0, |p| p.0);
    let pad = ((x_max - x_min) / 20).max(1);
    let total = u32::try_from(series.total()).unwrap_or(u32::MAX);
    let y_max = total.saturating_add(total / 10).saturating_add(1);

    let mut builder = ChartBuilder::on(root);
    builder.margin(20);
    if with_text {
        builder
            .caption(&options.caption, (FONT_FAMILY, 22).into_font())
            .x_label_area_size(50)
            .y_label_area_size(70);
    }

    let mut chart = builder
        .build_cartesian_2d((x_min - pad)..(x_max + pad), 0u32..y_max)
        .map_err(ReportError::chart)?;

    if with_text {
        let label_format = label_format(series.granularity());
        chart
            .configure_mesh()
            .x_desc("Date")
            .y_desc("Cumulative Citations")
            .x_labels(8)
            .x_label_formatter(&|day: &i32| format_day(*day, label_format))
            .draw()
            .map_err(ReportError::chart)?;
    }

    chart
        .draw_series(LineSeries::new(points.iter().copied(), LINE_COLOR.stroke_width(2)))
        .map_err(ReportError::chart)?;
    chart
        .draw_series(points.iter().map(|&(x, y)| Circle::new((x, y), 4, LINE_COLOR.filled())))
        .map_err(ReportError::chart)?;

    Ok(())
}

const fn label_format(granularity: Granularity) -> &'static str {
    match granularity {
        Granularity::Day | Granularity::Week => "%Y-%m-%d",
        Granularity::Month | Granularity::Quarter => "%Y-%m",
        Granularity::Year => "%Y",
    }
}

fn format_day(day: i32, format: &str) -> String {
    NaiveDate::from_num_days_from_ce_opt(day)
        .map(|d| d.format(format).to_string())
        .unwrap_or_default()
}

/// Register the font for `explicit`, reusing the previous registration when
/// the request is unchanged; false if none could be loaded.
fn ensure_font(explicit: Option<&Path>) -> bool {
    let mut state = FONT_STATE.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(current) = state.as_ref() {
        if current.requested.as_deref() == explicit {
            return current.ready;
        }
    }

    let ready = load_font(explicit);
    *state = Some(FontState { requested: explicit.map(Path::to_path_buf), ready });
    ready
}

fn load_font(explicit: Option<&Path>) -> bool {
    let candidates = explicit
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_FONTS.iter().map(PathBuf::from));

    for path in candidates {
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                if Some(path.as_path()) == explicit {
                    warn!(path = %path.display(), error = %e, "Could not read font");
                }
                continue;
            }
        };

        // plotters keeps registered fonts for the life of the process
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        match plotters::style::register_font(FONT_FAMILY, FontStyle::Normal, bytes) {
            Ok(()) => {
                debug!(path = %path.display(), "Loaded chart font");
                return true;
            }
            Err(_) => warn!(path = %path.display(), "Not a usable TrueType font"),
        }
    }

    warn!("No font available; chart is drawn without caption and labels");
    false
}
