//! Plot configuration shared across visualization modules

use plotters::prelude::*;

/// Configuration for customizing timing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`: Line color for single-run plots
/// - `series_colors`: Optional colors for comparison plots (one per run)
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust,ignore
/// use lapbench_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::timings("Pointer Array, 8 threads");
/// config.line_color = BLUE;
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Kernel Timings")
    pub title: String,

    /// X-axis label (default: "Iteration")
    pub xlabel: String,

    /// Y-axis label (default: "Elapsed (ms)")
    pub ylabel: String,

    /// Line color for single-run plots (default: RED)
    pub line_color: RGBColor,

    /// Optional colors for comparison plots (one per run)
    ///
    /// If None, uses the built-in palette below.
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

/// Built-in palette for comparison plots
const DEFAULT_SERIES_COLORS: [RGBColor; 6] = [
    RED,
    BLUE,
    GREEN,
    MAGENTA,
    CYAN,
    RGBColor(255, 165, 0), // Orange
];

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Kernel Timings".to_string(),
            xlabel: "Iteration".to_string(),
            ylabel: "Elapsed (ms)".to_string(),
            line_color: RED,
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

impl PlotConfig {
    /// Create a timing-plot configuration with the given title
    ///
    /// Pass [`NO_TITLE`] to keep the default title.
    pub fn timings<T: IntoOptionalTitle>(title: T) -> Self {
        let mut config = Self::default();
        if let Some(title) = title.into_optional_title() {
            config.title = title;
        }
        config
    }

    /// Color for series `index` in a comparison plot
    ///
    /// Falls back to the built-in palette (cycling) when no custom colors
    /// are configured.
    pub fn get_series_color(&self, index: usize) -> RGBColor {
        match &self.series_colors {
            Some(colors) if !colors.is_empty() => colors[index % colors.len()],
            _ => DEFAULT_SERIES_COLORS[index % DEFAULT_SERIES_COLORS.len()],
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// # Example
///
/// ```rust,ignore
/// let config = PlotConfig::timings(NO_TITLE);
/// ```
pub const NO_TITLE: Option<String> = None;

// =================================================================================================
// Tests
// =================================================================================================
