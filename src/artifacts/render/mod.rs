//! Terminal presentation of comparisons and analyses
//!
//! - `theme`: named color palettes
//! - `diff_view`: two-pane and stacked rendering of a `DiffResult`
//! - `analysis_view`: rendering of an analysis outcome
//!
//! Renderers only read what they are given. `ViewOptions` configures them and
//! is never passed to the diff functions.

pub mod analysis_view;
pub mod diff_view;
pub mod theme;

use crate::ViewMode;
use crate::artifacts::render::theme::Theme;

pub const DEFAULT_WIDTH: usize = 120;
pub const MIN_WIDTH: usize = 40;

#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub mode: ViewMode,
    pub width: usize,
    pub color: bool,
    pub theme: Theme,
    pub legend: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            mode: ViewMode::SideBySide,
            width: DEFAULT_WIDTH,
            color: false,
            theme: Theme::default(),
            legend: true,
        }
    }
}
