use crate::color::ColorMap;
use crate::data::filter::Scope;
use crate::data::model::Metric;
use crate::data::parser::embedded_dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The selector state, independent of rendering.  The dataset itself is
/// process-wide and never lives here.
pub struct AppState {
    /// "Select All Industries" toggle.  On by default.
    pub select_all: bool,

    /// Industry shown when the toggle is off.
    pub selected_industry: String,

    /// Which margin column is charted.
    pub metric: Metric,

    /// Fixed colour assignment, one colour per industry.
    pub color_map: ColorMap,
}

impl Default for AppState {
    fn default() -> Self {
        let names = embedded_dataset().industry_names();
        Self {
            select_all: true,
            selected_industry: names.first().cloned().unwrap_or_default(),
            metric: Metric::default(),
            color_map: ColorMap::new(&names),
        }
    }
}

impl AppState {
    /// The industry scope implied by the toggle and dropdown.
    pub fn scope(&self) -> Scope {
        if self.select_all {
            Scope::AllIndustries
        } else {
            Scope::Industry(self.selected_industry.clone())
        }
    }
}
