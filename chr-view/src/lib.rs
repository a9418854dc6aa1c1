//! What the page shows, computed without touching the DOM.
//!
//! [`ViewState`] is an immutable value updated only through [`ViewEvent`]s.
//! Every panel is a pure function of view state plus data; the UI crate and
//! the static SVG renderer both draw from these models.

pub mod legend;
pub mod modal;
pub mod panels;
pub mod scene;
pub mod state;
pub mod svg;

pub use legend::LegendModel;
pub use modal::ModalView;
pub use panels::{InfoPanel, Insights};
pub use scene::{CountyPaint, Scene, Stroke};
pub use state::{SelectedCounty, ViewEvent, ViewState};
