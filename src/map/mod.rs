//! Headless map session
//!
//! Models what the map front-end does around the scorer:
//! - Explicit tile layer and marker icon options, fixed at construction
//! - Click handling that assesses the point and places a single marker
//! - Popup markup and the listener callback that receives each assessment

pub mod options;
pub mod popup;
pub mod session;

pub use options::{MapOptions, MarkerIcon, TileLayer};
pub use popup::render_popup;
pub use session::{AssessmentListener, MapSession, Marker};
