mod editor;
mod params;
mod region;
mod render;
mod session;
mod store;

pub use editor::BoundaryEditor;
pub use params::{RoiParams, DEFAULT_DEPTH_UM, DEFAULT_PIXEL_PER_UM};
pub use region::Roi;
pub use render::{PolylineKind, RenderFrame, RenderSink};
pub use session::{RoiSession, RoiState};
pub use store::{SessionId, SessionStore};
