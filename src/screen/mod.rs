pub mod compositor;
pub mod overlay;
pub mod surface;

pub use compositor::{Screen, SurfaceId};
pub use overlay::{Overlay, OverlayScreens};
pub use surface::Surface;
