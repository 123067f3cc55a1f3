//! `td-surface` — the drawing targets the dashboard renders onto.
//!
//! The simulation core never talks to a concrete canvas.  It draws through the
//! [`Surface`] trait and obtains surfaces from a [`SurfaceProvider`] at
//! initialization.  Two backends are provided:
//!
//! | Backend              | Use                                                |
//! |----------------------|----------------------------------------------------|
//! | [`RecordingSurface`] | Captures every draw call as a [`DrawCommand`].     |
//! | [`RasterSurface`]    | Software RGB framebuffer with alpha blending.      |
//!
//! Both are driven identically by `td-sim`; a host embedding the dashboard in
//! a real window implements `Surface` over its own canvas.

pub mod provider;
pub mod raster;
pub mod recording;
pub mod surface;


pub use provider::SurfaceProvider;
pub use raster::RasterSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::Surface;
