//! Surface lookup at dashboard initialization.

use std::collections::HashMap;

use td_core::SurfaceId;

use crate::Surface;

/// Hands out the drawing surface for each visualization.
///
/// Returning `None` means the host has no such surface (the anchor element is
/// missing, the window could not be created, …).  The dashboard treats that
/// as a missing resource for that one panel only.
pub trait SurfaceProvider {
    type Surface: Surface;

    /// Take ownership of the surface for `id`.  Called at most once per id.
    fn acquire(&mut self, id: SurfaceId) -> Option<Self::Surface>;
}

/// A pre-populated map; acquiring removes the entry.
impl<S: Surface> SurfaceProvider for HashMap<SurfaceId, S> {
    type Surface = S;

    fn acquire(&mut self, id: SurfaceId) -> Option<S> {
        self.remove(&id)
    }
}
