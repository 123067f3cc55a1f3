//! The `Entity` trait — the per-tick capability shared by all entity kinds.

use td_core::{Extent, SimRng};
use td_surface::Surface;

/// Something a panel advances and draws once per tick.
///
/// # Contract
///
/// - [`advance`][Self::advance] mutates only `self`; it cannot fail.
/// - [`render`][Self::render] never mutates `self`, and is called after
///   `advance` in the same tick so the picture is never one step stale.
/// - [`reset`][Self::reset] restores the entity's initial dynamic state
///   in place.  Attributes fixed at creation survive a reset.
pub trait Entity {
    /// Step one tick.  `extent` is the owning surface's size.
    fn advance(&mut self, extent: Extent);

    /// Draw the entity's current state.
    fn render<S: Surface + ?Sized>(&self, surface: &mut S);

    /// Return to the start-of-simulation state, drawing from `rng` if the
    /// entity's initial state is random.
    fn reset(&mut self, extent: Extent, rng: &mut SimRng);
}
