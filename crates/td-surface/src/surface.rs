//! The `Surface` trait implemented by every drawing backend.

use td_core::Color;

/// A fixed-size 2D drawing target.
///
/// All methods are infallible: drawing outside the surface bounds is clipped,
/// never an error.  Width and height never change after creation.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> f32;

    /// Height in pixels.
    fn height(&self) -> f32;

    /// Clear the whole surface back to its background.
    fn clear(&mut self);

    /// Fill a disc centred on `(x, y)`.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);

    /// Fill an axis-aligned rectangle with its top-left corner at `(x, y)`.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
}
