//! `Panel` — one surface, the entities drawn on it, and its frame loop.

use td_core::{Color, Extent, FrameClock, Point, SimRng, SurfaceId, Tick};
use td_entity::Entity;
use td_surface::Surface;
use tracing::trace;

use crate::FrameLoop;

/// Road fill on the signal grid.
pub const ROAD_FILL: Color = Color::hex(0x333333);

// ── Backdrop ─────────────────────────────────────────────────────────────────

/// A filled rectangle painted under the entities every frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BackdropRect {
    pub origin: Point,
    pub w:      f32,
    pub h:      f32,
    pub color:  Color,
}

/// Static geometry repainted after each clear.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Backdrop {
    pub rects: Vec<BackdropRect>,
}

impl Backdrop {
    /// Nothing but the cleared background.
    pub fn none() -> Self {
        Self::default()
    }

    /// One horizontal and one vertical 50 px road crossing at the centre of a
    /// 400 × 400 grid.
    pub fn crossroads() -> Self {
        Self {
            rects: vec![
                BackdropRect { origin: Point::new(0.0, 175.0), w: 400.0, h: 50.0, color: ROAD_FILL },
                BackdropRect { origin: Point::new(175.0, 0.0), w: 50.0, h: 400.0, color: ROAD_FILL },
            ],
        }
    }

    fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        for r in &self.rects {
            surface.fill_rect(r.origin.x, r.origin.y, r.w, r.h, r.color);
        }
    }
}

// ── Panel ─────────────────────────────────────────────────────────────────────

/// A drawing surface together with the entities it exclusively owns.
///
/// The entity vector is filled once at construction and never grows or
/// shrinks afterwards; frames and resets only mutate elements in place.
pub struct Panel<S: Surface, E: Entity> {
    id:         SurfaceId,
    surface:    S,
    entities:   Vec<E>,
    backdrop:   Backdrop,
    rng:        SimRng,
    clock:      FrameClock,
    frame_loop: FrameLoop,
}

impl<S: Surface, E: Entity> Panel<S, E> {
    pub fn new(id: SurfaceId, surface: S, entities: Vec<E>, backdrop: Backdrop, rng: SimRng) -> Self {
        Self {
            id,
            surface,
            entities,
            backdrop,
            rng,
            clock:      FrameClock::new(),
            frame_loop: FrameLoop::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn entities(&self) -> &[E] {
        &self.entities
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        Extent::new(self.surface.width(), self.surface.height())
    }

    /// The tick the next frame will run as (= frames rendered so far).
    #[inline]
    pub fn tick(&self) -> Tick {
        self.clock.current_tick
    }

    #[inline]
    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }

    #[inline]
    pub(crate) fn frame_loop_mut(&mut self) -> &mut FrameLoop {
        &mut self.frame_loop
    }

    /// Run one tick: clear, paint the backdrop, then `advance` + `render`
    /// every entity in vector order.
    ///
    /// Does not touch the frame loop; callers decide whether a frame is due.
    pub fn frame(&mut self) {
        let extent = self.extent();
        self.surface.clear();
        self.backdrop.paint(&mut self.surface);
        for entity in self.entities.iter_mut() {
            entity.advance(extent);
            entity.render(&mut self.surface);
        }
        trace!(surface = %self.id, tick = %self.clock.current_tick, "frame");
        self.clock.advance();
    }

    /// Reset every entity in place.  The frame loop and clock are untouched.
    pub fn reset(&mut self) {
        let extent = self.extent();
        for entity in self.entities.iter_mut() {
            entity.reset(extent, &mut self.rng);
        }
    }
}
