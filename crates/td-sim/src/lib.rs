//! `td-sim` — frame scheduler and lifecycle for the rust_td traffic dashboard.
//!
//! # Refresh cycle
//!
//! ```text
//! host display refresh → Dashboard::on_refresh
//!   for panel in [agent flow, signal grid]:
//!     if panel.frame_loop is armed:
//!       ① clear surface, paint backdrop
//!       ② for entity in panel (vector order): advance(); render()
//!       ③ running  → stay armed (next refresh runs again)
//!          stopping → go idle (this was the residual frame)
//! ```
//!
//! # Lifecycle
//!
//! | Command   | Effect                                                        |
//! |-----------|---------------------------------------------------------------|
//! | `start`   | running = true; idle loops armed, stopping loops re-adopted   |
//! | `pause`   | running = false; armed loops run one residual frame then idle |
//! | `reset`   | agents re-randomized, signals → STOP/0; running unchanged     |
//!
//! Everything runs on the host's single refresh context; there are no locks.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use td_sim::{DashboardBuilder, NoopObserver};
//!
//! let mut dashboard = DashboardBuilder::new().build(&mut surfaces)?;
//! loop {
//!     host.wait_for_refresh();
//!     dashboard.on_refresh(&mut NoopObserver);
//! }
//! ```

pub mod builder;
pub mod config;
pub mod controls;
pub mod dashboard;
pub mod error;
pub mod observer;
pub mod panel;
pub mod scheduler;
pub mod visibility;

#[cfg(test)]
mod tests;

pub use builder::DashboardBuilder;
pub use config::{DashboardConfig, StartPolicy};
pub use controls::Controls;
pub use dashboard::Dashboard;
pub use error::{SimError, SimResult};
pub use observer::{FrameObserver, NoopObserver};
pub use panel::{Backdrop, BackdropRect, Panel, ROAD_FILL};
pub use scheduler::{FrameLoop, LoopState};
pub use visibility::VisibilityGate;
