//! `td-core` — foundational types for the `rust_td` traffic dashboard.
//!
//! This crate is a dependency of every other `td-*` crate.  It has no `td-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `SurfaceId`                                           |
//! | [`geom`]    | `Point`, `Extent`, `Color`                            |
//! | [`range`]   | `SpawnRange` — half-open sampling interval            |
//! | [`time`]    | `Tick`, `FrameClock`                                  |
//! | [`rng`]     | `SimRng` (seeded, per dashboard)                      |
//! | [`error`]   | `TdError`, `TdResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geom;
pub mod ids;
pub mod range;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TdError, TdResult};
pub use geom::{Color, Extent, Point};
pub use ids::SurfaceId;
pub use range::SpawnRange;
pub use rng::SimRng;
pub use time::{FrameClock, Tick};
