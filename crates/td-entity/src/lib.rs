//! `td-entity` — the things that live on a dashboard surface.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`entity`] | `Entity` trait — `advance`, `render`, `reset`                 |
//! | [`agent`]  | `MovingAgent`, `AgentSpawn`, `spawn_agents`                   |
//! | [`signal`] | `SignalActor`, `Phase`, `SIGNAL_GRID`                         |
//!
//! # Design notes
//!
//! The two entity kinds share no state, only the [`Entity`] capability.  A
//! panel owns a homogeneous `Vec<E: Entity>`, so dispatch is static and the
//! frame loop calls `advance` then `render` on each element in vector order.
//! Entities never see each other.

pub mod agent;
pub mod entity;
pub mod signal;


pub use agent::{AGENT_FILL, AgentSpawn, MovingAgent, spawn_agents};
pub use entity::Entity;
pub use signal::{Phase, SIGNAL_GRID, SIGNAL_RADIUS, SignalActor};
