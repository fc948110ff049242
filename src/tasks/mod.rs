//! Background Tasks Module
//!
//! Optional background work for a memo cache.
//!
//! # Tasks
//! - Sweep: evicts expired entries on a fixed interval, independent of traffic

mod sweep;

pub use sweep::spawn_sweep_task;
