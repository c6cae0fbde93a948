//! Worker tasks that back the runtime orchestration.
//!
//! The tick worker owns every piece of mutable engine state (target lock,
//! observation buffer, enable flag) so commands and ticks are serialized on
//! one task and need no locking.

mod tick;

pub use tick::TickWorker;
