//! User commands delivered between ticks.

use serde::{Deserialize, Serialize};

/// Commands are queued and applied by the tick worker between ticks, never
/// during a computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Enable or disable assessments. While disabled every tick is skipped.
    Toggle,
    /// Lock onto the next known enemy.
    CycleTarget,
    /// Stop the tick loop.
    Quit,
}
