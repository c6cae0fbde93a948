//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing: commands go to the tick worker's
//! queue and tick events come back over a broadcast channel.
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{broadcast, mpsc};

use super::commands::Command;
use super::errors::{Result, RuntimeError};
use crate::events::TickEvent;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_tx: broadcast::Sender<TickEvent>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_tx: broadcast::Sender<TickEvent>,
    ) -> Self {
        Self {
            command_tx,
            event_tx,
        }
    }

    /// Queue a command; it takes effect before the next tick.
    pub async fn send(&self, command: Command) -> Result<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Queue a command without waiting; usable from inside a tick.
    pub fn try_send(&self, command: Command) -> Result<()> {
        self.command_tx.try_send(command).map_err(|err| match err {
            TrySendError::Full(_) => RuntimeError::CommandQueueFull,
            TrySendError::Closed(_) => RuntimeError::CommandChannelClosed,
        })
    }

    pub async fn toggle(&self) -> Result<()> {
        self.send(Command::Toggle).await
    }

    pub async fn cycle_target(&self) -> Result<()> {
        self.send(Command::CycleTarget).await
    }

    pub async fn quit(&self) -> Result<()> {
        self.send(Command::Quit).await
    }

    /// Subscribe to tick events. Slow subscribers lag rather than block the
    /// tick.
    pub fn subscribe(&self) -> broadcast::Receiver<TickEvent> {
        self.event_tx.subscribe()
    }
}
