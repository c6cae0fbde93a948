use engine_core::{ChampionId, InvariantViolation, KillAssessment, TargetLockState};

/// Why a tick produced no assessment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Assessments are toggled off.
    Disabled,
    /// The stats source reports no active game.
    NoGame,
    /// No enemy has been detected yet.
    NoTarget,
    /// The stats source failed or timed out; carries the error text.
    SourceUnavailable(String),
}

impl SkipReason {
    pub fn describe(&self) -> String {
        match self {
            Self::Disabled => "disabled".to_owned(),
            Self::NoGame => "waiting for game".to_owned(),
            Self::NoTarget => "no enemy detected".to_owned(),
            Self::SourceUnavailable(reason) => format!("stats unavailable: {reason}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TickEvent {
    Assessed {
        tick: u64,
        assessment: Box<KillAssessment>,
        lock: TargetLockState,
    },
    Skipped {
        tick: u64,
        reason: SkipReason,
    },
    /// A computed value escaped its legal range; nothing was displayed.
    Discarded {
        tick: u64,
        violation: InvariantViolation,
    },
    TargetChanged {
        target: Option<ChampionId>,
    },
    EnabledChanged {
        enabled: bool,
    },
}

impl TickEvent {
    pub fn tick(&self) -> Option<u64> {
        match self {
            Self::Assessed { tick, .. }
            | Self::Skipped { tick, .. }
            | Self::Discarded { tick, .. } => Some(*tick),
            Self::TargetChanged { .. } | Self::EnabledChanged { .. } => None,
        }
    }

    pub fn assessment(&self) -> Option<&KillAssessment> {
        match self {
            Self::Assessed { assessment, .. } => Some(&**assessment),
            _ => None,
        }
    }
}
