//! Target panel OCR adapter.
//!
//! A [`TextRecognizer`] returns the raw text of one panel line, e.g.
//! `"1432 / 2210"`. [`parse_pair`] rejects misreads before anything reaches
//! the observation buffer.

use async_trait::async_trait;
use engine_core::{HealthReading, ManaReading, PanelReading};

use crate::api::{PanelOcrSource, SourceError};

/// Largest believable maximum health on the panel.
pub const HP_PLAUSIBLE_MAX: u32 = 8_000;
/// Largest believable maximum mana on the panel.
pub const MANA_PLAUSIBLE_MAX: u32 = 3_000;
/// Maxima below this are UI noise ("5/8").
pub const MIN_PLAUSIBLE_MAX: u32 = 100;

/// Panel line to recognize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelRegion {
    Health,
    Mana,
}

/// External OCR engine reading one region of the screen.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// `Ok(None)` when the region is not on screen.
    async fn recognize(&self, region: PanelRegion) -> Result<Option<String>, SourceError>;
}

/// Parses `"current / max"` into a validated pair.
///
/// The first two digit runs are used. Rejects a zero, implausibly large, or
/// tiny maximum and a current more than 10% above the maximum; a current up
/// to 10% above is regen overshoot and clamps to the maximum.
pub fn parse_pair(text: &str, plausible_max: u32) -> Option<(u32, u32)> {
    let mut numbers = text
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .map(str::parse::<u32>);
    let current = numbers.next()?.ok()?;
    let max = numbers.next()?.ok()?;

    if max == 0 || max > plausible_max || max < MIN_PLAUSIBLE_MAX {
        return None;
    }
    if u64::from(current) * 10 > u64::from(max) * 11 {
        return None;
    }
    Some((current.min(max), max))
}

/// [`PanelOcrSource`] over an external text recognizer.
pub struct OcrPanelSource<R> {
    recognizer: R,
}

impl<R: TextRecognizer> OcrPanelSource<R> {
    pub fn new(recognizer: R) -> Self {
        Self { recognizer }
    }
}

#[async_trait]
impl<R: TextRecognizer> PanelOcrSource for OcrPanelSource<R> {
    async fn read_panel(&self) -> Result<Option<PanelReading>, SourceError> {
        let Some(health_text) = self.recognizer.recognize(PanelRegion::Health).await? else {
            return Ok(None);
        };
        let Some((current, max)) = parse_pair(&health_text, HP_PLAUSIBLE_MAX) else {
            tracing::trace!(
                target: "runtime::source",
                text = %health_text,
                "unreadable health line"
            );
            return Ok(None);
        };

        // Mana is optional: a failed mana read never discards the health read.
        let mana = match self.recognizer.recognize(PanelRegion::Mana).await {
            Ok(Some(text)) => parse_pair(&text, MANA_PLAUSIBLE_MAX)
                .map(|(current, max)| ManaReading { current, max }),
            Ok(None) | Err(_) => None,
        };

        Ok(Some(PanelReading {
            health: HealthReading::Exact { current, max },
            mana,
        }))
    }
}
