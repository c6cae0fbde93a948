//! Plain-text rendering of an assessment for terminal and log output.

use std::fmt::Write as _;

use engine_core::{Classification, DamageType, KillAssessment, TargetLockState};

/// Multi-line summary of one assessment.
///
/// ```text
/// GO 89% vs khazix [LIVE]
/// HP 42% (760 / 1810 max, 912 effective)
/// Burst 1034 raw / 861 effective (phys 720, magic 141, true 0)
/// Resists 32 armor / 45 mr after pen (70 / 45 base)
/// Combo Q > W > AA (Full combo)
/// ! enemy has a revive item
/// ```
pub fn format_assessment(assessment: &KillAssessment) -> String {
    let mut out = String::new();
    let result = &assessment.result;

    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "{} {}% vs {} [{}]",
        result.classification,
        result.percent,
        assessment.target,
        result.enemy_source.label()
    );
    if result.classification == Classification::Paused {
        if let Some(reason) = assessment.pause_reason {
            let _ = write!(out, " ({})", reason.as_str());
        }
    }

    let _ = write!(
        out,
        "\nHP {:.0}% ({:.0} / {:.0} max, {:.0} effective)",
        assessment.hp_fraction * 100.0,
        assessment.hp_fraction * assessment.enemy_max_hp,
        assessment.enemy_max_hp,
        assessment.enemy_effective_hp,
    );
    if let Some(mana) = assessment.mana_fraction {
        let _ = write!(out, ", mana {:.0}%", mana * 100.0);
    }

    let damage = &assessment.damage;
    let _ = write!(
        out,
        "\nBurst {:.0} raw / {:.0} effective (phys {:.0}, magic {:.0}, true {:.0})",
        damage.total_raw(),
        damage.total_effective(),
        damage.effective_by_type(DamageType::Physical),
        damage.effective_by_type(DamageType::Magic),
        damage.effective_by_type(DamageType::True),
    );
    let _ = write!(
        out,
        "\nResists {:.0} armor / {:.0} mr after pen ({:.0} / {:.0} base)",
        assessment.resistances.armor, assessment.resistances.mr, assessment.armor, assessment.mr,
    );
    let _ = write!(
        out,
        "\nCombo {} ({})",
        assessment.spell_order, assessment.combo_label
    );

    for warning in assessment.threats.describe() {
        let _ = write!(out, "\n! {warning}");
    }
    out
}

/// Known enemies in detection order with the locked one bracketed.
pub fn slot_line(lock: &TargetLockState) -> String {
    if lock.known().is_empty() {
        return "no enemies detected".to_owned();
    }
    lock.known()
        .iter()
        .map(|id| {
            if lock.is_locked_on(id) {
                format!("[{id}]")
            } else {
                id.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
