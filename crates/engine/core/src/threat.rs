//! Informational warnings attached to an assessment.
//!
//! Flags describe what the damage model cannot account for. They are shown
//! next to the verdict and never change the percent.

use bitflags::bitflags;

use crate::stats::{EnemyProfile, ItemModifier, ItemTag};

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ThreatFlags: u16 {
        const SHIELD_ITEM           = 1 << 0;
        const REVIVE_ITEM           = 1 << 1;
        const DAMAGE_DELAY_ITEM     = 1 << 2;
        const COOLDOWN_UNKNOWN_ITEM = 1 << 3;
        const BARRIER               = 1 << 4;
        const HEAL                  = 1 << 5;
        const EXHAUST               = 1 << 6;
        /// Isolation bonuses were assumed.
        const SOLO_ENGAGE           = 1 << 7;
    }
}

impl ThreatFlags {
    pub fn from_item(modifier: &ItemModifier) -> Self {
        modifier
            .tags
            .iter()
            .map(|tag| match tag {
                ItemTag::Shield => Self::SHIELD_ITEM,
                ItemTag::Revive => Self::REVIVE_ITEM,
                ItemTag::DamageDelay => Self::DAMAGE_DELAY_ITEM,
                ItemTag::CooldownUnknown => Self::COOLDOWN_UNKNOWN_ITEM,
            })
            .fold(Self::empty(), |acc, flag| acc | flag)
    }

    /// Summoner names arrive raw, e.g. `"SummonerBarrier"` or
    /// `"GeneratedTip_SummonerSpell_SummonerHeal_DisplayName"`.
    pub fn from_summoner(raw: &str) -> Self {
        if raw.contains("SummonerBarrier") {
            Self::BARRIER
        } else if raw.contains("SummonerHeal") {
            Self::HEAL
        } else if raw.contains("SummonerExhaust") {
            Self::EXHAUST
        } else {
            Self::empty()
        }
    }

    pub fn for_enemy<'a>(
        enemy: &EnemyProfile,
        items: impl IntoIterator<Item = &'a ItemModifier>,
        isolated: bool,
    ) -> Self {
        let mut flags = items
            .into_iter()
            .fold(Self::empty(), |acc, m| acc | Self::from_item(m));
        for spell in &enemy.summoner_spells {
            flags |= Self::from_summoner(spell);
        }
        flags.set(Self::SOLO_ENGAGE, isolated);
        flags
    }

    /// One short warning per set flag, in bit order.
    pub fn describe(&self) -> Vec<&'static str> {
        DESCRIPTIONS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, text)| *text)
            .collect()
    }
}

const DESCRIPTIONS: [(ThreatFlags, &str); 8] = [
    (ThreatFlags::SHIELD_ITEM, "enemy has a shield item"),
    (ThreatFlags::REVIVE_ITEM, "enemy can revive"),
    (ThreatFlags::DAMAGE_DELAY_ITEM, "enemy delays incoming damage"),
    (ThreatFlags::COOLDOWN_UNKNOWN_ITEM, "defensive item cooldown unknown"),
    (ThreatFlags::BARRIER, "enemy has Barrier"),
    (ThreatFlags::HEAL, "enemy has Heal"),
    (ThreatFlags::EXHAUST, "enemy has Exhaust"),
    (ThreatFlags::SOLO_ENGAGE, "solo engage assumed"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ChampionId;

    #[test]
    fn collects_item_and_summoner_threats() {
        let steraks = ItemModifier {
            tags: vec![ItemTag::Shield],
            ..ItemModifier::default()
        };
        let zhonyas = ItemModifier {
            tags: vec![ItemTag::CooldownUnknown],
            ..ItemModifier::default()
        };
        let mut enemy = EnemyProfile::new(ChampionId::new("Darius"), 11);
        enemy.summoner_spells = vec![
            "SummonerFlash".into(),
            "GeneratedTip_SummonerSpell_SummonerBarrier_DisplayName".into(),
        ];

        let flags = ThreatFlags::for_enemy(&enemy, [&steraks, &zhonyas], false);
        assert_eq!(
            flags,
            ThreatFlags::SHIELD_ITEM | ThreatFlags::COOLDOWN_UNKNOWN_ITEM | ThreatFlags::BARRIER
        );
        assert_eq!(flags.describe().len(), 3);
    }

    #[test]
    fn solo_engage_follows_isolation() {
        let enemy = EnemyProfile::new(ChampionId::new("Lux"), 3);
        let flags = ThreatFlags::for_enemy(&enemy, std::iter::empty::<&ItemModifier>(), true);
        assert_eq!(flags, ThreatFlags::SOLO_ENGAGE);
        assert_eq!(flags.describe(), vec!["solo engage assumed"]);
    }
}
