//! The target data model: effect records and the closed enumerations they
//! are built from.
//!
//! Enumeration values are stable identifiers persisted as data by downstream
//! consumers. Adding a category is additive; renaming an existing serialized
//! identifier is a breaking change to the persisted contract.

use serde::{Deserialize, Serialize};

use crate::condition::Condition;

/// The closed set of effect categories the engine can classify text into.
///
/// New categories are a deliberate schema change, never inferred at parse
/// time; anything outside this set classifies as [`EffectKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectKind {
    Heal,
    Draw,
    Damage,
    CopyAttack,
    ApplyStatus,
    RestrictionCantAttack,
    ForceSwitch,
    SearchDeck,
    RecoilDamage,
    ConditionalDamage,
    AttachEnergy,
    TriggeredAbility,
    ScalingDamage,
    AttackMayFail,
    DiscardEnergy,
    MoveEnergy,
    ReduceIncomingDamage,
    DiscardFromHand,
    PassiveAbility,
    PassiveDamage,
    ApplyRestriction,
    MultiHitRandomDamage,
    DamageBenchedFriendly,
    SnipeDamage,
    SwitchSelf,
    ShuffleIntoDeck,
    ApplyPrevention,
    ScalingSnipeDamage,
    DamageBenchedOpponentAll,
    Lifesteal,
    ApplyReactiveDamage,
    BuffNextTurn,
    ModifyEnergy,
    DamageAllOpponent,
    DiscardDeck,
    SetHp,
    ShuffleFromHand,
    LookAtDeck,
    DelayedDamage,
    Knockout,
    MoveDamage,
    DiscardTool,
    RevealHand,
    DamageHalveHp,
    ReturnToHand,
    DiscardBenched,
    Devolve,
    DebuffIncomingDamage,
    Unknown,
}

/// Who or what an effect applies to.
///
/// Omitted on effects whose category implies a fixed or player-chosen
/// target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetKind {
    #[serde(rename = "SELF")]
    ThisPokemon,
    OpponentActive,
    OpponentHand,
    AllFriendly,
    AllPokemonInPlay,
    BenchedFriendly,
    BenchedOpponent,
    BenchedOpponentAll,
    Deck,
    Hand,
    EnergyZone,
}

/// The special conditions of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCondition {
    Poisoned,
    Confused,
    Asleep,
    Burned,
    Paralyzed,
}

impl StatusCondition {
    /// Parse a status word as it appears in card text ("Poisoned", "Asleep", ...).
    pub fn from_word(word: &str) -> Option<Self> {
        match word.trim() {
            w if w.eq_ignore_ascii_case("poisoned") => Some(Self::Poisoned),
            w if w.eq_ignore_ascii_case("confused") => Some(Self::Confused),
            w if w.eq_ignore_ascii_case("asleep") => Some(Self::Asleep),
            w if w.eq_ignore_ascii_case("burned") => Some(Self::Burned),
            w if w.eq_ignore_ascii_case("paralyzed") => Some(Self::Paralyzed),
            _ => None,
        }
    }
}

/// One structured unit of game behavior extracted from effect text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    /// Name of the attack/ability this effect came from. Stamped by the
    /// enrichment driver, empty straight out of the dispatcher.
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EffectKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub target: Option<TargetKind>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<StatusCondition>,
    /// Magnitude (damage, heal, card count). Omitted means "not applicable",
    /// not "zero effect".
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub amount: Option<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub conditions: Vec<Condition>,
    /// The source text, verbatim, for audit and UNKNOWN triage.
    pub description: String,
}

impl Effect {
    pub fn new(kind: EffectKind, description: impl Into<String>) -> Self {
        Effect {
            name: String::new(),
            kind,
            target: None,
            status: None,
            amount: None,
            conditions: Vec::new(),
            description: description.into(),
        }
    }

    /// The fallback record for text no rule could structure.
    pub fn unknown(description: impl Into<String>) -> Self {
        Effect::new(EffectKind::Unknown, description)
    }

    pub fn is_unknown(&self) -> bool {
        self.kind == EffectKind::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_identifiers_are_stable() {
        // These strings are persisted data; a rename here is a schema break.
        let cases = [
            (EffectKind::Heal, "\"HEAL\""),
            (EffectKind::ConditionalDamage, "\"CONDITIONAL_DAMAGE\""),
            (EffectKind::SetHp, "\"SET_HP\""),
            (EffectKind::DamageHalveHp, "\"DAMAGE_HALVE_HP\""),
            (EffectKind::DamageBenchedOpponentAll, "\"DAMAGE_BENCHED_OPPONENT_ALL\""),
            (EffectKind::Unknown, "\"UNKNOWN\""),
        ];
        for (kind, expected) in cases {
            assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
        }

        assert_eq!(serde_json::to_string(&TargetKind::ThisPokemon).unwrap(), "\"SELF\"");
        assert_eq!(serde_json::to_string(&TargetKind::OpponentActive).unwrap(), "\"OPPONENT_ACTIVE\"");
        assert_eq!(serde_json::to_string(&StatusCondition::Asleep).unwrap(), "\"ASLEEP\"");
    }

    #[test]
    fn empty_fields_are_omitted() {
        let effect = Effect::unknown("This is not a real card effect.");
        let json = serde_json::to_value(&effect).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.get("type").unwrap(), "UNKNOWN");
        assert_eq!(obj.get("description").unwrap(), "This is not a real card effect.");
        assert!(!obj.contains_key("target"));
        assert!(!obj.contains_key("status"));
        assert!(!obj.contains_key("amount"));
        assert!(!obj.contains_key("conditions"));
    }

    #[test]
    fn status_words_parse_case_insensitively() {
        assert_eq!(StatusCondition::from_word("Poisoned"), Some(StatusCondition::Poisoned));
        assert_eq!(StatusCondition::from_word("ASLEEP"), Some(StatusCondition::Asleep));
        assert_eq!(StatusCondition::from_word(" Burned "), Some(StatusCondition::Burned));
        assert_eq!(StatusCondition::from_word("Dizzy"), None);
    }
}
