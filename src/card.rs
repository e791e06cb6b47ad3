//! Card records as fetched from the upstream card database, plus the
//! enriched shape this engine produces.
//!
//! The raw shapes mirror the upstream JSON field-for-field so a dump can be
//! loaded, enriched and re-persisted without losing anything the engine does
//! not understand. The engine never mutates a raw card.

use serde::{Deserialize, Serialize};

use crate::effect::Effect;

/// A single card as persisted by the external fetch step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub local_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub illustrator: Option<String>,
    #[serde(default)]
    pub rarity: String,
    #[serde(default)]
    pub set: SetSummary,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub variants: Option<Variants>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hp: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub evolve_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stage: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub attacks: Vec<Attack>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub abilities: Vec<Ability>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub weaknesses: Vec<Weakness>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub retreat: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub regulation_mark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub legal: Option<Legal>,
    /// Effect text on Trainer/Item cards (the upstream reuses the `effect` key).
    #[serde(rename = "effect", skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
}

/// Print variants of a card (holo, reverse, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variants {
    pub first_edition: bool,
    pub holo: bool,
    pub normal: bool,
    pub reverse: bool,
    pub w_promo: bool,
}

/// Format legality of a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legal {
    #[serde(default)]
    pub standard: bool,
    #[serde(default)]
    pub expanded: bool,
}

/// Basic information about the set a card belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSummary {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub logo: Option<String>,
}

/// An attack: cost, name, optional effect text and printed damage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attack {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub cost: Vec<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub effect: Option<String>,
    /// Printed damage; the upstream emits either a number or a string like "30+".
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub damage: Option<serde_json::Value>,
}

/// A Pokémon's ability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    #[serde(default)]
    pub effect: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// A weakness: type and multiplier string (e.g. "×2").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Weakness {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: String,
}

/// A card annotated with structured effects, keyed back to the attack or
/// ability text that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedCard {
    #[serde(flatten)]
    pub card: Card,
    pub parsed_abilities: Vec<Effect>,
    pub parsed_attacks: Vec<Effect>,
}

impl EnrichedCard {
    /// True when any parsed effect on this card is UNKNOWN. Diagnostic
    /// signal only; never persisted and never fed back into parsing.
    pub fn has_unresolved(&self) -> bool {
        self.parsed_abilities.iter().chain(self.parsed_attacks.iter()).any(Effect::is_unknown)
    }

    /// All UNKNOWN effects on this card, abilities first.
    pub fn unresolved(&self) -> impl Iterator<Item = &Effect> {
        self.parsed_abilities.iter().chain(self.parsed_attacks.iter()).filter(|e| e.is_unknown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_card_json_round_trips() {
        let raw = serde_json::json!({
            "id": "A1-001",
            "localId": "1",
            "name": "Bulbasaur",
            "category": "Pokemon",
            "rarity": "One Diamond",
            "set": {"id": "A1", "name": "Genetic Apex"},
            "hp": 70,
            "types": ["Grass"],
            "stage": "Basic",
            "attacks": [
                {"cost": ["Grass", "Colorless"], "name": "Vine Whip", "damage": 40}
            ],
            "retreat": 1
        });
        let card: Card = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(card.name, "Bulbasaur");
        assert_eq!(card.hp, Some(70));
        assert_eq!(card.attacks.len(), 1);
        assert_eq!(card.attacks[0].effect, None);

        let back = serde_json::to_value(&card).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn enriched_card_flattens_the_raw_card() {
        let card = Card { id: "A1-002".into(), name: "Ivysaur".into(), ..Card::default() };
        let enriched = EnrichedCard {
            card,
            parsed_abilities: vec![],
            parsed_attacks: vec![Effect::unknown("gibberish")],
        };
        let json = serde_json::to_value(&enriched).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.get("id").unwrap(), "A1-002");
        assert!(obj.contains_key("parsedAbilities"));
        assert!(obj.contains_key("parsedAttacks"));
        assert!(enriched.has_unresolved());
        assert_eq!(enriched.unresolved().count(), 1);
    }
}
