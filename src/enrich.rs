//! The enrichment driver: cards in, cards-with-structured-effects out.

use crate::card::{Card, EnrichedCard};
use crate::effect::Effect;
use crate::engine::RuleSet;

/// Parse every ability and attack of `card` against `rules`.
///
/// Each produced effect is stamped with the name of the ability/attack it
/// came from, so structured effects trace back to their textual source.
/// Abilities and attacks with no effect text contribute nothing. The raw
/// card is copied, never mutated.
pub fn enrich_card(rules: &RuleSet, card: &Card) -> EnrichedCard {
    let mut parsed_abilities = Vec::new();
    for ability in &card.abilities {
        if ability.effect.is_empty() {
            continue;
        }
        for mut effect in rules.parse(&ability.effect) {
            effect.name = ability.name.clone();
            parsed_abilities.push(effect);
        }
    }

    let mut parsed_attacks = Vec::new();
    for attack in &card.attacks {
        let Some(text) = attack.effect.as_deref() else {
            continue;
        };
        if text.is_empty() {
            continue;
        }
        for mut effect in rules.parse(text) {
            effect.name = attack.name.clone();
            parsed_attacks.push(effect);
        }
    }

    EnrichedCard { card: card.clone(), parsed_abilities, parsed_attacks }
}

/// Enrich a whole dump, preserving card order.
pub fn enrich_cards(rules: &RuleSet, cards: &[Card]) -> Vec<EnrichedCard> {
    cards.iter().map(|card| enrich_card(rules, card)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Ability, Attack};
    use crate::effect::EffectKind;

    fn rules() -> &'static RuleSet {
        crate::api::rules()
    }

    fn card_with(abilities: Vec<Ability>, attacks: Vec<Attack>) -> Card {
        Card { id: "T-001".into(), name: "Testmon".into(), abilities, attacks, ..Card::default() }
    }

    fn attack(name: &str, effect: Option<&str>) -> Attack {
        Attack { name: name.into(), effect: effect.map(str::to_string), ..Attack::default() }
    }

    #[test]
    fn effects_are_stamped_with_their_source_name() {
        let card = card_with(
            vec![Ability {
                name: "Fragrant Flower Garden".into(),
                effect: "Once during your turn, you may heal 20 damage from each of your {W} Pokémon.".into(),
                kind: "Ability".into(),
            }],
            vec![attack("Vine Whip", Some("Heal 30 damage from this Pokémon."))],
        );
        let enriched = enrich_card(rules(), &card);

        assert_eq!(enriched.parsed_abilities.len(), 1);
        assert_eq!(enriched.parsed_abilities[0].name, "Fragrant Flower Garden");
        assert_eq!(enriched.parsed_attacks.len(), 1);
        assert_eq!(enriched.parsed_attacks[0].name, "Vine Whip");
        assert_eq!(enriched.parsed_attacks[0].kind, EffectKind::Heal);
        assert!(!enriched.has_unresolved());
    }

    #[test]
    fn empty_and_missing_effect_text_produce_nothing() {
        let card = card_with(
            vec![Ability { name: "Blank".into(), effect: String::new(), kind: "Ability".into() }],
            vec![attack("Tackle", None), attack("Scratch", Some(""))],
        );
        let enriched = enrich_card(rules(), &card);
        assert!(enriched.parsed_abilities.is_empty());
        assert!(enriched.parsed_attacks.is_empty());
        assert!(!enriched.has_unresolved());
    }

    #[test]
    fn composite_effects_all_carry_the_same_source_name() {
        let card = card_with(
            vec![],
            vec![attack(
                "Crushing Bolt",
                Some(
                    "Discard all {L} Energy from this Pokémon. This attack does 120 damage to 1 of your opponent's Pokémon.",
                ),
            )],
        );
        let enriched = enrich_card(rules(), &card);
        assert_eq!(enriched.parsed_attacks.len(), 2);
        assert!(enriched.parsed_attacks.iter().all(|e| e.name == "Crushing Bolt"));
    }

    #[test]
    fn unresolved_flag_tracks_unknown_effects() {
        let card = card_with(
            vec![],
            vec![
                attack("Mystery", Some("Performs an entirely novel maneuver.")),
                attack("Tackle", Some("Draw a card.")),
            ],
        );
        let enriched = enrich_card(rules(), &card);
        assert!(enriched.has_unresolved());
        let unresolved: Vec<_> = enriched.unresolved().collect();
        assert_eq!(unresolved.len(), 1);
        assert_eq!(unresolved[0].name, "Mystery");
        assert_eq!(unresolved[0].description, "Performs an entirely novel maneuver.");
    }

    #[test]
    fn batch_enrichment_preserves_card_order() {
        let cards = vec![
            card_with(vec![], vec![attack("A", Some("Draw a card."))]),
            card_with(vec![], vec![attack("B", Some("noise"))]),
        ];
        let enriched = enrich_cards(rules(), &cards);
        assert_eq!(enriched.len(), 2);
        assert!(!enriched[0].has_unresolved());
        assert!(enriched[1].has_unresolved());
    }
}
