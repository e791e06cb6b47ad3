//! Special-condition phrasings.

use crate::condition::{Condition, FlipOutcome, SpotKind, Trigger};
use crate::effect::{Effect, EffectKind, StatusCondition, TargetKind};
use crate::rules::helpers;
use crate::rules::outcome::{Caps, EffectTemplate, RuleDef};

/// "…is now Poisoned and Burned." emits one record per status, in the order
/// written.
fn extract_status_opponent(caps: &Caps, text: &str) -> Option<Vec<Effect>> {
    let statuses = caps.statuses(1)?;
    Some(
        statuses
            .into_iter()
            .map(|status| {
                let mut effect = Effect::new(EffectKind::ApplyStatus, text);
                effect.target = Some(TargetKind::OpponentActive);
                effect.status = Some(status);
                effect
            })
            .collect(),
    )
}

fn status_opponent() -> RuleDef {
    RuleDef::with(
        "status-opponent",
        regex!(r"Your opponent's Active Pokémon is now (.*)\."),
        "Your opponent's Active Pokémon is now Poisoned.",
        extract_status_opponent,
    )
    .phrases(&["Your opponent's Active Pokémon is now"])
}

fn status_self() -> RuleDef {
    RuleDef::emit(
        "status-self",
        regex!(r"This Pokémon is now (Poisoned|Asleep|Burned|Confused|Paralyzed)\."),
        "This Pokémon is now Asleep.",
        [EffectTemplate::new(EffectKind::ApplyStatus).target(TargetKind::ThisPokemon).status_from(1)],
    )
    .phrases(&["This Pokémon is now"])
}

fn sleep_on_energy_attach() -> RuleDef {
    RuleDef::emit(
        "sleep-on-energy-attach",
        regex!(r"whenever you attach an Energy from your Energy Zone to it, it is now Asleep\."),
        "As long as this Pokémon is in the Active Spot, whenever you attach an Energy from your Energy Zone to it, it is now Asleep.",
        [EffectTemplate::new(EffectKind::TriggeredAbility)
            .target(TargetKind::ThisPokemon)
            .status(StatusCondition::Asleep)
            .cond(Condition::trigger(Trigger::AttachEnergySelf))],
    )
    .phrases(&["whenever you attach", "Asleep"])
}

fn status_on_heads() -> RuleDef {
    RuleDef::emit(
        "status-on-heads",
        regex!(r"If heads, your opponent's Active Pokémon is now (.*)\."),
        "Flip a coin. If heads, your opponent's Active Pokémon is now Paralyzed.",
        [EffectTemplate::new(EffectKind::ApplyStatus)
            .target(TargetKind::OpponentActive)
            .cond(Condition::coin_flip(FlipOutcome::Heads))
            .cond_from(|c| Some(Condition::StatusPool { statuses: c.statuses(1)? }))],
    )
    .phrases(&["If heads,"])
}

fn status_once_per_turn_active() -> RuleDef {
    RuleDef::emit(
        "status-once-per-turn-active",
        regex!(r"if this Pokémon is in the Active Spot, you may make your opponent's Active Pokémon (Poisoned)\."),
        "Once during your turn, if this Pokémon is in the Active Spot, you may make your opponent's Active Pokémon Poisoned.",
        [EffectTemplate::new(EffectKind::ApplyStatus)
            .target(TargetKind::OpponentActive)
            .status_from(1)
            .cond(Condition::trigger(Trigger::OncePerTurn))
            .cond(Condition::Spot { spot: SpotKind::Active })],
    )
    .phrases(&["Active Spot", "you may make"])
}

/// "Both Active Pokémon are now Asleep." — the two records keep source order:
/// own side first, as the sentence reads from the attacker's perspective.
fn extract_status_both_active(caps: &Caps, text: &str) -> Option<Vec<Effect>> {
    let status = caps.status(1)?;
    let mut own = Effect::new(EffectKind::ApplyStatus, text);
    own.target = Some(TargetKind::ThisPokemon);
    own.status = Some(status);
    let mut opponent = Effect::new(EffectKind::ApplyStatus, text);
    opponent.target = Some(TargetKind::OpponentActive);
    opponent.status = Some(status);
    Some(vec![own, opponent])
}

fn status_both_active() -> RuleDef {
    RuleDef::with(
        "status-both-active",
        regex!(r"Both Active Pokémon are now (Asleep)\."),
        "Both Active Pokémon are now Asleep.",
        extract_status_both_active,
    )
    .phrases(&["Both Active Pokémon"])
}

fn status_random() -> RuleDef {
    RuleDef::emit(
        "status-random",
        regex!(
            r"1 Special Condition from among (.*?) is chosen at random, and your opponent's Active Pokémon is now affected by that Special Condition\."
        ),
        "1 Special Condition from among Asleep, Burned, Confused, Paralyzed, and Poisoned is chosen at random, and your opponent's Active Pokémon is now affected by that Special Condition.",
        [EffectTemplate::new(EffectKind::ApplyStatus)
            .target(TargetKind::OpponentActive)
            .cond(Condition::Random)
            .cond_from(|c| Some(Condition::StatusPool { statuses: helpers::parse_status_list(c.text(1)?)? }))],
    )
    .phrases(&["1 Special Condition from among"])
}

fn status_once_per_turn() -> RuleDef {
    RuleDef::emit(
        "status-once-per-turn",
        regex!(r"Once during your turn, you may make your opponent's Active Pokémon (Burned)\."),
        "Once during your turn, you may make your opponent's Active Pokémon Burned.",
        [EffectTemplate::new(EffectKind::ApplyStatus)
            .target(TargetKind::OpponentActive)
            .status_from(1)
            .cond(Condition::trigger(Trigger::OncePerTurn))],
    )
    .phrases(&["Once during your turn", "you may make"])
}

pub fn get() -> Vec<RuleDef> {
    vec![
        status_opponent(),
        status_self(),
        sleep_on_energy_attach(),
        status_on_heads(),
        status_once_per_turn_active(),
        status_both_active(),
        status_random(),
        status_once_per_turn(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RuleSet;

    fn set() -> RuleSet {
        let mut builder = RuleSet::builder(0);
        for rule in get() {
            builder.register(rule).unwrap();
        }
        builder.build().unwrap()
    }

    #[test]
    fn compound_status_sentences_emit_one_record_per_status() {
        let effects = set().parse("Your opponent's Active Pokémon is now Poisoned and Burned.");
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0].status, Some(StatusCondition::Poisoned));
        assert_eq!(effects[1].status, Some(StatusCondition::Burned));
        assert!(effects.iter().all(|e| e.target == Some(TargetKind::OpponentActive)));
        assert!(effects.iter().all(|e| e.description == "Your opponent's Active Pokémon is now Poisoned and Burned."));
    }

    #[test]
    fn both_active_emits_own_side_first() {
        let effects = set().parse("Both Active Pokémon are now Asleep.");
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0].target, Some(TargetKind::ThisPokemon));
        assert_eq!(effects[1].target, Some(TargetKind::OpponentActive));
        assert!(effects.iter().all(|e| e.status == Some(StatusCondition::Asleep)));
    }

    #[test]
    fn unparseable_status_words_degrade_to_unknown() {
        // The pattern matches, but "Dizzy" is not a special condition; the
        // whole input must fall back rather than invent a status.
        let effects = set().parse("Your opponent's Active Pokémon is now Dizzy.");
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].kind, EffectKind::Unknown);
    }

    #[test]
    fn random_status_pools_are_typed() {
        let effects = set().parse(
            "1 Special Condition from among Asleep, Burned, Confused, Paralyzed, and Poisoned is chosen at random, and your opponent's Active Pokémon is now affected by that Special Condition.",
        );
        assert_eq!(effects.len(), 1);
        assert!(effects[0].conditions.contains(&Condition::StatusPool {
            statuses: vec![
                StatusCondition::Asleep,
                StatusCondition::Burned,
                StatusCondition::Confused,
                StatusCondition::Paralyzed,
                StatusCondition::Poisoned,
            ]
        }));
    }
}
