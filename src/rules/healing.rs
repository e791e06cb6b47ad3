//! Healing phrasings, plus lifesteal.

use crate::condition::{Condition, FlipOutcome, SpotKind, TargetFilter, Trigger};
use crate::effect::{EffectKind, TargetKind};
use crate::rules::outcome::{EffectTemplate, RuleDef};

fn heal_team() -> RuleDef {
    RuleDef::emit(
        "heal-team",
        regex!(r"(?i)heal (\d+) damage from each of your Pokémon\."),
        "Heal 50 damage from each of your Pokémon.",
        [EffectTemplate::new(EffectKind::Heal).target(TargetKind::AllFriendly).amount_from(1)],
    )
}

fn heal_self() -> RuleDef {
    RuleDef::emit(
        "heal-self",
        regex!(r"Heal (\d+) damage from this Pokémon\."),
        "Heal 30 damage from this Pokémon.",
        [EffectTemplate::new(EffectKind::Heal).target(TargetKind::ThisPokemon).amount_from(1)],
    )
    .phrases(&["Heal"])
}

fn heal_on_evolve() -> RuleDef {
    RuleDef::emit(
        "heal-on-evolve",
        regex!(
            r"when you play this Pokémon from your hand to evolve .*?, you may heal (\d+) damage from 1 of your \{([A-Z])\} Pokémon\."
        ),
        "Once during this battle, when you play this Pokémon from your hand to evolve 1 of your Pokémon, you may heal 20 damage from 1 of your {G} Pokémon.",
        [EffectTemplate::new(EffectKind::Heal)
            .amount_from(1)
            .cond(Condition::trigger(Trigger::OnEvolve))
            .cond_from(|c| Some(Condition::TargetFilter { filter: TargetFilter::OfType(c.energy(2)?) }))],
    )
    .phrases(&["evolve", "heal"])
}

fn heal_once_per_turn() -> RuleDef {
    RuleDef::emit(
        "heal-once-per-turn",
        regex!(r"Once during your turn, .*? you may heal (\d+) damage from 1 of your Pokémon\."),
        "Once during your turn, if this Pokémon is in the Active Spot, you may heal 30 damage from 1 of your Pokémon.",
        [EffectTemplate::new(EffectKind::Heal)
            .amount_from(1)
            .cond(Condition::trigger(Trigger::OncePerTurn))
            .cond(Condition::Spot { spot: SpotKind::Active })],
    )
    .phrases(&["Once during your turn", "heal"])
}

fn lifesteal() -> RuleDef {
    RuleDef::emit(
        "lifesteal",
        regex!(r"Heal from this Pokémon the same amount of damage you did to your opponent's Active Pokémon\."),
        "Heal from this Pokémon the same amount of damage you did to your opponent's Active Pokémon.",
        [EffectTemplate::new(EffectKind::Lifesteal).target(TargetKind::ThisPokemon)],
    )
    .phrases(&["Heal from this Pokémon"])
}

fn heal_at_end_of_turn() -> RuleDef {
    RuleDef::emit(
        "heal-at-end-of-turn",
        regex!(r"At the end of your turn, if this Pokémon is in the Active Spot, heal (\d+) damage from it\."),
        "At the end of your turn, if this Pokémon is in the Active Spot, heal 10 damage from it.",
        [EffectTemplate::new(EffectKind::Heal)
            .target(TargetKind::ThisPokemon)
            .amount_from(1)
            .cond(Condition::trigger(Trigger::EndOfTurn))
            .cond(Condition::Spot { spot: SpotKind::Active })],
    )
    .phrases(&["At the end of your turn"])
}

fn heal_team_typed() -> RuleDef {
    RuleDef::emit(
        "heal-team-typed",
        regex!(r"heal (\d+) damage from each of your \{([A-Z])\} Pokémon\."),
        "Once during your turn, you may heal 20 damage from each of your {W} Pokémon.",
        [EffectTemplate::new(EffectKind::Heal)
            .target(TargetKind::AllFriendly)
            .amount_from(1)
            .cond(Condition::trigger(Trigger::OncePerTurn))
            .cond_from(|c| Some(Condition::TargetFilter { filter: TargetFilter::OfType(c.energy(2)?) }))],
    )
    .phrases(&["heal", "each of your"])
}

fn heal_benched() -> RuleDef {
    RuleDef::emit(
        "heal-benched",
        regex!(r"Heal (\d+) damage from 1 of your Benched Pokémon\."),
        "Heal 30 damage from 1 of your Benched Pokémon.",
        [EffectTemplate::new(EffectKind::Heal).target(TargetKind::BenchedFriendly).amount_from(1)],
    )
    .phrases(&["Heal", "Benched"])
}

fn heal_on_heads() -> RuleDef {
    RuleDef::emit(
        "heal-on-heads",
        regex!(r"Flip a coin\. If heads, heal (\d+) damage from this Pokémon\."),
        "Flip a coin. If heads, heal 30 damage from this Pokémon.",
        [EffectTemplate::new(EffectKind::Heal)
            .target(TargetKind::ThisPokemon)
            .amount_from(1)
            .cond(Condition::coin_flip(FlipOutcome::Heads))],
    )
    .phrases(&["Flip a coin", "heal"])
}

fn heal_active_once_per_turn() -> RuleDef {
    RuleDef::emit(
        "heal-active-once-per-turn",
        regex!(r"Once during your turn, you may heal (\d+) damage from your Active Pokémon\."),
        "Once during your turn, you may heal 20 damage from your Active Pokémon.",
        [EffectTemplate::new(EffectKind::Heal)
            .target(TargetKind::ThisPokemon)
            .amount_from(1)
            .cond(Condition::trigger(Trigger::OncePerTurn))],
    )
    .phrases(&["Once during your turn", "heal"])
}

fn heal_on_energy_attach() -> RuleDef {
    RuleDef::emit(
        "heal-on-energy-attach",
        regex!(
            r"Whenever you attach a \{([A-Z])\} Energy from your Energy Zone to this Pokémon, heal (\d+) damage from this Pokémon\."
        ),
        "Whenever you attach a {P} Energy from your Energy Zone to this Pokémon, heal 20 damage from this Pokémon.",
        [EffectTemplate::new(EffectKind::Heal)
            .target(TargetKind::ThisPokemon)
            .amount_from(2)
            .cond(Condition::trigger(Trigger::AttachEnergySelf))
            .cond_from(|c| Some(Condition::energy([c.energy(1)?])))],
    )
    .phrases(&["Whenever you attach", "heal"])
}

pub fn get() -> Vec<RuleDef> {
    vec![
        heal_team(),
        heal_self(),
        heal_on_evolve(),
        heal_once_per_turn(),
        lifesteal(),
        heal_at_end_of_turn(),
        heal_team_typed(),
        heal_benched(),
        heal_on_heads(),
        heal_active_once_per_turn(),
        heal_on_energy_attach(),
    ]
}
