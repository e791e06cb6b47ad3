//! Late, case-insensitive variants of phrasings that appear with irregular
//! casing or punctuation in the source data (ASCII hyphens instead of the
//! usual U+2212, curly apostrophes, lowercase sentence starts).
//!
//! These sit at the very end of the table so the canonical, case-sensitive
//! entries always win first. The self-harden variant precedes the bare
//! damage-reduction variant because the latter's pattern is a substring of
//! the former's text.

use crate::condition::{
    Condition, DurationKind, FlipOutcome, PassiveEffect, Restriction, ScaleBasis, SearchFilter,
    TargetFilter, Trigger, Zone,
};
use crate::effect::{EffectKind, TargetKind};
use crate::rules::outcome::{EffectTemplate, RuleDef};

fn bonus_multi_heads_lenient() -> RuleDef {
    RuleDef::emit(
        "bonus-multi-heads-lenient",
        regex!(r"(?i)Flip (\d+) coins\. This attack does (\d+) more damage for each heads\."),
        "Flip 2 coins. This attack does 30 more damage for each heads.",
        [EffectTemplate::new(EffectKind::ScalingDamage)
            .amount_from(2)
            .cond(Condition::scale_by(ScaleBasis::HeadsFlipped))
            .cond_from(|c| Some(Condition::FlipCount { flips: c.uint(1)? }))],
    )
}

fn harden_lenient() -> RuleDef {
    RuleDef::emit(
        "harden-lenient",
        regex!(r"(?i)During your opponent's next turn, this Pokémon takes -(\d+) damage from attacks\."),
        "During your opponent's next turn, this Pokémon takes -30 damage from attacks.",
        [EffectTemplate::new(EffectKind::ReduceIncomingDamage)
            .target(TargetKind::ThisPokemon)
            .amount_from(1)
            .cond(Condition::duration(DurationKind::OpponentNextTurn))],
    )
}

fn damage_reduction_lenient() -> RuleDef {
    RuleDef::emit(
        "damage-reduction-lenient",
        regex!(r"(?i)This Pokémon takes -(\d+) damage from attacks\."),
        "This Pokémon takes -20 damage from attacks.",
        [EffectTemplate::new(EffectKind::PassiveAbility)
            .cond_from(|c| Some(Condition::passive(PassiveEffect::ReduceIncomingDamage { amount: c.uint(1)? })))],
    )
}

fn discard_opponent_energy_lenient() -> RuleDef {
    RuleDef::emit(
        "discard-opponent-energy-lenient",
        regex!(r"(?i)Discard a random Energy from your opponent's Active Pokémon\."),
        "Discard a random Energy from your opponent's Active Pokémon.",
        [EffectTemplate::new(EffectKind::DiscardEnergy)
            .target(TargetKind::OpponentActive)
            .amount(1)
            .cond(Condition::Random)],
    )
}

fn bonus_until_tails_lenient() -> RuleDef {
    RuleDef::emit(
        "bonus-until-tails-lenient",
        regex!(r"(?i)Flip a coin until you get tails\. This attack does (\d+) more damage for each heads\."),
        "Flip a coin until you get tails. This attack does 30 more damage for each heads.",
        [EffectTemplate::new(EffectKind::ConditionalDamage)
            .amount_from(1)
            .cond(Condition::scale_by(ScaleBasis::HeadsUntilTails))],
    )
}

fn per_opponent_energy_base_lenient() -> RuleDef {
    RuleDef::emit(
        "per-opponent-energy-base-lenient",
        regex!(r"(?i)This attack does (\d+) damage for each Energy attached to your opponent's Active Pokémon\."),
        "This attack does 20 damage for each Energy attached to your opponent's Active Pokémon.",
        [EffectTemplate::new(EffectKind::ScalingDamage)
            .amount_from(1)
            .cond(Condition::BaseDamage)
            .cond(Condition::scale_by(ScaleBasis::OpponentAttachedEnergy))],
    )
}

fn attach_active_typed_lenient() -> RuleDef {
    RuleDef::emit(
        "attach-active-typed-lenient",
        regex!(
            r"(?i)you may take 1? \{([A-Z])\} Energy from your Energy Zone and attach it to the \{([A-Z])\} Pokémon in the Active Spot\."
        ),
        "Once during your turn, you may take 1 {L} Energy from your Energy Zone and attach it to the {L} Pokémon in the Active Spot.",
        [EffectTemplate::new(EffectKind::AttachEnergy)
            .cond(Condition::trigger(Trigger::OncePerTurn))
            .cond(Condition::EnergySource { source: Zone::EnergyZone })
            .cond_from(|c| Some(Condition::energy([c.energy(1)?])))
            .cond(Condition::Destination { zone: Zone::Active })
            .cond_from(|c| Some(Condition::TargetFilter { filter: TargetFilter::OfType(c.energy(2)?) }))],
    )
}

fn bonus_opponent_ex_lenient() -> RuleDef {
    RuleDef::emit(
        "bonus-opponent-ex-lenient",
        regex!(r"(?i)If your opponent’s Active Pokémon is a Pokémon \{ex\}, this attack does (\d+) more damage\."),
        "If your opponent’s Active Pokémon is a Pokémon {ex}, this attack does 30 more damage.",
        [EffectTemplate::new(EffectKind::ConditionalDamage)
            .amount_from(1)
            .cond(Condition::trigger(Trigger::OpponentIsEx))],
    )
}

fn discard_own_on_tails_lenient() -> RuleDef {
    RuleDef::emit(
        "discard-own-on-tails-lenient",
        regex!(r"(?i)Flip a coin\. If tails, discard (\d+) random Energy from this Pokémon\."),
        "Flip a coin. If tails, discard 2 random Energy from this Pokémon.",
        [EffectTemplate::new(EffectKind::DiscardEnergy)
            .target(TargetKind::ThisPokemon)
            .amount_from(1)
            .cond(Condition::coin_flip(FlipOutcome::Tails))
            .cond(Condition::Random)],
    )
}

fn drag_on_heads_lenient() -> RuleDef {
    RuleDef::emit(
        "drag-on-heads-lenient",
        regex!(r"(?i)Flip a coin\. If heads, switch in 1 of your opponent's Benched Pokémon to the Active Spot\."),
        "Flip a coin. If heads, switch in 1 of your opponent's Benched Pokémon to the Active Spot.",
        [EffectTemplate::new(EffectKind::ForceSwitch)
            .target(TargetKind::OpponentActive)
            .cond(Condition::coin_flip(FlipOutcome::Heads))],
    )
}

fn raise_attack_cost_lenient() -> RuleDef {
    RuleDef::emit(
        "raise-attack-cost-lenient",
        regex!(
            r"(?i)During your opponent's next turn, attacks used by the Defending Pokémon cost (\d+) \{([A-Z])\} more\."
        ),
        "During your opponent's next turn, attacks used by the Defending Pokémon cost 1 {C} more.",
        [EffectTemplate::new(EffectKind::ApplyRestriction)
            .target(TargetKind::OpponentActive)
            .cond_from(|c| {
                Some(Condition::restriction(Restriction::IncreaseAttackCost {
                    amount: c.uint(1)?,
                    energy: c.energy(2)?,
                }))
            })
            .cond(Condition::duration(DurationKind::OpponentNextTurn))],
    )
}

fn veil_lenient() -> RuleDef {
    RuleDef::emit(
        "veil-lenient",
        regex!(
            r"(?i)Flip a coin\. If heads, during your opponent’s next turn, prevent all damage from—and effects of—attacks done to this Pokémon\."
        ),
        "Flip a coin. If heads, during your opponent’s next turn, prevent all damage from—and effects of—attacks done to this Pokémon.",
        [EffectTemplate::new(EffectKind::ApplyPrevention)
            .target(TargetKind::ThisPokemon)
            .cond(Condition::coin_flip(FlipOutcome::Heads))
            .cond(Condition::duration(DurationKind::OpponentNextTurn))
            .cond(Condition::Prevents { damage: true, effects: true })],
    )
}

fn search_any_lenient() -> RuleDef {
    RuleDef::emit(
        "search-any-lenient",
        regex!(r"(?i)Once during your turn, you may put a random Pokémon from your deck into your hand\."),
        "Once during your turn, you may put a random Pokémon from your deck into your hand.",
        [EffectTemplate::new(EffectKind::SearchDeck)
            .target(TargetKind::Deck)
            .amount(1)
            .cond(Condition::trigger(Trigger::OncePerTurn))
            .cond(Condition::Search { destination: Zone::Hand, random: true, filter: Some(SearchFilter::Any) })],
    )
}

fn push_out_lenient() -> RuleDef {
    RuleDef::emit(
        "push-out-lenient",
        regex!(r"(?i)Switch out your opponent’s Active Pokémon to the Bench\."),
        "switch out your opponent’s Active Pokémon to the Bench.",
        [EffectTemplate::new(EffectKind::ForceSwitch).target(TargetKind::OpponentActive)],
    )
}

fn push_out_with_note() -> RuleDef {
    RuleDef::emit(
        "push-out-with-note",
        regex!(
            r"Switch out your opponent's Active Pokémon to the Bench\. \(Your opponent chooses the new Active Pokémon\.\)"
        ),
        "Switch out your opponent's Active Pokémon to the Bench. (Your opponent chooses the new Active Pokémon.)",
        [EffectTemplate::new(EffectKind::ForceSwitch).target(TargetKind::OpponentActive)],
    )
    .phrases(&["(Your opponent chooses the new Active Pokémon.)"])
}

pub fn get() -> Vec<RuleDef> {
    vec![
        bonus_multi_heads_lenient(),
        harden_lenient(),
        damage_reduction_lenient(),
        discard_opponent_energy_lenient(),
        bonus_until_tails_lenient(),
        per_opponent_energy_base_lenient(),
        attach_active_typed_lenient(),
        bonus_opponent_ex_lenient(),
        discard_own_on_tails_lenient(),
        drag_on_heads_lenient(),
        raise_attack_cost_lenient(),
        veil_lenient(),
        search_any_lenient(),
        push_out_lenient(),
        push_out_with_note(),
    ]
}
