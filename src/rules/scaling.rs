//! Damage that repeats per unit of some game quantity.
//!
//! The benched-count cluster is ordered specific → generic: the count/type
//! rules come before the named-Pokémon rules, whose `(\w+)`/`(.*?)` captures
//! would otherwise swallow the literal word "Pokémon".

use crate::condition::{Condition, ScaleBasis, TargetFilter};
use crate::effect::{EffectKind, TargetKind};
use crate::rules::outcome::{EffectTemplate, RuleDef};

fn scaling(basis: ScaleBasis) -> EffectTemplate {
    EffectTemplate::new(EffectKind::ScalingDamage).amount_from(1).cond(Condition::scale_by(basis))
}

fn per_opponent_retreat_cost() -> RuleDef {
    RuleDef::emit(
        "per-opponent-retreat-cost",
        regex!(
            r"This attack does (\d+) more damage for each Energy in your opponent's Active Pokémon's Retreat Cost\."
        ),
        "This attack does 20 more damage for each Energy in your opponent's Active Pokémon's Retreat Cost.",
        [scaling(ScaleBasis::OpponentRetreatCost)],
    )
    .phrases(&["Retreat Cost"])
}

fn per_own_damage() -> RuleDef {
    RuleDef::emit(
        "per-own-damage",
        regex!(r"This attack does more damage equal to the damage this Pokémon has on it\."),
        "This attack does more damage equal to the damage this Pokémon has on it.",
        [EffectTemplate::new(EffectKind::ScalingDamage).cond(Condition::scale_by(ScaleBasis::SelfDamage))],
    )
    .phrases(&["more damage equal to the damage"])
}

fn per_own_typed_energy() -> RuleDef {
    RuleDef::emit(
        "per-own-typed-energy",
        regex!(r"This attack does (\d+) more damage for each \{([A-Z])\} Energy attached to this Pokémon\."),
        "This attack does 20 more damage for each {W} Energy attached to this Pokémon.",
        [EffectTemplate::new(EffectKind::ScalingDamage)
            .amount_from(1)
            .cond_from(|c| Some(Condition::scale_by(ScaleBasis::SelfAttachedEnergyOfType(c.energy(2)?))))],
    )
    .phrases(&["Energy attached to this Pokémon"])
}

fn per_opponent_energy() -> RuleDef {
    RuleDef::emit(
        "per-opponent-energy",
        regex!(r"This attack does (\d+) more damage for each Energy attached to your opponent's Active Pokémon\."),
        "This attack does 30 more damage for each Energy attached to your opponent's Active Pokémon.",
        [scaling(ScaleBasis::OpponentAttachedEnergy)],
    )
    .phrases(&["Energy attached to your opponent's Active"])
}

fn snipe_per_target_energy() -> RuleDef {
    RuleDef::emit(
        "snipe-per-target-energy",
        regex!(
            r"This attack does (\d+) damage to 1 of your opponent's Pokémon for each Energy attached to that Pokémon\."
        ),
        "This attack does 20 damage to 1 of your opponent's Pokémon for each Energy attached to that Pokémon.",
        [EffectTemplate::new(EffectKind::ScalingSnipeDamage)
            .amount_from(1)
            .cond(Condition::scale_by(ScaleBasis::TargetAttachedEnergy))],
    )
    .phrases(&["for each Energy attached to that Pokémon"])
}

fn per_heads() -> RuleDef {
    RuleDef::emit(
        "per-heads",
        regex!(r"Flip (\d+) coins\. This attack does (\d+) damage for each heads\."),
        "Flip 3 coins. This attack does 30 damage for each heads.",
        [EffectTemplate::new(EffectKind::ScalingDamage)
            .amount_from(2)
            .cond(Condition::scale_by(ScaleBasis::HeadsFlipped))
            .cond_from(|c| Some(Condition::FlipCount { flips: c.uint(1)? }))],
    )
    .phrases(&["coins", "for each heads"])
}

fn per_benched_count() -> RuleDef {
    RuleDef::emit(
        "per-benched-count",
        regex!(r"This attack does (\d+) more damage for each of your Benched Pokémon\."),
        "This attack does 10 more damage for each of your Benched Pokémon.",
        [scaling(ScaleBasis::FriendlyBenchedCount)],
    )
    .phrases(&["for each of your Benched Pokémon."])
}

fn per_benched_evolution() -> RuleDef {
    RuleDef::emit(
        "per-benched-evolution",
        regex!(r"This attack does (\d+) more damage for each Evolution Pokémon on your Bench\."),
        "This attack does 20 more damage for each Evolution Pokémon on your Bench.",
        [scaling(ScaleBasis::BenchedEvolutionCount)],
    )
    .phrases(&["Evolution Pokémon on your Bench"])
}

fn per_benched_typed() -> RuleDef {
    RuleDef::emit(
        "per-benched-typed",
        regex!(r"This attack does (\d+) damage for each of your Benched \{([A-Z])\} Pokémon\."),
        "This attack does 50 damage for each of your Benched {F} Pokémon.",
        [EffectTemplate::new(EffectKind::ScalingDamage)
            .amount_from(1)
            .cond_from(|c| Some(Condition::scale_by(ScaleBasis::BenchedOfType(c.energy(2)?))))],
    )
    .phrases(&["for each of your Benched"])
}

fn per_benched_base() -> RuleDef {
    RuleDef::emit(
        "per-benched-base",
        regex!(r"This attack does (\d+) damage for each of your Benched Pokémon\."),
        "This attack does 30 damage for each of your Benched Pokémon.",
        [scaling(ScaleBasis::FriendlyBenchedCount).cond(Condition::BaseDamage)],
    )
    .phrases(&["for each of your Benched Pokémon."])
}

fn per_opponent_benched() -> RuleDef {
    RuleDef::emit(
        "per-opponent-benched",
        regex!(r"This attack does (\d+) more damage for each of your opponent's Benched Pokémon\."),
        "This attack does 10 more damage for each of your opponent's Benched Pokémon.",
        [scaling(ScaleBasis::OpponentBenchedCount)],
    )
    .phrases(&["for each of your opponent's Benched"])
}

fn per_benched_named() -> RuleDef {
    RuleDef::emit(
        "per-benched-named",
        regex!(r"This attack does (\d+) more damage for each of your Benched (\w+)\."),
        "This attack does 10 more damage for each of your Benched Pikachu.",
        [EffectTemplate::new(EffectKind::ScalingDamage)
            .amount_from(1)
            .cond_from(|c| Some(Condition::scale_by(ScaleBasis::BenchedNamed(vec![c.string(2)?]))))],
    )
    .phrases(&["for each of your Benched"])
}

fn per_benched_named_list() -> RuleDef {
    RuleDef::emit(
        "per-benched-named-list",
        regex!(r"This attack does (\d+) more damage for each of your Benched (.*?)\."),
        "This attack does 40 more damage for each of your Benched Wishiwashi and Wishiwashi ex.",
        [EffectTemplate::new(EffectKind::ScalingDamage)
            .amount_from(1)
            .cond_from(|c| Some(Condition::scale_by(ScaleBasis::BenchedNamed(c.names_and(2)?))))],
    )
    .phrases(&["for each of your Benched"])
}

fn per_energy_flips() -> RuleDef {
    RuleDef::emit(
        "per-energy-flips",
        regex!(
            r"Flip a coin for each Energy attached to this Pokémon\. This attack does (\d+) damage for each heads\."
        ),
        "Flip a coin for each Energy attached to this Pokémon. This attack does 20 damage for each heads.",
        [EffectTemplate::new(EffectKind::ScalingDamage)
            .amount_from(1)
            .cond(Condition::scale_by(ScaleBasis::HeadsFlipped))
            .cond(Condition::FlipPer { per: ScaleBasis::SelfAttachedEnergy })],
    )
    .phrases(&["Flip a coin for each Energy"])
}

fn per_all_benched() -> RuleDef {
    RuleDef::emit(
        "per-all-benched",
        regex!(r"This attack does (\d+) damage for each Benched Pokémon \(both yours and your opponent's\)\."),
        "This attack does 20 damage for each Benched Pokémon (both yours and your opponent's).",
        [scaling(ScaleBasis::AllBenchedCount)],
    )
    .phrases(&["both yours and your opponent's"])
}

fn per_typed_energy_flips() -> RuleDef {
    RuleDef::emit(
        "per-typed-energy-flips",
        regex!(
            r"Flip a coin for each \{([A-Z])\} Energy attached to this Pokémon\. This attack does (\d+) damage for each heads\."
        ),
        "Flip a coin for each {F} Energy attached to this Pokémon. This attack does 50 damage for each heads.",
        [EffectTemplate::new(EffectKind::ScalingDamage)
            .amount_from(2)
            .cond(Condition::scale_by(ScaleBasis::HeadsFlipped))
            .cond_from(|c| Some(Condition::FlipPer { per: ScaleBasis::SelfAttachedEnergyOfType(c.energy(1)?) }))],
    )
    .phrases(&["Flip a coin for each"])
}

fn heads_until_tails() -> RuleDef {
    RuleDef::emit(
        "heads-until-tails",
        regex!(r"Flip a coin until you get tails\. This attack does (\d+) damage for each heads\."),
        "Flip a coin until you get tails. This attack does 30 damage for each heads.",
        [scaling(ScaleBasis::HeadsUntilTails)],
    )
    .phrases(&["until you get tails"])
}

fn per_pokemon_in_play_flips() -> RuleDef {
    RuleDef::emit(
        "per-pokemon-in-play-flips",
        regex!(
            r"Flip a coin for each Pokémon you have in play\. This attack does (\d+) damage for each heads\."
        ),
        "Flip a coin for each Pokémon you have in play. This attack does 30 damage for each heads.",
        [EffectTemplate::new(EffectKind::ScalingDamage)
            .amount_from(1)
            .cond(Condition::scale_by(ScaleBasis::HeadsFlipped))
            .cond(Condition::FlipPer { per: ScaleBasis::PokemonInPlay })],
    )
    .phrases(&["for each Pokémon you have in play"])
}

fn per_attack_use() -> RuleDef {
    RuleDef::emit(
        "per-attack-use",
        regex!(r"This attack does (\d+) damage for each time your Pokémon used (.*?) during this game\."),
        "This attack does 40 damage for each time your Pokémon used Pile On during this game.",
        [EffectTemplate::new(EffectKind::ScalingDamage)
            .amount_from(1)
            .cond_from(|c| Some(Condition::scale_by(ScaleBasis::AttackUseCount(c.string(2)?))))],
    )
    .phrases(&["for each time your Pokémon used"])
}

fn per_all_opponent_energy() -> RuleDef {
    RuleDef::emit(
        "per-all-opponent-energy",
        regex!(r"This attack does (\d+) damage for each Energy attached to all of your opponent's Pokémon\."),
        "This attack does 20 damage for each Energy attached to all of your opponent's Pokémon.",
        [scaling(ScaleBasis::AllOpponentAttachedEnergy).cond(Condition::BaseDamage)],
    )
    .phrases(&["Energy attached to all of your opponent's"])
}

fn per_discarded_tool() -> RuleDef {
    RuleDef::emit(
        "per-discarded-tool",
        regex!(
            r"Discard up to (\d+) Pokémon Tool cards from your hand\. This attack does (\d+) damage for each card you discarded in this way\."
        ),
        "Discard up to 3 Pokémon Tool cards from your hand. This attack does 40 damage for each card you discarded in this way.",
        [EffectTemplate::new(EffectKind::ScalingDamage)
            .amount_from(2)
            .cond(Condition::scale_by(ScaleBasis::DiscardedToolCount))
            .cond_from(|c| Some(Condition::UpTo { limit: c.uint(1)? }))],
    )
    .phrases(&["Discard up to"])
}

fn per_own_energy() -> RuleDef {
    RuleDef::emit(
        "per-own-energy",
        regex!(r"This attack does (\d+) more damage for each Energy attached to this Pokémon\."),
        "This attack does 10 more damage for each Energy attached to this Pokémon.",
        [scaling(ScaleBasis::SelfAttachedEnergy)],
    )
    .phrases(&["for each Energy attached to this Pokémon"])
}

/// Two coupled effects: the optional bench discard, then the scaling bonus.
fn discard_bench_for_power() -> RuleDef {
    RuleDef::emit(
        "discard-bench-for-power",
        regex!(
            r"You may discard any number of your Benched \{([A-Z])\} Pokémon\. This attack does (\d+) more damage for each Benched Pokémon you discarded in this way\."
        ),
        "You may discard any number of your Benched {W} Pokémon. This attack does 40 more damage for each Benched Pokémon you discarded in this way.",
        [
            EffectTemplate::new(EffectKind::DiscardBenched)
                .target(TargetKind::BenchedFriendly)
                .cond(Condition::PlayerChoice)
                .cond_from(|c| Some(Condition::TargetFilter { filter: TargetFilter::OfType(c.energy(1)?) })),
            EffectTemplate::new(EffectKind::ScalingDamage)
                .amount_from(2)
                .cond(Condition::scale_by(ScaleBasis::DiscardedBenchedCount)),
        ],
    )
    .phrases(&["discard any number of your Benched"])
}

pub fn get() -> Vec<RuleDef> {
    vec![
        per_opponent_retreat_cost(),
        per_own_damage(),
        per_own_typed_energy(),
        per_opponent_energy(),
        snipe_per_target_energy(),
        per_heads(),
        per_benched_count(),
        per_benched_evolution(),
        per_benched_typed(),
        per_benched_base(),
        per_opponent_benched(),
        per_benched_named(),
        per_benched_named_list(),
        per_energy_flips(),
        per_all_benched(),
        per_typed_energy_flips(),
        heads_until_tails(),
        per_pokemon_in_play_flips(),
        per_attack_use(),
        per_all_opponent_energy(),
        per_discarded_tool(),
        per_own_energy(),
        discard_bench_for_power(),
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
    fn benched_cluster_is_ordered_specific_first() {
        let set = set();
        // The literal word "Pokémon" must reach the count rules, never the
        // named-Pokémon captures.
        assert_eq!(
            set.deciding_rule("This attack does 10 more damage for each of your Benched Pokémon."),
            Some("per-benched-count")
        );
        assert_eq!(
            set.deciding_rule("This attack does 10 more damage for each of your Benched Pikachu."),
            Some("per-benched-named")
        );
        // Apostrophes fall through (\w+) to the list rule.
        assert_eq!(
            set.deciding_rule("This attack does 10 more damage for each of your Benched Farfetch'd."),
            Some("per-benched-named-list")
        );
    }

    #[test]
    fn discard_bench_composite_keeps_source_order() {
        let effects = set().parse(
            "You may discard any number of your Benched {W} Pokémon. This attack does 40 more damage for each Benched Pokémon you discarded in this way.",
        );
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0].kind, EffectKind::DiscardBenched);
        assert_eq!(effects[1].kind, EffectKind::ScalingDamage);
        assert_eq!(effects[1].amount, Some(40));
    }

    #[test]
    fn flip_scaling_records_both_rate_and_pool() {
        let effects = set().parse(
            "Flip a coin for each {F} Energy attached to this Pokémon. This attack does 50 damage for each heads.",
        );
        assert_eq!(effects[0].amount, Some(50));
        assert!(effects[0].conditions.contains(&Condition::scale_by(ScaleBasis::HeadsFlipped)));
        assert!(effects[0].conditions.contains(&Condition::FlipPer {
            per: ScaleBasis::SelfAttachedEnergyOfType(crate::condition::EnergyKind::Fighting)
        }));
    }
}
