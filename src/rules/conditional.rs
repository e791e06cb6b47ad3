//! "…this attack does N more damage" phrasings and the game-state tests
//! that gate them.

use crate::condition::{Condition, FlipOutcome, ScaleBasis, Trigger};
use crate::effect::EffectKind;
use crate::rules::outcome::{EffectTemplate, RuleDef};

fn bonus(trigger: Trigger) -> EffectTemplate {
    EffectTemplate::new(EffectKind::ConditionalDamage).amount_from(1).cond(Condition::trigger(trigger))
}

fn bonus_extra_energy() -> RuleDef {
    RuleDef::emit(
        "bonus-extra-energy",
        regex!(
            r"If this Pokémon has at least (\d+) extra \{([A-Z])\} Energy attached, this attack does (\d+) more damage\."
        ),
        "If this Pokémon has at least 2 extra {L} Energy attached, this attack does 60 more damage.",
        [EffectTemplate::new(EffectKind::ConditionalDamage)
            .amount_from(3)
            .cond_from(|c| Some(Condition::EnergyThreshold { count: c.uint(1)?, energy: c.energy(2)? }))],
    )
    .phrases(&["extra", "Energy attached"])
}

fn bonus_opponent_hp_greater() -> RuleDef {
    RuleDef::emit(
        "bonus-opponent-hp-greater",
        regex!(
            r"If your opponent's Active Pokémon has more remaining HP than this Pokémon, this attack does (\d+) more damage\."
        ),
        "If your opponent's Active Pokémon has more remaining HP than this Pokémon, this attack does 60 more damage.",
        [bonus(Trigger::OpponentHpGreater)],
    )
    .phrases(&["more remaining HP"])
}

fn bonus_evolved_this_turn() -> RuleDef {
    RuleDef::emit(
        "bonus-evolved-this-turn",
        regex!(r"If this Pokémon evolved during this turn, this attack does (\d+) more damage\."),
        "If this Pokémon evolved during this turn, this attack does 40 more damage.",
        [bonus(Trigger::EvolvedThisTurn)],
    )
    .phrases(&["evolved during this turn"])
}

fn bonus_opponent_damaged() -> RuleDef {
    RuleDef::emit(
        "bonus-opponent-damaged",
        regex!(r"If your opponent's Active Pokémon has damage on it, this attack does (\d+) more damage\."),
        "If your opponent's Active Pokémon has damage on it, this attack does 60 more damage.",
        [bonus(Trigger::OpponentHasDamage)],
    )
    .phrases(&["has damage on it"])
}

fn bonus_opponent_tool() -> RuleDef {
    RuleDef::emit(
        "bonus-opponent-tool",
        regex!(
            r"If your opponent's Active Pokémon has a Pokémon Tool attached, this attack does (\d+) more damage\."
        ),
        "If your opponent's Active Pokémon has a Pokémon Tool attached, this attack does 30 more damage.",
        [bonus(Trigger::OpponentHasTool)],
    )
    .phrases(&["Pokémon Tool attached"])
}

fn bonus_played_supporter() -> RuleDef {
    RuleDef::emit(
        "bonus-played-supporter",
        regex!(
            r"If you played a Supporter card from your hand during this turn, this attack does (\d+) more damage\."
        ),
        "If you played a Supporter card from your hand during this turn, this attack does 60 more damage.",
        [bonus(Trigger::PlayedSupporterThisTurn)],
    )
    .phrases(&["Supporter card"])
}

fn bonus_self_tool() -> RuleDef {
    RuleDef::emit(
        "bonus-self-tool",
        regex!(r"If this Pokémon has a Pokémon Tool attached, this attack does (\d+) more damage\."),
        "If this Pokémon has a Pokémon Tool attached, this attack does 30 more damage.",
        [bonus(Trigger::SelfHasTool)],
    )
    .phrases(&["If this Pokémon has a Pokémon Tool"])
}

fn bonus_opponent_ability() -> RuleDef {
    RuleDef::emit(
        "bonus-opponent-ability",
        regex!(r"If your opponent's Active Pokémon has an Ability, this attack does (\d+) more damage\."),
        "If your opponent's Active Pokémon has an Ability, this attack does 30 more damage.",
        [bonus(Trigger::OpponentHasAbility)],
    )
    .phrases(&["has an Ability"])
}

fn bonus_switched_in() -> RuleDef {
    RuleDef::emit(
        "bonus-switched-in",
        regex!(
            r"If this Pokémon moved from your Bench to the Active Spot this turn, this attack does (\d+) more damage\."
        ),
        "If this Pokémon moved from your Bench to the Active Spot this turn, this attack does 60 more damage.",
        [bonus(Trigger::SwitchedInThisTurn)],
    )
    .phrases(&["moved from your Bench"])
}

fn bonus_on_heads() -> RuleDef {
    RuleDef::emit(
        "bonus-on-heads",
        regex!(r"(?i)Flip a coin(?: until you get tails)?\. If heads, this attack does (\d+) more damage(?: for each heads)?\."),
        "Flip a coin. If heads, this attack does 30 more damage.",
        [EffectTemplate::new(EffectKind::ConditionalDamage)
            .amount_from(1)
            .cond(Condition::scale_by(ScaleBasis::HeadsFlipped))],
    )
}

fn bonus_opponent_property() -> RuleDef {
    RuleDef::emit(
        "bonus-opponent-property",
        regex!(
            r"(?i)If your opponent's Active Pokémon is (a \{?[A-Z]\}? Pokémon|an Evolution Pokémon|a Pokémon \{?ex\}?), this attack does (\d+) more damage\."
        ),
        "If your opponent's Active Pokémon is an Evolution Pokémon, this attack does 60 more damage.",
        [EffectTemplate::new(EffectKind::ConditionalDamage)
            .amount_from(2)
            .cond_from(|c| Some(Condition::trigger(Trigger::OpponentIsProperty(c.text(1)?.to_uppercase()))))],
    )
}

fn bonus_after_knockout() -> RuleDef {
    RuleDef::emit(
        "bonus-after-knockout",
        regex!(
            r"If any of your Pokémon were Knocked Out by damage from an attack during your opponent's last turn, this attack does (\d+) more damage\."
        ),
        "If any of your Pokémon were Knocked Out by damage from an attack during your opponent's last turn, this attack does 60 more damage.",
        [bonus(Trigger::FriendlyKnockedOutLastTurn)],
    )
    .phrases(&["were Knocked Out"])
}

fn bonus_opponent_status() -> RuleDef {
    RuleDef::emit(
        "bonus-opponent-status",
        regex!(r"If your opponent's Active Pokémon is (Burned|Poisoned), this attack does (\d+) more damage\."),
        "If your opponent's Active Pokémon is Poisoned, this attack does 50 more damage.",
        [EffectTemplate::new(EffectKind::ConditionalDamage)
            .amount_from(2)
            .cond_from(|c| Some(Condition::trigger(Trigger::OpponentHasStatus(c.status(1)?))))],
    )
    .phrases(&["If your opponent's Active Pokémon is"])
}

fn bonus_undamaged() -> RuleDef {
    RuleDef::emit(
        "bonus-undamaged",
        regex!(r"If this Pokémon has no damage on it, this attack does (\d+) more damage\."),
        "If this Pokémon has no damage on it, this attack does 60 more damage.",
        [bonus(Trigger::SelfHasNoDamage)],
    )
    .phrases(&["no damage on it"])
}

fn bonus_different_energy() -> RuleDef {
    RuleDef::emit(
        "bonus-different-energy",
        regex!(
            r"If this Pokémon has (\d+) or more different types of Energy attached, this attack does (\d+) more damage\."
        ),
        "If this Pokémon has 3 or more different types of Energy attached, this attack does 150 more damage.",
        [EffectTemplate::new(EffectKind::ConditionalDamage)
            .amount_from(2)
            .cond_from(|c| Some(Condition::trigger(Trigger::DifferentEnergyTypes(c.uint(1)?))))],
    )
    .phrases(&["different types of Energy"])
}

fn bonus_double_heads() -> RuleDef {
    RuleDef::emit(
        "bonus-double-heads",
        regex!(r"Flip 2 coins\. If both of them are heads, this attack does (\d+) more damage\."),
        "Flip 2 coins. If both of them are heads, this attack does 80 more damage.",
        [EffectTemplate::new(EffectKind::ConditionalDamage)
            .amount_from(1)
            .cond(Condition::coin_flip(FlipOutcome::DoubleHeads))],
    )
    .phrases(&["Flip 2 coins"])
}

fn bonus_damaged_last_turn() -> RuleDef {
    RuleDef::emit(
        "bonus-damaged-last-turn",
        regex!(
            r"If this Pokémon was damaged by an attack during your opponent's last turn .*?, this attack does (\d+) more damage\."
        ),
        "If this Pokémon was damaged by an attack during your opponent's last turn (even if it was Knocked Out), this attack does 60 more damage.",
        [bonus(Trigger::DamagedLastTurn)],
    )
    .phrases(&["was damaged by an attack"])
}

fn bonus_self_damaged() -> RuleDef {
    RuleDef::emit(
        "bonus-self-damaged",
        regex!(r"If this Pokémon has damage on it, this attack does (\d+) more damage\."),
        "If this Pokémon has damage on it, this attack does 60 more damage.",
        [bonus(Trigger::SelfHasDamage)],
    )
    .phrases(&["If this Pokémon has damage on it"])
}

fn bonus_attack_history() -> RuleDef {
    RuleDef::emit(
        "bonus-attack-history",
        regex!(r"If 1 of your Pokémon used (.*?) during your last turn, this attack does (\d+) more damage\."),
        "If 1 of your Pokémon used Rollout during your last turn, this attack does 60 more damage.",
        [EffectTemplate::new(EffectKind::ConditionalDamage)
            .amount_from(2)
            .cond_from(|c| Some(Condition::trigger(Trigger::AttackUsedLastTurn(c.string(1)?))))],
    )
    .phrases(&["during your last turn"])
}

fn bonus_opponent_has_condition() -> RuleDef {
    RuleDef::emit(
        "bonus-opponent-has-condition",
        regex!(
            r"If your opponent's Active Pokémon is affected by a Special Condition, this attack does (\d+) more damage\."
        ),
        "If your opponent's Active Pokémon is affected by a Special Condition, this attack does 50 more damage.",
        [bonus(Trigger::OpponentHasSpecialCondition)],
    )
    .phrases(&["affected by a Special Condition"])
}

fn bonus_opponent_stage() -> RuleDef {
    RuleDef::emit(
        "bonus-opponent-stage",
        regex!(r"If your opponent's Active Pokémon is a (Basic) Pokémon, this attack does (\d+) more damage\."),
        "If your opponent's Active Pokémon is a Basic Pokémon, this attack does 60 more damage.",
        [EffectTemplate::new(EffectKind::ConditionalDamage)
            .amount_from(2)
            .cond_from(|c| Some(Condition::trigger(Trigger::OpponentIsStage(c.string(1)?))))],
    )
    .phrases(&["is a Basic Pokémon"])
}

fn bonus_benched_named() -> RuleDef {
    RuleDef::emit(
        "bonus-benched-named",
        regex!(r"If (\w+) is on your Bench, this attack does (\d+) more damage\."),
        "If Mankey is on your Bench, this attack does 40 more damage.",
        [EffectTemplate::new(EffectKind::ConditionalDamage)
            .amount_from(2)
            .cond_from(|c| Some(Condition::trigger(Trigger::BenchedNamed(c.string(1)?))))],
    )
    .phrases(&["is on your Bench"])
}

fn bonus_benched_damaged() -> RuleDef {
    RuleDef::emit(
        "bonus-benched-damaged",
        regex!(r"If any of your Benched Pokémon have damage on them, this attack does (\d+) more damage\."),
        "If any of your Benched Pokémon have damage on them, this attack does 40 more damage.",
        [bonus(Trigger::AnyBenchedFriendlyHasDamage)],
    )
    .phrases(&["Benched Pokémon have damage"])
}

fn bonus_opponent_named() -> RuleDef {
    RuleDef::emit(
        "bonus-opponent-named",
        regex!(r"If your opponent's Active Pokémon is (\w+), this attack does (\d+) more damage\."),
        "If your opponent's Active Pokémon is Garchomp, this attack does 80 more damage.",
        [EffectTemplate::new(EffectKind::ConditionalDamage)
            .amount_from(2)
            .cond_from(|c| Some(Condition::trigger(Trigger::OpponentIsNamed(c.string(1)?))))],
    )
    .phrases(&["If your opponent's Active Pokémon is"])
}

fn bonus_typed_energy() -> RuleDef {
    RuleDef::emit(
        "bonus-typed-energy",
        regex!(r"If this Pokémon has any \{([A-Z])\} Energy attached, this attack does (\d+) more damage\."),
        "If this Pokémon has any {W} Energy attached, this attack does 40 more damage.",
        [EffectTemplate::new(EffectKind::ConditionalDamage)
            .amount_from(2)
            .cond_from(|c| Some(Condition::trigger(Trigger::SelfHasEnergyOfType(c.energy(1)?))))],
    )
    .phrases(&["Energy attached"])
}

pub fn get() -> Vec<RuleDef> {
    vec![
        bonus_extra_energy(),
        bonus_opponent_hp_greater(),
        bonus_evolved_this_turn(),
        bonus_opponent_damaged(),
        bonus_opponent_tool(),
        bonus_played_supporter(),
        bonus_self_tool(),
        bonus_opponent_ability(),
        bonus_switched_in(),
        bonus_on_heads(),
        bonus_opponent_property(),
        bonus_after_knockout(),
        bonus_opponent_status(),
        bonus_undamaged(),
        bonus_different_energy(),
        bonus_double_heads(),
        bonus_damaged_last_turn(),
        bonus_self_damaged(),
        bonus_attack_history(),
        bonus_opponent_has_condition(),
        bonus_opponent_stage(),
        bonus_benched_named(),
        bonus_benched_damaged(),
        bonus_opponent_named(),
        bonus_typed_energy(),
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
    fn the_family_is_internally_shadow_free() {
        assert_eq!(set().len(), 25);
    }

    #[test]
    fn parameterized_triggers_carry_their_captures() {
        let set = set();

        let effects = set.parse("If your opponent's Active Pokémon is Poisoned, this attack does 50 more damage.");
        assert_eq!(effects[0].amount, Some(50));
        assert_eq!(
            effects[0].conditions,
            vec![Condition::trigger(Trigger::OpponentHasStatus(crate::effect::StatusCondition::Poisoned))]
        );

        let effects = set.parse("If your opponent's Active Pokémon is Garchomp, this attack does 80 more damage.");
        assert_eq!(
            effects[0].conditions,
            vec![Condition::trigger(Trigger::OpponentIsNamed("Garchomp".into()))]
        );

        let effects = set.parse("If this Pokémon has any {W} Energy attached, this attack does 40 more damage.");
        assert_eq!(
            effects[0].conditions,
            vec![Condition::trigger(Trigger::SelfHasEnergyOfType(crate::condition::EnergyKind::Water))]
        );
    }

    #[test]
    fn status_outranks_the_generic_name_rule() {
        // "Burned" also matches the bare-name pattern; the status rule is
        // earlier and must decide.
        let set = set();
        assert_eq!(
            set.deciding_rule("If your opponent's Active Pokémon is Burned, this attack does 40 more damage."),
            Some("bonus-opponent-status")
        );
    }
}
