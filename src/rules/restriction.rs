//! Restrictions, prevention shields, damage modifiers and attack buffs
//! applied as effects (the passive-ability counterparts live in
//! `passive.rs`).

use crate::condition::{Condition, DurationKind, FlipOutcome, Restriction, TargetFilter};
use crate::effect::{EffectKind, TargetKind};
use crate::rules::outcome::{EffectTemplate, RuleDef};

fn cant_attack_next_turn() -> RuleDef {
    RuleDef::emit(
        "cant-attack-next-turn",
        regex!(r"During your next turn, this Pokémon can't attack\."),
        "During your next turn, this Pokémon can't attack.",
        [EffectTemplate::new(EffectKind::RestrictionCantAttack)
            .target(TargetKind::ThisPokemon)
            .cond(Condition::duration(DurationKind::NextTurn))],
    )
    .phrases(&["this Pokémon can't attack"])
}

fn coin_flip_or_nothing() -> RuleDef {
    RuleDef::emit(
        "coin-flip-or-nothing",
        regex!(r"Flip a coin\. If tails, this attack does nothing\."),
        "Flip a coin. If tails, this attack does nothing.",
        [EffectTemplate::new(EffectKind::AttackMayFail).cond(Condition::coin_flip(FlipOutcome::Tails))],
    )
    .phrases(&["this attack does nothing"])
}

fn weaken_defender() -> RuleDef {
    RuleDef::emit(
        "weaken-defender",
        regex!(r"attacks used by the Defending Pokémon do −(\d+) damage\."),
        "During your opponent's next turn, attacks used by the Defending Pokémon do −30 damage.",
        [EffectTemplate::new(EffectKind::ReduceIncomingDamage)
            .target(TargetKind::OpponentActive)
            .amount_from(1)
            .cond(Condition::duration(DurationKind::NextTurn))],
    )
    .phrases(&["Defending Pokémon do −"])
}

fn trap_defender() -> RuleDef {
    RuleDef::emit(
        "trap-defender",
        regex!(r"the Defending Pokémon can't retreat\."),
        "During your opponent's next turn, the Defending Pokémon can't retreat.",
        [EffectTemplate::new(EffectKind::ApplyRestriction)
            .target(TargetKind::OpponentActive)
            .cond(Condition::restriction(Restriction::CantRetreat))
            .cond(Condition::duration(DurationKind::NextTurn))],
    )
    .phrases(&["can't retreat"])
}

fn harden_self() -> RuleDef {
    RuleDef::emit(
        "harden-self",
        regex!(r"During your opponent's next turn, this Pokémon takes −(\d+) damage from attacks\."),
        "During your opponent's next turn, this Pokémon takes −30 damage from attacks.",
        [EffectTemplate::new(EffectKind::ReduceIncomingDamage)
            .target(TargetKind::ThisPokemon)
            .amount_from(1)
            .cond(Condition::duration(DurationKind::OpponentNextTurn))],
    )
    .phrases(&["this Pokémon takes −"])
}

fn veil_on_heads() -> RuleDef {
    RuleDef::emit(
        "veil-on-heads",
        regex!(
            r"If heads, during your opponent's next turn, prevent all damage from—and effects of—attacks done to this Pokémon\."
        ),
        "Flip a coin. If heads, during your opponent's next turn, prevent all damage from—and effects of—attacks done to this Pokémon.",
        [EffectTemplate::new(EffectKind::ApplyPrevention)
            .target(TargetKind::ThisPokemon)
            .cond(Condition::coin_flip(FlipOutcome::Heads))
            .cond(Condition::duration(DurationKind::OpponentNextTurn))
            .cond(Condition::Prevents { damage: true, effects: true })],
    )
    .phrases(&["prevent all damage from—and effects of—"])
}

/// One sentence, two coupled restrictions: attack cost first, retreat cost
/// second, as written.
fn raise_costs() -> RuleDef {
    RuleDef::emit(
        "raise-costs",
        regex!(
            r"attacks used by the Defending Pokémon cost (\d+) \{([A-Z])\} more, and its Retreat Cost is (\d+) \{([A-Z])\} more\."
        ),
        "During your opponent's next turn, attacks used by the Defending Pokémon cost 1 {C} more, and its Retreat Cost is 1 {C} more.",
        [
            EffectTemplate::new(EffectKind::ApplyRestriction)
                .target(TargetKind::OpponentActive)
                .cond_from(|c| {
                    Some(Condition::restriction(Restriction::IncreaseAttackCost {
                        amount: c.uint(1)?,
                        energy: c.energy(2)?,
                    }))
                })
                .cond(Condition::duration(DurationKind::OpponentNextTurn)),
            EffectTemplate::new(EffectKind::ApplyRestriction)
                .target(TargetKind::OpponentActive)
                .cond_from(|c| {
                    Some(Condition::restriction(Restriction::IncreaseRetreatCost {
                        amount: c.uint(3)?,
                        energy: c.energy(4)?,
                    }))
                })
                .cond(Condition::duration(DurationKind::OpponentNextTurn)),
        ],
    )
    .phrases(&["Retreat Cost is"])
}

fn empower_attack_next_turn() -> RuleDef {
    RuleDef::emit(
        "empower-attack-next-turn",
        regex!(r"(?i)During your next turn, this Pokémon's ([\w\s]+) attack does \+(\d+) damage\."),
        "During your next turn, this Pokémon's Thunder Spear attack does +60 damage.",
        [EffectTemplate::new(EffectKind::BuffNextTurn)
            .target(TargetKind::ThisPokemon)
            .amount_from(2)
            .cond_from(|c| Some(Condition::AttackName { name: c.string(1)? }))],
    )
}

fn shield_on_heads() -> RuleDef {
    RuleDef::emit(
        "shield-on-heads",
        regex!(
            r"If heads, during your opponent's next turn, prevent all damage done to this Pokémon by attacks\."
        ),
        "Flip a coin. If heads, during your opponent's next turn, prevent all damage done to this Pokémon by attacks.",
        [EffectTemplate::new(EffectKind::ApplyPrevention)
            .target(TargetKind::ThisPokemon)
            .cond(Condition::coin_flip(FlipOutcome::Heads))
            .cond(Condition::duration(DurationKind::OpponentNextTurn))
            .cond(Condition::Prevents { damage: true, effects: false })],
    )
    .phrases(&["prevent all damage done to this Pokémon"])
}

fn seal_attack() -> RuleDef {
    RuleDef::emit(
        "seal-attack",
        regex!(r"During your next turn, this Pokémon can't use (.*?)\."),
        "During your next turn, this Pokémon can't use Hyper Beam.",
        [EffectTemplate::new(EffectKind::ApplyRestriction)
            .target(TargetKind::ThisPokemon)
            .cond_from(|c| Some(Condition::restriction(Restriction::CantUseAttack(c.string(1)?))))
            .cond(Condition::duration(DurationKind::NextTurn))],
    )
    .phrases(&["this Pokémon can't use"])
}

fn hand_block() -> RuleDef {
    RuleDef::emit(
        "hand-block",
        regex!(r"Your opponent can't use any (.*?) cards from their hand during their next turn\."),
        "Your opponent can't use any Supporter cards from their hand during their next turn.",
        [EffectTemplate::new(EffectKind::ApplyRestriction)
            .target(TargetKind::OpponentActive)
            .cond_from(|c| Some(Condition::restriction(Restriction::CantPlayCardType(c.string(1)?))))
            .cond(Condition::duration(DurationKind::OpponentNextTurn))],
    )
    .phrases(&["during their next turn"])
}

fn item_block() -> RuleDef {
    RuleDef::emit(
        "item-block",
        regex!(r"During your opponent's next turn, they can't play any Item cards from their hand\."),
        "During your opponent's next turn, they can't play any Item cards from their hand.",
        [EffectTemplate::new(EffectKind::ApplyRestriction)
            .cond(Condition::restriction(Restriction::CantPlayCardType("Item".into())))
            .cond(Condition::duration(DurationKind::OpponentNextTurn))],
    )
    .phrases(&["can't play any Item cards"])
}

fn stop_defender() -> RuleDef {
    RuleDef::emit(
        "stop-defender",
        regex!(r"the Defending Pokémon can't attack\."),
        "During your opponent's next turn, the Defending Pokémon can't attack.",
        [EffectTemplate::new(EffectKind::ApplyRestriction)
            .target(TargetKind::OpponentActive)
            .cond(Condition::restriction(Restriction::CantAttack))
            .cond(Condition::duration(DurationKind::OpponentNextTurn))],
    )
    .phrases(&["the Defending Pokémon can't attack."])
}

fn stage_lock() -> RuleDef {
    RuleDef::emit(
        "stage-lock",
        regex!(
            r"If the Defending Pokémon is a (Basic) Pokémon, it can't attack during your opponent's next turn\."
        ),
        "If the Defending Pokémon is a Basic Pokémon, it can't attack during your opponent's next turn.",
        [EffectTemplate::new(EffectKind::ApplyRestriction)
            .target(TargetKind::OpponentActive)
            .cond(Condition::restriction(Restriction::CantAttack))
            .cond(Condition::duration(DurationKind::OpponentNextTurn))
            .cond_from(|c| Some(Condition::TargetFilter { filter: TargetFilter::Stage(c.string(1)?) }))],
    )
    .phrases(&["If the Defending Pokémon is a Basic"])
}

fn fumble_chance() -> RuleDef {
    RuleDef::emit(
        "fumble-chance",
        regex!(
            r"if the Defending Pokémon tries to use an attack, your opponent flips a coin\. If tails, that attack doesn't happen\."
        ),
        "During your opponent's next turn, if the Defending Pokémon tries to use an attack, your opponent flips a coin. If tails, that attack doesn't happen.",
        [EffectTemplate::new(EffectKind::ApplyRestriction)
            .target(TargetKind::OpponentActive)
            .cond(Condition::restriction(Restriction::AttackMayFail))
            .cond(Condition::coin_flip(FlipOutcome::Tails))
            .cond(Condition::duration(DurationKind::OpponentNextTurn))],
    )
    .phrases(&["that attack doesn't happen"])
}

fn fumble_on_heads() -> RuleDef {
    RuleDef::emit(
        "fumble-on-heads",
        regex!(r"If heads, the Defending Pokémon can't attack during your opponent's next turn\."),
        "Flip a coin. If heads, the Defending Pokémon can't attack during your opponent's next turn.",
        [EffectTemplate::new(EffectKind::ApplyRestriction)
            .target(TargetKind::OpponentActive)
            .cond(Condition::restriction(Restriction::CantAttack))
            .cond(Condition::duration(DurationKind::OpponentNextTurn))
            .cond(Condition::coin_flip(FlipOutcome::Heads))],
    )
    .phrases(&["If heads, the Defending Pokémon can't attack"])
}

fn persistent_fumble() -> RuleDef {
    RuleDef::emit(
        "persistent-fumble",
        regex!(
            r"If the Defending Pokémon tries to use an attack, your opponent flips a coin\. If tails, that attack doesn't happen\. This effect lasts until the Defending Pokémon leaves the Active Spot"
        ),
        "If the Defending Pokémon tries to use an attack, your opponent flips a coin. If tails, that attack doesn't happen. This effect lasts until the Defending Pokémon leaves the Active Spot.",
        [EffectTemplate::new(EffectKind::ApplyRestriction)
            .target(TargetKind::OpponentActive)
            .cond(Condition::restriction(Restriction::AttackMayFail))
            .cond(Condition::coin_flip(FlipOutcome::Tails))
            .cond(Condition::duration(DurationKind::Persistent))],
    )
    .phrases(&["This effect lasts until"])
}

fn energy_lock() -> RuleDef {
    RuleDef::emit(
        "energy-lock",
        regex!(r"they can't take any Energy from their Energy Zone to attach to their Active Pokémon\."),
        "During your opponent's next turn, they can't take any Energy from their Energy Zone to attach to their Active Pokémon.",
        [EffectTemplate::new(EffectKind::ApplyRestriction)
            .cond(Condition::restriction(Restriction::CantAttachEnergy))
            .cond(Condition::duration(DurationKind::OpponentNextTurn))],
    )
    .phrases(&["can't take any Energy"])
}

fn expose_self() -> RuleDef {
    RuleDef::emit(
        "expose-self",
        regex!(r"During your opponent's next turn, this Pokémon takes \+(\d+) damage from attacks\."),
        "During your opponent's next turn, this Pokémon takes +20 damage from attacks.",
        [EffectTemplate::new(EffectKind::DebuffIncomingDamage)
            .target(TargetKind::ThisPokemon)
            .amount_from(1)
            .cond(Condition::duration(DurationKind::OpponentNextTurn))],
    )
    .phrases(&["this Pokémon takes +"])
}

fn lock_self_on_tails() -> RuleDef {
    RuleDef::emit(
        "lock-self-on-tails",
        regex!(r"If tails, during your next turn, this Pokémon can't attack\."),
        "Flip a coin. If tails, during your next turn, this Pokémon can't attack.",
        [EffectTemplate::new(EffectKind::ApplyRestriction)
            .target(TargetKind::ThisPokemon)
            .cond(Condition::restriction(Restriction::CantAttack))
            .cond(Condition::coin_flip(FlipOutcome::Tails))
            .cond(Condition::duration(DurationKind::NextTurn))],
    )
    .phrases(&["If tails, during your next turn"])
}

fn stacking_buff() -> RuleDef {
    RuleDef::emit(
        "stacking-buff",
        regex!(
            r"Until this Pokémon leaves the Active Spot, this Pokémon's (.*?) attack does \+(\d+) damage\. This effect stacks\."
        ),
        "Until this Pokémon leaves the Active Spot, this Pokémon's Blinding Ray attack does +10 damage. This effect stacks.",
        [EffectTemplate::new(EffectKind::BuffNextTurn)
            .target(TargetKind::ThisPokemon)
            .amount_from(2)
            .cond_from(|c| Some(Condition::AttackName { name: c.string(1)? }))
            .cond(Condition::Stacks)
            .cond(Condition::duration(DurationKind::WhileActive))],
    )
    .phrases(&["This effect stacks"])
}

pub fn get() -> Vec<RuleDef> {
    vec![
        cant_attack_next_turn(),
        coin_flip_or_nothing(),
        weaken_defender(),
        trap_defender(),
        harden_self(),
        veil_on_heads(),
        raise_costs(),
        empower_attack_next_turn(),
        shield_on_heads(),
        seal_attack(),
        hand_block(),
        item_block(),
        stop_defender(),
        stage_lock(),
        fumble_chance(),
        fumble_on_heads(),
        persistent_fumble(),
        energy_lock(),
        expose_self(),
        lock_self_on_tails(),
        stacking_buff(),
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
    fn raise_costs_emits_attack_then_retreat() {
        let effects = set().parse(
            "During your opponent's next turn, attacks used by the Defending Pokémon cost 1 {C} more, and its Retreat Cost is 1 {C} more.",
        );
        assert_eq!(effects.len(), 2);
        assert!(matches!(
            effects[0].conditions[0],
            Condition::Restriction { restriction: Restriction::IncreaseAttackCost { amount: 1, .. } }
        ));
        assert!(matches!(
            effects[1].conditions[0],
            Condition::Restriction { restriction: Restriction::IncreaseRetreatCost { amount: 1, .. } }
        ));
    }

    #[test]
    fn prevention_scope_distinguishes_damage_only_from_full() {
        let set = set();
        let full = set.parse(
            "Flip a coin. If heads, during your opponent's next turn, prevent all damage from—and effects of—attacks done to this Pokémon.",
        );
        assert!(full[0].conditions.contains(&Condition::Prevents { damage: true, effects: true }));

        let damage_only = set.parse(
            "Flip a coin. If heads, during your opponent's next turn, prevent all damage done to this Pokémon by attacks.",
        );
        assert!(damage_only[0].conditions.contains(&Condition::Prevents { damage: true, effects: false }));
    }

    #[test]
    fn the_unicode_minus_is_significant() {
        // The data uses U+2212 for reductions; an ASCII hyphen is a
        // different phrasing handled by the lenient late rules.
        let set = set();
        assert_eq!(
            set.deciding_rule("During your opponent's next turn, this Pokémon takes −30 damage from attacks."),
            Some("harden-self")
        );
        assert_eq!(
            set.deciding_rule("During your opponent's next turn, this Pokémon takes -30 damage from attacks."),
            None
        );
    }
}
