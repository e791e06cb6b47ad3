//! Always-on abilities: auras, immunities, cost and damage modifiers,
//! knockout triggers.
//!
//! The literal "Your Active Pokémon has no Retreat Cost." entry must stay
//! ahead of the named `(\w+)` variant, which would otherwise capture the
//! word "Pokémon" as a name.

use crate::condition::{
    Condition, DurationKind, FlipOutcome, PassiveEffect, PlayerScope, SpotKind, TargetFilter, Trigger,
    Zone,
};
use crate::effect::{EffectKind, TargetKind};
use crate::rules::outcome::{EffectTemplate, RuleDef};

fn passive() -> EffectTemplate {
    EffectTemplate::new(EffectKind::PassiveAbility)
}

fn checkup_damage() -> RuleDef {
    RuleDef::emit(
        "checkup-damage",
        regex!(
            r"During Pokémon Checkup, if this Pokémon is in the Active Spot, do (\d+) damage to your opponent's Active Pokémon\."
        ),
        "During Pokémon Checkup, if this Pokémon is in the Active Spot, do 10 damage to your opponent's Active Pokémon.",
        [EffectTemplate::new(EffectKind::PassiveDamage)
            .target(TargetKind::OpponentActive)
            .amount_from(1)
            .cond(Condition::trigger(Trigger::PokemonCheckup))
            .cond(Condition::Spot { spot: SpotKind::Active })],
    )
    .phrases(&["During Pokémon Checkup"])
}

fn free_retreat_with_latias() -> RuleDef {
    RuleDef::emit(
        "free-retreat-with-latias",
        regex!(r"If you have Latias in play, this Pokémon has no Retreat Cost\."),
        "If you have Latias in play, this Pokémon has no Retreat Cost.",
        [passive()
            .target(TargetKind::ThisPokemon)
            .cond(Condition::passive(PassiveEffect::ZeroRetreatCost))
            .cond(Condition::RequiresInPlay { names: vec!["Latias".into()] })],
    )
    .phrases(&["Latias"])
}

fn guts() -> RuleDef {
    RuleDef::emit(
        "guts",
        regex!(
            r"If this Pokémon would be Knocked Out by damage from an attack, flip a coin\. If heads, this Pokémon is not Knocked Out, and its remaining HP becomes (\d+)\."
        ),
        "If this Pokémon would be Knocked Out by damage from an attack, flip a coin. If heads, this Pokémon is not Knocked Out, and its remaining HP becomes 10.",
        [passive()
            .target(TargetKind::ThisPokemon)
            .cond_from(|c| Some(Condition::passive(PassiveEffect::PreventKnockout { remaining_hp: c.uint(1)? })))
            .cond(Condition::coin_flip(FlipOutcome::Heads))],
    )
    .phrases(&["would be Knocked Out"])
}

fn typed_damage_reduction() -> RuleDef {
    RuleDef::emit(
        "typed-damage-reduction",
        regex!(r"This Pokémon takes −(\d+) damage from attacks from (.*?) Pokémon\."),
        "This Pokémon takes −20 damage from attacks from {R} or {W} Pokémon.",
        [passive()
            .target(TargetKind::ThisPokemon)
            .cond_from(|c| Some(Condition::passive(PassiveEffect::ReduceIncomingDamage { amount: c.uint(1)? })))
            .cond_from(|c| Some(Condition::Energy { types: c.energies(2)? }))],
    )
    .phrases(&["takes −", "from attacks from"])
}

fn cost_reduction_with_ally() -> RuleDef {
    RuleDef::emit(
        "cost-reduction-with-ally",
        regex!(r"If you have (.*?) in play, attacks used by this Pokémon cost (\d+) less \{([A-Z])\} Energy\."),
        "If you have Arceus or Arceus ex in play, attacks used by this Pokémon cost 1 less {C} Energy.",
        [passive()
            .cond_from(|c| {
                Some(Condition::passive(PassiveEffect::ReduceAttackCost {
                    amount: c.uint(2)?,
                    energy: c.energy(3)?,
                }))
            })
            .cond_from(|c| Some(Condition::RequiresInPlay { names: c.names_or(1)? }))],
    )
    .phrases(&["in play", "cost", "less"])
}

fn energy_doubling() -> RuleDef {
    RuleDef::emit(
        "energy-doubling",
        regex!(r"Each \{([A-Z])\} Energy attached to your \{([A-Z])\} Pokémon provides 2 \{([A-Z])\} Energy\."),
        "Each {W} Energy attached to your {W} Pokémon provides 2 {W} Energy.",
        [passive().cond_from(|c| {
            Some(Condition::passive(PassiveEffect::EnergyValueDoubled {
                energy: c.energy(1)?,
                pokemon_type: c.energy(2)?,
            }))
        })],
    )
    .phrases(&["provides 2"])
}

fn condition_immunity() -> RuleDef {
    RuleDef::emit(
        "condition-immunity",
        regex!(r"This Pokémon can't be affected by any Special Conditions\."),
        "This Pokémon can't be affected by any Special Conditions.",
        [passive().cond(Condition::passive(PassiveEffect::ImmuneToSpecialConditions))],
    )
    .phrases(&["can't be affected by any Special Conditions"])
}

fn hand_lock_aura() -> RuleDef {
    RuleDef::emit(
        "hand-lock-aura",
        regex!(r"your opponent can't use any (.*?) cards from their hand\."),
        "As long as this Pokémon is in the Active Spot, your opponent can't use any Supporter cards from their hand.",
        [passive()
            .cond_from(|c| Some(Condition::passive(PassiveEffect::RestrictHandPlay { card_type: c.string(1)? })))
            .cond(Condition::Spot { spot: SpotKind::Active })],
    )
    .phrases(&["your opponent can't use any"])
}

fn zap_on_energy_attach() -> RuleDef {
    RuleDef::emit(
        "zap-on-energy-attach",
        regex!(
            r"Whenever you attach a \{([A-Z])\} Energy from your Energy Zone to this Pokémon, do (\d+) damage to your opponent's Active Pokémon\."
        ),
        "Whenever you attach a {L} Energy from your Energy Zone to this Pokémon, do 20 damage to your opponent's Active Pokémon.",
        [EffectTemplate::new(EffectKind::PassiveDamage)
            .target(TargetKind::OpponentActive)
            .amount_from(2)
            .cond(Condition::trigger(Trigger::AttachEnergySelf))
            .cond_from(|c| Some(Condition::energy([c.energy(1)?])))],
    )
    .phrases(&["Whenever you attach", "do"])
}

fn damage_buff_with_ally() -> RuleDef {
    RuleDef::emit(
        "damage-buff-with-ally",
        regex!(
            r"If you have (.*?) in play, attacks used by this Pokémon do \+(\d+) damage to your opponent's Active Pokémon\."
        ),
        "If you have Zacian in play, attacks used by this Pokémon do +30 damage to your opponent's Active Pokémon.",
        [passive()
            .cond_from(|c| Some(Condition::passive(PassiveEffect::BuffDamage { amount: c.uint(2)? })))
            .cond_from(|c| Some(Condition::RequiresInPlay { names: c.names_or(1)? }))],
    )
    .phrases(&["in play", "do +"])
}

fn flip_shield() -> RuleDef {
    RuleDef::emit(
        "flip-shield",
        regex!(r"If any damage is done to this Pokémon by attacks, flip a coin\. If heads, prevent that damage\."),
        "If any damage is done to this Pokémon by attacks, flip a coin. If heads, prevent that damage.",
        [passive()
            .target(TargetKind::ThisPokemon)
            .cond(Condition::passive(PassiveEffect::PreventIncomingDamage))
            .cond(Condition::coin_flip(FlipOutcome::Heads))],
    )
    .phrases(&["If heads, prevent that damage"])
}

fn free_retreat_with_energy() -> RuleDef {
    RuleDef::emit(
        "free-retreat-with-energy",
        regex!(r"If this Pokémon has any Energy attached, it has no Retreat Cost\."),
        "If this Pokémon has any Energy attached, it has no Retreat Cost.",
        [passive()
            .target(TargetKind::ThisPokemon)
            .cond(Condition::passive(PassiveEffect::ZeroRetreatCost))
            .cond(Condition::trigger(Trigger::SelfHasEnergy))],
    )
    .phrases(&["it has no Retreat Cost"])
}

fn retreat_aura() -> RuleDef {
    RuleDef::emit(
        "retreat-aura",
        regex!(r"As long as this Pokémon is on your Bench, your Active (.*?) Pokémon's Retreat Cost is (\d+) less\."),
        "As long as this Pokémon is on your Bench, your Active {F} Pokémon's Retreat Cost is 1 less.",
        [passive()
            .cond_from(|c| Some(Condition::passive(PassiveEffect::ReduceRetreatCost { amount: c.uint(2)? })))
            .cond(Condition::Spot { spot: SpotKind::Bench })
            .cond_from(|c| {
                let raw = c.text(1)?;
                let types = crate::rules::helpers::energies_in(raw);
                if types.is_empty() {
                    Some(Condition::TargetFilter { filter: TargetFilter::Subtype(raw.to_string()) })
                } else {
                    Some(Condition::Energy { types })
                }
            })],
    )
    .phrases(&["Retreat Cost is", "less"])
}

fn bruised_discount() -> RuleDef {
    RuleDef::emit(
        "bruised-discount",
        regex!(r"If this Pokémon has damage on it, this attack can be used for (\d+) \{([A-Z])\} Energy\."),
        "If this Pokémon has damage on it, this attack can be used for 1 {W} Energy.",
        [passive()
            .cond_from(|c| {
                Some(Condition::passive(PassiveEffect::AlternateAttackCost {
                    amount: c.uint(1)?,
                    energy: c.energy(2)?,
                }))
            })
            .cond(Condition::trigger(Trigger::SelfHasDamage))],
    )
    .phrases(&["can be used for"])
}

fn damage_reduction() -> RuleDef {
    RuleDef::emit(
        "damage-reduction",
        regex!(r"This Pokémon takes −(\d+) damage from attacks\."),
        "This Pokémon takes −10 damage from attacks.",
        [passive()
            .target(TargetKind::ThisPokemon)
            .cond_from(|c| Some(Condition::passive(PassiveEffect::ReduceIncomingDamage { amount: c.uint(1)? })))],
    )
    .phrases(&["This Pokémon takes −"])
}

fn free_retreat_active() -> RuleDef {
    RuleDef::emit(
        "free-retreat-active",
        regex!(r"Your Active Pokémon has no Retreat Cost\."),
        "Your Active Pokémon has no Retreat Cost.",
        [passive()
            .cond(Condition::passive(PassiveEffect::ZeroRetreatCost))
            .cond(Condition::Spot { spot: SpotKind::Active })],
    )
    .phrases(&["Your Active Pokémon has no Retreat Cost"])
}

fn free_retreat_named() -> RuleDef {
    RuleDef::emit(
        "free-retreat-named",
        regex!(r"Your Active (\w+) has no Retreat Cost\."),
        "Your Active Ledian has no Retreat Cost.",
        [passive()
            .cond(Condition::passive(PassiveEffect::ZeroRetreatCost))
            .cond_from(|c| Some(Condition::TargetFilter { filter: TargetFilter::Named(vec![c.string(1)?]) }))],
    )
    .phrases(&["has no Retreat Cost"])
}

fn status_immunity() -> RuleDef {
    RuleDef::emit(
        "status-immunity",
        regex!(r"This Pokémon can't be (Asleep)\."),
        "This Pokémon can't be Asleep.",
        [passive().cond_from(|c| Some(Condition::passive(PassiveEffect::ImmuneToStatus(c.status(1)?))))],
    )
    .phrases(&["This Pokémon can't be"])
}

fn typed_condition_immunity_aura() -> RuleDef {
    RuleDef::emit(
        "typed-condition-immunity-aura",
        regex!(
            r"Each of your Pokémon that has any \{([A-Z])\} Energy attached recovers from all Special Conditions and can't be affected by any Special Conditions\."
        ),
        "Each of your Pokémon that has any {P} Energy attached recovers from all Special Conditions and can't be affected by any Special Conditions.",
        [passive()
            .target(TargetKind::AllFriendly)
            .cond(Condition::passive(PassiveEffect::ImmuneToSpecialConditions))
            .cond_from(|c| Some(Condition::trigger(Trigger::SelfHasEnergyOfType(c.energy(1)?))))],
    )
    .phrases(&["recovers from all Special Conditions"])
}

fn counterattack_active() -> RuleDef {
    RuleDef::emit(
        "counterattack-active",
        regex!(
            r"If this Pokémon is in the Active Spot and is damaged by an attack .*?, do (\d+) damage to the Attacking Pokémon\."
        ),
        "If this Pokémon is in the Active Spot and is damaged by an attack (even if this Pokémon is Knocked Out), do 20 damage to the Attacking Pokémon.",
        [passive()
            .cond_from(|c| Some(Condition::passive(PassiveEffect::ReactiveDamage { amount: c.uint(1)? })))
            .cond(Condition::Spot { spot: SpotKind::Active })],
    )
    .phrases(&["and is damaged by an attack"])
}

fn dampen_opponent() -> RuleDef {
    RuleDef::emit(
        "dampen-opponent",
        regex!(
            r"As long as this Pokémon is in the Active Spot, attacks used by your opponent's Active Pokémon do −(\d+) damage\."
        ),
        "As long as this Pokémon is in the Active Spot, attacks used by your opponent's Active Pokémon do −20 damage.",
        [passive()
            .cond_from(|c| Some(Condition::passive(PassiveEffect::ReduceOpponentDamage { amount: c.uint(1)? })))
            .cond(Condition::Spot { spot: SpotKind::Active })],
    )
    .phrases(&["your opponent's Active Pokémon do −"])
}

fn status_damage_amplifier() -> RuleDef {
    RuleDef::emit(
        "status-damage-amplifier",
        regex!(r"Your opponent's Active Pokémon takes \+(\d+) damage from being (Poisoned)\."),
        "Your opponent's Active Pokémon takes +10 damage from being Poisoned.",
        [passive().cond_from(|c| {
            Some(Condition::passive(PassiveEffect::BuffStatusDamage { amount: c.uint(1)?, status: c.status(2)? }))
        })],
    )
    .phrases(&["from being"])
}

fn counterattack_on_knockout() -> RuleDef {
    RuleDef::emit(
        "counterattack-on-knockout",
        regex!(
            r"If this Pokémon is .*? Knocked Out by damage from an attack .*?, do (\d+) damage to the Attacking Pokémon\."
        ),
        "If this Pokémon is in the Active Spot and is Knocked Out by damage from an attack from your opponent's Pokémon, do 100 damage to the Attacking Pokémon.",
        [passive()
            .cond_from(|c| {
                Some(Condition::passive(PassiveEffect::ReactiveDamageOnKnockout { amount: c.uint(1)? }))
            })
            .cond(Condition::Spot { spot: SpotKind::Active })],
    )
    .phrases(&["Knocked Out by damage from an attack"])
}

fn flip_damage_reduction() -> RuleDef {
    RuleDef::emit(
        "flip-damage-reduction",
        regex!(
            r"If any damage is done to this Pokémon by attacks, flip a coin\. If heads, this Pokémon takes −(\d+) damage from that attack\."
        ),
        "If any damage is done to this Pokémon by attacks, flip a coin. If heads, this Pokémon takes −20 damage from that attack.",
        [passive()
            .cond_from(|c| Some(Condition::passive(PassiveEffect::ReduceIncomingDamage { amount: c.uint(1)? })))
            .cond(Condition::coin_flip(FlipOutcome::Heads))],
    )
    .phrases(&["from that attack"])
}

fn lineage_damage_buff() -> RuleDef {
    RuleDef::emit(
        "lineage-damage-buff",
        regex!(
            r"attacks used by your Pokémon that evolve from (\w+) do \+(\d+) damage to your opponent's Active Pokémon\."
        ),
        "As long as this Pokémon is on your Bench, attacks used by your Pokémon that evolve from Eevee do +10 damage to your opponent's Active Pokémon.",
        [passive()
            .cond_from(|c| Some(Condition::passive(PassiveEffect::BuffDamage { amount: c.uint(2)? })))
            .cond_from(|c| Some(Condition::TargetFilter { filter: TargetFilter::EvolvesFrom(c.string(1)?) }))
            .cond(Condition::Spot { spot: SpotKind::Bench })],
    )
    .phrases(&["that evolve from"])
}

fn damage_reduction_with_ally() -> RuleDef {
    RuleDef::emit(
        "damage-reduction-with-ally",
        regex!(r"If you have (.*?) in play, this Pokémon takes −(\d+) damage from attacks\."),
        "If you have Dialga in play, this Pokémon takes −30 damage from attacks.",
        [passive()
            .cond_from(|c| Some(Condition::passive(PassiveEffect::ReduceIncomingDamage { amount: c.uint(2)? })))
            .cond_from(|c| Some(Condition::RequiresInPlay { names: c.names_or(1)? }))],
    )
    .phrases(&["in play", "takes −"])
}

fn typed_damage_buff() -> RuleDef {
    RuleDef::emit(
        "typed-damage-buff",
        regex!(r"Attacks used by your \{([A-Z])\} Pokémon do \+(\d+) damage to your opponent's Active Pokémon\."),
        "Attacks used by your {G} Pokémon do +10 damage to your opponent's Active Pokémon.",
        [passive()
            .cond_from(|c| Some(Condition::passive(PassiveEffect::BuffDamage { amount: c.uint(2)? })))
            .cond_from(|c| Some(Condition::TargetFilter { filter: TargetFilter::OfType(c.energy(1)?) }))],
    )
    .phrases(&["Attacks used by your {"])
}

fn evolution_lock() -> RuleDef {
    RuleDef::emit(
        "evolution-lock",
        regex!(r"Your opponent can't play any Pokémon from their hand to evolve their Active Pokémon\."),
        "Your opponent can't play any Pokémon from their hand to evolve their Active Pokémon.",
        [passive().cond(Condition::passive(PassiveEffect::RestrictEvolve))],
    )
    .phrases(&["to evolve their Active Pokémon"])
}

fn energy_salvage_on_knockout() -> RuleDef {
    RuleDef::emit(
        "energy-salvage-on-knockout",
        regex!(
            r"If this Pokémon is .*? Knocked Out .*?, move all \{([A-Z])\} Energy from this Pokémon to 1 of your Benched Pokémon\."
        ),
        "If this Pokémon is in the Active Spot and is Knocked Out by damage from an attack, move all {L} Energy from this Pokémon to 1 of your Benched Pokémon.",
        [passive()
            .cond_from(|c| Some(Condition::passive(PassiveEffect::MoveEnergyOnKnockout { energy: c.energy(1)? })))
            .cond(Condition::Destination { zone: Zone::Bench })],
    )
    .phrases(&["move all {"])
}

fn ex_shield() -> RuleDef {
    RuleDef::emit(
        "ex-shield",
        regex!(r"Prevent all damage done to this Pokémon by attacks from your opponent's Pokémon ex\."),
        "Prevent all damage done to this Pokémon by attacks from your opponent's Pokémon ex.",
        [passive()
            .target(TargetKind::ThisPokemon)
            .cond(Condition::passive(PassiveEffect::PreventIncomingDamage))
            .cond(Condition::SourceFilter { filter: TargetFilter::Subtype("ex".into()) })],
    )
    .phrases(&["Pokémon ex"])
}

fn eevee_evolution_freedom() -> RuleDef {
    RuleDef::emit(
        "eevee-evolution-freedom",
        regex!(r"This Pokémon can evolve into any Pokémon that evolves from Eevee"),
        "This Pokémon can evolve into any Pokémon that evolves from Eevee, regardless of what is printed on that card.",
        [passive().cond(Condition::passive(PassiveEffect::EvolveIntoAny))],
    )
    .phrases(&["can evolve into any"])
}

fn tool_discount() -> RuleDef {
    RuleDef::emit(
        "tool-discount",
        regex!(
            r"If this Pokémon has a Pokémon Tool attached, attacks used by this Pokémon cost (\d+) less \{([A-Z])\} Energy\."
        ),
        "If this Pokémon has a Pokémon Tool attached, attacks used by this Pokémon cost 1 less {C} Energy.",
        [passive()
            .cond_from(|c| {
                Some(Condition::passive(PassiveEffect::ReduceAttackCost {
                    amount: c.uint(1)?,
                    energy: c.energy(2)?,
                }))
            })
            .cond(Condition::trigger(Trigger::SelfHasTool))],
    )
    .phrases(&["Pokémon Tool attached", "less"])
}

fn cost_raising_aura() -> RuleDef {
    RuleDef::emit(
        "cost-raising-aura",
        regex!(r"attacks used by your opponent's Active Pokémon cost (\d+) \{([A-Z])\} more\."),
        "As long as this Pokémon is in the Active Spot, attacks used by your opponent's Active Pokémon cost 1 {C} more.",
        [passive()
            .cond_from(|c| {
                Some(Condition::passive(PassiveEffect::IncreaseOpponentAttackCost {
                    amount: c.uint(1)?,
                    energy: c.energy(2)?,
                }))
            })
            .cond(Condition::Spot { spot: SpotKind::Active })],
    )
    .phrases(&["your opponent's Active Pokémon cost"])
}

fn team_damage_reduction() -> RuleDef {
    RuleDef::emit(
        "team-damage-reduction",
        regex!(r"All of your Pokémon take −(\d+) damage from attacks from your opponent's Pokémon\."),
        "All of your Pokémon take −10 damage from attacks from your opponent's Pokémon.",
        [passive()
            .target(TargetKind::AllFriendly)
            .cond_from(|c| Some(Condition::passive(PassiveEffect::ReduceIncomingDamage { amount: c.uint(1)? })))],
    )
    .phrases(&["All of your Pokémon take −"])
}

fn auto_evolve_on_energy() -> RuleDef {
    RuleDef::emit(
        "auto-evolve-on-energy",
        regex!(
            r"Whenever you attach an Energy from your Energy Zone to this Pokémon, put a random card from your deck that evolves from this Pokémon onto this Pokémon to evolve it\."
        ),
        "Whenever you attach an Energy from your Energy Zone to this Pokémon, put a random card from your deck that evolves from this Pokémon onto this Pokémon to evolve it.",
        [passive()
            .cond(Condition::passive(PassiveEffect::EvolveOnEnergyAttach))
            .cond(Condition::trigger(Trigger::AttachEnergySelf))
            .cond(Condition::Random)],
    )
    .phrases(&["onto this Pokémon to evolve it"])
}

fn free_retreat_with_ally() -> RuleDef {
    RuleDef::emit(
        "free-retreat-with-ally",
        regex!(r"If you have (.*?) in play, this Pokémon has no Retreat Cost\."),
        "If you have Emboar or Emboar ex in play, this Pokémon has no Retreat Cost.",
        [passive()
            .cond(Condition::passive(PassiveEffect::ZeroRetreatCost))
            .cond_from(|c| Some(Condition::RequiresInPlay { names: c.names_or(1)? }))],
    )
    .phrases(&["in play", "no Retreat Cost"])
}

fn heal_block_field() -> RuleDef {
    RuleDef::emit(
        "heal-block-field",
        regex!(r"Pokémon \(both yours and your opponent's\) can't be healed\."),
        "Pokémon (both yours and your opponent's) can't be healed.",
        [passive()
            .cond(Condition::passive(PassiveEffect::PreventHealing))
            .cond(Condition::Player { player: PlayerScope::Both })],
    )
    .phrases(&["can't be healed"])
}

fn team_damage_buff() -> RuleDef {
    RuleDef::emit(
        "team-damage-buff",
        regex!(r"Attacks used by your Pokémon do \+(\d+) damage to your opponent's Active Pokémon\."),
        "Attacks used by your Pokémon do +10 damage to your opponent's Active Pokémon.",
        [passive()
            .target(TargetKind::AllFriendly)
            .cond_from(|c| Some(Condition::passive(PassiveEffect::BuffDamage { amount: c.uint(1)? })))],
    )
    .phrases(&["Attacks used by your Pokémon do +"])
}

fn avenger_veil() -> RuleDef {
    RuleDef::emit(
        "avenger-veil",
        regex!(
            r"If your opponent's Pokémon is Knocked Out by damage from this Pokémon's attacks, during your opponent's next turn, prevent all damage from—and effects of—attacks done to this Pokémon\."
        ),
        "If your opponent's Pokémon is Knocked Out by damage from this Pokémon's attacks, during your opponent's next turn, prevent all damage from—and effects of—attacks done to this Pokémon.",
        [passive()
            .cond(Condition::passive(PassiveEffect::ApplyPreventionOnKnockout))
            .cond(Condition::duration(DurationKind::OpponentNextTurn))
            .cond(Condition::Prevents { damage: true, effects: true })],
    )
    .phrases(&["from this Pokémon's attacks"])
}

fn free_retreat_first_turn() -> RuleDef {
    RuleDef::emit(
        "free-retreat-first-turn",
        regex!(r"During your first turn, this Pokémon has no Retreat Cost\."),
        "During your first turn, this Pokémon has no Retreat Cost.",
        [passive()
            .cond(Condition::passive(PassiveEffect::ZeroRetreatCost))
            .cond(Condition::duration(DurationKind::FirstTurn))],
    )
    .phrases(&["During your first turn"])
}

fn effect_shield() -> RuleDef {
    RuleDef::emit(
        "effect-shield",
        regex!(r"Prevent all effects of attacks used by your opponent's Pokémon done to this Pokémon\."),
        "Prevent all effects of attacks used by your opponent's Pokémon done to this Pokémon.",
        [passive().cond(Condition::passive(PassiveEffect::PreventIncomingEffects))],
    )
    .phrases(&["Prevent all effects"])
}

fn vengeful_coin() -> RuleDef {
    RuleDef::emit(
        "vengeful-coin",
        regex!(r"If this Pokémon is .*? Knocked Out .*?, flip a coin\. If heads, the Attacking Pokémon is Knocked Out\."),
        "If this Pokémon is in the Active Spot and is Knocked Out by an attack, flip a coin. If heads, the Attacking Pokémon is Knocked Out.",
        [passive()
            .cond(Condition::passive(PassiveEffect::KnockoutAttackerOnKnockout))
            .cond(Condition::coin_flip(FlipOutcome::Heads))],
    )
    .phrases(&["the Attacking Pokémon is Knocked Out"])
}

pub fn get() -> Vec<RuleDef> {
    vec![
        checkup_damage(),
        free_retreat_with_latias(),
        guts(),
        typed_damage_reduction(),
        cost_reduction_with_ally(),
        energy_doubling(),
        condition_immunity(),
        hand_lock_aura(),
        zap_on_energy_attach(),
        damage_buff_with_ally(),
        flip_shield(),
        free_retreat_with_energy(),
        retreat_aura(),
        bruised_discount(),
        damage_reduction(),
        free_retreat_active(),
        free_retreat_named(),
        status_immunity(),
        typed_condition_immunity_aura(),
        counterattack_active(),
        dampen_opponent(),
        status_damage_amplifier(),
        counterattack_on_knockout(),
        flip_damage_reduction(),
        lineage_damage_buff(),
        damage_reduction_with_ally(),
        typed_damage_buff(),
        evolution_lock(),
        energy_salvage_on_knockout(),
        ex_shield(),
        eevee_evolution_freedom(),
        tool_discount(),
        cost_raising_aura(),
        team_damage_reduction(),
        auto_evolve_on_energy(),
        free_retreat_with_ally(),
        heal_block_field(),
        team_damage_buff(),
        avenger_veil(),
        free_retreat_first_turn(),
        effect_shield(),
        vengeful_coin(),
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
    fn literal_active_retreat_rule_outranks_the_named_capture() {
        let set = set();
        assert_eq!(set.deciding_rule("Your Active Pokémon has no Retreat Cost."), Some("free-retreat-active"));
        assert_eq!(set.deciding_rule("Your Active Ledian has no Retreat Cost."), Some("free-retreat-named"));
    }

    #[test]
    fn latias_rule_outranks_the_generic_in_play_form() {
        let set = set();
        assert_eq!(
            set.deciding_rule("If you have Latias in play, this Pokémon has no Retreat Cost."),
            Some("free-retreat-with-latias")
        );
        assert_eq!(
            set.deciding_rule("If you have Emboar or Emboar ex in play, this Pokémon has no Retreat Cost."),
            Some("free-retreat-with-ally")
        );
    }

    #[test]
    fn mixed_type_retreat_aura_resolves_placeholders() {
        let effects = set().parse(
            "As long as this Pokémon is on your Bench, your Active {F} Pokémon's Retreat Cost is 1 less.",
        );
        assert!(effects[0]
            .conditions
            .contains(&Condition::Energy { types: vec![crate::condition::EnergyKind::Fighting] }));
    }
}
