//! Direct, splash, snipe, recoil and other damage phrasings.

use crate::condition::{
    Condition, DurationKind, FlipOutcome, PlayerScope, ScaleBasis, TargetFilter, Trigger,
};
use crate::effect::{EffectKind, TargetKind};
use crate::rules::outcome::{EffectTemplate, RuleDef};

fn recoil() -> RuleDef {
    RuleDef::emit(
        "recoil",
        regex!(r"This Pokémon also does (\d+) damage to itself\."),
        "This Pokémon also does 50 damage to itself.",
        [EffectTemplate::new(EffectKind::RecoilDamage).target(TargetKind::ThisPokemon).amount_from(1)],
    )
    .phrases(&["damage to itself"])
}

fn multi_hit_random() -> RuleDef {
    RuleDef::emit(
        "multi-hit-random",
        regex!(
            r"1 of your opponent's Pokémon is chosen at random (\d+) times\. For each time a Pokémon was chosen, do (\d+) damage to it\."
        ),
        "1 of your opponent's Pokémon is chosen at random 4 times. For each time a Pokémon was chosen, do 50 damage to it.",
        [EffectTemplate::new(EffectKind::MultiHitRandomDamage)
            .target(TargetKind::OpponentActive)
            .amount_from(2)
            .cond_from(|c| Some(Condition::Hits { count: c.uint(1)? }))],
    )
    .phrases(&["chosen at random"])
}

fn splash_benched_friendly() -> RuleDef {
    RuleDef::emit(
        "splash-benched-friendly",
        regex!(r"This attack also does (\d+) damage to 1 of your Benched Pokémon\."),
        "This attack also does 10 damage to 1 of your Benched Pokémon.",
        [EffectTemplate::new(EffectKind::DamageBenchedFriendly)
            .target(TargetKind::BenchedFriendly)
            .amount_from(1)],
    )
    .phrases(&["also does", "Benched"])
}

/// One sentence, two coupled effects: the energy discard happens first, then
/// the snipe — list order is source order.
fn snipe_discard_energy() -> RuleDef {
    RuleDef::emit(
        "snipe-discard-energy",
        regex!(
            r"Discard all \{([A-Z])\} Energy from this Pokémon\. This attack does (\d+) damage to 1 of your opponent's Pokémon\."
        ),
        "Discard all {L} Energy from this Pokémon. This attack does 120 damage to 1 of your opponent's Pokémon.",
        [
            EffectTemplate::new(EffectKind::DiscardEnergy)
                .target(TargetKind::ThisPokemon)
                .cond(Condition::All)
                .cond_from(|c| Some(Condition::energy([c.energy(1)?]))),
            EffectTemplate::new(EffectKind::SnipeDamage).target(TargetKind::BenchedOpponent).amount_from(2),
        ],
    )
    .phrases(&["Discard all", "This attack does"])
}

fn copy_attack() -> RuleDef {
    RuleDef::emit(
        "copy-attack",
        regex!(r"Choose 1 of your opponent's Active Pokémon's attacks and use it as this attack\."),
        "Choose 1 of your opponent's Active Pokémon's attacks and use it as this attack.",
        [EffectTemplate::new(EffectKind::CopyAttack).target(TargetKind::OpponentActive)],
    )
    .phrases(&["use it as this attack"])
}

fn snipe() -> RuleDef {
    RuleDef::emit(
        "snipe",
        regex!(r"This attack does (\d+) damage to 1 of your opponent's Pokémon\."),
        "This attack does 40 damage to 1 of your opponent's Pokémon.",
        [EffectTemplate::new(EffectKind::SnipeDamage).target(TargetKind::BenchedOpponent).amount_from(1)],
    )
    .phrases(&["damage to 1 of your opponent's Pokémon"])
}

fn snipe_damaged() -> RuleDef {
    RuleDef::emit(
        "snipe-damaged",
        regex!(r"This attack does (\d+) damage to 1 of your opponent's Pokémon that have damage on them\."),
        "This attack does 60 damage to 1 of your opponent's Pokémon that have damage on them.",
        [EffectTemplate::new(EffectKind::SnipeDamage)
            .amount_from(1)
            .cond(Condition::TargetFilter { filter: TargetFilter::HasDamage })],
    )
    .phrases(&["that have damage on them"])
}

fn snipe_once_per_turn() -> RuleDef {
    RuleDef::emit(
        "snipe-once-per-turn",
        regex!(r"Once during your turn, you may do (\d+) damage to 1 of your opponent's Pokémon\."),
        "Once during your turn, you may do 20 damage to 1 of your opponent's Pokémon.",
        [EffectTemplate::new(EffectKind::SnipeDamage)
            .amount_from(1)
            .cond(Condition::trigger(Trigger::OncePerTurn))],
    )
    .phrases(&["Once during your turn", "you may do"])
}

fn rain_on_opponent_bench() -> RuleDef {
    RuleDef::emit(
        "rain-on-opponent-bench",
        regex!(r"This attack also does (\d+) damage to each of your opponent's Benched Pokémon\."),
        "This attack also does 10 damage to each of your opponent's Benched Pokémon.",
        [EffectTemplate::new(EffectKind::DamageBenchedOpponentAll)
            .target(TargetKind::BenchedOpponentAll)
            .amount_from(1)],
    )
    .phrases(&["each of your opponent's Benched"])
}

fn reactive_damage() -> RuleDef {
    RuleDef::emit(
        "reactive-damage",
        regex!(r"if this Pokémon is damaged by an attack, do (\d+) damage to the Attacking Pokémon\."),
        "During your opponent's next turn, if this Pokémon is damaged by an attack, do 40 damage to the Attacking Pokémon.",
        [EffectTemplate::new(EffectKind::ApplyReactiveDamage)
            .amount_from(1)
            .cond(Condition::duration(DurationKind::OpponentNextTurn))],
    )
    .phrases(&["Attacking Pokémon"])
}

fn rain_on_own_bench() -> RuleDef {
    RuleDef::emit(
        "rain-on-own-bench",
        regex!(r"This attack also does (\d+) damage to each of your Benched Pokémon\."),
        "This attack also does 10 damage to each of your Benched Pokémon.",
        [EffectTemplate::new(EffectKind::DamageBenchedFriendly)
            .target(TargetKind::BenchedFriendly)
            .amount_from(1)
            .cond(Condition::All)],
    )
    .phrases(&["each of your Benched"])
}

fn damage_all_opponent() -> RuleDef {
    RuleDef::emit(
        "damage-all-opponent",
        regex!(r"This attack does (\d+) damage to each of your opponent's Pokémon\."),
        "This attack does 20 damage to each of your opponent's Pokémon.",
        [EffectTemplate::new(EffectKind::DamageAllOpponent).amount_from(1)],
    )
    .phrases(&["each of your opponent's Pokémon"])
}

fn rain_on_energized_bench() -> RuleDef {
    RuleDef::emit(
        "rain-on-energized-bench",
        regex!(
            r"This attack also does (\d+) damage to each of your opponent's Benched Pokémon that has any Energy attached\."
        ),
        "This attack also does 20 damage to each of your opponent's Benched Pokémon that has any Energy attached.",
        [EffectTemplate::new(EffectKind::DamageBenchedOpponentAll)
            .target(TargetKind::BenchedOpponentAll)
            .amount_from(1)
            .cond(Condition::TargetFilter { filter: TargetFilter::HasEnergy })],
    )
    .phrases(&["that has any Energy attached"])
}

fn recoil_on_tails() -> RuleDef {
    RuleDef::emit(
        "recoil-on-tails",
        regex!(r"If tails, this Pokémon also does (\d+) damage to itself\."),
        "Flip a coin. If tails, this Pokémon also does 20 damage to itself.",
        [EffectTemplate::new(EffectKind::RecoilDamage)
            .target(TargetKind::ThisPokemon)
            .amount_from(1)
            .cond(Condition::coin_flip(FlipOutcome::Tails))],
    )
    .phrases(&["If tails,", "itself"])
}

fn snipe_benched() -> RuleDef {
    RuleDef::emit(
        "snipe-benched",
        regex!(r"This attack (?:also )?does (\d+) damage to 1 of your opponent's Benched Pokémon\."),
        "This attack does 30 damage to 1 of your opponent's Benched Pokémon.",
        [EffectTemplate::new(EffectKind::SnipeDamage).target(TargetKind::BenchedOpponent).amount_from(1)],
    )
    .phrases(&["1 of your opponent's Benched"])
}

fn multi_hit_random_global() -> RuleDef {
    RuleDef::emit(
        "multi-hit-random-global",
        regex!(
            r"1 other Pokémon \(either yours or your opponent's\) is chosen at random (\d+) times\. For each time a Pokémon was chosen, do (\d+) damage to it\."
        ),
        "1 other Pokémon (either yours or your opponent's) is chosen at random 3 times. For each time a Pokémon was chosen, do 60 damage to it.",
        [EffectTemplate::new(EffectKind::MultiHitRandomDamage)
            .amount_from(2)
            .cond_from(|c| Some(Condition::Hits { count: c.uint(1)? }))
            .cond(Condition::Player { player: PlayerScope::Both })],
    )
    .phrases(&["either yours or your opponent's"])
}

fn damage_equals_own_damage() -> RuleDef {
    RuleDef::emit(
        "damage-equals-own-damage",
        regex!(
            r"This attack does damage to your opponent's Active Pokémon equal to the damage this Pokémon has on it\."
        ),
        "This attack does damage to your opponent's Active Pokémon equal to the damage this Pokémon has on it.",
        [EffectTemplate::new(EffectKind::Damage).cond(Condition::scale_by(ScaleBasis::SelfDamage))],
    )
    .phrases(&["equal to the damage"])
}

fn set_hp_on_heads() -> RuleDef {
    RuleDef::emit(
        "set-hp-on-heads",
        regex!(r"If heads, your opponent's Active Pokémon's remaining HP is now (\d+)\."),
        "Flip a coin. If heads, your opponent's Active Pokémon's remaining HP is now 10.",
        [EffectTemplate::new(EffectKind::SetHp)
            .target(TargetKind::OpponentActive)
            .amount_from(1)
            .cond(Condition::coin_flip(FlipOutcome::Heads))],
    )
    .phrases(&["remaining HP is now"])
}

fn delayed_damage() -> RuleDef {
    RuleDef::emit(
        "delayed-damage",
        regex!(r"At the end of your opponent's next turn, do (\d+) damage to the Defending Pokémon\."),
        "At the end of your opponent's next turn, do 80 damage to the Defending Pokémon.",
        [EffectTemplate::new(EffectKind::DelayedDamage)
            .target(TargetKind::OpponentActive)
            .amount_from(1)
            .cond(Condition::trigger(Trigger::EndOfOpponentNextTurn))],
    )
    .phrases(&["At the end of your opponent's next turn"])
}

fn knockout_on_double_heads() -> RuleDef {
    RuleDef::emit(
        "knockout-on-double-heads",
        regex!(r"If both of them are heads, your opponent's Active Pokémon is Knocked Out\."),
        "Flip 2 coins. If both of them are heads, your opponent's Active Pokémon is Knocked Out.",
        [EffectTemplate::new(EffectKind::Knockout)
            .target(TargetKind::OpponentActive)
            .cond(Condition::coin_flip(FlipOutcome::DoubleHeads))],
    )
    .phrases(&["If both of them are heads", "Knocked Out"])
}

fn recoil_on_knockout() -> RuleDef {
    RuleDef::emit(
        "recoil-on-knockout",
        regex!(
            r"If your opponent's Pokémon is Knocked Out by damage from this attack, this Pokémon also does (\d+) damage to itself\."
        ),
        "If your opponent's Pokémon is Knocked Out by damage from this attack, this Pokémon also does 50 damage to itself.",
        [EffectTemplate::new(EffectKind::RecoilDamage)
            .target(TargetKind::ThisPokemon)
            .amount_from(1)
            .cond(Condition::trigger(Trigger::OpponentKnockedOut))],
    )
    .phrases(&["Knocked Out by damage from this attack"])
}

fn damage_magnet() -> RuleDef {
    RuleDef::emit(
        "damage-magnet",
        regex!(
            r"As often as you like during your turn, you may choose 1 of your Pokémon that has damage on it, and move all of its damage to this Pokémon\."
        ),
        "As often as you like during your turn, you may choose 1 of your Pokémon that has damage on it, and move all of its damage to this Pokémon.",
        [EffectTemplate::new(EffectKind::MoveDamage)
            .cond(Condition::trigger(Trigger::AsOftenAsYouLike))
            .cond(Condition::All)
            .cond(Condition::SourceFilter { filter: TargetFilter::HasDamage })],
    )
    .phrases(&["move all of its damage"])
}

fn splash_any_friendly() -> RuleDef {
    RuleDef::emit(
        "splash-any-friendly",
        regex!(r"This attack also does (\d+) damage to 1 of your Pokémon\."),
        "This attack also does 30 damage to 1 of your Pokémon.",
        [EffectTemplate::new(EffectKind::DamageBenchedFriendly)
            .amount_from(1)
            .cond(Condition::PlayerChoice)],
    )
    .phrases(&["damage to 1 of your Pokémon"])
}

fn copy_attack_energy_check() -> RuleDef {
    RuleDef::emit(
        "copy-attack-energy-check",
        regex!(
            r"Choose 1 of your opponent’s Pokémon’s attacks and use it as this attack\. If this Pokémon doesn’t have the necessary Energy to use that attack, this attack does nothing\."
        ),
        "Choose 1 of your opponent’s Pokémon’s attacks and use it as this attack. If this Pokémon doesn’t have the necessary Energy to use that attack, this attack does nothing.",
        [EffectTemplate::new(EffectKind::CopyAttack)
            .target(TargetKind::OpponentActive)
            .cond(Condition::trigger(Trigger::SelfHasEnergy))],
    )
    .phrases(&["necessary Energy"])
}

fn halve_hp() -> RuleDef {
    RuleDef::emit(
        "halve-hp",
        regex!(r"Halve your opponent's Active Pokémon's remaining HP, rounded down\."),
        "Halve your opponent's Active Pokémon's remaining HP, rounded down.",
        [EffectTemplate::new(EffectKind::DamageHalveHp).target(TargetKind::OpponentActive)],
    )
    .phrases(&["Halve"])
}

fn copy_attack_on_heads() -> RuleDef {
    RuleDef::emit(
        "copy-attack-on-heads",
        regex!(r"If heads, choose 1 of your opponent's Active Pokémon's attacks and use it as this attack\."),
        "Flip a coin. If heads, choose 1 of your opponent's Active Pokémon's attacks and use it as this attack.",
        [EffectTemplate::new(EffectKind::CopyAttack)
            .target(TargetKind::OpponentActive)
            .cond(Condition::coin_flip(FlipOutcome::Heads))],
    )
    .phrases(&["If heads, choose"])
}

fn snipe_random() -> RuleDef {
    RuleDef::emit(
        "snipe-random",
        regex!(r"1 of your opponent's Pokémon is chosen at random\. Do (\d+) damage to it\."),
        "1 of your opponent's Pokémon is chosen at random. Do 50 damage to it.",
        [EffectTemplate::new(EffectKind::SnipeDamage).amount_from(1).cond(Condition::Random)],
    )
    .phrases(&["chosen at random. Do"])
}

fn damage_with_ally_in_play() -> RuleDef {
    RuleDef::emit(
        "damage-with-ally-in-play",
        regex!(r"if you have (.*?) in play, you may do (\d+) damage to your opponent's Active Pokémon\."),
        "Once during your turn, if you have Articuno ex in play, you may do 20 damage to your opponent's Active Pokémon.",
        [EffectTemplate::new(EffectKind::Damage)
            .target(TargetKind::OpponentActive)
            .amount_from(2)
            .cond(Condition::trigger(Trigger::OncePerTurn))
            .cond_from(|c| Some(Condition::RequiresInPlay { names: c.names_or(1)? }))],
    )
    .phrases(&["if you have", "in play"])
}

pub fn get() -> Vec<RuleDef> {
    vec![
        recoil(),
        multi_hit_random(),
        splash_benched_friendly(),
        snipe_discard_energy(),
        copy_attack(),
        snipe(),
        snipe_damaged(),
        snipe_once_per_turn(),
        rain_on_opponent_bench(),
        reactive_damage(),
        rain_on_own_bench(),
        damage_all_opponent(),
        rain_on_energized_bench(),
        recoil_on_tails(),
        snipe_benched(),
        multi_hit_random_global(),
        damage_equals_own_damage(),
        set_hp_on_heads(),
        delayed_damage(),
        knockout_on_double_heads(),
        recoil_on_knockout(),
        damage_magnet(),
        splash_any_friendly(),
        copy_attack_energy_check(),
        halve_hp(),
        copy_attack_on_heads(),
        snipe_random(),
        damage_with_ally_in_play(),
    ]
}
