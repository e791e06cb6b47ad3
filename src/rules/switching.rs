//! Switching, bouncing and devolving Pokémon.

use crate::condition::{Condition, FlipOutcome, SpotKind, TargetFilter, Trigger, Zone};
use crate::effect::{EffectKind, TargetKind};
use crate::rules::outcome::{EffectTemplate, RuleDef};

fn push_out() -> RuleDef {
    RuleDef::emit(
        "push-out",
        regex!(r"Switch out your opponent’s? Active Pokémon to the Bench\."),
        "Switch out your opponent’s Active Pokémon to the Bench.",
        [EffectTemplate::new(EffectKind::ForceSwitch).target(TargetKind::OpponentActive)],
    )
    .phrases(&["Switch out"])
}

fn push_out_once_per_turn() -> RuleDef {
    RuleDef::emit(
        "push-out-once-per-turn",
        regex!(r"Once during your turn, you may switch out your opponent's Active Pokémon to the Bench\."),
        "Once during your turn, you may switch out your opponent's Active Pokémon to the Bench.",
        [EffectTemplate::new(EffectKind::ForceSwitch)
            .target(TargetKind::OpponentActive)
            .cond(Condition::trigger(Trigger::OncePerTurn))],
    )
    .phrases(&["you may switch out"])
}

fn switch_self() -> RuleDef {
    RuleDef::emit(
        "switch-self",
        regex!(r"Switch this Pokémon with 1 of your Benched Pokémon\."),
        "Switch this Pokémon with 1 of your Benched Pokémon.",
        [EffectTemplate::new(EffectKind::SwitchSelf).target(TargetKind::BenchedFriendly)],
    )
    .phrases(&["Switch this Pokémon"])
}

fn shuffle_opponent_into_deck() -> RuleDef {
    RuleDef::emit(
        "shuffle-opponent-into-deck",
        regex!(r"If heads, your opponent shuffles their Active Pokémon into their deck\."),
        "Flip a coin. If heads, your opponent shuffles their Active Pokémon into their deck.",
        [EffectTemplate::new(EffectKind::ShuffleIntoDeck)
            .target(TargetKind::OpponentActive)
            .cond(Condition::coin_flip(FlipOutcome::Heads))],
    )
    .phrases(&["shuffles their Active Pokémon"])
}

fn switch_in_from_bench() -> RuleDef {
    RuleDef::emit(
        "switch-in-from-bench",
        regex!(r"if this Pokémon is on your Bench, you may switch it with your Active Pokémon\."),
        "Once during your turn, if this Pokémon is on your Bench, you may switch it with your Active Pokémon.",
        [EffectTemplate::new(EffectKind::SwitchSelf)
            .target(TargetKind::ThisPokemon)
            .cond(Condition::trigger(Trigger::OncePerTurn))
            .cond(Condition::Spot { spot: SpotKind::Bench })],
    )
    .phrases(&["you may switch it"])
}

fn switch_self_typed() -> RuleDef {
    RuleDef::emit(
        "switch-self-typed",
        regex!(r"Switch this Pokémon with 1 of your Benched \{([A-Z])\} Pokémon\."),
        "Switch this Pokémon with 1 of your Benched {W} Pokémon.",
        [EffectTemplate::new(EffectKind::SwitchSelf)
            .target(TargetKind::BenchedFriendly)
            .cond_from(|c| Some(Condition::TargetFilter { filter: TargetFilter::OfType(c.energy(1)?) }))],
    )
    .phrases(&["Switch this Pokémon", "Benched {"])
}

fn drag_in_damaged() -> RuleDef {
    RuleDef::emit(
        "drag-in-damaged",
        regex!(
            r"you may switch in 1 of your opponent's Benched Pokémon that has damage on it to the Active Spot\."
        ),
        "Once during your turn, if this Pokémon is in the Active Spot, you may switch in 1 of your opponent's Benched Pokémon that has damage on it to the Active Spot.",
        [EffectTemplate::new(EffectKind::ForceSwitch)
            .target(TargetKind::OpponentActive)
            .cond(Condition::trigger(Trigger::OncePerTurn))
            .cond(Condition::Spot { spot: SpotKind::Active })
            .cond(Condition::TargetFilter { filter: TargetFilter::HasDamage })],
    )
    .phrases(&["that has damage on it"])
}

fn drag_in_basic() -> RuleDef {
    RuleDef::emit(
        "drag-in-basic",
        regex!(r"switch in 1 of your opponent's Benched Basic Pokémon to the Active Spot\."),
        "Once during your turn, you may switch in 1 of your opponent's Benched Basic Pokémon to the Active Spot.",
        [EffectTemplate::new(EffectKind::ForceSwitch)
            .cond(Condition::trigger(Trigger::OncePerTurn))
            .cond(Condition::Spot { spot: SpotKind::Active })
            .cond(Condition::PlayerChoice)
            .cond(Condition::TargetFilter { filter: TargetFilter::Stage("Basic".into()) })],
    )
    .phrases(&["Benched Basic Pokémon to the Active Spot"])
}

fn switch_self_subtype() -> RuleDef {
    RuleDef::emit(
        "switch-self-subtype",
        regex!(r"you may switch your Active (.*?) with 1 of your Benched (.*?)\."),
        "Once during your turn, you may switch your Active Ultra Beast with 1 of your Benched Ultra Beast.",
        [EffectTemplate::new(EffectKind::SwitchSelf)
            .cond(Condition::trigger(Trigger::OncePerTurn))
            .cond_from(|c| Some(Condition::SourceFilter { filter: TargetFilter::Subtype(c.string(1)?) }))
            .cond_from(|c| Some(Condition::TargetFilter { filter: TargetFilter::Subtype(c.string(2)?) }))],
    )
    .phrases(&["you may switch your Active"])
}

fn bounce_on_heads() -> RuleDef {
    RuleDef::emit(
        "bounce-on-heads",
        regex!(r"If heads, put your opponent's Active Pokémon into their hand\."),
        "Flip a coin. If heads, put your opponent's Active Pokémon into their hand.",
        [EffectTemplate::new(EffectKind::ReturnToHand)
            .target(TargetKind::OpponentActive)
            .cond(Condition::coin_flip(FlipOutcome::Heads))],
    )
    .phrases(&["into their hand"])
}

fn devolve_opponent() -> RuleDef {
    RuleDef::emit(
        "devolve-opponent",
        regex!(
            r"If your opponent's Active Pokémon is an evolved Pokémon, devolve it by putting the highest Stage Evolution card on it into your opponent's hand\."
        ),
        "If your opponent's Active Pokémon is an evolved Pokémon, devolve it by putting the highest Stage Evolution card on it into your opponent's hand.",
        [EffectTemplate::new(EffectKind::Devolve)
            .target(TargetKind::OpponentActive)
            .amount(1)
            .cond(Condition::trigger(Trigger::OpponentIsEvolved))
            .cond(Condition::Destination { zone: Zone::Hand })],
    )
    .phrases(&["devolve"])
}

fn voluntary_switch() -> RuleDef {
    RuleDef::emit(
        "voluntary-switch",
        regex!(r"You may switch this Pokémon with 1 of your Benched Pokémon\."),
        "You may switch this Pokémon with 1 of your Benched Pokémon.",
        [EffectTemplate::new(EffectKind::SwitchSelf)
            .target(TargetKind::BenchedFriendly)
            .cond(Condition::PlayerChoice)],
    )
    .phrases(&["You may switch this Pokémon"])
}

pub fn get() -> Vec<RuleDef> {
    vec![
        push_out(),
        push_out_once_per_turn(),
        switch_self(),
        shuffle_opponent_into_deck(),
        switch_in_from_bench(),
        switch_self_typed(),
        drag_in_damaged(),
        drag_in_basic(),
        switch_self_subtype(),
        bounce_on_heads(),
        devolve_opponent(),
        voluntary_switch(),
    ]
}
