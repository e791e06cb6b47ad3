//! Energy attachment, discarding, movement and retyping.

use crate::condition::{
    Condition, FlipOutcome, PlayerScope, ScaleBasis, SpotKind, TargetFilter, Trigger, Zone,
};
use crate::effect::{Effect, EffectKind, TargetKind};
use crate::rules::outcome::{Caps, EffectTemplate, RuleDef};

fn from_energy_zone() -> Condition {
    Condition::EnergySource { source: Zone::EnergyZone }
}

fn attach_self() -> RuleDef {
    RuleDef::emit(
        "attach-self",
        regex!(r"Take (?:a|1) \{([A-Z])\} Energy from your Energy Zone and attach it to this Pokémon\."),
        "Take a {R} Energy from your Energy Zone and attach it to this Pokémon.",
        [EffectTemplate::new(EffectKind::AttachEnergy)
            .target(TargetKind::ThisPokemon)
            .cond(from_energy_zone())
            .cond_from(|c| Some(Condition::energy([c.energy(1)?])))],
    )
    .phrases(&["Energy Zone", "attach it to this Pokémon"])
}

fn discard_all_own() -> RuleDef {
    RuleDef::emit(
        "discard-all-own",
        regex!(r"Discard all Energy from this Pokémon\."),
        "Discard all Energy from this Pokémon.",
        [EffectTemplate::new(EffectKind::DiscardEnergy).target(TargetKind::ThisPokemon).cond(Condition::All)],
    )
    .phrases(&["Discard all Energy"])
}

fn discard_counted_typed() -> RuleDef {
    RuleDef::emit(
        "discard-counted-typed",
        regex!(r"Discard (\d+) \{([A-Z])\} Energy from this Pokémon\."),
        "Discard 2 {R} Energy from this Pokémon.",
        [EffectTemplate::new(EffectKind::DiscardEnergy)
            .target(TargetKind::ThisPokemon)
            .amount_from(1)
            .cond_from(|c| Some(Condition::energy([c.energy(2)?])))],
    )
    .phrases(&["Discard", "Energy from this Pokémon"])
}

fn gather_typed() -> RuleDef {
    RuleDef::emit(
        "gather-typed",
        regex!(r"you may move all \{([A-Z])\} Energy from each of your Pokémon to this Pokémon\."),
        "Once during your turn, you may move all {L} Energy from each of your Pokémon to this Pokémon.",
        [EffectTemplate::new(EffectKind::MoveEnergy)
            .target(TargetKind::ThisPokemon)
            .cond(Condition::All)
            .cond_from(|c| Some(Condition::energy([c.energy(1)?])))
            .cond(Condition::Player { player: PlayerScope::Own })],
    )
    .phrases(&["move all", "to this Pokémon"])
}

fn discard_random_own() -> RuleDef {
    RuleDef::emit(
        "discard-random-own",
        regex!(r"Discard a random Energy from this Pokémon\."),
        "Discard a random Energy from this Pokémon.",
        [EffectTemplate::new(EffectKind::DiscardEnergy)
            .target(TargetKind::ThisPokemon)
            .amount(1)
            .cond(Condition::Random)],
    )
    .phrases(&["Discard a random Energy"])
}

fn discard_random_everywhere() -> RuleDef {
    RuleDef::emit(
        "discard-random-everywhere",
        regex!(r"Discard a random Energy from among the Energy attached to all Pokémon"),
        "Discard a random Energy from among the Energy attached to all Pokémon (both yours and your opponent's).",
        [EffectTemplate::new(EffectKind::DiscardEnergy)
            .target(TargetKind::AllPokemonInPlay)
            .amount(1)
            .cond(Condition::Random)],
    )
    .phrases(&["from among the Energy attached to all Pokémon"])
}

fn attach_ends_turn() -> RuleDef {
    RuleDef::emit(
        "attach-ends-turn",
        regex!(
            r"take a \{([A-Z])\} Energy .*? attach it to this Pokémon\. If you use this Ability, your turn ends\."
        ),
        "Once during your turn, you may take a {C} Energy from your Energy Zone and attach it to this Pokémon. If you use this Ability, your turn ends.",
        [EffectTemplate::new(EffectKind::AttachEnergy)
            .target(TargetKind::ThisPokemon)
            .cond(Condition::trigger(Trigger::OncePerTurn))
            .cond(from_energy_zone())
            .cond_from(|c| Some(Condition::energy([c.energy(1)?])))
            .cond(Condition::EndsTurn)],
    )
    .phrases(&["your turn ends"])
}

fn discard_opponent_on_evolve() -> RuleDef {
    RuleDef::emit(
        "discard-opponent-on-evolve",
        regex!(
            r"when you play this Pokémon from your hand to evolve .*? you may discard a random Energy from your opponent's Active Pokémon\."
        ),
        "Once during this battle, when you play this Pokémon from your hand to evolve 1 of your Pokémon, you may discard a random Energy from your opponent's Active Pokémon.",
        [EffectTemplate::new(EffectKind::DiscardEnergy)
            .target(TargetKind::OpponentActive)
            .amount(1)
            .cond(Condition::trigger(Trigger::OnEvolve))
            .cond(Condition::Random)],
    )
    .phrases(&["to evolve", "discard a random Energy"])
}

fn attach_counted_benched() -> RuleDef {
    RuleDef::emit(
        "attach-counted-benched",
        regex!(
            r"Choose (\d+) of your Benched Pokémon\. For each of those Pokémon, take a \{([A-Z])\} Energy .*? attach it to that Pokémon\."
        ),
        "Choose 2 of your Benched Pokémon. For each of those Pokémon, take a {G} Energy from your Energy Zone and attach it to that Pokémon.",
        [EffectTemplate::new(EffectKind::AttachEnergy)
            .target(TargetKind::BenchedFriendly)
            .amount_from(1)
            .cond(from_energy_zone())
            .cond_from(|c| Some(Condition::energy([c.energy(2)?])))],
    )
    .phrases(&["Choose", "of your Benched Pokémon"])
}

fn discard_one_typed() -> RuleDef {
    RuleDef::emit(
        "discard-one-typed",
        regex!(r"Discard a \{([A-Z])\} Energy from this Pokémon\."),
        "Discard a {P} Energy from this Pokémon.",
        [EffectTemplate::new(EffectKind::DiscardEnergy)
            .target(TargetKind::ThisPokemon)
            .amount(1)
            .cond_from(|c| Some(Condition::energy([c.energy(1)?])))],
    )
    .phrases(&["Discard a {"])
}

fn attach_counted() -> RuleDef {
    RuleDef::emit(
        "attach-counted",
        regex!(
            r"Take (\d+) \{([A-Z])\} Energy from your Energy Zone and attach it to (?:this Pokémon|1 of your Benched Pokémon)\."
        ),
        "Take 2 {W} Energy from your Energy Zone and attach it to this Pokémon.",
        [EffectTemplate::new(EffectKind::AttachEnergy)
            .target(TargetKind::ThisPokemon)
            .amount_from(1)
            .cond(from_energy_zone())
            .cond_from(|c| Some(Condition::energy([c.energy(2)?])))],
    )
    .phrases(&["Take", "Energy Zone"])
}

fn attach_active_typed() -> RuleDef {
    RuleDef::emit(
        "attach-active-typed",
        regex!(
            r"take a \{([A-Z])\} Energy from your Energy Zone and attach it to the \{([A-Z])\} Pokémon in the Active Spot\."
        ),
        "Once during your turn, you may take a {L} Energy from your Energy Zone and attach it to the {L} Pokémon in the Active Spot.",
        [EffectTemplate::new(EffectKind::AttachEnergy)
            .cond(Condition::trigger(Trigger::OncePerTurn))
            .cond(from_energy_zone())
            .cond_from(|c| Some(Condition::energy([c.energy(1)?])))
            .cond(Condition::Destination { zone: Zone::Active })
            .cond_from(|c| Some(Condition::TargetFilter { filter: TargetFilter::OfType(c.energy(2)?) }))],
    )
    .phrases(&["in the Active Spot"])
}

fn attach_benched() -> RuleDef {
    RuleDef::emit(
        "attach-benched",
        regex!(r"Take a \{([A-Z])\} Energy from your Energy Zone and attach it to 1 of your Benched\s+Pokémon\."),
        "Take a {P} Energy from your Energy Zone and attach it to 1 of your Benched Pokémon.",
        [EffectTemplate::new(EffectKind::AttachEnergy)
            .target(TargetKind::BenchedFriendly)
            .amount(1)
            .cond(from_energy_zone())
            .cond_from(|c| Some(Condition::energy([c.energy(1)?])))],
    )
    .phrases(&["1 of your Benched"])
}

fn retype_opponent_energy() -> RuleDef {
    RuleDef::emit(
        "retype-opponent-energy",
        regex!(
            r"Change the type of a random Energy attached to your opponent's Active Pokémon to 1 of the following at random: (.*?)\."
        ),
        "Change the type of a random Energy attached to your opponent's Active Pokémon to 1 of the following at random: {G}, {R}, {W}, {L}, {P}, {F}.",
        [EffectTemplate::new(EffectKind::ModifyEnergy)
            .target(TargetKind::OpponentActive)
            .amount(1)
            .cond(Condition::Random)
            .cond_from(|c| Some(Condition::Energy { types: c.energies(1)? }))],
    )
    .phrases(&["Change the type of a random Energy"])
}

fn discard_three_typed() -> RuleDef {
    RuleDef::emit(
        "discard-three-typed",
        regex!(r"Discard a \{([A-Z])\}, \{([A-Z])\}, and \{([A-Z])\} Energy from this Pokémon\."),
        "Discard a {R}, {W}, and {G} Energy from this Pokémon.",
        [EffectTemplate::new(EffectKind::DiscardEnergy)
            .target(TargetKind::ThisPokemon)
            .amount(3)
            .cond_from(|c| Some(Condition::Energy { types: vec![c.energy(1)?, c.energy(2)?, c.energy(3)?] }))],
    )
    .phrases(&["Discard a {"])
}

fn attach_benched_stage() -> RuleDef {
    RuleDef::emit(
        "attach-benched-stage",
        regex!(
            r"Take a \{([A-Z])\} Energy from your Energy Zone and attach it to 1 of your Benched (Basic) Pokémon\."
        ),
        "Take a {L} Energy from your Energy Zone and attach it to 1 of your Benched Basic Pokémon.",
        [EffectTemplate::new(EffectKind::AttachEnergy)
            .target(TargetKind::BenchedFriendly)
            .amount(1)
            .cond(from_energy_zone())
            .cond_from(|c| Some(Condition::energy([c.energy(1)?])))
            .cond_from(|c| Some(Condition::TargetFilter { filter: TargetFilter::Stage(c.string(2)?) }))],
    )
    .phrases(&["Benched Basic Pokémon"])
}

fn discard_all_typed() -> RuleDef {
    RuleDef::emit(
        "discard-all-typed",
        regex!(r"Discard all \{([A-Z])\} Energy from this Pokémon\."),
        "Discard all {W} Energy from this Pokémon.",
        [EffectTemplate::new(EffectKind::DiscardEnergy)
            .target(TargetKind::ThisPokemon)
            .cond(Condition::All)
            .cond_from(|c| Some(Condition::energy([c.energy(1)?])))],
    )
    .phrases(&["Discard all"])
}

fn retype_next_energy() -> RuleDef {
    RuleDef::emit(
        "retype-next-energy",
        regex!(
            r"Change the type of the next Energy that will be generated for your opponent to 1 of the following at random: (.*?)\."
        ),
        "Change the type of the next Energy that will be generated for your opponent to 1 of the following at random: {G}, {W}, {L}.",
        [EffectTemplate::new(EffectKind::ModifyEnergy)
            .target(TargetKind::OpponentActive)
            .cond(Condition::EnergySource { source: Zone::EnergyZone })
            .cond(Condition::Random)
            .cond_from(|c| Some(Condition::Energy { types: c.energies(1)? }))],
    )
    .phrases(&["the next Energy that will be generated"])
}

fn attach_once_per_turn() -> RuleDef {
    RuleDef::emit(
        "attach-once-per-turn",
        regex!(
            r"Once during your turn, you may take a \{([A-Z])\} Energy from your Energy Zone and attach it to this Pokémon\."
        ),
        "Once during your turn, you may take a {W} Energy from your Energy Zone and attach it to this Pokémon.",
        [EffectTemplate::new(EffectKind::AttachEnergy)
            .target(TargetKind::ThisPokemon)
            .amount(1)
            .cond(Condition::trigger(Trigger::OncePerTurn))
            .cond(from_energy_zone())
            .cond_from(|c| Some(Condition::energy([c.energy(1)?])))],
    )
    .phrases(&["Once during your turn", "attach it to this Pokémon"])
}

fn discard_opponent_until_tails() -> RuleDef {
    RuleDef::emit(
        "discard-opponent-until-tails",
        regex!(
            r"Flip a coin until you get tails\. For each heads, discard a random Energy from your opponent's Active Pokémon\."
        ),
        "Flip a coin until you get tails. For each heads, discard a random Energy from your opponent's Active Pokémon.",
        [EffectTemplate::new(EffectKind::DiscardEnergy)
            .target(TargetKind::OpponentActive)
            .cond(Condition::scale_by(ScaleBasis::HeadsUntilTails))
            .cond(Condition::Random)],
    )
    .phrases(&["until you get tails", "discard a random Energy"])
}

fn move_typed_benched_to_active() -> RuleDef {
    RuleDef::emit(
        "move-typed-benched-to-active",
        regex!(
            r"move all \{([A-Z])\} Energy from 1 of your Benched \{([A-Z])\} Pokémon to your Active Pokémon\."
        ),
        "Once during your turn, you may move all {L} Energy from 1 of your Benched {L} Pokémon to your Active Pokémon.",
        [EffectTemplate::new(EffectKind::MoveEnergy)
            .target(TargetKind::BenchedFriendly)
            .cond(Condition::trigger(Trigger::OncePerTurn))
            .cond(Condition::All)
            .cond_from(|c| Some(Condition::energy([c.energy(1)?])))
            .cond_from(|c| Some(Condition::SourceFilter { filter: TargetFilter::OfType(c.energy(2)?) }))
            .cond(Condition::Destination { zone: Zone::Active })],
    )
    .phrases(&["move all", "to your Active Pokémon"])
}

fn discard_random_own_counted() -> RuleDef {
    RuleDef::emit(
        "discard-random-own-counted",
        regex!(r"Discard (\d+) random Energy from this Pokémon\."),
        "Discard 2 random Energy from this Pokémon.",
        [EffectTemplate::new(EffectKind::DiscardEnergy)
            .target(TargetKind::ThisPokemon)
            .amount_from(1)
            .cond(Condition::Random)],
    )
    .phrases(&["random Energy from this Pokémon"])
}

fn attach_benched_by_flips() -> RuleDef {
    RuleDef::emit(
        "attach-benched-by-flips",
        regex!(
            r"Flip (\d+) coins\. Take an amount of \{([A-Z])\} Energy .*? equal to the number of heads and attach it to your Benched \{([A-Z])\} Pokémon in any way you like\."
        ),
        "Flip 4 coins. Take an amount of {L} Energy from your Energy Zone equal to the number of heads and attach it to your Benched {L} Pokémon in any way you like.",
        [EffectTemplate::new(EffectKind::AttachEnergy)
            .target(TargetKind::BenchedFriendly)
            .cond(from_energy_zone())
            .cond_from(|c| Some(Condition::energy([c.energy(2)?])))
            .cond_from(|c| Some(Condition::TargetFilter { filter: TargetFilter::OfType(c.energy(3)?) }))
            .cond(Condition::scale_by(ScaleBasis::HeadsFlipped))
            .cond_from(|c| Some(Condition::FlipCount { flips: c.uint(1)? }))
            .cond(Condition::PlayerChoice)],
    )
    .phrases(&["equal to the number of heads"])
}

fn attach_three_specific() -> RuleDef {
    RuleDef::emit(
        "attach-three-specific",
        regex!(
            r"Take a \{([A-Z])\}, \{([A-Z])\}, and \{([A-Z])\} Energy .*? and attach them to your Benched Basic Pokémon in any way you like\."
        ),
        "Take a {G}, {R}, and {W} Energy from your Energy Zone and attach them to your Benched Basic Pokémon in any way you like.",
        [EffectTemplate::new(EffectKind::AttachEnergy)
            .target(TargetKind::BenchedFriendly)
            .cond(from_energy_zone())
            .cond_from(|c| Some(Condition::Energy { types: vec![c.energy(1)?, c.energy(2)?, c.energy(3)?] }))
            .cond(Condition::TargetFilter { filter: TargetFilter::Stage("Basic".into()) })
            .cond(Condition::PlayerChoice)],
    )
    .phrases(&["attach them to your Benched Basic"])
}

fn ferry_energy() -> RuleDef {
    RuleDef::emit(
        "ferry-energy",
        regex!(
            r"As often as you like during your turn, you may move a \{([A-Z])\} Energy from 1 of your Benched \{([A-Z])\} Pokémon to your Active \{([A-Z])\} Pokémon\."
        ),
        "As often as you like during your turn, you may move a {W} Energy from 1 of your Benched {W} Pokémon to your Active {W} Pokémon.",
        [EffectTemplate::new(EffectKind::MoveEnergy)
            .amount(1)
            .cond(Condition::trigger(Trigger::AsOftenAsYouLike))
            .cond_from(|c| Some(Condition::energy([c.energy(1)?])))
            .cond_from(|c| Some(Condition::SourceFilter { filter: TargetFilter::OfType(c.energy(2)?) }))
            .cond_from(|c| Some(Condition::TargetFilter { filter: TargetFilter::OfType(c.energy(3)?) }))
            .cond(Condition::EnergySource { source: Zone::Bench })
            .cond(Condition::Destination { zone: Zone::Active })],
    )
    .phrases(&["As often as you like", "move a {"])
}

/// One sentence, two coupled effects: the attachment, then the self-damage.
fn attach_from_discard_with_recoil() -> RuleDef {
    RuleDef::emit(
        "attach-from-discard-with-recoil",
        regex!(
            r"you may attach a \{([A-Z])\} Energy from your discard pile to this Pokémon\. If you do, do (\d+) damage to this Pokémon\."
        ),
        "Once during your turn, you may attach a {R} Energy from your discard pile to this Pokémon. If you do, do 20 damage to this Pokémon.",
        [
            EffectTemplate::new(EffectKind::AttachEnergy)
                .cond(Condition::trigger(Trigger::OncePerTurn))
                .cond(Condition::EnergySource { source: Zone::DiscardPile })
                .cond_from(|c| Some(Condition::energy([c.energy(1)?]))),
            EffectTemplate::new(EffectKind::RecoilDamage).target(TargetKind::ThisPokemon).amount_from(2),
        ],
    )
    .phrases(&["discard pile"])
}

fn attach_typed_benched() -> RuleDef {
    RuleDef::emit(
        "attach-typed-benched",
        regex!(
            r"Take a \{([A-Z])\} Energy from your Energy Zone and attach it to 1 of your Benched \{([A-Z])\} Pokémon\."
        ),
        "Take a {G} Energy from your Energy Zone and attach it to 1 of your Benched {G} Pokémon.",
        [EffectTemplate::new(EffectKind::AttachEnergy)
            .target(TargetKind::BenchedFriendly)
            .amount(1)
            .cond(from_energy_zone())
            .cond_from(|c| Some(Condition::energy([c.energy(1)?])))
            .cond_from(|c| Some(Condition::TargetFilter { filter: TargetFilter::OfType(c.energy(2)?) }))],
    )
    .phrases(&["1 of your Benched {"])
}

fn attach_end_of_first_turn() -> RuleDef {
    RuleDef::emit(
        "attach-end-of-first-turn",
        regex!(
            r"At the end of your first turn, take a \{([A-Z])\} Energy from your Energy Zone and attach it to this Pokémon\."
        ),
        "At the end of your first turn, take a {M} Energy from your Energy Zone and attach it to this Pokémon.",
        [EffectTemplate::new(EffectKind::AttachEnergy)
            .target(TargetKind::ThisPokemon)
            .amount(1)
            .cond(Condition::trigger(Trigger::EndOfFirstTurn))
            .cond(from_energy_zone())
            .cond_from(|c| Some(Condition::energy([c.energy(1)?])))],
    )
    .phrases(&["At the end of your first turn"])
}

fn attach_any_typed_friendly() -> RuleDef {
    RuleDef::emit(
        "attach-any-typed-friendly",
        regex!(
            r"if this Pokémon is in the Active Spot, you may take a \{([A-Z])\} Energy from your Energy Zone and attach it to 1 of your \{([A-Z])\} Pokémon\."
        ),
        "Once during your turn, if this Pokémon is in the Active Spot, you may take a {G} Energy from your Energy Zone and attach it to 1 of your {G} Pokémon.",
        [EffectTemplate::new(EffectKind::AttachEnergy)
            .amount(1)
            .cond(Condition::trigger(Trigger::OncePerTurn))
            .cond(Condition::Spot { spot: SpotKind::Active })
            .cond(from_energy_zone())
            .cond_from(|c| Some(Condition::energy([c.energy(1)?])))
            .cond_from(|c| Some(Condition::TargetFilter { filter: TargetFilter::OfType(c.energy(2)?) }))],
    )
    .phrases(&["attach it to 1 of your {"])
}

/// "Discard a random Energy from both Active Pokémon." — own side first.
fn extract_discard_both_active(_caps: &Caps, text: &str) -> Option<Vec<Effect>> {
    let mut own = Effect::new(EffectKind::DiscardEnergy, text);
    own.target = Some(TargetKind::ThisPokemon);
    own.amount = Some(1);
    own.conditions.push(Condition::Random);
    let mut opponent = Effect::new(EffectKind::DiscardEnergy, text);
    opponent.target = Some(TargetKind::OpponentActive);
    opponent.amount = Some(1);
    opponent.conditions.push(Condition::Random);
    Some(vec![own, opponent])
}

fn discard_both_active() -> RuleDef {
    RuleDef::with(
        "discard-both-active",
        regex!(r"Discard a random Energy from both Active Pokémon\."),
        "Discard a random Energy from both Active Pokémon.",
        extract_discard_both_active,
    )
    .phrases(&["both Active Pokémon"])
}

fn discard_opponent_on_heads() -> RuleDef {
    RuleDef::emit(
        "discard-opponent-on-heads",
        regex!(r"(?i)flip a coin\. If heads, discard a random Energy from your opponent's Active Pokémon\."),
        "Flip a coin. If heads, discard a random Energy from your opponent's Active Pokémon.",
        [EffectTemplate::new(EffectKind::DiscardEnergy)
            .target(TargetKind::OpponentActive)
            .amount(1)
            .cond(Condition::coin_flip(FlipOutcome::Heads))
            .cond(Condition::Random)],
    )
}

fn move_all_to_benched() -> RuleDef {
    RuleDef::emit(
        "move-all-to-benched",
        regex!(r"Move all Energy from this Pokémon to 1 of your Benched Pokémon\."),
        "Move all Energy from this Pokémon to 1 of your Benched Pokémon.",
        [EffectTemplate::new(EffectKind::MoveEnergy)
            .target(TargetKind::BenchedFriendly)
            .cond(Condition::All)
            .cond(Condition::Destination { zone: Zone::Bench })],
    )
    .phrases(&["Move all Energy"])
}

fn attach_to_named() -> RuleDef {
    RuleDef::emit(
        "attach-to-named",
        regex!(r"Take a \{([A-Z])\} Energy from your Energy Zone and attach it to (\w+) or (\w+)\."),
        "Take a {L} Energy from your Energy Zone and attach it to Raichu or Electrode.",
        [EffectTemplate::new(EffectKind::AttachEnergy)
            .amount(1)
            .cond(from_energy_zone())
            .cond_from(|c| Some(Condition::energy([c.energy(1)?])))
            .cond_from(|c| {
                Some(Condition::TargetFilter {
                    filter: TargetFilter::Named(vec![c.string(2)?, c.string(3)?]),
                })
            })],
    )
    .phrases(&["Energy Zone", "attach it to"])
}

pub fn get() -> Vec<RuleDef> {
    vec![
        attach_self(),
        discard_all_own(),
        discard_counted_typed(),
        gather_typed(),
        discard_random_own(),
        discard_random_everywhere(),
        attach_ends_turn(),
        discard_opponent_on_evolve(),
        attach_counted_benched(),
        discard_one_typed(),
        attach_counted(),
        attach_active_typed(),
        attach_benched(),
        retype_opponent_energy(),
        discard_three_typed(),
        attach_benched_stage(),
        discard_all_typed(),
        retype_next_energy(),
        attach_once_per_turn(),
        discard_opponent_until_tails(),
        move_typed_benched_to_active(),
        discard_random_own_counted(),
        attach_benched_by_flips(),
        attach_three_specific(),
        ferry_energy(),
        attach_from_discard_with_recoil(),
        attach_typed_benched(),
        attach_end_of_first_turn(),
        attach_any_typed_friendly(),
        discard_both_active(),
        discard_opponent_on_heads(),
        move_all_to_benched(),
        attach_to_named(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::EnergyKind;
    use crate::engine::RuleSet;

    fn set() -> RuleSet {
        let mut builder = RuleSet::builder(0);
        for rule in get() {
            builder.register(rule).unwrap();
        }
        builder.build().unwrap()
    }

    #[test]
    fn single_attach_outranks_the_counted_form() {
        // "Take 1 {R} Energy…" satisfies both patterns; the single-attach
        // rule is earlier and must win.
        let set = set();
        assert_eq!(
            set.deciding_rule("Take 1 {R} Energy from your Energy Zone and attach it to this Pokémon."),
            Some("attach-self")
        );
        assert_eq!(
            set.deciding_rule("Take 2 {W} Energy from your Energy Zone and attach it to this Pokémon."),
            Some("attach-counted")
        );
    }

    #[test]
    fn discard_both_active_emits_own_side_first() {
        let effects = set().parse("Discard a random Energy from both Active Pokémon.");
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0].target, Some(TargetKind::ThisPokemon));
        assert_eq!(effects[1].target, Some(TargetKind::OpponentActive));
    }

    #[test]
    fn retype_lists_every_candidate_type() {
        let effects = set().parse(
            "Change the type of a random Energy attached to your opponent's Active Pokémon to 1 of the following at random: {G}, {R}, {W}, {L}, {P}, {F}.",
        );
        assert_eq!(effects.len(), 1);
        assert!(effects[0].conditions.contains(&Condition::Energy {
            types: vec![
                EnergyKind::Grass,
                EnergyKind::Fire,
                EnergyKind::Water,
                EnergyKind::Lightning,
                EnergyKind::Psychic,
                EnergyKind::Fighting,
            ]
        }));
    }

    #[test]
    fn attach_with_recoil_splits_into_two_ordered_effects() {
        let effects = set().parse(
            "Once during your turn, you may attach a {R} Energy from your discard pile to this Pokémon. If you do, do 20 damage to this Pokémon.",
        );
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0].kind, EffectKind::AttachEnergy);
        assert_eq!(effects[1].kind, EffectKind::RecoilDamage);
        assert_eq!(effects[1].amount, Some(20));
    }
}
