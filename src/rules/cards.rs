//! Draws, deck searches, deck discards and hand manipulation.

use crate::condition::{
    Condition, FlipOutcome, PlayerScope, ScaleBasis, SearchFilter, SpotKind, Trigger, Zone,
};
use crate::effect::{EffectKind, TargetKind};
use crate::rules::outcome::{EffectTemplate, RuleDef};

fn search(filter: SearchFilter) -> Condition {
    Condition::Search { destination: Zone::Hand, random: true, filter: Some(filter) }
}

fn search_typed() -> RuleDef {
    RuleDef::emit(
        "search-typed",
        regex!(r"Put (\d+) random \{([A-Z])\} Pokémon from your deck into your hand\."),
        "Put 1 random {G} Pokémon from your deck into your hand.",
        [EffectTemplate::new(EffectKind::SearchDeck)
            .target(TargetKind::Deck)
            .amount_from(1)
            .cond_from(|c| Some(search(SearchFilter::PokemonOfType(c.energy(2)?))))],
    )
    .phrases(&["from your deck into your hand"])
}

fn search_evolution() -> RuleDef {
    RuleDef::emit(
        "search-evolution",
        regex!(r"Put a random card that evolves from (\w+) from your deck into your hand\."),
        "Put a random card that evolves from Eevee from your deck into your hand.",
        [EffectTemplate::new(EffectKind::SearchDeck)
            .target(TargetKind::Deck)
            .amount(1)
            .cond_from(|c| Some(search(SearchFilter::EvolvesFrom(c.string(1)?))))],
    )
    .phrases(&["that evolves from"])
}

fn hand_disruption() -> RuleDef {
    RuleDef::emit(
        "hand-disruption",
        regex!(r"Discard a random (.*?) from your opponent's hand\."),
        "Discard a random Supporter card from your opponent's hand.",
        [EffectTemplate::new(EffectKind::DiscardFromHand)
            .target(TargetKind::OpponentHand)
            .amount(1)
            .cond(Condition::Random)
            .cond_from(|c| Some(Condition::CardType { card_type: c.string(1)? }))],
    )
    .phrases(&["from your opponent's hand"])
}

fn search_named_to_bench() -> RuleDef {
    RuleDef::emit(
        "search-named-to-bench",
        regex!(r"Put 1 random (.*?) from your deck onto your Bench\."),
        "Put 1 random Wishiwashi or Wishiwashi ex from your deck onto your Bench.",
        [EffectTemplate::new(EffectKind::SearchDeck)
            .target(TargetKind::Deck)
            .amount(1)
            .cond_from(|c| {
                Some(Condition::Search {
                    destination: Zone::Bench,
                    random: true,
                    filter: Some(SearchFilter::Named(c.names_or(1)?)),
                })
            })],
    )
    .phrases(&["from your deck onto your Bench"])
}

fn draw_at_end_of_turn() -> RuleDef {
    RuleDef::emit(
        "draw-at-end-of-turn",
        regex!(r"At the end of your turn, if this Pokémon is in the Active Spot, draw a card\."),
        "At the end of your turn, if this Pokémon is in the Active Spot, draw a card.",
        [EffectTemplate::new(EffectKind::Draw)
            .amount(1)
            .cond(Condition::trigger(Trigger::EndOfTurn))
            .cond(Condition::Spot { spot: SpotKind::Active })],
    )
    .phrases(&["draw a card"])
}

fn draw() -> RuleDef {
    RuleDef::emit(
        "draw",
        regex!(r"Draw a card\."),
        "Draw a card.",
        [EffectTemplate::new(EffectKind::Draw).amount(1)],
    )
    .phrases(&["Draw a card."])
}

fn draw_on_evolve() -> RuleDef {
    RuleDef::emit(
        "draw-on-evolve",
        regex!(r"when you play this Pokémon from your hand to evolve .*?, you may draw (\d+) cards\."),
        "Once during this battle, when you play this Pokémon from your hand to evolve 1 of your Pokémon, you may draw 2 cards.",
        [EffectTemplate::new(EffectKind::Draw).amount_from(1).cond(Condition::trigger(Trigger::OnEvolve))],
    )
    .phrases(&["to evolve", "draw"])
}

fn mill_opponent() -> RuleDef {
    RuleDef::emit(
        "mill-opponent",
        regex!(r"Discard the top card of your opponent's deck\."),
        "Discard the top card of your opponent's deck.",
        [EffectTemplate::new(EffectKind::DiscardDeck)
            .target(TargetKind::Deck)
            .amount(1)
            .cond(Condition::Player { player: PlayerScope::Opponent })],
    )
    .phrases(&["top card of your opponent's deck"])
}

fn hand_shuffle_by_flips() -> RuleDef {
    RuleDef::emit(
        "hand-shuffle-by-flips",
        regex!(
            r"Flip (\d+) coins\. For each heads, a card is chosen at random from your opponent's hand\. Your opponent reveals that card and shuffles it into their deck\."
        ),
        "Flip 2 coins. For each heads, a card is chosen at random from your opponent's hand. Your opponent reveals that card and shuffles it into their deck.",
        [EffectTemplate::new(EffectKind::ShuffleFromHand)
            .target(TargetKind::OpponentHand)
            .cond(Condition::scale_by(ScaleBasis::HeadsFlipped))
            .cond_from(|c| Some(Condition::FlipCount { flips: c.uint(1)? }))
            .cond(Condition::Random)],
    )
    .phrases(&["For each heads, a card is chosen at random"])
}

fn hand_pick_shuffle() -> RuleDef {
    RuleDef::emit(
        "hand-pick-shuffle",
        regex!(
            r"Your opponent reveals their hand\. Choose a card you find there and shuffle it into your opponent's deck\."
        ),
        "Your opponent reveals their hand. Choose a card you find there and shuffle it into your opponent's deck.",
        [EffectTemplate::new(EffectKind::ShuffleFromHand)
            .target(TargetKind::OpponentHand)
            .amount(1)
            .cond(Condition::Revealed)
            .cond(Condition::PlayerChoice)],
    )
    .phrases(&["Choose a card you find there"])
}

fn peek_own_deck() -> RuleDef {
    RuleDef::emit(
        "peek-own-deck",
        regex!(r"you may look at the top card of your deck\."),
        "Once during your turn, you may look at the top card of your deck.",
        [EffectTemplate::new(EffectKind::LookAtDeck)
            .target(TargetKind::Deck)
            .amount(1)
            .cond(Condition::trigger(Trigger::OncePerTurn))],
    )
    .phrases(&["look at the top card of your deck"])
}

fn search_any() -> RuleDef {
    RuleDef::emit(
        "search-any",
        regex!(r"Put a random Pokémon from your deck into your hand\."),
        "Put a random Pokémon from your deck into your hand.",
        [EffectTemplate::new(EffectKind::SearchDeck)
            .target(TargetKind::Deck)
            .amount(1)
            .cond(search(SearchFilter::Any))],
    )
    .phrases(&["Put a random Pokémon"])
}

fn mill_both() -> RuleDef {
    RuleDef::emit(
        "mill-both",
        regex!(r"Discard the top (\d+) cards of each player's deck\."),
        "Discard the top 3 cards of each player's deck.",
        [EffectTemplate::new(EffectKind::DiscardDeck)
            .amount_from(1)
            .cond(Condition::Player { player: PlayerScope::Both })],
    )
    .phrases(&["each player's deck"])
}

fn draw_with_discard_cost() -> RuleDef {
    RuleDef::emit(
        "draw-with-discard-cost",
        regex!(
            r"You must discard a card from your hand in order to use this Ability\. Once during your turn, you may draw a card\."
        ),
        "You must discard a card from your hand in order to use this Ability. Once during your turn, you may draw a card.",
        [EffectTemplate::new(EffectKind::Draw)
            .amount(1)
            .cond(Condition::trigger(Trigger::OncePerTurn))
            .cond(Condition::HandCost { discard: 1 })],
    )
    .phrases(&["You must discard a card"])
}

fn reveal_hand() -> RuleDef {
    RuleDef::emit(
        "reveal-hand",
        regex!(r"Your opponent reveals their hand\."),
        "Your opponent reveals their hand.",
        [EffectTemplate::new(EffectKind::RevealHand).target(TargetKind::OpponentHand)],
    )
    .phrases(&["Your opponent reveals their hand."])
}

fn strip_tools() -> RuleDef {
    RuleDef::emit(
        "strip-tools",
        regex!(r"(Before doing damage, discard|Discard) all Pokémon Tools from your opponent's Active Pokémon\."),
        "Before doing damage, discard all Pokémon Tools from your opponent's Active Pokémon.",
        [EffectTemplate::new(EffectKind::DiscardTool).target(TargetKind::OpponentActive).cond(Condition::All)],
    )
    .phrases(&["all Pokémon Tools"])
}

fn hand_disruption_on_heads() -> RuleDef {
    RuleDef::emit(
        "hand-disruption-on-heads",
        regex!(r"Flip a coin\. If heads, discard a random card from your opponent's hand\."),
        "Flip a coin. If heads, discard a random card from your opponent's hand.",
        [EffectTemplate::new(EffectKind::DiscardFromHand)
            .target(TargetKind::OpponentHand)
            .amount(1)
            .cond(Condition::coin_flip(FlipOutcome::Heads))
            .cond(Condition::Random)],
    )
    .phrases(&["discard a random card"])
}

fn peek_either_deck() -> RuleDef {
    RuleDef::emit(
        "peek-either-deck",
        regex!(r"you may choose either player\. Look at the top card of that player's deck\."),
        "Once during your turn, you may choose either player. Look at the top card of that player's deck.",
        [EffectTemplate::new(EffectKind::LookAtDeck)
            .target(TargetKind::Deck)
            .amount(1)
            .cond(Condition::trigger(Trigger::OncePerTurn))
            .cond(Condition::Player { player: PlayerScope::Either })],
    )
    .phrases(&["choose either player"])
}

fn mill_self() -> RuleDef {
    RuleDef::emit(
        "mill-self",
        regex!(r"Discard the top (\d+) cards of your deck\."),
        "Discard the top 3 cards of your deck.",
        [EffectTemplate::new(EffectKind::DiscardDeck)
            .target(TargetKind::Deck)
            .amount_from(1)
            .cond(Condition::Player { player: PlayerScope::Own })],
    )
    .phrases(&["cards of your deck"])
}

/// One sentence, two coupled effects: the self-mill, then the bonus damage
/// keyed to what was discarded.
fn mill_self_bonus() -> RuleDef {
    RuleDef::emit(
        "mill-self-bonus",
        regex!(
            r"Discard the top card of your deck\. If that card is a \{([A-Z])\} Pokémon, this attack does (\d+) more damage\."
        ),
        "Discard the top card of your deck. If that card is a {W} Pokémon, this attack does 60 more damage.",
        [
            EffectTemplate::new(EffectKind::DiscardDeck)
                .target(TargetKind::Deck)
                .amount(1)
                .cond(Condition::Player { player: PlayerScope::Own }),
            EffectTemplate::new(EffectKind::ConditionalDamage)
                .amount_from(2)
                .cond_from(|c| Some(Condition::trigger(Trigger::DiscardedCardIsType(c.energy(1)?)))),
        ],
    )
    .phrases(&["Discard the top card of your deck."])
}

fn search_tool() -> RuleDef {
    RuleDef::emit(
        "search-tool",
        regex!(r"you may put a random Pokémon Tool card from your deck into your hand\."),
        "Once during your turn, you may put a random Pokémon Tool card from your deck into your hand.",
        [EffectTemplate::new(EffectKind::SearchDeck)
            .target(TargetKind::Deck)
            .amount(1)
            .cond(Condition::trigger(Trigger::OncePerTurn))
            .cond(search(SearchFilter::CardType("Pokémon Tool".into())))],
    )
    .phrases(&["Pokémon Tool card from your deck"])
}

/// Two coupled effects, in sentence order: shuffle the hand away, then draw
/// off the opponent's hand size.
fn refresh_hand() -> RuleDef {
    RuleDef::emit(
        "refresh-hand",
        regex!(r"Shuffle your hand into your deck\. Draw a card for each card in your opponent's hand\."),
        "Shuffle your hand into your deck. Draw a card for each card in your opponent's hand.",
        [
            EffectTemplate::new(EffectKind::ShuffleFromHand)
                .target(TargetKind::Hand)
                .cond(Condition::Player { player: PlayerScope::Own })
                .cond(Condition::Destination { zone: Zone::Deck }),
            EffectTemplate::new(EffectKind::Draw).cond(Condition::scale_by(ScaleBasis::OpponentHandSize)),
        ],
    )
    .phrases(&["Shuffle your hand into your deck"])
}

fn hand_shuffle_on_heads() -> RuleDef {
    RuleDef::emit(
        "hand-shuffle-on-heads",
        regex!(r"If heads, your opponent reveals a random card from their hand and shuffles it into their deck\."),
        "Flip a coin. If heads, your opponent reveals a random card from their hand and shuffles it into their deck.",
        [EffectTemplate::new(EffectKind::ShuffleFromHand)
            .target(TargetKind::OpponentHand)
            .amount(1)
            .cond(Condition::coin_flip(FlipOutcome::Heads))
            .cond(Condition::Revealed)
            .cond(Condition::Random)
            .cond(Condition::Destination { zone: Zone::Deck })],
    )
    .phrases(&["reveals a random card"])
}

fn draw_to_match() -> RuleDef {
    RuleDef::emit(
        "draw-to-match",
        regex!(r"Draw cards until you have the same number of cards in your hand as your opponent\."),
        "Draw cards until you have the same number of cards in your hand as your opponent.",
        [EffectTemplate::new(EffectKind::Draw).cond(Condition::UntilHandMatchesOpponent)],
    )
    .phrases(&["Draw cards until"])
}

fn hand_shuffle_simple() -> RuleDef {
    RuleDef::emit(
        "hand-shuffle-simple",
        regex!(r"Your opponent reveals a random card from their hand and shuffles it into their deck\."),
        "Your opponent reveals a random card from their hand and shuffles it into their deck.",
        [EffectTemplate::new(EffectKind::ShuffleFromHand)
            .target(TargetKind::OpponentHand)
            .amount(1)
            .cond(Condition::Revealed)
            .cond(Condition::Random)
            .cond(Condition::Destination { zone: Zone::Deck })],
    )
    .phrases(&["Your opponent reveals a random card"])
}

fn reveal_hand_on_bench_play() -> RuleDef {
    RuleDef::emit(
        "reveal-hand-on-bench-play",
        regex!(
            r"when you put this Pokémon from your hand onto your Bench, you may have your opponent reveal their hand\."
        ),
        "Once during this game, when you put this Pokémon from your hand onto your Bench, you may have your opponent reveal their hand.",
        [EffectTemplate::new(EffectKind::RevealHand)
            .target(TargetKind::OpponentHand)
            .cond(Condition::trigger(Trigger::OnPlayToBench))],
    )
    .phrases(&["onto your Bench", "reveal their hand"])
}

pub fn get() -> Vec<RuleDef> {
    vec![
        search_typed(),
        search_evolution(),
        hand_disruption(),
        search_named_to_bench(),
        draw_at_end_of_turn(),
        draw(),
        draw_on_evolve(),
        mill_opponent(),
        hand_shuffle_by_flips(),
        hand_pick_shuffle(),
        peek_own_deck(),
        search_any(),
        mill_both(),
        draw_with_discard_cost(),
        reveal_hand(),
        strip_tools(),
        hand_disruption_on_heads(),
        peek_either_deck(),
        mill_self(),
        mill_self_bonus(),
        search_tool(),
        refresh_hand(),
        hand_shuffle_on_heads(),
        draw_to_match(),
        hand_shuffle_simple(),
        reveal_hand_on_bench_play(),
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
    fn reveal_prefix_rules_outrank_the_bare_reveal() {
        let set = set();
        assert_eq!(
            set.deciding_rule(
                "Your opponent reveals their hand. Choose a card you find there and shuffle it into your opponent's deck."
            ),
            Some("hand-pick-shuffle")
        );
        assert_eq!(set.deciding_rule("Your opponent reveals their hand."), Some("reveal-hand"));
    }

    #[test]
    fn mill_bonus_composite_keeps_source_order() {
        let effects = set().parse(
            "Discard the top card of your deck. If that card is a {W} Pokémon, this attack does 60 more damage.",
        );
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0].kind, EffectKind::DiscardDeck);
        assert_eq!(effects[1].kind, EffectKind::ConditionalDamage);
        assert_eq!(effects[1].amount, Some(60));
        // Both halves keep the full source sentence for audit.
        assert_eq!(effects[0].description, effects[1].description);
    }

    #[test]
    fn draw_keeps_an_implicit_count_of_one() {
        let effects = set().parse("Draw a card.");
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].kind, EffectKind::Draw);
        assert_eq!(effects[0].amount, Some(1));
        assert_eq!(effects[0].target, None);
    }
}
