use crate::condition::{Condition, ScaleBasis};
use crate::effect::{EffectKind, TargetKind};
use crate::rules::table;

#[test]
fn the_full_table_builds_shadow_free() {
    let set = table().expect("exemplar audit must pass");
    assert_eq!(set.len(), 244);
    assert_eq!(set.version(), crate::rules::TABLE_VERSION);
}

#[test]
fn classification_examples() {
    // Array of (input, expected kind, expected amount).
    let cases: Vec<(&str, EffectKind, Option<i32>)> = vec![
        ("Heal 30 damage from this Pokémon.", EffectKind::Heal, Some(30)),
        ("Heal 50 damage from each of your Pokémon.", EffectKind::Heal, Some(50)),
        ("heal 50 damage from each of your Pokémon.", EffectKind::Heal, Some(50)),
        ("Draw a card.", EffectKind::Draw, Some(1)),
        ("This Pokémon also does 50 damage to itself.", EffectKind::RecoilDamage, Some(50)),
        ("Switch out your opponent’s Active Pokémon to the Bench.", EffectKind::ForceSwitch, None),
        ("This Pokémon is now Asleep.", EffectKind::ApplyStatus, None),
        ("Your opponent's Active Pokémon is now Paralyzed.", EffectKind::ApplyStatus, None),
        ("Put 2 random {W} Pokémon from your deck into your hand.", EffectKind::SearchDeck, Some(2)),
        (
            "If this Pokémon has at least 2 extra {L} Energy attached, this attack does 60 more damage.",
            EffectKind::ConditionalDamage,
            Some(60),
        ),
        ("Take a {R} Energy from your Energy Zone and attach it to this Pokémon.", EffectKind::AttachEnergy, None),
        ("Discard all Energy from this Pokémon.", EffectKind::DiscardEnergy, None),
        ("Discard 2 {R} Energy from this Pokémon.", EffectKind::DiscardEnergy, Some(2)),
        ("Flip a coin. If tails, this attack does nothing.", EffectKind::AttackMayFail, None),
        (
            "This attack does 20 more damage for each Energy in your opponent's Active Pokémon's Retreat Cost.",
            EffectKind::ScalingDamage,
            Some(20),
        ),
        ("Flip 3 coins. This attack does 30 damage for each heads.", EffectKind::ScalingDamage, Some(30)),
        ("Flip a coin until you get tails. This attack does 30 damage for each heads.", EffectKind::ScalingDamage, Some(30)),
        ("This attack does 40 damage to 1 of your opponent's Pokémon.", EffectKind::SnipeDamage, Some(40)),
        ("This attack also does 10 damage to 1 of your Benched Pokémon.", EffectKind::DamageBenchedFriendly, Some(10)),
        ("This attack also does 10 damage to each of your opponent's Benched Pokémon.", EffectKind::DamageBenchedOpponentAll, Some(10)),
        ("This attack does 20 damage to each of your opponent's Pokémon.", EffectKind::DamageAllOpponent, Some(20)),
        ("Switch this Pokémon with 1 of your Benched Pokémon.", EffectKind::SwitchSelf, None),
        ("Flip a coin. If heads, your opponent shuffles their Active Pokémon into their deck.", EffectKind::ShuffleIntoDeck, None),
        ("Choose 1 of your opponent's Active Pokémon's attacks and use it as this attack.", EffectKind::CopyAttack, None),
        ("Your opponent reveals their hand.", EffectKind::RevealHand, None),
        ("Discard the top 3 cards of each player's deck.", EffectKind::DiscardDeck, Some(3)),
        ("At the end of your opponent's next turn, do 80 damage to the Defending Pokémon.", EffectKind::DelayedDamage, Some(80)),
        ("Flip 2 coins. If both of them are heads, your opponent's Active Pokémon is Knocked Out.", EffectKind::Knockout, None),
        ("Halve your opponent's Active Pokémon's remaining HP, rounded down.", EffectKind::DamageHalveHp, None),
        ("Flip a coin. If heads, your opponent's Active Pokémon's remaining HP is now 10.", EffectKind::SetHp, Some(10)),
        ("During your next turn, this Pokémon can't attack.", EffectKind::RestrictionCantAttack, None),
        ("During your opponent's next turn, this Pokémon takes −30 damage from attacks.", EffectKind::ReduceIncomingDamage, Some(30)),
        ("During your opponent's next turn, this Pokémon takes -30 damage from attacks.", EffectKind::ReduceIncomingDamage, Some(30)),
        ("During your opponent's next turn, this Pokémon takes +20 damage from attacks.", EffectKind::DebuffIncomingDamage, Some(20)),
        ("During your next turn, this Pokémon's Thunder Spear attack does +60 damage.", EffectKind::BuffNextTurn, Some(60)),
        ("This Pokémon can't be affected by any Special Conditions.", EffectKind::PassiveAbility, None),
        ("If you have Latias in play, this Pokémon has no Retreat Cost.", EffectKind::PassiveAbility, None),
        (
            "During Pokémon Checkup, if this Pokémon is in the Active Spot, do 10 damage to your opponent's Active Pokémon.",
            EffectKind::PassiveDamage,
            Some(10),
        ),
        (
            "Heal from this Pokémon the same amount of damage you did to your opponent's Active Pokémon.",
            EffectKind::Lifesteal,
            None,
        ),
        (
            "As often as you like during your turn, you may choose 1 of your Pokémon that has damage on it, and move all of its damage to this Pokémon.",
            EffectKind::MoveDamage,
            None,
        ),
        (
            "If your opponent's Active Pokémon is an evolved Pokémon, devolve it by putting the highest Stage Evolution card on it into your opponent's hand.",
            EffectKind::Devolve,
            Some(1),
        ),
        ("Flip a coin. If heads, put your opponent's Active Pokémon into their hand.", EffectKind::ReturnToHand, None),
        ("Draw cards until you have the same number of cards in your hand as your opponent.", EffectKind::Draw, None),
        (
            "1 of your opponent's Pokémon is chosen at random 4 times. For each time a Pokémon was chosen, do 50 damage to it.",
            EffectKind::MultiHitRandomDamage,
            Some(50),
        ),
        (
            "Change the type of a random Energy attached to your opponent's Active Pokémon to 1 of the following at random: {G}, {R}.",
            EffectKind::ModifyEnergy,
            Some(1),
        ),
        ("This is not a real card effect.", EffectKind::Unknown, None),
        ("", EffectKind::Unknown, None),
    ];

    let set = table().unwrap();
    for (input, kind, amount) in cases {
        let effects = set.parse(input);
        assert!(!effects.is_empty(), "no effects for {input:?}");
        assert_eq!(effects[0].kind, kind, "kind mismatch for {input:?}");
        assert_eq!(effects[0].amount, amount, "amount mismatch for {input:?}");
    }
}

#[test]
fn cross_family_precedence_discard_then_snipe() {
    let set = table().unwrap();
    let text =
        "Discard all {L} Energy from this Pokémon. This attack does 120 damage to 1 of your opponent's Pokémon.";
    // The composite rule must win over both of its component phrasings.
    assert_eq!(set.deciding_rule(text), Some("snipe-discard-energy"));

    let effects = set.parse(text);
    assert_eq!(effects.len(), 2);
    assert_eq!(effects[0].kind, EffectKind::DiscardEnergy);
    assert_eq!(effects[0].target, Some(TargetKind::ThisPokemon));
    assert!(effects[0].conditions.contains(&Condition::All));
    assert_eq!(effects[1].kind, EffectKind::SnipeDamage);
    assert_eq!(effects[1].amount, Some(120));
    // Both component phrasings still classify on their own.
    assert_eq!(set.deciding_rule("Discard all {W} Energy from this Pokémon."), Some("discard-all-typed"));
    assert_eq!(
        set.deciding_rule("This attack does 40 damage to 1 of your opponent's Pokémon."),
        Some("snipe")
    );
}

#[test]
fn apostrophe_variants_reach_their_own_rules() {
    let set = table().unwrap();
    // Curly apostrophe: the canonical entry.
    assert_eq!(
        set.deciding_rule("Switch out your opponent’s Active Pokémon to the Bench."),
        Some("push-out")
    );
    // ASCII apostrophe plus the choosing note: the late variant.
    assert_eq!(
        set.deciding_rule(
            "Switch out your opponent's Active Pokémon to the Bench. (Your opponent chooses the new Active Pokémon.)"
        ),
        Some("push-out-with-note")
    );
    // Lowercase start: only the case-insensitive late entry matches.
    assert_eq!(
        set.deciding_rule("switch out your opponent’s Active Pokémon to the Bench."),
        Some("push-out-lenient")
    );
}

#[test]
fn benched_scaling_count_is_not_shadowed_by_the_name_capture() {
    let set = table().unwrap();
    let effects = set.parse("This attack does 10 more damage for each of your Benched Pokémon.");
    assert_eq!(effects[0].conditions, vec![Condition::scale_by(ScaleBasis::FriendlyBenchedCount)]);

    let effects = set.parse("This attack does 10 more damage for each of your Benched Pikachu.");
    assert_eq!(
        effects[0].conditions,
        vec![Condition::scale_by(ScaleBasis::BenchedNamed(vec!["Pikachu".into()]))]
    );
}

#[test]
fn unknown_round_trips_the_trimmed_input() {
    let set = table().unwrap();
    for input in ["This is not a real card effect.", "  padded noise  ", "\n\ttab noise\t\n", "%$#@!"] {
        let effects = set.parse(input);
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].kind, EffectKind::Unknown);
        assert_eq!(effects[0].description, input.trim());
        assert!(effects[0].target.is_none());
        assert!(effects[0].conditions.is_empty());
    }
}

#[test]
fn parsing_is_deterministic() {
    let set = table().unwrap();
    let inputs = [
        "Heal 30 damage from this Pokémon.",
        "Discard all {L} Energy from this Pokémon. This attack does 120 damage to 1 of your opponent's Pokémon.",
        "utter gibberish",
    ];
    for input in inputs {
        let first = serde_json::to_string(&set.parse(input)).unwrap();
        for _ in 0..100 {
            assert_eq!(serde_json::to_string(&set.parse(input)).unwrap(), first);
        }
    }
}
