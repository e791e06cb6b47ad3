//! Qualifier conditions attached to effects.
//!
//! A condition narrows when or how an effect applies: trigger timing,
//! coin-flip outcomes, scaling bases, deck-search parameters, durations and
//! so on. The whole vocabulary lives in one closed tagged union so that
//! consumers can match exhaustively instead of probing untyped keys.

use serde::{Deserialize, Serialize};

use crate::effect::StatusCondition;

/// Energy types, as they appear in card text placeholders (`{G}`, `{R}`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnergyKind {
    Grass,
    Fire,
    Water,
    Lightning,
    Psychic,
    Fighting,
    Darkness,
    Metal,
    Colorless,
}

impl EnergyKind {
    /// Map a placeholder letter to its energy type.
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "G" => Some(Self::Grass),
            "R" => Some(Self::Fire),
            "W" => Some(Self::Water),
            "L" => Some(Self::Lightning),
            "P" => Some(Self::Psychic),
            "F" => Some(Self::Fighting),
            "D" => Some(Self::Darkness),
            "M" => Some(Self::Metal),
            "C" => Some(Self::Colorless),
            _ => None,
        }
    }
}

/// Game zones cards and energy move between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Zone {
    Hand,
    Deck,
    Bench,
    Active,
    DiscardPile,
    EnergyZone,
}

/// Where the owning Pokémon must be for an ability to be usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpotKind {
    Active,
    Bench,
}

/// Which player's side an effect touches, when the category leaves it open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerScope {
    #[serde(rename = "SELF")]
    Own,
    Opponent,
    Both,
    Either,
}

/// Required coin-flip outcome gating an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlipOutcome {
    Heads,
    Tails,
    DoubleHeads,
}

/// How long an applied effect lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DurationKind {
    NextTurn,
    OpponentNextTurn,
    FirstTurn,
    WhileActive,
    Persistent,
}

/// Game events and game-state tests that gate an effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trigger {
    OncePerTurn,
    AsOftenAsYouLike,
    OnEvolve,
    OnPlayToBench,
    EndOfTurn,
    EndOfFirstTurn,
    EndOfOpponentNextTurn,
    PokemonCheckup,
    EvolvedThisTurn,
    SwitchedInThisTurn,
    PlayedSupporterThisTurn,
    AttachEnergySelf,
    OpponentHpGreater,
    OpponentHasDamage,
    OpponentHasTool,
    OpponentHasAbility,
    OpponentHasSpecialCondition,
    OpponentHasStatus(StatusCondition),
    OpponentIsStage(String),
    OpponentIsNamed(String),
    OpponentIsEx,
    OpponentIsProperty(String),
    OpponentIsEvolved,
    OpponentKnockedOut,
    SelfHasTool,
    SelfHasDamage,
    SelfHasNoDamage,
    SelfHasEnergy,
    SelfHasEnergyOfType(EnergyKind),
    DifferentEnergyTypes(u32),
    FriendlyKnockedOutLastTurn,
    DamagedLastTurn,
    AttackUsedLastTurn(String),
    BenchedNamed(String),
    AnyBenchedFriendlyHasDamage,
    DiscardedCardIsType(EnergyKind),
}

/// Game quantities an effect magnitude can repeat per unit of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScaleBasis {
    OpponentRetreatCost,
    SelfDamage,
    SelfAttachedEnergy,
    SelfAttachedEnergyOfType(EnergyKind),
    OpponentAttachedEnergy,
    TargetAttachedEnergy,
    AllOpponentAttachedEnergy,
    FriendlyBenchedCount,
    OpponentBenchedCount,
    AllBenchedCount,
    BenchedOfType(EnergyKind),
    BenchedEvolutionCount,
    BenchedNamed(Vec<String>),
    PokemonInPlay,
    HeadsFlipped,
    HeadsUntilTails,
    AttackUseCount(String),
    OpponentHandSize,
    DiscardedBenchedCount,
    DiscardedToolCount,
}

/// What a deck search is allowed to pull.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchFilter {
    Any,
    PokemonOfType(EnergyKind),
    EvolvesFrom(String),
    Named(Vec<String>),
    CardType(String),
}

/// Narrows which Pokémon may be picked as the effect target (or source).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetFilter {
    HasDamage,
    HasEnergy,
    Stage(String),
    OfType(EnergyKind),
    Named(Vec<String>),
    EvolvesFrom(String),
    Subtype(String),
}

/// Play restrictions an effect can impose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum Restriction {
    CantAttack,
    CantRetreat,
    CantUseAttack(String),
    CantPlayCardType(String),
    CantAttachEnergy,
    AttackMayFail,
    IncreaseAttackCost { amount: u32, energy: EnergyKind },
    IncreaseRetreatCost { amount: u32, energy: EnergyKind },
}

/// Payloads of PASSIVE_ABILITY effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum PassiveEffect {
    ZeroRetreatCost,
    ReduceRetreatCost { amount: u32 },
    ReduceIncomingDamage { amount: u32 },
    PreventIncomingDamage,
    PreventIncomingEffects,
    PreventKnockout { remaining_hp: u32 },
    PreventHealing,
    ImmuneToSpecialConditions,
    ImmuneToStatus(StatusCondition),
    ReduceOpponentDamage { amount: u32 },
    BuffDamage { amount: u32 },
    BuffStatusDamage { amount: u32, status: StatusCondition },
    ReduceAttackCost { amount: u32, energy: EnergyKind },
    IncreaseOpponentAttackCost { amount: u32, energy: EnergyKind },
    AlternateAttackCost { amount: u32, energy: EnergyKind },
    ReactiveDamage { amount: u32 },
    ReactiveDamageOnKnockout { amount: u32 },
    KnockoutAttackerOnKnockout,
    MoveEnergyOnKnockout { energy: EnergyKind },
    EnergyValueDoubled { energy: EnergyKind, pokemon_type: EnergyKind },
    EvolveOnEnergyAttach,
    EvolveIntoAny,
    RestrictHandPlay { card_type: String },
    RestrictEvolve,
    ApplyPreventionOnKnockout,
}

/// One qualifier narrowing when or how an effect applies.
///
/// The source data expresses these in free prose; the engine resolves them
/// into exactly one of the kinds below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Condition {
    /// Event or game-state test that must hold for the effect to fire.
    Trigger { trigger: Trigger },
    /// How long the applied effect persists.
    Duration { duration: DurationKind },
    /// Required outcome of a coin flip.
    CoinFlip { outcome: FlipOutcome },
    /// Fixed number of coins flipped.
    FlipCount { flips: u32 },
    /// The number of coins flipped is itself a game quantity.
    FlipPer { per: ScaleBasis },
    /// The effect magnitude repeats per unit of a game quantity.
    ScaleBy { basis: ScaleBasis },
    /// Deck-search parameters.
    Search {
        destination: Zone,
        random: bool,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        filter: Option<SearchFilter>,
    },
    /// Extra energy required beyond the attack cost.
    EnergyThreshold { count: u32, energy: EnergyKind },
    /// Energy type(s) the effect operates on.
    Energy { types: Vec<EnergyKind> },
    /// Zone the energy is taken from.
    EnergySource { source: Zone },
    /// Zone the cards or energy end up in.
    Destination { zone: Zone },
    /// Play restriction imposed on the target.
    Restriction { restriction: Restriction },
    /// Payload of a PASSIVE_ABILITY effect.
    Passive { effect: PassiveEffect },
    /// Named Pokémon that must be in play.
    RequiresInPlay { names: Vec<String> },
    /// Narrows which Pokémon may be picked as the target.
    TargetFilter { filter: TargetFilter },
    /// Narrows which Pokémon the effect may draw from.
    SourceFilter { filter: TargetFilter },
    /// Where the owning Pokémon must be.
    Spot { spot: SpotKind },
    /// Whose side the effect touches, when not implied by the category.
    Player { player: PlayerScope },
    /// Attack referenced by name (buffs, bans, usage history).
    AttackName { name: String },
    /// Card classification the effect applies to ("Item", "Pokémon Tool", ...).
    CardType { card_type: String },
    /// What an applied prevention blocks.
    Prevents { damage: bool, effects: bool },
    /// Statuses drawn from a pool rather than fixed on the effect.
    StatusPool { statuses: Vec<StatusCondition> },
    /// Maximum number of cards the player may pay into the effect.
    UpTo { limit: u32 },
    /// A discard-from-hand cost paid to use the effect.
    HandCost { discard: u32 },
    /// Number of random hits dealt.
    Hits { count: u32 },
    /// Selection is random.
    Random,
    /// The effect touches "all" of something rather than a counted amount.
    All,
    /// Using the effect ends the player's turn.
    EndsTurn,
    /// Draw continues until both hands hold the same number of cards.
    UntilHandMatchesOpponent,
    /// The player chooses the targets or whether to apply the effect at all.
    PlayerChoice,
    /// The affected card is revealed to both players.
    Revealed,
    /// Repeated applications accumulate.
    Stacks,
    /// The amount is the attack's base damage, not a bonus on top of it.
    BaseDamage,
}

impl Condition {
    /// Shorthand for the most common qualifier.
    pub fn trigger(trigger: Trigger) -> Self {
        Condition::Trigger { trigger }
    }

    pub fn scale_by(basis: ScaleBasis) -> Self {
        Condition::ScaleBy { basis }
    }

    pub fn duration(duration: DurationKind) -> Self {
        Condition::Duration { duration }
    }

    pub fn coin_flip(outcome: FlipOutcome) -> Self {
        Condition::CoinFlip { outcome }
    }

    pub fn energy(types: impl IntoIterator<Item = EnergyKind>) -> Self {
        Condition::Energy { types: types.into_iter().collect() }
    }

    pub fn restriction(restriction: Restriction) -> Self {
        Condition::Restriction { restriction }
    }

    pub fn passive(effect: PassiveEffect) -> Self {
        Condition::Passive { effect }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_letters_cover_all_types() {
        for (letter, kind) in [
            ("G", EnergyKind::Grass),
            ("R", EnergyKind::Fire),
            ("W", EnergyKind::Water),
            ("L", EnergyKind::Lightning),
            ("P", EnergyKind::Psychic),
            ("F", EnergyKind::Fighting),
            ("D", EnergyKind::Darkness),
            ("M", EnergyKind::Metal),
            ("C", EnergyKind::Colorless),
        ] {
            assert_eq!(EnergyKind::from_letter(letter), Some(kind));
        }
        assert_eq!(EnergyKind::from_letter("X"), None);
        assert_eq!(EnergyKind::from_letter(""), None);
    }

    #[test]
    fn conditions_serialize_with_a_kind_tag() {
        let cond = Condition::trigger(Trigger::OncePerTurn);
        assert_eq!(
            serde_json::to_value(&cond).unwrap(),
            serde_json::json!({"kind": "trigger", "trigger": "ONCE_PER_TURN"})
        );

        let cond = Condition::Search { destination: Zone::Hand, random: true, filter: None };
        assert_eq!(
            serde_json::to_value(&cond).unwrap(),
            serde_json::json!({"kind": "search", "destination": "HAND", "random": true})
        );

        let cond = Condition::scale_by(ScaleBasis::SelfAttachedEnergyOfType(EnergyKind::Water));
        assert_eq!(
            serde_json::to_value(&cond).unwrap(),
            serde_json::json!({"kind": "scaleBy", "basis": {"SELF_ATTACHED_ENERGY_OF_TYPE": "WATER"}})
        );
    }

    #[test]
    fn conditions_round_trip_through_json() {
        let conds = vec![
            Condition::trigger(Trigger::OpponentHasStatus(StatusCondition::Burned)),
            Condition::restriction(Restriction::IncreaseAttackCost { amount: 1, energy: EnergyKind::Colorless }),
            Condition::passive(PassiveEffect::PreventKnockout { remaining_hp: 10 }),
            Condition::RequiresInPlay { names: vec!["Latias".into(), "Latios".into()] },
            Condition::All,
        ];
        let json = serde_json::to_string(&conds).unwrap();
        let back: Vec<Condition> = serde_json::from_str(&json).unwrap();
        assert_eq!(conds, back);
    }
}
