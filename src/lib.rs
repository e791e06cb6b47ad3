extern crate self as effectus;

#[macro_use]
mod macros;
mod api;
mod card;
mod condition;
mod effect;
mod engine;
mod enrich;
mod report;
mod rules;
mod store;

pub use api::{parse, parse_with, rules};
pub use card::{Ability, Attack, Card, EnrichedCard, Legal, SetSummary, Variants, Weakness};
pub use condition::{
    Condition, DurationKind, EnergyKind, FlipOutcome, PassiveEffect, PlayerScope, Restriction,
    ScaleBasis, SearchFilter, SpotKind, TargetFilter, Trigger, Zone,
};
pub use effect::{Effect, EffectKind, StatusCondition, TargetKind};
pub use engine::{RegistryError, RuleSet, RuleSetBuilder};
pub use enrich::{enrich_card, enrich_cards};
pub use report::{print_sample, print_summary};
pub use rules::outcome::{AmountSpec, Caps, CondSpec, EffectTemplate, ExtractFn, Outcome, RuleDef, StatusSpec};
pub use rules::{TABLE_VERSION, table};
pub use store::{StoreError, load_cards, save_enriched};
