use once_cell::sync::Lazy;

use crate::effect::Effect;
use crate::engine::RuleSet;

static DEFAULT_RULES: Lazy<RuleSet> =
    Lazy::new(|| crate::rules::table().expect("the default rule table is audited by tests"));

/// Parse one effect text with the default rule table.
///
/// Total and deterministic: every input yields at least one effect record,
/// and identical inputs yield identical output.
///
/// # Example
/// ```
/// use effectus::{parse, EffectKind};
///
/// let effects = parse("Heal 30 damage from this Pokémon.");
/// assert_eq!(effects[0].kind, EffectKind::Heal);
/// assert_eq!(effects[0].amount, Some(30));
/// ```
pub fn parse(text: &str) -> Vec<Effect> {
    DEFAULT_RULES.parse(text)
}

/// Parse with an explicit rule set.
///
/// Use this when testing a table variant or pinning a table version.
pub fn parse_with(rules: &RuleSet, text: &str) -> Vec<Effect> {
    rules.parse(text)
}

/// The default, audited rule table.
pub fn rules() -> &'static RuleSet {
    &DEFAULT_RULES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{EffectKind, TargetKind};

    #[test]
    fn default_table_is_available_and_audited() {
        assert!(!rules().is_empty());
    }

    #[test]
    fn parse_heal_scenario() {
        let effects = parse("Heal 30 damage from this Pokémon.");
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].kind, EffectKind::Heal);
        assert_eq!(effects[0].target, Some(TargetKind::ThisPokemon));
        assert_eq!(effects[0].amount, Some(30));
    }

    #[test]
    fn parse_draw_scenario() {
        let effects = parse("Draw a card.");
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].kind, EffectKind::Draw);
        assert_eq!(effects[0].amount, Some(1));
        assert_eq!(effects[0].target, None);
    }

    #[test]
    fn parse_force_switch_scenario() {
        let effects = parse("Switch out your opponent’s Active Pokémon to the Bench.");
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].kind, EffectKind::ForceSwitch);
        assert_eq!(effects[0].target, Some(TargetKind::OpponentActive));
    }

    #[test]
    fn parse_unknown_scenario() {
        let effects = parse("This is not a real card effect.");
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].kind, EffectKind::Unknown);
        assert_eq!(effects[0].description, "This is not a real card effect.");
    }

    #[test]
    fn parse_with_uses_the_given_table() {
        let set = crate::rules::table().unwrap();
        let effects = parse_with(&set, "Draw a card.");
        assert_eq!(effects[0].kind, EffectKind::Draw);
    }
}
