//! Dispatch and rule registration.
//!
//! Parsing an input is deliberately simple:
//!
//! ```text
//! rules (all) ──► RuleSetBuilder::register  (duplicate-id rejection)
//!                        │
//!                        ▼
//!                 RuleSetBuilder::build     (exemplar shadowing audit)
//!                        │
//!                        ▼
//! input ──trim──► RuleSet::parse
//!                   - phrase-gated, ordered scan
//!                   - first matching pattern wins
//!                   - usable outcome → effects, else → UNKNOWN
//! ```
//!
//! Order is semantically load-bearing: the table is authored
//! most-specific-first, and the first rule whose pattern matches determines
//! the result exclusively. A matching rule whose outcome rejects its own
//! captures does NOT fall through to later rules — the input degrades
//! straight to UNKNOWN. Every rule therefore carries an exemplar, and
//! `build` refuses a table in which any rule's exemplar would be claimed by
//! an earlier rule. That audit is what makes the table appendable: a new
//! entry cannot silently shadow existing behavior.

use std::collections::HashSet;

use thiserror::Error;

use crate::effect::Effect;
use crate::rules::outcome::{Caps, RuleDef};

/// Rejected rule registrations.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate rule id '{0}'")]
    DuplicateId(&'static str),
    #[error("rule '{rule}' is shadowed by '{by}' (its exemplar no longer reaches it)")]
    Shadowed { rule: &'static str, by: &'static str },
    #[error("rule '{rule}' does not match its own exemplar")]
    ExemplarUnmatched { rule: &'static str },
}

/// An ordered, audited rule table.
pub struct RuleSet {
    rules: Vec<RuleDef>,
    version: u32,
}

impl RuleSet {
    pub fn builder(version: u32) -> RuleSetBuilder {
        RuleSetBuilder { rules: Vec::new(), ids: HashSet::new(), version }
    }

    /// Table version, bumped whenever entries are added.
    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuleDef> {
        self.rules.iter()
    }

    /// Convert one effect text into structured effects.
    ///
    /// Total: every input, however malformed, yields at least one record.
    /// The only normalization is whitespace trimming — casing and
    /// punctuation in the source text are significant to the patterns.
    pub fn parse(&self, text: &str) -> Vec<Effect> {
        let text = text.trim();

        for rule in &self.rules {
            if !rule.is_active(text) {
                continue;
            }
            let Some(caps) = rule.pattern.captures(text) else {
                continue;
            };
            // First match wins. An unusable outcome (malformed numeric
            // capture) means UNKNOWN, not a retry with later rules.
            return match rule.apply(&Caps::new(&caps), text) {
                Some(effects) if !effects.is_empty() => effects,
                _ => vec![Effect::unknown(text)],
            };
        }

        vec![Effect::unknown(text)]
    }

    /// Id of the rule that would decide `text`, if any. Used by the audit
    /// and by precedence tests.
    pub fn deciding_rule(&self, text: &str) -> Option<&'static str> {
        let text = text.trim();
        self.rules
            .iter()
            .find(|rule| rule.is_active(text) && rule.pattern.is_match(text))
            .map(|rule| rule.id)
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("version", &self.version)
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// Collects rules in order, then audits the assembled table.
pub struct RuleSetBuilder {
    rules: Vec<RuleDef>,
    ids: HashSet<&'static str>,
    version: u32,
}

impl RuleSetBuilder {
    /// Append a rule. Later rules only see inputs no earlier rule matched.
    pub fn register(&mut self, rule: RuleDef) -> Result<(), RegistryError> {
        if !self.ids.insert(rule.id) {
            return Err(RegistryError::DuplicateId(rule.id));
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Audit and seal the table.
    ///
    /// For every rule, its exemplar must (a) match the rule's own pattern
    /// and (b) be decided by that rule under first-match dispatch.
    pub fn build(self) -> Result<RuleSet, RegistryError> {
        let set = RuleSet { rules: self.rules, version: self.version };

        for rule in &set.rules {
            let exemplar = rule.exemplar.trim();
            if !rule.is_active(exemplar) || !rule.pattern.is_match(exemplar) {
                return Err(RegistryError::ExemplarUnmatched { rule: rule.id });
            }
            match set.deciding_rule(exemplar) {
                Some(winner) if winner == rule.id => {}
                Some(winner) => {
                    return Err(RegistryError::Shadowed { rule: rule.id, by: winner });
                }
                None => return Err(RegistryError::ExemplarUnmatched { rule: rule.id }),
            }
        }

        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{EffectKind, TargetKind};
    use crate::rules::outcome::EffectTemplate;

    fn heal_rule() -> RuleDef {
        RuleDef::emit(
            "heal-self",
            regex!(r"Heal (\d+) damage from this Pokémon\."),
            "Heal 30 damage from this Pokémon.",
            [EffectTemplate::new(EffectKind::Heal).target(TargetKind::ThisPokemon).amount_from(1)],
        )
    }

    fn heal_generic_rule() -> RuleDef {
        RuleDef::emit(
            "heal-anything",
            regex!(r"Heal (\d+) damage"),
            "Heal 10 damage somewhere else.",
            [EffectTemplate::new(EffectKind::Heal).amount_from(1)],
        )
    }

    fn build(rules: impl IntoIterator<Item = RuleDef>) -> Result<RuleSet, RegistryError> {
        let mut builder = RuleSet::builder(1);
        for rule in rules {
            builder.register(rule)?;
        }
        builder.build()
    }

    #[test]
    fn first_match_wins() {
        let set = build([heal_rule(), heal_generic_rule()]).unwrap();
        let effects = set.parse("Heal 30 damage from this Pokémon.");
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].target, Some(TargetKind::ThisPokemon));
        assert_eq!(set.deciding_rule("Heal 30 damage from this Pokémon."), Some("heal-self"));
        assert_eq!(set.deciding_rule("Heal 10 damage somewhere else."), Some("heal-anything"));
    }

    #[test]
    fn no_match_degrades_to_unknown_with_trimmed_text() {
        let set = build([heal_rule()]).unwrap();
        let effects = set.parse("  This is not a real card effect.  ");
        assert_eq!(effects.len(), 1);
        assert!(effects[0].is_unknown());
        assert_eq!(effects[0].description, "This is not a real card effect.");
    }

    #[test]
    fn handler_failure_degrades_to_unknown() {
        // The generic rule matches but its amount capture overflows; the
        // dispatcher must not retry later rules.
        let fallback = RuleDef::emit(
            "heal-fallback",
            regex!(r"Heal \d+ damage"),
            "Heal 99999999999 damage",
            [EffectTemplate::new(EffectKind::Heal)],
        );
        // The audit would rightly flag this table (the fallback's exemplar is
        // decided by heal-anything), so assemble it by hand.
        let set = RuleSet { rules: vec![heal_generic_rule(), fallback], version: 0 };
        let effects = set.parse("Heal 99999999999 damage");
        assert_eq!(effects.len(), 1);
        assert!(effects[0].is_unknown());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = build([heal_rule(), heal_rule()]).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateId("heal-self")));
    }

    #[test]
    fn shadowed_rules_are_rejected() {
        // Generic first: the specific rule's exemplar is claimed by it.
        let err = build([heal_generic_rule(), heal_rule()]).unwrap_err();
        match err {
            RegistryError::Shadowed { rule, by } => {
                assert_eq!(rule, "heal-self");
                assert_eq!(by, "heal-anything");
            }
            other => panic!("expected Shadowed, got {other:?}"),
        }
    }

    #[test]
    fn exemplar_must_match_its_own_rule() {
        let broken = RuleDef::emit(
            "broken",
            regex!(r"Draw a card\."),
            "Heal 30 damage from this Pokémon.",
            [EffectTemplate::new(EffectKind::Draw).amount(1)],
        );
        let err = build([broken]).unwrap_err();
        assert!(matches!(err, RegistryError::ExemplarUnmatched { rule: "broken" }));
    }
}
