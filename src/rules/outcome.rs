//! Declarative rule definitions.
//!
//! A rule is data: a stable id, a compiled pattern, literal phrases used to
//! gate activation cheaply, an exemplar input it must win, and an outcome.
//! Most outcomes are effect templates — the fixed parts of the effect plus
//! capture references for the variable parts — so the table reads as data
//! and reorders safely. Phrasings the template language cannot express fall
//! back to a plain extraction fn with the same contract.

use regex::{Captures, Regex};

use crate::condition::{Condition, EnergyKind};
use crate::effect::{Effect, EffectKind, StatusCondition, TargetKind};
use crate::rules::helpers;

/// Typed accessors over a pattern's capture groups.
///
/// Every accessor returns `None` on a missing or malformed capture; outcome
/// application treats that as "this match is unusable" and the dispatcher
/// degrades the input to UNKNOWN.
pub struct Caps<'a>(&'a Captures<'a>);

impl<'a> Caps<'a> {
    pub fn new(caps: &'a Captures<'a>) -> Self {
        Caps(caps)
    }

    pub fn text(&self, group: usize) -> Option<&'a str> {
        self.0.get(group).map(|m| m.as_str())
    }

    pub fn string(&self, group: usize) -> Option<String> {
        self.text(group).map(str::to_string)
    }

    pub fn int(&self, group: usize) -> Option<i32> {
        self.text(group)?.parse().ok()
    }

    pub fn uint(&self, group: usize) -> Option<u32> {
        self.text(group)?.parse().ok()
    }

    /// A single energy placeholder letter (the capture inside `{X}`).
    pub fn energy(&self, group: usize) -> Option<EnergyKind> {
        EnergyKind::from_letter(self.text(group)?)
    }

    pub fn status(&self, group: usize) -> Option<StatusCondition> {
        StatusCondition::from_word(self.text(group)?)
    }

    /// Statuses listed with "and"/commas ("Poisoned and Burned").
    pub fn statuses(&self, group: usize) -> Option<Vec<StatusCondition>> {
        helpers::parse_status_list(self.text(group)?)
    }

    /// Names joined with " or " ("Wishiwashi or Wishiwashi ex").
    pub fn names_or(&self, group: usize) -> Option<Vec<String>> {
        Some(helpers::split_list(self.text(group)?, " or "))
    }

    /// Names joined with " and ".
    pub fn names_and(&self, group: usize) -> Option<Vec<String>> {
        Some(helpers::split_list(self.text(group)?, " and "))
    }

    /// Every `{X}` placeholder in the captured text, in order.
    pub fn energies(&self, group: usize) -> Option<Vec<EnergyKind>> {
        let found = helpers::energies_in(self.text(group)?);
        if found.is_empty() { None } else { Some(found) }
    }
}

/// Where an effect's magnitude comes from.
#[derive(Debug, Clone, Copy)]
pub enum AmountSpec {
    None,
    Fixed(i32),
    Cap(usize),
}

/// Where an effect's status comes from.
#[derive(Debug, Clone, Copy)]
pub enum StatusSpec {
    None,
    Fixed(StatusCondition),
    Cap(usize),
}

/// A condition known up front, or one assembled from captures.
pub enum CondSpec {
    Fixed(Condition),
    From(fn(&Caps) -> Option<Condition>),
}

/// The fixed shape of one emitted effect plus capture references for its
/// variable parts.
pub struct EffectTemplate {
    kind: EffectKind,
    target: Option<TargetKind>,
    status: StatusSpec,
    amount: AmountSpec,
    conditions: Vec<CondSpec>,
}

impl EffectTemplate {
    pub fn new(kind: EffectKind) -> Self {
        EffectTemplate {
            kind,
            target: None,
            status: StatusSpec::None,
            amount: AmountSpec::None,
            conditions: Vec::new(),
        }
    }

    pub fn target(mut self, target: TargetKind) -> Self {
        self.target = Some(target);
        self
    }

    pub fn status(mut self, status: StatusCondition) -> Self {
        self.status = StatusSpec::Fixed(status);
        self
    }

    /// Status parsed from the given capture group.
    pub fn status_from(mut self, group: usize) -> Self {
        self.status = StatusSpec::Cap(group);
        self
    }

    pub fn amount(mut self, amount: i32) -> Self {
        self.amount = AmountSpec::Fixed(amount);
        self
    }

    /// Amount parsed from the given capture group.
    pub fn amount_from(mut self, group: usize) -> Self {
        self.amount = AmountSpec::Cap(group);
        self
    }

    pub fn cond(mut self, condition: Condition) -> Self {
        self.conditions.push(CondSpec::Fixed(condition));
        self
    }

    /// Condition assembled from captures at match time.
    pub fn cond_from(mut self, build: fn(&Caps) -> Option<Condition>) -> Self {
        self.conditions.push(CondSpec::From(build));
        self
    }

    /// Build the effect, or `None` if any referenced capture is unusable.
    fn instantiate(&self, caps: &Caps, text: &str) -> Option<Effect> {
        let mut effect = Effect::new(self.kind, text);
        effect.target = self.target;

        effect.status = match self.status {
            StatusSpec::None => None,
            StatusSpec::Fixed(status) => Some(status),
            StatusSpec::Cap(group) => Some(caps.status(group)?),
        };

        effect.amount = match self.amount {
            AmountSpec::None => None,
            AmountSpec::Fixed(amount) => Some(amount),
            AmountSpec::Cap(group) => Some(caps.int(group)?),
        };

        for spec in &self.conditions {
            let condition = match spec {
                CondSpec::Fixed(condition) => condition.clone(),
                CondSpec::From(build) => build(caps)?,
            };
            effect.conditions.push(condition);
        }

        Some(effect)
    }
}

/// Extraction fn for rules the template language cannot express.
pub type ExtractFn = fn(&Caps, &str) -> Option<Vec<Effect>>;

/// What a matched rule produces.
pub enum Outcome {
    /// One effect per template, in listed order.
    Emit(Vec<EffectTemplate>),
    /// Bespoke extraction.
    With(ExtractFn),
}

/// One entry of the rule table.
pub struct RuleDef {
    /// Stable identifier; the registry rejects duplicates.
    pub id: &'static str,
    pub pattern: &'static Regex,
    /// Literal fragments that must appear in the input before the pattern is
    /// tried. Purely an activation shortcut: each phrase must be a verbatim
    /// substring of every text the pattern can match.
    pub phrases: &'static [&'static str],
    /// A text this rule must win. Feeds the registry's shadowing audit and
    /// the table-driven tests.
    pub exemplar: &'static str,
    pub outcome: Outcome,
}

impl RuleDef {
    pub fn emit(
        id: &'static str,
        pattern: &'static Regex,
        exemplar: &'static str,
        templates: impl IntoIterator<Item = EffectTemplate>,
    ) -> Self {
        RuleDef {
            id,
            pattern,
            phrases: &[],
            exemplar,
            outcome: Outcome::Emit(templates.into_iter().collect()),
        }
    }

    pub fn with(
        id: &'static str,
        pattern: &'static Regex,
        exemplar: &'static str,
        extract: ExtractFn,
    ) -> Self {
        RuleDef { id, pattern, phrases: &[], exemplar, outcome: Outcome::With(extract) }
    }

    pub fn phrases(mut self, phrases: &'static [&'static str]) -> Self {
        self.phrases = phrases;
        self
    }

    /// Cheap activation gate, checked before the pattern.
    pub fn is_active(&self, text: &str) -> bool {
        self.phrases.iter().all(|phrase| text.contains(phrase))
    }

    /// Run the outcome against a successful match.
    pub fn apply(&self, caps: &Caps, text: &str) -> Option<Vec<Effect>> {
        match &self.outcome {
            Outcome::Emit(templates) => {
                let mut effects = Vec::with_capacity(templates.len());
                for template in templates {
                    effects.push(template.instantiate(caps, text)?);
                }
                Some(effects)
            }
            Outcome::With(extract) => extract(caps, text),
        }
    }
}

impl std::fmt::Debug for RuleDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleDef")
            .field("id", &self.id)
            .field("pattern", &self.pattern.as_str())
            .field("exemplar", &self.exemplar)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Trigger;

    fn apply(rule: &RuleDef, text: &str) -> Option<Vec<Effect>> {
        let caps = rule.pattern.captures(text)?;
        rule.apply(&Caps::new(&caps), text)
    }

    #[test]
    fn template_fills_amount_from_capture() {
        let rule = RuleDef::emit(
            "test-heal",
            regex!(r"Heal (\d+) damage"),
            "Heal 30 damage",
            [EffectTemplate::new(EffectKind::Heal).target(TargetKind::ThisPokemon).amount_from(1)],
        );
        let effects = apply(&rule, "Heal 30 damage").unwrap();
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].amount, Some(30));
        assert_eq!(effects[0].target, Some(TargetKind::ThisPokemon));
        assert_eq!(effects[0].description, "Heal 30 damage");
    }

    #[test]
    fn unparseable_capture_aborts_the_outcome() {
        let rule = RuleDef::emit(
            "test-overflow",
            regex!(r"Heal (\d+) damage"),
            "Heal 30 damage",
            [EffectTemplate::new(EffectKind::Heal).amount_from(1)],
        );
        // 12 digits overflows i32; the outcome must fail, not wrap.
        assert_eq!(apply(&rule, "Heal 999999999999 damage"), None);
    }

    #[test]
    fn condition_builders_see_the_captures() {
        let rule = RuleDef::emit(
            "test-cond",
            regex!(r"takes (\d+) from \{([A-Z])\}"),
            "takes 20 from {R}",
            [EffectTemplate::new(EffectKind::ConditionalDamage)
                .amount_from(1)
                .cond(Condition::trigger(Trigger::OncePerTurn))
                .cond_from(|c| Some(Condition::energy([c.energy(2)?])))],
        );
        let effects = apply(&rule, "takes 20 from {R}").unwrap();
        assert_eq!(effects[0].conditions.len(), 2);
        assert_eq!(effects[0].conditions[1], Condition::energy([EnergyKind::Fire]));

        // Unknown energy letter: the whole match is unusable.
        assert_eq!(apply(&rule, "takes 20 from {Z}"), None);
    }

    #[test]
    fn phrase_gate_requires_every_phrase() {
        let rule = RuleDef::emit(
            "test-gate",
            regex!(r"Flip a coin"),
            "Flip a coin",
            [EffectTemplate::new(EffectKind::AttackMayFail)],
        )
        .phrases(&["Flip", "coin"]);
        assert!(rule.is_active("Flip a coin."));
        assert!(!rule.is_active("flip a penny."));
    }
}
