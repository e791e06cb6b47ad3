//! The rule table.
//!
//! One module per effect family, each exposing `get() -> Vec<RuleDef>`.
//! `table()` concatenates the families into the one ordered table the
//! dispatcher walks. Order is behavior: within a family, rules run in
//! declaration order; across families, the concatenation order below is
//! load-bearing (composites that embed another family's phrasing must come
//! before that family — e.g. the discard-then-snipe rule in `damage` must
//! precede the plain typed-discard in `energy`). The lenient case-variant
//! rules always come last.
//!
//! Every rule carries an exemplar; `RuleSetBuilder::build` refuses the table
//! if any exemplar is claimed by an earlier rule, so appending an entry
//! cannot silently shadow existing behavior.

pub mod outcome;

mod helpers;

mod cards;
mod conditional;
mod damage;
mod energy;
mod healing;
mod lenient;
mod passive;
mod restriction;
mod scaling;
mod status;
mod switching;

use crate::engine::{RegistryError, RuleSet};

/// Bumped whenever rules are added for a new card release.
pub const TABLE_VERSION: u32 = 3;

/// Build and audit the full table.
pub fn table() -> Result<RuleSet, RegistryError> {
    let mut builder = RuleSet::builder(TABLE_VERSION);

    let families = [
        healing::get(),
        status::get(),
        damage::get(),
        conditional::get(),
        scaling::get(),
        energy::get(),
        switching::get(),
        cards::get(),
        restriction::get(),
        passive::get(),
        lenient::get(),
    ];

    for family in families {
        for rule in family {
            builder.register(rule)?;
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests;
