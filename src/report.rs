//! Console reporting: the post-run summary and the unresolved-text sampler.

use rand::seq::SliceRandom;

use crate::card::EnrichedCard;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Print the processing summary: total cards, and how many carry at least
/// one unresolved effect.
pub fn print_summary(cards: &[EnrichedCard], color: bool) {
    let palette = ansi::Palette::new(color);
    let unresolved = cards.iter().filter(|card| card.has_unresolved()).count();

    println!("{}", palette.bold(palette.paint(format!("Processed {} cards.", cards.len()), ansi::CYAN)));
    if unresolved == 0 {
        println!("{}", palette.paint("Every effect classified.", ansi::GREEN));
    } else {
        println!(
            "{}",
            palette.paint(
                format!("⚠  Could not classify one or more effects on {unresolved} card(s)."),
                ansi::YELLOW
            )
        );
    }
}

/// Print up to `sample_size` randomly chosen cards that carry unresolved
/// effects, with each unresolved text. Reporting only; the selection is a
/// uniform shuffle and does not touch the persisted output.
pub fn print_sample(cards: &[EnrichedCard], sample_size: usize, color: bool) {
    if sample_size == 0 {
        return;
    }

    let palette = ansi::Palette::new(color);
    let mut unresolved: Vec<&EnrichedCard> = cards.iter().filter(|card| card.has_unresolved()).collect();
    if unresolved.is_empty() {
        return;
    }

    unresolved.shuffle(&mut rand::rng());
    let shown = sample_size.min(unresolved.len());
    println!("{}", palette.bold(format!("--- Sampling {shown} card(s) with unresolved effects ---")));

    for card in unresolved.iter().take(shown) {
        println!("{} {}", palette.bold(&card.card.name), palette.dim(format!("({})", card.card.id)));
        for effect in card.unresolved() {
            println!("  └─ {}: {}", palette.paint(&effect.name, ansi::YELLOW), effect.description);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Attack, Card};

    fn unresolved_card(id: &str) -> EnrichedCard {
        let card = Card {
            id: id.into(),
            name: format!("Card {id}"),
            attacks: vec![Attack { name: "Odd".into(), effect: Some("???".into()), ..Attack::default() }],
            ..Card::default()
        };
        crate::enrich::enrich_card(crate::api::rules(), &card)
    }

    // The printers write to stdout; these only assert they tolerate edge
    // inputs without panicking.
    #[test]
    fn printers_handle_empty_input() {
        print_summary(&[], false);
        print_sample(&[], 5, false);
    }

    #[test]
    fn sample_is_bounded_by_available_cards() {
        let cards = vec![unresolved_card("S-001"), unresolved_card("S-002")];
        print_sample(&cards, 10, false);
        print_sample(&cards, 0, false);
    }
}
