//! Small text utilities shared by rule outcomes.

use crate::condition::EnergyKind;
use crate::effect::StatusCondition;

/// Split on a literal separator, trimming each part and dropping empties.
pub fn split_list(text: &str, separator: &str) -> Vec<String> {
    text.split(separator)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a prose status list: "Poisoned", "Poisoned and Burned",
/// "Asleep, Burned, Confused, Paralyzed, and Poisoned".
///
/// Returns `None` when any listed word is not a known status, so a pattern
/// with an over-broad capture degrades to UNKNOWN instead of inventing data.
pub fn parse_status_list(text: &str) -> Option<Vec<StatusCondition>> {
    let normalized = text.replace(", and ", ", ").replace(" and ", ", ");
    let mut statuses = Vec::new();
    for word in normalized.split(", ") {
        statuses.push(StatusCondition::from_word(word)?);
    }
    if statuses.is_empty() { None } else { Some(statuses) }
}

/// Every `{X}` energy placeholder in `text`, in order of appearance.
pub fn energies_in(text: &str) -> Vec<EnergyKind> {
    let placeholder = regex!(r"\{([A-Z])\}");
    placeholder
        .captures_iter(text)
        .filter_map(|caps| EnergyKind::from_letter(caps.get(1).map_or("", |m| m.as_str())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_or_lists() {
        assert_eq!(split_list("Wishiwashi or Wishiwashi ex", " or "), vec!["Wishiwashi", "Wishiwashi ex"]);
        assert_eq!(split_list("Arceus", " or "), vec!["Arceus"]);
    }

    #[test]
    fn parses_single_and_compound_status_lists() {
        assert_eq!(parse_status_list("Poisoned"), Some(vec![StatusCondition::Poisoned]));
        assert_eq!(
            parse_status_list("Poisoned and Burned"),
            Some(vec![StatusCondition::Poisoned, StatusCondition::Burned])
        );
        assert_eq!(
            parse_status_list("Asleep, Burned, Confused, Paralyzed, and Poisoned"),
            Some(vec![
                StatusCondition::Asleep,
                StatusCondition::Burned,
                StatusCondition::Confused,
                StatusCondition::Paralyzed,
                StatusCondition::Poisoned,
            ])
        );
        // An over-broad capture must not half-parse.
        assert_eq!(parse_status_list("Poisoned and completely lost"), None);
    }

    #[test]
    fn finds_energy_placeholders_in_order() {
        assert_eq!(energies_in("{R} or {W}"), vec![EnergyKind::Fire, EnergyKind::Water]);
        assert_eq!(
            energies_in("{G}, {R}, {W}, {L}"),
            vec![EnergyKind::Grass, EnergyKind::Fire, EnergyKind::Water, EnergyKind::Lightning]
        );
        assert!(energies_in("no placeholders here").is_empty());
        // Unknown letters are skipped rather than invented.
        assert_eq!(energies_in("{Z} {P}"), vec![EnergyKind::Psychic]);
    }
}
