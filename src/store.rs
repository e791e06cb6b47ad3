//! JSON persistence for raw and enriched card dumps.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::card::{Card, EnrichedCard};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid card data in {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode card data: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Load a raw card dump.
pub fn load_cards(path: &Path) -> Result<Vec<Card>, StoreError> {
    let data = fs::read_to_string(path)
        .map_err(|source| StoreError::Read { path: path.display().to_string(), source })?;
    serde_json::from_str(&data)
        .map_err(|source| StoreError::Decode { path: path.display().to_string(), source })
}

/// Persist an enriched dump, pretty-printed for diffability.
pub fn save_enriched(path: &Path, cards: &[EnrichedCard]) -> Result<(), StoreError> {
    let data = serde_json::to_string_pretty(cards)?;
    fs::write(path, data).map_err(|source| StoreError::Write { path: path.display().to_string(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::enrich_cards;

    #[test]
    fn load_then_save_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cards.json");
        let output = dir.path().join("enriched.json");

        fs::write(
            &input,
            r#"[
                {
                    "id": "A1-001",
                    "localId": "1",
                    "name": "Bulbasaur",
                    "category": "Pokemon",
                    "rarity": "One Diamond",
                    "set": {"id": "A1", "name": "Genetic Apex"},
                    "attacks": [{"cost": ["Grass"], "name": "Vine Whip", "effect": "Draw a card.", "damage": 40}]
                }
            ]"#,
        )
        .unwrap();

        let cards = load_cards(&input).unwrap();
        assert_eq!(cards.len(), 1);

        let enriched = enrich_cards(crate::api::rules(), &cards);
        save_enriched(&output, &enriched).unwrap();

        let reloaded: Vec<EnrichedCard> =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(reloaded, enriched);
        assert_eq!(reloaded[0].parsed_attacks[0].name, "Vine Whip");
    }

    #[test]
    fn missing_input_is_a_read_error() {
        let err = load_cards(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.json");
        fs::write(&input, "{ not json ]").unwrap();
        let err = load_cards(&input).unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));
    }
}
