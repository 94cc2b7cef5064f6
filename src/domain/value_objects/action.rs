use serde::{Deserialize, Serialize};

/// Where a drawn card comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawSource {
    Deck,
    Discard,
}

impl DrawSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawSource::Deck => "deck",
            DrawSource::Discard => "discard",
        }
    }
}

/// A turn action. Humans issue `Draw` and `Discard` as two separate
/// requests; automated players draw and discard within one engine pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum PlayerAction {
    Draw {
        source: DrawSource,
    },
    #[serde(rename_all = "camelCase")]
    Discard {
        card_id: String,
    },
    Drop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_format() {
        let json = serde_json::to_value(&PlayerAction::Draw {
            source: DrawSource::Discard,
        })
        .unwrap();
        assert_eq!(json["action"], "draw");
        assert_eq!(json["source"], "discard");

        let parsed: PlayerAction =
            serde_json::from_str(r#"{"action":"discard","cardId":"A-hearts"}"#).unwrap();
        assert_eq!(
            parsed,
            PlayerAction::Discard {
                card_id: "A-hearts".into()
            }
        );
    }
}
