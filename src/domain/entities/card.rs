use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A hand holds at most 6 cards mid-turn (5 dealt + 1 drawn)
pub type Hand = SmallVec<[Card; 8]>;

/// Card suit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn as_str(&self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "hearts" => Some(Suit::Hearts),
            "diamonds" => Some(Suit::Diamonds),
            "clubs" => Some(Suit::Clubs),
            "spades" => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Card rank - the Tonk deck drops 8s, 9s and 10s
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

impl Rank {
    pub const ALL: [Rank; 10] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Point value: A=1 through 7=7, face cards 10
    pub fn value(&self) -> u32 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "A" => Some(Rank::Ace),
            "2" => Some(Rank::Two),
            "3" => Some(Rank::Three),
            "4" => Some(Rank::Four),
            "5" => Some(Rank::Five),
            "6" => Some(Rank::Six),
            "7" => Some(Rank::Seven),
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            _ => None,
        }
    }
}

/// A single card. Identity is (rank, suit); the visibility flag controls
/// whether a human-facing snapshot may show the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    pub is_hidden: bool,
}

impl Card {
    /// Create a new face-down card
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            is_hidden: true,
        }
    }

    /// Wire identifier, e.g. "A-hearts"
    pub fn id(&self) -> String {
        format!("{}-{}", self.rank.as_str(), self.suit.as_str())
    }

    /// Check the wire identifier without allocating
    pub fn matches_id(&self, id: &str) -> bool {
        match id.split_once('-') {
            Some((rank, suit)) => {
                Rank::from_str(rank) == Some(self.rank) && Suit::from_str(suit) == Some(self.suit)
            }
            None => false,
        }
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.rank.value()
    }

    /// Turn the card face up
    #[inline]
    pub fn reveal(&mut self) {
        self.is_hidden = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_round_trip() {
        let card = Card::new(Rank::Queen, Suit::Diamonds);
        assert_eq!(card.id(), "Q-diamonds");
        assert!(card.matches_id("Q-diamonds"));
        assert!(!card.matches_id("Q-hearts"));
        assert!(!card.matches_id("garbage"));
    }

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::Seven.value(), 7);
        assert_eq!(Rank::Jack.value(), 10);
        assert_eq!(Rank::Queen.value(), 10);
        assert_eq!(Rank::King.value(), 10);
    }

    #[test]
    fn test_reveal() {
        let mut card = Card::new(Rank::Ace, Suit::Spades);
        assert!(card.is_hidden);
        card.reveal();
        assert!(!card.is_hidden);
    }
}
