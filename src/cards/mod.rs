//! Card system: attributes, cards, generation and the roster.
//!
//! ## Key Types
//!
//! - `CardAttributes`: Raw stats a rating is computed from
//! - `Card`: A competing unit with its running record
//! - `GenerationConfig`: Ranges used to roll new cards
//! - `Roster`: Exclusive owner of all live cards

pub mod attributes;
pub mod card;
pub mod generation;
pub mod roster;

pub use attributes::{AttackCategory, AttributeChange, AttributeDelta, CardAttributes, MobilityTier};
pub use card::Card;
pub use generation::{GenerationConfig, StatRange, DEFAULT_CARD_NAMES};
pub use roster::Roster;
