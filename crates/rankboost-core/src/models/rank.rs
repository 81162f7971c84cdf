//! Rank ladder
//!
//! The closed set of competitive ranks and their position on the ladder.
//! Eighteen graded ranks (six tiers of three divisions each) are followed by
//! two special, tier-less ranks at the very top.
//!
//! All lookups go through the constant [`LADDER`] table, which is indexed by
//! the rank's discriminant. Nothing here is mutable, so ranks can be shared
//! freely between threads.

use crate::error::PricingError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Number of ranks on the ladder
pub const RANK_COUNT: usize = 20;

/// Number of graded tiers (Bronze through Grandmaster)
pub const GRADED_TIER_COUNT: u8 = 6;

/// Number of graded ranks below the special ranks
const GRADED_RANK_COUNT: u8 = GRADED_TIER_COUNT * 3;

/// Named tier of graded ranks, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Grandmaster,
}

impl Tier {
    /// Tier index, 1 for Bronze up to 6 for Grandmaster
    pub fn index(self) -> u8 {
        self as u8 + 1
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Bronze => "BRONZE",
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
            Tier::Platinum => "PLATINUM",
            Tier::Diamond => "DIAMOND",
            Tier::Grandmaster => "GRANDMASTER",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Division within a tier. Division III is the weakest, division I the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Division {
    Three,
    Two,
    One,
}

impl Division {
    pub fn as_str(self) -> &'static str {
        match self {
            Division::Three => "III",
            Division::Two => "II",
            Division::One => "I",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Division {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Where a rank sits: inside a graded tier, or above all tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Graded { tier: Tier, division: Division },
    Special,
}

/// Competitive rank
///
/// Variants are declared in ladder order; the discriminant doubles as the
/// index into [`LADDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    BronzeIII,
    BronzeII,
    BronzeI,
    SilverIII,
    SilverII,
    SilverI,
    GoldIII,
    GoldII,
    GoldI,
    PlatinumIII,
    PlatinumII,
    PlatinumI,
    DiamondIII,
    DiamondII,
    DiamondI,
    GrandmasterIII,
    GrandmasterII,
    GrandmasterI,
    Eternity,
    OneAboveAll,
}

/// One row of the ladder table
#[derive(Debug, Clone, Copy)]
pub struct LadderEntry {
    pub rank: Rank,
    pub name: &'static str,
    pub placement: Placement,
}

const fn graded(rank: Rank, name: &'static str, tier: Tier, division: Division) -> LadderEntry {
    LadderEntry {
        rank,
        name,
        placement: Placement::Graded { tier, division },
    }
}

const fn special(rank: Rank, name: &'static str) -> LadderEntry {
    LadderEntry {
        rank,
        name,
        placement: Placement::Special,
    }
}

/// The full ladder, weakest rank first
pub static LADDER: [LadderEntry; RANK_COUNT] = [
    graded(Rank::BronzeIII, "BRONZE_III", Tier::Bronze, Division::Three),
    graded(Rank::BronzeII, "BRONZE_II", Tier::Bronze, Division::Two),
    graded(Rank::BronzeI, "BRONZE_I", Tier::Bronze, Division::One),
    graded(Rank::SilverIII, "SILVER_III", Tier::Silver, Division::Three),
    graded(Rank::SilverII, "SILVER_II", Tier::Silver, Division::Two),
    graded(Rank::SilverI, "SILVER_I", Tier::Silver, Division::One),
    graded(Rank::GoldIII, "GOLD_III", Tier::Gold, Division::Three),
    graded(Rank::GoldII, "GOLD_II", Tier::Gold, Division::Two),
    graded(Rank::GoldI, "GOLD_I", Tier::Gold, Division::One),
    graded(Rank::PlatinumIII, "PLATINUM_III", Tier::Platinum, Division::Three),
    graded(Rank::PlatinumII, "PLATINUM_II", Tier::Platinum, Division::Two),
    graded(Rank::PlatinumI, "PLATINUM_I", Tier::Platinum, Division::One),
    graded(Rank::DiamondIII, "DIAMOND_III", Tier::Diamond, Division::Three),
    graded(Rank::DiamondII, "DIAMOND_II", Tier::Diamond, Division::Two),
    graded(Rank::DiamondI, "DIAMOND_I", Tier::Diamond, Division::One),
    graded(Rank::GrandmasterIII, "GRANDMASTER_III", Tier::Grandmaster, Division::Three),
    graded(Rank::GrandmasterII, "GRANDMASTER_II", Tier::Grandmaster, Division::Two),
    graded(Rank::GrandmasterI, "GRANDMASTER_I", Tier::Grandmaster, Division::One),
    special(Rank::Eternity, "ETERNITY"),
    special(Rank::OneAboveAll, "ONE_ABOVE_ALL"),
];

impl Rank {
    #[inline]
    fn entry(self) -> &'static LadderEntry {
        &LADDER[self as usize]
    }

    /// Iterate over every rank, weakest first
    pub fn all() -> impl Iterator<Item = Rank> {
        LADDER.iter().map(|e| e.rank)
    }

    /// 1-based position on the ladder (1 = weakest)
    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8 + 1
    }

    /// Look up a rank by its ladder ordinal
    pub fn from_ordinal(ordinal: u8) -> Result<Self, PricingError> {
        ordinal
            .checked_sub(1)
            .and_then(|i| LADDER.get(usize::from(i)))
            .map(|e| e.rank)
            .ok_or_else(|| PricingError::InvalidRank(format!("ordinal {}", ordinal)))
    }

    /// Tier grouping index
    ///
    /// Graded ranks share their tier's index (1..=6). Each special rank gets
    /// its own index above every graded tier: 7 for the first, 8 for the second.
    pub fn tier_index(self) -> u8 {
        match self.entry().placement {
            Placement::Graded { tier, .. } => tier.index(),
            Placement::Special => GRADED_TIER_COUNT + (self.ordinal() - GRADED_RANK_COUNT),
        }
    }

    /// True for the two tier-less ranks at the top of the ladder
    #[inline]
    pub fn is_special(self) -> bool {
        matches!(self.entry().placement, Placement::Special)
    }

    pub fn tier(self) -> Option<Tier> {
        match self.entry().placement {
            Placement::Graded { tier, .. } => Some(tier),
            Placement::Special => None,
        }
    }

    pub fn division(self) -> Option<Division> {
        match self.entry().placement {
            Placement::Graded { division, .. } => Some(division),
            Placement::Special => None,
        }
    }

    /// Signed number of ladder steps from `self` up to `other`
    pub fn steps_to(self, other: Rank) -> i32 {
        i32::from(other.ordinal()) - i32::from(self.ordinal())
    }

    /// Canonical wire identifier (e.g. `BRONZE_III`)
    pub fn as_str(self) -> &'static str {
        self.entry().name
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rank {
    type Err = PricingError;

    /// Parse a rank identifier, ignoring case and accepting `-` or spaces
    /// in place of underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();

        LADDER
            .iter()
            .find(|e| e.name == normalized)
            .map(|e| e.rank)
            .ok_or_else(|| PricingError::InvalidRank(s.to_string()))
    }
}

impl Serialize for Rank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
