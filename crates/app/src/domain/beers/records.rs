//! Beer Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Beer UUID
pub type BeerUuid = TypedUuid<BeerRecord>;

/// Beer Record
#[derive(Debug, Clone, PartialEq)]
pub struct BeerRecord {
    pub uuid: BeerUuid,
    pub version: i32,
    pub name: String,
    pub style: BeerStyle,
    pub upc: String,
    pub quantity_on_hand: Option<i32>,
    pub price: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Beer style, stored as a small integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeerStyle {
    Lager,
    Pilsner,
    Stout,
    Gose,
    Porter,
    Ale,
    Wheat,
    Ipa,
    PaleAle,
    Saison,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown beer style: {0}")]
pub struct UnknownBeerStyle(pub String);

impl BeerStyle {
    pub const ALL: [Self; 10] = [
        Self::Lager,
        Self::Pilsner,
        Self::Stout,
        Self::Gose,
        Self::Porter,
        Self::Ale,
        Self::Wheat,
        Self::Ipa,
        Self::PaleAle,
        Self::Saison,
    ];

    #[must_use]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::Lager => 0,
            Self::Pilsner => 1,
            Self::Stout => 2,
            Self::Gose => 3,
            Self::Porter => 4,
            Self::Ale => 5,
            Self::Wheat => 6,
            Self::Ipa => 7,
            Self::PaleAle => 8,
            Self::Saison => 9,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lager => "LAGER",
            Self::Pilsner => "PILSNER",
            Self::Stout => "STOUT",
            Self::Gose => "GOSE",
            Self::Porter => "PORTER",
            Self::Ale => "ALE",
            Self::Wheat => "WHEAT",
            Self::Ipa => "IPA",
            Self::PaleAle => "PALE_ALE",
            Self::Saison => "SAISON",
        }
    }
}

impl TryFrom<i16> for BeerStyle {
    type Error = UnknownBeerStyle;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_i16() == value)
            .ok_or_else(|| UnknownBeerStyle(value.to_string()))
    }
}

impl FromStr for BeerStyle {
    type Err = UnknownBeerStyle;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| UnknownBeerStyle(value.to_string()))
    }
}

impl fmt::Display for BeerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
