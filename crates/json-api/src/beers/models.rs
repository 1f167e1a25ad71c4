//! Beer Models

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use taproom_app::domain::beers::{data::BeerInput, records::BeerStyle};

/// Beer style as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum BeerStyleDto {
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

impl From<BeerStyleDto> for BeerStyle {
    fn from(style: BeerStyleDto) -> Self {
        match style {
            BeerStyleDto::Lager => Self::Lager,
            BeerStyleDto::Pilsner => Self::Pilsner,
            BeerStyleDto::Stout => Self::Stout,
            BeerStyleDto::Gose => Self::Gose,
            BeerStyleDto::Porter => Self::Porter,
            BeerStyleDto::Ale => Self::Ale,
            BeerStyleDto::Wheat => Self::Wheat,
            BeerStyleDto::Ipa => Self::Ipa,
            BeerStyleDto::PaleAle => Self::PaleAle,
            BeerStyleDto::Saison => Self::Saison,
        }
    }
}

impl From<BeerStyle> for BeerStyleDto {
    fn from(style: BeerStyle) -> Self {
        match style {
            BeerStyle::Lager => Self::Lager,
            BeerStyle::Pilsner => Self::Pilsner,
            BeerStyle::Stout => Self::Stout,
            BeerStyle::Gose => Self::Gose,
            BeerStyle::Porter => Self::Porter,
            BeerStyle::Ale => Self::Ale,
            BeerStyle::Wheat => Self::Wheat,
            BeerStyle::Ipa => Self::Ipa,
            BeerStyle::PaleAle => Self::PaleAle,
            BeerStyle::Saison => Self::Saison,
        }
    }
}

/// Body accepted by create, replace and patch.
///
/// Every field is optional here; which ones are required depends on the
/// operation and is checked when converting into the domain type.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BeerRequest {
    /// Expected current version; a mismatch on replace is a conflict
    pub version: Option<i32>,

    /// Up to 50 characters
    pub beer_name: Option<String>,

    pub beer_style: Option<BeerStyleDto>,

    /// Up to 255 characters
    pub upc: Option<String>,

    pub quantity_on_hand: Option<i32>,

    /// Decimal price, sent as a number or a string
    #[salvo(schema(value_type = String))]
    pub price: Option<Decimal>,
}

impl From<BeerRequest> for BeerInput {
    fn from(request: BeerRequest) -> Self {
        BeerInput {
            version: request.version,
            name: request.beer_name,
            style: request.beer_style.map(Into::into),
            upc: request.upc,
            quantity_on_hand: request.quantity_on_hand,
            price: request.price,
        }
    }
}
