//! Beers Data

use jiff::Timestamp;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{
    beers::records::{BeerRecord, BeerStyle},
    validation::{
        MUST_NOT_BE_NEGATIVE, ValidationErrors, max_length, non_blank, required, required_text,
    },
};

pub(crate) const BEER_NAME_MAX: usize = 50;
pub(crate) const UPC_MAX: usize = 255;
pub(crate) const PRICE_SCALE: u32 = 2;

/// Beer fields exactly as a client supplied them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeerInput {
    pub version: Option<i32>,
    pub name: Option<String>,
    pub style: Option<BeerStyle>,
    pub upc: Option<String>,
    pub quantity_on_hand: Option<i32>,
    pub price: Option<Decimal>,
}

/// New Beer Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewBeer {
    pub name: String,
    pub style: BeerStyle,
    pub upc: String,
    pub quantity_on_hand: Option<i32>,
    pub price: Decimal,
}

/// Full replacement of a beer's mutable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct BeerUpdate {
    /// Version the client last saw; a mismatch is a conflict.
    pub version: Option<i32>,
    pub name: String,
    pub style: BeerStyle,
    pub upc: String,
    pub quantity_on_hand: Option<i32>,
    pub price: Decimal,
}

/// Partial update; only present, non-blank values are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeerPatch {
    pub name: Option<String>,
    pub style: Option<BeerStyle>,
    pub upc: Option<String>,
    pub quantity_on_hand: Option<i32>,
    pub price: Option<Decimal>,
}

/// Listing filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeerFilter {
    pub name: Option<String>,
    pub style: Option<BeerStyle>,
    pub show_inventory: Option<bool>,
}

/// Round to whole cents the way the `NUMERIC(19, 2)` price column stores it.
fn to_cents(price: Decimal) -> Decimal {
    let mut cents =
        price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);

    cents.rescale(PRICE_SCALE);

    cents
}

fn validate_required(input: &BeerInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    required_text(&mut errors, "beerName", input.name.as_deref(), BEER_NAME_MAX);
    required(&mut errors, "beerStyle", input.style.as_ref());
    required_text(&mut errors, "upc", input.upc.as_deref(), UPC_MAX);
    required(&mut errors, "price", input.price.as_ref());

    if input.price.is_some_and(|price| price.is_sign_negative()) {
        errors.push("price", MUST_NOT_BE_NEGATIVE);
    }

    errors
}

impl TryFrom<BeerInput> for NewBeer {
    type Error = ValidationErrors;

    fn try_from(input: BeerInput) -> Result<Self, Self::Error> {
        let errors = validate_required(&input);

        match (input.name, input.style, input.upc, input.price) {
            (Some(name), Some(style), Some(upc), Some(price)) if errors.is_empty() => Ok(Self {
                name,
                style,
                upc,
                quantity_on_hand: input.quantity_on_hand,
                price: to_cents(price),
            }),
            _ => Err(errors),
        }
    }
}

impl TryFrom<BeerInput> for BeerUpdate {
    type Error = ValidationErrors;

    fn try_from(input: BeerInput) -> Result<Self, Self::Error> {
        let version = input.version;

        NewBeer::try_from(input).map(|beer| Self {
            version,
            name: beer.name,
            style: beer.style,
            upc: beer.upc,
            quantity_on_hand: beer.quantity_on_hand,
            price: beer.price,
        })
    }
}

impl TryFrom<BeerInput> for BeerPatch {
    type Error = ValidationErrors;

    fn try_from(input: BeerInput) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();

        max_length(&mut errors, "beerName", input.name.as_deref(), BEER_NAME_MAX);
        max_length(&mut errors, "upc", input.upc.as_deref(), UPC_MAX);

        if input.price.is_some_and(|price| price.is_sign_negative()) {
            errors.push("price", MUST_NOT_BE_NEGATIVE);
        }

        errors.into_result(Self {
            name: non_blank(input.name),
            style: input.style,
            upc: non_blank(input.upc),
            quantity_on_hand: input.quantity_on_hand,
            price: input.price.map(to_cents),
        })
    }
}

impl NewBeer {
    pub(crate) fn into_record(self, now: Timestamp) -> BeerRecord {
        BeerRecord {
            uuid: crate::domain::beers::records::BeerUuid::new(),
            version: 1,
            name: self.name,
            style: self.style,
            upc: self.upc,
            quantity_on_hand: self.quantity_on_hand,
            price: self.price,
            created_at: now,
            updated_at: now,
        }
    }
}

impl BeerUpdate {
    /// Replace every mutable field of `beer`.
    pub(crate) fn apply_to(self, beer: &mut BeerRecord) {
        beer.name = self.name;
        beer.style = self.style;
        beer.upc = self.upc;
        beer.quantity_on_hand = self.quantity_on_hand;
        beer.price = self.price;
    }

    /// True when the caller pinned a version other than `current`.
    pub(crate) fn is_stale(&self, current: i32) -> bool {
        self.version.is_some_and(|version| version != current)
    }
}

impl BeerPatch {
    /// Overwrite only the fields this patch carries.
    pub(crate) fn apply_to(self, beer: &mut BeerRecord) {
        if let Some(name) = non_blank(self.name) {
            beer.name = name;
        }

        if let Some(style) = self.style {
            beer.style = style;
        }

        if let Some(upc) = non_blank(self.upc) {
            beer.upc = upc;
        }

        if let Some(quantity) = self.quantity_on_hand {
            beer.quantity_on_hand = Some(quantity);
        }

        if let Some(price) = self.price {
            beer.price = price;
        }
    }
}

impl BeerFilter {
    /// Name fragment to match, ignoring blank input.
    #[must_use]
    pub fn name_fragment(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.trim().is_empty())
    }

    /// Whether quantities should be stripped from the results.
    #[must_use]
    pub fn hides_inventory(&self) -> bool {
        self.show_inventory == Some(false)
    }

    /// Strip the quantity from `beer` when inventory is hidden.
    pub(crate) fn present(&self, mut beer: BeerRecord) -> BeerRecord {
        if self.hides_inventory() {
            beer.quantity_on_hand = None;
        }

        beer
    }

    pub(crate) fn matches(&self, beer: &BeerRecord) -> bool {
        let name_matches = self.name_fragment().is_none_or(|fragment| {
            beer.name
                .to_lowercase()
                .contains(&fragment.to_lowercase())
        });

        let style_matches = self.style.is_none_or(|style| beer.style == style);

        name_matches && style_matches
    }
}
