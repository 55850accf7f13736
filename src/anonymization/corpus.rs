//! Synthetic value corpus
//!
//! The corpus supplying replacement values is an injectable dependency:
//! the seeding logic only requires something that can draw one plausible
//! value of a category from a pseudo-random stream. The default corpus
//! is backed by the `fake` crate, with Australian-styled addresses.

use fake::faker::address::en::{BuildingNumber, CityName, StreetName, StreetSuffix};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::rngs::StdRng;
use rand::Rng;

/// Field categories with a dedicated replacement corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldCategory {
    /// Given names
    FirstName,
    /// Family names
    LastName,
    /// Street addresses
    Address,
}

impl FieldCategory {
    /// Get human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "FIRST_NAME",
            Self::LastName => "LAST_NAME",
            Self::Address => "ADDRESS",
        }
    }
}

/// Trait for corpus implementations
///
/// `draw` must produce exactly one value of the requested category and
/// consume randomness only from the rng it is handed, so that a given
/// rng state always maps to the same value.
pub trait ValueCorpus: Send + Sync {
    /// Draw one synthetic value of `category` from `rng`
    fn draw(&self, category: FieldCategory, rng: &mut StdRng) -> String;
}

/// Australian states and territories used in generated addresses
const AU_STATES: [&str; 8] = ["NSW", "VIC", "QLD", "WA", "SA", "TAS", "ACT", "NT"];

/// Default corpus backed by the `fake` crate
///
/// Names come straight from the faker. Addresses are assembled from
/// faker street and locality parts plus an Australian state and a
/// four-digit postcode, with the street and locality lines separated by
/// a newline as postal address corpora conventionally are. Callers that
/// need a single-line value flatten the line break themselves.
#[derive(Debug, Default)]
pub struct FakerCorpus;

impl FakerCorpus {
    /// Create a new faker-backed corpus
    pub fn new() -> Self {
        Self
    }
}

impl ValueCorpus for FakerCorpus {
    fn draw(&self, category: FieldCategory, rng: &mut StdRng) -> String {
        match category {
            FieldCategory::FirstName => FirstName().fake_with_rng::<String, _>(rng),
            FieldCategory::LastName => LastName().fake_with_rng::<String, _>(rng),
            FieldCategory::Address => {
                let number: String = BuildingNumber().fake_with_rng(rng);
                let street: String = StreetName().fake_with_rng(rng);
                let suffix: String = StreetSuffix().fake_with_rng(rng);
                let suburb: String = CityName().fake_with_rng(rng);
                let state = AU_STATES[rng.gen_range(0..AU_STATES.len())];
                let postcode: u32 = rng.gen_range(800..=9999);
                format!("{number} {street} {suffix}\n{suburb} {state} {postcode:04}")
            }
        }
    }
}
