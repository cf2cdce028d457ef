//! Fixed vocabularies the extractors scan.
//!
//! All entries are lowercase. Scan order is declaration order, so entries
//! that contain other entries are listed first.

use crate::filters::{Category, Condition};

/// Vehicle manufacturers.
pub const MAKES: &[&str] = &[
    "toyota",
    "honda",
    "mazda",
    "nissan",
    "subaru",
    "mitsubishi",
    "suzuki",
    "lexus",
    "ford",
    "holden",
    "hyundai",
    "kia",
    "volkswagen",
    "audi",
    "bmw",
    "mercedes-benz",
    "mercedes",
    "porsche",
    "volvo",
    "jeep",
    "tesla",
    "land rover",
    "jaguar",
    "peugeot",
    "renault",
    "skoda",
    "fiat",
    "alfa romeo",
    "chevrolet",
    "dodge",
    "chrysler",
    "isuzu",
    "ssangyong",
    "great wall",
    "haval",
    "mg",
    "byd",
    "daihatsu",
    "daewoo",
    "yamaha",
    "kawasaki",
    "ducati",
    "harley-davidson",
    "triumph",
    "ktm",
];

/// Camera and electronics brands. Makes that also appear here stay in the
/// residual query.
pub const ELECTRONICS_BRANDS: &[&str] = &[
    "sony",
    "canon",
    "nikon",
    "panasonic",
    "samsung",
    "apple",
    "lg",
    "philips",
    "fujifilm",
    "olympus",
    "toshiba",
    "hitachi",
    "mitsubishi",
    "hyundai",
    "daewoo",
    "yamaha",
];

/// Cities, regions and a curated set of suburbs.
pub const LOCATIONS: &[&str] = &[
    "palmerston north",
    "new plymouth",
    "bay of plenty",
    "hawke's bay",
    "hawkes bay",
    "north shore",
    "west coast",
    "lower hutt",
    "upper hutt",
    "mount maunganui",
    "mount eden",
    "mount albert",
    "auckland",
    "wellington",
    "christchurch",
    "hamilton",
    "tauranga",
    "dunedin",
    "napier",
    "hastings",
    "nelson",
    "rotorua",
    "whangarei",
    "invercargill",
    "queenstown",
    "gisborne",
    "timaru",
    "blenheim",
    "whanganui",
    "taupo",
    "porirua",
    "manukau",
    "papakura",
    "waikato",
    "canterbury",
    "otago",
    "northland",
    "taranaki",
    "southland",
    "marlborough",
    "manawatu",
    "ponsonby",
    "takapuna",
    "albany",
    "henderson",
    "botany",
    "newmarket",
    "remuera",
    "parnell",
    "riccarton",
    "petone",
    "karori",
    "devonport",
    "papamoa",
];

/// Prepositions that may introduce a place.
pub const LOCATION_PREPOSITIONS: &[&str] = &["in", "near", "at", "around", "from"];

/// Colors. Spelling variants are separate entries.
pub const COLORS: &[&str] = &[
    "white",
    "black",
    "silver",
    "grey",
    "gray",
    "red",
    "blue",
    "green",
    "yellow",
    "orange",
    "brown",
    "gold",
    "purple",
    "pink",
    "beige",
    "maroon",
    "navy",
    "bronze",
    "champagne",
    "teal",
];

/// Condition triggers, scanned label by label.
pub const CONDITIONS: &[(Condition, &[&str])] = &[
    (
        Condition::LikeNew,
        &["like new", "excellent", "mint", "pristine", "vintage", "classic", "retro"],
    ),
    (
        Condition::New,
        &["brand new", "never used", "unused", "unopened", "sealed", "new"],
    ),
    (
        Condition::Good,
        &["good condition", "great condition", "well maintained", "good", "working"],
    ),
    (
        Condition::Fair,
        &["needs work", "needs tlc", "fair", "used", "worn"],
    ),
];

/// Words that mark a vehicle search. Matched with an optional plural `s`.
pub const VEHICLE_CONTEXT: &[&str] = &[
    "car",
    "vehicle",
    "truck",
    "suv",
    "van",
    "ute",
    "sedan",
    "hatchback",
    "wagon",
    "coupe",
    "motorbike",
    "motorcycle",
];

/// Words that mark a distance or usage figure.
pub const MILEAGE_CONTEXT: &[&str] = &[
    "mileage",
    "odometer",
    "km",
    "kms",
    "kilometers",
    "kilometres",
];

/// Tokens that end a model name.
pub const MODEL_STOP_WORDS: &[&str] = &[
    "after", "before", "from", "in", "near", "under", "below", "with", "around", "between", "to",
];

/// Conversational words removed from the residual query.
pub const FILLER_WORDS: &[&str] = &[
    "looking for",
    "find",
    "show",
    "search",
    "want",
    "need",
    "near",
    "in",
    "at",
    "around",
    "from",
    "me",
    "a",
    "an",
    "the",
];

/// Keywords per category for the (unwired) category stage.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Vehicles,
        &[
            "car", "cars", "ute", "truck", "suv", "van", "sedan", "hatchback", "wagon",
            "motorbike", "motorcycle",
        ],
    ),
    (
        Category::Electronics,
        &[
            "camera", "phone", "laptop", "tv", "television", "console", "headphones", "tablet",
            "speaker",
        ],
    ),
    (
        Category::Furniture,
        &["sofa", "couch", "table", "chair", "desk", "bed", "wardrobe", "drawers"],
    ),
    (
        Category::Fashion,
        &["jacket", "dress", "shoes", "sneakers", "handbag", "watch"],
    ),
    (
        Category::Sports,
        &["bike", "bicycle", "surfboard", "golf", "treadmill", "kayak", "skis"],
    ),
];

/// Whether a make is also a known electronics brand.
pub fn is_electronics_brand(make: &str) -> bool {
    ELECTRONICS_BRANDS.contains(&make)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_lowercase_and_trimmed() {
        for entry in MAKES.iter().chain(LOCATIONS).chain(COLORS).chain(FILLER_WORDS) {
            assert_eq!(*entry, entry.to_lowercase().trim(), "bad entry {entry:?}");
        }
    }

    #[test]
    fn test_containing_entries_come_first() {
        // An entry listed after one of its own words would never be reached.
        for list in [MAKES, LOCATIONS] {
            for (i, later) in list.iter().enumerate() {
                for earlier in &list[..i] {
                    assert!(
                        !later.split([' ', '-']).any(|w| w == *earlier),
                        "{later:?} is shadowed by {earlier:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_sony_is_not_a_make() {
        assert!(!MAKES.contains(&"sony"));
        assert!(is_electronics_brand("sony"));
        assert!(is_electronics_brand("yamaha"));
        assert!(!is_electronics_brand("toyota"));
    }
}
