//! Keyword-based product categories.

use std::fmt;

const ELECTRONICS_KEYWORDS: [&str; 8] = [
    "phone",
    "smartphone",
    "laptop",
    "computer",
    "tablet",
    "headphone",
    "earbud",
    "camera",
];

const CLOTHING_KEYWORDS: [&str; 8] = [
    "shirt", "pants", "dress", "jacket", "shoe", "hat", "sock", "glove",
];

const HOME_KEYWORDS: [&str; 8] = [
    "furniture",
    "chair",
    "table",
    "bed",
    "sofa",
    "lamp",
    "rug",
    "curtain",
];

/// Category assigned to synthesized records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductCategory {
    /// Phones, computers, audio and cameras.
    Electronics,
    /// Garments and accessories.
    Clothing,
    /// Furniture and furnishings.
    HomeAndFurniture,
    /// No keyword matched.
    Unknown,
}

impl ProductCategory {
    /// Keyword sets in evaluation order. The first set with a hit wins.
    const KEYWORD_SETS: [(Self, &'static [&'static str]); 3] = [
        (Self::Electronics, &ELECTRONICS_KEYWORDS),
        (Self::Clothing, &CLOTHING_KEYWORDS),
        (Self::HomeAndFurniture, &HOME_KEYWORDS),
    ];

    /// Classifies free text by substring keyword search on its lowercase
    /// form.
    ///
    /// Electronics is checked before clothing, clothing before home, so
    /// `"phone chair stand"` is [`ProductCategory::Electronics`].
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let lowered = text.to_lowercase();
        Self::KEYWORD_SETS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
            .map_or(Self::Unknown, |(category, _)| *category)
    }

    /// Returns the label stored in records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Clothing => "Clothing",
            Self::HomeAndFurniture => "Home & Furniture",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
