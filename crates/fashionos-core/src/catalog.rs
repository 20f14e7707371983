//! # Catalog
//!
//! The read-only collections and designers shown on the site, plus the brand
//! copy. The data is compiled in; nothing here is ever mutated.

use crate::primitives::FEATURED_DESIGNER_ID;
use serde::{Deserialize, Serialize};

// =============================================================================
// RECORDS
// =============================================================================

/// A collection shown in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub title: String,
    pub designer: String,
    pub season: String,
    pub image_url: String,
    pub description: String,
}

/// A designer shown on the biography page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Designer {
    pub id: String,
    pub name: String,
    pub location: String,
    pub specialty: String,
    pub bio: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<String>,
    #[serde(default)]
    pub is_new: bool,
}

/// Brand copy used by the landing page and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub hero_tagline: String,
    pub subheading: String,
    pub footer_quote: String,
}

// =============================================================================
// CATALOG
// =============================================================================

/// In-memory catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    brand: Brand,
    collections: Vec<Collection>,
    designers: Vec<Designer>,
}

impl Catalog {
    fn new(brand: Brand, collections: Vec<Collection>, designers: Vec<Designer>) -> Self {
        Self {
            brand,
            collections,
            designers,
        }
    }

    /// The studio's own catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let brand = Brand {
            name: "ANDREW MAJTENYI".to_string(),
            hero_tagline: "Fashion lives where art meets innovation.".to_string(),
            subheading: "Explore curated collections, visionary designers, and immersive runway experiences.".to_string(),
            footer_quote: "Defining the future of aesthetic intelligence.".to_string(),
        };

        let collections = [
            ("eye-spy", "Eye Spy", "Current", "photo-1539109136881-3be0616acf4b", "Black Shiny Dive Dress"),
            ("madame", "Madame de Pizan", "Archive", "photo-1500917293891-ef795e70e1f6", "Historical reimagining."),
            ("romanov", "Romanov Women", "Archive", "photo-1550614000-4b9519e0031c", "Imperial aesthetics."),
            ("shipping", "Modern Shipping", "Archive", "photo-1515886657613-9f3515b0c78f", "Nautical structure."),
            ("europa", "Ice Moon of Europa", "Archive", "photo-1539008835657-9e8e9680c956", "Futuristic cold."),
        ]
        .into_iter()
        .map(|(id, title, season, photo, description)| Collection {
            id: id.to_string(),
            title: title.to_string(),
            designer: "Andrew Majtenyi".to_string(),
            season: season.to_string(),
            image_url: unsplash(photo),
            description: description.to_string(),
        })
        .collect();

        let designers = vec![Designer {
            id: FEATURED_DESIGNER_ID.to_string(),
            name: "Andrew Majtenyi".to_string(),
            location: "London, UK".to_string(),
            specialty: "Couture".to_string(),
            bio: "Merging traditional craftsmanship with cinematic storytelling.".to_string(),
            image_url: unsplash("photo-1506794778202-cad84cf45f1d"),
            email: None,
            website: None,
            social: None,
            is_new: false,
        }];

        Self::new(brand, collections, designers)
    }

    /// Brand copy.
    #[must_use]
    pub fn brand(&self) -> &Brand {
        &self.brand
    }

    /// All collections, in gallery order.
    #[must_use]
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// Look up a collection by id.
    #[must_use]
    pub fn collection(&self, id: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }

    /// Collections attributed to a designer, matched by display name.
    pub fn collections_by<'a>(&'a self, designer: &'a str) -> impl Iterator<Item = &'a Collection> {
        self.collections
            .iter()
            .filter(move |c| c.designer.eq_ignore_ascii_case(designer))
    }

    /// All designers.
    #[must_use]
    pub fn designers(&self) -> &[Designer] {
        &self.designers
    }

    /// Look up a designer by id.
    #[must_use]
    pub fn designer(&self, id: &str) -> Option<&Designer> {
        self.designers.iter().find(|d| d.id == id)
    }

    /// The designer shown when no id is given.
    #[must_use]
    pub fn featured_designer(&self) -> Option<&Designer> {
        self.designer(FEATURED_DESIGNER_ID)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?auto=format&fit=crop&q=80&w=800")
}
