//! Benchtop specification types.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Benchtop specification collected on the estimator page.
///
/// `thickness` is numeric-as-text on purpose: the page accepts whatever the
/// user types and forwards it verbatim, so non-numeric input is not an
/// error at this layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchtopSpec {
    pub material: String,
    pub thickness: String,
    pub colour: Colour,
}

/// Stone colour options offered by the estimator.
///
/// The wire form and the display form are the same human-readable names
/// that appear in the colour select, so serde round trips exactly what the
/// page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Colour {
    #[default]
    Australis,
    #[serde(rename = "Calacatta Luxe")]
    CalacattaLuxe,
    #[serde(rename = "Silver Silk")]
    SilverSilk,
    Other,
}

impl Colour {
    /// All options, in the order the colour select shows them.
    pub const ALL: [Self; 4] = [
        Self::Australis,
        Self::CalacattaLuxe,
        Self::SilverSilk,
        Self::Other,
    ];

    /// The display name shown on the page and sent to the webhook.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Australis => "Australis",
            Self::CalacattaLuxe => "Calacatta Luxe",
            Self::SilverSilk => "Silver Silk",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
