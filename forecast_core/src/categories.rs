//! # Project Categories
//!
//! Closed sets of categorical project attributes: location (state), tower
//! voltage class, substation switchgear and terrain. Each table carries the
//! wire code used in requests, a fixed index and a default.
//!
//! Requests carry these as free-form strings. Anything that is not an exact
//! code match resolves to the table's default instead of being rejected.
//!
//! ## Example
//!
//! ```rust
//! use forecast_core::categories::{Location, TowerType};
//!
//! assert_eq!(Location::resolve("Kerala"), Location::Kerala);
//! assert_eq!(Location::resolve("Atlantis"), Location::Delhi);
//! assert_eq!(TowerType::resolve("400kV").index(), 2);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Location
// ============================================================================

/// Indian state in which the project is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Location {
    #[default]
    Delhi,
    Gujarat,
    Karnataka,
    Kerala,
    #[serde(rename = "Madhya Pradesh")]
    MadhyaPradesh,
    Maharashtra,
    Odisha,
    Rajasthan,
    #[serde(rename = "Tamil Nadu")]
    TamilNadu,
    Telangana,
}

impl Location {
    /// All locations in index order
    pub const ALL: [Location; 10] = [
        Location::Delhi,
        Location::Gujarat,
        Location::Karnataka,
        Location::Kerala,
        Location::MadhyaPradesh,
        Location::Maharashtra,
        Location::Odisha,
        Location::Rajasthan,
        Location::TamilNadu,
        Location::Telangana,
    ];

    /// Wire code as sent by clients (e.g., "Tamil Nadu")
    pub fn code(&self) -> &'static str {
        match self {
            Location::Delhi => "Delhi",
            Location::Gujarat => "Gujarat",
            Location::Karnataka => "Karnataka",
            Location::Kerala => "Kerala",
            Location::MadhyaPradesh => "Madhya Pradesh",
            Location::Maharashtra => "Maharashtra",
            Location::Odisha => "Odisha",
            Location::Rajasthan => "Rajasthan",
            Location::TamilNadu => "Tamil Nadu",
            Location::Telangana => "Telangana",
        }
    }

    /// Position in the location table
    pub fn index(&self) -> usize {
        match self {
            Location::Delhi => 0,
            Location::Gujarat => 1,
            Location::Karnataka => 2,
            Location::Kerala => 3,
            Location::MadhyaPradesh => 4,
            Location::Maharashtra => 5,
            Location::Odisha => 6,
            Location::Rajasthan => 7,
            Location::TamilNadu => 8,
            Location::Telangana => 9,
        }
    }

    /// Exact, case-sensitive lookup by wire code
    pub fn from_code(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|loc| loc.code() == s)
    }

    /// Lookup by wire code, falling back to [`Location::Delhi`]
    pub fn resolve(s: &str) -> Self {
        Self::from_code(s).unwrap_or_default()
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        self.code()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Tower Type
// ============================================================================

/// Transmission tower voltage class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TowerType {
    #[default]
    #[serde(rename = "132kV")]
    Kv132,
    #[serde(rename = "220kV")]
    Kv220,
    #[serde(rename = "400kV")]
    Kv400,
}

impl TowerType {
    /// All tower types in index order
    pub const ALL: [TowerType; 3] = [TowerType::Kv132, TowerType::Kv220, TowerType::Kv400];

    /// Wire code (e.g., "220kV")
    pub fn code(&self) -> &'static str {
        match self {
            TowerType::Kv132 => "132kV",
            TowerType::Kv220 => "220kV",
            TowerType::Kv400 => "400kV",
        }
    }

    /// Position in the tower table
    pub fn index(&self) -> usize {
        match self {
            TowerType::Kv132 => 0,
            TowerType::Kv220 => 1,
            TowerType::Kv400 => 2,
        }
    }

    /// Exact, case-sensitive lookup by wire code
    pub fn from_code(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == s)
    }

    /// Lookup by wire code, falling back to [`TowerType::Kv132`]
    pub fn resolve(s: &str) -> Self {
        Self::from_code(s).unwrap_or_default()
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            TowerType::Kv132 => "132 kV",
            TowerType::Kv220 => "220 kV",
            TowerType::Kv400 => "400 kV",
        }
    }
}

impl std::fmt::Display for TowerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Substation Type
// ============================================================================

/// Substation switchgear technology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubstationType {
    /// Air Insulated Switchgear
    #[default]
    #[serde(rename = "AIS")]
    Ais,
    /// Gas Insulated Switchgear
    #[serde(rename = "GIS")]
    Gis,
}

impl SubstationType {
    /// All substation types in index order
    pub const ALL: [SubstationType; 2] = [SubstationType::Ais, SubstationType::Gis];

    /// Wire code ("AIS" or "GIS")
    pub fn code(&self) -> &'static str {
        match self {
            SubstationType::Ais => "AIS",
            SubstationType::Gis => "GIS",
        }
    }

    /// Position in the substation table
    pub fn index(&self) -> usize {
        match self {
            SubstationType::Ais => 0,
            SubstationType::Gis => 1,
        }
    }

    /// Exact, case-sensitive lookup by wire code
    pub fn from_code(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == s)
    }

    /// Lookup by wire code, falling back to [`SubstationType::Ais`]
    pub fn resolve(s: &str) -> Self {
        Self::from_code(s).unwrap_or_default()
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SubstationType::Ais => "Air Insulated Switchgear",
            SubstationType::Gis => "Gas Insulated Switchgear",
        }
    }
}

impl std::fmt::Display for SubstationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Terrain
// ============================================================================

/// Terrain along the line route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Terrain {
    Coastal,
    Hilly,
    Mountain,
    #[default]
    Plain,
}

impl Terrain {
    /// All terrains in index order
    pub const ALL: [Terrain; 4] = [Terrain::Coastal, Terrain::Hilly, Terrain::Mountain, Terrain::Plain];

    /// Wire code (e.g., "Hilly")
    pub fn code(&self) -> &'static str {
        match self {
            Terrain::Coastal => "Coastal",
            Terrain::Hilly => "Hilly",
            Terrain::Mountain => "Mountain",
            Terrain::Plain => "Plain",
        }
    }

    /// Position in the terrain table
    pub fn index(&self) -> usize {
        match self {
            Terrain::Coastal => 0,
            Terrain::Hilly => 1,
            Terrain::Mountain => 2,
            Terrain::Plain => 3,
        }
    }

    /// Exact, case-sensitive lookup by wire code
    pub fn from_code(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == s)
    }

    /// Lookup by wire code, falling back to [`Terrain::Plain`]
    pub fn resolve(s: &str) -> Self {
        Self::from_code(s).unwrap_or_default()
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        self.code()
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
