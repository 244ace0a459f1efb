//! Shared tent inventory model for the MonMatos server and UI.
//!
//! This crate owns the JSON representation exchanged over `/api/*` by both
//! `server` and `client`. Enumerations serialize as the uppercase codes that
//! are also stored verbatim in Postgres `TEXT` columns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

/// Longest identifying string accepted by the server.
pub const MAX_IDENTIFIER_LEN: usize = 8;

/// Error returned when a wire code does not map to a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown tent state: {0}")]
    State(String),
    #[error("unknown tent type: {0}")]
    Type(String),
    #[error("unknown movement: {0}")]
    Movement(String),
    #[error("unknown unit: {0}")]
    Unit(String),
    #[error("unsupported tent size: {0}")]
    Size(i64),
}

// =============================================================================
// TENT STATE
// =============================================================================

/// Physical condition of a tent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TentState {
    #[default]
    Neuf,
    Bon,
    Usage,
    Abime,
    Hs,
}

impl TentState {
    pub const ALL: [Self; 5] = [Self::Neuf, Self::Bon, Self::Usage, Self::Abime, Self::Hs];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neuf => "NEUF",
            Self::Bon => "BON",
            Self::Usage => "USAGE",
            Self::Abime => "ABIME",
            Self::Hs => "HS",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Neuf => "Neuf",
            Self::Bon => "Bon état",
            Self::Usage => "Usagée",
            Self::Abime => "Abîmée",
            Self::Hs => "Hors service",
        }
    }
}

impl FromStr for TentState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseError::State(s.to_owned()))
    }
}

// =============================================================================
// TENT TYPE
// =============================================================================

/// Fabric/structure category of a tent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TentType {
    #[default]
    Canadienne,
    Quechua,
    Marabout,
}

impl TentType {
    pub const ALL: [Self; 3] = [Self::Canadienne, Self::Quechua, Self::Marabout];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Canadienne => "CANADIENNE",
            Self::Quechua => "QUECHUA",
            Self::Marabout => "MARABOUT",
        }
    }
}

impl FromStr for TentType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseError::Type(s.to_owned()))
    }
}

// =============================================================================
// TENT SIZE
// =============================================================================

/// Sleeping capacity of a tent. Only the discrete values in
/// [`TentSize::ALLOWED`] can be constructed or deserialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TentSize(u8);

impl TentSize {
    pub const ALLOWED: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 8];

    /// Build a size from a raw capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Size`] for capacities outside [`TentSize::ALLOWED`].
    pub fn new(places: i64) -> Result<Self, ParseError> {
        Self::ALLOWED
            .into_iter()
            .find(|allowed| i64::from(*allowed) == places)
            .map(Self)
            .ok_or(ParseError::Size(places))
    }

    /// Every selectable size, in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::ALLOWED.into_iter().map(Self)
    }

    #[must_use]
    pub fn places(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn label(self) -> String {
        match self.0 {
            0 => "N'accueille pas de personne".to_owned(),
            1 => "1 place".to_owned(),
            n => format!("{n} places"),
        }
    }
}

impl Default for TentSize {
    fn default() -> Self {
        Self(6)
    }
}

impl TryFrom<i64> for TentSize {
    type Error = ParseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TentSize> for i64 {
    fn from(size: TentSize) -> Self {
        Self::from(size.0)
    }
}

impl fmt::Display for TentSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// MOVEMENT + UNIT
// =============================================================================

/// Scouting organization a group belongs to. Determines its unit taxonomy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Movement {
    Sgdf,
    Suf,
    Eedf,
}

impl Movement {
    pub const ALL: [Self; 3] = [Self::Sgdf, Self::Suf, Self::Eedf];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sgdf => "SGDF",
            Self::Suf => "SUF",
            Self::Eedf => "EEDF",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sgdf => "Scouts et Guides de France",
            Self::Suf => "Scouts Unitaires de France",
            Self::Eedf => "Éclaireuses Éclaireurs de France",
        }
    }

    /// Units a tent can be allocated to, group-level first.
    #[must_use]
    pub fn units(self) -> &'static [Unit] {
        match self {
            Self::Sgdf => &[
                Unit::Groupe,
                Unit::Farfadets,
                Unit::LouveteauxJeannettes,
                Unit::ScoutsGuides,
                Unit::PionniersCaravelles,
                Unit::Compagnons,
            ],
            Self::Suf => &[
                Unit::Groupe,
                Unit::Louveteaux,
                Unit::Jeannettes,
                Unit::Scouts,
                Unit::Guides,
                Unit::Routiers,
                Unit::GuidesAinees,
            ],
            Self::Eedf => &[Unit::Groupe, Unit::Lutins, Unit::Louveteaux, Unit::Eclaireurs, Unit::Aines],
        }
    }

    #[must_use]
    pub fn has_unit(self, unit: Unit) -> bool {
        self.units().contains(&unit)
    }
}

impl FromStr for Movement {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseError::Movement(s.to_owned()))
    }
}

/// Sub-group within a movement that owns a tent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Unit {
    #[default]
    Groupe,
    Farfadets,
    LouveteauxJeannettes,
    ScoutsGuides,
    PionniersCaravelles,
    Compagnons,
    Louveteaux,
    Jeannettes,
    Scouts,
    Guides,
    Routiers,
    GuidesAinees,
    Lutins,
    Eclaireurs,
    Aines,
}

impl Unit {
    pub const ALL: [Self; 15] = [
        Self::Groupe,
        Self::Farfadets,
        Self::LouveteauxJeannettes,
        Self::ScoutsGuides,
        Self::PionniersCaravelles,
        Self::Compagnons,
        Self::Louveteaux,
        Self::Jeannettes,
        Self::Scouts,
        Self::Guides,
        Self::Routiers,
        Self::GuidesAinees,
        Self::Lutins,
        Self::Eclaireurs,
        Self::Aines,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Groupe => "GROUPE",
            Self::Farfadets => "FARFADETS",
            Self::LouveteauxJeannettes => "LOUVETEAUX_JEANNETTES",
            Self::ScoutsGuides => "SCOUTS_GUIDES",
            Self::PionniersCaravelles => "PIONNIERS_CARAVELLES",
            Self::Compagnons => "COMPAGNONS",
            Self::Louveteaux => "LOUVETEAUX",
            Self::Jeannettes => "JEANNETTES",
            Self::Scouts => "SCOUTS",
            Self::Guides => "GUIDES",
            Self::Routiers => "ROUTIERS",
            Self::GuidesAinees => "GUIDES_AINEES",
            Self::Lutins => "LUTINS",
            Self::Eclaireurs => "ECLAIREURS",
            Self::Aines => "AINES",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Groupe => "Groupe",
            Self::Farfadets => "Farfadets",
            Self::LouveteauxJeannettes => "Louveteaux-Jeannettes",
            Self::ScoutsGuides => "Scouts-Guides",
            Self::PionniersCaravelles => "Pionniers-Caravelles",
            Self::Compagnons => "Compagnons",
            Self::Louveteaux => "Louveteaux",
            Self::Jeannettes => "Jeannettes",
            Self::Scouts => "Scouts",
            Self::Guides => "Guides",
            Self::Routiers => "Routiers",
            Self::GuidesAinees => "Guides aînées",
            Self::Lutins => "Lutins",
            Self::Eclaireurs => "Éclaireurs",
            Self::Aines => "Aînés",
        }
    }
}

impl FromStr for Unit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseError::Unit(s.to_owned()))
    }
}

// =============================================================================
// WIRE DTOS
// =============================================================================

/// A tent as returned by `GET /api/tents`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tent {
    /// Unique tent identifier (UUID string).
    pub id: String,
    /// Short uppercase code, unique within the owning group.
    pub identifying_string: String,
    pub state: TentState,
    pub unit: Unit,
    pub size: TentSize,
    pub complete: bool,
    /// Ground sheet sewn into the tent.
    pub integrated: bool,
    pub tent_type: TentType,
    #[serde(default)]
    pub comments: String,
    /// RFC 3339 creation timestamp, if known.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload for `POST /api/tents`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTentRequest {
    pub identifying_string: String,
    pub state: TentState,
    pub size: TentSize,
    pub unit: Unit,
    pub complete: bool,
    pub integrated: bool,
    pub tent_type: TentType,
    #[serde(default)]
    pub comments: String,
}

/// Signed-in group returned by `GET /api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique group identifier (UUID string).
    pub id: String,
    pub name: String,
    pub email: String,
    pub movement: Movement,
}

/// JSON error body returned by every failing API route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }
}
