use super::normalizer::{lookup_bhk, lookup_package, BHK_TOKENS, PACKAGE_TOKENS};
use super::EnquiryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Apartment size as bedroom-hall-kitchen count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum BhkType {
    OneBhk,
    TwoBhk,
    ThreeBhk,
}

impl BhkType {
    pub const FIELD: &'static str = "bhkType";

    pub const fn ordered() -> [Self; 3] {
        [Self::OneBhk, Self::TwoBhk, Self::ThreeBhk]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneBhk => "ONE_BHK",
            Self::TwoBhk => "TWO_BHK",
            Self::ThreeBhk => "THREE_BHK",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OneBhk => "1 BHK",
            Self::TwoBhk => "2 BHK",
            Self::ThreeBhk => "3 BHK",
        }
    }

    /// Resolves an optional client token. A missing token is not an error;
    /// an unrecognized one is, and carries the raw value unchanged.
    pub fn from_token(token: Option<&str>) -> Result<Option<Self>, EnquiryError> {
        token.map(|value| value.parse::<Self>()).transpose()
    }

    pub fn accepted_tokens() -> impl Iterator<Item = &'static str> {
        BHK_TOKENS.iter().map(|(alias, _)| *alias)
    }
}

impl FromStr for BhkType {
    type Err = EnquiryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        lookup_bhk(value).ok_or_else(|| EnquiryError::InvalidEnumValue {
            field: Self::FIELD,
            value: value.to_string(),
        })
    }
}

impl TryFrom<String> for BhkType {
    type Error = EnquiryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for BhkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service package tier quoted for the renovation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum PackageType {
    Essential,
    Premium,
    Luxury,
}

impl PackageType {
    pub const FIELD: &'static str = "packageType";

    pub const fn ordered() -> [Self; 3] {
        [Self::Essential, Self::Premium, Self::Luxury]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Essential => "ESSENTIAL",
            Self::Premium => "PREMIUM",
            Self::Luxury => "LUXURY",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Essential => "Essential",
            Self::Premium => "Premium",
            Self::Luxury => "Luxury",
        }
    }

    pub fn from_token(token: Option<&str>) -> Result<Option<Self>, EnquiryError> {
        token.map(|value| value.parse::<Self>()).transpose()
    }

    pub fn accepted_tokens() -> impl Iterator<Item = &'static str> {
        PACKAGE_TOKENS.iter().map(|(name, _)| *name)
    }
}

impl FromStr for PackageType {
    type Err = EnquiryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        lookup_package(value).ok_or_else(|| EnquiryError::InvalidEnumValue {
            field: Self::FIELD,
            value: value.to_string(),
        })
    }
}

impl TryFrom<String> for PackageType {
    type Error = EnquiryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
