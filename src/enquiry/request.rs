use super::domain::{BhkType, PackageType};
use super::EnquiryError;
use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing::{debug, warn};

/// Enquiry form fields exactly as the client sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEnquiry {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub area: Option<i32>,
    pub bhk_type: Option<String>,
    pub package_type: Option<String>,
    pub selected_rooms: Option<String>,
    pub estimated_budget: Option<i64>,
    pub source: Option<String>,
}

/// Typed estimate enquiry. Contact and location fields are carried as-is;
/// their format is checked further downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawEnquiry")]
pub struct EnquiryRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    /// Carpet area in square feet.
    pub area: Option<i32>,
    pub bhk_type: Option<BhkType>,
    pub package_type: Option<PackageType>,
    /// Comma-joined room names, see [`EnquiryRequest::rooms`].
    pub selected_rooms: Option<String>,
    /// Client-side figure. Accepted for compatibility but never trusted;
    /// the quoted budget is recomputed by the estimator.
    pub estimated_budget: Option<i64>,
    /// Marketing channel tag, e.g. `website` or `instagram`.
    pub source: Option<String>,
}

impl EnquiryRequest {
    pub fn from_json_str(input: &str) -> Result<Self, EnquiryError> {
        let raw: RawEnquiry = serde_json::from_str(input)?;
        normalize(raw)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, EnquiryError> {
        let raw: RawEnquiry = serde_json::from_reader(reader)?;
        normalize(raw)
    }

    pub fn rooms(&self) -> Vec<&str> {
        self.selected_rooms
            .as_deref()
            .map(|joined| {
                joined
                    .split(',')
                    .map(str::trim)
                    .filter(|room| !room.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl TryFrom<RawEnquiry> for EnquiryRequest {
    type Error = EnquiryError;

    fn try_from(raw: RawEnquiry) -> Result<Self, Self::Error> {
        normalize(raw)
    }
}

/// Converts a raw submission into a typed enquiry. The BHK field is checked
/// before the package field and the first bad token aborts.
pub fn normalize(raw: RawEnquiry) -> Result<EnquiryRequest, EnquiryError> {
    let RawEnquiry {
        name,
        phone,
        email,
        location,
        area,
        bhk_type,
        package_type,
        selected_rooms,
        estimated_budget,
        source,
    } = raw;

    let bhk_type = BhkType::from_token(bhk_type.as_deref()).inspect_err(log_rejection)?;
    let package_type =
        PackageType::from_token(package_type.as_deref()).inspect_err(log_rejection)?;

    if estimated_budget.is_some() {
        debug!(?estimated_budget, "client estimated budget accepted but not used");
    }
    debug!(?bhk_type, ?package_type, source = source.as_deref(), "enquiry normalized");

    Ok(EnquiryRequest {
        name,
        phone,
        email,
        location,
        area,
        bhk_type,
        package_type,
        selected_rooms,
        estimated_budget,
        source,
    })
}

fn log_rejection(error: &EnquiryError) {
    warn!(
        field = error.field(),
        value = error.value(),
        "rejected enquiry enum token"
    );
}
