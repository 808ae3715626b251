mod domain;
mod normalizer;
mod request;

pub use domain::{BhkType, PackageType};
pub use request::{normalize, EnquiryRequest, RawEnquiry};

/// Failures raised while turning a client submission into an `EnquiryRequest`.
#[derive(Debug, thiserror::Error)]
pub enum EnquiryError {
    #[error("invalid {field}: {value}")]
    InvalidEnumValue { field: &'static str, value: String },
    #[error("malformed enquiry payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl EnquiryError {
    /// JSON field that failed enum normalization.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            EnquiryError::InvalidEnumValue { field, .. } => Some(*field),
            EnquiryError::Malformed(_) => None,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            EnquiryError::InvalidEnumValue { value, .. } => Some(value.as_str()),
            EnquiryError::Malformed(_) => None,
        }
    }
}
