use super::domain::{BhkType, PackageType};

/// Lowercase aliases accepted for the BHK field.
pub(crate) const BHK_TOKENS: [(&str, BhkType); 6] = [
    ("1bhk", BhkType::OneBhk),
    ("one_bhk", BhkType::OneBhk),
    ("2bhk", BhkType::TwoBhk),
    ("two_bhk", BhkType::TwoBhk),
    ("3bhk", BhkType::ThreeBhk),
    ("three_bhk", BhkType::ThreeBhk),
];

/// Package tiers match on their uppercase name only.
pub(crate) const PACKAGE_TOKENS: [(&str, PackageType); 3] = [
    ("ESSENTIAL", PackageType::Essential),
    ("PREMIUM", PackageType::Premium),
    ("LUXURY", PackageType::Luxury),
];

pub(crate) fn lookup_bhk(token: &str) -> Option<BhkType> {
    let folded = token.to_lowercase();
    BHK_TOKENS
        .iter()
        .find(|(alias, _)| *alias == folded)
        .map(|(_, bhk)| *bhk)
}

pub(crate) fn lookup_package(token: &str) -> Option<PackageType> {
    let folded = token.to_uppercase();
    PACKAGE_TOKENS
        .iter()
        .find(|(name, _)| *name == folded)
        .map(|(_, package)| *package)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bhk_lookup_folds_case() {
        assert_eq!(lookup_bhk("1BHK"), Some(BhkType::OneBhk));
        assert_eq!(lookup_bhk("Two_Bhk"), Some(BhkType::TwoBhk));
        assert_eq!(lookup_bhk("3bhk"), Some(BhkType::ThreeBhk));
    }

    #[test]
    fn bhk_lookup_does_not_trim_or_guess() {
        assert_eq!(lookup_bhk(" 2bhk"), None);
        assert_eq!(lookup_bhk("2 bhk"), None);
        assert_eq!(lookup_bhk("4bhk"), None);
        assert_eq!(lookup_bhk(""), None);
    }

    #[test]
    fn package_lookup_has_no_aliases() {
        assert_eq!(lookup_package("luxury"), Some(PackageType::Luxury));
        assert_eq!(lookup_package("Essential"), Some(PackageType::Essential));
        assert_eq!(lookup_package("lux"), None);
        assert_eq!(lookup_package("premium_plus"), None);
    }

    #[test]
    fn every_variant_has_a_token() {
        for bhk in BhkType::ordered() {
            assert!(BHK_TOKENS.iter().any(|(_, mapped)| *mapped == bhk));
        }
        for package in PackageType::ordered() {
            assert!(PACKAGE_TOKENS.iter().any(|(_, mapped)| *mapped == package));
        }
    }
}
