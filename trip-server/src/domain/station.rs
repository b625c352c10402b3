//! Station code types.

use std::fmt;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A validated railway station code.
///
/// Station codes are 2-5 uppercase ASCII alphanumerics ("NDLS", "BCT",
/// "JP", "INDB"). This type guarantees that any `StationCode` value is
/// valid by construction.
///
/// # Examples
///
/// ```
/// use trip_server::domain::StationCode;
///
/// let ndls = StationCode::parse("NDLS").unwrap();
/// assert_eq!(ndls.as_str(), "NDLS");
///
/// // Lowercase is rejected
/// assert!(StationCode::parse("ndls").is_err());
///
/// // Wrong length is rejected
/// assert!(StationCode::parse("N").is_err());
/// assert!(StationCode::parse("NEWDELHI").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationCode(String);

impl StationCode {
    /// Parse a station code from a string.
    ///
    /// The input must be 2-5 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let len = s.len();

        if !(2..=5).contains(&len) {
            return Err(InvalidStationCode {
                reason: "must be 2-5 characters",
            });
        }

        for b in s.bytes() {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidStationCode {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        Ok(StationCode(s.to_string()))
    }

    /// Parse a station code, trimming whitespace and uppercasing first.
    ///
    /// Accepts user-supplied input like "ndls " or "bct".
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStationCode> {
        Self::parse(&s.trim().to_uppercase())
    }

    /// Derive a code from an unmatched place name.
    ///
    /// Policy: uppercase the input, keep only ASCII alphanumerics, and
    /// truncate to 4 characters. Inputs that leave fewer than 2 usable
    /// characters map to the sentinel code "UNKN". Infallible, so callers
    /// cannot distinguish a derived guess from a real code.
    pub fn derive_from_name(name: &str) -> Self {
        let derived: String = name
            .to_uppercase()
            .chars()
            .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
            .take(4)
            .collect();

        if derived.len() < 2 {
            StationCode("UNKN".to_string())
        } else {
            StationCode(derived)
        }
    }

    /// Returns the station code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(StationCode::parse("NDLS").is_ok());
        assert!(StationCode::parse("BCT").is_ok());
        assert!(StationCode::parse("JP").is_ok());
        assert!(StationCode::parse("INDB").is_ok());
        assert!(StationCode::parse("YJUD").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(StationCode::parse("ndls").is_err());
        assert!(StationCode::parse("Bct").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(StationCode::parse("").is_err());
        assert!(StationCode::parse("N").is_err());
        assert!(StationCode::parse("NEWDELHI").is_err());
    }

    #[test]
    fn reject_non_alphanumeric() {
        assert!(StationCode::parse("ND-S").is_err());
        assert!(StationCode::parse("ND S").is_err());
        assert!(StationCode::parse("NDLÖ").is_err());
    }

    #[test]
    fn parse_normalized_accepts_messy_input() {
        assert_eq!(
            StationCode::parse_normalized(" ndls ").unwrap().as_str(),
            "NDLS"
        );
        assert_eq!(StationCode::parse_normalized("bct").unwrap().as_str(), "BCT");
    }

    #[test]
    fn derive_truncates_and_uppercases() {
        assert_eq!(StationCode::derive_from_name("Kozhikode").as_str(), "KOZH");
        assert_eq!(StationCode::derive_from_name("puri").as_str(), "PURI");
    }

    #[test]
    fn derive_strips_non_alphanumerics() {
        assert_eq!(StationCode::derive_from_name("new town").as_str(), "NEWT");
        assert_eq!(StationCode::derive_from_name("st. jude").as_str(), "STJU");
    }

    #[test]
    fn derive_falls_back_to_sentinel() {
        assert_eq!(StationCode::derive_from_name("").as_str(), "UNKN");
        assert_eq!(StationCode::derive_from_name("?").as_str(), "UNKN");
        assert_eq!(StationCode::derive_from_name("x").as_str(), "UNKN");
    }

    #[test]
    fn display_and_debug() {
        let code = StationCode::parse("NDLS").unwrap();
        assert_eq!(format!("{}", code), "NDLS");
        assert_eq!(format!("{:?}", code), "StationCode(NDLS)");
    }

    #[test]
    fn equality_and_hash() {
        use std::collections::HashSet;
        let a = StationCode::parse("NDLS").unwrap();
        let b = StationCode::parse("NDLS").unwrap();
        let c = StationCode::parse("BCT").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&c));
    }
}
