use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// The 16 four-letter personality codes known to the reference catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PersonalityType {
    Intj,
    Intp,
    Entj,
    Entp,
    Infj,
    Infp,
    Enfj,
    Enfp,
    Istj,
    Isfj,
    Estj,
    Esfj,
    Istp,
    Isfp,
    Estp,
    Esfp,
}

impl PersonalityType {
    /// All codes in catalog order
    pub const ALL: [PersonalityType; 16] = [
        PersonalityType::Intj,
        PersonalityType::Intp,
        PersonalityType::Entj,
        PersonalityType::Entp,
        PersonalityType::Infj,
        PersonalityType::Infp,
        PersonalityType::Enfj,
        PersonalityType::Enfp,
        PersonalityType::Istj,
        PersonalityType::Isfj,
        PersonalityType::Estj,
        PersonalityType::Esfj,
        PersonalityType::Istp,
        PersonalityType::Isfp,
        PersonalityType::Estp,
        PersonalityType::Esfp,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PersonalityType::Intj => "INTJ",
            PersonalityType::Intp => "INTP",
            PersonalityType::Entj => "ENTJ",
            PersonalityType::Entp => "ENTP",
            PersonalityType::Infj => "INFJ",
            PersonalityType::Infp => "INFP",
            PersonalityType::Enfj => "ENFJ",
            PersonalityType::Enfp => "ENFP",
            PersonalityType::Istj => "ISTJ",
            PersonalityType::Isfj => "ISFJ",
            PersonalityType::Estj => "ESTJ",
            PersonalityType::Esfj => "ESFJ",
            PersonalityType::Istp => "ISTP",
            PersonalityType::Isfp => "ISFP",
            PersonalityType::Estp => "ESTP",
            PersonalityType::Esfp => "ESFP",
        }
    }
}

impl Display for PersonalityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error returned when a string is not one of the 16 known codes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown personality code: {0}")]
pub struct UnknownPersonality(pub String);

impl FromStr for PersonalityType {
    type Err = UnknownPersonality;

    /// Exact match against the upper-cased code. Callers normalize first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonalityType::ALL
            .iter()
            .copied()
            .find(|p| p.code() == s)
            .ok_or_else(|| UnknownPersonality(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_code() {
        assert_eq!("INFJ".parse::<PersonalityType>(), Ok(PersonalityType::Infj));
        assert_eq!("ESFP".parse::<PersonalityType>(), Ok(PersonalityType::Esfp));
    }

    #[test]
    fn test_parse_is_exact() {
        // Lower-case input is normalized by the caller, not here
        assert!("infj".parse::<PersonalityType>().is_err());
        assert!(" INFJ".parse::<PersonalityType>().is_err());
        assert_eq!(
            "ZZZZ".parse::<PersonalityType>(),
            Err(UnknownPersonality("ZZZZ".to_string()))
        );
    }

    #[test]
    fn test_all_codes_round_trip_through_display() {
        for personality in PersonalityType::ALL {
            let parsed: PersonalityType = personality.to_string().parse().unwrap();
            assert_eq!(parsed, personality);
        }
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&PersonalityType::Enfp).unwrap();
        assert_eq!(json, r#""ENFP""#);
    }
}
