use rand::Rng;

use crate::{
    error::{AppError, AppResult},
    models::{
        analysis::{MAX_SCORE, MIN_SCORE},
        AnalysisRequest, AnalysisResponse, Dataset, DatasetSummary, TraitScores,
    },
    services::{catalog, composer, description, matcher},
};

/// A request that passed boundary validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    /// Trimmed, upper-cased personality code
    pub personality: String,
    pub age: u32,
    pub trait_scores: TraitScores,
}

/// Checks required fields and score ranges before any computation
pub fn validate(request: &AnalysisRequest) -> AppResult<ValidatedRequest> {
    let personality = request
        .personality
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::InvalidInput("personality is required".to_string()))?;

    let age = request
        .age
        .ok_or_else(|| AppError::InvalidInput("age is required".to_string()))?;

    for (name, score) in request.trait_scores.named() {
        if !score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(AppError::InvalidInput(format!(
                "{} score must be between {} and {}, got {}",
                name, MIN_SCORE, MAX_SCORE, score
            )));
        }
    }

    Ok(ValidatedRequest {
        personality: personality.to_uppercase(),
        age,
        trait_scores: request.trait_scores,
    })
}

/// Runs one full analysis against a dataset snapshot
///
/// Synchronous: the matcher, composer and description generator run in
/// sequence with `rng` driving slot order and link suffixes.
pub fn analyze<R: Rng + ?Sized>(
    request: &AnalysisRequest,
    dataset: &Dataset,
    invite_base_url: &str,
    rng: &mut R,
) -> AppResult<AnalysisResponse> {
    let request = validate(request)?;

    let statistical = matcher::statistical_match(&request.personality, &dataset.records);
    let references = catalog::reference_interests(&request.personality);
    let slots = composer::compose(&statistical, references, rng);

    tracing::debug!(
        personality = %request.personality,
        statistical = %statistical,
        slots = slots.len(),
        "Recommendations composed"
    );

    let recommendations = slots
        .iter()
        .map(|slot| {
            description::describe(
                slot,
                request.age,
                request.trait_scores.introversion,
                invite_base_url,
                rng,
            )
        })
        .collect();

    Ok(AnalysisResponse {
        personality: request.personality,
        dataset: DatasetSummary::from(dataset),
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DatasetOrigin, InterestRecord, SlotSource};
    use crate::services::dataset::default_dataset;
    use rand::{rngs::StdRng, SeedableRng};

    const BASE: &str = "https://komunitas.example.com/invite/";

    fn request(personality: &str, age: u32, introversion: f64) -> AnalysisRequest {
        AnalysisRequest {
            personality: Some(personality.to_string()),
            age: Some(age),
            trait_scores: TraitScores {
                introversion,
                ..TraitScores::default()
            },
        }
    }

    fn sorted_interests(response: &AnalysisResponse) -> Vec<&str> {
        let mut names: Vec<&str> = response
            .recommendations
            .iter()
            .map(|r| r.interest.as_str())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_validate_normalizes_personality() {
        let validated = validate(&request("  infj ", 22, 5.0)).unwrap();
        assert_eq!(validated.personality, "INFJ");
        assert_eq!(validated.age, 22);
    }

    #[test]
    fn test_validate_requires_personality() {
        let mut req = request("INFJ", 22, 5.0);
        req.personality = None;
        assert!(matches!(validate(&req), Err(AppError::InvalidInput(_))));

        req.personality = Some("   ".to_string());
        assert!(matches!(validate(&req), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_requires_age() {
        let mut req = request("INFJ", 22, 5.0);
        req.age = None;
        let err = validate(&req).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: age is required");
    }

    #[test]
    fn test_validate_rejects_out_of_range_scores() {
        assert!(validate(&request("INFJ", 22, 0.5)).is_err());
        assert!(validate(&request("INFJ", 22, 10.5)).is_err());
        assert!(validate(&request("INFJ", 22, f64::NAN)).is_err());
        assert!(validate(&request("INFJ", 22, 1.0)).is_ok());
        assert!(validate(&request("INFJ", 22, 10.0)).is_ok());
    }

    #[test]
    fn test_analyze_infj_example() {
        let dataset = Dataset::new(
            vec![
                InterestRecord::new("INFJ", "Writing"),
                InterestRecord::new("INFJ", "Writing"),
                InterestRecord::new("INFJ", "Psychology"),
                InterestRecord::new("INFJ", "Writing"),
            ],
            DatasetOrigin::Default,
        );
        let mut rng = StdRng::seed_from_u64(5);

        let response = analyze(&request("infj", 20, 5.5), &dataset, BASE, &mut rng).unwrap();

        assert_eq!(response.personality, "INFJ");
        assert_eq!(response.dataset.records, 4);
        assert_eq!(sorted_interests(&response), vec!["Menulis", "Psikologi", "Writing"]);

        for record in &response.recommendations {
            assert_eq!(record.intro_category, "Seimbang");
            assert_eq!(record.age_focus, "Energi & tren terbaru.");
            let expected_source = if record.interest == "Writing" {
                SlotSource::Statistical
            } else {
                SlotSource::Reference
            };
            assert_eq!(record.source, expected_source);
        }
    }

    #[test]
    fn test_analyze_unknown_code_example() {
        let dataset = default_dataset();
        let mut rng = StdRng::seed_from_u64(6);

        let response = analyze(&request("zzzz", 40, 9.0), &dataset, BASE, &mut rng).unwrap();

        assert_eq!(response.personality, "ZZZZ");
        assert_eq!(
            sorted_interests(&response),
            vec!["General Interest", "Membaca", "Traveling"]
        );
        assert!(response
            .recommendations
            .iter()
            .all(|r| r.intro_category == "Introvert/Mendalam"
                && r.age_focus == "Pengembangan profesional."));
    }

    #[test]
    fn test_analyze_rejects_before_computing() {
        let dataset = default_dataset();
        let mut rng = StdRng::seed_from_u64(8);
        let req = AnalysisRequest {
            personality: Some("INFJ".to_string()),
            age: None,
            trait_scores: TraitScores::default(),
        };

        let result = analyze(&req, &dataset, BASE, &mut rng);
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
