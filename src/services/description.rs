use rand::Rng;

use crate::models::{DescriptionRecord, RecommendationSlot};

/// Ages at or below this get the youth-oriented focus text
const YOUTH_MAX_AGE: u32 = 25;

/// Upper bounds (inclusive) of the extrovert and balanced score bands
const EXTROVERT_MAX_SCORE: f64 = 4.0;
const BALANCED_MAX_SCORE: f64 = 7.0;

/// Range of the numeric suffix on mock invitation links
const LINK_SUFFIX_RANGE: std::ops::Range<u32> = 100..1000;

/// Social-energy band derived from the introversion score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroBand {
    Extrovert,
    Balanced,
    Introvert,
}

impl IntroBand {
    pub fn from_score(score: f64) -> Self {
        if score <= EXTROVERT_MAX_SCORE {
            IntroBand::Extrovert
        } else if score <= BALANCED_MAX_SCORE {
            IntroBand::Balanced
        } else {
            IntroBand::Introvert
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            IntroBand::Extrovert => "Ekstrovert/Sosial",
            IntroBand::Balanced => "Seimbang",
            IntroBand::Introvert => "Introvert/Mendalam",
        }
    }

    pub fn focus(&self) -> &'static str {
        match self {
            IntroBand::Extrovert => "Diskusi grup ramai & kolaborasi.",
            IntroBand::Balanced => "Campuran santai & mandiri.",
            IntroBand::Introvert => "Sesi tenang & diskusi 1-on-1.",
        }
    }
}

pub fn age_focus(age: u32) -> &'static str {
    if age <= YOUTH_MAX_AGE {
        "Energi & tren terbaru."
    } else {
        "Pengembangan profesional."
    }
}

/// Lower-cases `interest` and collapses each non-alphanumeric run into one hyphen
pub fn slugify(interest: &str) -> String {
    let mut slug = String::with_capacity(interest.len());
    let mut pending_hyphen = false;

    for c in interest.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Builds a placeholder invitation link; not unique and never resolved
pub fn mock_link<R: Rng + ?Sized>(base_url: &str, interest: &str, rng: &mut R) -> String {
    let suffix = rng.gen_range(LINK_SUFFIX_RANGE);
    let slug = slugify(interest);
    if slug.is_empty() {
        format!("{}{}", base_url, suffix)
    } else {
        format!("{}{}-{}", base_url, slug, suffix)
    }
}

/// Renders one slot into its display record
pub fn describe<R: Rng + ?Sized>(
    slot: &RecommendationSlot,
    age: u32,
    introversion: f64,
    invite_base_url: &str,
    rng: &mut R,
) -> DescriptionRecord {
    let band = IntroBand::from_score(introversion);

    DescriptionRecord {
        title: format!("Komunitas {}", slot.interest()),
        interest: slot.interest().to_string(),
        intro_category: band.category().to_string(),
        intro_focus: band.focus().to_string(),
        age_focus: age_focus(age).to_string(),
        source: slot.source(),
        label: slot.label().to_string(),
        mock_link: mock_link(invite_base_url, slot.interest(), rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlotSource;
    use rand::{rngs::StdRng, SeedableRng};

    const BASE: &str = "https://komunitas.example.com/invite/";

    #[test]
    fn test_intro_bands() {
        assert_eq!(IntroBand::from_score(1.0), IntroBand::Extrovert);
        assert_eq!(IntroBand::from_score(3.0), IntroBand::Extrovert);
        assert_eq!(IntroBand::from_score(4.0), IntroBand::Extrovert);
        assert_eq!(IntroBand::from_score(4.5), IntroBand::Balanced);
        assert_eq!(IntroBand::from_score(5.5), IntroBand::Balanced);
        assert_eq!(IntroBand::from_score(7.0), IntroBand::Balanced);
        assert_eq!(IntroBand::from_score(7.5), IntroBand::Introvert);
        assert_eq!(IntroBand::from_score(9.0), IntroBand::Introvert);
    }

    #[test]
    fn test_age_focus() {
        assert_eq!(age_focus(20), "Energi & tren terbaru.");
        assert_eq!(age_focus(25), "Energi & tren terbaru.");
        assert_eq!(age_focus(26), "Pengembangan profesional.");
        assert_eq!(age_focus(40), "Pengembangan profesional.");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Writing"), "writing");
        assert_eq!(slugify("Stand-up Comedy"), "stand-up-comedy");
        assert_eq!(slugify("Musik (Indie)"), "musik-indie");
        assert_eq!(slugify("Memasak/Baking"), "memasak-baking");
        assert_eq!(slugify("DIY  (Perbaikan)"), "diy-perbaikan");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn test_mock_link_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let link = mock_link(BASE, "Fisika/Sains", &mut rng);
            let rest = link.strip_prefix(BASE).unwrap();
            let suffix = rest.strip_prefix("fisika-sains-").unwrap();
            let n: u32 = suffix.parse().unwrap();
            assert!(LINK_SUFFIX_RANGE.contains(&n));
        }
    }

    #[test]
    fn test_describe_statistical_slot() {
        let mut rng = StdRng::seed_from_u64(11);
        let slot = RecommendationSlot::statistical("Writing");
        let record = describe(&slot, 20, 9.0, BASE, &mut rng);

        assert_eq!(record.title, "Komunitas Writing");
        assert_eq!(record.interest, "Writing");
        assert_eq!(record.intro_category, "Introvert/Mendalam");
        assert_eq!(record.intro_focus, "Sesi tenang & diskusi 1-on-1.");
        assert_eq!(record.age_focus, "Energi & tren terbaru.");
        assert_eq!(record.source, SlotSource::Statistical);
        assert_eq!(record.label, "Pilihan Data");
        assert!(record.mock_link.starts_with(&format!("{BASE}writing-")));
    }

    #[test]
    fn test_describe_reference_slot() {
        let mut rng = StdRng::seed_from_u64(12);
        let slot = RecommendationSlot::reference("Museum Seni");
        let record = describe(&slot, 40, 3.0, BASE, &mut rng);

        assert_eq!(record.intro_category, "Ekstrovert/Sosial");
        assert_eq!(record.age_focus, "Pengembangan profesional.");
        assert_eq!(record.source, SlotSource::Reference);
        assert_eq!(record.label, "Saran MBTI");
        assert!(record.mock_link.starts_with(&format!("{BASE}museum-seni-")));
    }
}
