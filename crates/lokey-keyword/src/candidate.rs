//! Candidate keyword types.

use serde::{Deserialize, Serialize};

/// Slot composition of a keyword phrase.
///
/// Tags describe which slots a phrase stacks: where it points (city,
/// district, dong, micro-area), what it sells (category or service), and
/// whether it carries a search intent word. The evaluator keys its
/// competition table off the most specific tag present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    /// Business name, alone or with a place.
    Brand,
    /// City or district plus category.
    LocationCategory,
    /// City or district plus a concrete service or menu item.
    LocationService,
    /// City/district + category + intent word.
    LocationCategoryIntent,
    /// City/district + service + intent word.
    LocationServiceIntent,
    /// Dong plus category.
    DongCategory,
    /// Dong plus service.
    DongService,
    /// Dong + service + intent word.
    DongServiceIntent,
    /// Micro-area plus category.
    MicroAreaCategory,
    /// Micro-area plus service.
    MicroAreaService,
    /// Micro-area + service + intent word.
    MicroAreaServiceIntent,
    /// Service plus intent word, no place.
    ServiceIntent,
    /// Business feature plus category.
    FeatureCategory,
    /// Bare category.
    Category,
    /// Bare service or menu item.
    Service,
    /// Experience or vibe keyword.
    Experience,
    /// Anything else a generator produces.
    General,
}

impl TypeTag {
    /// The tag's wire name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::LocationCategory => "location_category",
            Self::LocationService => "location_service",
            Self::LocationCategoryIntent => "location_category_intent",
            Self::LocationServiceIntent => "location_service_intent",
            Self::DongCategory => "dong_category",
            Self::DongService => "dong_service",
            Self::DongServiceIntent => "dong_service_intent",
            Self::MicroAreaCategory => "micro_area_category",
            Self::MicroAreaService => "micro_area_service",
            Self::MicroAreaServiceIntent => "micro_area_service_intent",
            Self::ServiceIntent => "service_intent",
            Self::FeatureCategory => "feature_category",
            Self::Category => "category",
            Self::Service => "service",
            Self::Experience => "experience",
            Self::General => "general",
        }
    }

    /// Parses a wire name. Unknown names are not an error at this level;
    /// the parser drops candidates that end up tagless.
    pub fn parse(name: &str) -> Option<Self> {
        let tag = match name {
            "brand" => Self::Brand,
            "location_category" => Self::LocationCategory,
            "location_service" => Self::LocationService,
            "location_category_intent" => Self::LocationCategoryIntent,
            "location_service_intent" => Self::LocationServiceIntent,
            "dong_category" => Self::DongCategory,
            "dong_service" => Self::DongService,
            "dong_service_intent" => Self::DongServiceIntent,
            "micro_area_category" => Self::MicroAreaCategory,
            "micro_area_service" => Self::MicroAreaService,
            "micro_area_service_intent" => Self::MicroAreaServiceIntent,
            "service_intent" => Self::ServiceIntent,
            "feature_category" => Self::FeatureCategory,
            "category" => Self::Category,
            "service" => Self::Service,
            "experience" => Self::Experience,
            "general" => Self::General,
            _ => return None,
        };
        Some(tag)
    }

    /// True when the phrase carries a search intent word.
    pub fn is_intent(self) -> bool {
        self.name().contains("intent")
    }

    /// True when the phrase names a concrete service or menu item.
    pub fn involves_service(self) -> bool {
        self.name().contains("service")
    }

    /// True for the broad location-combination tags that earn the
    /// location-based region bonus.
    pub fn is_location_based(self) -> bool {
        matches!(self, Self::LocationCategory | Self::LocationService)
    }
}

/// A raw keyword candidate, before evaluation.
///
/// Ephemeral: produced by the generator, consumed by the evaluator.
/// Identity is the phrase text; duplicates by phrase are filtered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateKeyword {
    /// The keyword phrase.
    pub phrase: String,
    /// Slot composition tags; at least one, or the candidate is invalid.
    pub types: Vec<TypeTag>,
    /// Estimated monthly search volume.
    pub estimated_sv: f64,
}

impl CandidateKeyword {
    /// Convenience constructor.
    pub fn new(phrase: impl Into<String>, types: Vec<TypeTag>, estimated_sv: f64) -> Self {
        Self {
            phrase: phrase.into(),
            types,
            estimated_sv,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tag_roundtrip() {
        for tag in [
            TypeTag::Brand,
            TypeTag::DongServiceIntent,
            TypeTag::MicroAreaCategory,
            TypeTag::General,
        ] {
            assert_eq!(TypeTag::parse(tag.name()), Some(tag));
        }
        assert_eq!(TypeTag::parse("made_up"), None);
    }

    #[test]
    fn tag_predicates() {
        assert!(TypeTag::DongServiceIntent.is_intent());
        assert!(TypeTag::DongServiceIntent.involves_service());
        assert!(!TypeTag::LocationCategory.is_intent());
        assert!(TypeTag::LocationService.is_location_based());
        assert!(!TypeTag::DongService.is_location_based());
    }
}
