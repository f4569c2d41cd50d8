use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::normalizer::normalize_gender;

/// Canonical voice gender used for matching
///
/// Serialized with the catalogue's Spanish labels. Deserialization accepts any
/// legacy free text and runs it through the gender normalizer, so "Mujer",
/// "female voice" or "Femenino" all land on `Female`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Female,
    Male,
    Any,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Female => "Femenino",
            Gender::Male => "Masculino",
            Gender::Any => "Cualquiera",
        }
    }

    /// `Any` on either side is always compatible
    #[inline]
    pub fn is_compatible_with(self, other: Gender) -> bool {
        self == Gender::Any || other == Gender::Any || self == other
    }
}

impl From<String> for Gender {
    fn from(raw: String) -> Self {
        normalize_gender(&raw)
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.label().to_string()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the seven fixed age-range categories of the talent catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeLabel {
    #[serde(rename = "Niño (5-10)")]
    Child,
    #[serde(rename = "Adolescente (12-18)")]
    Teen,
    #[serde(rename = "20-30")]
    Twenties,
    #[serde(rename = "30-40")]
    Thirties,
    #[serde(rename = "40-50")]
    Forties,
    #[serde(rename = "50-60")]
    Fifties,
    #[serde(rename = "60+")]
    Senior,
}

impl AgeLabel {
    pub const ALL: [AgeLabel; 7] = [
        AgeLabel::Child,
        AgeLabel::Teen,
        AgeLabel::Twenties,
        AgeLabel::Thirties,
        AgeLabel::Forties,
        AgeLabel::Fifties,
        AgeLabel::Senior,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AgeLabel::Child => "Niño (5-10)",
            AgeLabel::Teen => "Adolescente (12-18)",
            AgeLabel::Twenties => "20-30",
            AgeLabel::Thirties => "30-40",
            AgeLabel::Forties => "40-50",
            AgeLabel::Fifties => "50-60",
            AgeLabel::Senior => "60+",
        }
    }

    /// Exact lookup of a catalogue label. Free text goes through the normalizer instead.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|age| age.label() == label)
    }
}

impl fmt::Display for AgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A demo recording attached to a talent profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demo {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Voice talent profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TalentProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "avatarUrl", default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub gender: Gender,
    #[serde(rename = "ageRange")]
    pub age_range: AgeLabel,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub demos: Vec<Demo>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    /// Brands this talent is the regular voice of
    #[serde(rename = "regularBrands", default)]
    pub regular_brands: Vec<String>,
    #[serde(rename = "pastBrands", default)]
    pub past_brands: Vec<String>,
    #[serde(rename = "dubbingActors", default)]
    pub dubbing_actors: Vec<String>,
}

/// The five-field role specification produced by brief generation
///
/// `gender`, `age_range` and `voice_type` are free text; the matcher
/// normalizes them on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSpec {
    pub name: String,
    pub description: String,
    pub gender: String,
    #[serde(rename = "ageRange")]
    pub age_range: String,
    #[serde(rename = "voiceType")]
    pub voice_type: String,
}

/// Structured output of a brief generation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastingBrief {
    #[serde(rename = "projectTitleSuggestion")]
    pub title: String,
    pub roles: Vec<RoleSpec>,
}

/// A role inside a casting project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastingRole {
    pub id: String,
    #[serde(flatten)]
    pub spec: RoleSpec,
    #[serde(rename = "suggestedTalentIds", default, skip_serializing_if = "Vec::is_empty")]
    pub suggested_talent_ids: Vec<String>,
    #[serde(rename = "selectedTalentId", default, skip_serializing_if = "Option::is_none")]
    pub selected_talent_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Draft,
    Open,
    Review,
    Completed,
}

/// Casting campaign owned by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastingProject {
    pub id: String,
    pub title: String,
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "clientName")]
    pub client_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub status: ProjectStatus,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub roles: Vec<CastingRole>,
}

impl CastingProject {
    pub fn role(&self, role_id: &str) -> Option<&CastingRole> {
        self.roles.iter().find(|r| r.id == role_id)
    }
}

/// Client identity used when a project is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRef {
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "clientName")]
    pub client_name: String,
}

/// Manager dashboard counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(rename = "totalTalents")]
    pub total_talents: usize,
    #[serde(rename = "activeCastings")]
    pub active_castings: usize,
    #[serde(rename = "completedCastings")]
    pub completed_castings: usize,
    #[serde(rename = "totalClients")]
    pub total_clients: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_deserializes_through_normalizer() {
        let g: Gender = serde_json::from_str("\"Mujer\"").unwrap();
        assert_eq!(g, Gender::Female);

        let g: Gender = serde_json::from_str("\"Masculino\"").unwrap();
        assert_eq!(g, Gender::Male);

        let g: Gender = serde_json::from_str("\"\"").unwrap();
        assert_eq!(g, Gender::Any);
    }

    #[test]
    fn test_gender_serializes_label() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"Femenino\"");
        assert_eq!(serde_json::to_string(&Gender::Any).unwrap(), "\"Cualquiera\"");
    }

    #[test]
    fn test_age_label_rejects_unknown() {
        let ok: AgeLabel = serde_json::from_str("\"Niño (5-10)\"").unwrap();
        assert_eq!(ok, AgeLabel::Child);

        let bad: Result<AgeLabel, _> = serde_json::from_str("\"adulto\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_from_label_matches_serde_names() {
        for age in AgeLabel::ALL {
            let json = serde_json::to_string(&age).unwrap();
            assert_eq!(json, format!("\"{}\"", age.label()));
            assert_eq!(AgeLabel::from_label(age.label()), Some(age));
        }
    }

    #[test]
    fn test_brief_requires_all_role_fields() {
        let json = r#"{
            "projectTitleSuggestion": "Verano",
            "roles": [{"name": "Narrador", "description": "x", "gender": "Masculino", "ageRange": "30-40"}]
        }"#;

        assert!(serde_json::from_str::<CastingBrief>(json).is_err());
    }

    #[test]
    fn test_casting_role_flattens_spec() {
        let json = r#"{
            "id": "r1",
            "name": "Narrador",
            "description": "Voz de marca",
            "gender": "Masculino",
            "ageRange": "30-40",
            "voiceType": "Profundo"
        }"#;

        let role: CastingRole = serde_json::from_str(json).unwrap();
        assert_eq!(role.spec.voice_type, "Profundo");
        assert!(role.selected_talent_id.is_none());
        assert!(role.suggested_talent_ids.is_empty());
    }
}
