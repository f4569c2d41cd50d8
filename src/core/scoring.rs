use crate::models::{RoleSpec, TalentProfile};
use std::cmp::Reverse;

/// Lower-cased voice-type keywords of a role
///
/// The text is split on single spaces, so punctuation stays attached
/// ("fresco," is a keyword) and consecutive spaces yield an empty keyword.
pub fn voice_keywords(voice_type: &str) -> Vec<String> {
    voice_type
        .to_lowercase()
        .split(' ')
        .map(str::to_string)
        .collect()
}

/// Binary relevance score of a talent for a set of voice keywords
///
/// 1 if any keyword occurs in the lower-cased description, else 0. An empty
/// keyword occurs in every description.
#[inline]
pub fn relevance_score(talent: &TalentProfile, keywords: &[String]) -> u8 {
    let description = talent.description.to_lowercase();

    if keywords.iter().any(|keyword| description.contains(keyword.as_str())) {
        1
    } else {
        0
    }
}

/// Order eligible talents by relevance, most relevant first
///
/// The sort is stable: talents with equal scores keep their input order.
pub fn rank<'a>(role: &RoleSpec, eligible: Vec<&'a TalentProfile>) -> Vec<&'a TalentProfile> {
    let keywords = voice_keywords(&role.voice_type);

    let mut scored: Vec<(u8, &'a TalentProfile)> = eligible
        .into_iter()
        .map(|talent| (relevance_score(talent, &keywords), talent))
        .collect();

    // slice::sort_by_key is stable
    scored.sort_by_key(|(score, _)| Reverse(*score));

    scored.into_iter().map(|(_, talent)| talent).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeLabel, Gender};

    fn create_test_talent(id: &str, description: &str) -> TalentProfile {
        TalentProfile {
            id: id.to_string(),
            name: format!("Talent {}", id),
            email: format!("{}@vo.test", id),
            avatar_url: None,
            gender: Gender::Female,
            age_range: AgeLabel::Thirties,
            description: description.to_string(),
            demos: vec![],
            languages: vec![],
            rating: 4.5,
            regular_brands: vec![],
            past_brands: vec![],
            dubbing_actors: vec![],
        }
    }

    fn create_test_role(voice_type: &str) -> RoleSpec {
        RoleSpec {
            name: "Narrador".to_string(),
            description: String::new(),
            gender: String::new(),
            age_range: String::new(),
            voice_type: voice_type.to_string(),
        }
    }

    #[test]
    fn test_voice_keywords() {
        assert_eq!(voice_keywords("Cálida Tecnológica"), vec!["cálida", "tecnológica"]);
        assert_eq!(voice_keywords("Fresco, alegre"), vec!["fresco,", "alegre"]);
        assert_eq!(voice_keywords("a  b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_relevance_score() {
        let talent = create_test_talent("t1", "Locutora profesional. Voz Cálida.");

        assert_eq!(relevance_score(&talent, &voice_keywords("Cálida Tecnológica")), 1);
        assert_eq!(relevance_score(&talent, &voice_keywords("Rasgada")), 0);
    }

    #[test]
    fn test_punctuation_stays_on_keyword() {
        let talent = create_test_talent("t1", "Voz Fresca y Sereno.");

        // "sereno," is not a substring of "... sereno."
        assert_eq!(relevance_score(&talent, &voice_keywords("Sereno, educativo")), 0);
        assert_eq!(relevance_score(&talent, &voice_keywords("Sereno")), 1);
    }

    #[test]
    fn test_empty_voice_type_matches_everything() {
        let talent = create_test_talent("t1", "Voz Rasgada.");
        assert_eq!(relevance_score(&talent, &voice_keywords("")), 1);
    }

    #[test]
    fn test_rank_is_stable() {
        let talents = vec![
            create_test_talent("t1", "Voz Rasgada."),
            create_test_talent("t2", "Voz Serena."),
            create_test_talent("t3", "Voz Dulce."),
            create_test_talent("t4", "Voz serena y cálida."),
            create_test_talent("t5", "Voz Enérgica."),
        ];

        let ranked = rank(&create_test_role("Serena"), talents.iter().collect());
        let ids: Vec<&str> = ranked.iter().map(|t| t.id.as_str()).collect();

        assert_eq!(ids, vec!["t2", "t4", "t1", "t3", "t5"]);
    }

    #[test]
    fn test_rank_empty() {
        let ranked = rank(&create_test_role("Serena"), vec![]);
        assert!(ranked.is_empty());
    }
}
