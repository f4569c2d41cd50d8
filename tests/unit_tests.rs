// Unit tests for Casting Match

use casting_match::core::{
    filters::{filter_eligible, is_eligible, RoleConstraints},
    find_matches, normalize_age_label, normalize_gender,
    scoring::{rank, voice_keywords},
    Matcher,
};
use casting_match::models::{AgeLabel, Gender, RoleSpec, TalentProfile};
use casting_match::services::seed::{mock_projects, mock_talents};
use casting_match::services::{InMemoryRegistry, TalentRegistry};

fn create_test_talent(id: &str, gender: Gender, age_range: AgeLabel, description: &str) -> TalentProfile {
    TalentProfile {
        id: id.to_string(),
        name: format!("Talent {}", id),
        email: format!("{}@vo.test", id),
        avatar_url: None,
        gender,
        age_range,
        description: description.to_string(),
        demos: vec![],
        languages: vec!["Español".to_string()],
        rating: 4.5,
        regular_brands: vec![],
        past_brands: vec![],
        dubbing_actors: vec![],
    }
}

fn create_test_role(gender: &str, age_range: &str, voice_type: &str) -> RoleSpec {
    RoleSpec {
        name: "Narrador".to_string(),
        description: "Voz principal del spot".to_string(),
        gender: gender.to_string(),
        age_range: age_range.to_string(),
        voice_type: voice_type.to_string(),
    }
}

fn ids(talents: &[TalentProfile]) -> Vec<&str> {
    talents.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn test_gender_canonical_labels() {
    assert_eq!(normalize_gender("Masculino"), Gender::Male);
    assert_eq!(normalize_gender("Femenino"), Gender::Female);
    assert_eq!(normalize_gender(""), Gender::Any);
}

#[test]
fn test_gender_normalization_is_idempotent() {
    let inputs = ["Masculino", "Femenino", "", "Mujer joven", "voz de hombre", "Cualquiera", "niño", "neutral"];

    for input in inputs {
        let once = normalize_gender(input);
        let twice = normalize_gender(once.label());
        assert_eq!(once, twice, "Normalizing {:?} twice changed the result", input);
    }
}

#[test]
fn test_adult_fans_out_to_four_ranges() {
    assert_eq!(
        normalize_age_label("adulto"),
        &[AgeLabel::Twenties, AgeLabel::Thirties, AgeLabel::Forties, AgeLabel::Fifties]
    );
}

#[test]
fn test_child_text_maps_only_to_child() {
    assert_eq!(normalize_age_label("niño de 7 años"), &[AgeLabel::Child]);
}

#[test]
fn test_age_labels_map_to_themselves() {
    for label in AgeLabel::ALL {
        assert_eq!(
            normalize_age_label(label.label()),
            &[label],
            "Label {} did not normalize to itself",
            label
        );
    }
}

#[test]
fn test_unrecognized_age_is_unconstrained() {
    assert!(normalize_age_label("").is_empty());
    assert!(normalize_age_label("voz madura").is_empty());

    let role = create_test_role("", "voz madura", "Sereno");
    assert!(RoleConstraints::from_role(&role).is_unconstrained());
}

#[test]
fn test_eligibility_requires_both_checks() {
    let constraints = RoleConstraints::from_role(&create_test_role("Femenino", "30-40", ""));

    let ok = create_test_talent("1", Gender::Female, AgeLabel::Thirties, "");
    let wrong_gender = create_test_talent("2", Gender::Male, AgeLabel::Thirties, "");
    let wrong_age = create_test_talent("3", Gender::Female, AgeLabel::Forties, "");

    assert!(is_eligible(&ok, &constraints));
    assert!(!is_eligible(&wrong_gender, &constraints));
    assert!(!is_eligible(&wrong_age, &constraints));
}

#[test]
fn test_filter_preserves_pool_order() {
    let pool = vec![
        create_test_talent("a", Gender::Male, AgeLabel::Twenties, ""),
        create_test_talent("b", Gender::Female, AgeLabel::Twenties, ""),
        create_test_talent("c", Gender::Male, AgeLabel::Fifties, ""),
        create_test_talent("d", Gender::Male, AgeLabel::Forties, ""),
    ];

    let role = create_test_role("Masculino", "adulto", "");
    let eligible: Vec<&str> = filter_eligible(&role, &pool).iter().map(|t| t.id.as_str()).collect();

    assert_eq!(eligible, vec!["a", "c", "d"]);
}

#[test]
fn test_voice_keywords_split_on_spaces() {
    assert_eq!(voice_keywords("Cálida Tecnológica"), vec!["cálida", "tecnológica"]);
    assert_eq!(voice_keywords("Fresco, juvenil"), vec!["fresco,", "juvenil"]);
}

#[test]
fn test_ranking_is_stable() {
    let pool = vec![
        create_test_talent("1", Gender::Female, AgeLabel::Thirties, "Voz grave"),
        create_test_talent("2", Gender::Female, AgeLabel::Thirties, "Voz cálida y cercana"),
        create_test_talent("3", Gender::Female, AgeLabel::Thirties, "Voz aguda"),
        create_test_talent("4", Gender::Female, AgeLabel::Thirties, "Muy cálida"),
        create_test_talent("5", Gender::Female, AgeLabel::Thirties, "Voz neutra"),
    ];

    let role = create_test_role("", "", "Cálida");
    let ranked: Vec<&str> = rank(&role, pool.iter().collect()).iter().map(|t| t.id.as_str()).collect();

    // Relevant talents first, each group in pool order
    assert_eq!(ranked, vec!["2", "4", "1", "3", "5"]);
}

#[test]
fn test_results_capped_at_ten() {
    let pool = mock_talents(100);
    let role = create_test_role("Cualquiera", "", "");

    let matches = find_matches(&role, &pool);

    assert_eq!(matches.len(), 10);
    // Unconstrained role with an empty keyword keeps catalogue order
    assert_eq!(ids(&matches), ids(&pool[..10]));
}

#[test]
fn test_matcher_respects_custom_cap() {
    let pool = mock_talents(50);
    let role = create_test_role("", "", "");

    let result = Matcher::new(3).find_matches(&role, &pool);

    assert_eq!(result.matches.len(), 3);
    assert_eq!(result.total_candidates, 50);
    assert_eq!(result.eligible_count, 50);
}

#[test]
fn test_scenario_single_eligible_talent() {
    let mut pool = vec![create_test_talent(
        "target",
        Gender::Female,
        AgeLabel::Thirties,
        "Locutora con voz cálida y natural",
    )];

    // Nine talents that fail the gender or the age check
    for i in 0..9 {
        let talent = if i % 2 == 0 {
            create_test_talent(&format!("m{}", i), Gender::Male, AgeLabel::Thirties, "Voz cálida")
        } else {
            create_test_talent(&format!("f{}", i), Gender::Female, AgeLabel::Senior, "Voz tecnológica")
        };
        pool.push(talent);
    }

    let role = create_test_role("Femenino", "30-40", "Cálida Tecnológica");
    let matches = find_matches(&role, &pool);

    assert_eq!(ids(&matches), vec!["target"]);
}

#[test]
fn test_scenario_unconstrained_role_prefers_keyword() {
    let pool: Vec<TalentProfile> = (0..15)
        .map(|i| {
            let description = if i % 3 == 2 { "Voz serena y profunda, tono sereno" } else { "Voz enérgica" };
            let gender = if i % 2 == 0 { Gender::Female } else { Gender::Male };
            create_test_talent(&format!("t{}", i), gender, AgeLabel::ALL[i % AgeLabel::ALL.len()], description)
        })
        .collect();

    let role = create_test_role("Cualquiera", "", "Sereno");
    let matches = find_matches(&role, &pool);

    assert_eq!(matches.len(), 10);

    // t2, t5, t8, t11, t14 carry the keyword and lead in pool order
    assert_eq!(&ids(&matches)[..5], &["t2", "t5", "t8", "t11", "t14"]);
    assert_eq!(&ids(&matches)[5..], &["t0", "t1", "t3", "t4", "t6"]);
}

#[test]
fn test_matching_is_deterministic() {
    let pool = mock_talents(100);
    let role = create_test_role("Masculino", "40-50", "Grave Profunda");

    let first = find_matches(&role, &pool);
    let second = find_matches(&role, &pool);

    assert_eq!(first, second);
}

#[test]
fn test_matches_are_eligible() {
    let pool = mock_talents(100);
    let role = create_test_role("Femenino", "Adolescente", "Juvenil");

    let matches = find_matches(&role, &pool);
    assert!(matches.len() <= 10);

    for talent in &matches {
        assert_eq!(talent.gender, Gender::Female);
        assert_eq!(talent.age_range, AgeLabel::Teen);
    }
}

#[test]
fn test_registry_snapshot_feeds_matcher() {
    let registry = InMemoryRegistry::new(mock_talents(100), mock_projects());
    let pool = tokio_test::block_on(registry.list_talents());

    let role = create_test_role("Cualquiera", "", "");
    let result = Matcher::default().find_matches(&role, &pool);

    assert_eq!(result.total_candidates, 100);
    assert_eq!(result.talent_ids()[0], "t1");
}
