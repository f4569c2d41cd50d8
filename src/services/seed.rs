//! Mock catalogue used to seed the in-memory registry
//!
//! Talents are generated from fixed name/brand/voice pools with a seeded RNG,
//! so a given `(count, seed)` always yields the same catalogue.

use chrono::{DateTime, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{AgeLabel, CastingProject, CastingRole, Demo, Gender, ProjectStatus, RoleSpec, TalentProfile};

pub const DEFAULT_SEED: u64 = 2024;

const MALE_NAMES: &[&str] = &[
    "Juan", "Pedro", "Carlos", "Miguel", "David", "José", "Antonio", "Manuel", "Javier",
    "Francisco", "Luis", "Alberto", "Diego", "Jorge", "Pablo",
];
const FEMALE_NAMES: &[&str] = &[
    "María", "Laura", "Ana", "Carmen", "Isabel", "Marta", "Elena", "Lucía", "Sofía", "Julia",
    "Paula", "Raquel", "Patricia", "Rosa", "Teresa",
];
const LAST_NAMES: &[&str] = &[
    "García", "Rodríguez", "González", "Fernández", "López", "Martínez", "Sánchez", "Pérez",
    "Gómez", "Martin", "Jiménez", "Ruiz", "Hernández", "Díaz", "Moreno",
];
const BRANDS: &[&str] = &[
    "Coca-Cola", "Ford", "Movistar", "Iberia", "Bimbo", "MediaMarkt", "Zara", "Spotify", "Fanta",
    "Vinted", "Wallapop", "Banco Santander", "Mapfre", "Allianz", "Nestlé", "Amazon", "Google",
    "Samsung", "Apple", "Nike",
];
const VOICE_TYPES: &[&str] = &[
    "Corporativa", "Cálida", "Enérgica", "Rasgada", "Institucional", "Dulce", "Sensual",
    "Autoritaria", "Amigable", "Narrativa",
];
const DEMO_SAMPLES: &[&str] = &[
    "https://actions.google.com/sounds/v1/speech/corporate_lorem_ipsum.ogg",
    "https://www2.cs.uic.edu/~i101/SoundFiles/StarWars3.wav",
    "https://www2.cs.uic.edu/~i101/SoundFiles/CantinaBand3.wav",
    "https://www2.cs.uic.edu/~i101/SoundFiles/PinkPanther30.wav",
];

fn pick<'a>(rng: &mut StdRng, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Generate `count` talents with the default seed
pub fn mock_talents(count: usize) -> Vec<TalentProfile> {
    mock_talents_seeded(count, DEFAULT_SEED)
}

pub fn mock_talents_seeded(count: usize, seed: u64) -> Vec<TalentProfile> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let is_male = rng.gen_bool(0.5);
            let first_name = pick(&mut rng, if is_male { MALE_NAMES } else { FEMALE_NAMES });
            let last_name = pick(&mut rng, LAST_NAMES);
            let age_range = AgeLabel::ALL[rng.gen_range(0..AgeLabel::ALL.len())];
            let voice = pick(&mut rng, VOICE_TYPES);
            let avatar_kind = if is_male { "men" } else { "women" };

            TalentProfile {
                id: format!("t{}", i + 1),
                name: format!("{} {}", first_name, last_name),
                email: format!("{}.{}@vo.com", first_name.to_lowercase(), last_name.to_lowercase()),
                avatar_url: Some(format!(
                    "https://randomuser.me/api/portraits/{}/{}.jpg",
                    avatar_kind,
                    i % 99
                )),
                gender: if is_male { Gender::Male } else { Gender::Female },
                age_range,
                description: format!(
                    "Locutor profesional con rango de edad {}. Voz {}.",
                    age_range, voice
                ),
                demos: vec![Demo {
                    title: "Demo Comercial".to_string(),
                    url: pick(&mut rng, DEMO_SAMPLES).to_string(),
                    tags: vec!["Comercial".to_string(), "TV".to_string()],
                }],
                languages: vec!["Español (Neutro)".to_string(), "Español (España)".to_string()],
                rating: (40.0 + rng.gen_range(0.0..10.0_f64)).round() / 10.0,
                regular_brands: vec![pick(&mut rng, BRANDS).to_string()],
                past_brands: vec![pick(&mut rng, BRANDS).to_string(), pick(&mut rng, BRANDS).to_string()],
                dubbing_actors: vec![],
            }
        })
        .collect()
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn role(id: &str, name: &str, description: &str, gender: &str, age_range: &str, voice_type: &str) -> CastingRole {
    CastingRole {
        id: id.to_string(),
        spec: RoleSpec {
            name: name.to_string(),
            description: description.to_string(),
            gender: gender.to_string(),
            age_range: age_range.to_string(),
            voice_type: voice_type.to_string(),
        },
        suggested_talent_ids: vec![],
        selected_talent_id: None,
    }
}

/// The three sample projects shown on first start
pub fn mock_projects() -> Vec<CastingProject> {
    vec![
        CastingProject {
            id: "p1".to_string(),
            title: "Campaña Verano 2025".to_string(),
            client_id: "c1".to_string(),
            client_name: "Agencia Creativa 360".to_string(),
            brand: None,
            status: ProjectStatus::Open,
            created_at: date(2024, 10, 15),
            description: "Anuncio de cerveza para TV y Redes.".to_string(),
            roles: vec![
                role("r1", "Protagonista", "Chico joven en la playa", "Masculino", "20-30", "Fresco, alegre"),
                role("r2", "Narrador", "Voz de marca final", "Masculino", "30-40", "Profundo, seductor"),
            ],
        },
        CastingProject {
            id: "p2".to_string(),
            title: "Documental Naturaleza".to_string(),
            client_id: "c2".to_string(),
            client_name: "NatGeo Local".to_string(),
            brand: None,
            status: ProjectStatus::Completed,
            created_at: date(2024, 9, 1),
            description: "Documental sobre la fauna ibérica.".to_string(),
            roles: vec![role(
                "r3",
                "Narrador Principal",
                "Estilo clásico documental",
                "Cualquiera",
                "40-50",
                "Sereno, educativo",
            )],
        },
        CastingProject {
            id: "p3".to_string(),
            title: "Spot Corporativo Tech".to_string(),
            client_id: "c3".to_string(),
            client_name: "Innovate SA".to_string(),
            brand: None,
            status: ProjectStatus::Open,
            created_at: date(2024, 11, 20),
            description: "Video interno para convención de ventas.".to_string(),
            roles: vec![role(
                "r4",
                "Voz Institucional",
                "Voz que inspire confianza y futuro",
                "Femenino",
                "30-40",
                "Cálida, Tecnológica",
            )],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(mock_talents_seeded(30, 7), mock_talents_seeded(30, 7));
    }

    #[test]
    fn test_talent_shape() {
        for (i, talent) in mock_talents(50).iter().enumerate() {
            assert_eq!(talent.id, format!("t{}", i + 1));
            assert_ne!(talent.gender, Gender::Any);
            assert!(talent.description.contains(talent.age_range.label()));
            assert!(talent.rating >= 4.0 && talent.rating <= 5.0);
            assert_eq!(talent.demos.len(), 1);
        }
    }

    #[test]
    fn test_mock_projects() {
        let projects = mock_projects();
        assert_eq!(projects.len(), 3);
        assert_eq!(projects[2].roles[0].spec.voice_type, "Cálida, Tecnológica");
        assert_eq!(projects[0].created_at.to_rfc3339(), "2024-10-15T00:00:00+00:00");
    }
}
