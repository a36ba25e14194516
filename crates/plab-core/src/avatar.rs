//! Avatar glyph lookup from a persona's occupation and gender.
//!
//! Keyword groups are checked in a fixed priority order and the first group
//! with a matching keyword wins, so "designer & developer" resolves to the
//! designer glyph.

/// Glyph used when no occupation keyword matches.
pub const FALLBACK_GLYPH: &str = "👤";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presentation {
    Female,
    Male,
    Neutral,
}

struct Role {
    keywords: &'static [&'static str],
    female: &'static str,
    male: &'static str,
    neutral: &'static str,
}

impl Role {
    const fn glyph(&self, presentation: Presentation) -> &'static str {
        match presentation {
            Presentation::Female => self.female,
            Presentation::Male => self.male,
            Presentation::Neutral => self.neutral,
        }
    }
}

// Priority order: designer, developer, manager, marketer, student, teacher.
const ROLES: &[Role] = &[
    Role {
        keywords: &["designer", "디자이너", "디자인"],
        female: "👩‍🎨",
        male: "👨‍🎨",
        neutral: "🧑‍🎨",
    },
    Role {
        keywords: &["developer", "engineer", "programmer", "개발자", "엔지니어"],
        female: "👩‍💻",
        male: "👨‍💻",
        neutral: "🧑‍💻",
    },
    Role {
        keywords: &["manager", "매니저", "기획자"],
        female: "👩‍💼",
        male: "👨‍💼",
        neutral: "🧑‍💼",
    },
    Role {
        keywords: &["marketer", "marketing", "마케터", "마케팅"],
        female: "🙋‍♀️",
        male: "🙋‍♂️",
        neutral: "🙋",
    },
    Role {
        keywords: &["student", "학생", "대학생"],
        female: "👩‍🎓",
        male: "👨‍🎓",
        neutral: "🧑‍🎓",
    },
    Role {
        keywords: &["teacher", "교사", "선생", "강사"],
        female: "👩‍🏫",
        male: "👨‍🏫",
        neutral: "🧑‍🏫",
    },
];

fn presentation(gender: &str) -> Presentation {
    match gender.trim().to_lowercase().as_str() {
        "female" | "f" | "woman" | "여성" | "여" => Presentation::Female,
        "male" | "m" | "man" | "남성" | "남" => Presentation::Male,
        _ => Presentation::Neutral,
    }
}

/// Pick the avatar glyph for an occupation, gendered when the gender is known.
#[must_use]
pub fn glyph_for(occupation: &str, gender: &str) -> &'static str {
    let occupation = occupation.to_lowercase();
    ROLES
        .iter()
        .find(|role| role.keywords.iter().any(|kw| occupation.contains(kw)))
        .map_or(FALLBACK_GLYPH, |role| role.glyph(presentation(gender)))
}
