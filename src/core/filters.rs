use crate::core::normalizer::{normalize_age_label, normalize_gender};
use crate::models::{AgeLabel, Gender, RoleSpec, TalentProfile};

/// Normalized constraints of a role, computed once per match call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleConstraints {
    pub gender: Gender,
    /// Empty means no age constraint
    pub age_labels: &'static [AgeLabel],
}

impl RoleConstraints {
    pub fn from_role(role: &RoleSpec) -> Self {
        Self {
            gender: normalize_gender(&role.gender),
            age_labels: normalize_age_label(&role.age_range),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.gender == Gender::Any && self.age_labels.is_empty()
    }
}

/// Check the role's gender requirement against a talent
#[inline]
pub fn matches_gender(talent: &TalentProfile, constraints: &RoleConstraints) -> bool {
    constraints.gender.is_compatible_with(talent.gender)
}

/// Check the role's age requirement against a talent
#[inline]
pub fn matches_age(talent: &TalentProfile, constraints: &RoleConstraints) -> bool {
    constraints.age_labels.is_empty() || constraints.age_labels.contains(&talent.age_range)
}

/// Check if a talent may fill a role
///
/// Both checks must pass. There is no partial credit at this stage.
#[inline]
pub fn is_eligible(talent: &TalentProfile, constraints: &RoleConstraints) -> bool {
    matches_gender(talent, constraints) && matches_age(talent, constraints)
}

/// Keep the talents of the pool that are eligible for the role, in pool order
pub fn filter_eligible<'a>(role: &RoleSpec, pool: &'a [TalentProfile]) -> Vec<&'a TalentProfile> {
    let constraints = RoleConstraints::from_role(role);

    pool.iter()
        .filter(|talent| is_eligible(talent, &constraints))
        .collect()
}
