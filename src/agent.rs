//! The value types a round operates on: [`Category`], the five-state health
//! scale, and [`Agent`], a named member of the population.
//!
//! Both are plain immutable values. Nothing in this crate ever mutates an
//! agent in place; a transformation derives a new `Agent` carrying the same
//! name, so name preservation holds by construction.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::error::MingleError;

/// The health state of an agent, ordered by severity.
///
/// `Cure` is the least severe state and `Dead` the most severe; the derived
/// ordering follows severity, so `Category::Cure < Category::Dead`. Severity
/// ranks run 1 through 5 and are exposed only through
/// [`severity`](Category::severity) and
/// [`from_severity`](Category::from_severity); stepping along the scale goes
/// through [`improved`](Category::improved) and
/// [`worsened`](Category::worsened), which spell out the adjacency rather
/// than doing arithmetic on the discriminant.
#[derive(Deserialize, Serialize, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, EnumIter, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Cure,
    Healthy,
    Sick,
    Dying,
    Dead,
}

impl Category {
    /// The severity rank of this category, `Cure` = 1 through `Dead` = 5.
    #[must_use]
    pub fn severity(self) -> u8 {
        match self {
            Category::Cure => 1,
            Category::Healthy => 2,
            Category::Sick => 3,
            Category::Dying => 4,
            Category::Dead => 5,
        }
    }

    /// Looks up the category with the given severity rank.
    ///
    /// # Errors
    /// `MingleError::InvalidCategory` if `severity` is outside `1..=5`. Out of
    /// range ranks are never clamped to an end of the scale.
    pub fn from_severity(severity: u8) -> Result<Category, MingleError> {
        match severity {
            1 => Ok(Category::Cure),
            2 => Ok(Category::Healthy),
            3 => Ok(Category::Sick),
            4 => Ok(Category::Dying),
            5 => Ok(Category::Dead),
            _ => Err(MingleError::InvalidCategory(severity)),
        }
    }

    /// Whether an agent in this category sits out meetings entirely.
    #[must_use]
    pub fn is_bystander(self) -> bool {
        matches!(self, Category::Healthy | Category::Dead)
    }

    /// Whether an agent in this category pairs off and meets.
    #[must_use]
    pub fn is_active(self) -> bool {
        !self.is_bystander()
    }

    /// The adjacent category one step toward lower severity.
    ///
    /// # Errors
    /// `MingleError::CategoryBounds` on `Cure`, which has no lower neighbor.
    /// The absorbing behavior of a cured agent lives in
    /// [`cure`](crate::meeting::cure), not here.
    pub fn improved(self) -> Result<Category, MingleError> {
        match self {
            Category::Cure => Err(MingleError::CategoryBounds(
                "no category below CURE".to_string(),
            )),
            Category::Healthy => Ok(Category::Cure),
            Category::Sick => Ok(Category::Healthy),
            Category::Dying => Ok(Category::Sick),
            Category::Dead => Ok(Category::Dying),
        }
    }

    /// The adjacent category one step toward higher severity.
    ///
    /// # Errors
    /// `MingleError::CategoryBounds` on `Dead`, which has no higher neighbor.
    pub fn worsened(self) -> Result<Category, MingleError> {
        match self {
            Category::Cure => Ok(Category::Healthy),
            Category::Healthy => Ok(Category::Sick),
            Category::Sick => Ok(Category::Dying),
            Category::Dying => Ok(Category::Dead),
            Category::Dead => Err(MingleError::CategoryBounds(
                "no category above DEAD".to_string(),
            )),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Category::Cure => "CURE",
            Category::Healthy => "HEALTHY",
            Category::Sick => "SICK",
            Category::Dying => "DYING",
            Category::Dead => "DEAD",
        };
        write!(f, "{name}")
    }
}

/// A member of the population: a name and a current health category.
///
/// The name is an opaque identifier; the crate never interprets it. Fields
/// are private and [`with_category`](Agent::with_category) is the only way to
/// derive a changed agent, so a transformation cannot touch the name.
#[derive(Deserialize, Serialize, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Agent {
    name: String,
    category: Category,
}

impl Agent {
    pub fn new(name: impl Into<String>, category: Category) -> Agent {
        Agent {
            name: name.into(),
            category,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// A copy of this agent re-categorized, keeping the same name.
    #[must_use]
    pub fn with_category(&self, category: Category) -> Agent {
        Agent {
            name: self.name.clone(),
            category,
        }
    }

    /// Whether this agent sits out meetings.
    #[must_use]
    pub fn is_bystander(&self) -> bool {
        self.category.is_bystander()
    }

    /// Whether this agent pairs off and meets.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.category.is_active()
    }
}

impl Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.category)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::{Agent, Category};
    use crate::error::MingleError;

    #[test]
    fn severity_ranks_round_trip() {
        for category in Category::iter() {
            let round_tripped = Category::from_severity(category.severity()).unwrap();
            assert_eq!(round_tripped, category);
        }
    }

    #[test]
    fn from_severity_rejects_out_of_range() {
        assert!(matches!(
            Category::from_severity(0),
            Err(MingleError::InvalidCategory(0))
        ));
        assert!(matches!(
            Category::from_severity(6),
            Err(MingleError::InvalidCategory(6))
        ));
    }

    #[test]
    fn ordering_follows_severity() {
        assert!(Category::Cure < Category::Healthy);
        assert!(Category::Healthy < Category::Sick);
        assert!(Category::Sick < Category::Dying);
        assert!(Category::Dying < Category::Dead);
    }

    #[test]
    fn improved_and_worsened_are_adjacent_steps() {
        for category in Category::iter() {
            if let Ok(better) = category.improved() {
                assert_eq!(better.severity(), category.severity() - 1);
            }
            if let Ok(worse) = category.worsened() {
                assert_eq!(worse.severity(), category.severity() + 1);
            }
        }
    }

    #[test]
    fn improved_errors_at_the_floor() {
        assert!(matches!(
            Category::Cure.improved(),
            Err(MingleError::CategoryBounds(_))
        ));
    }

    #[test]
    fn worsened_errors_at_the_ceiling() {
        assert!(matches!(
            Category::Dead.worsened(),
            Err(MingleError::CategoryBounds(_))
        ));
    }

    #[test]
    fn bystander_classification() {
        assert!(Category::Healthy.is_bystander());
        assert!(Category::Dead.is_bystander());
        assert!(Category::Cure.is_active());
        assert!(Category::Sick.is_active());
        assert!(Category::Dying.is_active());
    }

    #[test]
    fn with_category_keeps_the_name() {
        let agent = Agent::new("patient-0", Category::Sick);
        let worse = agent.with_category(Category::Dying);
        assert_eq!(worse.name(), "patient-0");
        assert_eq!(worse.category(), Category::Dying);
        // The original is untouched.
        assert_eq!(agent.category(), Category::Sick);
    }

    #[test]
    fn categories_serialize_in_uppercase() {
        assert_eq!(
            serde_json::to_string(&Category::Sick).unwrap(),
            "\"SICK\""
        );
        let parsed: Category = serde_json::from_str("\"DYING\"").unwrap();
        assert_eq!(parsed, Category::Dying);
    }

    #[test]
    fn agent_display_shows_name_and_category() {
        let agent = Agent::new("A", Category::Cure);
        assert_eq!(agent.to_string(), "A [CURE]");
    }
}
