//! The meeting rule: how a pair of active agents resolves an encounter.
//!
//! A meeting affects both participants the same way. If either side carries
//! the cure, both agents are cured; otherwise both are sickened. Either way
//! each agent steps from its own prior category, so the two outcomes can
//! differ even though the effect kind is shared.

use crate::agent::{Agent, Category};
use crate::error::MingleError;
use crate::log::trace;

/// Resolves the meeting between two active agents, returning their updated
/// values in the same order.
///
/// # Errors
/// `MingleError::CategoryBounds` if a step runs off the category scale. That
/// only happens when a `Dead` agent is passed in, which the round's partition
/// step rules out.
pub fn meet(first: &Agent, second: &Agent) -> Result<(Agent, Agent), MingleError> {
    if first.category() == Category::Cure || second.category() == Category::Cure {
        trace!("{first} meets {second}: curing both");
        Ok((cure(first)?, cure(second)?))
    } else {
        trace!("{first} meets {second}: sickening both");
        Ok((sicken(first)?, sicken(second)?))
    }
}

/// Moves an agent one step toward lower severity.
///
/// `Cure` is an absorbing floor: an agent already carrying the cure comes
/// back unchanged rather than stepping below the scale.
///
/// # Errors
/// None in practice; the floor is checked before stepping. The `Result` is
/// kept so a bounds violation could never pass silently.
pub fn cure(agent: &Agent) -> Result<Agent, MingleError> {
    if agent.category() == Category::Cure {
        return Ok(agent.clone());
    }
    Ok(agent.with_category(agent.category().improved()?))
}

/// Moves an agent one step toward higher severity.
///
/// # Errors
/// `MingleError::CategoryBounds` on a `Dead` agent. Nothing lies past `Dead`,
/// and a `Dead` agent reaching this point means the caller skipped the
/// partition step.
pub fn sicken(agent: &Agent) -> Result<Agent, MingleError> {
    Ok(agent.with_category(agent.category().worsened()?))
}

#[cfg(test)]
mod tests {
    use super::{cure, meet, sicken};
    use crate::agent::{Agent, Category};
    use crate::error::MingleError;

    #[test]
    fn cure_is_absorbing_at_the_floor() {
        let carrier = Agent::new("carrier", Category::Cure);
        let cured = cure(&carrier).unwrap();
        assert_eq!(cured, carrier);
    }

    #[test]
    fn cure_steps_one_toward_lower_severity() {
        let dying = Agent::new("D", Category::Dying);
        assert_eq!(cure(&dying).unwrap().category(), Category::Sick);

        let sick = Agent::new("S", Category::Sick);
        assert_eq!(cure(&sick).unwrap().category(), Category::Healthy);

        let healthy = Agent::new("H", Category::Healthy);
        assert_eq!(cure(&healthy).unwrap().category(), Category::Cure);
    }

    #[test]
    fn sicken_steps_one_toward_higher_severity() {
        let carrier = Agent::new("C", Category::Cure);
        assert_eq!(sicken(&carrier).unwrap().category(), Category::Healthy);

        let sick = Agent::new("S", Category::Sick);
        assert_eq!(sicken(&sick).unwrap().category(), Category::Dying);

        let dying = Agent::new("D", Category::Dying);
        assert_eq!(sicken(&dying).unwrap().category(), Category::Dead);
    }

    #[test]
    fn sicken_fails_loudly_on_dead() {
        let dead = Agent::new("gone", Category::Dead);
        assert!(matches!(
            sicken(&dead),
            Err(MingleError::CategoryBounds(_))
        ));
    }

    #[test]
    fn meeting_with_a_carrier_cures_both() {
        let carrier = Agent::new("carrier", Category::Cure);
        let sick = Agent::new("patient", Category::Sick);

        let (first, second) = meet(&carrier, &sick).unwrap();
        assert_eq!(first, Agent::new("carrier", Category::Cure));
        assert_eq!(second, Agent::new("patient", Category::Healthy));

        // The rule is symmetric in which side carries the cure.
        let (first, second) = meet(&sick, &carrier).unwrap();
        assert_eq!(first, Agent::new("patient", Category::Healthy));
        assert_eq!(second, Agent::new("carrier", Category::Cure));
    }

    #[test]
    fn meeting_without_a_carrier_sickens_both() {
        let one = Agent::new("one", Category::Sick);
        let other = Agent::new("other", Category::Dying);

        let (first, second) = meet(&one, &other).unwrap();
        assert_eq!(first.category(), Category::Dying);
        assert_eq!(second.category(), Category::Dead);
    }

    #[test]
    fn meeting_leaves_the_originals_untouched() {
        let one = Agent::new("one", Category::Sick);
        let other = Agent::new("other", Category::Sick);

        let _ = meet(&one, &other).unwrap();
        assert_eq!(one.category(), Category::Sick);
        assert_eq!(other.category(), Category::Sick);
    }
}
