//! A library for modeling one round of pairwise meetings in a population of
//! agents with health states.
//!
//! Every agent holds a [`Category`], a five-state scale ordered by severity:
//! `Cure`, `Healthy`, `Sick`, `Dying`, `Dead`. One call to [`process_round`]
//! takes a population listing and returns the next one:
//! * `Healthy` and `Dead` agents are bystanders; they never meet anyone and
//!   pass through the round unchanged.
//! * Everyone else pairs off two at a time in listing order. If either side
//!   of a pair carries the cure, both participants move one step toward lower
//!   severity; otherwise both move one step toward higher severity. An odd
//!   agent out is carried through untouched.
//!
//! The computation is a pure function over immutable values: agents are never
//! mutated in place, the population count is conserved, and independent
//! snapshots can be processed concurrently without coordination. Anything
//! beyond the single round, such as iterating rounds or presenting results,
//! belongs to the surrounding driver.
//!
//! ```
//! use mingle::prelude::*;
//!
//! let population = vec![
//!     Agent::new("A", Category::Cure),
//!     Agent::new("B", Category::Sick),
//!     Agent::new("C", Category::Healthy),
//!     Agent::new("D", Category::Dying),
//! ];
//! let next_round = process_round(&population)?;
//! assert_eq!(
//!     next_round,
//!     vec![
//!         Agent::new("C", Category::Healthy),
//!         Agent::new("A", Category::Cure),
//!         Agent::new("B", Category::Healthy),
//!         Agent::new("D", Category::Dying),
//!     ]
//! );
//! # Ok::<(), MingleError>(())
//! ```

pub mod agent;
pub mod error;
pub mod log;
pub mod meeting;
pub mod prelude;
pub mod round;

pub use crate::agent::{Agent, Category};
pub use crate::error::MingleError;
pub use crate::log::{disable_logging, enable_logging, set_log_level};
pub use crate::log::{debug, error, info, trace, warn};
pub use crate::meeting::{cure, meet, sicken};
pub use crate::round::process_round;
