pub use crate::agent::{Agent, Category};
pub use crate::error::MingleError;
pub use crate::log::{debug, error, info, trace, warn};
pub use crate::meeting::{cure, meet, sicken};
pub use crate::round::process_round;
