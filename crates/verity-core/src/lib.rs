pub mod errors;
pub mod outcome;
pub mod rules;
pub mod validator;

pub use errors::RuleError;
pub use outcome::{DEFAULT_MESSAGE, Outcome};
pub use rules::Pattern;
pub use validator::Validator;
