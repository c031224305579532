pub mod generic;
pub mod numeric;
pub mod pattern;
pub mod string;

pub use generic::{IsInCheck, NotEmpty};
pub use numeric::{NumericRule, Range};
pub use pattern::Pattern;
pub use string::{RegexMatch, StringLengthCheck, StringRule};
