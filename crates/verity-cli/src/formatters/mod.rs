pub mod json;
pub mod stdout;

use anyhow::Result;
use verity_core::Validator;

pub use json::JsonFormatter;
pub use stdout::StdOutFormatter;

pub trait Reporter {
    fn on_start(&self);
    fn on_loading(&self, plan: &str);
    fn on_result(&mut self, plan: &str, validator: &Validator);
    fn on_complete(&self) -> Result<()>;
}
