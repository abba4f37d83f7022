pub mod encoder;
pub mod finder;
pub mod table;

pub use crate::domain::model::{Attribute, Card};
pub use crate::domain::ports::SetFinder;
pub use crate::utils::error::Result;
