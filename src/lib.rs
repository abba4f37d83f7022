pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, FindSetsConfig};
pub use config::TomlConfig;

pub use core::encoder::{image_filename, FilenameEncoder};
pub use core::finder::{
    BitLookup, FinderKind, GenerateAndTest, GenerateAndTestMod, ThirdCardLookup,
};
pub use core::table::Table;
pub use domain::model::{third_card_bits, Attribute, Card};
pub use domain::ports::SetFinder;
pub use utils::error::{CardError, Result};
