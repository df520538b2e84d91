// crates/shared-kernel/src/value_objects/mod.rs
pub mod accuracy;
pub mod counts;
pub mod identifiers;

pub use accuracy::Accuracy;
pub use counts::TokenCount;
pub use identifiers::{LangCode, ModelId};
