//! Operation settings and their validation.

mod types;
mod validate;

pub use types::ClipSettings;
pub use validate::validate_settings;
