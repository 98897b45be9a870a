pub mod cli;
pub mod dictionary;
pub mod i18n;
pub mod locale;
pub mod ops;
pub mod registry;
pub mod source;

pub use dictionary::MessageDictionary;
pub use locale::LocaleCode;
pub use registry::{InitOptions, LocaleRegistry};
