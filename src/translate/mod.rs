pub mod interface;
pub mod languages;
pub mod prompt;
pub mod translator;

pub use interface::*;
pub use languages::*;
pub use prompt::DEFAULT_DIRECTIVE_TEMPLATE;
pub use translator::Translator;
