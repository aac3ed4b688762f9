pub mod error;
pub mod settings;
pub mod visitor;
pub mod word_count;
pub mod xml_export;

pub use error::*;
pub use settings::*;
pub use visitor::*;
pub use word_count::*;
pub use xml_export::*;
