mod params;
mod types;

pub use params::{ArgItem, Param};
pub use types::{NamedType, Type};
