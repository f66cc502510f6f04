#[macro_use]
pub mod macros;
pub mod band;
pub mod time;
pub mod timeline;

pub use band::*;
pub use time::*;
pub use timeline::*;
