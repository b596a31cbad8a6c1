pub mod band;
pub mod risk;

pub use band::*;
pub use risk::*;
