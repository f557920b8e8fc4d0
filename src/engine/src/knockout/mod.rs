pub mod engine;
pub mod result;

pub use engine::KnockoutEngine;
pub use result::KnockoutStage;
