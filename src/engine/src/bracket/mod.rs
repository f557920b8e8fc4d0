pub mod resolver;
pub mod slot;
pub mod template;

pub use resolver::{ThirdPlaceAssignment, assign_third_place_slots};
pub use slot::BracketSlot;
pub use template::{BracketTemplate, RoundOf32Tie, ThirdPlaceSlot};
