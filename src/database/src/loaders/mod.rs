pub mod bracket;
pub mod groups;
pub mod head_to_head;
pub mod playoffs;
pub mod teams;

pub use bracket::BracketLoader;
pub use groups::GroupLoader;
pub use head_to_head::{HeadToHeadLoader, HeadToHeadRecord, HeadToHeadTable};
pub use playoffs::{PlayoffLoader, PlayoffSlot};
pub use teams::TeamLoader;
