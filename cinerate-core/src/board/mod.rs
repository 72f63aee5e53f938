//! Board domain: the rated list and its card widgets.

pub mod collector;
pub mod gate;
pub mod messages;
pub mod promote;
pub mod registry;
pub mod stars;
pub mod types;
pub mod update;

pub use self::messages::Message;
pub use self::registry::CardRegistry;
pub use self::stars::{STAR_COUNT, Star, StarRow};
pub use self::types::BoardState;
pub use self::update::update;
