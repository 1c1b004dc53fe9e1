mod collision;
mod collisions;

pub use collision::Collision;
pub use collisions::{load_collisions, Collisions};
