pub mod hit;

pub use hit::{HIT_RADIUS, find_node_near};
