pub mod connectivity;
pub mod engine;
pub mod model;
pub mod scheduler;

pub use connectivity::is_connected;
pub use engine::{EngineState, MstEngine, MstStep, RunError, RunOutcome};
pub use model::{Edge, GraphStore, Node, NodeId, WEIGHT_MAX, WEIGHT_MIN};
pub use scheduler::{AnimationScheduler, STEP_DELAY_MS};
