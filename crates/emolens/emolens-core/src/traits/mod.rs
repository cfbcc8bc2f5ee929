mod fusion;
mod perception;
mod sink;
mod trend;

pub use fusion::IFusionEngine;
pub use perception::IPerceptionModel;
pub use sink::IEventSink;
pub use trend::ITrendTracker;
