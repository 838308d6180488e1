//! Application services - orchestrate use cases.
//!
//! Services sequence the ports to accomplish the two use cases of a run:
//! "collect answers" and "materialize then install".

pub mod answer_collector;
pub mod scaffold_pipeline;

pub use answer_collector::AnswerCollector;
pub use scaffold_pipeline::{
    MaterializationFailurePolicy, PipelineSettings, ScaffoldPipeline, ScaffoldReport,
};
