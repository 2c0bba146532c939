pub mod infrastructure;
pub mod pipeline_executor;
