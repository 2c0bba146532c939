pub mod result_relay;
pub mod threaded_pipeline_executor;
