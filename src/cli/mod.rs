pub mod batch;
pub mod output;
