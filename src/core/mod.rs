pub mod errors;
pub mod helpers;
pub mod kv;
pub mod latency;
pub mod query_params;
pub mod seed;
