mod config;
pub use config::RequestConfig;

mod future;
pub use future::CancelableRequestFuture;
