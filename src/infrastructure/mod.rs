// Infrastructure layer - Configuration, in-process surface and HTTP encoding
pub mod config;
pub mod event_stream;
pub mod http_response;
pub mod memory_surface;
