pub mod auth_gate;
pub mod request_trace;
pub mod structured_logger;

pub use auth_gate::AuthGate;
pub use request_trace::{RequestId, RequestTrace};
pub use structured_logger::StructuredLogger;
