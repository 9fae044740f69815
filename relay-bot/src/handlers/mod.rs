//! Chain handlers: logging and relay dispatch.

mod logging;
mod relay_handler;

pub use logging::LoggingHandler;
pub use relay_handler::RelayHandler;
