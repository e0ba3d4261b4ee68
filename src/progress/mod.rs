//! Progress reporting for feedback runs

mod handler;
mod logging;
mod spinner;

pub use handler::{CompositeHandler, NoOpHandler, ProgressEvent, ProgressHandler};
pub use logging::LoggingHandler;
pub use spinner::SpinnerHandler;
