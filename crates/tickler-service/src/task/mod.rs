//! Task scheduling around the recurrence engine.

mod model;
mod service;

pub use model::{Completion, Task};
pub use service::TaskScheduler;
