// Declare all modules as public so they can be used by the binary and tests.
pub mod channel;
pub mod feedback;
pub mod host;

pub use channel::{MethodCall, Outcome, PlatformChannel};
pub use feedback::{FeedbackManager, ResultCode};
