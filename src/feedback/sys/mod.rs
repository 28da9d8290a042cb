//! Build-time selection of the feedback service implementation.
//!
//! Device classes with a native feedback service enable the `haptics`
//! feature and get the real backend; everything else gets a stub that
//! performs no native calls and probes as unsupported.

#[cfg(feature = "haptics")]
mod device;
#[cfg(feature = "haptics")]
pub use device::DeviceFeedback as PlatformFeedback;

#[cfg(not(feature = "haptics"))]
mod unsupported;
#[cfg(not(feature = "haptics"))]
pub use unsupported::UnsupportedFeedback as PlatformFeedback;
