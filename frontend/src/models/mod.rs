//! Data models for the application

mod stream_handle;
mod surface;

pub use stream_handle::StreamHandle;
pub use surface::Surface;
