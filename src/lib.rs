pub mod error;
pub mod element;
pub mod copy;
pub mod buffer;

pub use buffer::Buffer;
pub use copy::{bulk_copy, element_copy, Strategy};
pub use element::Element;
pub use error::{Error, Result};

/// Element count of the demo buffers (64 MiB of `i32`).
pub const BUFFER_LEN: usize = 0x0100_0000;
