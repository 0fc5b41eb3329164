//! ZX Spectrum TAP tape-image writer.
//!
//! Converts an arbitrary binary payload into a `.tap` byte stream the
//! Spectrum ROM loader understands: a header block (flag $00, 17 bytes of
//! metadata) followed by a data block (flag $FF, the payload). Each block
//! is a 2-byte little-endian length word, the flag byte, the payload, and
//! a checksum byte (XOR of flag + data).
//!
//! ```
//! use data2tap::Data2tap;
//!
//! let tap = Data2tap::code("screen", 0x4000, vec![0u8; 6912])
//!     .assemble()
//!     .expect("valid conversion");
//! // Header block (21 bytes) then data block (payload + 4 bytes).
//! assert_eq!(tap.len(), 21 + 6912 + 4);
//! ```

mod address;
mod block;
mod body;
mod convert;
mod data_text;
mod error;
mod header;
mod model;

pub use address::{MemoryAddress, parse_address, validate_address};
pub use block::{DATA_FLAG, HEADER_FLAG, TapBlockWriter};
pub use body::TapBody;
pub use convert::Data2tap;
pub use data_text::{Radix, parse_data_text, split_data_text};
pub use error::Data2tapError;
pub use header::{TapBlockType, TapHeader};
pub use model::ZxModel;
