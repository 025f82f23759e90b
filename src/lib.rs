//! A fault-tolerant movie playlist file (MPLS) decoder.
//!
//! The entry point into this crate is the [`decode`] function. It turns a
//! complete in-memory MPLS file into an [`Mpls`] tree, along with a list of
//! [`Warning`]s for every format deviation that didn't stop the decode:
//! an unexpected version, a clip that is not `M2TS`, an unknown stream
//! coding type, or a record that doesn't end where its declared length says
//! it should. Truncated input and a wrong magic number are fatal; the
//! returned [`DecodeFailure`] still carries whatever was decoded up to that
//! point.
//!
//! If you don't care about the warnings, [`Mpls::from`] and [`Mpls::parse`]
//! give you just the playlist. Warnings are logged through [`tracing`]
//! either way.
//!
//! For the basic tasks of extracting the playlist angles, segments and
//! duration, this crate provides easy-to-use helper methods (see the example
//! below). Beyond that it only provides a structured form of the playlist
//! data.
//!
//! The MPLS file format seems to not be officially documented. Refer to the
//! third-party file specs in the [lw/BluRay] repository as well as the
//! [bdinfo/mpls] Wikibooks page for more in-depth information.
//!
//! [`decode`]: fn.decode.html
//! [`Mpls`]: types/struct.Mpls.html
//! [`Mpls::from`]: types/struct.Mpls.html#method.from
//! [`Mpls::parse`]: types/struct.Mpls.html#method.parse
//! [`Warning`]: diagnostics/enum.Warning.html
//! [`DecodeFailure`]: error/struct.DecodeFailure.html
//! [`tracing`]: https://docs.rs/tracing
//! [lw/BluRay]: https://github.com/lw/BluRay/wiki/MPLS
//! [bdinfo/mpls]: https://en.wikibooks.org/wiki/User:Bdinfo/mpls
//!
//! # Examples
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("00800.mpls")?;
//!
//! let decoded = mpls_inspect::decode(&bytes)?;
//! for warning in &decoded.warnings {
//!     eprintln!("warning: {}", warning);
//! }
//!
//! let mpls = decoded.mpls;
//! println!("duration: {:?}", mpls.duration());
//! for angle in mpls.angles() {
//!     let segments: Vec<&str> = angle
//!         .segments()
//!         .iter()
//!         .map(|s| s.file_name.as_str())
//!         .collect();
//!     println!("angle {}: {}", angle, segments.join(","));
//! }
//! # Ok(())
//! # }
//! ```
#![doc(html_root_url = "https://docs.rs/mpls-inspect/0.1.0")]

pub mod diagnostics;
pub mod error;
mod parser;
pub mod reader;
pub mod types;

pub use diagnostics::{Record, Warning};
pub use error::{DecodeError, DecodeFailure, MplsError, Stage};
pub use parser::{decode, Decoded};
pub use types::*;
