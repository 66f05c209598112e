//! Core library for generating comparison test clips and marshalling video
//! pairs for the side-by-side comparison slider.
//!
//! This crate provides two independent pieces:
//! - a generator that drives ffmpeg to produce solid-color clips with a
//!   frame counter ([`generate`]);
//! - an adapter that converts a pair of optional video references to and from
//!   the slider's transfer payload ([`payload::encode`], [`payload::decode`]).
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vidslider_core::config::RenderParams;
//! use vidslider_core::external::{EncoderLocation, SidecarSpawner};
//! use vidslider_core::payload::{VideoPair, VideoRef, encode};
//! use vidslider_core::generate;
//!
//! let encoder = EncoderLocation::system().probe();
//! let params = RenderParams::builder().duration_secs(2.0).build().unwrap();
//!
//! let green = generate(&SidecarSpawner, &encoder, "green", "green.mp4", &params).unwrap();
//! let red = generate(&SidecarSpawner, &encoder, "255,0,0", "red.mp4", &params).unwrap();
//!
//! let pair = VideoPair::new(Some(VideoRef::Path(green)), Some(VideoRef::Path(red)));
//! let payload = encode(Some(&pair)).unwrap();
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod external;
pub mod generator;
pub mod invert;
pub mod payload;
pub mod temp_files;
pub mod utils;

// Re-exports for public API
pub use color::{Rgb, resolve_color};
pub use config::RenderParams;
pub use error::{CoreError, CoreResult};
pub use external::EncoderLocation;
pub use generator::{generate, generate_with_progress};
pub use invert::{invert, invert_pair};
pub use payload::{TransferPayload, VideoPair, VideoRef, decode, encode, encode_value};
pub use utils::{format_bytes, format_duration};
