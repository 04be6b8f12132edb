// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Head-tracked parallax window core.
//!
//! Holowin turns a normalized head-pose signal (from an external face
//! tracker) into an off-axis (asymmetric) perspective projection, so a
//! rendered scene behaves like a physically consistent window as the
//! viewer moves. It also owns the interactively manipulable transform of
//! the displayed model (drag-rotate, pan, scroll dolly, auto-fit on load).
//!
//! # Key entry points
//!
//! - [`engine::HolowinEngine`] - per-frame orchestration
//! - [`camera::controller::HeadTrackedCamera`] - pose smoothing + off-axis
//!   projection
//! - [`model::controller::TransformController`] - interactive model
//!   transform with domain clamps
//! - [`options::Options`] - runtime configuration with TOML preset support
//!
//! # Architecture
//!
//! Everything runs on one cooperative execution context: a free-running
//! render loop polls the latest [`tracking::HeadPose`] once per frame and
//! calls [`engine::HolowinEngine::advance_frame`], which returns a fresh
//! immutable [`camera::CameraFrame`] for the external renderer to adopt.
//! Pointer events arrive between frames as [`input::InputEvent`]s, are
//! interpreted by [`input::InputProcessor`] into
//! [`engine::HolowinCommand`]s, and commit whole-value transform updates —
//! the render step never observes half-written state.
//!
//! Rendering itself (meshes, materials, lighting, the draw call) and
//! head-pose estimation are external collaborators; this crate only
//! computes camera parameters and model transforms.

pub mod camera;
pub mod engine;
mod error;
pub mod input;
pub mod model;
pub mod options;
pub mod tracking;

pub use error::HolowinError;
