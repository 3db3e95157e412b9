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
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
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
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive camera navigation for 3D viewports.
//!
//! navcam turns mouse and keyboard input into orbit, pan and dolly motions
//! of a viewport camera, optionally about a picked center of rotation
//! instead of the camera's focal point.
//!
//! # Key entry points
//!
//! - [`camera::NavigationController`] - the interaction state machine
//! - [`camera::CameraPose`] - the camera state it reads and writes
//! - [`camera::Viewport`] / [`camera::ViewportHost`] - what a host provides
//! - [`navigation`] - the pure orbit, pan and dolly algorithms
//! - [`options::Options`] - sensitivities and binding tables (TOML)
//!
//! # Architecture
//!
//! Input events enter [`camera::NavigationController::handle_event`],
//! which selects or validates a mode, runs the matching algorithm on the
//! viewport's current pose, and writes the result back through
//! [`camera::Viewport::apply_pose`] before requesting a redraw. Poses that
//! are not finite or have no usable view basis are never written.

pub mod camera;
pub mod error;
pub mod input;
pub mod interaction;
pub mod navigation;
pub mod options;

pub use camera::{CameraPose, NavigationController, Outcome};
pub use error::NavError;
