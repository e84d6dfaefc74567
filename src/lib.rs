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

//! Interactive 2D editor core for inverse-kinematics bone trees.
//!
//! Users pick and drag effector goals (and the tree's root) with the
//! pointer; a solver updates the pose once per tick; the hierarchy renderer
//! draws the result every frame.
//!
//! # Key entry points
//!
//! - [`engine::EditorSession`] - owns the tree and runs input → solve → draw
//! - [`skeleton::BoneTree`] - the bone hierarchy and its effectors
//! - [`picking::PickController`] - hit-testing and drag state
//! - [`renderer::HierarchyRenderer`] - transform accumulation and drawing
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Coordinates
//!
//! Bones live in 3D, but only the Y and Z components reach the screen
//! (screen x = Y, screen y = Z). X is carried through untouched.
//!
//! ```
//! use glam::Vec3;
//! use ikedit::{
//!     BoneTree, DrawList, EditorSession, Effector, InputEvent, NullSolver,
//!     Options, Updateable,
//! };
//!
//! let mut tree = BoneTree::new(Vec3::ZERO);
//! let hand = tree.create_child(tree.root(), Vec3::new(0.0, 10.0, 0.0))?;
//! tree.attach_effector(hand, Effector::new(Vec3::new(0.0, 50.0, 60.0)))?;
//!
//! let mut session =
//!     EditorSession::new(tree, Options::default(), |_, _| NullSolver);
//! assert!(session.process_event(InputEvent::PointerDown { x: 50, y: 60 }));
//! session.update(1.0 / 60.0);
//!
//! let mut list = DrawList::new();
//! session.draw(&mut list);
//! # Ok::<(), ikedit::EditorError>(())
//! ```

pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod picking;
pub mod renderer;
pub mod skeleton;
pub mod solver;

pub use engine::{EditorSession, Updateable};
pub use error::EditorError;
pub use input::{InputEvent, MouseButton, PointerTracker};
pub use options::Options;
pub use picking::{Grab, PickController};
pub use renderer::{DrawList, HierarchyRenderer, Surface};
pub use skeleton::{BoneId, BoneTree, Effector, EffectorIndex};
pub use solver::{CcdSolver, NullSolver, Solver};
