//! Core catalog engine.
//!
//! The pipeline runs in three strictly ordered stages:
//!
//! 1. **Walk** (`walker`): parse every matched source file and extract a
//!    [`Component`] from each annotated top-level declaration, in file order
//!    then declaration order.
//! 2. **Relocate** (`assets`): copy every referenced image into the build
//!    tree under a unique name, concurrently, and rewrite the records.
//!    Rendering never observes a partially relocated list.
//! 3. **Render** (`render`): feed the final list to the template.

pub mod assets;
pub mod component;
pub mod extract;
pub mod render;
pub mod walker;

pub use component::Component;
