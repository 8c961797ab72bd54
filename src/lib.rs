//! # kleisli
//!
//! Algebraic type classes, first-class orderings, and generic monad
//! transformers for Rust.
//!
//! ## Overview
//!
//! This library provides the algebraic abstractions used to compose effectful
//! computations generically:
//!
//! - **Type Classes**: `Functor`, `Applicative`, `Monad`, `Semigroup`, built on
//!   a GAT-based emulation of higher-kinded types
//! - **Orderings**: first-class equality (`Equiv`) and total-order (`Order`)
//!   values with lexicographic combinators
//! - **Transformers**: `StateT` (state threading) and `ExceptT` (error
//!   short-circuiting) over *any* base monad, in a single generic
//!   implementation
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `order`: First-class equality and ordering values
//! - `transform`: Monad transformers (implies `typeclass`)
//!
//! ## Example
//!
//! ```rust
//! use kleisli::transform::StateT;
//!
//! // A stateful computation over the Option base monad
//! let step: StateT<i32, Option<(i32, i32)>> = StateT::new(|s| Some((s * 2, s + 1)));
//! assert_eq!(step.run(10), Some((20, 11)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kleisli::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "order")]
    pub use crate::order::*;

    #[cfg(feature = "transform")]
    pub use crate::transform::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "order")]
pub mod order;

#[cfg(feature = "transform")]
pub mod transform;
