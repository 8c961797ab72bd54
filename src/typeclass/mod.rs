//! Type class traits for functional programming abstractions.
//!
//! This module provides the capability contracts the rest of the crate is
//! built on:
//!
//! - [`TypeConstructor`]: GAT-based emulation of higher-kinded types
//! - [`Functor`]: Mapping over a value in a context
//! - [`Applicative`]: Lifting values and combining independent computations
//! - [`Monad`]: Sequencing dependent computations
//! - [`Semigroup`]: Associative binary operations
//! - [`Identity`]: The identity functor, base case for transformer stacks
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. This crate uses Generic Associated
//! Types to abstract over type constructors, which also absorbs the question
//! of how many extra type parameters a constructor carries: `Option<_>`
//! carries none, `Result<_, E>` carries one, and all of them flow through the
//! same generic code.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::{Applicative, Monad};
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! let y = x.flat_map(|n| if n > 0 { Some(n) } else { None });
//! assert_eq!(y, Some(42));
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;
mod semigroup;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use semigroup::Semigroup;
