//! First-class equality and ordering values.
//!
//! - [`Equiv`]: a pairwise equivalence test as a value
//! - [`Order`]: a total order as a value, with the full derived combinator set
//!   (predicates, `min`/`max`, `clamp`, `between`, `contramap`, duals,
//!   lexicographic combination)
//! - [`tuple2`]/[`tuple3`]/[`tuple4`]: lexicographic orders on fixed-size
//!   tuples
//!
//! The three-way comparison result is [`std::cmp::Ordering`]; its
//! first-non-equal-wins combination rule is the `Semigroup` instance in
//! [`crate::typeclass`].
//!
//! # Examples
//!
//! ```rust
//! use kleisli::order::{tuple2, Order};
//! use std::cmp::Ordering;
//!
//! let order = tuple2(Order::<&str>::natural(), Order::<i32>::natural());
//! assert_eq!(order.compare(&("a", 1), &("a", 2)), Ordering::Less);
//! ```

mod eq;
mod ord;

pub use eq::Equiv;
pub use ord::{Order, tuple2, tuple3, tuple4};
