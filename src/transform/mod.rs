//! Monad transformers - layering capabilities over an arbitrary base monad.
//!
//! A transformer takes any type implementing the
//! [`Monad`](crate::typeclass::Monad) contract and derives a new computation
//! type that adds one capability on top of it:
//!
//! - [`StateT`]: threads a mutable-by-value state through the computation
//! - [`ExceptT`]: adds a short-circuiting failure branch
//! - [`State`]: the pure, effect-free state computation `StateT` lifts from
//!
//! Each transformer is a single generic implementation. The base
//! constructor's extra type parameters — none for `Option`, an error slot for
//! `Result` — travel inside the base type itself, so no per-arity variants
//! exist; the derived transformer always has the same arity as its base.
//!
//! The transformers compose the base instance's `pure`, `fmap`, and
//! `flat_map` and never inspect its representation. They assume, without
//! verifying, that the base instance is lawful; a law-breaking base produces
//! law-breaking derived behavior.
//!
//! # Examples
//!
//! Stateful computation over a fallible base:
//!
//! ```rust
//! use kleisli::transform::StateT;
//!
//! fn pop() -> StateT<Vec<i32>, Result<(i32, Vec<i32>), String>> {
//!     StateT::new(|mut stack: Vec<i32>| match stack.pop() {
//!         Some(top) => Ok((top, stack)),
//!         None => Err("empty stack".to_string()),
//!     })
//! }
//!
//! let sum_two = pop().flat_map(|x| pop().fmap(move |y| x + y));
//! assert_eq!(sum_two.run(vec![1, 2, 3]), Ok((5, vec![1])));
//! assert_eq!(sum_two.run(vec![]), Err("empty stack".to_string()));
//! ```

mod except_transformer;
mod state;
mod state_transformer;

pub use except_transformer::ExceptT;
pub use state::State;
pub use state_transformer::StateT;
