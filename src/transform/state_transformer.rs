//! `StateT` - state monad transformer.
//!
//! `StateT<S, M>` adds state threading to an arbitrary base monad. It wraps a
//! function `S -> M` where `M` is the base computation applied to a
//! `(result, next_state)` pair: given a state, produce the pair *within* the
//! base computation type.
//!
//! # Generic over the base monad
//!
//! There is exactly one implementation, constrained by the
//! [`Monad`](crate::typeclass::Monad) contract. The base computation's extra
//! type parameters — none for `Option`, an error slot for `Result`, or more —
//! ride along inside `M` and `M::WithType<_>`, so the same code serves base
//! constructors of any arity. The derived transformer necessarily has the
//! same arity as its base.
//!
//! The transformer only composes the base instance's operations; it never
//! inspects the base representation, and it assumes (never verifies) that the
//! base instance satisfies the monad laws.
//!
//! # Effect ordering
//!
//! Every combinator threads the state strictly left to right: `flat_map` runs
//! `self` against the incoming state and feeds the intermediate state to the
//! continuation; `apply` runs the function side first and its output state
//! feeds the argument side. Callers may rely on this ordering when the base
//! type makes effects observable.
//!
//! # Examples
//!
//! With `Option` as the base:
//!
//! ```rust
//! use kleisli::transform::StateT;
//!
//! let state: StateT<i32, Option<(i32, i32)>> = StateT::new(|s| Some((s * 2, s + 1)));
//! assert_eq!(state.run(10), Some((20, 11)));
//! ```
//!
//! With `Result` as the base:
//!
//! ```rust
//! use kleisli::transform::StateT;
//!
//! let state: StateT<i32, Result<(i32, i32), String>> = StateT::new(|s| Ok((s * 2, s + 1)));
//! assert_eq!(state.run(10), Ok((20, 11)));
//! ```

use std::rc::Rc;

use crate::typeclass::{Functor, Monad};

use super::state::State;

/// A monad transformer that adds state threading to a base monad.
///
/// `StateT<S, M>` represents a computation that, given an initial state of
/// type `S`, produces a result and a new state wrapped in the base monad.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `M`: The base monad applied to the pair, e.g. `Option<(A, S)>`,
///   `Result<(A, S), E>`, `Identity<(A, S)>`
///
/// # Examples
///
/// ```rust
/// use kleisli::transform::StateT;
///
/// fn increment() -> StateT<i32, Option<((), i32)>> {
///     StateT::modify(|count| count + 1)
/// }
///
/// let computation = increment()
///     .flat_map(|()| increment())
///     .flat_map(|()| StateT::<i32, Option<(i32, i32)>>::get());
///
/// assert_eq!(computation.run(0), Some((2, 2)));
/// ```
pub struct StateT<S, M>
where
    S: 'static,
{
    /// The wrapped state transition function.
    /// Uses Rc to allow cloning of the `StateT` for `flat_map`.
    run_function: Rc<dyn Fn(S) -> M>,
}

impl<S, M> StateT<S, M>
where
    S: 'static,
    M: 'static,
{
    /// Creates a new `StateT` from a state transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::StateT;
    ///
    /// let state: StateT<i32, Option<(i32, i32)>> = StateT::new(|s| Some((s * 2, s + 1)));
    /// assert_eq!(state.run(10), Some((20, 11)));
    /// ```
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> M + 'static,
    {
        Self {
            run_function: Rc::new(transition),
        }
    }

    /// Runs the computation with the given initial state.
    pub fn run(&self, initial_state: S) -> M {
        (self.run_function)(initial_state)
    }
}

impl<S, M> Clone for StateT<S, M>
where
    S: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

impl<S, A, M> StateT<S, M>
where
    S: 'static,
    A: 'static,
    M: Monad<Inner = (A, S), WithType<(A, S)> = M> + 'static,
{
    /// Creates a computation that returns a constant value, state untouched.
    ///
    /// For any input state `s` the result is `M::pure((value, s))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::StateT;
    ///
    /// let state: StateT<i32, Option<(String, i32)>> = StateT::pure("hello".to_string());
    /// assert_eq!(state.run(42), Some(("hello".to_string(), 42)));
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| M::pure((value.clone(), state)))
    }

    /// Projects a value from the state without modifying it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::StateT;
    ///
    /// let state: StateT<i32, Option<(i32, i32)>> = StateT::gets(|s: &i32| s * 2);
    /// assert_eq!(state.run(21), Some((42, 21)));
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| {
            let value = projection(&state);
            M::pure((value, state))
        })
    }

    /// Lifts a pure [`State`] computation into the transformer.
    ///
    /// The pair produced by the pure computation is wrapped with `M::pure`;
    /// no base-type effect occurs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::{State, StateT};
    ///
    /// let pure_step: State<i32, i32> = State::new(|s| (s * 2, s + 1));
    /// let lifted: StateT<i32, Option<(i32, i32)>> = StateT::from_state(pure_step);
    /// assert_eq!(lifted.run(10), Some((20, 11)));
    /// ```
    pub fn from_state(computation: State<S, A>) -> Self {
        Self::new(move |state| M::pure(computation.run(state)))
    }

    /// Lifts a bare base computation into the transformer.
    ///
    /// The incoming state passes through unchanged and is paired with the
    /// base computation's value. Each application evaluates one copy of the
    /// base value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::StateT;
    ///
    /// let lifted: StateT<i32, Option<(String, i32)>> = StateT::lift(Some("hello".to_string()));
    /// assert_eq!(lifted.run(42), Some(("hello".to_string(), 42)));
    ///
    /// let missing: StateT<i32, Option<(String, i32)>> = StateT::lift(None::<String>);
    /// assert_eq!(missing.run(42), None);
    /// ```
    pub fn lift<N>(base: N) -> Self
    where
        N: Functor<Inner = A, WithType<(A, S)> = M> + Clone + 'static,
    {
        Self::new(move |state: S| base.clone().fmap(move |value| (value, state)))
    }

    /// Transforms only the result component, leaving the state untouched.
    ///
    /// The underlying transition runs once per application; the base type's
    /// `fmap` rewrites the pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::StateT;
    ///
    /// let state: StateT<i32, Option<(i32, i32)>> = StateT::new(|s| Some((s, s + 1)));
    /// let mapped = state.fmap(|v| v * 2);
    /// assert_eq!(mapped.run(10), Some((20, 11)));
    /// ```
    pub fn fmap<B, F>(self, function: F) -> StateT<S, M::WithType<(B, S)>>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
        M::WithType<(B, S)>: 'static,
    {
        let original = self.run_function;
        let function = Rc::new(function);
        StateT::new(move |state| {
            let function = function.clone();
            original(state).fmap(move |(value, next_state)| (function(value), next_state))
        })
    }

    /// Applies a function produced by one computation to the value produced
    /// by another.
    ///
    /// State threads strictly left to right: `self` (the function side) runs
    /// against the incoming state, its output state feeds `argument`, and the
    /// final state is the argument side's output state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::StateT;
    ///
    /// let function_side: StateT<i32, Option<(fn(i32) -> i32, i32)>> =
    ///     StateT::new(|s| Some((((|v| v + 1) as fn(i32) -> i32), s + 10)));
    /// let argument: StateT<i32, Option<(i32, i32)>> = StateT::new(|s| Some((s, s * 2)));
    ///
    /// // State 0: function side yields state 10, argument reads 10, final state 20.
    /// assert_eq!(function_side.apply(argument).run(0), Some((11, 20)));
    /// ```
    pub fn apply<X, B>(
        self,
        argument: StateT<S, M::WithType<(X, S)>>,
    ) -> StateT<S, M::WithType<(B, S)>>
    where
        X: 'static,
        B: 'static,
        A: FnOnce(X) -> B,
        M::WithType<(X, S)>: Monad<Inner = (X, S), WithType<(B, S)> = M::WithType<(B, S)>>
            + 'static,
        M::WithType<(B, S)>: 'static,
    {
        let function_side = self.run_function;
        StateT::new(move |state| {
            let argument = argument.clone();
            function_side(state).flat_map::<(B, S), _>(move |(function, intermediate_state)| {
                argument
                    .run(intermediate_state)
                    .fmap(move |(value, final_state)| (function(value), final_state))
            })
        })
    }

    /// Chains a dependent stateful computation - Kleisli composition.
    ///
    /// `self` runs against the incoming state; the continuation receives the
    /// result and runs against the intermediate state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::StateT;
    ///
    /// let state: StateT<i32, Option<(i32, i32)>> = StateT::new(|s| Some((s, s + 1)));
    /// let chained = state.flat_map(|v| StateT::new(move |s: i32| Some((v + s, s * 2))));
    /// // Initial state 10: first (10, 11), then (10 + 11, 22)
    /// assert_eq!(chained.run(10), Some((21, 22)));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> StateT<S, M::WithType<(B, S)>>
    where
        B: 'static,
        F: Fn(A) -> StateT<S, M::WithType<(B, S)>> + 'static,
        M::WithType<(B, S)>: Monad<Inner = (B, S)> + 'static,
    {
        let original = self.run_function;
        let function = Rc::new(function);
        StateT::new(move |state| {
            let function = function.clone();
            original(state).flat_map::<(B, S), _>(move |(value, intermediate_state)| {
                function(value).run(intermediate_state)
            })
        })
    }

    /// Runs the computation and keeps only the result value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::StateT;
    ///
    /// let state: StateT<i32, Option<(i32, i32)>> = StateT::new(|s| Some((s * 2, s + 1)));
    /// assert_eq!(state.eval(10), Some(20));
    /// ```
    pub fn eval(&self, initial_state: S) -> M::WithType<A> {
        self.run(initial_state).fmap(|(value, _)| value)
    }

    /// Runs the computation and keeps only the final state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::StateT;
    ///
    /// let state: StateT<i32, Option<(i32, i32)>> = StateT::new(|s| Some((s * 2, s + 1)));
    /// assert_eq!(state.exec(10), Some(11));
    /// ```
    pub fn exec(&self, initial_state: S) -> M::WithType<S> {
        self.run(initial_state).fmap(|(_, final_state)| final_state)
    }
}

impl<S, M> StateT<S, M>
where
    S: Clone + 'static,
    M: Monad<Inner = (S, S), WithType<(S, S)> = M> + 'static,
{
    /// Returns the current state as the result, state unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::StateT;
    ///
    /// let state: StateT<i32, Option<(i32, i32)>> = StateT::get();
    /// assert_eq!(state.run(42), Some((42, 42)));
    /// ```
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| M::pure((state.clone(), state)))
    }
}

impl<S, M> StateT<S, M>
where
    S: 'static,
    M: Monad<Inner = ((), S), WithType<((), S)> = M> + 'static,
{
    /// Discards the incoming state and replaces it with a new value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::StateT;
    ///
    /// let state: StateT<i32, Option<((), i32)>> = StateT::put(100);
    /// assert_eq!(state.run(42), Some(((), 100)));
    /// ```
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| M::pure(((), new_state.clone())))
    }

    /// Transforms the current state with a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::StateT;
    ///
    /// let state: StateT<i32, Option<((), i32)>> = StateT::modify(|s| s * 2);
    /// assert_eq!(state.run(21), Some(((), 42)));
    /// ```
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| M::pure(((), modifier(state))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Identity;
    use rstest::rstest;

    static_assertions::assert_impl_all!(StateT<i32, Option<(i32, i32)>>: Clone);
    static_assertions::assert_impl_all!(StateT<String, Result<(i32, String), String>>: Clone);

    #[test]
    fn new_and_run() {
        let state: StateT<i32, Option<(i32, i32)>> = StateT::new(|s| Some((s * 2, s + 1)));
        assert_eq!(state.run(10), Some((20, 11)));
    }

    #[test]
    fn clone_shares_the_transition() {
        let state: StateT<i32, Option<(i32, i32)>> = StateT::new(|s| Some((s * 2, s + 1)));
        let cloned = state.clone();
        assert_eq!(state.run(10), Some((20, 11)));
        assert_eq!(cloned.run(10), Some((20, 11)));
    }

    #[rstest]
    #[case(10)]
    #[case(0)]
    fn pure_leaves_state_untouched(#[case] initial: i32) {
        let state: StateT<i32, Option<(i32, i32)>> = StateT::pure(42);
        assert_eq!(state.run(initial), Some((42, initial)));
    }

    #[test]
    fn get_reads_without_modifying() {
        let state: StateT<i32, Option<(i32, i32)>> = StateT::get();
        assert_eq!(state.run(42), Some((42, 42)));
    }

    #[test]
    fn flat_map_threads_the_intermediate_state() {
        let state: StateT<i32, Option<(i32, i32)>> = StateT::new(|s| Some((s, s + 1)));
        let chained = state.flat_map(|v| StateT::new(move |s: i32| Some((v + s, s * 2))));
        assert_eq!(chained.run(10), Some((21, 22)));
    }

    #[test]
    fn flat_map_over_identity_base() {
        let state: StateT<i32, Identity<(i32, i32)>> = StateT::new(|s| Identity::new((s, s + 1)));
        let chained = state.flat_map(|v| StateT::new(move |s: i32| Identity::new((v * 10, s))));
        assert_eq!(chained.run(1), Identity::new((10, 2)));
    }

    #[test]
    fn failure_in_the_base_skips_the_continuation() {
        let failing: StateT<i32, Option<(i32, i32)>> = StateT::new(|_| None);
        let chained = failing.flat_map(|v| StateT::new(move |s: i32| Some((v, s))));
        assert_eq!(chained.run(10), None);
    }
}
