//! State monad - pure stateful computation.
//!
//! A `State<S, A>` encapsulates a function `S -> (A, S)`: it takes the current
//! state, produces a result, and returns a possibly modified state. It is the
//! effect-free counterpart of [`StateT`](crate::transform::StateT), and the
//! lifting source for `StateT::from_state`.
//!
//! # Note on Type Classes
//!
//! `State` provides its own `fmap`, `flat_map`, and friends directly on the
//! type rather than implementing the `Functor`/`Monad` traits: the wrapped
//! `Rc<dyn Fn>` must be callable on every run, so the combinators take `Fn`
//! closures rather than the traits' `FnOnce`. The methods obey the same laws.
//!
//! # Laws
//!
//! Besides the functor and monad laws, the state primitives satisfy:
//!
//! - Get-Put: `get().flat_map(|s| put(s)) == pure(())`
//! - Put-Put: `put(s1).then(put(s2)) == put(s2)`
//! - Modify composition: `modify(f).then(modify(g)) == modify(|s| g(f(s)))`
//!
//! # Examples
//!
//! ```rust
//! use kleisli::transform::State;
//!
//! fn increment() -> State<i32, ()> {
//!     State::modify(|count| count + 1)
//! }
//!
//! let computation = increment().then(increment()).then(State::get());
//! let (count, final_state) = computation.run(0);
//! assert_eq!(count, 2);
//! assert_eq!(final_state, 2);
//! ```

use std::rc::Rc;

/// A computation that threads a state value through a sequence of steps.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The result type
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// The wrapped state transition function.
    /// Uses Rc to allow cloning of the State for `flat_map`.
    run_function: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a new `State` from a state transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.run(10), (20, 11));
    /// ```
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            run_function: Rc::new(transition),
        }
    }

    /// Runs the computation with the given initial state, returning the
    /// result and the final state.
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.run_function)(initial_state)
    }

    /// Runs the computation and returns only the result value.
    pub fn eval(&self, initial_state: S) -> A {
        self.run(initial_state).0
    }

    /// Runs the computation and returns only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        self.run(initial_state).1
    }

    /// Creates a computation that returns a constant value without touching
    /// the state.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Projects a value from the state without modifying it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::State;
    ///
    /// let state: State<Vec<i32>, usize> = State::gets(|s: &Vec<i32>| s.len());
    /// assert_eq!(state.run(vec![1, 2, 3]), (3, vec![1, 2, 3]));
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| {
            let value = projection(&state);
            (value, state)
        })
    }

    /// Transforms the result value, leaving the state transition untouched.
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        let original = self.run_function;
        State::new(move |state| {
            let (value, next_state) = original(state);
            (function(value), next_state)
        })
    }

    /// Chains a dependent stateful computation.
    ///
    /// The intermediate state produced by `self` feeds the computation
    /// returned by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::State;
    ///
    /// let state: State<i32, i32> = State::new(|s| (s, s + 1));
    /// let chained = state.flat_map(|v| State::new(move |s: i32| (v + s, s * 2)));
    /// // Initial state 10: first (10, 11), then (10 + 11, 22)
    /// assert_eq!(chained.run(10), (21, 22));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        B: 'static,
        F: Fn(A) -> State<S, B> + 'static,
    {
        let original = self.run_function;
        State::new(move |state| {
            let (value, intermediate_state) = original(state);
            function(value).run(intermediate_state)
        })
    }

    /// Sequences two stateful computations, discarding the first result.
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }
}

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// Returns the current state as the result, state unchanged.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Replaces the current state with a new value.
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Transforms the current state with a function.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}
