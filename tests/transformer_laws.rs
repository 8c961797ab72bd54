//! Tests for monad transformer laws.
//!
//! Both transformers must satisfy the monad laws for every lawful base:
//!
//! 1. **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! 2. **Right Identity**: `m.flat_map(pure) == m`
//! 3. **Associativity**: `(m.flat_map(f)).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! Additionally the state primitives must satisfy:
//!
//! - `eval(get(), s) == s`
//! - `exec(modify(f), s) == f(s)`
//! - `put(s2)` run from `s1` yields `((), s2)`
//!
//! and `apply` must thread state strictly left to right.

#![cfg(feature = "transform")]

use kleisli::transform::{ExceptT, StateT};
use kleisli::typeclass::Identity;
use rstest::rstest;

// =============================================================================
// StateT Monad Laws
// =============================================================================

mod state_transformer_laws {
    use super::*;

    #[rstest]
    #[case(0)]
    #[case(10)]
    fn left_identity_option(#[case] initial: i32) {
        let value = 5;
        let f = |x: i32| -> StateT<i32, Option<(i32, i32)>> {
            StateT::new(move |s: i32| Some((x + s, s + 1)))
        };

        let left: StateT<i32, Option<(i32, i32)>> =
            StateT::<i32, Option<(i32, i32)>>::pure(value).flat_map(f);
        let right = f(value);

        assert_eq!(left.run(initial), right.run(initial));
    }

    #[rstest]
    #[case(0)]
    #[case(10)]
    fn right_identity_option(#[case] initial: i32) {
        let m: StateT<i32, Option<(i32, i32)>> = StateT::new(|s: i32| Some((s * 2, s + 1)));

        let left = m.clone().flat_map(StateT::pure);
        let right = m;

        assert_eq!(left.run(initial), right.run(initial));
    }

    #[rstest]
    #[case(0)]
    #[case(10)]
    fn associativity_option(#[case] initial: i32) {
        let m: StateT<i32, Option<(i32, i32)>> = StateT::new(|s: i32| Some((s, s + 1)));
        let f = |x: i32| -> StateT<i32, Option<(i32, i32)>> {
            StateT::new(move |s: i32| Some((x + s, s)))
        };
        let g = |x: i32| -> StateT<i32, Option<(i32, i32)>> {
            StateT::new(move |s: i32| if x % 2 == 0 { Some((x, s)) } else { None })
        };

        let left = m.clone().flat_map(f).flat_map(g);
        let right = m.flat_map(move |x| f(x).flat_map(g));

        assert_eq!(left.run(initial), right.run(initial));
    }

    #[rstest]
    #[case(0)]
    #[case(10)]
    fn left_identity_result(#[case] initial: i32) {
        let value = 5;
        let f = |x: i32| -> StateT<i32, Result<(i32, i32), String>> {
            StateT::new(move |s: i32| Ok((x + s, s + 1)))
        };

        let left: StateT<i32, Result<(i32, i32), String>> =
            StateT::<i32, Result<(i32, i32), String>>::pure(value).flat_map(f);
        let right = f(value);

        assert_eq!(left.run(initial), right.run(initial));
    }

    #[rstest]
    #[case(0)]
    #[case(10)]
    fn associativity_result(#[case] initial: i32) {
        let m: StateT<i32, Result<(i32, i32), String>> = StateT::new(|s: i32| Ok((s, s + 1)));
        let f = |x: i32| -> StateT<i32, Result<(i32, i32), String>> {
            StateT::new(move |s: i32| Ok((x * 2, s)))
        };
        let g = |x: i32| -> StateT<i32, Result<(i32, i32), String>> {
            StateT::new(move |s: i32| {
                if x < 100 {
                    Ok((x, s))
                } else {
                    Err("overflow".to_string())
                }
            })
        };

        let left = m.clone().flat_map(f).flat_map(g);
        let right = m.flat_map(move |x| f(x).flat_map(g));

        assert_eq!(left.run(initial), right.run(initial));
    }

    #[rstest]
    #[case(0)]
    #[case(10)]
    fn right_identity_identity_base(#[case] initial: i32) {
        let m: StateT<i32, Identity<(i32, i32)>> = StateT::new(|s: i32| Identity::new((s * 2, s)));

        let left = m.clone().flat_map(StateT::pure);
        let right = m;

        assert_eq!(left.run(initial), right.run(initial));
    }
}

// =============================================================================
// StateT primitive laws
// =============================================================================

mod state_primitive_laws {
    use super::*;

    #[rstest]
    #[case(0)]
    #[case(42)]
    fn eval_of_get_returns_the_state(#[case] state: i32) {
        let read: StateT<i32, Option<(i32, i32)>> = StateT::get();
        assert_eq!(read.eval(state), Some(state));
    }

    #[rstest]
    #[case(0)]
    #[case(42)]
    fn exec_of_modify_applies_the_function(#[case] state: i32) {
        let bump: StateT<i32, Option<((), i32)>> = StateT::modify(|s| s * 2 + 1);
        assert_eq!(bump.exec(state), Some(state * 2 + 1));
    }

    #[test]
    fn put_splits_into_unit_result_and_new_state() {
        let write: StateT<i32, Option<((), i32)>> = StateT::put(7);
        assert_eq!(write.run(100), Some(((), 7)));
        assert_eq!(write.eval(100), Some(()));
        assert_eq!(write.exec(100), Some(7));
    }

    #[test]
    fn apply_threads_left_to_right() {
        // Both sides append to a log carried in the state; the final log
        // proves the function side ran first.
        let function_side: StateT<Vec<&'static str>, Identity<(fn(i32) -> i32, Vec<&'static str>)>> =
            StateT::new(|mut log: Vec<&'static str>| {
                log.push("function");
                Identity::new((((|v| v + 1) as fn(i32) -> i32), log))
            });
        let argument: StateT<Vec<&'static str>, Identity<(i32, Vec<&'static str>)>> =
            StateT::new(|mut log: Vec<&'static str>| {
                log.push("argument");
                Identity::new((41, log))
            });

        let combined = function_side.apply(argument);
        assert_eq!(
            combined.run(vec![]),
            Identity::new((42, vec!["function", "argument"]))
        );
    }
}

// =============================================================================
// ExceptT Monad Laws
// =============================================================================

mod except_transformer_laws {
    use super::*;

    #[test]
    fn left_identity_identity_base() {
        let value = 5;
        let f = |x: i32| -> ExceptT<Identity<Result<i32, String>>> {
            if x > 0 {
                ExceptT::pure(x * 2)
            } else {
                ExceptT::throw("not positive".to_string())
            }
        };

        let left = ExceptT::<Identity<Result<i32, String>>>::pure(value).flat_map(f);
        let right = f(value);

        assert_eq!(left.run(), right.run());
    }

    #[rstest]
    #[case(Ok(5))]
    #[case(Err("boom".to_string()))]
    fn right_identity_identity_base(#[case] branch: Result<i32, String>) {
        let m: ExceptT<Identity<Result<i32, String>>> = ExceptT::new(Identity::new(branch.clone()));

        let left = m.flat_map(ExceptT::pure);

        assert_eq!(left.run(), Identity::new(branch));
    }

    #[rstest]
    #[case(Some(Ok(4)))]
    #[case(Some(Err("boom".to_string())))]
    #[case(None)]
    fn associativity_option_base(#[case] inner: Option<Result<i32, String>>) {
        let f = |x: i32| -> ExceptT<Option<Result<i32, String>>> { ExceptT::pure(x + 1) };
        let g = |x: i32| -> ExceptT<Option<Result<i32, String>>> {
            if x % 2 == 0 {
                ExceptT::pure(x)
            } else {
                ExceptT::throw("odd".to_string())
            }
        };

        let left = ExceptT::new(inner.clone()).flat_map(f).flat_map(g);
        let right = ExceptT::new(inner).flat_map(move |x| f(x).flat_map(g));

        assert_eq!(left.run(), right.run());
    }

    #[test]
    fn throw_then_catch_is_the_handler() {
        let error = "boom".to_string();
        let handler = |e: String| -> ExceptT<Identity<Result<i32, String>>> {
            ExceptT::pure(e.len() as i32)
        };

        let left = ExceptT::<Identity<Result<i32, String>>>::throw(error.clone()).catch(handler);
        let right = handler(error);

        assert_eq!(left.run(), right.run());
    }

    #[test]
    fn pure_is_untouched_by_catch() {
        let m = ExceptT::<Identity<Result<i32, String>>>::pure(42);
        let caught = m.catch(|_| ExceptT::throw("replaced".to_string()));
        assert_eq!(caught.run(), Identity::new(Ok(42)));
    }
}
