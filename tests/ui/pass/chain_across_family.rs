//! A chain that starts from Just, branches into Either and ends in Maybe.

use chainlift::compose::Identity;
use chainlift::control::{Continuation, Either, Just, Maybe, Monadic, check, drop_left};

fn main() {
    let result: Maybe<f64> = Just::new(3)
        .and_then(|i| -> Either<i32, f64> {
            if i > 5 { Either::Left(i) } else { Either::Right(f64::from(i)) }
        })
        .then(Continuation::new(Identity, |f: f64| f * 10.0))
        .then(drop_left())
        .then(check(|f: &f64| *f > 1.0));

    assert_eq!(result, Maybe::of(30.0));
}
