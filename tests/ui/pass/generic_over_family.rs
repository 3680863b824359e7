//! Generic code bounded on the family trait and on Apply.

use chainlift::control::{Apply, Continuation, Either, Just, Maybe, Monadic, continue_left};

fn apply_all<M, C>(values: Vec<M>, step: &C) -> Vec<C::Output>
where
    M: Monadic,
    C: Apply<M>,
{
    values.into_iter().map(|value| step.apply(value)).collect()
}

fn main() {
    let increment = Continuation::new(|i: i32| i + 1, |f: f64| f - 1.0);

    assert_eq!(
        apply_all(vec![Just::new(1), Just::new(2)], &increment),
        vec![Just::new(2), Just::new(3)]
    );
    assert_eq!(
        apply_all(vec![Either::<i32, f64>::Left(1), Either::Right(5.0)], &increment),
        vec![Either::Left(2), Either::Right(4.0)]
    );
    assert_eq!(
        apply_all(vec![Maybe::of(1), Maybe::empty()], &continue_left(|i: i32| i * 2)),
        vec![Maybe::of(2), Maybe::empty()]
    );
    assert_eq!(
        apply_all(
            vec![Either::<i32, f64>::Left(1), Either::Right(5.0)],
            &|either: Either<i32, f64>| either.drop_right(),
        ),
        vec![Maybe::of(1), Maybe::empty()]
    );
}
