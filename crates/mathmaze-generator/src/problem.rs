//! Arithmetic problem synthesis.
//!
//! [`generate_problem`] turns a target integer into a human-readable
//! expression that evaluates to it, with the operation mix gated by grade
//! level. Every generator guarantees non-negative operands and an exact
//! integer result; structurally infeasible forms (prime targets for
//! multiplication, unusable remainders for two-step expressions) fall back
//! to the addition/subtraction generator rather than failing.

use mathmaze_core::{Grade, Problem};
use rand::{Rng, RngExt, seq::IndexedRandom as _};

/// Generates an arithmetic problem whose expression evaluates to `target`.
///
/// Operation selection by grade:
///
/// - Grades 1-2: addition or subtraction, chosen uniformly
/// - Grade 3: 40% addition/subtraction, 40% multiplication, 20%
///   addition/subtraction again
/// - Grade 4: 30% addition/subtraction, 30% multiplication, 30% division,
///   10% addition/subtraction again
/// - Grades 5-7: a two-step expression, either `(a×b)+c` or `(a+b)÷c`
///
/// # Panics
///
/// Panics if `target` is zero.
///
/// # Examples
///
/// ```
/// use mathmaze_core::Grade;
/// use mathmaze_generator::generate_problem;
///
/// let mut rng = rand::rng();
/// let problem = generate_problem(&mut rng, 5, Grade::G2);
/// assert_eq!(problem.answer(), 5);
/// ```
pub fn generate_problem<R: Rng + ?Sized>(rng: &mut R, target: u32, grade: Grade) -> Problem {
    assert!(target >= 1, "problem target must be at least 1, got {target}");
    match grade.value() {
        1 | 2 => addition_or_subtraction(rng, target),
        3 => {
            let roll: f64 = rng.random();
            if (0.4..0.8).contains(&roll) {
                multiplication(rng, target)
            } else {
                addition_or_subtraction(rng, target)
            }
        }
        4 => {
            let roll: f64 = rng.random();
            if (0.3..0.6).contains(&roll) {
                multiplication(rng, target)
            } else if (0.6..0.9).contains(&roll) {
                division(rng, target)
            } else {
                addition_or_subtraction(rng, target)
            }
        }
        _ => two_step(rng, target),
    }
}

/// `a+b` or `a-b`, chosen uniformly. The terminal fallback for every other
/// generator, so it must succeed for any target.
fn addition_or_subtraction<R: Rng + ?Sized>(rng: &mut R, target: u32) -> Problem {
    if rng.random_bool(0.5) {
        let a = rng.random_range(1..=target);
        let b = target - a;
        Problem::new(format!("{a}+{b}"), target)
    } else {
        let b = rng.random_range(1..=10);
        let a = target + b;
        Problem::new(format!("{a}-{b}"), target)
    }
}

/// `a×b` from a true factor pair, randomly ordered. Falls back to
/// addition/subtraction when the target is 1 or prime.
fn multiplication<R: Rng + ?Sized>(rng: &mut R, target: u32) -> Problem {
    let Some(&(a, b)) = factor_pairs(target).choose(rng) else {
        return addition_or_subtraction(rng, target);
    };
    if rng.random_bool(0.5) {
        Problem::new(format!("{a}×{b}"), target)
    } else {
        Problem::new(format!("{b}×{a}"), target)
    }
}

/// `(target·m)÷m` for a random multiplier m in 2-11.
fn division<R: Rng + ?Sized>(rng: &mut R, target: u32) -> Problem {
    let divisor = rng.random_range(2..=11);
    Problem::new(format!("{}÷{divisor}", target * divisor), target)
}

fn two_step<R: Rng + ?Sized>(rng: &mut R, target: u32) -> Problem {
    if rng.random_bool(0.5) {
        product_plus_remainder(rng, target)
    } else {
        sum_quotient(rng, target)
    }
}

/// `a×b+c` where `a×b` is a random product below the target and `c` is the
/// remainder. If the product has no factor pair, retries with a small fixed
/// product, balancing with addition or subtraction as the sign requires.
fn product_plus_remainder<R: Rng + ?Sized>(rng: &mut R, target: u32) -> Problem {
    if target > 2 {
        let product = rng.random_range(1..target);
        if let Some(&(a, b)) = factor_pairs(product).choose(rng) {
            let c = target - product;
            return Problem::new(format!("{a}×{b}+{c}"), target);
        }
    }

    let a = rng.random_range(1..=5);
    let b = rng.random_range(1..=5);
    let product = a * b;
    if product < target {
        Problem::new(format!("{a}×{b}+{}", target - product), target)
    } else if product > target {
        Problem::new(format!("{a}×{b}-{}", product - target), target)
    } else {
        Problem::new(format!("{a}×{b}"), target)
    }
}

/// `(a+b)÷c` where the sum is `target·c` for a small divisor c.
fn sum_quotient<R: Rng + ?Sized>(rng: &mut R, target: u32) -> Problem {
    let divisor = rng.random_range(2..=4);
    let sum = target * divisor;
    let a = rng.random_range(0..=sum);
    let b = sum - a;
    Problem::new(format!("({a}+{b})÷{divisor}"), target)
}

/// Factor pairs `(a, b)` of `target` with `a ≤ b` and both greater than 1.
///
/// Empty when the target is 1 or prime.
fn factor_pairs(target: u32) -> Vec<(u32, u32)> {
    let mut pairs = Vec::new();
    let mut i = 2;
    while i * i <= target {
        if target % i == 0 {
            pairs.push((i, target / i));
        }
        i += 1;
    }
    pairs
}
