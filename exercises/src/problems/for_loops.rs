//! Summation with a counted loop.

use std::io::Write;

use anyhow::Result;

use crate::io::input::Input;

/// Sum of `1..=n`; zero when `n < 1`.
pub fn sum_counted(n: i64) -> i128 {
    let mut total: i128 = 0;
    for i in 1..=n {
        total += i128::from(i);
    }
    total
}

pub fn run(input: &mut Input<'_>, out: &mut dyn Write) -> Result<()> {
    let n = input.next_int("n")?;
    writeln!(out, "{}", sum_counted(n))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::run_exercise;

    #[test]
    fn sums_first_n_integers() {
        assert_eq!(sum_counted(5), 15);
        assert_eq!(sum_counted(1), 1);
        assert_eq!(sum_counted(100), 5050);
    }

    #[test]
    fn non_positive_bound_sums_to_zero() {
        assert_eq!(sum_counted(0), 0);
        assert_eq!(sum_counted(-4), 0);
    }

    #[test]
    fn prints_bare_total() {
        assert_eq!(run_exercise("12-for-loops-basic-iteration", "5\n"), "15\n");
    }
}
