//! Summation with a condition-checked loop.

use std::io::Write;

use anyhow::Result;

use crate::io::input::Input;

/// Sum of `1..=n`; zero when `n < 1`.
pub fn sum_conditional(n: i64) -> i128 {
    let limit = i128::from(n);
    let mut current: i128 = 1;
    let mut total: i128 = 0;
    while current <= limit {
        total += current;
        current += 1;
    }
    total
}

pub fn run(input: &mut Input<'_>, out: &mut dyn Write) -> Result<()> {
    let n = input.next_int("n")?;
    writeln!(out, "{}", sum_conditional(n))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::for_loops::sum_counted;
    use crate::test_support::run_exercise;

    #[test]
    fn agrees_with_counted_loop() {
        for n in -3..=200 {
            assert_eq!(sum_conditional(n), sum_counted(n), "n = {n}");
        }
    }

    #[test]
    fn prints_bare_total() {
        assert_eq!(run_exercise("13-while-loops", "5\n"), "15\n");
        assert_eq!(run_exercise("13-while-loops", "0\n"), "0\n");
    }
}
