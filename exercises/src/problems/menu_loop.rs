//! A menu that repeats until the exit choice is entered.

use std::io::Write;

use anyhow::Result;

use crate::io::input::Input;

const MENU: [&str; 5] = [
    "=== MENU ===",
    "1. Print message",
    "2. Show count",
    "3. Exit",
    "Enter choice (1-3):",
];

pub fn run(input: &mut Input<'_>, out: &mut dyn Write) -> Result<()> {
    let mut count: u64 = 0;

    loop {
        for line in MENU {
            writeln!(out, "{line}")?;
        }
        // The prompt must be visible before blocking on the next choice.
        out.flush()?;

        match input.next_int("choice")? {
            1 => {
                writeln!(out, "Hello from option 1!")?;
                count += 1;
            }
            2 => writeln!(out, "Option 1 selected {count} times")?,
            3 => {
                writeln!(out, "Goodbye!")?;
                break;
            }
            _ => writeln!(out, "Invalid choice, try again")?,
        }
    }

    writeln!(out, "Final count: {count}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::test_support::{run_exercise, try_run_exercise};

    const MENU_BLOCK: &str =
        "=== MENU ===\n1. Print message\n2. Show count\n3. Exit\nEnter choice (1-3):\n";

    #[test]
    fn counts_option_one_until_exit() {
        let output = run_exercise("14-do-while-loops-where-applicable", "1\n1\n2\n4\n3\n");
        let expected = [
            MENU_BLOCK,
            "Hello from option 1!\n",
            MENU_BLOCK,
            "Hello from option 1!\n",
            MENU_BLOCK,
            "Option 1 selected 2 times\n",
            MENU_BLOCK,
            "Invalid choice, try again\n",
            MENU_BLOCK,
            "Goodbye!\n",
            "Final count: 2\n",
        ]
        .concat();
        assert_eq!(output, expected);
    }

    #[test]
    fn immediate_exit_has_zero_count() {
        let output = run_exercise("14-do-while-loops-where-applicable", "3\n");
        assert_eq!(output, format!("{MENU_BLOCK}Goodbye!\nFinal count: 0\n"));
    }

    #[test]
    fn input_after_exit_is_not_read() {
        let output = run_exercise("14-do-while-loops-where-applicable", "3\nnot a number\n");
        assert!(output.ends_with("Final count: 0\n"));
    }

    #[test]
    fn missing_exit_choice_is_an_input_error() {
        let (output, result) = try_run_exercise("14-do-while-loops-where-applicable", "1\n");
        assert!(result.is_err());
        assert!(output.contains("Hello from option 1!\n"));
    }
}
