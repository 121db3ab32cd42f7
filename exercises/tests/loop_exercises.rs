//! Cross-exercise checks for the loop exercises.

use exercises::test_support::run_exercise;

#[test]
fn counted_and_conditional_summation_agree() {
    for n in -2..=60 {
        let input = format!("{n}\n");
        let counted = run_exercise("12-for-loops-basic-iteration", &input);
        let conditional = run_exercise("13-while-loops", &input);
        assert_eq!(counted, conditional, "n = {n}");
    }
    assert_eq!(run_exercise("12", "5\n"), "15\n");
}

#[test]
fn menu_final_count_matches_option_one_selections() {
    let choices = ["1", "2", "1", "9", "1", "2", "3"];
    let input = choices.join("\n");
    let output = run_exercise("14", &input);
    let ones = choices.iter().filter(|choice| **choice == "1").count();
    assert!(output.ends_with(&format!("Goodbye!\nFinal count: {ones}\n")));
    assert!(output.contains("Option 1 selected 1 times\n"));
    assert!(output.contains("Option 1 selected 3 times\n"));
    assert_eq!(output.matches("=== MENU ===").count(), choices.len());
}

#[test]
fn triangle_row_lengths_grow_by_one() {
    let output = run_exercise("15", "6\n");
    let widths: Vec<usize> = output.lines().map(str::len).collect();
    assert_eq!(widths, vec![1, 2, 3, 4, 5, 6]);
    assert!(output.lines().all(|line| line.chars().all(|ch| ch == '*')));
}
