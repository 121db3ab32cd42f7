//! Test-only helpers for running exercises against in-memory input.

use std::io::Cursor;

use crate::catalog::find;

/// Run an exercise, returning whatever it printed alongside its result.
pub fn try_run_exercise(id: &str, input: &str) -> (String, anyhow::Result<()>) {
    let exercise = find(id).unwrap_or_else(|| panic!("unknown exercise {id}"));
    let mut reader = Cursor::new(input.as_bytes());
    let mut output = Vec::new();
    let result = exercise.run(&mut reader, &mut output);
    (String::from_utf8_lossy(&output).into_owned(), result)
}

/// Run an exercise that is expected to succeed and return its output.
pub fn run_exercise(id: &str, input: &str) -> String {
    let (output, result) = try_run_exercise(id, input);
    if let Err(err) = result {
        panic!("exercise {id} failed: {err:#}\noutput so far:\n{output}");
    }
    output
}
