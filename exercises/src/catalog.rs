//! Registry of every exercise, keyed by a stable id.
//!
//! Ids follow the `NN-topic-slug` form. Lookups also accept the bare number
//! (`4` or `04`) or the slug alone (`arithmetic-operators`).

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::io::input::Input;
use crate::problems::{
    RunFn, arithmetic, basic_io, conditionals, constants, conversion, for_loops, menu_loop,
    nested_loops, strings, switch_case, variables, while_loops,
};

/// One registered exercise.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Exercise {
    pub id: &'static str,
    pub title: &'static str,
    /// Values read from stdin, one per line, in order.
    pub inputs: &'static [&'static str],
    #[serde(skip)]
    entry: RunFn,
}

impl Exercise {
    /// Leading number of the id (`"04"`).
    pub fn number(&self) -> &'static str {
        self.id.split_once('-').map_or(self.id, |(number, _)| number)
    }

    /// Id without its leading number (`"arithmetic-operators"`).
    pub fn slug(&self) -> &'static str {
        self.id.split_once('-').map_or(self.id, |(_, slug)| slug)
    }

    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if query == self.id || query == self.slug() {
            return true;
        }
        match (query.parse::<u32>(), self.number().parse::<u32>()) {
            (Ok(wanted), Ok(own)) => wanted == own,
            _ => false,
        }
    }

    /// Run the exercise against `reader`, writing label lines to `out`.
    #[instrument(skip_all, fields(exercise = self.id))]
    pub fn run(&self, reader: &mut dyn BufRead, out: &mut dyn Write) -> Result<()> {
        debug!("running exercise");
        let mut input = Input::new(reader);
        let result = (self.entry)(&mut input, out);
        out.flush().context("flush output")?;
        debug!(lines_read = input.lines_read(), ok = result.is_ok(), "exercise finished");
        result
    }
}

pub const CATALOG: &[Exercise] = &[
    Exercise {
        id: "01-variable-declaration",
        title: "Variable declaration",
        inputs: &[
            "integer",
            "string",
            "boolean (true/false)",
            "float",
            "character",
            "new integer",
            "late-initialized string",
        ],
        entry: variables::run,
    },
    Exercise {
        id: "02-data-types-conversion",
        title: "Data types and conversion",
        inputs: &[
            "integer text",
            "float text",
            "boolean text (true/false)",
            "integer",
            "float",
        ],
        entry: conversion::run,
    },
    Exercise {
        id: "03-basic-input-output",
        title: "Basic input and output",
        inputs: &["name", "age", "height in meters", "favorite language"],
        entry: basic_io::run,
    },
    Exercise {
        id: "04-arithmetic-operators",
        title: "Arithmetic operators",
        inputs: &["integer a", "integer b"],
        entry: arithmetic::run,
    },
    Exercise {
        id: "07-string-operations",
        title: "String operations",
        inputs: &["first string", "second string"],
        entry: strings::run,
    },
    Exercise {
        id: "08-constants-immutable",
        title: "Constants and immutability",
        inputs: &["radius"],
        entry: constants::run,
    },
    Exercise {
        id: "10-nested-conditionals",
        title: "Nested conditionals",
        inputs: &["score"],
        entry: conditionals::run,
    },
    Exercise {
        id: "11-switch-case-statements",
        title: "Switch-case statements",
        inputs: &["first number", "operator (+ - * /)", "second number"],
        entry: switch_case::run,
    },
    Exercise {
        id: "12-for-loops-basic-iteration",
        title: "For loops: basic iteration",
        inputs: &["n"],
        entry: for_loops::run,
    },
    Exercise {
        id: "13-while-loops",
        title: "While loops",
        inputs: &["n"],
        entry: while_loops::run,
    },
    Exercise {
        id: "14-do-while-loops-where-applicable",
        title: "Do-while loops",
        inputs: &["menu choice, repeated until 3"],
        entry: menu_loop::run,
    },
    Exercise {
        id: "15-nested-loops",
        title: "Nested loops",
        inputs: &["rows"],
        entry: nested_loops::run,
    },
];

/// Find the exercise matching an id, number or slug.
pub fn find(query: &str) -> Option<&'static Exercise> {
    CATALOG.iter().find(|exercise| exercise.matches(query))
}
