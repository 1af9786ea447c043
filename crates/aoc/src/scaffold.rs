use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Embedded solution template; `{{year}}` and `{{day}}` are substituted.
const SOLUTION_TEMPLATE: &str = include_str!("../templates/day.rs.in");

/// Number of puzzle parts, and therefore input files, per day.
const INPUT_PARTS: u8 = 3;

/// Generates the folder layout for one day of an event: the day directory,
/// a templated solution file and one empty input file per part. Existing
/// files are reported and left untouched.
#[derive(Debug)]
pub struct Scaffold {
    root: PathBuf,
    year: u16,
    day: u8,
}

impl Scaffold {
    pub fn new(root: PathBuf, year: u16, day: u8) -> Self {
        Self { root, year, day }
    }

    /// Directory for this day, e.g. `<root>/2025/day09`.
    pub fn day_dir(&self) -> PathBuf {
        self.root
            .join(self.year.to_string())
            .join(format!("day{:02}", self.day))
    }

    pub fn create(&self) -> Result<()> {
        let dir = self.day_dir();
        if dir.exists() {
            println!("Directory exists: {}", dir.display());
        } else {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Unable to create directory {}", dir.display()))?;
            println!("Created directory: {}", dir.display());
        }

        let solution = dir.join(format!("day{:02}.rs", self.day));
        if solution.exists() {
            println!("Solution file exists: {}", solution.display());
        } else {
            fs::write(&solution, self.render_template())
                .with_context(|| format!("Unable to create {}", solution.display()))?;
            println!("Created solution file: {}", solution.display());
        }

        for part in 1..=INPUT_PARTS {
            let input = dir.join(format!("p{part}.txt"));
            if input.exists() {
                println!("Data file exists: {}", input.display());
            } else {
                fs::write(&input, "")
                    .with_context(|| format!("Unable to create {}", input.display()))?;
                println!("Created data file: {}", input.display());
            }
        }

        Ok(())
    }

    fn render_template(&self) -> String {
        SOLUTION_TEMPLATE
            .replace("{{year}}", &self.year.to_string())
            .replace("{{day}}", &format!("{:02}", self.day))
    }
}
