//! popular-cuisines - a city's most popular cuisine tags.

use anyhow::{Context, Result};
use orderlens_analysis::{popular_cuisines, Outcome};
use orderlens_core::Dataset;

use crate::output::{self, OutputFormat};

pub fn run(dataset: &Dataset, city: &str, days: u32, format: OutputFormat) -> Result<()> {
    let outcome = popular_cuisines(dataset, city, days)
        .with_context(|| format!("popular-cuisines failed for city {city}"))?;

    let mut stdout = std::io::stdout();
    match outcome {
        Outcome::Empty => output::render_empty(format, &mut stdout),
        Outcome::Data(cuisines) => {
            let cells: Vec<Vec<String>> = cuisines.iter().map(|tag| vec![tag.clone()]).collect();
            output::render(format, &["cuisine"], &cells, &cuisines, &mut stdout)
        }
    }
}
