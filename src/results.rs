use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    fs::OpenOptions,
    path::Path,
};

use csv::WriterBuilder;
use euclid_tsp::Cost;
use serde::Serialize;

/// Outcome of one algorithm on one point set.
#[derive(Debug, Clone, Serialize)]
pub struct AlgResult {
    pub input: String,
    pub algorithm: String,
    pub n: usize,
    pub cost: Cost,
    /// Weight of the minimum spanning tree, a lower bound on every tour.
    pub mst: Cost,
}

impl AlgResult {
    pub fn new(input: String, algorithm: String, n: usize, cost: Cost, mst: Cost) -> Self {
        Self {
            input,
            algorithm,
            n,
            cost,
            mst,
        }
    }
}

impl Display for AlgResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} points): {} (MST {})",
            self.algorithm, self.n, self.cost, self.mst
        )
    }
}

/// Appends `results` to the CSV file at `path`, writing a header row if the file is new.
pub fn export<P: AsRef<Path>>(results: &[AlgResult], path: P) -> Result<(), Box<dyn Error>> {
    log::info!("Exporting results to {:?}.", path.as_ref());
    let is_new = !path.as_ref().exists();
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = WriterBuilder::new().has_headers(is_new).from_writer(file);
    for result in results {
        wtr.serialize(result)?;
    }
    wtr.flush()?;
    Ok(())
}
