use std::{collections::HashSet, fmt::Debug, fs, path::Path};

use serde::Deserialize;

use crate::{plant::Plant, prelude::*};

/// Read-only snapshot of all the known plants, in file order.
#[derive(Debug, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub plants: Vec<Plant>,
}

impl Catalog {
    #[instrument(name = "reading the catalog…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let catalog = Self::from_toml(&contents)
            .with_context(|| format!("failed to load `{}`", path.display()))?;
        info!(n_plants = catalog.plants.len(), "loaded");
        Ok(catalog)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut catalog: Self = toml::from_str(contents)?;
        catalog.validate()?;
        for plant in &mut catalog.plants {
            // Stable, so that the same-day readings keep their file order:
            plant.readings.sort_by_key(|reading| reading.date);
        }
        Ok(catalog)
    }

    fn validate(&self) -> Result {
        let mut seen = HashSet::with_capacity(self.plants.len());
        for plant in &self.plants {
            ensure!(seen.insert(plant.id), "duplicate plant ID {}", plant.id);
            for reading in &plant.readings {
                // Compare the raw float, `NaN` is ordered above everything:
                ensure!(
                    reading.energy.0.is_finite() && reading.energy.0 >= 0.0,
                    "plant {} has an invalid reading on {}: {}",
                    plant.id,
                    reading.date,
                    reading.energy,
                );
            }
        }
        Ok(())
    }
}
