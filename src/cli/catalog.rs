use std::path::PathBuf;

use clap::Parser;

use crate::{catalog::Catalog, prelude::*};

#[derive(Parser)]
pub struct CatalogArgs {
    /// Plant catalog with the energy readings, in TOML format.
    #[clap(long = "plants", env = "PLANTS_PATH", default_value = "plants.toml")]
    path: PathBuf,
}

impl CatalogArgs {
    pub fn read(&self) -> Result<Catalog> {
        Catalog::read_from(&self.path)
    }
}
