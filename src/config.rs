use serde::Serialize;
use serde_json;
use std::fs::File;
use std::path::Path;

#[derive(Serialize)]
pub struct RunConfig {
    pub grid: GridConfig,
    pub spectrum: SpectrumConfig,
    pub dispersion: DispersionConfig,
    pub time: TimeConfig,
    pub run: RunInfo,
}

#[derive(Serialize)]
pub struct GridConfig {
    pub z_min: f64,
    pub z_max: f64,
    pub n_z: usize,
}

#[derive(Serialize)]
pub struct SpectrumConfig {
    pub nu_center: f64,
    pub nu_min: f64,
    pub n_frequencies: usize,
    /// Standard deviation of the Gaussian window in sample-index units.
    pub spec_width: f64,
}

#[derive(Serialize)]
pub struct DispersionConfig {
    pub k0: f64,
    pub k1: f64,
    pub k2: f64,
}

#[derive(Serialize)]
pub struct TimeConfig {
    pub t_start: f64,
    pub t_end: f64,
    pub n_steps: usize,
}

#[derive(Serialize)]
pub struct RunInfo {
    pub binary: String,
    pub run_id: String,

    // Optional provenance (can be filled later)
    pub git_commit: Option<String>,
    pub timestamp_utc: Option<String>,
}

impl RunConfig {
    pub fn write_to_dir(&self, out_dir: &Path) -> std::io::Result<()> {
        let path = out_dir.join("config.json");
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
