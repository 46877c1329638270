//! CSV export to a local file.

use evet_store::DatasetStore;
use log::info;

/// Write the seed dataset to `output` in the fixed export format.
pub fn run_export(output: &str) -> anyhow::Result<()> {
    let store = DatasetStore::new();
    let csv = store.export_csv();
    std::fs::write(output, &csv)?;
    info!("Wrote {} bytes to {}", csv.len(), output);
    Ok(())
}
