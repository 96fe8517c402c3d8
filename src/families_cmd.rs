//! Families command: list the filter bank catalog.

use anyhow::Result;

use mallat_dwt::FilterBankCatalog;

/// Print one line per supported family.
pub fn run() -> Result<()> {
    let catalog = FilterBankCatalog::new()?;
    println!("{:<10} {:>7}  kind", "name", "support");
    for bank in catalog.iter() {
        let kind = if bank.orthogonal() {
            "orthogonal"
        } else {
            "biorthogonal, symmetric"
        };
        println!("{:<10} {:>7}  {kind}", bank.name(), bank.len());
    }
    Ok(())
}
