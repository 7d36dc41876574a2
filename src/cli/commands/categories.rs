//! Weight category listing.

use clap::ValueEnum;

use crate::cli::args::{CategoriesArgs, OutputFormat};
use crate::config::WeightClass;
use crate::error::Result;

/// Print the fixed set of selectable weight bands.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(args: &CategoriesArgs) -> Result<()> {
    match args.format {
        OutputFormat::Human => {
            for band in WeightClass::ALL {
                println!("{:<10} {band}", flag_token(band));
            }
        }
        OutputFormat::Json => {
            let entries: Vec<_> = WeightClass::ALL
                .iter()
                .map(|band| {
                    serde_json::json!({
                        "id": band,
                        "label": band.to_string(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string(&entries)?);
        }
    }
    Ok(())
}

/// The `--category` token for a band, as clap accepts it.
fn flag_token(band: WeightClass) -> String {
    band.to_possible_value()
        .map_or_else(String::new, |v| v.get_name().to_string())
}
