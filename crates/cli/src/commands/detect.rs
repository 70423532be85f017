use anyhow::Result;
use polyrun_core::LanguageSniffer;
use tracing::debug;

use crate::utils::read_source;

pub fn detect_command(input: &str, verbose: bool) -> Result<()> {
    debug!("Detecting language of: {}", input);

    let source = read_source(input)?;
    let found = LanguageSniffer::default().explain(&source);

    if verbose {
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else {
        println!("{}", found.language);
    }

    Ok(())
}
