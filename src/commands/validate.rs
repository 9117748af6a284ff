//! Validate command implementation

use console::Style;

use crate::cli::ValidateArgs;
use crate::error::Result;
use crate::spec::{V1ApplySpec, document};

pub fn run(args: ValidateArgs) -> Result<()> {
    let root = document::load(&args.spec)?;
    let spec = V1ApplySpec::from_value(&root)?;

    println!(
        "{} {} ({} jobs, {} packages)",
        Style::new().bold().green().apply_to("OK"),
        args.spec.display(),
        spec.jobs().len(),
        spec.packages().len()
    );

    Ok(())
}
