//! Show command implementation

use console::Style;
use serde_json::json;

use crate::cli::ShowArgs;
use crate::domain::Source;
use crate::error::Result;
use crate::spec::{V1ApplySpec, document};

pub fn run(args: ShowArgs) -> Result<()> {
    let root = document::load(&args.spec)?;
    let spec = V1ApplySpec::from_value(&root)?;

    if args.json {
        print_json(&spec)?;
    } else {
        print_human(&spec);
    }

    Ok(())
}

fn print_json(spec: &V1ApplySpec) -> Result<()> {
    let resolved = json!({
        "jobs": spec.jobs(),
        "packages": spec.packages(),
        "max_log_file_size": spec.max_log_file_size(),
    });
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}

fn print_human(spec: &V1ApplySpec) {
    println!();
    println!("  {}", Style::new().bold().apply_to("Jobs:"));
    if spec.jobs().is_empty() {
        println!("    {}", Style::new().dim().apply_to("None"));
    } else {
        for job in spec.jobs() {
            print_unit(job.name.as_str(), job.version.as_str(), &job.source);
        }
    }

    println!("  {}", Style::new().bold().apply_to("Packages:"));
    if spec.packages().is_empty() {
        println!("    {}", Style::new().dim().apply_to("None"));
    } else {
        for package in spec.packages() {
            print_unit(
                package.name.as_str(),
                package.version.as_str(),
                &package.source,
            );
        }
    }

    println!("  {}", Style::new().bold().apply_to("Properties:"));
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Max log file size:"),
        spec.max_log_file_size()
    );
}

fn print_unit(name: &str, version: &str, source: &Source) {
    println!("    {}", Style::new().bold().yellow().apply_to(display_name(name)));
    println!(
        "      {} {}",
        Style::new().bold().apply_to("Version:"),
        display_field(version)
    );
    println!(
        "      {} {}",
        Style::new().bold().apply_to("SHA1:"),
        display_field(&source.sha1)
    );
    println!(
        "      {} {}",
        Style::new().bold().apply_to("Blobstore ID:"),
        display_field(&source.blobstore_id)
    );
}

fn display_name(name: &str) -> &str {
    if name.is_empty() { "(unnamed)" } else { name }
}

fn display_field(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_empty() {
        assert_eq!(display_name(""), "(unnamed)");
    }

    #[test]
    fn test_display_name_present() {
        assert_eq!(display_name("router"), "router");
    }

    #[test]
    fn test_display_field_empty() {
        assert_eq!(display_field(""), "-");
    }

    #[test]
    fn test_display_field_present() {
        assert_eq!(display_field("fake-sha1"), "fake-sha1");
    }
}
