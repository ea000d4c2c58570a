use std::env;
use std::fs;

use anyhow::{Context, Result};

use yamlfields::quantity::{format_duration, format_file_size};
use yamlfields::yaml;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let path = args.next().context("Missing path argument")?;

    let source = fs::read_to_string(&path).with_context(|| path.clone())?;
    let node: serde_yaml::Value = serde_yaml::from_str(&source).with_context(|| path.clone())?;

    let name = yaml::string_from(&node, "name", "unnamed")?;
    let max_size = yaml::file_size_from(&node, "max-size", 0)?;
    let interval = yaml::duration_from(&node, "interval", 0)?;
    let paths = yaml::lenient_string_list_from(&node, "paths", Vec::new())?;

    let options = yaml::Options::new().with_quantities(yaml::QuantityStyle::Human);
    let mut out = yaml::Emitter::with_options(options);
    out.string("name", &name);
    out.file_size("max-size", max_size);
    out.duration("interval", interval);
    out.string_list("paths", &paths.items, false);

    print!("{out}");

    if paths.needs_save {
        eprintln!("{path}: paths should be stored as a list");
    }

    eprintln!(
        "{name}: {} every {}",
        format_file_size(max_size),
        format_duration(interval)
    );

    Ok(())
}
