//! The `list` command: print enabled items from a config section.
#![allow(clippy::print_stdout)]

use anyhow::Result;
use serde_yaml::{Mapping, Value};

use crate::cli::ListOpts;
use crate::config::accessor;
use crate::logging::Logger;

/// Run the `list` command.
///
/// Output shape depends on the flags, checked in this order: `--json`
/// prints the raw enabled items, `--names-only` prints one name per
/// line, and the default prints `name: desc` (or just the name when
/// there is no description). An empty `group` argument is treated the
/// same as an omitted one.
///
/// # Errors
///
/// Returns an error when the config file is missing or unreadable.
pub fn run(opts: &ListOpts, log: &Logger) -> Result<()> {
    let doc = super::load_query_document(&opts.config, log)?;
    let group = opts.group.as_deref().filter(|group| !group.is_empty());

    if opts.json {
        println!("{}", accessor::to_json(&doc, &opts.section, group));
        return Ok(());
    }

    if opts.names_only {
        let names = match group {
            Some(group) => accessor::package_names(&doc, &opts.section, group),
            None => accessor::top_level_names(&doc, &opts.section),
        };
        for name in names {
            println!("{name}");
        }
        return Ok(());
    }

    for item in select_items(&doc, &opts.section, group) {
        let Some(name) = accessor::item_name(&item) else {
            continue;
        };
        match item.get("desc") {
            Some(desc) if accessor::is_truthy(desc) => {
                println!("{name}: {}", accessor::render_value(desc));
            }
            _ => println!("{name}"),
        }
    }
    Ok(())
}

/// Enabled items for the requested section, grouped or flat.
fn select_items(doc: &Value, section: &str, group: Option<&str>) -> Vec<Mapping> {
    match group {
        Some(group) => accessor::enabled_items(doc, section, group),
        None => accessor::enabled_top_level(doc, section),
    }
}
