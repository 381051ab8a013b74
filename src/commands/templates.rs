//! Implementation of the `diffsum templates` command.

use super::current_dir;
use crate::cli::TemplatesArgs;
use crate::config::Config;
use crate::error::Result;
use crate::render::TEMPLATE_FIELDS;

/// Execute the `diffsum templates` command.
pub fn cmd_templates(args: TemplatesArgs) -> Result<()> {
    let cwd = current_dir()?;
    let config = Config::discover(args.config.as_deref(), &cwd)?;

    print!("{}", format_templates(&config));
    Ok(())
}

/// Named templates with their bodies indented, followed by the field list.
fn format_templates(config: &Config) -> String {
    let mut out = String::new();

    if config.templates.is_empty() {
        out.push_str("No templates configured.\n");
    } else {
        out.push_str("Templates:\n");
        for (name, body) in &config.templates {
            out.push_str(&format!("  {}\n", name));
            for line in body.lines() {
                out.push_str(&format!("    {}\n", line));
            }
        }
    }

    out.push_str(&format!("\nFields: {}\n", TEMPLATE_FIELDS.join(", ")));
    out
}
