use anyhow::Result;
use console::style;
use std::io::Write;

use crate::cli::Cli;
use crate::registry::LocaleRegistry;

/// Execute the requested command. Returns `false` when something was left unresolved.
pub fn run(cli: &Cli, registry: &LocaleRegistry, out: &mut dyn Write) -> Result<bool> {
    if cli.list {
        list_locales(registry, out)?;
        return Ok(true);
    }
    if cli.missing {
        return report_missing(registry, out);
    }

    let mut all_ok = true;
    for key in &cli.keys {
        match registry.lookup(key) {
            Some(message) => writeln!(out, "{}", message)?,
            None => {
                eprintln!("lingo: {}: {}", registry.translate("cli.unresolved"), key);
                writeln!(out, "{}", key)?;
                all_ok = false;
            }
        }
    }
    Ok(all_ok)
}

fn list_locales(registry: &LocaleRegistry, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}:", registry.translate("cli.locales_header"))?;
    for locale in registry.locales() {
        let count = registry.dictionary(locale.as_str()).map_or(0, |d| d.len());
        let mut markers = vec![];
        if registry.current_locale() == Some(locale) {
            markers.push(registry.translate("cli.active"));
        }
        if registry.fallback_locale() == Some(locale) {
            markers.push(registry.translate("cli.fallback"));
        }

        write!(
            out,
            "  {:<8} {} {}",
            style(locale).bold(),
            count,
            registry.translate("cli.keys")
        )?;
        if !markers.is_empty() {
            write!(out, " ({})", style(markers.join(", ")).cyan())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn report_missing(registry: &LocaleRegistry, out: &mut dyn Write) -> Result<bool> {
    let Some(locale) = registry.current_locale() else {
        return Ok(true);
    };
    let missing = registry.missing_keys(locale);
    if missing.is_empty() {
        writeln!(out, "{}", registry.translate("cli.no_missing"))?;
        return Ok(true);
    }

    writeln!(out, "{} {}:", registry.translate("cli.missing_header"), locale)?;
    for key in missing {
        writeln!(out, "  {}", style(key).yellow())?;
    }
    Ok(false)
}
