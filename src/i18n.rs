use anyhow::{Context, Result};
use sys_locale::get_locale;
use tracing::debug;

use crate::cli::Cli;
use crate::locale::LocaleCode;
use crate::registry::{InitOptions, LocaleRegistry};
use crate::source;

/// Locale value that selects the operating-system locale.
pub const AUTO_LOCALE: &str = "auto";

/// Startup routine: register every dictionary, then initialize.
pub fn init(cli: &Cli) -> Result<LocaleRegistry> {
    let mut registry = LocaleRegistry::new();

    let base = source::create_source(cli.dir.clone());
    debug!(source = base.source_name(), "loading dictionaries");
    source::register_all(&mut registry, base.as_ref())?;

    if !cli.no_overlay
        && let Some(overlay) = source::overlay_source()
    {
        debug!(dir = ?overlay.dir(), "loading overlay dictionaries");
        source::register_all(&mut registry, &overlay)?;
    }

    let requested = cli.locale.clone().or_else(|| {
        std::env::var("LINGO_LOCALE")
            .ok()
            .filter(|s| !s.trim().is_empty())
    });
    let mut options = resolve_options(requested.as_deref(), &cli.fallback, &registry)?;
    // Unresolved keys are reported by the command itself.
    options.warn_on_missing = false;
    registry.initialize(options);
    Ok(registry)
}

/// Build the init options. Without a requested locale the fallback is
/// active; `auto` picks the operating-system locale if a dictionary
/// matches it.
pub fn resolve_options(
    requested: Option<&str>,
    fallback: &str,
    registry: &LocaleRegistry,
) -> Result<InitOptions> {
    let fallback = LocaleCode::new(fallback).context("invalid fallback locale")?;
    let mut options = InitOptions::new(fallback.clone());

    options.initial_locale = match requested.map(str::trim) {
        None => Some(fallback),
        Some(code) if code.eq_ignore_ascii_case(AUTO_LOCALE) => {
            let system = get_locale();
            debug!(system = ?system, "detecting locale from the operating system");
            system
                .and_then(|s| match_system_locale(&s, &registry.locales()))
                .or(Some(fallback))
        }
        Some(code) => Some(LocaleCode::new(code).context("invalid locale")?),
    };
    Ok(options)
}

/// Match an OS locale string (`ja_JP.UTF-8`, `ru-RU`) against registered
/// locales, first exactly and then by language.
pub fn match_system_locale(system: &str, available: &[&LocaleCode]) -> Option<LocaleCode> {
    let tag = system.split(['.', '@']).next().unwrap_or(system);
    let locale = LocaleCode::new(tag).ok()?;

    if let Some(exact) = available.iter().find(|c| ***c == locale) {
        return Some((*exact).clone());
    }
    available
        .iter()
        .find(|c| c.as_str() == locale.language())
        .map(|c| (*c).clone())
}
