//! `resolve` command: print the signing identity without its secrets.

use crate::{
    cli::{ResolveArgs, RuntimeConfig},
    error::Result,
    release::{CredentialResolver, IdentitySummary, ProcessEnvironment},
};

pub fn execute(args: &ResolveArgs, config: &RuntimeConfig) -> Result<i32> {
    let identity = CredentialResolver::new().resolve(&args.project_root, &ProcessEnvironment)?;
    let summary = identity.summary();

    if args.json {
        config.report(&serde_json::to_string_pretty(&summary)?)?;
    } else {
        print_summary(&summary, config)?;
    }

    Ok(0)
}

pub(super) fn print_summary(summary: &IdentitySummary, config: &RuntimeConfig) -> Result<()> {
    let presence = |set: bool| if set { "set" } else { "not set" };

    config.section("Signing identity")?;
    config.indent(&format!("Keystore:       {}", summary.store_file.display()))?;
    config.indent(&format!(
        "Store password: {}",
        presence(summary.store_password_set)
    ))?;
    config.indent(&format!(
        "Key alias:      {}",
        summary.key_alias.as_deref().unwrap_or("not set")
    ))?;
    config.indent(&format!(
        "Key password:   {}",
        presence(summary.key_password_set)
    ))?;

    if !summary.missing.is_empty() {
        let names: Vec<&str> = summary.missing.iter().map(|k| k.as_str()).collect();
        config.warn(&format!(
            "Not set in local.properties or environment: {} (release signing will fail)",
            names.join(", ")
        ))?;
    }

    Ok(())
}
