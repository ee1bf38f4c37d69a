use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Crates the domain must stay free of, as dependencies or in source.
const RUNTIME_CRATES: &[&str] = &["tokio", "tracing", "tracing-subscriber", "dotenvy", "mockall"];
const DOMAIN_PACKAGE: &str = "pinball-ads-domain";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    manifest_path: PathBuf,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let domain = metadata
        .packages
        .iter()
        .find(|p| p.name == DOMAIN_PACKAGE)
        .with_context(|| format!("{DOMAIN_PACKAGE} not found in workspace"))?;

    let mut violations = dependency_violations(domain);

    let src = domain
        .manifest_path
        .parent()
        .context("domain manifest has no parent directory")?
        .join("src");
    violations.extend(source_violations(&src)?);

    if violations.is_empty() {
        println!("arch-check: {DOMAIN_PACKAGE} is runtime-free");
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} architecture violation(s)", violations.len())
}

/// Normal (non-dev) dependencies on runtime crates.
fn dependency_violations(package: &Package) -> Vec<String> {
    package
        .dependencies
        .iter()
        .filter(|d| d.kind.as_deref() != Some("dev"))
        .filter(|d| RUNTIME_CRATES.contains(&d.name.as_str()))
        .map(|d| format!("{} depends on {}", package.name, d.name))
        .collect()
}

/// `use tokio::...`-style references anywhere under `dir`.
fn source_violations(dir: &Path) -> anyhow::Result<Vec<String>> {
    let crates = RUNTIME_CRATES
        .iter()
        .map(|name| name.replace('-', "_"))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = regex_lite::Regex::new(&format!(r"\b(?:{crates})::"))
        .context("building runtime crate pattern")?;

    let mut violations = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let entries =
            std::fs::read_dir(&dir).with_context(|| format!("reading {}", dir.display()))?;
        for entry in entries {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some("rs") {
                continue;
            }
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            for (line_no, line) in source.lines().enumerate() {
                if line.trim_start().starts_with("//") {
                    continue;
                }
                if let Some(m) = pattern.find(line) {
                    violations.push(format!(
                        "{}:{} references {}",
                        path.display(),
                        line_no + 1,
                        m.as_str().trim_end_matches("::")
                    ));
                }
            }
        }
    }
    Ok(violations)
}
