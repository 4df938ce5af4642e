//! Workspace maintenance tasks, run as `cargo xtask <command>`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context};
use regex_lite::Regex;
use serde::Deserialize;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_root: PathBuf,
}

#[derive(Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Deserialize)]
struct Dependency {
    name: String,
}

/// Crate-level and module-level layering rules.
///
/// Crate graph: domain sits at the bottom, shared may use domain, the client
/// may use both. Inside the client crate, `application` and `ports` stay free
/// of UI and platform code, and `ui` never talks to the HTTP crates directly.
fn arch_check() -> anyhow::Result<()> {
    let metadata = load_metadata()?;
    check_crate_graph(&metadata)?;
    check_client_modules(&metadata.workspace_root)?;
    println!("arch-check: ok");
    Ok(())
}

fn load_metadata() -> anyhow::Result<Metadata> {
    let output = Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        bail!("cargo metadata failed");
    }

    serde_json::from_slice(&output.stdout).context("parsing cargo metadata")
}

fn check_crate_graph(metadata: &Metadata) -> anyhow::Result<()> {
    let allowed: BTreeMap<&str, &[&str]> = BTreeMap::from([
        ("lorecrafter-domain", &[][..]),
        ("lorecrafter-shared", &["lorecrafter-domain"][..]),
        (
            "lorecrafter-client",
            &["lorecrafter-domain", "lorecrafter-shared"][..],
        ),
        ("xtask", &[][..]),
    ]);

    for package in &metadata.packages {
        let Some(allowed_deps) = allowed.get(package.name.as_str()) else {
            bail!(
                "unknown workspace crate {} (add it to xtask's layering table)",
                package.name
            );
        };
        for dep in &package.dependencies {
            let internal = dep.name.starts_with("lorecrafter-") || dep.name == "xtask";
            if internal && !allowed_deps.contains(&dep.name.as_str()) {
                bail!("{} must not depend on {}", package.name, dep.name);
            }
        }
    }

    Ok(())
}

struct ModuleRule {
    dir: &'static str,
    forbidden: &'static str,
    reason: &'static str,
}

const MODULE_RULES: &[ModuleRule] = &[
    ModuleRule {
        dir: "crates/client/src/application",
        forbidden: r"dioxus::|crate::(ui|infrastructure|state)\b",
        reason: "application layer depends on ports and domain only",
    },
    ModuleRule {
        dir: "crates/client/src/ports",
        forbidden: r"dioxus::|crate::(application|ui|infrastructure|state)\b",
        reason: "ports define contracts and must not import implementations",
    },
    ModuleRule {
        dir: "crates/client/src/ui",
        forbidden: r"\breqwest\b|\bgloo_net\b",
        reason: "UI goes through the API port, never the HTTP crates",
    },
];

fn check_client_modules(workspace_root: &Path) -> anyhow::Result<()> {
    for rule in MODULE_RULES {
        let pattern = Regex::new(rule.forbidden).context("compiling rule pattern")?;
        let dir = workspace_root.join(rule.dir);
        let mut sources = Vec::new();
        collect_rust_sources(&dir, &mut sources)
            .with_context(|| format!("walking {}", dir.display()))?;

        for path in sources {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            for (index, line) in text.lines().enumerate() {
                if pattern.is_match(line) {
                    bail!(
                        "{}:{}: {} ({})",
                        path.display(),
                        index + 1,
                        line.trim(),
                        rule.reason
                    );
                }
            }
        }
    }

    Ok(())
}

fn collect_rust_sources(dir: &Path, out: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_rust_sources(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
    Ok(())
}
