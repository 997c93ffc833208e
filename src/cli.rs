use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vcpkg_sbom::sbom_generation::policies::VersionMode;

/// Generate CycloneDX SBOMs for vcpkg installed trees
#[derive(Parser, Debug)]
#[command(name = "vcpkg-sbom")]
#[command(version)]
#[command(about = "Generate CycloneDX SBOMs with CPE and PURL identities for vcpkg installed trees", long_about = None)]
pub struct Cli {
    /// Path to a config file (defaults to ./vcpkg-sbom.config.yml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve every installed port and write the CycloneDX documents
    Build(BuildArgs),
    /// Report which ports of a vcpkg checkout have a mapping entry
    Audit(AuditArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// vcpkg installed root (e.g. vcpkg_installed/x64-linux)
    pub installed_root: PathBuf,

    /// Mapping file of port patterns to CPE/PURL templates [default: mapping.json]
    #[arg(short, long, value_name = "PATH")]
    pub mapping: Option<PathBuf>,

    /// CPE dictionary CSV with vendor and product columns [default: cpedict/data/cpes.csv]
    #[arg(long, value_name = "PATH")]
    pub cpedict: Option<PathBuf>,

    /// Directory receiving sbom.cyclonedx.json and sbom.cyclonedx.xml [default: .]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Ask for a mapping whenever a port has none, and save the answers
    #[arg(long)]
    pub edit_mapping: bool,

    /// Leave unmapped ports out of the SBOM instead of failing
    #[arg(long)]
    pub skip_missing: bool,

    /// Version substituted into templates: raw (1.3.1#2) or upstream (1.3.1) [default: raw]
    #[arg(long, value_name = "MODE")]
    pub cpe_version: Option<VersionMode>,

    /// Maximum number of CPE dictionary suggestions per unmapped port [default: 3]
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub suggestions: Option<u16>,
}

#[derive(Args, Debug)]
pub struct AuditArgs {
    /// vcpkg checkout containing the ports/ directory
    pub vcpkg_root: PathBuf,

    /// Mapping file to audit [default: mapping.json]
    #[arg(short, long, value_name = "PATH")]
    pub mapping: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
