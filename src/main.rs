mod cli;
mod config;

use clap::Parser;
use cli::{AuditArgs, BuildArgs, Cli, Command};
use config::ConfigFile;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;
use vcpkg_sbom::adapters::outbound::console::{ConsoleMappingPrompt, StderrProgressReporter};
use vcpkg_sbom::adapters::outbound::filesystem::{FileSystemReader, JsonMappingRepository};
use vcpkg_sbom::adapters::outbound::formatters::AuditReportFormatter;
use vcpkg_sbom::application::dto::{AuditRequest, BuildRequest, OutputFormat};
use vcpkg_sbom::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use vcpkg_sbom::application::read_models::SbomReadModelBuilder;
use vcpkg_sbom::application::use_cases::{AuditMappingsUseCase, GenerateSbomUseCase};
use vcpkg_sbom::sbom_generation::domain::PackageError;
use vcpkg_sbom::sbom_generation::services::DEFAULT_SUGGESTION_LIMIT;
use vcpkg_sbom::shared::error::{ExitCode, SbomError};
use vcpkg_sbom::shared::Result;

const DEFAULT_MAPPING_PATH: &str = "mapping.json";
const DEFAULT_CPEDICT_PATH: &str = "cpedict/data/cpes.csv";
const DEFAULT_OUTPUT_DIR: &str = ".";

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    match run(cli) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Build(args) => run_build(args, &config),
        Command::Audit(args) => run_audit(args, &config),
    }
}

/// Explicit `--config` must exist; otherwise the working directory is searched.
fn load_config(path: Option<&Path>) -> Result<ConfigFile> {
    match path {
        Some(path) => config::load_config_from_path(path),
        None => Ok(config::discover_config(Path::new("."))?.unwrap_or_default()),
    }
}

/// Merges CLI flags over config values over built-in defaults
fn build_request(args: &BuildArgs, config: &ConfigFile) -> (BuildRequest, PathBuf) {
    let mapping = args
        .mapping
        .clone()
        .or_else(|| config.mapping.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MAPPING_PATH));
    let cpedict = args
        .cpedict
        .clone()
        .or_else(|| config.cpedict.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CPEDICT_PATH));
    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let request = BuildRequest::new(args.installed_root.clone(), mapping, cpedict)
        .with_edit_mapping(args.edit_mapping)
        .with_skip_missing(args.skip_missing || config.skip_missing.unwrap_or(false))
        .with_version_mode(
            args.cpe_version
                .or_else(|| config.version_mode())
                .unwrap_or_default(),
        )
        .with_suggestion_limit(
            args.suggestions
                .map(usize::from)
                .or(config.suggestion_limit)
                .unwrap_or(DEFAULT_SUGGESTION_LIMIT),
        );

    (request, output_dir)
}

fn run_build(args: BuildArgs, config: &ConfigFile) -> Result<ExitCode> {
    let (request, output_dir) = build_request(&args, config);
    validate_output_dir(&output_dir)?;

    let prompt = request.edit_mapping.then(ConsoleMappingPrompt::stdio);
    let use_case = GenerateSbomUseCase::new(
        FileSystemReader::new(),
        JsonMappingRepository::new(),
        FileSystemReader::new(),
        StderrProgressReporter::new(),
        prompt,
    );

    let response = use_case.execute(request)?;

    report_skipped(&response.skipped);

    if response.has_errors() {
        report_diagnostics(&response.diagnostics);
        return Ok(ExitCode::UnresolvedPackages);
    }

    let model = SbomReadModelBuilder::build(&response.components, &response.metadata);

    // Render everything before touching the output directory
    let mut documents = Vec::with_capacity(OutputFormat::ALL.len());
    for format in OutputFormat::ALL {
        eprintln!("{}", FormatterFactory::progress_message(format));
        let content = FormatterFactory::create(format).format(&model)?;
        documents.push((output_dir.join(format.file_name()), content));
    }

    prepare_output_dir(&output_dir)?;
    for (path, content) in documents {
        PresenterFactory::create(PresenterType::File(path.clone())).present(&content)?;
        eprintln!("💾 Wrote {}", path.display());
    }

    eprintln!(
        "{}",
        format!(
            "✅ SBOM generated with {} component(s)",
            model.components.len()
        )
        .green()
    );
    Ok(ExitCode::Success)
}

fn run_audit(args: AuditArgs, config: &ConfigFile) -> Result<ExitCode> {
    let mapping = args
        .mapping
        .or_else(|| config.mapping.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MAPPING_PATH));

    let use_case = AuditMappingsUseCase::new(
        FileSystemReader::new(),
        JsonMappingRepository::new(),
        StderrProgressReporter::new(),
    );
    let response = use_case.execute(AuditRequest::new(args.vcpkg_root, mapping))?;

    let report = AuditReportFormatter::new().format(&response)?;
    PresenterFactory::create(PresenterType::from_optional_path(args.output)).present(&report)?;

    let unmapped: Vec<&str> = response.unmapped().collect();
    if !unmapped.is_empty() {
        eprintln!(
            "{}",
            format!("⚠️  {} port(s) without a mapping entry:", unmapped.len()).yellow()
        );
        for port in unmapped {
            eprintln!("  - {}", port);
        }
    }

    Ok(ExitCode::Success)
}

/// Refuses an existing output path that is a symlink or not a directory.
/// A missing directory is fine; it is created only once there is output.
fn validate_output_dir(dir: &Path) -> Result<()> {
    if let Ok(metadata) = std::fs::symlink_metadata(dir) {
        if metadata.is_symlink() {
            return Err(SbomError::SecurityError {
                path: dir.to_path_buf(),
                reason: "Output directory is a symbolic link".to_string(),
                hint: "Point --output-dir at a real directory".to_string(),
            }
            .into());
        }
        if !metadata.is_dir() {
            return Err(SbomError::InvalidPath {
                path: dir.to_path_buf(),
                reason: "Not a directory".to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// Creates the output directory if needed
fn prepare_output_dir(dir: &Path) -> Result<()> {
    validate_output_dir(dir)?;
    if dir.is_dir() {
        return Ok(());
    }

    std::fs::create_dir_all(dir).map_err(|e| SbomError::FileWriteError {
        path: dir.to_path_buf(),
        details: e.to_string(),
    })?;
    Ok(())
}

fn report_skipped(skipped: &[String]) {
    if skipped.is_empty() {
        return;
    }
    eprintln!(
        "{}",
        format!(
            "⚠️  Skipped {} unmapped port(s): {}",
            skipped.len(),
            skipped.join(", ")
        )
        .yellow()
    );
}

fn report_diagnostics(diagnostics: &[PackageError]) {
    eprintln!(
        "\n{}",
        format!("❌ {} port(s) could not be resolved:", diagnostics.len())
            .red()
            .bold()
    );
    for diagnostic in diagnostics {
        eprintln!("  - {}", diagnostic);
    }

    if diagnostics.iter().any(PackageError::is_mapping_missing) {
        eprintln!(
            "\n💡 Hint: Add the missing ports to the mapping file, rerun with --edit-mapping, or pass --skip-missing"
        );
    }
    eprintln!("\nNo SBOM was written.");
}
