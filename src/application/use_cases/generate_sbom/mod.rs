use crate::application::dto::{BuildRequest, BuildResponse};
use crate::ports::outbound::{
    CpeDictionaryReader, MappingPrompt, MappingRepository, ProgressReporter, PromptDecision,
    SpdxSourceReader,
};
use crate::sbom_generation::domain::{
    CpeDictionary, MappingEntry, MappingTable, PackageError, ResolvedComponent, SourcePackage,
    DEFAULT_PURL_TEMPLATE,
};
use crate::sbom_generation::services::{
    MappingResolver, SbomGenerator, SpdxExtractor, SuggestionEngine,
};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::Path;


/// What happened to one discovered SPDX document
#[derive(Debug)]
enum PortOutcome {
    Resolved(Box<ResolvedComponent>),
    /// Unmapped and omitted because of `skip_missing`
    Skipped(String),
    Failed(PackageError),
    /// The operator quit the interactive prompt
    Aborted,
}

/// GenerateSbomUseCase - resolves every installed port to a BOM component
///
/// Workflow:
/// 1. Load the Mapping Table (fatal if missing or malformed)
/// 2. Discover `share/<port>/vcpkg.spdx.json` documents (fatal if none)
/// 3. Load the optional CPE dictionary
/// 4. Resolve each port; per-port problems are collected, never thrown
/// 5. Persist the Mapping Table if interactive edits changed it
///
/// # Type Parameters
/// * `SR` - SpdxSourceReader implementation
/// * `MR` - MappingRepository implementation
/// * `DR` - CpeDictionaryReader implementation
/// * `PR` - ProgressReporter implementation
/// * `MP` - MappingPrompt implementation (only used with `edit_mapping`)
pub struct GenerateSbomUseCase<SR, MR, DR, PR, MP> {
    source_reader: SR,
    mapping_repository: MR,
    dictionary_reader: DR,
    progress_reporter: PR,
    mapping_prompt: Option<MP>,
}

impl<SR, MR, DR, PR, MP> GenerateSbomUseCase<SR, MR, DR, PR, MP>
where
    SR: SpdxSourceReader,
    MR: MappingRepository,
    DR: CpeDictionaryReader,
    PR: ProgressReporter,
    MP: MappingPrompt,
{
    pub fn new(
        source_reader: SR,
        mapping_repository: MR,
        dictionary_reader: DR,
        progress_reporter: PR,
        mapping_prompt: Option<MP>,
    ) -> Self {
        Self {
            source_reader,
            mapping_repository,
            dictionary_reader,
            progress_reporter,
            mapping_prompt,
        }
    }

    /// Executes the build
    ///
    /// # Errors
    /// Fatal conditions only: invalid request, missing or malformed mapping
    /// file, no SPDX documents, mapping write-back failure, or an operator
    /// abort (after a dirty table has been written back).
    pub fn execute(&self, request: BuildRequest) -> Result<BuildResponse> {
        request.validate()?;

        let mut table = self.load_mapping(&request.mapping_path)?;
        let sources = self.discover_sources(&request.installed_root)?;
        let dictionary = self.load_dictionary(&request.cpedict_path)?;

        let prompt = self.active_prompt(&request);
        let total = sources.len();

        let mut components = Vec::new();
        let mut skipped = Vec::new();
        let mut diagnostics = Vec::new();

        for (idx, path) in sources.iter().enumerate() {
            if prompt.is_none() {
                let label = path
                    .parent()
                    .and_then(Path::file_name)
                    .map(|name| name.to_string_lossy().into_owned());
                self.progress_reporter
                    .report_progress(idx + 1, total, label.as_deref());
            }

            let source = match self.read_source(path) {
                Ok(source) => source,
                Err(e) => {
                    diagnostics.push(e);
                    continue;
                }
            };

            match self.resolve_port(&source, &mut table, &dictionary, &request, prompt) {
                PortOutcome::Resolved(component) => components.push(*component),
                PortOutcome::Skipped(name) => skipped.push(name),
                PortOutcome::Failed(e) => diagnostics.push(e),
                PortOutcome::Aborted => {
                    self.persist_if_dirty(&table, &request.mapping_path)?;
                    return Err(SbomError::Aborted.into());
                }
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Resolved {} of {} port(s)",
            components.len(),
            total
        ));

        let mapping_updated = self.persist_if_dirty(&table, &request.mapping_path)?;

        skipped.sort();

        Ok(BuildResponse {
            components,
            skipped,
            diagnostics,
            metadata: SbomGenerator::generate_default_metadata(),
            mapping_updated,
        })
    }

    fn load_mapping(&self, path: &Path) -> Result<MappingTable> {
        self.progress_reporter
            .report(&format!("📖 Loading mapping table from: {}", path.display()));

        let table = self.mapping_repository.load_mapping(path)?;

        self.progress_reporter
            .report(&format!("✅ Loaded {} mapping entr(ies)", table.len()));
        Ok(table)
    }

    fn discover_sources(&self, installed_root: &Path) -> Result<Vec<std::path::PathBuf>> {
        self.progress_reporter.report(&format!(
            "🔍 Searching for SPDX documents under: {}",
            installed_root.display()
        ));

        let sources = self.source_reader.discover_sources(installed_root)?;
        if sources.is_empty() {
            return Err(SbomError::NoSourceFilesFound {
                root: installed_root.to_path_buf(),
            }
            .into());
        }

        self.progress_reporter
            .report(&format!("✅ Found {} port(s)", sources.len()));
        Ok(sources)
    }

    fn load_dictionary(&self, path: &Path) -> Result<CpeDictionary> {
        let dictionary = self.dictionary_reader.load_dictionary(path)?;

        if dictionary.is_empty() {
            self.progress_reporter.report(&format!(
                "ℹ️  No CPE dictionary entries at {}; CPE products are taken from port names",
                path.display()
            ));
        } else {
            self.progress_reporter.report(&format!(
                "📚 Loaded {} CPE dictionary entr(ies)",
                dictionary.len()
            ));
        }
        Ok(dictionary)
    }

    fn active_prompt(&self, request: &BuildRequest) -> Option<&MP> {
        if !request.edit_mapping {
            return None;
        }
        if self.mapping_prompt.is_none() {
            self.progress_reporter
                .report_error("⚠️  Warning: interactive mapping is not available; continuing without it");
        }
        self.mapping_prompt.as_ref()
    }

    /// Reads and parses one SPDX document; every failure is per-port
    fn read_source(&self, path: &Path) -> std::result::Result<SourcePackage, PackageError> {
        let content =
            self.source_reader
                .read_source(path)
                .map_err(|e| PackageError::SourceRecordMalformed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
        SpdxExtractor::extract(&content, path)
    }

    fn resolve_port(
        &self,
        source: &SourcePackage,
        table: &mut MappingTable,
        dictionary: &CpeDictionary,
        request: &BuildRequest,
        prompt: Option<&MP>,
    ) -> PortOutcome {
        let identity = source.identity();

        match MappingResolver::resolve(identity, table, dictionary, request.version_mode) {
            Ok(resolved) => {
                return PortOutcome::Resolved(Box::new(ResolvedComponent::new(resolved, source)))
            }
            Err(e) if !e.is_mapping_missing() => return PortOutcome::Failed(e),
            Err(_) => {}
        }

        let suggestions =
            SuggestionEngine::suggest(identity.name(), dictionary, request.suggestion_limit);

        if let Some(prompt) = prompt {
            let decision = prompt.prompt(identity.name(), identity.version(), &suggestions);
            let entry = match decision {
                PromptDecision::Abort => return PortOutcome::Aborted,
                PromptDecision::Skip => None,
                PromptDecision::Select(index) => suggestions.get(index).and_then(|choice| {
                    self.new_entry(&choice.vendor, &choice.product, DEFAULT_PURL_TEMPLATE)
                }),
                PromptDecision::Custom {
                    vendor,
                    product,
                    purl_template,
                } => self.new_entry(&vendor, &product, &purl_template),
            };

            if let Some(entry) = entry {
                self.progress_reporter.report(&format!(
                    "[OK] Added mapping for {}: {}",
                    identity.name(),
                    entry.cpe
                ));
                table.insert(identity.package_name().lookup_key(), entry);

                return match MappingResolver::resolve(
                    identity,
                    table,
                    dictionary,
                    request.version_mode,
                ) {
                    Ok(resolved) => {
                        PortOutcome::Resolved(Box::new(ResolvedComponent::new(resolved, source)))
                    }
                    Err(e) => PortOutcome::Failed(e),
                };
            }

            self.progress_reporter
                .report(&format!("[INFO] Skipping mapping for {}.", identity.name()));
        }

        if request.skip_missing {
            return PortOutcome::Skipped(identity.name().to_string());
        }

        PortOutcome::Failed(PackageError::MappingMissing {
            name: identity.name().to_string(),
            version: identity.version().to_string(),
            suggestions,
        })
    }

    fn new_entry(&self, vendor: &str, product: &str, purl_template: &str) -> Option<MappingEntry> {
        match MappingEntry::from_vendor_product(vendor, product, purl_template) {
            Ok(entry) => Some(entry),
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("⚠️  Warning: {}", e));
                None
            }
        }
    }

    /// Writes the table back when it was modified; returns whether it was
    fn persist_if_dirty(&self, table: &MappingTable, path: &Path) -> Result<bool> {
        if !table.is_dirty() {
            return Ok(false);
        }

        self.mapping_repository.save_mapping(path, table)?;
        self.progress_reporter
            .report(&format!("💾 Updated mapping file: {}", path.display()));
        Ok(true)
    }
}
