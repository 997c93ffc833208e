use std::path::{Path, PathBuf};
use vcpkg_sbom::prelude::*;

/// Mock SpdxSourceReader serving in-memory `vcpkg.spdx.json` documents
#[derive(Default)]
pub struct MockSpdxSourceReader {
    documents: Vec<(PathBuf, String)>,
}

#[allow(dead_code)]
impl MockSpdxSourceReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a well-formed document for `name`/`version`
    pub fn with_port(self, name: &str, version: &str, license: &str) -> Self {
        let content = format!(
            r#"{{
                "spdxVersion": "SPDX-2.2",
                "name": "{name}:x64-linux@{version} 0badc0de",
                "packages": [
                    {{"name": "{name}", "SPDXID": "SPDXRef-port", "versionInfo": "{version}",
                      "licenseConcluded": "{license}", "copyrightText": "NOASSERTION"}},
                    {{"name": "{name}:x64-linux", "SPDXID": "SPDXRef-binary", "versionInfo": "0badc0de"}}
                ]
            }}"#
        );
        self.with_document(name, &content)
    }

    pub fn with_document(mut self, port: &str, content: &str) -> Self {
        self.documents.push((
            PathBuf::from(format!("installed/x64-linux/share/{}/vcpkg.spdx.json", port)),
            content.to_string(),
        ));
        self
    }
}

impl SpdxSourceReader for MockSpdxSourceReader {
    fn discover_sources(&self, _installed_root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.documents.iter().map(|(path, _)| path.clone()).collect())
    }

    fn read_source(&self, path: &Path) -> Result<String> {
        self.documents
            .iter()
            .find(|(candidate, _)| candidate == path)
            .map(|(_, content)| content.clone())
            .ok_or_else(|| anyhow::anyhow!("no such document: {}", path.display()))
    }
}
