//! Builder for constructing SbomReadModel from domain objects

use super::component_view::{ComponentView, LicenseView};
use super::sbom_read_model::{SbomMetadataView, SbomReadModel};
use crate::sbom_generation::domain::{ResolvedComponent, SbomMetadata};
use std::collections::HashSet;

/// Builder for constructing SbomReadModel from resolved components
pub struct SbomReadModelBuilder;

impl SbomReadModelBuilder {
    /// Builds the read model
    ///
    /// Components are ordered by name, then version, so output does not
    /// depend on discovery order. The same port installed for several
    /// triplets resolves to identical identities; those collapse into one
    /// component (the first one discovered). Every `bom-ref` is unique.
    pub fn build(components: &[ResolvedComponent], metadata: &SbomMetadata) -> SbomReadModel {
        let mut views: Vec<ComponentView> = components.iter().map(Self::build_component).collect();
        views.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.version.cmp(&b.version))
                .then_with(|| a.purl.cmp(&b.purl))
                .then_with(|| a.cpe.cmp(&b.cpe))
        });
        views.dedup_by(|next, kept| {
            next.name == kept.name
                && next.version == kept.version
                && next.purl == kept.purl
                && next.cpe == kept.cpe
        });
        Self::assign_unique_refs(&mut views);

        SbomReadModel {
            metadata: Self::build_metadata(metadata),
            components: views,
        }
    }

    /// Distinct components can still share a PURL (a template without
    /// `{version}`, for example); later ones get a numbered suffix.
    fn assign_unique_refs(views: &mut [ComponentView]) {
        let mut used = HashSet::new();
        for view in views.iter_mut() {
            let mut candidate = view.bom_ref.clone();
            let mut n = 1;
            while used.contains(&candidate) {
                n += 1;
                candidate = format!("{}-{}", view.bom_ref, n);
            }
            used.insert(candidate.clone());
            view.bom_ref = candidate;
        }
    }

    fn build_metadata(metadata: &SbomMetadata) -> SbomMetadataView {
        SbomMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            serial_number: metadata.serial_number().to_string(),
        }
    }

    fn build_component(component: &ResolvedComponent) -> ComponentView {
        let identity = &component.identity;
        ComponentView {
            bom_ref: identity.purl.clone(),
            name: identity.name.clone(),
            version: identity.version.clone(),
            purl: identity.purl.clone(),
            cpe: identity.cpe.clone(),
            description: component.description.clone(),
            license: component.license.as_ref().map(|expression| LicenseView {
                expression: expression.clone(),
            }),
            homepage: component.homepage.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::ResolvedIdentity;

    fn component(name: &str, version: &str, license: Option<&str>) -> ResolvedComponent {
        ResolvedComponent {
            identity: ResolvedIdentity {
                name: name.to_string(),
                version: version.to_string(),
                cpe: format!("cpe:2.3:a:{0}:{0}:{1}:*:*:*:*:*:*:*", name, version),
                purl: format!("pkg:generic/{}@{}", name, version),
                matched_pattern: name.to_string(),
            },
            description: None,
            license: license.map(String::from),
            homepage: Some(format!("https://example.org/{}", name)),
        }
    }

    fn metadata() -> SbomMetadata {
        SbomMetadata::new(
            "2026-01-01T00:00:00Z".to_string(),
            "vcpkg-sbom".to_string(),
            "0.1.0".to_string(),
            "urn:uuid:3e671687-395b-41f5-a30f-a58921a69b79".to_string(),
        )
    }

    #[test]
    fn test_build_sorts_by_name_then_version() {
        let components = vec![
            component("zlib", "1.3.1", None),
            component("bzip2", "1.0.8#6", None),
            component("abseil", "2024.01.16", None),
            component("abseil", "2023.08.02", None),
        ];

        let model = SbomReadModelBuilder::build(&components, &metadata());

        let order: Vec<(&str, &str)> = model
            .components
            .iter()
            .map(|c| (c.name.as_str(), c.version.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("abseil", "2023.08.02"),
                ("abseil", "2024.01.16"),
                ("bzip2", "1.0.8#6"),
                ("zlib", "1.3.1"),
            ]
        );
    }

    #[test]
    fn test_build_component_fields() {
        let model =
            SbomReadModelBuilder::build(&[component("zlib", "1.3.1", Some("Zlib"))], &metadata());

        let view = &model.components[0];
        assert_eq!(view.bom_ref, "pkg:generic/zlib@1.3.1");
        assert_eq!(view.bom_ref, view.purl);
        assert_eq!(view.cpe, "cpe:2.3:a:zlib:zlib:1.3.1:*:*:*:*:*:*:*");
        assert_eq!(view.license.as_ref().map(|l| l.expression.as_str()), Some("Zlib"));
        assert_eq!(view.homepage.as_deref(), Some("https://example.org/zlib"));
        assert_eq!(model.metadata.tool_name, "vcpkg-sbom");
    }

    #[test]
    fn test_build_collapses_same_port_from_several_triplets() {
        let mut windows = component("zlib", "1.3.1", Some("Zlib"));
        windows.description = Some("x64-windows build".to_string());
        let components = vec![
            component("zlib", "1.3.1", Some("Zlib")),
            component("fmt", "11.0.2", None),
            windows,
        ];

        let model = SbomReadModelBuilder::build(&components, &metadata());

        let refs: Vec<&str> = model.components.iter().map(|c| c.bom_ref.as_str()).collect();
        assert_eq!(refs, vec!["pkg:generic/fmt@11.0.2", "pkg:generic/zlib@1.3.1"]);
        assert_eq!(model.components[1].description, None);
    }

    #[test]
    fn test_build_shared_purl_gets_unique_refs() {
        let mut first = component("qt5-base", "5.15.16", None);
        let mut second = component("qt5-svg", "5.15.16", None);
        let mut third = component("qt5-tools", "5.15.16", None);
        for c in [&mut first, &mut second, &mut third] {
            c.identity.purl = "pkg:generic/qt@5.15.16".to_string();
        }

        let model = SbomReadModelBuilder::build(&[first, second, third], &metadata());

        let refs: Vec<&str> = model.components.iter().map(|c| c.bom_ref.as_str()).collect();
        assert_eq!(
            refs,
            vec![
                "pkg:generic/qt@5.15.16",
                "pkg:generic/qt@5.15.16-2",
                "pkg:generic/qt@5.15.16-3",
            ]
        );
        assert!(model.components.iter().all(|c| c.purl == "pkg:generic/qt@5.15.16"));
    }

    #[test]
    fn test_build_empty() {
        let model = SbomReadModelBuilder::build(&[], &metadata());
        assert!(model.components.is_empty());
        assert!(model.metadata.serial_number.starts_with("urn:uuid:"));
    }
}
