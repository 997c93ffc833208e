/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative)
}

fn installed_root() -> PathBuf {
    fixture("installed/x64-linux")
}

/// Mapping file inside `dir` covering only zlib
fn write_partial_mapping(dir: &Path) -> PathBuf {
    let path = dir.join("mapping.json");
    fs::write(
        &path,
        r#"{
  "zlib": {
    "cpe": "cpe:2.3:a:{port}:{port}:{version}:*:*:*:*:*:*:*",
    "purl": "pkg:generic/{port}@{version}"
  }
}
"#,
    )
    .unwrap();
    path
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn component_names(bom: &Value) -> Vec<String> {
    bom["components"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("vcpkg-sbom").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("vcpkg-sbom")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("vcpkg-sbom")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Missing subcommand
    #[test]
    fn test_exit_code_missing_subcommand() {
        cargo_bin_cmd!("vcpkg-sbom").assert().code(2);
    }

    /// Exit code 2: Invalid version mode value
    #[test]
    fn test_exit_code_invalid_cpe_version() {
        cargo_bin_cmd!("vcpkg-sbom")
            .args(["build", "installed", "--cpe-version", "latest"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - mapping file does not exist
    #[test]
    fn test_exit_code_mapping_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("out");

        cargo_bin_cmd!("vcpkg-sbom")
            .current_dir(temp_dir.path())
            .arg("build")
            .arg(installed_root())
            .args(["--mapping", "missing.json"])
            .arg("--output-dir")
            .arg(&output_dir)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Mapping file not found"));

        assert!(!output_dir.exists());
    }

    /// Exit code 3: Application error - no SPDX documents under the root
    #[test]
    fn test_exit_code_no_sources() {
        let temp_dir = TempDir::new().unwrap();
        let mapping = write_partial_mapping(temp_dir.path());
        let empty_root = temp_dir.path().join("installed");
        fs::create_dir(&empty_root).unwrap();

        cargo_bin_cmd!("vcpkg-sbom")
            .current_dir(temp_dir.path())
            .arg("build")
            .arg(&empty_root)
            .arg("--mapping")
            .arg(&mapping)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("No vcpkg.spdx.json files found"));
    }

    /// Exit code 1: unmapped ports without --skip-missing
    #[test]
    fn test_exit_code_unresolved_ports() {
        let temp_dir = TempDir::new().unwrap();
        let mapping = write_partial_mapping(temp_dir.path());
        let output_dir = temp_dir.path().join("out");

        cargo_bin_cmd!("vcpkg-sbom")
            .current_dir(temp_dir.path())
            .arg("build")
            .arg(installed_root())
            .arg("--mapping")
            .arg(&mapping)
            .arg("--cpedict")
            .arg(fixture("cpedict/cpes.csv"))
            .arg("--output-dir")
            .arg(&output_dir)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("2 port(s) could not be resolved"))
            .stderr(predicate::str::contains("Port fmt (11.0.2#1) missing in mapping table"))
            .stderr(predicate::str::contains("fmt/fmt"));

        assert!(!output_dir.exists());
    }
}

#[test]
fn test_e2e_build_writes_json_and_xml() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("vcpkg-sbom")
        .current_dir(temp_dir.path())
        .arg("build")
        .arg(installed_root())
        .arg("--mapping")
        .arg(fixture("mapping.json"))
        .arg("--cpedict")
        .arg(fixture("cpedict/cpes.csv"))
        .arg("--output-dir")
        .arg(temp_dir.path())
        .assert()
        .code(0)
        .stderr(predicate::str::contains("SBOM generated with 3 component(s)"));

    let bom = read_json(&temp_dir.path().join("sbom.cyclonedx.json"));
    assert_eq!(bom["bomFormat"], "CycloneDX");
    assert_eq!(bom["specVersion"], "1.6");
    assert!(bom["serialNumber"].as_str().unwrap().starts_with("urn:uuid:"));
    assert_eq!(component_names(&bom), vec!["fmt", "vcpkg-cmake", "zlib"]);

    let components = bom["components"].as_array().unwrap();
    let zlib = &components[2];
    assert_eq!(zlib["cpe"], "cpe:2.3:a:zlib:zlib:1.3.1:*:*:*:*:*:*:*");
    assert_eq!(zlib["purl"], "pkg:generic/zlib@1.3.1");
    assert_eq!(zlib["bom-ref"], "pkg:generic/zlib@1.3.1");
    assert_eq!(zlib["licenses"][0]["expression"], "Zlib");
    assert_eq!(zlib["description"], "A compression library");
    assert_eq!(zlib["externalReferences"][0]["url"], "https://www.zlib.net/");

    let fmt = &components[0];
    assert_eq!(fmt["version"], "11.0.2#1");
    assert_eq!(fmt["purl"], "pkg:github/fmtlib/fmt@11.0.2#1");

    let cmake = &components[1];
    assert_eq!(
        cmake["cpe"],
        "cpe:2.3:a:microsoft:vcpkg-cmake:2024-04-23:*:*:*:*:*:*:*"
    );

    let xml = fs::read_to_string(temp_dir.path().join("sbom.cyclonedx.xml")).unwrap();
    assert!(xml.starts_with("<?xml"));
    assert!(xml.contains(r#"xmlns="http://cyclonedx.org/schema/bom/1.6""#));
    assert!(xml.contains("<cpe>cpe:2.3:a:zlib:zlib:1.3.1:*:*:*:*:*:*:*</cpe>"));
}

#[test]
fn test_e2e_build_several_triplets_yield_unique_components() {
    let temp_dir = TempDir::new().unwrap();
    let mapping = write_partial_mapping(temp_dir.path());
    let root = temp_dir.path().join("installed");
    let spdx = fs::read_to_string(fixture("installed/x64-linux/share/zlib/vcpkg.spdx.json")).unwrap();
    for triplet in ["x64-linux", "x64-windows"] {
        let share = root.join(triplet).join("share/zlib");
        fs::create_dir_all(&share).unwrap();
        fs::write(share.join("vcpkg.spdx.json"), &spdx).unwrap();
    }

    cargo_bin_cmd!("vcpkg-sbom")
        .current_dir(temp_dir.path())
        .arg("build")
        .arg(&root)
        .arg("--mapping")
        .arg(&mapping)
        .assert()
        .code(0)
        .stderr(predicate::str::contains("SBOM generated with 1 component(s)"));

    let bom = read_json(&temp_dir.path().join("sbom.cyclonedx.json"));
    let refs: Vec<&str> = bom["components"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["bom-ref"].as_str().unwrap())
        .collect();
    assert_eq!(refs, vec!["pkg:generic/zlib@1.3.1"]);

    let xml = fs::read_to_string(temp_dir.path().join("sbom.cyclonedx.xml")).unwrap();
    assert_eq!(xml.matches("bom-ref=\"pkg:generic/zlib@1.3.1\"").count(), 1);
}

#[test]
fn test_e2e_build_upstream_version_mode() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("vcpkg-sbom")
        .current_dir(temp_dir.path())
        .arg("build")
        .arg(installed_root())
        .arg("--mapping")
        .arg(fixture("mapping.json"))
        .args(["--cpe-version", "upstream"])
        .assert()
        .code(0);

    let bom = read_json(&temp_dir.path().join("sbom.cyclonedx.json"));
    let fmt = &bom["components"][0];
    assert_eq!(fmt["version"], "11.0.2#1");
    assert_eq!(fmt["cpe"], "cpe:2.3:a:fmt:fmt:11.0.2:*:*:*:*:*:*:*");
    assert_eq!(fmt["purl"], "pkg:github/fmtlib/fmt@11.0.2");
}

#[test]
fn test_e2e_build_skip_missing() {
    let temp_dir = TempDir::new().unwrap();
    let mapping = write_partial_mapping(temp_dir.path());

    cargo_bin_cmd!("vcpkg-sbom")
        .current_dir(temp_dir.path())
        .arg("build")
        .arg(installed_root())
        .arg("--mapping")
        .arg(&mapping)
        .arg("--skip-missing")
        .assert()
        .code(0)
        .stderr(predicate::str::contains(
            "Skipped 2 unmapped port(s): fmt, vcpkg-cmake",
        ));

    let bom = read_json(&temp_dir.path().join("sbom.cyclonedx.json"));
    assert_eq!(component_names(&bom), vec!["zlib"]);
}

#[test]
fn test_e2e_build_edit_mapping_persists_answers() {
    let temp_dir = TempDir::new().unwrap();
    let mapping = write_partial_mapping(temp_dir.path());

    // fmt: pick the first dictionary suggestion; vcpkg-cmake: custom entry
    cargo_bin_cmd!("vcpkg-sbom")
        .current_dir(temp_dir.path())
        .arg("build")
        .arg(installed_root())
        .arg("--mapping")
        .arg(&mapping)
        .arg("--cpedict")
        .arg(fixture("cpedict/cpes.csv"))
        .arg("--edit-mapping")
        .write_stdin("1\nc\nMicrosoft\nvcpkg-cmake\n\n")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("[EDIT] Port fmt (11.0.2#1) missing in mapping table."))
        .stderr(predicate::str::contains("1) fmt/fmt"))
        .stderr(predicate::str::contains("Updated mapping file"));

    // Existing keys keep their place, new ones are appended
    let raw = fs::read_to_string(&mapping).unwrap();
    let zlib_at = raw.find("\"zlib\"").unwrap();
    let fmt_at = raw.find("\"fmt\"").unwrap();
    let cmake_at = raw.find("\"vcpkg-cmake\"").unwrap();
    assert!(zlib_at < fmt_at && fmt_at < cmake_at);

    let saved = read_json(&mapping);
    assert_eq!(
        saved["vcpkg-cmake"]["cpe"],
        "cpe:2.3:a:microsoft:vcpkg-cmake:{version}:*:*:*:*:*:*:*"
    );
    assert_eq!(saved["fmt"]["purl"], "pkg:generic/{port}@{version}");

    let bom = read_json(&temp_dir.path().join("sbom.cyclonedx.json"));
    assert_eq!(component_names(&bom), vec!["fmt", "vcpkg-cmake", "zlib"]);
}

#[test]
fn test_e2e_build_edit_mapping_quit_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let mapping = write_partial_mapping(temp_dir.path());

    cargo_bin_cmd!("vcpkg-sbom")
        .current_dir(temp_dir.path())
        .arg("build")
        .arg(installed_root())
        .arg("--mapping")
        .arg(&mapping)
        .arg("--edit-mapping")
        .write_stdin("q\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Aborted by user request"));

    assert!(!temp_dir.path().join("sbom.cyclonedx.json").exists());
}

#[test]
fn test_e2e_config_file_discovered_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    let mapping = write_partial_mapping(temp_dir.path());
    fs::write(
        temp_dir.path().join("vcpkg-sbom.config.yml"),
        format!(
            "mapping: {}\noutput_dir: sbom\nskip_missing: true\nformat: markdown\n",
            mapping.display()
        ),
    )
    .unwrap();

    cargo_bin_cmd!("vcpkg-sbom")
        .current_dir(temp_dir.path())
        .arg("build")
        .arg(installed_root())
        .assert()
        .code(0)
        .stderr(predicate::str::contains(
            "Unknown config field 'format' will be ignored",
        ));

    let bom = read_json(&temp_dir.path().join("sbom/sbom.cyclonedx.json"));
    assert_eq!(component_names(&bom), vec!["zlib"]);
}

#[test]
fn test_e2e_cli_flag_overrides_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("ci.yml");
    fs::write(
        &config,
        format!("mapping: {}\n", fixture("mapping.json").display()),
    )
    .unwrap();
    let partial = write_partial_mapping(temp_dir.path());

    cargo_bin_cmd!("vcpkg-sbom")
        .current_dir(temp_dir.path())
        .arg("--config")
        .arg(&config)
        .arg("build")
        .arg(installed_root())
        .arg("--mapping")
        .arg(&partial)
        .assert()
        .code(1);
}

#[test]
fn test_e2e_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.yml");
    fs::write(&config, "cpe_version: newest\n").unwrap();

    cargo_bin_cmd!("vcpkg-sbom")
        .current_dir(temp_dir.path())
        .arg("--config")
        .arg(&config)
        .arg("build")
        .arg(installed_root())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cpe_version"));
}

#[test]
fn test_e2e_audit_to_stdout() {
    let temp_dir = TempDir::new().unwrap();

    let output = cargo_bin_cmd!("vcpkg-sbom")
        .current_dir(temp_dir.path())
        .arg("audit")
        .arg(fixture("vcpkg"))
        .arg("--mapping")
        .arg(fixture("mapping.json"))
        .assert()
        .code(0)
        .stderr(predicate::str::contains("2 port(s) without a mapping entry"))
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        report,
        serde_json::json!([
            {"port": "abseil", "mapped": false},
            {"port": "boost-asio", "mapped": false},
            {"port": "fmt", "mapped": true},
            {"port": "zlib", "mapped": true}
        ])
    );
}

#[test]
fn test_e2e_audit_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let report_path = temp_dir.path().join("audit.json");

    cargo_bin_cmd!("vcpkg-sbom")
        .current_dir(temp_dir.path())
        .arg("audit")
        .arg(fixture("vcpkg"))
        .arg("--mapping")
        .arg(fixture("mapping.json"))
        .arg("--output")
        .arg(&report_path)
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());

    let report = read_json(&report_path);
    assert_eq!(report.as_array().unwrap().len(), 4);
}

#[test]
fn test_e2e_audit_missing_ports_directory() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("vcpkg-sbom")
        .current_dir(temp_dir.path())
        .arg("audit")
        .arg(temp_dir.path())
        .arg("--mapping")
        .arg(fixture("mapping.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid path"));
}
