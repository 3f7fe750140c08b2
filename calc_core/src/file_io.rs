//! # File I/O Module
//!
//! Reads cost inputs and writes results and templates:
//! - **Validated loads**: an input is checked against the domain rules as it
//!   is read, so a loaded `CostInput` has already passed `validate()`
//! - **Atomic saves**: write to `.tmp`, sync, rename to prevent half-written files
//!
//! ## File Format
//!
//! Inputs, templates and results are plain JSON objects with snake_case keys.
//! Files are written pretty-printed with a 4-space indent.
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::calculations::calculate;
//! use calc_core::file_io::{load_input, save_json};
//! use std::path::Path;
//!
//! let input = load_input(Path::new("job.json"))?;
//! let result = calculate(&input)?;
//! save_json(&result, Path::new("job_cost.json"))?;
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::calculations::CostInput;
use crate::errors::{CalcError, CalcResult};

/// Default file name used by template mode
pub const DEFAULT_TEMPLATE_FILE: &str = "fdmcalc_template.json";

/// Load and validate a cost input from a JSON file.
///
/// # Returns
///
/// * `Ok(CostInput)` - Parsed input that passed validation
/// * `Err(CalcError::InputNotFound)` - Path does not exist
/// * `Err(CalcError::FileError)` - Path exists but could not be read
/// * `Err(CalcError::MalformedInput)` - Invalid JSON or UTF-8, missing or wrong-typed fields
/// * `Err(CalcError::InvalidInput)` - Parsed, but a value violates a domain rule
pub fn load_input(path: &Path) -> CalcResult<CostInput> {
    if !path.exists() {
        return Err(CalcError::input_not_found(path.display().to_string()));
    }

    let bytes = fs::read(path).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let input: CostInput = serde_json::from_slice(&bytes)
        .map_err(|e| CalcError::malformed_input(path.display().to_string(), e.to_string()))?;

    input.validate()?;

    debug!(path = %path.display(), "loaded cost input");
    Ok(input)
}

/// Serialize a value to JSON.
///
/// Compact output is a single line (for stdout); pretty output uses a
/// 4-space indent (for files).
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> CalcResult<String> {
    if !pretty {
        return Ok(serde_json::to_string(value)?);
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;

    String::from_utf8(buf).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })
}

/// Save a value as pretty JSON with atomic write semantics.
///
/// The save process:
/// 1. Serialize to JSON
/// 2. Write to `<path>.tmp`
/// 3. Sync to disk (fsync)
/// 4. Rename `.tmp` to the final path
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> CalcResult<()> {
    let json = to_json(value, true)?;
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    let written = tmp_file
        .write_all(json.as_bytes())
        .and_then(|_| tmp_file.sync_all());
    drop(tmp_file);
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(CalcError::file_error(
            "write temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        ));
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), bytes = json.len(), "saved JSON");
    Ok(())
}

/// Write the all-zero input template to `path`.
pub fn write_template(path: &Path) -> CalcResult<()> {
    save_json(&CostInput::template(), path)
}

/// Get the temp file path used while saving
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp: OsString = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::calculate;
    use std::env::temp_dir;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("fdmcalc_test_{}_{}.json", name, std::process::id()))
    }

    const REFERENCE_JOB: &str = r#"{
        "material_used_grams": 100,
        "material_cost_per_kg": 20,
        "energy_cost_per_kWh": 0.3,
        "machine_preheat_time_seconds": 600,
        "machine_preheat_kWh": 0.5,
        "machine_operating_time_hours": 2,
        "machine_operating_kWh": 0.8,
        "machine_cost_purchase": 500,
        "machine_lifespan_years": 5,
        "machine_repair_percentage": 0.1,
        "operator_job_hours": 1,
        "operator_wage_hourly": 15,
        "shipping_cost": 5,
        "margin_percentage": 0.2,
        "taxes_percentage": 0.1
    }"#;

    #[test]
    fn test_tmp_path_generation() {
        let tmp = tmp_path_for(Path::new("/path/to/result.json"));
        assert_eq!(tmp, Path::new("/path/to/result.json.tmp"));
    }

    #[test]
    fn test_load_reference_job() {
        let path = temp_path("reference");
        fs::write(&path, REFERENCE_JOB).unwrap();

        let input = load_input(&path).unwrap();
        assert_eq!(input.material_used_grams, 100.0);
        assert_eq!(input.energy_cost_per_kwh, 0.3);

        let result = calculate(&input).unwrap();
        assert!((result.total_cost - 23.6397).abs() < 1e-3);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_path("does_not_exist");
        let err = load_input(&path).unwrap_err();
        assert_eq!(err.error_code(), "INPUT_NOT_FOUND");
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_path("garbage");
        fs::write(&path, "{ not json").unwrap();

        let err = load_input(&path).unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_INPUT");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_invalid_utf8() {
        let path = temp_path("bad_utf8");
        fs::write(&path, b"{\"material_used_grams\": \xff\xfe }").unwrap();

        let err = load_input(&path).unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_INPUT");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_field() {
        let path = temp_path("missing_field");
        fs::write(&path, r#"{ "material_used_grams": 10.0 }"#).unwrap();

        match load_input(&path).unwrap_err() {
            CalcError::MalformedInput { reason, .. } => assert!(reason.contains("missing field")),
            other => panic!("unexpected error: {other:?}"),
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_wrong_type() {
        let path = temp_path("wrong_type");
        let json = REFERENCE_JOB.replace("\"shipping_cost\": 5", "\"shipping_cost\": \"five\"");
        fs::write(&path, json).unwrap();

        let err = load_input(&path).unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_INPUT");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_zero_lifespan() {
        let path = temp_path("zero_lifespan");
        let json = REFERENCE_JOB.replace("\"machine_lifespan_years\": 5", "\"machine_lifespan_years\": 0");
        fs::write(&path, json).unwrap();

        let err = load_input(&path).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_template_roundtrip() {
        let path = temp_path("template");
        write_template(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("    \"machine_lifespan_years\": 1.0"));

        let loaded = load_input(&path).unwrap();
        assert_eq!(loaded, CostInput::template());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_path("atomic");
        let result = calculate(&CostInput::template()).unwrap();
        save_json(&result, &path).unwrap();

        assert!(!tmp_path_for(&path).exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let path = temp_dir().join("fdmcalc_no_such_dir").join("out.json");
        let err = save_json(&CostInput::template(), &path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_compact_json_is_single_line() {
        let json = to_json(&CostInput::template(), false).unwrap();
        assert!(!json.contains('\n'));

        let pretty = to_json(&CostInput::template(), true).unwrap();
        assert!(pretty.contains('\n'));
    }
}
