/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::{Path, PathBuf};

use bibhtml_core::{Collection, SiteConfig};
use indexmap::IndexMap;

use crate::RenderError;

/// Load a site configuration from a YAML or JSON file.
///
/// Relative `sections`, `strings` and `homepages` paths are resolved
/// against the directory holding the config file.
pub fn load_site_config(path: &Path) -> Result<SiteConfig, RenderError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let mut site: SiteConfig = match ext {
        "json" => serde_json::from_slice(&bytes)
            .map_err(|e| RenderError::ParseError("JSON".to_string(), e.to_string()))?,
        _ => {
            let content = String::from_utf8_lossy(&bytes);
            serde_yaml::from_str(&content)
                .map_err(|e| RenderError::ParseError("YAML".to_string(), e.to_string()))?
        }
    };

    let base = path.parent().unwrap_or(Path::new("."));
    for sources in site.sections.values_mut() {
        for source in sources.iter_mut() {
            *source = base.join(&*source);
        }
    }
    site.strings = site.strings.map(|p| base.join(p));
    site.homepages = site.homepages.map(|p| base.join(p));
    Ok(site)
}

/// Load a homepage map (`"F Family"` to URL) from a JSON object.
pub fn load_homepages(path: &Path) -> Result<IndexMap<String, String>, RenderError> {
    let bytes = fs::read(path)?;
    serde_json::from_slice(&bytes)
        .map_err(|e| RenderError::ParseError("JSON".to_string(), e.to_string()))
}

/// Read an optional `@string` macro file; no path means no macros.
pub fn load_strings(path: Option<&Path>) -> Result<String, RenderError> {
    match path {
        Some(p) => Ok(fs::read_to_string(p)?),
        None => Ok(String::new()),
    }
}

/// Parse BibTeX files, in the given order, into one collection.
///
/// The files are concatenated before parsing, so `@string` definitions in
/// an earlier file apply to later ones and failure line numbers count
/// from the start of the first file.
pub fn load_collection(files: &[PathBuf], strings: &str) -> Result<Collection, RenderError> {
    let mut content = String::new();
    for file in files {
        tracing::debug!(path = %file.display(), "reading bibliography");
        content.push_str(&fs::read_to_string(file)?);
        if !content.ends_with('\n') {
            content.push('\n');
        }
    }
    Ok(Collection::from_bibtex(&content, strings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bibhtml-io-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_site_config_resolves_relative_paths() {
        let dir = temp_dir("site");
        let path = dir.join("site.yaml");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(
            f,
            "sections:\n  Journal papers: [journal.bib]\nstrings: strings.bib\nhomepages: authors.json"
        )
        .unwrap();

        let site = load_site_config(&path).unwrap();
        assert_eq!(site.sections["Journal papers"], vec![dir.join("journal.bib")]);
        assert_eq!(site.strings, Some(dir.join("strings.bib")));
        assert_eq!(site.homepages, Some(dir.join("authors.json")));
    }

    #[test]
    fn test_load_site_config_reports_syntax_errors() {
        let dir = temp_dir("bad");
        let path = dir.join("site.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_site_config(&path).unwrap_err();
        assert!(matches!(err, RenderError::ParseError(ref format, _) if format == "JSON"));
    }

    #[test]
    fn test_load_collection_concatenates_files_in_order() {
        let dir = temp_dir("bib");
        let first = dir.join("a.bib");
        let second = dir.join("b.bib");
        fs::write(&first, "@string{jsys = {J. Sys}}\n@article{one, author = {Doe, Jane}, title = {One}, journal = jsys, year = {2001}}").unwrap();
        fs::write(&second, "@article{two, author = {Doe, Jane}, title = {Two}, journal = jsys, year = {2002}}").unwrap();

        let collection = load_collection(&[first, second], "").unwrap();
        let keys: Vec<_> = collection.records.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["one", "two"]);
        assert_eq!(collection.records[1].field("journal"), Some("J. Sys"));
    }

    #[test]
    fn test_load_homepages_reads_json_object() {
        let dir = temp_dir("homepages");
        let path = dir.join("authors.json");
        fs::write(&path, r#"{"R Mortier": "https://mort.io", "A Lovelace": "https://ada.example"}"#).unwrap();
        let homepages = load_homepages(&path).unwrap();
        assert_eq!(homepages.get("R Mortier").map(String::as_str), Some("https://mort.io"));
        assert_eq!(homepages.len(), 2);
    }

    #[test]
    fn test_missing_strings_file_is_an_io_error() {
        let err = load_strings(Some(Path::new("/nonexistent/strings.bib"))).unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
        assert_eq!(load_strings(None).unwrap(), "");
    }
}
