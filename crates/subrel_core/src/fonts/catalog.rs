//! Font catalog: every face found in the configured directories plus the
//! lookup indices the matcher uses.

use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use super::error::FontError;
use super::record::{load_font_file, normalize_font_name, FileLoad, FontRecord};
use crate::config::FontSettings;

/// File extensions recognised as fonts when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc", "otc"];

/// List font files in `dirs`.
///
/// Directories are scanned non-recursively; each directory's files are sorted
/// by name. A file name seen in an earlier directory hides later files with
/// the same name.
pub fn find_font_files<P, S>(dirs: &[P], extensions: &[S]) -> Vec<PathBuf>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let mut seen: HashSet<OsString> = HashSet::new();
    let mut files = Vec::new();

    for dir in dirs {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            tracing::debug!("Skipping missing font directory {}", dir.display());
            continue;
        }

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Cannot read font directory {}: {}", dir.display(), e);
                continue;
            }
        };

        let mut found: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && has_font_extension(path, extensions))
            .collect();
        found.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        for path in found {
            let Some(name) = path.file_name() else {
                continue;
            };
            if seen.insert(name.to_os_string()) {
                files.push(path);
            }
        }
    }

    files
}

fn has_font_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.as_ref().eq_ignore_ascii_case(ext)))
}

/// All loaded font faces with exact-name and family indices.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<FontRecord>,
    by_exact: HashMap<String, usize>,
    by_family: HashMap<String, Vec<usize>>,
    files: Vec<PathBuf>,
    errors: Vec<FontError>,
}

impl Catalog {
    /// Build a catalog from `dirs` with the default extensions, loading files
    /// in parallel.
    pub fn build<P: AsRef<Path>>(dirs: &[P]) -> Self {
        let files = find_font_files(dirs, DEFAULT_EXTENSIONS);
        Self::from_files(files, true)
    }

    /// Build a catalog using the given font settings.
    ///
    /// When `dirs` is empty the configured `directories` are scanned instead.
    pub fn build_with<P: AsRef<Path>>(dirs: &[P], settings: &FontSettings) -> Self {
        if dirs.is_empty() {
            return Self::scan(settings.directories.as_slice(), settings);
        }
        Self::scan(dirs, settings)
    }

    fn scan<P: AsRef<Path>>(dirs: &[P], settings: &FontSettings) -> Self {
        let files = if settings.extensions.is_empty() {
            find_font_files(dirs, DEFAULT_EXTENSIONS)
        } else {
            find_font_files(dirs, settings.extensions.as_slice())
        };
        Self::from_files(files, settings.parallel_load)
    }

    /// Load the given font files in order.
    pub fn from_files(files: Vec<PathBuf>, parallel: bool) -> Self {
        tracing::debug!("Loading {} font files", files.len());

        // collect() keeps file order either way
        let loads: Vec<FileLoad> = if parallel {
            files.par_iter().map(|path| load_font_file(path)).collect()
        } else {
            files.iter().map(|path| load_font_file(path)).collect()
        };

        let mut records = Vec::new();
        let mut errors = Vec::new();
        for load in loads {
            if let Some(err) = load.error {
                let name = load
                    .path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                tracing::error!("Error reading {}: {}", name, err);
                errors.push(err);
            }
            records.extend(load.records);
        }

        let mut catalog = Self::from_records(records);
        catalog.files = files;
        catalog.errors = errors;

        tracing::info!(
            "Font catalog: {} faces from {} files ({} failed)",
            catalog.records.len(),
            catalog.files.len(),
            catalog.errors.len()
        );
        catalog
    }

    /// Build a catalog directly from records, in the given order.
    pub fn from_records(records: Vec<FontRecord>) -> Self {
        let mut by_exact = HashMap::new();
        let mut by_family: HashMap<String, Vec<usize>> = HashMap::new();

        for (index, record) in records.iter().enumerate() {
            for name in &record.exact_names {
                by_exact.insert(normalize_font_name(name), index);
            }
            for family in &record.family_names {
                let entry = by_family.entry(normalize_font_name(family)).or_default();
                // A face listing the same family twice appears once
                if entry.last() != Some(&index) {
                    entry.push(index);
                }
            }
        }

        Self {
            records,
            by_exact,
            by_family,
            files: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// All faces in catalog order.
    pub fn records(&self) -> &[FontRecord] {
        &self.records
    }

    /// Font files that were scanned.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Load failures, in file order.
    pub fn errors(&self) -> &[FontError] {
        &self.errors
    }

    /// Face registered under an exact name. `name` must be normalized.
    pub fn exact(&self, name: &str) -> Option<&FontRecord> {
        self.by_exact.get(name).map(|&i| &self.records[i])
    }

    /// Faces of a family in catalog order. `name` must be normalized.
    pub fn family(&self, name: &str) -> Vec<&FontRecord> {
        self.by_family
            .get(name)
            .map(|indices| indices.iter().map(|&i| &self.records[i]).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::testing::FaceBuilder;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn find_font_files_filters_sorts_and_dedups() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();

        let b = touch(first.path(), "b.TTF");
        let a = touch(first.path(), "a.otf");
        touch(first.path(), "notes.txt");
        touch(second.path(), "a.otf");
        let c = touch(second.path(), "c.ttc");
        fs::create_dir(first.path().join("nested.ttf")).unwrap();

        let missing = first.path().join("does-not-exist");
        let dirs = [missing, first.path().to_path_buf(), second.path().to_path_buf()];
        let files = find_font_files(&dirs, DEFAULT_EXTENSIONS);

        assert_eq!(files, vec![a, b, c]);
    }

    #[test]
    fn build_loads_faces_and_collects_errors() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("arial.ttf"),
            FaceBuilder::new("Arial").full_name("Arial Regular").build(),
        )
        .unwrap();
        fs::write(
            dir.path().join("fam.ttc"),
            FaceBuilder::collection(&[
                FaceBuilder::new("Fam").full_name("Fam Regular"),
                FaceBuilder::new("Fam").full_name("Fam Bold").weight(700),
            ]),
        )
        .unwrap();
        fs::write(dir.path().join("broken.otf"), b"garbage").unwrap();

        let catalog = Catalog::build(&[dir.path()]);

        assert_eq!(catalog.files().len(), 3);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.errors().len(), 1);
        assert!(catalog.errors()[0].path().ends_with("broken.otf"));

        assert_eq!(catalog.exact("fam bold").map(|r| r.weight), Some(700));
        let family = catalog.family("fam");
        assert_eq!(family.len(), 2);
        assert_eq!(family[0].face_index, 0);
        assert_eq!(family[1].face_index, 1);
    }

    #[test]
    fn duplicate_file_name_loads_first_directory_only() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        fs::write(first.path().join("font.ttf"), FaceBuilder::new("First").build()).unwrap();
        fs::write(second.path().join("font.ttf"), FaceBuilder::new("Second").build()).unwrap();

        let catalog = Catalog::build(&[first.path(), second.path()]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.files(), &[first.path().join("font.ttf")]);
        assert_eq!(catalog.family("first").len(), 1);
        assert!(catalog.family("second").is_empty());
        assert!(catalog.errors().is_empty());
    }

    #[test]
    fn sequential_and_parallel_loading_agree() {
        let dir = tempdir().unwrap();
        for (file, family) in [("a.ttf", "Alpha"), ("b.ttf", "Beta"), ("c.ttf", "Gamma")] {
            fs::write(dir.path().join(file), FaceBuilder::new(family).build()).unwrap();
        }
        let files = find_font_files(&[dir.path()], DEFAULT_EXTENSIONS);

        let parallel = Catalog::from_files(files.clone(), true);
        let sequential = Catalog::from_files(files, false);
        assert_eq!(parallel.records(), sequential.records());
    }

    #[test]
    fn build_with_honours_extensions() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.ttf"), FaceBuilder::new("Alpha").build()).unwrap();
        fs::write(dir.path().join("b.otf"), FaceBuilder::new("Beta").build()).unwrap();

        let settings = FontSettings {
            extensions: vec!["otf".to_string()],
            parallel_load: false,
            ..FontSettings::default()
        };
        let catalog = Catalog::build_with(&[dir.path()], &settings);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.family("beta").len(), 1);
    }

    #[test]
    fn build_with_falls_back_to_configured_directories() {
        let configured = tempdir().unwrap();
        let explicit = tempdir().unwrap();
        fs::write(configured.path().join("a.ttf"), FaceBuilder::new("Configured").build()).unwrap();
        fs::write(explicit.path().join("b.ttf"), FaceBuilder::new("Explicit").build()).unwrap();

        let settings = FontSettings {
            directories: vec![configured.path().to_string_lossy().into_owned()],
            ..FontSettings::default()
        };

        let catalog = Catalog::build_with::<PathBuf>(&[], &settings);
        assert_eq!(catalog.family("configured").len(), 1);

        let catalog = Catalog::build_with(&[explicit.path()], &settings);
        assert_eq!(catalog.family("explicit").len(), 1);
        assert!(catalog.family("configured").is_empty());
    }

    #[test]
    fn exact_index_last_record_wins() {
        let catalog = Catalog::from_records(vec![
            FontRecord::new("One", 400, false).with_exact_name("Shared Name"),
            FontRecord::new("Two", 700, false).with_exact_name("Shared Name"),
        ]);

        let found = catalog.exact("shared name").unwrap();
        assert_eq!(found.family_names, vec!["Two"]);
    }

    #[test]
    fn family_index_is_case_insensitive_in_catalog_order() {
        let catalog = Catalog::from_records(vec![
            FontRecord::new("Noto Sans", 700, false),
            FontRecord::new("Other", 400, false),
            FontRecord::new("NOTO SANS", 400, false),
        ]);

        let weights: Vec<u16> = catalog.family("noto sans").iter().map(|r| r.weight).collect();
        assert_eq!(weights, vec![700, 400]);
        assert!(catalog.family("Noto Sans").is_empty());
        assert!(catalog.exact("noto sans").is_none());
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::build::<PathBuf>(&[]);
        assert!(catalog.is_empty());
        assert!(catalog.files().is_empty());
    }
}
