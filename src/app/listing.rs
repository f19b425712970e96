// LogPager - app/listing.rs
//
// Request-level log file operations over one configured directory:
// filtered + paginated listing, content viewing, download path resolution.
//
// Error policy:
//   - Zero candidates before filtering is `NoLogFiles`, distinct from a
//     filtered result that happens to be empty.
//   - Per-file problems during listing (stat failure, content read failure)
//     exclude that file and are logged; the listing continues.
//   - Every call reads filesystem state afresh and keeps no state between
//     calls, so one service may be shared across threads.

use crate::core::discovery;
use crate::core::filter;
use crate::core::model::{FilterCriteria, LogFileMetadata, PageResult};
use crate::core::pagination::{self, PageRequest};
use crate::platform::fs::{DirectorySource, LineSource};
use crate::util::error::ListingError;
use std::path::{Component, Path, PathBuf};

/// Log file operations rooted at one directory.
#[derive(Debug, Clone)]
pub struct LogFileService<S = DirectorySource> {
    log_dir: PathBuf,
    source: S,
}

impl LogFileService<DirectorySource> {
    /// Service reading file content straight from `log_dir`.
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        let log_dir = log_dir.into();
        Self {
            source: DirectorySource::new(log_dir.clone()),
            log_dir,
        }
    }
}

impl<S: LineSource> LogFileService<S> {
    /// Service whose content scans go through `source`.
    pub fn with_source(log_dir: impl Into<PathBuf>, source: S) -> Self {
        Self {
            log_dir: log_dir.into(),
            source,
        }
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// List metadata of the log files matching `criteria`, one page at a time.
    ///
    /// Files appear in ascending filename order.
    pub fn list_log_files(
        &self,
        criteria: Option<&FilterCriteria>,
        page: PageRequest,
    ) -> Result<PageResult<LogFileMetadata>, ListingError> {
        let candidates = discovery::discover_log_files(&self.log_dir);
        if candidates.is_empty() {
            return Err(ListingError::NoLogFiles {
                dir: self.log_dir.clone(),
            });
        }

        let candidate_count = candidates.len();
        let matched: Vec<LogFileMetadata> = candidates
            .iter()
            .filter_map(|path| match discovery::extract_metadata(path) {
                Ok(meta) => Some(meta),
                Err(e) => {
                    tracing::debug!(
                        path = %path.display(),
                        error = %e,
                        "Skipping file whose metadata cannot be read"
                    );
                    None
                }
            })
            .filter(|meta| {
                filter::matches(meta, criteria, || self.source.open_lines(&meta.filename))
            })
            .collect();

        tracing::debug!(
            dir = %self.log_dir.display(),
            candidates = candidate_count,
            matched = matched.len(),
            page = page.page(),
            size = page.size(),
            "Listing filtered"
        );

        Ok(pagination::paginate(matched, page.page(), page.size()))
    }

    /// Read the whole content of one log file.
    pub fn read_log_file(&self, filename: &str) -> Result<String, ListingError> {
        let path = self.resolve(filename)?;
        if !path.exists() {
            return Err(ListingError::FileNotFound {
                filename: filename.to_string(),
            });
        }

        std::fs::read_to_string(&path).map_err(|source| {
            tracing::error!(file = filename, error = %source, "Cannot read log file");
            ListingError::FileRead {
                filename: filename.to_string(),
                source,
            }
        })
    }

    /// Resolve the on-disk path of a log file for download.
    pub fn log_file_path(&self, filename: &str) -> Result<PathBuf, ListingError> {
        let path = self.resolve(filename)?;
        if !path.is_file() {
            return Err(ListingError::FileNotFound {
                filename: filename.to_string(),
            });
        }
        Ok(path)
    }

    /// Join `filename` onto the log directory, rejecting anything that is
    /// not a single plain path component.
    fn resolve(&self, filename: &str) -> Result<PathBuf, ListingError> {
        let mut components = Path::new(filename).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if name == filename => {
                Ok(self.log_dir.join(filename))
            }
            _ => Err(ListingError::InvalidFilename {
                filename: filename.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{ByteSizeRange, LogLevel};
    use std::fs::{self, File};
    use std::io::{self, BufRead, BufReader, Read};
    use tempfile::TempDir;

    fn make_log_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        for (name, content) in files {
            fs::write(dir.path().join(name), content).expect("write log file");
        }
        dir
    }

    fn names(page: &PageResult<LogFileMetadata>) -> Vec<&str> {
        page.items.iter().map(|m| m.filename.as_str()).collect()
    }

    /// Yields a byte-limited prefix of the real file, then fails, as if
    /// permissions were revoked while the scan was running.
    struct RevokedMidScan {
        file: io::Take<File>,
    }

    impl Read for RevokedMidScan {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.file.read(buf)? {
                0 => Err(io::Error::new(io::ErrorKind::PermissionDenied, "revoked")),
                n => Ok(n),
            }
        }
    }

    /// Directory-backed source that breaks content reads of one file after
    /// its first `readable` bytes.
    struct FlakySource {
        inner: DirectorySource,
        broken: &'static str,
        readable: u64,
    }

    impl LineSource for FlakySource {
        type Reader = Box<dyn BufRead>;

        fn open_lines(&self, filename: &str) -> io::Result<Self::Reader> {
            if filename == self.broken {
                let file = File::open(self.inner.root().join(filename))?.take(self.readable);
                return Ok(Box::new(BufReader::new(RevokedMidScan { file })));
            }
            Ok(Box::new(self.inner.open_lines(filename)?))
        }
    }

    #[test]
    fn test_lists_all_files_without_criteria() {
        let dir = make_log_dir(&[("test2.log", "b"), ("test1.log", "a"), ("notes.txt", "c")]);
        let service = LogFileService::new(dir.path());

        let page = service.list_log_files(None, PageRequest::default()).unwrap();
        assert_eq!(page.total_elements, 2);
        assert_eq!(names(&page), vec!["test1.log", "test2.log"]);
    }

    #[test]
    fn test_filters_by_name_and_size() {
        let dir = make_log_dir(&[
            ("test1.log", "lines"),
            ("test2.log", "lines"),
            ("smth.log", "lines"),
        ]);
        let service = LogFileService::new(dir.path());
        let criteria = FilterCriteria {
            file_name_query: Some("test".to_string()),
            byte_size_range: Some(ByteSizeRange::new(0, 1000).unwrap()),
            ..Default::default()
        };

        let page = service
            .list_log_files(Some(&criteria), PageRequest::new(0, 10, 100).unwrap())
            .unwrap();
        assert_eq!(page.total_elements, 2);
        assert_eq!(names(&page), vec!["test1.log", "test2.log"]);
    }

    #[test]
    fn test_empty_directory_is_not_found() {
        let dir = make_log_dir(&[("readme.txt", "not a log")]);
        let service = LogFileService::new(dir.path());

        let result = service.list_log_files(None, PageRequest::default());
        assert!(
            matches!(result, Err(ListingError::NoLogFiles { .. })),
            "expected NoLogFiles, got {result:?}"
        );
    }

    #[test]
    fn test_filtered_to_nothing_is_an_empty_page() {
        let dir = make_log_dir(&[("app.log", "INFO started\n")]);
        let service = LogFileService::new(dir.path());
        let criteria = FilterCriteria {
            log_level: Some(LogLevel::Error),
            ..Default::default()
        };

        let page = service
            .list_log_files(Some(&criteria), PageRequest::default())
            .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_elements, 0);
        assert_eq!(page.total_pages, 0);
    }

    fn flaky_service() -> (TempDir, LogFileService<FlakySource>) {
        let dir = make_log_dir(&[
            ("a.log", "ERROR disk full\n"),
            ("b.log", "starting\nERROR disk full\n"),
            ("c.log", "WARN disk full soon\n"),
        ]);
        let source = FlakySource {
            inner: DirectorySource::new(dir.path()),
            broken: "b.log",
            readable: "starting\n".len() as u64,
        };
        let service = LogFileService::with_source(dir.path(), source);
        (dir, service)
    }

    #[test]
    fn test_read_failure_excludes_only_that_file() {
        let (_dir, service) = flaky_service();
        let criteria = FilterCriteria {
            file_content_query: Some("Disk Full".to_string()),
            ..Default::default()
        };

        let page = service
            .list_log_files(Some(&criteria), PageRequest::default())
            .unwrap();
        assert_eq!(names(&page), vec!["a.log", "c.log"]);
        assert_eq!(page.total_elements, 2);
    }

    #[test]
    fn test_read_failure_with_level_and_content() {
        let (_dir, service) = flaky_service();
        let criteria = FilterCriteria {
            file_content_query: Some("disk".to_string()),
            log_level: Some(LogLevel::Error),
            ..Default::default()
        };

        let page = service
            .list_log_files(Some(&criteria), PageRequest::default())
            .unwrap();
        assert_eq!(names(&page), vec!["a.log"]);
    }

    #[test]
    fn test_unreadable_file_still_listed_without_content_criteria() {
        let (_dir, service) = flaky_service();
        let criteria = FilterCriteria {
            file_name_query: Some(".LOG".to_string()),
            ..Default::default()
        };

        let page = service
            .list_log_files(Some(&criteria), PageRequest::default())
            .unwrap();
        assert_eq!(names(&page), vec!["a.log", "b.log", "c.log"]);
    }

    #[test]
    fn test_pagination_over_listing() {
        let files: Vec<(String, &str)> = (0..25).map(|i| (format!("f{i:02}.log"), "x")).collect();
        let refs: Vec<(&str, &str)> = files.iter().map(|(n, c)| (n.as_str(), *c)).collect();
        let dir = make_log_dir(&refs);
        let service = LogFileService::new(dir.path());

        let page = service
            .list_log_files(None, PageRequest::new(2, 10, 100).unwrap())
            .unwrap();
        assert_eq!(page.total_elements, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 2);
        assert_eq!(names(&page), vec!["f20.log", "f21.log", "f22.log", "f23.log", "f24.log"]);
    }

    #[test]
    fn test_read_log_file() {
        let dir = make_log_dir(&[("app.log", "hello\nworld\n")]);
        let service = LogFileService::new(dir.path());
        assert_eq!(service.read_log_file("app.log").unwrap(), "hello\nworld\n");
    }

    #[test]
    fn test_read_missing_log_file() {
        let dir = make_log_dir(&[]);
        let service = LogFileService::new(dir.path());
        let result = service.read_log_file("nonexistent.log");
        assert!(matches!(result, Err(ListingError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_unreadable_log_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("binary.log"), b"\xff\xfe\xfd").unwrap();
        let service = LogFileService::new(dir.path());
        let result = service.read_log_file("binary.log");
        assert!(matches!(result, Err(ListingError::FileRead { .. })));
    }

    #[test]
    fn test_log_file_path() {
        let dir = make_log_dir(&[("app.log", "x")]);
        fs::create_dir(dir.path().join("dir.log")).unwrap();
        let service = LogFileService::new(dir.path());

        assert_eq!(service.log_file_path("app.log").unwrap(), dir.path().join("app.log"));
        assert!(matches!(
            service.log_file_path("dir.log"),
            Err(ListingError::FileNotFound { .. })
        ));
        assert!(matches!(
            service.log_file_path("missing.log"),
            Err(ListingError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_rejects_names_outside_log_dir() {
        let dir = make_log_dir(&[("app.log", "x")]);
        let service = LogFileService::new(dir.path());

        for name in ["../secret.env", "sub/app.log", "/etc/passwd", "..", ".", ""] {
            assert!(
                matches!(
                    service.read_log_file(name),
                    Err(ListingError::InvalidFilename { .. })
                ),
                "'{name}' should be rejected"
            );
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_lists_symlinked_log_files() {
        use std::os::unix::fs::symlink;

        let dir = make_log_dir(&[("app-2025-01-01.log", "ERROR disk full\n")]);
        symlink(
            dir.path().join("app-2025-01-01.log"),
            dir.path().join("current.log"),
        )
        .unwrap();
        let service = LogFileService::new(dir.path());

        let criteria = FilterCriteria {
            log_level: Some(LogLevel::Error),
            ..Default::default()
        };
        let page = service
            .list_log_files(Some(&criteria), PageRequest::default())
            .unwrap();
        assert_eq!(names(&page), vec!["app-2025-01-01.log", "current.log"]);
        assert_eq!(service.read_log_file("current.log").unwrap(), "ERROR disk full\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_of_only_symlinks_is_not_empty() {
        use std::os::unix::fs::symlink;

        let elsewhere = make_log_dir(&[("real.log", "x")]);
        let dir = make_log_dir(&[]);
        symlink(elsewhere.path().join("real.log"), dir.path().join("app.log")).unwrap();
        let service = LogFileService::new(dir.path());

        let page = service.list_log_files(None, PageRequest::default()).unwrap();
        assert_eq!(names(&page), vec!["app.log"]);
        assert_eq!(page.items[0].byte_size, 1);
    }

    #[test]
    fn test_service_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LogFileService<DirectorySource>>();

        let dir = make_log_dir(&[
            ("a.log", "INFO up\n"),
            ("b.log", "ERROR down\n"),
            ("c.log", "WARN slow\n"),
        ]);
        let service = LogFileService::new(dir.path());
        let criteria = FilterCriteria {
            log_level: Some(LogLevel::Error),
            ..Default::default()
        };

        let (all, errors) = std::thread::scope(|s| {
            let all = s.spawn(|| service.list_log_files(None, PageRequest::default()));
            let errors = s.spawn(|| service.list_log_files(Some(&criteria), PageRequest::default()));
            (all.join().unwrap().unwrap(), errors.join().unwrap().unwrap())
        });

        assert_eq!(names(&all), vec!["a.log", "b.log", "c.log"]);
        assert_eq!(names(&errors), vec!["b.log"]);
    }
}
