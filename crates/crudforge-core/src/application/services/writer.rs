//! Writes a `ProjectStructure` through the `Filesystem` port.
//!
//! Entries are written in order. If any write fails, files this writer
//! created during the same call are removed again (best effort) and the
//! original error is returned. Files that already existed and were
//! overwritten are left as they are.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::{
    application::ports::Filesystem,
    domain::{FsEntry, ProjectStructure},
    error::ForgeResult,
};

pub struct StructureWriter<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> StructureWriter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Write every entry; returns the absolute paths of the written files.
    pub fn write(&self, structure: &ProjectStructure) -> ForgeResult<Vec<PathBuf>> {
        let mut created = Vec::new();
        let mut written = Vec::new();

        match self.write_all(structure, &mut created, &mut written) {
            Ok(()) => {
                info!(files = written.len(), root = %structure.root().display(), "Structure written");
                Ok(written)
            }
            Err(e) => {
                warn!(error = %e, created = created.len(), "Write failed, rolling back");
                self.rollback(&created);
                Err(e)
            }
        }
    }

    fn write_all(
        &self,
        structure: &ProjectStructure,
        created: &mut Vec<PathBuf>,
        written: &mut Vec<PathBuf>,
    ) -> ForgeResult<()> {
        let root = structure.root();
        self.filesystem.create_dir_all(root)?;

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem.create_dir_all(&root.join(&dir.path))?;
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);

                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    let existed = self.filesystem.exists(&path);
                    self.filesystem.write_file(&path, &file.content)?;
                    debug!(path = %path.display(), bytes = file.size(), "Wrote file");

                    if !existed {
                        created.push(path.clone());
                    }
                    written.push(path);
                }
            }
        }

        Ok(())
    }

    /// Best-effort removal of files created by this writer.
    fn rollback(&self, created: &[PathBuf]) {
        for path in created.iter().rev() {
            if let Err(e) = self.filesystem.remove_file(path) {
                warn!(error = %e, path = %path.display(), "Rollback failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};
    use std::path::Path;

    fn structure() -> ProjectStructure {
        let mut structure = ProjectStructure::new("/p");
        structure.add_file("a.ts", "a".into());
        structure.add_file("b.ts", "b".into());
        structure
    }

    #[test]
    fn reports_written_files() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().returning(|_| false);
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));
        fs.expect_remove_file().never();

        let written = StructureWriter::new(&fs).write(&structure()).unwrap();
        assert_eq!(
            written,
            vec![PathBuf::from("/p/a.ts"), PathBuf::from("/p/b.ts")]
        );
    }

    #[test]
    fn failed_write_removes_created_files() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().returning(|_| false);
        fs.expect_write_file()
            .withf(|p, c| p == Path::new("/p/a.ts") && c == "a")
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|p, c| p == Path::new("/p/b.ts") && c == "b")
            .returning(|p, _| {
                Err(ApplicationError::FilesystemError {
                    path: p.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            });
        fs.expect_remove_file()
            .withf(|p| p == Path::new("/p/a.ts"))
            .times(1)
            .returning(|_| Ok(()));

        assert!(StructureWriter::new(&fs).write(&structure()).is_err());
    }

    #[test]
    fn pre_existing_files_are_not_rolled_back() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().returning(|_| true);
        fs.expect_write_file()
            .withf(|p, c| p == Path::new("/p/a.ts") && c == "a")
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|p, c| p == Path::new("/p/b.ts") && c == "b")
            .returning(|p, _| {
                Err(ApplicationError::FilesystemError {
                    path: p.to_path_buf(),
                    reason: "read-only".into(),
                }
                .into())
            });
        fs.expect_remove_file().never();

        assert!(StructureWriter::new(&fs).write(&structure()).is_err());
    }
}
