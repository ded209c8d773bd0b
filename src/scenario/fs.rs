use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

use filetime::FileTime;
use serde::Deserialize;
use tracing::debug;

use super::{Scenario, ScenarioError};
use crate::exec;
use crate::models::{FsEntry, Mtime};
use crate::ui;

const FILLER: u8 = b'x';

/// A directory tree described entry by entry.
#[derive(Debug, Clone, Deserialize)]
pub struct FsLayout {
    pub description: String,
    pub setup: Vec<FsEntry>,
}

impl Scenario for FsLayout {
    const SHOWS_OUTPUT: bool = true;

    fn describe(&self) -> String {
        ui::fill_indented(&self.description)
    }

    fn run(&self, command: &str) -> Result<String, ScenarioError> {
        self.run_in(&std::env::temp_dir(), command)
    }
}

impl FsLayout {
    /// Like `run`, with the sandbox created inside `parent`.
    pub fn run_in(&self, parent: &Path, command: &str) -> Result<String, ScenarioError> {
        let sandbox = tempfile::Builder::new()
            .prefix("find-quiz-")
            .tempdir_in(parent)
            .map_err(ScenarioError::Workspace)?;
        build_fs(sandbox.path(), &self.setup)?;
        Ok(exec::run_shell(command, Some(sandbox.path())))
    }
}

/// Materializes `entries` under `root`, in order.
///
/// `root` must already exist. Nothing outside it is touched: absolute paths
/// and `..` components are rejected.
pub fn build_fs(root: &Path, entries: &[FsEntry]) -> Result<(), ScenarioError> {
    let now = SystemTime::now();
    for entry in entries {
        match entry {
            FsEntry::Dir { path } => {
                let dir = sandboxed(root, path)?;
                create_dir_all(&dir)?;
            }
            FsEntry::File {
                path,
                size,
                executable,
                mtime,
            } => {
                let file = sandboxed(root, path)?;
                write_filler(&file, *size)?;
                if *executable {
                    make_executable(&file)?;
                }
                if let Some(mtime) = mtime {
                    set_times(&file, *mtime, now)?;
                }
            }
            FsEntry::Symlink { path, target } => {
                let link = sandboxed(root, path)?;
                let target_path = sandboxed(root, target)?;
                if !target_path.exists() {
                    write_filler(&target_path, 0)?;
                }
                if let Some(parent) = link.parent() {
                    create_dir_all(parent)?;
                }
                symlink(target, &link)?;
            }
        }
        debug!(path = %entry.path().display(), "created sandbox entry");
    }
    Ok(())
}

fn sandboxed(root: &Path, rel: &Path) -> Result<PathBuf, ScenarioError> {
    let mut has_name = false;
    for component in rel.components() {
        match component {
            Component::Normal(_) => has_name = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ScenarioError::EscapesRoot(rel.to_path_buf()));
            }
        }
    }
    if !has_name {
        return Err(ScenarioError::EscapesRoot(rel.to_path_buf()));
    }
    Ok(root.join(rel))
}

fn create_dir_all(path: &Path) -> Result<(), ScenarioError> {
    fs::create_dir_all(path).map_err(|source| ScenarioError::Create {
        kind: "directory",
        path: path.to_path_buf(),
        source,
    })
}

fn write_filler(path: &Path, size: u64) -> Result<(), ScenarioError> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    let file_error = |source| ScenarioError::Create {
        kind: "file",
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(file_error)?;
    io::copy(&mut io::repeat(FILLER).take(size), &mut file).map_err(file_error)?;
    Ok(())
}

fn set_times(path: &Path, mtime: Mtime, now: SystemTime) -> Result<(), ScenarioError> {
    let when = mtime
        .resolve(now)
        .ok_or_else(|| ScenarioError::InvalidTimestamp(path.to_path_buf()))?;
    let stamp = FileTime::from_system_time(when);
    filetime::set_file_times(path, stamp, stamp).map_err(|source| ScenarioError::Metadata {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), ScenarioError> {
    use std::os::unix::fs::PermissionsExt;

    let permission_error = |source| ScenarioError::Metadata {
        path: path.to_path_buf(),
        source,
    };
    let mut perms = fs::metadata(path).map_err(permission_error)?.permissions();
    perms.set_mode(perms.mode() | 0o111);
    fs::set_permissions(path, perms).map_err(permission_error)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), ScenarioError> {
    Err(ScenarioError::Unsupported("executable files"))
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> Result<(), ScenarioError> {
    std::os::unix::fs::symlink(target, link).map_err(|source| ScenarioError::Create {
        kind: "symlink",
        path: link.to_path_buf(),
        source,
    })
}

#[cfg(not(unix))]
fn symlink(_target: &Path, _link: &Path) -> Result<(), ScenarioError> {
    Err(ScenarioError::Unsupported("symbolic links"))
}

#[cfg(all(test, unix))]
mod tests {
    use std::collections::BTreeSet;
    use std::os::unix::fs::PermissionsExt;
    use std::time::{Duration, UNIX_EPOCH};

    use super::*;

    fn entries(json: &str) -> Vec<FsEntry> {
        serde_json::from_str(json).expect("parse entries")
    }

    fn list_tree(root: &Path) -> BTreeSet<String> {
        fn walk(root: &Path, dir: &Path, found: &mut BTreeSet<String>) {
            for entry in fs::read_dir(dir).expect("read dir") {
                let entry = entry.expect("dir entry");
                let path = entry.path();
                let rel = path.strip_prefix(root).expect("under root");
                found.insert(rel.to_string_lossy().into_owned());
                if entry.file_type().expect("file type").is_dir() {
                    walk(root, &path, found);
                }
            }
        }
        let mut found = BTreeSet::new();
        walk(root, root, &mut found);
        found
    }

    #[test]
    fn builds_exactly_the_described_tree() {
        let root = tempfile::tempdir().expect("create temp dir");
        build_fs(
            root.path(),
            &entries(
                r#"[
                    {"path": "scripts", "type": "dir"},
                    {"path": "scripts/bin/run.sh", "type": "file", "size": 100, "executable": true},
                    {"path": "scripts/notes.txt", "type": "file", "size": 20},
                    {"path": "link.txt", "type": "symlink", "target": "scripts/notes.txt"}
                ]"#,
            ),
        )
        .expect("build tree");

        let expected: BTreeSet<String> = [
            "link.txt",
            "scripts",
            "scripts/bin",
            "scripts/bin/run.sh",
            "scripts/notes.txt",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(list_tree(root.path()), expected);

        let run = fs::metadata(root.path().join("scripts/bin/run.sh")).expect("stat run.sh");
        assert!(run.is_file());
        assert_eq!(run.len(), 100);
        assert_eq!(run.permissions().mode() & 0o111, 0o111);

        let notes = fs::metadata(root.path().join("scripts/notes.txt")).expect("stat notes");
        assert_eq!(notes.len(), 20);
        assert_eq!(notes.permissions().mode() & 0o111, 0);
        let contents = fs::read(root.path().join("scripts/notes.txt")).expect("read notes");
        assert!(contents.iter().all(|byte| *byte == FILLER));

        let link = root.path().join("link.txt");
        assert!(fs::symlink_metadata(&link).expect("lstat link").file_type().is_symlink());
        assert_eq!(
            fs::read_link(&link).expect("read link"),
            PathBuf::from("scripts/notes.txt")
        );
    }

    #[test]
    fn symlink_target_is_created_when_missing() {
        let root = tempfile::tempdir().expect("create temp dir");
        build_fs(
            root.path(),
            &entries(r#"[{"path": "link.txt", "type": "symlink", "target": "original.txt"}]"#),
        )
        .expect("build tree");

        let original = fs::symlink_metadata(root.path().join("original.txt")).expect("stat target");
        assert!(original.is_file());
        assert_eq!(original.len(), 0);
        assert_eq!(
            fs::read_link(root.path().join("link.txt")).expect("read link"),
            PathBuf::from("original.txt")
        );
    }

    #[test]
    fn existing_symlink_target_is_left_alone() {
        let root = tempfile::tempdir().expect("create temp dir");
        build_fs(
            root.path(),
            &entries(
                r#"[
                    {"path": "original.txt", "type": "file", "size": 5},
                    {"path": "link.txt", "type": "symlink", "target": "original.txt"}
                ]"#,
            ),
        )
        .expect("build tree");

        assert_eq!(
            fs::metadata(root.path().join("link.txt")).expect("stat through link").len(),
            5
        );
    }

    #[test]
    fn directories_are_idempotent() {
        let root = tempfile::tempdir().expect("create temp dir");
        build_fs(
            root.path(),
            &entries(
                r#"[
                    {"path": "garden/plants", "type": "dir"},
                    {"path": "garden", "type": "dir"},
                    {"path": "garden/plants", "type": "dir"}
                ]"#,
            ),
        )
        .expect("build tree");

        let expected: BTreeSet<String> = ["garden", "garden/plants"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(list_tree(root.path()), expected);
    }

    #[test]
    fn applies_modification_time() {
        let root = tempfile::tempdir().expect("create temp dir");
        build_fs(
            root.path(),
            &entries(
                r#"[
                    {"path": "logs/old.log", "type": "file", "size": 10, "mtime": {"days_ago": 8}},
                    {"path": "logs/fixed.log", "type": "file", "mtime": 1000000000.25}
                ]"#,
            ),
        )
        .expect("build tree");

        let old = fs::metadata(root.path().join("logs/old.log")).expect("stat old.log");
        let age = SystemTime::now()
            .duration_since(old.modified().expect("mtime"))
            .expect("mtime in the past");
        assert!(age >= Duration::from_secs(8 * 86_400 - 60), "{age:?}");
        assert!(age <= Duration::from_secs(8 * 86_400 + 60), "{age:?}");

        let fixed = fs::metadata(root.path().join("logs/fixed.log")).expect("stat fixed.log");
        let modified = fixed
            .modified()
            .expect("mtime")
            .duration_since(UNIX_EPOCH)
            .expect("after epoch");
        assert_eq!(modified.as_secs(), 1_000_000_000);
        let accessed = fixed
            .accessed()
            .expect("atime")
            .duration_since(UNIX_EPOCH)
            .expect("after epoch");
        assert_eq!(accessed.as_secs(), 1_000_000_000);
    }

    #[test]
    fn rejects_paths_outside_the_root() {
        let root = tempfile::tempdir().expect("create temp dir");
        for spec in [
            r#"[{"path": "../escape", "type": "dir"}]"#,
            r#"[{"path": "/etc/owned", "type": "file"}]"#,
            r#"[{"path": "link", "type": "symlink", "target": "../../outside"}]"#,
            r#"[{"path": ".", "type": "dir"}]"#,
        ] {
            let err = build_fs(root.path(), &entries(spec)).expect_err(spec);
            assert!(matches!(err, ScenarioError::EscapesRoot(_)), "{spec}: {err}");
        }
    }

    #[test]
    fn negative_timestamp_is_fatal() {
        let root = tempfile::tempdir().expect("create temp dir");
        let err = build_fs(
            root.path(),
            &entries(r#"[{"path": "f", "type": "file", "mtime": -5}]"#),
        )
        .expect_err("negative mtime");
        assert!(matches!(err, ScenarioError::InvalidTimestamp(_)), "{err}");
    }

    #[test]
    fn depth_limited_listing_of_garden() {
        let layout: FsLayout = serde_json::from_str(
            r#"{
                "description": "garden",
                "setup": [
                    {"path": "garden", "type": "dir"},
                    {"path": "garden/plants", "type": "dir"},
                    {"path": "garden/tools", "type": "dir"},
                    {"path": "garden/plants/roses.txt", "type": "file"},
                    {"path": "garden/tools/rake", "type": "file"}
                ]
            }"#,
        )
        .expect("parse layout");

        let output = layout
            .run("find garden -maxdepth 1 -type d")
            .expect("run listing");
        assert_eq!(output, "garden\ngarden/plants\ngarden/tools\n");
    }

    #[test]
    fn sandbox_is_removed_when_the_build_fails_partway() {
        let parent = tempfile::tempdir().expect("create parent dir");
        let layout = FsLayout {
            description: String::new(),
            setup: entries(
                r#"[
                    {"path": "garden/plants", "type": "dir"},
                    {"path": "garden/roses.txt", "type": "file", "size": 3},
                    {"path": "../escape", "type": "dir"}
                ]"#,
            ),
        };

        let err = layout
            .run_in(parent.path(), "touch reached")
            .expect_err("escaping entry");
        assert!(matches!(err, ScenarioError::EscapesRoot(_)), "{err}");

        let leftovers: Vec<_> = fs::read_dir(parent.path())
            .expect("read parent dir")
            .map(|entry| entry.expect("dir entry").file_name())
            .collect();
        assert!(leftovers.is_empty(), "{leftovers:?}");
    }

    #[test]
    fn sandbox_is_removed_after_the_run() {
        let layout = FsLayout {
            description: String::new(),
            setup: entries(r#"[{"path": "inside", "type": "file"}]"#),
        };

        let cwd = layout.run("pwd").expect("run pwd");
        let sandbox = PathBuf::from(cwd.trim_end());
        assert!(sandbox.is_absolute(), "{cwd}");
        assert!(!sandbox.exists(), "{} should be gone", sandbox.display());

        let failing = layout.run("pwd; exit 7").expect("run failing command");
        assert!(!PathBuf::from(failing.trim_end()).exists());
    }
}
