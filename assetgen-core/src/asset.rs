//! Loading assets from disk.

use std::{
    fmt,
    path::{Component, Path},
    time::{SystemTime, UNIX_EPOCH},
};

use crate::{ContentType, Error, Result};

/// Lookup key of an asset in the registry: its path relative to the asset root,
/// with `/` separators on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistrationKey(Vec<u8>);

impl RegistrationKey {
    /// Strip `root` from `path`, component by component.
    ///
    /// Fails with [`Error::PathOutsideRoot`] if `path` does not start with
    /// `root`, names the root itself, or climbs back out of it with `..`.
    pub fn new(root: &Path, path: &Path) -> Result<Self> {
        let outside = || {
            Box::new(Error::PathOutsideRoot {
                path: path.to_path_buf(),
                root: root.to_path_buf(),
            })
        };

        let relative = path.strip_prefix(root).map_err(|_| outside())?;

        let mut key = Vec::new();
        for component in relative.components() {
            let Component::Normal(part) = component else {
                return Err(outside());
            };
            if !key.is_empty() {
                key.push(b'/');
            }
            key.extend_from_slice(part.as_encoded_bytes());
        }

        if key.is_empty() {
            return Err(outside());
        }
        Ok(Self(key))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for RegistrationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// A static file ready to be embedded.
#[derive(Debug, Clone)]
pub struct Asset {
    pub key: RegistrationKey,
    pub content: Vec<u8>,
    pub content_type: ContentType,
    /// Last modification time in whole seconds since the Unix epoch.
    pub modified: i64,
}

impl Asset {
    /// Load `path`, which must lie under `root`.
    ///
    /// The root check runs before the file is touched, so a misplaced path is
    /// reported even when it does not exist.
    pub fn load(root: &Path, path: &Path) -> Result<Self> {
        let key = RegistrationKey::new(root, path)?;
        let content = std::fs::read(path).map_err(|e| Error::io(path, e))?;
        let modified = std::fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|e| Error::io(path, e))?;

        Ok(Self {
            key,
            content,
            content_type: ContentType::from_path(path),
            modified: unix_seconds(modified),
        })
    }

    /// Whether the content can be emitted into a UTF-8 source file as-is.
    pub fn is_utf8(&self) -> bool {
        std::str::from_utf8(&self.content).is_ok()
    }
}

/// Seconds since the epoch, truncated toward zero. Times before the epoch are
/// negative.
fn unix_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_secs()).map_or(i64::MIN, |s| -s),
    }
}
