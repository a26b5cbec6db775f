//! Positional file handle over a single cached asset
//!
//! An [`AssetFile`] remembers an identity, a mode and a position. It holds no
//! OS file between calls: every read, write and size query resolves the path,
//! opens the file, acts and lets the `File` drop. Two handles on the same
//! asset therefore see each other's writes but are not isolated from them.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::app::asset::AssetIdentity;

use super::mode::AccessMode;
use super::store::AssetStore;

/// Base for [`AssetFile::seek`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekOrigin {
    /// Offset from the handle's current position
    Current,
    /// Offset from an explicit base position
    Absolute(u64),
}

impl From<u64> for SeekOrigin {
    fn from(base: u64) -> Self {
        SeekOrigin::Absolute(base)
    }
}

/// How the position is updated once a write has opened its file
#[derive(Debug, Clone, Copy)]
enum WritePlacement {
    /// Land on the end of the file after writing
    EndOfFile,
    /// Advance the handle's own position by the bytes written
    Advance,
}

/// Session on one asset's backing file
#[derive(Debug, Clone)]
pub struct AssetFile {
    store: AssetStore,
    identity: AssetIdentity,
    mode: AccessMode,
    position: u64,
    last_transfer_count: usize,
}

impl AssetFile {
    /// Create a handle
    ///
    /// A `Read` handle whose file already exists notifies the cache manager
    /// of the access. No other mode, and no other operation, does.
    pub fn new(store: AssetStore, identity: AssetIdentity, mode: AccessMode) -> Self {
        if mode == AccessMode::Read {
            let path = store.path_of(&identity);
            if path.exists() {
                store.cache().touch_access_time(&path);
            }
        }

        Self {
            store,
            identity,
            mode,
            position: 0,
            last_transfer_count: 0,
        }
    }

    /// Store this handle resolves through
    pub fn store(&self) -> &AssetStore {
        &self.store
    }

    pub fn identity(&self) -> &AssetIdentity {
        &self.identity
    }

    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    /// Bytes moved by the most recent read or write
    ///
    /// Not reset by other calls.
    pub fn last_transfer_count(&self) -> usize {
        self.last_transfer_count
    }

    /// Read up to `buf.len()` bytes at the current position
    ///
    /// The handle's mode is ignored; the file is always opened read-only.
    /// Returns `true` iff at least one byte was read. A read at end of file
    /// returns `false`; use [`eof`](Self::eof) to tell that apart from an
    /// open failure.
    pub fn read(&mut self, buf: &mut [u8]) -> bool {
        let path = self.path();

        let mut file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                debug!("Cannot open {} for reading: {}", path.display(), e);
                return false;
            }
        };

        if let Err(e) = file.seek(SeekFrom::Start(self.position)) {
            debug!("Cannot seek {} to {}: {}", path.display(), self.position, e);
            return false;
        }

        let count = read_up_to(&mut file, buf);
        self.last_transfer_count = count;
        self.position += count as u64;

        count > 0
    }

    /// Write `buf` according to the handle's mode
    ///
    /// Returns `true` only if every byte was written. Once the file is open
    /// the position is updated even when the write comes up short, so chained
    /// writes continue from wherever the data actually ended.
    pub fn write(&mut self, buf: &[u8]) -> bool {
        let path = self.path();

        let (mut file, placement) = match self.open_for_write(&path) {
            Ok(opened) => opened,
            Err(e) => {
                debug!("Cannot open {} for {}: {}", path.display(), self.mode, e);
                return false;
            }
        };

        let written = write_up_to(&mut file, buf);
        self.last_transfer_count = written;
        self.position = match placement {
            WritePlacement::Advance => self.position + written as u64,
            // An append-mode offset only moves when bytes are written
            WritePlacement::EndOfFile => file
                .seek(SeekFrom::End(0))
                .or_else(|_| file.metadata().map(|meta| meta.len()))
                .unwrap_or(written as u64),
        };

        written == buf.len()
    }

    /// Move the position to `origin + offset`
    ///
    /// The target is checked against the file's current size. Past the end
    /// the position clamps to the size, before the start it clamps to zero;
    /// both report `false`.
    pub fn seek(&mut self, offset: i64, origin: SeekOrigin) -> bool {
        let base = match origin {
            SeekOrigin::Current => self.position,
            SeekOrigin::Absolute(base) => base,
        };
        let candidate = i128::from(base) + i128::from(offset);
        let size = self.size();

        if candidate > i128::from(size) {
            warn!("Attempt to seek past end of file: {}", self.identity);
            self.position = size;
            return false;
        }

        if candidate < 0 {
            warn!("Attempt to seek past beginning of file: {}", self.identity);
            self.position = 0;
            return false;
        }

        self.position = candidate as u64;
        true
    }

    /// Current position; performs no I/O
    pub fn tell(&self) -> u64 {
        self.position
    }

    /// Size of the backing file as it is on disk right now
    pub fn size(&self) -> u64 {
        self.store.file_size(&self.identity)
    }

    /// Largest size a handle can address
    pub fn max_size(&self) -> u64 {
        u64::MAX
    }

    pub fn eof(&self) -> bool {
        self.position >= self.size()
    }

    /// Move the asset to a new identity
    ///
    /// The handle adopts `new_identity` whether or not the file could be moved.
    pub fn rename(&mut self, new_identity: AssetIdentity) -> bool {
        self.store.rename_file(&self.identity, &new_identity);
        self.identity = new_identity;
        true
    }

    /// Delete the backing file; always returns `true`
    pub fn remove(&self) -> bool {
        self.store.remove_file(&self.identity, None)
    }

    fn path(&self) -> PathBuf {
        self.store.path_of(&self.identity)
    }

    fn open_for_write(&self, path: &Path) -> io::Result<(File, WritePlacement)> {
        match self.mode {
            AccessMode::Append => {
                let file = OpenOptions::new().append(true).create(true).open(path)?;
                Ok((file, WritePlacement::EndOfFile))
            }
            AccessMode::ReadWrite => {
                match OpenOptions::new().read(true).write(true).open(path) {
                    Ok(mut file) => {
                        file.seek(SeekFrom::Start(self.position))?;
                        Ok((file, WritePlacement::Advance))
                    }
                    Err(_) => Ok((create_fresh(path)?, WritePlacement::EndOfFile)),
                }
            }
            AccessMode::Write | AccessMode::Read => {
                Ok((create_fresh(path)?, WritePlacement::EndOfFile))
            }
        }
    }
}

fn create_fresh(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

/// Read until `buf` is full, end of file, or an error; returns bytes read
fn read_up_to(file: &mut File, buf: &mut [u8]) -> usize {
    let mut filled = 0;
    while filled < buf.len() {
        match file.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                debug!("Read stopped after {} bytes: {}", filled, e);
                break;
            }
        }
    }
    filled
}

/// Write until `buf` is drained or the file stops accepting bytes
fn write_up_to(file: &mut File, buf: &[u8]) -> usize {
    let mut written = 0;
    while written < buf.len() {
        match file.write(&buf[written..]) {
            Ok(0) => break,
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                debug!("Write stopped after {} bytes: {}", written, e);
                break;
            }
        }
    }
    written
}
