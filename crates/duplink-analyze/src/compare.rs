//! Byte-for-byte content comparison.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use duplink_core::DedupError;

/// Decides whether two tracked files hold identical content.
///
/// A file that does not exist on either side is never a match.
pub trait ContentComparator {
    /// Compare the contents of `a` and `b`.
    fn files_equal(&self, a: &Path, b: &Path) -> Result<bool, DedupError>;
}

impl<C: ContentComparator + ?Sized> ContentComparator for &C {
    fn files_equal(&self, a: &Path, b: &Path) -> Result<bool, DedupError> {
        (**self).files_equal(a, b)
    }
}

/// Filesystem-backed comparator.
///
/// Sizes are checked first; files of equal size are streamed in chunks.
/// Symbolic links are followed.
#[derive(Debug, Clone)]
pub struct FsComparator {
    buffer_size: usize,
}

impl FsComparator {
    /// Create a comparator with the default 64KB read buffer.
    pub fn new() -> Self {
        Self {
            buffer_size: 64 * 1024,
        }
    }

    /// Create a comparator with a custom read buffer size.
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Self {
            buffer_size: buffer_size.max(1),
        }
    }

    /// Open a tracked file, mapping "absent" to `None`.
    fn open(path: &Path) -> Result<Option<(File, u64)>, DedupError> {
        let metadata = match std::fs::metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(DedupError::comparison(path, e)),
        };
        if !metadata.is_file() {
            return Ok(None);
        }

        let file = File::open(path).map_err(|e| DedupError::comparison(path, e))?;
        Ok(Some((file, metadata.len())))
    }

    /// Fill `buf` as far as possible, stopping early only at EOF.
    fn read_chunk(file: &mut File, buf: &mut [u8], path: &Path) -> Result<usize, DedupError> {
        let mut filled = 0;
        while filled < buf.len() {
            match file.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(DedupError::comparison(path, e)),
            }
        }
        Ok(filled)
    }
}

impl Default for FsComparator {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentComparator for FsComparator {
    fn files_equal(&self, a: &Path, b: &Path) -> Result<bool, DedupError> {
        let Some((mut file_a, len_a)) = Self::open(a)? else {
            return Ok(false);
        };
        let Some((mut file_b, len_b)) = Self::open(b)? else {
            return Ok(false);
        };

        if len_a != len_b {
            return Ok(false);
        }

        let mut buf_a = vec![0u8; self.buffer_size];
        let mut buf_b = vec![0u8; self.buffer_size];

        loop {
            let read_a = Self::read_chunk(&mut file_a, &mut buf_a, a)?;
            let read_b = Self::read_chunk(&mut file_b, &mut buf_b, b)?;

            if read_a != read_b || buf_a[..read_a] != buf_b[..read_b] {
                return Ok(false);
            }
            if read_a == 0 {
                return Ok(true);
            }
        }
    }
}
