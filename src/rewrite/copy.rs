//! The offset-driven copy loop.
//!
//! Each cycle reads up to `buf.len()` bytes at the cursor and writes exactly
//! those bytes back at the same offset. The cursor only advances by what was
//! actually written, so a short write is finished on the next cycle by
//! re-reading the remainder from storage.

use std::io;
use std::path::Path;

use super::observer::RewriteObserver;
use super::positional::ReadWriteAt;
use crate::errors::RewriteError;

/// Counters describing one completed copy loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Bytes written back (equals the file length on success).
    pub bytes: u64,
    /// Completed read/write cycles.
    pub cycles: u64,
    /// Cycles where the write moved fewer bytes than were read.
    pub short_writes: u64,
}

/// Rewrite everything from offset 0 to EOF onto itself.
pub fn copy_in_place<F>(
    file: &F,
    path: &Path,
    buf: &mut [u8],
    observer: &dyn RewriteObserver,
) -> Result<CopyStats, RewriteError>
where
    F: ReadWriteAt + ?Sized,
{
    debug_assert!(!buf.is_empty(), "copy buffer must not be empty");

    let mut stats = CopyStats::default();
    let mut offset: u64 = 0;

    loop {
        let rdone = match file.read_at(buf, offset) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(RewriteError::Read {
                    path: path.to_path_buf(),
                    offset,
                    source,
                });
            }
        };
        observer.read(path, offset, rdone);

        let wdone = loop {
            match file.write_at(&buf[..rdone], offset) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(RewriteError::Write {
                        path: path.to_path_buf(),
                        offset,
                        source,
                    });
                }
            }
        };
        if wdone == 0 {
            return Err(RewriteError::ZeroWrite {
                path: path.to_path_buf(),
                offset,
            });
        }
        observer.wrote(path, offset, wdone);
        stats.cycles += 1;

        if wdone < rdone {
            stats.short_writes += 1;
            observer.short_write(path, offset, wdone, rdone);
        }

        offset += wdone as u64;
        stats.bytes += wdone as u64;
    }

    Ok(stats)
}
