//! Handle operations the rewrite needs, expressed as traits so tests can
//! wrap a real file and fail individual calls.

use filetime::{set_file_handle_times, FileTime};
use std::fs::File;
use std::io;

/// Reads and writes addressed by an absolute byte offset.
///
/// On Unix these are `pread`/`pwrite` and leave the file cursor alone.
/// On Windows `seek_read`/`seek_write` move the cursor as a side effect;
/// the copy loop tracks its own offset, so that difference is harmless.
pub trait ReadWriteAt {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize>;
    fn write_at(&self, buf: &[u8], offset: u64) -> io::Result<usize>;
}

/// An open handle that can be rewritten: positional I/O plus the two
/// metadata calls made after the copy loop.
pub trait RewriteHandle: ReadWriteAt {
    fn sync_data(&self) -> io::Result<()>;
    fn set_times(&self, accessed: FileTime, modified: FileTime) -> io::Result<()>;
}

#[cfg(unix)]
impl ReadWriteAt for File {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        use std::os::unix::fs::FileExt;
        FileExt::read_at(self, buf, offset)
    }

    fn write_at(&self, buf: &[u8], offset: u64) -> io::Result<usize> {
        use std::os::unix::fs::FileExt;
        FileExt::write_at(self, buf, offset)
    }
}

#[cfg(windows)]
impl ReadWriteAt for File {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        use std::os::windows::fs::FileExt;
        self.seek_read(buf, offset)
    }

    fn write_at(&self, buf: &[u8], offset: u64) -> io::Result<usize> {
        use std::os::windows::fs::FileExt;
        self.seek_write(buf, offset)
    }
}

impl RewriteHandle for File {
    fn sync_data(&self) -> io::Result<()> {
        File::sync_data(self)
    }

    fn set_times(&self, accessed: FileTime, modified: FileTime) -> io::Result<()> {
        set_file_handle_times(self, Some(accessed), Some(modified))
    }
}
