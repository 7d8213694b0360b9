//! Whole-file I/O around the codec.
//!
//! The codec works on complete in-memory buffers; this module reads and
//! writes those buffers. Nothing here inspects BMP contents except
//! [`load_bmp`] and [`save_bmp`], which hand the bytes straight to the codec.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::BitmapError;
use crate::raster::Raster;

/// Failure from the filesystem layer, tagged with the path involved.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FileError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf, source: io::Error },

    #[error("cannot open {}", path.display())]
    OpenFailed { path: PathBuf, source: io::Error },

    #[error("read failed on {}", path.display())]
    ReadFailed { path: PathBuf, source: io::Error },

    #[error("write failed on {}", path.display())]
    WriteFailed { path: PathBuf, source: io::Error },
}

impl FileError {
    pub fn path(&self) -> &Path {
        match self {
            FileError::NotFound { path, .. }
            | FileError::OpenFailed { path, .. }
            | FileError::ReadFailed { path, .. }
            | FileError::WriteFailed { path, .. } => path,
        }
    }
}

/// Open for reading, mapping a missing file to `NotFound`.
fn open_existing(path: &Path) -> Result<File, FileError> {
    File::open(path).map_err(|source| {
        let path = path.to_path_buf();
        if source.kind() == io::ErrorKind::NotFound {
            FileError::NotFound { path, source }
        } else {
            FileError::OpenFailed { path, source }
        }
    })
}

fn open_failed(path: &Path) -> impl FnOnce(io::Error) -> FileError + '_ {
    move |source| FileError::OpenFailed {
        path: path.to_path_buf(),
        source,
    }
}

fn read_failed(path: &Path) -> impl FnOnce(io::Error) -> FileError + '_ {
    move |source| FileError::ReadFailed {
        path: path.to_path_buf(),
        source,
    }
}

fn write_failed(path: &Path) -> impl FnOnce(io::Error) -> FileError + '_ {
    move |source| FileError::WriteFailed {
        path: path.to_path_buf(),
        source,
    }
}

/// Read an entire file into memory.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>, FileError> {
    let path = path.as_ref();
    let mut file = open_existing(path)?;
    let mut data = Vec::new();
    file.read_to_end(&mut data).map_err(read_failed(path))?;
    debug!("read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Create or truncate `path` and write `data` to it.
pub fn write_file(path: impl AsRef<Path>, data: &[u8]) -> Result<(), FileError> {
    let path = path.as_ref();
    let mut file = File::create(path).map_err(open_failed(path))?;
    file.write_all(data).map_err(write_failed(path))?;
    file.flush().map_err(write_failed(path))?;
    debug!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

/// Append `data` to `path`, creating the file if needed.
pub fn append_file(path: impl AsRef<Path>, data: &[u8]) -> Result<(), FileError> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_failed(path))?;
    file.write_all(data).map_err(write_failed(path))?;
    debug!("appended {} bytes to {}", data.len(), path.display());
    Ok(())
}

/// Whether `path` can be opened for reading.
pub fn exists(path: impl AsRef<Path>) -> bool {
    File::open(path).is_ok()
}

/// Size of the file at `path` in bytes.
pub fn file_size(path: impl AsRef<Path>) -> Result<u64, FileError> {
    let path = path.as_ref();
    let file = open_existing(path)?;
    let len = file.metadata().map_err(read_failed(path))?.len();
    debug!("{} is {len} bytes", path.display());
    Ok(len)
}

/// Copy `src` to `dest`, overwriting `dest`. Returns the bytes copied.
pub fn copy_file(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<u64, FileError> {
    let (src, dest) = (src.as_ref(), dest.as_ref());
    let mut input = open_existing(src)?;
    let mut output = File::create(dest).map_err(open_failed(dest))?;
    let copied = pipe(&mut input, src, &mut output, dest)?;
    output.flush().map_err(write_failed(dest))?;
    debug!("copied {copied} bytes from {} to {}", src.display(), dest.display());
    Ok(copied)
}

/// Write `a` followed by `b` into `out`. Returns the total bytes written.
///
/// `out` is created before either input is opened, so a missing input leaves
/// a partial `out` behind.
pub fn merge_files(
    out: impl AsRef<Path>,
    a: impl AsRef<Path>,
    b: impl AsRef<Path>,
) -> Result<u64, FileError> {
    let out = out.as_ref();
    let mut output = File::create(out).map_err(open_failed(out))?;
    let mut total = 0;
    for part in [a.as_ref(), b.as_ref()] {
        let mut input = open_existing(part)?;
        total += pipe(&mut input, part, &mut output, out)?;
    }
    output.flush().map_err(write_failed(out))?;
    debug!("merged {total} bytes into {}", out.display());
    Ok(total)
}

/// Stream `input` into `output` in fixed-size chunks, attributing errors to
/// the right side.
fn pipe(
    input: &mut File,
    input_path: &Path,
    output: &mut File,
    output_path: &Path,
) -> Result<u64, FileError> {
    let mut buf = [0u8; 8192];
    let mut total = 0u64;
    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => return Ok(total),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(read_failed(input_path)(e)),
        };
        output.write_all(&buf[..n]).map_err(write_failed(output_path))?;
        total += n as u64;
    }
}

/// Read and decode a BMP file.
pub fn load_bmp(path: impl AsRef<Path>) -> Result<Raster, BitmapError> {
    let path = path.as_ref();
    let data = read_file(path)?;
    let raster = crate::decode_bmp(&data)?;
    debug!(
        "loaded {} ({}x{})",
        path.display(),
        raster.width,
        raster.height
    );
    Ok(raster)
}

/// Encode a raster and write it to `path`.
pub fn save_bmp(path: impl AsRef<Path>, raster: &Raster) -> Result<(), BitmapError> {
    let path = path.as_ref();
    let data = crate::encode_bmp(raster)?;
    write_file(path, &data)?;
    debug!(
        "saved {} ({}x{})",
        path.display(),
        raster.width,
        raster.height
    );
    Ok(())
}
