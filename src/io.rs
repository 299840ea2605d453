// syncnorm: Normalize allele counts in sync files by sex-specific denominators.
//
// Copyright 2025 Tommi Mäklin [tommi@maklin.fi].
//
// Copyrights in this project are retained by contributors. No copyright assignment
// is required to contribute to this project.
//
// Except as otherwise noted (below and/or in individual files), this
// project is licensed under the Apache License, Version 2.0
// <LICENSE-APACHE> or <http://www.apache.org/licenses/LICENSE-2.0> or
// the MIT license, <LICENSE-MIT> or <http://opensource.org/licenses/MIT>,
// at your option.
//

//! Opening input and output files.
//!
//! Input may be plain text or gzip compressed; compression is detected from
//! the first bytes, so bgzipped sync files work too. Output is written to a
//! temporary file next to the destination and only moved into place by
//! [OutputFile::finish], so a failed run never leaves a truncated file behind.
//!
//! The path `-` refers to stdin or stdout.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Stdout;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::NamedTempFile;

type E = Box<dyn std::error::Error>;

/// Path that stands for stdin or stdout.
pub const STDIO_PATH: &str = "-";

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

/// Wraps `reader` in a gzip decoder if its contents start with the gzip magic bytes.
pub fn decompress_if_gzip<R: BufRead + 'static>(
    mut reader: R,
) -> Result<Box<dyn BufRead>, E> {
    let is_gzip = {
        let buf = reader.fill_buf()?;
        buf.len() >= 2 && buf[0..2] == GZIP_MAGIC
    };

    if is_gzip {
        log::debug!("Input is gzip compressed");
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
    } else {
        Ok(Box::new(reader))
    }
}

/// Open `path` for reading, or stdin if `path` is `-`.
pub fn open_input(
    path: &Path,
) -> Result<Box<dyn BufRead>, E> {
    if is_stdio(path) {
        log::debug!("Reading from stdin");
        return decompress_if_gzip(std::io::stdin().lock())
    }
    let file = File::open(path)?;
    decompress_if_gzip(BufReader::new(file))
}

enum Sink {
    Stdout(BufWriter<Stdout>),
    Plain(BufWriter<NamedTempFile>),
    Gzip(GzEncoder<BufWriter<NamedTempFile>>),
}

/// Output destination for a run.
///
/// Implements [Write]. Data written to a file destination only appears at
/// `path` after [finish](OutputFile::finish) returns successfully; dropping
/// an unfinished OutputFile discards the data.
///
/// ## Usage
///
/// ```rust
/// use syncnorm::io::OutputFile;
/// use std::io::Write;
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("out.sync");
///
/// let mut output = OutputFile::create(&path).unwrap();
/// output.write_all(b"chr1\t100\tA\t2:0:1\t10:2\n").unwrap();
/// assert!(!path.exists());
///
/// output.finish().unwrap();
/// assert_eq!(std::fs::read(&path).unwrap(), b"chr1\t100\tA\t2:0:1\t10:2\n".to_vec());
/// ```
///
pub struct OutputFile {
    sink: Sink,
    path: PathBuf,
}

impl OutputFile {
    /// Create an output for `path`, or stdout if `path` is `-`.
    ///
    /// Paths ending in `.gz` are gzip compressed.
    pub fn create(
        path: &Path,
    ) -> Result<Self, E> {
        if is_stdio(path) {
            log::debug!("Writing to stdout");
            return Ok(Self { sink: Sink::Stdout(BufWriter::new(std::io::stdout())), path: path.to_path_buf() })
        }

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let tmp = NamedTempFile::new_in(dir)?;
        let writer = BufWriter::new(tmp);

        let sink = if path.extension().is_some_and(|ext| ext == "gz") {
            log::debug!("Compressing output with gzip");
            Sink::Gzip(GzEncoder::new(writer, Compression::default()))
        } else {
            Sink::Plain(writer)
        };

        Ok(Self { sink, path: path.to_path_buf() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush all data and move the output into place.
    pub fn finish(
        self,
    ) -> Result<(), E> {
        let tmp = match self.sink {
            Sink::Stdout(mut writer) => {
                writer.flush()?;
                return Ok(())
            },
            Sink::Plain(writer) => writer.into_inner().map_err(|e| e.into_error())?,
            Sink::Gzip(encoder) => encoder.finish()?.into_inner().map_err(|e| e.into_error())?,
        };
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;
        Ok(())
    }
}

impl Write for OutputFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match &mut self.sink {
            Sink::Stdout(writer) => writer.write(buf),
            Sink::Plain(writer) => writer.write(buf),
            Sink::Gzip(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match &mut self.sink {
            Sink::Stdout(writer) => writer.flush(),
            Sink::Plain(writer) => writer.flush(),
            Sink::Gzip(encoder) => encoder.flush(),
        }
    }
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn open_input_plain() {
        use super::open_input;
        use std::io::Read;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.sync");
        std::fs::write(&path, b"chr1\t1\tA\t1\t1\n").unwrap();

        let mut got = String::new();
        open_input(&path).unwrap().read_to_string(&mut got).unwrap();

        assert_eq!(got, "chr1\t1\tA\t1\t1\n");
    }

    #[test]
    fn open_input_gzip() {
        use super::open_input;
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Read;
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.sync.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"# header\nchr1\t1\tA\t1\t1\n").unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let mut got = String::new();
        open_input(&path).unwrap().read_to_string(&mut got).unwrap();

        assert_eq!(got, "# header\nchr1\t1\tA\t1\t1\n");
    }

    #[test]
    fn open_input_empty_file() {
        use super::open_input;
        use std::io::Read;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.sync");
        std::fs::write(&path, b"").unwrap();

        let mut got = String::new();
        open_input(&path).unwrap().read_to_string(&mut got).unwrap();

        assert!(got.is_empty());
    }

    #[test]
    fn open_input_error_if_missing() {
        use super::open_input;

        let dir = tempfile::tempdir().unwrap();

        assert!(open_input(&dir.path().join("missing.sync")).is_err());
    }

    #[test]
    fn output_file_gzip_by_extension() {
        use super::OutputFile;
        use flate2::read::GzDecoder;
        use std::io::Read;
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.sync.gz");

        let mut output = OutputFile::create(&path).unwrap();
        output.write_all(b"chr1\t1\tA\t1\t1\n").unwrap();
        output.finish().unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes[0..2], [0x1f_u8, 0x8b_u8]);

        let mut got = String::new();
        GzDecoder::new(&bytes[..]).read_to_string(&mut got).unwrap();
        assert_eq!(got, "chr1\t1\tA\t1\t1\n");
    }

    #[test]
    fn output_file_dropped_leaves_destination_untouched() {
        use super::OutputFile;
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.sync");
        std::fs::write(&path, b"previous\n").unwrap();

        {
            let mut output = OutputFile::create(&path).unwrap();
            output.write_all(b"partial").unwrap();
        }

        assert_eq!(std::fs::read(&path).unwrap(), b"previous\n".to_vec());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn output_file_replaces_existing() {
        use super::OutputFile;
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.sync");
        std::fs::write(&path, b"previous\n").unwrap();

        let mut output = OutputFile::create(&path).unwrap();
        assert_eq!(output.path(), path.as_path());
        output.write_all(b"new\n").unwrap();
        output.finish().unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"new\n".to_vec());
    }
}
