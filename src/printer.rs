use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub trait WriteToFile {
    fn write_lines(&self, path: &Path, lines: &[String]) -> io::Result<()>;
}

#[derive(Default)]
pub struct Writer;

impl WriteToFile for Writer {
    /// Create or truncate `path` and write each line followed by `\n`.
    ///
    /// A failure part way through leaves the file partially written.
    fn write_lines(&self, path: &Path, lines: &[String]) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);

        for line in lines {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }

        writer.flush()
    }
}
