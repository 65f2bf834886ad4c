use crate::constants::INDEX_HEADER;
use crate::models::IndexRow;
use crate::Error;
use csv::{Terminator, Writer, WriterBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends `symbol,date,occurrences` rows to an index artifact.
///
/// The header is written on construction; each `append_rows` call flushes so
/// a running job's progress is observable on disk.
pub struct IndexWriter<W: Write> {
    writer: Writer<W>,
}

impl IndexWriter<BufWriter<File>> {
    /// Creates (or truncates) the artifact at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> IndexWriter<W> {
    pub fn new(inner: W) -> Result<Self, Error> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(inner);

        writer.write_record(INDEX_HEADER)?;
        writer.flush()?;

        Ok(IndexWriter { writer })
    }

    pub fn append_rows(&mut self, rows: &[IndexRow]) -> Result<(), Error> {
        for row in rows {
            let date = row.date.to_string();
            let occurrences = row.occurrences.to_string();
            self.writer
                .write_record([row.symbol.as_str(), date.as_str(), occurrences.as_str()])?;
        }
        self.writer.flush()?;

        Ok(())
    }

    /// Flushes and hands back the underlying writer.
    pub fn into_inner(self) -> Result<W, Error> {
        self.writer
            .into_inner()
            .map_err(|err| Error::IoError(err.into_error()))
    }
}
