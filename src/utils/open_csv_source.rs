use crate::Error;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Opens a CSV source for reading, transparently decompressing paths which
/// end in `.gz`.
pub fn open_csv_source<P: AsRef<Path>>(path: P) -> Result<Box<dyn Read>, Error> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let is_gzip = path
        .extension()
        .map_or(false, |extension| extension.eq_ignore_ascii_case("gz"));

    if is_gzip {
        Ok(Box::new(GzDecoder::new(reader)))
    } else {
        Ok(Box::new(reader))
    }
}
