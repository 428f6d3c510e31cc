use std::{
    ffi::OsString,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

pub(super) enum ReadError {
    FailedToOpen(std::io::Error),
    UnknownExtension(OsString),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::FailedToOpen(e) => write!(f, "Failed to open file: {e}."),
            Self::UnknownExtension(ex) => write!(f, "Unsupported extension '{ex:?}'."),
        }
    }
}

/// Opens the file at `path` for reading, decompressing the file if the path has an `xz` extension.
pub(super) fn open(path: &Path) -> Result<Box<dyn BufRead>, ReadError> {
    let file = File::open(path).map_err(ReadError::FailedToOpen)?;

    match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => Ok(Box::new(BufReader::new(
            xz2::read::XzDecoder::new(file),
        ))),

        #[cfg(not(feature = "xz"))]
        Some(extension) if extension == "xz" => {
            Err(ReadError::UnknownExtension(extension.to_owned()))
        }

        _ => Ok(Box::new(BufReader::new(file))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temporary_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("extract_{}_{name}", std::process::id()))
    }

    #[test]
    fn plain_file() {
        let path = temporary_path("plain.cnf");
        std::fs::write(&path, "c half size = 2\n").unwrap();

        let mut line = String::new();
        assert!(open(&path).is_ok_and(|mut reader| reader.read_line(&mut line).is_ok()));
        assert_eq!(line, "c half size = 2\n");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file() {
        let path = temporary_path("missing.cnf");
        assert!(matches!(open(&path), Err(ReadError::FailedToOpen(_))));
    }

    #[cfg(feature = "xz")]
    #[test]
    fn compressed_file() {
        use std::io::Write;

        let path = temporary_path("compressed.cnf.xz");

        let mut encoder = xz2::write::XzEncoder::new(File::create(&path).unwrap(), 6);
        encoder.write_all(b"solution = 1 -2\n").unwrap();
        encoder.finish().unwrap();

        let mut line = String::new();
        assert!(open(&path).is_ok_and(|mut reader| reader.read_line(&mut line).is_ok()));
        assert_eq!(line, "solution = 1 -2\n");

        std::fs::remove_file(&path).unwrap();
    }
}
