// src/utils/io.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Word at position {0} contains a line break and cannot be exported")]
    MultilineWord(usize),
}

pub type Result<T> = std::result::Result<T, ExportError>;

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> ExportError + '_ {
    move |source| ExportError::Io { path: path.to_path_buf(), source }
}

/// Write words to `path`, one per line, each terminated by `\n`.
///
/// Accepts any iterator so streamed wordlists never have to be collected.
/// Returns the number of words written.
pub fn write_wordlist_stream<I, S>(path: &Path, words: I) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let file = File::create(path).map_err(io_error(path))?;
    let mut writer = BufWriter::new(file);

    let mut count = 0;
    for word in words {
        let word = word.as_ref();
        if word.contains(['\n', '\r']) {
            return Err(ExportError::MultilineWord(count));
        }
        writeln!(writer, "{}", word).map_err(io_error(path))?;
        count += 1;
    }

    writer.flush().map_err(io_error(path))?;
    log::info!("Exported {} words to {}", count, path.display());
    Ok(count)
}

/// Write an already materialized wordlist, preserving its order
pub fn write_wordlist(path: &Path, words: &[String]) -> Result<usize> {
    write_wordlist_stream(path, words)
}

/// Read a wordlist back in file order, one entry per line
pub fn read_wordlist(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(io_error(path))?;
    let reader = BufReader::new(file);

    reader
        .lines()
        .map(|line| line.map_err(io_error(path)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordlist.txt");
        let words: Vec<String> = ["Ann!123", "Ann2020", "ann_20", "ANN", "4nn", "\u{e9}l\u{e9}"]
            .iter()
            .map(|w| w.to_string())
            .collect();

        assert_eq!(write_wordlist(&path, &words).unwrap(), words.len());
        assert_eq!(read_wordlist(&path).unwrap(), words);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.ends_with("\u{e9}l\u{e9}\n"));
        assert_eq!(raw.lines().count(), words.len());
    }

    #[test]
    fn test_stream_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("streamed.txt");
        let count = write_wordlist_stream(&path, (2000..2003).map(|y| format!("ann{y}"))).unwrap();
        assert_eq!(count, 3);
        assert_eq!(read_wordlist(&path).unwrap(), vec!["ann2000", "ann2001", "ann2002"]);
    }

    #[test]
    fn test_multiline_word_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        let err = write_wordlist_stream(&path, ["ok", "not\nok"]).unwrap_err();
        assert!(matches!(err, ExportError::MultilineWord(1)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_wordlist(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
