//! Reading the line-oriented source into a container

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{RaceError, RaceResult};
use crate::models::Timing;

use super::container::RaceContainer;
use super::timing::time;

/// Append every line of `reader` to `container`, in read order
///
/// Lines are split on `\n` with a trailing `\r` stripped. Bytes that are not
/// valid UTF-8 are replaced rather than ending the pass. Returns the number of
/// lines read.
pub fn read_records<C, R>(container: &mut C, reader: R) -> io::Result<usize>
where
    C: RaceContainer,
    R: BufRead,
{
    let mut count = 0;
    for line in reader.split(b'\n') {
        container.push_record(decode_line(line?));
        count += 1;
    }
    Ok(count)
}

fn decode_line(mut bytes: Vec<u8>) -> String {
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }
    match String::from_utf8(bytes) {
        Ok(line) => line,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Clear `container`, then time one full read pass over `path`
///
/// The file is opened before the clock starts and closed when this returns.
pub fn timed_read<C: RaceContainer>(container: &mut C, path: &Path) -> RaceResult<Timing> {
    container.clear();

    let file = File::open(path).map_err(|source| RaceError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let (result, timing) = time(|| read_records(container, reader));
    let lines = result.map_err(|source| RaceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let kind = C::KIND;
    debug!(container = %kind, lines, "Read pass finished");
    Ok(timing)
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, LinkedList};
    use std::io::{Cursor, Write};

    use tempfile::NamedTempFile;

    use super::*;

    fn source(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_preserves_order() {
        let mut list = LinkedList::<String>::new();
        let count = read_records(&mut list, Cursor::new("c\na\nb\n")).unwrap();

        assert_eq!(count, 3);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), ["c", "a", "b"]);
    }

    #[test]
    fn test_read_strips_crlf_and_keeps_last_line() {
        let mut vec = Vec::<String>::new();
        read_records(&mut vec, Cursor::new("x\r\ny\r\nz")).unwrap();

        assert_eq!(vec, ["x", "y", "z"]);
    }

    #[test]
    fn test_read_keeps_blank_lines() {
        let mut vec = Vec::<String>::new();
        read_records(&mut vec, Cursor::new("a\n\nb\n")).unwrap();

        assert_eq!(vec, ["a", "", "b"]);
    }

    #[test]
    fn test_timed_read_clears_first() {
        let file = source(b"a\nb\nb\n");
        let mut vec = vec!["stale".to_string()];
        let mut set = BTreeSet::from(["stale".to_string()]);

        timed_read(&mut vec, file.path()).unwrap();
        timed_read(&mut set, file.path()).unwrap();

        assert_eq!(vec, ["a", "b", "b"]);
        assert_eq!(set.len(), 2);
        assert!(!set.contains("stale"));
    }

    #[test]
    fn test_timed_read_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let mut vec = vec!["stale".to_string()];

        let err = timed_read(&mut vec, &missing).unwrap_err();

        assert!(matches!(err, RaceError::SourceUnavailable { ref path, .. } if *path == missing));
        assert!(vec.is_empty());
    }

    #[test]
    fn test_timed_read_loads_non_utf8_lines() {
        let file = source(b"a\nb\ncaf\xe9\nd\ne\n");
        let mut vec = Vec::<String>::new();
        let mut list = LinkedList::<String>::new();
        let mut set = BTreeSet::<String>::new();

        timed_read(&mut vec, file.path()).unwrap();
        timed_read(&mut list, file.path()).unwrap();
        timed_read(&mut set, file.path()).unwrap();

        assert_eq!(vec.len(), 5);
        assert_eq!(list.len(), 5);
        assert_eq!(set.len(), 5);
        assert_eq!(vec[2], "caf\u{FFFD}");
        assert_eq!(vec[4], "e");
    }

    #[test]
    fn test_read_non_utf8_with_crlf() {
        let mut vec = Vec::<String>::new();
        let count = read_records(&mut vec, Cursor::new(&b"\xff\r\nok\r\n"[..])).unwrap();

        assert_eq!(count, 2);
        assert_eq!(vec, ["\u{FFFD}", "ok"]);
    }
}
