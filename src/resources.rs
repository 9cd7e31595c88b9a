use std::fs;
use std::io;
use std::path::Path;

/// Read a text file into lines. The file is closed before this returns.
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_string)
        .collect())
}
