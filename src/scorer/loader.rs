use crate::error::CfResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads a word list: one word per line, first tab-separated column only.
/// Blank lines and `#` comments are skipped.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> CfResult<Vec<String>> {
    let path = path.as_ref();
    debug!("Loading word list from {:?}", path);
    let file = File::open(path)?;
    load_word_list_from_reader(file)
}

pub fn load_word_list_from_reader<R: Read>(reader: R) -> CfResult<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut words = Vec::new();
    let mut skipped = 0;

    for result in rdr.records() {
        let record = result?;
        match record.get(0).map(str::trim) {
            Some(word) if !word.is_empty() => words.push(word.to_string()),
            _ => skipped += 1,
        }
    }

    debug!("   -> {} words, {} empty rows skipped", words.len(), skipped);
    Ok(words)
}
