//! Dictionary loading.
//!
//! Reads newline-separated word lists into a [`PrefixIndex`]. Each line is one
//! word; how surrounding whitespace and blank lines are treated follows the
//! [`DictionaryConfig`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::AddAssign;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::config::dictionary::DictionaryConfig;
use crate::data_structures::PrefixIndex;
use crate::error::AppResult;

/// Counters collected while loading one or more word lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines read
    pub lines: usize,
    /// Words that were new to the index
    pub inserted: usize,
    /// Words that were already present
    pub duplicates: usize,
    /// Blank lines that were skipped
    pub skipped: usize,
}

impl AddAssign for LoadStats {
    fn add_assign(&mut self, other: Self) {
        self.lines += other.lines;
        self.inserted += other.inserted;
        self.duplicates += other.duplicates;
        self.skipped += other.skipped;
    }
}

/// Loads word lists into an index.
#[derive(Debug, Clone)]
pub struct DictionaryLoader {
    trim: bool,
    skip_blank_lines: bool,
}

impl DictionaryLoader {
    /// Creates a loader from the dictionary configuration.
    pub fn new(config: &DictionaryConfig) -> Self {
        Self {
            trim: config.trim,
            skip_blank_lines: config.skip_blank_lines,
        }
    }

    /// Inserts one word per line of `reader`.
    ///
    /// # Returns
    ///
    /// * `Ok(LoadStats)` - Counters for this reader.
    /// * `Err(AppError)` - Reading failed (including invalid UTF-8) or the
    ///   index refused a word. Words read before the failure stay inserted.
    pub fn load_reader<R: BufRead>(
        &self,
        reader: R,
        index: &mut PrefixIndex,
    ) -> AppResult<LoadStats> {
        let mut stats = LoadStats::default();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            stats.lines += 1;

            let word = if self.trim { line.trim() } else { line.as_str() };
            if word.is_empty() && self.skip_blank_lines {
                debug!(line = line_no + 1, "skipping blank line");
                stats.skipped += 1;
                continue;
            }

            if index.insert(word)? {
                stats.inserted += 1;
            } else {
                stats.duplicates += 1;
            }
        }

        Ok(stats)
    }

    /// Loads a single word list file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_path<P: AsRef<Path>>(
        &self,
        path: P,
        index: &mut PrefixIndex,
    ) -> AppResult<LoadStats> {
        let file = File::open(path.as_ref())?;
        let stats = self.load_reader(BufReader::new(file), index)?;

        info!(
            lines = stats.lines,
            inserted = stats.inserted,
            duplicates = stats.duplicates,
            skipped = stats.skipped,
            "dictionary loaded"
        );

        Ok(stats)
    }

    /// Loads several word list files in order, stopping at the first failure.
    pub fn load_paths<I, P>(&self, paths: I, index: &mut PrefixIndex) -> AppResult<LoadStats>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut total = LoadStats::default();
        for path in paths {
            total += self.load_path(path, index)?;
        }
        Ok(total)
    }
}

impl Default for DictionaryLoader {
    fn default() -> Self {
        Self::new(&DictionaryConfig::default())
    }
}
