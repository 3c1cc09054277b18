//! Render use case: expand shortcodes in files or streams

use crate::application::shortcodes::ShortcodeService;
use crate::error::{Result, YearcodeError};
use crate::infrastructure::collect_files;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Extensions rendered when walking a directory
pub const DEFAULT_EXTENSIONS: &[&str] = &["html", "htm", "md", "txt"];

/// Result of rendering a set of files in place
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Files that contained at least one shortcode and were rewritten
    pub changed: Vec<PathBuf>,
    /// Files scanned
    pub scanned: usize,
    /// Shortcodes replaced across all files
    pub replaced: usize,
}

/// Service for expanding shortcodes in text sources
pub struct RenderService<'a> {
    shortcodes: &'a ShortcodeService,
}

impl<'a> RenderService<'a> {
    pub fn new(shortcodes: &'a ShortcodeService) -> Self {
        RenderService { shortcodes }
    }

    /// Read all of `reader` and return it expanded
    pub fn render_reader<R: Read>(&self, mut reader: R) -> Result<String> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Ok(self.shortcodes.render_text(&input))
    }

    /// Expand a single file and return the result without touching the file
    pub fn render_file(&self, path: &Path) -> Result<String> {
        let input = fs::read_to_string(path)?;
        Ok(self.shortcodes.render_text(&input))
    }

    /// Expand a file in place; returns the number of shortcodes replaced.
    ///
    /// `[[tag]]` escapes are written back unchanged, so rendering the same
    /// file again is a no-op.
    pub fn write_file(&self, path: &Path) -> Result<usize> {
        let input = fs::read_to_string(path)?;
        let count = self.shortcodes.count(&input);
        if count > 0 {
            fs::write(path, self.shortcodes.render_text_preserving_escapes(&input))?;
            tracing::debug!(path = %path.display(), count, "rendered file");
        }
        Ok(count)
    }

    /// Expand every matching file under `dir` in place
    pub fn write_dir(&self, dir: &Path, extensions: &[String]) -> Result<RenderSummary> {
        if !dir.is_dir() {
            return Err(YearcodeError::Config(format!(
                "Not a directory: {}",
                dir.display()
            )));
        }

        let files = collect_files(dir, extensions)?;
        let mut summary = RenderSummary {
            scanned: files.len(),
            ..RenderSummary::default()
        };

        for file in files {
            let count = self.write_file(&file)?;
            if count > 0 {
                summary.replaced += count;
                summary.changed.push(file);
            }
        }

        Ok(summary)
    }
}
