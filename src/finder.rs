//! The finder controller.
//!
//! [`Finder`] is the state behind a finder front end: the registry of
//! discovered entries, the current search query, the rendered table
//! ("display") with its status line ("info"), and notices waiting to be shown
//! to the user. Each user action maps to one method; failures never escape a
//! method, they become [`Notice`]s.
//!
//! # Example
//!
//! ```no_run
//! use xlfind::finder::{Finder, Opened};
//! use xlfind::scan::PathPicker;
//!
//! let mut finder = Finder::new();
//! finder.pick_folder(&PathPicker::new("shared/reports"));
//! finder.set_query("budget");
//!
//! for (i, entry) in finder.visible().iter().enumerate() {
//!     println!("{i}: {}", entry.path());
//! }
//!
//! if finder.open(0) == Opened::Rendered {
//!     println!("{}", finder.info());
//! }
//! for notice in finder.take_notices() {
//!     eprintln!("{notice}");
//! }
//! ```

use crate::error::Result;
use crate::model::{ByteSource, FileEntry, Registry, Worksheet};
use crate::render::{to_html, RenderOptions};
use crate::scan::{scan_directory, select_files, DirectoryPicker, SelectedFile};
use crate::workbook::Workbook;
use log::{debug, info};
use std::fmt;

/// Well-known location of the bundled sample workbook, relative to a site root.
pub const DEFAULT_WORKBOOK_PATH: &str = "data/sample.xlsx";

/// Label shown for the sample workbook.
pub const DEFAULT_WORKBOOK_LABEL: &str = "sample.xlsx";

const PICK_FAILED: &str = "Folder pick cancelled or failed.";
const PICK_UNSUPPORTED: &str =
    "Folder picker not supported in this environment. Use file selection instead.";
const DEFAULT_UNAVAILABLE: &str = "To load the default workbook, run from the site root that \
                                   serves data/sample.xlsx (a plain local file will not do).";

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A blocking failure notice.
    Alert(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Alert(message) => f.write_str(message),
        }
    }
}

/// Outcome of a folder pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Picked {
    /// The folder was scanned; the registry holds this many entries.
    Scanned(usize),
    /// The user declined the grant. Not an error.
    Cancelled,
    /// Picking or scanning failed; an alert was raised.
    Failed,
    /// The environment cannot pick folders; an alert was raised.
    Unsupported,
}

/// Outcome of opening an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opened {
    /// The first sheet was rendered into the display.
    Rendered,
    /// No visible entry at that position; nothing happened.
    NoSuchEntry,
    /// Reading or decoding failed; an alert was raised and the display kept.
    Failed,
}

/// Controller state for one finder session.
#[derive(Debug, Default)]
pub struct Finder {
    registry: Registry,
    query: String,
    options: RenderOptions,
    display: Option<String>,
    worksheet: Option<Worksheet>,
    info: String,
    notices: Vec<Notice>,
}

impl Finder {
    /// Create an idle finder with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a finder with custom render options.
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Entries from the latest pick, in discovery order.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Render options used when opening entries.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// The current search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The filtered list as currently shown.
    ///
    /// Recomputed on every call; positions are only meaningful until the
    /// query or the registry changes.
    pub fn visible(&self) -> Vec<&FileEntry> {
        self.registry.filter(&self.query)
    }

    /// Count line for the visible list.
    pub fn count_label(&self) -> String {
        count_label(self.visible().len())
    }

    /// Rendered HTML of the last opened sheet.
    pub fn display(&self) -> Option<&str> {
        self.display.as_deref()
    }

    /// The last opened sheet.
    pub fn worksheet(&self) -> Option<&Worksheet> {
        self.worksheet.as_ref()
    }

    /// Status line for the last opened sheet, empty when nothing is shown.
    pub fn info(&self) -> &str {
        &self.info
    }

    /// Pending notices, oldest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drain pending notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Ask `picker` for a folder and scan it into a fresh registry.
    pub fn pick_folder<P: DirectoryPicker>(&mut self, picker: &P) -> Picked {
        self.reset();

        if !picker.is_supported() {
            self.alert(PICK_UNSUPPORTED);
            return Picked::Unsupported;
        }

        let root = match picker.pick() {
            Ok(Some(root)) => root,
            Ok(None) => {
                debug!("folder pick declined");
                return Picked::Cancelled;
            }
            Err(e) => {
                debug!("folder pick failed: {}", e);
                self.alert(PICK_FAILED);
                return Picked::Failed;
            }
        };

        match scan_directory(&root, &mut self.registry) {
            Ok(()) => {
                info!("found {} candidate file(s)", self.registry.len());
                Picked::Scanned(self.registry.len())
            }
            Err(e) => {
                debug!("scan failed: {}", e);
                self.alert(PICK_FAILED);
                Picked::Failed
            }
        }
    }

    /// Replace the registry with the supported files of a selection.
    pub fn pick_files<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        self.reset();
        self.registry.extend(select_files(files));
        info!("selected {} candidate file(s)", self.registry.len());
        self.registry.len()
    }

    /// Open the entry at `index` of the visible list and render its first sheet.
    pub fn open(&mut self, index: usize) -> Opened {
        let Some(entry) = self.visible().get(index).map(|e| (*e).clone()) else {
            return Opened::NoSuchEntry;
        };

        self.render_source(entry.source().as_ref(), entry.label())
    }

    /// Render the sample workbook from `source`.
    ///
    /// Failures raise a notice pointing at [`DEFAULT_WORKBOOK_PATH`].
    pub fn load_default(&mut self, source: &dyn ByteSource) -> Opened {
        match self.render(source, DEFAULT_WORKBOOK_LABEL) {
            Ok(()) => Opened::Rendered,
            Err(e) => {
                debug!("default workbook unavailable: {}", e);
                self.alert(DEFAULT_UNAVAILABLE);
                Opened::Failed
            }
        }
    }

    fn render_source(&mut self, source: &dyn ByteSource, label: &str) -> Opened {
        match self.render(source, label) {
            Ok(()) => Opened::Rendered,
            Err(e) => {
                self.alert(format!("Could not open file. {}", e));
                Opened::Failed
            }
        }
    }

    /// Decode and render; the display only changes on success.
    fn render(&mut self, source: &dyn ByteSource, label: &str) -> Result<()> {
        let bytes = source.read_bytes()?;
        let mut workbook = Workbook::from_bytes(bytes)?;
        let sheet = workbook.first_worksheet()?;
        let html = to_html(&sheet, &self.options);

        let label = if label.is_empty() { sheet.name.as_str() } else { label };
        self.info = status_line(label);
        self.display = Some(html);
        self.worksheet = Some(sheet);
        Ok(())
    }

    fn reset(&mut self) {
        self.registry.clear();
        self.display = None;
        self.worksheet = None;
        self.info.clear();
    }

    fn alert(&mut self, message: impl Into<String>) {
        self.notices.push(Notice::Alert(message.into()));
    }
}

/// `No files found`, `1 file found`, or `N files found`.
pub fn count_label(n: usize) -> String {
    match n {
        0 => "No files found".to_string(),
        1 => "1 file found".to_string(),
        n => format!("{} files found", n),
    }
}

fn status_line(label: &str) -> String {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("Showing: {} — {}", label, now)
}
