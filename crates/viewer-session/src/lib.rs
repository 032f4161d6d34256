//! Serialization of viewer session options.
//!
//! A newly launched viewer instance forwards its startup options to an
//! already running one as a single string, so the wire form has to stay
//! stable: five colon-delimited fields, booleans as `1`/`0`, the page
//! reference last.

use thiserror::Error;
use tracing::trace;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("expected 5 colon-separated fields, got {0}")]
    FieldCount(usize),
}

/// Options forwarded between viewer instances
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionOptions {
    /// Start in presentation mode
    pub start_in_presentation: bool,
    /// Open the print dialog after loading the document
    pub show_print_dialog: bool,
    /// Reuse a single instance for all documents
    pub unique: bool,
    /// Do not raise the window
    pub no_raise: bool,
    /// Page reference to open at; empty for the default page. Cannot
    /// contain a colon, the field delimiter.
    pub page: String,
}

impl SessionOptions {
    /// Pack the options into the colon-delimited wire form
    pub fn serialize(&self) -> String {
        format!(
            "{}:{}:{}:{}:{}",
            self.start_in_presentation as u8,
            self.show_print_dialog as u8,
            self.unique as u8,
            self.no_raise as u8,
            self.page,
        )
    }

    /// Unpack a serialized option string. Anything other than exactly
    /// five fields is rejected; unknown boolean values read as false.
    pub fn parse(serialized: &str) -> Result<Self> {
        let fields: Vec<&str> = serialized.split(':').collect();
        if fields.len() != 5 {
            trace!(count = fields.len(), "rejecting malformed option string");
            return Err(SessionError::FieldCount(fields.len()));
        }
        Ok(Self {
            start_in_presentation: fields[0] == "1",
            show_print_dialog: fields[1] == "1",
            unique: fields[2] == "1",
            no_raise: fields[3] == "1",
            page: fields[4].to_string(),
        })
    }
}
