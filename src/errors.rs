//! Everything that can go wrong between reading `config.xml` and
//! writing the finished image.  Configuration problems are caught
//! before the renderer ever sees a `RenderConfig`; render and output
//! failures abort the run without producing a partial image.

use failure::Fail;
use std::io;

use crate::schema::Report;

/// Failures while locating, reading, or validating the configuration.
#[derive(Debug, Fail)]
pub enum ConfigError {
    /// A required input file does not exist.
    #[fail(display = "Could not find {} configuration file ({}).", kind, path)]
    MissingFile {
        /// Which file: "XML" or "XSD".
        kind: &'static str,
        /// The path that was probed.
        path: String,
    },

    /// The file exists but could not be read.
    #[fail(display = "Could not read {}: {}", path, cause)]
    Io {
        /// The path being read.
        path: String,
        /// The underlying I/O failure.
        #[cause]
        cause: io::Error,
    },

    /// The file is not well-formed XML.
    #[fail(display = "Malformed XML in {}: {}", path, cause)]
    Xml {
        /// The offending document.
        path: String,
        /// The parser's complaint.
        #[cause]
        cause: roxmltree::Error,
    },

    /// The XSD uses a construct outside the supported subset.
    #[fail(display = "Unsupported schema: {}", _0)]
    Schema(String),

    /// The document failed schema validation.
    #[fail(display = "{}", _0)]
    Validation(Report),

    /// The document's root element is not `<config>`.
    #[fail(display = "Expected a <config> document, found <{}>", _0)]
    WrongRoot(String),

    /// A field the renderer needs is absent from the document.
    #[fail(display = "Missing configuration field <{}>", _0)]
    MissingField(&'static str),

    /// A field is present but its value cannot be used.
    #[fail(display = "Invalid value {:?} for <{}>: {}", value, field, reason)]
    InvalidField {
        /// The field name.
        field: &'static str,
        /// The text as it appeared.
        value: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// Fatal faults during rendering.  There is no partial result.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The requested image does not fit in addressable memory.
    #[fail(display = "A {}x{} image is too large to allocate", width, height)]
    BufferTooLarge {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// A worker thread panicked while filling its rows.
    #[fail(display = "Render worker for rows {}..{} failed", start, end)]
    WorkerPanicked {
        /// First row of the failed band.
        start: u32,
        /// One past the last row of the failed band.
        end: u32,
    },
}

/// Failures while encoding the finished image to disk.
#[derive(Debug, Fail)]
pub enum OutputError {
    /// The image crate refused to encode or write the file.
    #[fail(display = "Could not write image {}: {}", path, cause)]
    Write {
        /// Destination path.
        path: String,
        /// The encoder's error.
        #[cause]
        cause: image::ImageError,
    },
}
