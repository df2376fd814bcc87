//! The render configuration, and the loader that builds one from an
//! XML document checked against an XSD schema.
//!
//! ```xml
//! <config>
//!   <width>800</width>
//!   <height>600</height>
//!   <x_min>-2.0</x_min>
//!   <x_max>1.0</x_max>
//!   <y_min>-1.0</y_min>
//!   <y_max>1.0</y_max>
//!   <iteration>50</iteration>
//!   <threshold>50</threshold>
//!   <output_path>mandelbrot.png</output_path>
//! </config>
//! ```

use roxmltree::{Document, Node};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

use crate::errors::ConfigError;
use crate::schema::{element_text, Schema};

/// Where the XML configuration is looked for by default.
pub const DEFAULT_CONFIG: &str = "./config.xml";
/// Where the XSD schema is looked for by default.
pub const DEFAULT_SCHEMA: &str = "./config.xsd";

/// The rectangle of the complex plane being rendered.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Left edge, on the real axis.
    pub x_min: f64,
    /// Right edge, on the real axis.
    pub x_max: f64,
    /// Top edge (row 0), on the imaginary axis.
    pub y_min: f64,
    /// Bottom edge, on the imaginary axis.
    pub y_max: f64,
}

/// Everything needed to render one frame.  The only way to get one is
/// through `RenderConfig::new`, which checks every range, so the
/// renderer never has to.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    width: u32,
    height: u32,
    viewport: Viewport,
    iteration: u32,
    threshold: u32,
    output_path: PathBuf,
}

fn invalid<T: ToString>(field: &'static str, value: T, reason: &str) -> ConfigError {
    ConfigError::InvalidField {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl RenderConfig {
    /// Builds a configuration, rejecting empty images, empty or
    /// non-finite viewports, a zero iteration cap, and an empty
    /// output path.
    pub fn new<P: Into<PathBuf>>(
        width: u32,
        height: u32,
        viewport: Viewport,
        iteration: u32,
        threshold: u32,
        output_path: P,
    ) -> Result<RenderConfig, ConfigError> {
        if width == 0 {
            return Err(invalid("width", width, "must be greater than zero"));
        }
        if height == 0 {
            return Err(invalid("height", height, "must be greater than zero"));
        }
        if iteration == 0 {
            return Err(invalid("iteration", iteration, "must be greater than zero"));
        }
        let bounds = [
            ("x_min", viewport.x_min),
            ("x_max", viewport.x_max),
            ("y_min", viewport.y_min),
            ("y_max", viewport.y_max),
        ];
        for &(field, value) in bounds.iter() {
            if !value.is_finite() {
                return Err(invalid(field, value, "must be a finite number"));
            }
        }
        if viewport.x_min >= viewport.x_max {
            return Err(invalid("x_max", viewport.x_max, "must be greater than x_min"));
        }
        if viewport.y_min >= viewport.y_max {
            return Err(invalid("y_max", viewport.y_max, "must be greater than y_min"));
        }
        let output_path = output_path.into();
        if output_path.as_os_str().is_empty() {
            return Err(invalid("output_path", "", "must not be empty"));
        }
        Ok(RenderConfig {
            width,
            height,
            viewport,
            iteration,
            threshold,
            output_path,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The region of the complex plane being rendered.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The most escape-test steps spent on any one pixel.
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// How much darker each additional escape step makes a pixel.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Where the finished image goes.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Reads the fields out of a `<config>` document that has already
    /// passed schema validation.
    pub fn from_document(doc: &Document) -> Result<RenderConfig, ConfigError> {
        let root = doc.root_element();
        if root.tag_name().name() != "config" {
            return Err(ConfigError::WrongRoot(root.tag_name().name().to_string()));
        }
        let viewport = Viewport {
            x_min: field(root, "x_min")?,
            x_max: field(root, "x_max")?,
            y_min: field(root, "y_min")?,
            y_max: field(root, "y_max")?,
        };
        RenderConfig::new(
            field(root, "width")?,
            field(root, "height")?,
            viewport,
            field(root, "iteration")?,
            field(root, "threshold")?,
            text(root, "output_path")?,
        )
    }
}

fn text(root: Node, name: &'static str) -> Result<String, ConfigError> {
    root.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
        .map(element_text)
        .ok_or(ConfigError::MissingField(name))
}

fn field<T: FromStr>(root: Node, name: &'static str) -> Result<T, ConfigError>
where
    T::Err: ToString,
{
    let raw = text(root, name)?;
    raw.trim()
        .parse::<T>()
        .map_err(|e| invalid(name, &raw, &e.to_string()))
}

/// A configuration that passed validation, with any warnings the
/// validator raised along the way.
#[derive(Debug)]
pub struct Loaded {
    /// The configuration.
    pub config: RenderConfig,
    /// Validation warnings; none of them prevented loading.
    pub warnings: Vec<String>,
}

/// Validates `xml` against the schema in `xsd` and builds a
/// configuration from it.  `xml_name` and `xsd_name` only label error
/// messages.
pub fn from_xml(
    xml: &str,
    xml_name: &str,
    xsd: &str,
    xsd_name: &str,
) -> Result<Loaded, ConfigError> {
    let schema_doc = Document::parse(xsd).map_err(|cause| ConfigError::Xml {
        path: xsd_name.to_string(),
        cause,
    })?;
    let schema = Schema::compile(&schema_doc)?;
    let doc = Document::parse(xml).map_err(|cause| ConfigError::Xml {
        path: xml_name.to_string(),
        cause,
    })?;

    let mut report = schema.validate(&doc);
    report.warnings.extend(schema.warnings().iter().cloned());
    for warning in &report.warnings {
        warn!("{}", warning);
    }
    if !report.is_valid() {
        return Err(ConfigError::Validation(report));
    }

    let config = RenderConfig::from_document(&doc)?;
    debug!(?config, "configuration loaded");
    Ok(Loaded {
        config,
        warnings: report.warnings,
    })
}

fn read(path: &Path, kind: &'static str) -> Result<String, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile {
            kind,
            path: path.display().to_string(),
        });
    }
    fs::read_to_string(path).map_err(|cause| ConfigError::Io {
        path: path.display().to_string(),
        cause,
    })
}

/// Loads the configuration at `xml_path`, validated against the schema
/// at `xsd_path`.  Both files must exist.
pub fn load(xml_path: &Path, xsd_path: &Path) -> Result<Loaded, ConfigError> {
    let xml = read(xml_path, "XML")?;
    let xsd = read(xsd_path, "XSD")?;
    from_xml(
        &xml,
        &xml_path.display().to_string(),
        &xsd,
        &xsd_path.display().to_string(),
    )
}
