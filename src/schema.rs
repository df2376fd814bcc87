//! A validator for the small corner of XML Schema that configuration
//! files need: a handful of named elements, each either a sequence of
//! child elements or a built-in simple type, optionally narrowed by
//! range and length facets.
//!
//! Compiling a schema fails outright on anything outside that corner,
//! except for facets we recognise but do not enforce, which compile
//! with a warning.  Validating a document never fails; it collects
//! every problem it finds into a `Report`.

use roxmltree::{Document, Node};
use std::fmt;

use crate::errors::ConfigError;

const XS: &str = "http://www.w3.org/2001/XMLSchema";
const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// What validation found.  Any error makes the document invalid;
/// warnings are informational.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    /// Problems that do not invalidate the document.
    pub warnings: Vec<String>,
    /// Problems that do.
    pub errors: Vec<String>,
}

impl Report {
    /// True when no errors were found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for warning in &self.warnings {
            writeln!(f, "Validation Warning ({})", warning)?;
        }
        for error in &self.errors {
            writeln!(f, "Validation Error ({})", error)?;
        }
        write!(f, "Validation failed...")
    }
}

/// The built-in XSD datatypes we know how to check.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Builtin {
    /// `xs:string`
    String,
    /// `xs:boolean`
    Boolean,
    /// `xs:decimal`
    Decimal,
    /// `xs:double` and `xs:float`
    Double,
    /// `xs:integer`
    Integer,
    /// `xs:long`
    Long,
    /// `xs:int`
    Int,
    /// `xs:short`
    Short,
    /// `xs:positiveInteger`
    PositiveInteger,
    /// `xs:nonNegativeInteger`
    NonNegativeInteger,
    /// `xs:unsignedLong`
    UnsignedLong,
    /// `xs:unsignedInt`
    UnsignedInt,
}

impl Builtin {
    fn from_name(name: &str) -> Option<Builtin> {
        Some(match name {
            "string" => Builtin::String,
            "boolean" => Builtin::Boolean,
            "decimal" => Builtin::Decimal,
            "double" | "float" => Builtin::Double,
            "integer" => Builtin::Integer,
            "long" => Builtin::Long,
            "int" => Builtin::Int,
            "short" => Builtin::Short,
            "positiveInteger" => Builtin::PositiveInteger,
            "nonNegativeInteger" => Builtin::NonNegativeInteger,
            "unsignedLong" => Builtin::UnsignedLong,
            "unsignedInt" => Builtin::UnsignedInt,
            _ => return None,
        })
    }

    /// The schema name of the type, for messages.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::String => "xs:string",
            Builtin::Boolean => "xs:boolean",
            Builtin::Decimal => "xs:decimal",
            Builtin::Double => "xs:double",
            Builtin::Integer => "xs:integer",
            Builtin::Long => "xs:long",
            Builtin::Int => "xs:int",
            Builtin::Short => "xs:short",
            Builtin::PositiveInteger => "xs:positiveInteger",
            Builtin::NonNegativeInteger => "xs:nonNegativeInteger",
            Builtin::UnsignedLong => "xs:unsignedLong",
            Builtin::UnsignedInt => "xs:unsignedInt",
        }
    }

    fn is_numeric(self) -> bool {
        match self {
            Builtin::String | Builtin::Boolean => false,
            _ => true,
        }
    }

    fn integer_range(self) -> Option<(i128, i128)> {
        match self {
            Builtin::Integer => Some((i128::MIN, i128::MAX)),
            Builtin::Long => Some((i64::MIN.into(), i64::MAX.into())),
            Builtin::Int => Some((i32::MIN.into(), i32::MAX.into())),
            Builtin::Short => Some((i16::MIN.into(), i16::MAX.into())),
            Builtin::PositiveInteger => Some((1, i128::MAX)),
            Builtin::NonNegativeInteger => Some((0, i128::MAX)),
            Builtin::UnsignedLong => Some((0, u64::MAX.into())),
            Builtin::UnsignedInt => Some((0, u32::MAX.into())),
            _ => None,
        }
    }

    /// Checks the lexical form of `text`.  Numeric types return the
    /// value so that range facets can be applied to it.
    fn check(self, text: &str) -> Result<Option<f64>, String> {
        let mismatch = || format!("The value '{}' is not a valid {}.", text, self.name());
        if let Some((low, high)) = self.integer_range() {
            let digits = text.trim_start_matches(|c: char| c == '+' || c == '-');
            if digits.is_empty()
                || text.len() - digits.len() > 1
                || !digits.chars().all(|c| c.is_ascii_digit())
            {
                return Err(mismatch());
            }
            return match text.parse::<i128>() {
                Ok(value) if value >= low && value <= high => Ok(Some(value as f64)),
                _ => Err(format!("The value '{}' is out of range for {}.", text, self.name())),
            };
        }
        match self {
            Builtin::String => Ok(None),
            Builtin::Boolean => match text {
                "true" | "false" | "1" | "0" => Ok(None),
                _ => Err(mismatch()),
            },
            Builtin::Decimal => {
                let lexical = text
                    .chars()
                    .all(|c| c.is_ascii_digit() || c == '+' || c == '-' || c == '.');
                match text.parse::<f64>() {
                    Ok(value) if lexical => Ok(Some(value)),
                    _ => Err(mismatch()),
                }
            }
            _ => match text {
                "INF" => Ok(Some(std::f64::INFINITY)),
                "-INF" => Ok(Some(std::f64::NEG_INFINITY)),
                "NaN" => Ok(Some(std::f64::NAN)),
                _ => {
                    let lexical = text.chars().all(|c| {
                        c.is_ascii_digit() || "+-.eE".contains(c)
                    });
                    match text.parse::<f64>() {
                        Ok(value) if lexical => Ok(Some(value)),
                        _ => Err(mismatch()),
                    }
                }
            },
        }
    }
}

/// A restriction on the values a simple type admits.
#[derive(Clone, Debug, PartialEq)]
pub enum Facet {
    /// `value >= bound`
    MinInclusive(f64),
    /// `value <= bound`
    MaxInclusive(f64),
    /// `value > bound`
    MinExclusive(f64),
    /// `value < bound`
    MaxExclusive(f64),
    /// At least this many characters.
    MinLength(usize),
    /// At most this many characters.
    MaxLength(usize),
}

impl Facet {
    fn is_length(&self) -> bool {
        match self {
            Facet::MinLength(_) | Facet::MaxLength(_) => true,
            _ => false,
        }
    }

    fn check(&self, text: &str, value: Option<f64>) -> Result<(), String> {
        let chars = text.chars().count();
        let ok = match (self, value) {
            (Facet::MinInclusive(bound), Some(v)) => v >= *bound,
            (Facet::MaxInclusive(bound), Some(v)) => v <= *bound,
            (Facet::MinExclusive(bound), Some(v)) => v > *bound,
            (Facet::MaxExclusive(bound), Some(v)) => v < *bound,
            (Facet::MinLength(n), _) => chars >= *n,
            (Facet::MaxLength(n), _) => chars <= *n,
            (_, None) => true,
        };
        if ok {
            return Ok(());
        }
        Err(match self {
            Facet::MinInclusive(b) => format!("The value '{}' is less than {}.", text, b),
            Facet::MaxInclusive(b) => format!("The value '{}' is greater than {}.", text, b),
            Facet::MinExclusive(b) => format!("The value '{}' must be greater than {}.", text, b),
            Facet::MaxExclusive(b) => format!("The value '{}' must be less than {}.", text, b),
            Facet::MinLength(n) => {
                format!("The value '{}' is shorter than {} characters.", text, n)
            }
            Facet::MaxLength(n) => {
                format!("The value '{}' is longer than {} characters.", text, n)
            }
        })
    }
}

/// A built-in type, possibly narrowed by facets.
#[derive(Clone, Debug, PartialEq)]
pub struct SimpleType {
    /// The type being restricted.
    pub base: Builtin,
    /// The restrictions, all of which must hold.
    pub facets: Vec<Facet>,
}

impl SimpleType {
    fn check(&self, text: &str) -> Result<(), String> {
        // Every type but xs:string collapses surrounding whitespace.
        let text = if self.base == Builtin::String {
            text
        } else {
            text.trim()
        };
        let value = self.base.check(text)?;
        self.facets
            .iter()
            .map(|facet| facet.check(text, value))
            .collect()
    }
}

/// What an element may contain.
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    /// Text of a simple type, and no child elements.
    Simple(SimpleType),
    /// Child elements in exactly this order, and no text.
    Sequence(Vec<ElementDecl>),
}

/// One `xs:element` declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementDecl {
    /// The element's tag name.
    pub name: String,
    /// Whether `minOccurs="0"` was given.
    pub optional: bool,
    /// What the element holds.
    pub content: Content,
}

/// A compiled schema: the elements a document may have at its root.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    roots: Vec<ElementDecl>,
    warnings: Vec<String>,
}

/// The character content of a simple element: every text child joined
/// in document order, so comments and processing instructions between
/// them drop out.
pub fn element_text(node: Node) -> String {
    node.children()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

fn unsupported<S: Into<String>>(message: S) -> ConfigError {
    ConfigError::Schema(message.into())
}

fn is_xs(node: Node, local: &str) -> bool {
    node.is_element() && node.tag_name().namespace() == Some(XS) && node.tag_name().name() == local
}

/// The element children of a schema node, minus annotations.
fn xs_children<'a, 'input>(node: Node<'a, 'input>) -> Result<Vec<Node<'a, 'input>>, ConfigError> {
    let mut children = vec![];
    for child in node.children().filter(|n| n.is_element()) {
        if child.tag_name().namespace() != Some(XS) {
            return Err(unsupported(format!(
                "<{}> is not an XML Schema element",
                child.tag_name().name()
            )));
        }
        if child.tag_name().name() != "annotation" {
            children.push(child);
        }
    }
    Ok(children)
}

fn resolve_type<'a, 'input>(
    node: Node<'a, 'input>,
    qname: &'a str,
) -> Result<Builtin, ConfigError> {
    let (prefix, local) = match qname.find(':') {
        Some(index) => (Some(&qname[..index]), &qname[index + 1..]),
        None => (None, qname),
    };
    if node.lookup_namespace_uri(prefix) != Some(XS) {
        return Err(unsupported(format!("type '{}' is not a built-in XSD type", qname)));
    }
    Builtin::from_name(local)
        .ok_or_else(|| unsupported(format!("built-in type '{}' is not supported", qname)))
}

fn compile_facet(
    node: Node,
    element: &str,
    base: Builtin,
    warnings: &mut Vec<String>,
) -> Result<Option<Facet>, ConfigError> {
    let kind = node.tag_name().name();
    let value = node
        .attribute("value")
        .ok_or_else(|| unsupported(format!("facet xs:{} on '{}' has no value", kind, element)))?;
    let number = || {
        value
            .trim()
            .parse::<f64>()
            .map_err(|_| {
                unsupported(format!(
                    "facet xs:{} on '{}' needs a number, not '{}'",
                    kind, element, value
                ))
            })
    };
    let length = || {
        value
            .trim()
            .parse::<usize>()
            .map_err(|_| {
                unsupported(format!(
                    "facet xs:{} on '{}' needs a length, not '{}'",
                    kind, element, value
                ))
            })
    };
    let facet = match kind {
        "minInclusive" => Facet::MinInclusive(number()?),
        "maxInclusive" => Facet::MaxInclusive(number()?),
        "minExclusive" => Facet::MinExclusive(number()?),
        "maxExclusive" => Facet::MaxExclusive(number()?),
        "minLength" => Facet::MinLength(length()?),
        "maxLength" => Facet::MaxLength(length()?),
        "pattern" | "enumeration" | "length" | "whiteSpace" | "totalDigits" | "fractionDigits" => {
            warnings.push(format!("Facet xs:{} on element '{}' is not enforced.", kind, element));
            return Ok(None);
        }
        _ => return Err(unsupported(format!("xs:{} is not a facet", kind))),
    };
    if facet.is_length() == base.is_numeric() {
        return Err(unsupported(format!(
            "facet xs:{} on '{}' does not apply to {}",
            kind,
            element,
            base.name()
        )));
    }
    Ok(Some(facet))
}

fn compile_simple(
    node: Node,
    element: &str,
    warnings: &mut Vec<String>,
) -> Result<SimpleType, ConfigError> {
    let children = xs_children(node)?;
    let restriction = match children.as_slice() {
        [only] if is_xs(*only, "restriction") => *only,
        _ => {
            return Err(unsupported(format!(
                "the simple type of '{}' must be a single xs:restriction",
                element
            )))
        }
    };
    let base = restriction
        .attribute("base")
        .ok_or_else(|| unsupported(format!("the restriction on '{}' has no base", element)))?;
    let base = resolve_type(restriction, base)?;
    let mut facets = vec![];
    for facet in xs_children(restriction)? {
        if let Some(facet) = compile_facet(facet, element, base, warnings)? {
            facets.push(facet);
        }
    }
    Ok(SimpleType { base, facets })
}

fn compile_complex(
    node: Node,
    element: &str,
    warnings: &mut Vec<String>,
) -> Result<Vec<ElementDecl>, ConfigError> {
    let children = xs_children(node)?;
    let sequence = match children.as_slice() {
        [only] if is_xs(*only, "sequence") => *only,
        _ => {
            return Err(unsupported(format!(
                "the complex type of '{}' must be a single xs:sequence",
                element
            )))
        }
    };
    xs_children(sequence)?
        .into_iter()
        .map(|child| {
            if is_xs(child, "element") {
                compile_element(child, warnings)
            } else {
                Err(unsupported(format!(
                    "xs:{} inside the sequence of '{}' is not supported",
                    child.tag_name().name(),
                    element
                )))
            }
        })
        .collect()
}

fn compile_element(node: Node, warnings: &mut Vec<String>) -> Result<ElementDecl, ConfigError> {
    let name = node
        .attribute("name")
        .ok_or_else(|| unsupported("xs:element without a name"))?
        .to_string();
    let optional = match node.attribute("minOccurs") {
        None | Some("1") => false,
        Some("0") => true,
        Some(other) => return Err(unsupported(format!("minOccurs=\"{}\" on '{}'", other, name))),
    };
    match node.attribute("maxOccurs") {
        None | Some("1") => {}
        Some(other) => return Err(unsupported(format!("maxOccurs=\"{}\" on '{}'", other, name))),
    }

    let children = xs_children(node)?;
    let content = match (node.attribute("type"), children.as_slice()) {
        (Some(qname), []) => Content::Simple(SimpleType {
            base: resolve_type(node, qname)?,
            facets: vec![],
        }),
        (None, [only]) if is_xs(*only, "simpleType") => {
            Content::Simple(compile_simple(*only, &name, warnings)?)
        }
        (None, [only]) if is_xs(*only, "complexType") => {
            Content::Sequence(compile_complex(*only, &name, warnings)?)
        }
        _ => {
            return Err(unsupported(format!(
                "element '{}' needs either a built-in type or one inline type",
                name
            )))
        }
    };
    Ok(ElementDecl {
        name,
        optional,
        content,
    })
}

impl Schema {
    /// Compiles the schema in `doc`.
    pub fn compile(doc: &Document) -> Result<Schema, ConfigError> {
        let root = doc.root_element();
        if !is_xs(root, "schema") {
            return Err(unsupported("the document element must be xs:schema"));
        }
        if root.attribute("targetNamespace").is_some() {
            return Err(unsupported("schemas with a targetNamespace"));
        }
        let mut warnings = vec![];
        let mut roots = vec![];
        for child in xs_children(root)? {
            if !is_xs(child, "element") {
                return Err(unsupported(format!(
                    "top-level xs:{}",
                    child.tag_name().name()
                )));
            }
            roots.push(compile_element(child, &mut warnings)?);
        }
        if roots.is_empty() {
            return Err(unsupported("the schema declares no elements"));
        }
        Ok(Schema { roots, warnings })
    }

    /// Warnings raised while compiling.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Checks `doc` against the schema, reporting every problem found.
    pub fn validate(&self, doc: &Document) -> Report {
        let mut report = Report::default();
        let root = doc.root_element();
        match self.roots.iter().find(|decl| is_instance_of(root, decl)) {
            Some(decl) => decl.validate(root, &mut report),
            None => report.errors.push(format!(
                "The '{}' element is not declared.",
                root.tag_name().name()
            )),
        }
        report
    }
}

fn is_instance_of(node: Node, decl: &ElementDecl) -> bool {
    node.tag_name().namespace().is_none() && node.tag_name().name() == decl.name
}

impl ElementDecl {
    fn validate(&self, node: Node, report: &mut Report) {
        for attribute in node.attributes() {
            if attribute.namespace() != Some(XSI) {
                report.errors.push(format!(
                    "The '{}' attribute is not declared on '{}'.",
                    attribute.name(),
                    self.name
                ));
            }
        }
        match &self.content {
            Content::Simple(simple) => {
                if node.children().any(|n| n.is_element()) {
                    report.errors.push(format!(
                        "The element '{}' cannot contain child elements.",
                        self.name
                    ));
                    return;
                }
                let text = element_text(node);
                if let Err(message) = simple.check(&text) {
                    report
                        .errors
                        .push(format!("The '{}' element is invalid - {}", self.name, message));
                }
            }
            Content::Sequence(decls) => self.validate_sequence(decls, node, report),
        }
    }

    fn validate_sequence(&self, decls: &[ElementDecl], node: Node, report: &mut Report) {
        let has_text = node
            .children()
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .any(|t| !t.trim().is_empty());
        if has_text {
            report.errors.push(format!(
                "The element '{}' cannot contain text.",
                self.name
            ));
        }

        let mut found = node.children().filter(|n| n.is_element()).peekable();
        for decl in decls {
            match found.peek() {
                Some(child) if is_instance_of(*child, decl) => {
                    decl.validate(*child, report);
                    found.next();
                }
                _ if decl.optional => {}
                _ => report.errors.push(format!(
                    "The element '{}' is missing required child element '{}'.",
                    self.name, decl.name
                )),
            }
        }
        for child in found {
            let declared = decls.iter().any(|decl| is_instance_of(child, decl));
            report.errors.push(if declared {
                format!(
                    "The element '{}' has child element '{}' out of order or repeated.",
                    self.name,
                    child.tag_name().name()
                )
            } else {
                format!(
                    "The element '{}' has unexpected child element '{}'.",
                    self.name,
                    child.tag_name().name()
                )
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = include_str!("../config.xsd");

    fn compile(xsd: &str) -> Result<Schema, ConfigError> {
        Schema::compile(&Document::parse(xsd).unwrap())
    }

    fn validate(xml: &str) -> Report {
        compile(SCHEMA).unwrap().validate(&Document::parse(xml).unwrap())
    }

    fn wrap(body: &str) -> String {
        format!(
            "<xs:schema xmlns:xs=\"http://www.w3.org/2001/XMLSchema\">{}</xs:schema>",
            body
        )
    }

    const GOOD: &str = "<config>\
        <width>800</width><height>600</height>\
        <x_min>-2.0</x_min><x_max>1.0</x_max>\
        <y_min>-1.0</y_min><y_max>1.0</y_max>\
        <iteration>50</iteration><threshold>50</threshold>\
        <output_path>mandelbrot.png</output_path>\
        </config>";

    #[test]
    fn the_shipped_schema_compiles() {
        let schema = compile(SCHEMA).unwrap();
        assert!(schema.warnings().is_empty());
        assert_eq!(schema.roots.len(), 1);
        match &schema.roots[0].content {
            Content::Sequence(children) => assert_eq!(children.len(), 9),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn good_documents_validate() {
        let report = validate(GOOD);
        assert!(report.is_valid(), "{:?}", report);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn whitespace_around_numbers_is_collapsed() {
        let xml = GOOD.replace("<width>800</width>", "<width>\n  800\n</width>");
        assert!(validate(&xml).is_valid());
    }

    #[test]
    fn type_mismatches_are_errors() {
        let xml = GOOD.replace("<x_min>-2.0</x_min>", "<x_min>left</x_min>");
        let report = validate(&xml);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("x_min"));
        assert!(report.errors[0].contains("xs:double"));
    }

    #[test]
    fn integer_types_reject_fractions_and_signs() {
        let report = validate(&GOOD.replace("<width>800</width>", "<width>8.5</width>"));
        assert!(!report.is_valid());
        let report = validate(&GOOD.replace("<height>600</height>", "<height>0</height>"));
        assert!(report.errors[0].contains("out of range"));
        let threshold = |value: &str| {
            GOOD.replace("<threshold>50</threshold>", &format!("<threshold>{}</threshold>", value))
        };
        let report = validate(&threshold("-1"));
        assert!(!report.is_valid());
        let report = validate(&threshold("0"));
        assert!(report.is_valid());
    }

    #[test]
    fn missing_elements_are_errors() {
        let report = validate(&GOOD.replace("<iteration>50</iteration>", ""));
        assert_eq!(
            report.errors,
            vec!["The element 'config' is missing required child element 'iteration'.".to_string()]
        );
    }

    #[test]
    fn unexpected_and_reordered_elements_are_errors() {
        let report = validate(&GOOD.replace("</config>", "<colour>red</colour></config>"));
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("unexpected child element 'colour'"));

        let swapped = GOOD.replace(
            "<width>800</width><height>600</height>",
            "<height>600</height><width>800</width>",
        );
        let report = validate(&swapped);
        assert!(!report.is_valid());
        assert!(report.errors.iter().any(|e| e.contains("out of order")));
    }

    #[test]
    fn empty_output_path_violates_min_length() {
        let report = validate(&GOOD.replace(
            "<output_path>mandelbrot.png</output_path>",
            "<output_path/>",
        ));
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("output_path"));
    }

    #[test]
    fn wrong_roots_and_stray_content_are_errors() {
        assert!(!validate("<settings/>").is_valid());
        let report = validate(&GOOD.replace("<config>", "<config version=\"2\">"));
        assert!(report.errors[0].contains("attribute"));
        let report = validate(&GOOD.replace("</config>", "stray</config>"));
        assert!(report.errors[0].contains("cannot contain text"));
        let report = validate(&GOOD.replace("<width>800</width>", "<width><px>800</px></width>"));
        assert!(report.errors[0].contains("cannot contain child elements"));
    }

    #[test]
    fn schema_instance_attributes_are_allowed() {
        let xml = GOOD.replace(
            "<config>",
            "<config xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
             xsi:noNamespaceSchemaLocation=\"config.xsd\">",
        );
        assert!(validate(&xml).is_valid());
    }

    #[test]
    fn range_facets_are_enforced() {
        let schema = compile(&wrap(
            "<xs:element name=\"n\"><xs:simpleType>\
               <xs:restriction base=\"xs:double\">\
                 <xs:minInclusive value=\"-2\"/><xs:maxExclusive value=\"2\"/>\
               </xs:restriction>\
             </xs:simpleType></xs:element>",
        ))
        .unwrap();
        let check = |xml: &str| schema.validate(&Document::parse(xml).unwrap()).is_valid();
        assert!(check("<n>-2</n>"));
        assert!(check("<n>1.99</n>"));
        assert!(!check("<n>2</n>"));
        assert!(!check("<n>-2.5</n>"));
    }

    #[test]
    fn optional_elements_may_be_skipped() {
        let schema = compile(&wrap(
            "<xs:element name=\"r\"><xs:complexType><xs:sequence>\
               <xs:element name=\"a\" type=\"xs:int\" minOccurs=\"0\"/>\
               <xs:element name=\"b\" type=\"xs:boolean\"/>\
             </xs:sequence></xs:complexType></xs:element>",
        ))
        .unwrap();
        let check = |xml: &str| schema.validate(&Document::parse(xml).unwrap()).is_valid();
        assert!(check("<r><a>1</a><b>true</b></r>"));
        assert!(check("<r><b>0</b></r>"));
        assert!(!check("<r><b>yes</b></r>"));
        assert!(!check("<r><a>1</a></r>"));
    }

    #[test]
    fn unenforced_facets_compile_with_a_warning() {
        let schema = compile(&wrap(
            "<xs:element name=\"s\"><xs:simpleType>\
               <xs:restriction base=\"xs:string\"><xs:pattern value=\"[a-z]+\"/></xs:restriction>\
             </xs:simpleType></xs:element>",
        ))
        .unwrap();
        assert_eq!(schema.warnings().len(), 1);
        assert!(schema.warnings()[0].contains("xs:pattern"));
    }

    #[test]
    fn unsupported_constructs_are_refused() {
        assert!(compile("<schema/>").is_err());
        assert!(compile(&wrap("<xs:complexType name=\"t\"/>")).is_err());
        assert!(compile(&wrap("<xs:element name=\"e\" type=\"xs:dateTime\"/>")).is_err());
        assert!(compile(&wrap(
            "<xs:element name=\"e\" type=\"my:type\" xmlns:my=\"urn:x\"/>"
        ))
        .is_err());
        assert!(compile(&wrap(
            "<xs:element name=\"r\"><xs:complexType><xs:sequence>\
               <xs:element name=\"a\" type=\"xs:int\" maxOccurs=\"unbounded\"/>\
             </xs:sequence></xs:complexType></xs:element>"
        ))
        .is_err());
        assert!(compile(&wrap(
            "<xs:element name=\"s\"><xs:simpleType>\
               <xs:restriction base=\"xs:string\"><xs:minInclusive value=\"1\"/></xs:restriction>\
             </xs:simpleType></xs:element>"
        ))
        .is_err());
        assert!(compile(&wrap("")).is_err());
    }

    #[test]
    fn reports_render_like_the_command_line_expects() {
        let report = Report {
            warnings: vec!["w".to_string()],
            errors: vec!["e".to_string()],
        };
        assert_eq!(
            report.to_string(),
            "Validation Warning (w)\nValidation Error (e)\nValidation failed..."
        );
    }
}
