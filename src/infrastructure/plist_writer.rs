use crate::application::services::PlistSerializer;
use crate::domain::errors::ProfileError;
use crate::domain::plist::{PlistDict, PlistValue};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

const PLIST_DOCTYPE: &str = r#"plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd""#;
const INDENT_SIZE: usize = 4;

/// Serializes property-list trees as Apple XML plists using quick-xml
///
/// All text goes through `BytesText::new`, which escapes markup characters.
pub struct XmlPlistSerializer;

impl PlistSerializer for XmlPlistSerializer {
    fn serialize(&self, document: &PlistValue) -> Result<String, ProfileError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);
        write_document(&mut writer, document)
            .map_err(|e| ProfileError::Render(e.to_string()))?;

        let mut bytes = writer.into_inner();
        bytes.push(b'\n');
        String::from_utf8(bytes).map_err(|e| ProfileError::Render(e.to_string()))
    }
}

fn write_document<W: Write>(writer: &mut Writer<W>, root: &PlistValue) -> quick_xml::Result<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::DocType(BytesText::from_escaped(PLIST_DOCTYPE)))?;
    writer.write_event(Event::Start(
        BytesStart::new("plist").with_attributes([("version", "1.0")]),
    ))?;
    write_value(writer, root)?;
    writer.write_event(Event::End(BytesEnd::new("plist")))
}

fn write_value<W: Write>(writer: &mut Writer<W>, value: &PlistValue) -> quick_xml::Result<()> {
    match value {
        PlistValue::String(text) => write_text_element(writer, "string", text),
        PlistValue::Integer(number) => write_text_element(writer, "integer", &number.to_string()),
        PlistValue::Boolean(flag) => {
            let tag = if *flag { "true" } else { "false" };
            writer.write_event(Event::Empty(BytesStart::new(tag)))
        }
        PlistValue::Array(items) => {
            writer.write_event(Event::Start(BytesStart::new("array")))?;
            for item in items {
                write_value(writer, item)?;
            }
            writer.write_event(Event::End(BytesEnd::new("array")))
        }
        PlistValue::Dict(dict) => write_dict(writer, dict),
    }
}

fn write_dict<W: Write>(writer: &mut Writer<W>, dict: &PlistDict) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("dict")))?;
    for (key, value) in dict.iter() {
        write_text_element(writer, "key", key)?;
        write_value(writer, value)?;
    }
    writer.write_event(Event::End(BytesEnd::new("dict")))
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))
}
