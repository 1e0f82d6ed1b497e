//! Debug text rendering of dynamic messages, in the same format as the
//! bound message types.

use discovery_core::{Message, TextFields, UnknownFields};
use prost_reflect::{DynamicMessage, ReflectMessage, Value};
use std::fmt;

/// Renders a [`DynamicMessage`] like the `Display` impl of bound types.
///
/// Set fields come first in field-number order, then unknown fields.
///
/// ```ignore
/// println!("{}", DynamicText(&message));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DynamicText<'a>(pub &'a DynamicMessage);

impl fmt::Display for DynamicText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.0;
        let descriptor = message.descriptor();
        let mut fields: Vec<_> = descriptor.fields().collect();
        fields.sort_by_key(|field| field.number());

        let mut text = TextFields::new();
        for field in fields.iter().filter(|field| message.has_field(field)) {
            render(&mut text, field.name(), &message.get_field(field));
        }

        let bytes = message.encode_to_vec();
        let unknown =
            UnknownFields::from_message_bytes(&bytes, |number| descriptor.get_field(number).is_some());
        if let Ok(unknown) = unknown {
            text.unknown(&unknown);
        }
        write!(f, "{text}")
    }
}

fn render(text: &mut TextFields, name: &str, value: &Value) {
    match value {
        Value::Bool(v) => text.scalar(name, v),
        Value::I32(v) | Value::EnumNumber(v) => text.scalar(name, v),
        Value::I64(v) => text.scalar(name, v),
        Value::U32(v) => text.scalar(name, v),
        Value::U64(v) => text.scalar(name, v),
        Value::F32(v) => text.scalar(name, v),
        Value::F64(v) => text.scalar(name, v),
        Value::String(v) => text.string(name, v),
        Value::Bytes(v) => text.bytes(name, v),
        Value::Message(v) => text.message(name, DynamicText(v)),
        Value::List(items) => {
            for item in items {
                render(text, name, item);
            }
            text
        }
        Value::Map(entries) => {
            let mut rendered: Vec<_> = entries
                .iter()
                .map(|(key, value)| {
                    let mut entry = TextFields::new();
                    entry.scalar("key", format!("{key:?}"));
                    render(&mut entry, "value", value);
                    entry.to_string()
                })
                .collect();
            rendered.sort();
            for entry in rendered {
                text.message(name, entry);
            }
            text
        }
    };
}
