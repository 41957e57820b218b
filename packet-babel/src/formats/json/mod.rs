//! JSON serialization (Packet -> JSON document)
//!
//! Each styled field is emitted twice: once with nested style markup and
//! once sanitized to plain text, so consumers can pick whichever rendering
//! they need without re-parsing. The `bonuses` key is present only when the
//! packet actually had a bonus section.

use packet_parser::packet::ast::{Bonus, BonusPart, Packet, Question, Tossup};
use serde_json::{json, Map, Value};

use crate::error::FormatError;
use crate::format::Compiler;

pub struct JsonCompiler;

impl Compiler for JsonCompiler {
    fn name(&self) -> &str {
        "json"
    }

    fn compile(&self, packet: &Packet) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&packet_to_value(packet))
            .map_err(|e| FormatError::Serialization(e.to_string()))
    }
}

/// Build the JSON document for a packet.
pub fn packet_to_value(packet: &Packet) -> Value {
    let mut root = Map::new();
    root.insert(
        "tossups".to_string(),
        Value::Array(packet.tossups.iter().map(tossup_to_value).collect()),
    );
    if let Some(bonuses) = &packet.bonuses {
        root.insert(
            "bonuses".to_string(),
            Value::Array(bonuses.iter().map(bonus_to_value).collect()),
        );
    }
    Value::Object(root)
}

fn tossup_to_value(tossup: &Tossup) -> Value {
    let mut value = question_fields(&tossup.question);
    value.insert("number".to_string(), json!(tossup.number));
    Value::Object(value)
}

fn bonus_to_value(bonus: &Bonus) -> Value {
    json!({
        "number": bonus.number,
        "leadin": bonus.leadin.to_markup(),
        "leadin_sanitized": bonus.leadin.plain_text(),
        "parts": bonus.parts.iter().map(part_to_value).collect::<Vec<_>>(),
    })
}

fn part_to_value(part: &BonusPart) -> Value {
    let mut value = question_fields(&part.question);
    value.insert("value".to_string(), json!(part.value));
    if let Some(difficulty) = part.difficulty {
        value.insert("difficulty".to_string(), json!(difficulty.to_string()));
    }
    Value::Object(value)
}

fn question_fields(question: &Question) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("question".to_string(), json!(question.prompt.to_markup()));
    fields.insert(
        "question_sanitized".to_string(),
        json!(question.prompt.plain_text()),
    );
    fields.insert("answer".to_string(), json!(question.answer.to_markup()));
    fields.insert(
        "answer_sanitized".to_string(),
        json!(question.answer.plain_text()),
    );
    fields
}
