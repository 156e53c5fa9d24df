use serde::{Deserialize, Serialize};
use trilex_types::{LookupResult, TrilingualRecord};

const SIDE_TEMPLATE: &str = "<h1>{word}</h1><br></br>{part_of_speech}<br />{transcription}";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardTemplate {
    pub model: String,
    pub front_template: String,
    pub back_template: String,
    pub gloss_template: String,
}

impl CardTemplate {
    /// English front, French back, Russian gloss in the `three` field
    pub fn default_trilingual(model: String) -> Self {
        Self {
            model,
            front_template: SIDE_TEMPLATE.to_string(),
            back_template: SIDE_TEMPLATE.to_string(),
            gloss_template: "{translation}".to_string(),
        }
    }

    /// Create custom template
    pub fn new(model: String, front: String, back: String, gloss: String) -> Self {
        Self {
            model,
            front_template: front,
            back_template: back,
            gloss_template: gloss,
        }
    }

    /// Note fields for a record, in model field order
    pub fn fields(&self, record: &TrilingualRecord) -> Vec<NoteField> {
        vec![
            NoteField::new("Front", format_side(&self.front_template, &record.source)),
            NoteField::new("Back", format_side(&self.back_template, &record.target)),
            NoteField::new("three", format_side(&self.gloss_template, &record.gloss)),
        ]
    }
}

fn format_side(template: &str, side: &LookupResult) -> String {
    template
        .replace("{word}", &side.word)
        .replace("{part_of_speech}", &side.part_of_speech)
        .replace("{transcription}", &side.transcription)
        .replace("{translation}", &side.translation)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteField {
    pub name: String,
    pub value: String,
}

impl NoteField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
