use super::TerminalFrontend;
use super::style;
use crate::core::schema::{FieldSpec, SemanticType};
use crate::core::value::Value;
use crate::view::{FieldEdit, FieldRenderer, FieldView};
use std::io::{self, BufRead, Write};

/// Clears the current answer.
const CLEAR: &str = "-";

/// Result of prompting for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted {
    Keep,
    Edits(Vec<FieldEdit>),
    /// Input closed.
    Eof,
}

impl<R: BufRead, W: Write> FieldRenderer for TerminalFrontend<R, W> {
    type Output = io::Result<Prompted>;

    fn render_field(&mut self, field: &FieldView<'_>) -> io::Result<Prompted> {
        let spec = field.spec;
        let marker = if spec.required { " *" } else { "" };
        style::plain(&mut self.output, "")?;
        style::plain(&mut self.output, &format!("{}{marker}", spec.label))?;

        match spec.semantic {
            SemanticType::Enum => self.prompt_choice(spec, field.value),
            SemanticType::MultiSelect => self.prompt_multi(spec, field.value),
            SemanticType::Boolean => self.prompt_bool(spec, field.value),
            _ => self.prompt_text(spec, field.value),
        }
    }
}

impl<R: BufRead, W: Write> TerminalFrontend<R, W> {
    fn prompt_text(&mut self, spec: &FieldSpec, value: &Value) -> io::Result<Prompted> {
        let current = value.as_text().unwrap_or_default();
        if current.is_empty() {
            if let Some(placeholder) = spec.placeholder {
                style::dim(&mut self.output, placeholder)?;
            }
        }

        loop {
            style::prompt(&mut self.output, &format!("[{current}] >"))?;
            let Some(line) = self.read_line()? else {
                return Ok(Prompted::Eof);
            };
            if line.trim().is_empty() {
                return Ok(Prompted::Keep);
            }
            if line.trim() == CLEAR {
                return Ok(set(spec, Value::text("")));
            }
            if let Some(max) = spec.max_len {
                if line.chars().count() > max {
                    style::warning(&mut self.output, &format!("Maximal {max} Zeichen."))?;
                    continue;
                }
            }
            return Ok(set(spec, Value::Text(line)));
        }
    }

    fn prompt_choice(&mut self, spec: &FieldSpec, value: &Value) -> io::Result<Prompted> {
        let current = value.as_text().unwrap_or_default();
        for (index, choice) in spec.options.iter().enumerate() {
            let mark = if choice.value == current { "(x)" } else { "( )" };
            style::plain(&mut self.output, &format!("  {mark} {}) {}", index + 1, choice.label))?;
        }

        loop {
            style::prompt(&mut self.output, "Nummer >")?;
            let Some(line) = self.read_line()? else {
                return Ok(Prompted::Eof);
            };
            let input = line.trim();
            if input.is_empty() {
                return Ok(Prompted::Keep);
            }
            if input == CLEAR {
                return Ok(set(spec, Value::text("")));
            }
            match parse_option(input, spec.options.len()) {
                Some(index) => return Ok(set(spec, Value::text(spec.options[index].value))),
                None => self.invalid_option(spec.options.len())?,
            }
        }
    }

    fn prompt_multi(&mut self, spec: &FieldSpec, value: &Value) -> io::Result<Prompted> {
        let selected = value.as_list().unwrap_or_default();
        for (index, choice) in spec.options.iter().enumerate() {
            let checked = selected.iter().any(|entry| entry == choice.value);
            let mark = if checked { "[x]" } else { "[ ]" };
            style::plain(&mut self.output, &format!("  {mark} {}) {}", index + 1, choice.label))?;
        }
        style::dim(&mut self.output, "Nummern durch Komma getrennt umschalten")?;

        'read: loop {
            style::prompt(&mut self.output, "Nummern >")?;
            let Some(line) = self.read_line()? else {
                return Ok(Prompted::Eof);
            };
            if line.trim().is_empty() {
                return Ok(Prompted::Keep);
            }

            let mut edits = Vec::new();
            for part in line.split(',').map(str::trim).filter(|part| !part.is_empty()) {
                let Some(index) = parse_option(part, spec.options.len()) else {
                    self.invalid_option(spec.options.len())?;
                    continue 'read;
                };
                let option = spec.options[index].value;
                let checked = selected.iter().any(|entry| entry == option);
                edits.push(FieldEdit::Toggle {
                    key: spec.key,
                    option: option.to_string(),
                    included: !checked,
                });
            }
            return Ok(Prompted::Edits(edits));
        }
    }

    fn prompt_bool(&mut self, spec: &FieldSpec, value: &Value) -> io::Result<Prompted> {
        let current = match value.as_bool() {
            Some(true) => "j",
            Some(false) => "n",
            None => "",
        };

        loop {
            style::prompt(&mut self.output, &format!("[{current}] j/n >"))?;
            let Some(line) = self.read_line()? else {
                return Ok(Prompted::Eof);
            };
            match line.trim().to_lowercase().as_str() {
                "" => return Ok(Prompted::Keep),
                CLEAR => return Ok(set(spec, Value::None)),
                "j" | "ja" | "y" | "yes" => return Ok(set(spec, Value::Bool(true))),
                "n" | "nein" | "no" => return Ok(set(spec, Value::Bool(false))),
                _ => style::warning(&mut self.output, "Bitte j oder n eingeben.")?,
            }
        }
    }

    fn invalid_option(&mut self, count: usize) -> io::Result<()> {
        style::warning(
            &mut self.output,
            &format!("Bitte eine Zahl von 1 bis {count} eingeben."),
        )
    }
}

fn set(spec: &FieldSpec, value: Value) -> Prompted {
    Prompted::Edits(vec![FieldEdit::Set {
        key: spec.key,
        value,
    }])
}

fn parse_option(input: &str, count: usize) -> Option<usize> {
    let number: usize = input.parse().ok()?;
    (1..=count).contains(&number).then(|| number - 1)
}
