use super::prompt::Prompted;
use super::{Outcome, TerminalFrontend, style};
use crate::core::FieldKey;
use crate::core::schema::Blueprint;
use crate::error::WizardError;
use crate::notify::{MemoryNotifier, NotificationKind, Notifier};
use crate::state::flow::StepStatus;
use crate::state::session::WizardSession;
use crate::transport::Transport;
use crate::view::{FieldRenderer, PrimaryAction, StepView};
use std::io::{self, BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Next,
    Back,
    Submit,
    Edit,
    Quit,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "n" | "next" | "weiter" => Some(Self::Next),
            "b" | "back" | "zurück" => Some(Self::Back),
            "s" | "submit" | "absenden" => Some(Self::Submit),
            "e" | "edit" => Some(Self::Edit),
            "q" | "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

impl<R: BufRead, W: Write> TerminalFrontend<R, W> {
    /// Drives `session` until it is submitted or abandoned.
    ///
    /// Notifications raised during an action are printed after it and
    /// forwarded to `notifier`.
    pub fn run(
        &mut self,
        session: &mut WizardSession,
        transport: &mut dyn Transport,
        notifier: &mut dyn Notifier,
    ) -> io::Result<Outcome> {
        let mut pending = MemoryNotifier::new();
        style::heading(&mut self.output, session.blueprint().title)?;

        let mut redraw = true;
        loop {
            if redraw {
                self.draw_step(session)?;
                if !self.edit_step(session)? {
                    return self.abandon();
                }
                redraw = false;
            }

            let Some(command) = self.read_command(&session.view())? else {
                return self.abandon();
            };
            debug!(?command, step = session.current_step(), "terminal command");

            match command {
                Command::Next => match session.advance(&mut pending) {
                    Ok(true) => redraw = true,
                    Ok(false) => {
                        style::warning(&mut self.output, "Letzter Schritt: mit [s] absenden.")?
                    }
                    Err(err) => self.report(session.blueprint(), &err)?,
                },
                Command::Back => {
                    if session.retreat() {
                        redraw = true;
                    } else {
                        style::warning(&mut self.output, "Sie sind bereits im ersten Schritt.")?;
                    }
                }
                Command::Submit => {
                    if session.primary_action() != PrimaryAction::Submit {
                        style::warning(
                            &mut self.output,
                            "Absenden ist erst im letzten Schritt möglich.",
                        )?;
                    } else {
                        match session.submit(transport, &mut pending) {
                            Ok(record) => {
                                self.flush_notices(&mut pending, notifier)?;
                                return Ok(Outcome::Submitted(record));
                            }
                            Err(err) => self.report(session.blueprint(), &err)?,
                        }
                    }
                }
                Command::Edit => redraw = true,
                Command::Quit => return self.abandon(),
            }

            self.flush_notices(&mut pending, notifier)?;
        }
    }

    fn abandon(&mut self) -> io::Result<Outcome> {
        style::dim(&mut self.output, "Abgebrochen.")?;
        self.output.flush()?;
        Ok(Outcome::Abandoned)
    }

    fn draw_step(&mut self, session: &WizardSession) -> io::Result<()> {
        let view = session.view();
        let track: String = (1..=view.total)
            .map(|step| match session.flow().status_at(step) {
                StepStatus::Done => '●',
                StepStatus::Active => '◉',
                StepStatus::Pending => '○',
            })
            .collect();

        style::heading(&mut self.output, view.title)?;
        style::dim(
            &mut self.output,
            &format!("{}  {track}  {}%", view.counter_label(), view.percent),
        )?;
        if let Some(description) = view.description {
            style::plain(&mut self.output, description)?;
        }
        Ok(())
    }

    /// Prompts every visible field once. Visibility is re-evaluated after
    /// each answer so a revealed field is asked in the same pass.
    fn edit_step(&mut self, session: &mut WizardSession) -> io::Result<bool> {
        let mut index = 0;
        loop {
            let prompted = {
                let view = session.view();
                let Some(field) = view.fields.get(index).copied() else {
                    return Ok(true);
                };
                self.render_field(&field)?
            };

            match prompted {
                Prompted::Eof => return Ok(false),
                Prompted::Keep => {}
                Prompted::Edits(edits) => {
                    for edit in edits {
                        session.apply(edit);
                    }
                }
            }
            index += 1;
        }
    }

    fn read_command(&mut self, view: &StepView<'_>) -> io::Result<Option<Command>> {
        let mut options = Vec::new();
        if view.can_retreat {
            options.push("[b] zurück");
        }
        match view.primary {
            PrimaryAction::Advance { enabled: true } => options.push("[n] weiter"),
            PrimaryAction::Advance { enabled: false } => options.push("[n] weiter (unvollständig)"),
            PrimaryAction::Submit => options.push("[s] absenden"),
        }
        options.extend(["[e] bearbeiten", "[q] abbrechen"]);

        style::plain(&mut self.output, "")?;
        style::dim(&mut self.output, &options.join("  "))?;
        loop {
            style::prompt(&mut self.output, ">")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match Command::parse(&line) {
                Some(command) => return Ok(Some(command)),
                None => style::warning(&mut self.output, "Unbekannter Befehl.")?,
            }
        }
    }

    fn report(&mut self, blueprint: &Blueprint, err: &WizardError) -> io::Result<()> {
        match err {
            WizardError::IncompleteStep { missing, .. } => {
                let labels = labels(blueprint, missing);
                style::warning(&mut self.output, &format!("Fehlende Pflichtfelder: {labels}"))
            }
            WizardError::Delivery(source) => {
                style::error(&mut self.output, &format!("{err}: {source}"))
            }
        }
    }

    fn flush_notices(
        &mut self,
        pending: &mut MemoryNotifier,
        notifier: &mut dyn Notifier,
    ) -> io::Result<()> {
        for (kind, notice) in pending.drain() {
            let text = format!("{}: {}", notice.title, notice.description);
            match kind {
                NotificationKind::SubmissionSuccess => style::success(&mut self.output, &text)?,
                NotificationKind::ValidationFailure => style::warning(&mut self.output, &text)?,
                NotificationKind::DeliveryFailure => style::error(&mut self.output, &text)?,
            }
            notifier.notify(kind, &notice);
        }
        self.output.flush()
    }
}

fn labels(blueprint: &Blueprint, keys: &[FieldKey]) -> String {
    keys.iter()
        .map(|key| {
            blueprint
                .field(key.as_str())
                .map_or(key.as_str(), |field| field.label)
        })
        .collect::<Vec<_>>()
        .join(", ")
}
