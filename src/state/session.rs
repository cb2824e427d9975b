use crate::core::FieldKey;
use crate::core::intake::INTAKE;
use crate::core::schema::{Blueprint, FieldSpec};
use crate::core::value::Value;
use crate::error::WizardError;
use crate::notify::{NotificationKind, Notices, Notifier};
use crate::state::flow::Flow;
use crate::state::store::FormState;
use crate::state::validation::{step_issues, validate};
use crate::state::visibility::visible_fields;
use crate::submission::{self, SubmissionRecord};
use crate::transport::Transport;
use crate::view::{FieldEdit, FieldView, PrimaryAction, StepView};
use tracing::{debug, warn};

/// One user's pass through a wizard: the step cursor plus every answer.
///
/// Sessions own all of their state, so any number can run side by side.
#[derive(Debug, Clone)]
pub struct WizardSession {
    flow: Flow,
    form: FormState,
    notices: Notices,
}

impl WizardSession {
    /// # Panics
    /// When the blueprint table is inconsistent.
    pub fn new(blueprint: &'static Blueprint) -> Self {
        blueprint.assert_consistent();
        Self {
            flow: Flow::new(blueprint.step_count()),
            form: FormState::new(blueprint),
            notices: Notices::default(),
        }
    }

    pub fn intake() -> Self {
        Self::new(&INTAKE)
    }

    pub fn with_notices(mut self, notices: Notices) -> Self {
        self.notices = notices;
        self
    }

    pub fn blueprint(&self) -> &'static Blueprint {
        self.form.blueprint()
    }

    pub fn current_step(&self) -> usize {
        self.flow.current()
    }

    pub fn flow(&self) -> &Flow {
        &self.flow
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn update(&mut self, key: &str, value: impl Into<Value>) {
        self.form.update(key, value);
    }

    pub fn toggle_multi_select(&mut self, key: &str, option: &str, included: bool) {
        self.form.toggle_multi_select(key, option, included);
    }

    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Set { key, value } => self.update(key.as_str(), value),
            FieldEdit::Toggle {
                key,
                option,
                included,
            } => self.toggle_multi_select(key.as_str(), &option, included),
        }
    }

    /// Whether the current step is complete. Drives both the forward
    /// control's enabled state and [`WizardSession::advance`].
    pub fn can_advance(&self) -> bool {
        validate(self.flow.current(), &self.form)
    }

    pub fn missing_fields(&self) -> Vec<FieldKey> {
        step_issues(self.flow.current(), &self.form)
            .into_iter()
            .map(|issue| issue.field)
            .collect()
    }

    pub fn visible_fields(&self) -> Vec<&'static FieldSpec> {
        visible_fields(self.flow.current(), &self.form)
    }

    pub fn primary_action(&self) -> PrimaryAction {
        if self.flow.is_terminal() {
            PrimaryAction::Submit
        } else {
            PrimaryAction::Advance {
                enabled: self.can_advance(),
            }
        }
    }

    /// Moves one step forward when the current step validates.
    ///
    /// Returns `Ok(false)` on the last step, where there is nothing to
    /// advance to. An incomplete step notifies `notifier` and leaves the
    /// session unchanged.
    pub fn advance(&mut self, notifier: &mut dyn Notifier) -> Result<bool, WizardError> {
        let step = self.flow.current();
        if !self.can_advance() {
            let missing = self.missing_fields();
            warn!(step, ?missing, "advance rejected");
            let kind = NotificationKind::ValidationFailure;
            notifier.notify(kind, self.notices.get(kind));
            return Err(WizardError::IncompleteStep { step, missing });
        }

        let moved = self.flow.advance();
        if moved {
            debug!(from = step, to = self.flow.current(), "advanced");
        }
        Ok(moved)
    }

    /// Moves one step back; never validated. Returns `false` on step 1.
    pub fn retreat(&mut self) -> bool {
        let step = self.flow.current();
        let moved = self.flow.retreat();
        if moved {
            debug!(from = step, to = self.flow.current(), "retreated");
        }
        moved
    }

    /// Snapshots the answers and forwards them to `transport`.
    ///
    /// # Panics
    /// When called before the last step.
    pub fn submit(
        &self,
        transport: &mut dyn Transport,
        notifier: &mut dyn Notifier,
    ) -> Result<SubmissionRecord, WizardError> {
        assert!(
            self.flow.is_terminal(),
            "submit called on step {} of {}",
            self.flow.current(),
            self.flow.total()
        );
        submission::submit(&self.form, transport, notifier, &self.notices)
    }

    pub fn view(&self) -> StepView<'_> {
        let step = self.flow.current();
        let spec = self.blueprint().step(step);
        let fields = self
            .visible_fields()
            .into_iter()
            .filter_map(|field| {
                let value = self.form.get(field.key.as_str())?;
                Some(FieldView { spec: field, value })
            })
            .collect();

        StepView {
            step,
            total: self.flow.total(),
            percent: self.flow.percent(),
            title: spec.map(|s| s.title).unwrap_or_default(),
            description: spec.and_then(|s| s.description),
            fields,
            primary: self.primary_action(),
            can_retreat: self.flow.has_prev(),
        }
    }
}
