use serde::Serialize;

pub const SUBMITTED_RESET_DELAY_MS: u32 = 4_000;
pub const RELAY_DEADLINE_MS: u32 = 12_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_clear(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

pub fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    !host.is_empty() && !tld.is_empty()
}

pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if fields.name.trim().is_empty() {
        errors.name = Some("Name is required");
    }

    let email = fields.email.trim();
    if email.is_empty() {
        errors.email = Some("Email is required");
    } else if !is_valid_email(email) {
        errors.email = Some("Enter a valid email address");
    }

    if fields.message.trim().is_empty() {
        errors.message = Some("Message is required");
    }

    errors
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Submitted,
    Failed,
}

#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
pub struct RelayMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl RelayMessage {
    fn from_fields(fields: &ContactFields) -> Self {
        Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            message: fields.message.clone(),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SubmitOutcome {
    Busy,
    Rejected,
    Dispatch(RelayMessage),
}

#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct ContactFormState {
    pub fields: ContactFields,
    pub errors: FieldErrors,
    pub status: SubmissionStatus,
}

impl ContactFormState {
    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Name => {
                self.fields.name = value;
                self.errors.name = None;
            }
            Field::Email => {
                self.fields.email = value;
                self.errors.email = None;
            }
            Field::Message => {
                self.fields.message = value;
                self.errors.message = None;
            }
        }
    }

    // The only mutual exclusion in the app: while a submission is in
    // flight, further submits are rejected without side effects.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.status == SubmissionStatus::Sending {
            return SubmitOutcome::Busy;
        }

        let errors = validate(&self.fields);
        if !errors.is_clear() {
            self.errors = errors;
            return SubmitOutcome::Rejected;
        }

        self.errors = FieldErrors::default();
        self.status = SubmissionStatus::Sending;
        SubmitOutcome::Dispatch(RelayMessage::from_fields(&self.fields))
    }

    pub fn complete(&mut self, delivered: bool) {
        if self.status != SubmissionStatus::Sending {
            return;
        }

        if delivered {
            self.status = SubmissionStatus::Submitted;
            self.fields = ContactFields::default();
            self.errors = FieldErrors::default();
        } else {
            self.status = SubmissionStatus::Failed;
        }
    }

    pub fn acknowledge(&mut self) {
        if self.status == SubmissionStatus::Submitted {
            self.status = SubmissionStatus::Idle;
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RelayConfig {
    pub endpoint: &'static str,
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

#[derive(Serialize, Debug)]
pub struct RelayEnvelope<'a> {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub user_id: &'static str,
    pub template_params: &'a RelayMessage,
}

impl RelayConfig {
    pub fn envelope<'a>(&self, message: &'a RelayMessage) -> RelayEnvelope<'a> {
        RelayEnvelope {
            service_id: self.service_id,
            template_id: self.template_id,
            user_id: self.public_key,
            template_params: message,
        }
    }
}

pub fn chat_link(handle: &str) -> String {
    let digits: String = handle.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{digits}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_fields() -> ContactFields {
        ContactFields {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    fn filled_form() -> ContactFormState {
        ContactFormState {
            fields: filled_fields(),
            ..ContactFormState::default()
        }
    }

    #[test]
    fn email_pattern_accepts_and_rejects() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.io"));

        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane@example."));
        assert!(!is_valid_email("jane@.com"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("jane@@example.com"));
    }

    #[test]
    fn empty_fields_are_rejected_without_dispatch() {
        for blank in [Field::Name, Field::Email, Field::Message] {
            let mut form = filled_form();
            form.edit(blank, "   ".to_string());

            assert_eq!(form.submit(), SubmitOutcome::Rejected);
            assert_eq!(form.status, SubmissionStatus::Idle);
            assert!(!form.errors.is_clear());
        }
    }

    #[test]
    fn invalid_email_is_rejected_without_dispatch() {
        let mut form = filled_form();
        form.edit(Field::Email, "not-an-email".to_string());

        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert_eq!(form.errors.email, Some("Enter a valid email address"));
        assert_eq!(form.status, SubmissionStatus::Idle);
    }

    #[test]
    fn valid_submit_dispatches_the_exact_entered_values() {
        let mut form = filled_form();

        let outcome = form.submit();
        assert_eq!(form.status, SubmissionStatus::Sending);
        assert_eq!(
            outcome,
            SubmitOutcome::Dispatch(RelayMessage {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                message: "Hello".to_string(),
            })
        );
    }

    #[test]
    fn submit_while_sending_is_a_no_op() {
        let mut form = filled_form();
        assert!(matches!(form.submit(), SubmitOutcome::Dispatch(_)));

        assert_eq!(form.submit(), SubmitOutcome::Busy);
        assert_eq!(form.status, SubmissionStatus::Sending);
        assert_eq!(form.fields, filled_fields());
    }

    #[test]
    fn success_cycle_clears_fields_and_returns_to_idle() {
        let mut form = filled_form();
        form.submit();
        assert_eq!(form.status, SubmissionStatus::Sending);

        form.complete(true);
        assert_eq!(form.status, SubmissionStatus::Submitted);
        assert_eq!(form.fields, ContactFields::default());
        assert!(form.errors.is_clear());

        form.acknowledge();
        assert_eq!(form.status, SubmissionStatus::Idle);
    }

    #[test]
    fn failure_cycle_preserves_the_entered_values() {
        let mut form = filled_form();
        form.submit();

        form.complete(false);
        assert_eq!(form.status, SubmissionStatus::Failed);
        assert_eq!(form.fields, filled_fields());
    }

    #[test]
    fn failed_form_can_be_resubmitted_without_retyping() {
        let mut form = filled_form();
        form.submit();
        form.complete(false);

        let outcome = form.submit();
        assert!(matches!(outcome, SubmitOutcome::Dispatch(_)));
        assert_eq!(form.status, SubmissionStatus::Sending);
    }

    #[test]
    fn completion_is_ignored_outside_the_sending_status() {
        let mut form = filled_form();
        form.complete(true);
        assert_eq!(form.status, SubmissionStatus::Idle);
        assert_eq!(form.fields, filled_fields());

        form.acknowledge();
        assert_eq!(form.status, SubmissionStatus::Idle);
    }

    #[test]
    fn editing_clears_only_that_field_error() {
        let mut form = ContactFormState::default();
        form.submit();
        assert!(form.errors.name.is_some());
        assert!(form.errors.email.is_some());

        form.edit(Field::Name, "Jane".to_string());
        assert!(form.errors.name.is_none());
        assert!(form.errors.email.is_some());
    }

    #[test]
    fn envelope_carries_the_relay_wire_shape() {
        let config = RelayConfig {
            endpoint: "https://relay.example/api/v1.0/email/send",
            service_id: "service_x1",
            template_id: "template_y2",
            public_key: "public_z3",
        };
        let message = RelayMessage {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello".to_string(),
        };

        let encoded =
            serde_json::to_value(config.envelope(&message)).expect("envelope serializes");
        assert_eq!(encoded["service_id"], "service_x1");
        assert_eq!(encoded["template_id"], "template_y2");
        assert_eq!(encoded["user_id"], "public_z3");
        assert_eq!(encoded["template_params"]["name"], "Jane Doe");
        assert_eq!(encoded["template_params"]["email"], "jane@example.com");
        assert_eq!(encoded["template_params"]["message"], "Hello");
    }

    #[test]
    fn chat_link_keeps_digits_only() {
        assert_eq!(
            chat_link("+880 1712-345678"),
            "https://wa.me/8801712345678"
        );
        assert_eq!(chat_link("8801712345678"), "https://wa.me/8801712345678");
    }
}
