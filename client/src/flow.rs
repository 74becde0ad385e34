use crate::api::ResetApi;
use crate::input::CodeInput;

/// Where the forgot-password dialog currently stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowStep {
    Closed,
    /// Step one, collecting the account email.
    AwaitingEmail,
    /// Step two, collecting the code issued for `email`.
    AwaitingCode { email: String },
}

/// Drives the two-step reset dialog against a [`ResetApi`].
///
/// A failed submission never regresses a step; the error is kept as a
/// transient message and the user retries where they are. Cancelling
/// closes the dialog and drops all typed input without touching the
/// backend.
pub struct ForgotPasswordFlow<A> {
    api: A,
    step: FlowStep,
    email: String,
    code: CodeInput,
    new_password: String,
    message: Option<String>,
}

impl<A: ResetApi> ForgotPasswordFlow<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            step: FlowStep::Closed,
            email: String::new(),
            code: CodeInput::new(),
            new_password: String::new(),
            message: None,
        }
    }

    pub fn step(&self) -> &FlowStep {
        &self.step
    }

    /// Failure message for the current step, if the last submission failed.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn code(&self) -> &CodeInput {
        &self.code
    }

    pub fn open(&mut self) {
        self.reset_input();
        self.step = FlowStep::AwaitingEmail;
    }

    pub fn cancel(&mut self) {
        self.reset_input();
        self.step = FlowStep::Closed;
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_new_password(&mut self, password: impl Into<String>) {
        self.new_password = password.into();
    }

    pub fn type_digit(&mut self, digit: char) {
        self.code.type_digit(digit);
    }

    pub fn backspace(&mut self) {
        self.code.backspace();
    }

    /// Requests a code for the typed address. Success advances to code
    /// entry, carrying the email forward; failure stays on the email step.
    pub async fn submit_email(&mut self) {
        if self.step != FlowStep::AwaitingEmail {
            return;
        }
        self.message = None;
        match self.api.send_otp(&self.email).await {
            Ok(_) => {
                self.step = FlowStep::AwaitingCode {
                    email: self.email.clone(),
                };
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Submits the typed code, along with the replacement password when one
    /// was entered. Success closes the dialog and clears every buffer.
    pub async fn submit_code(&mut self) {
        let FlowStep::AwaitingCode { email } = &self.step else {
            return;
        };
        self.message = None;
        let new_password = (!self.new_password.is_empty()).then_some(self.new_password.as_str());
        match self
            .api
            .verify_otp(email, &self.code.code(), new_password)
            .await
        {
            Ok(_) => {
                self.reset_input();
                self.step = FlowStep::Closed;
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn reset_input(&mut self) {
        self.email.clear();
        self.code.clear();
        self.new_password.clear();
        self.message = None;
    }
}
