//! Client-side companion for the password-reset flow.
//!
//! Wraps the two reset endpoints behind the [`ResetApi`] trait and models
//! the forgot-password dialog as an explicit state machine, so front ends
//! only have to render the current [`FlowStep`].

pub mod api;
pub mod error;
pub mod flow;
pub mod http;
pub mod input;

pub use api::ResetApi;
pub use error::{ClientError, Result};
pub use flow::{FlowStep, ForgotPasswordFlow};
pub use http::HttpResetApi;
pub use input::{CODE_LENGTH, CodeInput};
