//! FormInterceptor - フォーム送信の横取り
//!
//! 送信は行わず、常にプレースホルダーの Notice を返します。

use async_trait::async_trait;
use tracing::info;

use super::actions::SubmitForm;
use crate::domain::errors::CarepageError;
use crate::domain::outcome::{Notice, Outcome};
use crate::typed::Handler;

pub const FORM_NOTICE: &str = "Form submission would be handled here in a real application.";

#[derive(Debug, Clone, Copy, Default)]
pub struct FormInterceptor;

impl FormInterceptor {
    pub fn submit(&self, form: &str) -> Notice {
        info!(form, "form submission intercepted");
        Notice::new(FORM_NOTICE)
    }
}

#[async_trait]
impl Handler<SubmitForm> for FormInterceptor {
    async fn handle(&self, action: SubmitForm) -> Result<Outcome, CarepageError> {
        Ok(Outcome::Notice(self.submit(&action.form)))
    }
}
