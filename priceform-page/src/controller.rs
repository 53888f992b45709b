//! The form field controller: visibility, default rates, and submit
//! validation for the currency conversion inputs.

use tracing::debug;

use priceform_core::models::{Currency, InputMode, is_base_selection};
use priceform_core::rates::default_rate;
use priceform_core::validation::{ValueField, check_submit};

use crate::page::{ContainerResolver, ControlRole, FormPage};

/// Change events the host binding forwards from the two selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    CurrencyChanged,
    ModeChanged,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The host lets the browser's normal submission run.
    Proceed,
    /// The host cancels the submission; the page has already been told to
    /// alert and refocus.
    Blocked(priceform_core::SubmitBlock),
}

/// Controller over the four conversion controls of a price form.
///
/// Constructed once per page via [`PriceFormController::attach`]; after
/// that the host forwards selector changes to [`handle_event`] and the
/// form's submit to [`handle_submit`].
///
/// [`handle_event`]: PriceFormController::handle_event
/// [`handle_submit`]: PriceFormController::handle_submit
#[derive(Debug, Clone)]
pub struct PriceFormController {
    resolver: ContainerResolver,
    validate_on_submit: bool,
}

impl PriceFormController {
    /// Attaches to a page using the standard container fallback chain.
    ///
    /// Returns `None` when any of the four controls is missing; the page is
    /// then left untouched and no listeners should be installed. Otherwise
    /// runs the initial visibility/defaults pass, so a form re-rendered
    /// with a saved selection (edit or validation-error redisplay) starts
    /// in the correct state.
    pub fn attach<P: FormPage>(page: &mut P) -> Option<Self> {
        Self::attach_with_resolver(page, ContainerResolver::default())
    }

    pub fn attach_with_resolver<P: FormPage>(
        page: &mut P,
        resolver: ContainerResolver,
    ) -> Option<Self> {
        for role in ControlRole::ALL {
            if !page.has_control(role) {
                debug!(?role, "control not found; leaving form unenhanced");
                return None;
            }
        }

        let validate_on_submit = page.has_enclosing_form(ControlRole::CurrencySelector);
        if !validate_on_submit {
            debug!("currency selector has no enclosing form; submit validation disabled");
        }

        let controller = Self {
            resolver,
            validate_on_submit,
        };
        controller.refresh(page);
        Some(controller)
    }

    /// Handles a change on either selector.
    pub fn handle_event<P: FormPage>(
        &self,
        page: &mut P,
        event: FormEvent,
    ) {
        debug!(?event, "selector changed");
        self.refresh(page);
    }

    // Visibility first, then defaults: a freshly shown empty rate field
    // picks up its default in the same pass.
    fn refresh<P: FormPage>(
        &self,
        page: &mut P,
    ) {
        self.update_field_visibility(page);
        self.set_default_values(page);
    }

    /// Shows and hides the conversion controls to match the current
    /// currency and mode selection, clearing the value of the field the
    /// mode deactivates.
    pub fn update_field_visibility<P: FormPage>(
        &self,
        page: &mut P,
    ) {
        let selection = page.value(ControlRole::CurrencySelector);

        if is_base_selection(&selection) {
            // Hidden but not cleared: the values come back if the user
            // returns to a foreign currency.
            self.set_visible(page, ControlRole::ModeSelector, false);
            self.set_visible(page, ControlRole::ConversionRateField, false);
            self.set_visible(page, ControlRole::NokPriceField, false);
            return;
        }

        self.set_visible(page, ControlRole::ModeSelector, true);

        let mode_value = page.value(ControlRole::ModeSelector);
        match InputMode::parse(&mode_value) {
            Some(InputMode::ConversionRate) => {
                self.set_visible(page, ControlRole::ConversionRateField, true);
                self.set_visible(page, ControlRole::NokPriceField, false);
                page.set_value(ControlRole::NokPriceField, "");
            }
            Some(InputMode::NokPrice) => {
                self.set_visible(page, ControlRole::NokPriceField, true);
                self.set_visible(page, ControlRole::ConversionRateField, false);
                page.set_value(ControlRole::ConversionRateField, "");
            }
            None => {
                // Unknown mode code: neither dependent field is shown,
                // hidden, nor cleared, and submit validation skips them.
                tracing::warn!(mode = %mode_value, "unrecognized input mode; conversion fields untouched");
            }
        }
    }

    /// Pre-fills the conversion-rate field with the configured default for
    /// the selected currency. Only acts in conversion-rate mode and only
    /// when the field is empty; an existing value is never overwritten.
    pub fn set_default_values<P: FormPage>(
        &self,
        page: &mut P,
    ) {
        if InputMode::parse(&page.value(ControlRole::ModeSelector)) != Some(InputMode::ConversionRate)
        {
            return;
        }
        if !page.value(ControlRole::ConversionRateField).is_empty() {
            return;
        }

        let selection = page.value(ControlRole::CurrencySelector);
        let Some(currency) = Currency::parse(&selection) else {
            return;
        };
        if let Some(rate) = default_rate(currency) {
            debug!(currency = currency.as_code(), %rate, "pre-filling default conversion rate");
            page.set_value(ControlRole::ConversionRateField, &rate.to_string());
        }
    }

    /// Validates the active value field on submit.
    ///
    /// On rejection the page is told to alert and to focus the offending
    /// field, and the host must cancel the submission. Always proceeds when
    /// the selector had no enclosing form at attach time.
    pub fn handle_submit<P: FormPage>(
        &self,
        page: &mut P,
    ) -> SubmitOutcome {
        if !self.validate_on_submit {
            return SubmitOutcome::Proceed;
        }

        let selection = page.value(ControlRole::CurrencySelector);
        let mode = InputMode::parse(&page.value(ControlRole::ModeSelector));
        let rate_text = page.value(ControlRole::ConversionRateField);
        let nok_text = page.value(ControlRole::NokPriceField);

        match check_submit(&selection, mode, &rate_text, &nok_text) {
            Ok(()) => SubmitOutcome::Proceed,
            Err(block) => {
                debug!(message = block.message, "submission blocked");
                page.alert(block.message);
                page.focus(match block.field {
                    ValueField::ConversionRate => ControlRole::ConversionRateField,
                    ValueField::NokPrice => ControlRole::NokPriceField,
                });
                SubmitOutcome::Blocked(block)
            }
        }
    }

    fn set_visible<P: FormPage>(
        &self,
        page: &mut P,
        role: ControlRole,
        visible: bool,
    ) {
        // No matching container means visibility toggling is a no-op for
        // this control.
        if let Some(container) = self.resolver.resolve(page, role) {
            page.set_container_visible(container, visible);
        }
    }
}
