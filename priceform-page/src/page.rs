//! The seam between the controller and whatever renders the form.
//!
//! A browser host implements [`FormPage`] over the live document; tests and
//! prototypes use [`crate::memory::MemoryPage`]. The controller never
//! touches a DOM directly.

/// Roles of the form controls the enhancement operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlRole {
    CurrencySelector,
    ModeSelector,
    ConversionRateField,
    NokPriceField,
}

impl ControlRole {
    pub const ALL: [ControlRole; 4] = [
        ControlRole::CurrencySelector,
        ControlRole::ModeSelector,
        ControlRole::ConversionRateField,
        ControlRole::NokPriceField,
    ];

    /// CSS class a DOM host uses to locate the control in the rendered form.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::CurrencySelector => "currency-selector",
            Self::ModeSelector => "price-input-mode",
            Self::ConversionRateField => "conversion-rate-field",
            Self::NokPriceField => "nok-price-field",
        }
    }
}

/// Structural wrappers a control may be nested in. Show/hide operates on
/// the nearest such wrapper, not the control itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    FormGroup,
    TableRow,
    FieldWrapper,
}

impl ContainerKind {
    /// Selector a DOM host passes to its `closest()` lookup.
    pub fn selector(&self) -> &'static str {
        match self {
            Self::FormGroup => ".form-group",
            Self::TableRow => "tr",
            Self::FieldWrapper => ".field",
        }
    }
}

/// Opaque handle to a container element on the page. Stable for the page's
/// lifetime; the controller only passes it back to the same page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerId(pub usize);

/// Host-side view of the form. All reads are live: the controller holds no
/// copies of field state between events.
pub trait FormPage {
    fn has_control(&self, role: ControlRole) -> bool;

    /// Current text value of the control; empty string when blank or when
    /// the control is absent.
    fn value(&self, role: ControlRole) -> String;

    fn set_value(&mut self, role: ControlRole, value: &str);

    /// Nearest enclosing container of the given kind around the control.
    fn closest_container(&self, role: ControlRole, kind: ContainerKind) -> Option<ContainerId>;

    fn set_container_visible(&mut self, container: ContainerId, visible: bool);

    /// Moves input focus to the control.
    fn focus(&mut self, role: ControlRole);

    /// Surfaces a blocking message to the user (an alert dialog in a
    /// browser host).
    fn alert(&mut self, message: &str);

    /// Whether the control has an enclosing form element to intercept
    /// submits on.
    fn has_enclosing_form(&self, role: ControlRole) -> bool;
}

/// Fallback chain for finding the show/hide unit around a control: try a
/// form-group wrapper, then a table row, then a generic field wrapper, and
/// take the first match. Injectable so tests and hosts with different
/// markup can substitute their own order.
#[derive(Debug, Clone)]
pub struct ContainerResolver {
    order: Vec<ContainerKind>,
}

impl Default for ContainerResolver {
    fn default() -> Self {
        Self {
            order: vec![
                ContainerKind::FormGroup,
                ContainerKind::TableRow,
                ContainerKind::FieldWrapper,
            ],
        }
    }
}

impl ContainerResolver {
    pub fn new(order: Vec<ContainerKind>) -> Self {
        Self { order }
    }

    /// First container found along the chain, or `None` when the control
    /// sits in none of the known wrappers.
    pub fn resolve<P: FormPage + ?Sized>(&self, page: &P, role: ControlRole) -> Option<ContainerId> {
        self.order
            .iter()
            .find_map(|kind| page.closest_container(role, *kind))
    }
}
