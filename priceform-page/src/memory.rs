//! An in-memory [`FormPage`] for unit tests and headless hosts.

use std::collections::HashMap;

use crate::page::{ContainerId, ContainerKind, ControlRole, FormPage};

#[derive(Debug)]
struct MemoryContainer {
    role: ControlRole,
    kind: ContainerKind,
    visible: bool,
}

/// A page model with controls, their ancestor container chains, focus, and
/// recorded alerts. Container identity is stable for the page's lifetime.
#[derive(Debug)]
pub struct MemoryPage {
    values: HashMap<ControlRole, String>,
    containers: Vec<MemoryContainer>,
    focused: Option<ControlRole>,
    alerts: Vec<String>,
    in_form: bool,
}

impl MemoryPage {
    /// Empty page with no controls; add them with [`insert_control`].
    ///
    /// [`insert_control`]: MemoryPage::insert_control
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            containers: Vec::new(),
            focused: None,
            alerts: Vec::new(),
            in_form: true,
        }
    }

    /// Page shaped like the rendered admin form: all four controls, each
    /// inside its own form-group wrapper, inside a form element.
    pub fn with_standard_form() -> Self {
        let mut page = Self::new();
        for role in ControlRole::ALL {
            page.insert_control(role, &[ContainerKind::FormGroup]);
        }
        page
    }

    /// Adds a control with the given ancestor containers, outermost last.
    /// An empty slice models a control with no structural wrapper at all.
    pub fn insert_control(
        &mut self,
        role: ControlRole,
        ancestors: &[ContainerKind],
    ) {
        self.values.insert(role, String::new());
        for kind in ancestors {
            self.containers.push(MemoryContainer {
                role,
                kind: *kind,
                visible: true,
            });
        }
    }

    /// Models whether the controls sit inside a form element.
    pub fn set_in_form(
        &mut self,
        in_form: bool,
    ) {
        self.in_form = in_form;
    }

    /// Visibility of the control's container of the given kind, or `None`
    /// when the control has no such container.
    pub fn container_visible(
        &self,
        role: ControlRole,
        kind: ContainerKind,
    ) -> Option<bool> {
        self.containers
            .iter()
            .find(|c| c.role == role && c.kind == kind)
            .map(|c| c.visible)
    }

    pub fn focused(&self) -> Option<ControlRole> {
        self.focused
    }

    /// Blocking messages shown so far, oldest first.
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl FormPage for MemoryPage {
    fn has_control(
        &self,
        role: ControlRole,
    ) -> bool {
        self.values.contains_key(&role)
    }

    fn value(
        &self,
        role: ControlRole,
    ) -> String {
        self.values.get(&role).cloned().unwrap_or_default()
    }

    fn set_value(
        &mut self,
        role: ControlRole,
        value: &str,
    ) {
        if let Some(v) = self.values.get_mut(&role) {
            *v = value.to_string();
        }
    }

    fn closest_container(
        &self,
        role: ControlRole,
        kind: ContainerKind,
    ) -> Option<ContainerId> {
        self.containers
            .iter()
            .position(|c| c.role == role && c.kind == kind)
            .map(ContainerId)
    }

    fn set_container_visible(
        &mut self,
        container: ContainerId,
        visible: bool,
    ) {
        if let Some(c) = self.containers.get_mut(container.0) {
            c.visible = visible;
        }
    }

    fn focus(
        &mut self,
        role: ControlRole,
    ) {
        self.focused = Some(role);
    }

    fn alert(
        &mut self,
        message: &str,
    ) {
        self.alerts.push(message.to_string());
    }

    fn has_enclosing_form(
        &self,
        _role: ControlRole,
    ) -> bool {
        self.in_form
    }
}
