//! Form descriptors.
//!
//! Three descriptor kinds mirror the host engine's form classes: action
//! (a titled list of buttons), message (a fixed two-button confirmation),
//! and modal (a sequence of input controls). Each carries a per-instance
//! `force` flag, false by default; when set, the presenter retries a
//! busy player interface instead of returning the busy outcome.

use serde::{Deserialize, Serialize};

/// A button on an action form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormButton {
    pub label: String,
    /// Icon resource path, resolved by the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Action form: a title, optional body text, and an ordered button list.
///
/// The submitted payload is the index of the pressed button.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionForm {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub buttons: Vec<FormButton>,
    /// Retry while the player's interface is busy instead of returning
    /// the busy outcome.
    #[serde(default)]
    pub force: bool,
}

impl ActionForm {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: None,
            buttons: Vec::new(),
            force: false,
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn button(mut self, label: impl Into<String>) -> Self {
        self.buttons.push(FormButton {
            label: label.into(),
            icon: None,
        });
        self
    }

    pub fn button_with_icon(mut self, label: impl Into<String>, icon: impl Into<String>) -> Self {
        self.buttons.push(FormButton {
            label: label.into(),
            icon: Some(icon.into()),
        });
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// Message form: a confirmation with exactly two choices.
///
/// The submitted payload is 0 for `button1`, 1 for `button2`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageForm {
    pub title: String,
    pub body: String,
    pub button1: String,
    pub button2: String,
    /// Retry while the player's interface is busy instead of returning
    /// the busy outcome.
    #[serde(default)]
    pub force: bool,
}

impl MessageForm {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        button1: impl Into<String>,
        button2: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            button1: button1.into(),
            button2: button2.into(),
            force: false,
        }
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// A single input control on a modal form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModalElement {
    Dropdown {
        label: String,
        options: Vec<String>,
        #[serde(default)]
        default_index: u32,
    },
    Slider {
        label: String,
        min: f64,
        max: f64,
        step: f64,
        #[serde(default)]
        default_value: f64,
    },
    TextField {
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        default_text: Option<String>,
    },
    Toggle {
        label: String,
        #[serde(default)]
        default_value: bool,
    },
}

/// Modal form: an ordered sequence of input controls behind one submit.
///
/// The submitted payload carries one value per element, in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModalForm {
    pub title: String,
    pub elements: Vec<ModalElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_label: Option<String>,
    /// Retry while the player's interface is busy instead of returning
    /// the busy outcome.
    #[serde(default)]
    pub force: bool,
}

impl ModalForm {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            elements: Vec::new(),
            submit_label: None,
            force: false,
        }
    }

    pub fn dropdown(mut self, label: impl Into<String>, options: Vec<String>) -> Self {
        self.elements.push(ModalElement::Dropdown {
            label: label.into(),
            options,
            default_index: 0,
        });
        self
    }

    pub fn slider(mut self, label: impl Into<String>, min: f64, max: f64, step: f64) -> Self {
        self.elements.push(ModalElement::Slider {
            label: label.into(),
            min,
            max,
            step,
            default_value: min,
        });
        self
    }

    pub fn text_field(mut self, label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        self.elements.push(ModalElement::TextField {
            label: label.into(),
            placeholder: Some(placeholder.into()),
            default_text: None,
        });
        self
    }

    pub fn toggle(mut self, label: impl Into<String>, default_value: bool) -> Self {
        self.elements.push(ModalElement::Toggle {
            label: label.into(),
            default_value,
        });
        self
    }

    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = Some(label.into());
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}
