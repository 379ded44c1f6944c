use serde::{Deserialize, Serialize};

/// A submitted contact/inquiry record from a form.
///
/// Supplied by the hosting application's form handling; immutable input for
/// the notification formatter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    /// Full name of the contact.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Phone number, when the form collected one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Company the contact represents.
    pub company: String,
    /// Free-form message entered in the form.
    pub message: String,
}

/// A categorization judgment attached to a `Lead` before notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Qualification {
    /// Category the lead was sorted into.
    pub category: String,
    /// Why the categorizer picked that category.
    pub reason: String,
}
