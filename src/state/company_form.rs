#[cfg(test)]
#[path = "company_form_test.rs"]
mod company_form_test;

/// Channel tag for a single contact entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    #[default]
    Phone,
    Email,
    Fax,
    Telegram,
    Whatsapp,
    Other,
}

impl ContactKind {
    pub const ALL: [ContactKind; 6] = [
        ContactKind::Phone,
        ContactKind::Email,
        ContactKind::Fax,
        ContactKind::Telegram,
        ContactKind::Whatsapp,
        ContactKind::Other,
    ];

    /// Stable value used in `<select>` options and serialization.
    pub fn as_str(self) -> &'static str {
        match self {
            ContactKind::Phone => "phone",
            ContactKind::Email => "email",
            ContactKind::Fax => "fax",
            ContactKind::Telegram => "telegram",
            ContactKind::Whatsapp => "whatsapp",
            ContactKind::Other => "other",
        }
    }

    /// Inverse of [`ContactKind::as_str`]; unknown values fall back to
    /// the default.
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == value)
            .unwrap_or_default()
    }
}

/// One contact entry: a channel tag and its value.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Contact {
    pub kind: ContactKind,
    pub value: String,
}

/// A contact person with an ordered list of contact entries.
///
/// Order is display-relevant only. A fresh person always starts with one
/// empty contact so the form never renders an empty inner list.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactPerson {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub contacts: Vec<Contact>,
}

impl Default for ContactPerson {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            position: String::new(),
            contacts: vec![Contact::default()],
        }
    }
}

/// Legal form of a company.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyKind {
    #[default]
    Llc,
    JointStock,
    SoleTrader,
    Other,
}

impl CompanyKind {
    pub const ALL: [CompanyKind; 4] = [
        CompanyKind::Llc,
        CompanyKind::JointStock,
        CompanyKind::SoleTrader,
        CompanyKind::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CompanyKind::Llc => "llc",
            CompanyKind::JointStock => "joint_stock",
            CompanyKind::SoleTrader => "sole_trader",
            CompanyKind::Other => "other",
        }
    }

    /// Label shown in the company-type select.
    pub fn label(self) -> &'static str {
        match self {
            CompanyKind::Llc => "LLC",
            CompanyKind::JointStock => "Joint-stock company",
            CompanyKind::SoleTrader => "Sole trader",
            CompanyKind::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == value)
            .unwrap_or_default()
    }
}

/// The full company form draft. Lives only in client memory until the
/// save step runs; serialized as one object on submit.
///
/// Two ownership levels back the dynamic lists: the draft owns the
/// persons, each person exclusively owns its contacts. UI row operations
/// address rows by index, never by shared reference.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompanyDraft {
    pub name: String,
    pub legal_name: String,
    pub tax_number: String,
    pub registration_number: String,
    pub address: String,
    pub director: String,
    pub email: String,
    pub kind: CompanyKind,
    pub bank_name: String,
    pub bank_account: String,
    pub bank_code: String,
    pub contact_persons: Vec<ContactPerson>,
}

impl Default for CompanyDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            legal_name: String::new(),
            tax_number: String::new(),
            registration_number: String::new(),
            address: String::new(),
            director: String::new(),
            email: String::new(),
            kind: CompanyKind::default(),
            bank_name: String::new(),
            bank_account: String::new(),
            bank_code: String::new(),
            contact_persons: vec![ContactPerson::default()],
        }
    }
}

impl CompanyDraft {
    /// Append a fresh contact person (pre-seeded with one empty contact).
    pub fn add_person(&mut self) {
        self.contact_persons.push(ContactPerson::default());
    }

    /// Remove the person at `index`, keeping the rest in order.
    /// Out-of-range indices are ignored.
    pub fn remove_person(&mut self, index: usize) {
        if index < self.contact_persons.len() {
            self.contact_persons.remove(index);
        }
    }

    /// Append an empty contact to person `person`'s list only.
    pub fn add_contact(&mut self, person: usize) {
        if let Some(p) = self.contact_persons.get_mut(person) {
            p.contacts.push(Contact::default());
        }
    }

    /// Remove contact `contact` from person `person`'s list only.
    /// Out-of-range indices (either level) are ignored.
    pub fn remove_contact(&mut self, person: usize, contact: usize) {
        if let Some(p) = self.contact_persons.get_mut(person) {
            if contact < p.contacts.len() {
                p.contacts.remove(contact);
            }
        }
    }
}
