//! Field descriptors for the contact form

use serde_json::Value;

/// Input variant used to render and edit a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text input
    Text,
    /// Multi-line text input
    TextArea,
    /// Single-choice option group
    Choice,
}

/// Value the CRM expects for a selected option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteValue {
    Text(&'static str),
    Number(u64),
}

impl RemoteValue {
    /// JSON representation sent in the submission payload
    pub fn to_json(self) -> Value {
        match self {
            RemoteValue::Text(s) => Value::String(s.to_string()),
            RemoteValue::Number(n) => Value::from(n),
        }
    }
}

impl std::fmt::Display for RemoteValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteValue::Text(s) => f.write_str(s),
            RemoteValue::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One selectable option of a choice field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: Option<&'static str>,
    pub label: Option<&'static str>,
    pub remote_value: RemoteValue,
}

impl ChoiceOption {
    const fn valued(value: &'static str, remote_value: RemoteValue) -> Self {
        Self {
            value: Some(value),
            label: None,
            remote_value,
        }
    }

    const fn labelled(label: &'static str, remote_value: RemoteValue) -> Self {
        Self {
            value: None,
            label: Some(label),
            remote_value,
        }
    }

    /// Value stored in form state when this option is selected
    pub fn key(&self) -> String {
        match self.value {
            Some(v) => v.to_string(),
            None => self.remote_value.to_string(),
        }
    }

    /// Text shown on the option button
    pub fn display(&self) -> String {
        self.label
            .or(self.value)
            .map(str::to_string)
            .unwrap_or_else(|| self.key())
    }
}

/// Static description of one form field
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    /// Property name on the CRM side
    pub remote_field: &'static str,
    pub options: &'static [ChoiceOption],
    pub input_type: &'static str,
}

impl FieldDescriptor {
    const fn text(name: &'static str, placeholder: &'static str, remote_field: &'static str) -> Self {
        Self {
            name,
            placeholder,
            kind: FieldKind::Text,
            remote_field,
            options: &[],
            input_type: "text",
        }
    }

    const fn choice(
        name: &'static str,
        placeholder: &'static str,
        remote_field: &'static str,
        options: &'static [ChoiceOption],
    ) -> Self {
        Self {
            name,
            placeholder,
            kind: FieldKind::Choice,
            remote_field,
            options,
            input_type: "radio",
        }
    }

    pub fn is_choice(&self) -> bool {
        self.kind == FieldKind::Choice
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::TextArea
    }

    /// Find the option whose form-state key equals `key`
    pub fn option_by_key(&self, key: &str) -> Option<&ChoiceOption> {
        self.options.iter().find(|o| o.key() == key)
    }

    /// Position of the option whose key equals `key`
    pub fn option_index(&self, key: &str) -> Option<usize> {
        self.options.iter().position(|o| o.key() == key)
    }

    /// Default value used when the field is revealed without a value
    pub fn first_option_key(&self) -> Option<String> {
        self.options.first().map(ChoiceOption::key)
    }
}

const ROLE_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::valued("Product Management", RemoteValue::Text("product")),
    ChoiceOption::valued("Engineering", RemoteValue::Text("engineering")),
    ChoiceOption::valued("Executive", RemoteValue::Text("leadership")),
    ChoiceOption::valued("Marketing", RemoteValue::Text("marketing")),
    ChoiceOption::valued("Sales", RemoteValue::Text("sales")),
    ChoiceOption::valued("Other", RemoteValue::Text("other")),
];

const MAU_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::labelled("Under 10k/mo", RemoteValue::Number(10_000)),
    ChoiceOption::labelled("10k-50k/mo", RemoteValue::Number(50_000)),
    ChoiceOption::labelled("50k-100k/mo", RemoteValue::Number(100_000)),
    ChoiceOption::labelled("100k-500k/mo", RemoteValue::Number(500_000)),
    ChoiceOption::labelled("500k-1m/mo", RemoteValue::Number(100_000_000)),
    ChoiceOption::labelled("More than 1m/mo", RemoteValue::Number(100_000_000_000)),
];

const EVENT_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::labelled("Under 1m/mo", RemoteValue::Number(1_000_000)),
    ChoiceOption::labelled("1m-2m/mo", RemoteValue::Number(2_000_000)),
    ChoiceOption::labelled("2m-10m/mo", RemoteValue::Number(10_000_000)),
    ChoiceOption::labelled("10m-100m/mo", RemoteValue::Number(100_000_000)),
    ChoiceOption::labelled("More than 100m/mo", RemoteValue::Number(100_000_000_000)),
    ChoiceOption::labelled("I'm not sure!", RemoteValue::Number(0)),
];

const PRODUCT_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::valued("PostHog Cloud", RemoteValue::Text("PostHog Cloud")),
    ChoiceOption::valued(
        "PostHog Cloud Enterprise",
        RemoteValue::Text("PostHog Cloud Enterprise"),
    ),
    ChoiceOption::valued(
        "PostHog Open Source",
        RemoteValue::Text("PostHog Free (Ideal for start-ups)"),
    ),
];

const DEMO_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::valued("Yes", RemoteValue::Text("Yes")),
    ChoiceOption::valued("No", RemoteValue::Text("No")),
];

/// Every field of the contact form, in display order
pub const CONTACT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::text("firstName", "First name", "firstname"),
    FieldDescriptor::text("lastName", "Last name", "lastname"),
    FieldDescriptor {
        input_type: "email",
        ..FieldDescriptor::text("workEmail", "Work email", "email")
    },
    FieldDescriptor::text("companyName", "Company name", "company"),
    FieldDescriptor::choice("role", "Role", "icp___role_list", ROLE_OPTIONS),
    FieldDescriptor::choice(
        "monthlyActiveUsers",
        "How many monthly active users do you have?",
        "maus",
        MAU_OPTIONS,
    ),
    FieldDescriptor::choice(
        "monthlyEvents",
        "How many events do you want to track (monthly)?",
        "monthly_events",
        EVENT_OPTIONS,
    ),
    FieldDescriptor::choice(
        "product",
        "Which product are you interested in?",
        "which_product_are_you_interested_in_",
        PRODUCT_OPTIONS,
    ),
    FieldDescriptor::choice(
        "personalizedDemo",
        "Would you like a personalized demo of PostHog?",
        "personalizedDemo",
        DEMO_OPTIONS,
    ),
    FieldDescriptor {
        name: "details",
        placeholder: "Details",
        kind: FieldKind::TextArea,
        remote_field: "message",
        options: &[],
        input_type: "text",
    },
];

/// Look up a descriptor by field name
pub fn descriptor(name: &str) -> Option<&'static FieldDescriptor> {
    CONTACT_FIELDS.iter().find(|f| f.name == name)
}

/// Position of a field in display order
pub fn index_of(name: &str) -> Option<usize> {
    CONTACT_FIELDS.iter().position(|f| f.name == name)
}
