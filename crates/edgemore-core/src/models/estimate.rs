use serde::{Deserialize, Serialize};

/// A client-submitted renovation estimate inquiry.
///
/// Every field is free text and optional; an absent field is an empty
/// string. Serde names match the keys of the public estimate form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateRequest {
    // Client
    pub name: String,
    pub phone: String,
    pub email: String,
    pub contact_method: String,
    pub address: String,
    pub city: String,
    #[serde(rename = "zip")]
    pub zip_code: String,

    // Project
    pub space_type: String,
    #[serde(rename = "square_footage")]
    pub sqft: String,
    pub finish: String,
    pub condition: String,
    pub vision: String,
    pub timeline: String,
    pub budget: String,
    pub referral: String,
}

/// Form keys recognized by [`EstimateRequest::from_form_pairs`], in form order.
pub const FORM_KEYS: [&str; 15] = [
    "name",
    "phone",
    "email",
    "contact_method",
    "address",
    "city",
    "zip",
    "space_type",
    "square_footage",
    "finish",
    "condition",
    "vision",
    "timeline",
    "budget",
    "referral",
];

impl EstimateRequest {
    /// Build a request from decoded form key/value pairs.
    ///
    /// Unrecognized keys are ignored and values are taken verbatim. When a key
    /// repeats, the first occurrence wins.
    pub fn from_form_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut request = Self::default();
        let mut seen = [false; FORM_KEYS.len()];

        for (key, value) in pairs {
            let Some(idx) = FORM_KEYS.iter().position(|k| *k == key.as_ref()) else {
                continue;
            };
            if seen[idx] {
                continue;
            }
            seen[idx] = true;
            *request.field_mut(idx) = value.into();
        }

        request
    }

    /// The submitter's name, or `Unknown` when blank.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unknown"
        } else {
            &self.name
        }
    }

    fn field_mut(&mut self, idx: usize) -> &mut String {
        match idx {
            0 => &mut self.name,
            1 => &mut self.phone,
            2 => &mut self.email,
            3 => &mut self.contact_method,
            4 => &mut self.address,
            5 => &mut self.city,
            6 => &mut self.zip_code,
            7 => &mut self.space_type,
            8 => &mut self.sqft,
            9 => &mut self.finish,
            10 => &mut self.condition,
            11 => &mut self.vision,
            12 => &mut self.timeline,
            13 => &mut self.budget,
            _ => &mut self.referral,
        }
    }
}
