//! Emergency contact directory (static categories of phone numbers).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl EmergencyContact {
    pub fn dial_uri(&self) -> Option<String> {
        let number: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        if number.is_empty() {
            None
        } else {
            Some(format!("tel:{number}"))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCategory {
    pub title: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub contacts: Vec<EmergencyContact>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dial_uri_keeps_std_code_dash() {
        let c = EmergencyContact {
            name: "KMCH Blood Bank".into(),
            phone: "0422-4323800".into(),
            icon: None,
        };
        assert_eq!(c.dial_uri().as_deref(), Some("tel:0422-4323800"));
    }

    #[test]
    fn blank_phone_has_no_uri() {
        let c = EmergencyContact { name: "TBD".into(), phone: " ".into(), icon: None };
        assert_eq!(c.dial_uri(), None);
    }
}
