use serde::{Deserialize, Serialize};

/// The closed set of advisor personas a client can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Accountant,
    Lawyer,
    Consultant,
}

impl Role {
    /// System instruction sent to the generation provider for this role.
    ///
    /// The match is exhaustive, so a role cannot be added without its
    /// instruction.
    pub fn instruction(self) -> &'static str {
        match self {
            Role::Accountant => {
                "You are an expert accountant and tax advisor specializing in Greek law and \
                 business practices. Your responses should reference specific Greek tax codes \
                 (e.g., Ν. 4172/2013 for income tax), regulations, and accounting standards. \
                 Provide clear, practical advice based on current Greek legislation. \
                 Keep responses concise (2-3 sentences) and professional."
            }
            Role::Lawyer => {
                "You are an expert lawyer specializing in Greek civil, commercial, and \
                 administrative law. Your responses should reference specific articles from the \
                 Greek Civil Code (Αστικός Κώδικας) and other relevant legislation. \
                 Provide clear legal guidance based on Greek law. \
                 Keep responses concise (2-3 sentences) and professional."
            }
            Role::Consultant => {
                "You are an expert business consultant with deep knowledge of the Greek business \
                 environment. Provide strategic advice on business operations, market expansion, \
                 and organizational efficiency. Reference proven methodologies and frameworks. \
                 Keep responses concise (2-3 sentences) and professional."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Role;

    #[test]
    fn roles_deserialize_from_lowercase_keys() {
        let role: Role = serde_json::from_str(r#""accountant""#).unwrap();
        assert_eq!(role, Role::Accountant);

        assert!(serde_json::from_str::<Role>(r#""plumber""#).is_err());
        assert!(serde_json::from_str::<Role>(r#""Accountant""#).is_err());
    }

    #[test]
    fn every_role_has_an_instruction() {
        for role in [Role::Accountant, Role::Lawyer, Role::Consultant] {
            assert!(!role.instruction().trim().is_empty());
        }
    }
}
