use serde::{Deserialize, Serialize};

/// Store-assigned row identity. Never reused once a customer is deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomerId(pub i64);

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted customer record. Immutable after creation; there is no update
/// path, only create and delete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub identification_number: String,
}

/// Externally visible customer shape: the four business fields without the
/// internal id. Doubles as the create-request payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub identification_number: String,
}

impl From<&Customer> for CustomerDetails {
    fn from(customer: &Customer) -> Self {
        Self {
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            phone_number: customer.phone_number.clone(),
            identification_number: customer.identification_number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Customer, CustomerDetails, CustomerId};

    #[test]
    fn details_copy_every_business_field_from_the_customer() {
        let customer = Customer {
            id: CustomerId(7),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone_number: "5551234567".to_string(),
            identification_number: "12345678901".to_string(),
        };

        let details = CustomerDetails::from(&customer);

        assert_eq!(details.first_name, customer.first_name);
        assert_eq!(details.last_name, customer.last_name);
        assert_eq!(details.phone_number, customer.phone_number);
        assert_eq!(details.identification_number, customer.identification_number);
    }

    #[test]
    fn details_serialize_with_camel_case_keys() {
        let details = CustomerDetails {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone_number: "5551234567".to_string(),
            identification_number: "12345678901".to_string(),
        };

        let json = serde_json::to_value(&details).expect("serialize");
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["identificationNumber"], "12345678901");
        assert!(json.get("id").is_none());
    }
}
