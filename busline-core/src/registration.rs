use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use crate::{CoreError, CoreResult};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

/// Bus owner sign-up form. Only the first three fields are mandatory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusRegistration {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub contact_number: String,
    pub email: Option<String>,
    pub bus_number: Option<String>,
    pub total_seats: Option<u32>,
    pub route: Option<String>, // Free text, e.g. "Dhaka - Chittagong"
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationReceipt {
    pub registration_id: Uuid,
    pub company_name: String,
    pub registered_at: DateTime<Utc>,
}

/// Check the form and hand back a receipt. Nothing is stored.
pub fn validate_registration(
    request: &BusRegistration,
    allowed_seat_counts: &[u32],
) -> CoreResult<RegistrationReceipt> {
    let required = [&request.company_name, &request.owner_name, &request.contact_number];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(CoreError::ValidationError(REQUIRED_FIELDS_MESSAGE.to_string()));
    }

    if let Some(seats) = request.total_seats {
        if !allowed_seat_counts.contains(&seats) {
            return Err(CoreError::ValidationError(format!(
                "Unsupported seat count {}: expected one of {:?}",
                seats, allowed_seat_counts
            )));
        }
    }

    tracing::info!(
        company = %request.company_name.trim(),
        bus_number = request.bus_number.as_deref().unwrap_or("-"),
        "Bus registration accepted"
    );

    Ok(RegistrationReceipt {
        registration_id: Uuid::new_v4(),
        company_name: request.company_name.trim().to_string(),
        registered_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEAT_OPTIONS: [u32; 3] = [30, 40, 50];

    fn filled() -> BusRegistration {
        BusRegistration {
            company_name: "Green Line".to_string(),
            owner_name: "Rahim".to_string(),
            contact_number: "01711-123456".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_fields_only() {
        let receipt = validate_registration(&filled(), &SEAT_OPTIONS).unwrap();
        assert_eq!(receipt.company_name, "Green Line");
    }

    #[test]
    fn test_missing_required_field() {
        for blank in 0..3 {
            let mut request = filled();
            match blank {
                0 => request.company_name = String::new(),
                1 => request.owner_name = "  ".to_string(),
                _ => request.contact_number = String::new(),
            }
            let err = validate_registration(&request, &SEAT_OPTIONS).unwrap_err();
            assert!(matches!(err, CoreError::ValidationError(ref msg) if msg == REQUIRED_FIELDS_MESSAGE));
        }
    }

    #[test]
    fn test_seat_count_must_be_offered() {
        let mut request = filled();
        request.total_seats = Some(40);
        assert!(validate_registration(&request, &SEAT_OPTIONS).is_ok());

        request.total_seats = Some(45);
        assert!(validate_registration(&request, &SEAT_OPTIONS).is_err());
    }

    #[test]
    fn test_deserialize_partial_form() {
        let json = r#"{ "company_name": "Ena Transport", "email": "ena@example.com" }"#;
        let request: BusRegistration = serde_json::from_str(json).unwrap();
        assert!(request.owner_name.is_empty());
        assert!(validate_registration(&request, &SEAT_OPTIONS).is_err());
    }
}
