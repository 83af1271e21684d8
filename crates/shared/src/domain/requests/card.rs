use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCardRequest {
    #[validate(length(min = 1, message = "Card id is required"))]
    pub card_id: String,

    #[validate(length(min = 1, message = "Card number is required"))]
    pub card_number: String,

    #[validate(length(min = 1, message = "CVV is required"))]
    pub cvv: String,

    /// Card type code, e.g. `001` for VISA.
    #[validate(length(min = 1, message = "Card type is required"))]
    pub card_type: String,

    #[validate(length(min = 1, message = "Expiry month is required"))]
    pub exp_month: String,

    #[validate(length(min = 1, message = "Expiry year is required"))]
    pub exp_year: String,

    #[validate(length(min = 1, message = "Customer id is required"))]
    pub customer_id: String,

    #[validate(length(min = 1, message = "Card company is required"))]
    pub card_company: String,

    #[validate(length(min = 1, message = "Card name is required"))]
    pub card_name: String,
}

/// Status change for the card addressed by the path key. `card_number`,
/// `cvv` and `customer_id` are compared against the stored card, never
/// validated up front.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCardStatusRequest {
    pub card_number: String,

    pub cvv: String,

    pub customer_id: String,

    /// Target status name, `ACTIVE` or `INACTIVE`.
    #[validate(length(min = 1, message = "Card status is required"))]
    pub card_status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateCardRequest {
        CreateCardRequest {
            card_id: "942844931049980509".into(),
            card_number: "5541710500064352".into(),
            cvv: "999".into(),
            card_type: "001".into(),
            exp_month: "12".into(),
            exp_year: "2020".into(),
            customer_id: "123456789".into(),
            card_company: "SCB".into(),
            card_name: "SIRIMONGKOL PANWA".into(),
        }
    }

    #[test]
    fn accepts_well_formed_create_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn create_request_only_checks_presence() {
        let req = CreateCardRequest {
            card_number: "5541-7105".into(),
            cvv: "99".into(),
            exp_month: "1".into(),
            exp_year: "20".into(),
            ..request()
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn rejects_empty_create_fields() {
        let req = CreateCardRequest {
            cvv: String::new(),
            exp_month: String::new(),
            ..request()
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 2);
        assert!(fields.contains_key("cvv"));
        assert!(fields.contains_key("exp_month"));
    }

    #[test]
    fn update_request_leaves_credentials_to_the_lookup() {
        let req = UpdateCardStatusRequest {
            card_number: String::new(),
            cvv: String::new(),
            customer_id: String::new(),
            card_status: "ACTIVE".into(),
        };
        assert!(req.validate().is_ok());

        let req = UpdateCardStatusRequest {
            card_status: String::new(),
            ..req
        };
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 1);
        assert!(errors.field_errors().contains_key("card_status"));
    }
}
