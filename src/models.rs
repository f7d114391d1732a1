use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: u32,
    pub name: String,
    pub genre: String,
    pub country: String,
    #[serde(default)]
    pub image_url: Option<String>,
    // Performance schedule
    #[serde(default)]
    pub schedule: Vec<String>,
    // Assigned stage
    #[serde(default)]
    pub stage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub capacity: u32,
    #[serde(default)]
    pub performances: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: u32,
    pub artist_id: u32,
    pub stage_id: u32,
    pub time_slot: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub quantity_available: u32,
}

impl Ticket {
    pub fn validate(&self) -> Result<(), ApiError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ApiError::Validation(
                "price must be a non-negative number".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Artist,
    Attendee,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub role: Role,
}

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub artist_id: u32,
    pub user_id: u32,
    pub rating: f64,
    #[serde(default)]
    pub feedback: Option<String>,
}

impl Rating {
    pub fn validate(&self) -> Result<(), ApiError> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(ApiError::Validation(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct News {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artist_optional_fields_default() {
        let artist: Artist = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Daft Punk",
            "genre": "electronic",
            "country": "FR"
        }))
        .unwrap();

        assert!(artist.schedule.is_empty());
        assert_eq!(artist.stage, None);
        assert_eq!(artist.image_url, None);
    }

    #[test]
    fn ticket_type_field_is_renamed() {
        let ticket: Ticket = serde_json::from_value(serde_json::json!({
            "id": 1, "type": "VIP", "price": 199.0, "quantity_available": 50
        }))
        .unwrap();
        assert_eq!(ticket.kind, "VIP");
        assert!(ticket.validate().is_ok());

        let json = serde_json::to_value(&ticket).unwrap();
        assert_eq!(json["type"], "VIP");
    }

    #[test]
    fn negative_ticket_price_is_invalid() {
        let ticket = Ticket {
            id: 1,
            kind: "GA".into(),
            price: -1.0,
            quantity_available: 10,
        };
        assert!(matches!(ticket.validate(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn rating_bounds() {
        let mut rating = Rating {
            artist_id: 1,
            user_id: 2,
            rating: 5.0,
            feedback: None,
        };
        assert!(rating.validate().is_ok());

        rating.rating = 0.5;
        assert!(rating.validate().is_err());

        rating.rating = f64::NAN;
        assert!(rating.validate().is_err());
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result = serde_json::from_value::<User>(serde_json::json!({
            "id": 1, "name": "x", "role": "Roadie"
        }));
        assert!(result.is_err());
    }
}
