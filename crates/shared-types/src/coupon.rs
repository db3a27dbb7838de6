use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A percent-off discount code managed by the admin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coupon {
    pub id: i64,
    pub code: String,
    pub discount_percent: u8,
    pub description: String,
    /// Last day the code is usable; `None` never expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<NaiveDate>,
}

impl Coupon {
    /// Whether the coupon can still be applied on `today`.
    pub fn is_valid_on(&self, today: NaiveDate) -> bool {
        self.expires_at.map(|until| today <= until).unwrap_or(true)
    }

    /// Apply the discount to `amount`.
    pub fn apply(&self, amount: f64) -> f64 {
        amount * (100 - self.discount_percent.min(100)) as f64 / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon(percent: u8, expires_at: Option<NaiveDate>) -> Coupon {
        Coupon {
            id: 1,
            code: "SMASH10".to_string(),
            discount_percent: percent,
            description: "Welcome discount".to_string(),
            expires_at,
        }
    }

    #[test]
    fn discount_is_percent_off() {
        assert_eq!(coupon(10, None).apply(200.0), 180.0);
        assert_eq!(coupon(100, None).apply(50.0), 0.0);
    }

    #[test]
    fn expiry_is_inclusive() {
        let until = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let c = coupon(10, Some(until));
        assert!(c.is_valid_on(until));
        assert!(!c.is_valid_on(until.succ_opt().unwrap()));
    }
}
