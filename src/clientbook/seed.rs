//! Sample records a session starts with, kept in the order the first release listed them.

use crate::model::{Client, ClientId, Status};
use chrono::NaiveDate;

pub fn sample_clients() -> Vec<Client> {
    vec![
        Client {
            id: ClientId(1),
            name: "Alisher Karimov".to_string(),
            phone: "+998901234567".to_string(),
            email: Some("alisher@example.com".to_string()),
            status: Status::Active,
            notes: Some("Important client".to_string()),
            date: ymd(2024, 11, 15),
        },
        Client {
            id: ClientId(2),
            name: "Dilshod Toshmatov".to_string(),
            phone: "+998907654321".to_string(),
            email: Some("dilshod@example.com".to_string()),
            status: Status::New,
            notes: None,
            date: ymd(2024, 11, 18),
        },
    ]
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
