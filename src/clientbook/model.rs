use crate::error::{ClientError, Result};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub u64);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClientId {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_start_matches('#');
        trimmed
            .parse()
            .map(ClientId)
            .map_err(|_| ClientError::Parse(format!("Invalid client id: {}", s)))
    }
}

/// Lifecycle tag of a client. Any status may be replaced by any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    New,
    Active,
    Pending,
    Closed,
}

impl Status {
    pub const ALL: [Status; 4] = [Status::New, Status::Active, Status::Pending, Status::Closed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::New => "new",
            Status::Active => "active",
            Status::Pending => "pending",
            Status::Closed => "closed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == lower)
            .ok_or_else(|| {
                ClientError::Parse(format!(
                    "Unknown status '{}' (expected one of: new, active, pending, closed)",
                    s
                ))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub status: Status,
    pub notes: Option<String>,
    // Creation date only; edits never touch it.
    pub date: NaiveDate,
}

impl Client {
    /// Builds a record from a validated draft, stamped with today's (UTC) date.
    pub fn from_draft(id: ClientId, draft: ClientDraft) -> Self {
        Self {
            id,
            name: draft.name,
            phone: draft.phone,
            email: draft.email,
            status: draft.status.unwrap_or_default(),
            notes: draft.notes,
            date: Utc::now().date_naive(),
        }
    }

    /// Replaces every mutable field. `id` and `date` stay as they are.
    pub fn apply(&mut self, draft: ClientDraft) {
        self.name = draft.name;
        self.phone = draft.phone;
        self.email = draft.email;
        self.status = draft.status.unwrap_or_default();
        self.notes = draft.notes;
    }

    /// Case-insensitive match on name and email, plain substring on phone.
    /// An empty term matches every client.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term_lower = term.to_lowercase();
        self.name.to_lowercase().contains(&term_lower)
            || self.phone.contains(term)
            || self
                .email
                .as_deref()
                .is_some_and(|email| email.to_lowercase().contains(&term_lower))
    }
}

/// Field values submitted by a form, not yet committed to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientDraft {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub status: Option<Status>,
    pub notes: Option<String>,
}

impl ClientDraft {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Checks the required fields and normalizes blank optional fields to `None`.
    pub fn validate(mut self) -> Result<Self> {
        if self.name.trim().is_empty() {
            return Err(ClientError::validation("name"));
        }
        if self.phone.trim().is_empty() {
            return Err(ClientError::validation("phone"));
        }
        self.email = self.email.filter(|e| !e.trim().is_empty());
        self.notes = self.notes.filter(|n| !n.trim().is_empty());
        Ok(self)
    }
}

impl From<&Client> for ClientDraft {
    fn from(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            phone: client.phone.clone(),
            email: client.email.clone(),
            status: Some(client.status),
            notes: client.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Client {
        Client::from_draft(
            ClientId(7),
            ClientDraft::new("Alisher Karimov", "+998901234567").with_email("Alisher@Example.com"),
        )
    }

    #[test]
    fn status_defaults_to_new() {
        let client = Client::from_draft(ClientId(1), ClientDraft::new("A", "1"));
        assert_eq!(client.status, Status::New);
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Active".parse::<Status>().unwrap(), Status::Active);
        assert_eq!(" closed ".parse::<Status>().unwrap(), Status::Closed);
        assert!("done".parse::<Status>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&Status::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }

    #[test]
    fn client_json_round_trip() {
        let client = crate::seed::sample_clients().remove(0);
        let json = serde_json::to_string(&client).unwrap();
        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"status\":\"active\""));
        assert!(json.contains("\"date\":\"2024-11-15\""));

        let back: Client = serde_json::from_str(&json).unwrap();
        assert_eq!(back, client);
    }

    #[test]
    fn client_id_parses_with_hash_prefix() {
        assert_eq!("#12".parse::<ClientId>().unwrap(), ClientId(12));
        assert_eq!("3".parse::<ClientId>().unwrap(), ClientId(3));
        assert!("abc".parse::<ClientId>().is_err());
    }

    #[test]
    fn validate_rejects_blank_required_fields() {
        let err = ClientDraft::new("   ", "+1").validate().unwrap_err();
        assert!(matches!(err, ClientError::Validation { field: "name" }));

        let err = ClientDraft::new("Name", "").validate().unwrap_err();
        assert!(matches!(err, ClientError::Validation { field: "phone" }));
    }

    #[test]
    fn validate_drops_blank_optional_fields() {
        let draft = ClientDraft::new("Name", "+1")
            .with_email("  ")
            .with_notes("")
            .validate()
            .unwrap();
        assert_eq!(draft.email, None);
        assert_eq!(draft.notes, None);
    }

    #[test]
    fn apply_keeps_id_and_date() {
        let mut client = sample();
        let date = client.date;
        client.apply(ClientDraft::new("Other", "+2").with_status(Status::Closed));

        assert_eq!(client.id, ClientId(7));
        assert_eq!(client.date, date);
        assert_eq!(client.name, "Other");
        assert_eq!(client.email, None);
        assert_eq!(client.status, Status::Closed);
    }

    #[test]
    fn matches_name_and_email_ignoring_case() {
        let client = sample();
        assert!(client.matches("karim"));
        assert!(client.matches("EXAMPLE.COM"));
        assert!(client.matches("998901"));
        assert!(client.matches(""));
        assert!(!client.matches("dilshod"));
    }

    #[test]
    fn matches_without_email() {
        let client = Client::from_draft(ClientId(1), ClientDraft::new("Bob", "555"));
        assert!(!client.matches("example"));
        assert!(client.matches("55"));
    }

    #[test]
    fn draft_from_client_prefills_every_field() {
        let client = sample();
        let draft = ClientDraft::from(&client);
        assert_eq!(draft.name, client.name);
        assert_eq!(draft.phone, client.phone);
        assert_eq!(draft.email, client.email);
        assert_eq!(draft.status, Some(Status::New));
    }
}
