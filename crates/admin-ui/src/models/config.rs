//! Federation configuration models
//!
//! The server owns the federation configuration; the admin UI holds a
//! read/write mirror of the federation section and submits one field at a
//! time. [`FederationField`] enumerates the updatable fields together with
//! their wire names so an update payload can be built without stringly-typed
//! plumbing, and [`SettingsForm`] is the explicit two-state union the
//! settings page renders from.

use serde::{Deserialize, Serialize};

/// Federation section of the server configuration
///
/// Wire format is camelCase, matching what the configuration API emits and
/// accepts (`isPrivate`, `goLiveMessage`, `showEngagement`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FederationConfig {
    /// Whether federation is enabled at all
    pub enabled: bool,
    /// Private mode: follow requests require manual approval
    pub is_private: bool,
    /// Local account name remote users follow
    pub username: String,
    /// Templated text announced to followers when the stream starts
    pub go_live_message: String,
    /// Whether remote engagement (follows, likes, reposts) is shown in chat
    pub show_engagement: bool,
}

/// Full server configuration payload
///
/// Only the federation section is consumed by this crate; the rest of the
/// document is ignored during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub federation: FederationConfig,
}

/// One updatable field of [`FederationConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FederationField {
    Enabled,
    IsPrivate,
    Username,
    GoLiveMessage,
    ShowEngagement,
}

impl FederationField {
    /// All updatable fields, in form order
    pub const ALL: [FederationField; 5] = [
        FederationField::Enabled,
        FederationField::IsPrivate,
        FederationField::Username,
        FederationField::GoLiveMessage,
        FederationField::ShowEngagement,
    ];

    /// Key used in the update payload and in API responses
    pub fn wire_name(&self) -> &'static str {
        match self {
            FederationField::Enabled => "enabled",
            FederationField::IsPrivate => "isPrivate",
            FederationField::Username => "username",
            FederationField::GoLiveMessage => "goLiveMessage",
            FederationField::ShowEngagement => "showEngagement",
        }
    }

    /// Label shown next to the form control
    pub fn label(&self) -> &'static str {
        match self {
            FederationField::Enabled => "Enable federation",
            FederationField::IsPrivate => "Private mode",
            FederationField::Username => "Username",
            FederationField::GoLiveMessage => "Go live message",
            FederationField::ShowEngagement => "Show engagement",
        }
    }

    /// Text fields commit on explicit submit and must be non-empty;
    /// boolean fields commit immediately on change.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            FederationField::Username | FederationField::GoLiveMessage
        )
    }
}

/// Value submitted for a single field update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// Local editable state of the settings form
///
/// The view is only defined for `Ready`; `Uninitialized` renders nothing.
/// The form re-enters `Ready` with a fresh mirror whenever the upstream
/// configuration snapshot changes, discarding unsaved local edits.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SettingsForm {
    #[default]
    Uninitialized,
    Ready(FederationConfig),
}

impl SettingsForm {
    /// Mirror an upstream snapshot into editable state
    pub fn from_snapshot(snapshot: Option<FederationConfig>) -> Self {
        match snapshot {
            Some(config) => SettingsForm::Ready(config),
            None => SettingsForm::Uninitialized,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, SettingsForm::Ready(_))
    }

    pub fn config(&self) -> Option<&FederationConfig> {
        match self {
            SettingsForm::Ready(config) => Some(config),
            SettingsForm::Uninitialized => None,
        }
    }

    /// Merge a single field value into the mirror, leaving every other field
    /// untouched. Returns `false` when the form is uninitialized or the
    /// value kind does not match the field.
    pub fn set_field(&mut self, field: FederationField, value: FieldValue) -> bool {
        let SettingsForm::Ready(config) = self else {
            return false;
        };

        match (field, value) {
            (FederationField::Enabled, FieldValue::Bool(value)) => config.enabled = value,
            (FederationField::IsPrivate, FieldValue::Bool(value)) => config.is_private = value,
            (FederationField::Username, FieldValue::Text(value)) => config.username = value,
            (FederationField::GoLiveMessage, FieldValue::Text(value)) => {
                config.go_live_message = value
            }
            (FederationField::ShowEngagement, FieldValue::Bool(value)) => {
                config.show_engagement = value
            }
            _ => return false,
        }
        true
    }

    /// Current value of a field in the mirror
    pub fn value_of(&self, field: FederationField) -> Option<FieldValue> {
        let config = self.config()?;
        Some(match field {
            FederationField::Enabled => FieldValue::Bool(config.enabled),
            FederationField::IsPrivate => FieldValue::Bool(config.is_private),
            FederationField::Username => FieldValue::Text(config.username.clone()),
            FederationField::GoLiveMessage => FieldValue::Text(config.go_live_message.clone()),
            FederationField::ShowEngagement => FieldValue::Bool(config.show_engagement),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> FederationConfig {
        FederationConfig {
            enabled: true,
            is_private: false,
            username: "streamer".to_string(),
            go_live_message: "We are live!".to_string(),
            show_engagement: true,
        }
    }

    #[test]
    fn test_config_wire_format_is_camel_case() {
        let config = sample_config();
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["enabled"], serde_json::json!(true));
        assert_eq!(json["isPrivate"], serde_json::json!(false));
        assert_eq!(json["username"], serde_json::json!("streamer"));
        assert_eq!(json["goLiveMessage"], serde_json::json!("We are live!"));
        assert_eq!(json["showEngagement"], serde_json::json!(true));
    }

    #[test]
    fn test_server_config_ignores_unknown_sections() {
        let raw = serde_json::json!({
            "instanceDetails": { "name": "somewhere" },
            "federation": {
                "enabled": true,
                "isPrivate": true,
                "username": "live",
                "goLiveMessage": "started",
                "showEngagement": false
            }
        });

        let parsed: ServerConfig = serde_json::from_value(raw).unwrap();
        assert!(parsed.federation.enabled);
        assert!(parsed.federation.is_private);
        assert_eq!(parsed.federation.username, "live");
    }

    #[test]
    fn test_form_mirrors_snapshot_exactly() {
        let config = sample_config();
        let form = SettingsForm::from_snapshot(Some(config.clone()));

        assert!(form.is_ready());
        assert_eq!(form.config(), Some(&config));
        assert_eq!(
            form.value_of(FederationField::Username),
            Some(FieldValue::Text("streamer".to_string()))
        );
        assert_eq!(
            form.value_of(FederationField::Enabled),
            Some(FieldValue::Bool(true))
        );
    }

    #[test]
    fn test_missing_snapshot_stays_uninitialized() {
        let form = SettingsForm::from_snapshot(None);
        assert!(!form.is_ready());
        assert_eq!(form.config(), None);
        assert_eq!(form.value_of(FederationField::Username), None);
    }

    #[test]
    fn test_set_field_touches_only_target_field() {
        let mut form = SettingsForm::from_snapshot(Some(sample_config()));

        assert!(form.set_field(
            FederationField::GoLiveMessage,
            FieldValue::Text("New stream up".to_string())
        ));

        let config = form.config().unwrap();
        assert_eq!(config.go_live_message, "New stream up");
        // Everything else is unchanged.
        assert!(config.enabled);
        assert!(!config.is_private);
        assert_eq!(config.username, "streamer");
        assert!(config.show_engagement);
    }

    #[test]
    fn test_set_field_rejects_kind_mismatch() {
        let mut form = SettingsForm::from_snapshot(Some(sample_config()));

        assert!(!form.set_field(FederationField::Enabled, FieldValue::Text("yes".into())));
        assert!(!form.set_field(FederationField::Username, FieldValue::Bool(false)));
        assert_eq!(form.config(), Some(&sample_config()));
    }

    #[test]
    fn test_set_field_is_noop_when_uninitialized() {
        let mut form = SettingsForm::Uninitialized;
        assert!(!form.set_field(FederationField::Enabled, FieldValue::Bool(true)));
        assert_eq!(form, SettingsForm::Uninitialized);
    }

    #[test]
    fn test_field_metadata() {
        assert_eq!(FederationField::IsPrivate.wire_name(), "isPrivate");
        assert_eq!(FederationField::GoLiveMessage.wire_name(), "goLiveMessage");
        assert!(FederationField::Username.is_text());
        assert!(FederationField::GoLiveMessage.is_text());
        assert!(!FederationField::Enabled.is_text());
        assert!(!FederationField::IsPrivate.is_text());
        assert!(!FederationField::ShowEngagement.is_text());

        // Wire names are unique.
        let mut names: Vec<_> = FederationField::ALL.iter().map(|f| f.wire_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FederationField::ALL.len());
    }

    #[test]
    fn test_field_value_serializes_plainly() {
        assert_eq!(
            serde_json::to_value(FieldValue::Bool(true)).unwrap(),
            serde_json::json!(true)
        );
        assert_eq!(
            serde_json::to_value(FieldValue::Text("hi".into())).unwrap(),
            serde_json::json!("hi")
        );
    }
}
