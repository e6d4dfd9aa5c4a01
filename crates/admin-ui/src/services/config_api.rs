//! Federation configuration API service
//!
//! Reads the server configuration document and submits single-field updates
//! to the federation section. Updates are never batched: one control change
//! maps to one write carrying exactly one field, as a single-key JSON object
//! (`{"isPrivate": true}`). Text fields are validated client-side before a
//! request is issued; an empty required value never reaches the wire.

use crate::models::config::{FederationField, FieldValue, ServerConfig};
use crate::models::error::{AdminApiError, AdminResult};
use crate::services::api_client::get_api_client;

/// Endpoint serving the full server configuration document
pub const SERVER_CONFIG_PATH: &str = "/api/admin/serverconfig";
/// Endpoint accepting single-field federation configuration updates
pub const FEDERATION_CONFIG_PATH: &str = "/api/admin/config/federation";

/// Federation configuration service
pub struct FederationConfigApi;

impl FederationConfigApi {
    /// Fetch the server configuration. The caller extracts the federation
    /// section and injects it into the settings screen.
    pub async fn server_config() -> AdminResult<ServerConfig> {
        get_api_client()?.get_json(SERVER_CONFIG_PATH).await
    }

    /// Validate a field value before submission.
    ///
    /// Text fields must be non-empty after trimming; boolean fields carry no
    /// constraint. A value whose kind does not match the field is a
    /// validation error as well.
    pub async fn validate_field(field: FederationField, value: &FieldValue) -> AdminResult<()> {
        match (field.is_text(), value) {
            (true, FieldValue::Text(text)) => {
                if text.trim().is_empty() {
                    Err(AdminApiError::validation_field(
                        field.wire_name(),
                        "must not be empty",
                    ))
                } else {
                    Ok(())
                }
            }
            (false, FieldValue::Bool(_)) => Ok(()),
            _ => Err(AdminApiError::validation_field(
                field.wire_name(),
                "value kind does not match field",
            )),
        }
    }

    /// Build the update payload: a single-key object keyed by the field's
    /// wire name.
    pub fn update_body(field: FederationField, value: &FieldValue) -> serde_json::Value {
        serde_json::json!({ field.wire_name(): value })
    }

    /// Submit one field. Issues exactly one write carrying only that field.
    pub async fn update_field(field: FederationField, value: FieldValue) -> AdminResult<()> {
        Self::validate_field(field, &value).await?;

        let body = Self::update_body(field, &value);
        get_api_client()?
            .post_json(FEDERATION_CONFIG_PATH, &body)
            .await?;
        Ok(())
    }
}
